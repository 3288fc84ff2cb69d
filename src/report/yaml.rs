/// Render a YAML sequence from a `LintReport` rows collection.
/// Keys appear in a fixed order and absent optional keys are omitted.
pub fn to_yaml(report: &crate::types::report::LintReport) -> String {
    use serde_json::Value as J;
    use serde_yaml::Value as Y;
    let keys = ["check", "severity", "line", "rule_id", "pattern", "owner", "message"];
    let mut items: Vec<Y> = Vec::new();
    for row in &report.rows {
        let row = serde_json::to_value(row).unwrap_or(J::Null);
        let mut map = serde_yaml::Mapping::new();
        for k in keys.iter() {
            let v = row.get(*k).cloned().unwrap_or(J::Null);
            if !v.is_null() {
                let y: Y = serde_yaml::to_value(v).unwrap_or(Y::Null);
                map.insert(Y::String((*k).to_string()), y);
            }
        }
        items.push(Y::Mapping(map));
    }
    serde_yaml::to_string(&Y::Sequence(items)).unwrap_or_else(|_| "[]\n".to_string())
}
