// Facade for API module; delegates to submodules under src/api/

use crate::adapters::{HandleDirectory, RepoTree};
use crate::logging::audit::{AuditCtx, AuditMode};
use crate::logging::{ts_for_mode, AuditSink, FactsEmitter};
use crate::pattern::RuleSet;
use crate::policy::Policy;
use crate::types::ids::ruleset_id;
use crate::types::{CodeOwners, CoverageReport, LintReport, Resolution, ReviewRequest};

mod builder;
mod coverage;
pub mod errors;
mod lint;
mod load;
mod resolve;

pub use builder::ApiBuilder;
pub use load::locate;

pub struct Ownerlint<E: FactsEmitter, A: AuditSink> {
    facts: E,
    audit: A,
    policy: Policy,
    directory: Option<Box<dyn HandleDirectory>>, // required when policy.owners.strict
    tree: Option<Box<dyn RepoTree>>,             // required for coverage
}

impl<E: FactsEmitter, A: AuditSink> Ownerlint<E, A> {
    pub fn new(facts: E, audit: A, policy: Policy) -> Self {
        Self {
            facts,
            audit,
            policy,
            directory: None,
            tree: None,
        }
    }

    pub fn with_handle_directory(mut self, directory: Box<dyn HandleDirectory>) -> Self {
        self.directory = Some(directory);
        self
    }

    pub fn with_repo_tree(mut self, tree: Box<dyn RepoTree>) -> Self {
        self.tree = Some(tree);
        self
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Find and load the CODEOWNERS file under a repository root.
    pub fn load(&self, root: &std::path::Path) -> Result<CodeOwners, errors::ApiError> {
        load::from_root(self, root)
    }

    pub fn load_file(&self, path: &std::path::Path) -> Result<CodeOwners, errors::ApiError> {
        load::from_file(self, path)
    }

    pub fn load_str(&self, text: &str) -> CodeOwners {
        load::from_str(self, text)
    }

    pub fn lint(&self, file: &CodeOwners) -> LintReport {
        lint::run(self, file)
    }

    /// Compile the rules of a file under the policy's precedence.
    pub fn compile(&self, file: &CodeOwners) -> RuleSet {
        RuleSet::compile(file, self.policy.precedence)
    }

    pub fn resolve(&self, file: &CodeOwners, path: &str) -> Result<Resolution, errors::ApiError> {
        resolve::one(self, file, path)
    }

    /// Owners whose review a change touching `changed` paths requires.
    pub fn review_request<I, S>(
        &self,
        file: &CodeOwners,
        changed: I,
    ) -> Result<ReviewRequest, errors::ApiError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        resolve::review(self, file, changed)
    }

    pub fn coverage(&self, file: &CodeOwners) -> Result<CoverageReport, errors::ApiError> {
        coverage::run(self, file)
    }

    pub(crate) fn audit_ctx(&self, file: &CodeOwners) -> AuditCtx<'_> {
        AuditCtx::new(
            &self.facts as &dyn FactsEmitter,
            ruleset_id(file).to_string(),
            ts_for_mode(self.policy.facts.redact),
            AuditMode {
                redact: self.policy.facts.redact,
                mask_emails: self.policy.facts.mask_emails,
            },
        )
    }
}
