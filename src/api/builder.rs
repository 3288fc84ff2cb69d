use crate::adapters::{HandleDirectory, RepoTree};
use crate::logging::{AuditSink, FactsEmitter};
use crate::policy::Policy;

/// Builder for constructing an Ownerlint with ergonomic chaining.
/// Mirrors `Ownerlint::new(...).with_*` but lets adapters be optional at call sites.
pub struct ApiBuilder<E: FactsEmitter, A: AuditSink> {
    facts: E,
    audit: A,
    policy: Policy,
    directory: Option<Box<dyn HandleDirectory>>,
    tree: Option<Box<dyn RepoTree>>,
}

impl<E: FactsEmitter, A: AuditSink> ApiBuilder<E, A> {
    pub fn new(facts: E, audit: A, policy: Policy) -> Self {
        Self { facts, audit, policy, directory: None, tree: None }
    }

    pub fn handle_directory(mut self, directory: Option<Box<dyn HandleDirectory>>) -> Self {
        self.directory = directory;
        self
    }

    pub fn repo_tree(mut self, tree: Option<Box<dyn RepoTree>>) -> Self {
        self.tree = tree;
        self
    }

    pub fn build(self) -> super::Ownerlint<E, A> {
        let mut api = super::Ownerlint::new(self.facts, self.audit, self.policy);
        if let Some(d) = self.directory {
            api = api.with_handle_directory(d);
        }
        if let Some(t) = self.tree {
            api = api.with_repo_tree(t);
        }
        api
    }
}
