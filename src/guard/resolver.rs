//! Rule resolution
//!
//! Answers point queries against an immutable [`ResolvedIndex`]:
//! 1. The first (most specific) rule group whose agent pattern matches the crawler wins
//! 2. Within that group, the first (most specific) rule whose path pattern matches wins
//! 3. No matching group or rule means no restriction

use crate::config::{GuardConfig, load_config};
use crate::error::PatternError;
use crate::guard::builder;
use crate::guard::patterns::{Pattern, ROOT_SPECIFICITY};
use crate::guard::types::{ResolvedIndex, Rule, RuleGroup};
use std::path::Path;
use tracing::trace;

/// Which rule list of a group a query consults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleSet {
    Access,
    Index,
}

impl RuleSet {
    fn rules(self, group: &RuleGroup) -> &[Rule] {
        match self {
            RuleSet::Access => &group.access_rules,
            RuleSet::Index => &group.index_rules,
        }
    }
}

/// Robots rule guard
///
/// Built once from a [`GuardConfig`], then queried any number of times. The guard is
/// immutable after construction, so it can be shared across threads behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Guard {
    groups: ResolvedIndex,
}

impl Guard {
    /// Compile a guard from configuration
    pub fn new(config: &GuardConfig) -> Result<Self, PatternError> {
        Ok(Self {
            groups: builder::build(&config.groups)?,
        })
    }

    /// Load configuration from a TOML or JSON file and compile it
    pub fn from_path(path: impl AsRef<Path>) -> crate::error::Result<Self> {
        let config = load_config(path)?;
        Ok(Self::new(&config)?)
    }

    /// Create a guard with no rules (allows everything)
    pub fn allow_all() -> Self {
        Self::default()
    }

    /// All rule groups, most specific agent first
    pub fn groups(&self) -> &[RuleGroup] {
        &self.groups
    }

    /// Find the most specific rule group covering a crawler identity
    pub fn find_group(&self, user_agent: &str) -> Option<&RuleGroup> {
        let lowered = user_agent.to_lowercase();
        let group = self
            .groups
            .iter()
            .find(|group| group.pattern.matches_lowercase(&lowered));

        trace!(
            user_agent,
            group = group.map(|g| g.pattern.source()),
            "Resolved rule group"
        );

        group
    }

    /// Outcome of the most specific rule matching `path`, or `true` if none does
    pub fn match_rule(rules: &[Rule], path: &str) -> bool {
        match rules.iter().find(|rule| rule.pattern.matches(path)) {
            Some(rule) => {
                trace!(
                    path,
                    pattern = rule.pattern.source(),
                    allow = rule.allow,
                    "Matched rule"
                );
                rule.allow
            }
            None => true,
        }
    }

    fn check(&self, rule_set: RuleSet, user_agent: &str, path: &str) -> bool {
        match self.find_group(user_agent) {
            Some(group) => Self::match_rule(rule_set.rules(group), path),
            None => true,
        }
    }

    /// Check whether a crawler may fetch a path
    pub fn is_allowed(&self, user_agent: &str, path: &str) -> bool {
        self.check(RuleSet::Access, user_agent, path)
    }

    /// Check whether a crawler may index a path
    pub fn is_indexable(&self, user_agent: &str, path: &str) -> bool {
        self.check(RuleSet::Index, user_agent, path)
    }

    /// Check whether a crawler has no meaningful access at all.
    ///
    /// True when the crawler's group has no allow rule and no disallow rule narrower
    /// than the root. This is a classification of the rule set, not a reachability
    /// proof: several narrow disallows without a root disallow are not "disallow all".
    pub fn is_disallow_all(&self, user_agent: &str) -> bool {
        match self.find_group(user_agent) {
            Some(group) => !group
                .access_rules
                .iter()
                .any(|rule| rule.allow || rule.pattern.specificity() > ROOT_SPECIFICITY),
            None => false,
        }
    }
}
