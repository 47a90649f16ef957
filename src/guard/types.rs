//! Compiled rule types

use crate::guard::patterns::{AgentPattern, PathPattern};
use std::fmt;
use std::sync::Arc;

/// A recognised directive name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    Allow,
    Disallow,
    NoIndex,
}

impl Directive {
    /// Parse a directive name case-insensitively
    pub fn try_parse(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("allow") {
            Some(Directive::Allow)
        } else if name.eq_ignore_ascii_case("disallow") {
            Some(Directive::Disallow)
        } else if name.eq_ignore_ascii_case("noindex") {
            Some(Directive::NoIndex)
        } else {
            None
        }
    }

    /// Whether this directive governs fetching rather than indexing
    pub fn is_access(&self) -> bool {
        matches!(self, Directive::Allow | Directive::Disallow)
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::Allow => write!(f, "allow"),
            Directive::Disallow => write!(f, "disallow"),
            Directive::NoIndex => write!(f, "noindex"),
        }
    }
}

/// A path pattern paired with its outcome
///
/// For access rules `allow` means the path may be fetched; for indexing rules it means
/// the path may be indexed, which is always `false` for a compiled `noindex`.
#[derive(Debug, Clone)]
pub struct Rule {
    pub pattern: PathPattern,
    pub allow: bool,
}

impl Rule {
    pub fn new(pattern: PathPattern, allow: bool) -> Self {
        Self { pattern, allow }
    }
}

/// Read-only rule list shared by every agent of one source group
pub type SharedRules = Arc<[Rule]>;

/// Compiled rules for one agent
#[derive(Debug, Clone)]
pub struct RuleGroup {
    pub pattern: AgentPattern,
    pub access_rules: SharedRules,
    pub index_rules: SharedRules,
}

/// All rule groups, most specific agent first
pub type ResolvedIndex = Vec<RuleGroup>;

/// Stable sort, highest specificity first
pub(crate) fn sort_most_specific_first<T>(items: &mut [T], specificity: impl Fn(&T) -> usize) {
    items.sort_by_key(|item| std::cmp::Reverse(specificity(item)));
}
