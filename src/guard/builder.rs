//! Rule group builder
//!
//! Compiles parsed configuration groups into the sorted [`ResolvedIndex`] the
//! [`Guard`](crate::Guard) queries. Within a group:
//! - an `allow` for a path always beats a `disallow` for the identical path string,
//!   whichever comes first
//! - every `noindex` yields its own indexing rule and never touches access rules
//! - directives with an empty path are ignored
//!
//! Rule lists are sorted most specific first and shared by every agent of the group.

use crate::config::ConfigGroup;
use crate::error::PatternError;
use crate::guard::patterns::{AgentPattern, PathPattern, Pattern};
use crate::guard::types::{
    Directive, ResolvedIndex, Rule, RuleGroup, SharedRules, sort_most_specific_first,
};
use indexmap::IndexMap;
use tracing::{debug, trace};

/// Build the resolved index from configuration groups
pub fn build(groups: &[ConfigGroup]) -> Result<ResolvedIndex, PatternError> {
    let mut resolved = Vec::new();

    for group in groups {
        let (access_rules, index_rules) = compile_group(group)?;

        for agent in &group.agents {
            resolved.push(RuleGroup {
                pattern: AgentPattern::new(agent),
                access_rules: access_rules.clone(),
                index_rules: index_rules.clone(),
            });
        }
    }

    sort_most_specific_first(&mut resolved, |group| group.pattern.specificity());

    debug!(
        source_groups = groups.len(),
        rule_groups = resolved.len(),
        "Built resolved index"
    );

    Ok(resolved)
}

/// Compile the access and indexing rule lists of one source group
fn compile_group(group: &ConfigGroup) -> Result<(SharedRules, SharedRules), PatternError> {
    // Keyed by literal path, first-seen order kept for the stable sort below
    let mut access: IndexMap<&str, bool> = IndexMap::new();
    let mut noindex: Vec<&str> = Vec::new();

    for entry in &group.rules {
        if entry.path.is_empty() {
            trace!(rule = %entry.rule, "Ignoring directive with empty path");
            continue;
        }

        let Some(directive) = Directive::try_parse(&entry.rule) else {
            debug!(rule = %entry.rule, path = %entry.path, "Ignoring unknown directive");
            continue;
        };

        match directive {
            Directive::Allow => {
                access.insert(entry.path.as_str(), true);
            }
            Directive::Disallow => {
                access.entry(entry.path.as_str()).or_insert(false);
            }
            Directive::NoIndex => noindex.push(entry.path.as_str()),
        }
    }

    let mut access_rules = access
        .into_iter()
        .map(|(path, allow)| {
            Ok::<_, PatternError>(Rule::new(PathPattern::new(path)?, allow))
        })
        .collect::<Result<Vec<_>, _>>()?;
    sort_most_specific_first(&mut access_rules, |rule| rule.pattern.specificity());

    let mut index_rules = noindex
        .into_iter()
        .map(|path| Ok::<_, PatternError>(Rule::new(PathPattern::new(path)?, false)))
        .collect::<Result<Vec<_>, _>>()?;
    sort_most_specific_first(&mut index_rules, |rule| rule.pattern.specificity());

    trace!(
        agents = ?group.agents,
        access_rules = access_rules.len(),
        index_rules = index_rules.len(),
        "Compiled group"
    );

    Ok((access_rules.into(), index_rules.into()))
}
