//! Robots rule guard
//!
//! Turns parsed robots configuration into a structure that answers three questions
//! for a crawler identity:
//!
//! - may it fetch a path ([`Guard::is_allowed`])
//! - may it index a path ([`Guard::is_indexable`])
//! - is it shut out entirely ([`Guard::is_disallow_all`])
//!
//! ## Resolution Model
//!
//! 1. **Agent selection** - rule groups are ranked by agent specificity (longest
//!    declared token first, `*` last); the first group whose token occurs in the
//!    crawler identity applies
//! 2. **Rule selection** - within that group rules are ranked by path specificity;
//!    the first matching rule decides
//! 3. **Defaults** - no group or no rule means allowed and indexable
//!
//! ## Example
//!
//! ```
//! use robots_guard::Guard;
//! use robots_guard::config::{ConfigGroup, ConfigGroupRule, GuardConfig};
//!
//! let config = GuardConfig {
//!     groups: vec![ConfigGroup::new(
//!         &["*"],
//!         vec![ConfigGroupRule::disallow("/"), ConfigGroupRule::allow("/fish")],
//!     )],
//! };
//!
//! let guard = Guard::new(&config).unwrap();
//! assert!(guard.is_allowed("mybot", "/fish"));
//! assert!(!guard.is_allowed("mybot", "/hello"));
//! assert!(!guard.is_disallow_all("mybot"));
//! ```

pub mod builder;
pub mod patterns;
pub mod resolver;
pub mod types;

pub use patterns::{AgentPattern, PathPattern, Pattern, ROOT_SPECIFICITY, WILDCARD_AGENT};
pub use resolver::Guard;
pub use types::{Directive, ResolvedIndex, Rule, RuleGroup};
