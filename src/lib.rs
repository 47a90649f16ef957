//! Robots rule guard
//!
//! Decides whether a crawler may fetch or index a URL path according to a parsed
//! robots exclusion file.
//!
//! ## Features
//!
//! - **Allow beats disallow** for the identical path, regardless of directive order
//! - **Most specific wins** for both agent selection and path rules
//! - **Wildcards** (`*`) and end anchors (`$`) in path patterns
//! - **`noindex`** rules tracked separately from fetch rules
//! - **Permissive defaults** - unknown agents and unmatched paths are unrestricted
//!
//! ## Example Configuration
//!
//! ```toml
//! [[groups]]
//! agents = ["*"]
//! rules = [
//!     { rule = "disallow", path = "/" },
//!     { rule = "allow", path = "/public/" },
//! ]
//!
//! [[groups]]
//! agents = ["googlebot"]
//! rules = [{ rule = "noindex", path = "/drafts" }]
//! ```

pub mod config;
pub mod error;
pub mod guard;

// Re-export main types
pub use config::{GuardConfig, load_config};
pub use error::{GuardError, Result};
pub use guard::Guard;
