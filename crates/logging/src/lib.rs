#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` carries the diagnostics conventions of the ACL workspace. The
//! engine emits plain [`tracing`] events on one target per operation; this
//! crate names those targets, provides the macros that emit on them, and
//! lets a host decide how much of each category it wants to see.
//!
//! # Design
//!
//! - [`AclCategory`] enumerates the targets (`acl::validate`, `acl::equiv`,
//!   `acl::masq`, `acl::perm`).
//! - [`LogConfig`] holds a level per category, can be built from a `-v` count
//!   or from flag tokens such as `perm3`, and renders `EnvFilter` directives.
//! - [`init_tracing`] installs a formatted subscriber for hosts without one.
//!
//! # Examples
//!
//! ```
//! use logging::{AclCategory, LogConfig};
//!
//! let mut config = LogConfig::from_verbose_level(1);
//! config.apply_flag("perm3").unwrap();
//!
//! assert_eq!(config.levels.get(AclCategory::Perm), 3);
//! assert!(config.filter_directives().contains("acl::perm=trace"));
//! ```

mod config;
mod levels;
mod tracing_bridge;
mod tracing_macros;

pub use config::LogConfig;
pub use levels::{AclCategory, CategoryLevels, level_to_verbosity_level};
pub use tracing_bridge::{env_filter, init_tracing};
