#![deny(unsafe_code)]
#![deny(missing_docs)]

//! POSIX ACL evaluation for filesystem clients.
//!
//! This crate bundles the workspace for hosts that want a single dependency:
//! [`acl`] holds the engine that validates, reduces, masquerades and evaluates
//! `system.posix_acl_*` blobs, and [`logging`] names the tracing targets the
//! engine emits on and installs a subscriber when the host has none.
//!
//! # Examples
//!
//! ```
//! use acl_engine::acl::{AclClass, AclEntry, AclPerm, encode_entries, equiv_mode};
//!
//! let blob = encode_entries(&[
//!     AclEntry::user_obj(AclPerm::RWX),
//!     AclEntry::group_obj(AclPerm::READ | AclPerm::EXECUTE),
//!     AclEntry::other(AclPerm::READ),
//! ]);
//!
//! let reduced = equiv_mode(&blob, 0o100_000)?;
//! assert_eq!(reduced.class, AclClass::Equivalent);
//! assert_eq!(reduced.mode, 0o100_754);
//! # Ok::<(), acl_engine::acl::AclError>(())
//! ```

pub use acl;
pub use logging;

pub use acl::{
    AccessDecision, AclError, AclPerm, Credentials, Owner, chmod_masq, create_masq, equiv_mode,
    is_valid, permission,
};
pub use logging::{LogConfig, init_tracing};
