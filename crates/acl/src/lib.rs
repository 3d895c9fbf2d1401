#![deny(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_docs)]

//! POSIX ACL evaluation over the `system.posix_acl_*` extended attribute format.
//!
//! The crate works directly on the attribute bytes a filesystem client reads
//! and writes. Every operation validates the blob first and then walks its
//! entries once, in buffer order:
//!
//! - [`validate`] / [`is_valid`] check the header version and length.
//! - [`equiv_mode`] derives the classic permission bits an ACL implies.
//! - [`create_masq`] narrows an inherited ACL and a creation mode against each other.
//! - [`chmod_masq`] rewrites an ACL after a mode change.
//! - [`permission`] decides whether a requester may access the object.
//!
//! Read-only operations borrow `&[u8]`; the masquerade operations borrow
//! `&mut [u8]` and only rewrite permission fields in place.
//!
//! # Examples
//!
//! ```
//! use acl::{AccessDecision, AclEntry, AclPerm, Credentials, Owner, encode_entries, permission};
//!
//! let blob = encode_entries(&[
//!     AclEntry::user_obj(AclPerm::RWX),
//!     AclEntry::user(42, AclPerm::READ | AclPerm::WRITE),
//!     AclEntry::group_obj(AclPerm::READ),
//!     AclEntry::mask(AclPerm::READ),
//!     AclEntry::other(AclPerm::NONE),
//! ]);
//!
//! let owner = Owner { uid: 0, gid: 0 };
//! let user = Credentials::new(42, 42, &[]);
//! assert_eq!(
//!     permission(&blob, owner, &user, AclPerm::READ | AclPerm::WRITE)?,
//!     AccessDecision::Denied
//! );
//! assert_eq!(permission(&blob, owner, &user, AclPerm::READ)?, AccessDecision::Granted);
//! # Ok::<(), acl::AclError>(())
//! ```

mod constants;
mod entry;
mod equiv;
mod error;
mod kind;
mod masq;
mod permission;
mod validate;
mod wire;

pub use constants::*;
pub use entry::{
    AclEntry, AclPerm, AclTag, RawEntry, group_bits, minimal_from_mode, other_bits, owner_bits,
};
pub use equiv::{AclClass, EquivMode, equiv_mode};
pub use error::{AclError, MalformedKind};
pub use kind::AclKind;
pub use masq::{CreateMasq, chmod_masq, create_masq};
pub use permission::{AccessDecision, Credentials, Owner, check_access, permission};
pub use validate::{is_valid, validate};
pub use wire::{EaBlob, EaBlobMut, decode_entries, encode_entries};
