//! crates/acl/src/constants.rs
//!
//! Layout and bit constants for the `system.posix_acl_*` extended attribute.
//!
//! The values are fixed by the Linux kernel's `posix_acl_xattr.h` and must be
//! matched bit-for-bit so blobs written here can be read by any other POSIX
//! ACL consumer (and vice versa).

/// Version stored in the header of every accepted ACL blob.
pub const ACL_EA_VERSION: u32 = 0x0002;

/// Size of the blob header (`a_version: u32`).
pub const HEADER_SIZE: usize = 4;

/// Size of one entry record (`e_tag: u16`, `e_perm: u16`, `e_id: u32`).
pub const ENTRY_SIZE: usize = 8;

/// Tag of the owning user entry.
pub const ACL_USER_OBJ: u16 = 0x01;
/// Tag of a named user entry.
pub const ACL_USER: u16 = 0x02;
/// Tag of the owning group entry.
pub const ACL_GROUP_OBJ: u16 = 0x04;
/// Tag of a named group entry.
pub const ACL_GROUP: u16 = 0x08;
/// Tag of the mask entry.
pub const ACL_MASK: u16 = 0x10;
/// Tag of the catch-all other entry.
pub const ACL_OTHER: u16 = 0x20;

/// Read permission bit.
pub const ACL_READ: u16 = 0x04;
/// Write permission bit.
pub const ACL_WRITE: u16 = 0x02;
/// Execute permission bit.
pub const ACL_EXECUTE: u16 = 0x01;

/// Identifier written into entries that carry no qualifier.
pub const ACL_UNDEFINED_ID: u32 = u32::MAX;

/// Owner permission triad of a mode (`S_IRWXU`).
pub const S_IRWXU: u32 = 0o700;
/// Group permission triad of a mode (`S_IRWXG`).
pub const S_IRWXG: u32 = 0o070;
/// Other permission triad of a mode (`S_IRWXO`).
pub const S_IRWXO: u32 = 0o007;
/// All nine permission bits of a mode.
pub const ACCESSPERMS: u32 = S_IRWXU | S_IRWXG | S_IRWXO;

/// Extended attribute holding the access ACL.
pub const XATTR_NAME_ACL_ACCESS: &str = "system.posix_acl_access";
/// Extended attribute holding the default (inheritable) ACL of a directory.
pub const XATTR_NAME_ACL_DEFAULT: &str = "system.posix_acl_default";
