//! Access vs default ACLs and the extended attributes that hold them.

use super::constants::{XATTR_NAME_ACL_ACCESS, XATTR_NAME_ACL_DEFAULT};

/// Which of an object's two ACLs a blob belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AclKind {
    /// Access ACL (consulted for permission checks).
    Access,
    /// Default ACL (inherited by new objects created in a directory).
    Default,
}

impl AclKind {
    /// Returns the extended attribute name storing this ACL.
    #[must_use]
    pub const fn xattr_name(self) -> &'static str {
        match self {
            Self::Access => XATTR_NAME_ACL_ACCESS,
            Self::Default => XATTR_NAME_ACL_DEFAULT,
        }
    }

    /// Maps an extended attribute name back to the ACL it stores.
    #[must_use]
    pub fn from_xattr_name(name: &str) -> Option<Self> {
        match name {
            XATTR_NAME_ACL_ACCESS => Some(Self::Access),
            XATTR_NAME_ACL_DEFAULT => Some(Self::Default),
            _ => None,
        }
    }
}
