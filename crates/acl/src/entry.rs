//! ACL entry value types.

use std::fmt;

use super::constants::{
    ACL_EXECUTE, ACL_GROUP, ACL_GROUP_OBJ, ACL_MASK, ACL_OTHER, ACL_READ, ACL_UNDEFINED_ID,
    ACL_USER, ACL_USER_OBJ, ACL_WRITE, S_IRWXG, S_IRWXO, S_IRWXU,
};
use super::error::AclError;

/// The class of principal an entry applies to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum AclTag {
    /// The owning user (`ACL_USER_OBJ`).
    UserObj = ACL_USER_OBJ,
    /// A user named by id (`ACL_USER`).
    User = ACL_USER,
    /// The owning group (`ACL_GROUP_OBJ`).
    GroupObj = ACL_GROUP_OBJ,
    /// A group named by id (`ACL_GROUP`).
    Group = ACL_GROUP,
    /// Upper bound for the group class (`ACL_MASK`).
    Mask = ACL_MASK,
    /// Everyone else (`ACL_OTHER`).
    Other = ACL_OTHER,
}

impl AclTag {
    /// Decodes a raw tag, returning `None` outside the closed set.
    #[must_use]
    pub const fn from_raw(value: u16) -> Option<Self> {
        match value {
            ACL_USER_OBJ => Some(Self::UserObj),
            ACL_USER => Some(Self::User),
            ACL_GROUP_OBJ => Some(Self::GroupObj),
            ACL_GROUP => Some(Self::Group),
            ACL_MASK => Some(Self::Mask),
            ACL_OTHER => Some(Self::Other),
            _ => None,
        }
    }

    /// Returns the on-disk tag value.
    #[must_use]
    pub const fn as_raw(self) -> u16 {
        self as u16
    }

    /// Returns `true` for the tags whose id field is meaningful.
    #[must_use]
    pub const fn is_named(self) -> bool {
        matches!(self, Self::User | Self::Group)
    }

    const fn label(self) -> &'static str {
        match self {
            Self::UserObj | Self::User => "user",
            Self::GroupObj | Self::Group => "group",
            Self::Mask => "mask",
            Self::Other => "other",
        }
    }
}

/// A set of read/write/execute permission bits.
///
/// Only the low three bits are meaningful; [`AclPerm::from_raw`] keeps any
/// higher bits found on disk so that untouched entries are written back
/// unchanged. [`triad`](AclPerm::triad), [`is_empty`](AclPerm::is_empty) and
/// [`contains`](AclPerm::contains) ignore stored high bits; equality and
/// hashing compare the raw field.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AclPerm(u16);

impl AclPerm {
    /// No access.
    pub const NONE: Self = Self(0);
    /// Read access.
    pub const READ: Self = Self(ACL_READ);
    /// Write access.
    pub const WRITE: Self = Self(ACL_WRITE);
    /// Execute (or search) access.
    pub const EXECUTE: Self = Self(ACL_EXECUTE);
    /// Read, write and execute access.
    pub const RWX: Self = Self(ACL_READ | ACL_WRITE | ACL_EXECUTE);

    /// Wraps a raw permission field.
    #[must_use]
    pub const fn from_raw(value: u16) -> Self {
        Self(value)
    }

    /// Builds a permission set from the low three bits of a mode triad.
    #[must_use]
    pub const fn from_triad(bits: u32) -> Self {
        Self((bits & 0o7) as u16)
    }

    /// Returns the raw permission field.
    #[must_use]
    pub const fn as_raw(self) -> u16 {
        self.0
    }

    /// Returns the meaningful bits as a mode triad.
    #[must_use]
    pub const fn triad(self) -> u32 {
        (self.0 & Self::RWX.0) as u32
    }

    /// Returns `true` when every bit of `want` is present.
    #[must_use]
    pub const fn contains(self, want: Self) -> bool {
        self.0 & want.0 == want.0
    }

    /// Returns the bits present in both sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the bits present in either set.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns `true` when no meaningful bit is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 & Self::RWX.0 == 0
    }
}

impl std::ops::BitOr for AclPerm {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl std::ops::BitAnd for AclPerm {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl fmt::Display for AclPerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |bit: Self, c: char| if self.contains(bit) { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            flag(Self::READ, 'r'),
            flag(Self::WRITE, 'w'),
            flag(Self::EXECUTE, 'x')
        )
    }
}

/// A decoded ACL entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AclEntry {
    /// Principal class.
    pub tag: AclTag,
    /// Granted permissions.
    pub perm: AclPerm,
    /// User or group id for named entries, [`ACL_UNDEFINED_ID`] otherwise.
    pub id: u32,
}

impl AclEntry {
    /// Creates an entry, clearing the id for tags that carry none.
    #[must_use]
    pub const fn new(tag: AclTag, perm: AclPerm, id: u32) -> Self {
        let id = if tag.is_named() { id } else { ACL_UNDEFINED_ID };
        Self { tag, perm, id }
    }

    /// Owning user entry.
    #[must_use]
    pub const fn user_obj(perm: AclPerm) -> Self {
        Self::new(AclTag::UserObj, perm, ACL_UNDEFINED_ID)
    }

    /// Named user entry.
    #[must_use]
    pub const fn user(uid: u32, perm: AclPerm) -> Self {
        Self::new(AclTag::User, perm, uid)
    }

    /// Owning group entry.
    #[must_use]
    pub const fn group_obj(perm: AclPerm) -> Self {
        Self::new(AclTag::GroupObj, perm, ACL_UNDEFINED_ID)
    }

    /// Named group entry.
    #[must_use]
    pub const fn group(gid: u32, perm: AclPerm) -> Self {
        Self::new(AclTag::Group, perm, gid)
    }

    /// Mask entry.
    #[must_use]
    pub const fn mask(perm: AclPerm) -> Self {
        Self::new(AclTag::Mask, perm, ACL_UNDEFINED_ID)
    }

    /// Other entry.
    #[must_use]
    pub const fn other(perm: AclPerm) -> Self {
        Self::new(AclTag::Other, perm, ACL_UNDEFINED_ID)
    }
}

/// Renders the entry in `getfacl` short form, e.g. `user:42:rw-` or `mask::r--`.
impl fmt::Display for AclEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tag.is_named() {
            write!(f, "{}:{}:{}", self.tag.label(), self.id, self.perm)
        } else {
            write!(f, "{}::{}", self.tag.label(), self.perm)
        }
    }
}

/// One undecoded entry record, addressed by its position in the blob.
///
/// The tag is kept raw so that each operation decides when an unknown tag
/// aborts it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RawEntry {
    /// Position of the entry in the blob.
    pub index: usize,
    /// Raw `e_tag` field.
    pub tag: u16,
    /// Raw `e_perm` field.
    pub perm: u16,
    /// Raw `e_id` field.
    pub id: u32,
}

impl RawEntry {
    /// Decodes the tag, failing with [`AclError::InvalidEncoding`] outside the closed set.
    pub const fn tag(&self) -> Result<AclTag, AclError> {
        match AclTag::from_raw(self.tag) {
            Some(tag) => Ok(tag),
            None => Err(AclError::InvalidEncoding {
                index: self.index,
                tag: self.tag,
            }),
        }
    }

    /// Returns the permission field.
    #[must_use]
    pub const fn perm(&self) -> AclPerm {
        AclPerm::from_raw(self.perm)
    }

    /// Decodes the record into an [`AclEntry`].
    pub const fn decode(&self) -> Result<AclEntry, AclError> {
        match self.tag() {
            Ok(tag) => Ok(AclEntry {
                tag,
                perm: self.perm(),
                id: self.id,
            }),
            Err(err) => Err(err),
        }
    }
}

/// Owner triad of `mode`.
#[must_use]
pub const fn owner_bits(mode: u32) -> AclPerm {
    AclPerm::from_triad((mode & S_IRWXU) >> 6)
}

/// Group triad of `mode`.
#[must_use]
pub const fn group_bits(mode: u32) -> AclPerm {
    AclPerm::from_triad((mode & S_IRWXG) >> 3)
}

/// Other triad of `mode`.
#[must_use]
pub const fn other_bits(mode: u32) -> AclPerm {
    AclPerm::from_triad(mode & S_IRWXO)
}

/// Builds the three-entry ACL equivalent to the permission bits of `mode`.
#[must_use]
pub fn minimal_from_mode(mode: u32) -> Vec<AclEntry> {
    vec![
        AclEntry::user_obj(owner_bits(mode)),
        AclEntry::group_obj(group_bits(mode)),
        AclEntry::other(other_bits(mode)),
    ]
}
