#![deny(unsafe_code)]

//! Test fixtures for the ACL workspace.
//!
//! [`BlobBuilder`] writes `system.posix_acl_*` blobs byte by byte, without
//! going through the `acl` crate's encoder, so tests exercise the engine
//! against an independent rendition of the on-disk layout. It also accepts
//! arbitrary versions and raw tags for building malformed inputs.

const ACL_EA_VERSION: u32 = 0x0002;
const UNDEFINED_ID: u32 = u32::MAX;

const TAG_USER_OBJ: u16 = 0x01;
const TAG_USER: u16 = 0x02;
const TAG_GROUP_OBJ: u16 = 0x04;
const TAG_GROUP: u16 = 0x08;
const TAG_MASK: u16 = 0x10;
const TAG_OTHER: u16 = 0x20;

/// One entry to append with [`BlobBuilder::entries`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TestEntry {
    /// Owning user with permission bits.
    UserObj(u16),
    /// Named user `(uid, perm)`.
    User(u32, u16),
    /// Owning group with permission bits.
    GroupObj(u16),
    /// Named group `(gid, perm)`.
    Group(u32, u16),
    /// Mask with permission bits.
    Mask(u16),
    /// Other with permission bits.
    Other(u16),
    /// Arbitrary record `(tag, perm, id)`.
    Raw(u16, u16, u32),
}

impl TestEntry {
    const fn fields(self) -> (u16, u16, u32) {
        match self {
            Self::UserObj(perm) => (TAG_USER_OBJ, perm, UNDEFINED_ID),
            Self::User(id, perm) => (TAG_USER, perm, id),
            Self::GroupObj(perm) => (TAG_GROUP_OBJ, perm, UNDEFINED_ID),
            Self::Group(id, perm) => (TAG_GROUP, perm, id),
            Self::Mask(perm) => (TAG_MASK, perm, UNDEFINED_ID),
            Self::Other(perm) => (TAG_OTHER, perm, UNDEFINED_ID),
            Self::Raw(tag, perm, id) => (tag, perm, id),
        }
    }
}

/// Builds raw ACL blobs in little-endian layout.
#[derive(Clone, Debug)]
pub struct BlobBuilder {
    bytes: Vec<u8>,
}

impl Default for BlobBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BlobBuilder {
    /// Starts a blob with the supported version.
    pub fn new() -> Self {
        Self::with_version(ACL_EA_VERSION)
    }

    /// Starts a blob with an arbitrary version.
    pub fn with_version(version: u32) -> Self {
        Self {
            bytes: version.to_le_bytes().to_vec(),
        }
    }

    /// Appends an arbitrary entry record.
    pub fn raw(mut self, tag: u16, perm: u16, id: u32) -> Self {
        self.bytes.extend_from_slice(&tag.to_le_bytes());
        self.bytes.extend_from_slice(&perm.to_le_bytes());
        self.bytes.extend_from_slice(&id.to_le_bytes());
        self
    }

    /// Appends every entry in order.
    pub fn entries(self, entries: impl IntoIterator<Item = TestEntry>) -> Self {
        entries.into_iter().fold(self, |builder, entry| {
            let (tag, perm, id) = entry.fields();
            builder.raw(tag, perm, id)
        })
    }

    /// Appends an owning user entry.
    pub fn user_obj(self, perm: u16) -> Self {
        self.entries([TestEntry::UserObj(perm)])
    }

    /// Appends a named user entry.
    pub fn user(self, uid: u32, perm: u16) -> Self {
        self.entries([TestEntry::User(uid, perm)])
    }

    /// Appends an owning group entry.
    pub fn group_obj(self, perm: u16) -> Self {
        self.entries([TestEntry::GroupObj(perm)])
    }

    /// Appends a named group entry.
    pub fn group(self, gid: u32, perm: u16) -> Self {
        self.entries([TestEntry::Group(gid, perm)])
    }

    /// Appends a mask entry.
    pub fn mask(self, perm: u16) -> Self {
        self.entries([TestEntry::Mask(perm)])
    }

    /// Appends an other entry.
    pub fn other(self, perm: u16) -> Self {
        self.entries([TestEntry::Other(perm)])
    }

    /// Returns the encoded blob.
    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

/// A requesting identity with owned supplementary groups.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Requester {
    /// Effective user id.
    pub uid: u32,
    /// Primary group id.
    pub gid: u32,
    /// Supplementary group ids.
    pub groups: Vec<u32>,
}

impl Requester {
    /// Creates a requester without supplementary groups.
    pub fn new(uid: u32, gid: u32) -> Self {
        Self {
            uid,
            gid,
            groups: Vec::new(),
        }
    }

    /// Replaces the supplementary groups.
    pub fn with_groups(mut self, groups: impl IntoIterator<Item = u32>) -> Self {
        self.groups = groups.into_iter().collect();
        self
    }
}
