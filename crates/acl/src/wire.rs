//! Little-endian codec for the `posix_acl_xattr` blob layout.
//!
//! # Wire Format
//!
//! ```text
//! a_version : u32 LE        // ACL_EA_VERSION
//! For each entry:
//!   e_tag   : u16 LE        // ACL_USER_OBJ .. ACL_OTHER
//!   e_perm  : u16 LE        // rwx in the low three bits
//!   e_id    : u32 LE        // uid/gid for named entries, ACL_UNDEFINED_ID otherwise
//! ```
//!
//! [`EaBlob`] and [`EaBlobMut`] are validated views over caller-owned buffers
//! that address entries by index. The mutable view only ever rewrites the
//! `e_perm` field of an existing record.

use super::constants::{ACL_EA_VERSION, ENTRY_SIZE, HEADER_SIZE};
use super::entry::{AclEntry, AclPerm, RawEntry};
use super::error::AclError;
use super::validate::{entry_count, validate};

const TAG_OFFSET: usize = 0;
const PERM_OFFSET: usize = 2;
const ID_OFFSET: usize = 4;

fn read_record(buf: &[u8], index: usize) -> RawEntry {
    let start = HEADER_SIZE + index * ENTRY_SIZE;
    let rec = &buf[start..start + ENTRY_SIZE];
    RawEntry {
        index,
        tag: u16::from_le_bytes([rec[TAG_OFFSET], rec[TAG_OFFSET + 1]]),
        perm: u16::from_le_bytes([rec[PERM_OFFSET], rec[PERM_OFFSET + 1]]),
        id: u32::from_le_bytes([
            rec[ID_OFFSET],
            rec[ID_OFFSET + 1],
            rec[ID_OFFSET + 2],
            rec[ID_OFFSET + 3],
        ]),
    }
}

/// Read-only view over a validated ACL blob.
#[derive(Clone, Copy, Debug)]
pub struct EaBlob<'a> {
    buf: &'a [u8],
    count: usize,
}

impl<'a> EaBlob<'a> {
    /// Validates `buf` and wraps it.
    pub fn new(buf: &'a [u8]) -> Result<Self, AclError> {
        validate(buf)?;
        Ok(Self {
            buf,
            count: entry_count(buf.len()),
        })
    }

    /// Returns the number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` when the blob holds only a header.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the entry at `index`, if any.
    #[must_use]
    pub fn entry(&self, index: usize) -> Option<RawEntry> {
        (index < self.count).then(|| read_record(self.buf, index))
    }

    /// Iterates over the entries in buffer order.
    pub fn entries(&self) -> impl Iterator<Item = RawEntry> + use<'a> {
        let buf = self.buf;
        (0..self.count).map(move |index| read_record(buf, index))
    }

    /// Iterates over the entries after `index`.
    pub(crate) fn entries_after(&self, index: usize) -> impl Iterator<Item = RawEntry> + use<'a> {
        let buf = self.buf;
        (index + 1..self.count).map(move |i| read_record(buf, i))
    }
}

/// Exclusive view over a validated ACL blob that permits rewriting permissions.
#[derive(Debug)]
pub struct EaBlobMut<'a> {
    buf: &'a mut [u8],
    count: usize,
}

impl<'a> EaBlobMut<'a> {
    /// Validates `buf` and wraps it.
    pub fn new(buf: &'a mut [u8]) -> Result<Self, AclError> {
        validate(buf)?;
        let count = entry_count(buf.len());
        Ok(Self { buf, count })
    }

    /// Returns the number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` when the blob holds only a header.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the entry at `index`, if any.
    #[must_use]
    pub fn entry(&self, index: usize) -> Option<RawEntry> {
        (index < self.count).then(|| read_record(self.buf, index))
    }

    /// Overwrites the permission field of the entry at `index`.
    ///
    /// Callers pass indices obtained from [`EaBlobMut::entry`].
    pub(crate) fn set_perm(&mut self, index: usize, perm: AclPerm) {
        assert!(index < self.count, "entry index {index} out of range");
        let start = HEADER_SIZE + index * ENTRY_SIZE + PERM_OFFSET;
        self.buf[start..start + 2].copy_from_slice(&perm.as_raw().to_le_bytes());
    }
}

/// Encodes entries into a blob in the order given.
#[must_use]
pub fn encode_entries(entries: &[AclEntry]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_SIZE + entries.len() * ENTRY_SIZE);
    buf.extend_from_slice(&ACL_EA_VERSION.to_le_bytes());
    for entry in entries {
        buf.extend_from_slice(&entry.tag.as_raw().to_le_bytes());
        buf.extend_from_slice(&entry.perm.as_raw().to_le_bytes());
        buf.extend_from_slice(&entry.id.to_le_bytes());
    }
    buf
}

/// Validates `buf` and decodes every entry.
pub fn decode_entries(buf: &[u8]) -> Result<Vec<AclEntry>, AclError> {
    EaBlob::new(buf)?
        .entries()
        .map(|raw| raw.decode())
        .collect()
}
