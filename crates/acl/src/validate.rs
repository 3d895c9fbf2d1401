//! Structural validation of ACL blobs.
//!
//! A blob is valid when it holds at least a header, the header carries
//! [`ACL_EA_VERSION`], and the remaining bytes are a whole number of entry
//! records. Entry contents are not inspected here; unknown tags are reported
//! by the operation that walks the entries.

use logging::trace_validate;

use super::constants::{ACL_EA_VERSION, ENTRY_SIZE, HEADER_SIZE};
use super::error::{AclError, MalformedKind};

/// Checks the header and length of `buf`.
pub fn validate(buf: &[u8]) -> Result<(), AclError> {
    let Some(header) = buf.first_chunk::<HEADER_SIZE>() else {
        return reject(MalformedKind::TooShort { len: buf.len() });
    };

    let version = u32::from_le_bytes(*header);
    if version != ACL_EA_VERSION {
        return reject(MalformedKind::BadVersion { found: version });
    }

    if !(buf.len() - HEADER_SIZE).is_multiple_of(ENTRY_SIZE) {
        return reject(MalformedKind::Misaligned { len: buf.len() });
    }

    Ok(())
}

/// Returns `true` when `buf` is a structurally valid ACL blob.
#[must_use]
pub fn is_valid(buf: &[u8]) -> bool {
    validate(buf).is_ok()
}

/// Number of entries in a blob that already passed [`validate`].
pub(crate) const fn entry_count(len: usize) -> usize {
    (len - HEADER_SIZE) / ENTRY_SIZE
}

fn reject(kind: MalformedKind) -> Result<(), AclError> {
    trace_validate!(reason = %kind, "rejecting ACL blob");
    Err(AclError::MalformedBlob(kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_support::BlobBuilder;

    #[test]
    fn header_only_blob_is_valid() {
        let blob = BlobBuilder::new().build();
        assert_eq!(blob.len(), HEADER_SIZE);
        assert!(is_valid(&blob));
        assert_eq!(entry_count(blob.len()), 0);
    }

    #[test]
    fn empty_buffer_is_too_short() {
        assert_eq!(
            validate(&[]),
            Err(AclError::MalformedBlob(MalformedKind::TooShort { len: 0 }))
        );
        assert_eq!(
            validate(&[2, 0, 0]),
            Err(AclError::MalformedBlob(MalformedKind::TooShort { len: 3 }))
        );
    }

    #[test]
    fn wrong_version_is_rejected() {
        let blob = BlobBuilder::with_version(1).user_obj(7).other(4).build();
        assert_eq!(
            validate(&blob),
            Err(AclError::MalformedBlob(MalformedKind::BadVersion { found: 1 }))
        );
    }

    #[test]
    fn version_is_little_endian() {
        let blob = BlobBuilder::with_version(0x0200_0000).build();
        assert!(!is_valid(&blob));
        assert!(is_valid(&[0x02, 0x00, 0x00, 0x00]));
    }

    #[test]
    fn trailing_partial_entry_is_misaligned() {
        let mut blob = BlobBuilder::new().user_obj(7).other(4).build();
        blob.push(0);
        assert_eq!(
            validate(&blob),
            Err(AclError::MalformedBlob(MalformedKind::Misaligned { len: 21 }))
        );
    }

    #[test]
    fn unknown_tags_do_not_affect_validity() {
        let blob = BlobBuilder::new().raw(0x40, 7, 0).build();
        assert!(is_valid(&blob));
    }
}
