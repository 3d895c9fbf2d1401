//! Error types produced by the ACL engine.

use std::io;

use thiserror::Error;

/// Reason a blob failed structural validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MalformedKind {
    /// The buffer is shorter than the header.
    TooShort {
        /// Length of the rejected buffer.
        len: usize,
    },
    /// The header carries a version other than [`ACL_EA_VERSION`](crate::ACL_EA_VERSION).
    BadVersion {
        /// Version found in the header.
        found: u32,
    },
    /// The bytes after the header are not a whole number of entries.
    Misaligned {
        /// Length of the rejected buffer.
        len: usize,
    },
}

impl std::fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooShort { len } => write!(f, "{len} bytes is shorter than the ACL header"),
            Self::BadVersion { found } => write!(
                f,
                "unsupported ACL version {found:#x} (expected {:#x})",
                crate::ACL_EA_VERSION
            ),
            Self::Misaligned { len } => {
                write!(f, "{len} bytes is not a header followed by whole entries")
            }
        }
    }
}

/// Faults reported by the ACL operations.
///
/// A negative access decision is not a fault; see
/// [`AccessDecision`](crate::AccessDecision).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum AclError {
    /// Wrong version or misaligned length.
    #[error("malformed ACL blob: {0}")]
    MalformedBlob(MalformedKind),

    /// A structurally valid blob contains an entry with an unknown tag.
    #[error("ACL entry {index} has unknown tag {tag:#06x}")]
    InvalidEncoding {
        /// Position of the offending entry.
        index: usize,
        /// Raw tag value read from the entry.
        tag: u16,
    },

    /// Neither a mask nor an owning group entry exists to reconcile with a mode.
    #[error("ACL has neither a mask nor an owning group entry")]
    MissingRequiredEntry,

    /// The evaluator ran out of entries before reaching the other entry.
    #[error("ACL has no other entry")]
    IncompleteAcl,
}

impl AclError {
    /// Returns the errno a filesystem client reports for this fault.
    #[must_use]
    pub const fn errno(self) -> i32 {
        libc::EIO
    }

    /// Returns the validation failure, if this error is [`AclError::MalformedBlob`].
    #[must_use]
    pub const fn malformed_kind(self) -> Option<MalformedKind> {
        match self {
            Self::MalformedBlob(kind) => Some(kind),
            _ => None,
        }
    }
}

impl From<AclError> for io::Error {
    fn from(err: AclError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
