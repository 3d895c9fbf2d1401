//! Reduction of an ACL to classic owner/group/other permission bits.

use logging::trace_equiv;

use super::constants::{ACCESSPERMS, S_IRWXG};
use super::entry::AclTag;
use super::error::AclError;
use super::wire::EaBlob;

/// Whether an ACL carries information beyond a classic mode.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AclClass {
    /// Only owner, owning group and other entries: the mode says everything.
    Equivalent,
    /// Named entries or a mask are present.
    Extended,
}

impl AclClass {
    /// Returns `true` for [`AclClass::Equivalent`].
    #[must_use]
    pub const fn is_equivalent(self) -> bool {
        matches!(self, Self::Equivalent)
    }
}

/// Outcome of [`equiv_mode`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EquivMode {
    /// Classification of the ACL.
    pub class: AclClass,
    /// Caller's mode with the permission bits replaced by the ones derived from the ACL.
    pub mode: u32,
}

/// Derives the permission bits an ACL implies and reports whether it is extended.
///
/// Owner, owning group and other entries are OR-ed into their triads; a mask
/// overwrites the group triad. Bits of `mode` above [`ACCESSPERMS`] are kept.
pub fn equiv_mode(buf: &[u8], mode: u32) -> Result<EquivMode, AclError> {
    let blob = EaBlob::new(buf)?;

    let mut class = AclClass::Equivalent;
    let mut perms = 0u32;

    for raw in blob.entries() {
        let tag = raw.tag().inspect_err(|err| {
            trace_equiv!(%err, "aborting mode reduction");
        })?;
        let triad = raw.perm().triad();
        match tag {
            AclTag::UserObj => perms |= triad << 6,
            AclTag::GroupObj => perms |= triad << 3,
            AclTag::Other => perms |= triad,
            AclTag::Mask => {
                perms = (perms & !S_IRWXG) | (triad << 3);
                class = AclClass::Extended;
            }
            AclTag::User | AclTag::Group => class = AclClass::Extended,
        }
    }

    let mode = (mode & !ACCESSPERMS) | perms;
    trace_equiv!(?class, mode = format_args!("{mode:o}"), "reduced ACL to mode");
    Ok(EquivMode { class, mode })
}
