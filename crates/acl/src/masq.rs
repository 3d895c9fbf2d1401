//! Reconciliation of an ACL with a file mode.
//!
//! [`create_masq`] runs when a new object inherits a default ACL: the entries
//! that correspond to the owner, group class and other triads are narrowed to
//! the requested creation mode, and the mode is narrowed to what the ACL
//! allows. [`chmod_masq`] runs after an explicit mode change and overwrites
//! the same entries with the new triads.
//!
//! In both cases the group class triad maps onto the mask entry when one is
//! present and onto the owning group entry otherwise. Named entries are never
//! modified.

use logging::trace_masq;

use super::constants::{ACCESSPERMS, S_IRWXG, S_IRWXO, S_IRWXU};
use super::entry::{AclPerm, AclTag, RawEntry, group_bits, other_bits, owner_bits};
use super::equiv::AclClass;
use super::error::AclError;
use super::wire::EaBlobMut;

/// Outcome of [`create_masq`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CreateMasq {
    /// Whether the ACL holds named entries or a mask.
    pub class: AclClass,
    /// Requested mode narrowed by the ACL; bits above [`ACCESSPERMS`] unchanged.
    pub mode: u32,
}

/// The entries that carry the group class.
#[derive(Default)]
struct GroupClass {
    group_obj: Option<RawEntry>,
    mask: Option<RawEntry>,
}

impl GroupClass {
    /// The entry the group triad maps onto.
    fn target(&self) -> Result<RawEntry, AclError> {
        self.mask.or(self.group_obj).ok_or_else(|| {
            trace_masq!("ACL has neither a mask nor an owning group entry");
            AclError::MissingRequiredEntry
        })
    }
}

/// Narrows an inherited ACL and the requested creation mode against each other.
///
/// Entries are rewritten in place. On error the owner and other entries may
/// already have been narrowed; callers discard the buffer in that case.
pub fn create_masq(buf: &mut [u8], mode: u32) -> Result<CreateMasq, AclError> {
    let mut blob = EaBlobMut::new(buf)?;

    let mut narrowed = mode;
    let mut class = AclClass::Equivalent;
    let mut group = GroupClass::default();

    for index in 0..blob.len() {
        let Some(raw) = blob.entry(index) else { break };
        match raw.tag()? {
            AclTag::UserObj => {
                let perm = narrow(raw.perm(), owner_bits(narrowed));
                narrowed &= (perm.triad() << 6) | !S_IRWXU;
                blob.set_perm(index, perm);
            }
            AclTag::User | AclTag::Group => class = AclClass::Extended,
            AclTag::GroupObj => group.group_obj = Some(raw),
            AclTag::Other => {
                let perm = narrow(raw.perm(), other_bits(narrowed));
                narrowed &= perm.triad() | !S_IRWXO;
                blob.set_perm(index, perm);
            }
            AclTag::Mask => {
                group.mask = Some(raw);
                class = AclClass::Extended;
            }
        }
    }

    let target = group.target()?;
    let perm = narrow(target.perm(), group_bits(narrowed));
    narrowed &= (perm.triad() << 3) | !S_IRWXG;
    blob.set_perm(target.index, perm);

    let mode = (mode & !ACCESSPERMS) | (narrowed & ACCESSPERMS);
    trace_masq!(
        ?class,
        mode = format_args!("{:o}", mode_bits(mode)),
        "applied creation mode to inherited ACL"
    );
    Ok(CreateMasq { class, mode })
}

/// Rewrites the owner, group class and other entries to match `mode`.
///
/// Entries are rewritten in place. On error the owner and other entries may
/// already have been rewritten; callers discard the buffer in that case.
pub fn chmod_masq(buf: &mut [u8], mode: u32) -> Result<(), AclError> {
    let mut blob = EaBlobMut::new(buf)?;
    let mut group = GroupClass::default();

    for index in 0..blob.len() {
        let Some(raw) = blob.entry(index) else { break };
        match raw.tag()? {
            AclTag::UserObj => blob.set_perm(index, owner_bits(mode)),
            AclTag::User | AclTag::Group => {}
            AclTag::GroupObj => group.group_obj = Some(raw),
            AclTag::Mask => group.mask = Some(raw),
            AclTag::Other => blob.set_perm(index, other_bits(mode)),
        }
    }

    let target = group.target()?;
    blob.set_perm(target.index, group_bits(mode));

    trace_masq!(
        mode = format_args!("{:o}", mode_bits(mode)),
        "applied chmod to ACL"
    );
    Ok(())
}

/// Keeps only the permission bits also present in `allowed`, preserving bits above rwx.
const fn narrow(perm: AclPerm, allowed: AclPerm) -> AclPerm {
    AclPerm::from_raw(perm.as_raw() & (allowed.as_raw() | !AclPerm::RWX.as_raw()))
}

const fn mode_bits(mode: u32) -> u32 {
    mode & ACCESSPERMS
}

#[cfg(test)]
mod tests;
