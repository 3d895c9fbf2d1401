//! POSIX.1e access check over an ACL blob.
//!
//! The scan walks the entries in buffer order and stops at the first entry
//! whose class matches the requester:
//!
//! - the owner entry decides on its own bits, never masked;
//! - a named user entry decides on its bits capped by the mask;
//! - group class entries (owning group and named groups) decide only when
//!   their bits already cover the request; otherwise the scan continues in
//!   case a later group entry grants it, and remembers that a group matched;
//! - the other entry decides on its own bits, unless a group matched earlier,
//!   in which case access is denied.
//!
//! The mask is looked up forward from the deciding entry. When no mask
//! follows it, the entry's bits are used unmasked.

use std::io;

use logging::trace_perm;

use super::constants::ACL_MASK;
use super::entry::{AclPerm, AclTag, RawEntry};
use super::error::AclError;
use super::wire::EaBlob;

/// Owner of the object the ACL is attached to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Owner {
    /// Owning user id.
    pub uid: u32,
    /// Owning group id.
    pub gid: u32,
}

/// Identity of the process requesting access.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Credentials<'a> {
    /// Effective user id.
    pub uid: u32,
    /// Effective group id.
    pub gid: u32,
    /// Supplementary group ids.
    pub groups: &'a [u32],
}

impl<'a> Credentials<'a> {
    /// Creates credentials from a uid, a primary gid and supplementary gids.
    #[must_use]
    pub const fn new(uid: u32, gid: u32, groups: &'a [u32]) -> Self {
        Self { uid, gid, groups }
    }

    /// Returns `true` when `gid` is the primary group or a supplementary group.
    #[must_use]
    pub fn in_group(&self, gid: u32) -> bool {
        self.gid == gid || self.groups.contains(&gid)
    }
}

/// Result of a successful access check.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccessDecision {
    /// The requested access is allowed.
    Granted,
    /// The requested access is not allowed.
    Denied,
}

impl AccessDecision {
    const fn check(perm: AclPerm, want: AclPerm) -> Self {
        if perm.contains(want) {
            Self::Granted
        } else {
            Self::Denied
        }
    }

    /// Returns `true` for [`AccessDecision::Granted`].
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }

    /// Returns `0` when granted and `EACCES` when denied.
    #[must_use]
    pub const fn errno(self) -> i32 {
        match self {
            Self::Granted => 0,
            Self::Denied => libc::EACCES,
        }
    }

    /// Converts a denial into an [`io::ErrorKind::PermissionDenied`] error.
    pub fn into_io_result(self) -> io::Result<()> {
        match self {
            Self::Granted => Ok(()),
            Self::Denied => Err(io::Error::from_raw_os_error(libc::EACCES)),
        }
    }
}

/// Where the scan stands before it reaches a decision.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ScanState {
    /// No group class entry matched the requester so far.
    NoGroupSeen,
    /// A group class entry matched but did not cover the request.
    GroupSeenNoGrant,
}

/// How the deciding entry is turned into a decision.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Resolution {
    /// Test the bits as they are.
    Check(AclPerm),
    /// Cap the entry's bits with the next mask, if any.
    Masked(RawEntry),
    /// Deny without testing bits.
    Deny,
}

impl ScanState {
    /// Advances the scan over one entry, returning a resolution when the entry decides.
    fn step(
        &mut self,
        raw: RawEntry,
        tag: AclTag,
        owner: Owner,
        cred: &Credentials<'_>,
        want: AclPerm,
    ) -> Option<Resolution> {
        let perm = raw.perm();
        match tag {
            AclTag::UserObj => (cred.uid == owner.uid).then_some(Resolution::Check(perm)),
            AclTag::User => (raw.id == cred.uid).then_some(Resolution::Masked(raw)),
            AclTag::GroupObj => self.group_match(raw, cred.in_group(owner.gid), want),
            AclTag::Group => self.group_match(raw, cred.in_group(raw.id), want),
            AclTag::Mask => None,
            AclTag::Other => Some(match self {
                Self::NoGroupSeen => Resolution::Check(perm),
                Self::GroupSeenNoGrant => Resolution::Deny,
            }),
        }
    }

    fn group_match(&mut self, raw: RawEntry, matches: bool, want: AclPerm) -> Option<Resolution> {
        if !matches {
            return None;
        }
        *self = Self::GroupSeenNoGrant;
        raw.perm().contains(want).then_some(Resolution::Masked(raw))
    }
}

/// Decides whether `cred` may access an object owned by `owner` with the bits in `want`.
pub fn permission(
    buf: &[u8],
    owner: Owner,
    cred: &Credentials<'_>,
    want: AclPerm,
) -> Result<AccessDecision, AclError> {
    let blob = EaBlob::new(buf)?;
    let mut state = ScanState::NoGroupSeen;

    for raw in blob.entries() {
        let tag = raw.tag().inspect_err(|err| {
            trace_perm!(%err, "aborting access check");
        })?;
        let Some(resolution) = state.step(raw, tag, owner, cred, want) else {
            continue;
        };

        let decision = match resolution {
            Resolution::Check(perm) => AccessDecision::check(perm, want),
            Resolution::Masked(entry) => resolve_mask(&blob, entry, want),
            Resolution::Deny => AccessDecision::Denied,
        };
        trace_perm!(
            index = raw.index,
            ?tag,
            want = %want,
            ?decision,
            "access check decided"
        );
        return Ok(decision);
    }

    trace_perm!(?state, "ACL ended before the other entry");
    Err(AclError::IncompleteAcl)
}

/// Caps `entry` with the first mask after it.
fn resolve_mask(blob: &EaBlob<'_>, entry: RawEntry, want: AclPerm) -> AccessDecision {
    match blob.entries_after(entry.index).find(|next| next.tag == ACL_MASK) {
        Some(mask) => AccessDecision::check(entry.perm() & mask.perm(), want),
        None => AccessDecision::check(entry.perm(), want),
    }
}

/// Runs [`permission`] and treats every fault as a denial.
#[must_use]
pub fn check_access(buf: &[u8], owner: Owner, cred: &Credentials<'_>, want: AclPerm) -> bool {
    permission(buf, owner, cred, want).is_ok_and(AccessDecision::is_granted)
}
