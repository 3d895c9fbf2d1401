//! crates/logging/src/levels.rs
//! Diagnostic categories and their per-category verbosity levels.

use tracing::Level;

/// Diagnostic categories, one per ACL operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AclCategory {
    /// Blob header and length validation.
    Validate,
    /// Reduction of an ACL to a classic mode.
    Equiv,
    /// Create and chmod masquerade.
    Masq,
    /// Access decisions.
    Perm,
}

impl AclCategory {
    /// Every category, in declaration order.
    pub const ALL: [Self; 4] = [Self::Validate, Self::Equiv, Self::Masq, Self::Perm];

    /// Tracing target events of this category are emitted on.
    #[must_use]
    pub const fn target(self) -> &'static str {
        match self {
            Self::Validate => "acl::validate",
            Self::Equiv => "acl::equiv",
            Self::Masq => "acl::masq",
            Self::Perm => "acl::perm",
        }
    }

    /// Short name used in flag tokens such as `perm3`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Validate => "validate",
            Self::Equiv => "equiv",
            Self::Masq => "masq",
            Self::Perm => "perm",
        }
    }

    /// Looks up a category by its short name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.name() == name)
    }

    /// Maps a tracing target to its category.
    ///
    /// Matches the exact target and any nested module path under it, so
    /// `acl::perm::scan` still belongs to [`AclCategory::Perm`].
    #[must_use]
    pub fn from_target(target: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| {
            target
                .strip_prefix(category.target())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
        })
    }
}

/// Maps a tracing level to the category level needed to see it.
#[must_use]
pub const fn level_to_verbosity_level(level: &Level) -> u8 {
    match *level {
        Level::ERROR | Level::WARN | Level::INFO => 1,
        Level::DEBUG => 2,
        Level::TRACE => 3,
    }
}

/// Verbosity level for each category; `0` silences a category.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CategoryLevels {
    /// Validation level.
    pub validate: u8,
    /// Mode reduction level.
    pub equiv: u8,
    /// Masquerade level.
    pub masq: u8,
    /// Access decision level.
    pub perm: u8,
}

impl CategoryLevels {
    /// Get the level for a specific category.
    #[must_use]
    pub const fn get(&self, category: AclCategory) -> u8 {
        match category {
            AclCategory::Validate => self.validate,
            AclCategory::Equiv => self.equiv,
            AclCategory::Masq => self.masq,
            AclCategory::Perm => self.perm,
        }
    }

    /// Set the level for a specific category.
    pub fn set(&mut self, category: AclCategory, level: u8) {
        match category {
            AclCategory::Validate => self.validate = level,
            AclCategory::Equiv => self.equiv = level,
            AclCategory::Masq => self.masq = level,
            AclCategory::Perm => self.perm = level,
        }
    }

    /// Set all categories to the specified level.
    pub fn set_all(&mut self, level: u8) {
        for category in AclCategory::ALL {
            self.set(category, level);
        }
    }
}
