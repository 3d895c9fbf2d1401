//! crates/logging/src/config.rs
//! Logging configuration and its rendering into subscriber filter directives.

use tracing::Level;

use super::levels::{AclCategory, CategoryLevels, level_to_verbosity_level};

/// Logging configuration for the ACL engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LogConfig {
    /// Per-category verbosity levels.
    pub levels: CategoryLevels,
    /// Whether formatted output uses ANSI colours.
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            levels: CategoryLevels::default(),
            ansi: true,
        }
    }
}

impl LogConfig {
    /// Create a configuration from a `-v` count.
    ///
    /// Level 1 shows validation failures and masquerade results, level 2
    /// adds debug output everywhere, and level 3 and above shows every
    /// access decision.
    #[must_use]
    pub fn from_verbose_level(level: u8) -> Self {
        let mut config = Self::default();

        match level {
            0 => {}
            1 => {
                config.levels.validate = 2;
                config.levels.masq = 2;
            }
            2 => config.levels.set_all(2),
            _ => config.levels.set_all(3),
        }

        config
    }

    /// Apply a single flag token (e.g., "perm3", "masq").
    pub fn apply_flag(&mut self, token: &str) -> Result<(), String> {
        let (name, level) = parse_flag_token(token)?;
        let category =
            AclCategory::from_name(name).ok_or_else(|| format!("unknown ACL log flag: {name}"))?;
        self.levels.set(category, level);
        Ok(())
    }

    /// Apply a comma-separated list of flag tokens.
    pub fn apply_flags(&mut self, tokens: &str) -> Result<(), String> {
        tokens
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .try_for_each(|token| self.apply_flag(token))
    }

    /// Returns `true` when an event at `level` on `target` passes this configuration.
    #[must_use]
    pub fn enabled(&self, target: &str, level: &Level) -> bool {
        AclCategory::from_target(target)
            .is_some_and(|category| self.levels.get(category) >= level_to_verbosity_level(level))
    }

    /// Renders the configuration as `EnvFilter` directives.
    #[must_use]
    pub fn filter_directives(&self) -> String {
        AclCategory::ALL
            .iter()
            .map(|&category| {
                format!(
                    "{}={}",
                    category.target(),
                    directive_level(self.levels.get(category))
                )
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

const fn directive_level(level: u8) -> &'static str {
    match level {
        0 => "off",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Parse a flag token like "perm2" into ("perm", 2) or "masq" into ("masq", 1).
fn parse_flag_token(token: &str) -> Result<(&str, u8), String> {
    if token.is_empty() {
        return Err("empty flag token".to_string());
    }

    match token.find(|c: char| c.is_ascii_digit()) {
        Some(pos) => {
            let level = token[pos..]
                .parse::<u8>()
                .map_err(|_| format!("invalid level in flag: {token}"))?;
            Ok((&token[..pos], level))
        }
        None => Ok((token, 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_level_0_silences_everything() {
        let config = LogConfig::from_verbose_level(0);
        assert_eq!(config.levels, CategoryLevels::default());
        assert_eq!(
            config.filter_directives(),
            "acl::validate=off,acl::equiv=off,acl::masq=off,acl::perm=off"
        );
    }

    #[test]
    fn verbose_level_1_shows_faults_and_masquerade() {
        let config = LogConfig::from_verbose_level(1);
        assert!(config.enabled("acl::validate", &Level::DEBUG));
        assert!(config.enabled("acl::masq", &Level::DEBUG));
        assert!(!config.enabled("acl::perm", &Level::TRACE));
        assert!(!config.enabled("acl::equiv", &Level::TRACE));
    }

    #[test]
    fn verbose_level_3_and_higher_trace_everything() {
        for level in [3, 4, 9] {
            let config = LogConfig::from_verbose_level(level);
            assert!(
                AclCategory::ALL
                    .iter()
                    .all(|c| config.enabled(c.target(), &Level::TRACE))
            );
        }
    }

    #[test]
    fn parse_flag_token_defaults_to_level_1() {
        assert_eq!(parse_flag_token("perm"), Ok(("perm", 1)));
        assert_eq!(parse_flag_token("perm3"), Ok(("perm", 3)));
        assert!(parse_flag_token("").is_err());
        assert!(parse_flag_token("perm999").is_err());
    }

    #[test]
    fn apply_flags_sets_named_categories() {
        let mut config = LogConfig::default();
        config.apply_flags("perm3, masq").expect("valid flags");
        assert_eq!(config.levels.perm, 3);
        assert_eq!(config.levels.masq, 1);
        assert_eq!(
            config.filter_directives(),
            "acl::validate=off,acl::equiv=off,acl::masq=info,acl::perm=trace"
        );
    }

    #[test]
    fn apply_flag_rejects_unknown_category() {
        let mut config = LogConfig::default();
        let err = config.apply_flag("copy2").expect_err("unknown flag");
        assert_eq!(err, "unknown ACL log flag: copy");
    }

    #[test]
    fn unrelated_targets_are_never_enabled() {
        let config = LogConfig::from_verbose_level(5);
        assert!(!config.enabled("fuse::copy", &Level::ERROR));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_deserializes_with_defaults() {
        let config: LogConfig =
            serde_json::from_str(r#"{"levels":{"perm":3}}"#).expect("deserializes");
        assert_eq!(config.levels.perm, 3);
        assert_eq!(config.levels.masq, 0);
        assert!(config.ansi);
    }
}
