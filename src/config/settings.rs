use log::warn;

use crate::swiss::OddPolicy;

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
    pub pool_size: u32,
    pub enforce_foreign_keys: bool,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "swiss_pairings.db".to_string(),
            pool_size: 4,
            enforce_foreign_keys: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairingSettings {
    pub odd_policy: OddPolicy,
    pub avoid_rematches: bool,
}

impl PairingSettings {
    /// Replaces each setting that was given explicitly, keeping the rest
    pub fn overridden(&self, odd_policy: Option<OddPolicy>, avoid_rematches: Option<bool>) -> Self {
        Self {
            odd_policy: odd_policy.unwrap_or(self.odd_policy),
            avoid_rematches: avoid_rematches.unwrap_or(self.avoid_rematches),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub pairing: PairingSettings,
}

impl AppConfig {
    /// Defaults overridden by environment variables
    pub fn new() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("DATABASE_PATH") {
            config.database.path = path;
        }
        if let Some(size) = lookup("DATABASE_POOL_SIZE") {
            config.database.pool_size =
                parse_or_keep(&size, config.database.pool_size, "DATABASE_POOL_SIZE");
        }
        if let Some(flag) = lookup("DATABASE_FOREIGN_KEYS") {
            config.database.enforce_foreign_keys =
                parse_flag(&flag).unwrap_or(config.database.enforce_foreign_keys);
        }
        if let Some(policy) = lookup("SWISS_ODD_POLICY") {
            config.pairing.odd_policy =
                parse_or_keep(&policy, config.pairing.odd_policy, "SWISS_ODD_POLICY");
        }
        if let Some(flag) = lookup("SWISS_AVOID_REMATCHES") {
            config.pairing.avoid_rematches =
                parse_flag(&flag).unwrap_or(config.pairing.avoid_rematches);
        }

        config
    }
}

fn parse_or_keep<T: std::str::FromStr>(raw: &str, current: T, key: &str) -> T {
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!("Ignoring invalid value {:?} for {}", raw, key);
            current
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            warn!("Ignoring invalid boolean value {:?}", raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.database.path, "swiss_pairings.db");
        assert!(config.database.enforce_foreign_keys);
        assert_eq!(config.pairing.odd_policy, OddPolicy::Error);
        assert!(!config.pairing.avoid_rematches);
    }

    #[test]
    fn test_environment_overrides() {
        let config = config_from(&[
            ("DATABASE_PATH", "/tmp/round.db"),
            ("DATABASE_POOL_SIZE", "8"),
            ("DATABASE_FOREIGN_KEYS", "off"),
            ("SWISS_ODD_POLICY", "bye"),
            ("SWISS_AVOID_REMATCHES", "true"),
        ]);
        assert_eq!(config.database.path, "/tmp/round.db");
        assert_eq!(config.database.pool_size, 8);
        assert!(!config.database.enforce_foreign_keys);
        assert_eq!(config.pairing.odd_policy, OddPolicy::Bye);
        assert!(config.pairing.avoid_rematches);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = config_from(&[
            ("DATABASE_POOL_SIZE", "many"),
            ("SWISS_ODD_POLICY", "shuffle"),
            ("SWISS_AVOID_REMATCHES", "maybe"),
        ]);
        assert_eq!(config.database.pool_size, 4);
        assert_eq!(config.pairing.odd_policy, OddPolicy::Error);
        assert!(!config.pairing.avoid_rematches);
    }

    #[test]
    fn test_explicit_pairing_options_override_environment() {
        let config = config_from(&[("SWISS_AVOID_REMATCHES", "on"), ("SWISS_ODD_POLICY", "drop")]);

        let kept = config.pairing.overridden(None, None);
        assert_eq!(kept, config.pairing);

        let disabled = config.pairing.overridden(Some(OddPolicy::Bye), Some(false));
        assert_eq!(disabled.odd_policy, OddPolicy::Bye);
        assert!(!disabled.avoid_rematches);
    }
}
