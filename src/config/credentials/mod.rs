use super::schema::Config;
use tracing::debug;

macro_rules! define_credentials {
    ($( $name:literal, $env:literal => $($path:ident).+ );* $(;)?) => {
        /// All known credential slot names.
        pub const CREDENTIAL_NAMES: &[&str] = &[$($name),*];

        /// (slot name, env var name) pairs.
        pub const CREDENTIAL_ENV_VARS: &[(&str, &str)] = &[$(($name, $env)),*];

        /// Get the current value of a credential field by slot name.
        pub fn get_credential_value<'a>(config: &'a Config, name: &str) -> Option<&'a str> {
            match name {
                $($name => Some(config.$($path).+.as_str()),)*
                _ => None,
            }
        }

        /// Apply overrides from `lookup`, which maps an env var name to its value.
        ///
        /// Empty values are ignored so an exported-but-blank variable does not
        /// wipe a value from the config file.
        pub fn apply_overrides_with<F>(config: &mut Config, lookup: F)
        where
            F: Fn(&str) -> Option<String>,
        {
            $(
                if let Some(val) = lookup($env) {
                    if !val.is_empty() {
                        debug!("config: {} overridden from {}", $name, $env);
                        config.$($path).+ = val;
                    }
                }
            )*
        }
    };
}

define_credentials! {
    "api-url",      "RCS_CHATBOT_API_URL"      => gateway.api_url;
    "bot-id",       "RCS_CHATBOT_BOT_ID"       => gateway.bot_id;
    "access-token", "RCS_CHATBOT_ACCESS_TOKEN" => gateway.access_token;
}

/// Apply environment variable overrides.
///
/// Any `RCS_CHATBOT_*` env var that is set and non-empty overwrites the
/// corresponding gateway field, so the access token can be injected without
/// writing it to disk.
pub fn apply_env_overrides(config: &mut Config) {
    apply_overrides_with(config, |name| std::env::var(name).ok());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_overrides_replace_non_empty_values() {
        let mut config = Config::default();
        config.gateway.bot_id = "from-file".into();

        let env: HashMap<&str, &str> = [
            ("RCS_CHATBOT_BOT_ID", "from-env"),
            ("RCS_CHATBOT_ACCESS_TOKEN", "tok"),
            ("RCS_CHATBOT_API_URL", ""),
        ]
        .into_iter()
        .collect();
        apply_overrides_with(&mut config, |name| env.get(name).map(|v| (*v).to_string()));

        assert_eq!(config.gateway.bot_id, "from-env");
        assert_eq!(config.gateway.access_token, "tok");
        assert!(config.gateway.api_url.is_empty());
    }

    #[test]
    fn test_credential_slots_resolve() {
        let mut config = Config::default();
        config.gateway.access_token = "abc".into();
        assert_eq!(get_credential_value(&config, "access-token"), Some("abc"));
        assert_eq!(get_credential_value(&config, "nope"), None);
        assert_eq!(CREDENTIAL_NAMES.len(), CREDENTIAL_ENV_VARS.len());
    }
}
