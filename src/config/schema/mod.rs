use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Generates a `Debug` impl that redacts secret fields.
///
/// Field specifiers:
/// - `field_name`            printed normally via `&self.field_name`
/// - `redact(field_name)`    `String` field, shows `[empty]` or `[REDACTED]`
macro_rules! redact_debug {
    (@field $builder:ident, $self:ident, redact($field:ident)) => {
        $builder.field(
            stringify!($field),
            &if $self.$field.is_empty() {
                "[empty]"
            } else {
                "[REDACTED]"
            },
        );
    };
    (@field $builder:ident, $self:ident, $field:ident) => {
        $builder.field(stringify!($field), &$self.$field);
    };

    (@fields $builder:ident, $self:ident,) => {};
    (@fields $builder:ident, $self:ident, redact($field:ident), $($rest:tt)*) => {
        redact_debug!(@field $builder, $self, redact($field));
        redact_debug!(@fields $builder, $self, $($rest)*);
    };
    (@fields $builder:ident, $self:ident, $field:ident, $($rest:tt)*) => {
        redact_debug!(@field $builder, $self, $field);
        redact_debug!(@fields $builder, $self, $($rest)*);
    };

    ($struct_name:ident, $($fields:tt)*) => {
        impl std::fmt::Debug for $struct_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let mut builder = f.debug_struct(stringify!($struct_name));
                redact_debug!(@fields builder, self, $($fields)*);
                builder.finish()
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Gateway
// ---------------------------------------------------------------------------

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// Credentials and endpoint of the MaaP gateway.
#[derive(Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default, rename = "apiUrl")]
    pub api_url: String,
    #[serde(default, rename = "botId")]
    pub bot_id: String,
    #[serde(default, rename = "accessToken")]
    pub access_token: String,
    #[serde(
        default = "default_connect_timeout_secs",
        rename = "connectTimeoutSecs"
    )]
    pub connect_timeout_secs: u64,
    #[serde(
        default = "default_request_timeout_secs",
        rename = "requestTimeoutSecs"
    )]
    pub request_timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            bot_id: String::new(),
            access_token: String::new(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

redact_debug!(
    GatewayConfig,
    api_url,
    bot_id,
    redact(access_token),
    connect_timeout_secs,
    request_timeout_secs,
);

impl GatewayConfig {
    pub fn new(
        api_url: impl Into<String>,
        bot_id: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            api_url: api_url.into(),
            bot_id: bot_id.into(),
            access_token: access_token.into(),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Webhook listener
// ---------------------------------------------------------------------------

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_path() -> String {
    "/".to_string()
}

/// Where the bundled webhook server listens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            path: default_path(),
        }
    }
}

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub webhook: WebhookConfig,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_gateway()?;
        self.validate_webhook()?;
        Ok(())
    }

    fn validate_gateway(&self) -> Result<(), ConfigError> {
        let g = &self.gateway;

        if g.api_url.is_empty() {
            return Err(ConfigError::Invalid("gateway.apiUrl is required".into()));
        }
        match url::Url::parse(&g.api_url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            Ok(parsed) => {
                return Err(ConfigError::Invalid(format!(
                    "gateway.apiUrl must use http or https, got {}",
                    parsed.scheme()
                )));
            }
            Err(e) => {
                return Err(ConfigError::Invalid(format!(
                    "gateway.apiUrl is not a valid URL: {}",
                    e
                )));
            }
        }
        if g.bot_id.is_empty() {
            return Err(ConfigError::Invalid("gateway.botId is required".into()));
        }
        if g.bot_id.contains('/') {
            return Err(ConfigError::Invalid(
                "gateway.botId must not contain '/'".into(),
            ));
        }
        if g.access_token.is_empty() {
            return Err(ConfigError::Invalid(
                "gateway.accessToken is required".into(),
            ));
        }
        if g.connect_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "gateway.connectTimeoutSecs must be > 0".into(),
            ));
        }
        if g.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "gateway.requestTimeoutSecs must be > 0".into(),
            ));
        }
        Ok(())
    }

    fn validate_webhook(&self) -> Result<(), ConfigError> {
        let w = &self.webhook;

        if w.port == 0 {
            return Err(ConfigError::Invalid("webhook.port must be > 0".into()));
        }
        if !w.path.starts_with('/') {
            return Err(ConfigError::Invalid(
                "webhook.path must start with '/'".into(),
            ));
        }
        Ok(())
    }
}
