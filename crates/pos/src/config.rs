//! Environment-driven configuration.
//!
//! | Variable                | Values                  | Default      |
//! |-------------------------|-------------------------|--------------|
//! | `POS_LOG_FORMAT`        | `json` \| `pretty`      | `json`       |
//! | `POS_ORDER_ID_PREFIX`   | any non-blank text      | `ORD`        |
//! | `POS_ORDER_ID_WIDTH`    | 1..=12                  | `3`          |
//! | `POS_ORDER_ID_STRATEGY` | `sequential` \| `uuid`  | `sequential` |
//!
//! `RUST_LOG` still controls the log filter.

use serde::Serialize;
use thiserror::Error;

use pos_core::{IdGenerator, OrderId, SequentialIds, UuidIds};
use pos_observability::LogFormat;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// How new order ids are assigned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Sequential,
    Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PosConfig {
    pub log_format: LogFormat,
    pub order_id_prefix: String,
    pub order_id_width: usize,
    pub id_strategy: IdStrategy,
}

impl Default for PosConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Json,
            order_id_prefix: "ORD".to_owned(),
            order_id_width: 3,
            id_strategy: IdStrategy::Sequential,
        }
    }
}

impl PosConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("POS_LOG_FORMAT") {
            config.log_format = raw
                .parse()
                .map_err(|reason: String| ConfigError::invalid("POS_LOG_FORMAT", reason))?;
        }

        if let Some(raw) = lookup("POS_ORDER_ID_PREFIX") {
            let prefix = raw.trim();
            if prefix.is_empty() {
                return Err(ConfigError::invalid("POS_ORDER_ID_PREFIX", "must not be blank"));
            }
            config.order_id_prefix = prefix.to_owned();
        }

        if let Some(raw) = lookup("POS_ORDER_ID_WIDTH") {
            let width: usize = raw
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid("POS_ORDER_ID_WIDTH", format!("{e}")))?;
            if !(1..=12).contains(&width) {
                return Err(ConfigError::invalid(
                    "POS_ORDER_ID_WIDTH",
                    format!("{width} is outside 1..=12"),
                ));
            }
            config.order_id_width = width;
        }

        if let Some(raw) = lookup("POS_ORDER_ID_STRATEGY") {
            config.id_strategy = match raw.trim().to_ascii_lowercase().as_str() {
                "sequential" => IdStrategy::Sequential,
                "uuid" => IdStrategy::Uuid,
                other => {
                    return Err(ConfigError::invalid(
                        "POS_ORDER_ID_STRATEGY",
                        format!("unknown strategy `{other}` (expected sequential or uuid)"),
                    ));
                }
            };
        }

        Ok(config)
    }

    /// Id generator for new orders. Sequential ids continue after the highest
    /// id already present in `existing`.
    pub fn id_generator<'a>(
        &self,
        existing: impl IntoIterator<Item = &'a OrderId>,
    ) -> Box<dyn IdGenerator> {
        match self.id_strategy {
            IdStrategy::Sequential => {
                let ids = SequentialIds::new(self.order_id_prefix.clone(), self.order_id_width);
                let last = ids.highest_in(existing);
                Box::new(ids.starting_after(last))
            }
            IdStrategy::Uuid => Box::new(UuidIds::new(self.order_id_prefix.clone())),
        }
    }
}
