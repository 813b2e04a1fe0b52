//! Event manager configuration.
//!
//! # Environment Variables
//!
//! - `UTILKIT_ALLOW_DUPLICATE_SUBSCRIPTION`: `true`/`false` (also `1`/`0`,
//!   `yes`/`no`, `on`/`off`)
//! - `UTILKIT_AMBIGUITY_POLICY`: `first_wins`, `subscribe_all` or `reject`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::EventError;

/// Environment variable controlling duplicate subscription.
pub const ALLOW_DUPLICATE_ENV: &str = "UTILKIT_ALLOW_DUPLICATE_SUBSCRIPTION";

/// Environment variable selecting the ambiguity policy.
pub const AMBIGUITY_POLICY_ENV: &str = "UTILKIT_AMBIGUITY_POLICY";

/// What to do when a listener declares several compatible handlers for the
/// same event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityPolicy {
    /// Subscribe the first declared handler and skip the rest.
    #[default]
    FirstWins,
    /// Subscribe every compatible handler.
    SubscribeAll,
    /// Fail the registration without subscribing anything.
    Reject,
}

impl AmbiguityPolicy {
    /// Returns the canonical string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstWins => "first_wins",
            Self::SubscribeAll => "subscribe_all",
            Self::Reject => "reject",
        }
    }
}

impl fmt::Display for AmbiguityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AmbiguityPolicy {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "first_wins" => Ok(Self::FirstWins),
            "subscribe_all" => Ok(Self::SubscribeAll),
            "reject" => Ok(Self::Reject),
            other => Err(EventError::InvalidArgument(format!(
                "unknown ambiguity policy: {}",
                other
            ))),
        }
    }
}

/// Configuration for an `EventManager`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventManagerConfig {
    /// Whether wiring the same listener to the same event twice creates a
    /// second subscription.
    pub allow_duplicate_subscription: bool,
    /// How to treat several compatible handlers for one event.
    pub ambiguity: AmbiguityPolicy,
}

impl Default for EventManagerConfig {
    fn default() -> Self {
        Self {
            allow_duplicate_subscription: true,
            ambiguity: AmbiguityPolicy::FirstWins,
        }
    }
}

impl EventManagerConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether duplicate subscriptions are allowed.
    pub fn with_allow_duplicate_subscription(mut self, allow: bool) -> Self {
        self.allow_duplicate_subscription = allow;
        self
    }

    /// Sets the ambiguity policy.
    pub fn with_ambiguity(mut self, policy: AmbiguityPolicy) -> Self {
        self.ambiguity = policy;
        self
    }

    /// Builds a config from environment variables.
    ///
    /// Missing variables keep their defaults. Unparsable values are logged
    /// and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ALLOW_DUPLICATE_ENV) {
            match parse_bool(&raw) {
                Some(value) => config.allow_duplicate_subscription = value,
                None => warn!(var = ALLOW_DUPLICATE_ENV, value = %raw, "ignoring invalid boolean"),
            }
        }

        if let Some(raw) = lookup(AMBIGUITY_POLICY_ENV) {
            match raw.parse::<AmbiguityPolicy>() {
                Ok(policy) => config.ambiguity = policy,
                Err(e) => warn!(var = AMBIGUITY_POLICY_ENV, error = %e, "ignoring invalid policy"),
            }
        }

        config
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
