//! Login page configuration.
//!
//! Timings, post-login navigation targets and the recognised demo accounts.
//! Parsed from TOML into `*Input` structs where every key is optional, then
//! resolved against the defaults.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::role::Role;

pub const CONFIG_VERSION: u32 = 1;

const DEFAULT_SUBMIT_DELAY_MS: u64 = 1_500;
const DEFAULT_TOAST_DURATION_MS: u64 = 3_000;
const DEFAULT_REDIRECT_DELAY_MS: u64 = 1_500;
const DEFAULT_ADMIN_PATH: &str = "admin-dashboard.html";
const DEFAULT_INVESTIGATOR_PATH: &str = "investigator-dashboard.html";
const DEFAULT_ADMIN_ACCOUNT: &str = "admin@forensicdesk.com";
const DEFAULT_INVESTIGATOR_ACCOUNT: &str = "investigator@forensicdesk.com";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid config TOML: {0}")]
    Parse(String),
    #[error("unsupported config version {0}")]
    UnsupportedVersion(u32),
    #[error("navigation path for {0} must not be empty")]
    EmptyPath(Role),
}

// ── Raw input ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginConfigInput {
    pub version: u32,
    pub submit_delay_ms: Option<u64>,
    pub toast_duration_ms: Option<u64>,
    pub navigation: NavigationConfigInput,
    pub demo_accounts: DemoAccountsInput,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NavigationConfigInput {
    pub enabled: Option<bool>,
    pub delay_ms: Option<u64>,
    pub admin_path: Option<String>,
    pub investigator_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DemoAccountsInput {
    pub admin: Option<String>,
    pub investigator: Option<String>,
}

// ── Resolved config ─────────────────────────────────────────────────

/// Where to send the browser after a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationConfig {
    pub delay: Duration,
    pub admin_path: String,
    pub investigator_path: String,
}

impl NavigationConfig {
    pub fn path_for(&self, role: Role) -> &str {
        match role {
            Role::Admin => &self.admin_path,
            Role::Investigator => &self.investigator_path,
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_REDIRECT_DELAY_MS),
            admin_path: DEFAULT_ADMIN_PATH.into(),
            investigator_path: DEFAULT_INVESTIGATOR_PATH.into(),
        }
    }
}

/// Per-role demo account emails greeted as returning users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoAccounts {
    pub admin: Option<String>,
    pub investigator: Option<String>,
}

impl DemoAccounts {
    pub fn account_for(&self, role: Role) -> Option<&str> {
        match role {
            Role::Admin => self.admin.as_deref(),
            Role::Investigator => self.investigator.as_deref(),
        }
    }
}

impl Default for DemoAccounts {
    fn default() -> Self {
        Self {
            admin: Some(DEFAULT_ADMIN_ACCOUNT.into()),
            investigator: Some(DEFAULT_INVESTIGATOR_ACCOUNT.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginConfig {
    pub version: u32,
    /// How long the simulated authentication call takes.
    pub submit_delay: Duration,
    /// How long a toast stays on screen.
    pub toast_duration: Duration,
    /// `None` keeps the user on the login page after success.
    pub navigation: Option<NavigationConfig>,
    pub demo_accounts: DemoAccounts,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            submit_delay: Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS),
            toast_duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
            navigation: Some(NavigationConfig::default()),
            demo_accounts: DemoAccounts::default(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn resolve_path(value: Option<String>, role: Role, default: &str) -> Result<String, ConfigError> {
    match value {
        None => Ok(default.to_string()),
        Some(path) => non_empty(Some(path)).ok_or(ConfigError::EmptyPath(role)),
    }
}

impl LoginConfigInput {
    pub fn resolve(self) -> Result<LoginConfig, ConfigError> {
        let version = if self.version == 0 {
            CONFIG_VERSION
        } else {
            self.version
        };
        if version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion(version));
        }

        let nav = self.navigation;
        let navigation = if nav.enabled.unwrap_or(true) {
            Some(NavigationConfig {
                delay: Duration::from_millis(nav.delay_ms.unwrap_or(DEFAULT_REDIRECT_DELAY_MS)),
                admin_path: resolve_path(nav.admin_path, Role::Admin, DEFAULT_ADMIN_PATH)?,
                investigator_path: resolve_path(
                    nav.investigator_path,
                    Role::Investigator,
                    DEFAULT_INVESTIGATOR_PATH,
                )?,
            })
        } else {
            None
        };

        // An explicitly blank account disables the greeting for that role.
        let accounts = self.demo_accounts;
        let demo_accounts = DemoAccounts {
            admin: match accounts.admin {
                None => Some(DEFAULT_ADMIN_ACCOUNT.into()),
                some => non_empty(some),
            },
            investigator: match accounts.investigator {
                None => Some(DEFAULT_INVESTIGATOR_ACCOUNT.into()),
                some => non_empty(some),
            },
        };

        Ok(LoginConfig {
            version,
            submit_delay: Duration::from_millis(
                self.submit_delay_ms.unwrap_or(DEFAULT_SUBMIT_DELAY_MS),
            ),
            toast_duration: Duration::from_millis(
                self.toast_duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS),
            ),
            navigation,
            demo_accounts,
        })
    }
}

impl LoginConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        if input.trim().is_empty() {
            return Ok(LoginConfig::default());
        }
        let parsed: LoginConfigInput =
            toml::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))?;
        parsed.resolve()
    }
}
