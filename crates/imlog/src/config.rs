use imlog_image::Severity;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable read by [`LoggerConfig::from_env`].
pub const POLICY_ENV_VAR: &str = "IMLOG_VALIDATION_POLICY";

/// What the logger does with a tensor that fails validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Return an error, nothing is logged.
    Strict,
    /// Emit a warning and log the tensor as given, without a meaning.
    #[default]
    Lenient,
}

impl ValidationPolicy {
    /// The failure severity this policy maps to.
    pub fn severity(&self) -> Severity {
        match self {
            Self::Strict => Severity::Hard,
            Self::Lenient => Severity::Soft,
        }
    }
}

impl std::fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Lenient => write!(f, "lenient"),
        }
    }
}

impl std::str::FromStr for ValidationPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            _ => Err(ConfigError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Configuration of an [`crate::ImageLogger`].
///
/// # Examples
///
/// ```
/// use imlog::{LoggerConfig, ValidationPolicy};
///
/// let config = LoggerConfig::from_json(r#"{ "policy": "strict" }"#).unwrap();
/// assert_eq!(config.policy, ValidationPolicy::Strict);
/// assert_eq!(config.warn_stack_depth, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// How validation failures are reported.
    pub policy: ValidationPolicy,
    /// Stack depth passed along with every warning.
    pub warn_stack_depth: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            policy: ValidationPolicy::default(),
            warn_stack_depth: 1,
        }
    }
}

impl LoggerConfig {
    /// Set the validation policy.
    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the stack depth passed with warnings.
    pub fn with_warn_stack_depth(mut self, depth: usize) -> Self {
        self.warn_stack_depth = depth;
        self
    }

    /// Read the configuration from the environment.
    ///
    /// Unset variables keep their default value.
    ///
    /// # Errors
    ///
    /// Fails if [`POLICY_ENV_VAR`] is set to something other than a policy name.
    pub fn from_env() -> Result<Self, ConfigError> {
        let policy = match std::env::var(POLICY_ENV_VAR) {
            Ok(value) => Some(value),
            Err(std::env::VarError::NotPresent) => None,
            Err(std::env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NotUnicode(POLICY_ENV_VAR))
            }
        };
        Self::default().with_policy_override(policy.as_deref())
    }

    /// Parse a JSON configuration, missing fields take their default value.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    fn with_policy_override(self, policy: Option<&str>) -> Result<Self, ConfigError> {
        match policy {
            Some(name) => Ok(self.with_policy(name.parse()?)),
            None => Ok(self),
        }
    }
}
