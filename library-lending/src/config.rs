use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Books a user may hold at once unless a policy says otherwise
pub const DEFAULT_LOAN_LIMIT: u32 = 3;

/// Errors raised while loading a lending policy
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The policy document is not valid JSON for a policy
    #[error("failed to parse lending policy: {0}")]
    Parse(#[from] serde_json::Error),

    /// A policy that allows no loans at all
    #[error("loan limit must be at least 1, got {0}")]
    InvalidLoanLimit(u32),
}

/// Rules applied to every loan a user makes.
///
/// Every constructor, deserialization included, rejects a zero loan cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "PolicyDocument")]
pub struct LendingPolicy {
    /// Maximum number of books a user may hold borrowed simultaneously, at least 1
    loan_limit: u32,
}

/// Unchecked policy as written in a config document
#[derive(Debug, Deserialize)]
#[serde(default)]
struct PolicyDocument {
    /// Requested loan cap
    loan_limit: u32,
}

impl Default for PolicyDocument {
    fn default() -> Self {
        Self { loan_limit: DEFAULT_LOAN_LIMIT }
    }
}

impl TryFrom<PolicyDocument> for LendingPolicy {
    type Error = ConfigError;

    fn try_from(document: PolicyDocument) -> Result<Self, Self::Error> {
        Self::with_loan_limit(document.loan_limit)
    }
}

impl Default for LendingPolicy {
    fn default() -> Self {
        Self { loan_limit: DEFAULT_LOAN_LIMIT }
    }
}

impl LendingPolicy {
    /// Build a policy with a custom loan cap
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidLoanLimit` when `loan_limit` is zero
    pub fn with_loan_limit(loan_limit: u32) -> Result<Self, ConfigError> {
        if loan_limit == 0 {
            return Err(ConfigError::InvalidLoanLimit(loan_limit));
        }
        Ok(Self { loan_limit })
    }

    #[must_use]
    pub const fn loan_limit(&self) -> u32 {
        self.loan_limit
    }

    /// Parse a policy from a JSON document such as `{"loan_limit": 5}`.
    /// Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON and
    /// `ConfigError::InvalidLoanLimit` for a zero loan cap
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let document: PolicyDocument = serde_json::from_str(json)?;
        Self::try_from(document)
    }
}
