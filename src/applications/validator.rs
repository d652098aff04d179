use std::fmt;

use serde::{Deserialize, Serialize};

/// External registry that checks frequent flyer numbers and reports its own license.
///
/// Implementations are shared across threads by the evaluator, so they must be
/// safe for concurrent reads.
pub trait FrequentFlyerNumberValidator: Send + Sync {
    fn is_valid(&self, frequent_flyer_number: &str) -> bool;

    fn license_status(&self) -> LicenseStatus;
}

/// Raw license status string reported by a validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LicenseStatus(pub Option<String>);

impl LicenseStatus {
    pub const EXPIRED: &'static str = "EXPIRED";

    pub fn new(status: impl Into<String>) -> Self {
        Self(Some(status.into()))
    }

    pub fn expired() -> Self {
        Self::new(Self::EXPIRED)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_deref().unwrap_or_default()
    }

    /// Only the exact `EXPIRED` sentinel counts; absent, empty and any other value are usable.
    pub fn is_expired(&self) -> bool {
        self.0.as_deref() == Some(Self::EXPIRED)
    }
}

impl From<Option<String>> for LicenseStatus {
    fn from(value: Option<String>) -> Self {
        Self(value)
    }
}

impl From<&str> for LicenseStatus {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for LicenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(status) => f.write_str(status),
            None => f.write_str("<none>"),
        }
    }
}
