use serde::{Deserialize, Serialize};
use tracing::warn;

use super::super::domain::CreditCardApplication;
use super::super::validator::FrequentFlyerNumberValidator;

/// Applicants at or above this income are accepted without consulting the validator.
pub const HIGH_INCOME_THRESHOLD: u64 = 100_000;
/// Applicants below this income are declined once the other checks pass.
pub const LOW_INCOME_THRESHOLD: u64 = 20_000;
/// Applicants at or below this age always go to a human.
pub const AUTO_REFERRAL_MAX_AGE: u32 = 20;

/// Screening outcome for a credit card application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditCardApplicationDecision {
    AutoAccepted,
    AutoDeclined,
    ReferredToHuman,
}

impl CreditCardApplicationDecision {
    pub fn label(&self) -> &'static str {
        match self {
            Self::AutoAccepted => "auto_accepted",
            Self::AutoDeclined => "auto_declined",
            Self::ReferredToHuman => "referred_to_human",
        }
    }

    pub fn summary(&self) -> String {
        match self {
            Self::AutoAccepted => "application accepted automatically".to_string(),
            Self::AutoDeclined => "application declined automatically".to_string(),
            Self::ReferredToHuman => "application referred to a human reviewer".to_string(),
        }
    }
}

/// The guard that settled an evaluation, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionRule {
    HighIncome,
    LicenseExpired,
    InvalidFrequentFlyerNumber,
    YoungApplicant,
    LowIncome,
    Residual,
}

impl DecisionRule {
    pub fn decision(&self) -> CreditCardApplicationDecision {
        match self {
            Self::HighIncome => CreditCardApplicationDecision::AutoAccepted,
            Self::LowIncome => CreditCardApplicationDecision::AutoDeclined,
            Self::LicenseExpired
            | Self::InvalidFrequentFlyerNumber
            | Self::YoungApplicant
            | Self::Residual => CreditCardApplicationDecision::ReferredToHuman,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::HighIncome => "high_income",
            Self::LicenseExpired => "license_expired",
            Self::InvalidFrequentFlyerNumber => "invalid_frequent_flyer_number",
            Self::YoungApplicant => "young_applicant",
            Self::LowIncome => "low_income",
            Self::Residual => "residual",
        }
    }

    pub fn summary(&self) -> String {
        match self {
            Self::HighIncome => format!("gross annual income at or above {HIGH_INCOME_THRESHOLD}"),
            Self::LicenseExpired => "frequent flyer validator license expired".to_string(),
            Self::InvalidFrequentFlyerNumber => "frequent flyer number rejected".to_string(),
            Self::YoungApplicant => format!("applicant aged {AUTO_REFERRAL_MAX_AGE} or younger"),
            Self::LowIncome => format!("gross annual income below {LOW_INCOME_THRESHOLD}"),
            Self::Residual => "no automatic rule applies".to_string(),
        }
    }
}

/// Runs the guards in order and stops at the first one that matches.
///
/// The license status is read at most once and `is_valid` called at most once, and
/// neither is touched when an earlier guard has already settled the outcome.
pub(crate) fn decide_rule(
    application: &CreditCardApplication,
    validator: &dyn FrequentFlyerNumberValidator,
) -> DecisionRule {
    if application.gross_annual_income >= HIGH_INCOME_THRESHOLD {
        return DecisionRule::HighIncome;
    }

    if validator.license_status().is_expired() {
        warn!("frequent flyer validator reports an expired license");
        return DecisionRule::LicenseExpired;
    }

    if !validator.is_valid(application.frequent_flyer_number()) {
        return DecisionRule::InvalidFrequentFlyerNumber;
    }

    if application.age <= AUTO_REFERRAL_MAX_AGE {
        return DecisionRule::YoungApplicant;
    }

    if application.gross_annual_income < LOW_INCOME_THRESHOLD {
        return DecisionRule::LowIncome;
    }

    DecisionRule::Residual
}
