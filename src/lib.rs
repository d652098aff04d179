//! Screening of credit card applications.
//!
//! The [`applications`] module holds the decision rules; [`config`], [`telemetry`] and
//! [`error`] carry the runtime plumbing shared by the command-line harness.

pub mod applications;
pub mod config;
pub mod error;
pub mod telemetry;

pub use applications::{
    CreditCardApplication, CreditCardApplicationDecision, CreditCardApplicationEvaluator,
    DecisionRule, Evaluation, EvaluatorError, FrequentFlyerNumberValidator, LicenseStatus,
};
