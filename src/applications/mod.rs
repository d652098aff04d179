//! Credit card application screening.
//!
//! An application is either accepted or declined automatically, or referred to a human
//! reviewer. The evaluator consults an injected frequent flyer number validator, which
//! must be supplied at construction.

pub mod domain;
pub mod evaluation;
pub mod validator;

#[cfg(test)]
mod tests;

pub use domain::CreditCardApplication;
pub use evaluation::{
    CreditCardApplicationDecision, CreditCardApplicationEvaluator, DecisionRule, Evaluation,
    EvaluatorError, AUTO_REFERRAL_MAX_AGE, HIGH_INCOME_THRESHOLD, LOW_INCOME_THRESHOLD,
};
pub use validator::{FrequentFlyerNumberValidator, LicenseStatus};
