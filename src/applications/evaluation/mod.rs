mod policy;

pub use policy::{
    CreditCardApplicationDecision, DecisionRule, AUTO_REFERRAL_MAX_AGE, HIGH_INCOME_THRESHOLD,
    LOW_INCOME_THRESHOLD,
};

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::CreditCardApplication;
use super::validator::FrequentFlyerNumberValidator;
use policy::decide_rule;

/// Stateless evaluator holding the injected frequent flyer number validator.
#[derive(Clone)]
pub struct CreditCardApplicationEvaluator {
    validator: Arc<dyn FrequentFlyerNumberValidator>,
}

impl CreditCardApplicationEvaluator {
    pub fn new(validator: Arc<dyn FrequentFlyerNumberValidator>) -> Self {
        Self { validator }
    }

    /// Builds an evaluator from a validator that may not have been wired up.
    pub fn try_new(
        validator: Option<Arc<dyn FrequentFlyerNumberValidator>>,
    ) -> Result<Self, EvaluatorError> {
        validator
            .map(Self::new)
            .ok_or(EvaluatorError::MissingDependency {
                dependency: "validator",
            })
    }

    pub fn evaluate(&self, application: &CreditCardApplication) -> CreditCardApplicationDecision {
        self.assess(application).decision
    }

    /// Evaluates the application and reports which rule produced the decision.
    pub fn assess(&self, application: &CreditCardApplication) -> Evaluation {
        let rule = decide_rule(application, self.validator.as_ref());
        let decision = rule.decision();

        debug!(
            rule = rule.label(),
            decision = decision.label(),
            "credit card application evaluated"
        );

        Evaluation { decision, rule }
    }
}

impl std::fmt::Debug for CreditCardApplicationEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreditCardApplicationEvaluator")
            .finish_non_exhaustive()
    }
}

/// Decision together with the rule that settled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub decision: CreditCardApplicationDecision,
    pub rule: DecisionRule,
}

impl Evaluation {
    pub fn summary(&self) -> String {
        format!("{}: {}", self.decision.summary(), self.rule.summary())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EvaluatorError {
    #[error("missing required dependency: {dependency}")]
    MissingDependency { dependency: &'static str },
}
