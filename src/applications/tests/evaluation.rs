use super::common::*;
use crate::applications::{
    CreditCardApplication, CreditCardApplicationDecision, DecisionRule, HIGH_INCOME_THRESHOLD,
    LOW_INCOME_THRESHOLD,
};

#[test]
fn accepts_high_income_without_consulting_validator() {
    let (evaluator, validator) = evaluator_with(RecordingValidator::licensed("EXPIRED"));

    let evaluation = evaluator.assess(&CreditCardApplication::new(HIGH_INCOME_THRESHOLD, 19));

    assert_eq!(evaluation.decision, CreditCardApplicationDecision::AutoAccepted);
    assert_eq!(evaluation.rule, DecisionRule::HighIncome);
    assert_eq!(validator.license_reads(), 0);
    assert!(validator.validated().is_empty());
}

#[test]
fn refers_when_license_expired_without_validating_number() {
    let (evaluator, validator) =
        evaluator_with(RecordingValidator::licensed("EXPIRED").accepting_everything());

    let evaluation = evaluator.assess(&application(19_999, 42, "x"));

    assert_eq!(
        evaluation.decision,
        CreditCardApplicationDecision::ReferredToHuman
    );
    assert_eq!(evaluation.rule, DecisionRule::LicenseExpired);
    assert_eq!(validator.license_reads(), 1);
    assert!(validator.validated().is_empty());
}

#[test]
fn refers_invalid_frequent_flyer_numbers() {
    let (evaluator, validator) = evaluator_with(RecordingValidator::licensed("OK"));

    let evaluation = evaluator.assess(&application(19_999, 42, "unknown"));

    assert_eq!(evaluation.rule, DecisionRule::InvalidFrequentFlyerNumber);
    assert_eq!(
        evaluation.decision,
        CreditCardApplicationDecision::ReferredToHuman
    );
    assert_eq!(validator.validated(), vec!["unknown".to_string()]);
}

#[test]
fn absent_number_is_validated_as_empty_string() {
    let (evaluator, validator) = evaluator_with(RecordingValidator::licensed("OK"));

    let decision = evaluator.evaluate(&CreditCardApplication::default());

    assert_eq!(decision, CreditCardApplicationDecision::ReferredToHuman);
    assert_eq!(validator.validated(), vec![String::new()]);
}

#[test]
fn refers_young_applicants_once_number_is_valid() {
    let (evaluator, _validator) = evaluator_with(RecordingValidator::licensed("OK").accepting("x"));

    let evaluation = evaluator.assess(&application(50_000, 19, "x"));

    assert_eq!(evaluation.rule, DecisionRule::YoungApplicant);
    assert_eq!(
        evaluation.decision,
        CreditCardApplicationDecision::ReferredToHuman
    );

    let boundary = evaluator.assess(&application(10_000, 20, "x"));
    assert_eq!(boundary.rule, DecisionRule::YoungApplicant);
}

#[test]
fn declines_low_income_adults() {
    let (evaluator, validator) = evaluator_with(RecordingValidator::licensed("OK").accepting("x"));

    let evaluation = evaluator.assess(&application(19_999, 42, "x"));

    assert_eq!(evaluation.decision, CreditCardApplicationDecision::AutoDeclined);
    assert_eq!(evaluation.rule, DecisionRule::LowIncome);
    assert_eq!(validator.license_reads(), 1);
    assert_eq!(validator.validated().len(), 1);
}

#[test]
fn refers_middle_income_adults() {
    let (evaluator, _validator) = evaluator_with(RecordingValidator::licensed("OK").accepting("x"));

    for income in [LOW_INCOME_THRESHOLD, 50_000, HIGH_INCOME_THRESHOLD - 1] {
        let evaluation = evaluator.assess(&application(income, 21, "x"));
        assert_eq!(evaluation.rule, DecisionRule::Residual, "income {income}");
        assert_eq!(
            evaluation.decision,
            CreditCardApplicationDecision::ReferredToHuman
        );
    }
}

#[test]
fn absent_license_status_is_usable() {
    let validator = RecordingValidator::default().accepting("x");
    let (evaluator, validator) = evaluator_with(validator);

    let decision = evaluator.evaluate(&application(0, 42, "x"));

    assert_eq!(decision, CreditCardApplicationDecision::AutoDeclined);
    assert_eq!(validator.validated().len(), 1);
}

#[test]
fn evaluation_summary_names_rule() {
    let (evaluator, _validator) = evaluator_with(RecordingValidator::licensed("EXPIRED"));

    let evaluation = evaluator.assess(&application(30_000, 30, "x"));

    assert!(evaluation.summary().contains("license expired"));
    assert!(evaluation.summary().contains("human reviewer"));
}

#[test]
fn decisions_serialize_in_snake_case() {
    let (evaluator, _validator) = evaluator_with(RecordingValidator::licensed("OK").accepting("x"));
    let evaluation = evaluator.assess(&application(19_999, 42, "x"));

    let json = serde_json::to_value(evaluation).expect("evaluation serializes");

    assert_eq!(json["decision"], "auto_declined");
    assert_eq!(json["rule"], "low_income");
    assert_eq!(json["decision"], evaluation.decision.label());
}
