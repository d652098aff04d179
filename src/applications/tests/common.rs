use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::applications::validator::{FrequentFlyerNumberValidator, LicenseStatus};
use crate::applications::{CreditCardApplication, CreditCardApplicationEvaluator};

/// Validator double that records every call made by the evaluator.
#[derive(Default)]
pub(super) struct RecordingValidator {
    license: LicenseStatus,
    accepted: HashSet<String>,
    accept_all: bool,
    license_reads: AtomicUsize,
    validated: Mutex<Vec<String>>,
}

impl RecordingValidator {
    pub(super) fn licensed(status: &str) -> Self {
        Self {
            license: LicenseStatus::new(status),
            ..Self::default()
        }
    }

    pub(super) fn accepting(mut self, number: &str) -> Self {
        self.accepted.insert(number.to_string());
        self
    }

    pub(super) fn accepting_everything(mut self) -> Self {
        self.accept_all = true;
        self
    }

    pub(super) fn license_reads(&self) -> usize {
        self.license_reads.load(Ordering::SeqCst)
    }

    pub(super) fn validated(&self) -> Vec<String> {
        self.validated
            .lock()
            .expect("validator mutex poisoned")
            .clone()
    }
}

impl FrequentFlyerNumberValidator for RecordingValidator {
    fn is_valid(&self, frequent_flyer_number: &str) -> bool {
        self.validated
            .lock()
            .expect("validator mutex poisoned")
            .push(frequent_flyer_number.to_string());
        self.accept_all || self.accepted.contains(frequent_flyer_number)
    }

    fn license_status(&self) -> LicenseStatus {
        self.license_reads.fetch_add(1, Ordering::SeqCst);
        self.license.clone()
    }
}

pub(super) fn evaluator_with(
    validator: RecordingValidator,
) -> (CreditCardApplicationEvaluator, Arc<RecordingValidator>) {
    let validator = Arc::new(validator);
    let evaluator = CreditCardApplicationEvaluator::new(validator.clone());
    (evaluator, validator)
}

pub(super) fn application(income: u64, age: u32, number: &str) -> CreditCardApplication {
    CreditCardApplication::new(income, age).with_frequent_flyer_number(number)
}
