use serde::{Deserialize, Serialize};

/// Applicant supplied details used during screening.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCardApplication {
    pub gross_annual_income: u64,
    pub age: u32,
    #[serde(default)]
    pub frequent_flyer_number: Option<String>,
}

impl CreditCardApplication {
    pub fn new(gross_annual_income: u64, age: u32) -> Self {
        Self {
            gross_annual_income,
            age,
            frequent_flyer_number: None,
        }
    }

    pub fn with_frequent_flyer_number(mut self, number: impl Into<String>) -> Self {
        self.frequent_flyer_number = Some(number.into());
        self
    }

    /// The identifier handed to the validator; absent numbers are passed as an empty string.
    pub fn frequent_flyer_number(&self) -> &str {
        self.frequent_flyer_number.as_deref().unwrap_or_default()
    }
}
