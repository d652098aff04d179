use std::collections::BTreeMap;
use std::io::{Read, Write};

use credit_card_applications::{
    CreditCardApplication, CreditCardApplicationDecision, CreditCardApplicationEvaluator,
    DecisionRule, Evaluation,
};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ScreeningError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Decision counts for a screened batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenSummary {
    pub screened: usize,
    pub decisions: BTreeMap<&'static str, usize>,
}

impl ScreenSummary {
    fn record(&mut self, decision: CreditCardApplicationDecision) {
        self.screened += 1;
        *self.decisions.entry(decision.label()).or_default() += 1;
    }

    pub fn count(&self, decision: CreditCardApplicationDecision) -> usize {
        self.decisions.get(decision.label()).copied().unwrap_or(0)
    }
}

#[derive(Debug, Deserialize)]
struct ApplicationRow {
    reference: String,
    gross_annual_income: u64,
    age: u32,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    frequent_flyer_number: Option<String>,
}

impl ApplicationRow {
    fn into_parts(self) -> (String, CreditCardApplication) {
        (
            self.reference,
            CreditCardApplication {
                gross_annual_income: self.gross_annual_income,
                age: self.age,
                frequent_flyer_number: self.frequent_flyer_number,
            },
        )
    }
}

#[derive(Debug, Serialize)]
struct ScreenedRow<'a> {
    reference: &'a str,
    decision: CreditCardApplicationDecision,
    rule: DecisionRule,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Screens every row of an application CSV, writing one result line per row.
pub fn screen_batch<R: Read, W: Write>(
    evaluator: &CreditCardApplicationEvaluator,
    reader: R,
    mut writer: W,
    format: OutputFormat,
) -> Result<ScreenSummary, ScreeningError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut summary = ScreenSummary::default();

    for record in csv_reader.deserialize::<ApplicationRow>() {
        let (reference, application) = record?.into_parts();
        let evaluation = evaluator.assess(&application);
        write_evaluation(&mut writer, &reference, &evaluation, format)?;
        summary.record(evaluation.decision);
    }

    Ok(summary)
}

pub(crate) fn write_evaluation<W: Write>(
    writer: &mut W,
    reference: &str,
    evaluation: &Evaluation,
    format: OutputFormat,
) -> Result<(), ScreeningError> {
    match format {
        OutputFormat::Text => writeln!(
            writer,
            "{reference}: {} ({})",
            evaluation.decision.label(),
            evaluation.rule.summary()
        )?,
        OutputFormat::Json => {
            let row = ScreenedRow {
                reference,
                decision: evaluation.decision,
                rule: evaluation.rule,
            };
            serde_json::to_writer(&mut *writer, &row)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
