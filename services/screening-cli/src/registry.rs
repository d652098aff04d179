use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use credit_card_applications::{FrequentFlyerNumberValidator, LicenseStatus};

use crate::error::ScreeningError;

/// Validator backed by a plain-text snapshot of registered frequent flyer numbers.
#[derive(Debug, Clone)]
pub struct RegistryValidator {
    numbers: HashSet<String>,
    license: LicenseStatus,
}

impl RegistryValidator {
    pub fn from_path(
        path: impl AsRef<Path>,
        license: LicenseStatus,
    ) -> Result<Self, ScreeningError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ScreeningError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), license).map_err(|source| ScreeningError::Read {
            path: path.display().to_string(),
            source,
        })
    }

    /// One number per line; blank lines and `#` comments are skipped.
    pub fn from_reader<R: BufRead>(reader: R, license: LicenseStatus) -> std::io::Result<Self> {
        let mut numbers = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            let entry = line.trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }
            numbers.insert(entry.to_string());
        }

        Ok(Self { numbers, license })
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

impl FrequentFlyerNumberValidator for RegistryValidator {
    fn is_valid(&self, frequent_flyer_number: &str) -> bool {
        self.numbers.contains(frequent_flyer_number)
    }

    fn license_status(&self) -> LicenseStatus {
        self.license.clone()
    }
}
