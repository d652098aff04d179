mod batch;
mod cli;
mod error;
mod registry;

pub use batch::{screen_batch, OutputFormat, ScreenSummary};
pub use error::ScreeningError;
pub use registry::RegistryValidator;

pub fn run() -> Result<(), ScreeningError> {
    cli::run()
}
