use crate::adapters::soda::DEFAULT_ENDPOINT;
use crate::domain::ports::ConfigProvider;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "foodtruck-finder")]
#[command(about = "Find food trucks that are open right now")]
pub struct CliConfig {
    /// SODA endpoint serving the mobile food permit schedule
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Rows shown per page of results
    #[arg(long, default_value_t = crate::core::presenter::DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn page_size(&self) -> usize {
        self.page_size
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_positive_number("page_size", self.page_size, 1)?;
        Ok(())
    }
}
