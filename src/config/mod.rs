#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "deal-tracker")]
#[command(about = "Scrapes auction listings and serves a live page of deep discounts")]
pub struct CliConfig {
    #[arg(
        long,
        default_value = "https://vistaauction.com/Browse/C26985692/Electronics"
    )]
    pub base_url: String,

    /// Origin used to rebase relative listing links.
    #[arg(long, default_value = "https://vistaauction.com")]
    pub site_origin: String,

    #[arg(long, default_value = "5")]
    pub pages: u32,

    #[arg(long, default_value = "live_deals.html")]
    pub output_file: String,

    /// Seconds to sleep between scan cycles.
    #[arg(long, default_value = "5")]
    pub interval_secs: u64,

    #[arg(long, default_value = "60.0")]
    pub min_discount: f64,

    #[arg(long, default_value = "100.0")]
    pub max_discount: f64,

    #[arg(long, help = "Never open the page in a browser")]
    pub no_browser: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn site_origin(&self) -> &str {
        &self.site_origin
    }

    fn pages(&self) -> u32 {
        self.pages
    }

    fn min_discount(&self) -> f64 {
        self.min_discount
    }

    fn max_discount(&self) -> f64 {
        self.max_discount
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_url("site_origin", &self.site_origin)?;
        validation::validate_non_empty_string("output_file", &self.output_file)?;
        validation::validate_positive_number("pages", self.pages as usize, 1)?;
        validation::validate_range("pages", self.pages, 1, 50)?;
        validation::validate_positive_number("interval_secs", self.interval_secs as usize, 1)?;
        validation::validate_discount_window(self.min_discount, self.max_discount)?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    fn default_config() -> CliConfig {
        CliConfig::parse_from(["deal-tracker"])
    }

    #[test]
    fn test_defaults_match_the_live_site() {
        let config = default_config();
        assert_eq!(
            config.base_url,
            "https://vistaauction.com/Browse/C26985692/Electronics"
        );
        assert_eq!(config.pages, 5);
        assert_eq!(config.output_file, "live_deals.html");
        assert_eq!(config.interval_secs, 5);
        assert_eq!(config.min_discount, 60.0);
        assert_eq!(config.max_discount, 100.0);
    }

    #[test]
    fn test_default_config_validates() {
        assert!(default_config().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let mut config = default_config();
        config.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_pages() {
        let mut config = default_config();
        config.pages = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_discount_window() {
        let mut config = default_config();
        config.min_discount = 90.0;
        config.max_discount = 60.0;
        assert!(config.validate().is_err());
    }
}
