pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{cli::LocalPublisher, CliConfig};

#[cfg(feature = "lambda")]
pub use crate::config::lambda::{LambdaConfig, S3Publisher};

pub use crate::core::{engine::DealEngine, pipeline::ScrapePipeline};
pub use crate::domain::model::Deal;
pub use crate::utils::error::{Result, TrackerError};
