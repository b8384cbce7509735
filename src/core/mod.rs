pub mod engine;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod subtitle;

pub use crate::domain::model::Deal;
pub use crate::domain::ports::{ConfigProvider, Pipeline, Publisher};
pub use crate::utils::error::Result;
