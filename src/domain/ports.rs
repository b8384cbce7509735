use crate::domain::model::Deal;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Destination for a rendered document. Returns the written location.
pub trait Publisher: Send + Sync {
    fn publish(
        &self,
        document: &str,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    /// Origin prefixed onto relative listing links.
    fn site_origin(&self) -> &str;
    fn pages(&self) -> u32;
    fn min_discount(&self) -> f64;
    fn max_discount(&self) -> f64;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn scan(&self) -> Result<Vec<Deal>>;
    async fn render(&self, deals: Vec<Deal>) -> Result<String>;
    async fn publish(&self, document: String) -> Result<String>;
}
