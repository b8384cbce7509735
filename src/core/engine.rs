use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct DealEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> DealEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// One full scan → render → publish cycle. Returns the published location.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting deal scan...");
        let deals = self.pipeline.scan().await?;
        tracing::info!("Found {} valid deals", deals.len());
        self.monitor.log_stats("Scan");

        let document = self.pipeline.render(deals).await?;
        let location = self.pipeline.publish(document).await?;
        tracing::info!("Published deal page to {}", location);
        self.monitor.log_stats("Cycle");

        Ok(location)
    }
}
