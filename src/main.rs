use clap::Parser;
use deal_tracker::utils::{logger, validation::Validate};
use deal_tracker::{CliConfig, DealEngine, LocalPublisher, ScrapePipeline};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting deal-tracker CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 創建發布器和管道
    let publisher = LocalPublisher::new(config.output_file.clone(), !config.no_browser);
    publisher.remove_stale_output();

    let interval = Duration::from_secs(config.interval_secs);
    let lock_guard = publisher.clone();

    let pipeline = ScrapePipeline::new(publisher, config);
    let engine = DealEngine::new_with_monitoring(pipeline, monitor_enabled);

    loop {
        match engine.run().await {
            Ok(location) => tracing::info!("✅ Cycle complete, page at {}", location),
            Err(e) => tracing::error!("❌ Cycle failed: {}", e),
        }

        // the interrupt is only honored between cycles, never mid-fetch
        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupt received, shutting down");
                break;
            }
        }
    }

    lock_guard.clear_lock();
    println!("👋 Deal tracker stopped");

    Ok(())
}
