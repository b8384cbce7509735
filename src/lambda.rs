#[cfg(feature = "lambda")]
use aws_config::BehaviorVersion;
#[cfg(feature = "lambda")]
use aws_sdk_s3::config::Region;
#[cfg(feature = "lambda")]
use aws_sdk_s3::Client as S3Client;
#[cfg(feature = "lambda")]
use deal_tracker::config::lambda::{LambdaConfig, S3Publisher};
#[cfg(feature = "lambda")]
use deal_tracker::core::{engine::DealEngine, pipeline::ScrapePipeline};
#[cfg(feature = "lambda")]
use deal_tracker::utils::validation::Validate;
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "lambda")]
use std::env;

#[cfg(feature = "lambda")]
#[derive(Deserialize)]
pub struct Request {
    pub base_url: Option<String>,
    pub s3_bucket: Option<String>,
    pub s3_key: Option<String>,
}

#[cfg(feature = "lambda")]
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub message: String,
}

#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<Request>) -> Result<Response, Error> {
    tracing::info!("Starting deal scan Lambda");

    // 設置環境變量 (如果事件中有的話)
    if let Some(base_url) = &event.payload.base_url {
        env::set_var("BASE_URL", base_url);
    }
    if let Some(bucket) = &event.payload.s3_bucket {
        env::set_var("S3_BUCKET", bucket);
    }
    if let Some(key) = &event.payload.s3_key {
        env::set_var("S3_KEY", key);
    }

    // 任何錯誤都轉成 500 回應, 不往外拋
    let response = match run_cycle().await {
        Ok(location) => Response {
            status_code: 200,
            message: format!("Website updated successfully: {}", location),
        },
        Err(e) => {
            tracing::error!("Critical error: {}", e);
            Response {
                status_code: 500,
                message: "Error updating website".to_string(),
            }
        }
    };

    Ok(response)
}

#[cfg(feature = "lambda")]
async fn run_cycle() -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let lambda_config = LambdaConfig::from_env()?;
    lambda_config.validate()?;

    // 創建AWS配置和S3客戶端
    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let region = Region::new(lambda_config.s3_region.clone());
    let s3_config = aws_sdk_s3::config::Builder::from(&aws_config)
        .region(region)
        .build();
    let s3_client = S3Client::from_conf(s3_config);

    // 創建發布器和管道
    let publisher = S3Publisher::new(
        s3_client,
        lambda_config.s3_bucket.clone(),
        lambda_config.s3_key.clone(),
    );
    let pipeline = ScrapePipeline::new(publisher, lambda_config);

    let engine = DealEngine::new(pipeline);
    let location = engine.run().await?;

    Ok(location)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    deal_tracker::utils::logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
