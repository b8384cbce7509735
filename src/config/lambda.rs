#[cfg(feature = "lambda")]
use crate::core::{ConfigProvider, Publisher};
#[cfg(feature = "lambda")]
use crate::utils::error::{Result, TrackerError};
#[cfg(feature = "lambda")]
use aws_sdk_s3::Client as S3Client;
#[cfg(feature = "lambda")]
use std::env;

#[cfg(feature = "lambda")]
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub base_url: String,
    pub site_origin: String,
    pub pages: u32,
    pub min_discount: f64,
    pub max_discount: f64,
    pub s3_bucket: String,
    pub s3_key: String,
    pub s3_region: String,
}

#[cfg(feature = "lambda")]
impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            base_url: env::var("BASE_URL").unwrap_or_else(|_| {
                "https://vistaauction.com/Browse/C26985692/Electronics".to_string()
            }),
            site_origin: env::var("SITE_ORIGIN")
                .unwrap_or_else(|_| "https://vistaauction.com".to_string()),
            pages: env::var("PAGES")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),
            min_discount: env::var("MIN_DISCOUNT")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .unwrap_or(60.0),
            max_discount: env::var("MAX_DISCOUNT")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .unwrap_or(100.0),
            s3_bucket: env::var("S3_BUCKET").unwrap_or_else(|_| "vista-deal-tracker".to_string()),
            s3_key: env::var("S3_KEY").unwrap_or_else(|_| "index.html".to_string()),
            s3_region: env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
        })
    }
}

#[cfg(feature = "lambda")]
impl ConfigProvider for LambdaConfig {
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

#[cfg(feature = "lambda")]
impl crate::utils::validation::Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_url("base_url", &self.base_url)?;
        validate_url("site_origin", &self.site_origin)?;
        validate_positive_number("pages", self.pages as usize, 1)?;
        validate_discount_window(self.min_discount, self.max_discount)?;
        validate_s3_bucket_name("s3_bucket", &self.s3_bucket)?;
        validate_non_empty_string("s3_key", &self.s3_key)?;
        validate_non_empty_string("s3_region", &self.s3_region)?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}

#[cfg(feature = "lambda")]
fn validate_s3_bucket_name(field_name: &str, bucket_name: &str) -> Result<()> {
    if bucket_name.len() < 3 || bucket_name.len() > 63 {
        return Err(TrackerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: bucket_name.to_string(),
            reason: "S3 bucket name must be between 3 and 63 characters".to_string(),
        });
    }

    if !bucket_name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '.')
    {
        return Err(TrackerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: bucket_name.to_string(),
            reason: "S3 bucket name can only contain lowercase letters, numbers, hyphens, and dots"
                .to_string(),
        });
    }

    if bucket_name.starts_with('-') || bucket_name.ends_with('-') {
        return Err(TrackerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: bucket_name.to_string(),
            reason: "S3 bucket name cannot start or end with a hyphen".to_string(),
        });
    }

    Ok(())
}

/// Uploads the rendered page as one object, overwriting the prior cycle's.
#[cfg(feature = "lambda")]
#[derive(Debug, Clone)]
pub struct S3Publisher {
    client: S3Client,
    bucket: String,
    key: String,
}

#[cfg(feature = "lambda")]
impl S3Publisher {
    pub fn new(client: S3Client, bucket: String, key: String) -> Self {
        Self {
            client,
            bucket,
            key,
        }
    }
}

#[cfg(feature = "lambda")]
impl Publisher for S3Publisher {
    async fn publish(&self, document: &str) -> Result<String> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&self.key)
            .content_type("text/html")
            .body(document.as_bytes().to_vec().into())
            .send()
            .await
            .map_err(|e| TrackerError::PublishError {
                message: format!(
                    "Failed to upload s3://{}/{}: {}",
                    self.bucket, self.key, e
                ),
            })?;

        Ok(format!("s3://{}/{}", self.bucket, self.key))
    }
}
