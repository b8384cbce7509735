use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Amount is the maximal non-whitespace run following the marker,
/// e.g. `MSRP: $1,299.99`.
static MSRP_AMOUNT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"MSRP: \$(\S+)").unwrap());

pub const DEFAULT_CONDITION: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleFacts {
    pub msrp: Option<f64>,
    pub condition: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum SubtitleError {
    #[error("MSRP marker present but no 'MSRP: $<amount>' in {0:?}")]
    MissingAmount(String),

    #[error("MSRP amount {0:?} is not a number")]
    BadAmount(String),
}

/// Parses the listing subtitle, shaped like
/// `"MSRP: $1,299.99 Some Product - Open Box - Damaged Packaging"`.
///
/// The subtitle splits on `" - "`. An `MSRP:` marker in the first segment
/// makes the amount mandatory; segments without the marker yield no MSRP.
/// Condition comes from the second segment when one exists, else from the
/// whole subtitle. Failures are explicit so markup drift shows up in the
/// logs instead of silently degrading data quality.
pub fn parse_subtitle(subtitle: &str) -> Result<SubtitleFacts, SubtitleError> {
    let mut segments = subtitle.split(" - ");
    let first = segments.next().unwrap_or("");

    let msrp = if first.contains("MSRP:") {
        let caps = MSRP_AMOUNT
            .captures(first)
            .ok_or_else(|| SubtitleError::MissingAmount(first.to_string()))?;
        let amount = caps[1]
            .replace(',', "")
            .parse::<f64>()
            .map_err(|_| SubtitleError::BadAmount(caps[1].to_string()))?;
        Some(amount)
    } else {
        None
    };

    let condition_part = segments.next().unwrap_or(subtitle);
    let condition = condition_part
        .split(" - ")
        .next()
        .unwrap_or(condition_part)
        .trim()
        .to_string();

    Ok(SubtitleFacts { msrp, condition })
}
