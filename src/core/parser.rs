//! Extraction of one `Deal` from one listing card.
//!
//! Selectors live here so a site markup change is a one-file fix.

use crate::core::subtitle::{self, SubtitleFacts};
use crate::domain::model::Deal;
use crate::domain::ports::ConfigProvider;
use scraper::{ElementRef, Selector};
use std::sync::LazyLock;

/// Listing card container on a browse page.
pub static LISTING: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.panel.panel-default.hasQuickbid.clearfix.listing").unwrap()
});

static TITLE_LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h2.title a").unwrap());

static CURRENT_PRICE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.awe-rt-CurrentPrice").unwrap());

static SUBTITLE_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h3.subtitle a").unwrap());

#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Deal(Deal),
    /// Rejected by the discount gate. Not an error, just not a match.
    Filtered,
    /// A required field was missing or unparseable; already logged.
    Invalid,
}

pub fn parse_listing<C: ConfigProvider>(item: ElementRef<'_>, config: &C) -> ParseOutcome {
    let Some(title) = item.select(&TITLE_LINK).next() else {
        tracing::error!("Listing card without a title link, skipping");
        return ParseOutcome::Invalid;
    };
    let name = element_text(title);

    let price_text = item.select(&CURRENT_PRICE).next().map(element_text);
    let price = match price_text.as_deref().and_then(parse_price) {
        Some(price) => price,
        None => {
            tracing::warn!("Failed to extract price for {:?}", name);
            return ParseOutcome::Invalid;
        }
    };

    let facts = match item.select(&SUBTITLE_LINK).next() {
        Some(el) => {
            let text = element_text(el);
            match subtitle::parse_subtitle(&text) {
                Ok(facts) => facts,
                Err(e) => {
                    tracing::warn!("Failed to parse subtitle {:?}: {}", text, e);
                    SubtitleFacts {
                        msrp: None,
                        condition: subtitle::DEFAULT_CONDITION.to_string(),
                    }
                }
            }
        }
        None => SubtitleFacts {
            msrp: None,
            condition: subtitle::DEFAULT_CONDITION.to_string(),
        },
    };

    // Items without a discoverable MSRP are dropped, never defaulted.
    let Some(msrp) = facts.msrp else {
        return ParseOutcome::Filtered;
    };
    if price <= 0.0 || msrp <= 0.0 {
        return ParseOutcome::Filtered;
    }

    let discount = (msrp - price) / msrp * 100.0;
    if discount < config.min_discount() || discount >= config.max_discount() {
        return ParseOutcome::Filtered;
    }

    let Some(href) = title.value().attr("href") else {
        tracing::error!("Listing {:?} has no href on its title link", name);
        return ParseOutcome::Invalid;
    };

    ParseOutcome::Deal(Deal {
        name,
        price,
        condition: facts.condition,
        msrp,
        discount,
        listing_link: absolutize(href, config.site_origin()),
    })
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn parse_price(text: &str) -> Option<f64> {
    text.replace(['$', ','], "").trim().parse::<f64>().ok()
}

fn absolutize(href: &str, origin: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{}{}", origin, href)
    }
}
