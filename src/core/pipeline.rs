use crate::core::parser::{self, ParseOutcome};
use crate::core::render;
use crate::core::{ConfigProvider, Deal, Pipeline, Publisher};
use crate::utils::error::Result;
use chrono::Local;
use reqwest::Client;
use scraper::Html;

pub struct ScrapePipeline<P: Publisher, C: ConfigProvider> {
    publisher: P,
    config: C,
    client: Client,
}

impl<P: Publisher, C: ConfigProvider> ScrapePipeline<P, C> {
    pub fn new(publisher: P, config: C) -> Self {
        Self {
            publisher,
            config,
            client: Client::new(),
        }
    }

    async fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        tracing::debug!("Page response status: {}", response.status());
        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }

    // Parsing stays synchronous so the non-Send DOM never crosses an await.
    fn collect_page_deals(&self, body: &str) -> Vec<Deal> {
        let document = Html::parse_document(body);
        let mut deals = Vec::new();
        for item in document.select(&parser::LISTING) {
            if let ParseOutcome::Deal(deal) = parser::parse_listing(item, &self.config) {
                deals.push(deal);
            }
        }
        deals
    }
}

#[async_trait::async_trait]
impl<P: Publisher, C: ConfigProvider> Pipeline for ScrapePipeline<P, C> {
    async fn scan(&self) -> Result<Vec<Deal>> {
        let mut all_deals = Vec::new();

        for page in 1..=self.config.pages() {
            let url = format!("{}?page={}", self.config.base_url(), page);
            tracing::debug!("Fetching page {}: {}", page, url);

            let body = match self.fetch_page(&url).await {
                Ok(body) => body,
                Err(e) => {
                    tracing::error!("Error scanning page {}: {}", page, e);
                    continue;
                }
            };

            let deals = self.collect_page_deals(&body);
            tracing::debug!("Page {} contributed {} deals", page, deals.len());
            all_deals.extend(deals);
        }

        Ok(all_deals)
    }

    async fn render(&self, deals: Vec<Deal>) -> Result<String> {
        Ok(render::render_document(&deals, Local::now()))
    }

    async fn publish(&self, document: String) -> Result<String> {
        self.publisher.publish(&document).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockPublisher {
        documents: Arc<Mutex<Vec<String>>>,
    }

    impl MockPublisher {
        fn new() -> Self {
            Self {
                documents: Arc::new(Mutex::new(Vec::new())),
            }
        }

        async fn published(&self) -> Vec<String> {
            self.documents.lock().await.clone()
        }
    }

    impl Publisher for MockPublisher {
        async fn publish(&self, document: &str) -> Result<String> {
            let mut documents = self.documents.lock().await;
            documents.push(document.to_string());
            Ok("mock://published".to_string())
        }
    }

    struct MockConfig {
        base_url: String,
        pages: u32,
    }

    impl MockConfig {
        fn new(base_url: String, pages: u32) -> Self {
            Self { base_url, pages }
        }
    }

    impl ConfigProvider for MockConfig {
        fn base_url(&self) -> &str {
            &self.base_url
        }

        fn site_origin(&self) -> &str {
            "https://vistaauction.com"
        }

        fn pages(&self) -> u32 {
            self.pages
        }

        fn min_discount(&self) -> f64 {
            60.0
        }

        fn max_discount(&self) -> f64 {
            100.0
        }
    }

    fn listing_card(title: &str, price: &str, subtitle: &str, href: &str) -> String {
        format!(
            r#"<div class="panel panel-default hasQuickbid clearfix listing">
                <h2 class="title"><a href="{href}">{title}</a></h2>
                <span class="awe-rt-CurrentPrice">{price}</span>
                <h3 class="subtitle"><a>{subtitle}</a></h3>
            </div>"#
        )
    }

    fn browse_page(cards: &[String]) -> String {
        format!("<html><body>{}</body></html>", cards.join("\n"))
    }

    fn mock_page(server: &MockServer, page: u32, body: String) -> httpmock::Mock<'_> {
        server.mock(move |when, then| {
            when.method(GET)
                .path("/Browse/C26985692/Electronics")
                .query_param("page", page.to_string());
            then.status(200)
                .header("Content-Type", "text/html")
                .body(body);
        })
    }

    #[tokio::test]
    async fn test_scan_collects_deals_across_pages_in_order() {
        let server = MockServer::start();
        let page1 = mock_page(
            &server,
            1,
            browse_page(&[
                listing_card("Alpha", "$25.00", "MSRP: $100.00 - New", "/a"),
                listing_card("Beta", "$10.00", "MSRP: $100.00 - Open Box", "/b"),
            ]),
        );
        let page2 = mock_page(
            &server,
            2,
            browse_page(&[listing_card("Gamma", "$30.00", "MSRP: $100.00 - New", "/c")]),
        );

        let config = MockConfig::new(server.url("/Browse/C26985692/Electronics"), 2);
        let pipeline = ScrapePipeline::new(MockPublisher::new(), config);

        let deals = pipeline.scan().await.unwrap();

        page1.assert();
        page2.assert();
        let names: Vec<&str> = deals.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[tokio::test]
    async fn test_scan_skips_failing_page_and_continues() {
        let server = MockServer::start();
        let failing = server.mock(|when, then| {
            when.method(GET)
                .path("/Browse/C26985692/Electronics")
                .query_param("page", "1");
            then.status(500);
        });
        let page2 = mock_page(
            &server,
            2,
            browse_page(&[listing_card("Survivor", "$20.00", "MSRP: $100.00 - New", "/s")]),
        );

        let config = MockConfig::new(server.url("/Browse/C26985692/Electronics"), 2);
        let pipeline = ScrapePipeline::new(MockPublisher::new(), config);

        let deals = pipeline.scan().await.unwrap();

        failing.assert();
        page2.assert();
        assert_eq!(deals.len(), 1);
        assert_eq!(deals[0].name, "Survivor");
    }

    #[tokio::test]
    async fn test_scan_excludes_filtered_and_invalid_listings() {
        let server = MockServer::start();
        let cards = vec![
            listing_card("Keeper", "$25.00", "MSRP: $100.00 - New", "/k"),
            // too small a discount
            listing_card("Barely off", "$90.00", "MSRP: $100.00 - New", "/n"),
            // no MSRP at all
            listing_card("Mystery", "$5.00", "Open Box - Grade A", "/m"),
            // price element missing
            r#"<div class="panel panel-default hasQuickbid clearfix listing">
                <h2 class="title"><a href="/p">Priceless</a></h2>
            </div>"#
                .to_string(),
        ];
        let page1 = mock_page(&server, 1, browse_page(&cards));

        let config = MockConfig::new(server.url("/Browse/C26985692/Electronics"), 1);
        let pipeline = ScrapePipeline::new(MockPublisher::new(), config);

        let deals = pipeline.scan().await.unwrap();

        page1.assert();
        assert_eq!(deals.len(), 1);
        assert_eq!(deals[0].name, "Keeper");
    }

    #[tokio::test]
    async fn test_scan_with_no_listings_returns_empty() {
        let server = MockServer::start();
        let page1 = mock_page(&server, 1, "<html><body><p>Nothing here</p></body></html>".to_string());

        let config = MockConfig::new(server.url("/Browse/C26985692/Electronics"), 1);
        let pipeline = ScrapePipeline::new(MockPublisher::new(), config);

        let deals = pipeline.scan().await.unwrap();

        page1.assert();
        assert!(deals.is_empty());
    }

    #[tokio::test]
    async fn test_render_embeds_every_deal() {
        let config = MockConfig::new("http://unused".to_string(), 1);
        let pipeline = ScrapePipeline::new(MockPublisher::new(), config);

        let deals = vec![Deal {
            name: "Rendered".to_string(),
            price: 25.0,
            condition: "New".to_string(),
            msrp: 100.0,
            discount: 75.0,
            listing_link: "https://vistaauction.com/Event/Details/7".to_string(),
        }];

        let html = pipeline.render(deals).await.unwrap();
        assert!(html.contains("Rendered"));
        assert!(html.contains("$25.00"));
        assert!(html.contains("75.0%"));
    }

    #[tokio::test]
    async fn test_publish_delegates_to_the_publisher() {
        let publisher = MockPublisher::new();
        let config = MockConfig::new("http://unused".to_string(), 1);
        let pipeline = ScrapePipeline::new(publisher.clone(), config);

        let location = pipeline.publish("<html></html>".to_string()).await.unwrap();

        assert_eq!(location, "mock://published");
        assert_eq!(publisher.published().await, vec!["<html></html>".to_string()]);
    }

    #[tokio::test]
    async fn test_full_pipeline_with_zero_deals_publishes_header_only_page() {
        let server = MockServer::start();
        mock_page(&server, 1, "<html><body></body></html>".to_string());

        let publisher = MockPublisher::new();
        let config = MockConfig::new(server.url("/Browse/C26985692/Electronics"), 1);
        let pipeline = ScrapePipeline::new(publisher.clone(), config);

        let deals = pipeline.scan().await.unwrap();
        let html = pipeline.render(deals).await.unwrap();
        pipeline.publish(html).await.unwrap();

        let published = publisher.published().await;
        assert_eq!(published.len(), 1);
        assert!(published[0].contains("<th>Discount</th>"));
        assert!(!published[0].contains("<td>"));
    }
}
