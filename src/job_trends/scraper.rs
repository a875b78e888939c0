// src/job_trends/scraper.rs
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use scraper::{Html, Selector};
use thiserror::Error;
use tracing::{info, warn};

/// Fixed structural path into the public listings page. A markup change on
/// the source site silently yields an empty list, not an error.
const LISTING_SELECTOR: &str = "#main-content section:nth-of-type(2) ul li div a span";

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("failed to fetch listings page: {0}")]
    Network(#[source] reqwest::Error),

    #[error("listings page returned HTTP {0}")]
    HttpStatus(StatusCode),

    #[error("failed to read listings page body: {0}")]
    Body(#[source] reqwest::Error),
}

/// Seam for the scraping stage, so the pipeline can be exercised against a
/// scripted fake.
#[async_trait]
pub trait TitleSource: Send + Sync {
    async fn fetch_titles(&self, location: &str) -> Result<Vec<String>, ScrapeError>;
}

pub struct JobTitleScraper {
    client: Client,
    host: String,
}

impl JobTitleScraper {
    pub fn new(host: String) -> Self {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
            .build()
            .expect("Failed to create HTTP client");

        Self { client, host }
    }

    fn trends_url(&self, location: &str) -> String {
        format!("https://{}/jobs/trends-in-jobs-{}", self.host, location)
    }
}

#[async_trait]
impl TitleSource for JobTitleScraper {
    async fn fetch_titles(&self, location: &str) -> Result<Vec<String>, ScrapeError> {
        let url = self.trends_url(location);
        info!("Fetching job listings: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ScrapeError::Network)?;

        if !response.status().is_success() {
            return Err(ScrapeError::HttpStatus(response.status()));
        }

        let html = response.text().await.map_err(ScrapeError::Body)?;
        let titles = extract_titles(&html);

        if titles.is_empty() {
            warn!("Listings page matched no titles for location '{}'", location);
        } else {
            info!("Scraped {} job titles for '{}'", titles.len(), location);
        }

        Ok(titles)
    }
}

/// Apply the fixed selector path to a fetched document and return the
/// matched text nodes in document order, whitespace-trimmed.
pub fn extract_titles(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let selector = match Selector::parse(LISTING_SELECTOR) {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    document
        .select(&selector)
        .map(|element| clean_text(&element.text().collect::<Vec<_>>().join(" ")))
        .filter(|text| !text.is_empty())
        .collect()
}

fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTINGS_PAGE: &str = r#"
        <html><body>
          <div id="main-content">
            <section><h2>Hero banner</h2></section>
            <section>
              <ul>
                <li><div><a href="/j/1"><span>  Software Engineer </span></a></div></li>
                <li><div><a href="/j/2"><span>Data
                    Analyst</span></a></div></li>
                <li><div><a href="/j/3"><span>Product Manager</span></a></div></li>
              </ul>
            </section>
            <section>
              <ul><li><div><a href="/other"><span>Unrelated Link</span></a></div></li></ul>
            </section>
          </div>
        </body></html>
    "#;

    #[test]
    fn extracts_titles_in_document_order_and_trimmed() {
        let titles = extract_titles(LISTINGS_PAGE);
        assert_eq!(
            titles,
            vec!["Software Engineer", "Data Analyst", "Product Manager"]
        );
    }

    #[test]
    fn no_matching_markup_yields_empty_list() {
        let titles = extract_titles("<html><body><p>totally different site</p></body></html>");
        assert!(titles.is_empty());
    }

    #[test]
    fn only_the_second_section_is_consulted() {
        let titles = extract_titles(LISTINGS_PAGE);
        assert!(!titles.contains(&"Unrelated Link".to_string()));
        assert!(!titles.iter().any(|t| t.contains("Hero")));
    }

    #[test]
    fn trends_url_interpolates_location_into_fixed_template() {
        let scraper = JobTitleScraper::new("in.linkedin.com".to_string());
        assert_eq!(
            scraper.trends_url("new-york"),
            "https://in.linkedin.com/jobs/trends-in-jobs-new-york"
        );
    }
}
