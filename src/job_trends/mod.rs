// src/job_trends/mod.rs
//! Scraping and analysis of location-scoped job-title listings.

pub mod analyzer;
pub mod prompts;
pub mod scraper;

pub use analyzer::{personalized_insights, summarize_trends};
pub use scraper::{JobTitleScraper, ScrapeError, TitleSource};
