// src/job_trends/analyzer.rs
use tracing::info;

use super::prompts;
use crate::completion::{CompletionBackend, CompletionError};

/// Summarize trending roles from the scraped title list. One completion call,
/// free-text result.
pub async fn summarize_trends(
    api: &dyn CompletionBackend,
    job_titles: &[String],
) -> Result<String, CompletionError> {
    info!("Summarizing trends over {} job titles", job_titles.len());

    api.complete(
        prompts::TREND_SYSTEM_PROMPT,
        &prompts::trend_prompt(job_titles),
    )
    .await
}

/// Combine the extracted profile text with the trend summary into a second
/// completion call for personalized advice.
pub async fn personalized_insights(
    api: &dyn CompletionBackend,
    profile_text: &str,
    trend_analysis: &str,
) -> Result<String, CompletionError> {
    info!("Requesting personalized insights against the trend summary");

    api.complete(
        prompts::ADVISOR_SYSTEM_PROMPT,
        &prompts::insight_prompt(profile_text, trend_analysis),
    )
    .await
}
