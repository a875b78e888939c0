// src/pipeline.rs
//! The single-shot analysis pipeline and the shell state machine around it.
//!
//! One run is strictly sequential: scrape titles, summarize trends, then
//! optionally extract the uploaded profile PDF and ask for personalized
//! insights. Every stage failure becomes a user-visible message in the run
//! report; no failure escapes the run.

use std::sync::Arc;

use tracing::{info, warn};

use crate::completion::CompletionBackend;
use crate::job_trends::{personalized_insights, summarize_trends, TitleSource};
use crate::pdf_text;

pub const MISSING_LOCATION_MESSAGE: &str = "Please enter a location.";
pub const MISSING_PDF_MESSAGE: &str = "Please upload a profile PDF file.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Idle,
    Running,
}

/// Inputs for one user-triggered run.
pub struct RunInput {
    pub location: String,
    pub profile_pdf: Option<Vec<u8>>,
}

/// The four output regions rendered after a run. Each region is present only
/// when its stage produced something to show.
#[derive(Debug, Default)]
pub struct RunReport {
    pub trend_error: Option<String>,
    pub trend_analysis: Option<String>,
    pub insight_error: Option<String>,
    pub personalized_insights: Option<String>,
}

#[derive(Clone)]
pub struct JobTrendPipeline {
    titles: Arc<dyn TitleSource>,
    completion: Arc<dyn CompletionBackend>,
}

impl JobTrendPipeline {
    pub fn new(titles: Arc<dyn TitleSource>, completion: Arc<dyn CompletionBackend>) -> Self {
        Self { titles, completion }
    }

    /// Run the pipeline once. Short-circuit rules, in order: missing location
    /// stops before any network call; an empty title list stops before the
    /// summarizer; a missing PDF skips the advisor but keeps the trend
    /// summary.
    pub async fn run(&self, input: &RunInput) -> RunReport {
        let mut report = RunReport::default();

        let location = input.location.trim();
        if location.is_empty() {
            report.trend_error = Some(MISSING_LOCATION_MESSAGE.to_string());
            return report;
        }

        // Fail-soft: a scrape failure is reported and the run continues with
        // an empty title list, which the next check turns into a stop.
        let titles = match self.titles.fetch_titles(location).await {
            Ok(titles) => titles,
            Err(e) => {
                warn!("Scraping failed for '{}': {}", location, e);
                report.trend_error = Some(e.to_string());
                Vec::new()
            }
        };

        if titles.is_empty() {
            if report.trend_error.is_none() {
                report.trend_error = Some(format!("No job titles found for '{}'.", location));
            }
            return report;
        }

        let trend_analysis = match summarize_trends(self.completion.as_ref(), &titles).await {
            Ok(text) => {
                report.trend_analysis = Some(text.clone());
                text
            }
            Err(e) => {
                warn!("Trend summarization failed: {}", e);
                report.trend_error = Some(e.to_string());
                return report;
            }
        };

        let Some(pdf_bytes) = input.profile_pdf.as_deref() else {
            report.insight_error = Some(MISSING_PDF_MESSAGE.to_string());
            return report;
        };

        let profile_text = match pdf_text::extract_profile_text(pdf_bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!("Profile PDF extraction failed: {}", e);
                report.insight_error = Some(e.to_string());
                return report;
            }
        };

        match personalized_insights(self.completion.as_ref(), &profile_text, &trend_analysis).await
        {
            Ok(text) => report.personalized_insights = Some(text),
            Err(e) => {
                warn!("Personalized insights failed: {}", e);
                report.insight_error = Some(e.to_string());
            }
        }

        report
    }
}

/// Explicit Idle/Running wrapper around the pipeline. A trigger moves the
/// shell to Running for the duration of the run and back to Idle
/// unconditionally, whatever the run produced.
pub struct Shell {
    pipeline: JobTrendPipeline,
    state: ShellState,
}

impl Shell {
    pub fn new(pipeline: JobTrendPipeline) -> Self {
        Self {
            pipeline,
            state: ShellState::Idle,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub async fn trigger(&mut self, input: &RunInput) -> RunReport {
        self.state = ShellState::Running;
        info!("Run triggered for location '{}'", input.location.trim());

        let report = self.pipeline.run(input).await;

        self.state = ShellState::Idle;
        report
    }
}
