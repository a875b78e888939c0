// src/lib.rs
//! JobPulse: scrape job-title listings for a location, summarize trending
//! roles through a hosted completion API, and optionally personalize the
//! summary against an uploaded profile PDF.

pub mod completion;
pub mod environment;
pub mod job_trends;
pub mod pdf_text;
pub mod pipeline;
pub mod web;

pub use pipeline::{JobTrendPipeline, RunInput, RunReport, Shell, ShellState};
