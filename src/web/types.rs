// src/web/types.rs
use rocket::form::FromForm;
use rocket::fs::TempFile;
use rocket::serde::Serialize;

use crate::pipeline::RunReport;

/// The analyze form: one location text field, one optional profile PDF.
#[derive(FromForm)]
pub struct AnalyzeForm<'f> {
    pub location: String,
    pub profile_pdf: Option<TempFile<'f>>,
}

/// The four output regions of one run, rendered to the client. Absent fields
/// mean the stage produced nothing to show.
#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TrendInsightsData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend_analysis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insight_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personalized_insights: Option<String>,
}

impl From<RunReport> for TrendInsightsData {
    fn from(report: RunReport) -> Self {
        Self {
            trend_error: report.trend_error,
            trend_analysis: report.trend_analysis,
            insight_error: report.insight_error,
            personalized_insights: report.personalized_insights,
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum ResponseType {
    Text,
    Data,
    Error,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TextResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct DataResponse<T> {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
    pub data: T,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardErrorResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
}

impl TextResponse {
    pub fn success(message: String) -> Self {
        Self {
            response_type: ResponseType::Text,
            success: true,
            message,
        }
    }
}

impl<T> DataResponse<T> {
    pub fn success(message: String, data: T) -> Self {
        Self {
            response_type: ResponseType::Data,
            success: true,
            message,
            data,
        }
    }
}

impl StandardErrorResponse {
    pub fn new(error: String, error_code: String, suggestions: Vec<String>) -> Self {
        Self {
            response_type: ResponseType::Error,
            success: false,
            error,
            error_code,
            suggestions,
        }
    }
}
