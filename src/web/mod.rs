// src/web/mod.rs
pub mod handlers;
pub mod types;

pub use types::*;

use std::sync::Arc;

use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::form::Form;
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use tracing::info;

use crate::completion::CompletionClient;
use crate::environment::AppConfig;
use crate::job_trends::JobTitleScraper;
use crate::pipeline::JobTrendPipeline;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new("Access-Control-Allow-Methods", "POST, GET, OPTIONS"));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[post("/analyze", data = "<upload>")]
pub async fn analyze(
    upload: Form<AnalyzeForm<'_>>,
    pipeline: &State<JobTrendPipeline>,
) -> Result<Json<DataResponse<TrendInsightsData>>, Json<StandardErrorResponse>> {
    handlers::analyze_handler(upload, pipeline).await
}

#[get("/health")]
pub async fn health() -> Json<TextResponse> {
    handlers::health_handler().await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Send the analyze form as multipart/form-data".to_string(),
            "Verify the location field is present".to_string(),
        ],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec!["Try again in a few moments".to_string()],
    ))
}

pub fn build_rocket(pipeline: JobTrendPipeline) -> Rocket<Build> {
    rocket::build()
        .attach(Cors)
        .manage(pipeline)
        .register("/api", catchers![bad_request, internal_error])
        .mount("/api", routes![analyze, health, options])
}

// Main server start function
pub async fn start_web_server(config: AppConfig) -> Result<()> {
    let pipeline = JobTrendPipeline::new(
        Arc::new(JobTitleScraper::new(config.listings_host.clone())),
        Arc::new(CompletionClient::new(config.openai_api_key.clone())),
    );

    info!("Starting JobPulse analysis server");
    info!("Listings host: {}", config.listings_host);
    info!("Server: http://0.0.0.0:{}", config.port);

    let figment = rocket::Config::figment()
        .merge(("port", config.port))
        .merge(("address", "0.0.0.0"));

    build_rocket(pipeline).configure(figment).launch().await?;

    Ok(())
}
