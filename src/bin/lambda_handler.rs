//! AWS Lambda handler for interest projections
//!
//! Accepts projection inputs as JSON and returns both yearly balance series
//! along with a summary. Supports Lambda Function URLs for direct HTTP access.

use interest_projector::{
    projection::{ProjectionConfig, ProjectionEngine, ProjectionSummary},
    ProjectionError, ProjectionInputs, MAX_PROJECTION_YEARS,
};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};

/// Input for a projection request
#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    #[serde(flatten)]
    pub inputs: ProjectionInputs,

    /// Reject invalid inputs with a 400 instead of projecting them as-is
    #[serde(default)]
    pub strict: bool,
}

/// Output from the projection
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResponse {
    pub results: Vec<f64>,
    pub results_without_contribution: Vec<f64>,
    pub summary: ProjectionSummary,
    pub execution_time_ms: u64,
}

fn cors_builder(status: u16) -> lambda_http::http::response::Builder {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

fn error_body(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

/// Map a method and raw body to a status code and response body
///
/// An empty body is returned only for the CORS preflight. The horizon limit
/// applies even to permissive requests so a single call stays bounded.
fn respond(method: &str, body: &str) -> (u16, String) {
    let start = std::time::Instant::now();

    if method == "OPTIONS" {
        return (200, String::new());
    }

    let request: ProjectionRequest = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => return (400, error_body(&format!("Invalid JSON: {}", e))),
    };

    if request.inputs.years > MAX_PROJECTION_YEARS {
        let e = ProjectionError::HorizonTooLong(request.inputs.years);
        return (400, error_body(&e.to_string()));
    }

    let engine = ProjectionEngine::new(ProjectionConfig {
        validate_inputs: request.strict,
    });
    let result = match engine.project(&request.inputs) {
        Ok(r) => r,
        Err(e) => return (400, error_body(&e.to_string())),
    };

    log::info!("projected {} years in {:?}", result.years(), start.elapsed());

    let summary = result.summary();
    let (results, results_without_contribution) = result.into_sequences();
    let response = ProjectionResponse {
        results,
        results_without_contribution,
        summary,
        execution_time_ms: start.elapsed().as_millis() as u64,
    };

    match serde_json::to_string(&response) {
        Ok(json) => (200, json),
        Err(e) => (500, error_body(&format!("Failed to encode response: {}", e))),
    }
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let (status, body) = respond(event.method().as_str(), &body_str);
    let body = if body.is_empty() { Body::Empty } else { Body::Text(body) };

    Ok(cors_builder(status).body(body)?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
