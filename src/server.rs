//! HTTP surface for readnext.
//!
//! # Endpoints
//!
//! - `GET /` - Landing page with route directory and corpus stats
//! - `GET /recommend` - HTML form for article text
//! - `POST /recommend` - Form submission, ranked matches as HTML
//! - `GET /recommend_api` - Recommendations via query parameters (JSON)
//! - `POST /recommend_api` - Recommendations via JSON body
//! - `POST /upload` - Embed an article and append it to the corpus
//! - `GET /health` - Status, article count, vector dimension
//!
//! Distances are rounded to 3 decimals here and only here; ranking happens
//! at full precision.

use std::sync::Arc;

use axum::{
    extract::{Form, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use crate::domain::entities::record::ScoredMatch;
use crate::domain::error::DomainError;
use crate::ReadNext;

pub type AppState = Arc<ReadNext>;

/// Query parameters accepted by `GET /recommend_api`.
#[derive(Debug, Deserialize)]
pub struct RecommendParams {
    #[serde(default)]
    pub article_headline: Option<String>,
    pub article_text: Option<String>,
    pub limit: Option<usize>,
}

/// JSON body accepted by `POST /recommend_api`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub headline: Option<String>,
    pub text: String,
    pub limit: Option<usize>,
}

/// Fields of the `/recommend` HTML form.
#[derive(Debug, Deserialize)]
pub struct RecommendForm {
    #[serde(default)]
    pub article_headline: String,
    pub article_text: String,
}

/// One recommended article, distance rounded for display.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendedArticle {
    pub article: String,
    pub distance: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub matches: Vec<RecommendedArticle>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadRequest {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub id: String,
    pub dimension: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub articles: usize,
    pub dimension: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn round3(d: f64) -> f64 {
    (d * 1000.0).round() / 1000.0
}

fn to_response(matches: Vec<ScoredMatch>) -> RecommendResponse {
    RecommendResponse {
        matches: matches
            .into_iter()
            .map(|m| RecommendedArticle {
                article: m.id,
                distance: round3(m.distance),
            })
            .collect(),
    }
}

fn error_status(err: &DomainError) -> StatusCode {
    match err {
        DomainError::InvalidVector(_)
        | DomainError::DimensionMismatch { .. }
        | DomainError::DegenerateVector => StatusCode::BAD_REQUEST,
        DomainError::Embedding(_) => StatusCode::BAD_GATEWAY,
        DomainError::MalformedRecord { .. } | DomainError::Corpus(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn error_response(err: DomainError) -> axum::response::Response {
    let status = error_status(&err);
    tracing::warn!(%err, %status, "request failed");
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

/// GET / - Landing page
async fn index(State(state): State<AppState>) -> Html<String> {
    let stats = state.stats();
    Html(format!(
        "<html><body>\
         <p>Welcome to readnext, a tool to point readers at articles similar \
         in content to the one they just finished.</p>\
         <p>Corpus: {} articles{}.</p>\
         <p>Navigate to /recommend to get article recommendations via form</p>\
         <p>Navigate to /recommend_api to get article recommendations via HTTP request</p>\
         <p>Navigate to /upload (POST) to add articles to the recommendation corpus</p>\
         </body></html>",
        stats.articles,
        stats
            .dimension
            .map(|d| format!(", {d}-dimensional embeddings"))
            .unwrap_or_default(),
    ))
}

/// GET /recommend - HTML form
async fn recommend_form() -> Html<&'static str> {
    Html(
        "<html><body><p>You give me text, I give you article recommendations</p><br>\
         <form action=\"/recommend\" method=\"POST\">\
         <input type=\"text\" placeholder=\"Headline\" name=\"article_headline\">\
         <input type=\"text\" placeholder=\"Body\" name=\"article_text\">\
         <input type=\"submit\" value=\"Submit\">\
         </form></body></html>",
    )
}

/// POST /recommend - form submission, HTML response
async fn recommend_submit(
    State(state): State<AppState>,
    Form(form): Form<RecommendForm>,
) -> axum::response::Response {
    match state.recommend(&form.article_text, None).await {
        Ok(matches) => {
            let items: String = to_response(matches)
                .matches
                .iter()
                .map(|m| format!("<li>{} (distance {})</li>", m.article, m.distance))
                .collect();
            Html(format!(
                "<html><body><p>Eureka! Here are your matches:</p><ul>{items}</ul></body></html>"
            ))
            .into_response()
        }
        Err(err) => error_response(err),
    }
}

/// GET /recommend_api - query-parameter API
async fn recommend_api_get(
    State(state): State<AppState>,
    Query(params): Query<RecommendParams>,
) -> axum::response::Response {
    let Some(text) = params.article_text else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "missing query parameter: article_text".into(),
            }),
        )
            .into_response();
    };

    match state.recommend(&text, params.limit).await {
        Ok(matches) => (StatusCode::OK, Json(to_response(matches))).into_response(),
        Err(err) => error_response(err),
    }
}

/// POST /recommend_api - JSON body API
async fn recommend_api_post(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> axum::response::Response {
    match state.recommend(&request.text, request.limit).await {
        Ok(matches) => (StatusCode::OK, Json(to_response(matches))).into_response(),
        Err(err) => error_response(err),
    }
}

/// POST /upload - embed an article and append it to the corpus
async fn upload(
    State(state): State<AppState>,
    Json(request): Json<UploadRequest>,
) -> axum::response::Response {
    match state.upload(request.title, request.text).await {
        Ok(receipt) => (
            StatusCode::CREATED,
            Json(UploadResponse {
                id: receipt.id,
                dimension: receipt.dimension,
            }),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

/// GET /health - status and corpus stats
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let stats = state.stats();
    Json(HealthResponse {
        status: "ok".to_string(),
        articles: stats.articles,
        dimension: stats.dimension,
    })
}

/// Create the axum router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/recommend", get(recommend_form).post(recommend_submit))
        .route(
            "/recommend_api",
            get(recommend_api_get).post(recommend_api_post),
        )
        .route("/upload", post(upload))
        .route("/health", get(health))
        .layer(cors)
        .with_state(state)
}

/// Start the server
pub async fn serve(state: AppState, addr: std::net::SocketAddr) -> std::io::Result<()> {
    let router = create_router(state);

    tracing::info!("Starting readnext server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
