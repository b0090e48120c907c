//! HTTP surface for the browser dashboard.
//!
//! Routes mirror what the dashboard already calls:
//!
//! * `GET /api/scans`
//! * `GET /api/scans/:scan/{subdomains,hosts,vulnerabilities,osint,ports}`
//! * `GET <media prefix>/...` static files from the recon root (screenshots)

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use reconview_common::config::Config;
use reconview_common::error::CatalogError;
use reconview_common::models::host::HostRecord;
use reconview_common::models::osint::OsintBundle;
use reconview_common::models::port::PortRecord;
use reconview_common::models::scan::ScanId;
use reconview_common::models::vulnerability::VulnerabilityRecord;
use reconview_core::repository::fs::FsScanRepository;
use reconview_core::service::ReconService;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::terminal::print;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ReconService>,
}

pub struct ApiError(CatalogError);

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            CatalogError::NotFound { .. } => (StatusCode::NOT_FOUND, "Recon directory not found"),
            CatalogError::UnknownScan(_) => (StatusCode::NOT_FOUND, "Scan not found"),
            CatalogError::InvalidScanId(_) => (StatusCode::BAD_REQUEST, "Invalid scan name"),
            CatalogError::ReadFailure { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to read scan directory")
            }
        };
        if status.is_server_error() {
            error!("{}", self.0);
        } else {
            warn!("{}", self.0);
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;

pub fn router(cfg: &Config) -> Router {
    let repo = FsScanRepository::from_config(cfg);
    let state = AppState {
        service: Arc::new(ReconService::new(Box::new(repo))),
    };

    let media_route = format!("/{}", cfg.media_prefix.trim_matches('/'));
    let media = ServeDir::new(&cfg.recon_root);

    let api = Router::new()
        .route("/", get(root))
        .route("/api/scans", get(list_scans))
        .route("/api/scans/:scan/subdomains", get(subdomains))
        .route("/api/scans/:scan/hosts", get(hosts))
        .route("/api/scans/:scan/vulnerabilities", get(vulnerabilities))
        .route("/api/scans/:scan/osint", get(osint))
        .route("/api/scans/:scan/ports", get(ports));

    let api = match media_route.as_str() {
        "/" => api.fallback_service(media),
        route => api.nest_service(route, media),
    };

    api.layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(cfg: &Config) -> anyhow::Result<()> {
    let app = router(cfg);

    print::header("serving scans", cfg.quiet);
    print::set_key_width(["Recon root", "Listening", "Host stream"]);
    print::aligned_line("Recon root", cfg.recon_root.display().to_string());
    print::aligned_line("Listening", format!("http://{}", cfg.bind));
    print::aligned_line("Host stream", cfg.host_stream.to_string());

    let listener = tokio::net::TcpListener::bind(cfg.bind).await?;
    info!("Backend listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}

async fn root() -> &'static str {
    "Hello from the reconview backend!"
}

async fn list_scans(State(state): State<AppState>) -> ApiResult<Vec<ScanId>> {
    Ok(Json(state.service.list_scans().await?))
}

async fn subdomains(State(state): State<AppState>, Path(scan): Path<String>) -> ApiResult<Vec<String>> {
    let scan: ScanId = scan.parse()?;
    Ok(Json(state.service.subdomains(&scan).await))
}

async fn hosts(State(state): State<AppState>, Path(scan): Path<String>) -> ApiResult<Vec<HostRecord>> {
    let scan: ScanId = scan.parse()?;
    Ok(Json(state.service.hosts(&scan).await))
}

async fn vulnerabilities(
    State(state): State<AppState>,
    Path(scan): Path<String>,
) -> ApiResult<Vec<VulnerabilityRecord>> {
    let scan: ScanId = scan.parse()?;
    Ok(Json(state.service.vulnerabilities(&scan).await))
}

async fn osint(State(state): State<AppState>, Path(scan): Path<String>) -> ApiResult<OsintBundle> {
    let scan: ScanId = scan.parse()?;
    Ok(Json(state.service.osint(&scan).await))
}

async fn ports(State(state): State<AppState>, Path(scan): Path<String>) -> ApiResult<Vec<PortRecord>> {
    let scan: ScanId = scan.parse()?;
    Ok(Json(state.service.ports(&scan).await))
}
