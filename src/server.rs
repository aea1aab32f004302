use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info, warn};

use crate::{
    chart::{render_svg_string, LineChart},
    config::StockCalcConfig,
    error::StockCalcError,
    forms::{PerformanceForm, PerformanceReport, ProjectionForm, RoiForm},
};

/// Read-only data shared by every handler.
pub struct AppState {
    pub config: StockCalcConfig,
}

impl AppState {
    pub fn new(config: StockCalcConfig) -> Self {
        Self { config }
    }
}

/// Body of the performance endpoints. Prices arrive as the raw
/// comma-separated text the user typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceRequest {
    pub prices: String,
    pub period: usize,
}

impl PerformanceRequest {
    fn evaluate(&self) -> Result<PerformanceReport, StockCalcError> {
        PerformanceForm::parse(&self.prices, self.period)?.evaluate()
    }
}

fn error_response(e: &StockCalcError) -> HttpResponse {
    let body = json!({ "error": e.to_string() });
    if e.is_user_error() {
        warn!(error = %e, "Rejected request");
        HttpResponse::BadRequest().json(body)
    } else {
        error!(error = %e, "Request failed");
        HttpResponse::InternalServerError().json(body)
    }
}

fn svg_response(chart: &LineChart, config: &StockCalcConfig) -> HttpResponse {
    match render_svg_string(chart, config.chart_width, config.chart_height) {
        Ok(svg) => HttpResponse::Ok().content_type("image/svg+xml").body(svg),
        Err(e) => error_response(&e),
    }
}

async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

async fn get_config(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(&state.config)
}

async fn roi(form: web::Json<RoiForm>) -> HttpResponse {
    match form.evaluate() {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => error_response(&e),
    }
}

async fn performance(request: web::Json<PerformanceRequest>) -> HttpResponse {
    match request.evaluate() {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => error_response(&e),
    }
}

async fn performance_chart(
    request: web::Json<PerformanceRequest>,
    state: web::Data<AppState>,
) -> HttpResponse {
    match request.evaluate() {
        Ok(report) => svg_response(&report.chart(), &state.config),
        Err(e) => error_response(&e),
    }
}

async fn projection(form: web::Json<ProjectionForm>) -> HttpResponse {
    match form.evaluate() {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => error_response(&e),
    }
}

async fn projection_chart(
    form: web::Json<ProjectionForm>,
    state: web::Data<AppState>,
) -> HttpResponse {
    match form.evaluate() {
        Ok(report) => svg_response(&report.chart(), &state.config),
        Err(e) => error_response(&e),
    }
}

/// Registers every route. Shared by [`run_server`] and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/config", web::get().to(get_config))
        .route("/roi", web::post().to(roi))
        .route("/performance", web::post().to(performance))
        .route("/performance/chart", web::post().to(performance_chart))
        .route("/projection", web::post().to(projection))
        .route("/projection/chart", web::post().to(projection_chart));
}

pub async fn run_server(config: StockCalcConfig) -> std::io::Result<()> {
    let host = config.server_host.clone();
    let port = config.server_port;
    let app_state = web::Data::new(AppState::new(config));

    info!("Server listening on http://{}:{}", host, port);
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(app_state.clone())
            .configure(configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
