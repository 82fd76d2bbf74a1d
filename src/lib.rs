use actix_cors::Cors;
use actix_web::middleware::{Compress, Logger};
use actix_web::{http::header, web, App, HttpResponse, HttpServer, Responder};
use actix_web_prometheus::PrometheusMetricsBuilder;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod cases;
pub mod catalog;
pub mod config;
pub mod db;
pub mod documents;
pub mod drafting;
pub mod export;

pub use crate::config::AppConfig;
pub use crate::db::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new("NotFound", message)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct IndexLink {
    pub rel: String,
    pub href: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct IndexResponse {
    pub name: String,
    pub version: String,
    pub links: Vec<IndexLink>,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Index",
    responses(
        (status = 200, description = "Entry points of the service", body = IndexResponse)
    )
)]
pub async fn index() -> impl Responder {
    let links = [
        ("documents", "/documents"),
        ("cases", "/cases"),
        ("new-case", "/cases/new"),
        ("api-docs", "/swagger-ui/"),
    ]
    .into_iter()
    .map(|(rel, href)| IndexLink {
        rel: rel.to_string(),
        href: href.to_string(),
    })
    .collect();

    HttpResponse::Ok().json(IndexResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        links,
    })
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::index,
        crate::documents::routes::list_documents,
        crate::documents::routes::new_document,
        crate::documents::routes::generate_document,
        crate::documents::routes::save_document,
        crate::documents::routes::export_document_pdf,
        crate::cases::routes::list_cases,
        crate::cases::routes::new_case,
        crate::cases::routes::create_case
    ),
    components(
        schemas(
            ErrorResponse,
            IndexResponse,
            IndexLink,
            documents::model::DocumentIndex,
            documents::model::DocumentGroup,
            documents::model::DocumentSummary,
            documents::model::DocumentForm,
            documents::model::FieldView,
            documents::model::SelectOptionView,
            documents::model::DraftRequest,
            cases::model::Case,
            cases::model::CreateCaseRequest,
            cases::routes::CaseForm,
        )
    ),
    tags(
        (name = "Index", description = "Service entry point."),
        (name = "Documents", description = "Document forms, draft generation and PDF export."),
        (name = "Cases", description = "Saved drafts.")
    )
)]
pub struct ApiDoc;

/// Register every application route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(index)))
        .configure(documents::routes::config)
        .configure(cases::routes::config);
}

fn build_cors(allowed_origins: &[String]) -> Cors {
    let cors = allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors.allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}

pub async fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()?;
    let app_state = match AppState::new(&config).await {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            log::error!(
                "Failed to initialise application state. Check DATABASE_URL in .env and that the database is running. Error: {}",
                e
            );
            return Err(e);
        }
    };

    let prometheus = PrometheusMetricsBuilder::new("letterdesk_server")
        .endpoint("/metrics")
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to create Prometheus metrics middleware: {}", e))?;

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let allowed_origins = config.allowed_origins.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .wrap(prometheus.clone())
            .wrap(build_cors(&allowed_origins))
            .wrap(Logger::new("%r %s %Dms"))
            .app_data(app_state.clone())
            .configure(configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .keep_alive(actix_web::http::KeepAlive::Os)
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
