use actix_web::http::header;
use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::model::{Case, CreateCaseRequest};
use crate::catalog::{FieldDef, FilledFields};
use crate::documents::model::FieldView;
use crate::drafting::validation::validate_required;
use crate::{AppState, ErrorResponse};

const CASE_FIELDS: &[FieldDef] = &[
    FieldDef::text("title", "Title").required(),
    FieldDef::textarea("content", "Content").required(),
];

/// Form for creating a case by hand.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CaseForm {
    pub fields: Vec<FieldView>,
}

#[utoipa::path(
    get,
    path = "/cases",
    tag = "Cases",
    responses(
        (status = 200, description = "All saved cases, newest first", body = Vec<Case>),
        (status = 500, description = "Case store unavailable", body = ErrorResponse)
    )
)]
pub async fn list_cases(state: web::Data<AppState>) -> impl Responder {
    match state.cases.list_cases().await {
        Ok(cases) => {
            log::debug!("Listing {} cases", cases.len());
            HttpResponse::Ok().json(cases)
        }
        Err(e) => {
            log::error!("Failed to list cases: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&e.to_string()))
        }
    }
}

#[utoipa::path(
    get,
    path = "/cases/new",
    tag = "Cases",
    responses(
        (status = 200, description = "Empty case form", body = CaseForm)
    )
)]
pub async fn new_case() -> impl Responder {
    HttpResponse::Ok().json(CaseForm {
        fields: FieldView::list(CASE_FIELDS, None),
    })
}

#[utoipa::path(
    post,
    path = "/cases",
    tag = "Cases",
    request_body(content = CreateCaseRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Case created, redirect to /cases"),
        (status = 400, description = "Title or content missing", body = ErrorResponse),
        (status = 500, description = "Case could not be stored", body = ErrorResponse)
    )
)]
pub async fn create_case(
    state: web::Data<AppState>,
    form: web::Form<CreateCaseRequest>,
) -> impl Responder {
    let filled: FilledFields = [
        ("title", form.title.trim().to_string()),
        ("content", form.content.trim().to_string()),
    ]
    .into_iter()
    .collect();

    if let Err(errors) = validate_required(CASE_FIELDS, &filled) {
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(&errors.to_message()));
    }

    match state.cases.create_case(filled.get("title"), &form.content).await {
        Ok(case) => {
            log::info!("Created case {} ('{}')", case.id, case.title);
            HttpResponse::Found()
                .insert_header((header::LOCATION, "/cases"))
                .finish()
        }
        Err(e) => {
            log::error!("Failed to create case: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&e.to_string()))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/cases")
            .route(web::get().to(list_cases))
            .route(web::post().to(create_case)),
    )
    .service(web::resource("/cases/new").route(web::get().to(new_case)));
}
