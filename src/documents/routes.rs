use std::collections::HashMap;

use actix_files::NamedFile;
use actix_web::http::header::{self, HeaderValue};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use chrono::Utc;

use super::model::{DocumentForm, DocumentGroup, DocumentIndex, DocumentSummary, DraftRequest};
use crate::drafting::DraftError;
use crate::export::PdfError;
use crate::{AppState, ErrorResponse};

fn unknown_type(type_id: &str) -> HttpResponse {
    log::warn!("Unknown document type requested: {}", type_id);
    HttpResponse::NotFound().json(ErrorResponse::not_found("Unknown document type"))
}

/// Title given to a case saved from an edited draft.
pub fn edited_title(document_name: &str) -> String {
    format!("{} – Edited {}", document_name, Utc::now().format("%Y-%m-%d"))
}

#[utoipa::path(
    get,
    path = "/documents",
    tag = "Documents",
    responses(
        (status = 200, description = "All document types, flat and grouped by category", body = DocumentIndex)
    )
)]
pub async fn list_documents(state: web::Data<AppState>) -> impl Responder {
    let items = state.catalog.list_all().map(DocumentSummary::from).collect();
    let groups = state
        .catalog
        .grouped()
        .into_iter()
        .map(|group| DocumentGroup {
            category: group.category.key().to_string(),
            label: group.category.label().to_string(),
            documents: group.documents.into_iter().map(DocumentSummary::from).collect(),
        })
        .collect();

    HttpResponse::Ok().json(DocumentIndex { items, groups })
}

#[utoipa::path(
    get,
    path = "/documents/{type}/new",
    tag = "Documents",
    params(
        ("type" = String, Path, description = "Document type key")
    ),
    responses(
        (status = 200, description = "Empty form for the document type", body = DocumentForm),
        (status = 404, description = "Unknown document type", body = ErrorResponse)
    )
)]
pub async fn new_document(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let type_id = path.into_inner();
    match state.catalog.lookup(&type_id) {
        Some(spec) => HttpResponse::Ok().json(DocumentForm::empty(spec)),
        None => unknown_type(&type_id),
    }
}

#[utoipa::path(
    post,
    path = "/documents/{type}/generate",
    tag = "Documents",
    params(
        ("type" = String, Path, description = "Document type key")
    ),
    request_body(content = HashMap<String, String>, content_type = "application/x-www-form-urlencoded", description = "Field values keyed by field key"),
    responses(
        (status = 200, description = "Form with the draft, the missing fields, or the generation error", body = DocumentForm),
        (status = 404, description = "Unknown document type", body = ErrorResponse)
    )
)]
pub async fn generate_document(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<HashMap<String, String>>,
) -> impl Responder {
    let type_id = path.into_inner();
    log::info!("Generating draft for '{}'", type_id);

    let generation = match state.drafts.generate(&type_id, &form).await {
        Ok(generation) => generation,
        Err(DraftError::UnknownDocumentType(type_id)) => return unknown_type(&type_id),
    };

    HttpResponse::Ok().json(DocumentForm::with_outcome(
        generation.spec,
        &generation.filled,
        &generation.outcome,
    ))
}

#[utoipa::path(
    post,
    path = "/documents/{type}/save",
    tag = "Documents",
    params(
        ("type" = String, Path, description = "Document type key")
    ),
    request_body(content = DraftRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Case saved, redirect to /cases"),
        (status = 404, description = "Unknown document type", body = ErrorResponse),
        (status = 500, description = "Case could not be stored", body = ErrorResponse)
    )
)]
pub async fn save_document(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<DraftRequest>,
) -> impl Responder {
    let type_id = path.into_inner();
    let Some(spec) = state.catalog.lookup(&type_id) else {
        return unknown_type(&type_id);
    };

    let title = edited_title(spec.name());
    match state.cases.create_case(&title, &form.draft).await {
        Ok(case) => {
            log::info!("Saved draft for '{}' as case {}", type_id, case.id);
            HttpResponse::Found()
                .insert_header((header::LOCATION, "/cases"))
                .finish()
        }
        Err(e) => {
            log::error!("Failed to save draft for '{}': {}", type_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&e.to_string()))
        }
    }
}

#[utoipa::path(
    post,
    path = "/documents/{type}/export-pdf",
    tag = "Documents",
    params(
        ("type" = String, Path, description = "Document type key")
    ),
    request_body(content = DraftRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "PDF attachment", body = String, content_type = "application/pdf"),
        (status = 404, description = "Unknown document type", body = ErrorResponse),
        (status = 500, description = "Template missing or rendering failed", body = String, content_type = "text/plain")
    )
)]
pub async fn export_document_pdf(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<DraftRequest>,
) -> HttpResponse {
    let type_id = path.into_inner();
    let Some(spec) = state.catalog.lookup(&type_id) else {
        return unknown_type(&type_id);
    };

    log::info!("Exporting PDF for '{}'", type_id);
    let exported = match state.exporter.export(spec.name(), &form.draft).await {
        Ok(exported) => exported,
        Err(PdfError::TemplateMissing(path)) => {
            log::error!("PDF template missing at {}", path.display());
            return HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body("Template not found. Make sure templates/document.html exists.");
        }
        Err(e) => {
            log::error!("PDF export for '{}' failed: {}", type_id, e);
            return HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(format!("PDF error: {}", e));
        }
    };

    // The open handle keeps the file readable after the temp dir is removed.
    let file = match NamedFile::open_async(exported.path()).await {
        Ok(file) => file,
        Err(e) => {
            log::error!("Failed to open rendered PDF: {}", e);
            return HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(format!("PDF error: {}", e));
        }
    };

    let mut response = file.into_response(&req);
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/pdf"));
    let disposition = format!(
        "attachment; filename=\"{0}\"; filename*=UTF-8''{0}",
        exported.filename
    );
    if let Ok(value) = HeaderValue::from_str(&disposition) {
        headers.insert(header::CONTENT_DISPOSITION, value);
    }
    response
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/documents").route(web::get().to(list_documents)))
        .service(web::resource("/documents/{type}/new").route(web::get().to(new_document)))
        .service(
            web::resource("/documents/{type}/generate").route(web::post().to(generate_document)),
        )
        .service(web::resource("/documents/{type}/save").route(web::post().to(save_document)))
        .service(
            web::resource("/documents/{type}/export-pdf")
                .route(web::post().to(export_document_pdf)),
        );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edited_title() {
        let title = edited_title("Refund Request");
        let today = Utc::now().format("%Y-%m-%d").to_string();
        assert_eq!(title, format!("Refund Request – Edited {}", today));
    }
}
