mod common;

use std::sync::Arc;

use actix_web::{http::header, http::StatusCode, test, App};
use letterdesk_server::cases::Case;
use letterdesk_server::documents::model::{DocumentForm, DocumentIndex};
use letterdesk_server::drafting::OpenAiClient;
use letterdesk_server::{configure, ErrorResponse};

use common::{test_state, MockCompletionClient};

const GOV_ENQUIRY_FORM: &[(&str, &str)] = &[
    ("yourName", "Jordan Lee"),
    ("yourAddress", "12 Example St, Sydney NSW 2000"),
    ("department", "Service NSW"),
    ("topic", "Licence renewal"),
    ("details", "I applied on 2 March and have not heard back."),
    ("desiredOutcome", "An update on my application."),
];

#[actix_web::test]
async fn test_list_documents() {
    let state = test_state(Arc::new(MockCompletionClient::replying("unused")));
    let app = test::init_service(App::new().app_data(state).configure(configure)).await;

    let req = test::TestRequest::get().uri("/documents").to_request();
    let index: DocumentIndex = test::call_and_read_body_json(&app, req).await;

    assert_eq!(index.items.len(), 15);
    assert_eq!(index.items[0].key, "gov_enquiry");
    assert_eq!(index.items[4].key, "biz_quote_request");

    let categories: Vec<&str> = index.groups.iter().map(|g| g.category.as_str()).collect();
    assert_eq!(categories, vec!["government", "business", "general"]);
    let grouped: usize = index.groups.iter().map(|g| g.documents.len()).sum();
    assert_eq!(grouped, index.items.len());
}

#[actix_web::test]
async fn test_new_document_form() {
    let state = test_state(Arc::new(MockCompletionClient::replying("unused")));
    let app = test::init_service(App::new().app_data(state).configure(configure)).await;

    let req = test::TestRequest::get()
        .uri("/documents/general_refund_request/new")
        .to_request();
    let form: DocumentForm = test::call_and_read_body_json(&app, req).await;

    assert_eq!(form.type_id, "general_refund_request");
    assert_eq!(form.name, "Refund Request");
    assert!(form.output.is_none());
    assert!(form.outcome.is_none());
    assert!(!form.fields.is_empty());
}

#[actix_web::test]
async fn test_unknown_type_is_not_found() {
    let completion = Arc::new(MockCompletionClient::replying("unused"));
    let state = test_state(completion.clone());
    let app = test::init_service(App::new().app_data(state).configure(configure)).await;

    let req = test::TestRequest::get().uri("/documents/nope/new").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "NotFound");
    assert_eq!(body.message, "Unknown document type");

    for action in ["generate", "save", "export-pdf"] {
        let req = test::TestRequest::post()
            .uri(&format!("/documents/nope/{}", action))
            .set_form([("draft", "text")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "action {}", action);
    }
    assert!(completion.calls().is_empty());
}

#[actix_web::test]
async fn test_generate_reports_missing_fields() {
    let completion = Arc::new(MockCompletionClient::replying("unused"));
    let state = test_state(completion.clone());
    let app = test::init_service(App::new().app_data(state).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/documents/gov_enquiry/generate")
        .set_form([("yourName", "Jordan Lee"), ("topic", "   ")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let form: DocumentForm = test::read_body_json(resp).await;
    assert_eq!(form.outcome.as_deref(), Some("missing"));
    assert_eq!(
        form.output.as_deref(),
        Some("Missing: Your Address, Department/Agency, Topic / Subject, Details of your enquiry (facts only), What response you want")
    );
    assert_eq!(form.missing.len(), 5);
    assert!(completion.calls().is_empty());
}

#[actix_web::test]
async fn test_generate_returns_draft() {
    let completion = Arc::new(MockCompletionClient::replying(
        "\n  Dear Service NSW,\n\nI am writing about my licence renewal.  \n",
    ));
    let state = test_state(completion.clone());
    let app = test::init_service(App::new().app_data(state).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/documents/gov_enquiry/generate")
        .set_form(GOV_ENQUIRY_FORM)
        .to_request();
    let form: DocumentForm = test::call_and_read_body_json(&app, req).await;

    assert_eq!(form.type_id, "gov_enquiry");
    assert_eq!(form.name, "Government Enquiry Letter");
    assert_eq!(form.outcome.as_deref(), Some("draft"));
    assert_eq!(
        form.output.as_deref(),
        Some("Dear Service NSW,\n\nI am writing about my licence renewal.")
    );
    assert!(form.missing.is_empty());

    // Defaults are echoed back for fields left blank.
    let tone = form.fields.iter().find(|f| f.key == "tone").unwrap();
    assert_eq!(tone.value.as_deref(), Some("formal"));

    let calls = completion.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].system.contains("Australian government"));
    assert!(calls[0].user.starts_with("Draft a Government Enquiry Letter.\n\nFacts:\n"));
    assert!(calls[0].user.contains("- From: Jordan Lee, Address: 12 Example St, Sydney NSW 2000"));
    assert!(calls[0].user.contains("- Reference: (none)"));
    assert!(calls[0].user.contains("- Tone: formal"));
    assert!(calls[0].user.contains("\n\nConstraints:\n- "));
}

#[actix_web::test]
async fn test_generate_shows_api_error() {
    let completion = Arc::new(MockCompletionClient::failing(401, "Incorrect API key provided"));
    let state = test_state(completion);
    let app = test::init_service(App::new().app_data(state).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/documents/gov_enquiry/generate")
        .set_form(GOV_ENQUIRY_FORM)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let form: DocumentForm = test::read_body_json(resp).await;
    assert_eq!(form.outcome.as_deref(), Some("error"));
    assert_eq!(
        form.output.as_deref(),
        Some("Generation error: 401 Incorrect API key provided")
    );
}

#[actix_web::test]
async fn test_generate_with_unreachable_service() {
    let client = OpenAiClient::new(reqwest::Client::new(), "http://127.0.0.1:9/v1", "sk-test", "gpt-5");
    let state = test_state(Arc::new(client));
    let app = test::init_service(App::new().app_data(state).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/documents/gov_enquiry/generate")
        .set_form(GOV_ENQUIRY_FORM)
        .to_request();
    let form: DocumentForm = test::call_and_read_body_json(&app, req).await;

    assert_eq!(form.outcome.as_deref(), Some("error"));
    assert!(form.output.unwrap().starts_with("Generation error:"));
}

#[actix_web::test]
async fn test_save_creates_case_and_redirects() {
    let state = test_state(Arc::new(MockCompletionClient::replying("unused")));
    let app = test::init_service(App::new().app_data(state).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/documents/general_refund_request/save")
        .set_form([("draft", "Dear Acme,\n\nPlease refund order #1234.")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/cases");

    let req = test::TestRequest::get().uri("/cases").to_request();
    let cases: Vec<Case> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(cases.len(), 1);
    assert!(cases[0].title.starts_with("Refund Request – Edited "));
    assert_eq!(cases[0].content, "Dear Acme,\n\nPlease refund order #1234.");
}

#[actix_web::test]
async fn test_save_accepts_empty_draft() {
    let state = test_state(Arc::new(MockCompletionClient::replying("unused")));
    let app = test::init_service(App::new().app_data(state).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/documents/gov_followup/save")
        .set_form([("other", "value")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);

    let req = test::TestRequest::get().uri("/cases").to_request();
    let cases: Vec<Case> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(cases[0].content, "");
}

#[actix_web::test]
async fn test_export_without_template_is_server_error() {
    let state = test_state(Arc::new(MockCompletionClient::replying("unused")));
    let app = test::init_service(App::new().app_data(state).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/documents/gov_enquiry/export-pdf")
        .set_form([("draft", "Dear Sir or Madam")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = test::read_body(resp).await;
    assert_eq!(
        std::str::from_utf8(&body).unwrap(),
        "Template not found. Make sure templates/document.html exists."
    );
}

#[actix_web::test]
async fn test_index_links() {
    let state = test_state(Arc::new(MockCompletionClient::replying("unused")));
    let app = test::init_service(App::new().app_data(state).configure(configure)).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["name"], "letterdesk-server");
    let hrefs: Vec<&str> = body["links"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|l| l["href"].as_str())
        .collect();
    assert!(hrefs.contains(&"/documents"));
    assert!(hrefs.contains(&"/cases"));
}
