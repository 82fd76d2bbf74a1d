#![cfg(unix)]

mod common;

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use actix_web::{http::header, http::StatusCode, test, App};
use letterdesk_server::configure;
use letterdesk_server::export::PdfExporter;

use common::{test_state_with_exporter, MockCompletionClient};

/// Stand-in for Chromium that writes a tiny PDF to the `--print-to-pdf` target.
const PRINTING_BROWSER: &str = r#"#!/bin/sh
for arg in "$@"; do
  case "$arg" in
    --print-to-pdf=*) printf '%%PDF-1.4 stub' > "${arg#--print-to-pdf=}" ;;
  esac
done
"#;

const CRASHING_BROWSER: &str = "#!/bin/sh\necho 'no display' >&2\nexit 3\n";

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

// Both browsers run from one test so no other thread forks while a script
// is still open for writing.
#[actix_web::test]
async fn test_export_with_stub_browsers() {
    let dir = tempfile::tempdir().unwrap();
    let template = dir.path().join("document.html");
    std::fs::write(&template, "<h1>{{title}}</h1><pre>{{draft}}</pre>").unwrap();

    let printing = write_script(dir.path(), "printing-browser", PRINTING_BROWSER);
    let crashing = write_script(dir.path(), "crashing-browser", CRASHING_BROWSER);

    let state = test_state_with_exporter(
        Arc::new(MockCompletionClient::replying("unused")),
        PdfExporter::new(&template, &printing),
    );
    let app = test::init_service(App::new().app_data(state).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/documents/general_refund_request/export-pdf")
        .set_form([("draft", "Dear Acme,\n\nPlease refund order #1234.")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );
    assert_eq!(
        resp.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"Refund_Request.pdf\"; filename*=UTF-8''Refund_Request.pdf"
    );
    let body = test::read_body(resp).await;
    assert!(body.starts_with(b"%PDF"));

    let state = test_state_with_exporter(
        Arc::new(MockCompletionClient::replying("unused")),
        PdfExporter::new(&template, &crashing),
    );
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
        "PDF error: headless browser exited with status 3"
    );
}
