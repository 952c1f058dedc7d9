//! End-to-end smoke tests for the full hostbookd stack.
//!
//! Each test wires a real content source, real services, the real askama
//! renderer and the real axum router, and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use hostbook_adapter_content_toml::TomlPageSource;
use hostbook_adapter_http_axum::config::SiteConfig;
use hostbook_adapter_http_axum::state::AppState;
use hostbook_adapter_http_axum::{html_renderer, router};
use hostbook_app::ports::PageSource;
use hostbook_app::services::inventory_service::InventoryService;
use hostbook_app::static_source::StaticPageSource;
use hostbook_domain::machine::Machine;
use hostbook_domain::page::Page;
use tower::ServiceExt;

fn app_with<S>(source: S) -> axum::Router
where
    S: PageSource + Send + Sync + 'static,
{
    let state = AppState::new(
        InventoryService::new(source),
        html_renderer(SiteConfig::default()),
    );
    router::build(state)
}

fn app() -> axum::Router {
    app_with(StaticPageSource::default())
}

async fn fetch(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap();
    (status, body)
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (status, _) = fetch(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
}

// ---------------------------------------------------------------------------
// HTML page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_render_complete_document() {
    let (status, body) = fetch(app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("<h1>machine inventory</h1>"));
    assert!(body.trim_end().ends_with("</html>"));
}

#[tokio::test]
async fn should_render_one_section_per_machine() {
    let (_, body) = fetch(app(), "/").await;
    assert_eq!(body.matches(r#"<section class="machine""#).count(), 14);
    assert_eq!(body.matches("<h2>").count(), 14);
}

#[tokio::test]
async fn should_render_sections_in_source_order() {
    let (_, body) = fetch(app(), "/").await;
    let order = [
        "nex1.php.net", "pb1.php.net", "pb11.php.net", "pb12.php.net", "rs1.php.net",
        "sc1.php.net", "ez1.php.net", "sp1.php.net", "osu1.php.net", "oti1.php.net",
        "oti2.php.net", "ovh.php.net", "y1.php.net", "y2.php.net",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|host| body.find(&format!("<h2>{host} (")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[tokio::test]
async fn should_place_prose_around_machine_sections() {
    let (_, body) = fetch(app(), "/").await;
    let intro = body.find("generous sponsors").unwrap();
    let first_machine = body.find("<h2>").unwrap();
    let attribution = body.find("originally compiled by jim winstead").unwrap();
    let footer = body.find("<footer>").unwrap();
    assert!(intro < first_machine);
    assert!(first_machine < attribution);
    assert!(attribution < footer);
}

#[tokio::test]
async fn should_mark_machines_without_aliases_as_none() {
    let (_, body) = fetch(app(), "/").await;
    // rs1, sp1, oti1 and oti2 list no aliases.
    assert_eq!(body.matches("<b>aliases:</b> none</p>").count(), 4);
}

#[tokio::test]
async fn should_start_each_section_on_its_own_line() {
    let (_, body) = fetch(app(), "/").await;
    // pb1, pb11 and pb12 are adjacent sections.
    assert!(body.contains("</section>\n<section"));
    assert!(!body.contains("</section><section"));
}

#[tokio::test]
async fn should_render_identical_output_on_repeated_requests() {
    let (_, first) = fetch(app(), "/").await;
    let (_, second) = fetch(app(), "/").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn should_render_chrome_for_page_without_machines() {
    let page = Page::builder()
        .title("lab machines")
        .prose("no machines have been racked yet")
        .build()
        .unwrap();
    let (status, body) = fetch(app_with(StaticPageSource::new(page)), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>lab machines</h1>"));
    assert!(body.contains("no machines have been racked yet"));
    assert!(body.contains("<footer>"));
    assert_eq!(body.matches("<h2>").count(), 0);
}

// ---------------------------------------------------------------------------
// JSON API
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_machines() {
    let (status, body) = fetch(app(), "/api/machines").await;
    assert_eq!(status, StatusCode::OK);
    let machines: Vec<Machine> = serde_json::from_str(&body).unwrap();
    assert_eq!(machines.len(), 14);
}

#[tokio::test]
async fn should_return_404_for_unknown_machine() {
    let (status, _) = fetch(app(), "/api/machines/missing.php.net").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// TOML content
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_serve_page_from_toml_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    tokio::fs::write(
        file.path(),
        r#"
        title = "lab inventory"

        [[blocks]]
        type = "machine"
        hostname = "box1.lab"
        address = "10.0.0.1"
        hardware = "Raspberry Pi 4"
        "#,
    )
    .await
    .unwrap();

    let (status, body) = fetch(app_with(TomlPageSource::new(file.path())), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h2>box1.lab (10.0.0.1)</h2>"));
    assert!(body.contains("<b>aliases:</b> none</p>"));
}

#[tokio::test]
async fn should_return_500_when_content_file_missing() {
    let (status, _) = fetch(app_with(TomlPageSource::new("missing.toml")), "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn should_return_500_when_content_file_has_unknown_field() {
    let file = tempfile::NamedTempFile::new().unwrap();
    tokio::fs::write(
        file.path(),
        r#"
        title = "lab inventory"

        [[blocks]]
        type = "machine"
        hostname = "box1.lab"
        address = "10.0.0.1"
        hardware = "Raspberry Pi 4"
        alias = ["pi"]
        "#,
    )
    .await
    .unwrap();

    let (status, _) = fetch(app_with(TomlPageSource::new(file.path())), "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
