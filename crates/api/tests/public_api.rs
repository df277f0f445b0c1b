//! HTTP-level integration tests for the public site: page content, the
//! contact and proposal forms, case studies and the review link tool.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use digitalpro_db::memory::Operation;
use digitalpro_db::models::{CASE_STUDIES_TABLE, CONTACT_MESSAGES_TABLE, PROPOSALS_TABLE};
use digitalpro_db::MemoryStore;
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn valid_contact() -> Value {
    json!({
        "name": "Jane Doe",
        "email": "jane@acme.test",
        "subject": "Website refresh",
        "message": "We would like a quote.",
    })
}

fn valid_proposal() -> Value {
    json!({
        "company_name": "Acme",
        "contact_name": "Jane Doe",
        "email": "jane@acme.test",
        "phone": "+1 555 0100",
        "services": ["Web Development", "SEO Optimization"],
        "budget_range": "$10,000 - $25,000",
        "timeline": "3-4 months",
        "project_description": "A storefront with a blog.",
    })
}

async fn seed_case_study(store: &MemoryStore, title: &str, tags: &[&str]) {
    store
        .seed(
            CASE_STUDIES_TABLE,
            json!({
                "title": title,
                "description": "Summary",
                "client": "Client Co",
                "industry": "Retail",
                "challenge": "Slow site",
                "solution": "Rebuilt it",
                "results": ["2x conversions"],
                "image_url": "https://images.test/cs.png",
                "tags": tags,
            }),
        )
        .await;
}

// ---------------------------------------------------------------------------
// Static pages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn layout_marks_the_current_path_active() {
    let (app, _store) = common::build_test_app();

    let json = body_json(get(&app, "/api/v1/layout?path=/services").await).await;

    let nav = json["data"]["navigation"].as_array().unwrap();
    let active: Vec<&str> = nav
        .iter()
        .filter(|item| item["active"] == true)
        .map(|item| item["href"].as_str().unwrap())
        .collect();
    assert_eq!(active, vec!["/services"]);
    assert_eq!(json["data"]["site_name"], "DigitalPro");
}

#[tokio::test]
async fn static_pages_make_no_remote_calls() {
    let (app, store) = common::build_test_app();

    for page in ["home", "services", "about", "tools", "contact", "proposal"] {
        let response = get(&app, &format!("/api/v1/pages/{page}")).await;
        assert_eq!(response.status(), StatusCode::OK, "page {page}");
    }

    assert!(store.operations().await.is_empty());
}

// ---------------------------------------------------------------------------
// Contact form
// ---------------------------------------------------------------------------

#[tokio::test]
async fn contact_submission_inserts_one_new_message() {
    let (app, store) = common::build_test_app();

    let response = post_json(&app, "/api/v1/contact", valid_contact()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "new");
    assert_eq!(json["notice"]["kind"], "success");
    assert_eq!(
        json["notice"]["message"],
        "Message sent successfully! We'll get back to you soon."
    );

    let ops = store.operations().await;
    assert_eq!(ops.len(), 1);
    match &ops[0] {
        Operation::Insert { table, row } => {
            assert_eq!(table, CONTACT_MESSAGES_TABLE);
            assert_eq!(row["status"], "new");
            assert_eq!(row["subject"], "Website refresh");
        }
        other => panic!("expected an insert, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_contact_form_is_rejected_without_a_remote_call() {
    let (app, store) = common::build_test_app();

    let response = post_json(
        &app,
        "/api/v1/contact",
        json!({ "name": "", "email": "not-an-email", "subject": "Hi", "message": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["fields"]["name"][0], "Name is required");
    assert_eq!(json["fields"]["email"][0], "Invalid email");
    assert_eq!(json["fields"]["message"][0], "Message is required");
    assert!(json["fields"]["subject"].is_null());

    assert!(store.operations().await.is_empty());
}

#[tokio::test]
async fn contact_store_failure_reports_the_send_error() {
    let (app, store) = common::build_test_app();
    store.fail_table(CONTACT_MESSAGES_TABLE).await;

    let response = post_json(&app, "/api/v1/contact", valid_contact()).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = body_json(response).await;
    assert_eq!(json["code"], "REMOTE_ERROR");
    assert_eq!(json["error"], "Failed to send message. Please try again.");
    assert!(store.rows(CONTACT_MESSAGES_TABLE).await.is_empty());
}

// ---------------------------------------------------------------------------
// Proposal form
// ---------------------------------------------------------------------------

#[tokio::test]
async fn proposal_submission_inserts_one_pending_proposal() {
    let (app, store) = common::build_test_app();

    let response = post_json(&app, "/api/v1/proposals", valid_proposal()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "pending");
    assert_eq!(
        json["data"]["services"],
        json!(["Web Development", "SEO Optimization"])
    );

    let ops = store.operations().await;
    assert_eq!(ops.len(), 1);
    assert!(matches!(
        &ops[0],
        Operation::Insert { table, .. } if table == PROPOSALS_TABLE
    ));
}

#[tokio::test]
async fn proposal_without_services_or_known_budget_is_rejected() {
    let (app, store) = common::build_test_app();

    let mut body = valid_proposal();
    body["services"] = json!([]);
    body["budget_range"] = json!("Whatever it costs");

    let response = post_json(&app, "/api/v1/proposals", body).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(
        json["fields"]["services"][0],
        "Please select at least one service"
    );
    assert_eq!(json["fields"]["budget_range"][0], "Unknown budget range");
    assert!(store.operations().await.is_empty());
}

#[tokio::test]
async fn proposal_store_failure_reports_the_submit_error() {
    let (app, store) = common::build_test_app();
    store.fail_table(PROPOSALS_TABLE).await;

    let response = post_json(&app, "/api/v1/proposals", valid_proposal()).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Failed to submit proposal. Please try again.");
}

// ---------------------------------------------------------------------------
// Case studies
// ---------------------------------------------------------------------------

#[tokio::test]
async fn case_studies_filter_by_tag() {
    let (app, store) = common::build_test_app();
    seed_case_study(&store, "Shop relaunch", &["E-commerce"]).await;
    seed_case_study(&store, "New identity", &["Branding"]).await;

    let all = body_json(get(&app, "/api/v1/pages/case-studies").await).await;
    assert_eq!(all["data"]["selected_category"], "all");
    assert_eq!(all["data"]["case_studies"]["items"].as_array().unwrap().len(), 2);

    let branding = body_json(get(&app, "/api/v1/pages/case-studies?category=Branding").await).await;
    let items = branding["data"]["case_studies"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "New identity");
}

#[tokio::test]
async fn empty_case_study_list_carries_a_placeholder() {
    let (app, _store) = common::build_test_app();

    let json = body_json(get(&app, "/api/v1/pages/case-studies").await).await;

    assert_eq!(json["data"]["case_studies"]["items"], json!([]));
    assert_eq!(json["data"]["case_studies"]["placeholder"], "No case studies yet");
}

#[tokio::test]
async fn unknown_category_is_rejected() {
    let (app, store) = common::build_test_app();

    let response = get(&app, "/api/v1/pages/case-studies?category=Plumbing").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(store.operations().await.is_empty());
}

// ---------------------------------------------------------------------------
// Review links
// ---------------------------------------------------------------------------

#[tokio::test]
async fn review_links_are_generated_without_storage() {
    let (app, store) = common::build_test_app();

    let response = post_json(
        &app,
        "/api/v1/tools/review-links",
        json!({ "business_name": "Acme Plumbing", "location": "Denver" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let links = json["data"]["links"].as_array().unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(
        links[0]["url"],
        "https://search.google.com/local/writereview?placeid=Acme%20Plumbing"
    );
    assert_eq!(
        links[1]["url"],
        "https://www.google.com/search?q=Acme%20Plumbing+Denver+reviews"
    );
    assert_eq!(json["notice"]["message"], "Review links generated successfully!");
    assert!(store.operations().await.is_empty());
}

#[tokio::test]
async fn blank_business_name_is_rejected() {
    let (app, _store) = common::build_test_app();

    let response = post_json(
        &app,
        "/api/v1/tools/review-links",
        json!({ "business_name": "   ", "location": "" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(
        json["fields"]["business_name"][0],
        "Please enter your business name"
    );
}
