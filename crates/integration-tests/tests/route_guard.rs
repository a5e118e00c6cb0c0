//! Sign-in gating over HTTP.
//!
//! These tests require the admin server running locally:
//!
//! ```bash
//! cargo run -p mowtrack-admin
//! export ADMIN_BASE_URL=http://localhost:3001
//!
//! # For the signed-in tests, the credentials the server was configured with
//! export ADMIN_TEST_EMAIL=owner@example.com
//! export ADMIN_TEST_PASSWORD=...
//! ```

use reqwest::{Client, StatusCode, redirect::Policy};
use uuid::Uuid;

use mowtrack_integration_tests::admin_base_url;

/// Client that surfaces redirects instead of following them.
fn raw_client() -> Client {
    Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

/// The admin credentials the server under test was configured with.
fn admin_credentials() -> (String, String) {
    let email = std::env::var("ADMIN_TEST_EMAIL")
        .expect("ADMIN_TEST_EMAIL must be set for signed-in tests");
    let password = std::env::var("ADMIN_TEST_PASSWORD")
        .expect("ADMIN_TEST_PASSWORD must be set for signed-in tests");
    (email, password)
}

/// Sign in and return a client carrying the session cookie.
async fn signed_in_client() -> Client {
    let client = Client::builder()
        .redirect(Policy::none())
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client");

    let (email, password) = admin_credentials();
    let resp = client
        .post(format!("{}/login", admin_base_url()))
        .form(&[("email", email.as_str()), ("password", password.as_str())])
        .send()
        .await
        .expect("login request");

    assert_eq!(resp.status(), StatusCode::SEE_OTHER, "sign-in succeeds");
    assert_eq!(location_header(&resp), "/customers");

    client
}

fn location_header(resp: &reqwest::Response) -> &str {
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn health_is_open() {
    let resp = raw_client()
        .get(format!("{}/health", admin_base_url()))
        .send()
        .await
        .expect("health request");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("body"), "ok");
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn readiness_checks_database() {
    let resp = raw_client()
        .get(format!("{}/health/ready", admin_base_url()))
        .send()
        .await
        .expect("readiness request");

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn unauthenticated_screens_redirect_to_login() {
    let client = raw_client();
    let base_url = admin_base_url();
    let id = Uuid::new_v4();

    for path in [
        "/".to_string(),
        "/customers".to_string(),
        "/customers/new".to_string(),
        format!("/customers/{id}"),
        format!("/customers/{id}/edit"),
    ] {
        let resp = client
            .get(format!("{base_url}{path}"))
            .send()
            .await
            .expect("request");

        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "GET {path}");
        assert_eq!(location_header(&resp), "/login", "GET {path}");
    }
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn login_page_is_open() {
    let resp = raw_client()
        .get(format!("{}/login", admin_base_url()))
        .send()
        .await
        .expect("login page request");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("body");
    assert!(body.contains("Sign in"));
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn wrong_credentials_rerender_login() {
    let resp = raw_client()
        .post(format!("{}/login", admin_base_url()))
        .form(&[("email", "nobody@example.com"), ("password", "wrong")])
        .send()
        .await
        .expect("login request");

    // Failed sign-in re-renders the form rather than redirecting
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("body");
    assert!(body.contains("Invalid email or password"));
}

#[tokio::test]
#[ignore = "Requires running admin server and ADMIN_TEST_* credentials"]
async fn signed_in_session_reaches_customer_screens() {
    let client = signed_in_client().await;
    let base_url = admin_base_url();

    // The root of the panel lands a signed-in session on the customer list
    let resp = client
        .get(&base_url)
        .send()
        .await
        .expect("root request");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_header(&resp), "/customers");

    let resp = client
        .get(format!("{base_url}/customers"))
        .send()
        .await
        .expect("customers request");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running admin server and ADMIN_TEST_* credentials"]
async fn signed_in_session_is_bounced_off_login() {
    let client = signed_in_client().await;

    let resp = client
        .get(format!("{}/login", admin_base_url()))
        .send()
        .await
        .expect("login page request");

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_header(&resp), "/customers");
}

#[tokio::test]
#[ignore = "Requires running admin server and ADMIN_TEST_* credentials"]
async fn sign_out_restores_the_guard() {
    let client = signed_in_client().await;
    let base_url = admin_base_url();

    let resp = client
        .post(format!("{base_url}/logout"))
        .send()
        .await
        .expect("logout request");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_header(&resp), "/login");

    // The old session cookie no longer grants access
    let resp = client
        .get(format!("{base_url}/customers"))
        .send()
        .await
        .expect("customers request");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_header(&resp), "/login");
}
