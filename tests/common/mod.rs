//! Shared helpers for the integration tests.
//!
//! The tests drive the real router against a PostgreSQL database named by
//! `STOCKROOM_TEST_DATABASE_URL`. When that variable is unset the tests
//! skip themselves so the suite passes without infrastructure. Test data
//! uses per-run unique names, so no cleanup between runs is required.

#![allow(dead_code)]

use std::fmt::Write as _;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use stockroom_core::config::DatabaseConfig;
use stockroom_database::DatabasePool;
use stockroom_web::{build_router, build_state};

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Database pool for direct assertions.
    pub db_pool: PgPool,
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response body as text.
    pub body: String,
    /// The `Location` header, when the response is a redirect.
    pub location: Option<String>,
}

impl TestApp {
    /// Create a new test application, or `None` when no test database is
    /// configured.
    pub async fn new() -> Option<Self> {
        let Ok(url) = std::env::var("STOCKROOM_TEST_DATABASE_URL") else {
            eprintln!("STOCKROOM_TEST_DATABASE_URL not set; skipping database-backed test");
            return None;
        };

        let config = DatabaseConfig {
            url,
            max_connections: 5,
            min_connections: 1,
            connect_timeout_seconds: 5,
            idle_timeout_seconds: 60,
        };

        let db_pool = DatabasePool::connect(&config)
            .await
            .expect("Failed to connect to test database")
            .into_pool();

        stockroom_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let router = build_router(build_state(db_pool.clone()));

        Some(Self { router, db_pool })
    }

    /// Make a GET request.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Make a POST request with a form-encoded body.
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        self.request("POST", path, Some(fields)).await
    }

    async fn request(
        &self,
        method: &str,
        path: &str,
        form: Option<&[(&str, &str)]>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);

        let body = match form {
            Some(fields) => {
                builder = builder.header("Content-Type", "application/x-www-form-urlencoded");
                Body::from(encode_form(fields))
            }
            None => Body::empty(),
        };

        let request = builder.body(body).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let location = response
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        TestResponse {
            status,
            body: String::from_utf8_lossy(&bytes).into_owned(),
            location,
        }
    }

    /// Create a category through the form flow and return its id.
    pub async fn create_category(&self, name: &str, description: &str) -> Uuid {
        let response = self
            .post_form(
                "/create",
                &[("categoryName", name), ("description", description)],
            )
            .await;
        assert!(
            response.status.is_redirection(),
            "category create did not redirect: {} {}",
            response.status,
            response.body
        );
        id_from_location(response.location.as_deref().expect("redirect location"))
    }

    /// Create an item under a category through the form flow and return
    /// the item id.
    pub async fn create_item(
        &self,
        category_id: Uuid,
        name: &str,
        price: &str,
        quantity: &str,
    ) -> Uuid {
        let response = self
            .post_form(
                &format!("/category/{category_id}/create"),
                &[
                    ("itemName", name),
                    ("description", "A test item"),
                    ("price", price),
                    ("quantity", quantity),
                ],
            )
            .await;
        assert!(
            response.status.is_redirection(),
            "item create did not redirect: {} {}",
            response.status,
            response.body
        );
        id_from_location(response.location.as_deref().expect("redirect location"))
    }

    /// Count category rows with an exact name.
    pub async fn count_categories_named(&self, name: &str) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM categories WHERE name = $1")
            .bind(name)
            .fetch_one(&self.db_pool)
            .await
            .expect("count query failed")
    }

    /// Count item rows with an exact name.
    pub async fn count_items_named(&self, name: &str) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM items WHERE name = $1")
            .bind(name)
            .fetch_one(&self.db_pool)
            .await
            .expect("count query failed")
    }
}

/// Parse the trailing UUID segment of a redirect location.
pub fn id_from_location(location: &str) -> Uuid {
    location
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
        .unwrap_or_else(|| panic!("no id in location '{location}'"))
}

/// A name that is unique per invocation and passes text validation
/// (letters, digits, and spaces only).
pub fn unique_name(prefix: &str) -> String {
    format!("{prefix} {}", Uuid::new_v4().simple())
}

fn encode_form(fields: &[(&str, &str)]) -> String {
    let mut encoded = String::new();
    for (i, (name, value)) in fields.iter().enumerate() {
        if i > 0 {
            encoded.push('&');
        }
        encoded.push_str(&urlencode(name));
        encoded.push('=');
        encoded.push_str(&urlencode(value));
    }
    encoded
}

fn urlencode(value: &str) -> String {
    let mut out = String::new();
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            b' ' => out.push('+'),
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}
