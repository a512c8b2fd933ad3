//! Router harness for API tests.

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;

use kontor_api::{AppState, create_router, middleware::USER_ID_HEADER};
use kontor_shared::AppConfig;

/// A router over a fresh in-memory database.
pub struct TestApp {
    pub router: Router,
    pub db: DatabaseConnection,
}

impl TestApp {
    pub async fn new(auth_enabled: bool) -> Self {
        let db = kontor_db::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");
        kontor_db::migrate(&db).await.expect("Failed to run migrations");
        kontor_db::UserRepository::new(db.clone())
            .ensure_bootstrap()
            .await
            .expect("Failed to seed bootstrap admin");

        let mut config = AppConfig::for_testing();
        config.auth.enabled = auth_enabled;

        Self {
            router: create_router(AppState::new(db.clone(), config)),
            db,
        }
    }

    /// Sends a request and returns the status and the parsed body.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        user_id: Option<i32>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user_id) = user_id {
            builder = builder.header(USER_ID_HEADER, user_id.to_string());
        }
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        self.raw(request).await
    }

    pub async fn raw(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str, user_id: Option<i32>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, user_id, None).await
    }

    pub async fn post(&self, uri: &str, user_id: Option<i32>, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, user_id, Some(body)).await
    }

    pub async fn put(&self, uri: &str, user_id: Option<i32>, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, user_id, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, user_id: Option<i32>) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, user_id, None).await
    }
}

/// Reads a JSON number as an exact amount.
pub fn amount(value: &Value) -> Decimal {
    serde_json::from_value(value.clone()).expect("not an amount")
}

/// Paths of the issues in a validation envelope.
pub fn issue_paths(body: &Value) -> Vec<String> {
    body["issues"]
        .as_array()
        .expect("no issues")
        .iter()
        .map(|issue| issue["path"].as_str().unwrap_or_default().to_string())
        .collect()
}
