#![allow(dead_code)]

use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use agency_console_api::auth::password;
use agency_console_api::config::{AppConfig, Environment};
use agency_console_api::database::{AdminRecord, AdminStore, MemoryAdminStore};
use agency_console_api::{app, AppState};

pub const SECRET: &str = "integration-test-secret";
pub const ADMIN_EMAIL: &str = "booker@agency.test";
pub const ADMIN_PASSWORD: &str = "runway-2024!";

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    /// All `Set-Cookie` header values
    pub fn set_cookies(&self) -> Vec<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok().map(str::to_string))
            .collect()
    }

    /// Value of the named cookie from `Set-Cookie`
    pub fn cookie(&self, name: &str) -> Option<String> {
        let prefix = format!("{}=", name);
        self.set_cookies().into_iter().find_map(|c| {
            c.strip_prefix(&prefix)
                .and_then(|rest| rest.split(';').next())
                .map(str::to_string)
        })
    }
}

/// App over an in-memory store holding one admin, signing with `SECRET`
pub async fn spawn_app() -> Result<TestApp> {
    spawn_app_with_secret(Some(SECRET)).await
}

pub async fn spawn_app_with_secret(secret: Option<&str>) -> Result<TestApp> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();

    let store = MemoryAdminStore::new();
    store
        .insert(AdminRecord::new(ADMIN_EMAIL, password::hash(ADMIN_PASSWORD)?))
        .await?;

    let mut config = AppConfig::for_environment(Environment::Development);
    config.security.jwt_secret = secret.map(str::to_string);

    let state = AppState::new(config, Arc::new(store));
    Ok(TestApp {
        router: app(state.clone()),
        state,
    })
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Result<TestResponse> {
        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        Ok(TestResponse { status, headers, body })
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<TestResponse> {
        let payload = serde_json::json!({ "email": email, "password": password });
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri("/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))?,
        )
        .await
    }

    /// Log in as the seeded admin and return the signed token
    pub async fn admin_token(&self) -> Result<String> {
        let response = self.login(ADMIN_EMAIL, ADMIN_PASSWORD).await?;
        anyhow::ensure!(response.status == StatusCode::OK, "login failed: {}", response.body);
        response
            .cookie("token")
            .ok_or_else(|| anyhow::anyhow!("login set no token cookie"))
    }

    pub async fn get(&self, uri: &str, headers: &[(&str, &str)]) -> Result<TestResponse> {
        self.request(Method::GET, uri, headers).await
    }

    pub async fn post(&self, uri: &str, headers: &[(&str, &str)]) -> Result<TestResponse> {
        self.request(Method::POST, uri, headers).await
    }

    async fn request(&self, method: Method, uri: &str, headers: &[(&str, &str)]) -> Result<TestResponse> {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        self.send(builder.body(Body::empty())?).await
    }
}
