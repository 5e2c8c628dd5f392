mod common;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use axum::http::StatusCode;

use agency_console_api::config::{AppConfig, Environment};
use agency_console_api::database::{AdminRecord, AdminStore, DatabaseError};
use agency_console_api::{app, AppState};
use common::TestApp;

/// Store whose pool is gone, or whose queries fail, depending on `outage`
struct FailingStore {
    outage: bool,
}

#[async_trait]
impl AdminStore for FailingStore {
    async fn find_by_email(&self, _email: &str) -> Result<Option<AdminRecord>, DatabaseError> {
        Ok(None)
    }

    async fn insert(&self, admin: AdminRecord) -> Result<AdminRecord, DatabaseError> {
        Ok(admin)
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        if self.outage {
            Err(DatabaseError::Sqlx(sqlx::Error::PoolTimedOut))
        } else {
            Err(DatabaseError::Sqlx(sqlx::Error::RowNotFound))
        }
    }
}

fn app_over(store: FailingStore) -> TestApp {
    let state = AppState::new(
        AppConfig::for_environment(Environment::Development),
        Arc::new(store),
    );
    TestApp {
        router: app(state.clone()),
        state,
    }
}

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let app = common::spawn_app().await?;

    let res = app.get("/health", &[]).await?;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["success"], true);
    assert_eq!(res.body["data"]["status"], "ok");
    assert_eq!(res.body["data"]["signing"], true);
    Ok(())
}

#[tokio::test]
async fn root_lists_service() -> Result<()> {
    let app = common::spawn_app().await?;

    let res = app.get("/", &[]).await?;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["data"]["version"], env!("CARGO_PKG_VERSION"));
    Ok(())
}

#[tokio::test]
async fn unknown_route_is_json_404() -> Result<()> {
    let app = common::spawn_app().await?;

    let res = app.get("/api/models", &[]).await?;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["error"]["code"], "NOT_FOUND");
    Ok(())
}

#[tokio::test]
async fn health_reports_outage_as_503() -> Result<()> {
    let app = app_over(FailingStore { outage: true });

    let res = app.get("/health", &[]).await?;

    assert_eq!(res.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(res.body["error"]["code"], "SERVICE_UNAVAILABLE");
    Ok(())
}

#[tokio::test]
async fn health_reports_query_failure_as_500() -> Result<()> {
    let app = app_over(FailingStore { outage: false });

    let res = app.get("/health", &[]).await?;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.body["error"]["code"], "INTERNAL_SERVER_ERROR");
    Ok(())
}
