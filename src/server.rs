//! JSON API over the content catalog for the front-end apps.
//!
//! Read-only: every handler is a lookup against the shared catalog.

use crate::catalog::{Catalog, Course, Difficulty, Language, Level, Operation, Subject};
use crate::config::Config;
use crate::i18n::Locale;
use crate::text::{replace_variables, replace_variables_strict};
use anyhow::{Context, Result};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(catalog: Catalog, config: Config) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}

/// Handler error, rendered as `{"error": "..."}` with the matching status.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Unprocessable(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::NotFound(message) | ApiError::Unprocessable(message) => message,
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct OperationsQuery {
    pub difficulty: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TextResponse {
    pub page: String,
    pub path: String,
    pub locale: String,
    pub text: String,
}

/// Build the API router.
///
/// # Arguments
/// * `state` - Catalog and config shared by all handlers
///
/// # Returns
/// A router with request tracing, ready to serve.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/languages", get(list_languages))
        .route("/api/languages/:id", get(get_language))
        .route("/api/courses", get(list_courses))
        .route("/api/courses/:id", get(get_course))
        .route(
            "/api/courses/:course_id/subjects/:subject_id/levels",
            get(course_levels),
        )
        .route("/api/subjects", get(list_subjects))
        .route("/api/subjects/:id", get(get_subject))
        .route("/api/operations", get(list_operations))
        .route("/api/text/:page/:path", get(page_text))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(state: AppState) -> Result<()> {
    let addr = format!("0.0.0.0:{}", state.config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("✓ Listening on {}", addr);
    axum::serve(listener, router(state))
        .await
        .context("Server error")?;

    Ok(())
}

pub async fn health() -> &'static str {
    "OK"
}

/// `GET /api/languages[?enabled=true]`
pub async fn list_languages(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Language>> {
    let catalog = &state.catalog;
    let languages: Vec<Language> = if query.enabled {
        catalog.enabled_languages().into_iter().cloned().collect()
    } else {
        catalog.languages().to_vec()
    };
    Json(languages)
}

/// `GET /api/languages/:id`
///
/// # Returns
/// * `200` with the language, enabled or not
/// * `404` if the code is unknown
pub async fn get_language(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Language>, ApiError> {
    state
        .catalog
        .find_language(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown language '{}'", id)))
}

/// `GET /api/courses[?enabled=true]`
pub async fn list_courses(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Course>> {
    let catalog = &state.catalog;
    let courses: Vec<Course> = if query.enabled {
        catalog.enabled_courses().into_iter().cloned().collect()
    } else {
        catalog.courses().to_vec()
    };
    Json(courses)
}

pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Course>, ApiError> {
    state
        .catalog
        .find_course(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown course '{}'", id)))
}

/// `GET /api/subjects[?enabled=true]`
pub async fn list_subjects(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Subject>> {
    let catalog = &state.catalog;
    let subjects: Vec<Subject> = if query.enabled {
        catalog.enabled_subjects().into_iter().cloned().collect()
    } else {
        catalog.subjects().to_vec()
    };
    Json(subjects)
}

pub async fn get_subject(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Subject>, ApiError> {
    state
        .catalog
        .find_subject(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown subject '{}'", id)))
}

/// Always 200: a pair with no levels is an empty list.
pub async fn course_levels(
    State(state): State<AppState>,
    Path((course_id, subject_id)): Path<(String, String)>,
) -> Json<Vec<Level>> {
    Json(state.catalog.course_levels(&course_id, &subject_id).to_vec())
}

/// `GET /api/operations[?difficulty=easy|medium]`
///
/// An unknown difficulty is a `422`.
pub async fn list_operations(
    State(state): State<AppState>,
    Query(query): Query<OperationsQuery>,
) -> Result<Json<Vec<Operation>>, ApiError> {
    let operations = match query.difficulty.as_deref() {
        None => state.catalog.operations().to_vec(),
        Some(name) => {
            let difficulty = Difficulty::from_name(name).ok_or_else(|| {
                ApiError::Unprocessable(format!(
                    "Unknown difficulty '{}', expected one of: {}",
                    name,
                    Difficulty::NAMES.join(", ")
                ))
            })?;
            state
                .catalog
                .operations_by_difficulty(difficulty)
                .into_iter()
                .cloned()
                .collect()
        }
    };
    Ok(Json(operations))
}

/// Resolved, substituted copy. `locale` selects the locale; every other query
/// parameter is a template variable.
pub async fn page_text(
    State(state): State<AppState>,
    Path((page, path)): Path<(String, String)>,
    Query(mut variables): Query<HashMap<String, String>>,
) -> Result<Json<TextResponse>, ApiError> {
    let locale = variables
        .remove("locale")
        .unwrap_or_else(|| state.config.default_locale.code().to_string());

    let text = if state.config.strict_copy {
        Locale::from_code(&locale).map_err(|e| ApiError::Unprocessable(e.to_string()))?;
        let raw = state
            .catalog
            .resolve(&page, &path, &locale)
            .map_err(|e| ApiError::NotFound(e.to_string()))?;
        replace_variables_strict(raw, &variables)
            .map_err(|e| ApiError::Unprocessable(e.to_string()))?
    } else {
        replace_variables(&state.catalog.ui_text(&page, &path, &locale), &variables)
    };

    Ok(Json(TextResponse {
        page,
        path,
        locale,
        text,
    }))
}
