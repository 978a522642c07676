//! Sample `/api` routes exercising the envelope protocol end to end

use axum::Router;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::{get, post};
use lms_auth::{TokenClaims, TokenService};
use lms_core::{ApiError, ApiJson, ApiResult, Envelope, Failure};
use serde::{Deserialize, Serialize};

use super::config::ConfigBuilder;

#[derive(Debug, Serialize)]
pub struct Course {
    pub id: u32,
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct NewCourse {
    pub title: String,
}

/// Token service sharing the secret that [`ConfigBuilder::with_auth`] sets
pub fn tokens() -> TokenService {
    let config = ConfigBuilder::new().with_auth().build();
    let auth = config.auth.expect("auth configured");
    TokenService::from_config(&auth).expect("valid auth config")
}

pub fn claims(role: &str) -> TokenClaims {
    TokenClaims {
        id: "u-1".to_owned(),
        username: "ada".to_owned(),
        email: "ada@example.com".to_owned(),
        role: role.to_owned(),
    }
}

/// Application routes mounted under `/api` by the server
pub fn router() -> Router {
    Router::new()
        .route("/courses", post(create_course))
        .route("/courses/{id}", get(get_course))
        .route("/me", get(me))
        .route("/admin", get(admin))
        .route("/broken", get(broken))
        .route("/panic", get(panics))
        .with_state(tokens())
}

async fn get_course(Path(id): Path<u32>) -> ApiResult<Course> {
    if id != 1 {
        return Err(ApiError::not_found("Course not found").into());
    }

    Ok(Envelope::ok(
        "Course loaded",
        Course {
            id,
            title: "Rust 101".to_owned(),
        },
    ))
}

async fn create_course(ApiJson(body): ApiJson<NewCourse>) -> ApiResult<Course> {
    let title = body.title.trim();
    if title.is_empty() {
        return Err(ApiError::bad_request("Title is required").into());
    }
    if title == "Rust 101" {
        return Err(ApiError::conflict("Course already exists").into());
    }

    Ok(Envelope::created(
        "Course created",
        Course {
            id: 2,
            title: title.to_owned(),
        },
    ))
}

fn authenticate(tokens: &TokenService, headers: &HeaderMap) -> Result<TokenClaims, Failure> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| ApiError::unauthorized("Authentication required"))?;

    Ok(tokens.verify(token)?)
}

async fn me(State(tokens): State<TokenService>, headers: HeaderMap) -> ApiResult<TokenClaims> {
    let claims = authenticate(&tokens, &headers)?;
    Ok(Envelope::ok("Profile loaded", claims))
}

async fn admin(State(tokens): State<TokenService>, headers: HeaderMap) -> ApiResult<()> {
    let claims = authenticate(&tokens, &headers)?;
    if claims.role != "admin" {
        return Err(ApiError::forbidden("Admins only").into());
    }

    Ok(Envelope::empty(StatusCode::OK, "Welcome, admin"))
}

async fn broken() -> ApiResult<()> {
    let rows: Vec<u32> = Vec::new();
    let first = rows
        .first()
        .ok_or_else(|| anyhow::anyhow!("Cannot read properties of undefined (reading 'id')"))?;
    Ok(Envelope::empty(StatusCode::OK, format!("row {first}")))
}

async fn panics() -> ApiResult<()> {
    let rows: Vec<u32> = Vec::new();
    let index = rows.len() + 3;
    Ok(Envelope::empty(StatusCode::OK, format!("row {}", rows[index])))
}
