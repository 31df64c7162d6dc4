//! Member cache facade controller.

use crate::{
    extractors::ValidatedJson,
    responses::{created, no_content, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use member_core::{MemberError, MemberId};
use member_service::{MemberDto, MemberRequest};
use std::collections::BTreeSet;
use tracing::debug;

/// Creates the member router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_member_list).post(create_member))
        .route("/cache-writes", get(get_member_list_by_cache_writes))
        .route("/proxy/:id", get(get_member_by_proxy))
        .route("/cache/:id", get(get_member_from_cache))
        .route("/cache-keys", get(show_all_keys_by_scanning))
        .route("/cache", delete(cache_reset))
        .route("/cache/renewal", post(cache_renewal))
        .route("/:id", put(update_member).delete(delete_member))
}

/// List members through the read-through cache.
async fn get_member_list(State(state): State<AppState>) -> ApiResult<Vec<MemberDto>> {
    let members = state.member_service.get_member_list().await?;
    ok(members)
}

/// List members fresh and write each one to its own cache entry.
async fn get_member_list_by_cache_writes(
    State(state): State<AppState>,
) -> ApiResult<Vec<MemberDto>> {
    let members = state.member_service.get_member_list_by_cache_writes().await?;
    ok(members)
}

async fn get_member_by_proxy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MemberDto> {
    debug!("Get member by proxy request: {}", id);

    let member_id = parse_member_id(&id)?;
    let member = state.member_service.get_member_by_proxy(member_id).await?;
    ok(member)
}

async fn get_member_from_cache(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MemberDto> {
    debug!("Get member from cache request: {}", id);

    let member_id = parse_member_id(&id)?;
    let member = state.member_service.get_member_from_cache(member_id).await?;
    ok(member)
}

/// All cache keys, sorted.
async fn show_all_keys_by_scanning(State(state): State<AppState>) -> ApiResult<BTreeSet<String>> {
    let keys = state.member_service.show_all_keys_by_scanning().await?;
    ok(keys.into_iter().collect())
}

async fn cache_reset(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.member_service.cache_reset().await?;
    Ok(no_content())
}

async fn cache_renewal(State(state): State<AppState>) -> ApiResult<Vec<MemberDto>> {
    let members = state.member_service.cache_renewal().await?;
    ok(members)
}

async fn create_member(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<MemberRequest>,
) -> Result<(StatusCode, Json<ApiResponse<MemberDto>>), AppError> {
    debug!("Create member request: {}", request.username);

    let member = state.member_service.create_member(request).await?;
    Ok(created(member))
}

async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<MemberRequest>,
) -> ApiResult<MemberDto> {
    debug!("Update member request: {}", id);

    let member_id = parse_member_id(&id)?;
    let member = state.member_service.update_member(member_id, request).await?;
    ok(member)
}

async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MemberId> {
    debug!("Delete member request: {}", id);

    let member_id = parse_member_id(&id)?;
    let deleted = state.member_service.delete_member(member_id).await?;
    ok(deleted)
}

fn parse_member_id(id: &str) -> Result<MemberId, AppError> {
    id.parse()
        .map_err(|_| AppError(MemberError::validation(format!("Invalid member ID: {}", id))))
}
