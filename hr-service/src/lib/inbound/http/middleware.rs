use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::extract::Request;
use axum::extract::State;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::http::Uri;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::auth::models::AccessPolicy;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::employee::models::Employee;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Account resolved from the request's bearer token.
#[derive(Debug, Clone)]
pub struct CurrentEmployee(pub Employee);

#[async_trait]
impl FromRequestParts<AppState> for CurrentEmployee {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token_from_header(&parts.headers)?;
        let employee = state.auth_service.resolve_current_user(token).await?;
        Ok(CurrentEmployee(employee))
    }
}

/// Admit any existing, unblocked account.
pub async fn require_authenticated(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(req.headers())?.to_string();
    enforce(&state, &token, req.uri().clone(), AccessPolicy::Authenticated).await?;
    Ok(next.run(req).await)
}

/// Admit administrators only.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(req.headers())?.to_string();
    enforce(&state, &token, req.uri().clone(), AccessPolicy::Admin).await?;
    Ok(next.run(req).await)
}

/// Admit administrators and staff.
pub async fn require_admin_or_staff(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(req.headers())?.to_string();
    enforce(&state, &token, req.uri().clone(), AccessPolicy::AdminOrStaff).await?;
    Ok(next.run(req).await)
}

// Takes owned request data: `Request` is not `Sync`, so a borrow of it
// cannot be held across the await.
async fn enforce(
    state: &AppState,
    token: &str,
    uri: Uri,
    policy: AccessPolicy,
) -> Result<(), ApiError> {
    state
        .auth_service
        .check_authorized(token, policy.allowed_roles())
        .await
        .map_err(|e| {
            tracing::warn!(policy = ?policy, uri = %uri, error = %e, "Access denied");
            ApiError::from(e)
        })
}

/// Extract the token from an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively.
pub fn extract_token_from_header(headers: &HeaderMap) -> Result<&str, ApiError> {
    let auth_header = headers
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Invalid Authorization header".to_string()))?;

    match auth_str.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() => {
            Ok(token.trim())
        }
        _ => Err(ApiError::Unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
        )),
    }
}
