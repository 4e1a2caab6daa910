//! Identity context supplied by the upstream session gateway.
//!
//! The gateway resolves the session and forwards the acting user and tenant as
//! headers. Only run-history persistence and history reads consume them.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::errors::AppError;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const ORG_ID_HEADER: &str = "x-org-id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityContext {
    pub user_id: String,
    /// Tenant key. Every persisted run and every history read is scoped by it.
    pub org_key: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for IdentityContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(IdentityContext {
            user_id: header_value(parts, USER_ID_HEADER)?,
            org_key: header_value(parts, ORG_ID_HEADER)?,
        })
    }
}

fn header_value(parts: &Parts, name: &str) -> Result<String, AppError> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or(AppError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(builder: axum::http::request::Builder) -> Result<IdentityContext, AppError> {
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        IdentityContext::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_extracts_user_and_org() {
        let identity = extract(
            Request::builder()
                .header(USER_ID_HEADER, "user-42")
                .header(ORG_ID_HEADER, " acme "),
        )
        .await
        .unwrap();
        assert_eq!(identity.user_id, "user-42");
        assert_eq!(identity.org_key, "acme");
    }

    #[tokio::test]
    async fn test_missing_org_is_unauthorized() {
        let err = extract(Request::builder().header(USER_ID_HEADER, "user-42"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
    }

    #[tokio::test]
    async fn test_blank_user_is_unauthorized() {
        let err = extract(
            Request::builder()
                .header(USER_ID_HEADER, "  ")
                .header(ORG_ID_HEADER, "acme"),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
    }
}
