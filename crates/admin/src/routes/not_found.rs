//! Fallback for paths no route matches.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::IntoResponse,
};

use crate::state::AppState;

use super::Shell;

/// 404 page, rendered inside the normal layout.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub shell: Shell,
    pub path: String,
}

/// Fallback handler.
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> impl IntoResponse {
    tracing::info!(path = %uri.path(), "No route for path");

    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            shell: Shell::new(&state, uri.path()),
            path: uri.path().to_string(),
        },
    )
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::tests::get;

    #[tokio::test]
    async fn test_unknown_paths_are_not_found() {
        for path in ["/recommendations", "/settings", "/security", "/inventory/WM001"] {
            let (status, body) = get(path).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
            assert!(body.contains("Oops! Page not found"));
            assert!(body.contains("Return to Home"));
            assert!(!body.contains("Recent Activity"));
        }
    }

    #[tokio::test]
    async fn test_browsing_to_an_action_path_is_not_found() {
        for path in ["/carts/refresh", "/users/1/view", "/live-view", "/inventory/add"] {
            let (status, body) = get(path).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
            assert!(body.contains("Oops! Page not found"), "{path}");
        }
    }
}
