//! Toast notifications returned by action buttons.
//!
//! Buttons post with htmx; the response is a toast fragment swapped into the
//! toast region plus an `HX-Trigger: toast` header so the page script can
//! show and dismiss it.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{AppendHeaders, IntoResponse, Response};
use serde::Serialize;

/// htmx event fired with every toast.
pub const TOAST_EVENT: &str = "toast";

/// Colour of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

impl ToastVariant {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Default => "toast-default",
            Self::Destructive => "toast-destructive",
        }
    }
}

/// A short confirmation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    #[must_use]
    pub fn destructive(mut self) -> Self {
        self.variant = ToastVariant::Destructive;
        self
    }
}

/// A button that acknowledges an operation without performing it.
pub trait StubAction {
    /// Short action name for logs.
    fn name(&self) -> &'static str;

    /// Message confirming the action.
    fn toast(&self) -> Toast;
}

/// Toast fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/toast.html")]
pub struct ToastTemplate {
    pub toast: Toast,
}

/// A rendered toast plus the header that tells the page to show it.
#[derive(Debug)]
pub struct ToastResponse(pub Toast);

impl IntoResponse for ToastResponse {
    fn into_response(self) -> Response {
        (
            AppendHeaders([("HX-Trigger", TOAST_EVENT)]),
            ToastTemplate { toast: self.0 },
        )
            .into_response()
    }
}

/// Respond to an action with its toast.
pub fn respond(action: &impl StubAction) -> ToastResponse {
    ToastResponse(action.toast())
}
