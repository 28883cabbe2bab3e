//! Customer support console route handlers.

use askama::Template;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::Html,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    components::{
        Badge, DataTableConfig, StatCard, StubAction, Toast, ToastResponse, Tone,
        data_table::tickets_table_config, toast,
    },
    error::AppError,
    models::SupportTicket,
    state::AppState,
};

use super::{ListQuery, Listing, Shell, action_verbs, render};

/// Recently closed issues listed under the support tools.
const RECENT_RESOLUTIONS: &[(&str, &str)] = &[
    ("Cart sync issue", "Resolved 2 hours ago"),
    ("Payment refund", "Resolved 4 hours ago"),
    ("Product availability", "Resolved 6 hours ago"),
];

/// Support console page template.
#[derive(Template)]
#[template(path = "support.html")]
pub struct SupportTemplate<'a> {
    pub shell: Shell,
    pub stats: Vec<StatCard>,
    pub table: DataTableConfig,
    pub listing: Listing<'a, SupportTicket>,
    pub resolutions: &'static [(&'static str, &'static str)],
}

/// Ticket conversation dialog (htmx fragment).
#[derive(Template)]
#[template(path = "partials/ticket_dialog.html")]
pub struct TicketDialogTemplate<'a> {
    pub ticket: &'a SupportTicket,
}

fn summary() -> Vec<StatCard> {
    vec![
        StatCard::new("Open Tickets", "8", "2 urgent")
            .icon("ph-warning-circle")
            .tone(Tone::Warning),
        StatCard::new("Avg Response", "4m 23s", "-15% today")
            .icon("ph-clock")
            .tone(Tone::Success),
        StatCard::new("Resolution Rate", "94.2%", "+2.1% this week")
            .icon("ph-check-circle")
            .tone(Tone::Success),
        StatCard::new("Active Agents", "12", "of 15 total")
            .icon("ph-headphones")
            .tone(Tone::Muted),
        StatCard::new("Satisfaction", "4.8/5", "+0.2 this month")
            .icon("ph-star")
            .tone(Tone::Success),
    ]
}

/// Support console page handler.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Html<String>, AppError> {
    let listing = Listing::from_query(state.catalog().tickets(), &params)?;

    render(&SupportTemplate {
        shell: Shell::new(&state, "/support"),
        stats: summary(),
        table: tickets_table_config(),
        listing,
        resolutions: RECENT_RESOLUTIONS,
    })
}

/// Ticket dialog handler.
#[instrument(skip(state))]
pub async fn ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let ticket = state
        .catalog()
        .find_ticket(&id)
        .ok_or_else(|| AppError::not_found("ticket", &id))?;

    render(&TicketDialogTemplate { ticket })
}

/// Form input for a ticket reply.
#[derive(Debug, Deserialize)]
pub struct ReplyForm {
    pub message: String,
}

/// A reply typed into the ticket dialog.
#[derive(Debug)]
pub struct TicketReply<'a> {
    pub ticket: &'a SupportTicket,
}

impl StubAction for TicketReply<'_> {
    fn name(&self) -> &'static str {
        "reply"
    }

    fn toast(&self) -> Toast {
        Toast::new(
            "Message Sent",
            format!("Response sent to {} on {}.", self.ticket.customer, self.ticket.id),
        )
    }
}

/// Reply to a ticket (toast only; the conversation is not stored).
#[instrument(skip(state, form))]
pub async fn reply(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ReplyForm>,
) -> Result<ToastResponse, AppError> {
    let ticket = state
        .catalog()
        .find_ticket(&id)
        .ok_or_else(|| AppError::not_found("ticket", &id))?;
    if form.message.trim().is_empty() {
        return Err(AppError::BadRequest("Reply message is empty".to_string()));
    }

    let action = TicketReply { ticket };
    tracing::info!(
        action = action.name(),
        ticket = %ticket.id,
        length = form.message.len(),
        "Ticket reply requested"
    );
    Ok(toast::respond(&action))
}

action_verbs! {
    /// Buttons on the support tools card.
    SupportTool {
        VideoCall => "video-call",
        Transfer => "transfer",
        Escalate => "escalate",
        Resolve => "resolve",
    }
}

impl StubAction for SupportTool {
    fn name(&self) -> &'static str {
        self.key()
    }

    fn toast(&self) -> Toast {
        match self {
            Self::VideoCall => Toast::new("Video Call", "Starting video call with the customer"),
            Self::Transfer => Toast::new("Transferred", "Conversation transferred to a manager"),
            Self::Escalate => Toast::new("Escalated", "Ticket escalated to technical support"),
            Self::Resolve => Toast::new("Marked as Resolved", "Ticket marked as resolved"),
        }
    }
}

/// Support tools handler (toast only).
#[instrument]
pub async fn tool(Path(tool): Path<String>) -> Result<ToastResponse, AppError> {
    let tool: SupportTool = tool.parse()?;

    tracing::info!(action = tool.name(), "Support tool requested");
    Ok(toast::respond(&tool))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::tests::{get, post, post_form};

    #[tokio::test]
    async fn test_search_and_filter() {
        let (status, body) = get("/support?q=payment").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("SUP-003"));
        assert!(!body.contains("SUP-001"));

        let (status, body) = get("/support?status=resolved").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Store hours inquiry"));
        assert!(!body.contains("Digital cart not syncing items"));
    }

    #[tokio::test]
    async fn test_ticket_dialog() {
        let (status, body) = get("/support/sup-002").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Ticket SUP-002"));
        assert!(body.contains("Digital cart not syncing items"));
        assert!(body.contains("Type your response..."));

        let (status, _) = get("/support/SUP-404").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_reply() {
        let (status, trigger, body) =
            post_form("/support/SUP-001/reply", "message=On+its+way").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(trigger.as_deref(), Some("toast"));
        assert!(body.contains("Response sent to Sarah Johnson on SUP-001."));

        let (status, _, _) = post_form("/support/SUP-001/reply", "message=+++").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_resolve_tool_leaves_tickets_unchanged() {
        let (status, _, body) = post("/support/tools/resolve").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Marked as Resolved"));

        let (_, page) = get("/support?status=escalated").await;
        assert!(page.contains("SUP-003"));

        let (status, _, _) = post("/support/tools/teleport").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
