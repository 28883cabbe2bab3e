//! User management route handlers.

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use tracing::instrument;

use crate::{
    components::{
        Badge, DataTableConfig, StatCard, StubAction, Toast, ToastResponse,
        data_table::users_table_config, toast,
    },
    error::AppError,
    filters,
    models::StaffAccount,
    state::AppState,
};

use super::{ListQuery, Listing, Shell, action_verbs, render};

/// User management page template.
#[derive(Template)]
#[template(path = "users.html")]
pub struct UsersTemplate<'a> {
    pub shell: Shell,
    pub stats: Vec<StatCard>,
    pub table: DataTableConfig,
    pub listing: Listing<'a, StaffAccount>,
}

fn summary() -> Vec<StatCard> {
    vec![
        StatCard::new("Total Users", "124", "+5 from last month").icon("ph-users"),
        StatCard::new("Active Users", "118", "95.2% active rate").icon("ph-user-check"),
        StatCard::new("Managers", "12", "3 departments").icon("ph-shield"),
        StatCard::new("Staff Members", "112", "Floor staff").icon("ph-identification-badge"),
    ]
}

/// User management page handler.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Html<String>, AppError> {
    let listing = Listing::from_query(state.catalog().staff(), &params)?;

    render(&UsersTemplate {
        shell: Shell::new(&state, "/users"),
        stats: summary(),
        table: users_table_config(),
        listing,
    })
}

/// The header "Add User" button.
#[derive(Debug, Clone, Copy)]
pub struct AddUser;

impl StubAction for AddUser {
    fn name(&self) -> &'static str {
        "add"
    }

    fn toast(&self) -> Toast {
        Toast::new("Add User", "Add user functionality activated")
    }
}

/// Start adding a user (toast only).
#[instrument]
pub async fn add() -> ToastResponse {
    tracing::info!(action = AddUser.name(), "Add user requested");
    toast::respond(&AddUser)
}

action_verbs! {
    /// Buttons on a user row.
    UserVerb {
        View => "view",
        Edit => "edit",
        Delete => "delete",
    }
}

/// A button pressed on one staff account.
#[derive(Debug)]
pub struct UserAction<'a> {
    pub verb: UserVerb,
    pub user: &'a StaffAccount,
}

impl StubAction for UserAction<'_> {
    fn name(&self) -> &'static str {
        self.verb.key()
    }

    fn toast(&self) -> Toast {
        let id = self.user.id;
        match self.verb {
            UserVerb::View => Toast::new("View User", format!("Viewing details for user {id}")),
            UserVerb::Edit => Toast::new("Edit User", format!("Editing user {id}")),
            UserVerb::Delete => {
                Toast::new("Delete User", format!("User {id} deleted")).destructive()
            }
        }
    }
}

/// User row action handler (toast only).
#[instrument(skip(state))]
pub async fn user_action(
    State(state): State<AppState>,
    Path((id, verb)): Path<(String, String)>,
) -> Result<ToastResponse, AppError> {
    let user = state
        .catalog()
        .find_staff(&id)
        .ok_or_else(|| AppError::not_found("user", &id))?;
    let action = UserAction {
        verb: verb.parse()?,
        user,
    };

    tracing::info!(action = action.name(), user_id = %user.id, "User action requested");
    Ok(toast::respond(&action))
}
