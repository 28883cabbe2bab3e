//! Staff account domain types.

use chrono::NaiveDateTime;
use serde::Serialize;

use retail_ops_core::{AccountStatus, Email, Faceted, Searchable, StaffRole, StaffUserId};

use super::transaction::TIMESTAMP_FORMAT;

/// A store staff account shown on the user management page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffAccount {
    pub id: StaffUserId,
    /// Display name.
    pub name: String,
    pub email: Email,
    pub role: StaffRole,
    pub status: AccountStatus,
    /// Most recent sign-in.
    pub last_login: NaiveDateTime,
}

impl StaffAccount {
    /// Last login formatted for display.
    #[must_use]
    pub fn display_last_login(&self) -> String {
        self.last_login.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl Searchable for StaffAccount {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.role.label()]
    }
}

impl Faceted for StaffAccount {
    type Facet = StaffRole;

    fn facet(&self) -> StaffRole {
        self.role
    }
}
