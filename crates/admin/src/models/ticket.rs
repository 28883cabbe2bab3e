//! Customer support ticket models.

use serde::Serialize;

use retail_ops_core::{
    Faceted, Searchable, SupportChannel, TicketCode, TicketPriority, TicketStatus,
};

/// A customer-service case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportTicket {
    /// Ticket code (e.g. `SUP-001`).
    pub id: TicketCode,
    /// Customer display name.
    pub customer: String,
    /// Ticket category (Product Inquiry, Cart Issue, ...).
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    /// First customer message.
    pub subject: String,
    /// When the ticket was opened, as displayed.
    pub created: String,
    /// When support last replied, as displayed.
    pub last_response: String,
    pub channel: SupportChannel,
}

impl SupportTicket {
    /// Urgent tickets are highlighted in the ticket table.
    #[must_use]
    pub fn is_urgent(&self) -> bool {
        self.priority == TicketPriority::Urgent
    }

    /// Phosphor icon for the channel column.
    #[must_use]
    pub const fn channel_icon(&self) -> &'static str {
        match self.channel {
            SupportChannel::Chat => "ph-chat-circle",
            SupportChannel::Phone => "ph-phone",
            SupportChannel::Video => "ph-video-camera",
        }
    }
}

impl Searchable for SupportTicket {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.customer.as_str(),
            self.subject.as_str(),
            self.kind.as_str(),
        ]
    }
}

impl Faceted for SupportTicket {
    type Facet = TicketStatus;

    fn facet(&self) -> TicketStatus {
        self.status
    }
}
