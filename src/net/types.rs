//! Serde DTOs for the backend API boundary.
//!
//! DESIGN
//! ======
//! Deserialization is tolerant: nullable fields are `Option`, list fields
//! default to empty, and the backend's `name`/`full_name` inconsistency is
//! absorbed here so pages never branch on it.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in viewer as returned by `/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name. Some backend versions send `full_name` instead.
    pub name: Option<String>,
    /// Legacy display-name field, kept for older backend responses.
    pub full_name: Option<String>,
    /// Account email; always present.
    pub email: String,
    /// Avatar image URL, if set.
    pub avatar_url: Option<String>,
    /// Platform role (`"founder"` or `"investor"`), if assigned.
    pub role: Option<String>,
    /// One-line pitch shown on the public profile, if set.
    pub headline: Option<String>,
}

impl UserProfile {
    /// Best available display name: `name`, then `full_name`, then email.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.full_name.as_deref())
            .unwrap_or(&self.email)
    }

    /// Up to two uppercase initials for the avatar fallback.
    pub fn initials(&self) -> String {
        self.display_name()
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// A founder's fundraising project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier.
    pub id: String,
    /// Project name.
    pub name: String,
    /// Short pitch, if provided.
    pub summary: Option<String>,
    /// Fundraising stage label (e.g. `"seed"`), if set.
    pub stage: Option<String>,
    /// Creation timestamp (ISO 8601), if the backend sends it.
    pub created_at: Option<String>,
}

/// A message thread between a founder and an investor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique conversation identifier.
    pub id: String,
    /// Display name of the other participant.
    pub counterpart_name: String,
    /// Most recent message body, for the list preview.
    pub last_message: Option<String>,
    /// Whether the thread has messages the viewer has not seen.
    #[serde(default)]
    pub unread: bool,
}

/// One message within a conversation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier.
    pub id: String,
    /// Display name of the sender.
    pub sender_name: String,
    /// Message text.
    pub body: String,
    /// Send timestamp (ISO 8601), if the backend sends it.
    pub sent_at: Option<String>,
    /// Whether the viewer sent this message.
    #[serde(default)]
    pub is_own: bool,
}

/// The viewer's current billing subscription.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Plan identifier (matches the plan catalog ids).
    pub plan: String,
    /// Billing status (e.g. `"active"`, `"past_due"`).
    pub status: String,
    /// Next renewal date (ISO 8601), if applicable.
    pub renews_at: Option<String>,
}

/// Successful response from `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Session token to store client-side.
    pub access_token: String,
}

/// Successful response from `POST /billing/checkout`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckoutResponse {
    /// Hosted checkout page to navigate to.
    pub checkout_url: String,
}
