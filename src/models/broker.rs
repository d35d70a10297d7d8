//! Broker model matching the frontend Broker interface.

use serde::{Deserialize, Serialize};

use super::Identified;

/// A registered broker. Only verified brokers appear on the public page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Broker {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default)]
    pub verified: bool,
}

impl Identified for Broker {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Request body for the public broker registration form.
///
/// `verified` is intentionally absent: new registrations always start
/// unverified and only an admin update can flip the flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterBrokerRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub location: String,
}

/// Request body for updating an existing broker (admin only).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBrokerRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

/// Phone numbers accepted by the registration form: digits plus the
/// separators people actually type, 7 to 15 characters.
pub fn phone_is_valid(phone: &str) -> bool {
    let len = phone.chars().count();
    (7..=15).contains(&len)
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '(' | ')' | ' '))
}
