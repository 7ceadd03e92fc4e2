use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of account, mirroring the picker options in the dashboard UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Checking,
    Savings,
    Credit,
    Investment,
    Other,
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountType::Checking => write!(f, "checking"),
            AccountType::Savings => write!(f, "savings"),
            AccountType::Credit => write!(f, "credit"),
            AccountType::Investment => write!(f, "investment"),
            AccountType::Other => write!(f, "other"),
        }
    }
}

/// A wallet account. `balance` is the anchor balance: it already reflects the
/// net effect of every transaction belonging to the account, and is the
/// replay baseline used by the balance engine. Always rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Uuid,

    pub name: String,

    pub balance: f64,

    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Hex color code for the account card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Icon name/identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Archived accounts are hidden from pickers and allocation flows but
    /// remain valid targets for historical transactions.
    #[serde(default)]
    pub is_archived: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Account {
    pub fn new(name: impl Into<String>, account_type: AccountType, balance: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            balance,
            account_type,
            color: None,
            icon: None,
            is_archived: false,
            created_at: Some(chrono::Utc::now().date_naive()),
            account_number: None,
            description: None,
        }
    }
}
