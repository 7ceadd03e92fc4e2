use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A declarative transaction query. All active predicates are AND-combined;
/// fields left at their defaults are inactive. Transient UI state with no
/// persisted identity — see [`FilterPreset`] for the saved form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    /// Legacy single-category filter. Ignored when `categories` is non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Multi-category filter; takes precedence over `category`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,

    /// Inclusive lower bound on the transaction's calendar date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,

    /// Inclusive upper bound on the transaction's calendar date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,

    /// Case-insensitive substring match on the merchant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant: Option<String>,

    /// Inclusive lower bound on the amount magnitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_min: Option<f64>,

    /// Inclusive upper bound on the amount magnitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_max: Option<f64>,

    /// Tag filter — a transaction matches if it carries at least one of these.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Free-text search across merchant, category, notes, and tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
}

impl Filters {
    /// True when no predicate is active, i.e. the filter is the identity.
    pub fn is_empty(&self) -> bool {
        fn blank(field: &Option<String>) -> bool {
            field.as_deref().map_or(true, |s| s.trim().is_empty())
        }
        blank(&self.category)
            && self.categories.is_empty()
            && self.date_from.is_none()
            && self.date_to.is_none()
            && blank(&self.merchant)
            && self.amount_min.is_none()
            && self.amount_max.is_none()
            && self.tags.is_empty()
            && blank(&self.search_query)
    }
}

/// A named, saved filter specification for reuse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPreset {
    pub id: Uuid,
    pub name: String,
    pub filters: Filters,
}

impl FilterPreset {
    pub fn new(name: impl Into<String>, filters: Filters) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            filters,
        }
    }
}
