use crate::models::filter::Filters;
use crate::models::transaction::Transaction;

/// Applies a declarative filter specification to a transaction list.
///
/// Pure and order-preserving: the input order (newest-first, as produced by
/// the balance engine) carries through untouched.
pub struct FilterService;

impl FilterService {
    pub fn new() -> Self {
        Self
    }

    /// All active predicates AND-combined. An empty spec is the identity.
    pub fn apply<'a>(
        &self,
        transactions: &'a [Transaction],
        filters: &Filters,
    ) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|t| Self::matches(t, filters))
            .collect()
    }

    fn matches(t: &Transaction, filters: &Filters) -> bool {
        if let Some(query) = active(&filters.search_query) {
            if !Self::matches_search(t, query) {
                return false;
            }
        }

        // The multi-category set takes precedence over the legacy single
        // category (the UI clears one when the other is selected).
        if !filters.categories.is_empty() {
            if !filters.categories.iter().any(|c| c == &t.category) {
                return false;
            }
        } else if let Some(category) = active(&filters.category) {
            if t.category != category {
                return false;
            }
        }

        if let Some(merchant) = active(&filters.merchant) {
            if !t
                .merchant
                .to_lowercase()
                .contains(&merchant.to_lowercase())
            {
                return false;
            }
        }

        if let Some(from) = filters.date_from {
            if t.date < from {
                return false;
            }
        }
        if let Some(to) = filters.date_to {
            if t.date > to {
                return false;
            }
        }

        if let Some(min) = filters.amount_min {
            if t.amount < min {
                return false;
            }
        }
        if let Some(max) = filters.amount_max {
            if t.amount > max {
                return false;
            }
        }

        if !filters.tags.is_empty() {
            let any_tag = t
                .tags
                .iter()
                .any(|tag| filters.tags.iter().any(|f| f == tag));
            if !any_tag {
                return false;
            }
        }

        true
    }

    /// Case-insensitive substring match against merchant, category, notes,
    /// or any tag.
    fn matches_search(t: &Transaction, query: &str) -> bool {
        let needle = query.to_lowercase();
        t.merchant.to_lowercase().contains(&needle)
            || t.category.to_lowercase().contains(&needle)
            || t.notes
                .as_deref()
                .is_some_and(|n| n.to_lowercase().contains(&needle))
            || t.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
    }
}

/// Treats `None` and blank strings as an inactive predicate.
fn active(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl Default for FilterService {
    fn default() -> Self {
        Self::new()
    }
}
