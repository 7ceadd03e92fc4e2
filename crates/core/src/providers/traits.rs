use async_trait::async_trait;

use crate::errors::CoreError;

/// What a confirmation provider is asked to approve. Enough context for a
/// PIN prompt or an out-of-band authorizer to describe the operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationRequest {
    /// Human-readable description, e.g. "Transfer to Savings".
    pub description: String,
    /// The amount being moved.
    pub amount: f64,
}

impl ConfirmationRequest {
    pub fn new(description: impl Into<String>, amount: f64) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }
}

/// Trait abstraction for the external confirmation step that gates
/// money-moving operations (a PIN prompt, a hardware token, a plain
/// yes/no dialog).
///
/// The store applies the mutation optimistically, awaits `confirm`, and
/// rolls the state back if it returns an error. Implementations own their
/// timeout/cancellation policy; the store's rollback contract holds for any
/// failure they report.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ConfirmationProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Approve or reject the requested operation.
    async fn confirm(&self, request: &ConfirmationRequest) -> Result<(), CoreError>;
}
