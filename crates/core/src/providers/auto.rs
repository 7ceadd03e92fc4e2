use async_trait::async_trait;

use crate::errors::CoreError;

use super::traits::{ConfirmationProvider, ConfirmationRequest};

/// Confirmation provider that approves every request. The default for
/// embedders that do their own gating (or none at all).
#[derive(Debug, Default)]
pub struct AutoConfirm;

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ConfirmationProvider for AutoConfirm {
    fn name(&self) -> &str {
        "AutoConfirm"
    }

    async fn confirm(&self, _request: &ConfirmationRequest) -> Result<(), CoreError> {
        Ok(())
    }
}
