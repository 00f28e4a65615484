use crate::api::ApiError;
use leptos::*;

/// Outcome of the last user action on a view. Replaced, never stacked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<ApiError>,
}

impl MessageState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, err: ApiError) {
        self.error = Some(err);
        self.success = None;
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }
}

/// Stores a finished load. A failure leaves the previous list in place and
/// raises the banner instead.
pub fn apply_load_result<T: Clone + 'static>(
    result: Option<Result<T, ApiError>>,
    target: RwSignal<T>,
    message: RwSignal<MessageState>,
) {
    match result {
        Some(Ok(value)) => target.set(value),
        Some(Err(err)) => {
            log::warn!("load failed: {}", err);
            message.update(|msg| msg.set_error(err));
        }
        None => {}
    }
}
