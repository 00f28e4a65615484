use crate::{
    api::{ApiError, ApiErrorKind},
    components::layout::SuccessMessage,
    state::message::MessageState,
};
use leptos::*;

/// Persistent banner for the last failed action. Stays until the owner
/// clears the signal.
#[component]
pub fn ErrorBanner(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div
                role="alert"
                class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2"
            >
                <div class="font-bold">{move || error.get().map(|e| e.message).unwrap_or_default()}</div>
                {move || error.get().and_then(|e| hint_for(e.kind)).map(|hint| {
                    view! { <div class="text-xs opacity-75">{hint}</div> }
                })}
            </div>
        </Show>
    }
}

/// Error banner plus success note for one `MessageState`.
#[component]
pub fn MessageBanners(message: RwSignal<MessageState>) -> impl IntoView {
    let error = Signal::derive(move || message.with(|m| m.error.clone()));
    view! {
        <ErrorBanner error=error />
        {move || message.with(|m| m.success.clone()).map(|text| view! { <SuccessMessage message=text /> })}
    }
}

fn hint_for(kind: ApiErrorKind) -> Option<&'static str> {
    match kind {
        ApiErrorKind::Network => Some("Check your connection and try again."),
        ApiErrorKind::Auth => Some("Please sign in again."),
        ApiErrorKind::Storage => Some("Your browser blocked local storage."),
        ApiErrorKind::Validation | ApiErrorKind::NotFound | ApiErrorKind::Server => None,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn banner_renders_message_and_hint() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::network("Failed to fetch leave balance")));
            view! { <ErrorBanner error={signal.into()} /> }
        });
        assert!(html.contains("Failed to fetch leave balance"));
        assert!(html.contains("Check your connection"));
    }

    #[test]
    fn message_banners_show_success() {
        let html = render_to_string(move || {
            let message = create_rw_signal(MessageState::default());
            message.update(|m| m.set_success("Leave application submitted"));
            view! { <MessageBanners message=message /> }
        });
        assert!(html.contains("Leave application submitted"));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn banner_hidden_without_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <ErrorBanner error={signal.into()} /> }
        });
        assert!(!html.contains("role=\"alert\""));
    }
}
