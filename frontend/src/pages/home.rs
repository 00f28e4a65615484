use crate::{
    components::layout::LoadingSpinner,
    state::{
        access::{landing_path, AccessState},
        session::use_session,
    },
    utils::navigation::use_redirect,
};
use leptos::*;

/// `/` has no content of its own; it forwards to the role home or login.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session().signal();
    let target = create_memo(move |_| {
        session.with(|session| landing_path(AccessState::from_session(session)))
    });
    let redirect = use_redirect();
    create_effect(move |_| redirect.call(target.get().to_string()));

    view! {
        <div class="min-h-screen bg-surface" data-redirect=move || target.get()>
            <LoadingSpinner />
        </div>
    }
}
