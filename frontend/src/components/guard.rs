use crate::{
    api::Role,
    state::{
        access::{resolve_navigation, AccessState, NavigationOutcome},
        session::use_session,
    },
    utils::navigation::use_redirect,
};
use leptos::*;

/// Renders `children` only when the session satisfies `role` (any
/// authenticated user when `None`); otherwise redirects.
#[component]
pub fn RequireAuth(
    #[prop(optional_no_strip)] role: Option<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_session().signal();
    let outcome = create_memo(move |_| {
        session.with(|session| resolve_navigation(AccessState::from_session(session), role))
    });
    let redirect = use_redirect();
    create_effect(move |_| {
        if let NavigationOutcome::Redirect(target) = outcome.get() {
            log::debug!("guard redirecting to {}", target);
            redirect.call(target.to_string());
        }
    });
    view! {
        <Show when=move || should_render_children(outcome.get()) fallback=|| ()>
            {children()}
        </Show>
    }
}

fn should_render_children(outcome: NavigationOutcome) -> bool {
    outcome == NavigationOutcome::Render
}
