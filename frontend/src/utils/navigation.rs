use leptos::*;
use leptos_router::{use_navigate, NavigateOptions, RouterContext};

/// Full page load to `path`; used outside a router.
pub fn hard_redirect(path: &str) {
    match super::window() {
        Some(window) => {
            if let Err(err) = window.location().set_href(path) {
                log::warn!("redirect to {} failed: {:?}", path, err);
            }
        }
        None => log::debug!("no window; skipping redirect to {}", path),
    }
}

/// Navigation callback for the current component. Uses client-side routing
/// when mounted under a `Router`, a full page load otherwise.
pub fn use_redirect() -> Callback<String> {
    let navigate = use_context::<RouterContext>().map(|_| use_navigate());
    Callback::new(move |path: String| match &navigate {
        Some(navigate) => navigate(
            &path,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        ),
        None => hard_redirect(&path),
    })
}
