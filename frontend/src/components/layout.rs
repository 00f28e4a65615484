use crate::{
    state::{
        access::{select_by_capability, NAV_LINKS},
        session::use_session,
        theme::{use_theme, Theme},
    },
    utils::navigation::use_redirect,
};
use leptos::*;

pub const APP_NAME: &str = "Leave Portal";

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let theme = use_theme();
    let redirect = use_redirect();
    let (menu_open, set_menu_open) = create_signal(false);

    let user = {
        let session = session.clone();
        create_memo(move |_| session.current_user())
    };
    let links = move || select_by_capability(user.get().map(|u| u.role), NAV_LINKS);
    let theme_label = move || match theme.current().get() {
        Theme::Light => "Dark mode",
        Theme::Dark => "Light mode",
    };

    let on_logout = move |_| {
        set_menu_open.set(false);
        session.logout();
        redirect.call(crate::state::access::LOGIN_PATH.to_string());
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <h1 class="text-xl font-semibold text-fg">{APP_NAME}</h1>
                    </div>
                    <div class="flex items-center gap-2">
                        <nav class="hidden lg:flex space-x-4">
                            <For
                                each=links
                                key=|link| link.href
                                children=move |link| {
                                    view! {
                                        <a
                                            href=link.href
                                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                        >
                                            {link.label}
                                        </a>
                                    }
                                }
                            />
                        </nav>
                        <Show when=move || user.get().is_some()>
                            <span class="text-sm text-fg-muted px-2">
                                {move || user.get().map(|u| u.name).unwrap_or_default()}
                            </span>
                        </Show>
                        <button
                            type="button"
                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                            on:click=move |_| theme.toggle()
                        >
                            {theme_label}
                        </button>
                        <Show when=move || user.get().is_some()>
                            <button
                                on:click=on_logout.clone()
                                class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                            >
                                "Logout"
                            </button>
                        </Show>
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            "☰"
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-border">
                        <nav class="px-4 py-3 space-y-2">
                            <For
                                each=links
                                key=|link| link.href
                                children=move |link| {
                                    view! {
                                        <a
                                            href=link.href
                                            class="block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                            on:click=move |_| set_menu_open.set(false)
                                        >
                                            {link.label}
                                        </a>
                                    }
                                }
                            />
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{employee_user, manager_user, provide_session_with};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_shows_employee_links_only() {
        let html = render_to_string(move || {
            provide_session_with(Some(employee_user()));
            view! { <Header /> }
        });
        assert!(html.contains("Apply for Leave"));
        assert!(html.contains("Leave Balance"));
        assert!(html.contains("Abdur"));
        assert!(!html.contains("Manager Dashboard"));
    }

    #[test]
    fn header_shows_manager_links_only() {
        let html = render_to_string(move || {
            provide_session_with(Some(manager_user()));
            view! { <Header /> }
        });
        assert!(html.contains("Manager Dashboard"));
        assert!(html.contains("Profile"));
        assert!(!html.contains("Apply for Leave"));
    }

    #[test]
    fn anonymous_header_has_no_logout() {
        let html = render_to_string(move || {
            provide_session_with(None);
            view! { <Header /> }
        });
        assert!(html.contains(APP_NAME));
        assert!(!html.contains("Logout"));
    }

    #[test]
    fn layout_renders_children() {
        let html = render_to_string(move || {
            provide_session_with(Some(employee_user()));
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <SuccessMessage message="ok".into() />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("ok"));
    }
}
