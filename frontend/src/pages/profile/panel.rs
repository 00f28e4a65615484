use super::view_model::ProfileViewModel;
use crate::components::{error::MessageBanners, layout::Layout};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <Layout>
            <ProfilePanel />
        </Layout>
    }
}

#[component]
pub fn ProfilePanel() -> impl IntoView {
    let vm = ProfileViewModel::new();
    let pending = vm.save_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };
    let role = move || {
        vm.profile
            .get()
            .map(|user| user.role.as_str())
            .unwrap_or_default()
    };
    let input_class = "mt-1 block w-full px-3 py-2 border border-border rounded-md";

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 max-w-xl space-y-4">
            <h2 class="text-2xl font-bold text-fg">"Profile"</h2>
            <p class="text-sm text-fg-muted">"Role: " {role}</p>
            <form class="space-y-4" on:submit=on_submit>
                <label class="block text-sm font-medium text-fg">
                    "Full Name"
                    <input
                        type="text"
                        required
                        class=input_class
                        prop:value=move || vm.form.name.get()
                        on:input=move |ev| vm.form.name.set(event_target_value(&ev))
                    />
                </label>
                <label class="block text-sm font-medium text-fg">
                    "Email"
                    <input
                        type="email"
                        required
                        class=input_class
                        prop:value=move || vm.form.email.get()
                        on:input=move |ev| vm.form.email.set(event_target_value(&ev))
                    />
                </label>

                <MessageBanners message=vm.message />

                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="py-2 px-4 rounded-md text-sm font-medium text-white bg-action-primary-bg disabled:opacity-50"
                >
                    {move || if pending.get() { "Saving..." } else { "Save Changes" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{manager_user, provide_session_with};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn profile_form_shows_role_and_save() {
        let html = render_to_string(move || {
            provide_session_with(Some(manager_user()));
            view! { <ProfilePanel /> }
        });
        assert!(html.contains("Role: "));
        assert!(html.contains("manager"));
        assert!(html.contains("Save Changes"));
    }
}
