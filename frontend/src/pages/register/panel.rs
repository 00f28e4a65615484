use super::view_model::RegisterViewModel;
use crate::{api::Role, components::error::MessageBanners};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn RegisterPanel() -> impl IntoView {
    let vm = RegisterViewModel::new();
    let pending = vm.register_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };
    let input_class = "mt-1 block w-full px-3 py-2 border border-border rounded-md";

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"Create Account"</h2>
                <form class="mt-8 space-y-4" on:submit=on_submit>
                    <label class="block text-sm font-medium text-fg">
                        "Full Name"
                        <input
                            type="text"
                            required
                            class=input_class
                            placeholder="Enter your full name"
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
                            placeholder="Enter your email"
                            prop:value=move || vm.form.email.get()
                            on:input=move |ev| vm.form.email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="block text-sm font-medium text-fg">
                        "Password"
                        <input
                            type="password"
                            required
                            class=input_class
                            placeholder="Choose a password"
                            prop:value=move || vm.form.password.get()
                            on:input=move |ev| vm.form.password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="block text-sm font-medium text-fg">
                        "Role"
                        <select
                            class=input_class
                            prop:value=move || vm.form.role.get().as_str()
                            on:change=move |ev| {
                                if let Some(role) = Role::parse(&event_target_value(&ev)) {
                                    vm.form.role.set(role);
                                }
                            }
                        >
                            <option value="employee">"Employee"</option>
                            <option value="manager">"Manager"</option>
                        </select>
                    </label>

                    <MessageBanners message=vm.message />

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-white bg-action-primary-bg disabled:opacity-50"
                    >
                        {move || if pending.get() { "Registering..." } else { "Register" }}
                    </button>
                    <p class="text-center text-sm text-fg-muted">
                        "Already have an account? " <a href="/login" class="underline">"Sign In"</a>
                    </p>
                </form>
            </div>
        </div>
    }
}
