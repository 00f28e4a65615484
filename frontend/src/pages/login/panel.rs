use super::view_model::LoginViewModel;
use crate::components::error::ErrorBanner;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = LoginViewModel::new();
    let pending = vm.login_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"Welcome Back"</h2>
                <form class="mt-8 space-y-6" on:submit=on_submit>
                    <div class="space-y-4">
                        <label class="block text-sm font-medium text-fg">
                            "Email"
                            <input
                                type="email"
                                name="email"
                                required
                                class="mt-1 block w-full px-3 py-2 border border-border rounded-md"
                                placeholder="Enter your email"
                                prop:value=move || vm.form.email.get()
                                on:input=move |ev| vm.form.email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="block text-sm font-medium text-fg">
                            "Password"
                            <input
                                type="password"
                                name="password"
                                required
                                class="mt-1 block w-full px-3 py-2 border border-border rounded-md"
                                placeholder="Enter your password"
                                prop:value=move || vm.form.password.get()
                                on:input=move |ev| vm.form.password.set(event_target_value(&ev))
                            />
                        </label>
                    </div>

                    <ErrorBanner error=vm.error.into() />

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-white bg-action-primary-bg disabled:opacity-50"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                    <p class="text-center text-sm text-fg-muted">
                        "Or " <a href="/register" class="underline">"create a new account"</a>
                    </p>
                </form>
            </div>
        </div>
    }
}
