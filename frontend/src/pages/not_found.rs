use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-surface space-y-4">
            <h1 class="text-4xl font-extrabold text-fg">"404"</h1>
            <p class="text-fg-muted">"The page you are looking for does not exist."</p>
            <a href="/" class="underline text-sm">"Go home"</a>
        </div>
    }
}
