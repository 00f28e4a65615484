use super::view_model::LeaveBalanceViewModel;
use crate::{
    api::LeaveBalance,
    components::{error::MessageBanners, layout::Layout},
};
use leptos::*;

#[component]
pub fn LeaveBalancePage() -> impl IntoView {
    view! {
        <Layout>
            <LeaveBalancePanel />
        </Layout>
    }
}

#[component]
pub fn LeaveBalancePanel() -> impl IntoView {
    let vm = LeaveBalanceViewModel::new();
    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h2 class="text-2xl font-bold text-fg">"Leave Balance"</h2>
                <button
                    type="button"
                    class="px-3 py-2 text-sm rounded-md border border-border hover:bg-action-ghost-bg-hover"
                    on:click=move |_| vm.refresh()
                >
                    "Refresh"
                </button>
            </div>
            <MessageBanners message=vm.message />
            <BalanceCards balances=vm.balances.into() />
        </div>
    }
}

/// One card per leave type with total, used and remaining days.
#[component]
pub fn BalanceCards(balances: Signal<Vec<LeaveBalance>>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
            <For
                each=move || balances.get()
                key=|balance| *balance
                children=move |balance| {
                    view! {
                        <div class="bg-surface-elevated shadow rounded-lg p-5">
                            <h3 class="text-lg font-medium text-fg">{balance.leave_type.label()}</h3>
                            <dl class="mt-2 grid grid-cols-3 gap-2 text-sm">
                                <div>
                                    <dt class="text-fg-muted">"Total"</dt>
                                    <dd class="font-semibold">{balance.total}</dd>
                                </div>
                                <div>
                                    <dt class="text-fg-muted">"Used"</dt>
                                    <dd class="font-semibold">{balance.used}</dd>
                                </div>
                                <div>
                                    <dt class="text-fg-muted">"Remaining"</dt>
                                    <dd class="font-semibold">{balance.remaining}</dd>
                                </div>
                            </dl>
                        </div>
                    }
                }
            />
        </div>
    }
}
