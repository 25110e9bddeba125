use leptos::prelude::*;
use leptos_router::components::A;
use swapwallet_core::types::Tab;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="tabs">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <A exact=true href=tab.path() attr:class="tab">
                            {tab.label()}
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}
