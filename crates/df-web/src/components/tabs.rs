//! Tab strip

use df_core::widgets::{TabStrip, TabVariant};
use leptos::*;

#[component]
pub fn Tabs(
    labels: Vec<&'static str>,
    #[prop(optional)] initial: usize,
    #[prop(optional)] variant: TabVariant,
    #[prop(into)] on_change: Callback<usize>,
) -> impl IntoView {
    let strip = create_rw_signal(TabStrip::new(labels.len(), initial));

    let select = move |index: usize| {
        if let Some(index) = strip.try_update(|strip| strip.select(index)).flatten() {
            on_change.call(index);
        }
    };

    view! {
        <div class=format!("flex space-x-1 {}", variant.strip_class())>
            {labels
                .into_iter()
                .enumerate()
                .map(|(index, label)| view! {
                    <button
                        class=move || {
                            let active = strip.with(|strip| strip.active() == index);
                            format!("relative px-4 py-2 text-sm font-medium transition-colors duration-200 {}", variant.tab_class(active))
                        }
                        on:click=move |_| select(index)
                    >
                        {label}
                    </button>
                })
                .collect_view()}
        </div>
    }
}
