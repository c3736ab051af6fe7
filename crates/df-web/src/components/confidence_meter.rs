//! Confidence bar with a coloured tier

use df_core::widgets::{meter_fill_percent, ConfidenceTier, WidgetSize};
use leptos::*;

#[component]
pub fn ConfidenceMeter(
    #[prop(into)] confidence: MaybeSignal<u8>,
    #[prop(optional)] size: WidgetSize,
    #[prop(default = true)] show_label: bool,
    #[prop(default = "Confidence")] label: &'static str,
) -> impl IntoView {
    let tier = move || ConfidenceTier::from_score(confidence.get());

    view! {
        <div class="w-full">
            <Show when=move || show_label>
                <div class="flex justify-between items-center mb-2">
                    <span class="text-sm font-medium text-secondary-700 dark:text-secondary-300">{label}</span>
                    <span class=move || format!("text-sm font-bold {}", tier().text_class())>
                        {move || format!("{}%", confidence.get())}
                    </span>
                </div>
            </Show>
            <div class=format!("w-full bg-secondary-200 dark:bg-secondary-700 rounded-full overflow-hidden {}", size.meter_height())>
                <div
                    class=move || format!("{} bg-gradient-to-r {} rounded-full transition-all duration-1000", size.meter_height(), tier().fill_class())
                    style=move || format!("width: {}%", meter_fill_percent(confidence.get()))
                ></div>
            </div>
        </div>
    }
}
