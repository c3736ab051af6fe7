//! Horizontal progress bar

use df_core::widgets::{progress_label, progress_width, ProgressColor, WidgetSize};
use leptos::*;

#[component]
pub fn ProgressBar(
    #[prop(into)] progress: Signal<f64>,
    #[prop(optional)] size: WidgetSize,
    #[prop(optional)] color: ProgressColor,
    #[prop(optional)] show_label: bool,
    #[prop(default = "Progress")] label: &'static str,
) -> impl IntoView {
    view! {
        <div class="w-full">
            <Show when=move || show_label>
                <div class="flex justify-between items-center mb-2">
                    <span class="text-sm font-medium text-secondary-700 dark:text-secondary-300">{label}</span>
                    <span class="text-sm text-secondary-500 dark:text-secondary-400">
                        {move || progress_label(progress.get())}
                    </span>
                </div>
            </Show>
            <div class=format!("w-full bg-secondary-200 dark:bg-secondary-700 rounded-full overflow-hidden {}", size.bar_height())>
                <div
                    class=format!("{} bg-gradient-to-r {} rounded-full transition-all duration-500", size.bar_height(), color.fill_class())
                    style=move || format!("width: {}%", progress_width(progress.get()))
                ></div>
            </div>
        </div>
    }
}
