//! Suspicious-area overlay on a preview image

use df_core::heatmap::HeatmapOpacity;
use df_core::SuspiciousArea;
use leptos::*;

#[component]
pub fn HeatmapOverlay(
    areas: Vec<SuspiciousArea>,
    image_url: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let (opacity, set_opacity) = create_signal(HeatmapOpacity::default());

    view! {
        <div class=format!("relative {}", class)>
            <div class="relative overflow-hidden rounded-lg">
                <img src=image_url alt="Analysis preview" class="w-full h-auto"/>
                <div class="absolute inset-0" style=move || format!("opacity: {}", opacity.get().value())>
                    {areas
                        .into_iter()
                        .map(|area| view! {
                            <div class="absolute border-2 border-red-500 bg-red-500/20 rounded" style=area.style()>
                                <div class="absolute -top-6 left-0 bg-red-500 text-white text-xs px-2 py-1 rounded">
                                    {area.label()}
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="mt-4">
                <label class="block text-sm font-medium text-secondary-700 dark:text-secondary-300 mb-2">
                    {move || opacity.get().label()}
                </label>
                <input
                    type="range"
                    min="0"
                    max="1"
                    step=HeatmapOpacity::STEP
                    prop:value=move || opacity.get().value()
                    on:input=move |ev| {
                        if let Some(value) = HeatmapOpacity::from_input(&event_target_value(&ev)) {
                            set_opacity.set(value);
                        }
                    }
                    class="w-full h-2 bg-secondary-200 dark:bg-secondary-700 rounded-lg appearance-none cursor-pointer"
                />
            </div>
        </div>
    }
}
