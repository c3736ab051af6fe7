//! Landing page

use crate::components::*;
use df_core::content::landing::{StatRotator, FEATURES, ROTATE_INTERVAL_MS, STATS};
use df_core::widgets::{ButtonSize, ButtonVariant, CardPadding};
use leptos::*;
use std::time::Duration;

const STAT_ICONS: [&str; 4] = ["👥", "🏆", "🔒", "📈"];
const FEATURE_ICONS: [&str; 4] = ["🧠", "⚡", "🛡️", "👁️"];

#[component]
pub fn LandingPage() -> impl IntoView {
    let rotator = create_rw_signal(StatRotator::new(STATS.len()));

    match set_interval_with_handle(
        move || {
            rotator.update(|rotator| {
                rotator.advance();
            })
        },
        Duration::from_millis(ROTATE_INTERVAL_MS),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => tracing::error!("Could not start stat rotation: {:?}", err),
    }

    view! {
        <div class="min-h-screen">
            // Hero
            <section class="relative overflow-hidden bg-gradient-to-br from-primary-50 via-white to-accent-50 dark:from-secondary-900 dark:via-secondary-800 dark:to-secondary-900">
                <div class="relative max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20 lg:py-32">
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                        <div>
                            <h1 class="text-4xl sm:text-5xl lg:text-6xl font-bold text-secondary-900 dark:text-white mb-6">
                                "Detect Deepfakes "
                                <span class="bg-gradient-to-r from-primary-600 to-accent-600 bg-clip-text text-transparent">"Instantly"</span>
                                " with AI Precision"
                            </h1>
                            <p class="text-xl text-secondary-600 dark:text-secondary-400 mb-8 leading-relaxed">
                                "Upload an image or video and get instant results powered by advanced neural networks. "
                                "Combat misinformation and promote media transparency."
                            </p>
                            <div class="flex flex-col sm:flex-row gap-4">
                                <a href="/upload">
                                    <Button size=ButtonSize::Lg>"🔍 Analyze Now"</Button>
                                </a>
                            </div>
                        </div>

                        <div class="relative">
                            <Card padding=CardPadding::Lg class="bg-white/80 dark:bg-secondary-800/80 backdrop-blur-sm">
                                <div class="text-center">
                                    <div class="w-20 h-20 mx-auto mb-4 bg-gradient-to-br from-primary-500 to-accent-500 rounded-full flex items-center justify-center text-4xl">
                                        "🖥️"
                                    </div>
                                    <h3 class="text-2xl font-bold text-secondary-900 dark:text-white mb-2">"AI Analysis in Progress"</h3>
                                    <p class="text-secondary-600 dark:text-secondary-400 mb-6">
                                        "Analyzing facial features, lighting, and temporal consistency..."
                                    </p>
                                    <div class="w-full bg-secondary-200 dark:bg-secondary-700 rounded-full h-2 mb-4 overflow-hidden">
                                        <div class="h-full w-3/4 bg-gradient-to-r from-primary-500 to-accent-500 rounded-full animate-pulse"></div>
                                    </div>
                                    <p class="text-sm text-secondary-500 dark:text-secondary-400">"Estimated time: 3-5 seconds"</p>
                                </div>
                            </Card>
                        </div>
                    </div>
                </div>
            </section>

            // Stats
            <section class="py-16 bg-white dark:bg-secondary-800">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="grid grid-cols-2 lg:grid-cols-4 gap-8">
                        {STATS
                            .iter()
                            .zip(STAT_ICONS)
                            .enumerate()
                            .map(|(index, (stat, icon))| view! {
                                <div class="text-center">
                                    <div class=move || {
                                        if rotator.with(|r| r.is_active(index)) {
                                            "w-16 h-16 mx-auto mb-4 rounded-full flex items-center justify-center text-3xl transition-all duration-500 bg-primary-100 dark:bg-primary-900 scale-110"
                                        } else {
                                            "w-16 h-16 mx-auto mb-4 rounded-full flex items-center justify-center text-3xl transition-all duration-500 bg-secondary-100 dark:bg-secondary-700"
                                        }
                                    }>
                                        {icon}
                                    </div>
                                    <div class="text-3xl font-bold text-secondary-900 dark:text-white mb-2">{stat.value}</div>
                                    <div class="text-secondary-600 dark:text-secondary-400">{stat.label}</div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // Features
            <section class="py-20 bg-secondary-50 dark:bg-secondary-900">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="text-center mb-16">
                        <h2 class="text-3xl sm:text-4xl font-bold text-secondary-900 dark:text-white mb-4">"Why Choose Our Platform?"</h2>
                        <p class="text-xl text-secondary-600 dark:text-secondary-400 max-w-3xl mx-auto">
                            "Built with cutting-edge technology and designed for maximum accuracy, security, and user experience."
                        </p>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                        {FEATURES
                            .iter()
                            .zip(FEATURE_ICONS)
                            .map(|(feature, icon)| view! {
                                <Card hover=true class="text-center h-full">
                                    <div class="w-12 h-12 mx-auto mb-4 bg-primary-100 dark:bg-primary-900 rounded-lg flex items-center justify-center text-2xl">
                                        {icon}
                                    </div>
                                    <h3 class="text-xl font-semibold text-secondary-900 dark:text-white mb-3">{feature.title}</h3>
                                    <p class="text-secondary-600 dark:text-secondary-400">{feature.description}</p>
                                </Card>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // Call to action
            <section class="py-20 bg-gradient-to-r from-primary-600 to-accent-600">
                <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <h2 class="text-3xl sm:text-4xl font-bold text-white mb-6">"Ready to Detect Deepfakes?"</h2>
                    <p class="text-xl text-blue-100 mb-8 max-w-2xl mx-auto">
                        "Join thousands of users who trust our platform for accurate, fast, and secure deepfake detection."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <a href="/upload">
                            <Button size=ButtonSize::Lg variant=ButtonVariant::Secondary>"🔍 Start Analysis"</Button>
                        </a>
                        <a href="/about">
                            <Button size=ButtonSize::Lg variant=ButtonVariant::Outline>"Learn More →"</Button>
                        </a>
                    </div>
                </div>
            </section>
        </div>
    }
}
