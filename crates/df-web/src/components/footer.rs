//! Site footer

use chrono::{Datelike, Local};
use leptos::*;

const LINK_GROUPS: [(&str, &[(&str, &str)]); 4] = [
    (
        "Product",
        &[
            ("How it Works", "/about"),
            ("API Documentation", "/help"),
            ("Pricing", "/pricing"),
            ("Security", "/security"),
        ],
    ),
    (
        "Company",
        &[("About Us", "/about"), ("Careers", "/careers"), ("Contact", "/contact")],
    ),
    (
        "Resources",
        &[
            ("Help Center", "/help"),
            ("Blog", "/news"),
            ("Research Papers", "/research"),
            ("Community", "/community"),
        ],
    ),
    (
        "Legal",
        &[
            ("Privacy Policy", "/privacy"),
            ("Terms of Service", "/terms"),
            ("Cookie Policy", "/cookies"),
            ("GDPR", "/gdpr"),
        ],
    ),
];

const SOCIAL_LINKS: [(&str, &str, &str); 4] = [
    ("GitHub", "🐙", "https://github.com"),
    ("Twitter", "🐦", "https://twitter.com"),
    ("LinkedIn", "💼", "https://linkedin.com"),
    ("Email", "✉️", "mailto:contact@deepfakedetect.com"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let year = Local::now().year();

    view! {
        <footer class="bg-secondary-50 dark:bg-secondary-900 border-t border-secondary-200 dark:border-secondary-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-6 gap-8">
                    <div class="lg:col-span-2">
                        <a href="/" class="flex items-center space-x-2 mb-4">
                            <span class="text-2xl">"🛡️"</span>
                            <span class="text-xl font-bold text-secondary-900 dark:text-white">"DeepfakeDetect"</span>
                        </a>
                        <p class="text-secondary-600 dark:text-secondary-400 mb-6 max-w-md">
                            "AI-powered deepfake detection platform that helps combat misinformation and promotes media transparency through advanced neural networks."
                        </p>
                        <div class="flex space-x-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|&(name, icon, href)| view! {
                                    <a
                                        href=href
                                        aria-label=name
                                        class="p-2 rounded-lg bg-white dark:bg-secondary-800 hover:bg-primary-50 dark:hover:bg-primary-900 transition-colors duration-200"
                                    >
                                        {icon}
                                    </a>
                                })
                                .collect_view()}
                        </div>
                    </div>

                    {LINK_GROUPS
                        .iter()
                        .map(|&(group, links)| view! {
                            <div>
                                <h3 class="text-sm font-semibold text-secondary-900 dark:text-secondary-100 uppercase tracking-wider mb-4">
                                    {group}
                                </h3>
                                <ul class="space-y-3">
                                    {links
                                        .iter()
                                        .map(|&(name, href)| view! {
                                            <li>
                                                <a href=href class="text-secondary-600 dark:text-secondary-400 hover:text-primary-600 dark:hover:text-primary-400 transition-colors duration-200">
                                                    {name}
                                                </a>
                                            </li>
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        })
                        .collect_view()}
                </div>

                <div class="mt-12 pt-8 border-t border-secondary-200 dark:border-secondary-700">
                    <div class="flex flex-col md:flex-row justify-between items-center">
                        <p class="text-secondary-500 dark:text-secondary-400 text-sm">
                            "© " {year} " DeepfakeDetect. All rights reserved."
                        </p>
                        <div class="flex items-center space-x-6 mt-4 md:mt-0">
                            <span class="text-sm text-secondary-500 dark:text-secondary-400">
                                "Built with ❤️ for media authenticity"
                            </span>
                            <div class="flex items-center space-x-2">
                                <div class="w-2 h-2 bg-green-500 rounded-full animate-pulse"></div>
                                <span class="text-sm text-secondary-500 dark:text-secondary-400">"All systems operational"</span>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}
