//! Top navigation bar

use super::DarkModeToggle;
use crate::context::AppContext;
use leptos::*;
use leptos_router::use_location;

const NAV_ITEMS: [(&str, &str); 4] = [("Home", "/"), ("About", "/about"), ("Help", "/help"), ("News", "/news")];

#[component]
pub fn Navbar(app: AppContext) -> impl IntoView {
    let (mobile_open, set_mobile_open) = create_signal(false);
    let pathname = use_location().pathname;
    let is_active = move |path: &str| pathname.with(|current| current == path);

    view! {
        <nav class="sticky top-0 z-50 bg-white/80 dark:bg-secondary-900/80 backdrop-blur-md border-b border-secondary-200 dark:border-secondary-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    // Logo
                    <a href="/" class="flex items-center space-x-2">
                        <span class="text-2xl">"🛡️"</span>
                        <span class="text-xl font-bold bg-gradient-to-r from-primary-600 to-accent-600 bg-clip-text text-transparent">
                            "DeepfakeDetect"
                        </span>
                    </a>

                    // Desktop Nav
                    <div class="hidden md:flex items-center space-x-8">
                        {NAV_ITEMS
                            .iter()
                            .map(|&(name, path)| {
                                view! {
                                    <a
                                        href=path
                                        class=move || {
                                            if is_active(path) {
                                                "relative px-3 py-2 text-sm font-medium border-b-2 border-primary-600 text-primary-600 dark:text-primary-400"
                                            } else {
                                                "relative px-3 py-2 text-sm font-medium text-secondary-600 dark:text-secondary-400 hover:text-primary-600 dark:hover:text-primary-400 transition-colors"
                                            }
                                        }
                                    >
                                        {name}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="flex items-center space-x-4">
                        <a href="/upload" class="hidden sm:flex items-center space-x-2 px-4 py-2 rounded-lg text-white font-medium bg-gradient-to-r from-primary-600 to-accent-600 hover:from-primary-700 hover:to-accent-700 transition">
                            <span>"🔍"</span>
                            <span>"Analyze Now"</span>
                        </a>
                        <DarkModeToggle app=app/>

                        // Mobile menu button
                        <button
                            class="md:hidden p-2 rounded-lg hover:bg-secondary-100 dark:hover:bg-secondary-800 transition-colors"
                            on:click=move |_| set_mobile_open.update(|v| *v = !*v)
                        >
                            <Show
                                when=move || mobile_open.get()
                                fallback=|| view! {
                                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                    </svg>
                                }
                            >
                                <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                                </svg>
                            </Show>
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu
            <Show when=move || mobile_open.get()>
                <div class="md:hidden border-t border-secondary-200 dark:border-secondary-700">
                    <div class="px-2 pt-2 pb-3 space-y-1">
                        {NAV_ITEMS
                            .iter()
                            .map(|&(name, path)| {
                                view! {
                                    <a
                                        href=path
                                        on:click=move |_| set_mobile_open.set(false)
                                        class=move || {
                                            if is_active(path) {
                                                "block px-3 py-2 text-base font-medium rounded-lg bg-primary-100 dark:bg-primary-900 text-primary-700 dark:text-primary-300"
                                            } else {
                                                "block px-3 py-2 text-base font-medium rounded-lg text-secondary-600 dark:text-secondary-400 hover:bg-secondary-100 dark:hover:bg-secondary-800"
                                            }
                                        }
                                    >
                                        {name}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a
                            href="/upload"
                            on:click=move |_| set_mobile_open.set(false)
                            class="flex items-center justify-center space-x-2 w-full mt-4 px-4 py-2 rounded-lg text-white font-medium bg-gradient-to-r from-primary-600 to-accent-600"
                        >
                            <span>"🔍"</span>
                            <span>"Analyze Now"</span>
                        </a>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
