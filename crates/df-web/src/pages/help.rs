//! Help center: searchable FAQ

use crate::components::*;
use df_core::content::faq::{CATEGORIES, FAQS};
use df_core::content::{FaqExpansion, FaqQuery};
use df_core::widgets::{ButtonSize, ButtonVariant, CardPadding};
use leptos::*;

// (step, icon, title, description)
const STEPS: [(u8, &str, &str, &str); 3] = [
    (
        1,
        "📄",
        "Upload Your Media",
        "Drag and drop your image or video file, or click to browse. You can also paste a URL.",
    ),
    (
        2,
        "🧠",
        "AI Analysis",
        "Our advanced neural networks analyze facial features, lighting patterns, and temporal consistency.",
    ),
    (
        3,
        "👁️",
        "Review Results",
        "Get detailed results with confidence scores, heatmaps, and explanations of the AI's decision.",
    ),
];

const SUPPORT_CHANNELS: [(&str, &str, &str, &str); 3] = [
    ("🔍", "Search FAQs", "Find quick answers to common questions", "Browse FAQs"),
    ("💬", "Live Chat", "Get instant help from our support team", "Start Chat"),
    ("✉️", "Email Support", "Send us a detailed message", "Contact Us"),
];

const FIELD_CLASS: &str = "w-full px-4 py-3 border border-secondary-300 dark:border-secondary-600 rounded-lg bg-white dark:bg-secondary-700 text-secondary-900 dark:text-white focus:outline-none focus:ring-2 focus:ring-primary-500";

#[component]
pub fn HelpPage() -> impl IntoView {
    let query = create_rw_signal(FaqQuery::default());
    let expansion = create_rw_signal(FaqExpansion::default());

    let filtered = move || query.with(|query| query.apply(&FAQS).into_iter().copied().collect::<Vec<_>>());

    view! {
        <div class="min-h-screen bg-secondary-50 dark:bg-secondary-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="text-center mb-12">
                    <h1 class="text-4xl font-bold text-secondary-900 dark:text-white mb-4">"How Can We Help?"</h1>
                    <p class="text-xl text-secondary-600 dark:text-secondary-400 max-w-2xl mx-auto">
                        "Find answers to common questions, learn how our platform works, or get in touch with our support team."
                    </p>
                </div>

                // Support channels
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-12">
                    {SUPPORT_CHANNELS
                        .iter()
                        .map(|&(icon, title, description, action)| view! {
                            <Card hover=true class="text-center">
                                <div class="w-12 h-12 mx-auto mb-4 bg-primary-100 dark:bg-primary-900 rounded-lg flex items-center justify-center text-2xl">
                                    {icon}
                                </div>
                                <h3 class="text-lg font-semibold text-secondary-900 dark:text-white mb-2">{title}</h3>
                                <p class="text-secondary-600 dark:text-secondary-400 mb-4">{description}</p>
                                <Button variant=ButtonVariant::Outline size=ButtonSize::Sm>{action}</Button>
                            </Card>
                        })
                        .collect_view()}
                </div>

                // How it works
                <Card padding=CardPadding::Lg class="mb-12">
                    <h2 class="text-2xl font-bold text-secondary-900 dark:text-white mb-8 text-center">"How It Works"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                        {STEPS
                            .iter()
                            .map(|&(step, icon, title, description)| view! {
                                <div class="text-center">
                                    <div class="w-16 h-16 mx-auto mb-4 bg-gradient-to-br from-primary-500 to-accent-500 rounded-full flex items-center justify-center text-2xl">
                                        {icon}
                                    </div>
                                    <div class="w-8 h-8 mx-auto mb-4 bg-primary-100 dark:bg-primary-900 rounded-full flex items-center justify-center">
                                        <span class="text-sm font-bold text-primary-600 dark:text-primary-400">{step}</span>
                                    </div>
                                    <h3 class="text-lg font-semibold text-secondary-900 dark:text-white mb-3">{title}</h3>
                                    <p class="text-secondary-600 dark:text-secondary-400">{description}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </Card>

                // Search and filters
                <Card class="mb-8">
                    <div class="flex flex-col lg:flex-row gap-4">
                        <div class="flex-1 relative">
                            <span class="absolute left-3 top-1/2 transform -translate-y-1/2 text-secondary-400">"🔍"</span>
                            <input
                                type="text"
                                placeholder="Search help articles and FAQs..."
                                class="w-full pl-10 pr-4 py-3 border border-secondary-300 dark:border-secondary-600 rounded-lg bg-white dark:bg-secondary-700 text-secondary-900 dark:text-white focus:outline-none focus:ring-2 focus:ring-primary-500"
                                prop:value=move || query.with(|q| q.term.clone())
                                on:input=move |ev| query.update(|q| q.term = event_target_value(&ev))
                            />
                        </div>
                        <div class="flex flex-wrap gap-2">
                            {CATEGORIES
                                .iter()
                                .map(|category| {
                                    let id = category.id;
                                    view! {
                                        <button
                                            class=move || {
                                                if query.with(|q| q.category == id) {
                                                    "px-4 py-2 rounded-lg text-sm font-medium transition-colors bg-primary-100 dark:bg-primary-900 text-primary-700 dark:text-primary-300"
                                                } else {
                                                    "px-4 py-2 rounded-lg text-sm font-medium transition-colors bg-secondary-100 dark:bg-secondary-800 text-secondary-600 dark:text-secondary-400 hover:bg-secondary-200 dark:hover:bg-secondary-700"
                                                }
                                            }
                                            on:click=move |_| query.update(|q| q.category = id.to_string())
                                        >
                                            {category.name}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Card>

                // FAQs
                <div class="mb-12">
                    <h2 class="text-2xl font-bold text-secondary-900 dark:text-white mb-6">"Frequently Asked Questions"</h2>
                    <div class="space-y-4">
                        <For
                            each=filtered
                            key=|faq| faq.id
                            children=move |faq| {
                                let id = faq.id;
                                let open = move || expansion.with(|e| e.is_expanded(id));
                                view! {
                                    <Card padding=CardPadding::None>
                                        <button class="w-full text-left p-6" on:click=move |_| expansion.update(|e| e.toggle(id))>
                                            <div class="flex items-center justify-between">
                                                <h3 class="text-lg font-semibold text-secondary-900 dark:text-white pr-4">{faq.question}</h3>
                                                <span class="text-secondary-500 flex-shrink-0">{move || if open() { "▲" } else { "▼" }}</span>
                                            </div>
                                        </button>
                                        <Show when=open>
                                            <div class="px-6 pb-6">
                                                <div class="border-t border-secondary-200 dark:border-secondary-700 pt-4">
                                                    <p class="text-secondary-600 dark:text-secondary-400 mb-4">{faq.answer}</p>
                                                    <div class="flex flex-wrap gap-2">
                                                        {faq.tags
                                                            .iter()
                                                            .map(|tag| view! {
                                                                <span class="px-2 py-1 bg-primary-100 dark:bg-primary-900 text-primary-600 dark:text-primary-400 text-xs rounded-full">
                                                                    {*tag}
                                                                </span>
                                                            })
                                                            .collect_view()}
                                                    </div>
                                                </div>
                                            </div>
                                        </Show>
                                    </Card>
                                }
                            }
                        />
                        <Show when=move || query.with(|q| q.apply(&FAQS).is_empty())>
                            <p class="text-center py-8 text-secondary-500 dark:text-secondary-400">
                                "No questions match your search."
                            </p>
                        </Show>
                    </div>
                </div>

                // Contact form
                <Card padding=CardPadding::Lg>
                    <h2 class="text-2xl font-bold text-secondary-900 dark:text-white mb-6 text-center">"Still Need Help?"</h2>
                    <p class="text-secondary-600 dark:text-secondary-400 mb-8 text-center">
                        "Can't find what you're looking for? Send us a message and we'll get back to you within 24 hours."
                    </p>
                    <form class="max-w-2xl mx-auto space-y-6" on:submit=|ev| ev.prevent_default()>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            <div>
                                <label class="block text-sm font-medium text-secondary-700 dark:text-secondary-300 mb-2">"Name"</label>
                                <input type="text" class=FIELD_CLASS placeholder="Your name"/>
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-secondary-700 dark:text-secondary-300 mb-2">"Email"</label>
                                <input type="email" class=FIELD_CLASS placeholder="your@email.com"/>
                            </div>
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-secondary-700 dark:text-secondary-300 mb-2">"Subject"</label>
                            <input type="text" class=FIELD_CLASS placeholder="What can we help you with?"/>
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-secondary-700 dark:text-secondary-300 mb-2">"Message"</label>
                            <textarea rows="6" class=FIELD_CLASS placeholder="Please describe your issue or question in detail..."></textarea>
                        </div>
                        <div class="text-center">
                            <Button size=ButtonSize::Lg>"✉️ Send Message"</Button>
                        </div>
                    </form>
                </Card>
            </div>
        </div>
    }
}
