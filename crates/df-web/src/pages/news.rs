//! News and research feed

use crate::components::*;
use df_core::content::news::{
    articles, category_class, category_name, format_news_date, regular, tag_preview, CATEGORIES, TYPES,
};
use df_core::content::{NewsArticle, NewsQuery};
use df_core::widgets::{ButtonSize, ButtonVariant, CardPadding};
use leptos::*;

const ARTICLE_IMAGE: &str = "/api/placeholder/400/250";

fn type_icon(kind: &str) -> &'static str {
    match kind {
        "breaking" => "⚠️",
        "analysis" => "🧠",
        "case-study" => "👥",
        _ => "📖",
    }
}

fn chip_class(active: bool, accent: bool) -> &'static str {
    match (active, accent) {
        (true, false) => "flex items-center space-x-2 px-4 py-2 rounded-lg text-sm font-medium transition-colors bg-primary-100 dark:bg-primary-900 text-primary-700 dark:text-primary-300",
        (false, false) => "flex items-center space-x-2 px-4 py-2 rounded-lg text-sm font-medium transition-colors bg-secondary-100 dark:bg-secondary-800 text-secondary-600 dark:text-secondary-400 hover:bg-secondary-200 dark:hover:bg-secondary-700",
        (true, true) => "flex items-center space-x-2 px-3 py-1.5 rounded-lg text-sm transition-colors bg-accent-100 dark:bg-accent-900 text-accent-700 dark:text-accent-300",
        (false, true) => "flex items-center space-x-2 px-3 py-1.5 rounded-lg text-sm transition-colors bg-secondary-100 dark:bg-secondary-800 text-secondary-600 dark:text-secondary-400 hover:bg-secondary-200 dark:hover:bg-secondary-700",
    }
}

#[component]
pub fn NewsPage() -> impl IntoView {
    let feed = store_value(articles());
    let query = create_rw_signal(NewsQuery::default());

    let featured = move || {
        query.with(|q| feed.with_value(|feed| q.featured(feed).copied()))
    };
    let grid = move || {
        query.with(|q| {
            feed.with_value(|feed| regular(&q.apply(feed)).into_iter().copied().collect::<Vec<_>>())
        })
    };
    let no_results = move || query.with(|q| feed.with_value(|feed| q.apply(feed).is_empty()));

    view! {
        <div class="min-h-screen bg-secondary-50 dark:bg-secondary-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="text-center mb-12">
                    <h1 class="text-3xl sm:text-4xl font-bold text-secondary-900 dark:text-white mb-4">
                        "Latest Deepfake News & Research"
                    </h1>
                    <p class="text-xl text-secondary-600 dark:text-secondary-400 max-w-3xl mx-auto">
                        "Stay informed about the latest developments in deepfake detection, AI research, and media authenticity."
                    </p>
                </div>

                // Search and filters
                <Card class="mb-8">
                    <div class="flex flex-col lg:flex-row gap-4">
                        <div class="flex-1 relative">
                            <span class="absolute left-3 top-1/2 transform -translate-y-1/2 text-secondary-400">"🔍"</span>
                            <input
                                type="text"
                                placeholder="Search articles, tags, or topics..."
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
                                            class=move || chip_class(query.with(|q| q.category == id), false)
                                            on:click=move |_| query.update(|q| q.category = id.to_string())
                                        >
                                            <span>{category.name}</span>
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="flex flex-wrap gap-2 mt-4">
                        {TYPES
                            .iter()
                            .map(|kind| {
                                let id = kind.id;
                                view! {
                                    <button
                                        class=move || chip_class(query.with(|q| q.kind == id), true)
                                        on:click=move |_| query.update(|q| q.kind = id.to_string())
                                    >
                                        <span>{type_icon(id)}</span>
                                        <span>{kind.name}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </Card>

                // Featured
                {move || featured().map(featured_card)}

                // Articles
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    <For each=grid key=|article| article.id children=article_card/>
                </div>

                <Show when=no_results>
                    <div class="text-center py-12">
                        <div class="text-6xl mb-4">"🔍"</div>
                        <h3 class="text-xl font-semibold text-secondary-900 dark:text-white mb-2">"No articles found"</h3>
                        <p class="text-secondary-600 dark:text-secondary-400">
                            "Try adjusting your search terms or filters to find what you're looking for."
                        </p>
                    </div>
                </Show>

                // Newsletter
                <Card padding=CardPadding::Lg class="mt-16 text-center bg-gradient-to-br from-primary-50 to-accent-50 dark:from-primary-900/20 dark:to-accent-900/20">
                    <h3 class="text-2xl font-bold text-secondary-900 dark:text-white mb-4">"Stay Updated"</h3>
                    <p class="text-secondary-600 dark:text-secondary-400 mb-6 max-w-2xl mx-auto">
                        "Get the latest deepfake news, research updates, and detection tips delivered to your inbox."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 max-w-md mx-auto">
                        <input
                            type="email"
                            placeholder="Enter your email"
                            class="flex-1 px-4 py-3 border border-secondary-300 dark:border-secondary-600 rounded-lg bg-white dark:bg-secondary-700 text-secondary-900 dark:text-white focus:outline-none focus:ring-2 focus:ring-primary-500"
                        />
                        <Button>"Subscribe"</Button>
                    </div>
                </Card>
            </div>
        </div>
    }
}

fn featured_card(article: NewsArticle) -> impl IntoView {
    view! {
        <Card padding=CardPadding::None class="overflow-hidden mb-12">
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="relative">
                    <img src=ARTICLE_IMAGE alt=article.title class="w-full h-64 lg:h-full object-cover"/>
                    <div class="absolute top-4 left-4">
                        <span class="px-3 py-1 bg-red-500 text-white text-sm font-medium rounded-full">"Featured"</span>
                    </div>
                </div>
                <div class="p-6 flex flex-col justify-center">
                    <div class="flex items-center space-x-4 mb-4">
                        <span class=format!("px-3 py-1 text-sm font-medium rounded-full {}", category_class(article.category))>
                            {category_name(article.category)}
                        </span>
                        <span class="text-sm text-secondary-500 dark:text-secondary-400">
                            "📅 " {format_news_date(article.date)}
                        </span>
                        <span class="text-sm text-secondary-500 dark:text-secondary-400">{article.read_time}</span>
                    </div>
                    <h2 class="text-2xl font-bold text-secondary-900 dark:text-white mb-4">{article.title}</h2>
                    <p class="text-secondary-600 dark:text-secondary-400 mb-6">{article.excerpt}</p>
                    <div class="flex flex-wrap gap-2 mb-6">
                        {article
                            .tags
                            .iter()
                            .map(|tag| view! {
                                <span class="px-2 py-1 bg-primary-100 dark:bg-primary-900 text-primary-600 dark:text-primary-400 text-xs rounded-full">
                                    {*tag}
                                </span>
                            })
                            .collect_view()}
                    </div>
                    <div>
                        <Button>"Read Full Article ↗"</Button>
                    </div>
                </div>
            </div>
        </Card>
    }
}

fn article_card(article: NewsArticle) -> impl IntoView {
    let (shown, hidden) = tag_preview(article.tags);

    view! {
        <Card padding=CardPadding::None hover=true class="overflow-hidden h-full">
            <div class="relative">
                <img src=ARTICLE_IMAGE alt=article.title class="w-full h-48 object-cover"/>
                <div class="absolute top-3 left-3">
                    <span class=format!("px-2 py-1 text-xs font-medium rounded-full {}", category_class(article.category))>
                        {category_name(article.category)}
                    </span>
                </div>
            </div>
            <div class="p-6">
                <div class="flex items-center space-x-4 mb-3">
                    <span class="text-sm text-secondary-500 dark:text-secondary-400">
                        "📅 " {format_news_date(article.date)}
                    </span>
                    <span class="text-sm text-secondary-500 dark:text-secondary-400">{article.read_time}</span>
                </div>
                <h3 class="text-lg font-semibold text-secondary-900 dark:text-white mb-3 line-clamp-2">{article.title}</h3>
                <p class="text-secondary-600 dark:text-secondary-400 mb-4 line-clamp-3">{article.excerpt}</p>
                <div class="flex flex-wrap gap-1 mb-4">
                    {shown
                        .iter()
                        .map(|tag| view! {
                            <span class="px-2 py-1 bg-secondary-100 dark:bg-secondary-800 text-secondary-600 dark:text-secondary-400 text-xs rounded-full">
                                {*tag}
                            </span>
                        })
                        .collect_view()}
                    {(hidden > 0).then(|| view! {
                        <span class="px-2 py-1 bg-secondary-100 dark:bg-secondary-800 text-secondary-600 dark:text-secondary-400 text-xs rounded-full">
                            "+" {hidden}
                        </span>
                    })}
                </div>
                <Button variant=ButtonVariant::Outline size=ButtonSize::Sm>"Read More ↗"</Button>
            </div>
        </Card>
    }
}
