//! Results page

use crate::components::*;
use crate::context::AppContext;
use chrono::{Local, Utc};
use df_core::results::{
    explainability, metadata_rows, overview_scores, timeline, MetadataRow, SectionTone, TimelineContent,
    VerdictTone,
};
use df_core::widgets::{ButtonVariant, TabVariant, WidgetSize};
use df_core::{AnalysisResult, ResultTab, ResultsView, Verdict};
use leptos::*;

const PREVIEW_IMAGE: &str = "/api/placeholder/600/400";
const PREVIEW_VIDEO: &str = "/api/placeholder/video";

fn tone_class(verdict: Verdict) -> &'static str {
    match verdict.tone() {
        VerdictTone::Positive => "text-green-600 dark:text-green-400",
        VerdictTone::Caution => "text-yellow-600 dark:text-yellow-400",
    }
}

fn verdict_icon(verdict: Verdict) -> &'static str {
    if verdict.is_fake() {
        "❌"
    } else {
        "✅"
    }
}

#[component]
pub fn ResultsPage(app: AppContext) -> impl IntoView {
    let state = create_rw_signal(ResultsView::new(
        app.results.take(),
        app.config.verdict_policy,
        Utc::now(),
    ));
    let summary = state.with_untracked(|s| s.summary_line(Local::now().time()));
    tracing::info!("Showing {} result(s)", state.with_untracked(|s| s.results().len()));

    let tab_labels = ResultTab::ALL.iter().map(|tab| tab.label()).collect::<Vec<_>>();
    let on_tab = move |index: usize| {
        if let Some(tab) = ResultTab::from_index(index) {
            state.update(|s| s.set_tab(tab));
        }
    };

    view! {
        <div class="min-h-screen bg-secondary-50 dark:bg-secondary-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                // Header
                <div class="mb-8">
                    <div class="flex flex-col lg:flex-row lg:items-center lg:justify-between">
                        <div>
                            <h1 class="text-3xl font-bold text-secondary-900 dark:text-white mb-2">"Analysis Results"</h1>
                            <p class="text-secondary-600 dark:text-secondary-400">{summary}</p>
                        </div>
                        <div class="flex flex-wrap gap-3 mt-4 lg:mt-0">
                            <Button variant=ButtonVariant::Outline>"⬇️ Download Report"</Button>
                            <Button variant=ButtonVariant::Outline>"🔗 Share Results"</Button>
                            <Button variant=ButtonVariant::Outline>"🚩 Report Issue"</Button>
                        </div>
                    </div>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-4 gap-8">
                    // Results list
                    <div class="lg:col-span-1">
                        <Card>
                            <h3 class="text-lg font-semibold text-secondary-900 dark:text-white mb-4">"Analyzed Files"</h3>
                            <div class="space-y-3">
                                {move || state.with(|s| {
                                    s.results()
                                        .iter()
                                        .enumerate()
                                        .map(|(index, result)| {
                                            let verdict = s.policy().verdict(result);
                                            let entry = s.policy().entry_label(result);
                                            let class = if s.selected() == index {
                                                "w-full text-left p-3 rounded-lg transition-all duration-200 bg-primary-100 dark:bg-primary-900 border border-primary-300 dark:border-primary-700"
                                            } else {
                                                "w-full text-left p-3 rounded-lg transition-all duration-200 bg-secondary-50 dark:bg-secondary-800 hover:bg-secondary-100 dark:hover:bg-secondary-700"
                                            };
                                            view! {
                                                <button class=class on:click=move |_| state.update(|s| s.select(index))>
                                                    <div class="flex items-center space-x-3">
                                                        <div class="flex-shrink-0 text-2xl">{verdict_icon(verdict)}</div>
                                                        <div class="flex-1 min-w-0">
                                                            <p class="text-sm font-medium text-secondary-900 dark:text-white truncate">
                                                                {result.file_name.clone()}
                                                            </p>
                                                            <p class=format!("text-xs {}", tone_class(verdict))>{entry}</p>
                                                        </div>
                                                    </div>
                                                </button>
                                            }
                                        })
                                        .collect_view()
                                })}
                            </div>
                        </Card>
                    </div>

                    // Tabs
                    <div class="lg:col-span-3">
                        <Tabs labels=tab_labels variant=TabVariant::Pills on_change=on_tab/>
                        <div class="mt-6">
                            {move || {
                                let (result, verdict, tab) = state.with(|s| (s.current().into_owned(), s.verdict(), s.active_tab()));
                                match tab {
                                    ResultTab::Overview => overview_tab(&result, verdict),
                                    ResultTab::Heatmap => heatmap_tab(&result),
                                    ResultTab::Timeline => timeline_tab(&result),
                                    ResultTab::Metadata => metadata_tab(&result),
                                    ResultTab::Explainability => explainability_tab(&result),
                                }
                            }}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn overview_tab(result: &AnalysisResult, verdict: Verdict) -> View {
    let confidence = result.confidence;
    let scores = overview_scores(result);
    let findings = result.explanations.clone();

    view! {
        <div class="space-y-6">
            <Card>
                <div class="text-center">
                    <div class="flex justify-center mb-4 text-4xl">{verdict_icon(verdict)}</div>
                    <h2 class=format!("text-2xl font-bold mb-2 {}", tone_class(verdict))>{verdict.to_string()}</h2>
                    <p class="text-secondary-600 dark:text-secondary-400 mb-6">
                        "Based on comprehensive AI analysis of facial features, lighting, and temporal consistency."
                    </p>
                    <ConfidenceMeter confidence=confidence size=WidgetSize::Lg label="Overall Confidence"/>
                </div>
            </Card>

            <Card>
                <h3 class="text-lg font-semibold text-secondary-900 dark:text-white mb-4">"Analysis Breakdown"</h3>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    {scores
                        .into_iter()
                        .map(|row| view! { <ConfidenceMeter confidence=row.score label=row.label/> })
                        .collect_view()}
                </div>
            </Card>

            <Card>
                <h3 class="text-lg font-semibold text-secondary-900 dark:text-white mb-4">"Key Findings"</h3>
                <div class="space-y-3">
                    {findings
                        .into_iter()
                        .map(|finding| view! {
                            <div class="flex items-start space-x-3 p-3 bg-secondary-50 dark:bg-secondary-800 rounded-lg">
                                <span class="text-yellow-500 flex-shrink-0">"⚠️"</span>
                                <p class="text-sm text-secondary-700 dark:text-secondary-300">{finding}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </Card>
        </div>
    }
    .into_view()
}

fn heatmap_tab(result: &AnalysisResult) -> View {
    let areas = result.suspicious_areas.clone();
    view! {
        <Card>
            <h3 class="text-lg font-semibold text-secondary-900 dark:text-white mb-4">"Suspicious Areas Detection"</h3>
            <p class="text-secondary-600 dark:text-secondary-400 mb-6">
                "Red areas indicate regions where the AI detected potential manipulation. "
                "Adjust the opacity slider to see the original image underneath."
            </p>
            <HeatmapOverlay
                areas=areas
                image_url=PREVIEW_IMAGE
                class="max-w-2xl mx-auto"
            />
        </Card>
    }
    .into_view()
}

fn timeline_tab(result: &AnalysisResult) -> View {
    let body = match timeline(result) {
        TimelineContent::Markers(frames) => view! {
            <VideoPlayer video_url=PREVIEW_VIDEO frames=frames.to_vec() class="max-w-4xl mx-auto"/>
        }
        .into_view(),
        TimelineContent::Unavailable(message) => view! {
            <div class="text-center py-12 text-secondary-500 dark:text-secondary-400">{message}</div>
        }
        .into_view(),
    };

    view! {
        <Card>
            <h3 class="text-lg font-semibold text-secondary-900 dark:text-white mb-4">"Video Timeline Analysis"</h3>
            <p class="text-secondary-600 dark:text-secondary-400 mb-6">
                "Suspicious frames are marked on the timeline. Click on markers to jump to specific timestamps."
            </p>
            {body}
        </Card>
    }
    .into_view()
}

fn metadata_list(title: &'static str, rows: Vec<MetadataRow>) -> impl IntoView {
    view! {
        <div>
            <h4 class="text-sm font-medium text-secondary-700 dark:text-secondary-300 mb-3">{title}</h4>
            <div class="space-y-2">
                {rows
                    .into_iter()
                    .map(|row| {
                        let value_class = if row.monospace {
                            "text-sm font-mono text-secondary-900 dark:text-white"
                        } else {
                            "text-sm font-medium text-secondary-900 dark:text-white"
                        };
                        view! {
                            <div class="flex justify-between">
                                <span class="text-sm text-secondary-600 dark:text-secondary-400">{row.label} ":"</span>
                                <span class=value_class>{row.value}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

fn metadata_tab(result: &AnalysisResult) -> View {
    let sections = metadata_rows(result, &Local);

    view! {
        <Card>
            <h3 class="text-lg font-semibold text-secondary-900 dark:text-white mb-4">"File Metadata Analysis"</h3>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {metadata_list("File Information", sections.file_info)}
                {metadata_list("Technical Details", sections.technical)}
            </div>
        </Card>
    }
    .into_view()
}

fn explainability_tab(result: &AnalysisResult) -> View {
    let sections = explainability(result);
    view! {
        <Card>
            <h3 class="text-lg font-semibold text-secondary-900 dark:text-white mb-4">"AI Decision Explanation"</h3>
            <p class="text-secondary-600 dark:text-secondary-400 mb-6">
                "Understanding how our AI model reached this conclusion helps build trust and transparency."
            </p>
            <div class="space-y-4">
                {sections
                    .into_iter()
                    .map(|section| {
                        let (panel, heading, body) = match section.tone {
                            SectionTone::Info => (
                                "bg-blue-50 dark:bg-blue-900/20 border-blue-200 dark:border-blue-800",
                                "text-blue-800 dark:text-blue-200",
                                "text-blue-700 dark:text-blue-300",
                            ),
                            SectionTone::Success => (
                                "bg-green-50 dark:bg-green-900/20 border-green-200 dark:border-green-800",
                                "text-green-800 dark:text-green-200",
                                "text-green-700 dark:text-green-300",
                            ),
                            SectionTone::Insight => (
                                "bg-purple-50 dark:bg-purple-900/20 border-purple-200 dark:border-purple-800",
                                "text-purple-800 dark:text-purple-200",
                                "text-purple-700 dark:text-purple-300",
                            ),
                        };
                        view! {
                            <div class=format!("p-4 border rounded-lg {}", panel)>
                                <h4 class=format!("font-medium mb-2 {}", heading)>{section.title}</h4>
                                <p class=format!("text-sm {}", body)>{section.body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Card>
    }
    .into_view()
}
