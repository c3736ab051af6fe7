//! Upload page

use crate::components::*;
use crate::context::AppContext;
use chrono::Utc;
use df_core::content::landing::UPLOAD_FEATURES;
use df_core::upload::ServiceStatus;
use df_core::widgets::{ButtonSize, ButtonVariant, ProgressColor, WidgetSize};
use df_core::{HttpPredictionClient, PredictionService, SelectedFile, UploadSession};
use leptos::*;
use leptos_router::use_navigate;
use std::rc::Rc;

const FEATURE_ICONS: [&str; 4] = ["🛡️", "⚡", "🔒", "👁️"];

#[component]
pub fn UploadPage(app: AppContext) -> impl IntoView {
    let session = create_rw_signal(UploadSession::from_config(&app.config));
    let client = store_value(Rc::new(HttpPredictionClient::from_config(&app.config)));
    let navigate = use_navigate();

    spawn_local(async move {
        let service = client.get_value();
        let health = service.health().await;
        let status = ServiceStatus::from_health(&health);
        tracing::info!("Detection service: {}", status.label());
        session.try_update(|s| s.service_status = status);
    });

    let selection = Signal::derive(move || session.with(|s| s.selection.clone()));
    let analyzing = Signal::derive(move || session.with(|s| s.is_analyzing()));
    let busy = Signal::derive(move || session.with(|s| s.is_busy()));
    let progress = Signal::derive(move || session.with(|s| s.upload_progress));

    let on_select = move |files: Vec<SelectedFile>| {
        let added = session.try_update(|s| s.add_files(files)).unwrap_or(0);
        tracing::info!("Added {} file(s) to the selection", added);
    };
    let on_remove = move |index: usize| {
        session.update(|s| {
            s.remove_file(index);
        });
    };
    let on_add_url = move |url: String| {
        if let Some(Err(err)) = session.try_update(|s| s.selection.add_url(&url)) {
            tracing::warn!("URL not added: {}", err);
        }
    };

    let results = app.results.clone();
    let submit = move |_: ev::MouseEvent| {
        let Some(file) = session.try_update(|s| s.begin()).flatten() else { return };
        tracing::info!("Submitting {} for analysis", file.name);

        let service = client.get_value();
        let results = results.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match service.predict(&file).await {
                Ok(response) => {
                    let payload = session.try_update(|s| {
                        s.record_response();
                        s.complete(file, &response, Utc::now())
                    });
                    if let Some(payload) = payload {
                        results.put(payload);
                        navigate("/results", Default::default());
                    }
                }
                Err(err) => {
                    let Some(message) = session.try_update(|s| s.fail(&err)) else { return };
                    if let Err(err) = window().alert_with_message(&message) {
                        tracing::error!("Could not show alert: {:?}", err);
                    }
                }
            }
        });
    };

    view! {
        <div class="min-h-screen bg-secondary-50 dark:bg-secondary-900">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="text-center mb-12">
                    <h1 class="text-3xl sm:text-4xl font-bold text-secondary-900 dark:text-white mb-4">
                        "Analyze Media for Deepfakes"
                    </h1>
                    <p class="text-xl text-secondary-600 dark:text-secondary-400 max-w-2xl mx-auto">
                        "Upload images or videos to detect AI-generated content with our advanced detection algorithms."
                    </p>
                    <p class=move || {
                        let tone = if session.with(|s| s.service_status.is_ready()) {
                            "text-green-600 dark:text-green-400"
                        } else {
                            "text-secondary-500 dark:text-secondary-400"
                        };
                        format!("mt-4 text-sm {}", tone)
                    }>
                        {move || session.with(|s| s.service_status.label())}
                    </p>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                    <div class="lg:col-span-2">
                        <Card class="mb-6">
                            <h2 class="text-xl font-semibold text-secondary-900 dark:text-white mb-6">"Upload Your Media"</h2>
                            <FileUpload
                                accept=app.config.accept.clone()
                                selection=selection
                                uploading=busy
                                progress=progress
                                on_select=on_select
                                on_remove=on_remove
                                on_add_url=on_add_url
                            />

                            <Show when=move || analyzing.get()>
                                <div class="mt-6">
                                    <div class="text-center mb-4">
                                        <div class="w-16 h-16 mx-auto mb-3 bg-gradient-to-br from-primary-500 to-accent-500 rounded-full flex items-center justify-center text-3xl animate-pulse">
                                            "🛡️"
                                        </div>
                                        <h3 class="text-lg font-semibold text-secondary-900 dark:text-white mb-2">"AI Analysis in Progress"</h3>
                                        <p class="text-secondary-600 dark:text-secondary-400">
                                            "Analyzing facial features, lighting, and temporal consistency..."
                                        </p>
                                    </div>
                                    <ProgressBar
                                        progress=progress
                                        label="Processing files..."
                                        color=ProgressColor::Primary
                                        size=WidgetSize::Lg
                                        show_label=true
                                    />
                                </div>
                            </Show>

                            <div class="flex flex-col sm:flex-row gap-4 mt-8">
                                <div class="flex-1">
                                    <Button
                                        size=ButtonSize::Lg
                                        disabled=Signal::derive(move || !session.with(|s| s.can_submit()))
                                        loading=busy
                                        on_click=submit
                                    >
                                        "🛡️ " {move || session.with(|s| s.button_label())}
                                    </Button>
                                </div>
                                <Show when=move || selection.with(|s| !s.is_empty())>
                                    <Button
                                        variant=ButtonVariant::Outline
                                        size=ButtonSize::Lg
                                        disabled=busy
                                        on_click=move |_: ev::MouseEvent| session.update(|s| s.clear())
                                    >
                                        "🗑️ Clear All"
                                    </Button>
                                </Show>
                            </div>
                        </Card>

                        <Card>
                            <h3 class="text-lg font-semibold text-secondary-900 dark:text-white mb-4 flex items-center">
                                <span class="mr-2">"⚙️"</span>
                                "Analysis Settings"
                            </h3>
                            <div class="flex items-center justify-between">
                                <div>
                                    <h4 class="text-sm font-medium text-secondary-900 dark:text-white">
                                        "Auto-delete files after processing"
                                    </h4>
                                    <p class="text-sm text-secondary-600 dark:text-secondary-400">
                                        "Files will be automatically removed from our servers after analysis"
                                    </p>
                                </div>
                                <button
                                    class=move || {
                                        let track = if session.with(|s| s.auto_delete) {
                                            "bg-primary-600"
                                        } else {
                                            "bg-secondary-300 dark:bg-secondary-600"
                                        };
                                        format!("relative inline-flex h-6 w-11 items-center rounded-full transition-colors {}", track)
                                    }
                                    on:click=move |_| session.update(|s| s.toggle_auto_delete())
                                >
                                    <span class=move || {
                                        let offset = if session.with(|s| s.auto_delete) { "translate-x-6" } else { "translate-x-1" };
                                        format!("inline-block h-4 w-4 transform rounded-full bg-white transition-transform {}", offset)
                                    }></span>
                                </button>
                            </div>
                        </Card>
                    </div>

                    // Sidebar
                    <div class="space-y-6">
                        <Card>
                            <h3 class="text-lg font-semibold text-secondary-900 dark:text-white mb-4">"Why Choose Our Platform?"</h3>
                            <div class="space-y-4">
                                {UPLOAD_FEATURES
                                    .iter()
                                    .zip(FEATURE_ICONS)
                                    .map(|(feature, icon)| view! {
                                        <div class="flex items-start space-x-3">
                                            <div class="w-8 h-8 bg-primary-100 dark:bg-primary-900 rounded-lg flex items-center justify-center flex-shrink-0">
                                                {icon}
                                            </div>
                                            <div>
                                                <h4 class="text-sm font-medium text-secondary-900 dark:text-white">{feature.title}</h4>
                                                <p class="text-xs text-secondary-600 dark:text-secondary-400">{feature.description}</p>
                                            </div>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        </Card>

                        <Card>
                            <h3 class="text-lg font-semibold text-secondary-900 dark:text-white mb-4">"Platform Statistics"</h3>
                            <div class="space-y-3">
                                <div class="flex justify-between items-center">
                                    <span class="text-sm text-secondary-600 dark:text-secondary-400">"Files Analyzed Today"</span>
                                    <span class="text-sm font-semibold text-secondary-900 dark:text-white">"1,247"</span>
                                </div>
                                <div class="flex justify-between items-center">
                                    <span class="text-sm text-secondary-600 dark:text-secondary-400">"Average Accuracy"</span>
                                    <span class="text-sm font-semibold text-green-600 dark:text-green-400">"95.2%"</span>
                                </div>
                                <div class="flex justify-between items-center">
                                    <span class="text-sm text-secondary-600 dark:text-secondary-400">"Processing Time"</span>
                                    <span class="text-sm font-semibold text-secondary-900 dark:text-white">"3.2s avg"</span>
                                </div>
                            </div>
                        </Card>

                        <Card>
                            <h3 class="text-lg font-semibold text-secondary-900 dark:text-white mb-4">"Need Help?"</h3>
                            <p class="text-sm text-secondary-600 dark:text-secondary-400 mb-4">
                                "Check out our help center for detailed guides and FAQs."
                            </p>
                            <a href="/help" class="block">
                                <Button variant=ButtonVariant::Outline size=ButtonSize::Sm>"Visit Help Center →"</Button>
                            </a>
                        </Card>
                    </div>
                </div>
            </div>
        </div>
    }
}
