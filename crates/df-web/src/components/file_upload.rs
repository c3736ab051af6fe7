//! Media input: drop zone, file picker, URL entry and the selection list
//!
//! Admission rules live in [`Selection::admit`]; this component only reads
//! the admitted files into memory and hands them to `on_select`.

use super::{Button, ProgressBar};
use crate::events::{listen, scoped_guards};
use df_core::media::{FileKind, FileMeta};
use df_core::widgets::{ButtonSize, ButtonVariant, ProgressColor, WidgetSize};
use df_core::{AcceptTypes, SelectedFile, Selection};
use leptos::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

fn file_meta(file: &web_sys::File) -> FileMeta {
    FileMeta {
        name: file.name(),
        size: file.size() as u64,
        mime: file.type_(),
    }
}

async fn read_file(file: web_sys::File) -> Result<SelectedFile, JsValue> {
    let meta = file_meta(&file);
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let data = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(SelectedFile::from_bytes(meta, data))
}

fn kind_icon(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Link => "🔗",
        FileKind::Image => "🖼️",
        FileKind::Video => "🎬",
        FileKind::Other => "📄",
    }
}

#[component]
pub fn FileUpload(
    accept: AcceptTypes,
    #[prop(into)] selection: Signal<Selection>,
    #[prop(into)] uploading: Signal<bool>,
    #[prop(into)] progress: Signal<f64>,
    #[prop(into)] on_select: Callback<Vec<SelectedFile>>,
    #[prop(into)] on_remove: Callback<usize>,
    #[prop(into)] on_add_url: Callback<String>,
) -> impl IntoView {
    let accept_attr = accept.input_attr();
    let accept = store_value(accept);
    let (drag_active, set_drag_active) = create_signal(false);
    let (show_url, set_show_url) = create_signal(false);
    let (url_text, set_url_text) = create_signal(String::new());

    let disabled = Signal::derive(move || selection.with(|s| s.input_disabled(uploading.get())));

    // Read every admitted file, then report them together
    let offer = move |list: Option<web_sys::FileList>| {
        let Some(list) = list else { return };
        let files: Vec<web_sys::File> = (0..list.length()).filter_map(|i| list.get(i)).collect();
        let metas: Vec<FileMeta> = files.iter().map(file_meta).collect();
        let admission = accept.with_value(|accept| selection.with_untracked(|s| s.admit(accept, &metas)));
        let chosen: Vec<web_sys::File> = admission
            .accepted
            .iter()
            .filter_map(|&index| files.get(index).cloned())
            .collect();
        if chosen.is_empty() {
            return;
        }

        spawn_local(async move {
            let mut read = Vec::with_capacity(chosen.len());
            for file in chosen {
                let name = file.name();
                match read_file(file).await {
                    Ok(file) => read.push(file),
                    Err(err) => tracing::error!("Could not read {}: {:?}", name, err),
                }
            }
            if !read.is_empty() {
                on_select.call(read);
            }
        });
    };

    let drop_zone = create_node_ref::<html::Div>();
    let file_input = create_node_ref::<html::Input>();
    let guards = scoped_guards();

    drop_zone.on_load(move |zone| {
        let target: &web_sys::EventTarget = zone.unchecked_ref();
        listen(guards, target, "dragover", move |ev: web_sys::DragEvent| {
            ev.prevent_default();
            if !disabled.get_untracked() {
                set_drag_active.set(true);
            }
        });
        listen(guards, target, "dragleave", move |_: web_sys::DragEvent| {
            set_drag_active.set(false);
        });
        listen(guards, target, "drop", move |ev: web_sys::DragEvent| {
            ev.prevent_default();
            set_drag_active.set(false);
            if disabled.get_untracked() {
                return;
            }
            offer(ev.data_transfer().and_then(|transfer| transfer.files()));
        });
    });

    let submit_url = move || {
        let url = url_text.get_untracked();
        if url.trim().is_empty() {
            return;
        }
        on_add_url.call(url.trim().to_string());
        set_url_text.set(String::new());
        set_show_url.set(false);
    };

    view! {
        <div class="w-full">
            <input
                node_ref=file_input
                type="file"
                multiple=true
                class="hidden"
                accept=accept_attr
                disabled=move || disabled.get()
                on:change=move |ev| {
                    let input = event_target::<web_sys::HtmlInputElement>(&ev);
                    offer(input.files());
                    input.set_value("");
                }
            />

            // Upload zone
            <div
                node_ref=drop_zone
                class=move || {
                    let border = if drag_active.get() {
                        "border-primary-500 bg-primary-50 dark:bg-primary-900/20"
                    } else {
                        "border-secondary-300 dark:border-secondary-600 hover:border-primary-400 dark:hover:border-primary-500"
                    };
                    let state = if disabled.get() { "opacity-50 cursor-not-allowed" } else { "" };
                    format!("relative border-2 border-dashed rounded-xl p-8 text-center transition-all duration-300 cursor-pointer {} {}", border, state)
                }
                on:click=move |_| {
                    if disabled.get_untracked() {
                        return;
                    }
                    if let Some(input) = file_input.get_untracked() {
                        input.click();
                    }
                }
            >
                <div class="space-y-4">
                    <div class="text-5xl">"📤"</div>
                    <div>
                        <h3 class="text-lg font-semibold text-secondary-900 dark:text-white mb-2">
                            {move || if drag_active.get() { "Drop files here" } else { "Upload Media Files" }}
                        </h3>
                        <p class="text-secondary-600 dark:text-secondary-400 mb-4">
                            "Drag and drop your files here, or click to browse"
                        </p>
                        <p class="text-sm text-secondary-500 dark:text-secondary-400">
                            "Supports: JPG, PNG, GIF, MP4, MOV, AVI (Max 100MB)"
                        </p>
                    </div>
                    <div class="flex flex-wrap justify-center gap-3" on:click=|ev| ev.stop_propagation()>
                        <Button
                            variant=ButtonVariant::Outline
                            size=ButtonSize::Sm
                            disabled=uploading
                            on_click=move |_: ev::MouseEvent| set_show_url.update(|open| *open = !*open)
                        >
                            "🔗 From URL"
                        </Button>
                    </div>
                </div>
            </div>

            // URL entry
            <Show when=move || show_url.get()>
                <div class="mt-4 p-4 bg-secondary-50 dark:bg-secondary-800 rounded-lg">
                    <div class="flex gap-2">
                        <input
                            type="url"
                            placeholder="Paste image or video URL here..."
                            class="flex-1 px-3 py-2 border border-secondary-300 dark:border-secondary-600 rounded-lg bg-white dark:bg-secondary-700 text-secondary-900 dark:text-white focus:outline-none focus:ring-2 focus:ring-primary-500"
                            prop:value=move || url_text.get()
                            on:input=move |ev| set_url_text.set(event_target_value(&ev))
                            on:keydown=move |ev: ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    submit_url();
                                }
                            }
                        />
                        <Button
                            size=ButtonSize::Sm
                            disabled=Signal::derive(move || url_text.with(|url| url.trim().is_empty()) || disabled.get())
                            on_click=move |_: ev::MouseEvent| submit_url()
                        >
                            "Add"
                        </Button>
                    </div>
                </div>
            </Show>

            // Upload progress
            <Show when=move || uploading.get()>
                <div class="mt-6">
                    <ProgressBar
                        progress=progress
                        label="Uploading files..."
                        color=ProgressColor::Primary
                        size=WidgetSize::Lg
                        show_label=true
                    />
                </div>
            </Show>

            // Selected files
            <Show when=move || selection.with(|s| !s.is_empty())>
                <div class="mt-6 space-y-3">
                    <h4 class="text-sm font-medium text-secondary-700 dark:text-secondary-300">
                        {move || selection.with(|s| s.heading())}
                    </h4>
                    {move || selection.with(|s| {
                        s.files()
                            .iter()
                            .enumerate()
                            .map(|(index, file)| {
                                let icon = kind_icon(file.kind());
                                let name = file.name.clone();
                                let size = file.size_label();
                                view! {
                                    <div class="flex items-center justify-between p-3 bg-secondary-50 dark:bg-secondary-800 rounded-lg">
                                        <div class="flex items-center space-x-3">
                                            <div class="text-2xl">{icon}</div>
                                            <div>
                                                <p class="text-sm font-medium text-secondary-900 dark:text-white">{name}</p>
                                                <p class="text-xs text-secondary-500 dark:text-secondary-400">{size}</p>
                                            </div>
                                        </div>
                                        <div class="flex items-center space-x-2">
                                            <span class="text-green-500">"✓"</span>
                                            <Button
                                                variant=ButtonVariant::Ghost
                                                size=ButtonSize::Sm
                                                disabled=uploading
                                                on_click=move |_: ev::MouseEvent| on_remove.call(index)
                                            >
                                                "✕"
                                            </Button>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    })}
                </div>
            </Show>

            // Privacy notice
            <div class="mt-6 p-4 bg-blue-50 dark:bg-blue-900/20 border border-blue-200 dark:border-blue-800 rounded-lg">
                <div class="flex items-start space-x-3">
                    <span class="text-blue-600 dark:text-blue-400">"ℹ️"</span>
                    <div>
                        <h4 class="text-sm font-medium text-blue-800 dark:text-blue-200 mb-1">"Privacy & Security"</h4>
                        <p class="text-sm text-blue-700 dark:text-blue-300">
                            "Your files are processed securely and automatically deleted after analysis. We never store or share your content."
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
