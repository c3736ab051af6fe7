//! Video player with suspicious-frame markers
//!
//! The `<video>` element is the source of truth for time and play state; it
//! reports through listeners and every control writes its result back to it.

use crate::events::{listen, scoped_guards};
use df_core::playback::{format_time, Playback, SKIP_SECONDS};
use df_core::SuspiciousFrame;
use leptos::*;
use wasm_bindgen::JsCast;

#[component]
pub fn VideoPlayer(
    video_url: &'static str,
    frames: Vec<SuspiciousFrame>,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let playback = create_rw_signal(Playback::new());
    let frames = store_value(frames);
    let video_ref = create_node_ref::<html::Video>();
    let guards = scoped_guards();

    video_ref.on_load(move |video| {
        let element: web_sys::HtmlVideoElement = (*video).clone();
        let target: &web_sys::EventTarget = element.unchecked_ref();

        let source = element.clone();
        listen(guards, target, "timeupdate", move |_: web_sys::Event| {
            playback.update(|p| p.set_time(source.current_time()));
        });
        let source = element.clone();
        listen(guards, target, "loadedmetadata", move |_: web_sys::Event| {
            playback.update(|p| p.set_duration(source.duration()));
        });
        listen(guards, target, "play", move |_: web_sys::Event| {
            playback.update(|p| p.set_playing(true));
        });
        listen(guards, target, "pause", move |_: web_sys::Event| {
            playback.update(|p| p.set_playing(false));
        });
    });

    let toggle_play = move |_: ev::MouseEvent| {
        let Some(video) = video_ref.get_untracked() else { return };
        let Some(play) = playback.try_update(|p| p.toggle_play()) else { return };
        if play {
            if let Err(err) = video.play() {
                tracing::warn!("Video refused to play: {:?}", err);
            }
        } else if let Err(err) = video.pause() {
            tracing::warn!("Video refused to pause: {:?}", err);
        }
    };

    let seek = move |ev: ev::MouseEvent| {
        let Some(video) = video_ref.get_untracked() else { return };
        let Some(bar) = ev
            .current_target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let rect = bar.get_bounding_client_rect();
        if rect.width() <= 0.0 {
            return;
        }
        let fraction = (ev.client_x() as f64 - rect.left()) / rect.width();
        if let Some(time) = playback.try_update(|p| p.seek_fraction(fraction)) {
            video.set_current_time(time);
        }
    };

    let skip = move |delta: f64| {
        let Some(video) = video_ref.get_untracked() else { return };
        if let Some(time) = playback.try_update(|p| p.skip(delta)) {
            video.set_current_time(time);
        }
    };

    // Marker click: land exactly on the flagged frame
    let jump_to = move |timestamp: f64| {
        let Some(video) = video_ref.get_untracked() else { return };
        if let Some(time) = playback.try_update(|p| p.seek_to(timestamp)) {
            video.set_current_time(time);
        }
    };

    let toggle_mute =move |_: ev::MouseEvent| {
        if let Some(muted) = playback.try_update(|p| p.toggle_mute()) {
            if let Some(video) = video_ref.get_untracked() {
                video.set_muted(muted);
            }
        }
    };

    let change_volume = move |ev: ev::Event| {
        let Ok(volume) = event_target_value(&ev).parse::<f64>() else { return };
        playback.update(|p| p.set_volume(volume));
        if let Some(video) = video_ref.get_untracked() {
            let (volume, muted) = playback.with_untracked(|p| (p.volume, p.muted));
            video.set_volume(volume);
            video.set_muted(muted);
        }
    };

    let flagged = move || {
        playback.with(|p| frames.with_value(|frames| p.frame_at(frames).map(|frame| frame.label())))
    };

    view! {
        <div class=format!("relative bg-black rounded-lg overflow-hidden {}", class)>
            <video
                node_ref=video_ref
                src=video_url
                class="w-full h-auto"
                on:mousemove=move |_| playback.update(|p| p.controls_visible = true)
                on:mouseleave=move |_| playback.update(|p| p.controls_visible = false)
            ></video>

            // Suspicious frame indicator
            {move || flagged().map(|label| view! {
                <div class="absolute top-4 right-4 bg-red-500 text-white px-3 py-1 rounded-full flex items-center space-x-2">
                    <span>"⚠️"</span>
                    <span class="text-sm font-medium">"Suspicious Frame (" {label} ")"</span>
                </div>
            })}

            // Controls
            <div class=move || {
                let visibility = if playback.with(|p| p.controls_visible) { "opacity-100" } else { "opacity-0" };
                format!("absolute bottom-0 left-0 right-0 bg-gradient-to-t from-black/80 to-transparent p-4 transition-opacity {}", visibility)
            }>
                <div class="mb-4">
                    <div class="relative h-1 bg-white/30 rounded-full cursor-pointer" on:click=seek>
                        <div
                            class="h-full bg-primary-500 rounded-full"
                            style=move || format!("width: {}%", playback.with(|p| p.progress_percent()))
                        ></div>
                        {move || frames.with_value(|frames| {
                            frames
                                .iter()
                                .map(|frame| {
                                    let timestamp = frame.timestamp;
                                    let left = playback.with(|p| p.marker_percent(timestamp));
                                    view! {
                                        <div
                                            class="absolute top-0 w-2 h-2 bg-red-500 rounded-full transform -translate-y-0.5 cursor-pointer hover:scale-150 transition-transform"
                                            style=format!("left: {}%", left)
                                            title=format!("Suspicious frame at {}", format_time(timestamp))
                                            on:click=move |ev: ev::MouseEvent| {
                                                ev.stop_propagation();
                                                jump_to(timestamp);
                                            }
                                        ></div>
                                    }
                                })
                                .collect_view()
                        })}
                    </div>
                </div>

                <div class="flex items-center justify-between">
                    <div class="flex items-center space-x-4">
                        <button class="text-white hover:text-primary-400 transition-colors" on:click=toggle_play>
                            {move || if playback.with(|p| p.playing) { "⏸" } else { "▶" }}
                        </button>
                        <button class="text-white hover:text-primary-400 transition-colors" on:click=move |_| skip(-SKIP_SECONDS)>
                            "⏪"
                        </button>
                        <button class="text-white hover:text-primary-400 transition-colors" on:click=move |_| skip(SKIP_SECONDS)>
                            "⏩"
                        </button>
                        <div class="flex items-center space-x-2">
                            <button class="text-white hover:text-primary-400 transition-colors" on:click=toggle_mute>
                                {move || if playback.with(|p| p.muted) { "🔇" } else { "🔊" }}
                            </button>
                            <input
                                type="range"
                                min="0"
                                max="1"
                                step="0.1"
                                prop:value=move || playback.with(|p| p.slider_volume())
                                on:input=change_volume
                                class="w-20 h-1 bg-white/30 rounded-lg appearance-none cursor-pointer"
                            />
                        </div>
                    </div>
                    <span class="text-white text-sm">{move || playback.with(|p| p.time_label())}</span>
                </div>
            </div>
        </div>
    }
}
