//! Styled button

use df_core::widgets::{button_class, ButtonSize, ButtonVariant};
use leptos::*;

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(into, optional)] disabled: MaybeSignal<bool>,
    #[prop(optional)] loading: Option<Signal<bool>>,
    #[prop(optional, into)] on_click: Option<Callback<ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let loading = move || loading.map(|loading| loading.get()).unwrap_or(false);
    let inactive = move || disabled.get() || loading();

    view! {
        <button
            class=move || button_class(variant, size, inactive())
            disabled=inactive
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.call(ev);
                }
            }
        >
            <Show when=loading>
                <span class="w-4 h-4 mr-2 border-2 border-current border-t-transparent rounded-full animate-spin"></span>
            </Show>
            {children()}
        </button>
    }
}
