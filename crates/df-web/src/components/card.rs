//! Content card

use df_core::widgets::{card_class, CardPadding};
use leptos::*;

#[component]
pub fn Card(
    #[prop(optional)] padding: CardPadding,
    #[prop(optional)] hover: bool,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=card_class(padding, hover, class)>
            {children()}
        </div>
    }
}
