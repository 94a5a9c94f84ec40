use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::scroll_to_top;
use super::widgets::Icon;
use crate::config::SITE_CONFIG;
use crate::glyph::Glyph;

#[component]
pub fn BackToTop() -> impl IntoView {
    let (_, y) = use_window_scroll();
    let visible = move || y.get() > SITE_CONFIG.back_to_top_offset_px;

    view! {
        <Show when=visible>
            <button
                class="fixed bottom-8 right-8 z-40 w-12 h-12 bg-accent hover:bg-accent-dark text-white rounded-full flex items-center justify-center shadow-glow hover:shadow-glow-intense hover:scale-110 transition-all duration-300 animate-fade-up"
                aria-label="Back to top"
                on:click=move |_| scroll_to_top()
            >
                <Icon glyph=Glyph::ArrowUp class="w-6 h-6" />
            </button>
        </Show>
    }
}
