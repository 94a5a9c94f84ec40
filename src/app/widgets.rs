use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::glyph::Glyph;
use crate::selection::ListState;

#[component]
pub fn Icon(glyph: Glyph, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <i class=format!("{} {}", glyph.class(), class) aria-hidden="true"></i> }
}

/// Fades its children in the first time they scroll into view.
#[component]
pub fn Reveal(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(target);
    let (revealed, set_revealed) = signal(false);

    Effect::new(move |_| {
        if visible.get() && !revealed.get_untracked() {
            set_revealed.set(true);
        }
    });

    view! {
        <div
            node_ref=target
            class=move || {
                let state = if revealed.get() {
                    "opacity-100 translate-y-0"
                } else {
                    "opacity-0 translate-y-12"
                };
                format!("transition-all duration-700 ease-out {state} {class}")
            }
        >
            {children()}
        </div>
    }
}

#[component]
pub fn SectionHeader(
    title: &'static str,
    accent: &'static str,
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <Reveal class="text-center mb-16">
            <h2 class="text-4xl md:text-5xl font-bold text-white mb-6">
                {title} " " <span class="text-accent">{accent}</span>
            </h2>
            <p class="text-gray-400 text-lg max-w-2xl mx-auto">{subtitle}</p>
        </Reveal>
    }
}

/// Category tabs driving the filter of a [`ListState`].
#[component]
pub fn FilterTabs(
    categories: &'static [&'static str],
    state: RwSignal<ListState>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap justify-center gap-2 mb-12">
            {categories
                .iter()
                .map(|&category| {
                    let is_active = move || state.with(|s| s.filter() == category);
                    view! {
                        <button
                            class=move || {
                                if is_active() {
                                    "px-6 py-3 rounded-full font-medium transition-all duration-300 bg-accent text-white shadow-glow"
                                } else {
                                    "px-6 py-3 rounded-full font-medium transition-all duration-300 bg-dark-light/50 text-gray-300 hover:text-white hover:bg-accent/20 border border-accent/20"
                                }
                            }
                            on:click=move |_| state.update(|s| s.set_filter(category))
                        >
                            {category}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn LevelBar(name: &'static str, percent: u8, glyph: Glyph) -> impl IntoView {
    view! {
        <div class="group">
            <div class="flex items-center justify-between mb-2">
                <div class="flex items-center space-x-3">
                    <Icon glyph class="w-5 h-5 text-accent" />
                    <span class="text-gray-300 font-medium">{name}</span>
                </div>
                <span class="text-accent font-semibold">{format!("{percent}%")}</span>
            </div>
            <div class="w-full bg-dark-light rounded-full h-3 overflow-hidden">
                <div
                    class="h-full bg-gradient-to-r from-accent to-red-600 rounded-full shadow-glow transition-all duration-1000"
                    style=format!("width: {percent}%")
                ></div>
            </div>
        </div>
    }
}

#[component]
pub fn Chip(text: &'static str) -> impl IntoView {
    view! {
        <span class="px-3 py-1 bg-accent/10 border border-accent/30 rounded-full text-accent text-sm">
            {text}
        </span>
    }
}
