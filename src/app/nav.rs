use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::scroll_to_section;
use super::widgets::Icon;
use crate::config::SITE_CONFIG;
use crate::content::LOCATION;
use crate::glyph::Glyph;
use crate::sections::{SectionId, SECTIONS};

const ACTIVE_ITEM: &str = "bg-accent text-white shadow-glow";
const IDLE_ITEM: &str = "text-gray-300 hover:text-white hover:bg-white/10";

/// Desktop pill bar plus the mobile overlay panel. Highlights `active` and
/// scrolls to a section on click.
#[component]
pub fn Navbar(active: ReadSignal<SectionId>) -> impl IntoView {
    let (open, set_open) = signal(false);
    let (_, scroll_y) = use_window_scroll();
    let offset = SITE_CONFIG.scrolled_offset_px;
    let scrolled = move || scroll_y.get() > offset;

    let go = move |id: SectionId| {
        scroll_to_section(id);
        set_open.set(false);
    };

    let item_class = move |id: SectionId, base: &'static str| {
        let state = if active.get() == id {
            ACTIVE_ITEM
        } else {
            IDLE_ITEM
        };
        format!("{base} transition-all duration-300 {state}")
    };

    view! {
        // mobile toggle
        <div class="fixed top-4 right-4 z-50 md:hidden">
            <button
                class=move || {
                    if scrolled() {
                        "w-12 h-12 rounded-full flex items-center justify-center text-xl font-bold transition-all duration-300 backdrop-blur-xl bg-dark-light/80 border border-accent/20 shadow-glow"
                    } else {
                        "w-12 h-12 rounded-full flex items-center justify-center text-xl font-bold transition-all duration-300 backdrop-blur-md bg-dark-light/40 border border-white/10"
                    }
                }
                aria-label="Open navigation"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <span class="text-accent">"A"</span>
                <span class="text-white">"Y"</span>
            </button>
        </div>

        // mobile overlay
        <div class=move || {
            if open.get() {
                "fixed inset-0 z-40 md:hidden pointer-events-auto opacity-100 transition-opacity duration-300"
            } else {
                "fixed inset-0 z-40 md:hidden pointer-events-none opacity-0 transition-opacity duration-300"
            }
        }>
            <div
                class="absolute inset-0 bg-black/50 backdrop-blur-sm"
                on:click=move |_| set_open.set(false)
            ></div>
            <div class=move || {
                let slide = if open.get() { "translate-x-0" } else { "translate-x-full" };
                format!(
                    "absolute top-0 right-0 h-full w-80 bg-dark-light/95 backdrop-blur-xl border-l border-accent/20 p-6 transform transition-transform duration-300 {slide}",
                )
            }>
                <div class="flex justify-end mb-8">
                    <button
                        class="w-10 h-10 rounded-full bg-accent/20 border border-accent/30 flex items-center justify-center text-accent hover:bg-accent/30 transition-colors"
                        aria-label="Close navigation"
                        on:click=move |_| set_open.set(false)
                    >
                        <Icon glyph=Glyph::Close class="w-5 h-5" />
                    </button>
                </div>
                <div class="text-center mb-8">
                    <h1 class="text-2xl font-bold">
                        <span class="text-accent">"Ayuk"</span>
                        <span class="text-white">"Ikome"</span>
                    </h1>
                    <p class="text-gray-400 text-sm mt-2">"Portfolio"</p>
                </div>
                <nav class="space-y-2">
                    {SECTIONS
                        .iter()
                        .map(|d| {
                            let id = d.id;
                            view! {
                                <button
                                    class=move || item_class(
                                        id,
                                        "w-full p-4 rounded-xl text-left flex items-center space-x-3",
                                    )
                                    on:click=move |_| go(id)
                                >
                                    <Icon glyph=d.glyph class="w-5 h-5" />
                                    <span class="font-medium">{d.label}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="absolute bottom-6 left-6 right-6">
                    <div class="text-center text-gray-400 text-sm">
                        <p>{format!("📍 {LOCATION}")}</p>
                        <p>"🎓 A-Level Graduate"</p>
                        <p>"🔬 Medicine & Healthcare"</p>
                    </div>
                </div>
            </div>
        </div>

        // desktop bar
        <nav class="fixed top-4 inset-x-0 z-50 hidden md:flex justify-center">
            <div class=move || {
                if scrolled() {
                    "px-6 py-3 w-fit rounded-2xl transition-all duration-300 backdrop-blur-xl bg-dark-light/80 border border-accent/20 shadow-glow"
                } else {
                    "px-6 py-3 w-fit rounded-2xl transition-all duration-300 backdrop-blur-md bg-dark-light/40 border border-white/10"
                }
            }>
                <div class="flex items-center justify-between">
                    <button
                        class="text-xl font-bold text-white cursor-pointer mr-6"
                        on:click=move |_| go(SectionId::Hero)
                    >
                        <span class="text-accent">"Ayuk"</span>
                        "Ikome"
                    </button>
                    <div class="flex items-center space-x-1">
                        {SECTIONS
                            .iter()
                            .map(|d| {
                                let id = d.id;
                                view! {
                                    <button
                                        class=move || item_class(
                                            id,
                                            "px-4 py-2 rounded-full text-sm font-medium",
                                        )
                                        on:click=move |_| go(id)
                                    >
                                        <Icon glyph=d.glyph class="w-4 h-4 inline mr-2" />
                                        {d.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}
