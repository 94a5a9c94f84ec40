use leptos::{html, prelude::*};
use leptos_use::use_window_scroll;

use super::scroll_to_section;
use super::widgets::{Icon, Reveal};
use crate::content::{PARALLAX_IMAGE, PARALLAX_STATS};
use crate::glyph::Glyph;
use crate::sections::SectionId;

const PARTICLES: usize = 20;
/// Background travel per pixel the section moves through the viewport.
const DRIFT: f64 = 0.3;

/// Full-height call to action between the gallery and the contact form.
/// Not a navigation target, so it carries no anchor.
#[component]
pub fn Parallax() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let (_, scroll_y) = use_window_scroll();

    let background_style = move || {
        // re-run on every scroll tick
        scroll_y.track();
        let shift = section
            .get()
            .map(|el| -el.get_bounding_client_rect().top() * DRIFT)
            .unwrap_or_default();
        format!(
            "background-image: url(\"{PARALLAX_IMAGE}\"); background-size: cover; background-position: center; transform: translateY({shift:.1}px) scale(1.1)"
        )
    };

    view! {
        <section
            node_ref=section
            class="relative h-screen flex items-center justify-center overflow-hidden"
        >
            <div class="absolute inset-0" style=background_style>
                <div class="absolute inset-0 bg-dark/80"></div>
                <div class="absolute inset-0 bg-gradient-to-r from-accent/20 via-transparent to-accent/20"></div>
            </div>

            <div class="absolute inset-0 pointer-events-none">
                {(0..PARTICLES)
                    .map(|i| {
                        let left = (i * 53) % 100;
                        let top = (i * 29) % 100;
                        view! {
                            <div
                                class="absolute w-2 h-2 bg-accent/60 rounded-full animate-float"
                                style=format!(
                                    "left: {left}%; top: {top}%; animation-delay: {}ms",
                                    (i % 4) * 500,
                                )
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>

            <Reveal class="relative z-10 max-w-4xl mx-auto px-4 text-center">
                <div class="mb-8 animate-spin-slow">
                    <Icon glyph=Glyph::Star class="w-16 h-16 text-accent mx-auto" />
                </div>

                <h2 class="text-4xl md:text-6xl font-bold text-white mb-8 leading-tight">
                    "Ready to Make a" <br /> <span class="text-accent">"Difference"</span>
                </h2>

                <p class="text-xl text-gray-300 mb-12 max-w-2xl mx-auto leading-relaxed">
                    "Combining academic excellence with leadership experience, I'm passionate about contributing to scientific research and educational advancement. Let's collaborate on meaningful projects that make a positive impact."
                </p>

                <div class="flex flex-col sm:flex-row gap-6 justify-center items-center">
                    <button
                        class="group px-8 py-4 border-2 border-white text-white hover:bg-white hover:text-dark font-semibold rounded-full transition-all duration-300 flex items-center space-x-3 hover:scale-105"
                        on:click=move |_| scroll_to_section(SectionId::Contact)
                    >
                        <span>"Let's Connect"</span>
                        <Icon
                            glyph=Glyph::ArrowRight
                            class="w-5 h-5 group-hover:translate-x-1 transition-transform"
                        />
                    </button>
                </div>

                <div class="mt-16 grid grid-cols-2 md:grid-cols-4 gap-8 text-center">
                    {PARALLAX_STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="group hover:scale-110 transition-transform">
                                    <div class="text-3xl md:text-4xl font-bold text-accent mb-2 group-hover:text-white transition-colors">
                                        {stat.value}
                                    </div>
                                    <div class="text-gray-300 text-sm">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Reveal>

            <div class="absolute top-1/4 left-10 w-20 h-20 border border-accent/30 rounded-full"></div>
            <div class="absolute bottom-1/4 right-10 w-16 h-16 border border-accent/20 rotate-45"></div>
            <div class="absolute top-1/2 right-1/4 w-3 h-3 bg-accent rounded-full animate-pulse"></div>
        </section>
    }
}
