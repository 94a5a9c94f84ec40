use leptos::prelude::*;

use super::scroll_to_section;
use super::widgets::Icon;
use crate::content::{HERO_IMAGE, HERO_STATS, OWNER_NAME, OWNER_SURNAME};
use crate::glyph::Glyph;
use crate::sections::SectionId;

const PARTICLES: usize = 50;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section
            id=SectionId::Hero.anchor()
            class="relative min-h-screen flex items-center justify-center overflow-hidden"
        >
            <div class="absolute inset-0 bg-gradient-to-br from-dark via-dark-light to-dark">
                <div class="absolute inset-0 bg-[radial-gradient(circle_at_30%_50%,rgba(224,59,59,0.1),transparent)]"></div>
                <div class="absolute inset-0 bg-[radial-gradient(circle_at_70%_20%,rgba(224,59,59,0.05),transparent)]"></div>
            </div>

            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                {(0..PARTICLES)
                    .map(|i| {
                        // spread deterministically, the float animation does the rest
                        let left = (i * 37) % 100;
                        let top = (i * 61) % 100;
                        view! {
                            <div
                                class="absolute w-1 h-1 bg-accent rounded-full opacity-60 animate-float"
                                style=format!(
                                    "left: {left}%; top: {top}%; animation-delay: {}ms; box-shadow: 0 0 4px rgba(224, 59, 59, 0.5)",
                                    i * 500,
                                )
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="relative z-10 text-center px-4 max-w-6xl mx-auto">
                <div class="animate-fade-up">
                    <div class="relative mx-auto mb-8 w-48 h-48 group">
                        <div class="w-full h-full rounded-full bg-gradient-to-br from-accent to-red-700 p-1 shadow-glow-intense">
                            <div class="w-full h-full rounded-full overflow-hidden bg-dark-light">
                                <img
                                    src=HERO_IMAGE
                                    alt="Ayuk Ikome Profile"
                                    class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-300"
                                />
                            </div>
                        </div>
                        <div class="absolute -inset-4 rounded-full border border-accent/30 animate-spin-slow"></div>
                    </div>

                    <h1 class="text-5xl md:text-7xl font-bold text-white mb-6">
                        <span class="text-accent">{OWNER_NAME}</span>
                        {format!(" {OWNER_SURNAME}")}
                        <br />
                        <span class="text-3xl md:text-5xl text-gray-300">"Student"</span>
                    </h1>

                    <p class="text-xl text-gray-400 mb-8 max-w-2xl mx-auto leading-relaxed">
                        "Passionate about biology, anatomy, and research. Currently done with High School and just got my A-Levels while on a break before transiting into a new era of Further Studies, I always keep exploring the intersection of Health care science and technology."
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                        <button
                            class="px-8 py-4 border-2 border-accent text-accent hover:bg-accent hover:text-white font-semibold rounded-full transition-all duration-300 flex items-center space-x-2 hover:scale-105"
                            on:click=move |_| scroll_to_section(SectionId::Contact)
                        >
                            <Icon glyph=Glyph::Mail class="w-5 h-5" />
                            <span>"Contact Me"</span>
                        </button>
                    </div>

                    <div class="mt-16 grid grid-cols-2 md:grid-cols-4 gap-8 text-center">
                        {HERO_STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="group hover:scale-105 transition-transform">
                                        <div class="text-2xl font-bold text-accent group-hover:text-white transition-colors">
                                            {stat.value}
                                        </div>
                                        <div class="text-gray-400 text-sm">{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="absolute -bottom-24 left-1/2 transform -translate-x-1/2">
                    <button
                        class="flex flex-col items-center text-gray-400 hover:text-accent transition-colors animate-bounce"
                        on:click=move |_| scroll_to_section(SectionId::About)
                    >
                        <span class="text-sm mb-2">"Scroll Down"</span>
                        <Icon glyph=Glyph::ArrowDown class="w-5 h-5" />
                    </button>
                </div>
            </div>

            <div class="absolute top-1/4 left-10 w-20 h-20 border border-accent/30 rounded-full animate-float"></div>
            <div class="absolute bottom-1/4 right-10 w-16 h-16 border border-accent/20 rotate-45 animate-float"></div>
            <div class="absolute top-1/2 right-1/4 w-2 h-2 bg-accent rounded-full animate-float"></div>
        </section>
    }
}
