use chrono::Datelike;
use leptos::prelude::*;

use super::scroll_to_section;
use super::widgets::{Icon, Reveal};
use crate::content::{CONTACT_CHANNELS, OWNER_NAME, SOCIAL_CHANNELS};
use crate::glyph::Glyph;
use crate::sections::quick_links;

const PARTICLES: usize = 10;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="relative bg-dark border-t border-accent/20">
            <div class="absolute top-0 left-0 right-0 h-px bg-gradient-to-r from-transparent via-accent to-transparent"></div>

            <div class="max-w-6xl mx-auto px-4 py-16">
                <Reveal>
                    <div class="grid lg:grid-cols-4 md:grid-cols-2 gap-8 mb-12">
                        <div class="lg:col-span-2">
                            <div class="mb-6 hover:scale-105 transition-transform">
                                <h3 class="text-2xl font-bold text-white mb-2">
                                    <span class="text-accent">{OWNER_NAME}</span>
                                    "Portfolio"
                                </h3>
                                <p class="text-gray-400 leading-relaxed">
                                    "A passionate High school graduate combining academic excellence with leadership experience. Focused on biology, anatomy, and research while building meaningful connections in the academic community."
                                </p>
                            </div>

                            <div class="space-y-3">
                                {CONTACT_CHANNELS
                                    .iter()
                                    .filter(|c| c.is_linkable())
                                    .map(|channel| {
                                        let external = channel.is_external();
                                        view! {
                                            <a
                                                href=channel.href
                                                target=if external { "_blank" } else { "_self" }
                                                rel=external.then_some("noopener noreferrer")
                                                class="flex items-center space-x-3 text-gray-400 hover:text-accent transition-colors group"
                                            >
                                                <Icon
                                                    glyph=channel.glyph
                                                    class="w-5 h-5 group-hover:scale-110 transition-transform"
                                                />
                                                <span>{channel.label}</span>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div>
                            <h4 class="text-white font-semibold mb-6">"Quick Links"</h4>
                            <ul class="space-y-3">
                                {quick_links()
                                    .map(|section| {
                                        let id = section.id;
                                        view! {
                                            <li>
                                                <button
                                                    class="text-gray-400 hover:text-accent transition-colors hover:translate-x-2 transform duration-300 block"
                                                    on:click=move |_| scroll_to_section(id)
                                                >
                                                    {section.label}
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>

                        <div>
                            <h4 class="text-white font-semibold mb-6">"Connect"</h4>
                            <div class="flex space-x-4 mb-6">
                                {SOCIAL_CHANNELS
                                    .iter()
                                    .map(|social| {
                                        view! {
                                            <a
                                                href=social.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=social.label
                                                class="w-12 h-12 bg-dark-light border border-accent/20 rounded-xl flex items-center justify-center text-gray-400 hover:text-white hover:bg-accent hover:border-accent hover:scale-110 hover:rotate-6 transition-all duration-300"
                                            >
                                                <Icon glyph=social.glyph class="w-5 h-5" />
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <div class="text-gray-400 text-sm space-y-2">
                                <p>"📍 Makepe Douala Cameroon"</p>
                                <p>"🎓 A-Level"</p>
                                <p>"🔬 Medicine and Healthcare Enthusiast"</p>
                            </div>
                        </div>
                    </div>

                    <div class="border-t border-accent/20 my-8"></div>

                    <div class="flex flex-col md:flex-row justify-between items-center">
                        <div class="text-gray-400 text-sm mb-4 md:mb-0 flex items-center">
                            <span>{format!("© {year} Made by TB-group")}</span>
                            <span class="mx-2 animate-pulse">
                                <Icon glyph=Glyph::Heart class="w-4 h-4 text-accent" />
                            </span>
                            <span>"All rights reserved."</span>
                        </div>
                    </div>
                </Reveal>
            </div>

            <div class="absolute top-10 left-10 w-20 h-20 border border-accent/10 rounded-full opacity-50"></div>
            <div class="absolute bottom-10 right-10 w-16 h-16 border border-accent/10 rotate-45 opacity-30"></div>

            <div class="absolute inset-0 pointer-events-none overflow-hidden">
                {(0..PARTICLES)
                    .map(|i| {
                        view! {
                            <div
                                class="absolute w-1 h-1 bg-accent/20 rounded-full animate-float"
                                style=format!("left: {}%; top: {}%", (i * 41) % 100, (i * 67) % 100)
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>
        </footer>
    }
}
