use leptos::prelude::*;

use super::widgets::{Icon, LevelBar, Reveal, SectionHeader};
use crate::content::{ABOUT_FACTS, ABOUT_IMAGE, INTERESTS};
use crate::glyph::Glyph;
use crate::sections::SectionId;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=SectionId::About.anchor() class="py-20 relative">
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeader
                    title="About"
                    accent="Me"
                    subtitle="Discover my journey, interests, and aspirations in the world of Health care, Science and Leadership."
                />

                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <Reveal class="relative group">
                        <div class="relative overflow-hidden rounded-2xl bg-gradient-to-br from-accent/20 to-transparent p-1">
                            <div class="bg-dark-light rounded-2xl overflow-hidden">
                                <img
                                    src=ABOUT_IMAGE
                                    alt="About Ayuk Ikome"
                                    class="w-full h-96 object-cover group-hover:scale-110 transition-transform duration-700"
                                />
                            </div>
                        </div>
                        <div class="absolute -top-4 -right-4 w-20 h-20 bg-accent rounded-full flex items-center justify-center shadow-glow animate-spin-slow">
                            <Icon glyph=Glyph::Award class="w-8 h-8 text-white" />
                        </div>
                    </Reveal>

                    <Reveal class="space-y-8">
                        <div class="prose prose-lg text-gray-300">
                            <p class="leading-relaxed mb-6">
                                "I'm a dedicated high school graduate and an A-Level holder from British Isles International College (2024-2025) with a profound passion for "
                                <span class="text-accent font-semibold">"biology and anatomy"</span>
                                ". My academic journey began at St. Joseph's College Sasse, where I completed my O-Levels (2022-2023)."
                            </p>
                            <p class="leading-relaxed mb-6">
                                "As a "
                                <span class="text-accent font-semibold">"Prefect and Student Admin"</span>
                                ", I developed strong leadership skills while maintaining academic excellence. My interests span across scientific research, educational technology, and fostering collaborative learning environments."
                            </p>
                        </div>

                        <div class="grid grid-cols-2 gap-4 mb-8">
                            {ABOUT_FACTS
                                .iter()
                                .map(|fact| {
                                    view! {
                                        <div class="bg-dark-light/50 rounded-lg p-4 border border-accent/10 hover:border-accent/30 transition-all duration-300">
                                            <div class="text-accent text-sm font-medium">{fact.label}</div>
                                            <div class="text-white font-semibold">{fact.value}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="space-y-6">
                            <h3 class="text-xl font-semibold text-white mb-4">"Interest Areas"</h3>
                            {INTERESTS
                                .iter()
                                .map(|level| {
                                    view! {
                                        <LevelBar
                                            name=level.name
                                            percent=level.percent
                                            glyph=level.glyph
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
