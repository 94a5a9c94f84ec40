use leptos::prelude::*;

use super::widgets::{Icon, Reveal, SectionHeader};
use crate::content::{EDUCATION, EDUCATION_GOALS};
use crate::glyph::Glyph;
use crate::sections::SectionId;

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section id=SectionId::Education.anchor() class="py-20 bg-dark-light/30">
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeader
                    title="Educational"
                    accent="Journey"
                    subtitle="My academic progression and achievements in pursuing scientific excellence."
                />

                <div class="relative max-w-4xl mx-auto">
                    <div class="absolute left-8 md:left-1/2 transform md:-translate-x-1/2 w-1 h-full bg-gradient-to-b from-accent via-accent/50 to-transparent"></div>

                    <div class="space-y-16">
                        {EDUCATION
                            .iter()
                            .map(|edu| {
                                let status_class = if edu.status == "In Progress" {
                                    "px-3 py-1 rounded-full text-xs font-medium bg-accent/20 text-accent"
                                } else {
                                    "px-3 py-1 rounded-full text-xs font-medium bg-green-500/20 text-green-400"
                                };
                                view! {
                                    <Reveal class="relative">
                                        <div class=format!(
                                            "absolute left-6 md:left-1/2 transform md:-translate-x-1/2 w-8 h-8 rounded-full bg-gradient-to-r {} shadow-glow z-10 flex items-center justify-center",
                                            edu.gradient,
                                        )>
                                            <Icon glyph=edu.glyph class="w-4 h-4 text-white" />
                                        </div>
                                        <div class="ml-16 md:ml-0 md:max-w-2xl md:mx-auto">
                                            <div class="bg-dark-light/50 rounded-2xl p-8 border border-accent/10 hover:border-accent/30 transition-all duration-500 backdrop-blur-sm group">
                                                <div class="flex items-start justify-between mb-6">
                                                    <div class="flex-1">
                                                        <h3 class="text-2xl font-bold text-white group-hover:text-accent transition-colors mb-2">
                                                            {edu.institution}
                                                        </h3>
                                                        <p class="text-gray-300 text-lg font-medium mb-3">
                                                            {edu.degree}
                                                        </p>
                                                        <div class="flex flex-wrap items-center gap-4 text-sm text-gray-400">
                                                            <div class="flex items-center space-x-2">
                                                                <Icon glyph=Glyph::Calendar class="w-4 h-4" />
                                                                <span>{edu.period}</span>
                                                            </div>
                                                            <span class=status_class>{edu.status}</span>
                                                        </div>
                                                    </div>
                                                    <div class=format!(
                                                        "w-16 h-16 rounded-xl bg-gradient-to-r {} flex items-center justify-center shadow-glow animate-spin-slow",
                                                        edu.gradient,
                                                    )>
                                                        <Icon glyph=edu.glyph class="w-8 h-8 text-white" />
                                                    </div>
                                                </div>

                                                <div class="mb-6">
                                                    <h4 class="text-white font-semibold mb-3 flex items-center space-x-2">
                                                        <Icon glyph=Glyph::BookOpen class="w-4 h-4 text-accent" />
                                                        <span>"Subjects"</span>
                                                    </h4>
                                                    <div class="flex flex-wrap gap-2">
                                                        {edu
                                                            .subjects
                                                            .iter()
                                                            .map(|s| {
                                                                view! {
                                                                    <span class="px-3 py-2 bg-accent/10 border border-accent/30 rounded-lg text-accent text-sm font-medium hover:bg-accent/20 hover:scale-105 transition-all duration-300">
                                                                        {*s}
                                                                    </span>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </div>
                                                </div>

                                                <div class="mb-6">
                                                    <h4 class="text-white font-semibold mb-3 flex items-center space-x-2">
                                                        <Icon glyph=Glyph::Star class="w-4 h-4 text-accent" />
                                                        <span>"Key Achievements"</span>
                                                    </h4>
                                                    <ul class="space-y-2">
                                                        {edu
                                                            .achievements
                                                            .iter()
                                                            .map(|a| {
                                                                view! {
                                                                    <li class="flex items-start space-x-3 text-gray-300">
                                                                        <div class="w-2 h-2 bg-accent rounded-full mt-2 flex-shrink-0"></div>
                                                                        <span class="leading-relaxed">{*a}</span>
                                                                    </li>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </ul>
                                                </div>

                                                <div class="flex items-center justify-between p-4 bg-dark/50 rounded-lg border border-accent/10">
                                                    <span class="text-gray-400">"Academic Performance:"</span>
                                                    <span class="text-accent font-semibold">{edu.performance}</span>
                                                </div>
                                            </div>
                                        </div>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>

                    <Reveal class="mt-16 text-center">
                        <div class="bg-gradient-to-r from-accent/10 to-transparent rounded-2xl p-8 border border-accent/20 backdrop-blur-sm">
                            <h3 class="text-2xl font-bold text-white mb-4">"Future Educational Goals"</h3>
                            <p class="text-gray-300 text-lg mb-6 max-w-3xl mx-auto leading-relaxed">
                                "Planning to pursue higher education in "
                                <span class="text-accent font-semibold">"Biology/Medical Sciences"</span>
                                " with a focus on anatomy and research. Exploring opportunities in top universities for undergraduate programs that align with my passion for scientific discovery and healthcare."
                            </p>
                            <div class="flex flex-wrap justify-center gap-3">
                                {EDUCATION_GOALS
                                    .iter()
                                    .map(|goal| {
                                        view! {
                                            <span class="px-4 py-2 bg-accent/10 border border-accent/30 rounded-full text-accent text-sm font-medium">
                                                {*goal}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
