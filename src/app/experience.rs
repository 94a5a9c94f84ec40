use leptos::prelude::*;

use super::widgets::{Chip, Icon, Reveal, SectionHeader};
use crate::content::{ExperienceEntry, EXPERIENCE};
use crate::glyph::Glyph;
use crate::sections::SectionId;
use crate::selection::Selection;

#[component]
fn ExperienceCard(
    entry: &'static ExperienceEntry,
    index: usize,
    selection: RwSignal<Selection>,
) -> impl IntoView {
    let id = entry.id;
    let expanded = move || selection.with(|s| s.is_selected(id));
    let (row, pad) = if index % 2 == 0 {
        ("md:flex-row", "md:pr-16")
    } else {
        ("md:flex-row-reverse", "md:pl-16")
    };

    view! {
        <div class=format!("relative flex items-center {row}")>
            <div class=format!(
                "absolute left-6 md:left-1/2 transform md:-translate-x-1/2 w-6 h-6 rounded-full bg-gradient-to-r {} shadow-glow z-10 flex items-center justify-center",
                entry.gradient,
            )>
                <div class="w-2 h-2 bg-white rounded-full"></div>
            </div>

            <div class=format!("flex-1 ml-16 md:ml-0 {pad}")>
                <div
                    class="bg-dark-light/50 rounded-2xl p-6 border border-accent/10 hover:border-accent/30 transition-all duration-500 backdrop-blur-sm group cursor-pointer"
                    on:click=move |_| selection.update(|s| s.toggle(id))
                >
                    <div class="flex items-start justify-between mb-4">
                        <div class="flex items-center space-x-3">
                            <div class=format!(
                                "w-12 h-12 rounded-xl bg-gradient-to-r {} flex items-center justify-center shadow-glow",
                                entry.gradient,
                            )>
                                <Icon glyph=entry.glyph class="w-6 h-6 text-white" />
                            </div>
                            <div>
                                <h3 class="text-xl font-bold text-white group-hover:text-accent transition-colors">
                                    {entry.role}
                                </h3>
                                <p class="text-gray-400 font-medium">{entry.organization}</p>
                            </div>
                        </div>
                        <div class=move || {
                            if expanded() {
                                "transition-transform duration-300 rotate-90"
                            } else {
                                "transition-transform duration-300"
                            }
                        }>
                            <Icon glyph=Glyph::ChevronRight class="w-5 h-5 text-accent" />
                        </div>
                    </div>

                    <div class="flex flex-wrap items-center gap-4 mb-4 text-sm text-gray-400">
                        <div class="flex items-center space-x-2">
                            <Icon glyph=Glyph::Calendar class="w-4 h-4" />
                            <span>{entry.period}</span>
                        </div>
                        <div class="flex items-center space-x-2">
                            <Icon glyph=Glyph::MapPin class="w-4 h-4" />
                            <span>{entry.location}</span>
                        </div>
                        <span class="px-3 py-1 bg-accent/20 text-accent rounded-full text-xs font-medium">
                            {entry.kind}
                        </span>
                    </div>

                    <p class="text-gray-300 leading-relaxed">{entry.description}</p>

                    <Show when=expanded>
                        <div class="mt-6 pt-6 border-t border-accent/20 animate-fade-up">
                            <h4 class="text-white font-semibold mb-3">"Key Achievements:"</h4>
                            <ul class="space-y-2 mb-4">
                                {entry
                                    .achievements
                                    .iter()
                                    .map(|a| {
                                        view! {
                                            <li class="flex items-start space-x-2 text-gray-300">
                                                <div class="w-2 h-2 bg-accent rounded-full mt-2 flex-shrink-0"></div>
                                                <span>{*a}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                            <h4 class="text-white font-semibold mb-3">"Skills Developed:"</h4>
                            <div class="flex flex-wrap gap-2">
                                {entry
                                    .skills
                                    .iter()
                                    .map(|&skill| view! { <Chip text=skill /> })
                                    .collect_view()}
                            </div>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    let selection = RwSignal::new(Selection::default());

    view! {
        <section id=SectionId::Experience.anchor() class="py-20 relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-br from-dark via-dark-light/20 to-dark"></div>
            <div class="max-w-6xl mx-auto px-4 relative z-10">
                <SectionHeader
                    title="Experience &"
                    accent="Leadership"
                    subtitle="While I'm building my professional experience, my leadership roles have provided valuable insights and skills."
                />

                <Reveal class="bg-dark-light/50 rounded-2xl p-6 border border-accent/20 mb-12 text-center backdrop-blur-sm">
                    <p class="text-gray-300 text-lg">
                        <span class="text-accent font-semibold">
                            "Currently seeking professional experience"
                        </span>
                        " while building valuable skills through leadership roles and academic pursuits."
                    </p>
                </Reveal>

                <div class="relative">
                    <div class="absolute left-8 md:left-1/2 transform md:-translate-x-1/2 w-1 h-full bg-gradient-to-b from-accent/50 via-accent/30 to-transparent"></div>
                    <div class="space-y-12">
                        {EXPERIENCE
                            .iter()
                            .enumerate()
                            .map(|(index, entry)| {
                                view! { <ExperienceCard entry index selection /> }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
