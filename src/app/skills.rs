use leptos::prelude::*;

use super::widgets::{Icon, Reveal, SectionHeader};
use crate::content::{SkillCategory, EXTRA_SKILLS, SKILL_CATEGORIES};
use crate::sections::SectionId;

#[component]
fn CategoryCard(category: &'static SkillCategory) -> impl IntoView {
    view! {
        <Reveal class="group">
            <div class="bg-dark-light/50 rounded-2xl p-8 border border-accent/10 hover:border-accent/30 transition-all duration-500 backdrop-blur-sm group-hover:scale-105 h-full">
                <div class=format!(
                    "w-16 h-1 bg-gradient-to-r {} rounded-full mb-6",
                    category.gradient,
                )></div>
                <h3 class="text-2xl font-bold text-white mb-8">{category.title}</h3>
                <div class="space-y-6">
                    {category
                        .skills
                        .iter()
                        .map(|skill| {
                            view! {
                                <div>
                                    <div class="flex items-center justify-between mb-2">
                                        <div class="flex items-center space-x-3">
                                            <Icon glyph=skill.glyph class="w-5 h-5 text-accent" />
                                            <span class="text-gray-300 font-medium">{skill.name}</span>
                                        </div>
                                        <span class="text-accent font-semibold text-sm">
                                            {format!("{}%", skill.percent)}
                                        </span>
                                    </div>
                                    <div class="w-full bg-dark rounded-full h-2 overflow-hidden">
                                        <div
                                            class=format!(
                                                "h-full bg-gradient-to-r {} rounded-full transition-all duration-1000",
                                                category.gradient,
                                            )
                                            style=format!("width: {}%", skill.percent)
                                        ></div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Reveal>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=SectionId::Skills.anchor() class="py-20 bg-dark-light/30">
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeader
                    title="Skills &"
                    accent="Expertise"
                    subtitle="A comprehensive overview of my abilities across different domains."
                />

                <div class="grid lg:grid-cols-3 gap-8">
                    {SKILL_CATEGORIES
                        .iter()
                        .map(|category| view! { <CategoryCard category /> })
                        .collect_view()}
                </div>

                <Reveal class="mt-16 text-center">
                    <h3 class="text-2xl font-bold text-white mb-8">"Additional Skills"</h3>
                    <div class="flex flex-wrap justify-center gap-3">
                        {EXTRA_SKILLS
                            .iter()
                            .map(|skill| {
                                view! {
                                    <span class="px-4 py-2 bg-dark-light/50 border border-accent/20 rounded-full text-gray-300 hover:bg-accent/20 hover:scale-105 transition-all duration-300 cursor-default">
                                        {*skill}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
