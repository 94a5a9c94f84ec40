use leptos::prelude::*;

use super::widgets::{FilterTabs, Icon, SectionHeader};
use crate::content::{Project, PROJECTS, PROJECT_CATEGORIES};
use crate::glyph::Glyph;
use crate::sections::SectionId;
use crate::selection::ListState;

#[component]
fn ProjectCard(project: &'static Project, state: RwSignal<ListState>) -> impl IntoView {
    let id = project.id;
    let expanded = move || state.with(|s| s.selection().is_selected(id));
    let status_class = if project.status == "Ongoing" {
        "px-3 py-1 rounded-full text-xs font-medium bg-green-500/80 text-white"
    } else {
        "px-3 py-1 rounded-full text-xs font-medium bg-blue-500/80 text-white"
    };
    let hidden = project.hidden_tags();

    view! {
        <div class="group cursor-pointer animate-fade-up" on:click=move |_| state.update(|s| s.toggle(id))>
            <div class="bg-dark-light/50 rounded-2xl overflow-hidden border border-accent/10 hover:border-accent/30 transition-all duration-500 backdrop-blur-sm group-hover:scale-105 group-hover:-translate-y-2">
                <div class="relative h-48 overflow-hidden">
                    <img
                        src=project.image
                        alt=project.title
                        class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-700"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-dark-light/80 via-transparent to-transparent"></div>
                    <div class="absolute top-4 left-4 flex space-x-2">
                        <span class="px-3 py-1 bg-accent/80 text-white rounded-full text-xs font-medium">
                            {project.category}
                        </span>
                        <span class=status_class>{project.status}</span>
                    </div>
                </div>

                <div class="p-6">
                    <h3 class="text-xl font-bold text-white group-hover:text-accent transition-colors mb-2">
                        {project.title}
                    </h3>
                    <p class="text-gray-400 text-sm leading-relaxed mb-4">{project.description}</p>

                    <div class="flex items-center justify-between text-sm text-gray-400 mb-4">
                        <div class="flex items-center space-x-2">
                            <Icon glyph=Glyph::Calendar class="w-4 h-4" />
                            <span>{project.date}</span>
                        </div>
                        <div class="flex items-center space-x-2">
                            <Icon glyph=Glyph::Users class="w-4 h-4" />
                            <span>{project.impact}</span>
                        </div>
                    </div>

                    <div class="flex flex-wrap gap-2 mb-4">
                        {project
                            .preview_tags()
                            .iter()
                            .map(|tag| {
                                view! {
                                    <span class="px-2 py-1 bg-accent/10 border border-accent/30 rounded text-accent text-xs">
                                        {*tag}
                                    </span>
                                }
                            })
                            .collect_view()}
                        {(hidden > 0)
                            .then(|| {
                                view! {
                                    <span class="px-2 py-1 text-gray-400 text-xs">
                                        {format!("+{hidden} more")}
                                    </span>
                                }
                            })}
                    </div>

                    <Show when=expanded>
                        <div class="border-t border-accent/20 pt-4 mt-4 animate-fade-up">
                            <p class="text-gray-300 mb-4 leading-relaxed">{project.long_description}</p>
                            <h4 class="text-white font-semibold mb-3 flex items-center space-x-2">
                                <Icon glyph=Glyph::Award class="w-4 h-4 text-accent" />
                                <span>"Key Achievements"</span>
                            </h4>
                            <ul class="space-y-2 mb-4">
                                {project
                                    .achievements
                                    .iter()
                                    .map(|a| {
                                        view! {
                                            <li class="flex items-start space-x-2 text-gray-300 text-sm">
                                                <div class="w-2 h-2 bg-accent rounded-full mt-2 flex-shrink-0"></div>
                                                <span>{*a}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                            <div class="flex flex-wrap gap-2">
                                {project
                                    .tags
                                    .iter()
                                    .map(|tag| {
                                        view! {
                                            <span class="px-3 py-1 bg-accent/10 border border-accent/30 rounded-full text-accent text-xs">
                                                {*tag}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </Show>

                    <button class="w-full mt-4 px-4 py-2 bg-accent/10 hover:bg-accent/20 text-accent rounded-lg transition-all duration-300 flex items-center justify-center space-x-2">
                        <span>{move || if expanded() { "Show Less" } else { "Learn More" }}</span>
                        <Icon glyph=Glyph::ExternalLink class="w-4 h-4" />
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let state = RwSignal::new(ListState::default());
    let visible = move || state.with(|s| s.visible(&PROJECTS));

    view! {
        <section id=SectionId::Projects.anchor() class="py-20 relative">
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeader
                    title="Projects &"
                    accent="Initiatives"
                    subtitle="Showcasing my leadership initiatives, research projects, and contributions to academic excellence."
                />

                <FilterTabs categories=&PROJECT_CATEGORIES state />

                <div class="grid md:grid-cols-2 lg:grid-cols-2 gap-8">
                    <For each=visible key=|project| project.id let:project>
                        <ProjectCard project state />
                    </For>
                </div>
            </div>
        </section>
    }
}
