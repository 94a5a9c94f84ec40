use leptos::prelude::*;

use super::widgets::{FilterTabs, Icon, SectionHeader};
use crate::content::{GalleryItem, GALLERY, GALLERY_CATEGORIES};
use crate::glyph::Glyph;
use crate::sections::SectionId;
use crate::selection::ListState;

#[component]
fn Tile(item: &'static GalleryItem, state: RwSignal<ListState>) -> impl IntoView {
    let id = item.id;
    view! {
        <div
            class="group cursor-pointer relative animate-fade-up"
            on:click=move |_| state.update(|s| s.toggle(id))
        >
            <div class="relative overflow-hidden rounded-2xl bg-dark-light/50 border border-accent/10 hover:border-accent/30 transition-all duration-500">
                <div class="aspect-square relative overflow-hidden">
                    <img
                        src=item.image
                        alt=item.title
                        class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-700"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-dark/80 via-transparent to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>

                    <div class="absolute inset-0 flex items-end p-6 opacity-0 group-hover:opacity-100 transition-all duration-300 transform translate-y-4 group-hover:translate-y-0">
                        <div class="text-white">
                            <h3 class="text-lg font-bold mb-2">{item.title}</h3>
                            <p class="text-gray-300 text-sm mb-3">{item.description}</p>
                            <div class="flex items-center space-x-4 text-xs text-gray-400">
                                <div class="flex items-center space-x-1">
                                    <Icon glyph=Glyph::Calendar class="w-3 h-3" />
                                    <span>{item.date}</span>
                                </div>
                                <div class="flex items-center space-x-1">
                                    <Icon glyph=Glyph::Tag class="w-3 h-3" />
                                    <span>{item.category}</span>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="absolute top-4 right-4 w-10 h-10 bg-dark-light/80 rounded-full flex items-center justify-center opacity-0 group-hover:opacity-100 transition-all duration-300 transform scale-75 group-hover:scale-100">
                        <Icon glyph=Glyph::ZoomIn class="w-5 h-5 text-accent" />
                    </div>

                    <div class="absolute top-4 left-4">
                        <span class="px-3 py-1 bg-accent/80 text-white rounded-full text-xs font-medium">
                            {item.category}
                        </span>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Full-size view of the selected item. Clicks on the backdrop close it,
/// clicks on the panel itself don't.
#[component]
fn Lightbox(item: &'static GalleryItem, state: RwSignal<ListState>) -> impl IntoView {
    let close = move || state.update(|s| s.clear_selection());

    view! {
        <div
            class="fixed inset-0 bg-black/90 z-50 flex items-center justify-center p-4"
            on:click=move |_| close()
        >
            <div
                class="relative max-w-4xl max-h-[90vh] bg-dark-light rounded-2xl overflow-hidden border border-accent/20"
                on:click=|ev| ev.stop_propagation()
            >
                <button
                    class="absolute top-4 right-4 z-10 w-10 h-10 bg-dark/80 rounded-full flex items-center justify-center text-white hover:bg-accent hover:scale-110 transition-all duration-300"
                    aria-label="Close"
                    on:click=move |_| close()
                >
                    <Icon glyph=Glyph::Close class="w-5 h-5" />
                </button>

                <div class="relative">
                    <img
                        src=item.image
                        alt=item.title
                        class="w-full h-auto max-h-[70vh] object-contain"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-dark/60 via-transparent to-transparent"></div>
                </div>

                <div class="p-6">
                    <div class="flex items-start justify-between mb-4">
                        <div>
                            <h3 class="text-2xl font-bold text-white mb-2">{item.title}</h3>
                            <p class="text-gray-300 leading-relaxed">{item.description}</p>
                        </div>
                        <span class="px-3 py-1 bg-accent text-white rounded-full text-sm font-medium ml-4">
                            {item.category}
                        </span>
                    </div>
                    <div class="flex items-center space-x-2 text-sm text-gray-400">
                        <Icon glyph=Glyph::Calendar class="w-4 h-4" />
                        <span>{item.date}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Gallery() -> impl IntoView {
    let state = RwSignal::new(ListState::default());
    let visible = move || state.with(|s| s.visible(&GALLERY));
    let selected = move || {
        state.with(|s| s.selection().selected())
            .and_then(|id| GALLERY.iter().find(|item| item.id == id))
    };

    view! {
        <section id=SectionId::Gallery.anchor() class="py-20 bg-dark-light/30">
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeader
                    title="Gallery &"
                    accent="Memories"
                    subtitle="A visual journey through my academic achievements, leadership moments, and memorable experiences."
                />

                <FilterTabs categories=&GALLERY_CATEGORIES state />

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    <For each=visible key=|item| item.id let:item>
                        <Tile item state />
                    </For>
                </div>

                {move || selected().map(|item| view! { <Lightbox item state /> })}
            </div>
        </section>
    }
}
