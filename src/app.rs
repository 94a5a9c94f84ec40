mod about;
mod back_to_top;
mod contact;
mod education;
mod experience;
mod footer;
mod gallery;
mod hero;
mod loading_screen;
mod nav;
mod parallax;
mod projects;
mod skills;
mod widgets;

use leptos::{ev, prelude::*};
use leptos_meta::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::config::SITE_CONFIG;
use crate::content::OWNER_NAME;
use crate::loading::LoadingGate;
use crate::sections::{resolve_active, Bounds, SectionId};

use about::About;
use back_to_top::BackToTop;
use contact::Contact;
use education::Education;
use experience::Experience;
use footer::Footer;
use gallery::Gallery;
use hero::Hero;
use loading_screen::LoadingScreen;
use nav::Navbar;
use parallax::Parallax;
use projects::Projects;
use skills::Skills;

fn anchor_bounds(id: SectionId) -> Option<Bounds> {
    let el = document().get_element_by_id(id.anchor())?;
    let rect = el.get_bounding_client_rect();
    Some(Bounds {
        top: rect.top(),
        bottom: rect.bottom(),
    })
}

/// Smooth-scrolls the section's anchor into view. Missing anchors are ignored.
pub fn scroll_to_section(id: SectionId) {
    let el = if let Some(el) = document().get_element_by_id(id.anchor()) {
        el
    } else {
        log::debug!("no anchor for #{id}, not scrolling");
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

pub fn scroll_to_top() {
    let opts = ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = &*SITE_CONFIG;
    let (ready, set_ready) = signal(false);
    let (active, set_active) = signal(SectionId::default());

    let delay = config.loading_delay();
    let mut gate = LoadingGate::new(delay);
    set_timeout(
        move || {
            if gate.advance(delay) {
                set_ready.set(true);
            }
        },
        delay,
    );

    let threshold = config.scroll_threshold_px;
    let _ = window_event_listener(ev::scroll, move |_| {
        let current = active.get_untracked();
        let next = resolve_active(current, threshold, anchor_bounds);
        if next != current {
            log::debug!("active section: {next}");
            set_active.set(next);
        }
    });

    view! {
        <Title text=format!("{OWNER_NAME} | Portfolio") />
        <Meta
            name="description"
            content="Portfolio of Ayuk Ikome: biology, anatomy, research and student leadership."
        />
        <div class="bg-dark overflow-x-hidden">
            <Show when=move || ready.get() fallback=|| view! { <LoadingScreen /> }>
                <Navbar active />
                <main>
                    <Hero />
                    <About />
                    <Skills />
                    <Experience />
                    <Education />
                    <Projects />
                    <Gallery />
                    <Parallax />
                    <Contact />
                </main>
                <Footer />
                <BackToTop />
            </Show>
        </div>
    }
}
