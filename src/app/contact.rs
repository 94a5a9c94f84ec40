use leptos::{ev::SubmitEvent, prelude::*};

use super::widgets::{Icon, Reveal, SectionHeader};
use crate::config::SITE_CONFIG;
use crate::contact::{
    deep_link, ContactError, ContactForm, Field, Handoff, QuickAction, SubmitPhase,
    FAILURE_NOTICE,
};
use crate::content::CONTACT_CHANNELS;
use crate::glyph::Glyph;
use crate::sections::SectionId;

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-dark border border-accent/20 rounded-lg text-white focus:border-accent focus:outline-none focus:ring-2 focus:ring-accent/20 transition-colors";

/// Opens links in a new browsing context.
struct WindowHandoff;

impl Handoff for WindowHandoff {
    fn open(&self, url: &str) -> Result<(), ContactError> {
        let window = web_sys::window().ok_or(ContactError::NoWindow)?;
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(ContactError::Blocked),
            Err(e) => Err(ContactError::Dispatch(format!("{e:?}"))),
        }
    }
}

fn notify_failure() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(FAILURE_NOTICE) {
            log::warn!("couldn't show failure notice: {e:?}");
        }
    }
}

fn quick_action(action: QuickAction) {
    let url = deep_link(&SITE_CONFIG, action.message());
    if let Err(e) = WindowHandoff.open(&url) {
        log::error!("{e}");
        notify_failure();
    }
}

#[component]
fn InputField(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-gray-300 text-sm font-medium mb-2">{label}</label>
            <input
                type=kind
                required
                class=INPUT_CLASS
                placeholder=placeholder
                prop:value=move || form.with(|f| f.draft.get(field).to_string())
                on:input=move |ev| form.update(|f| f.draft.set(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
fn MessageForm(form: RwSignal<ContactForm>) -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let outcome = form
            .try_update(|f| f.submit(&SITE_CONFIG, &WindowHandoff))
            .flatten();
        match outcome {
            Some(Ok(url)) => {
                log::debug!("opened {url}");
                set_timeout(
                    move || form.update(ContactForm::expire),
                    SITE_CONFIG.submitted_reset(),
                );
            }
            Some(Err(_)) => notify_failure(),
            None => {}
        }
    };
    let submitting = move || form.with(|f| f.phase() == SubmitPhase::Submitting);

    view! {
        <form class="space-y-6" on:submit=on_submit>
            <div class="grid md:grid-cols-2 gap-4">
                <InputField
                    form
                    field=Field::Name
                    label="Full Name"
                    kind="text"
                    placeholder="Your name"
                />
                <InputField
                    form
                    field=Field::Email
                    label="Email Address"
                    kind="email"
                    placeholder="your@email.com"
                />
            </div>
            <InputField
                form
                field=Field::Subject
                label="Subject"
                kind="text"
                placeholder="What's this about?"
            />
            <div>
                <label class="block text-gray-300 text-sm font-medium mb-2">"Message"</label>
                <textarea
                    required
                    rows=6
                    class=format!("{INPUT_CLASS} resize-none")
                    placeholder="Tell me about your idea, project, or question..."
                    prop:value=move || form.with(|f| f.draft.message.clone())
                    on:input=move |ev| {
                        form.update(|f| f.draft.set(Field::Message, event_target_value(&ev)))
                    }
                ></textarea>
            </div>

            <button
                type="submit"
                disabled=move || form.with(|f| !f.can_submit())
                class="w-full px-8 py-4 bg-accent hover:bg-accent-dark text-white font-semibold rounded-lg shadow-glow hover:shadow-glow-intense transition-all duration-300 flex items-center justify-center space-x-3 disabled:opacity-50 disabled:cursor-not-allowed"
            >
                <Show
                    when=submitting
                    fallback=|| {
                        view! {
                            <Icon glyph=Glyph::Send class="w-5 h-5" />
                            <span>"Send Message"</span>
                        }
                    }
                >
                    <div class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"></div>
                    <span>"Sending..."</span>
                </Show>
            </button>
        </form>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let submitted = move || form.with(|f| f.phase() == SubmitPhase::Submitted);

    view! {
        <section id=SectionId::Contact.anchor() class="py-20 bg-dark-light/30">
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeader
                    title="Get In"
                    accent="Touch"
                    subtitle="Ready to collaborate on exciting projects or discuss opportunities? I'd love to hear from you!"
                />

                <div class="grid lg:grid-cols-2 gap-16">
                    <Reveal class="space-y-8">
                        <div>
                            <h3 class="text-2xl font-bold text-white mb-6">"Let's Connect"</h3>
                            <p class="text-gray-300 text-lg leading-relaxed mb-8">
                                "Whether you're interested in collaboration, have questions about my work, or want to discuss academic opportunities, I'm always open to meaningful conversations."
                            </p>
                        </div>

                        <div class="space-y-6">
                            {CONTACT_CHANNELS
                                .iter()
                                .map(|channel| {
                                    let external = channel.is_external();
                                    view! {
                                        <a
                                            href=channel.href
                                            target=if external { "_blank" } else { "_self" }
                                            rel=external.then_some("noopener noreferrer")
                                            class="group flex items-center space-x-4 p-4 bg-dark-light/50 rounded-2xl border border-accent/10 hover:border-accent/30 transition-all duration-300 hover:scale-105"
                                        >
                                            <div class=format!(
                                                "w-12 h-12 rounded-xl bg-gradient-to-r {} flex items-center justify-center shadow-glow",
                                                channel.gradient,
                                            )>
                                                <Icon glyph=channel.glyph class="w-6 h-6 text-white" />
                                            </div>
                                            <div class="flex-1">
                                                <div class="text-white font-semibold group-hover:text-accent transition-colors">
                                                    {channel.label}
                                                </div>
                                                <div class="text-gray-400 text-sm">{channel.value}</div>
                                            </div>
                                            {external
                                                .then(|| {
                                                    view! {
                                                        <Icon
                                                            glyph=Glyph::ExternalLink
                                                            class="w-5 h-5 text-gray-400 group-hover:text-accent transition-colors"
                                                        />
                                                    }
                                                })}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="bg-gradient-to-r from-accent/10 to-transparent rounded-2xl p-6 border border-accent/20">
                            <h4 class="text-white font-semibold mb-4">"Quick Actions"</h4>
                            <div class="space-y-3">
                                {QuickAction::ALL
                                    .into_iter()
                                    .map(|action| {
                                        view! {
                                            <button
                                                class="w-full text-left p-3 bg-dark-light/50 rounded-lg text-gray-300 hover:text-white hover:bg-accent/20 transition-all duration-300 border border-accent/10 cursor-pointer"
                                                on:click=move |_| quick_action(action)
                                            >
                                                {action.label()}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </Reveal>

                    <Reveal>
                        <div class="bg-dark-light/50 rounded-2xl p-8 border border-accent/10 backdrop-blur-sm">
                            <h3 class="text-2xl font-bold text-white mb-6">"Send a Message"</h3>
                            <Show when=submitted fallback=move || view! { <MessageForm form /> }>
                                <div class="text-center py-12 animate-fade-up">
                                    <Icon glyph=Glyph::CheckCircle class="w-16 h-16 text-green-500 mx-auto mb-4" />
                                    <h4 class="text-xl font-semibold text-white mb-2">"WhatsApp Opened!"</h4>
                                    <p class="text-gray-300">
                                        "Your message has been prepared and WhatsApp is now open. Please send the message to complete your inquiry."
                                    </p>
                                </div>
                            </Show>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
