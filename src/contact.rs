use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

use crate::config::SiteConfig;

/// Characters `encodeURIComponent` leaves alone.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const NO_SUBJECT: &str = "No subject";

pub const FAILURE_NOTICE: &str = "Failed to send message. Please try again later.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("no browser window available")]
    NoWindow,
    #[error("messaging window was blocked")]
    Blocked,
    #[error("couldn't open messaging link: {0}")]
    Dispatch(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactDraft {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Plain-text message sent through the messaging link.
    pub fn compose(&self, sender_tag: &str) -> String {
        let subject = if self.subject.is_empty() {
            NO_SUBJECT
        } else {
            &self.subject
        };
        format!(
            "*New Message from Contact Form*\n\nName: {}\nEmail: {}\nSubject: {}\nMessage: {}\n\nSent from: {}",
            self.name, self.email, subject, self.message, sender_tag
        )
    }
}

/// Canned messages offered next to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    Transcript,
    Collaboration,
}

impl QuickAction {
    pub const ALL: [QuickAction; 2] = [QuickAction::Transcript, QuickAction::Collaboration];

    pub fn label(self) -> &'static str {
        match self {
            QuickAction::Transcript => "📋 Request Academic Transcript Directly on WhatsApp",
            QuickAction::Collaboration => "🤝 Collaboration Inquiry Directly on WhatsApp",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            QuickAction::Transcript => "Hello! I would like to request my academic transcript. Could you please provide me with the necessary information and process?",
            QuickAction::Collaboration => "Hello! I'm interested in collaborating with you. Could you please tell me more about potential collaboration opportunities?",
        }
    }
}

/// `<base>/<recipient>?text=<percent-encoded text>`
pub fn deep_link(config: &SiteConfig, text: &str) -> String {
    format!(
        "{}/{}?text={}",
        config.messaging_base_url.trim_end_matches('/'),
        config.recipient,
        utf8_percent_encode(text, COMPONENT)
    )
}

/// Opens a deep link in the external messaging app.
pub trait Handoff {
    fn open(&self, url: &str) -> Result<(), ContactError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub draft: ContactDraft,
    phase: SubmitPhase,
}

impl ContactForm {
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn can_submit(&self) -> bool {
        self.phase == SubmitPhase::Idle
    }

    /// Hands the draft off to the messaging app.
    ///
    /// Returns the link that was opened. On success the draft is cleared and
    /// the form sits in `Submitted` until [`ContactForm::expire`]; on failure
    /// the draft is kept and the form goes back to `Idle`. Submitting while
    /// not idle does nothing and returns `None`.
    pub fn submit<H: Handoff + ?Sized>(
        &mut self,
        config: &SiteConfig,
        handoff: &H,
    ) -> Option<Result<String, ContactError>> {
        if !self.can_submit() {
            return None;
        }
        self.phase = SubmitPhase::Submitting;
        let url = deep_link(config, &self.draft.compose(&config.sender_tag));
        match handoff.open(&url) {
            Ok(()) => {
                log::info!("contact message handed off");
                self.draft = ContactDraft::default();
                self.phase = SubmitPhase::Submitted;
                Some(Ok(url))
            }
            Err(e) => {
                log::error!("{e}");
                self.phase = SubmitPhase::Idle;
                Some(Err(e))
            }
        }
    }

    /// Clears the submitted notice once its display time has elapsed.
    pub fn expire(&mut self) {
        if self.phase == SubmitPhase::Submitted {
            self.phase = SubmitPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        opened: RefCell<Vec<String>>,
        fail_with: Option<ContactError>,
    }

    impl Handoff for Recorder {
        fn open(&self, url: &str) -> Result<(), ContactError> {
            if let Some(e) = &self.fail_with {
                return Err(e.clone());
            }
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    fn decoded_text(url: &str) -> String {
        let (_, text) = url.split_once("?text=").expect("link should carry text");
        percent_decode_str(text)
            .decode_utf8()
            .expect("text should be utf8")
            .into_owned()
    }

    fn sample_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.draft.set(Field::Name, "A".to_string());
        form.draft.set(Field::Email, "a@b.com".to_string());
        form.draft.set(Field::Subject, String::new());
        form.draft.set(Field::Message, "hi".to_string());
        form
    }

    #[test]
    fn test_submit_builds_link_and_resets() {
        let config = SiteConfig::default();
        let recorder = Recorder::default();
        let mut form = sample_form();

        let url = form
            .submit(&config, &recorder)
            .expect("idle form should submit")
            .expect("hand-off should succeed");
        assert!(url.starts_with("https://wa.me/+237653193185?text="));
        assert_eq!(recorder.opened.borrow().as_slice(), &[url.clone()]);

        let text = decoded_text(&url);
        assert!(text.contains("Name: A"));
        assert!(text.contains("Email: a@b.com"));
        assert!(text.contains("Subject: No subject"));
        assert!(text.contains("Message: hi"));
        assert!(text.ends_with("Sent from: Ayuk Ikome Portfolio Website"));

        assert_eq!(form.draft, ContactDraft::default());
        assert_eq!(form.phase(), SubmitPhase::Submitted);

        form.expire();
        assert_eq!(form.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn test_submit_blocked_while_not_idle() {
        let config = SiteConfig::default();
        let recorder = Recorder::default();
        let mut form = sample_form();
        form.submit(&config, &recorder);

        form.draft.set(Field::Message, "again".to_string());
        assert!(form.submit(&config, &recorder).is_none());
        assert_eq!(recorder.opened.borrow().len(), 1);
    }

    #[test]
    fn test_failed_handoff_keeps_draft() {
        let config = SiteConfig::default();
        let recorder = Recorder {
            fail_with: Some(ContactError::Blocked),
            ..Default::default()
        };
        let mut form = sample_form();
        let res = form.submit(&config, &recorder);
        assert_eq!(res, Some(Err(ContactError::Blocked)));
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert_eq!(form.draft.get(Field::Name), "A");
        assert_eq!(form.draft.get(Field::Message), "hi");
    }

    #[test]
    fn test_expire_only_clears_submitted() {
        let mut form = ContactForm::default();
        form.expire();
        assert_eq!(form.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn test_encoding_matches_uri_component() {
        let config = SiteConfig::default();
        let url = deep_link(&config, "a b&c=d/e?*(ok)!~'_-.");
        assert_eq!(
            url,
            "https://wa.me/+237653193185?text=a%20b%26c%3Dd%2Fe%3F*(ok)!~'_-."
        );
        let url = deep_link(&config, "line\nné");
        assert!(url.ends_with("line%0An%C3%A9"));
    }

    #[test]
    fn test_subject_kept_when_present() {
        let draft = ContactDraft {
            subject: "Research".to_string(),
            ..Default::default()
        };
        let text = draft.compose("tag");
        assert!(text.contains("Subject: Research"));
        assert!(!text.contains(NO_SUBJECT));
    }

    #[test]
    fn test_quick_action_links() {
        let config = SiteConfig::default();
        for action in QuickAction::ALL {
            let url = deep_link(&config, action.message());
            assert_eq!(decoded_text(&url), action.message());
        }
    }
}
