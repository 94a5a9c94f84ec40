use std::fmt;
use std::str::FromStr;

use crate::glyph::Glyph;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Hero,
    About,
    Skills,
    Experience,
    Education,
    Projects,
    Gallery,
    Contact,
}

impl SectionId {
    /// The DOM id the section's root element carries.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Education => "education",
            SectionId::Projects => "projects",
            SectionId::Gallery => "gallery",
            SectionId::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('#').unwrap_or(s);
        SECTIONS
            .iter()
            .map(|d| d.id)
            .find(|id| id.anchor() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub id: SectionId,
    pub label: &'static str,
    pub glyph: Glyph,
}

/// Every navigable section, in page order.
pub static SECTIONS: [SectionDescriptor; 8] = [
    SectionDescriptor {
        id: SectionId::Hero,
        label: "Home",
        glyph: Glyph::Home,
    },
    SectionDescriptor {
        id: SectionId::About,
        label: "About",
        glyph: Glyph::User,
    },
    SectionDescriptor {
        id: SectionId::Skills,
        label: "Skills",
        glyph: Glyph::Code,
    },
    SectionDescriptor {
        id: SectionId::Experience,
        label: "Experience",
        glyph: Glyph::Briefcase,
    },
    SectionDescriptor {
        id: SectionId::Education,
        label: "Education",
        glyph: Glyph::GraduationCap,
    },
    SectionDescriptor {
        id: SectionId::Projects,
        label: "Projects",
        glyph: Glyph::FolderOpen,
    },
    SectionDescriptor {
        id: SectionId::Gallery,
        label: "Gallery",
        glyph: Glyph::Image,
    },
    SectionDescriptor {
        id: SectionId::Contact,
        label: "Contact",
        glyph: Glyph::Mail,
    },
];

/// Sections listed under "Quick Links" in the footer: everything but the
/// landing view and the contact form.
pub fn quick_links() -> impl Iterator<Item = &'static SectionDescriptor> {
    SECTIONS
        .iter()
        .filter(|d| !matches!(d.id, SectionId::Hero | SectionId::Contact))
}

/// Vertical extent of an anchor relative to the viewport, as reported by
/// `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// First section in registry order whose bounds straddle `threshold`.
///
/// `probe` returns `None` for anchors that aren't mounted; those are skipped.
/// When nothing matches the current section is kept.
pub fn resolve_active<F>(current: SectionId, threshold: f64, mut probe: F) -> SectionId
where
    F: FnMut(SectionId) -> Option<Bounds>,
{
    SECTIONS
        .iter()
        .map(|d| d.id)
        .find(|id| match probe(*id) {
            Some(bounds) => bounds.straddles(threshold),
            None => {
                log::trace!("anchor #{id} not mounted");
                false
            }
        })
        .unwrap_or(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn probe_from(
        layout: &HashMap<SectionId, Bounds>,
    ) -> impl FnMut(SectionId) -> Option<Bounds> + '_ {
        move |id| layout.get(&id).copied()
    }

    // lays the sections out top to bottom, each `height` tall, scrolled by `scroll`
    fn stacked(height: f64, scroll: f64) -> HashMap<SectionId, Bounds> {
        SECTIONS
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let top = i as f64 * height - scroll;
                (
                    d.id,
                    Bounds {
                        top,
                        bottom: top + height,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_registry_order_and_anchors() {
        let anchors = SECTIONS.iter().map(|d| d.id.anchor()).collect::<Vec<_>>();
        assert_eq!(
            anchors,
            vec![
                "hero",
                "about",
                "skills",
                "experience",
                "education",
                "projects",
                "gallery",
                "contact"
            ]
        );
    }

    #[test]
    fn test_quick_links_skip_hero_and_contact() {
        let labels = quick_links().map(|d| d.label).collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec!["About", "Skills", "Experience", "Education", "Projects", "Gallery"]
        );
    }

    #[test]
    fn test_anchor_parse_roundtrip() {
        for d in SECTIONS.iter() {
            assert_eq!(d.id.anchor().parse::<SectionId>(), Ok(d.id));
        }
        assert_eq!("#gallery".parse::<SectionId>(), Ok(SectionId::Gallery));
        assert_eq!(
            "footer".parse::<SectionId>(),
            Err(UnknownSection("footer".to_string()))
        );
    }

    #[test]
    fn test_resolve_follows_scroll() {
        let layout = stacked(800.0, 0.0);
        assert_eq!(
            resolve_active(SectionId::Contact, 100.0, probe_from(&layout)),
            SectionId::Hero
        );

        let layout = stacked(800.0, 800.0 * 3.0 + 50.0);
        assert_eq!(
            resolve_active(SectionId::Hero, 100.0, probe_from(&layout)),
            SectionId::Experience
        );
    }

    #[test]
    fn test_first_in_registry_order_wins_on_overlap() {
        let mut layout = HashMap::new();
        layout.insert(
            SectionId::Projects,
            Bounds {
                top: 0.0,
                bottom: 500.0,
            },
        );
        layout.insert(
            SectionId::Skills,
            Bounds {
                top: 50.0,
                bottom: 300.0,
            },
        );
        assert_eq!(
            resolve_active(SectionId::Hero, 100.0, probe_from(&layout)),
            SectionId::Skills
        );
    }

    #[test]
    fn test_no_match_keeps_current() {
        // everything is below the threshold line
        let layout = stacked(800.0, -500.0);
        assert_eq!(
            resolve_active(SectionId::Gallery, 100.0, probe_from(&layout)),
            SectionId::Gallery
        );
        assert_eq!(
            resolve_active(SectionId::About, 100.0, |_| None),
            SectionId::About
        );
    }

    #[test]
    fn test_unmounted_anchor_is_skipped() {
        let mut layout = stacked(800.0, 0.0);
        layout.remove(&SectionId::Hero);
        // about starts at 800, so nothing straddles 100 once hero is gone
        assert_eq!(
            resolve_active(SectionId::Contact, 100.0, probe_from(&layout)),
            SectionId::Contact
        );

        let mut layout = stacked(800.0, 900.0);
        layout.remove(&SectionId::Hero);
        assert_eq!(
            resolve_active(SectionId::Hero, 100.0, probe_from(&layout)),
            SectionId::About
        );
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let on_top = Bounds {
            top: 100.0,
            bottom: 900.0,
        };
        let on_bottom = Bounds {
            top: -700.0,
            bottom: 100.0,
        };
        assert!(on_top.straddles(100.0));
        assert!(on_bottom.straddles(100.0));
        assert!(!Bounds {
            top: 100.5,
            bottom: 900.0
        }
        .straddles(100.0));
    }
}
