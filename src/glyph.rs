/// The closed set of icons the page draws. Each resolves to a class from the
/// lucide icon font loaded in `index.html`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Home,
    User,
    Code,
    Briefcase,
    GraduationCap,
    FolderOpen,
    Image,
    Mail,
    Phone,
    MapPin,
    Menu,
    Close,
    Award,
    BookOpen,
    Target,
    Users,
    MessageCircle,
    Clock,
    Microscope,
    Calculator,
    Globe,
    Database,
    Palette,
    Zap,
    Calendar,
    Tag,
    ZoomIn,
    Star,
    ChevronRight,
    ExternalLink,
    Send,
    CheckCircle,
    ArrowDown,
    ArrowRight,
    ArrowUp,
    Heart,
    Instagram,
    Gamepad,
}

impl Glyph {
    pub fn class(self) -> &'static str {
        match self {
            Glyph::Home => "icon-house",
            Glyph::User => "icon-user",
            Glyph::Code => "icon-code",
            Glyph::Briefcase => "icon-briefcase",
            Glyph::GraduationCap => "icon-graduation-cap",
            Glyph::FolderOpen => "icon-folder-open",
            Glyph::Image => "icon-image",
            Glyph::Mail => "icon-mail",
            Glyph::Phone => "icon-phone",
            Glyph::MapPin => "icon-map-pin",
            Glyph::Menu => "icon-menu",
            Glyph::Close => "icon-x",
            Glyph::Award => "icon-award",
            Glyph::BookOpen => "icon-book-open",
            Glyph::Target => "icon-target",
            Glyph::Users => "icon-users",
            Glyph::MessageCircle => "icon-message-circle",
            Glyph::Clock => "icon-clock",
            Glyph::Microscope => "icon-microscope",
            Glyph::Calculator => "icon-calculator",
            Glyph::Globe => "icon-globe",
            Glyph::Database => "icon-database",
            Glyph::Palette => "icon-palette",
            Glyph::Zap => "icon-zap",
            Glyph::Calendar => "icon-calendar",
            Glyph::Tag => "icon-tag",
            Glyph::ZoomIn => "icon-zoom-in",
            Glyph::Star => "icon-star",
            Glyph::ChevronRight => "icon-chevron-right",
            Glyph::ExternalLink => "icon-external-link",
            Glyph::Send => "icon-send",
            Glyph::CheckCircle => "icon-circle-check",
            Glyph::ArrowDown => "icon-arrow-down",
            Glyph::ArrowRight => "icon-arrow-right",
            Glyph::ArrowUp => "icon-arrow-up",
            Glyph::Heart => "icon-heart",
            Glyph::Instagram => "icon-instagram",
            Glyph::Gamepad => "icon-gamepad-2",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CONTACT_CHANNELS, SKILL_CATEGORIES};
    use crate::sections::SECTIONS;
    use std::collections::HashSet;

    #[test]
    fn test_nav_glyphs_are_distinct() {
        let classes = SECTIONS
            .iter()
            .map(|d| d.glyph.class())
            .collect::<HashSet<_>>();
        assert_eq!(classes.len(), SECTIONS.len());
    }

    #[test]
    fn test_classes_use_icon_font_prefix() {
        let used = SKILL_CATEGORIES
            .iter()
            .flat_map(|c| c.skills.iter().map(|s| s.glyph))
            .chain(CONTACT_CHANNELS.iter().map(|c| c.glyph))
            .chain([Glyph::Close, Glyph::Menu, Glyph::Gamepad]);
        for glyph in used {
            assert!(glyph.class().starts_with("icon-"), "{glyph:?}");
        }
    }
}
