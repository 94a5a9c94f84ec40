//! Everything the page displays. Records are defined once here and never
//! created or destroyed at runtime; numeric ids are only render keys and
//! selection references, unique within their own list.

use crate::glyph::Glyph;

pub const OWNER_NAME: &str = "Ayuk Ikome";
pub const OWNER_SURNAME: &str = "Tabe Mbiokang";
pub const HERO_IMAGE: &str = "/Hero.jpg";
pub const ABOUT_IMAGE: &str = "/About.jpg";
pub const PARALLAX_IMAGE: &str =
    "https://images.pexels.com/photos/2280549/pexels-photo-2280549.jpeg?auto=compress&cs=tinysrgb&w=1200";
pub const EMAIL: &str = "ayukikome44@gmail.com";
pub const LOCATION: &str = "Makepe Douala Cameroon";

/// A record that can be narrowed by a filter tab.
pub trait Categorized {
    fn category(&self) -> &str;
}

/// A record that can be selected by id.
pub trait Keyed {
    fn key(&self) -> u32;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Level {
    pub glyph: Glyph,
    pub name: &'static str,
    pub percent: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub gradient: &'static str,
    pub skills: &'static [Level],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperienceEntry {
    pub id: u32,
    pub role: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
    pub glyph: Glyph,
    pub gradient: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EducationEntry {
    pub id: u32,
    pub institution: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
    pub status: &'static str,
    pub glyph: Glyph,
    pub gradient: &'static str,
    pub subjects: &'static [&'static str],
    pub achievements: &'static [&'static str],
    pub performance: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub date: &'static str,
    pub status: &'static str,
    pub impact: &'static str,
    pub achievements: &'static [&'static str],
}

impl Project {
    /// Number of tags shown on the collapsed card.
    pub const PREVIEW_TAGS: usize = 3;

    pub fn preview_tags(&self) -> &'static [&'static str] {
        &self.tags[..self.tags.len().min(Self::PREVIEW_TAGS)]
    }

    pub fn hidden_tags(&self) -> usize {
        self.tags.len().saturating_sub(Self::PREVIEW_TAGS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryItem {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub date: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Channel {
    pub glyph: Glyph,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub gradient: &'static str,
}

impl Channel {
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }

    /// Channels with a `#` placeholder href are display-only.
    pub fn is_linkable(&self) -> bool {
        self.href != "#"
    }
}

impl Categorized for Project {
    fn category(&self) -> &str {
        self.category
    }
}

impl Categorized for GalleryItem {
    fn category(&self) -> &str {
        self.category
    }
}

impl Keyed for Project {
    fn key(&self) -> u32 {
        self.id
    }
}

impl Keyed for GalleryItem {
    fn key(&self) -> u32 {
        self.id
    }
}

impl Keyed for ExperienceEntry {
    fn key(&self) -> u32 {
        self.id
    }
}

impl Keyed for EducationEntry {
    fn key(&self) -> u32 {
        self.id
    }
}

pub static HERO_STATS: [Stat; 4] = [
    Stat {
        value: "2024-2025",
        label: "Advance Level GCE Holder",
    },
    Stat {
        value: "Prefect",
        label: "Leadership Role",
    },
    Stat {
        value: "4+",
        label: "Interest Areas",
    },
    Stat {
        value: "Biology",
        label: "Academic Focus",
    },
];

pub static ABOUT_FACTS: [Stat; 4] = [
    Stat {
        value: "Advanced Levels 2024-2025",
        label: "Current Certificate",
    },
    Stat {
        value: "Ordinary Levels 2022-2023",
        label: "Previous",
    },
    Stat {
        value: "Prefect & Admin",
        label: "Leadership",
    },
    Stat {
        value: "Medicine & Health care",
        label: "Focus Area",
    },
];

pub static INTERESTS: [Level; 4] = [
    Level {
        glyph: Glyph::BookOpen,
        name: "Anatomy",
        percent: 90,
    },
    Level {
        glyph: Glyph::Target,
        name: "Biology",
        percent: 85,
    },
    Level {
        glyph: Glyph::Award,
        name: "Research",
        percent: 80,
    },
    Level {
        glyph: Glyph::Users,
        name: "Innovation",
        percent: 85,
    },
];

pub static SKILL_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        title: "Soft Skills",
        gradient: "from-blue-500 to-purple-600",
        skills: &[
            Level {
                glyph: Glyph::Users,
                name: "Leadership",
                percent: 76,
            },
            Level {
                glyph: Glyph::MessageCircle,
                name: "Communication",
                percent: 85,
            },
            Level {
                glyph: Glyph::Clock,
                name: "Time Management",
                percent: 70,
            },
            Level {
                glyph: Glyph::Target,
                name: "Problem Solving",
                percent: 83,
            },
        ],
    },
    SkillCategory {
        title: "Academic Skills",
        gradient: "from-green-500 to-teal-600",
        skills: &[
            Level {
                glyph: Glyph::BookOpen,
                name: "Biology",
                percent: 98,
            },
            Level {
                glyph: Glyph::Microscope,
                name: "Physics",
                percent: 76,
            },
            Level {
                glyph: Glyph::Calculator,
                name: "Mathematics",
                percent: 94,
            },
            Level {
                glyph: Glyph::Microscope,
                name: "Chemistry",
                percent: 74,
            },
            Level {
                glyph: Glyph::Microscope,
                name: "Computer Studies",
                percent: 76,
            },
            Level {
                glyph: Glyph::Globe,
                name: "Research",
                percent: 87,
            },
        ],
    },
    SkillCategory {
        title: "Technical Skills",
        gradient: "from-accent to-red-600",
        skills: &[
            Level {
                glyph: Glyph::Code,
                name: "Programming",
                percent: 13,
            },
            Level {
                glyph: Glyph::Database,
                name: "Design Analysis",
                percent: 70,
            },
            Level {
                glyph: Glyph::Palette,
                name: "Drawing",
                percent: 65,
            },
            Level {
                glyph: Glyph::Zap,
                name: "Innovation",
                percent: 80,
            },
        ],
    },
];

pub static EXTRA_SKILLS: [&str; 8] = [
    "Team Management",
    "Project Planning",
    "Critical Thinking",
    "Scientific Writing",
    "Data Visualization",
    "Public Speaking",
    "Mentoring",
    "Event Organization",
];

pub static EXPERIENCE: [ExperienceEntry; 3] = [
    ExperienceEntry {
        id: 1,
        role: "Student Prefect",
        organization: "St. Joseph's College Sasse",
        period: "2022 - 2023",
        location: "School Campus",
        kind: "Leadership Role",
        glyph: Glyph::Award,
        gradient: "from-blue-500 to-purple-600",
        description: "Led student initiatives and maintained discipline while serving as a bridge between students and administration.",
        achievements: &[
            "Coordinated school events with 500+ students",
            "Mentored junior students in academic and personal development",
            "Implemented peer support programs",
            "Maintained exemplary academic performance while fulfilling duties",
        ],
        skills: &["Leadership", "Communication", "Event Management", "Mentoring"],
    },
    ExperienceEntry {
        id: 2,
        role: "Student Administrator",
        organization: "British Isles International College",
        period: "2024 - Present",
        location: "College Campus",
        kind: "Administrative Role",
        glyph: Glyph::Users,
        gradient: "from-accent to-red-600",
        description: "Managing student affairs and supporting academic operations while pursuing Advanced Level studies.",
        achievements: &[
            "Streamlined student registration processes",
            "Organized academic support sessions",
            "Facilitated communication between departments",
            "Assisted in curriculum planning and student feedback collection",
        ],
        skills: &[
            "Administration",
            "Organization",
            "Student Support",
            "Process Improvement",
        ],
    },
    ExperienceEntry {
        id: 3,
        role: "Research Assistant (Voluntary)",
        organization: "Independent Study",
        period: "2023 - Present",
        location: "Remote/Library",
        kind: "Research Experience",
        glyph: Glyph::Briefcase,
        gradient: "from-green-500 to-teal-600",
        description: "Conducting independent research in biology and anatomy while developing scientific writing skills.",
        achievements: &[
            "Completed 3+ research projects on human anatomy",
            "Developed data collection and analysis skills",
            "Created scientific presentations for peer review",
            "Contributed to student research publications",
        ],
        skills: &[
            "Research",
            "Data Analysis",
            "Scientific Writing",
            "Critical Thinking",
        ],
    },
];

pub static EDUCATION: [EducationEntry; 2] = [
    EducationEntry {
        id: 1,
        institution: "British Isles International College",
        degree: "Advanced Level (A-Level)",
        period: "2024 - 2025",
        status: "Completed",
        glyph: Glyph::GraduationCap,
        gradient: "from-accent to-red-600",
        subjects: &["Biology", "Chemistry", "Physics", "Mathematics", "ICT"],
        achievements: &[
            "Successfully completed A-Level examinations",
            "Actively participated in student administration",
            "Maintained academic excellence while serving leadership roles",
        ],
        performance: "Passed with Merit",
    },
    EducationEntry {
        id: 2,
        institution: "St. Joseph's College Sasse",
        degree: "General Certificate of Education Ordinary Level (GCE O/L)",
        period: "2022 - 2023",
        status: "Completed",
        glyph: Glyph::Award,
        gradient: "from-blue-500 to-purple-600",
        subjects: &[
            "Economics",
            "Geography",
            "English",
            "French",
            "Religious Studies",
            "Mathematics",
            "Additional Mathematics",
            "Biology",
            "Human Biology",
            "Chemistry",
            "Physics",
        ],
        achievements: &[
            "Successfully completed O-Level examinations",
            "Served as Student Prefect during final year",
            "Demonstrated leadership and academic balance",
            "Active participation in extracurricular activities",
        ],
        performance: "Passed with Merit",
    },
];

pub static EDUCATION_GOALS: [&str; 4] = [
    "University Applications",
    "Medical School Prep",
    "Research Experience",
    "Academic Excellence",
];

pub static PROJECT_CATEGORIES: [&str; 5] =
    ["All", "Leadership", "Research", "Administrative", "Education"];

pub static PROJECTS: [Project; 4] = [
    Project {
        id: 1,
        title: "Student Leadership Initiative",
        category: "Leadership",
        description: "Implemented a comprehensive student support system during my tenure as Prefect.",
        long_description: "Developed and executed a peer mentorship program that helped over 100 junior students adapt to school life. Created structured study groups and organized academic support sessions that improved overall class performance by 15%.",
        image: "https://images.pexels.com/photos/1438072/pexels-photo-1438072.jpeg?auto=compress&cs=tinysrgb&w=600",
        tags: &["Leadership", "Event Management", "Peer Support"],
        date: "2022-2023",
        status: "Completed",
        impact: "100+ students supported",
        achievements: &[
            "Reduced student dropout rate by 20%",
            "Improved academic collaboration",
            "Enhanced school community spirit",
            "Received recognition from school administration",
        ],
    },
    Project {
        id: 2,
        title: "Biology Research Project",
        category: "Research",
        description: "Independent research on human anatomy systems and their interconnections.",
        long_description: "Conducted comprehensive research on the cardiovascular and nervous systems, creating detailed anatomical diagrams and presentations. Collaborated with science teachers to develop educational materials for younger students.",
        image: "https://images.pexels.com/photos/256262/pexels-photo-256262.jpeg?auto=compress&cs=tinysrgb&w=600",
        tags: &["Research", "Data Analysis", "Scientific Writing"],
        date: "2023-Present",
        status: "Ongoing",
        impact: "Educational resource creation",
        achievements: &[
            "Produced 50+ pages of research documentation",
            "Created visual learning aids for students",
            "Presented findings to peer groups",
            "Developed scientific methodology skills",
        ],
    },
    Project {
        id: 3,
        title: "Student Administration System",
        category: "Administrative",
        description: "Streamlined student registration and academic support processes.",
        long_description: "As Student Administrator, I digitized and improved the student registration process, reducing processing time by 40%. Implemented feedback systems and organized academic support initiatives.",
        image: "https://images.pexels.com/photos/3184306/pexels-photo-3184306.jpeg?auto=compress&cs=tinysrgb&w=600",
        tags: &["Process Improvement", "Student Support", "Communication"],
        date: "2024-Present",
        status: "Completed",
        impact: "40% efficiency improvement",
        achievements: &[
            "Reduced registration time significantly",
            "Improved student satisfaction scores",
            "Enhanced departmental communication",
            "Created standardized procedures",
        ],
    },
    Project {
        id: 4,
        title: "Academic Excellence Program",
        category: "Education",
        description: "Developed study methodologies and academic support resources for peers.",
        long_description: "Created comprehensive study guides and tutoring programs for fellow students struggling with science subjects. Organized group study sessions and exam preparation workshops.",
        image: "https://images.pexels.com/photos/256401/pexels-photo-256401.jpeg?auto=compress&cs=tinysrgb&w=600",
        tags: &["Teaching", "Curriculum Development", "Peer Support"],
        date: "2023-2024",
        status: "Completed",
        impact: "75+ students helped",
        achievements: &[
            "Improved peer academic performance",
            "Developed effective study materials",
            "Enhanced collaborative learning",
            "Recognition for educational contribution",
        ],
    },
];

pub static GALLERY_CATEGORIES: [&str; 6] = [
    "All",
    "Leadership",
    "Academic",
    "Research",
    "Administration",
    "Achievement",
];

pub static GALLERY: [GalleryItem; 8] = [
    GalleryItem {
        id: 1,
        title: "Leadership Workshop",
        category: "Leadership",
        image: "https://images.pexels.com/photos/1438072/pexels-photo-1438072.jpeg?auto=compress&cs=tinysrgb&w=600",
        date: "2023",
        description: "Leading a student workshop on effective leadership techniques and team collaboration.",
    },
    GalleryItem {
        id: 2,
        title: "Biology Laboratory",
        category: "Academic",
        image: "https://images.pexels.com/photos/256262/pexels-photo-256262.jpeg?auto=compress&cs=tinysrgb&w=600",
        date: "2024",
        description: "Conducting advanced biology experiments and research in the college laboratory.",
    },
    GalleryItem {
        id: 3,
        title: "Student Council Meeting",
        category: "Administration",
        image: "https://images.pexels.com/photos/3184306/pexels-photo-3184306.jpeg?auto=compress&cs=tinysrgb&w=600",
        date: "2024",
        description: "Organizing and facilitating important student council discussions and decisions.",
    },
    GalleryItem {
        id: 4,
        title: "Research Presentation",
        category: "Research",
        image: "https://images.pexels.com/photos/1181395/pexels-photo-1181395.jpeg?auto=compress&cs=tinysrgb&w=600",
        date: "2023",
        description: "Presenting research findings on human anatomy to faculty and peers.",
    },
    GalleryItem {
        id: 5,
        title: "Peer Tutoring Session",
        category: "Academic",
        image: "https://images.pexels.com/photos/5428832/pexels-photo-5428832.jpeg?auto=compress&cs=tinysrgb&w=600",
        date: "2023",
        description: "Conducting peer tutoring sessions to help fellow students with challenging subjects.",
    },
    GalleryItem {
        id: 6,
        title: "Science Exhibition",
        category: "Research",
        image: "https://images.pexels.com/photos/2280549/pexels-photo-2280549.jpeg?auto=compress&cs=tinysrgb&w=600",
        date: "2024",
        description: "Showcasing scientific projects and research at the annual college science exhibition.",
    },
    GalleryItem {
        id: 7,
        title: "Student Orientation",
        category: "Leadership",
        image: "https://images.pexels.com/photos/1595391/pexels-photo-1595391.jpeg?auto=compress&cs=tinysrgb&w=600",
        date: "2024",
        description: "Welcoming and orienting new students as part of the student administration team.",
    },
    GalleryItem {
        id: 8,
        title: "Award Ceremony",
        category: "Achievement",
        image: "https://images.pexels.com/photos/1205651/pexels-photo-1205651.jpeg?auto=compress&cs=tinysrgb&w=600",
        date: "2023",
        description: "Recognition ceremony for academic excellence and leadership contributions.",
    },
];

pub static PARALLAX_STATS: [Stat; 4] = [
    Stat {
        value: "2+",
        label: "Years Leadership",
    },
    Stat {
        value: "100+",
        label: "Students Mentored",
    },
    Stat {
        value: "4+",
        label: "Research Projects",
    },
    Stat {
        value: "95%",
        label: "Academic Excellence",
    },
];

pub static CONTACT_CHANNELS: [Channel; 3] = [
    Channel {
        glyph: Glyph::Mail,
        label: "Email",
        value: EMAIL,
        href: "mailto:ayukikome44@gmail.com",
        gradient: "from-blue-500 to-blue-600",
    },
    Channel {
        glyph: Glyph::Phone,
        label: "WhatsApp",
        value: "+237653193185",
        href: "https://wa.me/+237653193185",
        gradient: "from-green-500 to-green-600",
    },
    Channel {
        glyph: Glyph::MapPin,
        label: "Location",
        value: LOCATION,
        href: "#",
        gradient: "from-accent to-red-600",
    },
];

pub static SOCIAL_CHANNELS: [Channel; 1] = [Channel {
    glyph: Glyph::Instagram,
    label: "Instagram",
    value: "@itsmaybevic",
    href: "https://instagram.com/itsmaybevic",
    gradient: "from-accent to-red-600",
}];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn unique_keys<T: Keyed>(items: &[T]) -> bool {
        let keys = items.iter().map(Keyed::key).collect::<HashSet<_>>();
        keys.len() == items.len()
    }

    #[test]
    fn test_keys_unique_per_list() {
        assert!(unique_keys(&EXPERIENCE));
        assert!(unique_keys(&EDUCATION));
        assert!(unique_keys(&PROJECTS));
        assert!(unique_keys(&GALLERY));
    }

    #[test]
    fn test_every_category_has_a_tab() {
        for p in PROJECTS.iter() {
            assert!(PROJECT_CATEGORIES.contains(&p.category), "{}", p.title);
        }
        for g in GALLERY.iter() {
            assert!(GALLERY_CATEGORIES.contains(&g.category), "{}", g.title);
        }
        assert_eq!(PROJECT_CATEGORIES[0], "All");
        assert_eq!(GALLERY_CATEGORIES[0], "All");
    }

    #[test]
    fn test_project_tag_preview() {
        let project = &PROJECTS[0];
        assert_eq!(project.preview_tags().len(), 3);
        assert_eq!(project.hidden_tags(), 0);
    }

    #[test]
    fn test_levels_are_percentages() {
        let all = SKILL_CATEGORIES
            .iter()
            .flat_map(|c| c.skills.iter())
            .chain(INTERESTS.iter());
        for level in all {
            assert!(level.percent <= 100, "{}", level.name);
        }
    }

    #[test]
    fn test_only_http_channels_are_external() {
        let external = CONTACT_CHANNELS
            .iter()
            .filter(|c| c.is_external())
            .map(|c| c.label)
            .collect::<Vec<_>>();
        assert_eq!(external, vec!["WhatsApp"]);
    }

    #[test]
    fn test_location_is_not_linkable() {
        let linkable = CONTACT_CHANNELS
            .iter()
            .filter(|c| c.is_linkable())
            .map(|c| c.label)
            .collect::<Vec<_>>();
        assert_eq!(linkable, vec!["Email", "WhatsApp"]);
    }
}
