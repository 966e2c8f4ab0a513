use chrono::{DateTime, Datelike, Utc};

use crate::nav::NavSection;

pub const OWNER: &str = "Athnan Janzeer";
pub const MONOGRAM: &str = "AJ";

pub static NAV_SECTIONS: &[NavSection] = &[
    NavSection {
        id: "home",
        label: "Home",
    },
    NavSection {
        id: "about",
        label: "About",
    },
    NavSection {
        id: "skills",
        label: "Skills",
    },
    NavSection {
        id: "education",
        label: "Education",
    },
    NavSection {
        id: "projects",
        label: "Projects",
    },
    NavSection {
        id: "contact",
        label: "Contact",
    },
];

pub fn nav_icon(id: &str) -> &'static str {
    match id {
        "home" => "🏠",
        "about" => "👤",
        "skills" => "💻",
        "education" => "🎓",
        "projects" => "💼",
        "contact" => "✉️",
        _ => "•",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// A devicon font class.
    Devicon(&'static str),
    Emoji(&'static str),
}

pub const ROLES: &[&str] = &["Software Engineer", "Project Manager", "UI/UX Designer"];

pub struct Stat {
    pub label: &'static str,
    pub value: u32,
    pub icon: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat {
        label: "Years Experience",
        value: 1,
        icon: "📅",
    },
    Stat {
        label: "Projects Delivered",
        value: 4,
        icon: "💼",
    },
    Stat {
        label: "Awards Won",
        value: 1,
        icon: "🏆",
    },
];

pub const COMPETENCIES: &[&str] = &[
    "Team Coordination",
    "Client Communication",
    "Critical Thinking",
    "Task Prioritization",
    "Time Management",
    "Adaptability",
    "Leadership",
];

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

pub struct SkillGroup {
    pub label: &'static str,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        label: "Frontend",
        icon: "💻",
        skills: &[
            Skill { name: "React", level: 70 },
            Skill { name: "Type-Script", level: 40 },
            Skill { name: "HTML", level: 90 },
            Skill { name: "Tailwind CSS", level: 60 },
            Skill { name: "Bootstrap CSS", level: 60 },
        ],
    },
    SkillGroup {
        label: "Backend",
        icon: "🗄️",
        skills: &[
            Skill { name: "Node.js", level: 40 },
            Skill { name: "Python", level: 50 },
            Skill { name: "PHP", level: 60 },
            Skill { name: "Laravel", level: 60 },
        ],
    },
    SkillGroup {
        label: "Tools",
        icon: "🔧",
        skills: &[
            Skill { name: "Git", level: 75 },
            Skill { name: "Docker", level: 40 },
            Skill { name: "Firebase", level: 50 },
            Skill { name: "Jira", level: 70 },
            Skill { name: "Linux", level: 70 },
        ],
    },
    SkillGroup {
        label: "Design",
        icon: "🎨",
        skills: &[
            Skill { name: "Figma", level: 90 },
            Skill { name: "UI/UX Design", level: 88 },
            Skill { name: "Prototyping", level: 85 },
            Skill { name: "Design Systems", level: 82 },
            Skill { name: "User Research", level: 75 },
        ],
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub image: &'static str,
    pub code_url: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-Farmers Platform (AI-Powered)",
        description: "3rd place-winning hackathon project: an LLM-based paddy price-fixing platform that enables mill owners and farmers to trade directly without third parties, ensuring fair profit for both.",
        technologies: &["React", "Firebase", "Python", "Node.js", "Tailwind CSS"],
        image: "/images/e-farming.svg",
        code_url: "https://github.com/Ayyash-Mumthaas/E-Farmers.git",
    },
    Project {
        title: "Dream Wear Clothing E-Commerce Platform",
        description: "Python-based AI chatbot integrated into a real-time full-stack e-commerce application.",
        technologies: &["HTML", "PHP", "MySQL", "Python", "Tailwind CSS"],
        image: "/images/dream-wear.svg",
        code_url: "https://github.com/janzeerathnan/Dream_wear.git",
    },
    Project {
        title: "CRUD Application MERN-Stack",
        description: "Build CRUD Application using MERN-stack technology.",
        technologies: &["Node.js", "Express.js", "React.js", "MongoDB", "Tailwind CSS"],
        image: "/images/crud.svg",
        code_url: "https://github.com/janzeerathnan/MERN-Stack.git",
    },
    Project {
        title: "HR Management System Full-Stack",
        description: "Hands-on experience building a comprehensive HR Management System integrating biometric attendance and leave management functionalities.",
        technologies: &["React Native", "Laravel", "MySQL", "Material CSS"],
        image: "/images/hrms.svg",
        code_url: "https://github.com/janzeerathnan/HR-System_old.git",
    },
    Project {
        title: "Online Timer App",
        description: "Online timer application designed to help users manage their time effectively with features like start, pause, and reset.",
        technologies: &["React Native", "Tailwind CSS"],
        image: "/images/timer.svg",
        code_url: "https://github.com/janzeerathnan/ICST_Timer.git",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pursuing,
    Completed,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Pursuing => "Currently Pursuing",
            Status::Completed => "Completed",
        }
    }
}

pub struct EducationItem {
    pub title: &'static str,
    pub institution: &'static str,
    pub status: Status,
    pub icon: &'static str,
}

pub const EDUCATION: &[EducationItem] = &[
    EducationItem {
        title: "BA in Applied Information Technology",
        institution: "Sri Lanka Institute of Technology Campus (SLTC)",
        status: Status::Pursuing,
        icon: "🎓",
    },
    EducationItem {
        title: "Management Course",
        institution: "Sri Lankan Youth Center",
        status: Status::Completed,
        icon: "📖",
    },
    EducationItem {
        title: "IT Certificate Course",
        institution: "Open University, Vavuniya",
        status: Status::Completed,
        icon: "🏅",
    },
];

pub const ACHIEVEMENTS: &[&str] = &[
    "3rd Place – PovertyHack 2025 Hackathon",
    "Organized No-Code Low-Code Hackathon at ICST University Park",
];

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/janzeerathnan",
        icon: Icon::Devicon("devicon-github-plain"),
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/janzeerathnan",
        icon: Icon::Devicon("devicon-linkedin-plain"),
    },
    SocialLink {
        label: "Email",
        href: "mailto:adnanrao2002@gmail.com",
        icon: Icon::Emoji("✉️"),
    },
];

pub const RESUME_PATH: &str = "/Athnan_Janzeer_Resume.pdf";
pub const PORTRAIT_PATH: &str = "/images/athnan.svg";

/// Year shown in the footer, taken from the build stamp.
pub fn copyright_year() -> i32 {
    year_of(env!("BUILD_TIME")).unwrap_or_else(|| Utc::now().year())
}

fn year_of(stamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(stamp)
        .ok()
        .map(|build_time| build_time.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_sections_are_unique() {
        let mut ids = NAV_SECTIONS.iter().map(|s| s.id).collect::<Vec<_>>();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), NAV_SECTIONS.len());
        assert_eq!(NAV_SECTIONS[0].id, "home");
    }

    #[test]
    fn test_every_section_has_an_icon() {
        assert!(NAV_SECTIONS.iter().all(|s| nav_icon(s.id) != "•"));
    }

    #[test]
    fn test_year_of_build_stamp() {
        assert_eq!(year_of("2025-11-03T09:15:00+00:00"), Some(2025));
        assert_eq!(year_of("not a date"), None);
        assert!(copyright_year() >= 2025);
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        assert!(SKILL_GROUPS
            .iter()
            .flat_map(|g| g.skills.iter())
            .all(|s| s.level <= 100));
    }

    #[test]
    fn test_linked_assets_are_served() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        let assets = PROJECTS
            .iter()
            .map(|p| p.image)
            .chain([PORTRAIT_PATH, RESUME_PATH]);
        for asset in assets {
            let path = public.join(asset.trim_start_matches('/'));
            assert!(path.is_file(), "missing {}", path.display());
        }
    }
}
