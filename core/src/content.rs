#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub tagline_phrases: &'static [&'static str],
    pub blurb: &'static str,
    pub about_subtitle: &'static str,
    pub about: &'static [&'static str],
    pub quote: &'static str,
    pub quick_profile: &'static [(&'static str, &'static str)],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: i64,
    pub suffix: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillLevel {
    pub name: &'static str,
    pub level: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub chips: &'static [&'static str],
    pub levels: &'static [SkillLevel],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub stack: &'static [&'static str],
    pub github: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub summary: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certification {
    pub title: &'static str,
    pub note: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    Email,
    Github,
    Linkedin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub kind: LinkKind,
    pub label: &'static str,
    pub href: &'static str,
}

impl ContactLink {
    pub fn opens_new_tab(&self) -> bool {
        self.kind != LinkKind::Email
    }
}

pub const RESUME_PATH: &str = "/mohan_appikatla_resume.pdf";
pub const DETAILS_PLACEHOLDER: &str = "Details coming soon!";
pub const SKILLS_SUBTITLE: &str =
    "Azure-blue themed, grouped by capability with animated proficiency bars.";
pub const PROJECTS_SUBTITLE: &str = "Minimalist text cards with quick links.";
pub const CONTACT_SUBTITLE: &str = "Have an opportunity or want to say hi? Drop a note.";

pub const PROFILE: Profile = Profile {
    name: "Mohan Appikatla",
    tagline_phrases: &[
        "Designing scalable experiences in the Azure Cloud.",
        "Turning infrastructure into innovation.",
    ],
    blurb: "Cloud Enthusiast | Azure Cloud Intern | Aspiring Cloud Engineer. Focused on building \
            scalable, secure, and cost-efficient cloud solutions that bridge innovation with \
            reliability.",
    about_subtitle: "A driven and analytical B.Tech graduate passionate about cloud \
                     infrastructure, automation, and DevOps.",
    about: &[
        "Currently working as an Azure Cloud Intern at PCS Solution, Pune \u{2014} gaining \
         hands-on experience deploying, managing, and optimizing Azure environments.",
        "I focus on building scalable, secure, and cost-efficient cloud solutions. My goal is to \
         bridge innovation with reliability through strong fundamentals and practical \
         implementation.",
    ],
    quote: "\u{201c}I believe great cloud engineers build reliability as much as scalability.\u{201d}",
    quick_profile: &[
        ("Role", "Azure Cloud Intern"),
        ("Focus", "Cloud, DevOps"),
        ("Location", "Pune, India"),
        ("Open to", "Cloud/DevOps Roles"),
    ],
};

pub const STATS: &[Stat] = &[
    Stat { label: "Years of Learning", value: 4, suffix: "" },
    Stat { label: "Projects", value: 12, suffix: "" },
    Stat { label: "Technologies Used", value: 18, suffix: "" },
    Stat { label: "Certifications", value: 2, suffix: "" },
];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Cloud",
        chips: &["Azure", "Azure DevOps", "ARM Templates", "Blob Storage", "VM Management"],
        levels: &[
            SkillLevel { name: "Azure", level: 85 },
            SkillLevel { name: "Azure DevOps", level: 78 },
            SkillLevel { name: "ARM Templates", level: 70 },
        ],
    },
    SkillGroup {
        title: "Programming",
        chips: &["Python", "SQL", "JavaScript"],
        levels: &[
            SkillLevel { name: "Python", level: 80 },
            SkillLevel { name: "SQL", level: 72 },
            SkillLevel { name: "JavaScript", level: 68 },
        ],
    },
    SkillGroup {
        title: "Tools",
        chips: &["Git", "Docker", "Linux", "VS Code"],
        levels: &[
            SkillLevel { name: "Git", level: 82 },
            SkillLevel { name: "Docker", level: 70 },
            SkillLevel { name: "Linux", level: 76 },
        ],
    },
    SkillGroup {
        title: "Concepts",
        chips: &["Networking", "CI/CD", "Cloud Security", "Automation"],
        levels: &[
            SkillLevel { name: "Networking", level: 74 },
            SkillLevel { name: "CI/CD", level: 72 },
            SkillLevel { name: "Cloud Security", level: 66 },
        ],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Smart Attendance System using Face Recognition",
        description: "Automated attendance using real-time facial detection and recognition.",
        stack: &["Python", "OpenCV", "Flask"],
        github: "#",
    },
    Project {
        title: "AI-Driven Retail Inventory Management",
        description: "Computer vision powered stock tracking and demand prediction.",
        stack: &["Computer Vision", "Data Science"],
        github: "#",
    },
    Project {
        title: "Movie Recommendation using BERT",
        description: "Semantic recommendations using transformer embeddings.",
        stack: &["NLP", "Deep Learning"],
        github: "#",
    },
    Project {
        title: "GM Cart E-Commerce Website",
        description: "Full-stack e-commerce platform with admin dashboard.",
        stack: &["Django", "SQL", "Bootstrap"],
        github: "#",
    },
];

pub const EXPERIENCE: &[Experience] = &[Experience {
    role: "Azure Cloud Intern \u{2014} PCS Solution, Pune",
    period: "June 2025 \u{2013} Present",
    highlights: &[
        "Managing and deploying Azure services and virtual environments.",
        "Working with CI/CD pipelines and monitoring tools.",
        "Learning to automate infrastructure provisioning and scaling.",
    ],
}];

pub const EDUCATION: &[Education] = &[Education {
    degree: "Bachelor of Technology (B.Tech), Computer Science",
    summary: "Strong foundation in data structures, networking, and cloud computing.",
}];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "Microsoft Certified: Azure Fundamentals (AZ-900)",
        note: None,
    },
    Certification {
        title: "Microsoft Certified: Azure Administrator (AZ-104)",
        note: Some("If applicable"),
    },
];

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        kind: LinkKind::Email,
        label: "Email",
        href: "mailto:mohan.appikatla@example.com",
    },
    ContactLink {
        kind: LinkKind::Github,
        label: "GitHub",
        href: "https://github.com/",
    },
    ContactLink {
        kind: LinkKind::Linkedin,
        label: "LinkedIn",
        href: "https://www.linkedin.com/",
    },
];

pub fn project_by_title(title: &str) -> Option<&'static Project> {
    let trimmed = title.trim();
    PROJECTS
        .iter()
        .find(|project| project.title.eq_ignore_ascii_case(trimmed))
}

pub fn skill_group_by_title(title: &str) -> Option<&'static SkillGroup> {
    let trimmed = title.trim();
    SKILL_GROUPS
        .iter()
        .find(|group| group.title.eq_ignore_ascii_case(trimmed))
}

pub fn contact_link(kind: LinkKind) -> Option<&'static ContactLink> {
    CONTACT_LINKS.iter().find(|link| link.kind == kind)
}

pub fn footer_line(year: u32) -> String {
    format!("\u{a9} {year} {} \u{2014} Crafted with care.", PROFILE.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_levels_are_percentages() {
        for group in SKILL_GROUPS {
            assert!(!group.levels.is_empty(), "{} has no bars", group.title);
            for skill in group.levels {
                assert!(skill.level <= 100, "{} over 100", skill.name);
            }
        }
    }

    #[test]
    fn lookups_ignore_case() {
        assert!(skill_group_by_title("tools").is_some());
        let project = project_by_title(" movie recommendation using bert ").unwrap();
        assert_eq!(project.stack, ["NLP", "Deep Learning"]);
        assert!(project_by_title("Unknown").is_none());
    }

    #[test]
    fn only_email_stays_in_tab() {
        let email = contact_link(LinkKind::Email).unwrap();
        assert!(!email.opens_new_tab());
        assert!(email.href.starts_with("mailto:"));
        assert!(contact_link(LinkKind::Github).unwrap().opens_new_tab());
    }

    #[test]
    fn stats_and_typing_have_content() {
        assert!(!PROFILE.tagline_phrases.is_empty());
        assert_eq!(STATS.iter().map(|stat| stat.value).sum::<i64>(), 36);
    }

    #[test]
    fn footer_includes_year_and_name() {
        assert_eq!(
            footer_line(2026),
            "\u{a9} 2026 Mohan Appikatla \u{2014} Crafted with care."
        );
    }
}
