//! Static page content.
//!
//! Every record here is a process-lifetime constant; nothing mutates them.

/// An sRGB colour.
pub type Rgb = (u8, u8, u8);

/// Two-stop horizontal gradient used as a style token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tint {
    pub from: Rgb,
    pub to: Rgb,
}

const fn tint(from: Rgb, to: Rgb) -> Tint {
    Tint { from, to }
}

// ── palette tokens ─────────────────────────────────────────────
const BLUE_400: Rgb = (96, 165, 250);
const BLUE_500: Rgb = (59, 130, 246);
const BLUE_600: Rgb = (37, 99, 235);
const CYAN_500: Rgb = (6, 182, 212);
const TEAL_500: Rgb = (20, 184, 166);
const GRAY_400: Rgb = (156, 163, 175);
const GRAY_600: Rgb = (75, 85, 99);
const PINK_500: Rgb = (236, 72, 153);
const ROSE_500: Rgb = (244, 63, 94);
const GREEN_400: Rgb = (74, 222, 128);
const GREEN_500: Rgb = (34, 197, 94);
const GREEN_600: Rgb = (22, 163, 74);
const EMERALD_500: Rgb = (16, 185, 129);
const YELLOW_500: Rgb = (234, 179, 8);
const ORANGE_500: Rgb = (249, 115, 22);
const AMBER_500: Rgb = (245, 158, 11);
const INDIGO_500: Rgb = (99, 102, 241);
const RED_500: Rgb = (239, 68, 68);
const PURPLE_500: Rgb = (168, 85, 247);
const PURPLE_600: Rgb = (147, 51, 234);

// ───────────────────────────────────────── hero ──────────────

pub const HERO_HEADLINE: (&str, &str, &str) = ("We build ", "immersive worlds", " that inspire");

pub const HERO_TAGLINE: &str = "Pioneering digital experiences that fuse art with technology \
to transform brands and create meaningful connections.";

pub const HERO_BUTTON: &str = "PORTFOLIO";

pub struct Stat {
    pub label: &'static str,
    pub value: u32,
}

pub static HERO_STATS: &[Stat] = &[
    Stat {
        label: "Years of Innovation",
        value: 6,
    },
    Stat {
        label: "Project Completed",
        value: 16,
    },
];

// ───────────────────────────────────────── about ─────────────

pub const ABOUT_MONOGRAM: &str = "JD";
pub const ABOUT_HEADLINE: &str = "Passionate Full Stack Developer";

pub static ABOUT_PARAGRAPHS: &[&str] = &[
    "With over 5 years of experience in web development, I specialize in creating \
     modern, responsive applications using React, Node.js, and cloud technologies. \
     I'm passionate about writing clean, efficient code and staying up-to-date \
     with the latest industry trends.",
    "When I'm not coding, you'll find me exploring new technologies, contributing \
     to open-source projects, or sharing knowledge with the developer community.",
];

pub const ABOUT_BUTTON: &str = "Download Resume";

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static FEATURES: &[Feature] = &[
    Feature {
        icon: "</>",
        title: "Clean Code",
        description: "Writing maintainable, scalable, and efficient code following best practices.",
    },
    Feature {
        icon: "◐",
        title: "UI/UX Design",
        description: "Creating beautiful, intuitive interfaces that provide excellent user experiences.",
    },
    Feature {
        icon: "⚡",
        title: "Performance",
        description: "Optimizing applications for speed, accessibility, and cross-platform compatibility.",
    },
];

// ───────────────────────────────────────── projects ──────────

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

pub static PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Platform",
        description: "A modern, full-stack e-commerce solution built with React, Node.js, and PostgreSQL.",
        technologies: &["React", "Node.js", "PostgreSQL", "Stripe", "AWS"],
    },
    Project {
        title: "Task Management App",
        description: "A collaborative task management application with real-time updates.",
        technologies: &["Next.js", "TypeScript", "Prisma", "WebSockets"],
    },
    Project {
        title: "Analytics Dashboard",
        description: "A comprehensive analytics dashboard with interactive charts and real-time data.",
        technologies: &["React", "D3.js", "Python", "MongoDB", "Docker"],
    },
    Project {
        title: "Social Media Platform",
        description: "A social media platform with real-time messaging, photo sharing, and advanced privacy controls.",
        technologies: &["Vue.js", "Express", "MongoDB", "Socket.io", "Redis"],
    },
];

// ───────────────────────────────────────── skills ────────────

pub const SKILLS_TITLE: &str = "Technical Skills";
pub const SKILLS_TAGLINE: &str = "A comprehensive toolkit of modern technologies and frameworks";

pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent.
    pub level: u8,
    pub tint: Tint,
}

pub struct SkillGroup {
    pub title: &'static str,
    pub accent: Rgb,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, level: u8, tint: Tint) -> Skill {
    Skill { name, level, tint }
}

pub static FRONTEND: SkillGroup = SkillGroup {
    title: "Frontend",
    accent: BLUE_400,
    skills: &[
        skill("React", 95, tint(BLUE_500, CYAN_500)),
        skill("TypeScript", 90, tint(BLUE_600, BLUE_400)),
        skill("Next.js", 88, tint(GRAY_600, GRAY_400)),
        skill("Tailwind CSS", 92, tint(CYAN_500, TEAL_500)),
        skill("Framer Motion", 85, tint(PINK_500, ROSE_500)),
    ],
};

pub static BACKEND: SkillGroup = SkillGroup {
    title: "Backend",
    accent: GREEN_400,
    skills: &[
        skill("Node.js", 88, tint(GREEN_500, EMERALD_500)),
        skill("Python", 82, tint(YELLOW_500, ORANGE_500)),
        skill("PostgreSQL", 85, tint(BLUE_500, INDIGO_500)),
        skill("MongoDB", 80, tint(GREEN_600, GREEN_400)),
        skill("AWS", 78, tint(ORANGE_500, AMBER_500)),
    ],
};

pub struct Tool {
    pub name: &'static str,
    pub icon: &'static str,
    pub tint: Tint,
}

pub const TOOLS_TITLE: &str = "Tools & DevOps";
pub const TOOLS_ACCENT: Rgb = (192, 132, 252);

pub static TOOLS: &[Tool] = &[
    Tool {
        name: "Git",
        icon: "🔧",
        tint: tint(RED_500, PINK_500),
    },
    Tool {
        name: "Docker",
        icon: "🐳",
        tint: tint(BLUE_500, BLUE_600),
    },
    Tool {
        name: "VS Code",
        icon: "💻",
        tint: tint(BLUE_600, PURPLE_600),
    },
    Tool {
        name: "Figma",
        icon: "🎨",
        tint: tint(PURPLE_500, PINK_500),
    },
    Tool {
        name: "Postman",
        icon: "📡",
        tint: tint(ORANGE_500, RED_500),
    },
];

pub struct Highlight {
    pub number: &'static str,
    pub label: &'static str,
}

pub static SKILL_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        number: "50+",
        label: "Projects Completed",
    },
    Highlight {
        number: "5+",
        label: "Years Experience",
    },
    Highlight {
        number: "20+",
        label: "Technologies",
    },
    Highlight {
        number: "99%",
        label: "Client Satisfaction",
    },
];

/// Targets for the hero counters, in display order.
pub fn hero_counter_targets() -> Vec<u32> {
    HERO_STATS.iter().map(|s| s.value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_levels_are_percentages() {
        for group in [&FRONTEND, &BACKEND] {
            assert_eq!(group.skills.len(), 5);
            assert!(group.skills.iter().all(|s| s.level <= 100));
        }
    }

    #[test]
    fn hero_targets_match_stats() {
        assert_eq!(hero_counter_targets(), vec![6, 16]);
    }
}
