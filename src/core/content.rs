//! Compiled-in portfolio content
//!
//! Everything rendered on the page comes from the constants in this module.

use serde_json::{Value, json};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    /// Prompt lines shown in the intro block
    pub intro: &'static [&'static str],
    pub location: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    Email,
    Phone,
    GitHub,
    LinkedIn,
}

/// Outbound link; targets are static and never validated at runtime
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub kind: LinkKind,
    pub label: &'static str,
    /// Address, number or URL without scheme prefix for mail and phone
    pub target: &'static str,
}

impl ContactLink {
    pub fn href(&self) -> String {
        match self.kind {
            LinkKind::Email => format!("mailto:{}", self.target),
            LinkKind::Phone => {
                let digits: String = self
                    .target
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '+')
                    .collect();
                format!("tel:{}", digits)
            }
            LinkKind::GitHub | LinkKind::LinkedIn => self.target.to_string(),
        }
    }

    /// Social profiles open in a new tab
    pub fn is_external(&self) -> bool {
        matches!(self.kind, LinkKind::GitHub | LinkKind::LinkedIn)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EducationEntry {
    pub institution: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub period: &'static str,
    pub tags: &'static [&'static str],
    pub repository: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub year: u16,
}

pub const PROFILE: Profile = Profile {
    name: "Mohammad Zaieem Khan",
    headline: "Full Stack Developer & Web3 Enthusiast",
    intro: &[
        "Full Stack Developer",
        "Passionate about creating innovative solutions",
        "Experienced in modern web technologies",
        "Exploring decentralized systems and smart contracts",
    ],
    location: "India",
};

pub const CONTACTS: &[ContactLink] = &[
    ContactLink {
        kind: LinkKind::Email,
        label: "Email",
        target: "hello@example.com",
    },
    ContactLink {
        kind: LinkKind::Phone,
        label: "Phone",
        target: "+1 (555) 010-0199",
    },
    ContactLink {
        kind: LinkKind::GitHub,
        label: "GitHub",
        target: "https://github.com/yourusername",
    },
    ContactLink {
        kind: LinkKind::LinkedIn,
        label: "LinkedIn",
        target: "https://linkedin.com/in/yourusername",
    },
];

pub const EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        institution: "University Name",
        degree: "B.Tech, Computer Science and Engineering",
        period: "2021 - 2025",
        highlights: &[
            "Data structures, operating systems and distributed computing",
            "Final-year project on decentralized identity",
        ],
    },
    EducationEntry {
        institution: "Senior Secondary School",
        degree: "Higher Secondary Certificate, Science",
        period: "2019 - 2021",
        highlights: &["Mathematics and computer science stream"],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Decentralized Voting dApp",
        description: "Ballot contracts with a React front end that verifies every vote on-chain.",
        period: "2024",
        tags: &["Solidity", "React", "Ethers.js"],
        repository: Some("https://github.com/yourusername/voting-dapp"),
    },
    Project {
        title: "Realtime Chat Service",
        description: "WebSocket chat with rooms, presence and message history.",
        period: "2023",
        tags: &["Node.js", "Socket.IO", "MongoDB"],
        repository: Some("https://github.com/yourusername/realtime-chat"),
    },
    Project {
        title: "Inventory Dashboard",
        description: "Stock tracking dashboard with role-based access and CSV export.",
        period: "2023",
        tags: &["C#", "ASP.NET", "SQL"],
        repository: None,
    },
    Project {
        title: "Portfolio Terminal",
        description: "This site: a cyber-themed portfolio with staged entrance animations.",
        period: "2024",
        tags: &["Rust", "Leptos", "WebAssembly"],
        repository: Some("https://github.com/yourusername/cyberfolio"),
    },
];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        category: "Languages",
        skills: &["JavaScript", "TypeScript", "Python", "C#", "Solidity", "SQL"],
    },
    SkillGroup {
        category: "Frameworks",
        skills: &["React", "Node.js", "Express", "ASP.NET"],
    },
    SkillGroup {
        category: "Tooling",
        skills: &["Git", "Docker", "Linux", "PostgreSQL"],
    },
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "Blockchain Basics",
        issuer: "Coursera",
        year: 2023,
    },
    Certification {
        title: "Responsive Web Design",
        issuer: "freeCodeCamp",
        year: 2022,
    },
];

/// schema.org `Person` record for the page's JSON-LD block
pub fn person_json_ld() -> Value {
    let same_as: Vec<&str> = CONTACTS
        .iter()
        .filter(|link| link.is_external())
        .map(|link| link.target)
        .collect();

    let mut person = json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": PROFILE.name,
        "jobTitle": PROFILE.headline,
        "address": { "@type": "PostalAddress", "addressCountry": PROFILE.location },
        "sameAs": same_as,
        "alumniOf": EDUCATION
            .iter()
            .map(|entry| json!({ "@type": "EducationalOrganization", "name": entry.institution }))
            .collect::<Vec<_>>(),
        "knowsAbout": SKILL_GROUPS
            .iter()
            .flat_map(|group| group.skills.iter().copied())
            .collect::<Vec<_>>(),
    });

    for link in CONTACTS {
        match link.kind {
            LinkKind::Email => person["email"] = json!(link.target),
            LinkKind::Phone => person["telephone"] = json!(link.target),
            LinkKind::GitHub | LinkKind::LinkedIn => {}
        }
    }

    person
}
