//! Portfolio content: the data the page renders.
//!
//! The catalog is plain configuration data. It is loaded once at startup
//! (from a TOML file, or the built-in default profile) and never mutated
//! afterwards; every widget borrows it read-only.

use std::path::Path;

use serde::Deserialize;

use crate::errors::ContentError;

/// One entry in the skills chart. `level` is interpreted over a fixed
/// 0..=100 domain; the chart clamps, so out-of-range values degrade
/// rather than fail.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub level: u8,
}

/// One project slide. `link` is optional: slides with a link are
/// interactive (Enter opens the target), slides without render as plain
/// static content.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// Static contact block: email/phone plus external profile links.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub github: String,
    pub linkedin: String,
    pub stackoverflow: String,
}

/// The whole catalog: everything the page shell composes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub about: String,
    /// Reference to a downloadable resume (path or URI). Rendered in the
    /// header; opened with the platform opener on request.
    pub resume: String,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    pub contact: Contact,
}

impl Profile {
    /// Parse a profile from a TOML document.
    pub fn from_toml(s: &str) -> Result<Self, ContentError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a profile from a file on disk.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let s = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&s)
    }
}

impl Default for Profile {
    /// The built-in profile used when no content file is supplied.
    fn default() -> Self {
        Profile {
            name: "Ahamed Nazim Chelakkattuthodi".to_string(),
            title: "Team Leader | Senior Mobile App Developer".to_string(),
            about: "Dynamic Mobile Application Developer with 8+ years of experience in \
                    Android and Flutter. Skilled in building user-centric applications, \
                    leading teams, and delivering high-performance solutions with payment \
                    gateways, Firebase, and Google Maps integrations."
                .to_string(),
            resume: "/resume.pdf".to_string(),
            skills: vec![
                SkillEntry { name: "Flutter".into(), level: 90 },
                SkillEntry { name: "Kotlin".into(), level: 95 },
                SkillEntry { name: "Firebase".into(), level: 85 },
                SkillEntry { name: "Dart".into(), level: 80 },
                SkillEntry { name: "Java".into(), level: 95 },
            ],
            projects: vec![
                ProjectEntry {
                    name: "Swoop Car Wash App".into(),
                    description: "An app providing eco-friendly, expert car cleaning at \
                                  your doorstep with hassle-free monthly plans and \
                                  real-time tracking."
                        .into(),
                    image: "/images/swoop_logo.png".into(),
                    link: Some("https://swoopcarwash.com/".into()),
                },
                ProjectEntry {
                    name: "Visitor Log App".into(),
                    description: "A visitor logging solution using Emirates ID scanning \
                                  and token printing for multi-gate access."
                        .into(),
                    image: "https://via.placeholder.com/400x250?text=Visitor+Log+App".into(),
                    link: None,
                },
                ProjectEntry {
                    name: "Football Stats App".into(),
                    description: "Tournament viewer with team stats, player registrations, \
                                  and rankings."
                        .into(),
                    image: "https://via.placeholder.com/400x250?text=Football+App".into(),
                    link: None,
                },
            ],
            contact: Contact {
                email: "ahamednazimch@gmail.com".into(),
                phone: "+971502197585".into(),
                github: "https://github.com/chnazim".into(),
                linkedin: "https://www.linkedin.com/in/nazim-ch/".into(),
                stackoverflow: "https://stackoverflow.com/users/6887226/nazim-ch".into(),
            },
        }
    }
}
