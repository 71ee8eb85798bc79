use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Content section shown below the navigation bar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    #[display("intro")]
    Intro,
    #[display("education")]
    Education,
    #[display("projects")]
    Projects,
    #[display("skills")]
    Skills,
}

impl Section {
    /// All sections in navigation order
    pub const ALL: [Section; 4] = [
        Section::Intro,
        Section::Education,
        Section::Projects,
        Section::Skills,
    ];

    /// Stable identifier used in markup and navigation sources
    pub fn id(&self) -> &'static str {
        match self {
            Section::Intro => "intro",
            Section::Education => "education",
            Section::Projects => "projects",
            Section::Skills => "skills",
        }
    }

    /// Heading rendered at the top of the content block
    pub fn heading(&self) -> &'static str {
        match self {
            Section::Intro => "System.out.println(\"Hello World!\");",
            Section::Education => "Education.decrypt()",
            Section::Projects => "Projects.map()",
            Section::Skills => "Skills.unlock()",
        }
    }
}

/// Returned when a navigation source supplies an id outside the four sections
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section id: {0:?}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        Section::ALL
            .into_iter()
            .find(|section| section.id().eq_ignore_ascii_case(id))
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}
