use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CampusError;
use crate::query::Filterable;

/// Difficulty level (1 = principiante, 2 = intermedio, 3 = avanzado)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn level(&self) -> u8 {
        match self {
            Difficulty::Beginner => 1,
            Difficulty::Intermediate => 2,
            Difficulty::Advanced => 3,
        }
    }

    /// Spanish label shown to students
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Principiante",
            Difficulty::Intermediate => "Intermedio",
            Difficulty::Advanced => "Avanzado",
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Difficulty::Beginner),
            2 => Ok(Difficulty::Intermediate),
            3 => Ok(Difficulty::Advanced),
            other => Err(format!("difficulty must be 1, 2 or 3 (got {})", other)),
        }
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> u8 {
        d.level()
    }
}

impl FromStr for Difficulty {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "beginner" | "principiante" | "basico" | "básico" => Ok(Difficulty::Beginner),
            "2" | "intermediate" | "intermedio" => Ok(Difficulty::Intermediate),
            "3" | "advanced" | "avanzado" => Ok(Difficulty::Advanced),
            _ => Err(CampusError::invalid_value("difficulty", s)),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Kind of learning resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceFormat {
    Video,
    Article,
    Course,
    Template,
    Community,
    Podcast,
    Book,
}

impl ResourceFormat {
    pub fn label(&self) -> &'static str {
        match self {
            ResourceFormat::Video => "Video",
            ResourceFormat::Article => "Artículo",
            ResourceFormat::Course => "Curso",
            ResourceFormat::Template => "Plantilla",
            ResourceFormat::Community => "Comunidad",
            ResourceFormat::Podcast => "Podcast",
            ResourceFormat::Book => "Libro",
        }
    }
}

/// Pricing model of a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pricing {
    Free,
    Freemium,
    Paid,
}

impl Pricing {
    pub fn label(&self) -> &'static str {
        match self {
            Pricing::Free => "Gratis",
            Pricing::Freemium => "Freemium",
            Pricing::Paid => "De pago",
        }
    }
}

fn default_language() -> String {
    "es".to_string()
}

/// Catalog-specific extension of an entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Details {
    /// No extension
    #[default]
    Plain,
    /// Glossary term
    Term {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        example: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        related: Vec<String>,
    },
    /// Learning resource
    Resource {
        url: String,
        format: ResourceFormat,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration_minutes: Option<u32>,
        #[serde(default = "default_language")]
        language: String,
    },
    /// No-code or support tool
    Tool {
        url: String,
        pricing: Pricing,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        use_cases: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        configuration: Option<String>,
    },
}

impl Details {
    pub fn kind(&self) -> &'static str {
        match self {
            Details::Plain => "plain",
            Details::Term { .. } => "term",
            Details::Resource { .. } => "resource",
            Details::Tool { .. } => "tool",
        }
    }

    /// External link, for resources and tools
    pub fn url(&self) -> Option<&str> {
        match self {
            Details::Resource { url, .. } | Details::Tool { url, .. } => Some(url),
            Details::Plain | Details::Term { .. } => None,
        }
    }

    /// Explicitly related entity ids
    pub fn related(&self) -> &[String] {
        match self {
            Details::Term { related, .. } => related,
            _ => &[],
        }
    }
}

/// One record of a catalog: a glossary term, a resource or a tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntity {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default)]
    pub details: Details,
}

impl Filterable for CatalogEntity {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn topics(&self) -> &[String] {
        &self.topics
    }

    fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }
}
