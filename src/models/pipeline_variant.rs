use crate::config::{GAMEPLAY_NORMALIZER_CONFIG, ONTOLOGY_NORMALIZER_CONFIG};
use crate::{Error, TextNormalizerConfig};
use std::fmt;
use std::str::FromStr;

/// Selects the preprocessing that matches the corpus a semantic space was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineVariant {
    /// Encyclopedia-style article text.
    Ontology,
    /// Player-written gameplay text, part-of-speech filtered.
    Gameplay,
}

impl PipelineVariant {
    pub fn config(&self) -> &'static TextNormalizerConfig {
        match self {
            PipelineVariant::Ontology => ONTOLOGY_NORMALIZER_CONFIG,
            PipelineVariant::Gameplay => GAMEPLAY_NORMALIZER_CONFIG,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineVariant::Ontology => "ontology",
            PipelineVariant::Gameplay => "gameplay",
        }
    }
}

impl fmt::Display for PipelineVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PipelineVariant {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_lowercase().as_str() {
            "ontology" => Ok(PipelineVariant::Ontology),
            "gameplay" => Ok(PipelineVariant::Gameplay),
            _ => Err(Error::UnknownPipelineVariant(name.to_string())),
        }
    }
}
