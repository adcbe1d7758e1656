//! Mentee reference data and the journey phase ladder.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::taxonomy;

/// The five ordered phases of the mentee journey.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Onboarding,
    Concepcao,
    Validacao,
    Otimizacao,
    Escala,
}

impl FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "onboarding" => Ok(Phase::Onboarding),
            "concepcao" | "concepção" => Ok(Phase::Concepcao),
            "validacao" | "validação" => Ok(Phase::Validacao),
            "otimizacao" | "otimização" => Ok(Phase::Otimizacao),
            "escala" => Ok(Phase::Escala),
            _ => Err(format!("Invalid journey phase: {s}")),
        }
    }
}

impl Phase {
    /// Wire/store string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Onboarding => "onboarding",
            Phase::Concepcao => "concepcao",
            Phase::Validacao => "validacao",
            Phase::Otimizacao => "otimizacao",
            Phase::Escala => "escala",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Onboarding => "Onboarding",
            Phase::Concepcao => "Concepção",
            Phase::Validacao => "Validação",
            Phase::Otimizacao => "Otimização",
            Phase::Escala => "Escala",
        }
    }

    /// Journey-space list id for this phase.
    pub fn list_id(&self) -> &'static str {
        match self {
            Phase::Onboarding => taxonomy::LIST_ONBOARDING,
            Phase::Concepcao => taxonomy::LIST_CONCEPCAO,
            Phase::Validacao => taxonomy::LIST_VALIDACAO,
            Phase::Otimizacao => taxonomy::LIST_OTIMIZACAO,
            Phase::Escala => taxonomy::LIST_ESCALA,
        }
    }
}

/// Read-mostly mentee record sourced from the store.
///
/// The task core matches mentees by name and never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Mentee {
    /// Mentee's full name, the soft-reference key used by tasks
    #[serde(rename = "nome")]
    pub name: String,

    /// Current journey phase
    #[serde(rename = "fase_jornada")]
    pub phase: Phase,

    /// Optional churn-risk label carried through for display
    #[serde(rename = "risco_churn", default, skip_serializing_if = "Option::is_none")]
    pub churn_risk: Option<String>,
}

/// Name → phase lookup built once per categorization pass.
///
/// Matching is exact and case-sensitive, mirroring how the source data
/// joins tasks to mentees.
#[derive(Debug, Default)]
pub struct MenteeDirectory {
    phases: HashMap<String, Phase>,
}

impl MenteeDirectory {
    pub fn new(mentees: &[Mentee]) -> Self {
        Self {
            phases: mentees
                .iter()
                .map(|m| (m.name.clone(), m.phase))
                .collect(),
        }
    }

    /// The phase of the named mentee, if known.
    pub fn phase_of(&self, name: &str) -> Option<Phase> {
        self.phases.get(name).copied()
    }
}
