//! The static two-level space/list taxonomy.
//!
//! Two spaces, each with a fixed set of lists. The taxonomy is a
//! categorization key only: it is never created, edited, or deleted at
//! runtime, so it lives here as constants rather than in the store.

/// Journey space id: one list per mentee journey phase.
pub const SPACE_JOURNEY: &str = "space_jornada";
/// Management space id: operational lists for the team.
pub const SPACE_MANAGEMENT: &str = "space_gestao";

pub const LIST_ONBOARDING: &str = "list_onboarding";
pub const LIST_CONCEPCAO: &str = "list_concepcao";
pub const LIST_VALIDACAO: &str = "list_validacao";
pub const LIST_OTIMIZACAO: &str = "list_otimizacao";
pub const LIST_ESCALA: &str = "list_escala";

pub const LIST_DIRECIONAMENTOS: &str = "list_direcionamentos";
pub const LIST_OPERACIONAL: &str = "list_operacional";
pub const LIST_CONTEUDO: &str = "list_conteudo";
pub const LIST_VENDAS: &str = "list_vendas";
pub const LIST_PLAYBOOKS: &str = "list_playbooks";
pub const LIST_DOSSIES: &str = "list_dossies";

/// Space ids from the previous taxonomy version; cleared on sight so the
/// categorization rules can re-evaluate the task.
pub const LEGACY_SPACES: &[&str] = &["space_mentorados", "space_equipe", "space_queila"];

/// A named list within a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListDef {
    pub id: &'static str,
    pub name: &'static str,
}

/// A top-level space with its fixed lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpaceDef {
    pub id: &'static str,
    pub name: &'static str,
    pub lists: &'static [ListDef],
}

/// The complete taxonomy, in display order.
pub const SPACES: &[SpaceDef] = &[
    SpaceDef {
        id: SPACE_JOURNEY,
        name: "Jornada Mentorados",
        lists: &[
            ListDef { id: LIST_ONBOARDING, name: "Onboarding" },
            ListDef { id: LIST_CONCEPCAO, name: "Concepção" },
            ListDef { id: LIST_VALIDACAO, name: "Validação" },
            ListDef { id: LIST_OTIMIZACAO, name: "Otimização" },
            ListDef { id: LIST_ESCALA, name: "Escala" },
        ],
    },
    SpaceDef {
        id: SPACE_MANAGEMENT,
        name: "Gestão",
        lists: &[
            ListDef { id: LIST_DIRECIONAMENTOS, name: "Direcionamentos Queila" },
            ListDef { id: LIST_OPERACIONAL, name: "Operacional" },
            ListDef { id: LIST_CONTEUDO, name: "Conteúdo & Marketing" },
            ListDef { id: LIST_VENDAS, name: "Vendas & Comercial" },
            ListDef { id: LIST_PLAYBOOKS, name: "Playbooks & Materiais" },
            ListDef { id: LIST_DOSSIES, name: "Dossiês" },
        ],
    },
];

/// Looks up a space definition by id.
pub fn space(space_id: &str) -> Option<&'static SpaceDef> {
    SPACES.iter().find(|s| s.id == space_id)
}

/// Looks up a space's display name; empty for unknown ids.
pub fn space_name(space_id: &str) -> &'static str {
    space(space_id).map(|s| s.name).unwrap_or("")
}

/// Looks up a list's display name across all spaces.
pub fn list_name(list_id: &str) -> Option<&'static str> {
    SPACES
        .iter()
        .flat_map(|s| s.lists.iter())
        .find(|l| l.id == list_id)
        .map(|l| l.name)
}

/// Whether `list_id` belongs to the fixed list set of `space_id`.
pub fn list_belongs_to(space_id: &str, list_id: &str) -> bool {
    space(space_id).is_some_and(|s| s.lists.iter().any(|l| l.id == list_id))
}
