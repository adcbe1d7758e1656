//! Auto-categorization of tasks into the space/list taxonomy.
//!
//! A free-text task log accumulated without structure is retrofitted into
//! the two-axis taxonomy by an ordered list of predicate → action rules,
//! evaluated first-match-wins. The heuristics are approximate by design;
//! misclassification is an accepted limitation.
//!
//! Categorization runs exactly once per task: a task whose space is
//! already set is never re-evaluated, so manual overrides stick.

use crate::models::taxonomy::{
    LEGACY_SPACES, LIST_CONTEUDO, LIST_DIRECIONAMENTOS, LIST_DOSSIES, LIST_OPERACIONAL,
    LIST_PLAYBOOKS, LIST_VENDAS, SPACE_JOURNEY, SPACE_MANAGEMENT,
};
use crate::models::{MenteeDirectory, Origin, Phase, Task};

/// Assignee value meaning "the mentee themself".
pub const SELF_ASSIGNEE: &str = "mentorado";
/// The named principal whose directions land in the management space.
pub const PRINCIPAL: &str = "Queila";
/// Full name of the principal, used as the comment author.
pub const PRINCIPAL_FULL_NAME: &str = "Queila Trizotti";
/// Team member defaulted as accompanist on mentee-owned tasks.
pub const DEFAULT_ACCOMPANIST: &str = "Kaique";
/// Lowercased team member names, used by the per-mentee task partition.
pub const TEAM_MEMBERS: &[&str] = &["kaique", "mariza", "equipe", "heitor", "lara", "hugo"];

const PLAYBOOK_KEYWORDS: &[&str] = &["playbook", "material"];
const DOSSIER_KEYWORDS: &[&str] = &["dossie", "dossiê"];
const CONTENT_KEYWORDS: &[&str] = &[
    "conteudo", "conteúdo", "video", "post", "campanha", "trafego", "tráfego",
];
const SALES_KEYWORDS: &[&str] = &["venda", "funil", "oferta", "comercial"];

/// Snapshot of the task fields the rules inspect, resolved once per task.
#[derive(Debug)]
pub struct RuleCtx {
    title: String,
    origin: Origin,
    assignee: String,
    mentee_name: Option<String>,
    phase: Option<Phase>,
}

impl RuleCtx {
    fn of(task: &Task, mentees: &MenteeDirectory) -> Self {
        let mentee_name = task.mentee_name.clone();
        let phase = mentee_name.as_deref().and_then(|n| mentees.phase_of(n));
        Self {
            title: task.title.to_lowercase(),
            origin: task.origin.clone(),
            assignee: task.assignee.clone().unwrap_or_default(),
            mentee_name,
            phase,
        }
    }

    fn title_contains_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.title.contains(k))
    }

    /// Journey list for the mentee's phase; unknown or missing phases fall
    /// back to the conception list.
    fn phase_list(&self) -> &'static str {
        self.phase.unwrap_or(Phase::Concepcao).list_id()
    }
}

/// One predicate → action pair of the categorization sequence.
pub struct Rule {
    pub name: &'static str,
    matches: fn(&RuleCtx) -> bool,
    apply: fn(&mut Task, &RuleCtx),
}

/// The ordered rule sequence. Order is the specification: the first
/// matching rule wins and the final rule always matches.
pub static RULES: &[Rule] = &[
    Rule {
        name: "mentee-owned",
        matches: |ctx| {
            ctx.assignee == SELF_ASSIGNEE
                || matches!(ctx.origin, Origin::TarefasAcordadas | Origin::AnaliseCall)
        },
        apply: |task, ctx| {
            assign(task, SPACE_JOURNEY, ctx.phase_list());
            if task.accompanist.is_none() {
                task.accompanist = Some(DEFAULT_ACCOMPANIST.to_string());
            }
        },
    },
    Rule {
        name: "principal-direction",
        matches: |ctx| ctx.assignee == PRINCIPAL || ctx.origin == Origin::Direcionamento,
        apply: |task, ctx| {
            let list = if ctx.title_contains_any(PLAYBOOK_KEYWORDS) {
                LIST_PLAYBOOKS
            } else {
                LIST_DIRECIONAMENTOS
            };
            assign(task, SPACE_MANAGEMENT, list);
        },
    },
    Rule {
        name: "dossier",
        matches: |ctx| ctx.title_contains_any(DOSSIER_KEYWORDS) || ctx.origin == Origin::Dossie,
        apply: |task, _| assign(task, SPACE_MANAGEMENT, LIST_DOSSIES),
    },
    Rule {
        name: "content-marketing",
        matches: |ctx| ctx.title_contains_any(CONTENT_KEYWORDS),
        apply: |task, _| assign(task, SPACE_MANAGEMENT, LIST_CONTEUDO),
    },
    Rule {
        name: "sales",
        matches: |ctx| ctx.title_contains_any(SALES_KEYWORDS),
        apply: |task, _| assign(task, SPACE_MANAGEMENT, LIST_VENDAS),
    },
    Rule {
        name: "mentee-associated",
        matches: |ctx| ctx.mentee_name.is_some(),
        apply: |task, ctx| {
            assign(task, SPACE_JOURNEY, ctx.phase_list());
            if task.accompanist.is_none() {
                // Follow the assignee when there is one; an unowned
                // mentee task gets the default accompanist.
                if !ctx.assignee.is_empty() && ctx.assignee != SELF_ASSIGNEE {
                    task.accompanist = Some(ctx.assignee.clone());
                } else {
                    task.accompanist = Some(DEFAULT_ACCOMPANIST.to_string());
                }
            }
        },
    },
    Rule {
        name: "operations-catch-all",
        matches: |_| true,
        apply: |task, _| assign(task, SPACE_MANAGEMENT, LIST_OPERACIONAL),
    },
];

fn assign(task: &mut Task, space_id: &str, list_id: &str) {
    task.space_id = Some(space_id.to_string());
    task.list_id = Some(list_id.to_string());
}

/// Categorizes one task. Returns whether a rule was applied.
///
/// Legacy space ids are cleared first; a task with any other space already
/// assigned is left untouched.
pub fn categorize(task: &mut Task, mentees: &MenteeDirectory) -> bool {
    if let Some(space) = &task.space_id {
        if LEGACY_SPACES.contains(&space.as_str()) {
            task.space_id = None;
            task.list_id = None;
        }
    }
    if task.space_id.is_some() {
        return false;
    }

    let ctx = RuleCtx::of(task, mentees);
    for rule in RULES {
        if (rule.matches)(&ctx) {
            (rule.apply)(task, &ctx);
            log::debug!("task {} categorized by rule '{}'", task.id, rule.name);
            return true;
        }
    }
    false
}

/// Categorizes every task in the collection; returns how many were
/// assigned in this pass.
pub fn categorize_all(tasks: &mut [Task], mentees: &MenteeDirectory) -> usize {
    tasks
        .iter_mut()
        .map(|task| categorize(task, mentees))
        .filter(|&assigned| assigned)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::raw::RawTask;
    use crate::models::taxonomy::{list_belongs_to, LIST_CONCEPCAO, LIST_ESCALA};
    use crate::models::Mentee;

    fn directory() -> MenteeDirectory {
        MenteeDirectory::new(&[
            Mentee {
                name: "Ana Silva".into(),
                phase: Phase::Concepcao,
                churn_risk: None,
            },
            Mentee {
                name: "Bruno Costa".into(),
                phase: Phase::Escala,
                churn_risk: Some("baixo".into()),
            },
        ])
    }

    fn task(title: &str) -> Task {
        RawTask {
            id: Some(format!("task_{title}")),
            titulo: Some(title.into()),
            ..Default::default()
        }
        .into_task()
        .expect("task")
    }

    #[test]
    fn mentee_owned_goes_to_journey_phase_list() {
        let mut t = task("Follow up");
        t.mentee_name = Some("Ana Silva".into());
        t.assignee = None;
        t.origin = Origin::TarefasAcordadas;
        assert!(categorize(&mut t, &directory()));
        assert_eq!(t.space_id.as_deref(), Some(SPACE_JOURNEY));
        assert_eq!(t.list_id.as_deref(), Some(LIST_CONCEPCAO));
        assert_eq!(t.accompanist.as_deref(), Some(DEFAULT_ACCOMPANIST));
    }

    #[test]
    fn mentee_associated_without_other_match_uses_phase() {
        // Unowned task for a mentee in concepcao: journey space, phase
        // list, default accompanist.
        let mut t = task("Follow up");
        t.mentee_name = Some("Ana Silva".into());
        assert!(categorize(&mut t, &directory()));
        assert_eq!(t.space_id.as_deref(), Some(SPACE_JOURNEY));
        assert_eq!(t.list_id.as_deref(), Some(LIST_CONCEPCAO));
        assert_eq!(t.accompanist.as_deref(), Some(DEFAULT_ACCOMPANIST));

        let mut t = task("Follow up");
        t.mentee_name = Some("Bruno Costa".into());
        categorize(&mut t, &directory());
        assert_eq!(t.list_id.as_deref(), Some(LIST_ESCALA));
    }

    #[test]
    fn mentee_associated_defaults_accompanist_to_assignee() {
        let mut t = task("Follow up");
        t.mentee_name = Some("Ana Silva".into());
        t.assignee = Some("Mariza".into());
        categorize(&mut t, &directory());
        assert_eq!(t.accompanist.as_deref(), Some("Mariza"));
    }

    #[test]
    fn unknown_mentee_phase_falls_back_to_concepcao() {
        let mut t = task("Follow up");
        t.mentee_name = Some("Desconhecida".into());
        categorize(&mut t, &directory());
        assert_eq!(t.list_id.as_deref(), Some(LIST_CONCEPCAO));
    }

    #[test]
    fn principal_direction_splits_on_playbook_keywords() {
        let mut t = task("Montar playbook de vendas");
        t.assignee = Some(PRINCIPAL.into());
        categorize(&mut t, &directory());
        assert_eq!(t.space_id.as_deref(), Some(SPACE_MANAGEMENT));
        assert_eq!(t.list_id.as_deref(), Some(LIST_PLAYBOOKS));

        let mut t = task("Alinhar expectativa");
        t.origin = Origin::Direcionamento;
        categorize(&mut t, &directory());
        assert_eq!(t.list_id.as_deref(), Some(LIST_DIRECIONAMENTOS));
    }

    #[test]
    fn dossier_title_goes_to_dossiers() {
        let mut t = task("Revisar dossiê");
        assert!(categorize(&mut t, &directory()));
        assert_eq!(t.space_id.as_deref(), Some(SPACE_MANAGEMENT));
        assert_eq!(t.list_id.as_deref(), Some(LIST_DOSSIES));
    }

    #[test]
    fn content_and_sales_keywords_route_to_their_lists() {
        let mut t = task("Gravar video da campanha");
        categorize(&mut t, &directory());
        assert_eq!(t.list_id.as_deref(), Some(LIST_CONTEUDO));

        let mut t = task("Estruturar funil de oferta");
        categorize(&mut t, &directory());
        assert_eq!(t.list_id.as_deref(), Some(LIST_VENDAS));
    }

    #[test]
    fn catch_all_lands_in_operations() {
        let mut t = task("Organizar arquivos internos");
        assert!(categorize(&mut t, &directory()));
        assert_eq!(t.space_id.as_deref(), Some(SPACE_MANAGEMENT));
        assert_eq!(t.list_id.as_deref(), Some(LIST_OPERACIONAL));
    }

    #[test]
    fn categorization_runs_once() {
        let mut t = task("Revisar dossiê");
        categorize(&mut t, &directory());
        // Manual override afterwards must survive re-runs.
        t.space_id = Some(SPACE_JOURNEY.to_string());
        t.list_id = Some(LIST_ESCALA.to_string());
        assert!(!categorize(&mut t, &directory()));
        assert_eq!(t.space_id.as_deref(), Some(SPACE_JOURNEY));
        assert_eq!(t.list_id.as_deref(), Some(LIST_ESCALA));
    }

    #[test]
    fn legacy_spaces_are_cleared_and_reassigned() {
        let mut t = task("Revisar dossiê");
        t.space_id = Some("space_queila".into());
        t.list_id = Some("list_antiga".into());
        assert!(categorize(&mut t, &directory()));
        assert_eq!(t.space_id.as_deref(), Some(SPACE_MANAGEMENT));
        assert_eq!(t.list_id.as_deref(), Some(LIST_DOSSIES));
    }

    #[test]
    fn every_unassigned_task_gets_a_consistent_pair() {
        let titles = [
            "Follow up",
            "Revisar dossiê",
            "Gravar video",
            "Estruturar funil",
            "Montar playbook",
            "Qualquer outra coisa",
        ];
        let mut tasks: Vec<Task> = titles.iter().map(|t| task(t)).collect();
        tasks[0].mentee_name = Some("Ana Silva".into());
        let assigned = categorize_all(&mut tasks, &directory());
        assert_eq!(assigned, tasks.len());
        for t in &tasks {
            let space = t.space_id.as_deref().expect("space assigned");
            let list = t.list_id.as_deref().expect("list assigned");
            assert!(list_belongs_to(space, list), "{list} not in {space}");
        }
    }
}
