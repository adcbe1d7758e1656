//! Tests for the data models and the ingestion boundary.

use jiff::civil::date;
use serde_json::json;

use super::raw::{dedup_tags, RawTask};
use super::*;

fn sample_task() -> Task {
    RawTask {
        id: Some("task_1".into()),
        titulo: Some("Revisar onboarding".into()),
        ..Default::default()
    }
    .into_task()
    .expect("sample task should resolve")
}

#[test]
fn status_parses_wire_labels() {
    assert_eq!("pendente".parse::<TaskStatus>(), Ok(TaskStatus::Pending));
    assert_eq!(
        "em_andamento".parse::<TaskStatus>(),
        Ok(TaskStatus::InProgress)
    );
    assert_eq!("concluida".parse::<TaskStatus>(), Ok(TaskStatus::Done));
    assert!("feita".parse::<TaskStatus>().is_err());
}

#[test]
fn status_round_trips_through_as_str() {
    for status in [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Done] {
        assert_eq!(status.as_str().parse::<TaskStatus>(), Ok(status));
    }
}

#[test]
fn priority_rank_is_total() {
    assert!(Priority::Urgente.rank() < Priority::Alta.rank());
    assert!(Priority::Alta.rank() < Priority::Normal.rank());
    assert!(Priority::Normal.rank() < Priority::Baixa.rank());
    // Unrecognized priorities degrade to normal at ingestion.
    assert_eq!(
        "muito_alta".parse::<Priority>().unwrap_or_default(),
        Priority::Normal
    );
}

#[test]
fn origin_preserves_unknown_tags() {
    let origin: Origin = "importacao_csv".to_string().into();
    assert_eq!(origin.as_str(), "importacao_csv");
    assert_eq!(Origin::from("dossie".to_string()), Origin::Dossie);
    assert_eq!(Origin::from(String::new()), Origin::Manual);
}

#[test]
fn task_serializes_with_portuguese_wire_names() {
    let task = sample_task();
    let value = serde_json::to_value(&task).expect("serialize");
    assert_eq!(value["titulo"], "Revisar onboarding");
    assert_eq!(value["status"], "pendente");
    assert_eq!(value["prioridade"], "normal");
    assert_eq!(value["fonte"], "manual");
    assert!(value.get("title").is_none());
}

#[test]
fn ingestion_normalizes_prazo_to_due_date() {
    let raw: RawTask = serde_json::from_value(json!({
        "id": "task_2",
        "titulo": "Entregar relatório",
        "prazo": "05/08/2026",
    }))
    .expect("raw parse");
    let task = raw.into_task().expect("task");
    assert_eq!(task.due_date, Some(date(2026, 8, 5)));
}

#[test]
fn ingestion_prefers_data_fim_over_prazo() {
    let raw: RawTask = serde_json::from_value(json!({
        "id": "task_3",
        "titulo": "Entregar relatório",
        "data_fim": "2026-08-10",
        "prazo": "05/08/2026",
    }))
    .expect("raw parse");
    let task = raw.into_task().expect("task");
    assert_eq!(task.due_date, Some(date(2026, 8, 10)));
}

#[test]
fn ingestion_accepts_texto_and_text_child_fields() {
    let raw: RawTask = serde_json::from_value(json!({
        "id": "task_4",
        "titulo": "Preparar call",
        "subtasks": [{"texto": "agenda", "done": true}, {"text": "material", "done": false}],
        "comments": [{"id": "c1", "author": "Queila Trizotti", "texto": "ok",
                      "created_at": "2026-08-01T10:00:00Z"}],
        "handoffs": [{"from_person": "Kaique", "to_person": "Mariza",
                      "created_at": "2026-08-02T09:00:00Z"}],
    }))
    .expect("raw parse");
    let task = raw.into_task().expect("task");
    assert_eq!(task.subtasks.len(), 2);
    assert_eq!(task.subtasks[0].text, "agenda");
    assert!(task.subtasks[0].done);
    assert_eq!(task.comments[0].text, "ok");
    assert_eq!(task.handoffs[0].to, "Mariza");
}

#[test]
fn ingestion_drops_records_without_id_or_title() {
    let no_title = RawTask {
        id: Some("task_5".into()),
        titulo: Some("   ".into()),
        ..Default::default()
    };
    assert!(no_title.into_task().is_none());

    let no_id = RawTask {
        titulo: Some("Sem id".into()),
        ..Default::default()
    };
    assert!(no_id.into_task().is_none());
}

#[test]
fn ingestion_defaults_unrecognized_enums() {
    let raw: RawTask = serde_json::from_value(json!({
        "id": "task_6",
        "titulo": "Dados antigos",
        "status": "arquivada",
        "prioridade": "altíssima",
    }))
    .expect("raw parse");
    let task = raw.into_task().expect("task");
    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(task.priority, Priority::Normal);
}

#[test]
fn canonical_serialization_round_trips_through_ingestion() {
    let mut task = sample_task();
    task.due_date = Some(date(2026, 9, 1));
    task.tags = vec!["vendas".into()];
    let text = serde_json::to_string(&task).expect("serialize");
    let raw: RawTask = serde_json::from_str(&text).expect("raw parse");
    let back = raw.into_task().expect("task");
    assert_eq!(back, task);
}

#[test]
fn tags_deduplicate_case_sensitively() {
    let tags = dedup_tags(vec![
        "foco".into(),
        "foco".into(),
        "Foco".into(),
        String::new(),
    ]);
    assert_eq!(tags, vec!["foco".to_string(), "Foco".to_string()]);
}

#[test]
fn checklist_progress_rounds_percentage() {
    let mut task = sample_task();
    assert!(task.checklist_progress().is_none());

    task.checklist = vec![
        ChecklistItem { text: "a".into(), done: true },
        ChecklistItem { text: "b".into(), done: false },
        ChecklistItem { text: "c".into(), done: false },
    ];
    let progress = task.checklist_progress().expect("progress");
    assert_eq!(progress.done, 1);
    assert_eq!(progress.total, 3);
    assert_eq!(progress.pct, 33);
}

#[test]
fn overdue_requires_pending_status() {
    let today = date(2026, 8, 6);
    let mut task = sample_task();
    task.due_date = Some(date(2026, 8, 5));
    assert!(task.is_overdue(today));

    task.status = TaskStatus::Done;
    assert!(!task.is_overdue(today));

    task.status = TaskStatus::Pending;
    task.due_date = Some(today);
    assert!(!task.is_overdue(today));

    task.due_date = None;
    assert!(!task.is_overdue(today));
}
