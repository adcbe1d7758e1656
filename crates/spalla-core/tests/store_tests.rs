//! Integration tests for the SQLite-backed store.

use jiff::civil::date;
use jiff::Timestamp;
use tempfile::TempDir;

use spalla_core::models::raw::RawTask;
use spalla_core::models::{ChecklistItem, Comment, Handoff, Mentee, Phase, Task, TaskStatus};
use spalla_core::Store;

fn test_store() -> (TempDir, Store) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = Store::open(temp_dir.path().join("test.db")).expect("Failed to open store");
    (temp_dir, store)
}

fn task(id: &str, title: &str) -> Task {
    RawTask {
        id: Some(id.into()),
        titulo: Some(title.into()),
        created_at: Some("2026-08-01T12:00:00Z".into()),
        updated_at: Some("2026-08-01T12:00:00Z".into()),
        ..Default::default()
    }
    .into_task()
    .expect("task")
}

#[test]
fn upsert_and_list_round_trip() {
    let (_dir, mut store) = test_store();

    let mut original = task("t1", "Revisar proposta");
    original.assignee = Some("Kaique".into());
    original.due_date = Some(date(2026, 8, 20));
    original.tags = vec!["vendas".into(), "foco".into()];
    store.upsert_task(&original).expect("upsert");

    let listed = store.list_tasks().expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], original);
}

#[test]
fn upsert_replaces_scalar_fields() {
    let (_dir, mut store) = test_store();

    let mut t = task("t1", "Primeira versão");
    store.upsert_task(&t).expect("upsert");

    t.title = "Segunda versão".into();
    t.priority = "alta".parse().expect("priority");
    store.upsert_task(&t).expect("upsert again");

    let listed = store.list_tasks().expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Segunda versão");
}

#[test]
fn list_orders_newest_first() {
    let (_dir, mut store) = test_store();

    let mut older = task("older", "Antiga");
    older.created_at = "2026-08-01T00:00:00Z".parse().expect("ts");
    let mut newer = task("newer", "Nova");
    newer.created_at = "2026-08-05T00:00:00Z".parse().expect("ts");
    store.upsert_task(&older).expect("upsert");
    store.upsert_task(&newer).expect("upsert");

    let listed = store.list_tasks().expect("list");
    assert_eq!(listed[0].id, "newer");
    assert_eq!(listed[1].id, "older");
}

#[test]
fn update_status_stamps_timestamp() {
    let (_dir, mut store) = test_store();
    store.upsert_task(&task("t1", "Mudar status")).expect("upsert");

    let stamped: Timestamp = "2026-08-06T09:00:00Z".parse().expect("ts");
    store
        .update_status("t1", TaskStatus::Done, stamped)
        .expect("update");

    let listed = store.list_tasks().expect("list");
    assert_eq!(listed[0].status, TaskStatus::Done);
    assert_eq!(listed[0].updated_at, stamped);
}

#[test]
fn child_replace_is_wholesale() {
    let (_dir, mut store) = test_store();
    store.upsert_task(&task("t1", "Com subtarefas")).expect("upsert");

    let first = vec![
        ChecklistItem { text: "um".into(), done: false },
        ChecklistItem { text: "dois".into(), done: true },
    ];
    store.replace_subtasks("t1", &first).expect("replace");
    assert_eq!(store.get_subtasks("t1").expect("get"), first);

    // A second replace fully supersedes the first, order included.
    let second = vec![ChecklistItem { text: "três".into(), done: false }];
    store.replace_subtasks("t1", &second).expect("replace");
    assert_eq!(store.get_subtasks("t1").expect("get"), second);

    store.replace_checklist("t1", &first).expect("replace checklist");
    assert_eq!(store.get_checklist("t1").expect("get"), first);
}

#[test]
fn comments_insert_and_delete_by_id() {
    let (_dir, mut store) = test_store();
    store.upsert_task(&task("t1", "Comentada")).expect("upsert");

    let comment = Comment {
        id: "c1".into(),
        author: "Queila Trizotti".into(),
        text: "boa!".into(),
        timestamp: "2026-08-02T10:00:00Z".parse().expect("ts"),
    };
    store.insert_comment("t1", &comment).expect("insert");
    assert_eq!(store.get_comments("t1").expect("get"), vec![comment]);

    store.delete_comment("c1").expect("delete");
    assert!(store.get_comments("t1").expect("get").is_empty());
}

#[test]
fn handoffs_keep_insertion_order() {
    let (_dir, mut store) = test_store();
    store.upsert_task(&task("t1", "Passada adiante")).expect("upsert");

    let ts: Timestamp = "2026-08-02T10:00:00Z".parse().expect("ts");
    for (from, to) in [("Kaique", "Mariza"), ("Mariza", "Heitor")] {
        store
            .insert_handoff(
                "t1",
                &Handoff {
                    from: from.into(),
                    to: to.into(),
                    note: None,
                    date: ts,
                },
            )
            .expect("insert");
    }

    let trail = store.get_handoffs("t1").expect("get");
    assert_eq!(trail.len(), 2);
    assert_eq!(trail[0].to, "Mariza");
    assert_eq!(trail[1].to, "Heitor");
}

#[test]
fn delete_task_cascades_to_children() {
    let (_dir, mut store) = test_store();
    store.upsert_task(&task("t1", "Com filhos")).expect("upsert");
    store
        .replace_subtasks("t1", &[ChecklistItem { text: "um".into(), done: false }])
        .expect("replace");
    store
        .insert_comment(
            "t1",
            &Comment {
                id: "c1".into(),
                author: "Queila Trizotti".into(),
                text: "oi".into(),
                timestamp: Timestamp::UNIX_EPOCH,
            },
        )
        .expect("insert");

    store.delete_task("t1").expect("delete");
    assert!(store.list_tasks().expect("list").is_empty());
    assert!(store.get_subtasks("t1").expect("get").is_empty());
    assert!(store.get_comments("t1").expect("get").is_empty());
}

#[test]
fn update_assignee_parent_and_tags() {
    let (_dir, mut store) = test_store();
    store.upsert_task(&task("t1", "Campos avulsos")).expect("upsert");
    store.upsert_task(&task("t2", "Mãe")).expect("upsert");

    let ts: Timestamp = "2026-08-06T09:00:00Z".parse().expect("ts");
    store.update_assignee("t1", "Mariza", ts).expect("assignee");
    store.update_parent("t1", Some("t2")).expect("parent");
    store
        .update_tags("t1", &["foco".to_string()])
        .expect("tags");

    let listed = store.list_tasks().expect("list");
    let t1 = listed.iter().find(|t| t.id == "t1").expect("t1");
    assert_eq!(t1.assignee.as_deref(), Some("Mariza"));
    assert_eq!(t1.parent_task_id.as_deref(), Some("t2"));
    assert_eq!(t1.tags, vec!["foco".to_string()]);

    store.update_parent("t1", None).expect("clear parent");
    let listed = store.list_tasks().expect("list");
    let t1 = listed.iter().find(|t| t.id == "t1").expect("t1");
    assert!(t1.parent_task_id.is_none());
}

#[test]
fn mentees_upsert_and_list_by_name() {
    let (_dir, mut store) = test_store();

    store
        .upsert_mentee(&Mentee {
            name: "Bruno Costa".into(),
            phase: Phase::Escala,
            churn_risk: Some("baixo".into()),
        })
        .expect("upsert");
    store
        .upsert_mentee(&Mentee {
            name: "Ana Silva".into(),
            phase: Phase::Concepcao,
            churn_risk: None,
        })
        .expect("upsert");
    // Phase updates replace in place.
    store
        .upsert_mentee(&Mentee {
            name: "Bruno Costa".into(),
            phase: Phase::Otimizacao,
            churn_risk: Some("medio".into()),
        })
        .expect("upsert");

    let mentees = store.list_mentees().expect("list");
    assert_eq!(mentees.len(), 2);
    assert_eq!(mentees[0].name, "Ana Silva");
    assert_eq!(mentees[1].phase, Phase::Otimizacao);
}
