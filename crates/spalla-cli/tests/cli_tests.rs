use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper building a plain-text spalla command bound to a temp store and
/// cache
fn spalla_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spalla").expect("Failed to find spalla binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(temp_dir.path().join("store.db"))
        .arg("--cache-dir")
        .arg(temp_dir.path().join("cache"));
    cmd
}

/// Pulls the task/reminder id out of a `- ID: ...` or `(ID: ...)` line.
fn extract_id(output: &[u8]) -> String {
    let text = String::from_utf8(output.to_vec()).expect("Invalid UTF-8");
    for line in text.lines() {
        if let Some(id) = line.trim().strip_prefix("- ID: ") {
            return id.trim().to_string();
        }
        if let Some((_, rest)) = line.split_once("(ID: ") {
            if let Some((id, _)) = rest.split_once(')') {
                return id.trim().to_string();
            }
        }
    }
    panic!("no id found in output:\n{text}");
}

#[test]
fn task_add_prints_confirmation_and_id() {
    let temp_dir = create_cli_test_environment();

    spalla_cmd(&temp_dir)
        .args(["task", "add", "Organizar arquivos", "--priority", "alta"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tarefa criada"))
        .stdout(predicate::str::contains("Organizar arquivos"))
        .stdout(predicate::str::contains("- ID: "))
        .stdout(predicate::str::contains("Prioridade: alta"));
}

#[test]
fn task_add_rejects_empty_title() {
    let temp_dir = create_cli_test_environment();

    spalla_cmd(&temp_dir)
        .args(["task", "add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("titulo"));
}

#[test]
fn task_list_sees_previously_created_tasks() {
    let temp_dir = create_cli_test_environment();

    spalla_cmd(&temp_dir)
        .args(["task", "add", "Planejar semana"])
        .assert()
        .success();

    spalla_cmd(&temp_dir)
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Tarefas (1)"))
        .stdout(predicate::str::contains("Planejar semana"));
}

#[test]
fn task_list_empty_store_reports_nothing() {
    let temp_dir = create_cli_test_environment();

    spalla_cmd(&temp_dir)
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nenhuma tarefa encontrada."));
}

#[test]
fn status_change_round_trips_through_the_store() {
    let temp_dir = create_cli_test_environment();

    let output = spalla_cmd(&temp_dir)
        .args(["task", "add", "Mudar status"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let task_id = extract_id(&output);

    spalla_cmd(&temp_dir)
        .args(["task", "status", &task_id, "concluida"])
        .assert()
        .success()
        .stdout(predicate::str::contains("concluida"));

    spalla_cmd(&temp_dir)
        .args(["task", "show", &task_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Concluída"));
}

#[test]
fn board_shows_columns_and_stats() {
    let temp_dir = create_cli_test_environment();

    spalla_cmd(&temp_dir)
        .args(["task", "add", "No quadro"])
        .assert()
        .success();

    spalla_cmd(&temp_dir)
        .arg("board")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quadro de tarefas"))
        .stdout(predicate::str::contains("Pendente (1)"))
        .stdout(predicate::str::contains("No quadro"));
}

#[test]
fn default_command_is_the_board() {
    let temp_dir = create_cli_test_environment();

    spalla_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Quadro de tarefas"));
}

#[test]
fn dossier_tasks_are_auto_categorized() {
    let temp_dir = create_cli_test_environment();

    let output = spalla_cmd(&temp_dir)
        .args(["task", "add", "Revisar dossiê"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let task_id = extract_id(&output);

    spalla_cmd(&temp_dir)
        .args(["task", "show", &task_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gestão › Dossiês"));
}

#[test]
fn mentee_phase_drives_journey_list() {
    let temp_dir = create_cli_test_environment();

    spalla_cmd(&temp_dir)
        .args(["mentee", "add", "Ana Silva", "--phase", "concepcao"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ana Silva"));

    spalla_cmd(&temp_dir)
        .args(["task", "add", "Follow up", "--mentee", "Ana Silva"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jornada Mentorados › Concepção"));

    spalla_cmd(&temp_dir)
        .args(["mentee", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Concepção"));
}

#[test]
fn overdue_filter_matches_past_due_pending_tasks() {
    let temp_dir = create_cli_test_environment();

    spalla_cmd(&temp_dir)
        .args(["task", "add", "Atrasada", "--due", "01/01/2020"])
        .assert()
        .success();

    spalla_cmd(&temp_dir)
        .args(["task", "list", "--filter", "atrasada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Atrasada"));

    spalla_cmd(&temp_dir)
        .args(["task", "list", "--filter", "concluida"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nenhuma tarefa encontrada."));
}

#[test]
fn tags_stay_deduplicated_across_invocations() {
    let temp_dir = create_cli_test_environment();

    let output = spalla_cmd(&temp_dir)
        .args(["task", "add", "Com tags"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let task_id = extract_id(&output);

    spalla_cmd(&temp_dir)
        .args(["task", "tag", "add", &task_id, "foco"])
        .assert()
        .success()
        .stdout(predicate::str::contains("adicionada"));

    spalla_cmd(&temp_dir)
        .args(["task", "tag", "add", &task_id, "foco"])
        .assert()
        .success()
        .stdout(predicate::str::contains("já existia"));

    spalla_cmd(&temp_dir)
        .args(["task", "show", &task_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tags: foco"));
}

#[test]
fn handoff_reassigns_the_task() {
    let temp_dir = create_cli_test_environment();

    let output = spalla_cmd(&temp_dir)
        .args(["task", "add", "Com bastão", "--assignee", "Kaique"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let task_id = extract_id(&output);

    spalla_cmd(&temp_dir)
        .args(["task", "handoff", &task_id, "--to", "Mariza"])
        .assert()
        .success()
        .stdout(predicate::str::contains("de Kaique para Mariza"));

    spalla_cmd(&temp_dir)
        .args(["task", "show", &task_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Responsável: Mariza"))
        .stdout(predicate::str::contains("Kaique → Mariza"));
}

#[test]
fn gantt_renders_dated_tasks_only() {
    let temp_dir = create_cli_test_environment();

    spalla_cmd(&temp_dir)
        .args(["task", "add", "Sem datas"])
        .assert()
        .success();

    spalla_cmd(&temp_dir)
        .args(["gantt", "--range", "month"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Linha do tempo"))
        .stdout(predicate::str::contains("Nenhuma tarefa com datas no período."));
}

#[test]
fn reminders_live_in_the_cache() {
    let temp_dir = create_cli_test_environment();

    spalla_cmd(&temp_dir)
        .args(["reminder", "add", "Ligar para Ana", "--date", "10/08/2030"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lembrete criado"));

    spalla_cmd(&temp_dir)
        .args(["reminder", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lembretes (1)"))
        .stdout(predicate::str::contains("Ligar para Ana"));

    spalla_cmd(&temp_dir)
        .args(["reminder", "list", "--filter", "done"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nenhum lembrete."));
}

#[test]
fn stats_count_statuses() {
    let temp_dir = create_cli_test_environment();

    spalla_cmd(&temp_dir)
        .args(["task", "add", "Uma"])
        .assert()
        .success();
    spalla_cmd(&temp_dir)
        .args(["task", "add", "Outra"])
        .assert()
        .success();

    spalla_cmd(&temp_dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 2"))
        .stdout(predicate::str::contains("Pendentes: 2"));
}

#[test]
fn delete_removes_the_task_everywhere() {
    let temp_dir = create_cli_test_environment();

    let output = spalla_cmd(&temp_dir)
        .args(["task", "add", "Descartável"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let task_id = extract_id(&output);

    spalla_cmd(&temp_dir)
        .args(["task", "delete", &task_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tarefa removida"));

    spalla_cmd(&temp_dir)
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nenhuma tarefa encontrada."));
}
