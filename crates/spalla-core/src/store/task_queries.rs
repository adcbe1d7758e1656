//! Task row CRUD operations and queries.

use jiff::Timestamp;
use log::warn;
use rusqlite::params;

use crate::dates::parse_date;
use crate::error::{Result, StoreResultExt};
use crate::models::{Task, TaskStatus};

use super::REMOTE_FETCH_LIMIT;

const TASK_COLUMNS: &str = "id, titulo, descricao, responsavel, acompanhante, mentorado_nome, \
     prioridade, status, data_inicio, data_fim, doc_link, space_id, list_id, fonte, \
     parent_task_id, tags, created_at, updated_at";

const UPSERT_TASK_SQL: &str = "INSERT INTO tasks (id, titulo, descricao, responsavel, \
     acompanhante, mentorado_nome, prioridade, status, data_inicio, data_fim, doc_link, \
     space_id, list_id, fonte, parent_task_id, tags, created_at, updated_at) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18) \
     ON CONFLICT(id) DO UPDATE SET titulo = ?2, descricao = ?3, responsavel = ?4, \
     acompanhante = ?5, mentorado_nome = ?6, prioridade = ?7, status = ?8, data_inicio = ?9, \
     data_fim = ?10, doc_link = ?11, space_id = ?12, list_id = ?13, fonte = ?14, \
     parent_task_id = ?15, tags = ?16, updated_at = ?18";

const UPDATE_STATUS_SQL: &str = "UPDATE tasks SET status = ?1, updated_at = ?2 WHERE id = ?3";
const UPDATE_TAGS_SQL: &str = "UPDATE tasks SET tags = ?1 WHERE id = ?2";
const UPDATE_ASSIGNEE_SQL: &str =
    "UPDATE tasks SET responsavel = ?1, updated_at = ?2 WHERE id = ?3";
const UPDATE_PARENT_SQL: &str = "UPDATE tasks SET parent_task_id = ?1 WHERE id = ?2";
const DELETE_TASK_SQL: &str = "DELETE FROM tasks WHERE id = ?1";
const DELETE_TASK_SUBTASKS_SQL: &str = "DELETE FROM task_subtasks WHERE task_id = ?1";
const DELETE_TASK_CHECKLIST_SQL: &str = "DELETE FROM task_checklist WHERE task_id = ?1";
const DELETE_TASK_COMMENTS_SQL: &str = "DELETE FROM task_comments WHERE task_id = ?1";
const DELETE_TASK_HANDOFFS_SQL: &str = "DELETE FROM task_handoffs WHERE task_id = ?1";

impl super::Store {
    /// Builds a task from a row, degrading malformed values to defaults
    /// instead of failing the surrounding load.
    fn build_task_from_row(row: &rusqlite::Row) -> rusqlite::Result<Task> {
        let id: String = row.get(0)?;

        let status = row
            .get::<_, String>(7)?
            .parse::<TaskStatus>()
            .unwrap_or_else(|e| {
                warn!("task {id}: {e}; defaulting to pendente");
                TaskStatus::default()
            });
        let priority = row
            .get::<_, Option<String>>(6)?
            .and_then(|p| p.parse().ok())
            .unwrap_or_default();
        let tags: Vec<String> = row
            .get::<_, Option<String>>(15)?
            .and_then(|t| serde_json::from_str(&t).ok())
            .unwrap_or_default();

        Ok(Task {
            id,
            title: row.get(1)?,
            description: row.get(2)?,
            assignee: row.get(3)?,
            accompanist: row.get(4)?,
            mentee_name: row.get(5)?,
            priority,
            status,
            start_date: row
                .get::<_, Option<String>>(8)?
                .as_deref()
                .and_then(parse_date),
            due_date: row
                .get::<_, Option<String>>(9)?
                .as_deref()
                .and_then(parse_date),
            doc_link: row.get(10)?,
            space_id: row.get(11)?,
            list_id: row.get(12)?,
            origin: row.get::<_, Option<String>>(13)?.unwrap_or_default().into(),
            parent_task_id: row.get(14)?,
            subtasks: Vec::new(),
            checklist: Vec::new(),
            comments: Vec::new(),
            tags,
            handoffs: Vec::new(),
            attachments: Vec::new(),
            created_at: row
                .get::<_, String>(16)?
                .parse::<Timestamp>()
                .unwrap_or(Timestamp::UNIX_EPOCH),
            updated_at: row
                .get::<_, String>(17)?
                .parse::<Timestamp>()
                .unwrap_or(Timestamp::UNIX_EPOCH),
        })
    }

    /// Lists tasks newest first, up to the remote fetch limit, with all
    /// child collections eagerly loaded. Rows failing the id/title
    /// validation are dropped with a warning.
    pub fn list_tasks(&self) -> Result<Vec<Task>> {
        let query =
            format!("SELECT {TASK_COLUMNS} FROM tasks ORDER BY created_at DESC LIMIT {REMOTE_FETCH_LIMIT}");
        let mut stmt = self
            .connection
            .prepare(&query)
            .store_context("Failed to prepare task query")?;

        let mut tasks: Vec<Task> = stmt
            .query_map([], Self::build_task_from_row)
            .store_context("Failed to query tasks")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .store_context("Failed to fetch tasks")?;

        tasks.retain(|t| {
            let valid = !t.id.trim().is_empty() && !t.title.trim().is_empty();
            if !valid {
                warn!("dropping malformed task row (empty id or title)");
            }
            valid
        });

        for task in &mut tasks {
            task.subtasks = self.get_subtasks(&task.id)?;
            task.checklist = self.get_checklist(&task.id)?;
            task.comments = self.get_comments(&task.id)?;
            task.handoffs = self.get_handoffs(&task.id)?;
        }

        Ok(tasks)
    }

    /// Inserts or fully replaces a task row. Child collections are synced
    /// separately.
    pub fn upsert_task(&mut self, task: &Task) -> Result<()> {
        let tags = serde_json::to_string(&task.tags)?;
        self.connection
            .execute(
                UPSERT_TASK_SQL,
                params![
                    task.id,
                    task.title,
                    task.description,
                    task.assignee,
                    task.accompanist,
                    task.mentee_name,
                    task.priority.as_str(),
                    task.status.as_str(),
                    task.start_date.map(|d| d.to_string()),
                    task.due_date.map(|d| d.to_string()),
                    task.doc_link,
                    task.space_id,
                    task.list_id,
                    task.origin.as_str(),
                    task.parent_task_id,
                    tags,
                    task.created_at.to_string(),
                    task.updated_at.to_string(),
                ],
            )
            .store_context("Failed to upsert task")?;
        Ok(())
    }

    /// Updates a task's status and update timestamp.
    pub fn update_status(
        &mut self,
        id: &str,
        status: TaskStatus,
        updated_at: Timestamp,
    ) -> Result<()> {
        self.connection
            .execute(
                UPDATE_STATUS_SQL,
                params![status.as_str(), updated_at.to_string(), id],
            )
            .store_context("Failed to update task status")?;
        Ok(())
    }

    /// Replaces a task's tag set.
    pub fn update_tags(&mut self, id: &str, tags: &[String]) -> Result<()> {
        let serialized = serde_json::to_string(tags)?;
        self.connection
            .execute(UPDATE_TAGS_SQL, params![serialized, id])
            .store_context("Failed to update task tags")?;
        Ok(())
    }

    /// Reassigns a task's primary assignee.
    pub fn update_assignee(&mut self, id: &str, assignee: &str, updated_at: Timestamp) -> Result<()> {
        self.connection
            .execute(
                UPDATE_ASSIGNEE_SQL,
                params![assignee, updated_at.to_string(), id],
            )
            .store_context("Failed to update task assignee")?;
        Ok(())
    }

    /// Sets or clears a task's parent reference.
    pub fn update_parent(&mut self, id: &str, parent: Option<&str>) -> Result<()> {
        self.connection
            .execute(UPDATE_PARENT_SQL, params![parent, id])
            .store_context("Failed to update task parent")?;
        Ok(())
    }

    /// Deletes a task and all its child rows.
    pub fn delete_task(&mut self, id: &str) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .store_context("Failed to begin transaction")?;

        // Foreign keys cascade, but the deletes are explicit anyway.
        for sql in [
            DELETE_TASK_SUBTASKS_SQL,
            DELETE_TASK_CHECKLIST_SQL,
            DELETE_TASK_COMMENTS_SQL,
            DELETE_TASK_HANDOFFS_SQL,
        ] {
            tx.execute(sql, params![id])
                .store_context("Failed to delete task children")?;
        }
        tx.execute(DELETE_TASK_SQL, params![id])
            .store_context("Failed to delete task")?;

        tx.commit().store_context("Failed to commit transaction")?;
        Ok(())
    }
}
