//! Child-collection queries: subtasks, checklist, comments, handoffs.
//!
//! Subtask and checklist sync uses full-replace semantics: the stored
//! collection is deleted and reinserted wholesale on every edit. No
//! incremental diffing; the collections are expected to stay small
//! (< 20 items).

use jiff::Timestamp;
use rusqlite::params;

use crate::error::{Result, StoreResultExt};
use crate::models::{ChecklistItem, Comment, Handoff};

const SELECT_SUBTASKS_SQL: &str =
    "SELECT texto, done FROM task_subtasks WHERE task_id = ?1 ORDER BY sort_order";
const DELETE_SUBTASKS_SQL: &str = "DELETE FROM task_subtasks WHERE task_id = ?1";
const INSERT_SUBTASK_SQL: &str =
    "INSERT INTO task_subtasks (task_id, texto, done, sort_order) VALUES (?1, ?2, ?3, ?4)";

const SELECT_CHECKLIST_SQL: &str =
    "SELECT texto, done FROM task_checklist WHERE task_id = ?1 ORDER BY sort_order";
const DELETE_CHECKLIST_SQL: &str = "DELETE FROM task_checklist WHERE task_id = ?1";
const INSERT_CHECKLIST_SQL: &str =
    "INSERT INTO task_checklist (task_id, texto, done, sort_order) VALUES (?1, ?2, ?3, ?4)";

const SELECT_COMMENTS_SQL: &str =
    "SELECT id, author, texto, created_at FROM task_comments WHERE task_id = ?1 ORDER BY created_at";
const INSERT_COMMENT_SQL: &str =
    "INSERT INTO task_comments (id, task_id, author, texto, created_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const DELETE_COMMENT_SQL: &str = "DELETE FROM task_comments WHERE id = ?1";

const SELECT_HANDOFFS_SQL: &str =
    "SELECT from_person, to_person, note, created_at FROM task_handoffs WHERE task_id = ?1 ORDER BY id";
const INSERT_HANDOFF_SQL: &str =
    "INSERT INTO task_handoffs (task_id, from_person, to_person, note, created_at) VALUES (?1, ?2, ?3, ?4, ?5)";

impl super::Store {
    pub fn get_subtasks(&self, task_id: &str) -> Result<Vec<ChecklistItem>> {
        self.get_items(SELECT_SUBTASKS_SQL, task_id)
    }

    pub fn get_checklist(&self, task_id: &str) -> Result<Vec<ChecklistItem>> {
        self.get_items(SELECT_CHECKLIST_SQL, task_id)
    }

    fn get_items(&self, sql: &str, task_id: &str) -> Result<Vec<ChecklistItem>> {
        let mut stmt = self
            .connection
            .prepare(sql)
            .store_context("Failed to prepare child item query")?;
        let items = stmt
            .query_map(params![task_id], |row| {
                Ok(ChecklistItem {
                    text: row.get(0)?,
                    done: row.get(1)?,
                })
            })
            .store_context("Failed to query child items")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .store_context("Failed to fetch child items")?;
        Ok(items)
    }

    /// Replaces a task's subtasks wholesale.
    pub fn replace_subtasks(&mut self, task_id: &str, items: &[ChecklistItem]) -> Result<()> {
        self.replace_items(DELETE_SUBTASKS_SQL, INSERT_SUBTASK_SQL, task_id, items)
    }

    /// Replaces a task's checklist wholesale.
    pub fn replace_checklist(&mut self, task_id: &str, items: &[ChecklistItem]) -> Result<()> {
        self.replace_items(DELETE_CHECKLIST_SQL, INSERT_CHECKLIST_SQL, task_id, items)
    }

    fn replace_items(
        &mut self,
        delete_sql: &str,
        insert_sql: &str,
        task_id: &str,
        items: &[ChecklistItem],
    ) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .store_context("Failed to begin transaction")?;

        tx.execute(delete_sql, params![task_id])
            .store_context("Failed to clear child items")?;
        for (order, item) in items.iter().enumerate() {
            tx.execute(insert_sql, params![task_id, item.text, item.done, order as i64])
                .store_context("Failed to insert child item")?;
        }

        tx.commit().store_context("Failed to commit transaction")?;
        Ok(())
    }

    pub fn get_comments(&self, task_id: &str) -> Result<Vec<Comment>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_COMMENTS_SQL)
            .store_context("Failed to prepare comment query")?;
        let comments = stmt
            .query_map(params![task_id], |row| {
                Ok(Comment {
                    id: row.get(0)?,
                    author: row.get(1)?,
                    text: row.get(2)?,
                    timestamp: row
                        .get::<_, String>(3)?
                        .parse::<Timestamp>()
                        .unwrap_or(Timestamp::UNIX_EPOCH),
                })
            })
            .store_context("Failed to query comments")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .store_context("Failed to fetch comments")?;
        Ok(comments)
    }

    pub fn insert_comment(&mut self, task_id: &str, comment: &Comment) -> Result<()> {
        self.connection
            .execute(
                INSERT_COMMENT_SQL,
                params![
                    comment.id,
                    task_id,
                    comment.author,
                    comment.text,
                    comment.timestamp.to_string(),
                ],
            )
            .store_context("Failed to insert comment")?;
        Ok(())
    }

    pub fn delete_comment(&mut self, comment_id: &str) -> Result<()> {
        self.connection
            .execute(DELETE_COMMENT_SQL, params![comment_id])
            .store_context("Failed to delete comment")?;
        Ok(())
    }

    pub fn get_handoffs(&self, task_id: &str) -> Result<Vec<Handoff>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_HANDOFFS_SQL)
            .store_context("Failed to prepare handoff query")?;
        let handoffs = stmt
            .query_map(params![task_id], |row| {
                Ok(Handoff {
                    from: row.get(0)?,
                    to: row.get(1)?,
                    note: row.get(2)?,
                    date: row
                        .get::<_, String>(3)?
                        .parse::<Timestamp>()
                        .unwrap_or(Timestamp::UNIX_EPOCH),
                })
            })
            .store_context("Failed to query handoffs")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .store_context("Failed to fetch handoffs")?;
        Ok(handoffs)
    }

    pub fn insert_handoff(&mut self, task_id: &str, handoff: &Handoff) -> Result<()> {
        self.connection
            .execute(
                INSERT_HANDOFF_SQL,
                params![
                    task_id,
                    handoff.from,
                    handoff.to,
                    handoff.note,
                    handoff.date.to_string(),
                ],
            )
            .store_context("Failed to insert handoff")?;
        Ok(())
    }
}
