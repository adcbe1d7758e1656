//! Display implementations for domain models.

use std::fmt;

use super::datetime::{LocalDate, LocalDateTime};
use crate::models::taxonomy;
use crate::models::{Mentee, Priority, Reminder, Task, TaskStatus};

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.title, self.status.with_icon())?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Prioridade: {}", self.priority)?;
        if let Some(assignee) = &self.assignee {
            writeln!(f, "- Responsável: {assignee}")?;
        }
        if let Some(accompanist) = &self.accompanist {
            writeln!(f, "- Acompanhante: {accompanist}")?;
        }
        if let Some(mentee) = &self.mentee_name {
            writeln!(f, "- Mentorado(a): {mentee}")?;
        }
        if let (Some(space), Some(list)) = (self.space_id.as_deref(), self.list_id.as_deref()) {
            let space_name = taxonomy::space_name(space);
            let list_name = taxonomy::list_name(list).unwrap_or(list);
            writeln!(f, "- Lista: {space_name} › {list_name}")?;
        }
        if let Some(start) = &self.start_date {
            writeln!(f, "- Início: {}", LocalDate(start))?;
        }
        if let Some(due) = &self.due_date {
            writeln!(f, "- Prazo: {}", LocalDate(due))?;
        }
        if !self.tags.is_empty() {
            writeln!(f, "- Tags: {}", self.tags.join(", "))?;
        }
        if let Some(link) = &self.doc_link {
            writeln!(f, "- Documento: {link}")?;
        }
        writeln!(f, "- Criada: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Atualizada: {}", LocalDateTime(&self.updated_at))?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if !self.subtasks.is_empty() {
            writeln!(f, "\n#### Subtarefas")?;
            writeln!(f)?;
            for (i, item) in self.subtasks.iter().enumerate() {
                let mark = if item.done { "x" } else { " " };
                writeln!(f, "{i}. [{mark}] {}", item.text)?;
            }
        }

        if let Some(progress) = self.checklist_progress() {
            writeln!(
                f,
                "\n#### Checklist ({}/{} — {}%)",
                progress.done, progress.total, progress.pct
            )?;
            writeln!(f)?;
            for (i, item) in self.checklist.iter().enumerate() {
                let mark = if item.done { "x" } else { " " };
                writeln!(f, "{i}. [{mark}] {}", item.text)?;
            }
        }

        if !self.comments.is_empty() {
            writeln!(f, "\n#### Comentários")?;
            writeln!(f)?;
            for comment in &self.comments {
                writeln!(
                    f,
                    "- {} ({}): {} `{}`",
                    comment.author,
                    LocalDateTime(&comment.timestamp),
                    comment.text,
                    comment.id
                )?;
            }
        }

        if !self.handoffs.is_empty() {
            writeln!(f, "\n#### Passagens de bastão")?;
            writeln!(f)?;
            for handoff in &self.handoffs {
                write!(
                    f,
                    "- {} → {} ({})",
                    handoff.from,
                    handoff.to,
                    LocalDateTime(&handoff.date)
                )?;
                match &handoff.note {
                    Some(note) => writeln!(f, ": {note}")?,
                    None => writeln!(f)?,
                }
            }
        }

        Ok(())
    }
}

impl Task {
    /// Compact one-line form for lists and columns.
    pub fn as_line(&self) -> String {
        let mut line = format!("- [{}] **{}**", self.priority, self.title);
        if let Some(assignee) = &self.assignee {
            line.push_str(&format!(" — {assignee}"));
        }
        if let Some(due) = &self.due_date {
            line.push_str(&format!(" (prazo: {})", LocalDate(due)));
        }
        if let Some(progress) = self.checklist_progress() {
            line.push_str(&format!(" [{}/{}]", progress.done, progress.total));
        }
        line.push_str(&format!(" `{}`", self.id));
        line
    }
}

impl fmt::Display for Reminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.done { "x" } else { " " };
        write!(f, "- [{mark}] {}", self.text)?;
        if let Some(date) = &self.date {
            write!(f, " ({})", LocalDate(date))?;
        }
        if let Some(mentee) = &self.mentee_name {
            write!(f, " — {mentee}")?;
        }
        write!(f, " `{}`", self.id)
    }
}

impl fmt::Display for Mentee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- **{}** — {}", self.name, self.phase.label())?;
        if let Some(risk) = &self.churn_risk {
            write!(f, " (risco: {risk})")?;
        }
        Ok(())
    }
}
