//! Collection wrappers for the board views.

use std::fmt;

use crate::board::{BoardColumns, BoardStats};
use crate::gantt::{self, GanttWindow};
use crate::models::{Reminder, Task, TaskStatus};

/// Width, in characters, of the rendered timeline track.
const GANTT_TRACK_WIDTH: usize = 40;

/// A flat task list with an optional heading.
pub struct TaskList<'a> {
    pub tasks: &'a [&'a Task],
    pub title: Option<&'a str>,
}

impl fmt::Display for TaskList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(title) = self.title {
            writeln!(f, "## {title} ({})", self.tasks.len())?;
            writeln!(f)?;
        }
        if self.tasks.is_empty() {
            writeln!(f, "Nenhuma tarefa encontrada.")?;
            return Ok(());
        }
        for task in self.tasks {
            writeln!(f, "{}", task.as_line())?;
        }
        Ok(())
    }
}

/// The kanban board: one section per status column.
pub struct BoardView<'a> {
    pub columns: &'a BoardColumns<'a>,
    pub stats: BoardStats,
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Quadro de tarefas")?;
        writeln!(f)?;
        writeln!(
            f,
            "{} tarefas — {} pendentes, {} em andamento, {} concluídas, {} atrasadas",
            self.stats.total,
            self.stats.pending,
            self.stats.in_progress,
            self.stats.done,
            self.stats.overdue
        )?;
        for (status, tasks) in [
            (TaskStatus::Pending, &self.columns.pending),
            (TaskStatus::InProgress, &self.columns.in_progress),
            (TaskStatus::Done, &self.columns.done),
        ] {
            writeln!(f, "\n## {} ({})", status.with_icon(), tasks.len())?;
            writeln!(f)?;
            if tasks.is_empty() {
                writeln!(f, "—")?;
            }
            for task in tasks {
                writeln!(f, "{}", task.as_line())?;
            }
        }
        Ok(())
    }
}

/// The grouped list view.
pub struct GroupedView<'a> {
    pub groups: &'a [(String, Vec<&'a Task>)],
}

impl fmt::Display for GroupedView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.groups.is_empty() {
            writeln!(f, "Nenhuma tarefa encontrada.")?;
            return Ok(());
        }
        for (label, tasks) in self.groups {
            writeln!(f, "## {label} ({})", tasks.len())?;
            writeln!(f)?;
            for task in tasks {
                writeln!(f, "{}", task.as_line())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The timeline view: a text track per eligible task.
pub struct GanttView<'a> {
    pub tasks: &'a [&'a Task],
    pub window: GanttWindow,
}

impl fmt::Display for GanttView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# Linha do tempo — {} dias a partir de {}",
            self.window.days,
            super::LocalDate(&self.window.start)
        )?;
        writeln!(f)?;
        if self.tasks.is_empty() {
            writeln!(f, "Nenhuma tarefa com datas no período.")?;
            return Ok(());
        }
        for task in self.tasks {
            let bar = gantt::bar(task, &self.window);
            let lead = (bar.left / 100.0 * GANTT_TRACK_WIDTH as f64).round() as usize;
            let fill = ((bar.width / 100.0 * GANTT_TRACK_WIDTH as f64).round() as usize).max(1);
            let lead = lead.min(GANTT_TRACK_WIDTH - 1);
            let fill = fill.min(GANTT_TRACK_WIDTH - lead);
            let trail = GANTT_TRACK_WIDTH - lead - fill;
            writeln!(
                f,
                "`{}{}{}` {}",
                "·".repeat(lead),
                "█".repeat(fill),
                "·".repeat(trail),
                task.title
            )?;
        }
        Ok(())
    }
}

/// Status totals as a standalone summary.
pub struct StatsView(pub BoardStats);

impl fmt::Display for StatsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Resumo do quadro")?;
        writeln!(f)?;
        writeln!(f, "- Total: {}", self.0.total)?;
        writeln!(f, "- Pendentes: {}", self.0.pending)?;
        writeln!(f, "- Em andamento: {}", self.0.in_progress)?;
        writeln!(f, "- Concluídas: {}", self.0.done)?;
        writeln!(f, "- Atrasadas: {}", self.0.overdue)?;
        Ok(())
    }
}

/// A reminder list with a heading.
pub struct RemindersView<'a> {
    pub reminders: &'a [&'a Reminder],
}

impl fmt::Display for RemindersView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Lembretes ({})", self.reminders.len())?;
        writeln!(f)?;
        if self.reminders.is_empty() {
            writeln!(f, "Nenhum lembrete.")?;
            return Ok(());
        }
        for reminder in self.reminders {
            writeln!(f, "{reminder}")?;
        }
        Ok(())
    }
}
