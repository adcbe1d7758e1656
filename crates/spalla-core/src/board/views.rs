//! Filtered, grouped, and column projections over the task collection.
//!
//! All views borrow from the board; they are recomputed per call over a
//! collection that stays small (a few hundred records at most). Display
//! caps are hard truncations, not pagination: there is no way to reach the
//! tail through these views.

use crate::categorize::{PRINCIPAL, SELF_ASSIGNEE, TEAM_MEMBERS};
use crate::gantt::{self, GanttRange, GanttWindow};
use crate::models::taxonomy;
use crate::models::{GroupKey, StatusFilter, Task, TaskStatus};

use super::TaskBoard;

/// Hard cap on the flat filtered list.
pub const MAX_LIST_TASKS: usize = 100;
/// Hard cap per kanban column.
pub const MAX_COLUMN_TASKS: usize = 50;

/// Group label for tasks without an assignee.
pub const UNASSIGNED_LABEL: &str = "Sem responsável";
/// Group label for tasks whose list id resolves to nothing.
pub const NO_LIST_LABEL: &str = "Sem lista";

/// The three kanban columns.
#[derive(Debug, Default)]
pub struct BoardColumns<'a> {
    pub pending: Vec<&'a Task>,
    pub in_progress: Vec<&'a Task>,
    pub done: Vec<&'a Task>,
}

/// Status totals over the whole collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub done: usize,
    pub overdue: usize,
}

/// The per-mentee partition of open tasks.
#[derive(Debug, Default)]
pub struct MenteeTaskView<'a> {
    /// Tasks the mentee works themself
    pub personal: Vec<&'a Task>,
    /// Tasks a team member carries for the mentee
    pub team: Vec<&'a Task>,
    /// Tasks the principal carries for the mentee
    pub principal: Vec<&'a Task>,
}

impl TaskBoard {
    /// Whether a task passes the assignee/space/list axes of the filter.
    /// Shared by every view; the free-text search applies to the flat list
    /// only.
    fn matches_scope(&self, task: &Task) -> bool {
        if let Some(assignee) = &self.filter.assignee {
            let needle = assignee.to_lowercase();
            let hit = task
                .assignee
                .as_deref()
                .is_some_and(|a| a.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }
        if let Some(space) = &self.filter.space {
            if task.space_id.as_deref() != Some(space.as_str()) {
                return false;
            }
        }
        if let Some(list) = &self.filter.list {
            if task.list_id.as_deref() != Some(list.as_str()) {
                return false;
            }
        }
        true
    }

    fn matches_status(&self, task: &Task) -> bool {
        match self.filter.status {
            StatusFilter::All => true,
            StatusFilter::Is(status) => task.status == status,
            StatusFilter::Overdue => task.is_overdue(self.clock.today()),
        }
    }

    fn matches_search(&self, task: &Task) -> bool {
        let Some(search) = &self.filter.search else {
            return true;
        };
        let needle = search.to_lowercase();
        task.title.to_lowercase().contains(&needle)
            || task
                .mentee_name
                .as_deref()
                .is_some_and(|m| m.to_lowercase().contains(&needle))
    }

    /// The flat filtered list: status, assignee, space, list, and search
    /// filters in that order, sorted by priority rank, capped at
    /// [`MAX_LIST_TASKS`].
    pub fn filtered_tasks(&self) -> Vec<&Task> {
        let mut list: Vec<&Task> = self
            .tasks()
            .iter()
            .filter(|t| self.matches_status(t))
            .filter(|t| self.matches_scope(t))
            .filter(|t| self.matches_search(t))
            .collect();
        list.sort_by_key(|t| t.priority.rank());
        list.truncate(MAX_LIST_TASKS);
        list
    }

    /// The kanban columns: one priority-sorted bucket per status, each
    /// independently scoped (the free-text search does not apply) and
    /// capped at [`MAX_COLUMN_TASKS`].
    pub fn tasks_by_status(&self) -> BoardColumns<'_> {
        BoardColumns {
            pending: self.column(TaskStatus::Pending),
            in_progress: self.column(TaskStatus::InProgress),
            done: self.column(TaskStatus::Done),
        }
    }

    fn column(&self, status: TaskStatus) -> Vec<&Task> {
        let mut list: Vec<&Task> = self
            .tasks()
            .iter()
            .filter(|t| t.status == status)
            .filter(|t| self.matches_scope(t))
            .collect();
        list.sort_by_key(|t| t.priority.rank());
        list.truncate(MAX_COLUMN_TASKS);
        list
    }

    /// Partitions the already-capped filtered list by the configured group
    /// key, preserving first-seen group order. Grouping happens after the
    /// truncation, so very large collections may show incomplete groups.
    pub fn tasks_grouped(&self) -> Vec<(String, Vec<&Task>)> {
        let mut groups: Vec<(String, Vec<&Task>)> = Vec::new();
        for task in self.filtered_tasks() {
            let key = match self.filter.group_by {
                GroupKey::Status => task.status.as_str().to_string(),
                GroupKey::Assignee => task
                    .assignee
                    .clone()
                    .unwrap_or_else(|| UNASSIGNED_LABEL.to_string()),
                GroupKey::Priority => task.priority.as_str().to_string(),
                GroupKey::List => task
                    .list_id
                    .as_deref()
                    .and_then(taxonomy::list_name)
                    .unwrap_or(NO_LIST_LABEL)
                    .to_string(),
            };
            match groups.iter_mut().find(|(k, _)| *k == key) {
                Some((_, tasks)) => tasks.push(task),
                None => groups.push((key, vec![task])),
            }
        }
        groups
    }

    /// Status totals and overdue count over the whole collection,
    /// regardless of the active filter.
    pub fn stats(&self) -> BoardStats {
        let today = self.clock.today();
        let mut stats = BoardStats {
            total: self.tasks().len(),
            ..Default::default()
        };
        for task in self.tasks() {
            match task.status {
                TaskStatus::Pending => stats.pending += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
                TaskStatus::Done => stats.done += 1,
            }
            if task.is_overdue(today) {
                stats.overdue += 1;
            }
        }
        stats
    }

    /// Timeline-eligible tasks: open, scoped, dated; sorted by
    /// start-or-deadline-or-creation date and capped at
    /// [`gantt::MAX_GANTT_TASKS`].
    pub fn gantt_tasks(&self) -> Vec<&Task> {
        let mut list: Vec<&Task> = self
            .tasks()
            .iter()
            .filter(|t| self.matches_scope(t))
            .filter(|t| gantt::is_timeline_eligible(t))
            .collect();
        list.sort_by_key(|t| gantt::timeline_sort_key(t));
        list.truncate(gantt::MAX_GANTT_TASKS);
        list
    }

    /// The window for a timeline range, anchored on the board clock.
    pub fn gantt_window(&self, range: GanttRange) -> GanttWindow {
        GanttWindow::for_range(range, self.clock.today())
    }

    /// Open tasks for one mentee, split by who carries them. Name matching
    /// here is case-insensitive, the way the detail views always joined
    /// this data.
    pub fn mentee_view(&self, name: &str) -> MenteeTaskView<'_> {
        let name = name.to_lowercase();
        let first_name = name.split_whitespace().next().unwrap_or(&name).to_string();
        let mut view = MenteeTaskView::default();

        for task in self.tasks() {
            let for_mentee = task
                .mentee_name
                .as_deref()
                .is_some_and(|m| m.to_lowercase() == name);
            if !for_mentee || task.status == TaskStatus::Done {
                continue;
            }
            let assignee = task.assignee.as_deref().unwrap_or("").to_lowercase();

            if assignee.contains(&PRINCIPAL.to_lowercase()) {
                view.principal.push(task);
            } else if TEAM_MEMBERS.iter().any(|tm| assignee.contains(tm)) {
                view.team.push(task);
            } else if assignee.is_empty()
                || assignee == SELF_ASSIGNEE
                || assignee == first_name
                || assignee == name
            {
                view.personal.push(task);
            }
        }
        view
    }
}
