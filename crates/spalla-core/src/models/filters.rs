//! Filter and grouping state for the board views.

use super::TaskStatus;

/// Status axis of the board filter.
///
/// `Overdue` is a derived pseudo-status: pending tasks whose due date is
/// strictly before today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Is(TaskStatus),
    Overdue,
}

/// Grouping axis for the list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GroupKey {
    #[default]
    Status,
    Assignee,
    Priority,
    List,
}

/// The complete filter state applied by the board views.
///
/// Fields apply in declaration order; `search` matches title and mentee
/// name case-insensitively and is used by the list view only (the kanban
/// columns ignore it).
#[derive(Debug, Clone, Default)]
pub struct BoardFilter {
    pub status: StatusFilter,

    /// Case-insensitive substring match on the assignee name
    pub assignee: Option<String>,

    pub space: Option<String>,

    pub list: Option<String>,

    pub search: Option<String>,

    pub group_by: GroupKey,
}

/// Reminder list filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReminderFilter {
    #[default]
    All,
    Active,
    Done,
}
