//! Command-line argument definitions using clap.
//!
//! The arg structs here are thin wrappers over the core parameter types:
//! clap-specific attributes stay in this layer and each wrapper converts
//! into its `spalla_core::params` counterpart before reaching the board.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use spalla_core::{
    GanttRange, GroupKey, Phase, Priority, ReminderFilter, StatusFilter, TaskStatus,
};

/// Spalla task board CLI
///
/// Terminal front end for the Spalla mentoring dashboard's task core:
/// kanban board, filtered lists, timeline view, reminders, and the
/// space/list auto-categorization of tasks.
#[derive(Parser)]
#[command(version, about, name = "spalla")]
pub struct Args {
    /// Path to the SQLite store file. Defaults to
    /// $XDG_DATA_HOME/spalla/spalla.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Directory for the local cache. Defaults to
    /// $XDG_DATA_HOME/spalla/cache
    #[arg(long, global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Run without the store, on the local cache only
    #[arg(long, global = true)]
    pub offline: bool,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Manage tasks
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Show the kanban board (the default command)
    #[command(alias = "b")]
    Board(ScopeArgs),
    /// Show the timeline view
    #[command(alias = "g")]
    Gantt(GanttArgs),
    /// Show board totals
    Stats,
    /// Manage reminders
    #[command(alias = "r")]
    Reminder {
        #[command(subcommand)]
        command: ReminderCommands,
    },
    /// Inspect mentee reference data
    #[command(alias = "m")]
    Mentee {
        #[command(subcommand)]
        command: MenteeCommands,
    },
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Create a task
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// List tasks with filters
    #[command(alias = "l")]
    List(ListTasksArgs),
    /// Show one task in full
    #[command(alias = "s")]
    Show(TaskIdArgs),
    /// Change a task's status
    Status(SetStatusArgs),
    /// Edit task fields
    #[command(alias = "u")]
    Update(UpdateTaskArgs),
    /// Delete a task
    Delete(TaskIdArgs),
    /// Manage subtasks
    Subtask {
        #[command(subcommand)]
        command: ItemCommands,
    },
    /// Manage checklist items
    Check {
        #[command(subcommand)]
        command: ItemCommands,
    },
    /// Manage comments
    Comment {
        #[command(subcommand)]
        command: CommentCommands,
    },
    /// Manage tags
    Tag {
        #[command(subcommand)]
        command: TagCommands,
    },
    /// Record a responsibility handoff
    Handoff(HandoffArgs),
    /// Set or clear a parent task
    Parent(ParentArgs),
}

#[derive(ClapArgs)]
pub struct AddTaskArgs {
    /// Title of the task
    pub title: String,
    #[arg(short, long, help = "Free-form description")]
    pub description: Option<String>,
    #[arg(short, long, help = "Primary assignee name")]
    pub assignee: Option<String>,
    #[arg(long, help = "Secondary accompanying assignee")]
    pub accompanist: Option<String>,
    #[arg(short, long, help = "Associated mentee name")]
    pub mentee: Option<String>,
    #[arg(short, long, value_enum, default_value_t = PriorityArg::Normal)]
    pub priority: PriorityArg,
    #[arg(long, help = "Start date (DD/MM/YYYY or ISO)")]
    pub start: Option<String>,
    #[arg(long, help = "Due date (DD/MM/YYYY or ISO)")]
    pub due: Option<String>,
    #[arg(long, help = "Document link")]
    pub doc_link: Option<String>,
    #[arg(long, help = "Preset space id, overriding auto-categorization")]
    pub space: Option<String>,
    #[arg(long, help = "Preset list id, overriding auto-categorization")]
    pub list: Option<String>,
    #[arg(long, help = "Parent task id")]
    pub parent: Option<String>,
    #[arg(long = "tag", help = "Tag (repeatable)")]
    pub tags: Vec<String>,
    #[arg(long = "subtask", help = "Subtask text (repeatable)")]
    pub subtasks: Vec<String>,
    #[arg(long = "check", help = "Checklist item text (repeatable)")]
    pub checklist: Vec<String>,
}

#[derive(ClapArgs)]
pub struct ListTasksArgs {
    /// Filter by status, or 'atrasada' for overdue pending tasks
    #[arg(short, long, value_enum)]
    pub filter: Option<TaskFilterArg>,
    #[command(flatten)]
    pub scope: ScopeArgs,
    #[arg(short, long, help = "Free-text search over title and mentee name")]
    pub search: Option<String>,
    #[arg(short, long, value_enum, help = "Group the list instead of flattening it")]
    pub group_by: Option<GroupByArg>,
}

/// Scope filters shared by the list, board, and timeline views.
#[derive(ClapArgs, Default)]
pub struct ScopeArgs {
    #[arg(short, long, help = "Assignee substring filter (case-insensitive)")]
    pub assignee: Option<String>,
    #[arg(long, help = "Space id filter")]
    pub space: Option<String>,
    #[arg(long, help = "List id filter")]
    pub list: Option<String>,
}

#[derive(ClapArgs)]
pub struct TaskIdArgs {
    /// Task id
    pub id: String,
}

#[derive(ClapArgs)]
pub struct SetStatusArgs {
    /// Task id
    pub id: String,
    /// New status
    #[arg(value_enum)]
    pub status: StatusArg,
}

#[derive(ClapArgs)]
pub struct UpdateTaskArgs {
    /// Task id
    pub id: String,
    #[arg(short, long)]
    pub title: Option<String>,
    #[arg(short, long)]
    pub description: Option<String>,
    #[arg(short, long)]
    pub assignee: Option<String>,
    #[arg(long)]
    pub accompanist: Option<String>,
    #[arg(short, long)]
    pub mentee: Option<String>,
    #[arg(short, long, value_enum)]
    pub priority: Option<PriorityArg>,
    #[arg(long, help = "Start date (DD/MM/YYYY or ISO)")]
    pub start: Option<String>,
    #[arg(long, help = "Due date (DD/MM/YYYY or ISO)")]
    pub due: Option<String>,
    #[arg(long)]
    pub doc_link: Option<String>,
    #[arg(long, help = "Manual space override")]
    pub space: Option<String>,
    #[arg(long, help = "Manual list override")]
    pub list: Option<String>,
}

#[derive(Subcommand)]
pub enum ItemCommands {
    /// Append an item
    Add {
        /// Task id
        task_id: String,
        /// Item text
        text: String,
    },
    /// Toggle an item's done flag by position
    Toggle {
        /// Task id
        task_id: String,
        /// Zero-based position
        index: usize,
    },
    /// Remove an item by position
    Rm {
        /// Task id
        task_id: String,
        /// Zero-based position
        index: usize,
    },
}

#[derive(Subcommand)]
pub enum CommentCommands {
    /// Add a comment
    Add {
        /// Task id
        task_id: String,
        /// Comment text
        text: String,
    },
    /// Remove a comment
    Rm {
        /// Task id
        task_id: String,
        /// Comment id
        comment_id: String,
    },
}

#[derive(Subcommand)]
pub enum TagCommands {
    /// Add a tag (deduplicated)
    Add {
        /// Task id
        task_id: String,
        /// Tag value
        tag: String,
    },
    /// Remove a tag
    Rm {
        /// Task id
        task_id: String,
        /// Tag value
        tag: String,
    },
}

#[derive(ClapArgs)]
pub struct HandoffArgs {
    /// Task id
    pub id: String,
    /// Receiving person; becomes the new assignee
    #[arg(long)]
    pub to: String,
    /// Giving person; defaults to the current assignee
    #[arg(long)]
    pub from: Option<String>,
    /// Context note for the trail
    #[arg(long)]
    pub note: Option<String>,
}

#[derive(ClapArgs)]
pub struct ParentArgs {
    /// Task id
    pub id: String,
    /// Parent task id; omit to clear
    #[arg(long)]
    pub parent: Option<String>,
}

#[derive(ClapArgs)]
pub struct GanttArgs {
    /// Timeline window
    #[arg(short, long, value_enum, default_value_t = RangeArg::Month)]
    pub range: RangeArg,
    #[command(flatten)]
    pub scope: ScopeArgs,
}

#[derive(Subcommand)]
pub enum ReminderCommands {
    /// Create a reminder
    #[command(alias = "a")]
    Add {
        /// Reminder text
        text: String,
        #[arg(long, help = "Date (DD/MM/YYYY or ISO)")]
        date: Option<String>,
        #[arg(short, long, value_enum, default_value_t = PriorityArg::Normal)]
        priority: PriorityArg,
        #[arg(short, long, help = "Associated mentee name")]
        mentee: Option<String>,
    },
    /// List reminders
    #[command(alias = "l")]
    List {
        #[arg(short, long, value_enum, default_value_t = ReminderFilterArg::All)]
        filter: ReminderFilterArg,
    },
    /// Toggle a reminder's completion flag
    Done {
        /// Reminder id
        id: String,
    },
    /// Remove a reminder
    Rm {
        /// Reminder id
        id: String,
    },
}

#[derive(Subcommand)]
pub enum MenteeCommands {
    /// List mentees
    #[command(alias = "l")]
    List,
    /// Insert or update a mentee record
    Add {
        /// Mentee full name
        name: String,
        #[arg(short, long, value_enum, default_value_t = PhaseArg::Concepcao)]
        phase: PhaseArg,
        #[arg(long, help = "Churn-risk label")]
        risk: Option<String>,
    },
}

/// Status values accepted on the command line.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Pendente,
    EmAndamento,
    Concluida,
}

impl From<StatusArg> for TaskStatus {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::Pendente => TaskStatus::Pending,
            StatusArg::EmAndamento => TaskStatus::InProgress,
            StatusArg::Concluida => TaskStatus::Done,
        }
    }
}

/// Status filter values, including the derived overdue pseudo-status.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum TaskFilterArg {
    Pendente,
    EmAndamento,
    Concluida,
    Atrasada,
}

impl From<TaskFilterArg> for StatusFilter {
    fn from(val: TaskFilterArg) -> Self {
        match val {
            TaskFilterArg::Pendente => StatusFilter::Is(TaskStatus::Pending),
            TaskFilterArg::EmAndamento => StatusFilter::Is(TaskStatus::InProgress),
            TaskFilterArg::Concluida => StatusFilter::Is(TaskStatus::Done),
            TaskFilterArg::Atrasada => StatusFilter::Overdue,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    Urgente,
    Alta,
    Normal,
    Baixa,
}

impl std::fmt::Display for PriorityArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriorityArg::Urgente => write!(f, "urgente"),
            PriorityArg::Alta => write!(f, "alta"),
            PriorityArg::Normal => write!(f, "normal"),
            PriorityArg::Baixa => write!(f, "baixa"),
        }
    }
}

impl From<PriorityArg> for Priority {
    fn from(val: PriorityArg) -> Self {
        match val {
            PriorityArg::Urgente => Priority::Urgente,
            PriorityArg::Alta => Priority::Alta,
            PriorityArg::Normal => Priority::Normal,
            PriorityArg::Baixa => Priority::Baixa,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum GroupByArg {
    Status,
    Assignee,
    Priority,
    List,
}

impl From<GroupByArg> for GroupKey {
    fn from(val: GroupByArg) -> Self {
        match val {
            GroupByArg::Status => GroupKey::Status,
            GroupByArg::Assignee => GroupKey::Assignee,
            GroupByArg::Priority => GroupKey::Priority,
            GroupByArg::List => GroupKey::List,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum RangeArg {
    Week,
    Month,
    Quarter,
}

impl std::fmt::Display for RangeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeArg::Week => write!(f, "week"),
            RangeArg::Month => write!(f, "month"),
            RangeArg::Quarter => write!(f, "quarter"),
        }
    }
}

impl From<RangeArg> for GanttRange {
    fn from(val: RangeArg) -> Self {
        match val {
            RangeArg::Week => GanttRange::Week,
            RangeArg::Month => GanttRange::Month,
            RangeArg::Quarter => GanttRange::Quarter,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ReminderFilterArg {
    All,
    Active,
    Done,
}

impl std::fmt::Display for ReminderFilterArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReminderFilterArg::All => write!(f, "all"),
            ReminderFilterArg::Active => write!(f, "active"),
            ReminderFilterArg::Done => write!(f, "done"),
        }
    }
}

impl From<ReminderFilterArg> for ReminderFilter {
    fn from(val: ReminderFilterArg) -> Self {
        match val {
            ReminderFilterArg::All => ReminderFilter::All,
            ReminderFilterArg::Active => ReminderFilter::Active,
            ReminderFilterArg::Done => ReminderFilter::Done,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PhaseArg {
    Onboarding,
    Concepcao,
    Validacao,
    Otimizacao,
    Escala,
}

impl std::fmt::Display for PhaseArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhaseArg::Onboarding => write!(f, "onboarding"),
            PhaseArg::Concepcao => write!(f, "concepcao"),
            PhaseArg::Validacao => write!(f, "validacao"),
            PhaseArg::Otimizacao => write!(f, "otimizacao"),
            PhaseArg::Escala => write!(f, "escala"),
        }
    }
}

impl From<PhaseArg> for Phase {
    fn from(val: PhaseArg) -> Self {
        match val {
            PhaseArg::Onboarding => Phase::Onboarding,
            PhaseArg::Concepcao => Phase::Concepcao,
            PhaseArg::Validacao => Phase::Validacao,
            PhaseArg::Otimizacao => Phase::Otimizacao,
            PhaseArg::Escala => Phase::Escala,
        }
    }
}
