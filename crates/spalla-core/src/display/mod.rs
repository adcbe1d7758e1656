//! Display formatting for board output.
//!
//! Domain models implement [`std::fmt::Display`] directly (in [`models`]);
//! collection and operation-result wrappers live alongside so the same data
//! can be formatted differently per context (cards vs. list lines vs.
//! kanban columns). All formatters produce markdown for the terminal
//! renderer.

pub mod board;
pub mod datetime;
pub mod models;
pub mod results;

pub use board::{BoardView, GanttView, GroupedView, RemindersView, StatsView, TaskList};
pub use datetime::{LocalDate, LocalDateTime};
pub use results::{CreateResult, DeleteResult, OperationStatus, UpdateResult};
