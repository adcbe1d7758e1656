//! Command handlers: convert parsed arguments into board operations and
//! render the results.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use jiff::civil::Date;
use spalla_core::dates::parse_date;
use spalla_core::display::{
    BoardView, CreateResult, DeleteResult, GanttView, GroupedView, OperationStatus, RemindersView,
    StatsView, TaskList, UpdateResult,
};
use spalla_core::params::{CreateReminder, CreateTask, HandoffTask, UpdateTask};
use spalla_core::{ChildKind, Mentee, ReminderBook, Store, TaskBoard};

use crate::args::{
    AddTaskArgs, CommentCommands, GanttArgs, HandoffArgs, ItemCommands, ListTasksArgs,
    MenteeCommands, ParentArgs, ReminderCommands, ScopeArgs, SetStatusArgs, TagCommands,
    TaskCommands, TaskIdArgs, UpdateTaskArgs,
};
use crate::renderer::TerminalRenderer;

pub struct Cli {
    board: TaskBoard,
    reminders: ReminderBook,
    renderer: TerminalRenderer,
    store_path: Option<PathBuf>,
}

fn parse_date_arg(value: &str, field: &str) -> Result<Date> {
    parse_date(value).ok_or_else(|| anyhow!("invalid {field} date: '{value}'"))
}

fn parse_optional_date(value: Option<&str>, field: &str) -> Result<Option<Date>> {
    value.map(|v| parse_date_arg(v, field)).transpose()
}

impl Cli {
    pub fn new(
        board: TaskBoard,
        reminders: ReminderBook,
        renderer: TerminalRenderer,
        store_path: Option<PathBuf>,
    ) -> Self {
        Self {
            board,
            reminders,
            renderer,
            store_path,
        }
    }

    /// Awaits in-flight sync dispatches; called once before exit.
    pub async fn shutdown(&self) {
        self.board.drain_sync().await;
    }

    fn apply_scope(&mut self, scope: ScopeArgs) {
        self.board.filter.assignee = scope.assignee;
        self.board.filter.space = scope.space;
        self.board.filter.list = scope.list;
    }

    pub fn handle_task_command(&mut self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Add(args) => self.add_task(args),
            TaskCommands::List(args) => self.list_tasks(args),
            TaskCommands::Show(args) => self.show_task(&args),
            TaskCommands::Status(args) => self.set_status(args),
            TaskCommands::Update(args) => self.update_task(args),
            TaskCommands::Delete(args) => self.delete_task(&args),
            TaskCommands::Subtask { command } => self.child_item(ChildKind::Subtask, command),
            TaskCommands::Check { command } => self.child_item(ChildKind::Checklist, command),
            TaskCommands::Comment { command } => self.comment(command),
            TaskCommands::Tag { command } => self.tag(command),
            TaskCommands::Handoff(args) => self.handoff(args),
            TaskCommands::Parent(args) => self.parent(args),
        }
    }

    fn add_task(&mut self, args: AddTaskArgs) -> Result<()> {
        let params = CreateTask {
            title: args.title,
            description: args.description,
            assignee: args.assignee,
            accompanist: args.accompanist,
            mentee_name: args.mentee,
            priority: args.priority.into(),
            start_date: parse_optional_date(args.start.as_deref(), "start")?,
            due_date: parse_optional_date(args.due.as_deref(), "due")?,
            doc_link: args.doc_link,
            space_id: args.space,
            list_id: args.list,
            parent_task_id: args.parent,
            tags: args.tags,
            subtasks: args.subtasks,
            checklist: args.checklist,
        };
        let task = self.board.create_task(params)?;
        self.renderer.render(&CreateResult(task).to_string())
    }

    fn list_tasks(&mut self, args: ListTasksArgs) -> Result<()> {
        self.apply_scope(args.scope);
        if let Some(filter) = args.filter {
            self.board.filter.status = filter.into();
        }
        self.board.filter.search = args.search;

        if let Some(group_by) = args.group_by {
            self.board.filter.group_by = group_by.into();
            let groups = self.board.tasks_grouped();
            self.renderer.render(&GroupedView { groups: &groups }.to_string())
        } else {
            let tasks = self.board.filtered_tasks();
            let view = TaskList {
                tasks: &tasks,
                title: Some("Tarefas"),
            };
            self.renderer.render(&view.to_string())
        }
    }

    fn show_task(&self, args: &TaskIdArgs) -> Result<()> {
        let task = self
            .board
            .task(&args.id)
            .ok_or_else(|| anyhow!("Task with ID {} not found", args.id))?;
        self.renderer.render(&task.to_string())
    }

    fn set_status(&mut self, args: SetStatusArgs) -> Result<()> {
        let task = self.board.set_status(&args.id, args.status.into())?;
        let message = format!("Status de '{}' agora é {}", task.title, task.status);
        self.renderer.render(&OperationStatus::success(message).to_string())
    }

    fn update_task(&mut self, args: UpdateTaskArgs) -> Result<()> {
        let mut changes = Vec::new();
        let fields = [
            ("título", args.title.is_some()),
            ("descrição", args.description.is_some()),
            ("responsável", args.assignee.is_some()),
            ("acompanhante", args.accompanist.is_some()),
            ("mentorado(a)", args.mentee.is_some()),
            ("prioridade", args.priority.is_some()),
            ("início", args.start.is_some()),
            ("prazo", args.due.is_some()),
            ("documento", args.doc_link.is_some()),
            ("espaço", args.space.is_some()),
            ("lista", args.list.is_some()),
        ];
        for (label, changed) in fields {
            if changed {
                changes.push(label.to_string());
            }
        }

        let params = UpdateTask {
            title: args.title,
            description: args.description,
            assignee: args.assignee,
            accompanist: args.accompanist,
            mentee_name: args.mentee,
            priority: args.priority.map(Into::into),
            start_date: parse_optional_date(args.start.as_deref(), "start")?,
            due_date: parse_optional_date(args.due.as_deref(), "due")?,
            doc_link: args.doc_link,
            space_id: args.space,
            list_id: args.list,
        };
        let task = self.board.update_task(&args.id, params)?;
        self.renderer
            .render(&UpdateResult::with_changes(task, changes).to_string())
    }

    fn delete_task(&mut self, args: &TaskIdArgs) -> Result<()> {
        let removed = self.board.delete_task(&args.id)?;
        self.renderer.render(&DeleteResult(removed).to_string())
    }

    fn child_item(&mut self, kind: ChildKind, command: ItemCommands) -> Result<()> {
        let message = match command {
            ItemCommands::Add { task_id, text } => {
                self.board.add_child_item(&task_id, kind, &text)?;
                "Item adicionado".to_string()
            }
            ItemCommands::Toggle { task_id, index } => {
                let done = self.board.toggle_child_item(&task_id, kind, index)?;
                if done {
                    format!("Item {index} concluído")
                } else {
                    format!("Item {index} reaberto")
                }
            }
            ItemCommands::Rm { task_id, index } => {
                self.board.remove_child_item(&task_id, kind, index)?;
                format!("Item {index} removido")
            }
        };
        self.renderer.render(&OperationStatus::success(message).to_string())
    }

    fn comment(&mut self, command: CommentCommands) -> Result<()> {
        let message = match command {
            CommentCommands::Add { task_id, text } => {
                let comment = self.board.add_comment(&task_id, &text)?;
                format!("Comentário adicionado (ID: {})", comment.id)
            }
            CommentCommands::Rm { task_id, comment_id } => {
                self.board.delete_comment(&task_id, &comment_id)?;
                "Comentário removido".to_string()
            }
        };
        self.renderer.render(&OperationStatus::success(message).to_string())
    }

    fn tag(&mut self, command: TagCommands) -> Result<()> {
        let message = match command {
            TagCommands::Add { task_id, tag } => {
                if self.board.add_tag(&task_id, &tag)? {
                    format!("Tag '{tag}' adicionada")
                } else {
                    format!("Tag '{tag}' já existia")
                }
            }
            TagCommands::Rm { task_id, tag } => {
                if self.board.remove_tag(&task_id, &tag)? {
                    format!("Tag '{tag}' removida")
                } else {
                    format!("Tag '{tag}' não existia")
                }
            }
        };
        self.renderer.render(&OperationStatus::success(message).to_string())
    }

    fn handoff(&mut self, args: HandoffArgs) -> Result<()> {
        let task = self.board.add_handoff(
            &args.id,
            HandoffTask {
                from: args.from,
                to: args.to,
                note: args.note,
            },
        )?;
        let message = match task.handoffs.last() {
            Some(handoff) => format!("Tarefa passada de {} para {}", handoff.from, handoff.to),
            None => "Tarefa passada adiante".to_string(),
        };
        self.renderer.render(&OperationStatus::success(message).to_string())
    }

    fn parent(&mut self, args: ParentArgs) -> Result<()> {
        let message = match &args.parent {
            Some(parent) => format!("Tarefa agrupada sob {parent}"),
            None => "Tarefa desagrupada".to_string(),
        };
        self.board.set_parent(&args.id, args.parent)?;
        self.renderer.render(&OperationStatus::success(message).to_string())
    }

    pub fn show_board(&mut self, scope: ScopeArgs) -> Result<()> {
        self.apply_scope(scope);
        let columns = self.board.tasks_by_status();
        let view = BoardView {
            columns: &columns,
            stats: self.board.stats(),
        };
        self.renderer.render(&view.to_string())
    }

    pub fn show_gantt(&mut self, args: GanttArgs) -> Result<()> {
        self.apply_scope(args.scope);
        let window = self.board.gantt_window(args.range.into());
        let tasks = self.board.gantt_tasks();
        let view = GanttView {
            tasks: &tasks,
            window,
        };
        self.renderer.render(&view.to_string())
    }

    pub fn show_stats(&self) -> Result<()> {
        self.renderer.render(&StatsView(self.board.stats()).to_string())
    }

    pub fn handle_reminder_command(&mut self, command: ReminderCommands) -> Result<()> {
        match command {
            ReminderCommands::Add {
                text,
                date,
                priority,
                mentee,
            } => {
                let reminder = self.reminders.add(CreateReminder {
                    text,
                    date: parse_optional_date(date.as_deref(), "reminder")?,
                    priority: priority.into(),
                    mentee_name: mentee,
                })?;
                let message = format!("Lembrete criado (ID: {})", reminder.id);
                self.renderer.render(&OperationStatus::success(message).to_string())
            }
            ReminderCommands::List { filter } => {
                let reminders = self.reminders.filtered(filter.into());
                let view = RemindersView {
                    reminders: &reminders,
                };
                self.renderer.render(&view.to_string())
            }
            ReminderCommands::Done { id } => {
                let done = self.reminders.toggle(&id)?;
                let message = if done {
                    "Lembrete concluído"
                } else {
                    "Lembrete reaberto"
                };
                self.renderer.render(&OperationStatus::success(message).to_string())
            }
            ReminderCommands::Rm { id } => {
                self.reminders.delete(&id)?;
                self.renderer
                    .render(&OperationStatus::success("Lembrete removido").to_string())
            }
        }
    }

    pub async fn handle_mentee_command(&mut self, command: MenteeCommands) -> Result<()> {
        match command {
            MenteeCommands::List => {
                let mut output = format!("## Mentorados ({})\n\n", self.board.mentees().len());
                if self.board.mentees().is_empty() {
                    output.push_str("Nenhum mentorado cadastrado.\n");
                }
                for mentee in self.board.mentees() {
                    output.push_str(&format!("{mentee}\n"));
                }
                self.renderer.render(&output)
            }
            MenteeCommands::Add { name, phase, risk } => {
                let path = self
                    .store_path
                    .clone()
                    .context("mentee add requires a store (run without --offline)")?;
                let mentee = Mentee {
                    name: name.clone(),
                    phase: phase.into(),
                    churn_risk: risk,
                };
                tokio::task::spawn_blocking(move || {
                    let mut store = Store::open(&path)?;
                    store.upsert_mentee(&mentee)
                })
                .await
                .context("mentee upsert task failed")??;
                let message = format!("Mentorado(a) '{name}' registrado(a)");
                self.renderer.render(&OperationStatus::success(message).to_string())
            }
        }
    }
}
