//! Client-local reminders.
//!
//! Reminders never touch the store: their whole lifecycle is bounded by the
//! local cache slot, rewritten on every mutation.

use jiff::Timestamp;
use uuid::Uuid;

use crate::cache::LocalCache;
use crate::error::{CoreError, Result};
use crate::models::{Reminder, ReminderFilter};
use crate::params::CreateReminder;

/// The reminder collection and its cache binding.
pub struct ReminderBook {
    reminders: Vec<Reminder>,
    cache: LocalCache,
}

impl ReminderBook {
    /// Loads the collection from the cache slot.
    pub fn load(cache: LocalCache) -> Self {
        let reminders = cache.load_reminders();
        Self { reminders, cache }
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    /// Creates a reminder; the trimmed text must be non-empty.
    pub fn add(&mut self, params: CreateReminder) -> Result<Reminder> {
        let text = params.text.trim().to_string();
        if text.is_empty() {
            return Err(CoreError::invalid_input("texto", "text must not be empty"));
        }

        let reminder = Reminder {
            id: format!("rem_{}", Uuid::new_v4()),
            text,
            date: params.date,
            priority: params.priority,
            mentee_name: params.mentee_name,
            done: false,
            created_at: Timestamp::now(),
        };
        self.reminders.push(reminder.clone());
        self.persist();
        Ok(reminder)
    }

    /// Flips a reminder's completion flag; returns the new state.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let reminder = self
            .reminders
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| CoreError::ReminderNotFound { id: id.to_string() })?;
        reminder.done = !reminder.done;
        let done = reminder.done;
        self.persist();
        Ok(done)
    }

    /// Removes a reminder.
    pub fn delete(&mut self, id: &str) -> Result<Reminder> {
        let position = self
            .reminders
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| CoreError::ReminderNotFound { id: id.to_string() })?;
        let removed = self.reminders.remove(position);
        self.persist();
        Ok(removed)
    }

    /// The filtered view, sorted by date ascending with dated reminders
    /// before undated ones.
    pub fn filtered(&self, filter: ReminderFilter) -> Vec<&Reminder> {
        let mut list: Vec<&Reminder> = self
            .reminders
            .iter()
            .filter(|r| match filter {
                ReminderFilter::All => true,
                ReminderFilter::Active => !r.done,
                ReminderFilter::Done => r.done,
            })
            .collect();
        list.sort_by(|a, b| match (a.date, b.date) {
            (Some(da), Some(db)) => da.cmp(&db),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        list
    }

    fn persist(&self) {
        self.cache.save_reminders(&self.reminders);
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::Priority;

    fn book() -> ReminderBook {
        ReminderBook::load(LocalCache::in_memory())
    }

    #[test]
    fn add_requires_text() {
        let mut book = book();
        assert!(book
            .add(CreateReminder {
                text: "  ".to_string(),
                ..Default::default()
            })
            .is_err());
    }

    #[test]
    fn mutations_round_trip_through_the_cache() {
        let cache = LocalCache::in_memory();
        let mut book = ReminderBook::load(cache.clone());
        let reminder = book
            .add(CreateReminder {
                text: "Ligar para Ana".to_string(),
                date: Some(date(2026, 8, 10)),
                priority: Priority::Alta,
                mentee_name: Some("Ana Silva".to_string()),
            })
            .expect("add");
        book.toggle(&reminder.id).expect("toggle");

        let reloaded = ReminderBook::load(cache);
        assert_eq!(reloaded.reminders().len(), 1);
        assert!(reloaded.reminders()[0].done);
        assert_eq!(reloaded.reminders()[0].priority, Priority::Alta);
    }

    #[test]
    fn filtered_splits_active_and_done() {
        let mut book = book();
        let first = book
            .add(CreateReminder {
                text: "ativa".to_string(),
                ..Default::default()
            })
            .expect("add");
        book.add(CreateReminder {
            text: "também ativa".to_string(),
            ..Default::default()
        })
        .expect("add");
        book.toggle(&first.id).expect("toggle");

        assert_eq!(book.filtered(ReminderFilter::Active).len(), 1);
        assert_eq!(book.filtered(ReminderFilter::Done).len(), 1);
        assert_eq!(book.filtered(ReminderFilter::All).len(), 2);
    }

    #[test]
    fn dated_reminders_sort_before_undated() {
        let mut book = book();
        book.add(CreateReminder {
            text: "sem data".to_string(),
            ..Default::default()
        })
        .expect("add");
        book.add(CreateReminder {
            text: "depois".to_string(),
            date: Some(date(2026, 8, 20)),
            ..Default::default()
        })
        .expect("add");
        book.add(CreateReminder {
            text: "antes".to_string(),
            date: Some(date(2026, 8, 10)),
            ..Default::default()
        })
        .expect("add");

        let texts: Vec<&str> = book
            .filtered(ReminderFilter::All)
            .iter()
            .map(|r| r.text.as_str())
            .collect();
        assert_eq!(texts, vec!["antes", "depois", "sem data"]);
    }

    #[test]
    fn delete_removes_and_reports_unknown_ids() {
        let mut book = book();
        let reminder = book
            .add(CreateReminder {
                text: "efêmera".to_string(),
                ..Default::default()
            })
            .expect("add");
        book.delete(&reminder.id).expect("delete");
        assert!(book.reminders().is_empty());
        assert!(book.delete(&reminder.id).is_err());
    }
}
