//! Timeline (Gantt) layout.
//!
//! Maps each task's start/end dates onto a percentage-based horizontal
//! offset/width within a selected time window. The arithmetic guarantees a
//! visible bar (width ≥ 2%) that never overflows the window
//! (left + width ≤ 100%), no matter how far the task's actual dates extend
//! outside it.

use jiff::civil::{Date, Weekday};
use jiff::ToSpan;

use crate::dates::date_of;
use crate::models::Task;

/// How many timeline-eligible tasks are rendered.
pub const MAX_GANTT_TASKS: usize = 50;

/// The selectable timeline windows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GanttRange {
    /// 7 days from the Sunday of the current week
    Week,
    /// The calendar days of the current month
    #[default]
    Month,
    /// 90 days from the first day of the current quarter
    Quarter,
}

/// A resolved time window: start date and total day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GanttWindow {
    pub start: Date,
    pub days: i32,
}

impl GanttWindow {
    /// Resolves a range against the reference date.
    pub fn for_range(range: GanttRange, today: Date) -> Self {
        match range {
            GanttRange::Week => {
                let offset = i64::from(today.weekday().to_sunday_zero_offset());
                Self {
                    start: today.saturating_sub(offset.days()),
                    days: 7,
                }
            }
            GanttRange::Month => Self {
                start: today.first_of_month(),
                days: i32::from(today.days_in_month()),
            },
            GanttRange::Quarter => {
                let quarter_month = ((today.month() - 1) / 3) * 3 + 1;
                let start = Date::new(today.year(), quarter_month, 1)
                    .unwrap_or_else(|_| today.first_of_month());
                Self { start, days: 90 }
            }
        }
    }
}

/// Horizontal bar geometry as window percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GanttBar {
    pub left: f64,
    pub width: f64,
}

/// Whether a task shows up on the timeline at all: not done, and carrying
/// at least one of its own dates.
pub fn is_timeline_eligible(task: &Task) -> bool {
    task.status != crate::models::TaskStatus::Done
        && (task.start_date.is_some() || task.due_date.is_some())
}

/// Date used to order timeline tasks: start, else deadline, else creation.
pub fn timeline_sort_key(task: &Task) -> Date {
    task.start_date
        .or(task.due_date)
        .unwrap_or_else(|| date_of(task.created_at))
}

/// Computes the bar for a task within the window.
///
/// Start falls back to the creation date, end to start + 7 days; duration
/// is floored at one day.
pub fn bar(task: &Task, window: &GanttWindow) -> GanttBar {
    let start = task
        .start_date
        .unwrap_or_else(|| date_of(task.created_at));
    let end = task
        .due_date
        .unwrap_or_else(|| start.saturating_add(7.days()));

    let total = f64::from(window.days.max(1));
    let offset = f64::from((start - window.start).get_days()).max(0.0);
    let duration = f64::from((end - start).get_days()).max(1.0);

    let left = (offset / total * 100.0).clamp(0.0, 98.0);
    let width = (duration / total * 100.0).clamp(2.0, 100.0 - left);
    GanttBar { left, width }
}

/// One rendered day of the window header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayHeader {
    pub date: Date,
    /// Day-of-month label
    pub label: i8,
    pub is_today: bool,
    pub is_weekend: bool,
}

/// The header row for a window.
pub fn day_headers(window: &GanttWindow, today: Date) -> Vec<DayHeader> {
    (0..i64::from(window.days))
        .map(|i| {
            let date = window.start.saturating_add(i.days());
            DayHeader {
                date,
                label: date.day(),
                is_today: date == today,
                is_weekend: matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::raw::RawTask;

    // 2026-08-06 is a Thursday.
    const TODAY: (i16, i8, i8) = (2026, 8, 6);

    fn today() -> Date {
        date(TODAY.0, TODAY.1, TODAY.2)
    }

    fn task(start: Option<&str>, due: Option<&str>) -> Task {
        let mut t = RawTask {
            id: Some("task_g".into()),
            titulo: Some("Janela".into()),
            data_inicio: start.map(String::from),
            data_fim: due.map(String::from),
            created_at: Some("2026-08-01T00:00:00Z".into()),
            ..Default::default()
        }
        .into_task()
        .expect("task");
        t.status = crate::models::TaskStatus::Pending;
        t
    }

    #[test]
    fn week_window_starts_on_sunday() {
        let window = GanttWindow::for_range(GanttRange::Week, today());
        assert_eq!(window.start, date(2026, 8, 2));
        assert_eq!(window.days, 7);
    }

    #[test]
    fn month_window_covers_the_calendar_month() {
        let window = GanttWindow::for_range(GanttRange::Month, today());
        assert_eq!(window.start, date(2026, 8, 1));
        assert_eq!(window.days, 31);
    }

    #[test]
    fn quarter_window_aligns_to_quarter_start() {
        let window = GanttWindow::for_range(GanttRange::Quarter, today());
        assert_eq!(window.start, date(2026, 7, 1));
        assert_eq!(window.days, 90);

        let window = GanttWindow::for_range(GanttRange::Quarter, date(2026, 2, 15));
        assert_eq!(window.start, date(2026, 1, 1));
    }

    #[test]
    fn bar_spans_the_given_dates() {
        let window = GanttWindow::for_range(GanttRange::Month, today());
        let bar = bar(&task(Some("2026-08-01"), Some("2026-08-16")), &window);
        assert!(bar.left.abs() < f64::EPSILON);
        assert!((bar.width - 15.0 / 31.0 * 100.0).abs() < 0.01);
    }

    #[test]
    fn bar_clamps_to_window_bounds() {
        let window = GanttWindow::for_range(GanttRange::Week, today());
        // Starts before the window, ends after it.
        let wide = bar(&task(Some("2026-07-01"), Some("2026-10-01")), &window);
        assert!(wide.left.abs() < f64::EPSILON);
        assert!((wide.width - 100.0).abs() < f64::EPSILON);

        // Entirely past the window end.
        let late = bar(&task(Some("2026-12-01"), Some("2026-12-02")), &window);
        assert!(late.left + late.width <= 100.0 + f64::EPSILON);
        assert!(late.width >= 2.0);
    }

    #[test]
    fn bar_invariants_hold_for_arbitrary_dates() {
        let window = GanttWindow::for_range(GanttRange::Month, today());
        let cases = [
            (None, Some("2026-08-05")),
            (Some("2026-08-30"), Some("2026-08-31")),
            (Some("2026-08-06"), None),
            (Some("2025-01-01"), Some("2027-01-01")),
            (Some("2026-08-10"), Some("2026-08-10")),
        ];
        for (start, due) in cases {
            let b = bar(&task(start, due), &window);
            assert!(b.width >= 2.0, "width {} for {start:?}/{due:?}", b.width);
            assert!(
                b.left + b.width <= 100.0 + f64::EPSILON,
                "overflow for {start:?}/{due:?}"
            );
        }
    }

    #[test]
    fn eligibility_requires_a_date_and_excludes_done() {
        let mut t = task(None, None);
        assert!(!is_timeline_eligible(&t));
        t.start_date = Some(date(2026, 8, 10));
        assert!(is_timeline_eligible(&t));
        t.status = crate::models::TaskStatus::Done;
        assert!(!is_timeline_eligible(&t));
    }

    #[test]
    fn sort_key_falls_back_start_due_created() {
        assert_eq!(
            timeline_sort_key(&task(Some("2026-08-10"), Some("2026-08-20"))),
            date(2026, 8, 10)
        );
        assert_eq!(
            timeline_sort_key(&task(None, Some("2026-08-20"))),
            date(2026, 8, 20)
        );
        assert_eq!(timeline_sort_key(&task(None, None)), date(2026, 8, 1));
    }

    #[test]
    fn day_headers_flag_today_and_weekends() {
        let window = GanttWindow::for_range(GanttRange::Week, today());
        let headers = day_headers(&window, today());
        assert_eq!(headers.len(), 7);
        assert!(headers[0].is_weekend); // Sunday
        assert!(headers[6].is_weekend); // Saturday
        assert!(headers[4].is_today); // Thursday the 6th
        assert_eq!(headers[0].label, 2);
    }
}
