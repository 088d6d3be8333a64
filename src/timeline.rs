use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return None;
        }
        Some(Self { year, month, day })
    }

    /// Parse a `YYYY-MM-DD` prefix; anything after the day (e.g. a `T` time
    /// part) is ignored.
    pub fn parse_iso(value: &str) -> Option<Self> {
        let value = value.trim();
        let date = value.get(..10)?;
        if value.len() > 10 && !value[10..].starts_with(['T', ' ']) {
            return None;
        }
        let mut parts = date.split('-');
        let year = parts.next().filter(|p| p.len() == 4)?.parse().ok()?;
        let month = parts.next().filter(|p| p.len() == 2)?.parse().ok()?;
        let day = parts.next().filter(|p| p.len() == 2)?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Self::new(year, month, day)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MilestoneStatus {
    Done,
    Live,
    Upcoming,
}

impl MilestoneStatus {
    pub fn for_dates(today: CalendarDate, milestone: CalendarDate) -> Self {
        match today.cmp(&milestone) {
            Ordering::Greater => MilestoneStatus::Done,
            Ordering::Equal => MilestoneStatus::Live,
            Ordering::Less => MilestoneStatus::Upcoming,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MilestoneStatus::Done => "DONE",
            MilestoneStatus::Live => "LIVE NOW",
            MilestoneStatus::Upcoming => "UPCOMING",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            MilestoneStatus::Done => "status-done",
            MilestoneStatus::Live => "status-live",
            MilestoneStatus::Upcoming => "status-upcoming",
        }
    }
}
