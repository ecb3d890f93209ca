//! Reminder calendar. Triggers are defined in Moscow wall-clock time and
//! converted to UTC cron expressions for the scheduler.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Offset, TimeZone, Utc, Weekday};

use crate::database::models::ReminderFrequency;

/// Europe/Moscow has been a fixed UTC+3 since 2014.
pub const MOSCOW_OFFSET_HOURS: i32 = 3;

const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

pub fn moscow() -> FixedOffset {
    FixedOffset::east_opt(MOSCOW_OFFSET_HOURS * 3600).unwrap_or_else(|| Utc.fix())
}

pub fn moscow_now() -> DateTime<FixedOffset> {
    moscow().from_utc_datetime(&Utc::now().naive_utc())
}

/// The three recurring reminder fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Every day at 10:00.
    Daily,
    /// Mondays and Thursdays at 18:00.
    MonThu,
    /// Saturdays and Sundays at 12:00.
    Weekend,
}

impl Trigger {
    pub const ALL: [Trigger; 3] = [Trigger::Daily, Trigger::MonThu, Trigger::Weekend];

    pub fn name(&self) -> &'static str {
        match self {
            Trigger::Daily => "daily",
            Trigger::MonThu => "mon_thu",
            Trigger::Weekend => "weekend",
        }
    }

    /// Local (Moscow) hour of the fire.
    pub fn local_hour(&self) -> u32 {
        match self {
            Trigger::Daily => 10,
            Trigger::MonThu => 18,
            Trigger::Weekend => 12,
        }
    }

    /// Local weekdays of the fire; `None` means every day.
    pub fn local_days(&self) -> Option<&'static [Weekday]> {
        match self {
            Trigger::Daily => None,
            Trigger::MonThu => Some(&[Weekday::Mon, Weekday::Thu]),
            Trigger::Weekend => Some(&[Weekday::Sat, Weekday::Sun]),
        }
    }

    /// Six-field cron expression (sec min hour dom mon dow) in UTC.
    pub fn utc_cron(&self) -> String {
        let (hour, day_shift) = to_utc_hour(self.local_hour());
        let days = match self.local_days() {
            None => "*".to_string(),
            Some(days) => days
                .iter()
                .map(|d| shift_weekday(*d, day_shift))
                .map(weekday_name)
                .collect::<Vec<_>>()
                .join(","),
        };
        format!("0 0 {} * * {}", hour, days)
    }

    /// Whether a user with `frequency` is due on this fire. `today` is the
    /// local date of the fire.
    pub fn matches(&self, frequency: ReminderFrequency, today: NaiveDate) -> bool {
        match (self, frequency) {
            (Trigger::Daily, ReminderFrequency::Daily) => true,
            (Trigger::Daily, ReminderFrequency::EveryTwoDays) => is_even_day(today),
            (Trigger::MonThu, ReminderFrequency::MonThu) => true,
            (Trigger::Weekend, ReminderFrequency::Weekends) => true,
            _ => false,
        }
    }
}

/// Converts a Moscow hour to UTC, with the day shift (-1 or 0) it causes.
fn to_utc_hour(local_hour: u32) -> (u32, i32) {
    let utc = local_hour as i32 - MOSCOW_OFFSET_HOURS;
    if utc < 0 {
        ((utc + 24) as u32, -1)
    } else {
        (utc as u32, 0)
    }
}

fn shift_weekday(day: Weekday, shift: i32) -> Weekday {
    if shift < 0 {
        day.pred()
    } else {
        day
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Every-two-days users are due on even days counted from the Unix epoch.
pub fn is_even_day(date: NaiveDate) -> bool {
    (date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE).rem_euclid(2) == 0
}
