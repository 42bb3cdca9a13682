//! Birthday calendar arithmetic.
//!
//! All functions take `today` explicitly; only the API layer reads the clock.
//!
//! Rules:
//! - The next occurrence of a birthday is this year's anniversary, or next
//!   year's when this year's has already passed. Today counts as upcoming.
//! - 29 February falls on 28 February in non-leap years.
//! - Greetings are not sent on weekends: a birthday on Saturday or Sunday is
//!   celebrated the following Monday.

use crate::fields::Birthday;
use crate::model::Record;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::BTreeMap;

pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// Contacts celebrated on the same day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayBucket {
    pub date: NaiveDate,
    pub names: Vec<String>,
}

impl BirthdayBucket {
    pub fn weekday_name(&self) -> String {
        self.date.format("%A").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayCountdown {
    pub name: String,
    pub birthday: Birthday,
    pub days: i64,
}

fn anniversary(birth: NaiveDate, year: i32) -> Option<NaiveDate> {
    birth
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

pub fn next_occurrence(birth: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary(birth, today.year())?;
    if this_year < today {
        anniversary(birth, today.year() + 1)
    } else {
        Some(this_year)
    }
}

pub fn days_until(birth: NaiveDate, today: NaiveDate) -> Option<i64> {
    next_occurrence(birth, today).map(|next| (next - today).num_days())
}

/// Moves Saturday and Sunday to the following Monday.
pub fn celebration_day(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

/// Birthdays occurring in `[today, today + within_days)`, grouped by the day
/// they are celebrated on, in date order.
pub fn upcoming<'a, I>(records: I, today: NaiveDate, within_days: i64) -> Vec<BirthdayBucket>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut buckets: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();

    for record in records {
        let Some(birthday) = &record.birthday else {
            continue;
        };
        let Some(next) = next_occurrence(birthday.date(), today) else {
            continue;
        };
        let delta = (next - today).num_days();
        if delta < within_days {
            buckets
                .entry(celebration_day(next))
                .or_default()
                .push(record.name().to_string());
        }
    }

    buckets
        .into_iter()
        .map(|(date, names)| BirthdayBucket { date, names })
        .collect()
}

pub fn countdowns<'a, I>(records: I, today: NaiveDate) -> Vec<BirthdayCountdown>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter_map(|record| {
            let birthday = record.birthday.as_ref()?;
            let days = days_until(birthday.date(), today)?;
            Some(BirthdayCountdown {
                name: record.name().to_string(),
                birthday: birthday.clone(),
                days,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32, m: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn person(name: &str, birthday: &str) -> Record {
        let mut r = Record::new(name).unwrap();
        r.add_birthday(birthday).unwrap();
        r
    }

    #[test]
    fn next_occurrence_rolls_to_next_year_once_passed() {
        let today = date(15, 6, 2026);
        assert_eq!(
            next_occurrence(date(20, 6, 1990), today),
            Some(date(20, 6, 2026))
        );
        assert_eq!(
            next_occurrence(date(15, 6, 1990), today),
            Some(date(15, 6, 2026))
        );
        assert_eq!(
            next_occurrence(date(14, 6, 1990), today),
            Some(date(14, 6, 2027))
        );
    }

    #[test]
    fn leap_day_falls_back_to_feb_28() {
        assert_eq!(
            next_occurrence(date(29, 2, 2000), date(1, 1, 2027)),
            Some(date(28, 2, 2027))
        );
        assert_eq!(
            next_occurrence(date(29, 2, 2000), date(1, 1, 2028)),
            Some(date(29, 2, 2028))
        );
    }

    #[test]
    fn days_until_counts_from_today() {
        let today = date(30, 12, 2026);
        assert_eq!(days_until(date(30, 12, 1980), today), Some(0));
        assert_eq!(days_until(date(1, 1, 1980), today), Some(2));
    }

    #[test]
    fn weekend_moves_to_monday() {
        // 2026-10-24 is a Saturday.
        assert_eq!(celebration_day(date(24, 10, 2026)), date(26, 10, 2026));
        assert_eq!(celebration_day(date(25, 10, 2026)), date(26, 10, 2026));
        assert_eq!(celebration_day(date(21, 10, 2026)), date(21, 10, 2026));
    }

    #[test]
    fn upcoming_buckets_by_weekday() {
        // Monday.
        let today = date(19, 10, 2026);
        let records = vec![
            person("Three", "22.10.1990"),
            person("Ten", "29.10.1990"),
            person("Sat", "24.10.1985"),
            person("Sun", "25.10.1985"),
            person("Today", "19.10.2000"),
        ];

        let buckets = upcoming(&records, today, 7);
        let summary: Vec<_> = buckets
            .iter()
            .map(|b| (b.weekday_name(), b.names.clone()))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("Monday".to_string(), vec!["Today".to_string()]),
                ("Thursday".to_string(), vec!["Three".to_string()]),
                ("Monday".to_string(), vec!["Sat".to_string(), "Sun".to_string()]),
            ]
        );
        assert_eq!(buckets[2].date, date(26, 10, 2026));
    }

    #[test]
    fn upcoming_is_empty_without_matches() {
        let today = date(19, 10, 2026);
        let records = vec![person("Far", "01.03.1990"), Record::new("None").unwrap()];
        assert!(upcoming(&records, today, 7).is_empty());
    }

    #[test]
    fn countdowns_skip_records_without_birthday() {
        let today = date(19, 10, 2026);
        let records = vec![
            person("A", "20.10.1990"),
            Record::new("B").unwrap(),
            person("C", "18.10.1990"),
        ];
        let result = countdowns(&records, today);
        assert_eq!(result.len(), 2);
        assert_eq!((result[0].name.as_str(), result[0].days), ("A", 1));
        assert_eq!((result[1].name.as_str(), result[1].days), ("C", 364));
    }
}
