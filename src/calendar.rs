use chrono::{Datelike, Months, NaiveDate};

use crate::types::{BonusRecurrence, Recurrence};

/// truncate a date to the first day of its calendar month
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// advance a date by whole months, saturating at the calendar's end
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// whole months between two dates, day-of-month ignored; negative when
/// `later` falls in an earlier month than `earlier`
pub fn months_between(later: NaiveDate, earlier: NaiveDate) -> i32 {
    let later = month_start(later);
    let earlier = month_start(earlier);
    (later.year() - earlier.year()) * 12 + later.month() as i32 - earlier.month() as i32
}

/// Does an entry with the given effective date and recurrence produce a
/// cash flow in the month containing `period`? Both dates are compared at
/// month granularity.
pub fn entry_is_active(effective: NaiveDate, recurrence: Recurrence, period: NaiveDate) -> bool {
    let event = month_start(effective);
    let period = month_start(period);

    match recurrence {
        Recurrence::Monthly => period >= event,
        Recurrence::Yearly => period.month() == event.month() && period >= event,
        Recurrence::Once => period == event,
    }
}

/// bonus activation; the yearly variant shares the `Recurrence::Yearly` rule
pub fn bonus_is_active(effective: NaiveDate, recurrence: BonusRecurrence, period: NaiveDate) -> bool {
    let recurrence = match recurrence {
        BonusRecurrence::EveryYear => Recurrence::Yearly,
        BonusRecurrence::Once => Recurrence::Once,
    };
    entry_is_active(effective, recurrence, period)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_start() {
        assert_eq!(month_start(date(2024, 3, 15)), date(2024, 3, 1));
        assert_eq!(month_start(date(2024, 3, 1)), date(2024, 3, 1));
    }

    #[test]
    fn test_add_months_year_wrap() {
        assert_eq!(add_months(date(2024, 11, 1), 3), date(2025, 2, 1));
        assert_eq!(add_months(date(2024, 1, 1), 24), date(2026, 1, 1));
    }

    #[test]
    fn test_months_between() {
        assert_eq!(months_between(date(2026, 1, 1), date(2024, 1, 1)), 24);
        assert_eq!(months_between(date(2024, 3, 31), date(2024, 1, 1)), 2);
        assert_eq!(months_between(date(2024, 1, 1), date(2024, 3, 1)), -2);
        // day-of-month never matters
        assert_eq!(months_between(date(2024, 2, 1), date(2024, 1, 31)), 1);
    }

    #[test]
    fn test_monthly_active_from_effective_month() {
        let effective = date(2024, 3, 15);

        assert!(!entry_is_active(effective, Recurrence::Monthly, date(2024, 2, 1)));
        assert!(entry_is_active(effective, Recurrence::Monthly, date(2024, 3, 1)));
        assert!(entry_is_active(effective, Recurrence::Monthly, date(2024, 4, 1)));
        assert!(entry_is_active(effective, Recurrence::Monthly, date(2030, 12, 1)));
    }

    #[test]
    fn test_yearly_active_in_matching_months_only() {
        // a yearly expense dated 2024-03-15 fires every March from 2024 on
        let effective = date(2024, 3, 15);

        assert!(entry_is_active(effective, Recurrence::Yearly, date(2024, 3, 1)));
        assert!(entry_is_active(effective, Recurrence::Yearly, date(2025, 3, 1)));
        assert!(entry_is_active(effective, Recurrence::Yearly, date(2030, 3, 1)));

        assert!(!entry_is_active(effective, Recurrence::Yearly, date(2023, 3, 1)));
        assert!(!entry_is_active(effective, Recurrence::Yearly, date(2024, 4, 1)));
        assert!(!entry_is_active(effective, Recurrence::Yearly, date(2025, 2, 1)));
    }

    #[test]
    fn test_once_active_in_exact_month_only() {
        let effective = date(2024, 6, 1);

        assert!(entry_is_active(effective, Recurrence::Once, date(2024, 6, 1)));
        assert!(entry_is_active(effective, Recurrence::Once, date(2024, 6, 30)));

        assert!(!entry_is_active(effective, Recurrence::Once, date(2024, 5, 1)));
        assert!(!entry_is_active(effective, Recurrence::Once, date(2024, 7, 1)));
        // never in june of a later year
        assert!(!entry_is_active(effective, Recurrence::Once, date(2025, 6, 1)));
    }

    #[test]
    fn test_bonus_every_year() {
        let effective = date(2024, 6, 15);

        assert!(bonus_is_active(effective, BonusRecurrence::EveryYear, date(2024, 6, 1)));
        assert!(bonus_is_active(effective, BonusRecurrence::EveryYear, date(2025, 6, 1)));
        assert!(!bonus_is_active(effective, BonusRecurrence::EveryYear, date(2023, 6, 1)));
        assert!(!bonus_is_active(effective, BonusRecurrence::EveryYear, date(2024, 12, 1)));
    }

    #[test]
    fn test_bonus_once() {
        let effective = date(2024, 12, 15);

        assert!(bonus_is_active(effective, BonusRecurrence::Once, date(2024, 12, 1)));
        assert!(!bonus_is_active(effective, BonusRecurrence::Once, date(2025, 12, 1)));
    }
}
