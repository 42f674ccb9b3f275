//! Login streak day-boundary logic.
//!
//! Day deltas use **UTC calendar-day boundaries**: two logins belong to the
//! same day exactly when their UTC dates match, regardless of time of day.
//! This makes the same-day / next-day / gap classification independent of
//! time-of-day drift (a 23:59 login followed by a 00:01 login is a
//! consecutive-day extension, never a "same day" misclassification).

use chrono::{DateTime, Utc};

/// Outcome of classifying a login against the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreakDecision {
    /// First-ever login: streak becomes 1.
    Start,
    /// Same UTC calendar day as the last login: full no-op, no XP.
    SameDay,
    /// Exactly the next UTC calendar day: streak extends to `next`.
    Extend { next: u32 },
    /// One or more days were missed: streak resets to 1.
    Reset,
}

/// Whole calendar days between `last` and `now` in UTC.
///
/// Negative when `now` is on an earlier date than `last` (clock skew).
pub fn day_delta(last: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now.date_naive() - last.date_naive()).num_days()
}

/// Classify a login given the current streak and last streak-affecting
/// login. A negative day delta (backwards clock) is treated as same-day:
/// no state change rather than a spurious reset.
pub fn decide(streak: u32, last_login: Option<DateTime<Utc>>, now: DateTime<Utc>) -> StreakDecision {
    let Some(last) = last_login else {
        return StreakDecision::Start;
    };
    match day_delta(last, now) {
        d if d <= 0 => StreakDecision::SameDay,
        1 => StreakDecision::Extend {
            next: streak.saturating_add(1),
        },
        _ => StreakDecision::Reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn first_login_starts_the_streak() {
        assert_eq!(decide(0, None, Utc::now()), StreakDecision::Start);
    }

    #[test]
    fn same_calendar_day_is_a_no_op() {
        let morning = at(2026, 3, 14, 8, 0);
        let evening = at(2026, 3, 14, 23, 30);
        assert_eq!(day_delta(morning, evening), 0);
        assert_eq!(decide(4, Some(morning), evening), StreakDecision::SameDay);
    }

    #[test]
    fn next_calendar_day_extends_even_across_midnight() {
        let late = at(2026, 3, 14, 23, 59);
        let just_after_midnight = at(2026, 3, 15, 0, 1);
        assert_eq!(day_delta(late, just_after_midnight), 1);
        assert_eq!(
            decide(4, Some(late), just_after_midnight),
            StreakDecision::Extend { next: 5 }
        );
    }

    #[test]
    fn elapsed_hours_do_not_matter_only_dates_do() {
        // 47 hours apart but two calendar days apart: a gap, not an extension.
        let early = at(2026, 3, 14, 1, 0);
        let two_dates_later = early + Duration::hours(47);
        assert_eq!(day_delta(early, two_dates_later), 2);
        assert_eq!(decide(4, Some(early), two_dates_later), StreakDecision::Reset);

        // 25 hours apart but consecutive dates: an extension.
        let late = at(2026, 3, 14, 23, 0);
        let next_date = late + Duration::hours(25);
        assert_eq!(day_delta(late, next_date), 1);
        assert_eq!(
            decide(4, Some(late), next_date),
            StreakDecision::Extend { next: 5 }
        );
    }

    #[test]
    fn missed_day_resets() {
        let last = at(2026, 3, 14, 12, 0);
        let three_days_later = at(2026, 3, 17, 12, 0);
        assert_eq!(decide(9, Some(last), three_days_later), StreakDecision::Reset);
    }

    #[test]
    fn backwards_clock_is_treated_as_same_day() {
        let last = at(2026, 3, 14, 12, 0);
        let yesterday = at(2026, 3, 13, 12, 0);
        assert_eq!(decide(4, Some(last), yesterday), StreakDecision::SameDay);
    }

    #[test]
    fn extend_saturates_at_max_streak() {
        let last = at(2026, 3, 14, 12, 0);
        let next = at(2026, 3, 15, 12, 0);
        assert_eq!(
            decide(u32::MAX, Some(last), next),
            StreakDecision::Extend { next: u32::MAX }
        );
    }
}
