//! Year-agnostic birthday arithmetic.
//!
//! Birthdays are compared on a month/day composite (`month * 100 + day`), so
//! `1990-06-05` and `2001-06-05` are the same point. The upcoming-birthday
//! window is inclusive on both ends and wraps across the new year: a window
//! that starts on Dec 29 ends on Jan 5 and matches both tails.

use std::fmt;

use chrono::{Datelike, Days, Local, NaiveDate};

/// Length of the upcoming-birthday window, counted from today.
pub const WINDOW_DAYS: u64 = 7;

// ─── MonthDay ────────────────────────────────────────────────────────────────

/// A date with the year dropped, encoded as `month * 100 + day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay(u32);

impl MonthDay {
  pub fn of(date: NaiveDate) -> Self { Self(date.month() * 100 + date.day()) }

  /// The integer composite, e.g. `1231` for December 31.
  pub fn composite(self) -> u32 { self.0 }
}

impl fmt::Display for MonthDay {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:02}-{:02}", self.0 / 100, self.0 % 100)
  }
}

// ─── BirthdayWindow ──────────────────────────────────────────────────────────

/// An inclusive `[start, end]` range of month/day composites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindow {
  pub start: MonthDay,
  pub end:   MonthDay,
}

impl BirthdayWindow {
  /// The window from `today` through `today + WINDOW_DAYS`.
  pub fn starting(today: NaiveDate) -> Self {
    let last = today
      .checked_add_days(Days::new(WINDOW_DAYS))
      .unwrap_or(NaiveDate::MAX);
    Self { start: MonthDay::of(today), end: MonthDay::of(last) }
  }

  /// True when the window crosses Dec 31, i.e. `end` sorts before `start`.
  pub fn wraps(&self) -> bool { self.end < self.start }

  pub fn contains(&self, day: MonthDay) -> bool {
    if self.wraps() {
      day >= self.start || day <= self.end
    } else {
      self.start <= day && day <= self.end
    }
  }
}

// ─── Clock ───────────────────────────────────────────────────────────────────

/// Source of "today" for the upcoming-birthday query.
pub trait Clock: Send + Sync + fmt::Debug {
  fn today(&self) -> NaiveDate;
}

/// The local calendar date of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn today(&self) -> NaiveDate { Local::now().date_naive() }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
  fn today(&self) -> NaiveDate { self.0 }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  fn md(m: u32, d: u32) -> MonthDay { MonthDay::of(ymd(2000, m, d)) }

  #[test]
  fn composite_ignores_year() {
    assert_eq!(MonthDay::of(ymd(1990, 6, 5)).composite(), 605);
    assert_eq!(MonthDay::of(ymd(1990, 6, 5)), MonthDay::of(ymd(2031, 6, 5)));
    assert_eq!(md(12, 31).to_string(), "12-31");
  }

  #[test]
  fn window_within_one_month() {
    let w = BirthdayWindow::starting(ymd(2024, 6, 1));
    assert_eq!((w.start.composite(), w.end.composite()), (601, 608));
    assert!(!w.wraps());

    assert!(w.contains(md(6, 1)));
    assert!(w.contains(md(6, 5)));
    assert!(w.contains(md(6, 8)));
    assert!(!w.contains(md(6, 10)));
    assert!(!w.contains(md(5, 30)));
  }

  #[test]
  fn window_across_month_end() {
    let w = BirthdayWindow::starting(ymd(2024, 4, 28));
    assert_eq!((w.start.composite(), w.end.composite()), (428, 505));
    assert!(!w.wraps());
    assert!(w.contains(md(4, 30)));
    assert!(w.contains(md(5, 1)));
    assert!(!w.contains(md(5, 6)));
  }

  #[test]
  fn window_across_new_year_wraps() {
    let w = BirthdayWindow::starting(ymd(2024, 12, 29));
    assert_eq!((w.start.composite(), w.end.composite()), (1229, 105));
    assert!(w.wraps());

    assert!(w.contains(md(12, 29)));
    assert!(w.contains(md(12, 31)));
    assert!(w.contains(md(1, 2)));
    assert!(w.contains(md(1, 5)));
    assert!(!w.contains(md(1, 6)));
    assert!(!w.contains(md(12, 28)));
    assert!(!w.contains(md(6, 15)));
  }

  #[test]
  fn window_ending_on_dec_31_does_not_wrap() {
    let w = BirthdayWindow::starting(ymd(2023, 12, 24));
    assert_eq!(w.end.composite(), 1231);
    assert!(!w.wraps());
    assert!(!w.contains(md(1, 1)));
  }

  #[test]
  fn leap_day_birthday_is_matched_in_any_year() {
    let w = BirthdayWindow::starting(ymd(2023, 2, 25));
    assert_eq!(w.end.composite(), 304);
    assert!(w.contains(MonthDay::of(ymd(2000, 2, 29))));
  }

  #[test]
  fn fixed_clock_returns_its_date() {
    assert_eq!(FixedClock(ymd(2024, 6, 1)).today(), ymd(2024, 6, 1));
  }
}
