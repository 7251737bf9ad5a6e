//! Payment due-date calendar
//!
//! Parses due-date labels like "15th" and renders a month calendar with
//! due dates marked. A colored renderer is available when the `color`
//! feature is enabled; the plain renderer is always there as the
//! fallback, so nothing else in the crate depends on styling support.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use hourglass_rs::SafeTimeProvider;

use crate::decimal::Money;
use crate::errors::{PlannerError, Result};
use crate::report::{double_separator, format_usd, separator};
use crate::types::CreditCard;

/// day used when a due-date label cannot be parsed
pub const DEFAULT_DUE_DAY: u32 = 15;

/// extract the day number from a label like "15th" or "1st of month"
pub fn parse_due_day(due_date: &str) -> u32 {
    let mut digits = String::new();
    for c in due_date.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if !digits.is_empty() {
            break;
        }
    }
    match digits.parse::<u32>() {
        Ok(day) if (1..=31).contains(&day) => day,
        _ => DEFAULT_DUE_DAY,
    }
}

/// ordinal suffix for a day number: 1st, 2nd, 3rd, 4th, 11th-13th
pub fn day_suffix(day: u32) -> &'static str {
    match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// parse "YYYY-MM" with year 1900-2100
pub fn parse_calendar_month(input: &str) -> Result<(i32, u32)> {
    let invalid = || PlannerError::InvalidCalendarMonth {
        input: input.to_string(),
    };
    let (year_raw, month_raw) = input.split_once('-').ok_or_else(invalid)?;
    let year: i32 = year_raw.trim().parse().map_err(|_| invalid())?;
    let month: u32 = month_raw.trim().parse().map_err(|_| invalid())?;
    if !(1900..=2100).contains(&year) || !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok((year, month))
}

/// current year and month from the time provider
pub fn current_month(time: &SafeTimeProvider) -> (i32, u32) {
    let now = time.now();
    (now.year(), now.month())
}

struct DueEntry {
    card: String,
    payment: Money,
    balance: Money,
}

/// due days for cards still carrying a balance, keyed by day of month
fn due_dates(cards: &[CreditCard]) -> BTreeMap<u32, Vec<DueEntry>> {
    let mut days: BTreeMap<u32, Vec<DueEntry>> = BTreeMap::new();
    for card in cards.iter().filter(|c| c.balance.is_positive()) {
        days.entry(parse_due_day(&card.due_date))
            .or_default()
            .push(DueEntry {
                card: card.name.clone(),
                payment: card.minimum_payment,
                balance: card.balance,
            });
    }
    days
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.and_then(|d| d.pred_opt()).map(|d| d.day()).unwrap_or(30)
}

/// monday-first weeks; 0 marks a cell outside the month
fn month_weeks(year: i32, month: u32) -> Result<Vec<[u32; 7]>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        PlannerError::InvalidCalendarMonth {
            input: format!("{year}-{month:02}"),
        }
    })?;
    let offset = first.weekday().num_days_from_monday() as usize;
    let total = days_in_month(year, month);

    let mut weeks = Vec::new();
    let mut week = [0u32; 7];
    let mut slot = offset;
    for day in 1..=total {
        week[slot] = day;
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [0u32; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }
    Ok(weeks)
}

fn month_title(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{year}-{month:02}"))
}

fn header(year: i32, month: u32) -> String {
    format!(
        "\nPAYMENT CALENDAR - {}\n{}\n",
        month_title(year, month),
        double_separator(50)
    )
}

fn legend(days: &BTreeMap<u32, Vec<DueEntry>>) -> String {
    let mut out = String::from("Payment Due Dates:\n");
    out.push_str(&format!("{}\n", separator(20)));
    for (day, entries) in days {
        out.push_str(&format!("- {}{}:\n", day, day_suffix(*day)));
        let mut total = Money::ZERO;
        for entry in entries {
            out.push_str(&format!(
                "    {}: {} (Balance: {})\n",
                entry.card,
                format_usd(entry.payment),
                format_usd(entry.balance)
            ));
            total += entry.payment;
        }
        if entries.len() > 1 {
            out.push_str(&format!("    Total due: {}\n", format_usd(total)));
        }
    }
    out
}

/// renders one month of due dates as text
pub trait CalendarRenderer {
    fn render(&self, cards: &[CreditCard], year: i32, month: u32) -> Result<String>;
}

/// best renderer this build supports
pub fn default_renderer() -> Box<dyn CalendarRenderer> {
    #[cfg(feature = "color")]
    {
        Box::new(ColorCalendar)
    }
    #[cfg(not(feature = "color"))]
    {
        Box::new(PlainCalendar)
    }
}

/// ascii calendar, no styling
pub struct PlainCalendar;

impl CalendarRenderer for PlainCalendar {
    fn render(&self, cards: &[CreditCard], year: i32, month: u32) -> Result<String> {
        let weeks = month_weeks(year, month)?;
        let days = due_dates(cards);

        let mut out = header(year, month);
        if days.is_empty() {
            out.push_str("No payment due dates found for cards with balances.\n");
            return Ok(out);
        }

        out.push_str("Mo Tu We Th Fr Sa Su\n");
        for week in weeks {
            let mut row = String::new();
            for (index, day) in week.iter().enumerate() {
                if index > 0 {
                    row.push(' ');
                }
                if *day == 0 {
                    row.push_str("   ");
                } else {
                    let marker = if days.contains_key(day) { '*' } else { ' ' };
                    row.push_str(&format!("{day:>2}{marker}"));
                }
            }
            out.push_str(row.trim_end());
            out.push('\n');
        }

        out.push('\n');
        out.push_str(&legend(&days));
        Ok(out)
    }
}

#[cfg(feature = "color")]
pub use self::color::ColorCalendar;

#[cfg(feature = "color")]
mod color {
    use super::*;
    use crossterm::style::{Color, Stylize};

    /// distinct colors that read well against dark terminals
    const CARD_COLORS: [Color; 10] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::DarkRed,
        Color::DarkGreen,
        Color::DarkBlue,
        Color::DarkMagenta,
        Color::DarkCyan,
    ];

    /// one color per card with a balance, cycling when cards outnumber colors
    fn assign_card_colors(cards: &[CreditCard]) -> Vec<(String, Color)> {
        cards
            .iter()
            .filter(|c| c.balance.is_positive())
            .enumerate()
            .map(|(index, c)| (c.name.clone(), CARD_COLORS[index % CARD_COLORS.len()]))
            .collect()
    }

    /// calendar with each card's due dates tinted in its own color
    pub struct ColorCalendar;

    impl CalendarRenderer for ColorCalendar {
        fn render(&self, cards: &[CreditCard], year: i32, month: u32) -> Result<String> {
            let weeks = month_weeks(year, month)?;
            let days = due_dates(cards);
            let colors = assign_card_colors(cards);
            let color_of = |name: &str| {
                colors
                    .iter()
                    .find(|(card, _)| card == name)
                    .map(|(_, color)| *color)
            };

            let mut out = header(year, month);
            if days.is_empty() {
                out.push_str("No payment due dates found for cards with balances.\n");
                return Ok(out);
            }

            out.push_str("Mo Tu We Th Fr Sa Su\n");
            for week in weeks {
                let mut row = String::new();
                for (index, day) in week.iter().enumerate() {
                    if index > 0 {
                        row.push(' ');
                    }
                    match days.get(day) {
                        Some(entries) if *day != 0 => {
                            let marker = if entries.len() > 1 { '*' } else { ' ' };
                            let cell = format!("{day:>2}{marker}");
                            let tint = color_of(&entries[0].card).unwrap_or(Color::White);
                            row.push_str(&format!("{}", cell.white().on(tint)));
                        }
                        _ if *day == 0 => row.push_str("   "),
                        _ => row.push_str(&format!("{day:>2} ")),
                    }
                }
                out.push_str(row.trim_end());
                out.push('\n');
            }

            out.push_str("\nColor Legend:\n");
            out.push_str(&format!("{}\n", separator(20)));
            for (name, tint) in &colors {
                out.push_str(&format!("{}\n", format!(" {name} ").white().on(*tint)));
            }

            out.push('\n');
            out.push_str(&legend(&days));
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use chrono::{TimeZone, Utc};
    use hourglass_rs::TimeSource;
    use rust_decimal_macros::dec;

    fn card(name: &str, due: &str) -> CreditCard {
        CreditCard::new(
            name,
            Money::from_major(500),
            Money::from_major(25),
            Rate::from_percentage(dec!(18)),
        )
        .with_due_date(due)
    }

    #[test]
    fn test_parse_due_day() {
        assert_eq!(parse_due_day("15th"), 15);
        assert_eq!(parse_due_day("1st"), 1);
        assert_eq!(parse_due_day("2nd"), 2);
        assert_eq!(parse_due_day("3rd"), 3);
        assert_eq!(parse_due_day("21st"), 21);
        assert_eq!(parse_due_day("the 7 of each month"), 7);
        // unparseable or out-of-range labels fall back to the 15th
        assert_eq!(parse_due_day("whenever"), 15);
        assert_eq!(parse_due_day("45th"), 15);
        assert_eq!(parse_due_day("0th"), 15);
        assert_eq!(parse_due_day(""), 15);
    }

    #[test]
    fn test_day_suffix() {
        assert_eq!(day_suffix(1), "st");
        assert_eq!(day_suffix(2), "nd");
        assert_eq!(day_suffix(3), "rd");
        assert_eq!(day_suffix(4), "th");
        assert_eq!(day_suffix(11), "th");
        assert_eq!(day_suffix(12), "th");
        assert_eq!(day_suffix(13), "th");
        assert_eq!(day_suffix(21), "st");
        assert_eq!(day_suffix(22), "nd");
        assert_eq!(day_suffix(31), "st");
    }

    #[test]
    fn test_parse_calendar_month() {
        assert_eq!(parse_calendar_month("2024-07").unwrap(), (2024, 7));
        assert_eq!(parse_calendar_month("1999-12").unwrap(), (1999, 12));
        assert!(parse_calendar_month("2024-13").is_err());
        assert!(parse_calendar_month("1800-01").is_err());
        assert!(parse_calendar_month("2024").is_err());
        assert!(parse_calendar_month("july 2024").is_err());
    }

    #[test]
    fn test_current_month_uses_time_provider() {
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 7, 15, 0, 0, 0).unwrap(),
        ));
        assert_eq!(current_month(&time), (2024, 7));
    }

    #[test]
    fn test_month_weeks_layout() {
        // july 2024 starts on a monday and has 31 days
        let weeks = month_weeks(2024, 7).unwrap();
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0], [1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(weeks[4][2], 31);

        // february in a leap year
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn test_plain_render_marks_due_days() {
        let cards = vec![card("Visa", "15th"), card("Amex", "28th")];
        let text = PlainCalendar.render(&cards, 2024, 7).unwrap();

        assert!(text.contains("PAYMENT CALENDAR - July 2024"));
        assert!(text.contains("15*"));
        assert!(text.contains("28*"));
        assert!(text.contains("- 15th:"));
        assert!(text.contains("Visa: $25.00 (Balance: $500.00)"));
    }

    #[test]
    fn test_plain_render_totals_shared_due_days() {
        let cards = vec![card("Visa", "15th"), card("Amex", "15th")];
        let text = PlainCalendar.render(&cards, 2024, 7).unwrap();

        assert!(text.contains("Total due: $50.00"));
    }

    #[test]
    fn test_render_without_balances_says_so() {
        let mut paid = card("Visa", "15th");
        paid.balance = Money::ZERO;
        let text = PlainCalendar.render(&[paid], 2024, 7).unwrap();

        assert!(text.contains("No payment due dates found"));
    }

    #[cfg(feature = "color")]
    #[test]
    fn test_color_render_keeps_title_and_legend() {
        let cards = vec![card("Visa", "15th")];
        let text = ColorCalendar.render(&cards, 2024, 7).unwrap();

        assert!(text.contains("July 2024"));
        assert!(text.contains("Color Legend:"));
        assert!(text.contains("Visa"));
    }
}
