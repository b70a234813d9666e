//! Display formatting for dates, fees and enum labels.

use chrono::NaiveDate;

/// Detail-page date, e.g. "15 January 2025".
#[must_use]
pub fn long_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Article byline date, e.g. "January 15, 2025".
#[must_use]
pub fn article_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Card date, e.g. "Jan 15, 2025".
#[must_use]
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Relative date from `today`, e.g. "3 days ago", "about 2 months ago",
/// "in 5 days". Same-day dates read "today".
#[must_use]
pub fn relative_date(date: NaiveDate, today: NaiveDate) -> String {
    let days = (today - date).num_days();
    match distance(days.unsigned_abs()) {
        None => "today".to_string(),
        Some(text) if days > 0 => format!("{text} ago"),
        Some(text) => format!("in {text}"),
    }
}

/// Whole-day distance in words, bucketed the way listing cards show it.
fn distance(days: u64) -> Option<String> {
    const MONTH: u64 = 30;
    const YEAR: u64 = 365;

    let text = match days {
        0 => return None,
        1 => "1 day".to_string(),
        2..=29 => format!("{days} days"),
        30..=44 => "about 1 month".to_string(),
        45..=59 => "about 2 months".to_string(),
        60..=364 => format!("{} months", (days + MONTH / 2) / MONTH),
        _ => {
            let years = days / YEAR;
            let months = (days % YEAR) / MONTH;
            if months < 3 {
                format!("about {}", plural(years, "year"))
            } else if months < 9 {
                format!("over {}", plural(years, "year"))
            } else {
                format!("almost {}", plural(years + 1, "year"))
            }
        }
    };
    Some(text)
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Rupee amount, e.g. "₹500".
#[must_use]
pub fn rupees(amount: u32) -> String {
    format!("₹{amount}")
}

/// Upper-case the first character: "open" becomes "Open".
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::job::tests::date;

    #[test]
    fn test_long_and_short_dates() {
        let d = date("2025-01-05");
        assert_eq!(long_date(d), "5 January 2025");
        assert_eq!(short_date(d), "Jan 5, 2025");
        assert_eq!(article_date(d), "January 5, 2025");
        assert_eq!(short_date(date("2024-11-28")), "Nov 28, 2024");
    }

    #[test]
    fn test_relative_days() {
        let today = date("2025-03-10");
        assert_eq!(relative_date(today, today), "today");
        assert_eq!(relative_date(date("2025-03-09"), today), "1 day ago");
        assert_eq!(relative_date(date("2025-03-07"), today), "3 days ago");
        assert_eq!(relative_date(date("2025-03-15"), today), "in 5 days");
    }

    #[test]
    fn test_relative_months() {
        let today = date("2025-06-30");
        assert_eq!(relative_date(date("2025-05-25"), today), "about 1 month ago");
        assert_eq!(relative_date(date("2025-05-10"), today), "about 2 months ago");
        assert_eq!(relative_date(date("2025-02-28"), today), "4 months ago");
    }

    #[test]
    fn test_relative_years() {
        let today = date("2025-06-30");
        assert_eq!(relative_date(date("2024-06-01"), today), "about 1 year ago");
        assert_eq!(relative_date(date("2023-12-01"), today), "over 1 year ago");
        assert_eq!(relative_date(date("2023-08-01"), today), "almost 2 years ago");
        assert_eq!(relative_date(date("2022-06-01"), today), "about 3 years ago");
    }

    #[test]
    fn test_rupees() {
        assert_eq!(rupees(0), "₹0");
        assert_eq!(rupees(850), "₹850");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("open"), "Open");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("Psu"), "Psu");
    }
}
