//! Plain-text rendering of an [`AgeResult`].
//!
//! Display state lives entirely in the returned string; the renderer holds
//! nothing between invocations.

use crate::age::AgeResult;

const ALIGN_WIDTH: usize = 38;

/// Render the five result fields as aligned `key: .... value` rows under a
/// dashed header.
pub fn render_plain(age: &AgeResult) -> String {
    let rows = [
        ("Years", age.years.to_string()),
        ("Months", age.months.to_string()),
        ("Days", age.days.to_string()),
        ("Total days lived", group_thousands(age.total_days_lived)),
        (
            "Days until next birthday",
            next_birthday_label(age.days_until_next_birthday),
        ),
    ];

    let mut out = String::new();
    out.push_str(&build_header_line("Your age", ALIGN_WIDTH));
    out.push('\n');
    for (key, value) in rows {
        out.push_str(&build_stat_row(key, &value, ALIGN_WIDTH));
        out.push('\n');
    }
    out
}

/// The sentinel 365 means the birthday is today; every other value is shown
/// as-is.
fn next_birthday_label(days: i64) -> String {
    if days == 365 {
        "0 (Happy Birthday! 🎉)".to_string()
    } else {
        days.to_string()
    }
}

fn build_stat_row(key: &str, value: &str, align_width: usize) -> String {
    let key_part = format!("{key}: ");
    let base_len = key_part.len() + value.len();
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => format!("{} ", ".".repeat(n - 1)),
    };

    format!("{key_part}{dots}{value}")
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("{label} ");
    let dash_count = align_width.saturating_sub(base.len()) + 2;
    format!("{base}{}", "-".repeat(dash_count))
}

/// Thousands-grouped decimal rendering of a non-negative count.
fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
