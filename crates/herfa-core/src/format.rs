//! Display formatting for dates, numbers, ratings and labels (Arabic, Iraq).

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Timelike, Utc};
use regex::Regex;

use crate::models::{RequestStatus, Role};

/// Iraqi (Levantine) month names, January first.
const MONTHS: [&str; 12] = [
    "كانون الثاني",
    "شباط",
    "آذار",
    "نيسان",
    "أيار",
    "حزيران",
    "تموز",
    "آب",
    "أيلول",
    "تشرين الأول",
    "تشرين الثاني",
    "كانون الأول",
];

const ARABIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

static URL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://(www\.)?").expect("valid regex"));

/// Replaces ASCII digits with Arabic-Indic digits.
pub fn to_arabic_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => ARABIC_DIGITS[d as usize],
            None => c,
        })
        .collect()
}

/// `١٥ آذار ٢٠٢٤`
pub fn format_date(date: &DateTime<Utc>) -> String {
    to_arabic_digits(&format!(
        "{} {} {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    ))
}

/// `١٥ آذار ٢٠٢٤، ٠٣:٠٥ م`
pub fn format_date_time(date: &DateTime<Utc>) -> String {
    let (is_pm, hour) = date.hour12();
    let suffix = if is_pm { "م" } else { "ص" };
    format!(
        "{}، {} {}",
        format_date(date),
        to_arabic_digits(&format!("{:02}:{:02}", hour, date.minute())),
        suffix
    )
}

/// `الآن`, `منذ ٥ دقائق`, ... falling back to the full date after 30 days.
pub fn format_relative_time(date: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let secs = (*now - *date).num_seconds();
    let mins = secs.div_euclid(60);
    let hours = mins.div_euclid(60);
    let days = hours.div_euclid(24);

    if secs < 60 {
        "الآن".to_string()
    } else if mins < 60 {
        format!("منذ {} {}", mins, if mins == 1 { "دقيقة" } else { "دقائق" })
    } else if hours < 24 {
        format!("منذ {} {}", hours, if hours == 1 { "ساعة" } else { "ساعات" })
    } else if days < 30 {
        format!("منذ {} {}", days, if days == 1 { "يوم" } else { "أيام" })
    } else {
        format_date(date)
    }
}

/// Formats an 11-digit Iraqi number as `0790 123 4567`; anything else is
/// returned unchanged.
pub fn format_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 11 && digits.starts_with('0') {
        format!("{} {} {}", &digits[..4], &digits[4..7], &digits[7..])
    } else {
        phone.to_string()
    }
}

/// Star string using `⯨` for the half star, e.g. `★★★★⯨`.
///
/// A zero rating renders as five empty stars without the number.
pub fn format_rating_stars(rating: f64, show_number: bool) -> String {
    if rating == 0.0 || rating.is_nan() {
        return "☆☆☆☆☆".to_string();
    }
    let clamped = rating.clamp(0.0, 5.0);
    let full = clamped.floor() as usize;
    let half = clamped.fract() >= 0.5;
    let empty = 5usize.saturating_sub(full + usize::from(half));
    let stars = format!(
        "{}{}{}",
        "★".repeat(full),
        if half { "⯨" } else { "" },
        "☆".repeat(empty)
    );
    if show_number {
        format!("{} ({:.1})", stars, rating)
    } else {
        stars
    }
}

/// Arabic-Indic digits with `٬` thousands grouping.
pub fn format_arabic_number(num: i64) -> String {
    let digits = num.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('٬');
        }
        grouped.push(c);
    }
    let sign = if num < 0 { "-" } else { "" };
    format!("{}{}", sign, to_arabic_digits(&grouped))
}

pub fn format_experience(years: u32) -> String {
    match years {
        0 => "بدون خبرة".to_string(),
        1 => "سنة واحدة".to_string(),
        2 => "سنتان".to_string(),
        3..=10 => format!("{} سنوات", years),
        _ => format!("{} سنة", years),
    }
}

pub fn format_request_status(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Pending => "قيد الانتظار",
        RequestStatus::Accepted => "مقبول",
        RequestStatus::Rejected => "مرفوض",
        RequestStatus::Completed => "مكتمل",
        RequestStatus::Cancelled => "ملغي",
    }
}

pub fn format_user_role(role: Role) -> &'static str {
    match role {
        Role::Client => "عميل",
        Role::Worker => "عامل",
        Role::Admin => "مدير",
    }
}

/// Cuts `text` to `max_len` characters and appends `...` when it was longer.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_len).collect();
    truncated.push_str("...");
    truncated
}

pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["بايت", "كيلوبايت", "ميجابايت", "جيجابايت"];
    if bytes == 0 {
        return format!("0 {}", UNITS[0]);
    }
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", size, UNITS[unit])
}

/// Strips the scheme and a leading `www.` for display.
pub fn format_url(url: &str) -> String {
    URL_PREFIX.replace(url, "").into_owned()
}

pub fn status_color(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Pending => "#FFA500",
        RequestStatus::Accepted => "#4CAF50",
        RequestStatus::Rejected => "#F44336",
        RequestStatus::Completed => "#2196F3",
        RequestStatus::Cancelled => "#9E9E9E",
    }
}

pub fn rating_color(rating: f64) -> &'static str {
    if rating >= 4.5 {
        "#4CAF50"
    } else if rating >= 3.5 {
        "#8BC34A"
    } else if rating >= 2.5 {
        "#FFC107"
    } else if rating >= 1.5 {
        "#FF9800"
    } else {
        "#F44336"
    }
}
