//! Kenyan-locale (en-KE) money and date formatting for the printed page.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use num_format::{Locale, ToFormattedString};
use rust_decimal::prelude::{Decimal, FromPrimitive, FromStr, RoundingStrategy, ToPrimitive};

/// Currency symbol used by the en-KE locale for KES
pub const CURRENCY_SYMBOL: &str = "Ksh";

/// Text shown for date strings that cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// East Africa Time, UTC+03:00 all year
const EAT_OFFSET_HOURS: i64 = 3;

/// Format an amount as Kenyan Shillings, e.g. `1234.5` -> `Ksh 1,234.50`.
///
/// The symbol is separated from the digits by a no-break space. Amounts are
/// rounded half away from zero to whole cents on their decimal text, so
/// `1.005` becomes `1.01`. Negative amounts keep their minus sign even when
/// they round to zero.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return format!("{CURRENCY_SYMBOL}\u{a0}NaN");
    }
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{sign}{CURRENCY_SYMBOL}\u{a0}∞");
    }

    let digits = match to_cents(amount.abs()) {
        Some((whole, cents)) => {
            format!("{}.{cents:02}", whole.to_formatted_string(&Locale::en))
        }
        None => out_of_range_digits(amount.abs()),
    };

    format!("{sign}{CURRENCY_SYMBOL}\u{a0}{digits}")
}

/// Split a non-negative amount into whole shillings and cents
fn to_cents(amount: f64) -> Option<(u128, u32)> {
    let value = Decimal::from_str(&amount.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(amount))?;
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    let whole = rounded.trunc().to_u128()?;
    let cents = (rounded.fract() * Decimal::ONE_HUNDRED).to_u32()?;
    Some((whole, cents))
}

// Beyond Decimal's range (~7.9e28) cents are meaningless; group the integer digits only
fn out_of_range_digits(amount: f64) -> String {
    let plain = format!("{amount:.2}");
    let (int_part, frac) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{grouped}.{frac}")
}

/// Format an ISO-8601 date string as a long en-KE date, e.g. `15 March 2024`.
///
/// Timestamps with an offset are converted to East Africa Time. Bare dates
/// are taken as UTC midnight and offset-less date-times as local time.
/// Unparseable input yields `Invalid Date`.
pub fn format_date(value: &str) -> String {
    match parse_local(value.trim()) {
        Some(local) => long_date(local),
        None => INVALID_DATE.to_string(),
    }
}

/// Format an instant (e.g. the print time) the same way as [`format_date`]
pub fn format_instant(instant: DateTime<Utc>) -> String {
    match to_eat(instant.naive_utc()) {
        Some(local) => long_date(local),
        None => INVALID_DATE.to_string(),
    }
}

fn long_date(local: NaiveDateTime) -> String {
    local.format("%-d %B %Y").to_string()
}

fn to_eat(utc: NaiveDateTime) -> Option<NaiveDateTime> {
    utc.checked_add_signed(Duration::hours(EAT_OFFSET_HOURS))
}

fn parse_local(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return to_eat(dt.naive_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return to_eat(date.and_hms_opt(0, 0, 0)?);
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}
