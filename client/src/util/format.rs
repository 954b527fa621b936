//! Display formatting for money and percentages.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Whole number with `,` thousands grouping, e.g. `53500.4` -> `"53,500"`.
///
/// Non-finite input renders as `"0"`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `$` prefixed [`group_thousands`].
#[must_use]
pub fn money(value: f64) -> String {
    let grouped = group_thousands(value);
    match grouped.strip_prefix('-') {
        Some(abs) => format!("-${abs}"),
        None => format!("${grouped}"),
    }
}

/// Signed whole percentage, e.g. `18.89` -> `"+19%"`.
///
/// `None` (no baseline to compare against) renders as `"N/D"`.
#[must_use]
pub fn signed_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            // `+ 0.0` folds -0 into 0.
            let rounded = v.round() + 0.0;
            if rounded < 0.0 { format!("{rounded:.0}%") } else { format!("+{rounded:.0}%") }
        }
        _ => "N/D".to_owned(),
    }
}

/// Copyright year shown in the footer.
#[must_use]
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let year = js_sys::Date::new_0().get_full_year() as i32;
        year
    }
    #[cfg(all(not(feature = "hydrate"), feature = "ssr"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
    #[cfg(not(any(feature = "hydrate", feature = "ssr")))]
    {
        FALLBACK_YEAR
    }
}

#[cfg(not(any(feature = "hydrate", feature = "ssr")))]
const FALLBACK_YEAR: i32 = 2026;
