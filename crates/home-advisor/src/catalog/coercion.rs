/// Parses a boolean cell. Accepts `true/false`, `1/0`, `yes/no` and `y/n`, any case.
pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "1.0" => Some(true),
        "false" | "0" | "no" | "n" | "0.0" => Some(false),
        _ => None,
    }
}

/// Parses a monetary or measured amount written as an integer or decimal.
pub(crate) fn parse_amount(value: &str) -> Option<f64> {
    let cleaned = value.trim().replace(['$', ','], "");
    cleaned.parse::<f64>().ok().filter(|amount| amount.is_finite())
}

/// Parses a whole count. Integral decimals such as `3.0` are accepted.
pub(crate) fn parse_count(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    if let Ok(count) = trimmed.parse::<u32>() {
        return Some(count);
    }

    let amount = trimmed.parse::<f64>().ok()?;
    if amount.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&amount) {
        Some(amount as u32)
    } else {
        None
    }
}

pub(crate) fn parse_year(value: &str) -> Option<i32> {
    let trimmed = value.trim();
    if let Ok(year) = trimmed.parse::<i32>() {
        return Some(year);
    }

    let amount = trimmed.parse::<f64>().ok()?;
    if amount.fract() == 0.0 && (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&amount) {
        Some(amount as i32)
    } else {
        None
    }
}
