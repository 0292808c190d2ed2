//! Compact number formatting used by the profiler tables.

/// Format a duration in seconds.
///
/// Examples: `.042`, `1.50`, `42`, `3.5m`, `17m`, `5h`, `12D`.
pub fn format_time(seconds: f64) -> String {
    if seconds.is_nan() {
        return "-".to_string();
    }

    let sec = seconds.round() as i64;
    if sec >= 100 {
        let minutes = sec / 60;
        if minutes < 100 {
            if minutes < 10 {
                // One digit for the leftover seconds as a fraction of a minute.
                let frac = (sec - minutes * 60) as f64 / 60.0 * 100.0;
                let digit = frac.to_string().chars().next().unwrap_or('0');
                return format!("{minutes}.{digit}m");
            }
            return format!("{minutes}m");
        }
        let hours = minutes / 60;
        if hours < 100 {
            return format!("{hours}h");
        }
        return format!("{}D", hours / 24);
    }

    if sec >= 10 {
        sec.to_string()
    } else if seconds >= 1.0 {
        format!("{seconds:.2}")
    } else if seconds >= 0.001 {
        let s = format!("{seconds:.3}");
        match s.strip_prefix('0') {
            Some(rest) => rest.to_string(),
            None => s,
        }
    } else {
        ".000".to_string()
    }
}

/// Format a tuple count.
///
/// With `exact` the plain integer is returned. Otherwise large counts are
/// abbreviated (`1.23B`, `456M`, `7.89M`) and smaller ones are grouped by
/// thousands (`12,345`).
pub fn format_count(amount: u64, exact: bool) -> String {
    if exact {
        return amount.to_string();
    }

    if amount >= 1_000_000_000 {
        let hundredths = round_div(amount, 10_000_000);
        format!("{}.{:02}B", hundredths / 100, hundredths % 100)
    } else if amount >= 100_000_000 {
        format!("{}M", round_div(amount, 1_000_000))
    } else if amount >= 1_000_000 {
        let hundredths = round_div(amount, 10_000);
        format!("{}.{:02}M", hundredths / 100, hundredths % 100)
    } else {
        group_thousands(amount)
    }
}

/// `amount / divisor` rounded half up, without overflowing near `u64::MAX`.
fn round_div(amount: u64, divisor: u64) -> u64 {
    amount / divisor + u64::from(amount % divisor >= divisor / 2)
}

fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
