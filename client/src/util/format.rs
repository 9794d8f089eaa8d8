//! Display formatting for dates and prices.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// `YYYY-MM-DD[T...]` as `DD/MM/YYYY`. Anything unparseable is returned
/// unchanged so bad backend data is still visible.
pub fn format_date(raw: &str) -> String {
    let day = raw.split(['T', ' ']).next().unwrap_or_default();
    let mut parts = day.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d))
            if y.len() == 4 && m.len() == 2 && d.len() == 2 && day.chars().all(|c| c.is_ascii_digit() || c == '-') =>
        {
            format!("{d}/{m}/{y}")
        }
        _ => raw.to_owned(),
    }
}

/// Ticket price label.
pub fn format_price(price: f64) -> String {
    if price > 0.0 { format!("R$ {price:.2}") } else { "Free".to_owned() }
}

/// `created_at` timestamp as a "member since" label.
pub fn member_since(created_at: Option<&str>) -> Option<String> {
    created_at
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| format!("Member since {}", format_date(raw)))
}
