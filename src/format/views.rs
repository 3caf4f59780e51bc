/// Abbreviate a decimal view count for display.
///
/// Inclusive thresholds in descending order: billions, millions, thousands,
/// each scaled to one decimal place; exactly one view is singular; everything
/// else renders the plain count. Unparseable input defaults to 0.
pub fn format_view_count(count: &str) -> String {
    let n: u64 = count.trim().parse().unwrap_or(0);

    if n >= 1_000_000_000 {
        format!("{:.1}B views", n as f64 / 1e9)
    } else if n >= 1_000_000 {
        format!("{:.1}M views", n as f64 / 1e6)
    } else if n >= 1_000 {
        format!("{:.1}K views", n as f64 / 1e3)
    } else if n == 1 {
        "1 view".to_string()
    } else {
        format!("{n} views")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/format/views.rs"]
mod tests;
