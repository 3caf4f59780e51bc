/// Render an ISO 8601 duration (`PT(\d+H)?(\d+M)?(\d+S)?`) as a clock string.
///
/// Hours present renders `H:MM:SS`; otherwise `M:SS` with minutes unpadded
/// and seconds zero-padded to two digits. Input that does not match the
/// pattern fails softly to `"0:00"`.
pub fn format_duration(iso: &str) -> String {
    let Some(total) = parse_iso_duration_secs(iso) else {
        return "0:00".to_string();
    };

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Parse `PT(\d+H)?(\d+M)?(\d+S)?` into total seconds.
///
/// Designators must appear in H, M, S order, each at most once; missing
/// groups default to 0. Anything else is a mismatch.
fn parse_iso_duration_secs(iso: &str) -> Option<u64> {
    let rest = iso.strip_prefix("PT")?;

    // Designator rank must strictly increase: H(0) -> M(1) -> S(2).
    let mut total: u64 = 0;
    let mut last_rank: i8 = -1;
    let mut digits = String::new();
    for c in rest.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        let (rank, unit_secs) = match c {
            'H' => (0, 3600),
            'M' => (1, 60),
            'S' => (2, 1),
            _ => return None,
        };
        if digits.is_empty() || rank <= last_rank {
            return None;
        }
        let value: u64 = digits.parse().ok()?;
        total = total.checked_add(value.checked_mul(unit_secs)?)?;
        last_rank = rank;
        digits.clear();
    }
    if !digits.is_empty() {
        return None;
    }
    Some(total)
}

#[cfg(test)]
#[path = "../../tests/unit/format/duration.rs"]
mod tests;
