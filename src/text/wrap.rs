use crate::foundation::error::CardResult;

/// Ellipsis appended to a truncated last line.
const ELLIPSIS: char = '…';

/// Outcome of wrapping a title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrappedTitle {
    /// Lines in draw order. Empty for an empty title.
    pub lines: Vec<String>,
    /// Whether the last line was cut and given an ellipsis.
    pub truncated: bool,
}

impl WrappedTitle {
    /// Count of lines actually produced.
    ///
    /// This number alone decides the vertical offset of every metadata row
    /// under the title: one line (or none) leaves rows at their base
    /// position, two lines shifts them down by one line-height unit.
    pub fn lines_used(&self) -> u32 {
        self.lines.len() as u32
    }
}

/// Greedy word wrap with last-line ellipsis truncation.
///
/// Words are split on single spaces and never broken internally; a lone word
/// wider than `max_width` is emitted whole. Accumulation continues while the
/// measured width stays within `max_width`. The word that would overflow
/// either starts the next line or, on the final allowed line, triggers
/// truncation of the text accumulated so far: characters are dropped from
/// the end until the line plus ellipsis fits (or nothing is left), and the
/// remaining words are discarded.
///
/// `measure` must return the advance width of its argument in the title's
/// font and size.
pub fn wrap_title<F>(
    title: &str,
    max_width: f32,
    max_lines: usize,
    mut measure: F,
) -> CardResult<WrappedTitle>
where
    F: FnMut(&str) -> CardResult<f32>,
{
    if title.is_empty() || max_lines == 0 {
        return Ok(WrappedTitle {
            lines: Vec::new(),
            truncated: false,
        });
    }

    let mut words = title.split(' ');
    let mut lines: Vec<String> = Vec::new();
    // First word always opens line 0, regardless of its width.
    let mut current = words.next().unwrap_or_default().to_string();

    for word in words {
        let candidate = format!("{current} {word}");
        if measure(&candidate)? <= max_width {
            current = candidate;
            continue;
        }

        if lines.len() == max_lines - 1 {
            let line = truncate_with_ellipsis(current, max_width, &mut measure)?;
            lines.push(line);
            return Ok(WrappedTitle {
                lines,
                truncated: true,
            });
        }

        lines.push(std::mem::replace(&mut current, word.to_string()));
    }

    lines.push(current);
    Ok(WrappedTitle {
        lines,
        truncated: false,
    })
}

/// Drop trailing characters until `line + ELLIPSIS` fits, then append it.
fn truncate_with_ellipsis<F>(
    mut line: String,
    max_width: f32,
    measure: &mut F,
) -> CardResult<String>
where
    F: FnMut(&str) -> CardResult<f32>,
{
    while !line.is_empty() && measure(&format!("{line}{ELLIPSIS}"))? > max_width {
        line.pop();
    }
    line.push(ELLIPSIS);
    Ok(line)
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
