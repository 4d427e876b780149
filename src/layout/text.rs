use crate::units::Pt;
use std::ops::Range;

const TABSIZE: usize = 4;

/// Splits text into lines that each measure no more than `max_width`.
///
/// # Wrapping Behavior
///
/// Explicit newlines always start a new line (blank lines are dropped). Within a
/// paragraph, words are added to the current line for as long as the line still fits;
/// the whitespace at a break is dropped and runs of whitespace collapse to a single
/// space. A word that is wider than a whole line on its own is broken between
/// characters so that nothing ever overflows, though a single character wider than
/// the line is still emitted on a line of its own.
///
/// Empty or whitespace-only input yields no lines at all.
pub fn split_to_width<F>(text: &str, max_width: Pt, measure: F) -> Vec<String>
where
    F: Fn(&str) -> Pt,
{
    // replace tabs with spaces and normalize newlines
    let text = text
        .replace('\t', &" ".repeat(TABSIZE))
        .replace("\r\n", "\n")
        .replace('\r', "\n");

    let mut lines: Vec<String> = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();

        for word in paragraph.split_whitespace() {
            let candidate = if line.is_empty() {
                word.to_string()
            } else {
                format!("{line} {word}")
            };
            if measure(&candidate) <= max_width {
                line = candidate;
                continue;
            }

            // the word doesn't fit after what we have, so it starts a new line
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }

            if measure(word) <= max_width {
                line.push_str(word);
            } else {
                // no break point - force character breaks
                for ch in word.chars() {
                    line.push(ch);
                    if line.chars().count() > 1 && measure(&line) > max_width {
                        line.pop();
                        lines.push(std::mem::take(&mut line));
                        line.push(ch);
                    }
                }
            }
        }

        if !line.is_empty() {
            lines.push(line);
        }
    }

    lines
}

/// Packs items of the given widths into rows, left to right, in their given order.
///
/// Each item occupies its own width plus `gap`. Item `i` starts a new row when the row
/// it would join already holds at least one item and `row width + widths[i] + gap`
/// exceeds `max_width`. This is a single greedy pass: items are never reordered to fill
/// rows better, and an item wider than `max_width` still gets a row of its own.
///
/// Returns the index range of the items on each row.
pub fn pack_rows(widths: &[Pt], gap: Pt, max_width: Pt) -> Vec<Range<usize>> {
    let mut rows: Vec<Range<usize>> = Vec::new();
    let mut start = 0usize;
    let mut row_width = Pt(0.0);

    for (i, &width) in widths.iter().enumerate() {
        if i > start && row_width + width + gap > max_width {
            rows.push(start..i);
            start = i;
            row_width = Pt(0.0);
        }
        row_width += width + gap;
    }

    if start < widths.len() {
        rows.push(start..widths.len());
    }

    rows
}
