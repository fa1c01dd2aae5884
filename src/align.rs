//! Column alignment for tag lines.
//!
//! Lines are split on single spaces, so an empty token (two spaces in a row)
//! is a real, zero-width column. Widths are measured with
//! [`display_width`], i.e. as the text will read once placeholders expand.
//! The first line is the free-text description and is never touched.

use crate::placeholder::display_width;
use anyhow::{bail, Result};
use std::str::FromStr;

/// How tag lines are padded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlignMode {
    None,
    /// One width, the widest token on any tag line, shared by every column.
    /// Every column is padded, not only the tag keyword column.
    Shallow,
    /// One width per column index
    #[default]
    Deep,
}

impl FromStr for AlignMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(AlignMode::None),
            "shallow" => Ok(AlignMode::Shallow),
            "deep" => Ok(AlignMode::Deep),
            _ => bail!("unknown alignment mode: {}. Use none, shallow, or deep", s),
        }
    }
}

enum Columns {
    PerColumn(Vec<usize>),
    Global(usize),
}

impl Columns {
    fn width(&self, index: usize) -> usize {
        match self {
            Columns::PerColumn(widths) => widths.get(index).copied().unwrap_or(0),
            Columns::Global(width) => *width,
        }
    }
}

/// Pad every line after the first so tokens form columns.
///
/// With `exclude_last`, the last line is still padded but does not
/// contribute to the column widths.
pub fn align(lines: &mut [String], mode: AlignMode, exclude_last: bool) {
    if mode == AlignMode::None || lines.len() < 2 {
        return;
    }

    let end = if exclude_last { lines.len() - 1 } else { lines.len() };
    let widths: Vec<Vec<usize>> = lines[1..end]
        .iter()
        .map(|line| line.split(' ').map(display_width).collect())
        .collect();

    let columns = match mode {
        AlignMode::Deep => {
            let count = widths.iter().map(Vec::len).max().unwrap_or(0);
            let per_column = (0..count)
                .map(|i| widths.iter().filter_map(|w| w.get(i)).copied().max().unwrap_or(0))
                .collect();
            Columns::PerColumn(per_column)
        }
        _ => Columns::Global(widths.iter().flatten().copied().max().unwrap_or(0)),
    };

    for line in lines.iter_mut().skip(1) {
        *line = pad_line(line, &columns);
    }
}

fn pad_line(line: &str, columns: &Columns) -> String {
    let mut out = String::with_capacity(line.len() * 2);
    for (i, part) in line.split(' ').enumerate() {
        out.push_str(part);
        out.push(' ');
        let pad = columns.width(i).saturating_sub(display_width(part));
        out.push_str(&" ".repeat(pad));
    }
    out.trim().to_string()
}
