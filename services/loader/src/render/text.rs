use std::fmt;

use super::page::{ResultPage, CHART_HEADER};
use super::sink::PlaceholderField;

const PADDING: usize = 1;

pub fn render(page: &ResultPage) -> String {
    let table = Table {
        rows: page.chart().rows(),
    };
    format!(
        "{table}\n{}\n{}\n",
        FieldLine(page.accuracy()),
        FieldLine(page.precision())
    )
}

struct Table<'a> {
    rows: &'a [[String; 3]],
}

impl Table<'_> {
    fn column_widths(&self) -> [usize; 3] {
        let mut widths = CHART_HEADER.map(str::len);
        for row in self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = usize::max(*width, cell.chars().count());
            }
        }
        widths
    }
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        write_row(f, &widths, CHART_HEADER.iter().copied())?;
        write_line(f, &widths)?;
        for row in self.rows {
            write_row(f, &widths, row.iter().map(String::as_str))?;
        }
        if self.rows.is_empty() {
            writeln!(f, "(no results)")?;
        }
        Ok(())
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, widths: &[usize]) -> fmt::Result {
    write!(f, "|")?;
    for width in widths {
        write!(f, "{}|", "-".repeat(width + 2 * PADDING))?;
    }
    writeln!(f)
}

fn write_row<'a>(
    f: &mut fmt::Formatter<'_>,
    widths: &[usize],
    cells: impl Iterator<Item = &'a str>,
) -> fmt::Result {
    write!(f, "|")?;
    for (width, cell) in widths.iter().zip(cells) {
        let pad = " ".repeat(PADDING);
        write!(f, "{pad}{cell:<width$}{pad}|", width = *width)?;
    }
    writeln!(f)
}

struct FieldLine<'a>(&'a PlaceholderField);

impl fmt::Display for FieldLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.0.id(), self.0.placeholder().unwrap_or("-"))
    }
}
