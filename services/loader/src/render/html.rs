use std::fmt::{self, Write};

use super::page::{ResultPage, CHART_HEADER};
use super::sink::PlaceholderField;

/// Text escaped for use in HTML content and quoted attribute values.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '>' => f.write_str("&gt;")?,
                '<' => f.write_str("&lt;")?,
                '"' => f.write_str("&quot;")?,
                '&' => f.write_str("&amp;")?,
                '\'' => f.write_str("&apos;")?,
                c => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

pub fn render(page: &ResultPage) -> String {
    let mut out = String::new();
    write_page(&mut out, page).expect("writing to a String cannot fail");
    out
}

fn write_page(out: &mut String, page: &ResultPage) -> fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(out, "<title>Spam Detector Results</title>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;

    writeln!(out, "<table id=\"chart\">")?;
    write!(out, "<tr>")?;
    for title in CHART_HEADER {
        write!(out, "<th>{}</th>", Escaped(title))?;
    }
    writeln!(out, "</tr>")?;
    for row in page.chart().rows() {
        write!(out, "<tr>")?;
        for cell in row {
            write!(out, "<td>{}</td>", Escaped(cell))?;
        }
        writeln!(out, "</tr>")?;
    }
    writeln!(out, "</table>")?;

    write_field(out, "Accuracy", page.accuracy())?;
    write_field(out, "Precision", page.precision())?;

    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

fn write_field(out: &mut String, label: &str, field: &PlaceholderField) -> fmt::Result {
    write!(
        out,
        "<label for=\"{id}\">{label}</label> <input type=\"text\" id=\"{id}\" readonly",
        id = field.id(),
        label = Escaped(label),
    )?;
    if let Some(placeholder) = field.placeholder() {
        write!(out, " placeholder=\"{}\"", Escaped(placeholder))?;
    }
    writeln!(out, ">")
}
