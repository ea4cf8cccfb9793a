use std::io::IsTerminal;

use polars::prelude::*;

/// Collects markdown and prints it styled on a terminal, raw otherwise.
pub struct MarkdownPrinter {
    content: String,
}

impl MarkdownPrinter {
    pub fn new() -> Self {
        Self {
            content: String::new(),
        }
    }

    fn is_tty(&self) -> bool {
        std::io::stdout().is_terminal()
    }

    pub fn dump(&self) {
        if self.is_tty() {
            let mut skin = termimad::MadSkin::default();
            for header in skin.headers.iter_mut() {
                header.align = termimad::Alignment::Left;
                header.add_attr(termimad::crossterm::style::Attribute::Bold);
                header.set_fg(termimad::crossterm::style::Color::Blue);
            }
            skin.print_text(&self.content);
        } else {
            println!("{}", self.content);
        }
    }

    pub fn add(&mut self, s: impl AsRef<str>) {
        self.content.push_str(s.as_ref());
    }

    pub fn add_dataframe(&mut self, df: &DataFrame) -> anyhow::Result<()> {
        let table = df_to_markdown(df)?;
        self.content.push_str(&table);
        Ok(())
    }
}

/// Cell text, and whether the column should be right-aligned.
fn format_cell(v: &AnyValue) -> (String, bool) {
    match v {
        AnyValue::Float32(v) => (format!("{:.1}", v), true),
        AnyValue::Float64(v) => (format!("{:.1}", v), true),
        AnyValue::Null => ("-".to_owned(), true),
        _ => match v.get_str() {
            Some(s) => (s.to_owned(), false),
            None => (v.to_string(), true),
        },
    }
}

fn df_to_markdown(df: &DataFrame) -> anyhow::Result<String> {
    let columns = df.get_columns();
    let mut headers = vec![];
    let mut right_align = vec![];
    let mut rows = vec![vec![]; df.height()];
    for column in columns {
        headers.push(column.name().to_owned());
        let mut align = true;
        for (i, row) in rows.iter_mut().enumerate() {
            let (cell, numeric) = format_cell(&column.get(i)?);
            align &= numeric;
            row.push(cell);
        }
        right_align.push(align);
    }
    let widths = headers
        .iter()
        .enumerate()
        .map(|(j, h)| rows.iter().map(|r| r[j].len()).chain([h.len()]).max().unwrap_or(0))
        .collect::<Vec<_>>();
    let render = |cells: &[String]| {
        let padded = cells
            .iter()
            .enumerate()
            .map(|(j, c)| {
                if right_align[j] {
                    format!("{:>w$}", c, w = widths[j])
                } else {
                    format!("{:<w$}", c, w = widths[j])
                }
            })
            .collect::<Vec<_>>();
        format!("| {} |\n", padded.join(" | "))
    };
    let mut md = render(&headers);
    let rule = widths
        .iter()
        .zip(&right_align)
        .map(|(w, r)| {
            let dashes = "-".repeat(*w);
            if *r {
                format!("{}:", dashes)
            } else {
                format!(":{}", dashes)
            }
        })
        .collect::<Vec<_>>();
    md += &format!("|{}|\n", rule.join("|"));
    for row in &rows {
        md += &render(row);
    }
    Ok(md)
}
