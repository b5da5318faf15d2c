use std::io::Write;

use anyhow::{bail, Result};

use crate::clippings::clipping::Clipping;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn of(name: &str) -> Result<Self> {
        match name {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "md" => Ok(Self::Markdown),
            name => bail!("Unknown output format: {}", name),
        }
    }
}

pub fn render_clippings<W: Write>(
    writer: &mut W,
    clippings: &[Clipping],
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => render_json(writer, clippings),
        OutputFormat::Csv => render_csv(writer, clippings),
        OutputFormat::Markdown => render_markdown(writer, clippings),
    }
}

fn render_json<W: Write>(writer: &mut W, clippings: &[Clipping]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, clippings)?;
    writeln!(writer)?;
    Ok(())
}

fn render_csv<W: Write>(writer: &mut W, clippings: &[Clipping]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(&mut *writer);

    csv_writer.write_record(["author", "title", "text"])?;
    for clipping in clippings {
        csv_writer.write_record([
            clipping.author.as_deref().unwrap_or(""),
            clipping.title.as_str(),
            clipping.text.as_str(),
        ])?;
    }
    csv_writer.flush()?;

    Ok(())
}

// One "# $title" section per distinct title, in order of first appearance;
// clippings sharing a title are separated by a "---" line.
fn render_markdown<W: Write>(writer: &mut W, clippings: &[Clipping]) -> Result<()> {
    let mut titles: Vec<&str> = Vec::new();
    for clipping in clippings {
        if !titles.contains(&clipping.title.as_str()) {
            titles.push(clipping.title.as_str());
        }
    }

    for (i, title) in titles.iter().enumerate() {
        if 0 < i {
            writeln!(writer)?;
        }
        writeln!(writer, "# {}", title)?;

        let mut first = true;
        for clipping in clippings.iter().filter(|c| c.title == *title) {
            if !first {
                writeln!(writer)?;
                writeln!(writer, "---")?;
            }
            writeln!(writer)?;
            writeln!(writer, "{}", clipping.text)?;
            first = false;
        }
    }

    Ok(())
}
