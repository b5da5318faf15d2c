use anyhow::{ensure, Context, Result};

use crate::clippings::{
    clipping::Clipping,
    title_parser::{parse_author, parse_title},
};

// Clippings are separated by this string.
pub const CLIPPINGS_DELIMITER: &str = "==========\n";

pub fn parse_clippings(txt: &str) -> Result<Vec<Clipping>> {
    // The device writes CR+LF; normalize before splitting.
    let txt = txt.replace('\r', "");

    let mut clippings = Vec::new();
    for (i, block) in txt.split(CLIPPINGS_DELIMITER).enumerate() {
        // Splitting leaves empty artifacts around the delimiters.
        if block.trim().is_empty() {
            continue;
        }

        let clipping =
            parse_clipping(block).with_context(|| format!("Failed to parse clipping {}", i))?;
        clippings.push(clipping);
    }

    Ok(clippings)
}

// Every clipping is of the form: title \n location \n \n text.
// A block that does not fit is fatal; skipping it would silently drop
// highlights.
fn parse_clipping(block: &str) -> Result<Clipping> {
    let lines: Vec<&str> = block.split('\n').collect();

    ensure!(3 < lines.len(), "Clipping has too few lines: {:?}", block);
    ensure!(
        lines[2].is_empty(),
        "Clipping is missing the empty line after its location: {:?}",
        block
    );

    let title_line = lines[0];
    // lines[1] holds the location and date, which are not kept.
    let text: Vec<&str> = lines[3..]
        .iter()
        .copied()
        .filter(|line| !line.trim().is_empty())
        .collect();

    Ok(Clipping {
        title: parse_title(title_line),
        author: parse_author(title_line),
        text: text.join("\n"),
    })
}
