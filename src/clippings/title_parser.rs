use once_cell::sync::Lazy;
use regex::Regex;

// Epub books and such have titles of the form "$title ($author)".
// The greedy ".+" binds the author to the last parenthesized group.
static REGEX_EPUB_TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+) \((.*)\)$").unwrap());

// Calibre PDFs have titles of the form "$title - $author".
static REGEX_PDF_TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+) - (.*)$").unwrap());

// Tried in order, first match wins. Both capture the title at 1 and the
// author at 2; only the title cleanup differs per format.
struct TitleRule {
    regex: &'static Lazy<Regex>,
    clean_title: fn(&str) -> String,
}

static TITLE_RULES: [TitleRule; 2] = [
    TitleRule {
        regex: &REGEX_EPUB_TITLE,
        clean_title: clean_epub_title,
    },
    TitleRule {
        regex: &REGEX_PDF_TITLE,
        clean_title: clean_pdf_title,
    },
];

fn clean_epub_title(title: &str) -> String {
    title.trim().to_owned()
}

// Calibre flattens ':' to "_ " and moves a leading "The" to a trailing
// ", The"; both are undone here, replace-all and case-sensitive.
fn clean_pdf_title(title: &str) -> String {
    let title = title.replace("_ ", ": ").trim().to_owned();
    if title.ends_with(", The") {
        format!("The {}", title.replace(", The", ""))
    } else {
        title
    }
}

pub fn parse_title(title_line: &str) -> String {
    for rule in &TITLE_RULES {
        if let Some(captures) = rule.regex.captures(title_line) {
            return (rule.clean_title)(&captures[1]);
        }
    }

    // On failure, keep the title line unchanged.
    title_line.trim().to_owned()
}

pub fn parse_author(title_line: &str) -> Option<String> {
    for rule in &TITLE_RULES {
        if let Some(captures) = rule.regex.captures(title_line) {
            return Some(captures[2].trim().to_owned());
        }
    }

    None
}
