//! `bcoach highlights`: run the keyword extractor on arbitrary text.

use console::style;

use biblecoach_core::keyword;
use biblecoach_types::highlights::KeywordHighlights;

use super::read_input;

pub fn highlights(text: Option<String>, json: bool) -> anyhow::Result<()> {
    let text = match text {
        Some(text) => text,
        None => read_input(None)?,
    };
    let highlights = keyword::extract(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&highlights)?);
    } else {
        print!("{}", render(&highlights));
    }
    Ok(())
}

/// Styled multi-line report of the extracted highlights.
fn render(highlights: &KeywordHighlights) -> String {
    if highlights.is_empty() {
        return format!(
            "\n  {}\n\n",
            style("No keywords or scripture references found.").dim()
        );
    }

    let list = |items: &[String]| {
        if items.is_empty() {
            format!("{}", style("(none)").dim())
        } else {
            items.join(", ")
        }
    };

    format!(
        "\n  {}\n\n  {} {}\n  {} {}\n  {} {}\n\n",
        style(highlights.summary()).bold(),
        style("Primary: ").cyan(),
        list(&highlights.primary),
        style("Repeated:").cyan(),
        list(&highlights.repeated),
        style("Verses:  ").cyan(),
        list(&highlights.verses),
    )
}
