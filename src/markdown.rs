//! Constrained Markdown renderer.
//!
//! AI-generated lesson and prep text loosely follows a small Markdown subset
//! (`##` headings, `**bold**`, `*` bullets). This module maps each input line
//! to exactly one typed display block, in order, with no cross-line lookahead
//! or nesting, so the SPA can style the content without re-parsing it.
//!
//! The renderer never fails and performs no escaping of the source text;
//! presentation layers must apply their own safe-render handling.

use serde::Serialize;

/// Inline run within a paragraph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Span {
  Plain { text: String },
  Strong { text: String },
}

/// One display block per input line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
  Heading { level: u8, text: String },
  Paragraph { spans: Vec<Span> },
  ListItem { text: String },
  LineBreak,
}

/// Render a whole text: one block per line, order-preserving.
/// An empty input produces an empty sequence.
pub fn render(content: &str) -> Vec<Block> {
  if content.is_empty() {
    return Vec::new();
  }
  content.split('\n').map(render_line).collect()
}

/// Line-prefix dispatch. The branch order matters: `## ` before `**` before
/// `* `, then blank, then plain paragraph.
pub fn render_line(line: &str) -> Block {
  if let Some(rest) = line.strip_prefix("## ") {
    Block::Heading { level: 2, text: rest.to_string() }
  } else if line.starts_with("**") {
    Block::Paragraph { spans: strong_spans(line) }
  } else if let Some(rest) = line.strip_prefix("* ") {
    Block::ListItem { text: rest.to_string() }
  } else if line.trim().is_empty() {
    Block::LineBreak
  } else {
    Block::Paragraph { spans: vec![Span::Plain { text: line.to_string() }] }
  }
}

/// Scan a line for paired `**...**` spans. Text outside pairs stays plain;
/// an unterminated `**` leaves the rest of the line untransformed, literal
/// markers included.
fn strong_spans(line: &str) -> Vec<Span> {
  let mut spans = Vec::new();
  let mut rest = line;
  while let Some(open) = rest.find("**") {
    let after = &rest[open + 2..];
    match after.find("**") {
      Some(close) => {
        if open > 0 {
          spans.push(Span::Plain { text: rest[..open].to_string() });
        }
        spans.push(Span::Strong { text: after[..close].to_string() });
        rest = &after[close + 2..];
      }
      None => {
        spans.push(Span::Plain { text: rest.to_string() });
        return spans;
      }
    }
  }
  if !rest.is_empty() {
    spans.push(Span::Plain { text: rest.to_string() });
  }
  spans
}

#[cfg(test)]
mod tests {
  use super::*;

  fn plain(text: &str) -> Span {
    Span::Plain { text: text.into() }
  }

  fn strong(text: &str) -> Span {
    Span::Strong { text: text.into() }
  }

  #[test]
  fn heading_prefix_is_stripped() {
    assert_eq!(
      render_line("## Introduction"),
      Block::Heading { level: 2, text: "Introduction".into() }
    );
  }

  #[test]
  fn list_prefix_is_stripped() {
    assert_eq!(render_line("* first item"), Block::ListItem { text: "first item".into() });
  }

  #[test]
  fn whitespace_only_line_is_a_line_break() {
    assert_eq!(render_line(""), Block::LineBreak);
    assert_eq!(render_line("   \t"), Block::LineBreak);
  }

  #[test]
  fn plain_line_is_a_verbatim_paragraph() {
    assert_eq!(
      render_line("Just a sentence."),
      Block::Paragraph { spans: vec![plain("Just a sentence.")] }
    );
  }

  #[test]
  fn bold_lead_line_gets_strong_spans() {
    assert_eq!(
      render_line("**Important** note"),
      Block::Paragraph { spans: vec![strong("Important"), plain(" note")] }
    );
  }

  #[test]
  fn multiple_bold_pairs_on_one_line() {
    assert_eq!(
      render_line("**a** mid **b**"),
      Block::Paragraph { spans: vec![strong("a"), plain(" mid "), strong("b")] }
    );
  }

  #[test]
  fn unterminated_bold_marker_stays_literal() {
    // Starts with "**" so it takes the paragraph branch, but with no closing
    // pair nothing is transformed.
    assert_eq!(
      render_line("**broken emphasis"),
      Block::Paragraph { spans: vec![plain("**broken emphasis")] }
    );
  }

  #[test]
  fn trailing_unterminated_marker_after_a_pair() {
    assert_eq!(
      render_line("**ok** then **oops"),
      Block::Paragraph { spans: vec![strong("ok"), plain(" then **oops")] }
    );
  }

  #[test]
  fn block_count_equals_line_count() {
    let text = "## Title\n\n**Key**: value\n* one\n* two\ntail";
    let blocks = render(text);
    assert_eq!(blocks.len(), text.split('\n').count());
  }

  #[test]
  fn empty_input_renders_no_blocks() {
    assert!(render("").is_empty());
  }

  #[test]
  fn list_items_are_not_grouped() {
    let blocks = render("* a\n* b");
    assert_eq!(
      blocks,
      vec![
        Block::ListItem { text: "a".into() },
        Block::ListItem { text: "b".into() },
      ]
    );
  }

  #[test]
  fn heading_wins_over_bold_and_list() {
    // "## **x**" is a heading whose text keeps the markers.
    assert_eq!(
      render_line("## **x**"),
      Block::Heading { level: 2, text: "**x**".into() }
    );
  }

  #[test]
  fn blocks_serialize_with_type_tags() {
    let json = serde_json::to_value(render_line("## Overview")).unwrap();
    assert_eq!(json["type"], "heading");
    assert_eq!(json["level"], 2);
    assert_eq!(json["text"], "Overview");
  }
}
