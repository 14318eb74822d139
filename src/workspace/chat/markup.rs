//! Message-body line markup.
//!
//! Chat bodies may carry literal newline-delimited list markup: `- ` or
//! `* ` prefixes for bullets, `N. ` prefixes for ordered entries, blank
//! lines as spacers. Parsed per render into typed lines so the renderer
//! can attach its own prefixes and styles.

use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyLine {
    Text(String),
    Bullet(String),
    /// Ordered entry: the literal number label and the entry text.
    Ordered(String, String),
    Blank,
}

/// Split a message body into typed lines.
pub fn parse_body(body: &str) -> Vec<BodyLine> {
    let ordered = Regex::new(r"^(\d+)\.\s+(.*)$").ok();

    body.lines()
        .map(|line| {
            if line.trim().is_empty() {
                return BodyLine::Blank;
            }
            if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
                return BodyLine::Bullet(rest.to_string());
            }
            if let Some(re) = &ordered {
                if let Some(caps) = re.captures(line) {
                    return BodyLine::Ordered(caps[1].to_string(), caps[2].to_string());
                }
            }
            BodyLine::Text(line.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{parse_body, BodyLine};

    #[test]
    fn test_plain_text_passes_through() {
        let lines = parse_body("hello there");
        assert_eq!(lines, vec![BodyLine::Text("hello there".to_string())]);
    }

    #[test]
    fn test_bullet_prefixes() {
        let lines = parse_body("- tighten hero title\n* shorten CTA text");
        assert_eq!(
            lines,
            vec![
                BodyLine::Bullet("tighten hero title".to_string()),
                BodyLine::Bullet("shorten CTA text".to_string()),
            ]
        );
    }

    #[test]
    fn test_ordered_entries_keep_their_number() {
        let lines = parse_body("1. first\n12. twelfth");
        assert_eq!(
            lines,
            vec![
                BodyLine::Ordered("1".to_string(), "first".to_string()),
                BodyLine::Ordered("12".to_string(), "twelfth".to_string()),
            ]
        );
    }

    #[test]
    fn test_blank_lines_become_spacers() {
        let lines = parse_body("top\n\nbottom");
        assert_eq!(
            lines,
            vec![
                BodyLine::Text("top".to_string()),
                BodyLine::Blank,
                BodyLine::Text("bottom".to_string()),
            ]
        );
    }

    #[test]
    fn test_dash_without_space_is_plain_text() {
        let lines = parse_body("-not a bullet\n3.also not ordered");
        assert_eq!(
            lines,
            vec![
                BodyLine::Text("-not a bullet".to_string()),
                BodyLine::Text("3.also not ordered".to_string()),
            ]
        );
    }
}
