//! Section formatter: splits one sub-response into styled paragraphs.

use serde::{Deserialize, Serialize};

/// Separator between sections of a sub-response
pub const SECTION_SEPARATOR: &str = "\n\n";

/// Marks the penalty paragraph of an answer
pub const CALLOUT_MARKER: &str = "consequences may include";

/// Marks the disclaimer paragraph of an answer
pub const FOOTNOTE_MARKER: &str = "⚖️";

/// Visual variant of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionStyle {
    /// Highlighted box
    Callout,
    /// Muted italic text under a rule
    Footnote,
    /// Plain body text
    Body,
}

impl SectionStyle {
    /// First match wins: callout, then footnote, then body.
    pub fn classify(section: &str) -> Self {
        if section.contains(CALLOUT_MARKER) {
            SectionStyle::Callout
        } else if section.contains(FOOTNOTE_MARKER) {
            SectionStyle::Footnote
        } else {
            SectionStyle::Body
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Verbatim section text
    pub text: String,
    pub style: SectionStyle,
}

/// Ordered sections of one sub-response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedResponse {
    pub sections: Vec<Section>,
}

impl FormattedResponse {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Format a sub-response. Whitespace-only sections are dropped; the rest keep their text as-is.
pub fn format_response(sub_response: &str) -> FormattedResponse {
    let sections = sub_response
        .split(SECTION_SEPARATOR)
        .filter(|section| !section.trim().is_empty())
        .map(|section| Section {
            text: section.to_string(),
            style: SectionStyle::classify(section),
        })
        .collect();

    FormattedResponse { sections }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_precedence() {
        assert_eq!(
            SectionStyle::classify("Under the law, the consequences may include a fine."),
            SectionStyle::Callout
        );
        assert_eq!(
            SectionStyle::classify("⚖️ Please consult a legal professional."),
            SectionStyle::Footnote
        );
        assert_eq!(
            SectionStyle::classify("⚖️ the consequences may include imprisonment"),
            SectionStyle::Callout
        );
        assert_eq!(SectionStyle::classify("The Penal Code applies."), SectionStyle::Body);
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        assert_eq!(
            SectionStyle::classify("Consequences May Include a fine"),
            SectionStyle::Body
        );
    }

    #[test]
    fn test_format_splits_and_styles_in_order() {
        let text = "I found something.\n\nThis is serious. Under the law, the consequences may include a fine.\n\n⚖️ General guidance only.";
        let formatted = format_response(text);

        let styles: Vec<_> = formatted.sections.iter().map(|s| s.style).collect();
        assert_eq!(
            styles,
            vec![SectionStyle::Body, SectionStyle::Callout, SectionStyle::Footnote]
        );
        assert_eq!(formatted.sections[0].text, "I found something.");
        assert_eq!(formatted.sections[2].text, "⚖️ General guidance only.");
    }

    #[test]
    fn test_format_drops_blank_sections_but_keeps_text_verbatim() {
        let formatted = format_response("  first  \n\n   \n\n\n\nsecond\nline");
        assert_eq!(formatted.sections.len(), 2);
        assert_eq!(formatted.sections[0].text, "  first  ");
        assert_eq!(formatted.sections[1].text, "second\nline");
    }

    #[test]
    fn test_format_empty_input_has_no_sections() {
        assert!(format_response("").is_empty());
        assert!(format_response("\n\n\n\n").is_empty());
    }

    #[test]
    fn test_markup_is_not_escaped() {
        let formatted = format_response("<b>bold</b> & more");
        assert_eq!(formatted.sections[0].text, "<b>bold</b> & more");
    }
}
