//! Best-effort split of a model reply into a story and journal prompts.
//!
//! The reply is untrusted prose. Nothing here fails: unexpected shapes degrade to an empty
//! (or shorter) prompt list while the story is always returned.

use regex::Regex;
use std::sync::LazyLock;

use crate::core::models::SummaryResult;

/// Upper bound on prompts returned to the caller.
pub const MAX_PROMPTS: usize = 2;

// A line starting with the phrase is a heading only when it is a markdown heading
// (`## Journal Prompts for Reflection`), ends right after the phrase
// (`**Journal Prompts**`), or is followed by a colon (`Journal Prompts: 1. ...`).
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^[ \t]*(?:#{1,6}[ \t]*(?:\*{1,2})?journal[ \t]+prompts\b[^\n]*|(?:\*{1,2})?journal[ \t]+prompts(?:\*{1,2})?[ \t]*(?::(?:\*{1,2})?|(?:\*{1,2})?[ \t]*\r?$))",
    )
    .unwrap_or_else(|_| Regex::new(r"$^").expect("fallback regex compiles"))
});

static NUMBERED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\s*").unwrap_or_else(|_| Regex::new(r"$^").expect("fallback regex compiles"))
});

#[must_use]
pub fn parse_summary_response(raw: &str) -> SummaryResult {
    let Some(heading) = HEADING_RE.find(raw) else {
        return SummaryResult {
            summary: raw.trim().to_string(),
            prompts: Vec::new(),
        };
    };

    let summary = raw[..heading.start()].trim().to_string();
    let prompts = extract_prompts(&raw[heading.end()..]);

    SummaryResult { summary, prompts }
}

fn extract_prompts(section: &str) -> Vec<String> {
    section
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| strip_emphasis(strip_enumeration(line)))
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .take(MAX_PROMPTS)
        .collect()
}

/// Removes at most one leading `1.`, `-` or `*` marker.
fn strip_enumeration(line: &str) -> &str {
    if let Some(m) = NUMBERED_RE.find(line) {
        return line[m.end()..].trim();
    }
    if let Some(rest) = line.strip_prefix('-') {
        return rest.trim();
    }
    if let Some(rest) = line.strip_prefix('*') {
        // `*text*` and `**text**` are emphasis, not bullets.
        let is_bullet = rest.starts_with(char::is_whitespace)
            || (!rest.starts_with('*') && !rest.ends_with('*'));
        if is_bullet {
            return rest.trim();
        }
    }
    line
}

/// Removes one matching `**` or `*` pair wrapping the whole line.
fn strip_emphasis(line: &str) -> &str {
    let stripped = if line.len() >= 4 && line.starts_with("**") && line.ends_with("**") {
        &line[2..line.len() - 2]
    } else if line.len() >= 2 && line.starts_with('*') && line.ends_with('*') {
        &line[1..line.len() - 1]
    } else {
        line
    };
    stripped.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_numbered_prompts() {
        let result = parse_summary_response(
            "A heartfelt story.\n\nJournal Prompts:\n1. What made you smile?\n2. Who do you miss?",
        );
        assert_eq!(result.summary, "A heartfelt story.");
        assert_eq!(result.prompts, vec!["What made you smile?", "Who do you miss?"]);
    }

    #[test]
    fn test_bullets_and_emphasis_are_stripped() {
        let result =
            parse_summary_response("Story.\nJournal Prompts:\n- **Reflect on joy**\n* Think of loss");
        assert_eq!(result.prompts, vec!["Reflect on joy", "Think of loss"]);
    }

    #[test]
    fn test_truncates_to_two_prompts_in_order() {
        let result = parse_summary_response(
            "Story.\n\nJournal Prompts:\n1. First?\n2. Second?\n3. Third?\n4. Fourth?",
        );
        assert_eq!(result.prompts, vec!["First?", "Second?"]);
    }

    #[test]
    fn test_missing_heading_keeps_full_text() {
        let raw = "  Just a story about a picnic.\n\n1. Not a prompt list really.  ";
        let result = parse_summary_response(raw);
        assert_eq!(result.summary, raw.trim());
        assert!(result.prompts.is_empty());
    }

    #[test]
    fn test_heading_without_prompts() {
        let result = parse_summary_response("Story here.\n\nJournal Prompts:\n\n   \n");
        assert_eq!(result.summary, "Story here.");
        assert!(result.prompts.is_empty());
    }

    #[test]
    fn test_markdown_heading_variants() {
        for heading in [
            "## Journal Prompts",
            "### journal prompts:",
            "**Journal Prompts:**",
            "**Journal Prompts**:",
            "JOURNAL PROMPTS",
        ] {
            let raw = format!("Story.\n\n{heading}\n1. Why?");
            let result = parse_summary_response(&raw);
            assert_eq!(result.summary, "Story.", "heading {heading:?}");
            assert_eq!(result.prompts, vec!["Why?"], "heading {heading:?}");
        }
    }

    #[test]
    fn test_splits_at_first_heading_only() {
        let result = parse_summary_response(
            "Story.\nJournal Prompts:\n1. One?\nJournal Prompts:\n2. Two?",
        );
        assert_eq!(result.summary, "Story.");
        // The second heading is just another line in the prompt section.
        assert_eq!(result.prompts, vec!["One?", "Journal Prompts:"]);
    }

    #[test]
    fn test_mid_sentence_mention_is_not_a_heading() {
        let raw = "We wrote journal prompts together that night.";
        let result = parse_summary_response(raw);
        assert_eq!(result.summary, raw);
        assert!(result.prompts.is_empty());
    }

    #[test]
    fn test_markdown_heading_with_trailing_words() {
        let result = parse_summary_response(
            "Story.\n\n## Journal Prompts for Reflection\n1. What did you feel?\n2. Who was there?",
        );
        assert_eq!(result.summary, "Story.");
        assert_eq!(result.prompts, vec!["What did you feel?", "Who was there?"]);
    }

    #[test]
    fn test_line_starting_with_phrase_is_prose() {
        let result = parse_summary_response(
            "A walk by the sea.\nJournal prompts can help you hold on to days like this.\n\nJournal Prompts:\n1. What did the waves sound like?\n2. Who walked beside you?",
        );
        assert_eq!(
            result.summary,
            "A walk by the sea.\nJournal prompts can help you hold on to days like this."
        );
        assert_eq!(
            result.prompts,
            vec!["What did the waves sound like?", "Who walked beside you?"]
        );
    }

    #[test]
    fn test_prose_line_without_real_heading_keeps_full_text() {
        let raw = "A walk by the sea.\nJournal prompts can help you hold on to days like this.";
        let result = parse_summary_response(raw);
        assert_eq!(result.summary, raw);
        assert!(result.prompts.is_empty());
    }

    #[test]
    fn test_inline_prompts_after_colon() {
        let result = parse_summary_response("Story.\nJournal Prompts: 1. Where were you?");
        assert_eq!(result.summary, "Story.");
        assert_eq!(result.prompts, vec!["Where were you?"]);
    }

    #[test]
    fn test_crlf_reply() {
        let result = parse_summary_response("Story.\r\nJOURNAL PROMPTS\r\n1. Q?\r\n2. R?\r\n");
        assert_eq!(result.summary, "Story.");
        assert_eq!(result.prompts, vec!["Q?", "R?"]);
    }

    #[test]
    fn test_marker_only_lines_are_dropped() {
        let result =
            parse_summary_response("Story.\nJournal Prompts:\n1.\n-\n**\n*\n2. Kept prompt");
        assert_eq!(result.prompts, vec!["Kept prompt"]);
    }

    #[test]
    fn test_single_emphasis_without_bullet() {
        let result = parse_summary_response("Story.\nJournal Prompts:\n*Italic prompt*\n**Bold prompt**");
        assert_eq!(result.prompts, vec!["Italic prompt", "Bold prompt"]);
    }

    #[test]
    fn test_only_one_enumeration_marker_removed() {
        let result = parse_summary_response("Story.\nJournal Prompts:\n1. - nested marker");
        assert_eq!(result.prompts, vec!["- nested marker"]);
    }

    #[test]
    fn test_numbered_bold_prompt_with_inline_text() {
        let result = parse_summary_response(
            "Story.\n\nJournal Prompts:\n1. **Prompt:** What did this day teach you?",
        );
        // Emphasis is only stripped when it wraps the whole line.
        assert_eq!(result.prompts, vec!["**Prompt:** What did this day teach you?"]);
    }

    #[test]
    fn test_empty_input() {
        let result = parse_summary_response("");
        assert_eq!(result, SummaryResult::default());
    }

    #[test]
    fn test_unicode_content_survives() {
        let result =
            parse_summary_response("Un día en la playa 🌊\nJournal Prompts:\n- ¿Qué sentiste? ✨");
        assert_eq!(result.summary, "Un día en la playa 🌊");
        assert_eq!(result.prompts, vec!["¿Qué sentiste? ✨"]);
    }
}
