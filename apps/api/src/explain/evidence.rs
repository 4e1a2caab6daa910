//! Evidence lookup — resume sentences that justify a matched keyword.

use super::models::Evidence;

/// Max evidence sentences per keyword.
pub const EVIDENCE_CAP: usize = 2;
/// Rendered sentences longer than this are cut and marked with an ellipsis.
pub const EVIDENCE_DISPLAY_CHARS: usize = 220;
/// Characters of context kept before the keyword when the excerpt has to be windowed.
const LEADING_CONTEXT_CHARS: usize = 60;

pub const RESUME_SOURCE: &str = "Resume";

/// Returns up to `cap` resume sentences containing `keyword` (case-insensitive),
/// in sentence order. Never returns an empty list: when no sentence contains the
/// keyword a single synthetic entry says it was detected in the resume text.
pub fn locate_evidence(keyword: &str, sentences: &[String], cap: usize) -> Vec<Evidence> {
    let evidence: Vec<Evidence> = sentences
        .iter()
        .filter_map(|sentence| {
            find_case_insensitive(sentence, keyword).map(|hit| Evidence {
                text: render_excerpt(sentence, hit),
                source: RESUME_SOURCE.to_string(),
            })
        })
        .take(cap)
        .collect();

    if evidence.is_empty() {
        return vec![Evidence {
            text: format!("Keyword \"{keyword}\" was detected in the resume text."),
            source: RESUME_SOURCE.to_string(),
        }];
    }

    evidence
}

/// Char range `(start, end)` of the first case-insensitive occurrence of `needle`.
fn find_case_insensitive(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    let needle: Vec<char> = needle.chars().flat_map(fold).collect();
    if needle.is_empty() {
        return None;
    }

    // Fold per char, remembering which source char each folded char came from.
    let mut folded = Vec::new();
    let mut origin = Vec::new();
    for (idx, c) in haystack.chars().enumerate() {
        for fc in fold(c) {
            folded.push(fc);
            origin.push(idx);
        }
    }

    let start = folded
        .windows(needle.len())
        .position(|window| window == needle.as_slice())?;
    let end = origin[start + needle.len() - 1] + 1;

    Some((origin[start], end))
}

/// Per-char case fold. Final sigma folds to `σ` so word-final `Σ` (which
/// `str::to_lowercase` turns into `ς`) compares equal on both sides.
fn fold(c: char) -> impl Iterator<Item = char> {
    c.to_lowercase().map(|lc| if lc == 'ς' { 'σ' } else { lc })
}

/// Cuts long sentences for display. When the keyword sits past the cut, the
/// excerpt is a window around it so the rendered text still contains it.
fn render_excerpt(sentence: &str, (hit_start, hit_end): (usize, usize)) -> String {
    let chars: Vec<char> = sentence.chars().collect();
    if chars.len() <= EVIDENCE_DISPLAY_CHARS {
        return sentence.to_string();
    }

    if hit_end <= EVIDENCE_DISPLAY_CHARS {
        let head: String = chars[..EVIDENCE_DISPLAY_CHARS].iter().collect();
        return format!("{}…", head.trim_end());
    }

    let start = hit_start.saturating_sub(LEADING_CONTEXT_CHARS);
    let end = (start + EVIDENCE_DISPLAY_CHARS).min(chars.len()).max(hit_end);
    let window: String = chars[start..end].iter().collect();
    let leading = if start > 0 { "…" } else { "" };
    let trailing = if end < chars.len() { "…" } else { "" };

    format!("{leading}{}{trailing}", window.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_returns_matching_sentences_in_order_up_to_cap() {
        let resume = sentences(&[
            "Wrote Python tooling.",
            "Managed budgets.",
            "Taught python workshops.",
            "Maintained PYTHON packages.",
        ]);
        let evidence = locate_evidence("python", &resume, EVIDENCE_CAP);
        assert_eq!(evidence.len(), 2);
        assert_eq!(evidence[0].text, "Wrote Python tooling.");
        assert_eq!(evidence[1].text, "Taught python workshops.");
        assert!(evidence.iter().all(|e| e.source == "Resume"));
    }

    #[test]
    fn test_matches_substrings() {
        let resume = sentences(&["Built JavaScript frontends."]);
        let evidence = locate_evidence("java", &resume, EVIDENCE_CAP);
        assert_eq!(evidence[0].text, "Built JavaScript frontends.");
    }

    #[test]
    fn test_fallback_when_no_sentence_contains_keyword() {
        let resume = sentences(&["Led data migrations."]);
        let evidence = locate_evidence("terraform", &resume, EVIDENCE_CAP);
        assert_eq!(evidence.len(), 1);
        assert!(evidence[0].text.contains("terraform"));
        assert_eq!(evidence[0].source, RESUME_SOURCE);
    }

    #[test]
    fn test_fallback_on_empty_resume() {
        let evidence = locate_evidence("rust", &[], EVIDENCE_CAP);
        assert_eq!(evidence.len(), 1);
    }

    #[test]
    fn test_long_sentence_truncated_with_ellipsis() {
        let long = format!("Kafka pipelines {}", "x".repeat(400));
        let evidence = locate_evidence("kafka", &[long], EVIDENCE_CAP);
        let text = &evidence[0].text;
        assert!(text.ends_with('…'));
        assert!(text.starts_with("Kafka"));
        assert_eq!(text.chars().count(), EVIDENCE_DISPLAY_CHARS + 1);
    }

    #[test]
    fn test_long_sentence_windows_around_late_keyword() {
        let long = format!("{} then adopted Terraform for infra {}", "a ".repeat(200), "b ".repeat(200));
        let evidence = locate_evidence("terraform", &[long], EVIDENCE_CAP);
        let text = &evidence[0].text;
        assert!(text.starts_with('…'));
        assert!(text.ends_with('…'));
        assert!(text.to_lowercase().contains("terraform"));
    }

    #[test]
    fn test_word_final_sigma_matches_lowercased_keyword() {
        let keyword = "ΟΔΟΣ".to_lowercase();
        assert_eq!(keyword, "οδος");
        let resume = sentences(&["Built the ΟΔΟΣ platform."]);
        let evidence = locate_evidence(&keyword, &resume, EVIDENCE_CAP);
        assert_eq!(evidence.len(), 1);
        assert_eq!(evidence[0].text, "Built the ΟΔΟΣ platform.");
    }

    #[test]
    fn test_long_leading_token_has_no_leading_ellipsis() {
        // Keyword starts within the leading context but ends past the cut.
        let token = "k".repeat(215);
        let long = format!("Used {token} {}", "tail ".repeat(40));
        let evidence = locate_evidence(&token, &[long], EVIDENCE_CAP);
        let text = &evidence[0].text;
        assert!(text.starts_with("Used "));
        assert!(text.ends_with('…'));
        assert!(text.contains(&token));
    }

    #[test]
    fn test_find_case_insensitive_reports_char_offsets() {
        assert_eq!(find_case_insensitive("Café Rust", "rust"), Some((5, 9)));
        assert_eq!(find_case_insensitive("Go", "rust"), None);
    }
}
