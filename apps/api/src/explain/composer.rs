//! Explain Composer — turns ranked keyword lists into the final `ExplainResult`.
//!
//! Everything here is deterministic string assembly from the computed sets:
//! no free-form generation, no randomness.

use super::evidence::{locate_evidence, EVIDENCE_CAP};
use super::models::{ExplainResult, InterviewQuestions, Reason, SkillBreakdown};
use super::ranker::RankedKeywordList;
use super::scoring::overlap_score;

/// Matched keywords that get a reason entry.
pub const MAX_REASONS: usize = 8;
/// Keywords listed per clause of the summary.
pub const SUMMARY_LIST_LIMIT: usize = 5;
pub const MAX_OCCUPATIONAL_QUESTIONS: usize = 6;
const MATCHED_QUESTION_COUNT: usize = 3;
const GAP_QUESTION_COUNT: usize = 2;

/// Domain-generic behavioral prompts, independent of the inputs.
pub const BEHAVIORAL_QUESTIONS: [&str; 3] = [
    "Tell me about a time you had to deliver results under a tight deadline.",
    "Describe a situation where you disagreed with a teammate and how you resolved it.",
    "Give an example of a problem you solved that required learning something new.",
];

/// Matched / gap split of the JD keywords, both in JD rank order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordCoverage {
    pub matched: Vec<String>,
    pub gaps: Vec<String>,
}

/// Partitions the JD keywords by presence in the resume keyword set.
pub fn partition_keywords(jd: &RankedKeywordList, resume: &RankedKeywordList) -> KeywordCoverage {
    let (matched, gaps): (Vec<String>, Vec<String>) = jd
        .as_slice()
        .iter()
        .cloned()
        .partition(|kw| resume.contains(kw));

    KeywordCoverage { matched, gaps }
}

/// Assembles the full result. `sentences` are the resume's sentences, used for evidence.
pub fn compose(
    jd_keywords: &RankedKeywordList,
    resume_keywords: &RankedKeywordList,
    sentences: &[String],
) -> ExplainResult {
    let score = overlap_score(jd_keywords, resume_keywords);
    let coverage = partition_keywords(jd_keywords, resume_keywords);

    let reasons = coverage
        .matched
        .iter()
        .take(MAX_REASONS)
        .map(|kw| Reason {
            requirement: format!("Keyword match: {kw}"),
            evidence: locate_evidence(kw, sentences, EVIDENCE_CAP),
        })
        .collect();

    let summary = build_summary(jd_keywords.len(), &coverage);
    let interview_questions = InterviewQuestions {
        behavioral: BEHAVIORAL_QUESTIONS.iter().map(|q| q.to_string()).collect(),
        occupational: build_occupational_questions(&coverage),
    };

    ExplainResult {
        score,
        summary,
        reasons,
        strengths: coverage.matched.clone(),
        gaps: coverage.gaps.clone(),
        skills: SkillBreakdown {
            matched: coverage.matched,
            gaps: coverage.gaps,
            transferable: Vec::new(),
        },
        interview_questions,
    }
}

/// Templated one-paragraph summary: counts, top matches, top gaps.
fn build_summary(jd_keyword_count: usize, coverage: &KeywordCoverage) -> String {
    if jd_keyword_count == 0 {
        return "No keywords could be extracted from the job description, so no match was computed."
            .to_string();
    }

    let mut summary = format!(
        "Matched {} of the top {} job description keywords.",
        coverage.matched.len(),
        jd_keyword_count
    );

    if !coverage.matched.is_empty() {
        summary.push_str(&format!(
            " Top matches: {}.",
            join_limited(&coverage.matched, SUMMARY_LIST_LIMIT)
        ));
    }
    if !coverage.gaps.is_empty() {
        summary.push_str(&format!(
            " Gaps: {}.",
            join_limited(&coverage.gaps, SUMMARY_LIST_LIMIT)
        ));
    }

    summary
}

fn build_occupational_questions(coverage: &KeywordCoverage) -> Vec<String> {
    let hands_on = coverage
        .matched
        .iter()
        .take(MATCHED_QUESTION_COUNT)
        .map(|kw| format!("Walk me through your hands-on experience with {kw}."));
    let ramp_up = coverage
        .gaps
        .iter()
        .take(GAP_QUESTION_COUNT)
        .map(|kw| format!("How would you ramp up quickly on {kw} if needed?"));

    hands_on
        .chain(ramp_up)
        .take(MAX_OCCUPATIONAL_QUESTIONS)
        .collect()
}

fn join_limited(items: &[String], limit: usize) -> String {
    items
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explain::ranker::rank_keywords;

    fn list(words: &[&str]) -> RankedKeywordList {
        rank_keywords(words.iter().map(|w| w.to_string()).collect(), 100)
    }

    #[test]
    fn test_partition_preserves_jd_order() {
        let coverage = partition_keywords(
            &list(&["rust", "kafka", "sql", "go"]),
            &list(&["go", "rust"]),
        );
        assert_eq!(coverage.matched, vec!["rust", "go"]);
        assert_eq!(coverage.gaps, vec!["kafka", "sql"]);
    }

    #[test]
    fn test_reasons_capped_at_eight() {
        let words: Vec<String> = (0..12).map(|i| format!("kw{i:02}")).collect();
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let result = compose(&list(&refs), &list(&refs), &[]);
        assert_eq!(result.reasons.len(), MAX_REASONS);
        assert_eq!(result.reasons[0].requirement, "Keyword match: kw00");
        assert_eq!(result.skills.matched.len(), 12);
    }

    #[test]
    fn test_summary_lists_at_most_five_per_clause() {
        let coverage = KeywordCoverage {
            matched: (0..7).map(|i| format!("m{i}")).collect(),
            gaps: (0..6).map(|i| format!("g{i}")).collect(),
        };
        let summary = build_summary(13, &coverage);
        assert_eq!(
            summary,
            "Matched 7 of the top 13 job description keywords. Top matches: m0, m1, m2, m3, m4. Gaps: g0, g1, g2, g3, g4."
        );
    }

    #[test]
    fn test_summary_without_gaps() {
        let coverage = KeywordCoverage {
            matched: vec!["rust".to_string()],
            gaps: vec![],
        };
        assert_eq!(
            build_summary(1, &coverage),
            "Matched 1 of the top 1 job description keywords. Top matches: rust."
        );
    }

    #[test]
    fn test_summary_for_empty_jd() {
        let summary = build_summary(0, &KeywordCoverage::default());
        assert!(summary.starts_with("No keywords"));
    }

    #[test]
    fn test_occupational_questions_from_matches_then_gaps() {
        let coverage = KeywordCoverage {
            matched: vec!["rust".into(), "sql".into(), "kafka".into(), "redis".into()],
            gaps: vec!["go".into(), "terraform".into(), "helm".into()],
        };
        let questions = build_occupational_questions(&coverage);
        assert_eq!(questions.len(), 5);
        assert_eq!(
            questions[0],
            "Walk me through your hands-on experience with rust."
        );
        assert_eq!(questions[2], "Walk me through your hands-on experience with kafka.");
        assert_eq!(questions[3], "How would you ramp up quickly on go if needed?");
        assert_eq!(
            questions[4],
            "How would you ramp up quickly on terraform if needed?"
        );
    }

    #[test]
    fn test_behavioral_questions_are_constant() {
        let a = compose(&list(&["rust"]), &list(&[]), &[]);
        let b = compose(&list(&[]), &list(&["java"]), &[]);
        assert_eq!(a.interview_questions.behavioral, b.interview_questions.behavioral);
        assert_eq!(a.interview_questions.behavioral.len(), 3);
    }

    #[test]
    fn test_strengths_and_gaps_mirror_skills() {
        let result = compose(&list(&["rust", "go"]), &list(&["rust"]), &[]);
        assert_eq!(result.strengths, result.skills.matched);
        assert_eq!(result.gaps, result.skills.gaps);
        assert!(result.skills.transferable.is_empty());
    }
}
