//! Overlap scoring: how much of the job description's keyword set the resume covers.

use super::ranker::RankedKeywordList;

/// `round(100 * |jd ∩ resume| / |jd|)`, clamped to 0–100. Zero when the JD has no keywords.
///
/// Not symmetric: resume verbosity never dilutes the score, only JD coverage counts.
pub fn overlap_score(jd: &RankedKeywordList, resume: &RankedKeywordList) -> u32 {
    if jd.is_empty() {
        return 0;
    }

    let hits = jd.iter().filter(|kw| resume.contains(kw)).count();
    let score = (100.0 * hits as f64 / jd.len() as f64).round();

    score.clamp(0.0, 100.0) as u32
}
