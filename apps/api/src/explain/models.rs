use serde::{Deserialize, Serialize};

/// A verbatim (possibly truncated) source sentence backing a reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    pub text: String,
    pub source: String,
}

/// One explained requirement, e.g. `"Keyword match: python"`, with at least one evidence item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reason {
    pub requirement: String,
    pub evidence: Vec<Evidence>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillBreakdown {
    pub matched: Vec<String>,
    pub gaps: Vec<String>,
    /// Always empty from the keyword engine.
    pub transferable: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewQuestions {
    pub behavioral: Vec<String>,
    pub occupational: Vec<String>,
}

/// Full explainability output. Field names follow the public wire contract
/// (`interviewQuestions` is camelCase on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainResult {
    pub score: u32, // 0 – 100
    pub summary: String,
    pub reasons: Vec<Reason>,
    pub skills: SkillBreakdown,
    /// Same as `skills.matched`.
    pub strengths: Vec<String>,
    /// Same as `skills.gaps`.
    pub gaps: Vec<String>,
    pub interview_questions: InterviewQuestions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_explain_result_wire_shape() {
        let result = ExplainResult {
            score: 50,
            summary: "s".to_string(),
            reasons: vec![Reason {
                requirement: "Keyword match: rust".to_string(),
                evidence: vec![Evidence {
                    text: "Rust daily.".to_string(),
                    source: "Resume".to_string(),
                }],
            }],
            skills: SkillBreakdown {
                matched: vec!["rust".to_string()],
                gaps: vec!["go".to_string()],
                transferable: vec![],
            },
            strengths: vec!["rust".to_string()],
            gaps: vec!["go".to_string()],
            interview_questions: InterviewQuestions {
                behavioral: vec!["b".to_string()],
                occupational: vec!["o".to_string()],
            },
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "score": 50,
                "summary": "s",
                "reasons": [{
                    "requirement": "Keyword match: rust",
                    "evidence": [{"text": "Rust daily.", "source": "Resume"}]
                }],
                "skills": {"matched": ["rust"], "gaps": ["go"], "transferable": []},
                "strengths": ["rust"],
                "gaps": ["go"],
                "interviewQuestions": {"behavioral": ["b"], "occupational": ["o"]}
            })
        );
    }
}
