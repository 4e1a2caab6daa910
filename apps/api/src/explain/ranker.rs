//! Keyword ranking — frequency table plus an explicit, stable top-N selection.

use std::collections::HashMap;

/// Keywords kept from a job description.
pub const JD_KEYWORD_LIMIT: usize = 18;
/// Keywords kept from a resume. Larger than the JD limit: resumes carry more noise.
pub const RESUME_KEYWORD_LIMIT: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq)]
struct TokenCount {
    token: String,
    count: u32,
    first_index: usize,
}

/// Token → occurrence count, remembering where each token first appeared.
#[derive(Debug, Default)]
pub struct KeywordFrequencyTable {
    entries: Vec<TokenCount>,
    index: HashMap<String, usize>,
}

impl KeywordFrequencyTable {
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::default();
        for (position, token) in tokens.into_iter().enumerate() {
            table.record(token.into(), position);
        }
        table
    }

    fn record(&mut self, token: String, position: usize) {
        match self.index.get(&token) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.index.insert(token.clone(), self.entries.len());
                self.entries.push(TokenCount {
                    token,
                    count: 1,
                    first_index: position,
                });
            }
        }
    }

    /// Top `limit` tokens: count descending, then first occurrence ascending.
    ///
    /// The tie-break is part of the contract. Short job descriptions often have
    /// every token at count 1, so first occurrence decides what is "top".
    pub fn top(&self, limit: usize) -> RankedKeywordList {
        let mut ranked: Vec<&TokenCount> = self.entries.iter().collect();
        ranked.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.first_index.cmp(&b.first_index))
        });

        RankedKeywordList(
            ranked
                .into_iter()
                .take(limit)
                .map(|entry| entry.token.clone())
                .collect(),
        )
    }
}

/// Ordered, duplicate-free list of the most frequent tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedKeywordList(Vec<String>);

impl RankedKeywordList {
    pub fn contains(&self, keyword: &str) -> bool {
        self.0.iter().any(|k| k == keyword)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Convenience: rank a token sequence in one call.
pub fn rank_keywords(tokens: Vec<String>, limit: usize) -> RankedKeywordList {
    KeywordFrequencyTable::from_tokens(tokens).top(limit)
}
