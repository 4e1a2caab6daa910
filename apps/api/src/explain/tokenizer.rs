//! Tokenizer — lower-cases text and extracts keyword candidates.
//!
//! A token is a maximal run of alphanumeric / `+` / `#` characters that
//! contains at least one alphanumeric character and is either 3+ characters
//! long or on the short-token allow-list (`go`, `c#`, `ml`, ...). Tokens on
//! the stopword list are dropped.

use std::collections::HashSet;

/// Version label of the built-in stopword list. Bump whenever `DEFAULT_STOPWORDS` changes.
pub const STOPWORDS_VERSION: &str = "en-hiring-2024.1";

/// Common English function words plus hiring-document filler.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    // function words
    "about", "above", "after", "again", "against", "all", "also", "and", "any", "are", "around",
    "because", "been", "before", "being", "below", "between", "both", "but", "can", "could",
    "did", "does", "doing", "down", "during", "each", "etc", "every", "few", "for", "from",
    "further", "had", "has", "have", "having", "her", "here", "hers", "him", "his", "how",
    "into", "its", "itself", "just", "more", "most", "must", "not", "now", "off", "once",
    "only", "other", "our", "ours", "out", "over", "own", "per", "same", "she", "should",
    "some", "such", "than", "that", "the", "their", "them", "then", "there", "these", "they",
    "this", "those", "through", "too", "under", "until", "upon", "very", "via", "was", "way",
    "well", "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will",
    "with", "within", "without", "would", "yet", "you", "your", "yours",
    // hiring filler
    "ability", "able", "candidate", "candidates", "company", "environment", "excellent",
    "experience", "experienced", "familiarity", "good", "great", "ideal", "including",
    "join", "knowledge", "looking", "new", "plus", "preferred", "proven", "related",
    "required", "requirement", "requirements", "requires", "responsibilities",
    "responsible", "role", "seeking", "skill", "skills", "strong", "team", "teams",
    "understanding", "using", "work", "working", "year", "years",
];

/// Two-character tokens that survive the length filter.
pub const DEFAULT_SHORT_TOKENS: &[&str] = &[
    "ai", "c#", "cd", "ci", "db", "f#", "go", "js", "ml", "qa", "r#", "ts", "ui", "ux",
];

/// Versioned stopword set. Injected into the tokenizer so tests and deployments
/// can override it without touching tokenizer logic.
#[derive(Debug, Clone)]
pub struct Stopwords {
    version: String,
    words: HashSet<String>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::new(STOPWORDS_VERSION, DEFAULT_STOPWORDS.iter().copied())
    }
}

impl Stopwords {
    pub fn new<I, S>(version: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            version: version.into(),
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Extends the list. The version label gains a `+N` suffix counting the new words.
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.words.len();
        self.words.extend(
            extra
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        let added = self.words.len() - before;
        if added > 0 {
            self.version = format!("{}+{added}", self.version);
        }
        self
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

#[derive(Debug, Clone)]
pub struct Tokenizer {
    stopwords: Stopwords,
    short_tokens: HashSet<String>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(Stopwords::default())
    }
}

impl Tokenizer {
    pub fn new(stopwords: Stopwords) -> Self {
        Self {
            stopwords,
            short_tokens: DEFAULT_SHORT_TOKENS.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    /// Returns the tokens of `text` in source order, duplicates included.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();

        lowered
            .split(|c: char| !is_token_char(c))
            .filter(|candidate| self.qualifies(candidate))
            .map(str::to_string)
            .collect()
    }

    fn qualifies(&self, candidate: &str) -> bool {
        let len = candidate.chars().count();
        if len < 2 || !candidate.chars().any(char::is_alphanumeric) {
            return false;
        }
        if len < 3 && !self.short_tokens.contains(candidate) {
            return false;
        }
        !self.stopwords.contains(candidate)
    }
}

fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || c == '+' || c == '#'
}
