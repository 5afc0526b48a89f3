//! Share links: the two inputs carried in a URL query string
//!
//! The source text travels as `t` and the candidate as `e`. A key is only
//! written when its value is non-empty, and values are restored verbatim.
//! When a key repeats, its first value wins.

/// Query key for the source text
pub const SOURCE_KEY: &str = "t";

/// Query key for the candidate
pub const CANDIDATE_KEY: &str = "e";

/// The state a share link restores
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareState {
    pub source: String,
    pub candidate: String,
}

impl ShareState {
    pub fn new(source: impl Into<String>, candidate: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            candidate: candidate.into(),
        }
    }

    /// Decode a query string (without the leading `?`)
    ///
    /// Missing keys decode to empty strings; unknown keys are ignored.
    pub fn from_query(query: &str) -> Result<Self, serde_urlencoded::de::Error> {
        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_str(query.trim_start_matches('?'))?;

        let mut source = None;
        let mut candidate = None;
        for (key, value) in pairs {
            let slot = match key.as_str() {
                SOURCE_KEY => &mut source,
                CANDIDATE_KEY => &mut candidate,
                _ => continue,
            };
            slot.get_or_insert(value);
        }

        Ok(Self {
            source: source.unwrap_or_default(),
            candidate: candidate.unwrap_or_default(),
        })
    }

    /// Encode as a query string (without the leading `?`)
    pub fn to_query(&self) -> String {
        let pairs: Vec<(&str, &str)> = [
            (SOURCE_KEY, self.source.as_str()),
            (CANDIDATE_KEY, self.candidate.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect();
        // Pairs of plain strings always serialize
        serde_urlencoded::to_string(pairs).unwrap_or_default()
    }

    /// Full link to the page at `base` restoring this state
    pub fn share_url(&self, base: &str) -> String {
        let base = base.trim_end_matches('/');
        let query = self.to_query();
        if query.is_empty() {
            format!("{}/", base)
        } else {
            format!("{}/?{}", base, query)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty() && self.candidate.is_empty()
    }
}
