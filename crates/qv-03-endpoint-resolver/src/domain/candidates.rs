//! Ordered candidate base URLs.

/// An ordered list of candidate base URLs.
///
/// Priority is list order: the first entry is the preferred (presumed
/// lowest-latency, most trusted) address, and probing never reorders or
/// parallelizes — a slow early candidate only costs its own probe
/// timeout before the next is tried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateList {
    urls: Vec<String>,
}

impl CandidateList {
    /// Build a candidate list, trimming trailing slashes so joining
    /// request paths stays uniform.
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            urls: urls
                .into_iter()
                .map(|u| u.into().trim_end_matches('/').to_string())
                .collect(),
        }
    }

    /// Candidates in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
