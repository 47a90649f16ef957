//! Pattern compilation for robots rules
//!
//! Two pattern kinds share the [`Pattern`] contract: [`PathPattern`] matches URL
//! paths and [`AgentPattern`] matches crawler identities. Both expose a specificity
//! score used to rank competing patterns, higher first.

use crate::error::PatternError;
use regex::Regex;

/// Specificity of the root path pattern `/`.
///
/// A disallow rule at or below this score blocks everything without singling out
/// any particular path.
pub const ROOT_SPECIFICITY: usize = 1;

/// Agent token matching every crawler
pub const WILDCARD_AGENT: &str = "*";

const WILDCARD: char = '*';
const END_ANCHOR: char = '$';

/// A compiled matcher with a specificity score
pub trait Pattern {
    /// Check whether the candidate string is covered by this pattern
    fn matches(&self, candidate: &str) -> bool;

    /// How narrowly this pattern constrains candidates
    fn specificity(&self) -> usize;
}

/// Compiled path pattern
#[derive(Debug, Clone)]
pub struct PathPattern {
    source: String,
    matcher: PathMatcher,
    specificity: usize,
}

#[derive(Debug, Clone)]
enum PathMatcher {
    Prefix(String),
    Exact(String),
    Wildcard(Regex),
}

impl PathPattern {
    /// Compile a raw path pattern.
    ///
    /// Literal patterns match by prefix. `*` absorbs zero or more characters and a
    /// trailing `$` pins the match to the end of the candidate. Patterns that start
    /// with neither `/` nor `*` are rooted with a leading `/`.
    pub fn new(raw: &str) -> Result<Self, PatternError> {
        let rooted = if raw.starts_with('/') || raw.starts_with(WILDCARD) {
            raw.to_string()
        } else {
            format!("/{raw}")
        };

        let (body, anchored) = match rooted.strip_suffix(END_ANCHOR) {
            Some(body) => (body, true),
            None => (rooted.as_str(), false),
        };

        let specificity = body.chars().filter(|c| *c != WILDCARD).count();

        let matcher = if body.contains(WILDCARD) {
            let expr = body
                .split(WILDCARD)
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(".*");
            let expr = if anchored {
                format!("(?s)^{expr}$")
            } else {
                format!("(?s)^{expr}")
            };
            let regex =
                Regex::new(&expr).map_err(|e| PatternError::invalid(raw, e.to_string()))?;
            PathMatcher::Wildcard(regex)
        } else if anchored {
            PathMatcher::Exact(body.to_string())
        } else {
            PathMatcher::Prefix(body.to_string())
        };

        Ok(Self {
            source: raw.to_string(),
            matcher,
            specificity,
        })
    }

    /// The pattern as written in the configuration
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Pattern for PathPattern {
    fn matches(&self, candidate: &str) -> bool {
        match &self.matcher {
            PathMatcher::Prefix(prefix) => candidate.starts_with(prefix.as_str()),
            PathMatcher::Exact(path) => candidate == path.as_str(),
            PathMatcher::Wildcard(regex) => regex.is_match(candidate),
        }
    }

    fn specificity(&self) -> usize {
        self.specificity
    }
}

/// Compiled user-agent pattern
///
/// The wildcard agent matches everyone and ranks last. Any other token matches
/// case-insensitively when it appears anywhere in the crawler identity, so `googlebot`
/// covers `Mozilla/5.0 (compatible; Googlebot/2.1)`.
#[derive(Debug, Clone)]
pub struct AgentPattern {
    source: String,
    token: Option<String>,
}

impl AgentPattern {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        let token = if trimmed.is_empty() || trimmed == WILDCARD_AGENT {
            None
        } else {
            Some(trimmed.to_lowercase())
        };

        Self {
            source: raw.to_string(),
            token,
        }
    }

    /// The agent name as written in the configuration
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_wildcard(&self) -> bool {
        self.token.is_none()
    }

    /// Match against an identity that has already been lowercased
    pub(crate) fn matches_lowercase(&self, lowered: &str) -> bool {
        match &self.token {
            None => true,
            Some(token) => lowered.contains(token.as_str()),
        }
    }
}

impl Pattern for AgentPattern {
    fn matches(&self, candidate: &str) -> bool {
        self.matches_lowercase(&candidate.to_lowercase())
    }

    fn specificity(&self) -> usize {
        self.token.as_ref().map_or(0, |token| token.chars().count())
    }
}
