//! Evidence matching between dominant reasons and key phrases.

/// Decides whether a key phrase supports a dominant reason.
pub trait EvidenceMatcher: Send + Sync {
    fn is_related(&self, reason: &str, phrase: &str) -> bool;
}

/// A phrase is related when any whitespace-separated word of the reason
/// occurs inside it, ignoring case.
///
/// Loose on purpose: "box" matches "inbox", and short words like "a" match
/// almost everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordOverlapMatcher;

impl EvidenceMatcher for WordOverlapMatcher {
    fn is_related(&self, reason: &str, phrase: &str) -> bool {
        let phrase = phrase.to_lowercase();
        reason
            .split_whitespace()
            .any(|word| phrase.contains(&word.to_lowercase()))
    }
}
