//! Keyword heuristics over the outgoing query.
//!
//! Classification runs once per submission, before the request is dispatched,
//! so the eventual side-content annotation reflects what the user asked about
//! rather than whatever the model happened to reply with.

use crate::types::SideContentKind;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Topic {
    #[default]
    None,
    Service,
    Case,
}

const SERVICE_KEYWORDS: &[&str] = &[
    "service",
    "pricing",
    "price",
    "plan",
    "feature",
    "what do you offer",
    "how does it work",
];

const CASE_KEYWORDS: &[&str] = &[
    "case stud",
    "success stor",
    "customer stor",
    "who uses",
    "deployment",
    "adoption",
];

/// Case-insensitive substring match against the two fixed keyword sets.
///
/// Service keywords are checked first: a query matching both sets resolves to
/// `Topic::Service`. That tie-break is deliberate, not an artifact of
/// iteration order.
pub fn classify(query: &str) -> Topic {
    let text = query.to_lowercase();
    if SERVICE_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        return Topic::Service;
    }
    if CASE_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        return Topic::Case;
    }
    Topic::None
}

impl Topic {
    pub fn side_content(self) -> Option<SideContentKind> {
        match self {
            Topic::None => None,
            Topic::Service => Some(SideContentKind::Service),
            Topic::Case => Some(SideContentKind::Case),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_keyword_matches() {
        assert_eq!(classify("Tell me about your pricing plans"), Topic::Service);
        assert_eq!(classify("WHAT SERVICES do you have?"), Topic::Service);
    }

    #[test]
    fn test_case_keyword_matches() {
        assert_eq!(classify("Do you have any case studies?"), Topic::Case);
        assert_eq!(classify("Share a customer success story"), Topic::Case);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(classify("hello there"), Topic::None);
        assert_eq!(classify(""), Topic::None);
    }

    #[test]
    fn test_service_wins_when_both_match() {
        let query = "Show me a case study about your pricing";
        assert_eq!(classify(query), Topic::Service);
    }

    #[test]
    fn test_side_content_mapping() {
        assert_eq!(Topic::None.side_content(), None);
        assert_eq!(
            Topic::Service.side_content(),
            Some(SideContentKind::Service)
        );
        assert_eq!(Topic::Case.side_content(), Some(SideContentKind::Case));
    }
}
