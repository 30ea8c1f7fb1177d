/// The command categories a chat message can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    ListIssues,
    CloseIssue,
    MarkReadyToTest,
}

/// Maps a set of keywords to an intent. A message matches when it contains
/// any of the keywords as a substring.
#[derive(Debug)]
pub struct IntentMatcher {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
}

impl IntentMatcher {
    pub fn matches(&self, message: &str) -> bool {
        self.keywords.iter().any(|keyword| message.contains(keyword))
    }
}

/// Checked in order; the first matcher that fires decides the intent.
pub const INTENT_MATCHERS: &[IntentMatcher] = &[
    IntentMatcher {
        intent: Intent::ListIssues,
        keywords: &["get", "show"],
    },
    IntentMatcher {
        intent: Intent::CloseIssue,
        keywords: &["close", "reject"],
    },
    IntentMatcher {
        intent: Intent::MarkReadyToTest,
        keywords: &["ready to test"],
    },
];

pub fn classify(message: &str) -> Option<Intent> {
    INTENT_MATCHERS
        .iter()
        .find(|matcher| matcher.matches(message))
        .map(|matcher| matcher.intent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_matcher_recognizes_its_keywords() {
        assert!(INTENT_MATCHERS[0].matches("show my issues"));
        assert!(INTENT_MATCHERS[0].matches("get issues"));
        assert!(INTENT_MATCHERS[1].matches("reject 12"));
        assert!(INTENT_MATCHERS[2].matches("12 is ready to test"));
        assert!(!INTENT_MATCHERS[2].matches("ready for testing"));
    }

    #[test]
    fn classify_maps_keywords_to_intents() {
        assert_eq!(classify("show me my issues"), Some(Intent::ListIssues));
        assert_eq!(classify("please close 42"), Some(Intent::CloseIssue));
        assert_eq!(classify("reject 42"), Some(Intent::CloseIssue));
        assert_eq!(
            classify("10 ready to test assign Bob"),
            Some(Intent::MarkReadyToTest)
        );
        assert_eq!(classify("hello there"), None);
    }

    #[test]
    fn earlier_intents_win_when_keywords_overlap() {
        assert_eq!(classify("show and close 42"), Some(Intent::ListIssues));
        assert_eq!(
            classify("close 42, it is ready to test"),
            Some(Intent::CloseIssue)
        );
    }

    #[test]
    fn keywords_match_inside_longer_words() {
        assert_eq!(classify("forget it"), Some(Intent::ListIssues));
    }
}
