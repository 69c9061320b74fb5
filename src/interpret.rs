//! Normalizes the heterogeneous reply shapes returned by the chat endpoint.
//!
//! The endpoint's `answer` field is sometimes a plain string and sometimes a
//! serialized JSON object carrying its own nested `answer` plus optional
//! `suggested_questions`. Nothing in the envelope says which shape applies to
//! a given call, so the interpreter tries the structured parse and falls back
//! to verbatim text. A failed nested parse is an expected branch, never an
//! error.

use crate::topic::Topic;
use crate::types::SideContentKind;
use serde_json::Value;

/// Upper bound on the suggested follow-up set.
pub const MAX_SUGGESTIONS: usize = 4;

/// Explicit tagged union over the two reply shapes.
#[derive(Clone, Debug, PartialEq)]
pub enum RawReply {
    PlainText(String),
    Structured {
        answer: String,
        suggested_questions: Vec<String>,
    },
}

/// What the conversation store attaches to the next assistant message.
#[derive(Clone, Debug, PartialEq)]
pub struct Interpreted {
    pub content: String,
    pub follow_ups: Vec<String>,
    pub side_content: Option<SideContentKind>,
}

/// Classify the raw `answer` payload into one of the two reply shapes.
///
/// Only a JSON object counts as structured; bare JSON scalars and arrays are
/// treated as plain text, matching the display the raw string would produce.
pub fn parse_reply(raw: &str) -> RawReply {
    let Ok(value) = serde_json::from_str::<Value>(raw) else {
        return RawReply::PlainText(raw.to_string());
    };

    let Value::Object(map) = value else {
        return RawReply::PlainText(raw.to_string());
    };

    let answer = match map.get("answer") {
        Some(Value::String(text)) => text.clone(),
        // Non-string nested answers and objects missing the field fall back
        // to their serialized form rather than being dropped.
        Some(other) => other.to_string(),
        None => Value::Object(map.clone()).to_string(),
    };

    let suggested_questions = map
        .get("suggested_questions")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    RawReply::Structured {
        answer,
        suggested_questions,
    }
}

/// Produce the display content, the follow-up set (truncated to
/// [`MAX_SUGGESTIONS`]), and the side-content annotation for one reply.
///
/// Side content derives solely from the pre-dispatch topic classification;
/// the parse outcome never influences it.
pub fn interpret(raw_answer: &str, topic: Topic) -> Interpreted {
    let side_content = topic.side_content();
    match parse_reply(raw_answer) {
        RawReply::PlainText(content) => Interpreted {
            content,
            follow_ups: Vec::new(),
            side_content,
        },
        RawReply::Structured {
            answer,
            mut suggested_questions,
        } => {
            suggested_questions.truncate(MAX_SUGGESTIONS);
            Interpreted {
                content: answer,
                follow_ups: suggested_questions,
                side_content,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_reply() {
        let out = interpret("hello", Topic::None);
        assert_eq!(out.content, "hello");
        assert!(out.follow_ups.is_empty());
        assert_eq!(out.side_content, None);
    }

    #[test]
    fn test_structured_reply_with_suggestions() {
        let raw = r#"{"answer":"hi","suggested_questions":["a","b","c","d","e"]}"#;
        let out = interpret(raw, Topic::None);
        assert_eq!(out.content, "hi");
        assert_eq!(out.follow_ups, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_structured_reply_without_suggestions() {
        let out = interpret(r#"{"answer":"just text"}"#, Topic::None);
        assert_eq!(out.content, "just text");
        assert!(out.follow_ups.is_empty());
    }

    #[test]
    fn test_object_missing_nested_answer_serializes_whole_object() {
        let out = interpret(r#"{"note":"x"}"#, Topic::None);
        assert_eq!(out.content, r#"{"note":"x"}"#);
    }

    #[test]
    fn test_non_string_nested_answer_is_serialized() {
        let out = interpret(r#"{"answer":42}"#, Topic::None);
        assert_eq!(out.content, "42");
    }

    #[test]
    fn test_json_scalar_is_plain_text() {
        let out = interpret("42", Topic::None);
        assert_eq!(out.content, "42");
        assert!(out.follow_ups.is_empty());
    }

    #[test]
    fn test_broken_json_is_plain_text() {
        let raw = r#"{"answer": unterminated"#;
        assert_eq!(parse_reply(raw), RawReply::PlainText(raw.to_string()));
    }

    #[test]
    fn test_non_string_suggestions_are_skipped() {
        let raw = r#"{"answer":"hi","suggested_questions":["a",1,"b"]}"#;
        let out = interpret(raw, Topic::None);
        assert_eq!(out.follow_ups, vec!["a", "b"]);
    }

    #[test]
    fn test_topic_threads_through_regardless_of_shape() {
        assert_eq!(
            interpret("plain", Topic::Service).side_content,
            Some(SideContentKind::Service)
        );
        assert_eq!(
            interpret(r#"{"answer":"hi"}"#, Topic::Case).side_content,
            Some(SideContentKind::Case)
        );
    }
}
