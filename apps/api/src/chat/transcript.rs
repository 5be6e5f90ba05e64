use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One line of the conversation. Never edited after it is appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

/// Append-only log of everything said in a session, in the order it was said.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ChatTranscript {
    messages: Vec<Message>,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.push(Sender::User, text.into());
    }

    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.push(Sender::Bot, text.into());
    }

    fn push(&mut self, sender: Sender, text: String) {
        self.messages.push(Message {
            sender,
            text,
            sent_at: Utc::now(),
        });
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

#[cfg(test)]
impl ChatTranscript {
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Texts of every message from index `from` on. Handy for "what did this turn add".
    pub fn texts_since(&self, from: usize) -> Vec<&str> {
        self.messages
            .get(from..)
            .unwrap_or_default()
            .iter()
            .map(|m| m.text.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_keep_append_order() {
        let mut transcript = ChatTranscript::new();
        transcript.push_user("score");
        transcript.push_bot("Ada: 80");
        transcript.push_bot("Grace: 60");

        let senders: Vec<Sender> = transcript.messages().iter().map(|m| m.sender).collect();
        assert_eq!(senders, vec![Sender::User, Sender::Bot, Sender::Bot]);
        assert_eq!(transcript.texts_since(1), vec!["Ada: 80", "Grace: 60"]);
        assert!(transcript.messages()[0].sent_at <= transcript.messages()[2].sent_at);
    }

    #[test]
    fn test_texts_since_past_end_is_empty() {
        let mut transcript = ChatTranscript::new();
        transcript.push_bot("hello");
        assert!(transcript.texts_since(5).is_empty());
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let mut transcript = ChatTranscript::new();
        transcript.push_user("hi");
        let json = serde_json::to_value(&transcript).unwrap();
        assert_eq!(json[0]["sender"], "user");
        assert_eq!(json[0]["text"], "hi");
    }
}
