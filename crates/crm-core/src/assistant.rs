//! Assistant mock
//!
//! A transcript plus a canned reply. Nothing is inferred and nothing is
//! persisted; the caller supplies the artificial delay between `ask` and
//! `reply`.

pub const GREETING: &str = "Hi! I can summarize calls, qualify leads, and draft follow-ups.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

/// Fixed reply text referencing how many leads are saved
pub fn canned_reply(lead_count: usize) -> String {
    format!(
        "Suggested reply based on {} saved leads:\n\
         - Thanks for connecting! I recommend 2 options.\n\
         Actions:\n\
         1) Tag lead as 'Hot'.\n\
         2) Schedule site visit.\n\
         3) Create follow-up task for tomorrow.",
        lead_count
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assistant {
    transcript: Vec<Message>,
    busy: bool,
}

impl Default for Assistant {
    fn default() -> Self {
        Self {
            transcript: vec![Message {
                role: Role::Assistant,
                content: GREETING.to_string(),
            }],
            busy: false,
        }
    }
}

impl Assistant {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Appends the user's message. Blank input and asks while a reply is
    /// pending are ignored; returns whether a reply should follow.
    pub fn ask(&mut self, query: &str) -> bool {
        if self.busy || query.trim().is_empty() {
            return false;
        }
        self.transcript.push(Message {
            role: Role::User,
            content: query.to_string(),
        });
        self.busy = true;
        true
    }

    /// Appends the canned reply once the simulated delay has passed.
    pub fn reply(&mut self, lead_count: usize) {
        self.transcript.push(Message {
            role: Role::Assistant,
            content: canned_reply(lead_count),
        });
        self.busy = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_greeting() {
        let a = Assistant::new();
        assert_eq!(a.transcript().len(), 1);
        assert_eq!(a.transcript()[0].content, GREETING);
        assert!(!a.transcript()[0].is_user());
    }

    #[test]
    fn test_blank_query_is_noop() {
        let mut a = Assistant::new();
        assert!(!a.ask(""));
        assert!(!a.ask("  \n\t "));
        assert_eq!(a.transcript().len(), 1);
        assert!(!a.is_busy());
    }

    #[test]
    fn test_reply_mentions_lead_count() {
        let mut a = Assistant::new();
        assert!(a.ask("Draft a follow-up for Rohini Central Mall lead"));
        assert!(a.is_busy());
        a.reply(7);

        let t = a.transcript();
        assert_eq!(t.len(), 3);
        assert!(t[1].is_user());
        assert!(t[2].content.contains("based on 7 saved leads"));
        assert!(!a.is_busy());
    }

    #[test]
    fn test_ask_while_busy_is_ignored() {
        let mut a = Assistant::new();
        assert!(a.ask("first"));
        assert!(!a.ask("second"));
        assert_eq!(a.transcript().len(), 2);
    }

    #[test]
    fn test_reply_has_one_line_per_action() {
        let reply = canned_reply(0);
        assert_eq!(reply.lines().count(), 6);
        assert!(reply.lines().all(|line| !line.starts_with(' ')));
    }
}
