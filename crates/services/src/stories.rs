use std::sync::Arc;

use tracing::debug;

use finance_core::ContentProvider;
use finance_core::model::{StoryLine, Topic};

#[derive(Debug, Clone)]
struct Conversation {
    topic: Topic,
    lines: Vec<StoryLine>,
    current: usize,
}

/// Steps through a topic's scripted conversation one line at a time.
///
/// The voice flag is presentation state only: it survives across
/// conversations and starts enabled.
pub struct StoryService {
    content: Arc<dyn ContentProvider>,
    conversation: Option<Conversation>,
    voice_enabled: bool,
}

impl StoryService {
    #[must_use]
    pub fn new(content: Arc<dyn ContentProvider>) -> Self {
        Self {
            content,
            conversation: None,
            voice_enabled: true,
        }
    }

    /// Start `topic`'s conversation at its first line.
    ///
    /// Returns `None` when the topic has no script.
    pub fn open(&mut self, topic: Topic) -> Option<&StoryLine> {
        let lines = self.content.story(topic);
        if lines.is_empty() {
            self.conversation = None;
            return None;
        }
        debug!(%topic, lines = lines.len(), "story opened");
        self.conversation = Some(Conversation {
            topic,
            lines,
            current: 0,
        });
        self.current_line()
    }

    pub fn close(&mut self) {
        self.conversation = None;
    }

    #[must_use]
    pub fn current_topic(&self) -> Option<Topic> {
        self.conversation.as_ref().map(|c| c.topic)
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.conversation.as_ref().map(|c| c.current)
    }

    #[must_use]
    pub fn line_count(&self) -> Option<usize> {
        self.conversation.as_ref().map(|c| c.lines.len())
    }

    #[must_use]
    pub fn current_line(&self) -> Option<&StoryLine> {
        self.conversation
            .as_ref()
            .and_then(|c| c.lines.get(c.current))
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.conversation
            .as_ref()
            .is_some_and(|c| c.current + 1 < c.lines.len())
    }

    #[must_use]
    pub fn has_back(&self) -> bool {
        self.conversation.as_ref().is_some_and(|c| c.current > 0)
    }

    /// Move to the next line. Stays put on the last one.
    pub fn next(&mut self) -> Option<&StoryLine> {
        if self.has_next() {
            if let Some(conversation) = self.conversation.as_mut() {
                conversation.current += 1;
            }
        }
        self.current_line()
    }

    /// Move to the previous line. Stays put on the first one.
    pub fn back(&mut self) -> Option<&StoryLine> {
        if let Some(conversation) = self.conversation.as_mut() {
            conversation.current = conversation.current.saturating_sub(1);
        }
        self.current_line()
    }

    #[must_use]
    pub fn voice_enabled(&self) -> bool {
        self.voice_enabled
    }

    /// Flip the voice flag and return the new value.
    pub fn toggle_voice(&mut self) -> bool {
        self.voice_enabled = !self.voice_enabled;
        debug!(voice = self.voice_enabled, "voice toggled");
        self.voice_enabled
    }
}
