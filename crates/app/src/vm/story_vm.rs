use finance_core::model::{StoryLine, Topic};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoryLineVm {
    pub heading: String,
    pub speaker: String,
    pub text: String,
    pub voice: String,
}

#[must_use]
pub fn map_story_line(
    topic: Topic,
    index: usize,
    total: usize,
    line: &StoryLine,
    voice_enabled: bool,
) -> StoryLineVm {
    StoryLineVm {
        heading: format!("{topic} - Story Mode ({}/{total})", index + 1),
        speaker: line.speaker().to_string(),
        text: line.text().to_string(),
        voice: if voice_enabled { "Voice: on" } else { "Voice: off" }.to_string(),
    }
}
