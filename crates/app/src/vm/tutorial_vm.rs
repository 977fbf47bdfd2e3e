use finance_core::model::{Topic, TutorialSection};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TutorialPageVm {
    pub heading: String,
    pub title: String,
    pub content: String,
}

#[must_use]
pub fn map_tutorial_page(topic: Topic, index: usize, section: &TutorialSection) -> TutorialPageVm {
    TutorialPageVm {
        heading: format!("{topic} - Section {}", index + 1),
        title: section.title().to_string(),
        content: section.content().to_string(),
    }
}

/// Topic name followed by one dot per section, filled when viewed.
#[must_use]
pub fn map_topic_line(topic: Topic, viewed: &[bool]) -> String {
    let dots: String = viewed
        .iter()
        .map(|seen| if *seen { '●' } else { '○' })
        .collect();
    format!("{:<14} {dots}", topic.name())
}
