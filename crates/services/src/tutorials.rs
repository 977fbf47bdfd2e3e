use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use tracing::debug;

use finance_core::ContentProvider;
use finance_core::model::{Topic, TutorialSection};

#[derive(Debug, Clone)]
struct Reading {
    topic: Topic,
    sections: Vec<TutorialSection>,
    current: usize,
}

/// Tutorial navigation plus the viewed-section marks shown on the topic list.
///
/// Marks persist across visits for the lifetime of the service; the reading
/// position starts at the first section on every `open`. A section counts as
/// viewed once it has been shown.
pub struct TutorialService {
    content: Arc<dyn ContentProvider>,
    viewed: HashMap<Topic, BTreeSet<usize>>,
    reading: Option<Reading>,
}

impl TutorialService {
    #[must_use]
    pub fn new(content: Arc<dyn ContentProvider>) -> Self {
        Self {
            content,
            viewed: HashMap::new(),
            reading: None,
        }
    }

    /// Start reading `topic` at its first section.
    ///
    /// Returns `None` when the topic has no sections.
    pub fn open(&mut self, topic: Topic) -> Option<&TutorialSection> {
        let sections = self.content.tutorial(topic);
        if sections.is_empty() {
            self.reading = None;
            return None;
        }
        self.viewed.entry(topic).or_default().insert(0);
        debug!(%topic, sections = sections.len(), "tutorial opened");
        self.reading = Some(Reading {
            topic,
            sections,
            current: 0,
        });
        self.current_section()
    }

    pub fn close(&mut self) {
        self.reading = None;
    }

    #[must_use]
    pub fn current_topic(&self) -> Option<Topic> {
        self.reading.as_ref().map(|reading| reading.topic)
    }

    /// Zero-based index of the section being read.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.reading.as_ref().map(|reading| reading.current)
    }

    #[must_use]
    pub fn current_section(&self) -> Option<&TutorialSection> {
        self.reading
            .as_ref()
            .and_then(|reading| reading.sections.get(reading.current))
    }

    #[must_use]
    pub fn section_count(&self) -> Option<usize> {
        self.reading.as_ref().map(|reading| reading.sections.len())
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.reading
            .as_ref()
            .is_some_and(|reading| reading.current + 1 < reading.sections.len())
    }

    #[must_use]
    pub fn has_back(&self) -> bool {
        self.reading
            .as_ref()
            .is_some_and(|reading| reading.current > 0)
    }

    /// Move to the next section. Stays put on the last one.
    pub fn next(&mut self) -> Option<&TutorialSection> {
        if self.has_next() {
            if let Some(reading) = self.reading.as_mut() {
                reading.current += 1;
                self.viewed
                    .entry(reading.topic)
                    .or_default()
                    .insert(reading.current);
            }
        }
        self.current_section()
    }

    /// Move to the previous section. Stays put on the first one.
    pub fn back(&mut self) -> Option<&TutorialSection> {
        if let Some(reading) = self.reading.as_mut() {
            reading.current = reading.current.saturating_sub(1);
        }
        self.current_section()
    }

    /// Mark a section as viewed without opening it. Returns `false` for an
    /// index past the end of the topic.
    pub fn mark_viewed(&mut self, topic: Topic, index: usize) -> bool {
        if index >= self.content.tutorial(topic).len() {
            return false;
        }
        self.viewed.entry(topic).or_default().insert(index);
        true
    }

    /// One flag per section of `topic`, in section order.
    #[must_use]
    pub fn viewed_flags(&self, topic: Topic) -> Vec<bool> {
        let total = self.content.tutorial(topic).len();
        let viewed = self.viewed.get(&topic);
        (0..total)
            .map(|idx| viewed.is_some_and(|set| set.contains(&idx)))
            .collect()
    }

    /// Fraction of `topic`'s sections viewed, in `[0, 1]`.
    #[must_use]
    pub fn completion(&self, topic: Topic) -> f64 {
        let flags = self.viewed_flags(topic);
        if flags.is_empty() {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = flags.iter().filter(|v| **v).count() as f64 / flags.len() as f64;
        ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finance_core::StaticContent;

    fn service() -> TutorialService {
        TutorialService::new(Arc::new(StaticContent::new()))
    }

    #[test]
    fn open_marks_first_section() {
        let mut svc = service();
        let first = svc.open(Topic::Saving).unwrap().title().to_string();
        assert_eq!(first, "Types of Savings Accounts");
        assert_eq!(svc.viewed_flags(Topic::Saving), vec![true, false, false, false]);
        assert!(!svc.has_back());
        assert!(svc.has_next());
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut svc = service();
        svc.open(Topic::Spending);
        assert_eq!(svc.back().unwrap().title(), "Tracking Spending");
        for _ in 0..10 {
            svc.next();
        }
        assert_eq!(svc.current_index(), Some(3));
        assert_eq!(svc.current_section().unwrap().title(), "Impulse Purchases");
        assert!(!svc.has_next());
        assert!((svc.completion(Topic::Spending) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn reopening_starts_over_but_keeps_marks() {
        let mut svc = service();
        svc.open(Topic::Investing);
        svc.next();
        svc.close();
        assert_eq!(svc.current_section(), None);

        svc.open(Topic::Investing);
        assert_eq!(svc.current_index(), Some(0));
        assert_eq!(
            svc.viewed_flags(Topic::Investing),
            vec![true, true, false, false, false]
        );
    }

    #[test]
    fn mark_viewed_validates_index() {
        let mut svc = service();
        assert!(svc.mark_viewed(Topic::CreditScore, 2));
        assert!(svc.mark_viewed(Topic::CreditScore, 2));
        assert!(!svc.mark_viewed(Topic::CreditScore, 4));
        assert!((svc.completion(Topic::CreditScore) - 0.25).abs() < f64::EPSILON);
    }
}
