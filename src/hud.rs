//! Score and best-score labels
//!
//! The simulation never touches display objects; it emits `GameEvent`s and
//! this module turns them into text updates on an abstract label sink.

use crate::sim::GameEvent;

/// Labels the game writes text to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Score,
    Best,
}

/// Where label text goes - a DOM node, a terminal line, a test buffer
pub trait TextSink {
    fn set_text(&mut self, label: Label, text: &str);
}

/// Keeps the labels current by consuming simulation events
#[derive(Debug)]
pub struct Hud<S: TextSink> {
    sink: S,
}

impl<S: TextSink> Hud<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Write both labels from current values (startup, after store load)
    pub fn sync(&mut self, score: u32, best: u32) {
        self.sink.set_text(Label::Score, &format!("Score:{score}"));
        self.sink.set_text(Label::Best, &format!("Best Score:{best}"));
    }

    pub fn apply(&mut self, event: GameEvent) {
        match event {
            GameEvent::ScoreChanged(score) => {
                self.sink.set_text(Label::Score, &format!("Score:{score}"));
            }
            GameEvent::BestScoreChanged(best) => {
                self.sink.set_text(Label::Best, &format!("Best Score:{best}"));
            }
            GameEvent::PhaseChanged(_) => {}
        }
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    #[derive(Default)]
    struct RecordingSink {
        calls: Vec<(Label, String)>,
    }

    impl TextSink for RecordingSink {
        fn set_text(&mut self, label: Label, text: &str) {
            self.calls.push((label, text.to_string()));
        }
    }

    #[test]
    fn test_score_event_updates_score_label() {
        let mut hud = Hud::new(RecordingSink::default());
        hud.apply(GameEvent::ScoreChanged(3));

        let sink = hud.into_sink();
        assert_eq!(sink.calls, vec![(Label::Score, "Score:3".to_string())]);
    }

    #[test]
    fn test_best_event_updates_best_label() {
        let mut hud = Hud::new(RecordingSink::default());
        hud.apply(GameEvent::BestScoreChanged(8));

        let sink = hud.into_sink();
        assert_eq!(sink.calls, vec![(Label::Best, "Best Score:8".to_string())]);
    }

    #[test]
    fn test_phase_event_writes_nothing() {
        let mut hud = Hud::new(RecordingSink::default());
        hud.apply(GameEvent::PhaseChanged(GamePhase::GameOver));
        assert!(hud.into_sink().calls.is_empty());
    }

    #[test]
    fn test_sync_writes_both_labels() {
        let mut hud = Hud::new(RecordingSink::default());
        hud.sync(0, 42);

        let sink = hud.into_sink();
        assert_eq!(
            sink.calls,
            vec![
                (Label::Score, "Score:0".to_string()),
                (Label::Best, "Best Score:42".to_string()),
            ]
        );
    }
}
