use std::collections::VecDeque;

use super::types::InputEvent;

/// One frame's worth of raw input, in arrival order.
///
/// The host fills it between frames; the dispatcher drains it once per frame
/// before the update pass runs. Order is significant and preserved.
#[derive(Debug, Default)]
pub struct InputFrame {
    events: VecDeque<InputEvent>,
}

impl InputFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push_back(ev);
    }

    /// Removes the oldest queued event.
    pub fn pop_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }
}

impl FromIterator<InputEvent> for InputFrame {
    fn from_iter<I: IntoIterator<Item = InputEvent>>(iter: I) -> Self {
        Self { events: iter.into_iter().collect() }
    }
}

impl Extend<InputEvent> for InputFrame {
    fn extend<I: IntoIterator<Item = InputEvent>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}
