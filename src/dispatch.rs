use crate::model::KeyAction;
use strum_macros::Display;

/// The host's handle on the focused text field.
pub trait TextDocumentProxy {
    fn insert_text(&mut self, text: &str);
    fn delete_backward(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum TransitionDirection {
    Forward,
    Backward,
}

/// Active-layout index over `count` layouts, plus the direction of the last
/// switch so the front end can animate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutNavigator {
    pub index: usize,
    pub count: usize,
    pub direction: Option<TransitionDirection>,
}

impl LayoutNavigator {
    pub fn new(count: usize) -> Self {
        Self {
            index: 0,
            count,
            direction: None,
        }
    }

    /// Returns `false` when there is nothing to switch between.
    pub fn advance(&mut self) -> bool {
        if self.count == 0 {
            return false;
        }
        self.index = (self.index + 1) % self.count;
        self.direction = Some(TransitionDirection::Forward);
        true
    }

    pub fn retreat(&mut self) -> bool {
        if self.count == 0 {
            return false;
        }
        // `+ count` keeps the subtraction from underflowing at index 0.
        self.index = (self.index + self.count - 1) % self.count;
        self.direction = Some(TransitionDirection::Backward);
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Edited,
    Switched {
        from: usize,
        to: usize,
        direction: TransitionDirection,
    },
    Ignored,
}

pub fn handle<P: TextDocumentProxy + ?Sized>(
    action: &KeyAction,
    proxy: &mut P,
    nav: &mut LayoutNavigator,
) -> DispatchOutcome {
    match action {
        KeyAction::InsertText(text) => {
            proxy.insert_text(text);
            DispatchOutcome::Edited
        }
        KeyAction::Backspace => {
            proxy.delete_backward();
            DispatchOutcome::Edited
        }
        KeyAction::Space => {
            proxy.insert_text(" ");
            DispatchOutcome::Edited
        }
        KeyAction::SwitchToNextLayout => switch(nav, LayoutNavigator::advance),
        KeyAction::SwitchToPreviousLayout => switch(nav, LayoutNavigator::retreat),
    }
}

fn switch(nav: &mut LayoutNavigator, step: fn(&mut LayoutNavigator) -> bool) -> DispatchOutcome {
    let from = nav.index;
    if !step(nav) {
        return DispatchOutcome::Ignored;
    }
    match nav.direction {
        Some(direction) => DispatchOutcome::Switched {
            from,
            to: nav.index,
            direction,
        },
        None => DispatchOutcome::Ignored,
    }
}

/// In-memory text field with the cursor pinned at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl TextDocumentProxy for TextBuffer {
    fn insert_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn delete_backward(&mut self) {
        self.text.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_navigator_ignores_switches() {
        let mut nav = LayoutNavigator::new(0);
        let mut buf = TextBuffer::new();
        let out = handle(&KeyAction::SwitchToNextLayout, &mut buf, &mut nav);
        assert_eq!(out, DispatchOutcome::Ignored);
        assert_eq!(nav.index, 0);
        assert_eq!(nav.direction, None);
    }

    #[test]
    fn test_buffer_backspace_on_empty_is_noop() {
        let mut buf = TextBuffer::new();
        buf.delete_backward();
        assert_eq!(buf.as_str(), "");
    }
}
