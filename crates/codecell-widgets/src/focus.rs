//! Keyboard focus across several widgets.

/// Tracks which of `len` slots holds keyboard focus, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusRing {
    len: usize,
    focused: Option<usize>,
}

impl FocusRing {
    /// A ring of `len` slots with focus on the first.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            focused: (len > 0).then_some(0),
        }
    }

    /// A ring of `len` slots with nothing focused.
    pub fn unfocused(len: usize) -> Self {
        Self { len, focused: None }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the ring has no slots.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The focused slot.
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Move to the next slot, wrapping. From no focus, go to the first.
    pub fn focus_next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.focused = Some(self.focused.map_or(0, |i| (i + 1) % self.len));
    }

    /// Move to the previous slot, wrapping. From no focus, go to the last.
    pub fn focus_prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.focused = Some(self.focused.map_or(self.len - 1, |i| (i + self.len - 1) % self.len));
    }

    /// Focus `index`, clamped to the last slot.
    pub fn focus(&mut self, index: usize) {
        if self.len > 0 {
            self.focused = Some(index.min(self.len - 1));
        }
    }

    /// Drop focus entirely.
    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Whether `index` holds focus.
    pub fn is_focused(&self, index: usize) -> bool {
        self.focused == Some(index)
    }
}
