//! Focus and fill tracking for a fixed row of single-character cells.
//!
//! [`CodeCells`] holds no rendering state. Every operation reports what the
//! caller should do with keyboard focus as a [`FocusIntent`]; the widget that
//! owns the visible cells executes it.

/// A request for the owner of the visible cells to move keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusIntent {
    /// Give focus to the cell at this index.
    Focus(usize),
    /// Remove focus from every cell.
    Blur,
}

/// Result of writing a value into a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Editing continues; focus should follow the intent.
    Advanced(FocusIntent),
    /// The last cell was written. Carries the joined code.
    Fulfilled(String),
}

/// Result of a cell receiving focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focused {
    /// The cell became active and everything from it onward was cleared.
    Accepted,
    /// An earlier cell is still empty; focus belongs there instead.
    Redirect(usize),
}

/// The per-cell values and the active cell of a confirmation-code input.
///
/// The active index lives in `0..=len()`. `len()` means every cell has been
/// written and no cell is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeCells {
    cells: Vec<Option<char>>,
    active: usize,
}

impl CodeCells {
    /// Create `len` empty cells with the first one active.
    ///
    /// A length of zero is raised to one.
    pub fn new(len: usize) -> Self {
        Self {
            cells: vec![None; len.max(1)],
            active: 0,
        }
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a code has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Index of the active cell, or `len()` once the code is complete.
    pub fn active(&self) -> usize {
        self.active
    }

    /// The active cell, if any.
    pub fn active_cell(&self) -> Option<usize> {
        (self.active < self.cells.len()).then_some(self.active)
    }

    /// Whether the last cell has been written.
    pub fn is_complete(&self) -> bool {
        self.active == self.cells.len()
    }

    /// Value of a single cell.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn cell(&self, index: usize) -> Option<char> {
        self.cells[index]
    }

    /// All cell values in order.
    pub fn cells(&self) -> &[Option<char>] {
        &self.cells
    }

    /// Index of the first unfilled cell.
    pub fn first_empty(&self) -> Option<usize> {
        self.cells.iter().position(Option::is_none)
    }

    /// The filled cells joined in order.
    pub fn code(&self) -> String {
        self.cells.iter().flatten().collect()
    }

    /// Write `value` into `index` and move on.
    ///
    /// `None` stands for an emptied cell and follows the same advance rules.
    /// Writing the last cell completes the code: the active index becomes
    /// `len()` and the joined code is returned.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn enter(&mut self, value: Option<char>, index: usize) -> Entry {
        self.cells[index] = value;

        if index + 1 == self.cells.len() {
            self.active = self.cells.len();
            let code = self.code();
            tracing::debug!(len = self.cells.len(), "code fulfilled");
            Entry::Fulfilled(code)
        } else {
            self.active = index + 1;
            tracing::trace!(active = self.active, "advanced");
            Entry::Advanced(FocusIntent::Focus(self.active))
        }
    }

    /// Step back one cell. Does nothing at the first cell.
    ///
    /// The value of the cell left behind is not touched; clearing it is up to
    /// whoever executes the returned focus.
    pub fn delete(&mut self) -> Option<FocusIntent> {
        if self.active == 0 {
            return None;
        }
        self.active -= 1;
        tracing::trace!(active = self.active, "retreated");
        Some(FocusIntent::Focus(self.active))
    }

    /// React to `index` receiving focus.
    ///
    /// Focus never lands past the first gap: if an earlier cell is empty the
    /// call is redirected there and nothing changes. Otherwise `index` becomes
    /// active and it and every later cell are emptied.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn focus(&mut self, index: usize) -> Focused {
        assert!(index < self.cells.len(), "cell {index} out of range");
        if let Some(gap) = self.first_empty().filter(|&gap| gap < index) {
            tracing::trace!(requested = index, gap, "focus redirected");
            return Focused::Redirect(gap);
        }
        self.cells[index..].fill(None);
        self.active = index;
        Focused::Accepted
    }

    /// Empty every cell and return to the first one.
    pub fn clear(&mut self) -> FocusIntent {
        self.cells.fill(None);
        self.active = 0;
        FocusIntent::Focus(0)
    }
}
