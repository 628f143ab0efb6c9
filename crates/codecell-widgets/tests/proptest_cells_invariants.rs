//! Property-based invariant tests for the code-cell state machine.
//!
//! 1. A fresh row is empty with the first cell active.
//! 2. Filling cells before the last advances by one and never completes.
//! 3. Filling the last cell completes once with the joined code.
//! 4. `clear` restores the fresh state after any operations.
//! 5. Delete retreats by one and is a no-op at the first cell.
//! 6. Focus past a gap is redirected to the first gap.
//! 7. Focus behind the fill point truncates and resumes there.
//! 8. The active index never passes the first gap.

use codecell_widgets::{CodeCells, Entry, FocusIntent, Focused};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Enter(char),
    Delete,
    Focus(usize),
    Clear,
}

fn code_char() -> impl Strategy<Value = char> {
    prop::char::ranges(vec!['0'..='9', 'A'..='Z', 'a'..='z'].into())
}

fn op_strategy(len: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => code_char().prop_map(Op::Enter),
        2 => Just(Op::Delete),
        2 => (0..len).prop_map(Op::Focus),
        1 => Just(Op::Clear),
    ]
}

fn len_and_ops() -> impl Strategy<Value = (usize, Vec<Op>)> {
    (1usize..=8).prop_flat_map(|len| (Just(len), prop::collection::vec(op_strategy(len), 0..40)))
}

/// Carry out `intent` the way the widget does: focusing a cell and following
/// any redirect.
fn execute(cells: &mut CodeCells, intent: FocusIntent) {
    if let FocusIntent::Focus(index) = intent {
        focus_following(cells, index);
    }
}

fn focus_following(cells: &mut CodeCells, index: usize) {
    if let Focused::Redirect(gap) = cells.focus(index) {
        cells.focus(gap);
    }
}

/// Apply `op`, returning the code if it completed the row.
fn apply(cells: &mut CodeCells, op: &Op) -> Option<String> {
    match *op {
        Op::Enter(value) => {
            let index = cells.active_cell()?;
            match cells.enter(Some(value), index) {
                Entry::Advanced(intent) => {
                    execute(cells, intent);
                    None
                }
                Entry::Fulfilled(code) => Some(code),
            }
        }
        Op::Delete => {
            if let Some(intent) = cells.delete() {
                execute(cells, intent);
            }
            None
        }
        Op::Focus(index) => {
            focus_following(cells, index);
            None
        }
        Op::Clear => {
            let intent = cells.clear();
            execute(cells, intent);
            None
        }
    }
}

fn filled(len: usize, text: &[char]) -> CodeCells {
    let mut cells = CodeCells::new(len);
    for (i, &c) in text.iter().enumerate() {
        cells.enter(Some(c), i);
    }
    cells
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Fresh state
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fresh_row_is_empty(len in 1usize..=32) {
        let cells = CodeCells::new(len);
        prop_assert_eq!(cells.len(), len);
        prop_assert_eq!(cells.active(), 0);
        prop_assert!(cells.cells().iter().all(Option::is_none));
        prop_assert!(!cells.is_complete());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Sequential advance before the last cell
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn sequential_entry_advances_by_one(chars in prop::collection::vec(code_char(), 2..=12)) {
        let len = chars.len();
        let mut cells = CodeCells::new(len);
        for (i, &c) in chars[..len - 1].iter().enumerate() {
            let entry = cells.enter(Some(c), i);
            prop_assert_eq!(entry, Entry::Advanced(FocusIntent::Focus(i + 1)));
            prop_assert_eq!(cells.active(), i + 1);
        }
        prop_assert!(!cells.is_complete());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Completion
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn last_cell_completes_with_joined_code(chars in prop::collection::vec(code_char(), 1..=12)) {
        let len = chars.len();
        let mut cells = filled(len, &chars[..len - 1]);
        let expected: String = chars.iter().collect();

        prop_assert_eq!(cells.enter(Some(chars[len - 1]), len - 1), Entry::Fulfilled(expected));
        prop_assert!(cells.is_complete());
        prop_assert_eq!(cells.active_cell(), None);
    }

    #[test]
    fn completion_reported_once_per_fill((len, ops) in len_and_ops()) {
        let mut cells = CodeCells::new(len);
        for op in &ops {
            let was_complete = cells.is_complete();
            let code = apply(&mut cells, op);
            if code.is_some() {
                prop_assert!(!was_complete, "completed twice without reopening");
                prop_assert!(cells.is_complete());
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Clear
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn clear_restores_fresh_state((len, ops) in len_and_ops()) {
        let mut cells = CodeCells::new(len);
        for op in &ops {
            apply(&mut cells, op);
        }
        prop_assert_eq!(cells.clear(), FocusIntent::Focus(0));
        prop_assert_eq!(cells, CodeCells::new(len));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Delete
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn delete_retreats_by_one(len in 1usize..=10, typed in 0usize..=10) {
        let typed = typed.min(len);
        let chars = vec!['7'; typed];
        let mut cells = filled(len, &chars);
        let before = cells.active();

        let intent = cells.delete();
        if before == 0 {
            prop_assert_eq!(intent, None);
            prop_assert_eq!(cells.active(), 0);
        } else {
            prop_assert_eq!(intent, Some(FocusIntent::Focus(before - 1)));
            prop_assert_eq!(cells.active(), before - 1);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Gap redirect
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn focus_past_gap_redirects((len, typed, target) in (2usize..=10)
        .prop_flat_map(|len| (Just(len), 0..len - 1))
        .prop_flat_map(|(len, typed)| (Just(len), Just(typed), typed + 1..len)))
    {
        let chars = vec!['x'; typed];
        let mut cells = filled(len, &chars);
        let before = cells.clone();

        prop_assert_eq!(cells.focus(target), Focused::Redirect(typed));
        prop_assert_eq!(&cells, &before);

        focus_following(&mut cells, target);
        prop_assert_eq!(cells.active(), typed);
        prop_assert_eq!(cells.cells(), before.cells());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Truncation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn focus_behind_fill_point_truncates((chars, target) in prop::collection::vec(code_char(), 1..=10)
        .prop_flat_map(|chars| { let len = chars.len(); (Just(chars), 0..len) }))
    {
        let len = chars.len();
        let mut cells = filled(len, &chars);

        prop_assert_eq!(cells.focus(target), Focused::Accepted);
        prop_assert_eq!(cells.active(), target);
        for (i, &c) in chars.iter().enumerate() {
            let expected = (i < target).then_some(c);
            prop_assert_eq!(cells.cell(i), expected);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Active index never passes the first gap
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn active_never_passes_first_gap((len, ops) in len_and_ops()) {
        let mut cells = CodeCells::new(len);
        for op in &ops {
            apply(&mut cells, op);
            prop_assert!(cells.active() <= len);
            if let Some(gap) = cells.first_empty() {
                prop_assert!(
                    cells.active() <= gap + 1,
                    "active {} past gap {} after {:?}",
                    cells.active(), gap, op
                );
            }
        }
    }
}

// ── Worked examples ─────────────────────────────────────────────────────

#[test]
fn five_digits_complete_once() {
    let mut cells = CodeCells::new(5);
    let mut completed = Vec::new();
    for (i, c) in "12345".chars().enumerate() {
        if let Entry::Fulfilled(code) = cells.enter(Some(c), i) {
            completed.push(code);
        }
    }
    assert_eq!(completed, vec!["12345".to_string()]);
}

#[test]
fn focus_ahead_snaps_to_first_gap() {
    let mut cells = filled(5, &['1', '2']);
    focus_following(&mut cells, 4);
    assert_eq!(cells.active(), 2);
    assert_eq!(cells.code(), "12");
}
