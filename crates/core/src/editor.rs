//! Admin form state machine.
//!
//! ```text
//! Idle -> Adding      -> (Idle | Adding)
//! Idle -> Editing(id) -> (Idle | Editing(id))
//! ```
//!
//! Only save (on success) and cancel leave `Adding`/`Editing`; a failed
//! save keeps the current state so the draft can be corrected.

use crate::types::DbId;

/// Which form, if any, is open for an entity collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Idle,
    Adding,
    Editing(DbId),
}

impl EditorState {
    /// Open the "new item" form. Replaces any edit in progress.
    pub fn begin_create(&mut self) {
        *self = Self::Adding;
    }

    /// Open the edit form for `id`. Replaces any add in progress.
    pub fn begin_edit(&mut self, id: DbId) {
        *self = Self::Editing(id);
    }

    /// Close the form (cancel or successful save).
    pub fn close(&mut self) {
        *self = Self::Idle;
    }

    /// Whether a form is visible.
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// The row being edited, if the form targets an existing row.
    pub fn edit_target(&self) -> Option<DbId> {
        match self {
            Self::Editing(id) => Some(*id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let state = EditorState::default();
        assert_eq!(state, EditorState::Idle);
        assert!(!state.is_open());
        assert_eq!(state.edit_target(), None);
    }

    #[test]
    fn adding_and_editing_are_exclusive() {
        let mut state = EditorState::default();
        state.begin_create();
        assert_eq!(state, EditorState::Adding);

        state.begin_edit(7);
        assert_eq!(state, EditorState::Editing(7));
        assert_eq!(state.edit_target(), Some(7));

        state.begin_create();
        assert_eq!(state.edit_target(), None);
    }

    #[test]
    fn close_returns_to_idle() {
        let mut state = EditorState::Editing(3);
        state.close();
        assert!(!state.is_open());
    }
}
