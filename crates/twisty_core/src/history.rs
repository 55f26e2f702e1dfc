use crate::Move;

/// Undo/redo ledger of completed moves.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MoveHistory {
    /// Stack of moves to undo.
    undo_stack: Vec<Move>,
    /// Stack of moves to redo.
    redo_stack: Vec<Move>,
}
impl MoveHistory {
    /// Constructs an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a completed move.
    ///
    /// Clears the redo stack, since a new move invalidates any previously
    /// undone branch.
    pub fn push(&mut self, m: Move) {
        self.undo_stack.push(m);
        self.redo_stack.clear();
    }

    /// Pops the most recent move and returns its inverse, or `None` if there
    /// is nothing to undo.
    pub fn undo(&mut self) -> Option<Move> {
        let m = self.undo_stack.pop()?;
        self.redo_stack.push(m);
        Some(m.rev())
    }

    /// Pops the most recently undone move and returns it unchanged, or `None`
    /// if there is nothing to redo.
    pub fn redo(&mut self) -> Option<Move> {
        let m = self.redo_stack.pop()?;
        self.undo_stack.push(m);
        Some(m)
    }

    /// Empties both stacks.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Returns whether there is a move available to undo.
    pub fn has_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }
    /// Returns whether there is a move available to redo.
    pub fn has_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Returns the number of moves that can be undone.
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }
    /// Returns the number of moves that can be redone.
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }
}
