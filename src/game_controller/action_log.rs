//! Append-only history of every action applied in the current game.

use crate::game_controller::actions::Action;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionLog {
    actions: Vec<Action>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend_from_batch(&mut self, batch: &[Action]) {
        self.actions.extend_from_slice(batch);
    }

    /// Most recent action.
    pub fn last(&self) -> Option<&Action> {
        self.actions.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }

    pub fn as_slice(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.actions.clear();
    }
}

impl<'a> IntoIterator for &'a ActionLog {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}
