use super::BudgetState;

/// Last-in-first-out stack of snapshots that refuses consecutive duplicates.
#[derive(Debug, Clone, Default)]
pub struct UndoStack {
    entries: Vec<BudgetState>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes `state` unless it equals the current top. Returns whether the
    /// stack grew.
    pub fn push_unique(&mut self, state: BudgetState) -> bool {
        if self.entries.last() == Some(&state) {
            return false;
        }
        self.entries.push(state);
        true
    }

    pub fn peek(&self) -> Option<&BudgetState> {
        self.entries.last()
    }

    pub fn pop(&mut self) -> Option<BudgetState> {
        self.entries.pop()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_duplicates_are_refused() {
        let mut stack = UndoStack::new();
        assert!(stack.push_unique(BudgetState::new(&[1.0], &[2.0])));
        assert!(!stack.push_unique(BudgetState::new(&[1.0], &[2.0])));
        assert!(stack.push_unique(BudgetState::new(&[1.5], &[2.0])));
        assert!(stack.push_unique(BudgetState::new(&[1.0], &[2.0])));
        assert_eq!(stack.len(), 3);
    }

    #[test]
    fn nan_snapshots_always_push() {
        let mut stack = UndoStack::new();
        assert!(stack.push_unique(BudgetState::new(&[f64::NAN], &[])));
        assert!(stack.push_unique(BudgetState::new(&[f64::NAN], &[])));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn pops_in_reverse_order() {
        let mut stack = UndoStack::new();
        stack.push_unique(BudgetState::new(&[1.0], &[]));
        stack.push_unique(BudgetState::new(&[2.0], &[]));
        assert_eq!(stack.pop().unwrap().income_values(), vec![2.0]);
        assert_eq!(stack.peek().unwrap().income_values(), vec![1.0]);
        assert_eq!(stack.pop().unwrap().income_values(), vec![1.0]);
        assert!(stack.pop().is_none());
        assert!(stack.is_empty());
    }
}
