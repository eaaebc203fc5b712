/// Add/edit → review → confirm workflow for staged form data.
///
/// Candidate data is held in `Reviewing` until it is explicitly confirmed.
/// Transitions that do not apply to the current state leave it untouched
/// and return `None`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ReviewFlow<T> {
    #[default]
    Editing,
    Reviewing(T),
    Committed,
}

impl<T> ReviewFlow<T> {
    pub fn is_editing(&self) -> bool {
        matches!(self, ReviewFlow::Editing)
    }

    pub fn is_committed(&self) -> bool {
        matches!(self, ReviewFlow::Committed)
    }

    /// The payload under review, if any.
    pub fn pending(&self) -> Option<&T> {
        match self {
            ReviewFlow::Reviewing(payload) => Some(payload),
            _ => None,
        }
    }

    /// Stages a payload for review. Returns `false` if not editing.
    pub fn submit(&mut self, payload: T) -> bool {
        if self.is_editing() {
            *self = ReviewFlow::Reviewing(payload);
            true
        } else {
            false
        }
    }

    /// Returns to the form, handing back the staged payload to refill it.
    pub fn edit(&mut self) -> Option<T> {
        self.take_reviewing(ReviewFlow::Editing)
    }

    /// Commits the staged payload, handing it back to be merged.
    pub fn confirm(&mut self) -> Option<T> {
        self.take_reviewing(ReviewFlow::Committed)
    }

    /// Discards any staged payload.
    pub fn cancel(&mut self) {
        *self = ReviewFlow::Editing;
    }

    /// Starts a fresh round after a commit. Returns `false` if not committed.
    pub fn reset(&mut self) -> bool {
        if self.is_committed() {
            *self = ReviewFlow::Editing;
            true
        } else {
            false
        }
    }

    fn take_reviewing(&mut self, next: ReviewFlow<T>) -> Option<T> {
        if self.pending().is_none() {
            return None;
        }
        match std::mem::replace(self, next) {
            ReviewFlow::Reviewing(payload) => Some(payload),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_then_confirm() {
        let mut flow = ReviewFlow::default();
        assert!(flow.submit(7));
        assert_eq!(flow.pending(), Some(&7));
        assert_eq!(flow.confirm(), Some(7));
        assert!(flow.is_committed());
        assert!(flow.reset());
        assert!(flow.is_editing());
    }

    #[test]
    fn test_edit_returns_payload_to_form() {
        let mut flow = ReviewFlow::default();
        flow.submit("draft");
        assert_eq!(flow.edit(), Some("draft"));
        assert!(flow.is_editing());
    }

    #[test]
    fn test_invalid_transitions_are_ignored() {
        let mut flow: ReviewFlow<u8> = ReviewFlow::Editing;
        assert_eq!(flow.confirm(), None);
        assert_eq!(flow.edit(), None);
        assert!(!flow.reset());
        assert!(flow.is_editing());

        flow.submit(1);
        assert!(!flow.submit(2));
        assert_eq!(flow.pending(), Some(&1));
    }

    #[test]
    fn test_cancel_discards() {
        let mut flow = ReviewFlow::default();
        flow.submit(3);
        flow.cancel();
        assert_eq!(flow.pending(), None);
        assert!(flow.is_editing());
    }
}
