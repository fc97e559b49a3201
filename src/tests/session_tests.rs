//! Tests for the form editing session
//!
//! The session owns the block list, the staged pending input and the drag
//! state. These tests cover how create, reorder and drag gestures mutate it.

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::config::{EditorConfig, PinPolicy};
    use crate::core::{Block, BlockList, PendingBlock, RequiredFlag, ValidationError, Variant};
    use crate::runtime::FormSession;

    fn names(session: &FormSession) -> Vec<String> {
        session.blocks().iter().map(|b| b.name().to_string()).collect()
    }

    fn session_with(items: &[(&str, Variant)]) -> FormSession {
        let mut session = FormSession::new();
        for (name, variant) in items {
            session.add_block(&PendingBlock::new(*name, *variant)).unwrap();
        }
        session
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = FormSession::new();
        assert!(session.blocks().is_empty());
        assert!(!session.has_blocks());
        assert_eq!(session.pending(), &PendingBlock::default());
    }

    /// Successful create appends, raises the navigation flag and resets the
    /// staged input
    #[test]
    fn test_create_block_from_staged_input() {
        let mut session = FormSession::new();
        session.pending_mut().name = "Email".into();
        session.pending_mut().variant = Some(Variant::Email);
        session.pending_mut().required = RequiredFlag::Yes;

        let id = session.create_block().unwrap();
        assert_eq!(session.blocks().len(), 1);
        assert_eq!(session.blocks().get(0).map(Block::id), Some(id));
        assert!(session.has_blocks());
        assert_eq!(session.pending(), &PendingBlock::default());
    }

    /// Failed create leaves list and staged input alone
    #[test]
    fn test_failed_create_changes_nothing() {
        let mut session = FormSession::new();
        let staged = PendingBlock::new("Colour", Variant::Dropdown);
        session.set_pending(staged.clone());

        assert_eq!(session.create_block(), Err(ValidationError::EmptyDropdownOptions));
        assert!(session.blocks().is_empty());
        assert!(!session.has_blocks());
        assert_eq!(session.pending(), &staged);

        session.pending_mut().add_option("Red");
        assert!(session.create_block().is_ok());
        assert_eq!(session.blocks().get(0).unwrap().options().len(), 1);
    }

    #[test]
    fn test_pending_kept_when_reset_disabled() {
        let config = EditorConfig::new().with_reset_pending_on_create(false);
        let mut session = FormSession::with_config(config);
        session.set_pending(PendingBlock::new("Phone", Variant::Number));
        session.create_block().unwrap();
        assert_eq!(session.pending().name, "Phone");
    }

    #[test]
    fn test_resize_choices_through_session() {
        let mut session = FormSession::new();
        session.set_pending(PendingBlock::new("Pick", Variant::CheckboxGroup));
        assert_eq!(session.resize_choices("3"), Ok(3));
        assert_eq!(session.pending().choice_labels, vec!["", "", ""]);
        assert_eq!(session.resize_choices("x"), Err(ValidationError::InvalidCount));
        assert_eq!(session.pending().choice_count, 3);
    }

    /// Only one button per form
    #[test]
    fn test_second_button_rejected() {
        let mut session = session_with(&[("Submit", Variant::Button)]);
        assert_eq!(
            session.add_block(&PendingBlock::new("Again", Variant::Button)),
            Err(ValidationError::DuplicateButton)
        );
        assert_eq!(session.blocks().len(), 1);
    }

    /// A title created after other blocks goes straight to the head
    #[test]
    fn test_title_pinned_on_create() {
        let session = session_with(&[
            ("Name", Variant::Text),
            ("Survey", Variant::Title),
            ("Submit", Variant::Button),
        ]);
        assert_eq!(names(&session), vec!["Survey", "Name", "Submit"]);
    }

    #[test]
    fn test_direct_reorder() {
        let mut session = session_with(&[
            ("A", Variant::Text),
            ("B", Variant::Text),
            ("C", Variant::Text),
        ]);
        assert!(session.reorder(2, 0));
        assert_eq!(names(&session), vec!["C", "A", "B"]);
        assert!(!session.reorder(1, 1));
    }

    /// Hover events reorder continuously; release keeps the last order
    #[test]
    fn test_drag_gesture() {
        let mut session = session_with(&[
            ("A", Variant::Text),
            ("B", Variant::Text),
            ("C", Variant::Text),
            ("D", Variant::Text),
        ]);
        assert!(session.begin_drag(0));
        assert!(session.hover_drag(1));
        assert_eq!(names(&session), vec!["B", "A", "C", "D"]);
        assert!(session.hover_drag(2));
        assert_eq!(names(&session), vec!["B", "C", "A", "D"]);
        assert!(!session.hover_drag(2));
        assert!(session.hover_drag(3));
        assert_eq!(names(&session), vec!["B", "C", "D", "A"]);

        let outcome = session.end_drag().unwrap();
        assert_eq!((outcome.origin, outcome.index, outcome.moved), (0, 3, true));
        assert!(!session.is_dragging());
        assert!(!session.hover_drag(0));
    }

    /// Cancelling before any hover leaves the list untouched
    #[test]
    fn test_cancelled_drag() {
        let mut session = session_with(&[("A", Variant::Text), ("B", Variant::Text)]);
        let before = session.blocks().ids();
        session.begin_drag(1);
        let outcome = session.cancel_drag().unwrap();
        assert!(!outcome.moved);
        assert_eq!(session.blocks().ids(), before);
    }

    #[test]
    fn test_dragging_onto_title_slot() {
        let mut session = session_with(&[
            ("Survey", Variant::Title),
            ("A", Variant::Text),
            ("B", Variant::Text),
        ]);
        session.begin_drag(2);
        assert!(!session.hover_drag(0));
        assert!(session.hover_drag(1));
        assert_eq!(names(&session), vec!["Survey", "B", "A"]);
        session.end_drag();
    }

    /// A block created mid-drag shifts the list; the gesture still moves
    /// the grabbed block
    #[test]
    fn test_block_added_during_drag() {
        let mut session = session_with(&[
            ("A", Variant::Text),
            ("B", Variant::Text),
            ("C", Variant::Text),
        ]);
        assert!(session.begin_drag(1));
        session.add_block(&PendingBlock::new("T", Variant::Title)).unwrap();
        assert_eq!(names(&session), vec!["T", "A", "B", "C"]);

        assert!(session.hover_drag(3));
        assert_eq!(names(&session), vec!["T", "A", "C", "B"]);
        let outcome = session.end_drag().unwrap();
        assert_eq!((outcome.origin, outcome.index, outcome.moved), (1, 3, true));
    }

    /// A direct reorder mid-drag is followed by the gesture
    #[test]
    fn test_reorder_during_drag() {
        let mut session = session_with(&[
            ("A", Variant::Text),
            ("B", Variant::Text),
            ("C", Variant::Text),
        ]);
        assert!(session.begin_drag(0));
        assert!(session.reorder(2, 0));
        assert_eq!(names(&session), vec!["C", "A", "B"]);

        // A now sits at 1, so hovering 1 is its own slot.
        assert!(!session.hover_drag(1));
        assert!(session.hover_drag(2));
        assert_eq!(names(&session), vec!["C", "B", "A"]);

        let outcome = session.cancel_drag().unwrap();
        assert_eq!(outcome.index, 2);
    }

    /// Release without a later hover still reports where the block ended up
    #[test]
    fn test_release_after_shift_reports_current_index() {
        let mut session = session_with(&[("A", Variant::Text), ("B", Variant::Text)]);
        session.begin_drag(0);
        session.add_block(&PendingBlock::new("T", Variant::Title)).unwrap();
        let outcome = session.end_drag().unwrap();
        assert_eq!((outcome.index, outcome.moved), (1, false));
    }

    #[test]
    fn test_dragged_only_policy_lets_title_move() {
        let config = EditorConfig::new().with_pin_policy(PinPolicy::DraggedOnly);
        let mut session = FormSession::with_config(config);
        session.add_block(&PendingBlock::new("Survey", Variant::Title)).unwrap();
        session.add_block(&PendingBlock::new("A", Variant::Text)).unwrap();

        assert!(session.reorder(1, 0));
        assert_eq!(names(&session), vec!["A", "Survey"]);
    }

    /// Observers see every change, in order
    #[test]
    fn test_observer_notified() {
        let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut session = FormSession::new();
        session.subscribe(move |blocks: &BlockList| sink.borrow_mut().push(blocks.len()));

        session.add_block(&PendingBlock::new("A", Variant::Text)).unwrap();
        session.add_block(&PendingBlock::new("B", Variant::Text)).unwrap();
        let _ = session.add_block(&PendingBlock::new("", Variant::Text));
        session.reorder(0, 1);
        session.reorder(0, 0);
        session.clear();

        assert_eq!(*seen.borrow(), vec![1, 2, 2, 0]);
    }

    #[test]
    fn test_clear_resets_session() {
        let mut session = session_with(&[("A", Variant::Text)]);
        session.begin_drag(0);
        session.clear();
        assert!(session.blocks().is_empty());
        assert!(!session.has_blocks());
        assert!(!session.is_dragging());
    }
}
