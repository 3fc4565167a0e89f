//! Scroll-index controller.
//!
//! Owns the selected index and the requested viewport alignment for the
//! carousel, and derives the scroll instruction handed to the rendering
//! surface whenever either one changes.

/// Leading inset of the carousel, also applied to start-aligned scrolls
pub const SPACING: u16 = 2;

/// Where the selected item should land inside the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Item flush with the leading edge (plus the edge inset)
    #[default]
    Start,
    /// Item centered in the viewport
    Center,
    /// Item flush with the trailing edge
    End,
}

impl Alignment {
    /// All alignments in button order
    pub fn all() -> &'static [Alignment] {
        &[Alignment::Start, Alignment::Center, Alignment::End]
    }

    /// Fraction of the free viewport space placed before the item
    pub fn viewport_fraction(&self) -> f32 {
        match self {
            Alignment::Start => 0.0,
            Alignment::Center => 0.5,
            Alignment::End => 1.0,
        }
    }

    /// Extra inset, only the start edge gets one
    pub fn edge_offset(&self) -> u16 {
        match self {
            Alignment::Start => SPACING,
            Alignment::Center | Alignment::End => 0,
        }
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            Alignment::Start => "start",
            Alignment::Center => "center",
            Alignment::End => "end",
        }
    }
}

/// Declarative scroll target for the rendering surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollInstruction {
    pub target_index: usize,
    pub viewport_fraction: f32,
    pub edge_offset: u16,
    pub animated: bool,
}

/// Selected index plus alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub index: usize,
    pub alignment: Alignment,
}

impl SelectionState {
    /// Derive the scroll instruction for this state
    pub fn instruction(&self) -> ScrollInstruction {
        ScrollInstruction {
            target_index: self.index,
            viewport_fraction: self.alignment.viewport_fraction(),
            edge_offset: self.alignment.edge_offset(),
            animated: true,
        }
    }
}

/// Owner of the [`SelectionState`] for a fixed-length item sequence.
///
/// Every operation that changes state returns the instruction to issue.
/// Out-of-range selections return `None` and leave the state untouched.
#[derive(Debug, Clone)]
pub struct ScrollController {
    state: SelectionState,
    len: usize,
}

impl ScrollController {
    /// Create a controller for `len` items, starting at index 0 aligned to start
    pub fn new(len: usize) -> Self {
        Self {
            state: SelectionState::default(),
            len,
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn index(&self) -> usize {
        self.state.index
    }

    pub fn alignment(&self) -> Alignment {
        self.state.alignment
    }

    pub fn item_count(&self) -> usize {
        self.len
    }

    pub fn is_first(&self) -> bool {
        self.state.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.state.index + 1 >= self.len
    }

    /// Instruction for the current state
    pub fn instruction(&self) -> ScrollInstruction {
        self.state.instruction()
    }

    /// Select item `index`, ignoring anything outside `[0, len)`
    pub fn select_index(&mut self, index: isize) -> Option<ScrollInstruction> {
        let index = usize::try_from(index).ok().filter(|i| *i < self.len)?;
        self.state.index = index;
        Some(self.instruction())
    }

    /// Replace the alignment and re-scroll to the current index
    pub fn set_alignment(&mut self, alignment: Alignment) -> ScrollInstruction {
        self.state.alignment = alignment;
        self.instruction()
    }

    /// Move selection right, no-op on the last item
    pub fn next(&mut self) -> Option<ScrollInstruction> {
        self.select_index(self.state.index as isize + 1)
    }

    /// Move selection left, no-op on the first item
    pub fn previous(&mut self) -> Option<ScrollInstruction> {
        self.select_index(self.state.index as isize - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let controller = ScrollController::new(10);
        assert_eq!(controller.index(), 0);
        assert_eq!(controller.alignment(), Alignment::Start);
        assert!(controller.is_first());
        assert!(!controller.is_last());
    }

    #[test]
    fn test_select_valid_index() {
        let mut controller = ScrollController::new(10);
        for i in 0..10 {
            let instruction = controller.select_index(i as isize);
            assert_eq!(controller.index(), i);
            assert_eq!(instruction.map(|ins| ins.target_index), Some(i));
        }
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut controller = ScrollController::new(10);
        controller.select_index(4);

        assert_eq!(controller.select_index(-1), None);
        assert_eq!(controller.select_index(10), None);
        assert_eq!(controller.select_index(isize::MAX), None);
        assert_eq!(controller.select_index(isize::MIN), None);
        assert_eq!(controller.index(), 4);
    }

    #[test]
    fn test_boundaries() {
        let mut controller = ScrollController::new(10);
        assert_eq!(controller.previous(), None);
        assert_eq!(controller.index(), 0);

        controller.select_index(9);
        assert!(controller.is_last());
        assert_eq!(controller.next(), None);
        assert_eq!(controller.index(), 9);
    }

    #[test]
    fn test_next_walks_to_end() {
        let mut controller = ScrollController::new(10);
        for _ in 0..9 {
            assert!(controller.next().is_some());
        }
        assert_eq!(controller.index(), 9);

        assert!(controller.next().is_none());
        assert_eq!(controller.index(), 9);
    }

    #[test]
    fn test_alignment_instructions() {
        let mut controller = ScrollController::new(10);

        let start = controller.set_alignment(Alignment::Start);
        assert_eq!(start.viewport_fraction, 0.0);
        assert_eq!(start.edge_offset, SPACING);

        let center = controller.set_alignment(Alignment::Center);
        assert_eq!(center.viewport_fraction, 0.5);
        assert_eq!(center.edge_offset, 0);

        let end = controller.set_alignment(Alignment::End);
        assert_eq!(end.viewport_fraction, 1.0);
        assert_eq!(end.edge_offset, 0);
        assert!(end.animated);
    }

    #[test]
    fn test_alignment_rescrolls_current_index() {
        let mut controller = ScrollController::new(10);
        controller.select_index(6);
        let instruction = controller.set_alignment(Alignment::End);
        assert_eq!(instruction.target_index, 6);
        assert_eq!(controller.index(), 6);
    }

    #[test]
    fn test_repeated_alignment_is_idempotent() {
        let mut controller = ScrollController::new(10);
        controller.select_index(3);
        let first = controller.set_alignment(Alignment::Center);
        let second = controller.set_alignment(Alignment::Center);
        assert_eq!(first, second);
    }

    #[test]
    fn test_navigation_round_trip() {
        let mut controller = ScrollController::new(10);
        controller.select_index(5);
        controller.previous();
        controller.previous();
        controller.next();
        controller.next();
        assert_eq!(controller.index(), 5);
    }

    #[test]
    fn test_reselecting_current_index_emits() {
        let mut controller = ScrollController::new(10);
        controller.select_index(2);
        assert!(controller.select_index(2).is_some());
    }

    #[test]
    fn test_instruction_is_pure() {
        let state = SelectionState {
            index: 7,
            alignment: Alignment::Center,
        };
        assert_eq!(state.instruction(), state.instruction());
        assert_eq!(state.instruction().target_index, 7);
    }
}
