//! Horizontal carousel widget.
//!
//! This is the rendering surface for scroll instructions. It lays the items
//! out left to right, resolves an instruction into a column offset, and eases
//! toward that offset on every tick. It never reports back to the controller.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::controller::{ScrollInstruction, SPACING};
use crate::models::Item;
use crate::theme::{blend, colors};

/// Rounded box characters
const BORDER_TL: char = '╭';
const BORDER_TR: char = '╮';
const BORDER_BL: char = '╰';
const BORDER_BR: char = '╯';
const BORDER_H: char = '─';
const BORDER_V: char = '│';

/// Rows taken by one item box
pub const ITEM_HEIGHT: u16 = 3;

/// Fraction of the remaining distance covered per frame
const SCROLL_EASE: f32 = 0.25;
/// Emphasis change per frame, about one second at 30 FPS
const FADE_STEP: f32 = 1.0 / 30.0;
/// Snap when closer than this many columns
const SNAP_DISTANCE: f32 = 0.5;

/// Scroll position and per-item emphasis of the carousel
#[derive(Debug, Clone)]
pub struct CarouselState {
    /// Box width of every item, in columns
    widths: Vec<u32>,
    /// Left edge of every item in content coordinates
    starts: Vec<u32>,
    /// Total content width including the leading inset
    content_width: u32,
    /// Width of the visible area
    viewport_width: u16,
    /// Current scroll offset in columns
    offset: f32,
    /// Offset the surface is moving toward
    target: f32,
    /// Last instruction received, re-resolved on resize
    last_instruction: Option<ScrollInstruction>,
    /// Index drawn as active
    active: usize,
    /// 0.0 inactive .. 1.0 active, per item
    emphasis: Vec<f32>,
}

impl CarouselState {
    /// Lay out `items`; the first item starts out active
    pub fn new(items: &[Item]) -> Self {
        let widths: Vec<u32> = items.iter().map(|item| item_width(&item.label)).collect();

        let mut starts = Vec::with_capacity(widths.len());
        let mut x = SPACING as u32;
        for width in &widths {
            starts.push(x);
            x = x.saturating_add(*width).saturating_add(SPACING as u32);
        }

        let mut emphasis = vec![0.0; widths.len()];
        if let Some(first) = emphasis.first_mut() {
            *first = 1.0;
        }

        Self {
            widths,
            starts,
            content_width: x,
            viewport_width: 0,
            offset: 0.0,
            target: 0.0,
            last_instruction: None,
            active: 0,
            emphasis,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn content_width(&self) -> u32 {
        self.content_width
    }

    pub fn item_start(&self, index: usize) -> Option<u32> {
        self.starts.get(index).copied()
    }

    pub fn item_width(&self, index: usize) -> Option<u32> {
        self.widths.get(index).copied()
    }

    pub fn emphasis(&self, index: usize) -> f32 {
        self.emphasis.get(index).copied().unwrap_or(0.0)
    }

    pub fn is_animating(&self) -> bool {
        self.offset != self.target || self.emphasis.iter().enumerate().any(|(i, e)| {
            let goal = if i == self.active { 1.0 } else { 0.0 };
            *e != goal
        })
    }

    fn max_offset(&self) -> f32 {
        self.content_width.saturating_sub(self.viewport_width as u32) as f32
    }

    /// Column offset that places the instruction's item as requested
    pub fn resolve(&self, instruction: &ScrollInstruction) -> f32 {
        let (Some(start), Some(width)) = (
            self.item_start(instruction.target_index),
            self.item_width(instruction.target_index),
        ) else {
            return self.target;
        };

        let free = self.viewport_width as f32 - width as f32;
        let offset = start as f32
            - instruction.edge_offset as f32
            - instruction.viewport_fraction * free;
        offset.clamp(0.0, self.max_offset())
    }

    /// Apply an instruction, animating if it asks for it
    pub fn scroll_to(&mut self, instruction: ScrollInstruction) {
        self.last_instruction = Some(instruction);
        if instruction.target_index < self.widths.len() {
            self.active = instruction.target_index;
        }
        self.target = self.resolve(&instruction);
        if !instruction.animated {
            self.offset = self.target;
        }
    }

    /// Apply an instruction without animation
    pub fn jump_to(&mut self, instruction: ScrollInstruction) {
        self.scroll_to(ScrollInstruction {
            animated: false,
            ..instruction
        });
        for (i, e) in self.emphasis.iter_mut().enumerate() {
            *e = if i == self.active { 1.0 } else { 0.0 };
        }
    }

    /// Update the visible width, keeping the last target in place
    pub fn set_viewport_width(&mut self, width: u16) {
        if self.viewport_width == width {
            return;
        }
        self.viewport_width = width;
        if let Some(instruction) = self.last_instruction {
            self.target = self.resolve(&instruction);
        } else {
            self.target = self.target.clamp(0.0, self.max_offset());
        }
        self.offset = self.offset.clamp(0.0, self.max_offset());
    }

    /// Advance scroll and emphasis animations by one frame
    pub fn tick(&mut self) {
        let distance = self.target - self.offset;
        if distance.abs() < SNAP_DISTANCE {
            self.offset = self.target;
        } else {
            self.offset += distance * SCROLL_EASE;
        }

        let active = self.active;
        for (i, e) in self.emphasis.iter_mut().enumerate() {
            *e = if i == active {
                (*e + FADE_STEP).min(1.0)
            } else {
                (*e - FADE_STEP).max(0.0)
            };
        }
    }

    /// Item under `column`, measured from the viewport's left edge
    pub fn item_at(&self, column: u16) -> Option<usize> {
        if column >= self.viewport_width {
            return None;
        }
        let x = column as f32 + self.offset.round();
        self.starts
            .iter()
            .zip(&self.widths)
            .position(|(start, width)| {
                let start = *start as f32;
                x >= start && x < start + *width as f32
            })
    }
}

/// Box width for a label: text, padding on both sides, two border cells
pub fn item_width(label: &str) -> u32 {
    let text = u32::try_from(label.chars().count()).unwrap_or(u32::MAX);
    text.saturating_add(SPACING as u32 * 2).saturating_add(2)
}

/// Renders the carousel items at the state's current offset
pub struct CarouselWidget<'a> {
    items: &'a [Item],
    state: &'a CarouselState,
}

impl<'a> CarouselWidget<'a> {
    pub fn new(items: &'a [Item], state: &'a CarouselState) -> Self {
        Self { items, state }
    }

    fn put(area: Rect, buf: &mut Buffer, x: i64, y: u16, ch: char, style: Style) {
        if x < area.left() as i64 || x >= area.right() as i64 || y >= area.bottom() {
            return;
        }
        let cell = &mut buf[(x as u16, y)];
        cell.set_char(ch);
        cell.set_style(style);
    }

    fn render_item(&self, area: Rect, buf: &mut Buffer, index: usize, item: &Item) {
        let (Some(start), Some(width)) = (self.state.item_start(index), self.state.item_width(index))
        else {
            return;
        };

        let left = area.x as i64 + start as i64 - self.state.offset().round() as i64;
        let right = left + width as i64 - 1;
        if right < area.left() as i64 || left >= area.right() as i64 {
            return;
        }

        let emphasis = self.state.emphasis(index);
        let fill = blend(colors::ACCENT_DIM, colors::ACCENT, emphasis);
        let text_fg = blend(colors::FG_DIM, colors::INK, emphasis);
        let border = Style::default().fg(colors::ACCENT).bg(colors::BG_DARK);
        let body = Style::default().bg(fill);
        let mut text = Style::default().fg(text_fg).bg(fill);
        if index == self.state.active() {
            text = text.add_modifier(Modifier::BOLD);
        }

        let top = area.y;
        let mid = area.y + 1;
        let bottom = area.y + 2;

        Self::put(area, buf, left, top, BORDER_TL, border);
        Self::put(area, buf, right, top, BORDER_TR, border);
        Self::put(area, buf, left, bottom, BORDER_BL, border);
        Self::put(area, buf, right, bottom, BORDER_BR, border);
        Self::put(area, buf, left, mid, BORDER_V, border);
        Self::put(area, buf, right, mid, BORDER_V, border);
        for x in (left + 1)..right {
            Self::put(area, buf, x, top, BORDER_H, border);
            Self::put(area, buf, x, bottom, BORDER_H, border);
            Self::put(area, buf, x, mid, ' ', body);
        }

        let text_left = left + 1 + SPACING as i64;
        for (i, ch) in item.label.chars().enumerate() {
            Self::put(area, buf, text_left + i as i64, mid, ch, text);
        }
    }
}

impl Widget for CarouselWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < ITEM_HEIGHT || area.width == 0 {
            return;
        }

        for (index, item) in self.items.iter().enumerate() {
            self.render_item(area, buf, index, item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{Alignment, SelectionState};

    fn items(labels: &[&str]) -> Vec<Item> {
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| Item {
                id: format!("id-{}", i),
                label: label.to_string(),
            })
            .collect()
    }

    fn instruction(index: usize, alignment: Alignment) -> ScrollInstruction {
        SelectionState { index, alignment }.instruction()
    }

    /// Ten items, each 10 columns wide (label 4 + padding 4 + border 2)
    fn ten_wide(viewport: u16) -> CarouselState {
        let mut state = CarouselState::new(&items(&["abcd"; 10]));
        state.set_viewport_width(viewport);
        state
    }

    #[test]
    fn test_layout() {
        let state = ten_wide(30);
        assert_eq!(state.item_width(0), Some(10));
        let spacing = SPACING as u32;
        assert_eq!(state.item_start(0), Some(spacing));
        assert_eq!(state.item_start(1), Some(spacing + 10 + spacing));
        assert_eq!(state.content_width(), spacing + 10 * (10 + spacing));
        assert_eq!(state.item_start(10), None);
    }

    #[test]
    fn test_resolve_start_applies_edge_offset() {
        let state = ten_wide(30);
        // item 3 starts at 2 + 3 * 12 = 38
        assert_eq!(state.resolve(&instruction(3, Alignment::Start)), 36.0);
    }

    #[test]
    fn test_resolve_center_and_end() {
        let state = ten_wide(30);
        // free space is 30 - 10 = 20
        assert_eq!(state.resolve(&instruction(3, Alignment::Center)), 38.0 - 10.0);
        assert_eq!(state.resolve(&instruction(3, Alignment::End)), 38.0 - 20.0);
    }

    #[test]
    fn test_resolve_clamps() {
        let state = ten_wide(30);
        assert_eq!(state.resolve(&instruction(0, Alignment::End)), 0.0);
        assert_eq!(state.resolve(&instruction(0, Alignment::Start)), 0.0);

        let max = (state.content_width() - 30) as f32;
        assert_eq!(state.resolve(&instruction(9, Alignment::Start)), max);
    }

    #[test]
    fn test_resolve_wide_viewport() {
        let state = ten_wide(500);
        for alignment in Alignment::all() {
            assert_eq!(state.resolve(&instruction(5, *alignment)), 0.0);
        }
    }

    #[test]
    fn test_animated_scroll_converges() {
        let mut state = ten_wide(30);
        state.scroll_to(instruction(4, Alignment::Start));
        assert_eq!(state.offset(), 0.0);
        assert_eq!(state.target(), 48.0);
        assert!(state.is_animating());

        for _ in 0..60 {
            state.tick();
        }
        assert_eq!(state.offset(), 48.0);
        assert!(!state.is_animating());
    }

    #[test]
    fn test_jump_is_immediate() {
        let mut state = ten_wide(30);
        state.jump_to(instruction(4, Alignment::Center));
        assert_eq!(state.offset(), state.target());
        assert_eq!(state.active(), 4);
        assert_eq!(state.emphasis(4), 1.0);
        assert_eq!(state.emphasis(0), 0.0);
    }

    #[test]
    fn test_emphasis_fades() {
        let mut state = ten_wide(30);
        state.scroll_to(instruction(1, Alignment::Start));
        state.tick();
        assert!(state.emphasis(1) > 0.0 && state.emphasis(1) < 1.0);
        assert!(state.emphasis(0) < 1.0);

        for _ in 0..40 {
            state.tick();
        }
        assert_eq!(state.emphasis(1), 1.0);
        assert_eq!(state.emphasis(0), 0.0);
    }

    #[test]
    fn test_resize_reresolves_target() {
        let mut state = ten_wide(30);
        state.jump_to(instruction(3, Alignment::End));
        assert_eq!(state.target(), 18.0);

        state.set_viewport_width(20);
        assert_eq!(state.target(), 28.0);
    }

    #[test]
    fn test_item_at() {
        let mut state = ten_wide(30);
        assert_eq!(state.item_at(0), None);
        assert_eq!(state.item_at(2), Some(0));
        assert_eq!(state.item_at(11), Some(0));
        assert_eq!(state.item_at(12), None);
        assert_eq!(state.item_at(14), Some(1));
        assert_eq!(state.item_at(30), None);

        state.jump_to(instruction(3, Alignment::Start));
        assert_eq!(state.item_at(2), Some(3));
    }

    #[test]
    fn test_long_carousel_keeps_distinct_positions() {
        let list = crate::models::generate_items(5000, 5000);
        let mut state = CarouselState::new(&list);
        state.set_viewport_width(30);

        let starts: Vec<u32> = (0..list.len()).filter_map(|i| state.item_start(i)).collect();
        assert_eq!(starts.len(), 5000);
        assert!(starts.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(state.content_width() > u16::MAX as u32);

        assert_ne!(
            state.resolve(&instruction(3000, Alignment::Start)),
            state.resolve(&instruction(4999, Alignment::Start))
        );

        state.jump_to(instruction(3000, Alignment::Start));
        assert_eq!(state.offset(), (starts[3000] - SPACING as u32) as f32);
        assert_eq!(state.item_at(SPACING), Some(3000));
    }

    #[test]
    fn test_render_clips_to_area() {
        let list = items(&["abcd"; 10]);
        let mut state = CarouselState::new(&list);
        state.set_viewport_width(20);
        state.jump_to(instruction(3, Alignment::Start));

        let area = Rect::new(0, 0, 20, ITEM_HEIGHT);
        let mut buf = Buffer::empty(area);
        CarouselWidget::new(&list, &state).render(area, &mut buf);

        assert_eq!(buf[(2, 0)].symbol(), "╭");
        assert_eq!(buf[(5, 1)].symbol(), "a");
        assert_eq!(buf[(11, 2)].symbol(), "╯");
    }
}
