//! Application state and event handling.
//!
//! This module implements the Elm Architecture pattern for state management.
//! Key and mouse events are translated into the four carousel input events,
//! the controller decides whether state changes, and every emitted scroll
//! instruction is forwarded once to the carousel surface.

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::carousel::CarouselState;
use crate::controller::{Alignment, ScrollController, ScrollInstruction};
use crate::models::Item;
use crate::ui::{self, Button};

/// Log entry for the message area
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
}

impl LogEntry {
    fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            message: message.into(),
            level,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Success, message)
    }
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,

    /// Generated items, fixed for the lifetime of the app
    pub items: Vec<Item>,

    /// Selection and alignment owner
    pub controller: ScrollController,

    /// Rendering surface state
    pub carousel: CarouselState,

    /// Log messages
    pub logs: Vec<LogEntry>,
    /// Maximum number of log entries to keep
    max_logs: usize,

    /// Instructions forwarded to the carousel so far
    pub instructions_issued: u64,

    /// Show help overlay
    pub show_help: bool,
}

impl App {
    /// Create a new application instance
    pub fn new(items: Vec<Item>) -> Self {
        let controller = ScrollController::new(items.len());
        let mut carousel = CarouselState::new(&items);
        carousel.jump_to(controller.instruction());

        let mut app = Self {
            should_quit: false,
            items,
            controller,
            carousel,
            logs: Vec::new(),
            max_logs: 100,
            instructions_issued: 0,
            show_help: false,
        };

        app.log(LogEntry::info(format!(
            "Generated {} items",
            app.controller.item_count()
        )));
        app.log(LogEntry::info("Press ? for help"));
        app
    }

    /// Add a log entry
    pub fn log(&mut self, entry: LogEntry) {
        self.logs.push(entry);
        if self.logs.len() > self.max_logs {
            self.logs.remove(0);
        }
    }

    // ============================================
    // Input events
    // ============================================

    pub fn on_item_tapped(&mut self, index: isize) {
        let instruction = self.controller.select_index(index);
        self.issue(instruction);
    }

    pub fn on_alignment_button_tapped(&mut self, alignment: Alignment) {
        let instruction = self.controller.set_alignment(alignment);
        self.issue(Some(instruction));
    }

    pub fn on_previous_tapped(&mut self) {
        let instruction = self.controller.previous();
        self.issue(instruction);
    }

    pub fn on_next_tapped(&mut self) {
        let instruction = self.controller.next();
        self.issue(instruction);
    }

    /// Forward an emitted instruction to the carousel
    fn issue(&mut self, instruction: Option<ScrollInstruction>) {
        let Some(instruction) = instruction else {
            return;
        };

        self.carousel.scroll_to(instruction);
        self.instructions_issued += 1;

        let label = self
            .items
            .get(instruction.target_index)
            .map(|item| format!("{} ({})", item.label, item.short_id()))
            .unwrap_or_default();
        self.log(LogEntry::success(format!(
            "scrollTo #{} {} fraction={:.1} offset={}",
            instruction.target_index + 1,
            label,
            instruction.viewport_fraction,
            instruction.edge_offset
        )));
    }

    fn press(&mut self, button: Button) {
        match button {
            Button::Align(alignment) => self.on_alignment_button_tapped(alignment),
            Button::Previous => self.on_previous_tapped(),
            Button::Next => self.on_next_tapped(),
        }
    }

    /// Handle key events
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter) {
                self.show_help = false;
            }
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Char('s') => self.on_alignment_button_tapped(Alignment::Start),
            KeyCode::Char('c') => self.on_alignment_button_tapped(Alignment::Center),
            KeyCode::Char('e') => self.on_alignment_button_tapped(Alignment::End),
            KeyCode::Char('h') | KeyCode::Left => self.on_previous_tapped(),
            KeyCode::Char('l') | KeyCode::Right => self.on_next_tapped(),
            KeyCode::Home => self.on_item_tapped(0),
            KeyCode::End => self.on_item_tapped(self.items.len() as isize - 1),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // '1'..'9' select items 1-9, '0' selects item 10
                let digit = c.to_digit(10).unwrap_or(0) as isize;
                let index = if digit == 0 { 9 } else { digit - 1 };
                self.on_item_tapped(index);
            }
            _ => {}
        }
    }

    /// Handle mouse events; `area` is the full terminal area
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if self.show_help {
            return;
        }

        let screen = ui::layout(area);
        self.carousel
            .set_viewport_width(screen.carousel_viewport.width);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(button) = screen.button_at(mouse.column, mouse.row) {
                    self.press(button);
                } else if ui::contains(screen.carousel_viewport, mouse.column, mouse.row) {
                    let column = mouse.column - screen.carousel_viewport.x;
                    if let Some(index) = self.carousel.item_at(column) {
                        self.on_item_tapped(index as isize);
                    }
                }
            }
            MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
                if ui::contains(screen.carousel, mouse.column, mouse.row) {
                    self.on_next_tapped();
                }
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
                if ui::contains(screen.carousel, mouse.column, mouse.row) {
                    self.on_previous_tapped();
                }
            }
            _ => {}
        }
    }

    /// Update animations (called every frame)
    pub fn tick(&mut self, width: u16, height: u16) {
        let screen = ui::layout(Rect::new(0, 0, width, height));
        self.carousel
            .set_viewport_width(screen.carousel_viewport.width);
        self.carousel.tick();
    }

    /// Get the status bar text
    pub fn status_text(&self) -> String {
        let motion = if self.carousel.is_animating() {
            " [scrolling]"
        } else {
            ""
        };

        format!(
            " {} instructions{} | offset {:.0} -> {:.0} of {} | ?: Help | q: Quit",
            self.instructions_issued,
            motion,
            self.carousel.offset(),
            self.carousel.target(),
            self.carousel.content_width()
        )
    }
}
