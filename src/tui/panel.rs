//! Panel state and the capability every panel implements.

use ratatui::style::{Color, Modifier, Style};

/// The panels placed in the focus grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Groups,
    Requests,
    Response,
}

/// Behavior shared by every panel.
pub trait Panel {
    fn title(&self) -> String;

    fn is_focused(&self) -> bool;

    fn set_focused(&mut self, focused: bool);

    /// Move the selection (lists) or scroll position (text) by `delta`.
    fn scroll_by(&mut self, delta: isize);

    /// Border style: green and bold when focused, plain white otherwise.
    fn border_style(&self) -> Style {
        if self.is_focused() {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    }
}

/// A selectable list of names.
#[derive(Debug, Clone, Default)]
pub struct ListPanel {
    title: String,
    items: Vec<String>,
    selected: usize,
    focused: bool,
}

impl ListPanel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Replace the items and reset the selection to the first one.
    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        self.selected = 0;
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected_index(&self) -> Option<usize> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.selected)
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.items.get(self.selected).map(String::as_str)
    }
}

impl Panel for ListPanel {
    fn title(&self) -> String {
        format!("{} ({})", self.title, self.items.len())
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn scroll_by(&mut self, delta: isize) {
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }
}

/// Scrollable response text.
#[derive(Debug, Clone, Default)]
pub struct ResponsePanel {
    heading: Option<String>,
    text: String,
    is_error: bool,
    scroll: u16,
    focused: bool,
}

impl ResponsePanel {
    /// Show a response body under `heading`.
    pub fn show(&mut self, heading: impl Into<String>, text: impl Into<String>) {
        self.heading = Some(heading.into());
        self.text = text.into();
        self.is_error = false;
        self.scroll = 0;
    }

    /// Show an error inline.
    pub fn show_error(&mut self, heading: impl Into<String>, message: impl Into<String>) {
        self.show(heading, message);
        self.is_error = true;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }
}

impl Panel for ResponsePanel {
    fn title(&self) -> String {
        match self.heading {
            Some(ref heading) => format!("Response: {}", heading),
            None => "Response".to_string(),
        }
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn scroll_by(&mut self, delta: isize) {
        let max = self.text.lines().count().saturating_sub(1);
        let max = u16::try_from(max).unwrap_or(u16::MAX);
        let next = (self.scroll as isize).saturating_add(delta).max(0);
        self.scroll = u16::try_from(next).unwrap_or(u16::MAX).min(max);
    }
}
