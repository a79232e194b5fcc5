//! Panel rendering.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::app::App;
use super::layout::TuiLayout;
use super::panel::{ListPanel, Panel, PanelKind, ResponsePanel};

const KEY_HELP: &str = "[h/j/k/l] move  [J/K] select  [Enter] send  [r] rerun  [q] quit";

/// Render the complete UI.
pub fn render_ui(frame: &mut Frame, app: &App) {
    let layout = TuiLayout::compute(frame.area());

    render_list(frame, layout.groups, app.groups(), "No endpoint groups loaded");
    render_list(frame, layout.requests, app.requests(), "No requests in this group");
    render_response(frame, layout.response, app.response());
    render_status(frame, layout.status, app);
}

fn block(panel: &dyn Panel) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", panel.title()))
        .borders(Borders::ALL)
        .border_style(panel.border_style())
}

fn render_list(frame: &mut Frame, area: Rect, panel: &ListPanel, empty: &str) {
    let block = block(panel);

    if panel.items().is_empty() {
        let paragraph = Paragraph::new(Span::styled(
            empty.to_string(),
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = panel
        .items()
        .iter()
        .map(|name| ListItem::new(Line::from(name.as_str())))
        .collect();

    let highlight = if panel.is_focused() {
        Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(panel.selected_index());
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_response(frame: &mut Frame, area: Rect, panel: &ResponsePanel) {
    let style = if panel.is_error() {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(panel.text().to_string())
        .style(style)
        .block(block(panel))
        .wrap(Wrap { trim: false })
        .scroll((panel.scroll(), 0));
    frame.render_widget(paragraph, area);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(KEY_HELP, Style::default().fg(Color::DarkGray))];

    if app.is_fetching() {
        spans.push(Span::styled("  fetching...", Style::default().fg(Color::Yellow)));
    }

    if let Some(message) = app.status_message() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(message.to_string(), Style::default().fg(Color::Cyan)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Focused panel name, for the terminal title and logs.
pub fn panel_name(kind: PanelKind) -> &'static str {
    match kind {
        PanelKind::Groups => "groups",
        PanelKind::Requests => "requests",
        PanelKind::Response => "response",
    }
}
