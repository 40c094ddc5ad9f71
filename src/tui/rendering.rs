use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};

use super::app::{MessageType, StatusMessage};
use super::layout::AppLayout;
use crate::view::preview::place_tooltip_sized;
use crate::view::render::{ItemIcon, ItemView, NO_ITEMS_HINT, NO_ITEMS_PLACEHOLDER};

/// Tooltip dimensions in terminal cells.
const TOOLTIP_CELL_WIDTH: i32 = 44;
const TOOLTIP_CELL_HEIGHT: i32 = 12;
const TOOLTIP_CELL_OFFSET: i32 = 2;

/// Everything the renderer needs for one frame.
pub struct RenderState<'a> {
    pub items: &'a [ItemView],
    pub selected_idx: usize,
    pub hovered: Option<i64>,
    pub search_text: &'a str,
    pub favorites_only: bool,
    pub fetch_error: Option<&'a str>,
    pub status_message: Option<&'a StatusMessage>,
    pub pending_delete: Option<i64>,
    pub preview_text: Option<&'a str>,
    pub pointer: Option<(u16, u16)>,
}

/// Render the entire UI.
pub fn render_ui(frame: &mut Frame, state: &RenderState) -> AppLayout {
    let layout = AppLayout::new(frame.area());

    render_search_bar(frame, layout.search_area, state);
    if state.items.is_empty() {
        render_empty_state(frame, layout.list_area);
    } else {
        render_history_list(frame, layout.list_area, state);
    }
    render_status_bar(frame, layout.status_area, state);

    // Tooltip goes last so it overlays the list.
    if let (Some(text), Some(pointer)) = (state.preview_text, state.pointer) {
        render_tooltip(frame, text, pointer);
    }

    layout
}

fn render_search_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let filter_badge = if state.favorites_only { " [★ favorites] " } else { "" };
    let line = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::Rgb(113, 113, 122))),
        Span::raw(state.search_text),
        Span::styled(filter_badge, Style::default().fg(Color::Rgb(250, 204, 21))),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(113, 113, 122)))
            .title(" Clipboard History "),
    );
    frame.render_widget(paragraph, area);
}

fn render_empty_state(frame: &mut Frame, area: Rect) {
    let text = Text::from(vec![
        Line::from(""),
        Line::from(Span::styled(
            NO_ITEMS_PLACEHOLDER,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            NO_ITEMS_HINT,
            Style::default().fg(Color::Rgb(113, 113, 122)),
        )),
    ]);

    let paragraph = Paragraph::new(text)
        .centered()
        .block(Block::default().borders(Borders::ALL).title(" History "));
    frame.render_widget(paragraph, area);
}

fn icon_glyph(icon: ItemIcon) -> &'static str {
    match icon {
        ItemIcon::Document => "📄",
        ItemIcon::Image => "🖼",
        ItemIcon::Folder => "📁",
    }
}

fn render_history_list(frame: &mut Frame, area: Rect, state: &RenderState) {
    let items: Vec<ListItem> = state
        .items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let hovered = state.hovered == Some(item.id);

            // Affordance columns: favorite stays visible when pinned, both
            // affordances appear on hover. Actions are wired regardless.
            let star = if item.favorite_affordance_pinned() {
                "★"
            } else if hovered {
                "☆"
            } else {
                " "
            };
            let delete = if hovered { "✕" } else { " " };

            // First line only, truncated for the list view.
            let text: String =
                item.display_text.lines().next().unwrap_or("").chars().take(60).collect();

            let content = format!("{} {} {} {}", star, delete, icon_glyph(item.icon), text);

            let style = if idx == state.selected_idx {
                Style::default()
                    .fg(Color::Rgb(250, 250, 250))
                    .bg(Color::Rgb(16, 185, 129))
                    .add_modifier(Modifier::BOLD)
            } else if hovered {
                Style::default().fg(Color::Rgb(250, 250, 250))
            } else {
                Style::default().fg(Color::Rgb(113, 113, 122))
            };

            ListItem::new(content).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(113, 113, 122)))
            .title(" History "),
    );

    frame.render_widget(list, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let (status_text, style) = if let Some(id) = state.pending_delete {
        (
            format!(" Delete item {}? y: confirm | n/Esc: cancel ", id),
            Style::default().fg(Color::Rgb(250, 250, 250)).bg(Color::Rgb(239, 68, 68)),
        )
    } else if let Some(error) = state.fetch_error {
        (
            format!(" [ERROR] {} ", error),
            Style::default().fg(Color::Rgb(239, 68, 68)).bg(Color::Rgb(24, 24, 27)),
        )
    } else if let Some(msg) = state.status_message {
        let fg = match msg.message_type {
            MessageType::Success => Color::Rgb(16, 185, 129),
            MessageType::Error => Color::Rgb(239, 68, 68),
        };
        (format!(" {} ", msg.text), Style::default().fg(fg).bg(Color::Rgb(24, 24, 27)))
    } else {
        let mut parts = vec![format!("{} items", state.items.len())];
        if state.favorites_only {
            parts.push("filter: favorites".to_string());
        }
        if !state.items.is_empty() {
            parts.push(format!("item {}/{}", state.selected_idx + 1, state.items.len()));
        }
        parts.push("Enter x2: paste".to_string());
        parts.push("^S: favorite".to_string());
        parts.push("^D: delete".to_string());
        parts.push("^F: favorites".to_string());
        parts.push("^C: quit".to_string());
        (
            format!(" {} ", parts.join(" | ")),
            Style::default().fg(Color::Rgb(250, 250, 250)).bg(Color::Rgb(24, 24, 27)),
        )
    };

    frame.render_widget(Paragraph::new(status_text).style(style), area);
}

fn render_tooltip(frame: &mut Frame, text: &str, pointer: (u16, u16)) {
    let area = frame.area();
    let (x, y) = place_tooltip_sized(
        (pointer.0 as i32, pointer.1 as i32),
        (area.width as i32, area.height as i32),
        (TOOLTIP_CELL_WIDTH, TOOLTIP_CELL_HEIGHT),
        TOOLTIP_CELL_OFFSET,
    );

    let tooltip_area = Rect {
        x: x.max(0) as u16,
        y: y.max(0) as u16,
        width: (TOOLTIP_CELL_WIDTH as u16).min(area.width),
        height: (TOOLTIP_CELL_HEIGHT as u16).min(area.height),
    };

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Rgb(250, 204, 21)))
                .title(" Preview "),
        );

    frame.render_widget(Clear, tooltip_area);
    frame.render_widget(paragraph, tooltip_area);
}
