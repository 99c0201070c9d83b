//! The UI renders the application state into something visible and vim-able.
//!
//! The draw function dispatches based on the current view. The list shows sections ranked by
//! `order`, with the expanded section's controls listed beneath its heading.

use crate::app_state::{AppState, View};
use crate::dispatch::{ControlValue, ControlView, SUMMARY_HINT};
use crate::section::{Section, SectionKind};
use edtui::{EditorTheme, EditorView};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Renders the active view based on current application state.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    match app.current_view {
        View::List | View::Fields => draw_list(f, app),
        View::Edit => draw_edit(f, app),
    }
}

fn control_line(view: &ControlView, selected: bool) -> Line<'static> {
    let value = match &view.value {
        ControlValue::Text(text) if text.is_empty() => Span::styled(
            view.placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        ControlValue::Text(text) => Span::raw(text.lines().next().unwrap_or_default().to_string()),
        ControlValue::Checkbox(true) => Span::raw("[x]"),
        ControlValue::Checkbox(false) => Span::raw("[ ]"),
        ControlValue::Button => Span::styled("[+]", Style::default().fg(Color::Yellow)),
    };

    let mut style = Style::default();
    if !view.enabled {
        style = style.fg(Color::DarkGray);
    }
    if selected {
        style = style.add_modifier(Modifier::REVERSED);
    }

    Line::from(vec![
        Span::raw("      "),
        Span::styled(format!("{}: ", view.label), style),
        value,
    ])
}

fn heading_line(section: &Section, expanded: bool, dragging: bool) -> Line<'static> {
    let marker = if expanded { "▾" } else { "▸" };
    let colour = match section.kind() {
        Some(SectionKind::Personal) => Color::Cyan,
        Some(SectionKind::Summary) => Color::Green,
        Some(SectionKind::Experience) => Color::Blue,
        Some(SectionKind::Education) => Color::Magenta,
        Some(SectionKind::Skills) => Color::Yellow,
        None => Color::DarkGray,
    };
    let mut title_style = Style::default().add_modifier(Modifier::BOLD);
    if !section.is_visible {
        title_style = title_style.fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT);
    }
    if dragging {
        title_style = title_style.fg(Color::Rgb(255, 165, 0)); // Orange
    }

    Line::from(vec![
        Span::raw(format!("{marker} ⋮⋮ ")),
        Span::styled(section.title.clone(), title_style),
        Span::styled(format!("  ({})", section.content.type_name()), Style::default().fg(colour)),
    ])
}

fn draw_list(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let controls = app.current_controls();
    let mut items: Vec<ListItem> = Vec::new();

    for (i, section) in app.display_order().into_iter().enumerate() {
        let expanded = app.editor.is_expanded(&section.id);
        let dragging = app.editor.dragging() == Some(&section.id);
        let mut item = ListItem::new(heading_line(section, expanded, dragging));
        if i == app.current_section_index && app.current_view == View::List {
            item = item.style(Style::default().add_modifier(Modifier::REVERSED));
        }
        items.push(item);

        if !expanded {
            continue;
        }
        if controls.is_empty() {
            items.push(ListItem::new(Line::styled(
                "      (no editor for this section)",
                Style::default().fg(Color::DarkGray),
            )));
        }
        for (c, view) in controls.iter().enumerate() {
            let selected = app.current_view == View::Fields && c == app.current_control_index;
            items.push(ListItem::new(control_line(view, selected)));
        }
        if section.kind() == Some(SectionKind::Summary) {
            items.push(ListItem::new(Line::styled(
                format!("      {SUMMARY_HINT}"),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let who = app
        .session
        .user
        .as_ref()
        .map_or_else(String::new, |user| format!(" - {}", user.name));
    let title = if app.editor.dragging().is_some() {
        format!("Sections (MOVING){who}")
    } else {
        format!("Sections{who}")
    };

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, chunks[0]);

    let help = if let Some(ref msg) = app.message {
        msg.clone()
    } else if app.editor.dragging().is_some() {
        "Ctrl+↑/↓: Move | Enter/Esc: Drop".to_string()
    } else if app.current_view == View::Fields {
        "↑/↓: Control | Enter: Edit/Toggle/Press | Esc: Back".to_string()
    } else {
        let adds = app
            .add_kinds
            .iter()
            .enumerate()
            .map(|(n, kind)| format!("{}: Add {}", n + 1, kind.label()))
            .collect::<Vec<_>>()
            .join(" | ");
        format!(
            "Enter: Expand | Tab: Fields | Ctrl+↑/↓: Move | r: Rename | v: Show/Hide | d: Delete | {adds} | q: Quit"
        )
    };

    let help_widget = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(help_widget, chunks[1]);
}

fn draw_edit(f: &mut Frame, app: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Breadcrumb
            Constraint::Min(0),    // Editor
            Constraint::Length(3), // Help
        ])
        .split(f.area());

    let breadcrumb = app.edit_breadcrumb().unwrap_or_default();
    let breadcrumb_widget = Paragraph::new(breadcrumb)
        .block(Block::default().borders(Borders::ALL).title("Section"));
    f.render_widget(breadcrumb_widget, chunks[0]);

    let title = format!("Edit (max line: {} chars)", app.wrap_width);
    if let Some(ref mut editor_state) = app.editor_state {
        let block = Block::default().borders(Borders::ALL).title(title);
        let inner = block.inner(chunks[1]);
        f.render_widget(block, chunks[1]);

        let editor = EditorView::new(editor_state)
            .theme(EditorTheme::default())
            .wrap(true);

        f.render_widget(editor, inner);
    }

    let help = Paragraph::new("Changes apply as you type | Esc (normal mode): Done")
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
