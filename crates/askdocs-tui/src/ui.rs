//! Rendering of the chat panel.
//!
//! User messages are plain text, right-aligned; assistant messages go
//! through the markdown formatter with any source links listed beneath
//! the text.  While an exchange is in flight a transient "Thinking..."
//! entry is shown after the transcript.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use askdocs_models::Role;

use crate::app::App;
use crate::markdown::parse_markdown_line;
use crate::panel::SUGGESTED_QUESTIONS;

pub fn render(app: &mut App, frame: &mut Frame) {
    let [header_area, body_area, input_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    render_header(app, frame, header_area);

    if app.panel.suggestions_visible() {
        render_suggestions(app, frame, body_area);
    } else {
        render_transcript(app, frame, body_area);
    }

    render_input(app, frame, input_area);
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let status = if app.panel.is_loading() {
        Span::styled("thinking", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("ready", Style::default().fg(Color::Green))
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Docs AI Assistant",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  ·  "),
        status,
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_suggestions(app: &App, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = SUGGESTED_QUESTIONS
        .iter()
        .map(|q| {
            ListItem::new(Line::from(vec![
                Span::raw(q.text),
                Span::styled(
                    format!("  [{}]", q.category),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Ask me anything — or pick a question"),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    let mut state = ListState::default();
    state.select(Some(app.panel.selected_suggestion()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_transcript(app: &mut App, frame: &mut Frame, area: Rect) {
    let mut lines: Vec<Line<'static>> = Vec::new();

    for msg in app.panel.transcript() {
        let stamp = msg.timestamp.format("%H:%M:%S").to_string();
        match msg.role {
            Role::User => {
                lines.push(
                    Line::from(vec![
                        Span::styled(
                            msg.content.clone(),
                            Style::default().fg(Color::Green),
                        ),
                        Span::styled(
                            format!("  [{stamp}]"),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ])
                    .right_aligned(),
                );
            }
            Role::Assistant => {
                for content_line in msg.content.lines() {
                    lines.push(parse_markdown_line(content_line));
                }
                if let Some(urls) = &msg.urls {
                    for url in urls {
                        lines.push(Line::from(vec![
                            Span::styled("↪ ", Style::default().fg(Color::DarkGray)),
                            Span::styled(
                                url.clone(),
                                Style::default()
                                    .fg(Color::Blue)
                                    .add_modifier(Modifier::UNDERLINED),
                            ),
                        ]));
                    }
                }
            }
        }
        lines.push(Line::default());
    }

    if app.panel.is_loading() {
        let dots = ".".repeat(1 + (app.tick_count % 3));
        lines.push(Line::from(Span::styled(
            format!("Thinking{dots}"),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    // Follow the bottom unless the user scrolled up; `scroll_from_bottom`
    // counts lines upward from the latest entry.
    let viewport = area.height.saturating_sub(2) as usize;
    let max_offset = lines.len().saturating_sub(viewport);
    app.scroll_from_bottom = app.scroll_from_bottom.min(max_offset);
    let top = max_offset - app.scroll_from_bottom.min(max_offset);

    let transcript = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Conversation"))
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(top).unwrap_or(u16::MAX), 0));
    frame.render_widget(transcript, area);
}

fn render_input(app: &App, frame: &mut Frame, area: Rect) {
    let (text, style) = if app.panel.input().is_empty() {
        (
            "Ask me anything about the docs...",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (app.panel.input(), Style::default().fg(Color::White))
    };

    let title = if app.panel.is_loading() {
        "Waiting for answer (Esc to quit)"
    } else {
        "Enter to send · Esc to quit"
    };

    let input = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(input, area);
}
