//! Minimal markdown-to-span formatting for assistant answers.
//!
//! The retrieval service answers in markdown.  Full rendering is not
//! worth a dependency at this scale; we style the constructs that
//! actually occur in answers: `**bold**`, `` `inline code` ``, headings,
//! and bullet markers.  Everything else passes through as plain text.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Convert one line of markdown into a styled [`Line`].
pub fn parse_markdown_line(text: &str) -> Line<'static> {
    // Heading lines are styled as a whole.
    let stripped = text.trim_start();
    if stripped.starts_with('#') {
        let title = stripped.trim_start_matches('#').trim_start();
        return Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut plain = String::new();

    // Bullet markers keep their indentation but get a dimmed dot.
    let body = if let Some(rest) = bullet_rest(text) {
        let indent = " ".repeat(text.len() - text.trim_start().len());
        spans.push(Span::styled(
            format!("{indent}• "),
            Style::default().fg(Color::DarkGray),
        ));
        rest
    } else {
        text
    };

    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut bold = String::new();
                let mut closed = false;
                while let Some(c2) = chars.next() {
                    if c2 == '*' && chars.peek() == Some(&'*') {
                        chars.next();
                        closed = true;
                        break;
                    }
                    bold.push(c2);
                }
                if closed && !bold.is_empty() {
                    flush(&mut spans, &mut plain);
                    spans.push(Span::styled(
                        bold,
                        Style::default().add_modifier(Modifier::BOLD),
                    ));
                } else {
                    // No closing marker, treat as literal.
                    plain.push_str("**");
                    plain.push_str(&bold);
                }
            }
            '`' => {
                let mut code = String::new();
                let mut closed = false;
                for c2 in chars.by_ref() {
                    if c2 == '`' {
                        closed = true;
                        break;
                    }
                    code.push(c2);
                }
                if closed {
                    flush(&mut spans, &mut plain);
                    spans.push(Span::styled(code, Style::default().fg(Color::Yellow)));
                } else {
                    plain.push('`');
                    plain.push_str(&code);
                }
            }
            _ => plain.push(c),
        }
    }

    flush(&mut spans, &mut plain);
    if spans.is_empty() {
        Line::default()
    } else {
        Line::from(spans)
    }
}

/// Text after a `- ` or `* ` bullet marker, if the line is a bullet.
fn bullet_rest(text: &str) -> Option<&str> {
    let stripped = text.trim_start();
    stripped
        .strip_prefix("- ")
        .or_else(|| stripped.strip_prefix("* "))
}

fn flush(spans: &mut Vec<Span<'static>>, plain: &mut String) {
    if !plain.is_empty() {
        spans.push(Span::raw(std::mem::take(plain)));
    }
}
