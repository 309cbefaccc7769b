use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use engine::{CurrencyCode, Favorites};

use crate::ui::theme::Theme;

/// One closed selector: the currently chosen code plus its star marker.
pub fn render_field(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    code: &CurrencyCode,
    starred: bool,
    focused: bool,
    theme: &Theme,
) {
    let border_color = if focused { theme.accent } else { theme.border };
    let block = Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(theme.accent),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme.panel));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let star = if starred {
        Span::styled("★ ", Style::default().fg(theme.star))
    } else {
        Span::styled("☆ ", Style::default().fg(theme.dim))
    };
    let value_style = if focused {
        Style::default()
            .fg(theme.text)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };
    let line = Line::from(vec![star, Span::styled(code.to_string(), value_style)]);

    frame.render_widget(Paragraph::new(line), inner);
}

/// The open option list for the focused selector: favorites first,
/// starred entries marked, the current choice highlighted. Slices a
/// window around the selection so long lists stay navigable.
pub fn render_options(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    options: &[CurrencyCode],
    favorites: &Favorites,
    selected: &CurrencyCode,
    theme: &Theme,
) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(theme.accent),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.panel));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = inner.height as usize;
    if visible == 0 || options.is_empty() {
        return;
    }

    let selected_index = options.iter().position(|code| code == selected).unwrap_or(0);
    let start = selected_index
        .saturating_sub(visible / 2)
        .min(options.len().saturating_sub(visible));
    let window = options.iter().enumerate().skip(start).take(visible);

    let lines: Vec<Line<'_>> = window
        .map(|(index, code)| {
            let marker = if favorites.contains(code) {
                Span::styled("★ ", Style::default().fg(theme.star))
            } else {
                Span::raw("  ")
            };
            let style = if index == selected_index {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            let pointer = if index == selected_index { "› " } else { "  " };
            Line::from(vec![
                Span::styled(pointer, Style::default().fg(theme.accent)),
                marker,
                Span::styled(code.to_string(), style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
