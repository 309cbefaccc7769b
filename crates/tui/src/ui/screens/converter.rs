use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use engine::WorkflowState;

use crate::{
    app::{Field, UiState},
    ui::{components::selector, theme::Theme},
};

/// Centers a fixed-size box inside `area`.
fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}

pub fn render(
    frame: &mut Frame<'_>,
    area: Rect,
    workflow: &WorkflowState,
    ui: &UiState,
    theme: &Theme,
) {
    let card_area = centered_box(62, 20, area);

    let block = Block::default()
        .title(Span::styled(
            " Currency Converter ",
            Style::default().fg(theme.accent),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.panel));

    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // error banner
            Constraint::Length(3), // selectors + swap
            Constraint::Length(8), // option list / hints
            Constraint::Length(3), // amount input
            Constraint::Length(1), // status + result
        ])
        .margin(1)
        .split(inner);

    render_error(frame, rows[0], workflow, theme);
    render_selectors(frame, rows[1], workflow, ui, theme);
    render_options(frame, rows[2], workflow, ui, theme);
    render_amount(frame, rows[3], workflow, ui, theme);
    render_status(frame, rows[4], workflow, theme);
}

fn render_error(frame: &mut Frame<'_>, area: Rect, workflow: &WorkflowState, theme: &Theme) {
    let Some(message) = &workflow.error else {
        return;
    };

    frame.render_widget(
        Paragraph::new(Span::styled(
            message.as_str(),
            Style::default().fg(theme.error),
        )),
        area,
    );
}

fn render_selectors(
    frame: &mut Frame<'_>,
    area: Rect,
    workflow: &WorkflowState,
    ui: &UiState,
    theme: &Theme,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(2, 5),
            Constraint::Ratio(1, 5),
            Constraint::Ratio(2, 5),
        ])
        .split(area);

    selector::render_field(
        frame,
        columns[0],
        "From",
        &workflow.from,
        workflow.favorites.contains(&workflow.from),
        ui.focus == Field::From,
        theme,
    );

    let swap = Paragraph::new(Line::from(vec![
        Span::styled("⇄", Style::default().fg(theme.accent)),
        Span::styled(" s", Style::default().fg(theme.dim)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(
        swap,
        Rect {
            y: columns[1].y + 1,
            height: 1,
            ..columns[1]
        },
    );

    selector::render_field(
        frame,
        columns[2],
        "To",
        &workflow.to,
        workflow.favorites.contains(&workflow.to),
        ui.focus == Field::To,
        theme,
    );
}

fn render_options(
    frame: &mut Frame<'_>,
    area: Rect,
    workflow: &WorkflowState,
    ui: &UiState,
    theme: &Theme,
) {
    let (title, selected) = match ui.focus {
        Field::From => ("From currency", &workflow.from),
        Field::To => ("To currency", &workflow.to),
        Field::Amount => {
            let hint = Paragraph::new(vec![
                Line::default(),
                Line::from(Span::styled(
                    "Tab to the currency fields to browse the list.",
                    Style::default().fg(theme.dim),
                )),
                Line::from(Span::styled(
                    "Starred favorites are always listed first.",
                    Style::default().fg(theme.dim),
                )),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(hint, area);
            return;
        }
    };

    let options = workflow.favorites.selection_order(&workflow.currencies);
    selector::render_options(
        frame,
        area,
        title,
        &options,
        &workflow.favorites,
        selected,
        theme,
    );
}

fn render_amount(
    frame: &mut Frame<'_>,
    area: Rect,
    workflow: &WorkflowState,
    ui: &UiState,
    theme: &Theme,
) {
    let focused = ui.focus == Field::Amount;
    let border_color = if focused { theme.accent } else { theme.border };
    let block = Block::default()
        .title(Span::styled(
            " Amount ",
            Style::default().fg(theme.accent),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme.panel));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cursor = if focused { "│" } else { "" };
    let style = if focused {
        Style::default().fg(theme.text)
    } else {
        Style::default().fg(theme.dim)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(format!("{}{cursor}", workflow.amount), style)),
        inner,
    );
}

fn render_status(frame: &mut Frame<'_>, area: Rect, workflow: &WorkflowState, theme: &Theme) {
    if workflow.converting {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Converting…",
                Style::default().fg(theme.dim),
            )),
            area,
        );
    }

    let Some(result) = &workflow.result else {
        return;
    };

    let line = Line::from(vec![
        Span::styled("Converted Amount: ", Style::default().fg(theme.dim)),
        Span::styled(
            result.as_str(),
            Style::default()
                .fg(theme.positive)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
}
