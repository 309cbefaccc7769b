pub mod components;
pub mod keymap;
pub mod screens;

mod theme;

use std::io::{Stdout, stdout};

use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{
    Frame,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use engine::WorkflowState;

use crate::{app::UiState, error::Result};

pub use theme::Theme;

pub type Terminal = ratatui::Terminal<CrosstermBackend<Stdout>>;

pub fn setup_terminal() -> Result<Terminal> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;
    let terminal = ratatui::Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

pub fn restore_terminal(terminal: &mut Terminal) -> Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

pub fn render(frame: &mut Frame<'_>, workflow: &WorkflowState, ui: &UiState) {
    let theme = if ui.dark_mode {
        Theme::dark()
    } else {
        Theme::light()
    };
    let area = frame.area();

    // Paint the whole background so the theme toggle actually flips
    // the screen, not just the widgets.
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background).fg(theme.text)),
        area,
    );

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // info bar
            Constraint::Min(0),    // converter
            Constraint::Length(1), // bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], ui, &theme);
    screens::converter::render(frame, layout[1], workflow, ui, &theme);
    render_bottom_bar(frame, layout[2], &theme);
    components::toast::render(frame, area, ui.toast.as_ref(), &theme);
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, ui: &UiState, theme: &Theme) {
    let mode = if ui.dark_mode { "dark" } else { "light" };
    let line = Line::from(vec![
        Span::styled(" cambio", Style::default().fg(theme.accent)),
        Span::raw("  "),
        Span::styled("Source", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}  ", ui.base_url)),
        Span::styled("Theme", Style::default().fg(theme.dim)),
        Span::raw(format!(": {mode}")),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let key = |label: &'static str| Span::styled(label, Style::default().fg(theme.accent));
    let sep = || Span::styled("  │  ", Style::default().fg(theme.border));

    let parts = vec![
        Span::raw(" "),
        key("Tab"),
        Span::raw(" field"),
        sep(),
        key("↑/↓"),
        Span::raw(" currency"),
        sep(),
        key("f"),
        Span::raw(" favorite"),
        sep(),
        key("s"),
        Span::raw(" swap"),
        sep(),
        key("Enter"),
        Span::raw(" convert"),
        sep(),
        key("t"),
        Span::raw(" theme"),
        sep(),
        key("q"),
        Span::raw(" quit"),
    ];

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
