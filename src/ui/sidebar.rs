use ratatui::{prelude::*, widgets::Paragraph};

use super::{chars, theme};
use crate::state::State;

/// Key hints shown under the controls
const HELP: &[(&str, &str)] = &[
    ("+ / -", "amount"),
    ("0-9", "type amount"),
    ("k", "kid-friendly"),
    ("v", "vegetarian"),
    ("r", "reroll"),
    ("↑ ↓", "shopping row"),
    ("Space", "bought"),
    ("q", "quit"),
];

pub fn render_sidebar(frame: &mut Frame, state: &State, area: Rect) {
    let base_style = Style::default().bg(theme::BG_BASE);

    let sidebar_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),                        // Controls
            Constraint::Length(HELP.len() as u16 + 1), // Help hints
        ])
        .split(area);

    let sel = &state.selection;
    let max = if state.is_ready() { state.eligible.len().to_string() } else { "–".to_string() };

    let lines = vec![
        Line::from(vec![
            Span::styled("  ", base_style),
            Span::styled("MENU", Style::default().fg(theme::TEXT_MUTED).bold()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Dishes  ", Style::default().fg(theme::TEXT_SECONDARY)),
            Span::styled(" - ", Style::default().fg(theme::ACCENT)),
            Span::styled(
                format!(" {:>3} ", sel.amount),
                Style::default().fg(theme::TEXT).bg(theme::BG_ELEVATED).bold(),
            ),
            Span::styled(" + ", Style::default().fg(theme::ACCENT)),
            Span::styled(format!(" max {}", max), Style::default().fg(theme::TEXT_MUTED)),
        ]),
        Line::from(""),
        checkbox_line("Kid-friendly", sel.filters.kids_only),
        checkbox_line("Vegetarian only", sel.filters.veg_only),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {} ", chars::REROLL), Style::default().fg(theme::ACCENT)),
            Span::styled("Seed ", Style::default().fg(theme::TEXT_SECONDARY)),
            Span::styled(sel.seed.clone(), Style::default().fg(theme::ACCENT_DIM)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).style(base_style), sidebar_layout[0]);

    let help_lines: Vec<Line> = HELP
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled("  ", base_style),
                Span::styled(format!("{:<6}", key), Style::default().fg(theme::ACCENT)),
                Span::styled(format!(" {}", what), Style::default().fg(theme::TEXT_MUTED)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(help_lines).style(base_style), sidebar_layout[1]);
}

fn checkbox_line(label: &str, on: bool) -> Line<'static> {
    let (mark, color) = if on { (chars::BOX_ON, theme::SUCCESS) } else { (chars::BOX_OFF, theme::TEXT_MUTED) };
    Line::from(vec![
        Span::styled(format!("  {} ", mark), Style::default().fg(color)),
        Span::styled(label.to_string(), Style::default().fg(if on { theme::TEXT } else { theme::TEXT_SECONDARY })),
    ])
}
