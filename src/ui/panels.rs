use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::{chars, helpers::truncate_string, theme};
use crate::state::{LoadStatus, State};

fn panel_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER))
        .style(Style::default().bg(theme::BG_SURFACE))
        .title(Span::styled(format!(" {} ", title), Style::default().fg(theme::ACCENT).bold()))
}

fn placeholder(text: &str) -> Line<'_> {
    Line::from(Span::styled(format!(" {}", text), Style::default().fg(theme::TEXT_MUTED).italic()))
}

/// Ordered list of chosen dish names
pub fn render_dishes(frame: &mut Frame, state: &State, area: Rect) {
    let names = state.chosen_names();
    let width = area.width.saturating_sub(8) as usize;

    let lines: Vec<Line> = if names.is_empty() {
        let hint = match &state.load_status {
            LoadStatus::Loading => "Loading dishes…",
            LoadStatus::Failed(_) => "No dataset",
            LoadStatus::Ready { .. } if state.selection.amount > state.eligible.len() => "Not enough dishes for that amount",
            LoadStatus::Ready { .. } => "Pick an amount with + or a number",
        };
        vec![placeholder(hint)]
    } else {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                Line::from(vec![
                    Span::styled(format!(" {:>2}. ", i + 1), Style::default().fg(theme::ACCENT_DIM)),
                    Span::styled(truncate_string(name, width), Style::default().fg(theme::TEXT)),
                ])
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines).block(panel_block("Dishes")), area);
}

/// Shopping list with bought toggles; the cursor row is highlighted
pub fn render_shopping(frame: &mut Frame, state: &State, area: Rect) {
    let items = state.shopping.items();
    let title = if items.is_empty() {
        "Shopping list".to_string()
    } else {
        format!("Shopping list {}/{}", state.shopping.bought_count(), items.len())
    };
    let width = area.width.saturating_sub(10) as usize;

    // Keep the cursor row visible
    let visible = area.height.saturating_sub(2) as usize;
    let offset = if visible > 0 && state.cursor >= visible { state.cursor + 1 - visible } else { 0 };

    let lines: Vec<Line> = if items.is_empty() {
        vec![placeholder("Nothing to buy")]
    } else {
        items
            .iter()
            .enumerate()
            .skip(offset)
            .map(|(i, item)| {
                let selected = i == state.cursor;
                let bought = state.shopping.is_bought(&item.name);
                let row_bg = if selected { theme::BG_ELEVATED } else { theme::BG_SURFACE };
                let indicator = if selected { chars::ARROW_RIGHT } else { " " };
                let (check_color, text_style) = if bought {
                    (theme::SUCCESS, Style::default().fg(theme::TEXT_MUTED).crossed_out())
                } else {
                    (theme::BORDER, Style::default().fg(theme::TEXT))
                };
                Line::from(vec![
                    Span::styled(format!("{} ", indicator), Style::default().fg(theme::ACCENT).bg(row_bg)),
                    Span::styled(format!("{} ", chars::CHECK), Style::default().fg(check_color).bg(row_bg)),
                    Span::styled(truncate_string(&item.label(), width), text_style.bg(row_bg)),
                ])
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines).block(panel_block(&title)), area);
}
