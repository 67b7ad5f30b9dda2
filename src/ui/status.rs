use ratatui::{prelude::*, widgets::Paragraph};

use super::{chars, helpers::truncate_string, theme};
use crate::state::{LoadStatus, State};

/// Title line with the dataset load badge
pub fn render_header(frame: &mut Frame, state: &State, area: Rect) {
    let base_style = Style::default().bg(theme::BG_BASE);

    let (badge, badge_bg, detail) = match &state.load_status {
        LoadStatus::Loading => (" LOADING ", theme::WARNING, String::new()),
        LoadStatus::Ready { dishes } => (" READY ", theme::SUCCESS, format!("{} dishes, {} eligible", dishes, state.eligible.len())),
        LoadStatus::Failed(err) => (" NO DATA ", theme::ERROR, err.clone()),
    };
    let detail_color = if matches!(state.load_status, LoadStatus::Failed(_)) { theme::ERROR } else { theme::TEXT_MUTED };
    let room = (area.width as usize).saturating_sub(30);

    let line = Line::from(vec![
        Span::styled(format!(" {} ", chars::DOT), Style::default().fg(theme::ACCENT)),
        Span::styled("Ruokalista ", Style::default().fg(theme::TEXT).bold()),
        Span::styled(badge, Style::default().fg(theme::BG_BASE).bg(badge_bg).bold()),
        Span::styled(format!(" {}", truncate_string(&detail, room)), Style::default().fg(detail_color)),
    ]);
    frame.render_widget(Paragraph::new(line).style(base_style), area);
}

/// Share link for the current selection
pub fn render_status_bar(frame: &mut Frame, state: &State, area: Rect) {
    let base_style = Style::default().bg(theme::BG_BASE).fg(theme::TEXT_MUTED);
    let room = (area.width as usize).saturating_sub(9);

    let line = Line::from(vec![
        Span::styled(" ", base_style),
        Span::styled(" LINK ", Style::default().fg(theme::BG_BASE).bg(theme::ACCENT).bold()),
        Span::styled(" ", base_style),
        Span::styled(truncate_string(&state.share_url(), room), Style::default().fg(theme::TEXT_SECONDARY)),
    ]);
    frame.render_widget(Paragraph::new(line).style(base_style), area);
}
