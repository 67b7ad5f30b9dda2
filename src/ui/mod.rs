mod chars;
mod helpers;
mod panels;
mod sidebar;
mod status;
mod theme;

use ratatui::{prelude::*, widgets::Block};

use crate::infra::constants::SIDEBAR_WIDTH;
use crate::state::State;

pub fn render(frame: &mut Frame, state: &State) {
    let area = frame.area();

    // Fill base background
    frame.render_widget(Block::default().style(Style::default().bg(theme::BG_BASE)), area);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(1),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    status::render_header(frame, state, main_layout[0]);
    render_body(frame, state, main_layout[1]);
    status::render_status_bar(frame, state, main_layout[2]);
}

fn render_body(frame: &mut Frame, state: &State, area: Rect) {
    let body_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Controls
            Constraint::Percentage(50),        // Dishes
            Constraint::Percentage(50),        // Shopping list
        ])
        .split(area);

    sidebar::render_sidebar(frame, state, body_layout[0]);
    panels::render_dishes(frame, state, body_layout[1]);
    panels::render_shopping(frame, state, body_layout[2]);
}
