mod layout;
mod practice;
mod status_bar;
mod theme;
mod upload;

use crate::app::state::{AppState, Screen};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Draw the whole screen from `state`. Called by the host after every
/// handled event; nothing here mutates state.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    render_title(frame, app_layout.title);
    match state.screen() {
        Screen::Upload => upload::render(frame, app_layout.body, state),
        Screen::Practice => practice::render(frame, app_layout.body, state),
    }
    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("🐝 Spelling Bee Practice", theme::Theme::banner())),
        Line::from(Span::styled(
            "Listen to each word, spell it, then check yourself.",
            theme::Theme::hint(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
