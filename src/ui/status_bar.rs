use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let (text, style) = match &state.notice {
        Some(notice) => (
            notice.text.clone(),
            match notice.kind {
                NoticeKind::Error => Theme::status_error(),
                NoticeKind::Info => Theme::status_info(),
            },
        ),
        None => (default_text(state), Theme::status_bar()),
    };

    let mut parts = vec![Span::styled(format!(" {} ", text), style)];

    // Key help on the right
    let help = match state.screen() {
        Screen::Upload => " Enter load | F2 sample | Esc quit ",
        Screen::Practice => " ←/p prev | space spell | →/n next | q quit ",
    };
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + help.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(help, Theme::status_bar()));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

fn default_text(state: &AppState) -> String {
    match state.session.view() {
        Some(view) => format!("{} words loaded", view.total),
        None => "No word list loaded".to_string(),
    }
}
