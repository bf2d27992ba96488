use crate::app::state::AppState;
use crate::session::View;
use crate::ui::layout::practice_layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap};

const HIDDEN_HINT: &str = "Press Space to see the spelling";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(view) = state.session.view() else {
        return;
    };
    let layout = practice_layout(area);
    render_progress(frame, layout.progress, &view);
    render_word_card(frame, layout.word_card, &view, state.speaking);
    render_controls(frame, layout.controls, &view);
}

fn render_progress(frame: &mut Frame, area: Rect, view: &View) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border());
    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Theme::gauge())
        .ratio(view.progress().clamp(0.0, 1.0))
        .label(format!("Word {} of {}", view.index, view.total));
    frame.render_widget(gauge, area);
}

fn render_word_card(frame: &mut Frame, area: Rect, view: &View, speaking: bool) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border());
    if speaking {
        block = block.title_bottom(Line::from(" ♪ speaking… ").centered());
    }

    let inner_height = area.height.saturating_sub(2);
    let top_pad = inner_height.saturating_sub(1) / 2;
    let mut lines: Vec<Line> = (0..top_pad).map(|_| Line::from("")).collect();
    lines.push(if view.spelling_visible {
        Line::from(Span::styled(view.word, Theme::word()))
    } else {
        Line::from(Span::styled(HIDDEN_HINT, Theme::hint()))
    });

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_controls(frame: &mut Frame, areas: [Rect; 3], view: &View) {
    let spelling_label = if view.spelling_visible {
        "Hide Spelling"
    } else {
        "Show Spelling"
    };
    let buttons = [
        ("← Previous", "p", view.index > 1),
        (spelling_label, "space", true),
        ("Next →", "n", view.index < view.total),
    ];

    for (area, (label, key, enabled)) in areas.into_iter().zip(buttons) {
        let style = if enabled {
            Theme::button()
        } else {
            Theme::button_disabled()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style)
            .title_bottom(Line::from(format!(" {} ", key)).right_aligned());
        let paragraph = Paragraph::new(label)
            .block(block)
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}
