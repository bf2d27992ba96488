use crate::app::state::AppState;
use crate::ui::layout::upload_layout;
use crate::ui::theme::Theme;
use crate::wordlist::sample::SAMPLE_FILE_NAME;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let layout = upload_layout(area);
    render_instructions(frame, layout.instructions);
    render_input_box(frame, layout.input_box, state);
    render_hints(frame, layout.hints, state);
}

fn render_instructions(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Upload Your Word List ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));

    let lines = vec![
        Line::from("Load a CSV file with one word per line. Only the first column is used."),
        Line::from(""),
        Line::from(Span::styled(
            "The first line is a header (for example \"word\") and is never practiced.",
            Theme::hint(),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Theme::body_text())
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_input_box(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" CSV file path ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_focused())
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = Line::from(vec![
        Span::styled("❯ ", Style::default().fg(Theme::ACCENT)),
        Span::styled(state.input.text.as_str(), Theme::input_text()),
    ]);
    frame.render_widget(Paragraph::new(line), inner);

    if inner.width > 0 {
        // Chevron "❯ " is 2 columns wide
        let cursor_x = inner.x + 2 + state.input.cursor_column() as u16;
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }
}

fn render_hints(frame: &mut Frame, area: Rect, state: &AppState) {
    let export = state.config.sample.export_dir.join(SAMPLE_FILE_NAME);
    let lines = vec![
        Line::from(vec![
            Span::styled(" Enter ", Theme::key()),
            Span::raw("load   "),
            Span::styled(" F2 ", Theme::key()),
            Span::raw("download sample CSV   "),
            Span::styled(" Esc ", Theme::key()),
            Span::raw("quit"),
        ]),
        Line::from(Span::styled(
            format!(" Sample is saved to {}", export.display()),
            Theme::hint(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
