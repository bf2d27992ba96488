use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Yellow;
    pub const PROGRESS: Color = Color::Green;

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn banner() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn body_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn hint() -> Style {
        Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC)
    }

    pub fn key() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn word() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn gauge() -> Style {
        Style::default().fg(Self::PROGRESS).bg(Color::Black)
    }

    pub fn button() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn button_disabled() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_error() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_info() -> Style {
        Style::default().fg(Color::Black).bg(Color::Green)
    }
}
