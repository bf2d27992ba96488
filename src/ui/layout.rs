use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// Widest the content column grows; wider terminals get side margins.
const MAX_CONTENT_WIDTH: u16 = 80;

pub struct AppLayout {
    pub title: Rect,
    pub body: Rect,
    pub status_bar: Rect,
}

pub struct PracticeLayout {
    pub progress: Rect,
    pub word_card: Rect,
    pub controls: [Rect; 3],
}

pub struct UploadLayout {
    pub instructions: Rect,
    pub input_box: Rect,
    pub hints: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let column = Layout::default()
        .direction(Direction::Horizontal)
        .flex(Flex::Center)
        .constraints([Constraint::Max(MAX_CONTENT_WIDTH)])
        .split(main_chunks[0])[0];

    let content = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Screen body
        ])
        .split(column);

    AppLayout {
        title: content[0],
        body: content[1],
        status_bar: main_chunks[1],
    }
}

pub fn practice_layout(body: Rect) -> PracticeLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress gauge
            Constraint::Min(5),    // Word card
            Constraint::Length(3), // Buttons
        ])
        .split(body);

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(rows[2]);

    PracticeLayout {
        progress: rows[0],
        word_card: rows[1],
        controls: [buttons[0], buttons[1], buttons[2]],
    }
}

pub fn upload_layout(body: Rect) -> UploadLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),    // Instructions
            Constraint::Length(3), // Path input
            Constraint::Length(3), // Key hints
        ])
        .split(body);

    UploadLayout {
        instructions: rows[0],
        input_box: rows[1],
        hints: rows[2],
    }
}
