use crate::config::AppConfig;
use crate::session::Session;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Upload,
    Practice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Single-line text input with a byte-offset cursor on char boundaries.
#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_boundary();
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.next_boundary();
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn move_right(&mut self) {
        self.cursor = self.next_boundary();
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn set_text(&mut self, text: String) {
        self.text = text;
        self.cursor = self.text.len();
    }

    pub fn take_text(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters, stopping at path separators too
        while pos > 0 && !matches!(self.text.as_bytes().get(pos - 1), Some(b' ' | b'/')) {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    /// Terminal columns occupied by the text before the cursor.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].width()
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.text[self.cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor + i)
            .unwrap_or(self.text.len())
    }
}

/// Everything the UI shows, owned by the host loop and passed explicitly to
/// the handler and the renderer.
pub struct AppState {
    pub config: AppConfig,
    pub session: Session,
    pub input: InputState,
    pub notice: Option<Notice>,
    pub speaking: bool,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            session: Session::new(),
            input: InputState::new(),
            notice: None,
            speaking: false,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn screen(&self) -> Screen {
        if self.session.is_loaded() {
            Screen::Practice
        } else {
            Screen::Upload
        }
    }

    pub fn info(&mut self, text: String) {
        self.notice = Some(Notice {
            kind: NoticeKind::Info,
            text,
        });
        self.dirty = true;
    }

    pub fn error(&mut self, text: String) {
        tracing::warn!("{}", text);
        self.notice = Some(Notice {
            kind: NoticeKind::Error,
            text,
        });
        self.dirty = true;
    }

    pub fn clear_notice(&mut self) {
        if self.notice.take().is_some() {
            self.dirty = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(text: &str) -> InputState {
        let mut input = InputState::new();
        input.set_text(text.to_string());
        input
    }

    #[test]
    fn test_editing_multibyte_text() {
        let mut input = InputState::new();
        for c in "naïve".chars() {
            input.insert_char(c);
        }
        input.move_left();
        input.move_left();
        input.delete_back();
        assert_eq!(input.text, "nave");
        input.move_home();
        input.delete_forward();
        assert_eq!(input.text, "ave");
        input.move_end();
        input.insert_char('s');
        assert_eq!(input.text, "aves");
    }

    #[test]
    fn test_delete_word_back_stops_at_separator() {
        let mut input = input("~/lists/week one.csv");
        input.delete_word_back();
        assert_eq!(input.text, "~/lists/week ");
        input.delete_word_back();
        assert_eq!(input.text, "~/lists/");
    }

    #[test]
    fn test_take_text_resets_cursor() {
        let mut input = input("words.csv");
        assert_eq!(input.take_text(), "words.csv");
        assert!(input.text.is_empty());
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_cursor_column_counts_display_width() {
        let input = input("日本.csv");
        assert_eq!(input.cursor_column(), 8);
    }

    #[test]
    fn test_screen_follows_session() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(state.screen(), Screen::Upload);
        state.session.load(b"word\nbee\n").unwrap();
        assert_eq!(state.screen(), Screen::Practice);
    }
}
