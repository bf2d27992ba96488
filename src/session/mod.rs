//! The practice session: a loaded word list, a cursor and two flags.
//!
//! All transitions are synchronous and total. Moving past either end of the
//! list is a silent no-op, and a failed load leaves the session untouched.
//! Pronunciation is handed out through [`Session::consume_pronounce`], which
//! yields the current word at most once per navigation.

use crate::wordlist::parser::parse_first_column;
use crate::wordlist::{LoadError, WordList};
use tracing::debug;

/// Read-only snapshot for rendering. `index` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View<'a> {
    pub word: &'a str,
    pub index: usize,
    pub total: usize,
    pub spelling_visible: bool,
}

impl View<'_> {
    /// `index / total`, always in (0, 1].
    pub fn progress(&self) -> f64 {
        self.index as f64 / self.total as f64
    }
}

#[derive(Debug, Default)]
pub struct Session {
    words: Option<WordList>,
    cursor: usize,
    spelling_visible: bool,
    pending_pronounce: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.words.is_some()
    }

    /// Parse `raw` as CSV and install its first column as the word list.
    ///
    /// The first word is not pronounced on load; only navigation arms
    /// pronunciation.
    pub fn load(&mut self, raw: &[u8]) -> Result<&WordList, LoadError> {
        if self.words.is_some() {
            return Err(LoadError::AlreadyLoaded);
        }
        let words = parse_first_column(raw)?;
        let list = WordList::new(words).ok_or(LoadError::EmptyInput)?;
        debug!(words = list.len(), "word list installed");

        self.cursor = 0;
        self.spelling_visible = false;
        self.pending_pronounce = false;
        Ok(self.words.insert(list))
    }

    pub fn next(&mut self) {
        let Some(list) = &self.words else { return };
        if self.cursor + 1 >= list.len() {
            return;
        }
        self.cursor += 1;
        self.moved();
    }

    pub fn previous(&mut self) {
        if self.words.is_none() || self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.moved();
    }

    pub fn toggle_spelling(&mut self) {
        if self.words.is_some() {
            self.spelling_visible = !self.spelling_visible;
        }
    }

    /// Take the one-shot pronunciation request, if armed.
    pub fn consume_pronounce(&mut self) -> Option<String> {
        if !self.pending_pronounce {
            return None;
        }
        self.pending_pronounce = false;
        self.current_word().map(str::to_string)
    }

    pub fn view(&self) -> Option<View<'_>> {
        let list = self.words.as_ref()?;
        Some(View {
            word: list.get(self.cursor)?,
            index: self.cursor + 1,
            total: list.len(),
            spelling_visible: self.spelling_visible,
        })
    }

    fn current_word(&self) -> Option<&str> {
        self.words.as_ref()?.get(self.cursor)
    }

    fn moved(&mut self) {
        self.spelling_visible = false;
        self.pending_pronounce = true;
        debug!(cursor = self.cursor, "cursor moved");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRUIT: &[u8] = b"word\napple\nbanana\ncherry\n";

    fn loaded(raw: &[u8]) -> Session {
        let mut session = Session::new();
        session.load(raw).unwrap();
        session
    }

    fn snapshot(session: &Session) -> (String, usize, usize, bool) {
        let v = session.view().unwrap();
        (v.word.to_string(), v.index, v.total, v.spelling_visible)
    }

    #[test]
    fn test_load_starts_at_first_word_hidden() {
        for n in 1..=5 {
            let mut raw = String::from("word\n");
            for i in 0..n {
                raw.push_str(&format!("w{}\n", i));
            }
            let session = loaded(raw.as_bytes());
            let v = session.view().unwrap();
            assert_eq!((v.word, v.index, v.total), ("w0", 1, n));
            assert!(!v.spelling_visible);
        }
    }

    #[test]
    fn test_load_does_not_arm_pronounce() {
        let mut session = loaded(FRUIT);
        assert_eq!(session.consume_pronounce(), None);
    }

    #[test]
    fn test_empty_load_installs_nothing() {
        let mut session = Session::new();
        assert!(matches!(session.load(b"word\n"), Err(LoadError::EmptyInput)));
        assert!(!session.is_loaded());
        assert!(session.view().is_none());
    }

    #[test]
    fn test_bad_input_installs_nothing() {
        let mut session = Session::new();
        assert!(matches!(
            session.load(b"word\n\xFF\xFE\n"),
            Err(LoadError::ParseFailure(_))
        ));
        assert!(!session.is_loaded());
    }

    #[test]
    fn test_second_load_is_rejected() {
        let mut session = loaded(FRUIT);
        session.next();
        let before = snapshot(&session);
        assert!(matches!(
            session.load(b"word\nzebra\n"),
            Err(LoadError::AlreadyLoaded)
        ));
        assert_eq!(snapshot(&session), before);
    }

    #[test]
    fn test_boundaries_are_no_ops() {
        let mut session = loaded(FRUIT);
        let first = snapshot(&session);
        session.previous();
        assert_eq!(snapshot(&session), first);
        assert_eq!(session.consume_pronounce(), None);

        session.next();
        session.next();
        session.consume_pronounce();
        session.toggle_spelling();
        let last = snapshot(&session);
        session.next();
        assert_eq!(snapshot(&session), last);
        assert_eq!(session.consume_pronounce(), None);
    }

    #[test]
    fn test_single_word_list_never_moves() {
        let mut session = loaded(b"word\nonly\n");
        session.next();
        session.previous();
        assert_eq!(snapshot(&session), ("only".to_string(), 1, 1, false));
        assert_eq!(session.consume_pronounce(), None);
    }

    #[test]
    fn test_navigation_hides_spelling_and_arms_once() {
        let mut session = loaded(FRUIT);
        session.toggle_spelling();
        session.next();
        assert!(!session.view().unwrap().spelling_visible);
        assert_eq!(session.consume_pronounce().as_deref(), Some("banana"));
        assert_eq!(session.consume_pronounce(), None);

        session.toggle_spelling();
        session.previous();
        assert!(!session.view().unwrap().spelling_visible);
        assert_eq!(session.consume_pronounce().as_deref(), Some("apple"));
        assert_eq!(session.consume_pronounce(), None);
    }

    #[test]
    fn test_toggle_twice_restores_and_never_arms() {
        let mut session = loaded(FRUIT);
        session.toggle_spelling();
        assert!(session.view().unwrap().spelling_visible);
        assert_eq!(session.consume_pronounce(), None);
        session.toggle_spelling();
        assert!(!session.view().unwrap().spelling_visible);
        assert_eq!(session.consume_pronounce(), None);
    }

    #[test]
    fn test_toggle_keeps_pending_pronounce() {
        let mut session = loaded(FRUIT);
        session.next();
        session.toggle_spelling();
        assert_eq!(session.consume_pronounce().as_deref(), Some("banana"));
    }

    #[test]
    fn test_fruit_walkthrough() {
        let mut session = loaded(FRUIT);
        assert_eq!(snapshot(&session), ("apple".to_string(), 1, 3, false));

        session.next();
        assert_eq!(snapshot(&session), ("banana".to_string(), 2, 3, false));
        assert_eq!(session.consume_pronounce().as_deref(), Some("banana"));

        session.next();
        assert_eq!(snapshot(&session), ("cherry".to_string(), 3, 3, false));
        session.consume_pronounce();

        session.next();
        assert_eq!(snapshot(&session), ("cherry".to_string(), 3, 3, false));
        assert_eq!(session.consume_pronounce(), None);

        session.previous();
        assert_eq!(snapshot(&session), ("banana".to_string(), 2, 3, false));
        assert_eq!(session.consume_pronounce().as_deref(), Some("banana"));
    }

    #[test]
    fn test_progress_fraction() {
        let mut session = loaded(b"word\na\nb\nc\nd\n");
        assert_eq!(session.view().unwrap().progress(), 0.25);
        session.next();
        session.next();
        session.next();
        assert_eq!(session.view().unwrap().progress(), 1.0);
    }

    #[test]
    fn test_unloaded_session_ignores_transitions() {
        let mut session = Session::new();
        session.next();
        session.previous();
        session.toggle_spelling();
        assert!(session.view().is_none());
        assert_eq!(session.consume_pronounce(), None);
    }
}
