use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Apply one event to the state. Every key press performs at most one
/// session transition; side effects come back as actions for the host.
pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::InputClosed { error } => {
            tracing::error!("terminal input closed: {}", error);
            vec![Action::Quit]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match state.screen() {
        Screen::Upload => handle_upload_key(state, key),
        Screen::Practice => handle_practice_key(state, key),
    }
}

fn handle_upload_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    state.dirty = true;
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => return vec![Action::Quit],
        KeyCode::F(2) => return vec![Action::ExportSample],
        KeyCode::Enter => {
            let path = state.input.take_text();
            if path.trim().is_empty() {
                state.error("Type the path of a CSV file first".to_string());
                return vec![];
            }
            return vec![Action::LoadFile { path }];
        }
        KeyCode::Char('w') if ctrl => state.input.delete_word_back(),
        KeyCode::Char('u') if ctrl => state.input.clear(),
        KeyCode::Char(c) if !ctrl => state.input.insert_char(c),
        KeyCode::Backspace => state.input.delete_back(),
        KeyCode::Delete => state.input.delete_forward(),
        KeyCode::Left => state.input.move_left(),
        KeyCode::Right => state.input.move_right(),
        KeyCode::Home => state.input.move_home(),
        KeyCode::End => state.input.move_end(),
        _ => {}
    }
    vec![]
}

fn handle_practice_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => return vec![Action::Quit],
        KeyCode::Left | KeyCode::Char('p') => state.session.previous(),
        KeyCode::Right | KeyCode::Char('n') => state.session.next(),
        KeyCode::Char(' ') | KeyCode::Char('s') => state.session.toggle_spelling(),
        _ => return vec![],
    }
    state.clear_notice();
    state.dirty = true;
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        let event = CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE));
        handle_event(state, AppEvent::Terminal(event))
    }

    fn practicing() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.session.load(b"word\napple\nbanana\ncherry\n").unwrap();
        state
    }

    fn current(state: &AppState) -> (String, bool) {
        let view = state.session.view().unwrap();
        (view.word.to_string(), view.spelling_visible)
    }

    #[test]
    fn test_typing_a_path_and_loading() {
        let mut state = AppState::new(AppConfig::default());
        for c in "list.csv".chars() {
            press(&mut state, KeyCode::Char(c));
        }
        press(&mut state, KeyCode::Backspace);
        press(&mut state, KeyCode::Char('v'));
        let actions = press(&mut state, KeyCode::Enter);
        assert_eq!(
            actions,
            vec![Action::LoadFile {
                path: "list.csv".into()
            }]
        );
        assert!(state.input.text.is_empty());
    }

    #[test]
    fn test_empty_path_reports_error() {
        let mut state = AppState::new(AppConfig::default());
        press(&mut state, KeyCode::Char(' '));
        assert!(press(&mut state, KeyCode::Enter).is_empty());
        assert_eq!(state.notice.unwrap().kind, NoticeKind::Error);
    }

    #[test]
    fn test_upload_keys_do_not_navigate() {
        let mut state = AppState::new(AppConfig::default());
        press(&mut state, KeyCode::Char('n'));
        press(&mut state, KeyCode::Char(' '));
        assert_eq!(state.input.text, "n ");
        assert_eq!(press(&mut state, KeyCode::F(2)), vec![Action::ExportSample]);
    }

    #[test]
    fn test_practice_navigation() {
        let mut state = practicing();
        press(&mut state, KeyCode::Right);
        assert_eq!(current(&state), ("banana".to_string(), false));
        assert_eq!(state.session.consume_pronounce().as_deref(), Some("banana"));

        press(&mut state, KeyCode::Char('n'));
        press(&mut state, KeyCode::Char('n'));
        assert_eq!(current(&state).0, "cherry");

        press(&mut state, KeyCode::Char('p'));
        press(&mut state, KeyCode::Left);
        press(&mut state, KeyCode::Left);
        assert_eq!(current(&state).0, "apple");
    }

    #[test]
    fn test_spelling_toggle_keys() {
        let mut state = practicing();
        press(&mut state, KeyCode::Char(' '));
        assert_eq!(current(&state), ("apple".to_string(), true));
        press(&mut state, KeyCode::Char('s'));
        assert_eq!(current(&state), ("apple".to_string(), false));
        assert_eq!(state.session.consume_pronounce(), None);
    }

    #[test]
    fn test_navigation_clears_notice() {
        let mut state = practicing();
        state.error("Error pronouncing word".to_string());
        press(&mut state, KeyCode::Right);
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_release_events_ignored() {
        let mut state = practicing();
        let mut key = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_event(&mut state, AppEvent::Terminal(CEvent::Key(key)));
        assert_eq!(current(&state).0, "apple");
    }

    #[test]
    fn test_quit_keys() {
        let mut state = practicing();
        assert_eq!(press(&mut state, KeyCode::Char('q')), vec![Action::Quit]);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let mut upload = AppState::new(AppConfig::default());
        assert_eq!(
            handle_event(&mut upload, AppEvent::Terminal(CEvent::Key(ctrl_c))),
            vec![Action::Quit]
        );
        assert!(upload.input.text.is_empty());
    }
}
