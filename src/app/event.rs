use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// The terminal input stream failed and no more input will arrive
    InputClosed { error: String },
}
