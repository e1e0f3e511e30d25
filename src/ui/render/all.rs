use super::log::LOG_HEIGHT;
use super::{footer, log, main, Frame};
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

/// Render the whole frame according to state.
///
pub fn all(frame: &mut Frame, state: &State) {
    let log_height = if state.is_log_visible() { LOG_HEIGHT } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(log_height),
            Constraint::Length(1),
        ])
        .split(frame.size());

    main(frame, rows[0], state);
    if state.is_log_visible() {
        log(frame, rows[1], state);
    }
    footer(frame, rows[2], state);
}
