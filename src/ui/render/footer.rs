use super::Frame;
use crate::state::{State, Status, View};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the key hints for the given view.
///
fn hotkeys_for_view(view: View) -> &'static str {
    match view {
        View::Login => " Tab/Shift+Tab: fields | Enter: login | Ctrl+R: register | Ctrl+L: log | Ctrl+C: quit",
        View::Register => " Tab/Shift+Tab: fields | Enter: register | Esc: back | Ctrl+L: log | Ctrl+C: quit",
        View::Main => " Ctrl+L: log | q: quit",
    }
}

/// Render footer with key hints and the last submission status.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let mut spans = vec![Span::styled(
        hotkeys_for_view(state.current_view()),
        styling::muted_text_style(theme),
    )];
    if let Some(status) = state.status() {
        let style = match status {
            Status::Submitted(_) => styling::success_text_style(theme),
            Status::Invalid(_) => styling::error_text_style(theme),
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(status.text(), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), size);
}
