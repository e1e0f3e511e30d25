use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Rows taken by the log pane, borders included.
///
pub const LOG_HEIGHT: u16 = 7;

/// Render the most recent log entries that fit in `size`.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .title("Log (Ctrl+L to hide)")
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));

    let rows = size.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = state
        .log_entries(rows)
        .into_iter()
        .map(|entry| {
            let style = if entry.contains(" ERROR ") || entry.contains(" WARN ") {
                styling::error_text_style(theme)
            } else {
                styling::muted_text_style(theme)
            };
            ListItem::new(Line::from(vec![Span::styled(entry, style)]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), size);
}
