use super::auth_form::{auth_form, BANNER};
use super::Frame;
use crate::state::{Section, State, View};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Text,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Render main widget according to state.
///
pub fn main(frame: &mut Frame, size: Rect, state: &State) {
    match state.current_view() {
        View::Login | View::Register => auth_form(frame, size, state),
        View::Main => ledger(frame, size, state),
    }
}

/// Render the signed-in landing view listing the ledger sections.
///
fn ledger(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(View::Main.title())
        .border_style(styling::active_block_border_style(theme));
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .margin(2)
        .split(size);

    let banner = Paragraph::new(Text::from(BANNER))
        .style(styling::banner_style(theme))
        .alignment(Alignment::Center);
    frame.render_widget(banner, rows[0]);

    let items: Vec<ListItem> = Section::ALL
        .iter()
        .map(|section| ListItem::new(section.title()).style(styling::normal_text_style(theme)))
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Sections")
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(list, rows[1]);
}
