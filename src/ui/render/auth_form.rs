use super::Frame;
use crate::form::FormHandle;
use crate::state::{State, View};
use crate::ui::widgets::input::{Input, INPUT_HEIGHT};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

pub const BANNER: &str = r"
  _           _
 | | ___  __| | __ _  ___ _ __
 | |/ _ \/ _` |/ _` |/ _ \ '__|
 | |  __/ (_| | (_| |  __/ |
 |_|\___|\__,_|\__, |\___|_|
               |___/
";

const FORM_WIDTH: u16 = 60;

/// Render the login or registration form, whichever the current view hosts.
///
pub fn auth_form(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let view = state.current_view();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(view.title())
        .border_style(styling::active_block_border_style(theme));
    frame.render_widget(block, size);

    let Some(form) = state.active_form() else {
        return;
    };
    let fields = form.fields();

    let column = centered_column(size, FORM_WIDTH);
    let mut constraints = vec![Constraint::Length(8), Constraint::Length(2)];
    constraints.extend(fields.iter().map(|_| Constraint::Length(INPUT_HEIGHT)));
    constraints.push(Constraint::Length(2));
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(column);

    let banner = Paragraph::new(Text::from(BANNER))
        .style(styling::banner_style(theme))
        .alignment(Alignment::Center);
    frame.render_widget(banner, rows[0]);

    let heading = Paragraph::new(Line::from(Span::styled(
        view.title(),
        styling::active_block_title_style().fg(theme.primary.to_color()),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(heading, rows[1]);

    render_fields(frame, &rows[2..2 + fields.len()], form, state);

    let hint = match view {
        View::Login => "Don't have an account? Press Ctrl+R to register",
        _ => "Already registered? Press Esc to return to login",
    };
    frame.render_widget(
        Paragraph::new(hint)
            .style(styling::muted_text_style(theme))
            .alignment(Alignment::Center),
        rows[2 + fields.len()],
    );
}

fn render_fields(frame: &mut Frame, areas: &[Rect], form: &dyn FormHandle, state: &State) {
    let theme = state.get_theme();
    for (index, (spec, area)) in form.fields().iter().zip(areas).enumerate() {
        let input = Input::bound(spec, form, theme).focused(index == state.focused_field());
        frame.render_widget(input, *area);
    }
}

/// Return a column of at most `width` cells centered in `area`, inside its
/// border.
///
fn centered_column(area: Rect, width: u16) -> Rect {
    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    let width = width.min(inner.width);
    Rect {
        x: inner.x + (inner.width - width) / 2,
        width,
        ..inner
    }
}
