//! Labelled text input with an inline error line.

use crate::form::{FieldSpec, FormHandle};
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Rows taken by one input: the bordered field plus its error line.
///
pub const INPUT_HEIGHT: u16 = 4;

/// Stateless rendering of one bound field.
///
pub struct Input<'a> {
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    secret: bool,
    focused: bool,
    error: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> Input<'a> {
    pub fn new(label: &'a str, value: &'a str, theme: &'a Theme) -> Self {
        Input {
            label,
            value,
            placeholder: "",
            secret: false,
            focused: false,
            error: None,
            theme,
        }
    }

    /// Build the input for `spec` from the form's current value and error.
    ///
    pub fn bound(spec: &'a FieldSpec, form: &'a dyn FormHandle, theme: &'a Theme) -> Self {
        Input::new(spec.label, form.value(spec.name), theme)
            .placeholder(spec.placeholder)
            .secret(spec.secret)
            .error(form.error(spec.name))
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn secret(mut self, secret: bool) -> Self {
        self.secret = secret;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    fn display_value(&self) -> String {
        if self.secret {
            "*".repeat(self.value.chars().count())
        } else {
            self.value.to_string()
        }
    }
}

impl Widget for Input<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);

        let border_style = if self.error.is_some() {
            styling::error_block_border_style(self.theme)
        } else if self.focused {
            styling::active_block_border_style(self.theme)
        } else {
            styling::normal_block_border_style(self.theme)
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(self.label)
            .border_style(border_style);
        if self.focused {
            block = block.title_style(styling::active_block_title_style());
        }

        let field = if self.value.is_empty() {
            Paragraph::new(self.placeholder).style(styling::muted_text_style(self.theme))
        } else {
            Paragraph::new(self.display_value()).style(styling::normal_text_style(self.theme))
        };
        field.block(block).render(chunks[0], buf);

        if let Some(error) = self.error {
            Paragraph::new(error)
                .style(styling::error_text_style(self.theme))
                .render(chunks[1], buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(input: Input<'_>, width: u16) -> Buffer {
        let backend = TestBackend::new(width, INPUT_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| frame.render_widget(input, frame.size()))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.get(x, y).symbol().to_string())
            .collect()
    }

    #[test]
    fn renders_label_and_value() {
        let theme = Theme::default();
        let buf = render(Input::new("Email", "a@b.com", &theme), 20);
        assert!(row(&buf, 0).contains("Email"));
        assert!(row(&buf, 1).contains("a@b.com"));
        assert_eq!(row(&buf, 3).trim(), "");
    }

    #[test]
    fn masks_secret_values() {
        let theme = Theme::default();
        let buf = render(Input::new("Password", "Aa1$", &theme).secret(true), 20);
        assert!(row(&buf, 1).contains("****"));
        assert!(!row(&buf, 1).contains("Aa1$"));
    }

    #[test]
    fn shows_placeholder_when_empty() {
        let theme = Theme::default();
        let buf = render(
            Input::new("Name", "", &theme).placeholder("Your name"),
            20,
        );
        assert!(row(&buf, 1).contains("Your name"));
    }

    #[test]
    fn renders_error_beneath_field() {
        let theme = Theme::default();
        let buf = render(
            Input::new("Email", "x", &theme).error(Some("Enter a valid email")),
            30,
        );
        assert!(row(&buf, 3).contains("Enter a valid email"));
        assert_eq!(buf.get(0, 3).fg, theme.error.to_color());
        assert_eq!(buf.get(0, 0).fg, theme.error.to_color());
    }

    #[test]
    fn focused_border_uses_active_color() {
        let theme = Theme::default();
        let buf = render(Input::new("Email", "", &theme).focused(true), 20);
        assert_eq!(buf.get(0, 0).fg, theme.border_active.to_color());
    }
}
