/// Presentational primitives shared by the dashboard panels
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::models::Choice;

pub const PRIMARY: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const MUTED: Color = Color::Gray;
pub const FOCUS: Color = Color::Yellow;

/// Card container with a title and optional description line
pub fn card<'a>(title: &'a str, description: Option<&'a str>, focused: bool) -> Block<'a> {
    let border_style = if focused {
        Style::default().fg(FOCUS)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));

    if let Some(description) = description {
        block = block.title_bottom(Span::styled(
            format!(" {} ", description),
            Style::default().fg(MUTED),
        ));
    }

    block
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Ghost,
    Outline,
}

/// Button span: `[ label ]`, highlighted when focused
pub fn button(label: &str, variant: ButtonVariant, focused: bool) -> Span<'static> {
    let style = match variant {
        ButtonVariant::Primary => Style::default().fg(Color::White).bg(PRIMARY),
        ButtonVariant::Ghost => Style::default().fg(MUTED),
        ButtonVariant::Outline => Style::default().fg(Color::White),
    };
    let style = if focused {
        style.add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        style
    };
    Span::styled(format!("[ {} ]", label), style)
}

/// Field label, right-aligned to `width` columns
pub fn label(text: &str, width: usize) -> Span<'static> {
    Span::styled(
        format!("{:>width$} ", text, width = width),
        Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
    )
}

/// Editable single-line text buffer with a char-based cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    value: String,
    cursor: usize,
}

impl InputField {
    /// New field seeded with `initial`, cursor at the end
    pub fn new(initial: &str) -> Self {
        Self {
            value: initial.to_string(),
            cursor: initial.chars().count(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let at = self.byte_offset(self.cursor - 1);
            self.value.remove(at);
            self.cursor -= 1;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_offset(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    /// Spans for rendering; a `|` marks the cursor when focused
    pub fn spans(&self, focused: bool) -> Vec<Span<'static>> {
        let style = if focused {
            Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::White)
        };

        if !focused {
            return vec![Span::styled(self.value.clone(), style)];
        }

        let at = self.byte_offset(self.cursor);
        vec![
            Span::styled(self.value[..at].to_string(), style),
            Span::styled("|", Style::default().fg(FOCUS)),
            Span::styled(self.value[at..].to_string(), style),
        ]
    }
}

/// Dropdown analog: cycles through a fixed option list
#[derive(Debug, Clone, PartialEq)]
pub struct Select<T: Choice> {
    index: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T: Choice> Default for Select<T> {
    fn default() -> Self {
        Self {
            index: 0,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T: Choice> Select<T> {
    pub fn selected(&self) -> T {
        T::ALL[self.index]
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % T::ALL.len();
    }

    pub fn previous(&mut self) {
        self.index = if self.index == 0 {
            T::ALL.len() - 1
        } else {
            self.index - 1
        };
    }

    /// `‹ option ›` line, arrows highlighted when focused
    pub fn line(&self, focused: bool) -> Line<'static> {
        let arrow = if focused {
            Style::default().fg(FOCUS).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let value = if focused {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        Line::from(vec![
            Span::styled("‹ ", arrow),
            Span::styled(self.selected().label(), value),
            Span::styled(" ›", arrow),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReportFormat;

    #[test]
    fn test_input_editing() {
        let mut input = InputField::new("Jon");
        assert_eq!(input.cursor(), 3);

        input.move_left();
        input.insert('h');
        assert_eq!(input.value(), "John");

        input.end();
        input.backspace();
        assert_eq!(input.value(), "Joh");

        input.home();
        input.delete();
        assert_eq!(input.value(), "oh");
        assert_eq!(input.cursor(), 0);

        input.move_left();
        assert_eq!(input.cursor(), 0);
        input.end();
        input.move_right();
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_input_handles_multibyte_chars() {
        let mut input = InputField::new("né");
        input.backspace();
        assert_eq!(input.value(), "n");
        input.insert('ö');
        assert_eq!(input.value(), "nö");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_select_wraps_both_ways() {
        let mut select = Select::<ReportFormat>::default();
        assert_eq!(select.selected(), ReportFormat::Pdf);
        select.next();
        assert_eq!(select.selected(), ReportFormat::Csv);
        select.next();
        assert_eq!(select.selected(), ReportFormat::Pdf);
        select.previous();
        assert_eq!(select.selected(), ReportFormat::Csv);
    }

    #[test]
    fn test_button_label() {
        let span = button("Save changes", ButtonVariant::Primary, false);
        assert_eq!(span.content, "[ Save changes ]");
    }
}
