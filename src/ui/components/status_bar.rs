//! Status bar component

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Numbers shown on the right side of the status bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo {
    pub visible_tasks: usize,
    pub total_tasks: usize,
    pub selected: usize,
    pub quick_view: bool,
}

/// One-line bar below the task list: a transient message or key hints on the left, counts on the right.
#[derive(Debug, Default)]
pub struct StatusBar {
    message: Option<(String, bool)>,
}

const HINTS: &str = "a: add • r: refresh • m: menu • Ctrl+F: filter • ?: help • q: quit";

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some((message.into(), false));
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.message = Some((message.into(), true));
    }

    pub fn clear(&mut self) {
        self.message = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_ref().map(|(text, _)| text.as_str())
    }

    pub fn render(&self, f: &mut Frame, area: Rect, info: &StatusInfo) {
        let counts = format!(
            "{}/{} tasks • {} selected • quick view {} ",
            info.visible_tasks,
            info.total_tasks,
            info.selected,
            if info.quick_view { "on" } else { "off" }
        );
        let chunks =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(counts.chars().count() as u16)]).split(area);

        let left = match &self.message {
            Some((text, true)) => Span::styled(format!(" {}", text), Style::default().fg(Color::Red)),
            Some((text, false)) => Span::styled(format!(" {}", text), Style::default().fg(Color::Yellow)),
            None => Span::styled(format!(" {}", HINTS), Style::default().fg(Color::Gray)),
        };

        f.render_widget(Paragraph::new(Line::from(left)), chunks[0]);
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(counts, Style::default().fg(Color::Gray)))),
            chunks[1],
        );
    }
}
