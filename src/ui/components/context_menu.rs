//! Popup menu listing the task panel commands.

use crate::constants::{
    MENU_COLLAPSE_ALL, MENU_COPY_DOWNLOAD, MENU_COPY_NAME, MENU_COPY_SCRIPT, MENU_COPY_SOURCE, MENU_DOWNLOAD,
    MENU_EXPAND_ALL, MENU_PREVIEW, MENU_REMOVE, MENU_RESIZE_COLUMNS,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState},
    Frame,
};

/// Everything the task panel can do to the current row or selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelCommand {
    Preview,
    Download,
    RemoveSelected,
    CopyDownloadAddress,
    CopySourceAddress,
    CopyTaskName,
    CopyAsScript,
    CollapseAll,
    ExpandAll,
    ResizeColumns,
}

impl PanelCommand {
    /// Menu order; `None` entries are separators.
    pub const MENU: [Option<PanelCommand>; 13] = [
        Some(PanelCommand::Preview),
        Some(PanelCommand::Download),
        None,
        Some(PanelCommand::RemoveSelected),
        None,
        Some(PanelCommand::CopyDownloadAddress),
        Some(PanelCommand::CopySourceAddress),
        Some(PanelCommand::CopyTaskName),
        Some(PanelCommand::CopyAsScript),
        None,
        Some(PanelCommand::CollapseAll),
        Some(PanelCommand::ExpandAll),
        Some(PanelCommand::ResizeColumns),
    ];

    pub fn label(self) -> &'static str {
        match self {
            PanelCommand::Preview => MENU_PREVIEW,
            PanelCommand::Download => MENU_DOWNLOAD,
            PanelCommand::RemoveSelected => MENU_REMOVE,
            PanelCommand::CopyDownloadAddress => MENU_COPY_DOWNLOAD,
            PanelCommand::CopySourceAddress => MENU_COPY_SOURCE,
            PanelCommand::CopyTaskName => MENU_COPY_NAME,
            PanelCommand::CopyAsScript => MENU_COPY_SCRIPT,
            PanelCommand::CollapseAll => MENU_COLLAPSE_ALL,
            PanelCommand::ExpandAll => MENU_EXPAND_ALL,
            PanelCommand::ResizeColumns => MENU_RESIZE_COLUMNS,
        }
    }

    /// Key shown next to the entry; the panel binds the same keys.
    pub fn shortcut(self) -> &'static str {
        match self {
            PanelCommand::Preview => "p",
            PanelCommand::Download => "d",
            PanelCommand::RemoveSelected => "Del",
            PanelCommand::CopyDownloadAddress => "y",
            PanelCommand::CopySourceAddress => "Y",
            PanelCommand::CopyTaskName => "n",
            PanelCommand::CopyAsScript => "s",
            PanelCommand::CollapseAll => "-",
            PanelCommand::ExpandAll => "+",
            PanelCommand::ResizeColumns => "w",
        }
    }
}

#[derive(Debug, Default)]
pub struct ContextMenu {
    visible: bool,
    /// Index into [`PanelCommand::MENU`], always on a command entry
    selected: usize,
    list_state: ListState,
}

impl ContextMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn open(&mut self) {
        self.visible = true;
        self.selected = 0;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn selected_command(&self) -> Option<PanelCommand> {
        PanelCommand::MENU.get(self.selected).copied().flatten()
    }

    fn step(&mut self, forward: bool) {
        let len = PanelCommand::MENU.len();
        let mut index = self.selected;
        loop {
            index = if forward { (index + 1) % len } else { (index + len - 1) % len };
            if PanelCommand::MENU[index].is_some() {
                break;
            }
        }
        self.selected = index;
    }

    /// Returns the command chosen with Enter; the menu closes on Enter and Esc.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<PanelCommand> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.step(false),
            KeyCode::Down | KeyCode::Char('j') => self.step(true),
            KeyCode::Enter => {
                self.close();
                return self.selected_command();
            }
            KeyCode::Esc | KeyCode::Char('m') => self.close(),
            _ => {}
        }
        None
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        if !self.visible {
            return;
        }

        let height = PanelCommand::MENU.len() as u16 + 2;
        let menu_area = LayoutManager::centered_rect_lines(40, height, area);
        f.render_widget(Clear, menu_area);

        let items: Vec<ListItem> = PanelCommand::MENU
            .iter()
            .map(|entry| match entry {
                Some(command) => ListItem::new(Line::from(vec![
                    Span::styled(format!("{:>4}  ", command.shortcut()), Style::default().fg(Color::Cyan)),
                    Span::raw(command.label()),
                ])),
                None => ListItem::new(Line::from(Span::styled(
                    "─".repeat(menu_area.width.saturating_sub(2) as usize),
                    Style::default().fg(Color::DarkGray),
                ))),
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Actions ")
                    .style(Style::default().fg(Color::White)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        self.list_state.select(Some(self.selected));
        f.render_stateful_widget(list, menu_area, &mut self.list_state);
    }
}
