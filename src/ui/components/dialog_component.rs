//! Modal system dialogs: help, logs, info and error popups.
//!
//! The add-task dialog has its own component; this one only shows read-only,
//! scrollable text on top of everything else.

use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::dialogs::{scroll_behavior::DialogScroll, system_dialogs};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub icons: IconService,
    pub scroll: DialogScroll,
    logger: Logger,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new(Logger::new())
    }
}

impl DialogComponent {
    pub fn new(logger: Logger) -> Self {
        Self {
            dialog_type: None,
            icons: IconService::default(),
            scroll: DialogScroll::default(),
            logger,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.scroll.reset();
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return Action::None;
        };

        if self.scroll.handle_key(key.code) {
            return Action::None;
        }

        match dialog_type {
            // Any other key dismisses the dialog
            DialogType::Info(_) | DialogType::Error(_) => Action::HideDialog,
            DialogType::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Action::HideDialog,
                _ => Action::None,
            },
            DialogType::Logs => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                _ => Action::None,
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.clear_dialog();
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                action
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };

        match dialog_type {
            DialogType::Info(message) => system_dialogs::render_info_dialog(
                f,
                rect,
                &self.icons,
                &message,
                self.scroll.offset,
                &mut self.scroll.state,
            ),
            DialogType::Error(message) => system_dialogs::render_error_dialog(
                f,
                rect,
                &self.icons,
                &message,
                self.scroll.offset,
                &mut self.scroll.state,
            ),
            DialogType::Help => {
                system_dialogs::render_help_dialog(f, rect, self.scroll.offset, &mut self.scroll.state)
            }
            DialogType::Logs => system_dialogs::render_logs_dialog(
                f,
                rect,
                &self.logger,
                self.scroll.offset,
                &mut self.scroll.state,
            ),
        }
    }
}
