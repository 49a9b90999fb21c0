//! Task list panel.
//!
//! Shows the remote tasks as a two column tree (size, name) over a filtered
//! projection of [`TaskTreeModel`]. The cursor and the selection live in view
//! coordinates and are carried across every re-projection through the source
//! model, so filtering never changes which task they point at.

use crate::config::PanelConfig;
use crate::constants::{DOUBLE_CLICK_MILLIS, EMPTY_TASK_LIST, HEADER_NAME, HEADER_SIZE, UNRESOLVED_ROW_COLOR};
use crate::constants::{SIZE_COLUMN_DEFAULT_WIDTH, SIZE_COLUMN_MAX_WIDTH, SIZE_COLUMN_MIN_WIDTH};
use crate::core::{BitorrentSubTask, LinkAction, RemoteTask, TaskLink};
use crate::icons::IconService;
use crate::ui::components::context_menu::{ContextMenu, PanelCommand};
use crate::ui::components::dialogs::common::create_input_paragraph;
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crate::ui::model::{FilterProxy, RowRef, TaskTreeModel};
use crate::utils::color::parse_hex_color;
use crate::utils::format::render_script;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use std::collections::{BTreeSet, HashSet};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Tree,
    Filter,
}

pub struct TaskPanelComponent {
    model: TaskTreeModel,
    proxy: FilterProxy,
    config: PanelConfig,
    filter_visible: bool,
    focus: Focus,
    /// Ctrl+F on a visible filter selects its text; the next keystroke replaces it
    filter_text_selected: bool,
    cursor: Option<RowRef>,
    selection: BTreeSet<RowRef>,
    /// Task ids of expanded containers
    expanded: HashSet<String>,
    size_column_width: u16,
    quick_view: bool,
    gdriveid: String,
    menu: ContextMenu,
    pub icons: IconService,
    table_state: TableState,
    tree_area: Rect,
    filter_area: Option<Rect>,
    last_click: Option<(RowRef, Instant)>,
}

impl Default for TaskPanelComponent {
    fn default() -> Self {
        Self::new(PanelConfig::default())
    }
}

impl TaskPanelComponent {
    pub fn new(config: PanelConfig) -> Self {
        Self {
            model: TaskTreeModel::new(),
            proxy: FilterProxy::new(config.filter_mode),
            config,
            filter_visible: false,
            focus: Focus::Tree,
            filter_text_selected: false,
            cursor: None,
            selection: BTreeSet::new(),
            expanded: HashSet::new(),
            size_column_width: SIZE_COLUMN_DEFAULT_WIDTH,
            quick_view: true,
            gdriveid: String::new(),
            menu: ContextMenu::new(),
            icons: IconService::default(),
            table_state: TableState::default(),
            tree_area: Rect::default(),
            filter_area: None,
            last_click: None,
        }
    }

    pub fn model(&self) -> &TaskTreeModel {
        &self.model
    }

    pub fn proxy(&self) -> &FilterProxy {
        &self.proxy
    }

    // ---- Population -------------------------------------------------------

    /// Replace the whole task list.
    pub fn set_cloud_tasks(&mut self, tasks: &[RemoteTask]) {
        self.model.set_tasks(tasks);
        self.proxy.invalidate(&self.model);
        self.expanded.clear();
        self.selection.clear();
        self.last_click = None;
        self.table_state = TableState::default();
        self.cursor = (self.proxy.row_count() > 0).then_some(RowRef::Top(0));
        self.resize_size_column();
        log::info!("TaskPanel: Showing {} tasks", self.model.len());
    }

    /// Attach sub-files to the container registered as `container_id`.
    pub fn set_bt_sub_tasks(&mut self, container_id: &str, subtasks: &[BitorrentSubTask]) {
        if self.model.append_sub_tasks(container_id, subtasks) {
            self.reproject();
        }
    }

    /// Delete rows the core confirmed as removed (source indices).
    pub fn remove_rows(&mut self, rows: &[usize]) {
        let (cursor, selection) = self.selection_to_source();

        let removed = self.model.remove_rows(rows);
        if removed == 0 {
            log::debug!("TaskPanel: Nothing to remove for rows {:?}", rows);
            return;
        }

        let mut gone = rows.to_vec();
        gone.sort_unstable();
        gone.dedup();
        let shift = |at: RowRef| -> Option<RowRef> {
            let top = at.top_row();
            if gone.binary_search(&top).is_ok() {
                return None;
            }
            let top = top - gone.iter().take_while(|&&row| row < top).count();
            Some(match at {
                RowRef::Top(_) => RowRef::Top(top),
                RowRef::Child { row, .. } => RowRef::Child { parent: top, row },
            })
        };

        self.proxy.invalidate(&self.model);
        self.restore_selection(cursor.and_then(shift), selection.into_iter().filter_map(shift).collect());
        log::info!("TaskPanel: Removed {} rows", removed);
    }

    /// Session cookie used by "Copy as Script".
    pub fn set_gdriveid(&mut self, gdriveid: &str) {
        self.gdriveid = gdriveid.to_string();
    }

    pub fn set_quick_view_mode(&mut self, enabled: bool) {
        self.quick_view = enabled;
    }

    pub fn quick_view_mode(&self) -> bool {
        self.quick_view
    }

    pub fn set_size_column_width(&mut self, width: u16) {
        self.size_column_width = width.clamp(SIZE_COLUMN_MIN_WIDTH, SIZE_COLUMN_MAX_WIDTH);
    }

    pub fn size_column_width(&self) -> u16 {
        self.size_column_width
    }

    // ---- Filter -----------------------------------------------------------

    /// Apply `text` as the live filter.
    pub fn set_filter_text(&mut self, text: &str) {
        let (cursor, selection) = self.selection_to_source();
        self.proxy.set_filter_text(text, &self.model);
        self.restore_selection(cursor, selection);
    }

    pub fn filter_text(&self) -> &str {
        self.proxy.filter().text()
    }

    pub fn is_filter_visible(&self) -> bool {
        self.filter_visible
    }

    pub fn is_filter_focused(&self) -> bool {
        self.focus == Focus::Filter
    }

    /// Ctrl+F: reveal and focus the filter, or select its text when already shown.
    pub fn show_filter(&mut self) {
        if self.filter_visible {
            self.filter_text_selected = true;
        } else {
            self.filter_visible = true;
        }
        self.focus = Focus::Filter;
    }

    /// Hide the filter bar; the filter itself stays applied.
    pub fn hide_filter(&mut self) {
        self.filter_visible = false;
        self.filter_text_selected = false;
        self.focus = Focus::Tree;
    }

    /// Empty the filter text and hide the bar.
    pub fn clear_filter(&mut self) {
        self.set_filter_text("");
        self.hide_filter();
    }

    /// True while key presses are meant for the filter box or the menu.
    pub fn captures_input(&self) -> bool {
        self.focus == Focus::Filter || self.menu.is_visible()
    }

    pub fn is_menu_visible(&self) -> bool {
        self.menu.is_visible()
    }

    pub fn open_menu(&mut self) {
        self.menu.open();
    }

    // ---- Cursor, selection, expansion ---------------------------------------

    fn selection_to_source(&self) -> (Option<RowRef>, Vec<RowRef>) {
        let cursor = self.cursor.and_then(|at| self.proxy.map_to_source(at));
        let selection = self
            .selection
            .iter()
            .filter_map(|&at| self.proxy.map_to_source(at))
            .collect();
        (cursor, selection)
    }

    fn restore_selection(&mut self, cursor: Option<RowRef>, selection: Vec<RowRef>) {
        self.selection = selection
            .into_iter()
            .filter_map(|at| self.proxy.map_from_source(at))
            .collect();
        self.cursor = cursor
            .and_then(|at| self.proxy.map_from_source(at))
            .or_else(|| (self.proxy.row_count() > 0).then_some(RowRef::Top(0)));
        self.keep_cursor_on_visible_line();
    }

    fn reproject(&mut self) {
        let (cursor, selection) = self.selection_to_source();
        self.proxy.invalidate(&self.model);
        self.restore_selection(cursor, selection);
    }

    fn keep_cursor_on_visible_line(&mut self) {
        if let Some(RowRef::Child { parent, .. }) = self.cursor {
            if !self.is_expanded(parent) {
                self.cursor = Some(RowRef::Top(parent));
            }
        }
    }

    /// Every line currently drawn, in view coordinates.
    pub fn visible_rows(&self) -> Vec<RowRef> {
        let mut lines = Vec::new();
        for row in 0..self.proxy.row_count() {
            lines.push(RowRef::Top(row));
            if self.is_expanded(row) {
                lines.extend((0..self.proxy.child_count(row)).map(|child| RowRef::Child { parent: row, row: child }));
            }
        }
        lines
    }

    fn container_id(&self, view_row: usize) -> Option<&str> {
        let source = self.proxy.map_to_source(RowRef::Top(view_row))?;
        self.model.task_id_at(source)
    }

    pub fn is_expanded(&self, view_row: usize) -> bool {
        self.container_id(view_row).is_some_and(|id| self.expanded.contains(id))
    }

    pub fn expand(&mut self, view_row: usize) {
        let has_children = self
            .proxy
            .map_to_source(RowRef::Top(view_row))
            .and_then(|source| self.model.row(source.top_row()))
            .is_some_and(|row| !row.children.is_empty());
        if !has_children {
            return;
        }
        if let Some(id) = self.container_id(view_row).map(str::to_string) {
            self.expanded.insert(id);
            self.resize_size_column();
        }
    }

    pub fn collapse(&mut self, view_row: usize) {
        if let Some(id) = self.container_id(view_row).map(str::to_string) {
            self.expanded.remove(&id);
            self.keep_cursor_on_visible_line();
        }
    }

    pub fn expand_all(&mut self) {
        self.expanded = self
            .model
            .rows()
            .iter()
            .filter(|row| !row.children.is_empty())
            .map(|row| row.meta.task_id.clone())
            .collect();
        self.resize_size_column();
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
        self.keep_cursor_on_visible_line();
    }

    pub fn cursor(&self) -> Option<RowRef> {
        self.cursor
    }

    /// Move the cursor to a view row. Returns false when `at` is not a visible line.
    pub fn set_cursor(&mut self, at: RowRef) -> bool {
        if !self.visible_rows().contains(&at) {
            return false;
        }
        self.cursor = Some(at);
        true
    }

    pub fn selection(&self) -> &BTreeSet<RowRef> {
        &self.selection
    }

    pub fn select_only(&mut self, at: RowRef) {
        self.selection.clear();
        self.selection.insert(at);
    }

    pub fn toggle_selection(&mut self, at: RowRef) {
        if !self.selection.remove(&at) {
            self.selection.insert(at);
        }
    }

    pub fn select_all(&mut self) {
        self.selection = self.visible_rows().into_iter().collect();
    }

    fn move_cursor(&mut self, delta: isize, extend: bool) {
        let lines = self.visible_rows();
        if lines.is_empty() {
            self.cursor = None;
            return;
        }

        let current = self
            .cursor
            .and_then(|at| lines.iter().position(|&line| line == at))
            .unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(lines.len() - 1);
        let at = lines[next];
        self.cursor = Some(at);

        if extend {
            self.selection.insert(lines[current]);
            self.selection.insert(at);
        } else {
            self.select_only(at);
        }
    }

    fn move_cursor_to(&mut self, last: bool) {
        let lines = self.visible_rows();
        let at = if last { lines.last() } else { lines.first() };
        if let Some(&at) = at {
            self.cursor = Some(at);
            self.select_only(at);
        }
    }

    // ---- Queries ------------------------------------------------------------

    fn current_source(&self) -> Option<RowRef> {
        self.proxy.map_to_source(self.cursor?)
    }

    /// Download URL and name of the row under the cursor, resolved through the filter.
    pub fn first_selected_task(&self) -> Option<TaskLink> {
        let source = self.current_source()?;
        Some(TaskLink {
            url: self.model.link_at(source)?.to_string(),
            name: self.model.name_at(source)?.to_string(),
        })
    }

    /// Ids and source rows of the selected top-level tasks. Sub-file rows are skipped.
    pub fn selected_task_ids_and_rows(&self) -> (Vec<String>, Vec<usize>) {
        let mut ids = Vec::new();
        let mut rows = Vec::new();

        for &at in self.selection.iter().filter(|at| !at.is_child()) {
            let Some(source) = self.proxy.map_to_source(at) else {
                continue;
            };
            if let Some(id) = self.model.task_id_at(source) {
                ids.push(id.to_string());
                rows.push(source.top_row());
            }
        }

        (ids, rows)
    }

    fn current_link(&self) -> Option<&str> {
        self.model.link_at(self.current_source()?)
    }

    fn current_name(&self) -> Option<&str> {
        self.model.name_at(self.current_source()?)
    }

    fn current_source_url(&self) -> Option<&str> {
        self.model.source_at(self.current_source()?)
    }

    /// Downloader command for the current row, or `None` when it has no name or link yet.
    pub fn script_for_current(&self) -> Option<String> {
        let name = self.current_name().filter(|name| !name.is_empty())?;
        let link = self.current_link().filter(|link| !link.is_empty())?;
        Some(render_script(&self.config.script_template, &self.gdriveid, name, link))
    }

    // ---- Commands -----------------------------------------------------------

    pub fn run_command(&mut self, command: PanelCommand) -> Action {
        log::debug!("TaskPanel: Running {:?}", command);
        match command {
            PanelCommand::Preview => self.open_current(LinkAction::Preview),
            PanelCommand::Download => self.open_current(LinkAction::Download),
            PanelCommand::RemoveSelected => {
                let (ids, rows) = self.selected_task_ids_and_rows();
                if ids.is_empty() {
                    Action::None
                } else {
                    log::info!("TaskPanel: Requesting removal of {:?}", ids);
                    Action::RequestRemove { ids, rows }
                }
            }
            PanelCommand::CopyDownloadAddress => copy_non_empty(self.current_link()),
            PanelCommand::CopySourceAddress => copy_non_empty(self.current_source_url()),
            PanelCommand::CopyTaskName => copy_non_empty(self.current_name()),
            PanelCommand::CopyAsScript => self.script_for_current().map_or(Action::None, Action::CopyToClipboard),
            PanelCommand::CollapseAll => {
                self.collapse_all();
                Action::None
            }
            PanelCommand::ExpandAll => {
                self.expand_all();
                Action::None
            }
            PanelCommand::ResizeColumns => {
                self.resize_columns_to_contents();
                Action::None
            }
        }
    }

    fn open_current(&self, action: LinkAction) -> Action {
        if !matches!(self.current_link(), Some(link) if !link.is_empty()) {
            return Action::None;
        }
        match self.first_selected_task() {
            Some(task) => Action::OpenLink {
                task,
                action,
                forced: false,
            },
            None => Action::None,
        }
    }

    /// Enter or double click: hand the current task to the core's classifier.
    pub fn quick_action(&self) -> Action {
        if !self.quick_view {
            return Action::None;
        }
        self.first_selected_task().map_or(Action::None, Action::QuickView)
    }

    /// Fit the size column to the widest visible size cell.
    pub fn resize_columns_to_contents(&mut self) {
        self.resize_size_column();
    }

    fn resize_size_column(&mut self) {
        let widest = self
            .visible_rows()
            .into_iter()
            .map(|at| Span::raw(self.size_cell_text(at)).width())
            .max()
            .unwrap_or(0)
            .max(HEADER_SIZE.len()) as u16;
        self.size_column_width = (widest + 1).clamp(SIZE_COLUMN_MIN_WIDTH, SIZE_COLUMN_MAX_WIDTH);
    }

    // ---- Rendering helpers --------------------------------------------------

    fn size_cell_text(&self, at: RowRef) -> String {
        let Some(source) = self.proxy.map_to_source(at) else {
            return String::new();
        };
        match source {
            RowRef::Top(row) => self
                .model
                .row(row)
                .map(|row| format!("{} {}", self.icons.file(row.file_kind), row.size_text))
                .unwrap_or_default(),
            RowRef::Child { parent, row } => self
                .model
                .child(parent, row)
                .map(|row| format!("{} {}", self.icons.file(row.file_kind), row.size_text))
                .unwrap_or_default(),
        }
    }

    fn build_row(&self, at: RowRef) -> Option<Row<'static>> {
        let source = self.proxy.map_to_source(at)?;
        let selected = self.icons.selection_marker(self.selection.contains(&at));

        let (name, highlight) = match source {
            RowRef::Top(row) => {
                let row = self.model.row(row)?;
                let marker = if row.children.is_empty() {
                    " "
                } else {
                    self.icons.tree_marker(self.is_expanded(at.top_row()))
                };
                (format!("{} {} {}", selected, marker, row.name), row.highlight)
            }
            RowRef::Child { parent, row } => {
                let row = self.model.child(parent, row)?;
                (format!("{}     {}", selected, row.name), row.highlight)
            }
        };

        let name_style = if highlight {
            Style::default().bg(parse_hex_color(UNRESOLVED_ROW_COLOR)).fg(Color::Black)
        } else {
            Style::default()
        };

        Some(Row::new(vec![
            Cell::from(self.size_cell_text(at)),
            Cell::from(Span::styled(name, name_style)),
        ]))
    }

    fn row_at(&self, column: u16, line: u16) -> Option<RowRef> {
        let area = self.tree_area;
        let first = area.y + 2;
        let last = area.y + area.height.saturating_sub(1);
        if column <= area.x || column >= area.x + area.width.saturating_sub(1) || line < first || line >= last {
            return None;
        }
        let index = self.table_state.offset() + (line - first) as usize;
        self.visible_rows().get(index).copied()
    }

    fn handle_filter_key(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.hide_filter(),
            KeyCode::Char('u') if ctrl => self.clear_filter(),
            KeyCode::Char('f') if ctrl => self.filter_text_selected = true,
            KeyCode::Enter | KeyCode::Down | KeyCode::Tab => {
                self.focus = Focus::Tree;
                self.filter_text_selected = false;
            }
            KeyCode::Backspace => {
                let text = if self.filter_text_selected {
                    String::new()
                } else {
                    let mut text = self.filter_text().to_string();
                    text.pop();
                    text
                };
                self.filter_text_selected = false;
                self.set_filter_text(&text);
            }
            KeyCode::Char(c) if !ctrl => {
                let text = if self.filter_text_selected {
                    c.to_string()
                } else {
                    format!("{}{}", self.filter_text(), c)
                };
                self.filter_text_selected = false;
                self.set_filter_text(&text);
            }
            _ => {}
        }
        Action::None
    }

    fn render_filter_bar(&self, f: &mut Frame, area: Rect) {
        let title = format!(
            "{} Filter ({}) - Esc hide, Ctrl+U clear",
            self.icons.filter(),
            self.proxy.filter().mode().label()
        );
        let mut input = create_input_paragraph(self.filter_text(), &title, self.is_filter_focused());
        if self.filter_text_selected {
            input = input.style(Style::default().fg(Color::Black).bg(Color::White));
        }
        f.render_widget(input, area);
    }
}

fn copy_non_empty(value: Option<&str>) -> Action {
    match value {
        Some(value) if !value.is_empty() => Action::CopyToClipboard(value.to_string()),
        _ => Action::None,
    }
}

impl Component for TaskPanelComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.menu.is_visible() {
            return match self.menu.handle_key(key) {
                Some(command) => self.run_command(command),
                None => Action::None,
            };
        }

        if self.focus == Focus::Filter {
            return self.handle_filter_key(key);
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Char('f') if ctrl => self.show_filter(),
            KeyCode::Char('u') if ctrl => self.clear_filter(),
            KeyCode::Char('a') if ctrl => self.select_all(),
            _ if ctrl => {}
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, shift),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, shift),
            KeyCode::PageUp => self.move_cursor(-10, shift),
            KeyCode::PageDown => self.move_cursor(10, shift),
            KeyCode::Home => self.move_cursor_to(false),
            KeyCode::End => self.move_cursor_to(true),
            KeyCode::Left | KeyCode::Char('h') => {
                if let Some(at) = self.cursor {
                    self.collapse(at.top_row());
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if let Some(at) = self.cursor {
                    self.expand(at.top_row());
                }
            }
            KeyCode::Char(' ') => {
                if let Some(at) = self.cursor {
                    self.toggle_selection(at);
                }
            }
            KeyCode::Enter => return self.quick_action(),
            KeyCode::Esc if self.filter_visible => self.hide_filter(),
            KeyCode::Char('m') | KeyCode::Menu => self.open_menu(),
            KeyCode::Char('p') => return self.run_command(PanelCommand::Preview),
            KeyCode::Char('d') => return self.run_command(PanelCommand::Download),
            KeyCode::Delete | KeyCode::Char('x') => return self.run_command(PanelCommand::RemoveSelected),
            KeyCode::Char('y') => return self.run_command(PanelCommand::CopyDownloadAddress),
            KeyCode::Char('Y') => return self.run_command(PanelCommand::CopySourceAddress),
            KeyCode::Char('n') => return self.run_command(PanelCommand::CopyTaskName),
            KeyCode::Char('s') => return self.run_command(PanelCommand::CopyAsScript),
            KeyCode::Char('-') => return self.run_command(PanelCommand::CollapseAll),
            KeyCode::Char('+') | KeyCode::Char('=') => return self.run_command(PanelCommand::ExpandAll),
            KeyCode::Char('w') => return self.run_command(PanelCommand::ResizeColumns),
            _ => {}
        }
        Action::None
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if self.menu.is_visible() {
            if matches!(mouse.kind, MouseEventKind::Down(_)) {
                self.menu.close();
            }
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::ScrollUp => self.move_cursor(-1, false),
            MouseEventKind::ScrollDown => self.move_cursor(1, false),
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(at) = self.row_at(mouse.column, mouse.row) {
                    self.focus = Focus::Tree;
                    self.cursor = Some(at);
                    if mouse.modifiers.contains(KeyModifiers::CONTROL) {
                        self.toggle_selection(at);
                    } else {
                        self.select_only(at);
                    }

                    let now = Instant::now();
                    let double_click = matches!(
                        self.last_click,
                        Some((previous, when)) if previous == at
                            && now.duration_since(when).as_millis() <= DOUBLE_CLICK_MILLIS
                    );
                    if double_click {
                        self.last_click = None;
                        return self.quick_action();
                    }
                    self.last_click = Some((at, now));
                } else if let Some(area) = self.filter_area {
                    let inside = mouse.column >= area.x
                        && mouse.column < area.x + area.width
                        && mouse.row >= area.y
                        && mouse.row < area.y + area.height;
                    if inside {
                        self.focus = Focus::Filter;
                    }
                }
            }
            MouseEventKind::Down(MouseButton::Right) => {
                if let Some(at) = self.row_at(mouse.column, mouse.row) {
                    self.cursor = Some(at);
                    if !self.selection.contains(&at) {
                        self.select_only(at);
                    }
                }
                self.open_menu();
            }
            _ => {}
        }
        Action::None
    }

    fn handle_paste(&mut self, text: &str) -> Action {
        if self.focus == Focus::Filter {
            let line = text.lines().next().unwrap_or_default();
            let text = if self.filter_text_selected {
                line.to_string()
            } else {
                format!("{}{}", self.filter_text(), line)
            };
            self.filter_text_selected = false;
            self.set_filter_text(&text);
        }
        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.resize_size_column();
                action
            }
            Action::ToggleQuickView => {
                self.quick_view = !self.quick_view;
                log::info!("TaskPanel: Quick view {}", if self.quick_view { "on" } else { "off" });
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (tree_area, filter_area) = LayoutManager::panel_layout(rect, self.filter_visible);
        self.tree_area = tree_area;
        self.filter_area = filter_area;

        let mut title = format!(
            " {} Tasks ({}/{}) ",
            self.icons.tasks_title(),
            self.proxy.row_count(),
            self.model.len()
        );
        if !self.filter_visible && self.proxy.filter().is_active() {
            title.push_str(&format!("[{} {}] ", self.icons.filter(), self.filter_text()));
        }
        let block = Block::default().borders(Borders::ALL).title(title);

        let lines = self.visible_rows();
        if lines.is_empty() {
            let message = if self.model.is_empty() {
                EMPTY_TASK_LIST
            } else {
                "No task matches the filter. Press Ctrl+U to clear it."
            };
            let empty = Line::from(Span::styled(message, Style::default().fg(Color::Gray)));
            f.render_widget(Paragraph::new(empty).block(block), tree_area);
        } else {
            let rows: Vec<Row> = lines.iter().filter_map(|&at| self.build_row(at)).collect();
            let header = Row::new(vec![HEADER_SIZE, HEADER_NAME])
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
            let widths = [Constraint::Length(self.size_column_width), Constraint::Min(10)];

            let table = Table::new(rows, widths)
                .header(header)
                .block(block)
                .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

            let position = self.cursor.and_then(|at| lines.iter().position(|&line| line == at));
            self.table_state.select(position);
            f.render_stateful_widget(table, tree_area, &mut self.table_state);
        }

        if let Some(area) = filter_area {
            self.render_filter_bar(f, area);
        }

        self.menu.render(f, rect);
    }
}
