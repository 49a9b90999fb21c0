//! Add-task dialog.
//!
//! Three modes collect a new task: a single URL, a BitTorrent container (from a
//! magnet link or an uploaded `.torrent` file) and a batch of links. Each mode
//! asks the core to resolve its input first, shows what came back, and on
//! accept forwards the user's pick to the core.

use crate::constants::{
    label_batch_total, label_bt_total, label_disk_size, label_file_size, MAGNET_PREFIX, PROMPT_TORRENT_PATH,
    TAB_BATCH, TAB_BITORRENT, TAB_SINGLE,
};
use crate::core::{BatchTaskEntry, BitorrentSubTask, BitorrentTask, SingleTask};
use crate::icons::IconService;
use crate::ui::components::dialogs::common::{
    create_dialog_block, create_input_paragraph, create_instructions_paragraph, shortcuts, InstructionShortcut,
};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crate::ui::model::{BatchPickRow, BitorrentPickRow, PickRow, PickTable};
use crate::utils::format::readable_size;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Row, Table, TableState, Tabs, Wrap},
    Frame,
};
use std::path::{Path, PathBuf};
use url::Url;

/// Which kind of task the dialog is collecting. Decides what accept does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntakeMode {
    #[default]
    Single,
    Bitorrent,
    Batch,
}

impl IntakeMode {
    pub const ALL: [IntakeMode; 3] = [IntakeMode::Single, IntakeMode::Bitorrent, IntakeMode::Batch];

    pub fn title(self) -> &'static str {
        match self {
            IntakeMode::Single => TAB_SINGLE,
            IntakeMode::Bitorrent => TAB_BITORRENT,
            IntakeMode::Batch => TAB_BATCH,
        }
    }

    fn index(self) -> usize {
        match self {
            IntakeMode::Single => 0,
            IntakeMode::Bitorrent => 1,
            IntakeMode::Batch => 2,
        }
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// What a paste or drop onto the terminal carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dropped {
    /// A single existing local file, taken as a torrent to upload
    Torrent(PathBuf),
    /// Anything else, taken as link text for batch intake
    Links(String),
}

/// Classify dropped text: one line naming an existing file (plain path or `file://` URL) is a torrent.
pub fn classify_drop(text: &str) -> Dropped {
    let trimmed = text.trim();
    if !trimmed.is_empty() && !trimmed.contains('\n') {
        let unquoted = trimmed.trim_matches(|c| c == '\'' || c == '"');
        let path = if unquoted.starts_with("file://") {
            Url::parse(unquoted).ok().and_then(|url| url.to_file_path().ok())
        } else {
            Some(PathBuf::from(unquoted))
        };

        if let Some(path) = path.filter(|path| path.is_file()) {
            return Dropped::Torrent(path);
        }
    }
    Dropped::Links(text.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BitorrentFocus {
    Magnet,
    Table,
}

pub struct IntakeDialogComponent {
    visible: bool,
    mode: IntakeMode,

    url_input: String,
    single_task: Option<SingleTask>,
    single_name: String,
    single_size_label: String,

    magnet_input: String,
    bt_focus: BitorrentFocus,
    bt_table: PickTable<BitorrentPickRow>,
    bt_label: String,
    /// Open while the user types a torrent path
    torrent_prompt: Option<String>,

    batch_table: PickTable<BatchPickRow>,
    batch_label: String,
    /// Open while the user writes links in the embedded editor
    editor: Option<String>,

    pub icons: IconService,
}

impl Default for IntakeDialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl IntakeDialogComponent {
    pub fn new() -> Self {
        Self {
            visible: false,
            mode: IntakeMode::Single,
            url_input: String::new(),
            single_task: None,
            single_name: String::new(),
            single_size_label: String::new(),
            magnet_input: String::new(),
            bt_focus: BitorrentFocus::Magnet,
            bt_table: PickTable::new(),
            bt_label: String::new(),
            torrent_prompt: None,
            batch_table: PickTable::new(),
            batch_label: String::new(),
            editor: None,
            icons: IconService::default(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn mode(&self) -> IntakeMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: IntakeMode) {
        self.mode = mode;
    }

    pub fn url_text(&self) -> &str {
        &self.url_input
    }

    pub fn magnet_text(&self) -> &str {
        &self.magnet_input
    }

    pub fn single_task(&self) -> Option<&SingleTask> {
        self.single_task.as_ref()
    }

    pub fn single_name(&self) -> &str {
        &self.single_name
    }

    pub fn single_size_label(&self) -> &str {
        &self.single_size_label
    }

    pub fn bitorrent_label(&self) -> &str {
        &self.bt_label
    }

    pub fn batch_label(&self) -> &str {
        &self.batch_label
    }

    pub fn bitorrent_table(&self) -> &PickTable<BitorrentPickRow> {
        &self.bt_table
    }

    pub fn bitorrent_table_mut(&mut self) -> &mut PickTable<BitorrentPickRow> {
        &mut self.bt_table
    }

    pub fn batch_table(&self) -> &PickTable<BatchPickRow> {
        &self.batch_table
    }

    pub fn batch_table_mut(&mut self) -> &mut PickTable<BatchPickRow> {
        &mut self.batch_table
    }

    /// Show the dialog. In single mode the URL field takes the clipboard text.
    pub fn show(&mut self, clipboard_text: Option<&str>) -> Action {
        self.visible = true;
        log::info!("Intake: Showing dialog in {:?} mode", self.mode);

        if self.mode == IntakeMode::Single {
            return self.set_url_text(clipboard_text.unwrap_or_default());
        }
        Action::None
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.torrent_prompt = None;
        self.editor = None;
    }

    /// The URL field changed. A magnet link moves over to BitTorrent mode;
    /// anything else non-empty is sent off for resolution.
    pub fn set_url_text(&mut self, text: &str) -> Action {
        if text == self.url_input {
            return Action::None;
        }
        self.url_input = text.to_string();

        if text.starts_with(MAGNET_PREFIX) {
            self.url_input.clear();
            self.mode = IntakeMode::Bitorrent;
            self.bt_focus = BitorrentFocus::Magnet;
            log::info!("Intake: Magnet link detected, switching to BitTorrent mode");
            return self.set_magnet_text(text);
        }

        if text.is_empty() {
            Action::None
        } else {
            Action::ResolveSingle(text.to_string())
        }
    }

    /// The magnet field changed; every change is sent off for resolution.
    pub fn set_magnet_text(&mut self, text: &str) -> Action {
        if text == self.magnet_input {
            return Action::None;
        }
        self.magnet_input = text.to_string();
        Action::ResolveMagnet(text.to_string())
    }

    /// The core resolved the URL field. The stored task keeps the URL as typed.
    pub fn single_task_ready(&mut self, task: SingleTask) {
        self.single_size_label = label_file_size(&task.size);
        self.single_name = task.name.clone();
        self.single_task = Some(SingleTask {
            url: self.url_input.clone(),
            ..task
        });
    }

    /// Show an already known task: its name goes into the URL field, its size into the label.
    pub fn set_single_task_info(&mut self, task: &SingleTask) {
        self.url_input = task.name.clone();
        self.single_size_label = label_disk_size(&task.size);
    }

    pub fn bitorrent_task_ready(&mut self, task: &BitorrentTask) {
        self.bt_label = label_bt_total(&task.title, &readable_size(task.total_size));
        self.bt_table
            .set_rows(task.subtasks.iter().map(BitorrentPickRow::from).collect());
        self.bt_focus = BitorrentFocus::Table;
        log::info!("Intake: Torrent '{}' offers {} files", task.title, task.subtasks.len());
    }

    pub fn batch_task_ready(&mut self, entries: &[BatchTaskEntry]) {
        let total: u64 = entries.iter().map(|entry| entry.size).sum();
        self.batch_label = label_batch_total(&readable_size(total));
        self.batch_table.set_rows(entries.iter().map(BatchPickRow::from).collect());
        log::info!("Intake: Batch offers {} links", entries.len());
    }

    /// Links handed over from outside (browser, drop, paste) go to batch mode.
    pub fn load_browser_links(&mut self, text: &str) -> Action {
        self.visible = true;
        self.mode = IntakeMode::Batch;
        Action::PreParseBatch(text.to_string())
    }

    /// A torrent dropped as a local path or a `file://` URL.
    pub fn load_dragged_torrent(&mut self, dropped: &str) -> Action {
        let dropped = dropped.trim();
        let path = if dropped.starts_with("file://") {
            match Url::parse(dropped).ok().and_then(|url| url.to_file_path().ok()) {
                Some(path) => path,
                None => {
                    log::debug!("Intake: Ignoring unusable file URL '{}'", dropped);
                    return Action::None;
                }
            }
        } else {
            PathBuf::from(dropped)
        };

        self.visible = true;
        self.mode = IntakeMode::Bitorrent;
        Action::UploadBitorrent(path)
    }

    pub fn open_torrent_prompt(&mut self) {
        self.mode = IntakeMode::Bitorrent;
        self.torrent_prompt = Some(String::new());
    }

    pub fn is_torrent_prompt_open(&self) -> bool {
        self.torrent_prompt.is_some()
    }

    /// Close the path prompt and upload the file it names. Any path is accepted.
    pub fn submit_torrent_path(&mut self) -> Action {
        let Some(path) = self.torrent_prompt.take() else {
            return Action::None;
        };
        let path = path.trim();
        if path.is_empty() {
            return Action::None;
        }
        Action::UploadBitorrent(expand_home(path))
    }

    pub fn open_editor(&mut self) {
        self.mode = IntakeMode::Batch;
        self.editor = Some(String::new());
    }

    pub fn is_editor_open(&self) -> bool {
        self.editor.is_some()
    }

    pub fn editor_text(&self) -> Option<&str> {
        self.editor.as_deref()
    }

    /// Close the editor and pre-parse what was written.
    pub fn submit_editor(&mut self) -> Action {
        match self.editor.take() {
            Some(text) if !text.trim().is_empty() => Action::PreParseBatch(text),
            _ => Action::None,
        }
    }

    /// Forward the pick of the active mode. Nothing happens without a pick;
    /// otherwise the dialog closes.
    pub fn accept(&mut self) -> Action {
        let action = match self.mode {
            IntakeMode::Single => self.single_task.clone().map_or(Action::None, Action::SubmitSingle),
            IntakeMode::Bitorrent => {
                let subtasks: Vec<BitorrentSubTask> = self
                    .bt_table
                    .selected_rows()
                    .map(|(index, row)| BitorrentSubTask {
                        id: index.to_string(),
                        file_index: row.file_index.clone(),
                        size: row.size.clone(),
                        ..Default::default()
                    })
                    .collect();
                if subtasks.is_empty() {
                    Action::None
                } else {
                    Action::CommitBitorrent(subtasks)
                }
            }
            IntakeMode::Batch => {
                let urls: Vec<String> = self.batch_table.selected_rows().map(|(_, row)| row.url.clone()).collect();
                if urls.is_empty() {
                    Action::None
                } else {
                    Action::SubmitBatch(urls)
                }
            }
        };

        if action.is_none() {
            log::debug!("Intake: Nothing to submit in {:?} mode", self.mode);
        } else {
            self.hide();
        }
        action
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) -> Action {
        let Some(prompt) = self.torrent_prompt.as_mut() else {
            return Action::None;
        };
        match key.code {
            KeyCode::Esc => self.torrent_prompt = None,
            KeyCode::Enter => return self.submit_torrent_path(),
            KeyCode::Backspace => {
                prompt.pop();
            }
            KeyCode::Char(c) => prompt.push(c),
            _ => {}
        }
        Action::None
    }

    fn handle_editor_key(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let Some(editor) = self.editor.as_mut() else {
            return Action::None;
        };
        match key.code {
            KeyCode::Esc => self.editor = None,
            KeyCode::Char('s') if ctrl => return self.submit_editor(),
            KeyCode::Enter => editor.push('\n'),
            KeyCode::Backspace => {
                editor.pop();
            }
            KeyCode::Char(c) if !ctrl => editor.push(c),
            _ => {}
        }
        Action::None
    }

    fn handle_table_key<R: PickRow>(table: &mut PickTable<R>, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => table.previous(),
            KeyCode::Down | KeyCode::Char('j') => table.next(),
            KeyCode::Char(' ') => table.toggle_current(),
            KeyCode::Char('a') if ctrl => {
                if table.selected_count() == table.rows().len() {
                    table.clear_selection();
                } else {
                    table.select_all();
                }
            }
            _ => return false,
        }
        true
    }

    fn render_pick_table<R: PickRow>(f: &mut Frame, area: Rect, table: &PickTable<R>, icons: &IconService, focused: bool) {
        let rows: Vec<Row> = table
            .rows()
            .iter()
            .enumerate()
            .map(|(index, row)| {
                Row::new(vec![
                    format!("{} {}", icons.selection_marker(table.is_selected(index)), row.size_text()),
                    row.name().to_string(),
                ])
            })
            .collect();

        let border_color = if focused { Color::Cyan } else { Color::Gray };
        let header = Row::new(vec!["Size", "Name"]).style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
        let widget = Table::new(rows, [Constraint::Length(16), Constraint::Min(10)])
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(format!(" {}/{} selected ", table.selected_count(), table.rows().len()))
                    .style(Style::default().fg(border_color)),
            )
            .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        let mut state = TableState::default();
        if focused && !table.is_empty() {
            state.select(Some(table.cursor()));
        }
        f.render_stateful_widget(widget, area, &mut state);
    }

    fn render_single(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        f.render_widget(create_input_paragraph(&self.url_input, "URL", true), chunks[0]);
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Name: ", Style::default().fg(Color::Gray)),
                Span::raw(self.single_name.clone()),
            ])),
            chunks[1],
        );
        f.render_widget(
            Paragraph::new(self.single_size_label.clone()).style(Style::default().fg(Color::Gray)),
            chunks[2],
        );
    }

    fn render_bitorrent(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(3)])
            .split(area);

        let magnet_focused = self.bt_focus == BitorrentFocus::Magnet && self.torrent_prompt.is_none();
        f.render_widget(
            create_input_paragraph(&self.magnet_input, "Magnet link", magnet_focused),
            chunks[0],
        );
        f.render_widget(
            Paragraph::new(self.bt_label.clone()).style(Style::default().fg(Color::Gray)),
            chunks[1],
        );
        Self::render_pick_table(
            f,
            chunks[2],
            &self.bt_table,
            &self.icons,
            self.bt_focus == BitorrentFocus::Table,
        );
    }

    fn render_batch(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(3)])
            .split(area);

        f.render_widget(
            Paragraph::new(self.batch_label.clone()).style(Style::default().fg(Color::Gray)),
            chunks[0],
        );
        Self::render_pick_table(f, chunks[1], &self.batch_table, &self.icons, self.editor.is_none());
    }

    fn render_overlays(&self, f: &mut Frame, area: Rect) {
        if let Some(path) = &self.torrent_prompt {
            let prompt_area = LayoutManager::centered_rect_lines(60, 3, area);
            f.render_widget(Clear, prompt_area);
            f.render_widget(create_input_paragraph(path, PROMPT_TORRENT_PATH, true), prompt_area);
        }

        if let Some(text) = &self.editor {
            let editor_area = LayoutManager::centered_rect(70, 60, area);
            f.render_widget(Clear, editor_area);
            let editor = Paragraph::new(format!("{}█", text))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .title(" Links, one per line - Ctrl+S parse, Esc cancel ")
                        .style(Style::default().fg(Color::Cyan)),
                )
                .style(Style::default().fg(Color::White))
                .wrap(Wrap { trim: false });
            f.render_widget(editor, editor_area);
        }
    }

    fn instructions(&self) -> Vec<InstructionShortcut> {
        let mut instructions = vec![shortcuts::ENTER_ACCEPT, shortcuts::SEPARATOR, shortcuts::TAB_SWITCH];
        match self.mode {
            IntakeMode::Single => {}
            IntakeMode::Bitorrent => instructions.extend([
                shortcuts::SEPARATOR,
                shortcuts::SPACE_TOGGLE,
                shortcuts::SEPARATOR,
                shortcuts::CTRL_O_TORRENT,
            ]),
            IntakeMode::Batch => instructions.extend([
                shortcuts::SEPARATOR,
                shortcuts::SPACE_TOGGLE,
                shortcuts::SEPARATOR,
                ("e", Color::Magenta, " Editor"),
                shortcuts::SEPARATOR,
                shortcuts::CTRL_V_CLIPBOARD,
            ]),
        }
        instructions.extend([shortcuts::SEPARATOR, shortcuts::ESC_CANCEL]);
        instructions
    }
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir().map_or_else(|| PathBuf::from(path), |home| home.join(rest)),
        None => Path::new(path).to_path_buf(),
    }
}

impl Component for IntakeDialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.visible {
            return Action::None;
        }
        if self.torrent_prompt.is_some() {
            return self.handle_prompt_key(key);
        }
        if self.editor.is_some() {
            return self.handle_editor_key(key);
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::Esc => return Action::HideIntake,
            KeyCode::Enter => return self.accept(),
            KeyCode::Char('s') if ctrl => return self.accept(),
            KeyCode::Tab => self.mode = self.mode.next(),
            KeyCode::BackTab => self.mode = self.mode.previous(),
            KeyCode::Char('1') if alt => self.mode = IntakeMode::Single,
            KeyCode::Char('2') if alt => self.mode = IntakeMode::Bitorrent,
            KeyCode::Char('3') if alt => self.mode = IntakeMode::Batch,
            KeyCode::Char('o') if ctrl => self.open_torrent_prompt(),
            KeyCode::Char('v') if ctrl => {
                self.mode = IntakeMode::Batch;
                return Action::PreParseBatchFromClipboard;
            }
            _ => match self.mode {
                IntakeMode::Single => match key.code {
                    KeyCode::Backspace => {
                        let mut text = self.url_input.clone();
                        text.pop();
                        return self.set_url_text(&text);
                    }
                    KeyCode::Char(c) if !ctrl => {
                        let text = format!("{}{}", self.url_input, c);
                        return self.set_url_text(&text);
                    }
                    _ => {}
                },
                IntakeMode::Bitorrent => match self.bt_focus {
                    BitorrentFocus::Magnet => match key.code {
                        KeyCode::Down if !self.bt_table.is_empty() => self.bt_focus = BitorrentFocus::Table,
                        KeyCode::Backspace => {
                            let mut text = self.magnet_input.clone();
                            text.pop();
                            return self.set_magnet_text(&text);
                        }
                        KeyCode::Char(c) if !ctrl => {
                            let text = format!("{}{}", self.magnet_input, c);
                            return self.set_magnet_text(&text);
                        }
                        _ => {}
                    },
                    BitorrentFocus::Table => {
                        if key.code == KeyCode::Up && self.bt_table.cursor() == 0 {
                            self.bt_focus = BitorrentFocus::Magnet;
                        } else {
                            Self::handle_table_key(&mut self.bt_table, key);
                        }
                    }
                },
                IntakeMode::Batch => {
                    if key.code == KeyCode::Char('e') {
                        self.open_editor();
                    } else {
                        Self::handle_table_key(&mut self.batch_table, key);
                    }
                }
            },
        }
        Action::None
    }

    fn handle_paste(&mut self, text: &str) -> Action {
        if let Some(prompt) = self.torrent_prompt.as_mut() {
            prompt.push_str(text.trim());
            return Action::None;
        }
        if let Some(editor) = self.editor.as_mut() {
            editor.push_str(text);
            return Action::None;
        }

        match classify_drop(text) {
            Dropped::Torrent(path) => self.load_dragged_torrent(&path.to_string_lossy()),
            Dropped::Links(text) if text.trim().lines().count() > 1 => self.load_browser_links(&text),
            Dropped::Links(text) => match self.mode {
                IntakeMode::Single => {
                    let text = format!("{}{}", self.url_input, text.trim());
                    self.set_url_text(&text)
                }
                IntakeMode::Bitorrent if self.bt_focus == BitorrentFocus::Magnet => {
                    let text = format!("{}{}", self.magnet_input, text.trim());
                    self.set_magnet_text(&text)
                }
                _ => self.load_browser_links(&text),
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::HideIntake => {
                self.hide();
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
        if !self.visible {
            return;
        }

        let dialog_area = LayoutManager::centered_rect(80, 80, rect);
        f.render_widget(Clear, dialog_area);

        let title = format!(" {} Add Tasks ", self.icons.add_title());
        let block = create_dialog_block(&title, Color::Cyan);
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(3), Constraint::Length(1)])
            .split(inner);

        let tabs = Tabs::new(IntakeMode::ALL.iter().map(|mode| mode.title()))
            .select(self.mode.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        f.render_widget(tabs, chunks[0]);

        match self.mode {
            IntakeMode::Single => self.render_single(f, chunks[1]),
            IntakeMode::Bitorrent => self.render_bitorrent(f, chunks[1]),
            IntakeMode::Batch => self.render_batch(f, chunks[1]),
        }

        f.render_widget(create_instructions_paragraph(&self.instructions()), chunks[2]);
        self.render_overlays(f, rect);
    }
}
