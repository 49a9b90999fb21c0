use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::constants::{ERROR_CLIPBOARD, STATUS_COPIED, STATUS_REFRESHING, STATUS_REMOVE_REQUESTED};
use crate::core::{CoreEvent, CoreEventReceiver, TaskCore};
use crate::logger::Logger;
use crate::ui::components::{
    classify_drop, DialogComponent, Dropped, IntakeDialogComponent, StatusBar, StatusInfo, TaskPanelComponent,
};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

pub struct AppComponent {
    // Component composition
    panel: TaskPanelComponent,
    intake: IntakeDialogComponent,
    dialog: DialogComponent,
    status: StatusBar,

    // Services
    core: Box<dyn TaskCore>,
    core_events: CoreEventReceiver,
    clipboard: Box<dyn Clipboard>,
    logger: Logger,

    // Simple UI state
    mouse_enabled: bool,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(
        config: &Config,
        core: Box<dyn TaskCore>,
        core_events: CoreEventReceiver,
        clipboard: Box<dyn Clipboard>,
        logger: Logger,
    ) -> Self {
        let mut panel = TaskPanelComponent::new(config.panel.clone());
        panel.set_quick_view_mode(config.ui.quick_view);
        panel.set_size_column_width(config.ui.size_column_width);

        Self {
            panel,
            intake: IntakeDialogComponent::new(),
            dialog: DialogComponent::new(logger.clone()),
            status: StatusBar::new(),
            core,
            core_events,
            clipboard,
            logger,
            mouse_enabled: config.ui.mouse_enabled,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn panel(&self) -> &TaskPanelComponent {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut TaskPanelComponent {
        &mut self.panel
    }

    pub fn intake(&self) -> &IntakeDialogComponent {
        &self.intake
    }

    pub fn intake_mut(&mut self) -> &mut IntakeDialogComponent {
        &mut self.intake
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    pub fn status(&self) -> &StatusBar {
        &self.status
    }

    /// Ask the core for a fresh task list.
    pub fn refresh(&mut self) {
        self.logger.log("AppComponent: Requesting task list".to_string());
        self.status.set_message(STATUS_REFRESHING);
        self.core.refresh();
    }

    /// Drain pending core notifications into the components. Returns how many arrived.
    pub fn process_core_events(&mut self) -> usize {
        let mut count = 0;
        while let Ok(event) = self.core_events.try_recv() {
            self.handle_core_event(event);
            count += 1;
        }
        count
    }

    pub fn handle_core_event(&mut self, event: CoreEvent) {
        match event {
            CoreEvent::SingleTaskReady(task) => {
                log::debug!("Core: Single task resolved as '{}'", task.name);
                self.intake.single_task_ready(task);
            }
            CoreEvent::BitorrentTaskReady(task) => self.intake.bitorrent_task_ready(&task),
            CoreEvent::BatchTaskReady(entries) => self.intake.batch_task_ready(&entries),
            CoreEvent::TaskListReady(tasks) => {
                self.logger.log(format!("Core: Task list with {} tasks", tasks.len()));
                self.panel.set_cloud_tasks(&tasks);
                if self.status.message() == Some(STATUS_REFRESHING) {
                    self.status.clear();
                }
            }
            CoreEvent::BtSubTasksReady {
                container_id,
                subtasks,
            } => self.panel.set_bt_sub_tasks(&container_id, &subtasks),
            CoreEvent::TasksRemoved(rows) => {
                self.logger.log(format!("Core: Rows {:?} removed", rows));
                self.panel.remove_rows(&rows);
            }
            CoreEvent::CookiesReady(gdriveid) => self.panel.set_gdriveid(&gdriveid),
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        // Letter shortcuts fire only without Ctrl or Alt
        let plain = !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        match key.code {
            KeyCode::Char('q') if plain => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') if plain => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') if plain => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('i') if plain => Action::CycleIconTheme,
            KeyCode::Char('r') if plain => Action::Refresh,
            KeyCode::Char('a') if plain => Action::ShowIntake,
            KeyCode::Char('V') if plain => Action::ToggleQuickView,
            _ => Action::None,
        }
    }

    /// Handle app-level actions: requests for the core and the clipboard.
    /// Returns a follow-up action when one is produced.
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::ResolveSingle(url) => {
                self.core.resolve_single(&url);
                Action::None
            }
            Action::SubmitSingle(task) => {
                self.logger.log(format!("Intake: Submitting '{}'", task.url));
                self.core.submit_single(&task);
                Action::None
            }
            Action::PreParseBatch(text) => {
                self.core.pre_parse_batch(&text);
                Action::None
            }
            Action::PreParseBatchFromClipboard => {
                match self.clipboard.get_text() {
                    Ok(text) => self.core.pre_parse_batch(&text),
                    Err(e) => {
                        log::warn!("Clipboard read failed: {}", e);
                        self.status.set_error(ERROR_CLIPBOARD);
                    }
                }
                Action::None
            }
            Action::SubmitBatch(urls) => {
                self.logger.log(format!("Intake: Submitting {} batch links", urls.len()));
                self.core.submit_batch(&urls);
                Action::None
            }
            Action::UploadBitorrent(path) => {
                self.logger.log(format!("Intake: Uploading torrent {}", path.display()));
                self.core.upload_bitorrent(&path);
                Action::None
            }
            Action::CommitBitorrent(subtasks) => {
                self.logger
                    .log(format!("Intake: Committing {} torrent files", subtasks.len()));
                self.core.commit_bitorrent(&subtasks);
                Action::None
            }
            Action::ResolveMagnet(magnet) => {
                self.core.resolve_magnet(&magnet);
                Action::None
            }
            Action::RequestRemove { ids, rows } => {
                self.core.request_remove(&ids, &rows);
                self.status.set_message(STATUS_REMOVE_REQUESTED);
                Action::None
            }
            Action::OpenLink { task, action, forced } => {
                self.core.open_link(&task, action, forced);
                Action::None
            }
            Action::QuickView(task) => {
                match self.core.classify(&task.name).link_action() {
                    Some((action, forced)) => self.core.open_link(&task, action, forced),
                    None => log::debug!("QuickView: Nothing to open for '{}'", task.name),
                }
                Action::None
            }
            Action::CopyToClipboard(text) => {
                match self.clipboard.set_text(&text) {
                    Ok(()) => self.status.set_message(STATUS_COPIED),
                    Err(e) => {
                        log::warn!("Clipboard write failed: {}", e);
                        self.status.set_error(ERROR_CLIPBOARD);
                    }
                }
                Action::None
            }
            Action::Refresh => {
                self.refresh();
                Action::None
            }
            Action::ShowIntake => {
                let clipboard_text = self.clipboard.get_text().ok();
                self.intake.show(clipboard_text.as_deref())
            }
            _ => Action::None,
        }
    }

    /// Run an action through the component hierarchy, then through the app.
    pub fn dispatch(&mut self, action: Action) {
        let mut next = action;
        while !next.is_none() {
            let action = self.dialog.update(next);
            let action = self.intake.update(action);
            let action = self.panel.update(action);
            next = self.handle_app_action(action);
        }
    }

    fn handle_paste_event(&mut self, text: &str) -> Action {
        if self.dialog.is_visible() {
            return Action::None;
        }
        if self.intake.is_visible() {
            return self.intake.handle_paste(text);
        }
        if self.panel.captures_input() {
            return self.panel.handle_paste(text);
        }

        // Dropped onto the task list
        match classify_drop(text) {
            Dropped::Torrent(path) => self.intake.load_dragged_torrent(&path.to_string_lossy()),
            Dropped::Links(links) => self.intake.load_browser_links(&links),
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => {
                self.status.clear();
                if self.dialog.is_visible() {
                    // Dialog has priority when visible
                    self.dialog.handle_key_events(key)
                } else if self.intake.is_visible() {
                    self.intake.handle_key_events(key)
                } else {
                    let capturing = self.panel.captures_input();
                    let panel_action = self.panel.handle_key_events(key);
                    if panel_action.is_none() && !capturing {
                        self.handle_global_key(key)
                    } else {
                        panel_action
                    }
                }
            }
            EventType::Mouse(mouse) => {
                if self.mouse_enabled && !self.dialog.is_visible() && !self.intake.is_visible() {
                    self.panel.handle_mouse_events(mouse)
                } else {
                    Action::None
                }
            }
            EventType::Paste(text) => self.handle_paste_event(&text),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.dispatch(action);
    }

    fn status_info(&self) -> StatusInfo {
        StatusInfo {
            visible_tasks: self.panel.proxy().row_count(),
            total_tasks: self.panel.model().len(),
            selected: self.panel.selection().len(),
            quick_view: self.panel.quick_view_mode(),
        }
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // This shouldn't be called directly - use handle_event instead
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        let action = self.intake.update(action);
        self.panel.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::main_layout(rect);

        self.panel.render(f, chunks[0]);
        let info = self.status_info();
        self.status.render(f, chunks[1], &info);

        if self.intake.is_visible() {
            self.intake.render(f, rect);
        }

        // Render dialog on top if visible (includes help dialog)
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
