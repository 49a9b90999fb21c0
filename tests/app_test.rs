use cloudtasks::clipboard::MemoryClipboard;
use cloudtasks::config::Config;
use cloudtasks::constants::{STATUS_COPIED, STATUS_REMOVE_REQUESTED};
use cloudtasks::core::{
    event_channel, BitorrentSubTask, CoreEvent, LinkAction, MemoryCore, QuickAction, RemoteTask, SingleTask, TaskCore,
    TaskKind, TaskLink,
};
use cloudtasks::logger::Logger;
use cloudtasks::ui::components::IntakeMode;
use cloudtasks::ui::core::EventType;
use cloudtasks::ui::AppComponent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Core double that records every request it receives.
#[derive(Clone, Default)]
struct RecordingCore {
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingCore {
    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl TaskCore for RecordingCore {
    fn resolve_single(&mut self, url: &str) {
        self.record(format!("resolve_single {}", url));
    }

    fn submit_single(&mut self, task: &SingleTask) {
        self.record(format!("submit_single {}", task.url));
    }

    fn pre_parse_batch(&mut self, text: &str) {
        self.record(format!("pre_parse_batch {}", text));
    }

    fn submit_batch(&mut self, urls: &[String]) {
        self.record(format!("submit_batch {}", urls.join(",")));
    }

    fn upload_bitorrent(&mut self, path: &Path) {
        self.record(format!("upload_bitorrent {}", path.display()));
    }

    fn commit_bitorrent(&mut self, subtasks: &[BitorrentSubTask]) {
        self.record(format!("commit_bitorrent {}", subtasks.len()));
    }

    fn resolve_magnet(&mut self, magnet: &str) {
        self.record(format!("resolve_magnet {}", magnet));
    }

    fn request_remove(&mut self, ids: &[String], rows: &[usize]) {
        self.record(format!("request_remove {:?} {:?}", ids, rows));
    }

    fn open_link(&mut self, task: &TaskLink, action: LinkAction, forced: bool) {
        self.record(format!("open_link {} {:?} {}", task.name, action, forced));
    }

    fn refresh(&mut self) {
        self.record("refresh".to_string());
    }

    fn classify(&self, name: &str) -> QuickAction {
        if name.ends_with(".mkv") {
            QuickAction::Video
        } else {
            QuickAction::Never
        }
    }
}

fn tasks() -> Vec<RemoteTask> {
    vec![
        RemoteTask {
            id: "id-a".to_string(),
            name: "alpha.mkv".to_string(),
            size: 1,
            source: "http://source/alpha".to_string(),
            link: "http://dl/alpha.mkv".to_string(),
            kind: TaskKind::File,
        },
        RemoteTask {
            id: "id-b".to_string(),
            name: "beta.bin".to_string(),
            size: 1,
            source: "http://source/beta".to_string(),
            link: "http://dl/beta.bin".to_string(),
            kind: TaskKind::File,
        },
    ]
}

fn app_with(clipboard: &MemoryClipboard) -> (AppComponent, RecordingCore) {
    let (_events, receiver) = event_channel();
    let core = RecordingCore::default();
    let mut app = AppComponent::new(
        &Config::default(),
        Box::new(core.clone()),
        receiver,
        Box::new(clipboard.clone()),
        Logger::new(),
    );
    app.handle_core_event(CoreEvent::TaskListReady(tasks()));
    (app, core)
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn press_ctrl(app: &mut AppComponent, c: char) {
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)));
}

#[test]
fn test_memory_core_round_trip() {
    let (events, receiver) = event_channel();
    let core = MemoryCore::with_tasks(events, tasks());
    let mut app = AppComponent::new(
        &Config::default(),
        Box::new(core),
        receiver,
        Box::new(MemoryClipboard::new()),
        Logger::new(),
    );

    app.refresh();
    assert_eq!(app.process_core_events(), 2);
    assert_eq!(app.panel().model().len(), 2);
    assert!(app.status().message().is_none());
}

#[test]
fn test_quit_keys() {
    let clipboard = MemoryClipboard::new();
    let (mut app, _core) = app_with(&clipboard);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let (mut app, _core) = app_with(&clipboard);
    press_ctrl(&mut app, 'c');
    assert!(app.should_quit());
}

#[test]
fn test_filter_keeps_global_keys_away() {
    let clipboard = MemoryClipboard::new();
    let (mut app, _core) = app_with(&clipboard);

    press_ctrl(&mut app, 'f');
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());
    assert_eq!(app.panel().filter_text(), "q");
}

#[test]
fn test_add_key_opens_intake_with_clipboard_url() {
    let clipboard = MemoryClipboard::with_text("http://example.com/f.zip");
    let (mut app, core) = app_with(&clipboard);

    press(&mut app, KeyCode::Char('a'));
    assert!(app.intake().is_visible());
    assert_eq!(app.intake().url_text(), "http://example.com/f.zip");
    assert_eq!(core.calls(), vec!["resolve_single http://example.com/f.zip"]);

    // Resolution arrives, then the user accepts
    app.handle_core_event(CoreEvent::SingleTaskReady(SingleTask {
        url: String::new(),
        name: "f.zip".to_string(),
        size: "-".to_string(),
    }));
    press_ctrl(&mut app, 's');
    assert!(!app.intake().is_visible());
    assert_eq!(core.calls().last().map(String::as_str), Some("submit_single http://example.com/f.zip"));
}

#[test]
fn test_copy_task_name() {
    let clipboard = MemoryClipboard::new();
    let (mut app, _core) = app_with(&clipboard);

    press(&mut app, KeyCode::Char('n'));
    assert_eq!(clipboard.contents().as_deref(), Some("alpha.mkv"));
    assert_eq!(app.status().message(), Some(STATUS_COPIED));
}

#[test]
fn test_quick_view_uses_classifier() {
    let clipboard = MemoryClipboard::new();
    let (mut app, core) = app_with(&clipboard);

    press(&mut app, KeyCode::Enter);
    assert_eq!(core.calls(), vec!["open_link alpha.mkv Preview false"]);

    // beta.bin classifies as "never"
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(core.calls().len(), 1);
}

#[test]
fn test_remove_round_trip() {
    let clipboard = MemoryClipboard::new();
    let (mut app, core) = app_with(&clipboard);

    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Delete);
    assert_eq!(core.calls(), vec![r#"request_remove ["id-a"] [0]"#]);
    assert_eq!(app.status().message(), Some(STATUS_REMOVE_REQUESTED));

    app.handle_core_event(CoreEvent::TasksRemoved(vec![0]));
    assert_eq!(app.panel().model().len(), 1);
    assert_eq!(app.panel().model().row(0).map(|row| row.name.as_str()), Some("beta.bin"));
}

#[test]
fn test_pasted_links_open_batch_intake() {
    let clipboard = MemoryClipboard::new();
    let (mut app, core) = app_with(&clipboard);

    app.handle_event(EventType::Paste("http://a/1\nhttp://b/2".to_string()));
    assert!(app.intake().is_visible());
    assert_eq!(app.intake().mode(), IntakeMode::Batch);
    assert_eq!(core.calls(), vec!["pre_parse_batch http://a/1\nhttp://b/2"]);
}

#[test]
fn test_dialogs_take_keys_first() {
    let clipboard = MemoryClipboard::new();
    let (mut app, _core) = app_with(&clipboard);

    press(&mut app, KeyCode::Char('?'));
    assert!(app.dialog().is_visible());

    // 'q' does not quit while help is open
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Esc);
    assert!(!app.dialog().is_visible());
}

#[test]
fn test_refresh_key_and_quick_view_toggle() {
    let clipboard = MemoryClipboard::new();
    let (mut app, core) = app_with(&clipboard);

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(core.calls(), vec!["refresh"]);

    press(&mut app, KeyCode::Char('V'));
    assert!(!app.panel().quick_view_mode());
}

#[test]
fn test_clipboard_batch_intake() {
    let clipboard = MemoryClipboard::with_text("http://a/1 http://b/2");
    let (mut app, core) = app_with(&clipboard);

    press(&mut app, KeyCode::Char('a'));
    press_ctrl(&mut app, 'v');
    assert_eq!(app.intake().mode(), IntakeMode::Batch);
    assert_eq!(core.calls().last().map(String::as_str), Some("pre_parse_batch http://a/1 http://b/2"));
}

#[test]
fn test_ctrl_letters_stay_with_the_panel() {
    let clipboard = MemoryClipboard::with_text("http://example.com/f.zip");
    let (mut app, core) = app_with(&clipboard);

    press_ctrl(&mut app, 'a');
    assert_eq!(app.panel().selection().len(), 2);
    assert!(!app.intake().is_visible());
    assert!(core.calls().is_empty());

    press_ctrl(&mut app, 'q');
    press_ctrl(&mut app, 'r');
    assert!(!app.should_quit());
    assert!(core.calls().is_empty());
}
