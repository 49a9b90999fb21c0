use cloudtasks::config::PanelConfig;
use cloudtasks::core::{BitorrentSubTask, LinkAction, RemoteTask, TaskKind, TaskLink};
use cloudtasks::ui::components::{PanelCommand, TaskPanelComponent};
use cloudtasks::ui::core::{Action, Component};
use cloudtasks::ui::model::RowRef;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn task(id: &str, name: &str, link: &str, kind: TaskKind) -> RemoteTask {
    RemoteTask {
        id: id.to_string(),
        name: name.to_string(),
        size: 2048,
        source: format!("http://source/{}", id),
        link: link.to_string(),
        kind,
    }
}

fn panel() -> TaskPanelComponent {
    let mut panel = TaskPanelComponent::new(PanelConfig::default());
    panel.set_cloud_tasks(&[
        task("id-a", "alpha.mkv", "http://dl/alpha.mkv", TaskKind::File),
        task("id-b", "beta.iso", "", TaskKind::File),
        task("id-c", "gamma", "", TaskKind::Bitorrent),
    ]);
    panel.set_bt_sub_tasks(
        "id-c",
        &[BitorrentSubTask {
            id: "0".to_string(),
            file_index: "0".to_string(),
            size: "1 KiB".to_string(),
            name: "gamma-part.mkv".to_string(),
            link: Some("http://dl/gamma-part.mkv".to_string()),
        }],
    );
    panel
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

#[test]
fn test_cursor_starts_on_first_row() {
    let panel = panel();
    assert_eq!(panel.cursor(), Some(RowRef::Top(0)));
    assert_eq!(
        panel.first_selected_task(),
        Some(TaskLink {
            url: "http://dl/alpha.mkv".to_string(),
            name: "alpha.mkv".to_string(),
        })
    );
}

#[test]
fn test_selected_ids_exclude_sub_files() {
    let mut panel = panel();
    panel.expand(2);
    assert_eq!(panel.visible_rows().len(), 4);

    panel.select_all();
    let (ids, rows) = panel.selected_task_ids_and_rows();
    assert_eq!(ids, vec!["id-a", "id-b", "id-c"]);
    assert_eq!(rows, vec![0, 1, 2]);
}

#[test]
fn test_selected_rows_are_source_rows_under_filter() {
    let mut panel = panel();
    panel.set_filter_text("gamma");
    assert_eq!(panel.proxy().row_count(), 1);

    panel.select_all();
    let (ids, rows) = panel.selected_task_ids_and_rows();
    assert_eq!(ids, vec!["id-c"]);
    assert_eq!(rows, vec![2]);
}

#[test]
fn test_remove_without_selection_does_nothing() {
    let mut panel = panel();
    assert_eq!(panel.run_command(PanelCommand::RemoveSelected), Action::None);
}

#[test]
fn test_remove_request_and_confirmation() {
    let mut panel = panel();
    panel.select_only(RowRef::Top(0));
    panel.toggle_selection(RowRef::Top(2));

    let action = panel.run_command(PanelCommand::RemoveSelected);
    assert_eq!(
        action,
        Action::RequestRemove {
            ids: vec!["id-a".to_string(), "id-c".to_string()],
            rows: vec![0, 2],
        }
    );

    panel.remove_rows(&[0, 2]);
    assert_eq!(panel.model().len(), 1);
    assert_eq!(panel.model().row(0).map(|row| row.name.as_str()), Some("beta.iso"));
}

#[test]
fn test_selection_survives_removal_of_other_rows() {
    let mut panel = panel();
    panel.set_cursor(RowRef::Top(2));
    panel.select_only(RowRef::Top(2));

    panel.remove_rows(&[0]);
    assert_eq!(panel.cursor(), Some(RowRef::Top(1)));
    assert!(panel.selection().contains(&RowRef::Top(1)));
}

#[test]
fn test_copy_commands() {
    let mut panel = panel();
    assert_eq!(
        panel.run_command(PanelCommand::CopyTaskName),
        Action::CopyToClipboard("alpha.mkv".to_string())
    );
    assert_eq!(
        panel.run_command(PanelCommand::CopySourceAddress),
        Action::CopyToClipboard("http://source/id-a".to_string())
    );

    // Unresolved task: nothing to copy
    panel.set_cursor(RowRef::Top(1));
    assert_eq!(panel.run_command(PanelCommand::CopyDownloadAddress), Action::None);
}

#[test]
fn test_copy_as_script_escapes_quotes() {
    let mut panel = TaskPanelComponent::new(PanelConfig::default());
    panel.set_cloud_tasks(&[task("id", "O'Brien's file", "http://x/a'b", TaskKind::File)]);
    panel.set_gdriveid("cookie");

    let Action::CopyToClipboard(script) = panel.run_command(PanelCommand::CopyAsScript) else {
        panic!("expected a script");
    };
    assert!(script.contains("gdriveid=cookie"));
    assert!(script.contains("'O\\'Brien\\'s file'"));
    assert!(script.contains("'http://x/a\\'b'"));
}

#[test]
fn test_preview_and_download_need_a_link() {
    let mut panel = panel();
    assert_eq!(
        panel.run_command(PanelCommand::Preview),
        Action::OpenLink {
            task: TaskLink {
                url: "http://dl/alpha.mkv".to_string(),
                name: "alpha.mkv".to_string(),
            },
            action: LinkAction::Preview,
            forced: false,
        }
    );

    panel.set_cursor(RowRef::Top(1));
    assert_eq!(panel.run_command(PanelCommand::Download), Action::None);
}

#[test]
fn test_sub_file_link_resolves_through_filter() {
    let mut panel = panel();
    panel.set_filter_text("gamma");
    panel.expand(0);
    assert!(panel.set_cursor(RowRef::Child { parent: 0, row: 0 }));

    assert_eq!(
        panel.run_command(PanelCommand::CopyDownloadAddress),
        Action::CopyToClipboard("http://dl/gamma-part.mkv".to_string())
    );
    // Sub-files have no source address
    assert_eq!(panel.run_command(PanelCommand::CopySourceAddress), Action::None);
}

#[test]
fn test_quick_view_toggle() {
    let mut panel = panel();
    assert!(matches!(panel.handle_key_events(key(KeyCode::Enter)), Action::QuickView(_)));

    assert_eq!(panel.update(Action::ToggleQuickView), Action::None);
    assert!(!panel.quick_view_mode());
    assert_eq!(panel.handle_key_events(key(KeyCode::Enter)), Action::None);
}

#[test]
fn test_filter_bar_keys() {
    let mut panel = panel();

    panel.handle_key_events(ctrl('f'));
    assert!(panel.is_filter_visible());
    assert!(panel.captures_input());

    for c in "beta".chars() {
        panel.handle_key_events(key(KeyCode::Char(c)));
    }
    assert_eq!(panel.filter_text(), "beta");
    assert_eq!(panel.proxy().row_count(), 1);

    // Esc hides the bar but keeps the filter
    panel.handle_key_events(key(KeyCode::Esc));
    assert!(!panel.is_filter_visible());
    assert!(!panel.captures_input());
    assert_eq!(panel.proxy().row_count(), 1);

    panel.handle_key_events(ctrl('u'));
    assert_eq!(panel.filter_text(), "");
    assert_eq!(panel.proxy().row_count(), 3);
}

#[test]
fn test_collapse_and_expand_all() {
    let mut panel = panel();
    panel.run_command(PanelCommand::ExpandAll);
    assert!(panel.is_expanded(2));

    panel.set_cursor(RowRef::Child { parent: 2, row: 0 });
    panel.run_command(PanelCommand::CollapseAll);
    assert!(!panel.is_expanded(2));
    // The cursor moves up to the collapsed container
    assert_eq!(panel.cursor(), Some(RowRef::Top(2)));
}

#[test]
fn test_menu_runs_commands() {
    let mut panel = panel();
    panel.handle_key_events(key(KeyCode::Char('m')));
    assert!(panel.is_menu_visible());

    // Second entry is Download
    panel.handle_key_events(key(KeyCode::Down));
    let action = panel.handle_key_events(key(KeyCode::Enter));
    assert!(matches!(
        action,
        Action::OpenLink {
            action: LinkAction::Download,
            ..
        }
    ));
    assert!(!panel.is_menu_visible());
}
