use cloudtasks::core::memory::{extract_urls, name_from_url};
use cloudtasks::core::{
    event_channel, BitorrentSubTask, CoreEvent, CoreEventReceiver, LinkAction, MemoryCore, QuickAction, RemoteTask,
    SingleTask, TaskCore, TaskKind, TaskLink,
};
use std::io::Write;

fn drain(receiver: &mut CoreEventReceiver) -> Vec<CoreEvent> {
    let mut events = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        events.push(event);
    }
    events
}

fn seeded_task(id: &str, name: &str) -> RemoteTask {
    RemoteTask {
        id: id.to_string(),
        name: name.to_string(),
        size: 10,
        source: format!("http://source/{}", name),
        link: String::new(),
        kind: TaskKind::File,
    }
}

#[test]
fn test_refresh_sends_cookie_and_task_list() {
    let (events, mut receiver) = event_channel();
    let mut core = MemoryCore::with_tasks(events, vec![seeded_task("1", "a.zip")]);

    core.refresh();
    let events = drain(&mut receiver);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], CoreEvent::CookiesReady(core.gdriveid().to_string()));
    assert!(matches!(&events[1], CoreEvent::TaskListReady(tasks) if tasks.len() == 1));
}

#[test]
fn test_resolve_and_submit_single() {
    let (events, mut receiver) = event_channel();
    let mut core = MemoryCore::new(events);

    core.resolve_single("http://example.com/files/f.zip");
    let resolved = match drain(&mut receiver).pop() {
        Some(CoreEvent::SingleTaskReady(task)) => task,
        other => panic!("unexpected event {:?}", other),
    };
    assert_eq!(resolved.name, "f.zip");

    core.submit_single(&SingleTask {
        url: "http://example.com/files/f.zip".to_string(),
        ..resolved
    });
    assert_eq!(core.tasks().len(), 1);
    assert_eq!(core.tasks()[0].link, "http://example.com/files/f.zip");
    assert!(matches!(drain(&mut receiver).pop(), Some(CoreEvent::TaskListReady(_))));
}

#[test]
fn test_pre_parse_batch() {
    let (events, mut receiver) = event_channel();
    let mut core = MemoryCore::new(events);

    core.pre_parse_batch("see http://a/1.zip and\nhttp://a/1.zip ftp://b/2.iso not-a-link");
    match drain(&mut receiver).pop() {
        Some(CoreEvent::BatchTaskReady(entries)) => {
            let urls: Vec<_> = entries.iter().map(|entry| entry.url.as_str()).collect();
            assert_eq!(urls, vec!["http://a/1.zip", "ftp://b/2.iso"]);
            assert_eq!(entries[1].name, "2.iso");
        }
        other => panic!("unexpected event {:?}", other),
    }
}

#[test]
fn test_magnet_commit_creates_container() {
    let (events, mut receiver) = event_channel();
    let mut core = MemoryCore::new(events);

    core.resolve_magnet("magnet:?xt=urn:btih:abc&dn=Holiday");
    let torrent = match drain(&mut receiver).pop() {
        Some(CoreEvent::BitorrentTaskReady(task)) => task,
        other => panic!("unexpected event {:?}", other),
    };
    assert_eq!(torrent.title, "Holiday");

    core.commit_bitorrent(&[BitorrentSubTask {
        id: "0".to_string(),
        file_index: "0".to_string(),
        size: "-".to_string(),
        ..Default::default()
    }]);

    let events = drain(&mut receiver);
    assert!(matches!(&events[0], CoreEvent::TaskListReady(tasks) if tasks[0].kind == TaskKind::Bitorrent));
    match &events[1] {
        CoreEvent::BtSubTasksReady {
            container_id,
            subtasks,
        } => {
            assert_eq!(container_id, &torrent.task_id);
            assert_eq!(subtasks[0].name, "Holiday");
        }
        other => panic!("unexpected event {:?}", other),
    }
}

#[test]
fn test_non_magnet_text_is_ignored() {
    let (events, mut receiver) = event_channel();
    let mut core = MemoryCore::new(events);

    core.resolve_magnet("magnet");
    core.upload_bitorrent(std::path::Path::new("/definitely/not/here.torrent"));
    assert!(drain(&mut receiver).is_empty());
}

#[test]
fn test_upload_torrent_file() {
    let (events, mut receiver) = event_channel();
    let mut core = MemoryCore::new(events);
    let file = tempfile::Builder::new().suffix(".torrent").tempfile().unwrap();

    core.upload_bitorrent(file.path());
    assert!(matches!(drain(&mut receiver).pop(), Some(CoreEvent::BitorrentTaskReady(_))));
}

#[test]
fn test_request_remove_echoes_rows() {
    let (events, mut receiver) = event_channel();
    let mut core = MemoryCore::with_tasks(events, vec![seeded_task("1", "a"), seeded_task("2", "b")]);

    core.request_remove(&["1".to_string()], &[0]);
    assert_eq!(drain(&mut receiver), vec![CoreEvent::TasksRemoved(vec![0])]);
    assert_eq!(core.tasks().len(), 1);
    assert_eq!(core.tasks()[0].id, "2");
}

#[test]
fn test_open_link_is_recorded() {
    let (events, _receiver) = event_channel();
    let mut core = MemoryCore::new(events);
    let link = TaskLink {
        url: "http://dl/a.mkv".to_string(),
        name: "a.mkv".to_string(),
    };

    core.open_link(&link, LinkAction::Preview, false);
    assert_eq!(core.opened_links(), &[(link, LinkAction::Preview, false)]);
}

#[test]
fn test_classify() {
    let (events, _receiver) = event_channel();
    let core = MemoryCore::new(events);

    assert_eq!(core.classify("film.mkv"), QuickAction::Video);
    assert_eq!(core.classify("paper.pdf"), QuickAction::Document);
    assert_eq!(core.classify("photo.png"), QuickAction::Image);
    assert_eq!(core.classify("blob"), QuickAction::Never);

    assert_eq!(QuickAction::Video.link_action(), Some((LinkAction::Preview, false)));
    assert_eq!(QuickAction::Document.link_action(), Some((LinkAction::Download, true)));
    assert_eq!(QuickAction::Image.link_action(), Some((LinkAction::Image, true)));
    assert_eq!(QuickAction::Never.link_action(), None);
}

#[test]
fn test_load_seed() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"id": "1", "name": "a.zip", "size": 5, "source": "http://s/a.zip"}},
           {{"id": "2", "name": "pack", "size": 9, "source": "magnet:?xt=x", "link": "", "kind": "bitorrent"}}]"#
    )
    .unwrap();

    let tasks = MemoryCore::load_seed(file.path()).unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].link, "");
    assert!(tasks[1].is_bitorrent());
}

#[test]
fn test_url_helpers() {
    assert_eq!(name_from_url("http://host/dir/a%20b.zip"), "a b.zip");
    assert_eq!(name_from_url("http://host/"), "host");
    assert_eq!(name_from_url("not a url"), "not a url");
    assert_eq!(
        extract_urls("x http://a/1 y magnet:?xt=urn:btih:z mailto:a@b"),
        vec!["http://a/1", "magnet:?xt=urn:btih:z"]
    );
}
