use cloudtasks::core::{BitorrentSubTask, RemoteTask, TaskKind};
use cloudtasks::icons::FileKind;
use cloudtasks::ui::model::{RowRef, TaskTreeModel};

fn task(id: &str, name: &str, link: &str, kind: TaskKind) -> RemoteTask {
    RemoteTask {
        id: id.to_string(),
        name: name.to_string(),
        size: 1024,
        source: format!("http://source/{}", name),
        link: link.to_string(),
        kind,
    }
}

fn subtask(index: &str, name: &str, link: Option<&str>) -> BitorrentSubTask {
    BitorrentSubTask {
        id: index.to_string(),
        file_index: index.to_string(),
        size: "1 KiB".to_string(),
        name: name.to_string(),
        link: link.map(str::to_string),
    }
}

fn three_tasks() -> Vec<RemoteTask> {
    vec![
        task("id-a", "a.zip", "http://dl/a.zip", TaskKind::File),
        task("id-b", "b.iso", "", TaskKind::File),
        task("id-c", "c", "", TaskKind::Bitorrent),
    ]
}

#[test]
fn test_populate_rows() {
    let mut model = TaskTreeModel::new();
    model.set_tasks(&three_tasks());

    assert_eq!(model.len(), 3);
    let row = model.row(0).unwrap();
    assert_eq!(row.name, "a.zip");
    assert_eq!(row.size_text, "1 KiB");
    assert_eq!(row.meta.task_id, "id-a");
    assert_eq!(row.meta.link, "http://dl/a.zip");
    assert_eq!(row.meta.source, "http://source/a.zip");
    assert_eq!(row.meta.kind, TaskKind::File);
    assert_eq!(row.file_kind, FileKind::Archive);
}

#[test]
fn test_unresolved_rows_are_highlighted() {
    let mut model = TaskTreeModel::new();
    model.set_tasks(&three_tasks());

    assert!(!model.row(0).unwrap().highlight);
    assert!(model.row(1).unwrap().highlight);
    // Containers resolve per sub-file
    assert!(!model.row(2).unwrap().highlight);
}

#[test]
fn test_remove_rows() {
    let mut model = TaskTreeModel::new();
    model.set_tasks(&three_tasks());

    assert_eq!(model.remove_rows(&[0, 2]), 2);
    assert_eq!(model.len(), 1);
    assert_eq!(model.row(0).unwrap().name, "b.iso");
}

#[test]
fn test_remove_rows_ignores_duplicates_and_out_of_range() {
    let mut model = TaskTreeModel::new();
    model.set_tasks(&three_tasks());

    assert_eq!(model.remove_rows(&[1, 1, 9]), 1);
    assert_eq!(model.len(), 2);
    assert_eq!(model.row(1).unwrap().name, "c");
}

#[test]
fn test_sub_tasks_attach_to_container() {
    let mut model = TaskTreeModel::new();
    model.set_tasks(&three_tasks());

    let attached = model.append_sub_tasks(
        "id-c",
        &[subtask("0", "one.mkv", Some("http://dl/one")), subtask("1", "two.txt", None)],
    );
    assert!(attached);

    let children = &model.row(2).unwrap().children;
    assert_eq!(children.len(), 2);
    assert!(!children[0].highlight);
    assert!(children[1].highlight);
    assert_eq!(children[0].file_kind, FileKind::Video);

    let first = RowRef::Child { parent: 2, row: 0 };
    let second = RowRef::Child { parent: 2, row: 1 };
    assert_eq!(model.link_at(first), Some("http://dl/one"));
    assert_eq!(model.link_at(second), Some(""));
    assert_eq!(model.name_at(second), Some("two.txt"));
    // Sub-files carry only a link
    assert_eq!(model.source_at(first), None);
    assert_eq!(model.task_id_at(first), None);
}

#[test]
fn test_sub_tasks_for_unknown_container() {
    let mut model = TaskTreeModel::new();
    model.set_tasks(&three_tasks());

    assert!(!model.append_sub_tasks("missing", &[subtask("0", "x", None)]));
    assert!(model.rows().iter().all(|row| row.children.is_empty()));
}

#[test]
fn test_container_lookup_follows_removals() {
    let mut model = TaskTreeModel::new();
    model.set_tasks(&three_tasks());
    assert_eq!(model.parent_row("id-c"), Some(2));

    model.remove_rows(&[0]);
    assert_eq!(model.parent_row("id-c"), Some(1));
    assert!(model.append_sub_tasks("id-c", &[subtask("0", "x", None)]));
    assert_eq!(model.row(1).unwrap().children.len(), 1);
}
