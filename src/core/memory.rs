//! In-process task core.
//!
//! `MemoryCore` answers every request locally and keeps the task list in
//! memory. It speaks no network protocol; names are derived from URLs and sizes
//! stay unknown until a real core reports them. The binary uses it as its
//! default core, and tests use it to drive the UI end to end.

use super::{
    BatchTaskEntry, BitorrentSubTask, BitorrentTask, CoreEvent, CoreEventSender, LinkAction, QuickAction, RemoteTask,
    SingleTask, TaskCore, TaskKind, TaskLink,
};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::Path;
use url::Url;
use uuid::Uuid;

/// URL schemes accepted as task sources.
const SOURCE_SCHEMES: [&str; 6] = ["http", "https", "ftp", "magnet", "ed2k", "thunder"];

/// Size text reported for sub-files whose size is not known locally.
const UNKNOWN_SIZE: &str = "-";

pub struct MemoryCore {
    events: CoreEventSender,
    tasks: Vec<RemoteTask>,
    containers: HashMap<String, Vec<BitorrentSubTask>>,
    pending_bitorrent: Option<BitorrentTask>,
    opened_links: Vec<(TaskLink, LinkAction, bool)>,
    gdriveid: String,
}

impl MemoryCore {
    pub fn new(events: CoreEventSender) -> Self {
        Self {
            events,
            tasks: Vec::new(),
            containers: HashMap::new(),
            pending_bitorrent: None,
            opened_links: Vec::new(),
            gdriveid: Uuid::new_v4().simple().to_string(),
        }
    }

    /// Create a core that already knows `tasks`.
    pub fn with_tasks(events: CoreEventSender, tasks: Vec<RemoteTask>) -> Self {
        let mut core = Self::new(events);
        core.tasks = tasks;
        core
    }

    /// Read a JSON array of tasks, as used by the `core.seed_file` setting.
    pub fn load_seed<P: AsRef<Path>>(path: P) -> Result<Vec<RemoteTask>> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read seed file: {}", path.as_ref().display()))?;
        let tasks: Vec<RemoteTask> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse seed file: {}", path.as_ref().display()))?;
        Ok(tasks)
    }

    pub fn tasks(&self) -> &[RemoteTask] {
        &self.tasks
    }

    /// Links handed to [`TaskCore::open_link`] so far, oldest first.
    pub fn opened_links(&self) -> &[(TaskLink, LinkAction, bool)] {
        &self.opened_links
    }

    pub fn gdriveid(&self) -> &str {
        &self.gdriveid
    }

    fn send(&self, event: CoreEvent) {
        if self.events.send(event).is_err() {
            debug!("MemoryCore: event receiver dropped");
        }
    }

    fn publish_task_list(&self) {
        self.send(CoreEvent::TaskListReady(self.tasks.clone()));
        for task in self.tasks.iter().filter(|t| t.is_bitorrent()) {
            if let Some(subtasks) = self.containers.get(&task.id) {
                self.send(CoreEvent::BtSubTasksReady {
                    container_id: task.id.clone(),
                    subtasks: subtasks.clone(),
                });
            }
        }
    }

    fn push_file_task(&mut self, url: &str, name: String) {
        let link = if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            String::new()
        };

        self.tasks.push(RemoteTask {
            id: Uuid::new_v4().to_string(),
            name,
            size: 0,
            source: url.to_string(),
            link,
            kind: TaskKind::File,
        });
    }
}

/// Best-effort display name for a source URL: last path segment, else the host, else the raw text.
pub fn name_from_url(raw: &str) -> String {
    let Ok(url) = Url::parse(raw) else {
        return raw.trim().to_string();
    };

    if url.scheme() == "magnet" {
        if let Some((_, name)) = url.query_pairs().find(|(key, _)| key == "dn") {
            return name.into_owned();
        }
        return "magnet".to_string();
    }

    let segment = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            urlencoding::decode(segment)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| segment.to_string())
        });

    segment
        .or_else(|| url.host_str().map(str::to_string))
        .unwrap_or_else(|| raw.trim().to_string())
}

/// Split pasted text into URLs with a recognised scheme, in order, without duplicates.
pub fn extract_urls(text: &str) -> Vec<String> {
    let mut urls: Vec<String> = Vec::new();
    for token in text.split_whitespace() {
        let Ok(url) = Url::parse(token) else {
            continue;
        };
        if !SOURCE_SCHEMES.contains(&url.scheme()) {
            continue;
        }
        if !urls.iter().any(|u| u == token) {
            urls.push(token.to_string());
        }
    }
    urls
}

impl TaskCore for MemoryCore {
    fn resolve_single(&mut self, url: &str) {
        debug!("MemoryCore: resolving '{}'", url);
        self.send(CoreEvent::SingleTaskReady(SingleTask {
            url: url.to_string(),
            name: name_from_url(url),
            size: UNKNOWN_SIZE.to_string(),
        }));
    }

    fn submit_single(&mut self, task: &SingleTask) {
        info!("MemoryCore: adding task '{}' from {}", task.name, task.url);
        self.push_file_task(&task.url, task.name.clone());
        self.publish_task_list();
    }

    fn pre_parse_batch(&mut self, text: &str) {
        let entries: Vec<BatchTaskEntry> = extract_urls(text)
            .into_iter()
            .map(|url| BatchTaskEntry {
                size: 0,
                name: name_from_url(&url),
                url,
            })
            .collect();
        debug!("MemoryCore: parsed {} batch entries", entries.len());
        self.send(CoreEvent::BatchTaskReady(entries));
    }

    fn submit_batch(&mut self, urls: &[String]) {
        info!("MemoryCore: adding {} batch tasks", urls.len());
        for url in urls {
            self.push_file_task(url, name_from_url(url));
        }
        self.publish_task_list();
    }

    fn upload_bitorrent(&mut self, path: &Path) {
        if !path.is_file() {
            warn!("MemoryCore: torrent file not found: {}", path.display());
            return;
        }

        let title = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let task = BitorrentTask {
            task_id: Uuid::new_v4().to_string(),
            title: title.clone(),
            total_size: 0,
            subtasks: vec![BitorrentSubTask {
                id: "0".to_string(),
                file_index: "0".to_string(),
                size: UNKNOWN_SIZE.to_string(),
                name: title,
                link: None,
            }],
        };
        self.pending_bitorrent = Some(task.clone());
        self.send(CoreEvent::BitorrentTaskReady(task));
    }

    fn commit_bitorrent(&mut self, subtasks: &[BitorrentSubTask]) {
        let Some(pending) = self.pending_bitorrent.take() else {
            debug!("MemoryCore: commit without a resolved torrent");
            return;
        };

        let chosen: Vec<BitorrentSubTask> = subtasks
            .iter()
            .map(|picked| {
                let name = pending
                    .subtasks
                    .iter()
                    .find(|s| s.file_index == picked.file_index)
                    .map(|s| s.name.clone())
                    .unwrap_or_default();
                BitorrentSubTask {
                    name,
                    ..picked.clone()
                }
            })
            .collect();

        info!("MemoryCore: adding torrent '{}' with {} files", pending.title, chosen.len());
        self.tasks.push(RemoteTask {
            id: pending.task_id.clone(),
            name: pending.title,
            size: pending.total_size,
            source: String::new(),
            link: String::new(),
            kind: TaskKind::Bitorrent,
        });
        self.containers.insert(pending.task_id, chosen);
        self.publish_task_list();
    }

    fn resolve_magnet(&mut self, magnet: &str) {
        if !magnet.starts_with("magnet:?") {
            return;
        }

        let title = name_from_url(magnet);
        let task = BitorrentTask {
            task_id: Uuid::new_v4().to_string(),
            title: title.clone(),
            total_size: 0,
            subtasks: vec![BitorrentSubTask {
                id: "0".to_string(),
                file_index: "0".to_string(),
                size: UNKNOWN_SIZE.to_string(),
                name: title,
                link: None,
            }],
        };
        self.pending_bitorrent = Some(task.clone());
        self.send(CoreEvent::BitorrentTaskReady(task));
    }

    fn request_remove(&mut self, ids: &[String], rows: &[usize]) {
        info!("MemoryCore: removing {} tasks", ids.len());
        self.tasks.retain(|task| !ids.contains(&task.id));
        for id in ids {
            self.containers.remove(id);
        }
        self.send(CoreEvent::TasksRemoved(rows.to_vec()));
    }

    fn open_link(&mut self, task: &TaskLink, action: LinkAction, forced: bool) {
        info!("MemoryCore: {:?} '{}' -> {} (forced: {})", action, task.name, task.url, forced);
        self.opened_links.push((task.clone(), action, forced));
    }

    fn refresh(&mut self) {
        self.send(CoreEvent::CookiesReady(self.gdriveid.clone()));
        self.publish_task_list();
    }

    fn classify(&self, name: &str) -> QuickAction {
        let Some(mime) = mime_guess::from_path(name).first() else {
            return QuickAction::Never;
        };

        match (mime.type_().as_str(), mime.subtype().as_str()) {
            ("video", _) | ("audio", _) => QuickAction::Video,
            ("image", _) => QuickAction::Image,
            ("text", _) | ("application", "pdf") | ("application", "msword") | ("application", "epub+zip") => {
                QuickAction::Document
            }
            _ => QuickAction::Never,
        }
    }
}
