use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::{
    content::store::{
        ContentStore,
        HttpTransport,
    },
    core::EditableField,
};

/// Runs every network operation on a background thread over a shared tokio
/// runtime and reports a `TaskResult` back through an mpsc channel that the
/// egui update loop drains each frame. The UI never blocks on a request; a
/// result resolving after the receiver is gone is silently dropped.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    pub fn load_page(&self, store: ContentStore<HttpTransport>, page_key: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(async { store.load(&page_key).await })
                .map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::PageLoaded { page_key, result });
        });
    }

    pub fn save_field(
        &self,
        store: ContentStore<HttpTransport>,
        page_key: String,
        field: EditableField,
        new_text: String,
    ) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(async { store.save_field(&page_key, field, &new_text).await })
                .map_err(|e| e.to_string());

            if let Err(ref e) = result {
                eprintln!("Saving {} on page '{}' failed: {}", field.name(), page_key, e);
            }

            let _ = sender.send(TaskResult::FieldSaved { page_key, field, result });
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
