use std::{
    sync::{
        atomic::{
            AtomicBool,
            Ordering,
        },
        mpsc,
        Arc,
    },
    time::Duration,
};

use tokio::runtime::Runtime;
use tracing::debug;

use super::{
    TaskHandle,
    TaskResult,
};
use crate::core::{
    notice::ResetTicket,
    FormdeckError,
};

pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Result<Self, FormdeckError> {
        let runtime = Arc::new(
            tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .thread_name("formdeck-tasks")
                .enable_time()
                .build()?,
        );

        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime, receiver, sender })
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

    /// Delivers `TaskResult::ResetElapsed(ticket)` after `delay` unless the
    /// returned handle is cancelled or dropped first. `notify` runs right after
    /// delivery so the owner can wake its event loop.
    pub fn schedule_reset<F>(&self, ticket: ResetTicket, delay: Duration, notify: F) -> TaskHandle
    where
        F: FnOnce() + Send + 'static,
    {
        let (sender, runtime) = self.task_context();
        let cancel_token = Arc::new(AtomicBool::new(false));
        let task_token = cancel_token.clone();

        debug!(generation = ticket.generation(), ?delay, "reset scheduled");

        let join_handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if task_token.load(Ordering::Relaxed) {
                return;
            }
            if sender.send(TaskResult::ResetElapsed(ticket)).is_ok() {
                notify();
            }
        });

        TaskHandle::new(cancel_token, join_handle)
    }

    pub fn request_save_settings(&self) {
        let (sender, _) = self.task_context();
        let _ = sender.send(TaskResult::RequestSaveSettings);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::core::notice::NoticeState;

    fn wait_for(manager: &mut TaskManager, timeout: Duration) -> Vec<TaskResult> {
        let start = Instant::now();
        loop {
            let results = manager.poll_results();
            if !results.is_empty() || start.elapsed() >= timeout {
                return results;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn scheduled_reset_delivers_ticket() {
        let mut manager = TaskManager::new().unwrap();
        let ticket = NoticeState::new().show_success("ok");

        let notified = Arc::new(AtomicBool::new(false));
        let flag = notified.clone();
        let handle = manager.schedule_reset(ticket, Duration::from_millis(10), move || {
            flag.store(true, Ordering::SeqCst);
        });
        let results = wait_for(&mut manager, Duration::from_secs(2));

        assert_eq!(results, vec![TaskResult::ResetElapsed(ticket)]);
        assert!(!handle.is_cancelled());
        std::thread::sleep(Duration::from_millis(20));
        assert!(notified.load(Ordering::SeqCst));
    }

    #[test]
    fn cancelled_reset_never_delivers() {
        let mut manager = TaskManager::new().unwrap();
        let ticket = NoticeState::new().show_success("ok");

        let handle = manager.schedule_reset(ticket, Duration::from_millis(50), || {});
        handle.cancel();
        assert!(handle.is_cancelled());

        std::thread::sleep(Duration::from_millis(150));
        assert!(manager.poll_results().is_empty());
    }

    #[test]
    fn dropped_handle_cancels_reset() {
        let mut manager = TaskManager::new().unwrap();
        let ticket = NoticeState::new().show_success("ok");

        drop(manager.schedule_reset(ticket, Duration::from_millis(50), || {}));

        std::thread::sleep(Duration::from_millis(150));
        assert!(manager.poll_results().is_empty());
    }

    #[test]
    fn save_request_round_trips_through_channel() {
        let mut manager = TaskManager::new().unwrap();
        manager.request_save_settings();
        let results = manager.poll_results();
        assert_eq!(results, vec![TaskResult::RequestSaveSettings]);
        assert_eq!(results[0].task_type(), "request_save_settings");
    }
}
