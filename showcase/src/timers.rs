use alloc::vec::Vec;

/// Handle returned by [`Timers::schedule`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

#[derive(Clone, Debug)]
struct Scheduled<T> {
    due_ms: u64,
    handle: TaskHandle,
    task: T,
}

/// A deadline-ordered queue of deferred tasks, driven by the host's clock.
///
/// Tasks due at the same time fire in scheduling order. Nothing fires on its own: the owner calls
/// [`Timers::take_due`] with the current time.
#[derive(Clone, Debug)]
pub struct Timers<T> {
    queue: Vec<Scheduled<T>>, // sorted by (due_ms, handle)
    next_handle: u64,
}

impl<T> Default for Timers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Timers<T> {
    pub fn new() -> Self {
        Self {
            queue: Vec::new(),
            next_handle: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn schedule(&mut self, due_ms: u64, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle = self.next_handle.wrapping_add(1);
        let at = self.queue.partition_point(|s| s.due_ms <= due_ms);
        self.queue.insert(
            at,
            Scheduled {
                due_ms,
                handle,
                task,
            },
        );
        handle
    }

    /// Removes a pending task. Returns the task if it had not fired yet.
    pub fn cancel(&mut self, handle: TaskHandle) -> Option<T> {
        let at = self.queue.iter().position(|s| s.handle == handle)?;
        Some(self.queue.remove(at).task)
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.queue.iter().any(|s| s.handle == handle)
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<u64> {
        self.queue.first().map(|s| s.due_ms)
    }

    /// Removes and returns every task with `due_ms <= now_ms`, in firing order.
    pub fn take_due(&mut self, now_ms: u64) -> Vec<T> {
        let n = self.queue.partition_point(|s| s.due_ms <= now_ms);
        self.queue.drain(..n).map(|s| s.task).collect()
    }
}
