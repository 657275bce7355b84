use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};

/// Capacity policy for the producer/consumer handoff. Unbounded never applies
/// backpressure; the bounded variant evicts the oldest queued element on
/// overflow instead of blocking the producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueuePolicy {
    Unbounded,
    DropOldest { capacity: usize },
}

impl Default for QueuePolicy {
    fn default() -> Self {
        QueuePolicy::Unbounded
    }
}

#[derive(thiserror::Error, Debug)]
pub enum QueueError {
    #[error("push failed")]
    PushFailed,
    #[error("pop failed")]
    PopFailed,
}

/// FIFO handoff between one producer thread and one consumer. `try_pop` never
/// blocks; it returns `Ok(None)` when the queue is currently empty.
pub trait SampleQueue<T>: Send + Sync {
    fn push(&self, value: T) -> Result<(), QueueError>;
    fn try_pop(&self) -> Result<Option<T>, QueueError>;
}

pub struct UnboundedQueue<T> {
    sender: Mutex<Sender<T>>,
    receiver: Mutex<Receiver<T>>,
}

impl<T> UnboundedQueue<T> {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender: Mutex::new(sender),
            receiver: Mutex::new(receiver),
        }
    }
}

impl<T> Default for UnboundedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send> SampleQueue<T> for UnboundedQueue<T> {
    fn push(&self, value: T) -> Result<(), QueueError> {
        let sender = self.sender.lock().map_err(|_| QueueError::PushFailed)?;
        sender.send(value).map_err(|_| QueueError::PushFailed)
    }

    fn try_pop(&self) -> Result<Option<T>, QueueError> {
        let receiver = self.receiver.lock().map_err(|_| QueueError::PopFailed)?;
        match receiver.try_recv() {
            Ok(value) => Ok(Some(value)),
            Err(mpsc::TryRecvError::Empty) => Ok(None),
            Err(mpsc::TryRecvError::Disconnected) => Err(QueueError::PopFailed),
        }
    }
}

pub struct DropOldestQueue<T> {
    capacity: usize,
    items: Mutex<VecDeque<T>>,
}

impl<T> DropOldestQueue<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            items: Mutex::new(VecDeque::new()),
        }
    }
}

impl<T: Send> SampleQueue<T> for DropOldestQueue<T> {
    fn push(&self, value: T) -> Result<(), QueueError> {
        let mut items = self.items.lock().map_err(|_| QueueError::PushFailed)?;
        if items.len() == self.capacity {
            items.pop_front();
        }
        items.push_back(value);
        Ok(())
    }

    fn try_pop(&self) -> Result<Option<T>, QueueError> {
        let mut items = self.items.lock().map_err(|_| QueueError::PopFailed)?;
        Ok(items.pop_front())
    }
}

pub struct QueueFactory;

impl QueueFactory {
    pub fn create<T: Send + 'static>(policy: QueuePolicy) -> Arc<dyn SampleQueue<T>> {
        match policy {
            QueuePolicy::Unbounded => Arc::new(UnboundedQueue::new()),
            QueuePolicy::DropOldest { capacity } => Arc::new(DropOldestQueue::new(capacity)),
        }
    }
}
