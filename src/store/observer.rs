//! Synchronous change notification for store subscribers.

use super::Snapshot;
use crate::models::LabourStatus;

/// What changed in the last completed state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    SelectionChanged { contractor_id: Option<String> },
    AttendanceAdded { id: String },
    AttendancePresenceUpdated { id: String, presence: LabourStatus },
    PaymentAdded { id: String },
    WorkerStatusUpdated { worker_id: String, status: LabourStatus },
    WorkerAdded { id: String },
}

impl StoreEvent {
    pub fn operation(&self) -> &'static str {
        match self {
            StoreEvent::SelectionChanged { .. } => "select",
            StoreEvent::AttendanceAdded { .. } => "attendance_add",
            StoreEvent::AttendancePresenceUpdated { .. } => "attendance_presence",
            StoreEvent::PaymentAdded { .. } => "payment_add",
            StoreEvent::WorkerStatusUpdated { .. } => "worker_status",
            StoreEvent::WorkerAdded { .. } => "worker_add",
        }
    }

    /// Id of the record the event is about (empty for a cleared selection).
    pub fn target(&self) -> &str {
        match self {
            StoreEvent::SelectionChanged { contractor_id } => {
                contractor_id.as_deref().unwrap_or("")
            }
            StoreEvent::AttendanceAdded { id }
            | StoreEvent::AttendancePresenceUpdated { id, .. }
            | StoreEvent::PaymentAdded { id }
            | StoreEvent::WorkerAdded { id } => id,
            StoreEvent::WorkerStatusUpdated { worker_id, .. } => worker_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&StoreEvent, &Snapshot<'_>)>;

#[derive(Default)]
pub(crate) struct Subscribers {
    next: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl Subscribers {
    pub(crate) fn subscribe(&mut self, callback: Callback) -> SubscriptionId {
        self.next += 1;
        let id = SubscriptionId(self.next);
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(sid, _)| *sid != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Invoke every callback in subscription order.
    pub(crate) fn notify(&mut self, event: &StoreEvent, snapshot: &Snapshot<'_>) {
        for (_, callback) in self.entries.iter_mut() {
            callback(event, snapshot);
        }
    }
}
