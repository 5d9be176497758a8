//! Record store: the single owner of contractors, workers, attendance and
//! payments, plus the selected contractor.
//!
//! Every mutation is one synchronous state transition. Subscribers run after
//! the transition has completed and see the new snapshot; a mutation that
//! fails leaves the store untouched and notifies nobody.

pub mod audit;
pub mod ids;
pub mod observer;
pub mod seed;

use crate::errors::{AppError, AppResult};
use crate::models::{
    AttendanceRecord, Contractor, LabourStatus, NewAttendance, NewPayment, NewWorker, Payment,
    Worker,
};
use audit::{AuditEntry, AuditLog};
use ids::IdGenerator;
use observer::{StoreEvent, SubscriptionId, Subscribers};
use std::collections::HashSet;
use tracing::debug;

const MAX_ID_ATTEMPTS: usize = 16;

/// Read-only view of the store at one point in time.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub contractors: &'a [Contractor],
    pub workers: &'a [Worker],
    pub attendance: &'a [AttendanceRecord],
    pub payments: &'a [Payment],
    pub selected_contractor_id: Option<&'a str>,
}

impl<'a> Snapshot<'a> {
    pub fn contractor(&self, id: &str) -> Option<&'a Contractor> {
        self.contractors.iter().find(|c| c.id == id)
    }

    pub fn worker(&self, id: &str) -> Option<&'a Worker> {
        self.workers.iter().find(|w| w.id == id)
    }

    pub fn selected_contractor(&self) -> Option<&'a Contractor> {
        self.selected_contractor_id.and_then(|id| self.contractor(id))
    }
}

pub struct RecordStore {
    contractors: Vec<Contractor>,
    workers: Vec<Worker>,
    attendance: Vec<AttendanceRecord>,
    payments: Vec<Payment>,
    selected_contractor_id: Option<String>,
    ids: Box<dyn IdGenerator>,
    issued: HashSet<String>,
    subscribers: Subscribers,
    audit: AuditLog,
}

impl RecordStore {
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            contractors: Vec::new(),
            workers: Vec::new(),
            attendance: Vec::new(),
            payments: Vec::new(),
            selected_contractor_id: None,
            ids,
            issued: HashSet::new(),
            subscribers: Subscribers::default(),
            audit: AuditLog::default(),
        }
    }

    /// Store pre-populated with existing records. Their ids count as issued.
    pub fn with_records(
        ids: Box<dyn IdGenerator>,
        contractors: Vec<Contractor>,
        workers: Vec<Worker>,
        attendance: Vec<AttendanceRecord>,
        payments: Vec<Payment>,
    ) -> Self {
        let mut store = Self::new(ids);

        store.issued.extend(contractors.iter().map(|c| c.id.clone()));
        store.issued.extend(workers.iter().map(|w| w.id.clone()));
        store.issued.extend(attendance.iter().map(|a| a.id.clone()));
        store.issued.extend(payments.iter().map(|p| p.id.clone()));

        store.contractors = contractors;
        store.workers = workers;
        store.attendance = attendance;
        store.payments = payments;
        store
    }

    /// Store holding the fixed seed records a session starts from.
    pub fn seeded(ids: Box<dyn IdGenerator>) -> Self {
        let seed = seed::seed_data();
        Self::with_records(
            ids,
            seed.contractors,
            seed.workers,
            seed.attendance,
            seed.payments,
        )
    }

    // ---------------------------
    // Read accessors
    // ---------------------------

    pub fn contractors(&self) -> &[Contractor] {
        &self.contractors
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    /// Newest first.
    pub fn attendance(&self) -> &[AttendanceRecord] {
        &self.attendance
    }

    /// Newest first.
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    pub fn selected_contractor_id(&self) -> Option<&str> {
        self.selected_contractor_id.as_deref()
    }

    pub fn contractor(&self, id: &str) -> Option<&Contractor> {
        self.contractors.iter().find(|c| c.id == id)
    }

    pub fn worker(&self, id: &str) -> Option<&Worker> {
        self.workers.iter().find(|w| w.id == id)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            contractors: &self.contractors,
            workers: &self.workers,
            attendance: &self.attendance,
            payments: &self.payments,
            selected_contractor_id: self.selected_contractor_id.as_deref(),
        }
    }

    pub fn audit_log(&self) -> &[AuditEntry] {
        self.audit.entries()
    }

    // ---------------------------
    // Subscriptions
    // ---------------------------

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent, &Snapshot<'_>) + 'static,
    {
        self.subscribers.subscribe(Box::new(callback))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    // ---------------------------
    // Mutations
    // ---------------------------

    /// Set the selection cursor. No existence check: an unknown id simply
    /// resolves to an empty crew.
    pub fn set_selected_contractor(&mut self, id: Option<&str>) {
        self.selected_contractor_id = id.map(str::to_string);
        let message = match id {
            Some(c) => format!("Selected contractor {c}"),
            None => "Cleared contractor selection".to_string(),
        };
        self.commit(
            StoreEvent::SelectionChanged {
                contractor_id: self.selected_contractor_id.clone(),
            },
            &message,
        );
    }

    /// Prepend a new attendance record and return its id.
    pub fn add_attendance(&mut self, record: NewAttendance) -> AppResult<String> {
        let id = self.fresh_id()?;
        let message = format!(
            "{} {} {}h at {}",
            record.worker_id,
            record.presence,
            record.hours_worked,
            record.date.format("%Y-%m-%d")
        );
        self.attendance.insert(0, record.with_id(id.clone()));
        self.commit(StoreEvent::AttendanceAdded { id: id.clone() }, &message);
        Ok(id)
    }

    /// Patch the presence of a logged attendance record. The worker's own
    /// status is left alone.
    pub fn update_attendance_presence(&mut self, id: &str, presence: LabourStatus) -> AppResult<()> {
        let record = self
            .attendance
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::not_found("Attendance record", id))?;

        let previous = record.presence;
        record.presence = presence;

        self.commit(
            StoreEvent::AttendancePresenceUpdated {
                id: id.to_string(),
                presence,
            },
            &format!("{previous} → {presence}"),
        );
        Ok(())
    }

    /// Prepend a new payment and return its id.
    pub fn add_payment(&mut self, payment: NewPayment) -> AppResult<String> {
        let id = self.fresh_id()?;
        let message = format!(
            "{} {} {}",
            payment.worker_id, payment.category, payment.amount
        );
        self.payments.insert(0, payment.with_id(id.clone()));
        self.commit(StoreEvent::PaymentAdded { id: id.clone() }, &message);
        Ok(id)
    }

    pub fn update_worker_status(&mut self, worker_id: &str, status: LabourStatus) -> AppResult<()> {
        let worker = self
            .workers
            .iter_mut()
            .find(|w| w.id == worker_id)
            .ok_or_else(|| AppError::not_found("Worker", worker_id))?;

        let previous = worker.status;
        worker.status = status;

        self.commit(
            StoreEvent::WorkerStatusUpdated {
                worker_id: worker_id.to_string(),
                status,
            },
            &format!("{previous} → {status}"),
        );
        Ok(())
    }

    /// Append a new worker and return its id.
    pub fn add_worker(&mut self, worker: NewWorker) -> AppResult<String> {
        let id = self.fresh_id()?;
        let message = format!(
            "{} ({}) for {}",
            worker.name, worker.trade, worker.contractor_id
        );
        self.workers.push(worker.with_id(id.clone()));
        self.commit(StoreEvent::WorkerAdded { id: id.clone() }, &message);
        Ok(id)
    }

    // ---------------------------
    // Internals
    // ---------------------------

    /// Draw ids until one has never been issued by this store.
    fn fresh_id(&mut self) -> AppResult<String> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = self.ids.next_id();
            if self.issued.insert(candidate.clone()) {
                return Ok(candidate);
            }
            debug!(id = %candidate, "id already issued, drawing again");
        }
        Err(AppError::IdCollision(MAX_ID_ATTEMPTS))
    }

    /// Record the completed transition and notify subscribers.
    fn commit(&mut self, event: StoreEvent, message: &str) {
        debug!(operation = event.operation(), record = event.target(), "{message}");
        self.audit.record(event.operation(), event.target(), message);

        // Callbacks get a shared view of the store while the subscriber
        // list itself is borrowed mutably, so it is moved out for the call.
        let mut subscribers = std::mem::take(&mut self.subscribers);
        subscribers.notify(&event, &self.snapshot());
        self.subscribers = subscribers;
    }
}
