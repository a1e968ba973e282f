use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock};
use thiserror::Error;
use uuid::Uuid;

use crate::intake::IntakeKind;
use crate::models::appointment::AppointmentRecord;
use crate::models::contact::ContactRecord;
use crate::models::health_package::HealthPackageRecord;
use crate::models::submission::{Submission, SubmissionStatus};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("submission store lock was poisoned by a panicking writer")]
    Poisoned,
}

/// Append-only, in-memory list of submissions.
///
/// Lives exactly as long as the process that created it; nothing is persisted.
/// Clones share the same list, so one store can be handed to every HTTP worker.
#[derive(Debug)]
pub struct SubmissionStore<R> {
    entries: Arc<RwLock<Vec<Submission<R>>>>,
}

impl<R> Clone for SubmissionStore<R> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<R> Default for SubmissionStore<R> {
    fn default() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<R: Clone> SubmissionStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `fields` under a fresh id and timestamp and returns the stored copy.
    pub fn append(
        &self,
        status: SubmissionStatus,
        fields: R,
    ) -> Result<Submission<R>, StoreError> {
        let submission = Submission {
            id: Uuid::new_v4().to_string(),
            status,
            created_at: Utc::now(),
            fields,
        };

        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.push(submission.clone());
        Ok(submission)
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.entries.read().map_err(|_| StoreError::Poisoned)?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    pub fn last_created_at(&self) -> Result<Option<DateTime<Utc>>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.last().map(|s| s.created_at))
    }

    /// Copy of every stored submission in arrival order.
    pub fn snapshot(&self) -> Result<Vec<Submission<R>>, StoreError> {
        Ok(self.entries.read().map_err(|_| StoreError::Poisoned)?.clone())
    }
}

/// Count and recency of one intake type's submissions.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSummary {
    pub kind: IntakeKind,
    pub total: usize,
    pub last_created_at: Option<DateTime<Utc>>,
}

/// Handles onto all three stores, for read-only reporting.
#[derive(Debug, Clone, Default)]
pub struct IntakeStores {
    pub appointments: SubmissionStore<AppointmentRecord>,
    pub contacts: SubmissionStore<ContactRecord>,
    pub health_packages: SubmissionStore<HealthPackageRecord>,
}

impl IntakeStores {
    pub fn summaries(&self) -> Result<Vec<StoreSummary>, StoreError> {
        Ok(vec![
            summarize(IntakeKind::Appointment, &self.appointments)?,
            summarize(IntakeKind::Contact, &self.contacts)?,
            summarize(IntakeKind::HealthPackage, &self.health_packages)?,
        ])
    }
}

fn summarize<R: Clone>(
    kind: IntakeKind,
    store: &SubmissionStore<R>,
) -> Result<StoreSummary, StoreError> {
    Ok(StoreSummary {
        kind,
        total: store.len()?,
        last_created_at: store.last_created_at()?,
    })
}
