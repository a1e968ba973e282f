use async_graphql::{Context, Object, Result, SimpleObject};

use crate::intake::{IntakeStores, store::StoreSummary};

/// Count and recency of one kind of form.
#[derive(Debug, SimpleObject)]
pub struct SubmissionSummary {
    /// `appointment`, `contact` or `health_package`.
    pub kind: String,
    pub total: u64,
    /// RFC 3339 time of the latest submission, null when none arrived yet.
    pub last_submitted_at: Option<String>,
}

impl From<StoreSummary> for SubmissionSummary {
    fn from(summary: StoreSummary) -> Self {
        Self {
            kind: summary.kind.to_string(),
            total: summary.total as u64,
            last_submitted_at: summary.last_created_at.map(|at| at.to_rfc3339()),
        }
    }
}

#[derive(Default)]
pub struct SubmissionsQuery;

#[Object]
impl SubmissionsQuery {
    /// Per-form submission counts since the process started.
    async fn submissions(&self, ctx: &Context<'_>) -> Result<Vec<SubmissionSummary>> {
        let stores = ctx.data::<IntakeStores>()?;
        Ok(stores
            .summaries()?
            .into_iter()
            .map(SubmissionSummary::from)
            .collect())
    }
}
