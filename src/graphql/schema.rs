use super::health::HealthQuery;
use super::submissions::SubmissionsQuery;
use crate::intake::IntakeStores;
use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};

/// Root query type: service health plus per-form submission counts.
#[derive(MergedObject, Default)]
pub struct QueryRoot(HealthQuery, SubmissionsQuery);

/// Main GraphQL Schema Definition
///
/// Read-only: submissions are only accepted through the REST endpoints.
pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Whether email notifications can go out, shared with resolvers.
#[derive(Debug, Clone, Copy)]
pub struct MailStatus {
    pub enabled: bool,
}

/// Creates the GraphQL schema over the live submission stores.
///
/// # Example
///
/// ```rust,no_run
/// use hospital_intake::graphql::schema::create_schema;
/// use hospital_intake::intake::IntakeStores;
///
/// let schema = create_schema(IntakeStores::default(), false);
/// ```
pub fn create_schema(stores: IntakeStores, email_enabled: bool) -> AppSchema {
    Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription)
        .data(stores)
        .data(MailStatus {
            enabled: email_enabled,
        })
        .finish()
}
