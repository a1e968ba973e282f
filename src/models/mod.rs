/// Appointment booking payload, record and intake schema.
pub mod appointment;

/// General contact form.
pub mod contact;

/// Health status response shared by REST and GraphQL.
pub mod health;

pub mod health_package;

/// Deserializers that accept numbers where text is expected.
pub mod lenient;

/// Stored submission envelope and response enums.
pub mod submission;

pub use health::HealthResponse;
