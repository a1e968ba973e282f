pub mod configuration;
pub mod cors;
pub mod error;
pub mod graphql;
pub mod intake;
pub mod mailer;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod templates;
pub mod validation;
