//! In-memory instrument catalog: the session's source of truth for rows
//! shown on the dashboard and refreshed against the quote provider.

mod catalog_model;
mod catalog_service;

pub use catalog_model::Stock;
pub use catalog_service::CatalogService;
