//! Dashboard composition: catalog rows in, rendered view models out.

mod model;
mod service;

pub use model::DashboardView;
pub use service::DashboardService;
