pub mod audit;
pub mod build;
pub mod classify;
pub mod history;
pub mod reasoning;
pub mod signal;
pub mod status;
pub mod timeline;

pub use build::{build_views, ReportViews};
pub use classify::{classify, classify_events, ClassifiedSet};
