pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod infrastructure;
pub mod report;
pub mod schema;

pub use application::report_service::{run_pipeline, ReportService};
pub use config::Settings;
pub use db::connect;
pub use domain::errors::ReportError;
pub use domain::ports::OrderReportRepository;
pub use domain::report::OrderReportRow;
pub use infrastructure::order_report_repo::DieselOrderReportRepository;
pub use report::ReportWriter;
