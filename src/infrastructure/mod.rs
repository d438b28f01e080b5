pub mod models;
pub mod order_report_repo;
