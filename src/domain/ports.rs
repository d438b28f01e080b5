use super::errors::ReportError;
use super::report::OrderReportRow;

pub trait OrderReportRepository {
    /// Run the aggregation query and materialize every row in memory.
    fn fetch_order_report(&mut self) -> Result<Vec<OrderReportRow>, ReportError>;

    /// Release the underlying session. Dropping the repository has the same
    /// effect; this makes the end of its lifetime explicit.
    fn close(self)
    where
        Self: Sized,
    {
    }
}
