use std::io::Write;

use crate::domain::errors::ReportError;
use crate::domain::ports::OrderReportRepository;
use crate::domain::report::OrderReportRow;
use crate::report::ReportWriter;

pub struct ReportService<R> {
    repo: R,
    writer: ReportWriter,
}

impl<R: OrderReportRepository> ReportService<R> {
    pub fn new(repo: R, writer: ReportWriter) -> Self {
        Self { repo, writer }
    }

    pub fn fetch_order_report(&mut self) -> Result<Vec<OrderReportRow>, ReportError> {
        self.repo.fetch_order_report()
    }

    /// Fetch the report rows and write them out. Returns the number of rows.
    pub fn generate<W: Write>(&mut self, console: &mut W) -> Result<usize, ReportError> {
        let rows = self.fetch_order_report()?;
        self.writer.write_report(&rows, console)
    }

    pub fn into_repository(self) -> R {
        self.repo
    }
}

/// Connect, aggregate, write, close.
///
/// When `connect` fails nothing else runs: no query is issued and the report
/// file is left untouched. Otherwise the repository is closed whether or not
/// the report was produced.
pub fn run_pipeline<R, C, W>(
    connect: C,
    writer: ReportWriter,
    console: &mut W,
) -> Result<usize, ReportError>
where
    R: OrderReportRepository,
    C: FnOnce() -> Result<R, ReportError>,
    W: Write,
{
    let repo = connect()?;

    let mut service = ReportService::new(repo, writer);
    let result = service.generate(console);
    service.into_repository().close();
    result
}
