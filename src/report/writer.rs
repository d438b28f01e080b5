use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use bigdecimal::{BigDecimal, RoundingMode, Zero};

use crate::domain::errors::ReportError;
use crate::domain::report::OrderReportRow;

pub const FIRST_NAME_WIDTH: usize = 15;
pub const LAST_NAME_WIDTH: usize = 15;
pub const ORDER_ID_WIDTH: usize = 10;
pub const STATUS_WIDTH: usize = 15;
pub const TOTAL_WIDTH: usize = 15;
pub const SEPARATOR_WIDTH: usize = 70;

pub fn header_line() -> String {
    format!(
        "{:<w1$}{:<w2$}{:<w3$}{:<w4$}{:<w5$}",
        "First Name",
        "Last Name",
        "Order ID",
        "Status",
        "Total Amount ($)",
        w1 = FIRST_NAME_WIDTH,
        w2 = LAST_NAME_WIDTH,
        w3 = ORDER_ID_WIDTH,
        w4 = STATUS_WIDTH,
        w5 = TOTAL_WIDTH,
    )
}

pub fn separator_line() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// Fixed-point rendering with exactly two decimals, rounding half to even.
pub fn format_amount(amount: &BigDecimal) -> String {
    let rounded = amount.with_scale_round(2, RoundingMode::HalfEven);
    // A zero value displays as "0" whatever its scale.
    if rounded.is_zero() {
        return "0.00".to_string();
    }
    rounded.to_string()
}

/// Lay out one row in the report's columns. Values wider than their column
/// are written in full and push the following columns right.
pub fn format_row(row: &OrderReportRow) -> String {
    format!(
        "{:<w1$}{:<w2$}{:<w3$}{:<w4$}{:<w5$}",
        row.first_name,
        row.last_name,
        row.order_id,
        row.order_status,
        format_amount(&row.total_amount),
        w1 = FIRST_NAME_WIDTH,
        w2 = LAST_NAME_WIDTH,
        w3 = ORDER_ID_WIDTH,
        w4 = STATUS_WIDTH,
        w5 = TOTAL_WIDTH,
    )
}

/// Writes the customer order report to a file and mirrors every line to a
/// console sink.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the report to the file and to standard output.
    pub fn generate_report(&self, rows: &[OrderReportRow]) -> Result<usize, ReportError> {
        let stdout = io::stdout();
        let mut console = stdout.lock();
        self.write_report(rows, &mut console)
    }

    /// Write the report to the file and to `console`, returning the number of
    /// data rows written.
    ///
    /// The file is truncated first, so it only ever holds the latest run. It
    /// is flushed and closed before the completion notice is printed.
    pub fn write_report<W: Write>(
        &self,
        rows: &[OrderReportRow],
        console: &mut W,
    ) -> Result<usize, ReportError> {
        {
            let mut file = BufWriter::new(File::create(&self.path)?);
            let mut emit = |line: &str| -> io::Result<()> {
                writeln!(console, "{}", line)?;
                writeln!(file, "{}", line)
            };

            emit(&header_line())?;
            emit(&separator_line())?;
            for row in rows {
                emit(&format_row(row))?;
            }
            file.flush()?;
        }

        writeln!(
            console,
            "\nReport has been generated and saved as '{}'",
            self.path.display()
        )?;
        console.flush()?;

        log::info!("Wrote {} order(s) to {}", rows.len(), self.path.display());
        Ok(rows.len())
    }
}
