use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::domain::errors::ReportError;
use crate::domain::ports::OrderReportRepository;
use crate::domain::report::OrderReportRow;

use super::models::OrderReportRecord;

/// Per-order totals: price times quantity, less the per-item discount
/// percentage, summed over the order's line items.
pub const ORDER_REPORT_QUERY: &str = r#"
    SELECT customers.first_name,
           customers.last_name,
           orders.order_id,
           CAST(orders.order_status AS TEXT) AS order_status,
           SUM(order_items.list_price * order_items.quantity
               * (1 - order_items.discount / 100.0)) AS total_amount
    FROM orders
    INNER JOIN customers ON orders.customer_id = customers.customer_id
    INNER JOIN order_items ON orders.order_id = order_items.order_id
    GROUP BY orders.order_id, customers.first_name, customers.last_name, orders.order_status
    ORDER BY orders.order_id
"#;

// ── Repository ────────────────────────────────────────────────────────────────

pub struct DieselOrderReportRepository {
    conn: PgConnection,
}

impl DieselOrderReportRepository {
    pub fn new(conn: PgConnection) -> Self {
        Self { conn }
    }
}

impl OrderReportRepository for DieselOrderReportRepository {
    fn fetch_order_report(&mut self) -> Result<Vec<OrderReportRow>, ReportError> {
        log::debug!("Running order report query");

        let records: Vec<OrderReportRecord> =
            diesel::sql_query(ORDER_REPORT_QUERY).load(&mut self.conn)?;

        log::info!("Fetched {} order(s)", records.len());
        Ok(records.into_iter().map(OrderReportRow::from).collect())
    }

    fn close(self) {
        drop(self.conn);
        log::debug!("Database connection closed");
    }
}
