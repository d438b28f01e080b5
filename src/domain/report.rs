use bigdecimal::BigDecimal;

/// One line of the customer order report: an order, who placed it, and the
/// discounted total of its line items as computed by the database.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderReportRow {
    pub first_name: String,
    pub last_name: String,
    pub order_id: i32,
    pub order_status: String,
    pub total_amount: BigDecimal,
}
