use bigdecimal::BigDecimal;
use diesel::prelude::*;
use diesel::sql_types::{Integer, Numeric, Text};

use crate::domain::report::OrderReportRow;

/// Shape of a row returned by the order report aggregation query.
#[derive(Debug, QueryableByName)]
pub struct OrderReportRecord {
    #[diesel(sql_type = Text)]
    pub first_name: String,
    #[diesel(sql_type = Text)]
    pub last_name: String,
    #[diesel(sql_type = Integer)]
    pub order_id: i32,
    #[diesel(sql_type = Text)]
    pub order_status: String,
    #[diesel(sql_type = Numeric)]
    pub total_amount: BigDecimal,
}

impl From<OrderReportRecord> for OrderReportRow {
    fn from(r: OrderReportRecord) -> Self {
        OrderReportRow {
            first_name: r.first_name,
            last_name: r.last_name,
            order_id: r.order_id,
            order_status: r.order_status,
            total_amount: r.total_amount,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::customers)]
pub struct NewCustomerRow {
    pub customer_id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrderRow {
    pub order_id: i32,
    pub customer_id: i32,
    pub order_status: i16,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::order_items)]
pub struct NewOrderItemRow {
    pub order_id: i32,
    pub item_id: i32,
    pub quantity: i32,
    pub list_price: BigDecimal,
    pub discount: BigDecimal,
}
