// Mirrors the store database the report reads from.

diesel::table! {
    customers (customer_id) {
        customer_id -> Int4,
        #[max_length = 255]
        first_name -> Varchar,
        #[max_length = 255]
        last_name -> Varchar,
    }
}

diesel::table! {
    orders (order_id) {
        order_id -> Int4,
        customer_id -> Int4,
        order_status -> Int2,
    }
}

diesel::table! {
    order_items (order_id, item_id) {
        order_id -> Int4,
        item_id -> Int4,
        quantity -> Int4,
        list_price -> Numeric,
        discount -> Numeric,
    }
}

diesel::joinable!(orders -> customers (customer_id));
diesel::joinable!(order_items -> orders (order_id));

diesel::allow_tables_to_appear_in_same_query!(customers, orders, order_items,);
