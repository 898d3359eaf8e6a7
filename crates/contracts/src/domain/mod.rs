pub mod a001_inventory;
pub mod a002_pos;
pub mod a003_order;
pub mod a004_customer;
pub mod a005_supplier;
pub mod a006_transaction;
pub mod common;
