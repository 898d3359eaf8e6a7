pub mod aggregate;
pub mod analytics;
pub mod category;
pub mod filter;
pub mod seed;
pub mod store;
pub mod sub_category;
