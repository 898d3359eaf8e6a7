pub mod cart;
pub mod checkout;
pub mod product;
pub mod seed;
