//! Касса: каталог, корзина и оформление оплаты

mod cart;
mod catalog;
mod checkout;
mod page;

pub use page::PosPage;
