pub mod center;
pub mod placeholder;
pub mod registry;

pub use center::Center;
