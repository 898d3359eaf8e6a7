pub mod chart;
pub mod diagnostics;
pub mod export;
pub mod indicators;
pub mod money;
pub mod numeric;
pub mod pagination;
pub mod search;
pub mod tone;
