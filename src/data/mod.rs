pub mod filter;
pub mod selection;
pub mod series;
