//! Shared UI widgets

pub mod ingredient_chips;
pub mod upload_area;
