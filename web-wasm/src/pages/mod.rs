//! The four screens

pub mod detect;
pub mod home;
pub mod recipe_detail;
pub mod recipes;
