//! Backend service client

pub mod backend;
