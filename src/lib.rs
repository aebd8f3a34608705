#![forbid(unsafe_code)]

pub mod client;
pub mod export;
pub mod model;
pub mod view;
