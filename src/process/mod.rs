// src/process/mod.rs
pub mod lookup;
pub mod parse;
pub mod table;
pub mod utils;
