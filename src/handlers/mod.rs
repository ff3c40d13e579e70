// src/handlers/mod.rs

pub mod health;
pub mod question;
pub mod result;
pub mod test_paper;
