//! Page handlers module

pub mod health;
pub mod pages;
