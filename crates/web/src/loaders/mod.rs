//! Route loaders
//!
//! Each loader runs once per navigation, calls the API client and
//! returns the data object the page renders.

pub mod layout;
pub mod paper;
pub mod search;

#[cfg(test)]
pub(crate) mod testing;
