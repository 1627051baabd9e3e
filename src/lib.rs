//! clipmix: collect selection, clipboard and note fragments into profiles and combine
//! them into one clipboard payload.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use domain::AppError;
