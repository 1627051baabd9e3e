pub mod board;
pub mod boxes;
pub mod combine;
pub mod preferences;
pub mod profiles;
pub mod session;
pub mod sync;
