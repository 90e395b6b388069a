//! Pure league logic: fixture generation and standings computation.

mod fixture;
mod standings;

pub use fixture::{generate_fixture, MIN_PLAYERS};
pub use standings::calculate_standings;
