pub mod connection;
pub mod matches;
pub mod models;
pub mod players;
pub mod repository;
pub mod setup;

pub use models::*;
pub use repository::{SqliteRepository, TournamentRepository};
