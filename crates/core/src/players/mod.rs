pub mod players_model;
pub mod players_service;
pub mod players_traits;
pub use players_model::*;
pub use players_service::PlayerService;
pub use players_traits::{PlayerRepositoryTrait, PlayerServiceTrait};
