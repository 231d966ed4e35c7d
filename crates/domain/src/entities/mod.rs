//! Domain entities - Core business objects with identity

mod kingdom;
mod place;
mod player_record;

pub use kingdom::Kingdom;
pub use place::Place;
pub use player_record::PlayerRecord;
