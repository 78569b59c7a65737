pub mod categories;
pub mod plant;

pub use categories::{Light, Room, WaterAmount, WateringDays};
pub use plant::Plant;
