pub mod models;
pub mod progress;
pub mod storage;
pub mod store;

pub use models::{Light, Plant, Room, WaterAmount, WateringDays};
pub use progress::DailyProgress;
pub use storage::{default_plant_file, PlantFile};
pub use store::{PlantStore, StoreEvent};
