//! Restaurant entities and opening-hours value objects.

pub mod model;
pub mod opening;

pub use model::{CreateRestaurant, Restaurant, UpdateRestaurant};
pub use opening::{OpeningWindow, parse_wall_clock};
