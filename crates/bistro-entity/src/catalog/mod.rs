//! Catalog entities: what a restaurant serves and shows.
//!
//! Menus and pictures belong to one restaurant. Food items and categories
//! are shared; categories are linked to menus and food through join tables.

pub mod category;
pub mod food;
pub mod menu;
pub mod picture;

pub use category::Category;
pub use food::{Food, FoodInput};
pub use menu::{Menu, MenuInput};
pub use picture::{Picture, PictureInput};
