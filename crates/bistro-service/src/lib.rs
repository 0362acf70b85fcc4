//! # bistro-service
//!
//! Business logic for Bistro. The heart of the crate is
//! [`booking::admission`], the pure rule set deciding whether a
//! reservation is accepted; the services around it orchestrate
//! repositories and access control.
//!
//! Services follow constructor injection: all dependencies are handed in
//! as `Arc`s when the application is wired together.

pub mod booking;
pub mod catalog;
pub mod context;
pub mod restaurant;
pub mod user;

pub use booking::{Actor, AdmissionError, BookingAdmission, BookingService};
pub use catalog::{CategoryService, FoodService, MenuService, PictureService};
pub use context::RequestContext;
pub use restaurant::RestaurantService;
pub use user::{AdminUserService, UserService};
