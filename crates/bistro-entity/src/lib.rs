//! # bistro-entity
//!
//! Domain entity models for Bistro. Database entities derive
//! `sqlx::FromRow`; value objects such as [`restaurant::OpeningWindow`]
//! live next to the entity that owns them.

pub mod booking;
pub mod catalog;
pub mod restaurant;
pub mod user;
