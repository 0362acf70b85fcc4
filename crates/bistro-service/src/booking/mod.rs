//! Bookings: admission control and its persistence.

pub mod admission;
pub mod service;

pub use admission::{
    Actor, AdmissionError, BookingAdmission, BookingRequest, BookingUpdate, ValidatedRequest,
    authorize_modification,
};
pub use service::BookingService;
