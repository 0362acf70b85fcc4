//! HTTP-level tests run against the full router.
//!
//! Most suites use a lazy pool that never connects, so every request they
//! exercise is answered before a query is issued. `booking_flow_test` needs
//! a real database and skips unless `BISTRO_TEST_DATABASE_URL` is set.

mod account_test;
mod booking_flow_test;
mod booking_test;
mod catalog_test;
mod health_test;
mod helpers;
