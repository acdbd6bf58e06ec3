//! Integration tests for the rider controller using the `TestRiderCity`
//! harness.
//!
//! Each test spins up a headless App with `RiderControlPlugin`, spawns
//! host-shaped entities and checks what the controller leaves behind after
//! a number of frames.

mod status_tests;
mod suppression_tests;
