//! # Mast Testkit
//!
//! Testing utilities for mast.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: A seeded identity with an in-memory store and a
//!   scripted transport, ready for pipeline tests
//! - **Responses**: Canned JSON bodies matching the hub, channel
//!   directory, and key issuer wire formats
//!
//! ## Usage
//!
//! ```rust
//! use mast_testkit::{responses, TestFixture, TEST_FID};
//!
//! let fixture = TestFixture::new();
//! fixture.transport.push_response(200, responses::submit_ack(&[0xd2; 20]));
//! ```

pub mod fixtures;
pub mod responses;

pub use fixtures::{TestFixture, TEST_FID};
