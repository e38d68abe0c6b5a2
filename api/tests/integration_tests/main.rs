//! Integration tests for the Lokirelay API.
//!
//! These tests run the relay against a fake Loki backend and verify the
//! pull endpoint, the push channel, and the health endpoint end to end.

mod health_tests;
mod ws_tests;
