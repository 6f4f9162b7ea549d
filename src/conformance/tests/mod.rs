//! Unit tests for the conformance module.
//!
//! Tests are organised by concern, covering happy paths, every reported
//! finding, and the ordering contract.

mod report_tests;
