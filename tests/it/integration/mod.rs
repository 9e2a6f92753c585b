//! Integration tests for flipbook.
//!
//! These tests verify the interaction between the viewer, its source and
//! the fullscreen platform, and walk complete navigation workflows.

mod navigation_flow_tests;
