//! Unit tests for flipbook.

mod fullscreen_tests;
mod paging_tests;
mod settings_tests;
