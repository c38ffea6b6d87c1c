//! `pointlist` — terminal task list sorted by point value.

pub mod app;
pub mod config;
pub mod seed;
pub mod ui;
