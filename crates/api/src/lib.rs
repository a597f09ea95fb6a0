//! `stockcast-api` — HTTP surface for the reporting dashboard.

pub mod app;
