//! Monthly attendance reporting engine.
//!
//! This crate builds a per-employee, per-day attendance matrix for a month
//! or a whole year, aggregates it into present/absent/half-day counters, and
//! serializes the result as a spreadsheet workbook.
//!
//! The pipeline runs in order: [`engine::generate_calendar`],
//! [`engine::build_matrix`], [`engine::summarize_matrix`],
//! [`report::render_range`] and [`export::export_document`].
//! [`pipeline::ReportPipeline`] wires them together, and [`api`] exposes
//! them over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod pipeline;
pub mod report;
