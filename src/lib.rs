//! SIAMA Toolbox - Stakeholder Identification, Analysis and Market Analysis
//!
//! This crate implements the data collection and analysis workflow used to
//! plan craft education programs: questionnaires and actor records (SIT),
//! stakeholder ratings and maps (SAT), and market research tools (MAT),
//! served over a JSON HTTP API with JSON and spreadsheet export.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
