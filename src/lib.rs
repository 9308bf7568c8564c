//! # tagnet
//!
//! Collects tag terms for the objects of a museum collection API and turns
//! them into weighted term co-occurrence networks.
//!
//! The pipeline is: list object ids, fetch each object's tags under a
//! sliding-window rate limit, accumulate raw term lists or term pairs, then
//! weight the pairs into `Source,Target,Weight` edges.

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod processing;
pub mod storage;
pub mod ui;
