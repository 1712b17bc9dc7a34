//! Trader Psyche - Trading psychology assessment and live state monitoring
//!
//! This crate scores a trader's answers to a psychology questionnaire and
//! simulates a live psychological-state feed during a trading session,
//! raising threshold alerts and reducing each session to a report with
//! rule-based recommendations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
