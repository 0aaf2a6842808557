//! relcalc: MIL-HDBK-217F reliability prediction and allocation
//!
//! Computes parts count and parts stress hazard rates, dormant rates,
//! overstress findings, goal conversions, and reliability apportionment
//! for hardware records kept as plain YAML files.

pub mod cli;
pub mod core;
pub mod entities;
