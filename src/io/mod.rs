//! File I/O for usage scenarios and estimate results.
//!
//! Scenario documents hold the user-entered counts plus the grid and
//! efficiency selection; results can be exported for downstream display.
//! Nothing is read or written except on explicit request.

pub mod json;

pub use json::{
    from_scenario_string, read_scenario, to_result_string, to_scenario_string, write_result,
    write_scenario, Scenario,
};
