//! Phase change models.
//!
//! This module contains models for liquid–vapor equilibrium, starting with
//! boiling point estimation.

pub mod boiling_point;
