//! # Nozzle Flow Module
//!
//! This module computes a one-dimensional steady-flow approximation through a
//! converging-diverging nozzle with a single MacCormack predictor-corrector pass.
//!
//! ## Mathematical Model
//!
//! ### Nomenclature
//!
//! | Symbol | Description | Units |
//! |--------|-------------|-------|
//! | `x` | Coordinate along the nozzle axis | - |
//! | `P` | Pressure (dimensionless) | - |
//! | `T` | Temperature (dimensionless) | - |
//! | `V` | Velocity (dimensionless) | - |
//! | `a` | Diffusion coefficient | - |
//! | `dt` | Time step | - |
//! | `dx` | Grid step | - |
//!
//! ### Initial Profiles
//!
//! ```text
//! P(x) = 1 - 0.3146·x
//! T(x) = 1 - 0.2314·x
//! ```
//!
//! ### MacCormack Scheme
//!
//! For a field `u` with fixed values at both ends:
//!
//! ```text
//! predictor:  u*_i = u_i - a·(dt/dx)·(u_{i+1} - u_i)
//! corrector:  u'_i = ½(u_i + u*_i) - (a/2)·(dt/dx)·(u*_{i+1} - u*_{i-1})
//! ```
//!
//! The same stepper is applied to pressure and to temperature.
//!
//! ### Velocity
//!
//! ```text
//! V(x) = (0.1 + 1.09·x)·√T'
//! ```
//!
//! where `T'` is the corrected temperature. A negative `T'` (reachable with large
//! diffusion numbers) gives `NaN`, which is reported as is.
//!
//! ## Pipeline
//!
//! grid → initial profiles → predictor/corrector (P, then T) → velocity → report

pub mod fields;
pub mod grid;
pub mod initial_fields;
pub mod maccormack;
pub mod nozzle_output;
pub mod nozzle_solver;
pub mod nozzle_task;
mod nozzle_tests;
pub mod velocity;
