// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

//! A firmware-style RS274/NGC (G-code) line interpreter.
//!
//! The interpreter consumes one line of canonical G-code text at a time
//! (uppercase letters, signed numbers, no whitespace), keeps the modal
//! machine state between lines, and translates every line into at most one
//! physical action against the motion and spindle subsystems. Those
//! subsystems stay outside this crate, behind the capability traits in
//! [`machine`]; supply any implementation, from real stepper drivers to a
//! recording mock.
//!
//! ## Basic usage
//!
//! Create an [`interp::Interpreter`] with the configured default rates and
//! feed it lines:
//!
//! ```rust,no_run
//! use rs274::interp::Interpreter;
//! use rs274::machine::{MotionExecutor, SettingsStore, SpindleActuator};
//! use rs274::state::{Axis, Config, Spindle};
//!
//! struct Console;
//!
//! impl MotionExecutor for Console {
//!     fn line(&mut self, x: f64, y: f64, z: f64, rate: f64, _inverse_time: bool) {
//!         println!("line to ({}, {}, {}) at {}", x, y, z, rate);
//!     }
//!     fn arc(&mut self, _theta_start: f64, _angular_travel: f64, _radius: f64,
//!            _depth: f64, _axis_0: Axis, _axis_1: Axis, _axis_2: Axis,
//!            _rate: f64, _inverse_time: bool) {}
//!     fn dwell(&mut self, _milliseconds: u32) {}
//!     fn go_home(&mut self) {}
//! }
//!
//! impl SpindleActuator for Console {
//!     fn run(&mut self, _direction: Spindle, _speed: i16) {}
//!     fn stop(&mut self) {}
//! }
//!
//! impl SettingsStore for Console {
//!     fn dump(&mut self) {}
//!     fn store(&mut self, _index: u16, _value: f64) {}
//! }
//!
//! fn main() {
//!     let mut interp = Interpreter::new(&Config::default());
//!     let mut machine = Console;
//!     for line in &["G21G90", "G1X10Y5F300"] {
//!         if let Err(e) = interp.execute_line(line, &mut machine) {
//!             eprintln!("error: {}", e);
//!         }
//!     }
//! }
//! ```
//!
//! ## Unsupported features
//!
//! Expressions, numeric parameters, canned cycles, cutter compensation,
//! coordinate systems, probing and axes beyond X/Y/Z are out of scope;
//! lines using them fail with an unsupported-statement status.

pub mod arc;
pub mod error;
pub mod interp;
pub mod machine;
pub mod parse;
pub mod state;
pub mod util;
