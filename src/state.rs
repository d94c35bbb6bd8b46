// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

use strum_macros::Display;

use crate::util::Vec3;

/// A linear axis of the machine.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display)]
pub enum Axis {
    X, Y, Z,
}

/// The plane selected for arc motion (G17-G19).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display)]
pub enum Plane {
    XY, XZ, YZ,
}

impl Plane {
    /// The two in-plane axes, then the helical depth axis.
    pub fn axes(self) -> (Axis, Axis, Axis) {
        match self {
            Plane::XY => (Axis::X, Axis::Y, Axis::Z),
            Plane::XZ => (Axis::X, Axis::Z, Axis::Y),
            Plane::YZ => (Axis::Y, Axis::Z, Axis::X),
        }
    }
}

impl Default for Plane {
    fn default() -> Self { Plane::XY }
}

/// The active motion mode (G0-G3, G80).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MotionMode {
    RapidLinear,
    Linear,
    ClockwiseArc,
    CounterClockwiseArc,
    Cancel,
}

/// Length units for entered coordinates and rates (G20, G21).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Units {
    Millimeters,
    Inches,
}

/// How axis words combine with the current position (G90, G91).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Positioning {
    Absolute,
    Relative,
}

/// Program flow, driven by M0-M1 and M2/M30/M60.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProgramFlow {
    Running,
    Paused,
    Completed,
}

/// A spindle rotation state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Spindle {
    Off, Cw, Ccw,
}

impl Default for Spindle {
    fn default() -> Self { Spindle::Off }
}

/// Startup settings, as read from the persisted configuration store.
/// Rates are in units per minute, the form the store keeps them in.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub default_feed_rate: f64,
    pub default_seek_rate: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config { default_feed_rate: 500., default_seek_rate: 500. }
    }
}

/// The modal machine state carried between lines.
///
/// Initialized once at startup and mutated only by the interpreter; every
/// mode stays in effect until a later command changes it.
#[derive(Clone, PartialEq, Debug)]
pub struct ModalState {
    pub motion_mode: MotionMode,
    /// F means total seconds per move instead of units per minute (G93).
    pub inverse_feed_rate_mode: bool,
    pub units: Units,
    pub positioning: Positioning,
    pub program_flow: ProgramFlow,
    pub spindle_direction: Spindle,
    /// Millimeters per second.
    pub feed_rate: f64,
    /// Millimeters per second.
    pub seek_rate: f64,
    /// Where the interpreter believes the tool to be, in millimeters. The
    /// executor may still be working through earlier moves.
    pub position: Vec3,
    pub tool: u16,
    /// RPM/100, as given by the S word.
    pub spindle_speed: i16,
    pub plane: Plane,
}

impl ModalState {
    pub fn new(config: &Config) -> Self {
        ModalState {
            motion_mode: MotionMode::RapidLinear,
            inverse_feed_rate_mode: false,
            units: Units::Millimeters,
            positioning: Positioning::Absolute,
            program_flow: ProgramFlow::Running,
            spindle_direction: Spindle::default(),
            feed_rate: config.default_feed_rate / 60.,
            seek_rate: config.default_seek_rate / 60.,
            position: Vec3::ZERO,
            tool: 0,
            spindle_speed: 0,
            plane: Plane::default(),
        }
    }
}
