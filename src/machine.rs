// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

//! Capabilities the interpreter consumes from the rest of the firmware.
//!
//! All calls are fire-and-forget requests to an executor that may still be
//! completing a prior move; the interpreter never waits for physical
//! completion.

use crate::state::{Axis, Spindle};

/// Straight, circular, dwell and homing motion.
pub trait MotionExecutor {
    /// Queue a straight move to the given absolute position (millimeters).
    /// `rate` is millimeters per second, or total seconds for this move when
    /// `inverse_time` is set (negative if no F word supplied one).
    fn line(&mut self, x: f64, y: f64, z: f64, rate: f64, inverse_time: bool);

    /// Queue a circular or helical move. The tool starts at `theta_start`
    /// radians from the positive `axis_1` direction on a circle of `radius`
    /// millimeters, sweeps `angular_travel` radians (positive clockwise) and
    /// moves `depth` millimeters along `axis_2` over the full arc.
    fn arc(&mut self, theta_start: f64, angular_travel: f64, radius: f64, depth: f64,
           axis_0: Axis, axis_1: Axis, axis_2: Axis, rate: f64, inverse_time: bool);

    /// Pause for the given number of milliseconds.
    fn dwell(&mut self, milliseconds: u32);

    /// Return to the machine home position.
    fn go_home(&mut self);
}

/// Spindle actuation.
pub trait SpindleActuator {
    /// Start or update the spindle; `direction` is `Cw` or `Ccw`, `speed`
    /// is RPM/100.
    fn run(&mut self, direction: Spindle, speed: i16);

    /// Stop the spindle.
    fn stop(&mut self);
}

/// The persisted settings store behind `$` lines.
pub trait SettingsStore {
    /// Emit the current configuration (bare `$`).
    fn dump(&mut self);

    /// Persist one setting (`$<index>=<value>`).
    fn store(&mut self, index: u16, value: f64);
}

/// Everything the interpreter needs from the machine side of the firmware.
pub trait Machine: MotionExecutor + SpindleActuator + SettingsStore {}

impl<T: MotionExecutor + SpindleActuator + SettingsStore> Machine for T {}
