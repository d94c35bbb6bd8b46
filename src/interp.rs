// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

//! The two-pass line interpreter: pass 1 applies G/M/T commands to the modal
//! state, pass 2 binds the numeric parameters, then exactly one physical
//! action is dispatched to the machine.

use log::{debug, trace};

use crate::arc::{self, Center};
use crate::error::Error;
use crate::machine::Machine;
use crate::parse::{self, Setting, Word};
use crate::state::{Axis, Config, ModalState, MotionMode, Plane, Positioning,
                   ProgramFlow, Spindle, Units};
use crate::util::{to_millimeters, Vec3};

/// A command recognized by pass 1, mapped from its (letter, code) pair.
///
/// Most variants mutate one modal field; `Dwell`, `GoHome` and
/// `AbsoluteOverride` arm a one-shot effect for the current line only.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Command {
    Motion(MotionMode),
    Dwell,
    SelectPlane(Plane),
    Units(Units),
    GoHome,
    AbsoluteOverride,
    Positioning(Positioning),
    InverseFeedRate(bool),
    Flow(ProgramFlow),
    Spindle(Spindle),
    Tool(u16),
}

impl Command {
    /// Classify one statement. `Ok(None)` for letters pass 1 does not care
    /// about; an error for G/M codes with no defined meaning.
    fn from_word(word: &Word) -> Result<Option<Command>, Error> {
        let code = word.value.trunc() as i32;
        Ok(Some(match word.letter {
            'G' => match code {
                0 => Command::Motion(MotionMode::RapidLinear),
                1 => Command::Motion(MotionMode::Linear),
                2 => Command::Motion(MotionMode::ClockwiseArc),
                3 => Command::Motion(MotionMode::CounterClockwiseArc),
                4 => Command::Dwell,
                17 => Command::SelectPlane(Plane::XY),
                18 => Command::SelectPlane(Plane::XZ),
                19 => Command::SelectPlane(Plane::YZ),
                20 => Command::Units(Units::Inches),
                21 => Command::Units(Units::Millimeters),
                28 | 30 => Command::GoHome,
                53 => Command::AbsoluteOverride,
                80 => Command::Motion(MotionMode::Cancel),
                90 => Command::Positioning(Positioning::Absolute),
                91 => Command::Positioning(Positioning::Relative),
                93 => Command::InverseFeedRate(true),
                94 => Command::InverseFeedRate(false),
                _ => return Err(Error::UnsupportedStatement),
            },
            'M' => match code {
                0 | 1 => Command::Flow(ProgramFlow::Paused),
                2 | 30 | 60 => Command::Flow(ProgramFlow::Completed),
                3 => Command::Spindle(Spindle::Cw),
                4 => Command::Spindle(Spindle::Ccw),
                5 => Command::Spindle(Spindle::Off),
                _ => return Err(Error::UnsupportedStatement),
            },
            'T' => Command::Tool(code as u16),
            _ => return Ok(None),
        }))
    }
}

/// The single physical action a line resolves to.
#[derive(Clone, Copy, PartialEq)]
enum NextAction {
    Motion,
    Dwell,
    GoHome,
}

/// The line interpreter.
///
/// Owns the modal state and turns one canonical line of RS274/NGC text at a
/// time into at most one physical action against the machine.
pub struct Interpreter {
    state: ModalState,
}

impl Interpreter {
    /// A fresh interpreter with modal defaults seeded from `config`.
    pub fn new(config: &Config) -> Self {
        Interpreter { state: ModalState::new(config) }
    }

    /// The current modal state.
    pub fn state(&self) -> &ModalState {
        &self.state
    }

    /// Execute one line, assumed to contain only uppercase letters and
    /// signed numbers with no whitespace.
    ///
    /// On success the modal state reflects every command on the line and
    /// `position` is the resolved target. On error nothing was dispatched;
    /// G/M/T commands classified before the failing statement remain
    /// applied.
    pub fn execute_line<M: Machine>(&mut self, line: &str, machine: &mut M)
                                    -> Result<(), Error> {
        // Full-line comment.
        if line.starts_with('(') {
            return Ok(());
        }
        // Settings lines bypass the G-code grammar entirely.
        if line.starts_with('$') {
            return self.execute_setting(line, machine);
        }

        let block = parse::parse_line(line)?;

        // Pass 1: commands. Every recognized G/M/T word takes effect the
        // moment it is classified; the first unsupported code aborts the
        // line with the earlier mutations left in place.
        let mut next_action = NextAction::Motion;
        let mut absolute_override = false;
        for word in &block.words {
            match Command::from_word(word)? {
                Some(Command::Motion(mode)) => self.state.motion_mode = mode,
                Some(Command::Dwell) => next_action = NextAction::Dwell,
                Some(Command::SelectPlane(plane)) => self.state.plane = plane,
                Some(Command::Units(units)) => self.state.units = units,
                Some(Command::GoHome) => next_action = NextAction::GoHome,
                Some(Command::AbsoluteOverride) => absolute_override = true,
                Some(Command::Positioning(mode)) => self.state.positioning = mode,
                Some(Command::InverseFeedRate(on)) => self.state.inverse_feed_rate_mode = on,
                Some(Command::Flow(flow)) => self.state.program_flow = flow,
                Some(Command::Spindle(direction)) => self.state.spindle_direction = direction,
                Some(Command::Tool(tool)) => self.state.tool = tool,
                None => (),
            }
        }

        // Pass 2: parameters, resolved against the state pass 1 left behind.
        let mut target = self.state.position;
        let mut offset = Vec3::ZERO;
        let mut p = 0.;
        let mut r = 0.;
        let mut radius_mode = false;
        // Negative means no F word supplied a per-move time on this line.
        let mut inverse_feed_rate = -1.;
        for word in &block.words {
            let converted = to_millimeters(word.value, self.state.units);
            match word.letter {
                'F' => {
                    if self.state.inverse_feed_rate_mode {
                        // Total seconds, for this move only.
                        inverse_feed_rate = converted;
                    } else {
                        // Units per minute, kept as millimeters per second.
                        self.state.feed_rate = converted / 60.;
                    }
                }
                'I' => offset[Axis::X] = converted,
                'J' => offset[Axis::Y] = converted,
                'K' => offset[Axis::Z] = converted,
                'P' => p = word.value,
                'R' => {
                    r = converted;
                    radius_mode = true;
                }
                'S' => self.state.spindle_speed = word.value as i16,
                'X' | 'Y' | 'Z' => {
                    let axis = match word.letter {
                        'X' => Axis::X,
                        'Y' => Axis::Y,
                        _ => Axis::Z,
                    };
                    if self.state.positioning == Positioning::Absolute || absolute_override {
                        target[axis] = converted;
                    } else {
                        target[axis] += converted;
                    }
                }
                // Valid statements pass 2 has no meaning for are ignored.
                _ => (),
            }
        }

        // Resolve arc geometry before anything is dispatched: an infeasible
        // radius must reject the whole line.
        let planned_arc = match self.state.motion_mode {
            MotionMode::ClockwiseArc | MotionMode::CounterClockwiseArc
                if next_action == NextAction::Motion =>
            {
                let clockwise = self.state.motion_mode == MotionMode::ClockwiseArc;
                let center = if radius_mode { Center::Radius(r) } else { Center::Offset(offset) };
                Some(arc::plan(self.state.position, target, self.state.plane,
                               clockwise, center)?)
            }
            _ => None,
        };

        // Update the spindle on every line.
        match self.state.spindle_direction {
            Spindle::Off => machine.stop(),
            direction => machine.run(direction, self.state.spindle_speed),
        }

        // Perform the single physical action of this line.
        let inverse_time = self.state.inverse_feed_rate_mode;
        let rate = if inverse_time { inverse_feed_rate } else { self.state.feed_rate };
        match next_action {
            NextAction::GoHome => machine.go_home(),
            NextAction::Dwell => machine.dwell((p * 1000.).trunc() as u32),
            NextAction::Motion => match self.state.motion_mode {
                MotionMode::Cancel => (),
                MotionMode::RapidLinear | MotionMode::Linear => {
                    trace!("line to {:?} at {}", target, rate);
                    machine.line(target[Axis::X], target[Axis::Y], target[Axis::Z],
                                 rate, inverse_time);
                }
                MotionMode::ClockwiseArc | MotionMode::CounterClockwiseArc => {
                    let planned = planned_arc.expect("resolved above");
                    let (axis_0, axis_1, axis_2) = self.state.plane.axes();
                    trace!("arc to {:?} sweeping {} at {}", target,
                           planned.angular_travel, rate);
                    machine.arc(planned.theta_start, planned.angular_travel,
                                planned.radius, planned.depth,
                                axis_0, axis_1, axis_2, rate, inverse_time);
                    // The traced arc ends wherever the float math says; a
                    // closing straight move guarantees arrival at the exact
                    // target.
                    machine.line(target[Axis::X], target[Axis::Y], target[Axis::Z],
                                 rate, inverse_time);
                }
            }
        }

        // The interpreter's position is now the target. The motion system
        // may still be working through the queued actions.
        self.state.position = target;
        Ok(())
    }

    fn execute_setting<M: Machine>(&mut self, line: &str, machine: &mut M)
                                   -> Result<(), Error> {
        match parse::parse_setting(line)? {
            Setting::Dump => machine.dump(),
            Setting::Store(index, value) => {
                debug!("storing setting {} = {}", index, value);
                machine.store(index as u16, value);
            }
        }
        Ok(())
    }
}
