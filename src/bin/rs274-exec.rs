use std::{env, fs};

use rs274::interp::Interpreter;
use rs274::machine::{MotionExecutor, SettingsStore, SpindleActuator};
use rs274::state::{Axis, Config, Spindle};

/// Prints every action the interpreter dispatches.
struct Console;

impl MotionExecutor for Console {
    fn line(&mut self, x: f64, y: f64, z: f64, rate: f64, inverse_time: bool) {
        if inverse_time {
            println!("line    ({:8.3}, {:8.3}, {:8.3})  in {:.3} s", x, y, z, rate);
        } else {
            println!("line    ({:8.3}, {:8.3}, {:8.3})  at {:.3} mm/s", x, y, z, rate);
        }
    }

    fn arc(&mut self, theta_start: f64, angular_travel: f64, radius: f64, depth: f64,
           axis_0: Axis, axis_1: Axis, axis_2: Axis, rate: f64, _inverse_time: bool) {
        println!("arc     {}{} plane, start {:.3} rad, sweep {:.3} rad, \
                  radius {:.3}, {} depth {:.3}, rate {:.3}",
                 axis_0, axis_1, theta_start, angular_travel, radius, axis_2, depth, rate);
    }

    fn dwell(&mut self, milliseconds: u32) {
        println!("dwell   {} ms", milliseconds);
    }

    fn go_home(&mut self) {
        println!("home");
    }
}

impl SpindleActuator for Console {
    fn run(&mut self, direction: Spindle, speed: i16) {
        println!("spindle {:?} at {} RPM/100", direction, speed);
    }

    fn stop(&mut self) {}
}

impl SettingsStore for Console {
    fn dump(&mut self) {
        println!("settings dump requested");
    }

    fn store(&mut self, index: u16, value: f64) {
        println!("setting {} = {}", index, value);
    }
}

/// Reduce a raw input line to the canonical form the interpreter expects:
/// uppercase, no whitespace. Framing like this is normally the job of the
/// serial transport.
fn canonicalize(line: &str) -> String {
    line.chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| ch.to_ascii_uppercase())
        .collect()
}

fn main() {
    env_logger::init();

    let filename = env::args().nth(1).expect("file name required");
    let input = fs::read_to_string(&filename).unwrap();

    let mut interp = Interpreter::new(&Config::default());
    let mut console = Console;
    for (n, line) in input.lines().enumerate() {
        let line = canonicalize(line);
        if let Err(e) = interp.execute_line(&line, &mut console) {
            eprintln!("line {}: error: {}", n + 1, e);
        }
    }
}
