// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

use std::{error, fmt};

/// Why a line was rejected.
///
/// Every failure is reported synchronously as the status of the line call;
/// a rejected line dispatches no physical action.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Error {
    /// A byte outside `A`-`Z` where a command letter was expected.
    ExpectedCommandLetter,
    /// No valid number could be read after a command letter.
    BadNumberFormat,
    /// A G or M code with no defined meaning, or a malformed `$` line.
    UnsupportedStatement,
    /// The requested arc radius cannot reach the target position.
    FloatingPointError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ExpectedCommandLetter =>
                write!(f, "expected a command letter"),
            Error::BadNumberFormat =>
                write!(f, "bad number format"),
            Error::UnsupportedStatement =>
                write!(f, "unsupported statement"),
            Error::FloatingPointError =>
                write!(f, "arc radius too small to reach the target"),
        }
    }
}

impl error::Error for Error {}
