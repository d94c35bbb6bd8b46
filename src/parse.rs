// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

use itertools::Itertools;
use pest::error::ErrorVariant;
use pest::Parser;
use pest_derive::Parser;

use crate::error::Error;

#[derive(Parser)]
#[grammar = "gcode.pest"]
struct LineParser;

/// One statement: a command letter and the number following it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Word {
    pub letter: char,
    pub value: f64,
}

/// The tokenized form of one line: an ordered word sequence, scanned once
/// and then iterated by both interpreter passes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Block {
    pub blockdel: bool,
    pub words: Vec<Word>,
}

/// A `$` settings line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Setting {
    Dump,
    Store(f64, f64),
}

pub fn parse_line(input: &str) -> Result<Block, Error> {
    let mut pairs = LineParser::parse(Rule::line, input).map_err(word_error)?;
    let mut block = Block::default();
    for pair in pairs.next().expect("line pair").into_inner() {
        match pair.as_rule() {
            Rule::blockdel => block.blockdel = true,
            Rule::word => {
                let (letter, number) = pair.into_inner().collect_tuple().expect("children");
                block.words.push(Word {
                    letter: letter.as_str().chars().next().expect("letter"),
                    value: number.as_str().parse().expect("grammar-checked float"),
                });
            }
            Rule::EOI => (),
            _ => unreachable!()
        }
    }
    Ok(block)
}

pub fn parse_setting(input: &str) -> Result<Setting, Error> {
    let mut pairs = LineParser::parse(Rule::setting, input)
        .map_err(|_| Error::UnsupportedStatement)?;
    for pair in pairs.next().expect("setting pair").into_inner() {
        if pair.as_rule() == Rule::assign {
            let (index, value) = pair.into_inner().collect_tuple().expect("children");
            return Ok(Setting::Store(index.as_str().parse().expect("grammar-checked float"),
                                     value.as_str().parse().expect("grammar-checked float")));
        }
    }
    Ok(Setting::Dump)
}

/// Map a grammar failure onto the statement error taxonomy: a failure inside
/// the number rules means the letter had no readable number, anything else is
/// a byte that cannot start a statement.
fn word_error(err: pest::error::Error<Rule>) -> Error {
    match err.variant {
        ErrorVariant::ParsingError { ref positives, .. } => {
            let numberish = |rule: &Rule| matches!(
                rule, Rule::number | Rule::sign | Rule::digits | Rule::exponent);
            if positives.iter().any(numberish) {
                Error::BadNumberFormat
            } else {
                Error::ExpectedCommandLetter
            }
        }
        _ => Error::ExpectedCommandLetter,
    }
}
