// Copyright 2020 Xavier Gillard
// Copyright 2026 The knapsack-bb developers
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the means to load a knapsack instance from a text
//! file. The expected format is the following (blank lines are ignored and
//! lines starting with a 'c' are comments):
//!
//! ```plain
//! c a comment
//! <capacity> <nb_items>
//! <index> <weight> <value>
//! <index> <weight> <value>
//! ...
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::num::ParseIntError;
use std::path::Path;
use std::str::FromStr;

use regex::Regex;
use thiserror::Error;

use crate::{Instance, InstanceError, Item};

/// The various ways in which loading an instance may fail
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    #[error("parse int {0}")]
    ParseInt(#[from] ParseIntError),
    #[error("ill formed line {line}: '{content}'")]
    Format { line: usize, content: String },
    #[error("the instance declaration (capacity and number of items) is missing")]
    MissingHeader,
    #[error("{expected} items were announced but {actual} were given")]
    CountMismatch { expected: usize, actual: usize },
    #[error("invalid instance {0}")]
    Instance(#[from] InstanceError),
}

/// Loads the instance stored in the given file
pub fn read_instance<P: AsRef<Path>>(fname: P) -> Result<Instance, ReadError> {
    let f = File::open(fname)?;
    parse_instance(BufReader::new(f))
}

/// Parses an instance from any buffered source of text
pub fn parse_instance<R: Read>(source: BufReader<R>) -> Result<Instance, ReadError> {
    let comment   = Regex::new(r"^c(\s.*)?$").expect("valid regex");
    let sack_decl = Regex::new(r"^(?P<capa>\d+)\s+(?P<nb_items>\d+)$").expect("valid regex");
    let item_decl = Regex::new(r"^(?P<item>\d+)\s+(?P<weight>\d+)\s+(?P<value>\d+)$").expect("valid regex");

    let mut header: Option<(usize, usize)> = None;
    let mut items = vec![];

    for (lineno, line) in source.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || comment.is_match(line) {
            continue;
        }

        if header.is_none() {
            if let Some(caps) = sack_decl.captures(line) {
                let capacity = caps["capa"].parse::<usize>()?;
                let nb_items = caps["nb_items"].parse::<usize>()?;
                header = Some((capacity, nb_items));
                continue;
            }
            if item_decl.is_match(line) {
                return Err(ReadError::MissingHeader);
            }
        } else if let Some(caps) = item_decl.captures(line) {
            let index  = caps["item"].parse::<usize>()?;
            let weight = caps["weight"].parse::<usize>()?;
            let value  = caps["value"].parse::<usize>()?;
            items.push(Item { index, weight, value });
            continue;
        }

        return Err(ReadError::Format { line: lineno + 1, content: line.to_string() });
    }

    let (capacity, nb_items) = header.ok_or(ReadError::MissingHeader)?;
    if items.len() != nb_items {
        return Err(ReadError::CountMismatch { expected: nb_items, actual: items.len() });
    }
    Ok(Instance::new(capacity, items)?)
}

impl FromStr for Instance {
    type Err = ReadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_instance(BufReader::new(s.as_bytes()))
    }
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################
