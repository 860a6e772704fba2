// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Problem instance loader for the container assignment domain.
//!
//! This module turns whitespace-delimited text streams into a validated
//! `Model`. The expected token order is `n k`, then `n` records of
//! `quantity profit`, then `k` records of `min_load max_load`. Line breaks
//! carry no meaning beyond whitespace, and `#` introduces a comment that
//! runs to the end of its line.
//!
//! The loader accepts any `BufRead`, file path, or string slice, making it
//! convenient to integrate with tests and tooling. Numeric parsing is
//! generic over the deployment's load type, so the same instance text can
//! be read as integers or as reals depending on the chosen `T`.

use crate::model::{Model, ModelBuilder, ModelError};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};
use stevedore_core::num::LoadNumeric;

/// The error type for the problem loading process.
#[derive(Debug)]
pub enum ProblemLoaderError {
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
    /// The input stream ended before all declared records were read.
    UnexpectedEof,
    /// A token could not be parsed into the expected numeric type.
    Parse(ParseTokenError),
    /// The parsed data failed model validation.
    Model(ModelError),
}

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "i64").
    pub type_name: &'static str,
}

impl std::fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Could not parse token '{}' as type {}",
            self.token, self.type_name
        )
    }
}

impl std::error::Error for ParseTokenError {}

impl std::fmt::Display for ProblemLoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof => write!(f, "Unexpected end of input while parsing instance"),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::Model(e) => write!(f, "Model error: {}", e),
        }
    }
}

impl std::error::Error for ProblemLoaderError {}

impl From<std::io::Error> for ProblemLoaderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseTokenError> for ProblemLoaderError {
    fn from(e: ParseTokenError) -> Self {
        Self::Parse(e)
    }
}

impl From<ModelError> for ProblemLoaderError {
    fn from(e: ModelError) -> Self {
        Self::Model(e)
    }
}

/// A loader for whitespace-delimited problem instances.
///
/// # Examples
///
/// ```rust
/// # use stevedore_model::loading::ProblemLoader;
///
/// let text = "\
/// 3 2        # n k
/// 7 10
/// 3 4
/// 5 6
/// 10 10      # container load windows
/// 5 5
/// ";
/// let model = ProblemLoader::new().load_from_str::<i64>(text).unwrap();
/// assert_eq!(model.num_orders(), 3);
/// assert_eq!(model.num_containers(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProblemLoader;

impl ProblemLoader {
    /// Creates a new loader.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Loads an instance from a file path.
    pub fn load_from_path<T, P>(&self, path: P) -> Result<Model<T>, ProblemLoaderError>
    where
        T: LoadNumeric + FromStr,
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        self.load_from_reader(BufReader::new(file))
    }

    /// Loads an instance from a string slice.
    pub fn load_from_str<T>(&self, text: &str) -> Result<Model<T>, ProblemLoaderError>
    where
        T: LoadNumeric + FromStr,
    {
        self.load_from_reader(text.as_bytes())
    }

    /// Loads an instance from any buffered reader.
    pub fn load_from_reader<T, R>(&self, reader: R) -> Result<Model<T>, ProblemLoaderError>
    where
        T: LoadNumeric + FromStr,
        R: BufRead,
    {
        let tokens = tokenize(reader)?;
        let mut cursor = tokens.iter().map(String::as_str);

        let num_orders = parse_token::<usize>(cursor.next())?;
        let num_containers = parse_token::<usize>(cursor.next())?;

        let mut builder = ModelBuilder::<T>::with_capacity(num_orders, num_containers);
        for _ in 0..num_orders {
            let quantity = parse_token::<T>(cursor.next())?;
            let profit = parse_token::<T>(cursor.next())?;
            builder = builder.add_order(quantity, profit);
        }
        for _ in 0..num_containers {
            let min_load = parse_token::<T>(cursor.next())?;
            let max_load = parse_token::<T>(cursor.next())?;
            builder = builder.add_container(min_load, max_load);
        }

        Ok(builder.build()?)
    }
}

/// Reads all tokens from `reader`, dropping `#` comments.
fn tokenize<R>(reader: R) -> Result<Vec<String>, ProblemLoaderError>
where
    R: BufRead,
{
    let mut tokens = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let content = line.split('#').next().unwrap_or("");
        tokens.extend(content.split_whitespace().map(str::to_owned));
    }
    Ok(tokens)
}

/// Parses the next token, reporting `UnexpectedEof` when the stream ran dry.
fn parse_token<V>(token: Option<&str>) -> Result<V, ProblemLoaderError>
where
    V: FromStr,
{
    let token = token.ok_or(ProblemLoaderError::UnexpectedEof)?;
    token.parse::<V>().map_err(|_| {
        ProblemLoaderError::Parse(ParseTokenError {
            token: token.to_owned(),
            type_name: std::any::type_name::<V>(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{ContainerIndex, OrderIndex};

    #[test]
    fn test_load_integer_instance() {
        let text = "3 2\n7 10\n3 4\n5 6\n10 10\n5 5\n";
        let model = ProblemLoader::new().load_from_str::<i64>(text).unwrap();

        assert_eq!(model.num_orders(), 3);
        assert_eq!(model.num_containers(), 2);
        assert_eq!(model.order_quantity(OrderIndex::new(0)), 7);
        assert_eq!(model.order_profit(OrderIndex::new(1)), 4);
        assert_eq!(model.load_window(ContainerIndex::new(0)).low(), 10);
        assert_eq!(model.load_window(ContainerIndex::new(1)).high(), 5);
    }

    #[test]
    fn test_load_float_instance() {
        let text = "1 1\n1.5 0.25\n0.0 2.75\n";
        let model = ProblemLoader::new().load_from_str::<f64>(text).unwrap();

        assert_eq!(model.order_quantity(OrderIndex::new(0)), 1.5);
        assert_eq!(model.load_window(ContainerIndex::new(0)).high(), 2.75);
    }

    #[test]
    fn test_comments_and_irregular_whitespace_are_tolerated() {
        let text = "# instance header\n 2   1 # n k\n\n4 1\n\t2 1\n0 10 # window\n";
        let model = ProblemLoader::new().load_from_str::<i64>(text).unwrap();

        assert_eq!(model.num_orders(), 2);
        assert_eq!(model.num_containers(), 1);
    }

    #[test]
    fn test_truncated_input_reports_eof() {
        let text = "2 1\n4 1\n";
        let err = ProblemLoader::new().load_from_str::<i64>(text).unwrap_err();
        assert!(matches!(err, ProblemLoaderError::UnexpectedEof));
    }

    #[test]
    fn test_malformed_token_reports_parse_error() {
        let text = "1 1\nseven 10\n0 10\n";
        let err = ProblemLoader::new().load_from_str::<i64>(text).unwrap_err();
        match err {
            ProblemLoaderError::Parse(e) => assert_eq!(e.token, "seven"),
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_window_surfaces_as_model_error() {
        let text = "0 1\n9 3\n";
        let err = ProblemLoader::new().load_from_str::<i64>(text).unwrap_err();
        assert!(matches!(
            err,
            ProblemLoaderError::Model(ModelError::InvalidLoadWindow { container_index: 0 })
        ));
    }

    #[test]
    fn test_empty_instance_loads() {
        let model = ProblemLoader::new().load_from_str::<i64>("0 0\n").unwrap();
        assert_eq!(model.num_orders(), 0);
        assert_eq!(model.num_containers(), 0);
    }
}
