//! The console session for [`BinarySearchTree`], which reads integers from one stream and writes
//! the state of the tree to another.
//!
//! A session has three phases, each of which reads integers until the sentinel `-1` (or the end
//! of the input):
//! 1. Every integer is inserted. Then the pre-order, in-order and post-order traversals are
//!    written one per line, each key followed by a space, and then the minimum and maximum.
//! 2. Every integer is looked up, writing `true` or `false` per line. An empty line follows.
//! 3. Every integer is removed, after which the three traversals and an empty line are written.
//!
//! ```
//! # use teaching_collections::driver::run_session;
//! let input = "2 1 3 -1\n1 5 -1\n2 -1\n";
//! let mut output = Vec::new();
//! run_session(input.as_bytes(), &mut output).unwrap();
//!
//! let expected = "2 1 3 \n1 2 3 \n1 3 2 \n1\n3\ntrue\nfalse\n\n3 1 \n1 3 \n1 3 \n\n";
//! assert_eq!(String::from_utf8(output).unwrap(), expected);
//! ```

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io::{self, BufRead, Write};
use std::num::ParseIntError;

use derive_more::{Display, Error, From, IsVariant};
use tracing::{debug, info};

use crate::collections::Thing;
use crate::collections::binary_tree::BinarySearchTree;

/// Produced when the minimum or maximum of a tree is requested while it has no keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyTree;

impl Display for EmptyTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "The tree has no minimum or maximum because it is empty!")
    }
}

impl Error for EmptyTree {}

#[derive(Debug, Display, Error, From, IsVariant)]
pub enum DriverError {
    Io(io::Error),
    Parse(ParseIntError),
    EmptyTree(EmptyTree),
}

/// Runs a whole session, reading from `input` and writing to `output`. The session stops at the
/// first token which isn't an integer, or if the tree is empty once the first phase is over.
pub fn run_session<R: BufRead, W: Write>(input: R, mut output: W) -> Result<(), DriverError> {
    let mut tokens = Tokens::new(input);
    let mut tree = BinarySearchTree::new();

    while let Some(key) = tokens.next_key()? {
        debug!(%key, "inserting");
        tree.insert(key);
    }
    info!(len = tree.len(), "built tree");

    write_traversals(&tree, &mut output)?;
    let min = tree.min().ok_or(EmptyTree)?;
    let max = tree.max().ok_or(EmptyTree)?;
    writeln!(output, "{min}")?;
    writeln!(output, "{max}")?;

    while let Some(key) = tokens.next_key()? {
        writeln!(output, "{}", tree.contains(&key))?;
    }
    writeln!(output)?;

    while let Some(key) = tokens.next_key()? {
        let removed = tree.remove(&key);
        debug!(%key, removed, "removing");
        write_traversals(&tree, &mut output)?;
        writeln!(output)?;
    }
    info!(len = tree.len(), "session complete");

    output.flush()?;
    Ok(())
}

fn write_traversals<W: Write>(tree: &BinarySearchTree<Thing>, output: &mut W) -> io::Result<()> {
    write_keys(tree.pre_order(), output)?;
    write_keys(tree.in_order(), output)?;
    write_keys(tree.post_order(), output)
}

fn write_keys<'a, W: Write>(
    keys: impl Iterator<Item = &'a Thing>,
    output: &mut W,
) -> io::Result<()> {
    for key in keys {
        write!(output, "{key} ")?;
    }
    writeln!(output)
}

/// Splits the input into whitespace separated tokens, one line at a time, so that a session can
/// be driven interactively.
struct Tokens<R> {
    input: R,
    line: String,
    // Tokens of the current line, stored in reverse so the next one can be popped.
    pending: Vec<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Tokens<R> {
        Tokens {
            input,
            line: String::new(),
            pending: Vec::new(),
        }
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending = self.line.split_whitespace().rev().map(String::from).collect();
        }
        Ok(self.pending.pop())
    }

    /// Returns the next key of the current phase, or `None` at the sentinel or the end of input.
    fn next_key(&mut self) -> Result<Option<Thing>, DriverError> {
        let Some(token) = self.next_token()? else {
            return Ok(None);
        };

        let value: i32 = token.parse()?;
        Ok((value != Thing::SENTINEL).then_some(Thing(value)))
    }
}
