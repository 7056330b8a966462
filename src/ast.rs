//! The MiniMiniLogo abstract syntax: expressions, commands, and blocks.
//!
//! Pure data. Construction is total — any integer, any nesting depth — so
//! unlike sorted or arity-checked syntax representations there is no invalid
//! state to report and no error type.

use serde::{Deserialize, Serialize};
use std::iter::FromIterator;

#[cfg(feature = "with-proptest")]
pub mod with_proptest;


/// Pen state: whether moving the turtle draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Pen lifted; moves reposition without drawing.
    Up,
    /// Pen lowered; moves draw.
    Down,
}

/// Integer expression: a literal, or an addition or multiplication of two
/// subexpressions.
///
/// The tree is finite and acyclic by construction; each subexpression is
/// owned exclusively by its parent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    /// Integer literal. Negative literals are permitted.
    Lit(i64),
    /// Sum of two subexpressions.
    Add(Box<Expr>, Box<Expr>),
    /// Product of two subexpressions.
    Mul(Box<Expr>, Box<Expr>),
}

/// A single turtle command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    /// Change the pen mode.
    SetPen(Mode),
    /// Move the turtle to the point named by the two coordinate expressions.
    MoveTo(Expr, Expr),
}

/// An ordered sequence of commands. Order is execution order and is
/// preserved exactly through every operation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block(Vec<Cmd>);

/// The body of the implicit `main()` routine. MiniMiniLogo has no
/// macro or procedure abstraction, so a program is just its block.
pub type Program = Block;

/// An integer point on the drawing plane. Generator parameter only; the AST
/// itself carries coordinates as [`Expr`] pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i64,
    /// Vertical coordinate.
    pub y: i64,
}

impl Expr {
    /// Sum of two expressions.
    pub fn add(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::Add(Box::new(lhs.into()), Box::new(rhs.into()))
    }

    /// Product of two expressions.
    pub fn mul(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::Mul(Box::new(lhs.into()), Box::new(rhs.into()))
    }
}

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        Self::Lit(n)
    }
}

impl Cmd {
    /// Pen-mode change command.
    pub fn pen(mode: Mode) -> Self {
        Self::SetPen(mode)
    }

    /// Move command with the given coordinate expressions.
    pub fn move_to(x: impl Into<Expr>, y: impl Into<Expr>) -> Self {
        Self::MoveTo(x.into(), y.into())
    }
}

impl Block {
    /// Empty block.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of commands in the block.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the block holds no commands.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The commands in order.
    pub fn commands(&self) -> &[Cmd] {
        &self.0
    }

    /// Append a command.
    pub fn push(&mut self, cmd: Cmd) {
        self.0.push(cmd);
    }

    /// Iterate over the commands in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cmd> {
        self.0.iter()
    }
}

impl From<Vec<Cmd>> for Block {
    fn from(cmds: Vec<Cmd>) -> Self {
        Self(cmds)
    }
}

impl FromIterator<Cmd> for Block {
    fn from_iter<I: IntoIterator<Item = Cmd>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Concatenates blocks in order, e.g. to stitch generator output into a
/// larger program.
impl FromIterator<Block> for Block {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Self(iter.into_iter().flatten().collect())
    }
}

impl Extend<Cmd> for Block {
    fn extend<I: IntoIterator<Item = Cmd>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Block {
    type Item = Cmd;
    type IntoIter = std::vec::IntoIter<Cmd>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Block {
    type Item = &'a Cmd;
    type IntoIter = std::slice::Iter<'a, Cmd>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Point {
    /// Point at the given coordinates.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}
