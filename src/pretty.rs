//! Canonical textual rendering of MiniMiniLogo syntax.
//!
//! Rendering is a pure function of the value: the same AST always produces
//! the same string, byte for byte. Consumers (golden-file tests, grading
//! harnesses) compare output as exact strings, so the format here is a
//! contract:
//!
//! * expressions use infix `" + "` and `" * "`, parenthesizing only an
//!   `Add` that sits directly under a `Mul`;
//! * a non-empty block puts each command on its own two-space-indented
//!   line, `;`-separated with no trailing semicolon;
//! * an empty block is the literal `{}`;
//! * a program is `main() ` followed immediately by its block.

use crate::ast::{Block, Cmd, Expr, Mode};

use std::fmt;


impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lit(n) => write!(f, "{}", n),
            Self::Add(lhs, rhs) => write!(f, "{} + {}", lhs, rhs),
            // `+` binds looser than `*`, so an Add operand of a Mul needs
            // explicit grouping; nothing else ever does.
            Self::Mul(lhs, rhs) => {
                match lhs.as_ref() {
                    Self::Add(_, _) => write!(f, "({})", lhs)?,
                    _ => write!(f, "{}", lhs)?,
                }
                write!(f, " * ")?;
                match rhs.as_ref() {
                    Self::Add(_, _) => write!(f, "({})", rhs),
                    _ => write!(f, "{}", rhs),
                }
            }
        }
    }
}

impl fmt::Display for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetPen(mode) => write!(f, "pen {}", mode),
            Self::MoveTo(x, y) => write!(f, "move({}, {})", x, y),
        }
    }
}

/// Delegates to [`render_block`].
impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_block(self))
    }
}

/// Render a block: `{}` when empty, otherwise one command per line between
/// braces, each line indented two spaces, commands separated by `";\n"`.
pub fn render_block(block: &Block) -> String {
    if block.is_empty() {
        return "{}".to_string();
    }

    let body = block
        .iter()
        .map(|cmd| indent(&cmd.to_string()))
        .collect::<Vec<_>>()
        .join(";\n");

    format!("{{\n{}\n}}", body)
}

/// Render a block as the body of the implicit `main()` routine.
pub fn render_program(program: &Block) -> String {
    format!("main() {}", render_block(program))
}

/// Prefix every line of `text` with two spaces. Commands as defined render
/// on one line, but the indentation rule covers embedded newlines too.
fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}
