//! Abstract syntax for the MiniMiniLogo turtle-graphics language: a small
//! command AST over pen moves and integer arithmetic, a canonical pretty
//! printer, and pure generators that synthesize example programs.
//!
//! MiniMiniLogo has no evaluator, type checker, or parser here — only
//! construction, structural transformation, and deterministic rendering.
//! Every constructible value is valid and every render is total, so the
//! whole API is error-free.
//!
//! ```
//! use minilogo::{generate, pretty, Point};
//!
//! let program = generate::line_segment(Point::new(0, 0), Point::new(3, 4));
//! assert_eq!(
//!     pretty::render_program(&program),
//!     "main() {\n  pen up;\n  move(0, 0);\n  pen down;\n  move(3, 4)\n}"
//! );
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::must_use_candidate)] // everything here is a pure builder or renderer

pub mod ast;
pub mod generate;
pub mod pretty;

pub use ast::{Block, Cmd, Expr, Mode, Point, Program};
