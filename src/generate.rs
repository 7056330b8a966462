//! Generators that synthesize MiniMiniLogo programs from numeric
//! parameters.
//!
//! Each generator is a pure deterministic builder returning a fresh
//! [`Block`]. Coordinates derived from the parameters are emitted as
//! symbolic arithmetic (`x + w`, not the reduced integer) so the rendered
//! program shows how each point was computed. Larger drawings are composed
//! by concatenating generator output, e.g. with `collect::<Block>()` over
//! several blocks.

use crate::ast::{Block, Cmd, Expr, Mode, Point};

#[cfg(test)]
mod tests;

/// A single line segment: lift the pen, move to `from`, lower the pen, and
/// draw to `to`. Four commands.
pub fn line_segment(from: Point, to: Point) -> Block {
    Block::from(vec![
        Cmd::pen(Mode::Up),
        Cmd::move_to(from.x, from.y),
        Cmd::pen(Mode::Down),
        Cmd::move_to(to.x, to.y),
    ])
}

/// The outline of an axis-aligned rectangle with bottom-left `corner` and
/// the given extent, drawn counterclockwise and closed back at the start.
/// Seven commands; the far corners keep their `x + w` / `y + h` arithmetic
/// unreduced.
pub fn rectangle_outline(corner: Point, width: i64, height: i64) -> Block {
    let Point { x, y } = corner;
    Block::from(vec![
        Cmd::pen(Mode::Up),
        Cmd::move_to(x, y),
        Cmd::pen(Mode::Down),
        Cmd::move_to(Expr::add(x, width), y),
        Cmd::move_to(Expr::add(x, width), Expr::add(y, height)),
        Cmd::move_to(x, Expr::add(y, height)),
        Cmd::move_to(x, y),
    ])
}

/// An ascending staircase of `steps` unit steps starting at `origin`: the
/// pen-up/move/pen-down triad, then per step `i` a move to
/// `(x + i + -1, y + i)` and one to `(x + i, y + i)`. The coordinate
/// arithmetic is kept in exactly that nested form, negative literal
/// included. `3 + 2 * steps` commands; `steps == 0` yields the triad alone.
pub fn staircase(steps: u32, origin: Point) -> Block {
    let Point { x, y } = origin;

    let mut block = Block::from(vec![
        Cmd::pen(Mode::Up),
        Cmd::move_to(x, y),
        Cmd::pen(Mode::Down),
    ]);

    for i in 1..=i64::from(steps) {
        block.push(Cmd::move_to(
            Expr::add(Expr::add(x, i), -1),
            Expr::add(y, i),
        ));
        block.push(Cmd::move_to(Expr::add(x, i), Expr::add(y, i)));
    }

    block
}
