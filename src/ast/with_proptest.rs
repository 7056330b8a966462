//! `proptest` strategies for random MiniMiniLogo syntax, behind the
//! `with-proptest` feature.

use super::{Block, Cmd, Expr, Mode};

use proptest::collection::vec;
use proptest::prelude::*;

/// Strategy over both pen modes.
pub fn arb_mode() -> impl Strategy<Value = Mode> {
    prop_oneof![Just(Mode::Up), Just(Mode::Down)]
}

/// Strategy over expression trees, depth-bounded so generated cases stay
/// printable and shrinkable.
pub fn arb_expr() -> impl Strategy<Value = Expr> {
    let leaf = any::<i64>().prop_map(Expr::Lit);
    leaf.prop_recursive(8, 64, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(lhs, rhs)| Expr::add(lhs, rhs)),
            (inner.clone(), inner).prop_map(|(lhs, rhs)| Expr::mul(lhs, rhs)),
        ]
    })
}

/// Strategy over single commands.
pub fn arb_cmd() -> impl Strategy<Value = Cmd> {
    prop_oneof![
        arb_mode().prop_map(Cmd::SetPen),
        (arb_expr(), arb_expr()).prop_map(|(x, y)| Cmd::MoveTo(x, y)),
    ]
}

/// Strategy over blocks of up to `max_len` commands.
pub fn arb_block(max_len: usize) -> impl Strategy<Value = Block> {
    vec(arb_cmd(), 0..=max_len).prop_map(Block::from)
}
