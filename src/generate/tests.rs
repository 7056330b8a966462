#![allow(non_snake_case)]

use super::*;
use crate::pretty::{render_block, render_program};

use insta::assert_snapshot;

#[cfg(feature = "with-proptest")]
use proptest::prelude::*;

#[test]
fn line_segment__shape() {
    let block = line_segment(Point::new(39, 22), Point::new(39, 20));

    assert_eq!(block.len(), 4);
    assert_eq!(
        render_block(&block),
        "{\n  pen up;\n  move(39, 22);\n  pen down;\n  move(39, 20)\n}"
    );
}

#[test]
fn line_segment__concatenation_golden() {
    // Four segments tracing a 2x2 square, stitched by plain concatenation.
    let square: Block = vec![
        line_segment(Point::new(39, 22), Point::new(39, 20)),
        line_segment(Point::new(39, 20), Point::new(37, 20)),
        line_segment(Point::new(37, 20), Point::new(37, 22)),
        line_segment(Point::new(37, 22), Point::new(39, 22)),
    ]
    .into_iter()
    .collect();

    assert_eq!(square.len(), 16);
    assert_snapshot!(render_program(&square), @r###"
    main() {
      pen up;
      move(39, 22);
      pen down;
      move(39, 20);
      pen up;
      move(39, 20);
      pen down;
      move(37, 20);
      pen up;
      move(37, 20);
      pen down;
      move(37, 22);
      pen up;
      move(37, 22);
      pen down;
      move(39, 22)
    }
    "###);
}

#[test]
fn rectangle_outline__keeps_symbolic_arithmetic() {
    let block = rectangle_outline(Point::new(1, 2), 3, 4);

    assert_eq!(block.len(), 7);
    assert_eq!(
        render_block(&block),
        "{\n  pen up;\n  move(1, 2);\n  pen down;\n  move(1 + 3, 2);\n  move(1 + 3, 2 + 4);\n  move(1, 2 + 4);\n  move(1, 2)\n}"
    );
}

#[test]
fn staircase__steps_render_unreduced() {
    let block = staircase(3, Point::new(4, 2));

    assert_eq!(block.len(), 9);
    assert_snapshot!(render_block(&block), @r###"
    {
      pen up;
      move(4, 2);
      pen down;
      move(4 + 1 + -1, 2 + 1);
      move(4 + 1, 2 + 1);
      move(4 + 2 + -1, 2 + 2);
      move(4 + 2, 2 + 2);
      move(4 + 3 + -1, 2 + 3);
      move(4 + 3, 2 + 3)
    }
    "###);
}

#[test]
fn staircase__zero_steps_is_just_the_triad() {
    let block = staircase(0, Point::new(10, -5));

    assert_eq!(block.len(), 3);
    assert_eq!(
        render_block(&block),
        "{\n  pen up;\n  move(10, -5);\n  pen down\n}"
    );
}

#[test]
fn generators__are_deterministic() {
    let a = staircase(5, Point::new(-2, 7));
    let b = staircase(5, Point::new(-2, 7));
    assert_eq!(a, b);
    assert_eq!(render_block(&a), render_block(&b));
}

#[cfg(feature = "with-proptest")]
proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]
    #[test]
    fn staircase__command_count(steps in 0_u32..64, x in -1000_i64..1000, y in -1000_i64..1000) {
        let block = staircase(steps, Point::new(x, y));
        prop_assert_eq!(block.len(), 3 + 2 * steps as usize);
    }

    #[test]
    fn line_segment__always_four_commands(
        ax in -1000_i64..1000, ay in -1000_i64..1000,
        bx in -1000_i64..1000, by in -1000_i64..1000,
    ) {
        let block = line_segment(Point::new(ax, ay), Point::new(bx, by));
        prop_assert_eq!(block.len(), 4);
    }
}
