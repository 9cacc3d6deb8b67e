//! Rectangle-union and axis-overlap primitives.

use crate::{Line, Rectangle};

/// Returns true iff `p` lies within `line`'s interval, endpoints inclusive.
pub fn axis_covers_point(line: Line, p: i64) -> bool {
    line.min() <= p && p <= line.max()
}

/// Grow `current` to contain `addend`, folding one axis at a time.
///
/// Monitors in a real layout either share an edge (one axis fully overlaps)
/// or are fully disjoint; this rule produces the correct bounding box for
/// both cases and degrades to a clipped join on partial overlap.
pub fn union_rect(current: Rectangle, addend: Rectangle) -> Rectangle {
    if current.is_empty() {
        return addend;
    }

    let (x, width) = union_axis(
        current.x as i64,
        current.width as i64,
        addend.x as i64,
        addend.width as i64,
    );
    let (y, height) = union_axis(
        current.y as i64,
        current.height as i64,
        addend.y as i64,
        addend.height as i64,
    );

    Rectangle {
        x: x as i32,
        y: y as i32,
        width: width as u32,
        height: height as u32,
    }
}

fn union_axis(cur_pos: i64, cur_len: i64, add_pos: i64, add_len: i64) -> (i64, i64) {
    let c = Line::new(cur_pos, cur_pos + cur_len);
    let a = Line::new(add_pos, add_pos + add_len);

    let delta = if axis_covers_point(a, c.min()) {
        if axis_covers_point(a, c.max()) {
            cur_len
        } else {
            (a.max() - c.min()).abs()
        }
    } else if axis_covers_point(c, a.min()) {
        if axis_covers_point(c, a.max()) {
            add_len
        } else {
            (c.max() - a.min()).abs()
        }
    } else {
        0
    };

    let new_len = cur_len + add_len - delta;
    let new_pos = cur_pos.min(add_pos);
    (new_pos, new_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_covers_point_is_endpoint_inclusive() {
        let line = Line::new(10, 0);
        assert!(axis_covers_point(line, 0));
        assert!(axis_covers_point(line, 10));
        assert!(axis_covers_point(line, 5));
        assert!(!axis_covers_point(line, 11));
        assert!(!axis_covers_point(line, -1));
    }

    #[test]
    fn union_rect_adopts_addend_when_current_is_empty() {
        let current = Rectangle::EMPTY;
        let addend = Rectangle {
            x: 10,
            y: 20,
            width: 100,
            height: 200,
        };
        assert_eq!(union_rect(current, addend), addend);
    }

    #[test]
    fn union_rect_side_by_side_same_height() {
        let left = Rectangle {
            x: 0,
            y: 0,
            width: 1920,
            height: 1080,
        };
        let right = Rectangle {
            x: 1920,
            y: 0,
            width: 2560,
            height: 1440,
        };
        let joined = union_rect(left, right);
        assert_eq!(joined.x, 0);
        assert_eq!(joined.y, 0);
        assert_eq!(joined.width, 4480);
        assert_eq!(joined.height, 1440);
    }

    #[test]
    fn union_rect_handles_negative_x_origin() {
        let left = Rectangle {
            x: -1280,
            y: 0,
            width: 1280,
            height: 1024,
        };
        let main = Rectangle {
            x: 0,
            y: 0,
            width: 1920,
            height: 1080,
        };
        let joined = union_rect(left, main);
        assert_eq!(joined.x, -1280);
        assert_eq!(joined.width, 3200);
        assert_eq!(joined.height, 1080);
    }

    #[test]
    fn union_rect_is_commutative_on_disjoint_rectangles() {
        let a = Rectangle {
            x: 0,
            y: 0,
            width: 1920,
            height: 1080,
        };
        let b = Rectangle {
            x: 1920,
            y: 0,
            width: 1920,
            height: 1080,
        };
        assert_eq!(union_rect(a, b), union_rect(b, a));
    }

    #[test]
    fn union_rect_is_idempotent_under_self_union() {
        let a = Rectangle {
            x: 5,
            y: 5,
            width: 100,
            height: 50,
        };
        assert_eq!(union_rect(a, a), a);
    }
}
