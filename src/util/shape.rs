// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Implements shape stepping algorithms
//!
//! Bresenham walks every lattice point of a line segment, both ends included

/// Integer Bresenham line walker.
///
/// Error terms are kept in i64 so endpoints anywhere in the i32 range cannot overflow.
/// Every yielded point lies inside the bounding box of the two endpoints.
#[derive(Debug, Clone)]
pub struct Bresenham {
    x: i64,
    y: i64,
    x1: i64,
    y1: i64,
    sx: i64,
    sy: i64,
    dx: i64,
    dy: i64,
    err: i64,
    done: bool,
}

impl Bresenham {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (x0, y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        Self {
            x: x0,
            y: y0,
            x1,
            y1,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            dx,
            dy,
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for Bresenham {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.done {
            return None;
        }
        let point = (self.x as i32, self.y as i32);
        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
            return Some(point);
        }
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_point() {
        let pts: Vec<_> = Bresenham::new(3, 4, 3, 4).collect();
        assert_eq!(pts, vec![(3, 4)]);
    }

    #[test]
    fn test_shallow_line() {
        let pts: Vec<_> = Bresenham::new(0, 0, 4, 2).collect();
        assert_eq!(pts, vec![(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)]);
    }

    #[test]
    fn test_steep_reverse_line() {
        let pts: Vec<_> = Bresenham::new(1, 3, 0, 0).collect();
        assert_eq!(pts.first(), Some(&(1, 3)));
        assert_eq!(pts.last(), Some(&(0, 0)));
        assert_eq!(pts.len(), 4);
    }

    #[test]
    fn test_diagonal() {
        let pts: Vec<_> = Bresenham::new(0, 0, -3, -3).collect();
        assert_eq!(pts, vec![(0, 0), (-1, -1), (-2, -2), (-3, -3)]);
    }

    #[test]
    fn test_extreme_endpoints_terminate() {
        let mut it = Bresenham::new(i32::MIN, 0, i32::MAX, 1);
        assert_eq!(it.next(), Some((i32::MIN, 0)));
        let it = Bresenham::new(i32::MAX, i32::MIN, i32::MAX - 2, i32::MIN + 2);
        assert_eq!(it.count(), 3);
    }
}
