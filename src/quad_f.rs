// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

#[derive(Copy, Clone, Debug)]
pub struct QuadF {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl QuadF {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        QuadF { x, y, w, h }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }

    /// Whole-rectangle containment, edges included.
    pub fn contains_quad(&self, other: &QuadF) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.w <= self.x + self.w
            && other.y + other.h <= self.y + self.h
    }

    pub fn moved(&self, dx: f32, dy: f32) -> Self {
        QuadF::new(self.x + dx, self.y + dy, self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive_near_exclusive_far() {
        let quad = QuadF::new(10.0, 10.0, 5.0, 5.0);
        assert!(quad.contains(10.0, 10.0));
        assert!(quad.contains(14.9, 14.9));
        assert!(!quad.contains(15.0, 12.0));
        assert!(!quad.contains(9.9, 12.0));
    }

    #[test]
    fn contains_quad_accepts_shared_edges() {
        let outer = QuadF::new(0.0, 0.0, 10.0, 10.0);
        assert!(outer.contains_quad(&QuadF::new(0.0, 0.0, 10.0, 10.0)));
        assert!(outer.contains_quad(&QuadF::new(2.0, 3.0, 4.0, 4.0)));
        assert!(!outer.contains_quad(&QuadF::new(8.0, 8.0, 4.0, 4.0)));
    }

    #[test]
    fn moved_shifts_position_only() {
        let quad = QuadF::new(1.0, 2.0, 3.0, 4.0);
        let shifted = quad.moved(-0.5, 0.5);
        assert_eq!(shifted.x, 0.5);
        assert_eq!(shifted.y, 2.5);
        assert_eq!(shifted.w, 3.0);
        assert_eq!(shifted.h, 4.0);
    }
}
