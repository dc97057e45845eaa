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

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub fn new(x: f32, y: f32) -> Self {
        PointF { x, y }
    }

    pub fn zero() -> Self {
        PointF { x: 0.0, y: 0.0 }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit-length copy; the zero vector stays zero.
    pub fn normalized(&self) -> Self {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            *self
        } else {
            PointF::new(self.x / magnitude, self.y / magnitude)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_has_unit_length() {
        let diagonal = PointF::new(1.0, 1.0).normalized();
        assert!((diagonal.magnitude() - 1.0).abs() < 1e-6);
        assert!((diagonal.x - diagonal.y).abs() < 1e-6);
    }

    #[test]
    fn normalizing_zero_stays_zero() {
        assert!(PointF::zero().normalized().is_zero());
    }

    #[test]
    fn non_finite_points_are_invalid() {
        assert!(!PointF::new(f32::NAN, 0.0).is_valid());
        assert!(!PointF::new(0.0, f32::INFINITY).is_valid());
        assert!(PointF::new(-3.5, 2.0).is_valid());
    }
}
