use crate::Point;
use anyhow::{Result, anyhow};
use std::fmt;

/// Ordered boundary of one polygon, as listed in the face file.
///
/// The first point is not repeated at the end; closing the outline is
/// done by [`Face::closed`] and [`Face::outline`].
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub(crate) pts: Vec<Point>,
}

impl Face {
    /// Creates a face from its vertices. Fails if `pts` is empty.
    pub fn new(pts: Vec<Point>) -> Result<Self> {
        if pts.is_empty() {
            return Err(anyhow!("Face needs at least one point"));
        }
        Ok(Self { pts })
    }

    pub fn pts(&self) -> &[Point] {
        &self.pts
    }

    pub fn len(&self) -> usize {
        self.pts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    /// Returns the vertices followed by the first vertex again.
    pub fn closed(&self) -> Vec<Point> {
        let mut pts = self.pts.clone();
        pts.push(self.pts[0]);
        pts
    }

    /// Returns the closed outline as parallel x and y sequences.
    pub fn outline(&self) -> (Vec<f64>, Vec<f64>) {
        let mut xs: Vec<f64> = self.pts.iter().map(|p| p.x).collect();
        let mut ys: Vec<f64> = self.pts.iter().map(|p| p.y).collect();
        xs.push(xs[0]);
        ys.push(ys[0]);
        (xs, ys)
    }

    /// Signed area from the shoelace formula.
    ///
    /// Positive for counter-clockwise vertex order, negative for clockwise.
    /// Faces with fewer than 3 points have zero area.
    pub fn signed_area(&self) -> f64 {
        let n = self.pts.len();
        let mut area = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            area += self.pts[i].x * self.pts[j].y;
            area -= self.pts[j].x * self.pts[i].y;
        }
        area / 2.0
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Face[")?;
        for (i, p) in self.pts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            fmt::Display::fmt(p, f)?;
        }
        write!(f, "]")
    }
}
