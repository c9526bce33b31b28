use std::fmt;

/// A coordinate pair read from a face file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(2); // Default 2 decimals
        write!(f, "({:.prec$}, {:.prec$})", self.x, self.y, prec = prec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_precision() {
        let p = Point::new(1.0, -2.5);
        assert_eq!(format!("{}", p), "(1.00, -2.50)");
        assert_eq!(format!("{:.1}", p), "(1.0, -2.5)");
    }

    #[test]
    fn test_from_tuple() {
        let p: Point = (3.0, 4.0).into();
        assert_eq!(p, Point::new(3.0, 4.0));
    }
}
