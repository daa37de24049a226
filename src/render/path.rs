use crate::core::Point;
use crate::render::svg::format_number;

/// One pixel-space path segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSeg {
    /// Bare `x y` pair, used for polygon/polyline point lists.
    Coord(Point),
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// Accumulates pixel-space path segments for one `d` or `points` attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    segments: Vec<PathSeg>,
}

impl PathData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn coord(&mut self, point: Point) -> &mut Self {
        self.segments.push(PathSeg::Coord(point));
        self
    }

    pub fn move_to(&mut self, point: Point) -> &mut Self {
        self.segments.push(PathSeg::MoveTo(point));
        self
    }

    pub fn line_to(&mut self, point: Point) -> &mut Self {
        self.segments.push(PathSeg::LineTo(point));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.segments.push(PathSeg::Close);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Closed polygon outline through `points` in order.
    #[must_use]
    pub fn polygon(points: &[Point]) -> Self {
        let mut path = Self::new();
        if let Some((first, rest)) = points.split_first() {
            path.move_to(*first);
            for point in rest {
                path.line_to(*point);
            }
            path.close();
        }
        path
    }

    /// Bare coordinate list through `points` in order.
    #[must_use]
    pub fn coords(points: &[Point]) -> Self {
        let mut path = Self::new();
        for point in points {
            path.coord(*point);
        }
        path
    }

    /// Renders segments joined by single spaces, limiting coordinates to
    /// `precision` significant digits.
    #[must_use]
    pub fn render(&self, precision: u8) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                PathSeg::Coord(p) => format!(
                    "{} {}",
                    format_number(p.x, precision),
                    format_number(p.y, precision)
                ),
                PathSeg::MoveTo(p) => format!(
                    "M{} {}",
                    format_number(p.x, precision),
                    format_number(p.y, precision)
                ),
                PathSeg::LineTo(p) => format!(
                    "L{} {}",
                    format_number(p.x, precision),
                    format_number(p.y, precision)
                ),
                PathSeg::Close => "z".to_owned(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::PathData;
    use crate::core::Point;

    #[test]
    fn polygon_closes_outline() {
        let path = PathData::polygon(&[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ]);
        assert_eq!(path.render(4), "M0 0 L10 0 L10 10 z");
    }

    #[test]
    fn coordinates_are_precision_limited() {
        let mut path = PathData::new();
        path.move_to(Point::new(1.23456, 0.000987654));
        assert_eq!(path.render(4), "M1.235 0.0009877");
    }

    #[test]
    fn empty_polygon_renders_nothing() {
        assert_eq!(PathData::polygon(&[]).render(4), "");
    }
}
