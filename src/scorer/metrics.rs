use crate::geometry::Point;

#[inline(always)]
pub fn euclidean_dist(a: &Point, b: &Point) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Arc length of a polyline. Pen-up jumps between strokes are not included.
pub fn path_length(points: &[Point]) -> f32 {
    points.windows(2).map(|w| euclidean_dist(&w[0], &w[1])).sum()
}

/// Arc length after dropping points closer than `spacing` to the last kept point.
///
/// The final point always closes the path. A `spacing` of 0 gives the plain
/// [`path_length`].
pub fn thinned_path_length(points: &[Point], spacing: f32) -> f32 {
    let Some((&first, rest)) = points.split_first() else {
        return 0.0;
    };
    let mut kept = first;
    let mut total = 0.0;
    for p in rest {
        let d = euclidean_dist(&kept, p);
        if d >= spacing {
            total += d;
            kept = *p;
        }
    }
    total + euclidean_dist(&kept, &points[points.len() - 1])
}

/// Resamples a polyline into `n` points spaced evenly by arc length.
///
/// The first and last points are preserved. A zero-length polyline (one point, or
/// all points coincident) yields `n` copies of its first point, and an empty input
/// yields an empty output.
pub fn resample(points: &[Point], n: usize) -> Vec<Point> {
    if points.is_empty() || n == 0 {
        return Vec::new();
    }
    let total = path_length(points);
    if n == 1 || total <= f32::EPSILON {
        return vec![points[0]; n];
    }

    let step = total / (n - 1) as f32;
    let mut out = Vec::with_capacity(n);
    out.push(points[0]);

    let mut seg = 0;
    // Arc length at the start of `seg`
    let mut walked = 0.0;
    for i in 1..n - 1 {
        let target = step * i as f32;
        while seg + 1 < points.len() - 1
            && walked + euclidean_dist(&points[seg], &points[seg + 1]) < target
        {
            walked += euclidean_dist(&points[seg], &points[seg + 1]);
            seg += 1;
        }
        let a = points[seg];
        let b = points[seg + 1];
        let len = euclidean_dist(&a, &b);
        let t = if len > f32::EPSILON {
            ((target - walked) / len).clamp(0.0, 1.0)
        } else {
            0.0
        };
        out.push(Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t));
    }

    out.push(points[points.len() - 1]);
    out
}

/// Mean distance between index-aligned points. Both slices must share a length.
pub fn mean_pointwise_dist(a: &[Point], b: &[Point]) -> f32 {
    let n = a.len().min(b.len());
    if n == 0 {
        return 0.0;
    }
    let sum: f32 = a.iter().zip(b.iter()).map(|(p, q)| euclidean_dist(p, q)).sum();
    sum / n as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resample_spaces_points_by_arc_length() {
        // Dense at the start, sparse at the end
        let line = vec![
            Point::new(0.0, 0.0),
            Point::new(0.1, 0.0),
            Point::new(0.2, 0.0),
            Point::new(1.0, 0.0),
        ];
        let pts = resample(&line, 5);
        assert_eq!(pts.len(), 5);
        for (i, p) in pts.iter().enumerate() {
            assert!((p.x - i as f32 * 0.25).abs() < 1e-5, "point {} at {}", i, p.x);
        }
    }

    #[test]
    fn resample_handles_coincident_points() {
        let dot = vec![Point::new(3.0, 4.0), Point::new(3.0, 4.0)];
        let pts = resample(&dot, 8);
        assert_eq!(pts.len(), 8);
        assert!(pts.iter().all(|p| *p == Point::new(3.0, 4.0)));
    }

    #[test]
    fn resample_skips_zero_length_segments() {
        let line = vec![
            Point::new(0.0, 0.0),
            Point::new(0.5, 0.0),
            Point::new(0.5, 0.0),
            Point::new(1.0, 0.0),
        ];
        let pts = resample(&line, 3);
        assert!((pts[1].x - 0.5).abs() < 1e-5);
        assert_eq!(pts[2], Point::new(1.0, 0.0));
    }

    #[test]
    fn thinning_ignores_tremor_but_keeps_retraces() {
        // Sub-spacing wobble around a unit line
        let wobbly: Vec<Point> = (0..=100)
            .map(|i| Point::new(i as f32 / 100.0, if i % 2 == 0 { 0.004 } else { -0.004 }))
            .collect();
        assert!(path_length(&wobbly) > 1.25);
        let thinned = thinned_path_length(&wobbly, 0.02);
        assert!((thinned - 1.0).abs() < 0.05, "thinned to {}", thinned);

        let retrace = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 0.0),
        ];
        assert!((thinned_path_length(&retrace, 0.02) - 2.0).abs() < 1e-6);
        assert_eq!(thinned_path_length(&retrace, 0.0), path_length(&retrace));
        assert_eq!(thinned_path_length(&[], 0.02), 0.0);
    }

    #[test]
    fn path_length_of_corner() {
        let corner = vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(3.0, 4.0),
        ];
        assert!((path_length(&corner) - 7.0).abs() < 1e-6);
    }
}
