//! Arc-length resampling.
//!
//! Produces a fixed number of points evenly spaced along a path's traveled
//! distance so two curves drawn at different speeds can be compared point
//! set to point set.

use crate::error::GradeError;
use crate::geometry::{polyline_length, Point, LENGTH_EPSILON};

/// Resample `points` into exactly `n` points evenly spaced by arc length.
///
/// The first and last output points are the first and last input points.
/// Every output point lies on the input polyline. A single point or a path
/// of (near) zero length yields `n` copies of the first point.
pub fn resample(points: &[Point], n: usize) -> Result<Vec<Point>, GradeError> {
    if n < 2 {
        return Err(GradeError::InvalidSampleCount(n));
    }
    let (&first, &last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(GradeError::EmptyPolyline),
    };

    let total = polyline_length(points);
    if points.len() == 1 || total < LENGTH_EPSILON {
        return Ok(vec![first; n]);
    }

    let step = total / (n - 1) as f64;
    let mut out = Vec::with_capacity(n);
    out.push(first);

    // `from` is where the walk along segment `i` currently stands; it moves to
    // each emitted point so the next step is measured from there.
    let mut from = first;
    let mut acc = 0.0;
    let mut i = 0;

    while out.len() < n - 1 && i < points.len() - 1 {
        let to = points[i + 1];
        let seg = from.distance(to);

        if acc + seg >= step {
            let t = if seg <= LENGTH_EPSILON {
                0.0
            } else {
                (step - acc) / seg
            };
            let p = from.lerp(to, t);
            out.push(p);
            from = p;
            acc = 0.0;
        } else {
            acc += seg;
            from = to;
            i += 1;
        }
    }

    // Accumulated floating-point error must not move the endpoint.
    out.push(last);
    if out.len() < n {
        let pad = out[out.len() - 1];
        out.resize(n, pad);
    }
    out.truncate(n);

    tracing::debug!(
        input_points = points.len(),
        output_points = out.len(),
        length = total,
        "resampled polyline"
    );

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.18, 0.55),
            Point::new(0.27, 0.5),
            Point::new(0.55, 0.78),
            Point::new(0.92, 0.6),
        ]
    }

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn output_has_exactly_n_points() {
        let inputs: Vec<Vec<Point>> = vec![
            reference(),
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)],
            (0..500)
                .map(|i| Point::new(i as f64 / 499.0, ((i as f64) / 40.0).sin()))
                .collect(),
            vec![Point::new(0.3, 0.3)],
            vec![Point::new(0.3, 0.3); 7],
        ];
        for pts in &inputs {
            for n in [2, 3, 10, 160, 1000] {
                let out = resample(pts, n).unwrap();
                assert_eq!(out.len(), n, "input of {} points, n = {n}", pts.len());
            }
        }
    }

    #[test]
    fn endpoints_are_preserved() {
        let pts = reference();
        for n in [2, 5, 160] {
            let out = resample(&pts, n).unwrap();
            assert!(close(out[0], pts[0]));
            assert!(close(out[n - 1], pts[pts.len() - 1]));
        }
    }

    #[test]
    fn straight_line_is_evenly_spaced() {
        let out = resample(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0)], 5).unwrap();
        for (i, p) in out.iter().enumerate() {
            assert!((p.x - i as f64 * 0.25).abs() < 1e-12, "point {i}: {p}");
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn spacing_follows_arc_length_not_index() {
        // Dense samples on the first half, a single long segment on the second.
        let mut pts: Vec<Point> = (0..=50).map(|i| Point::new(i as f64 / 100.0, 0.0)).collect();
        pts.push(Point::new(1.0, 0.0));
        let out = resample(&pts, 11).unwrap();
        for w in out.windows(2) {
            assert!((w[0].distance(w[1]) - 0.1).abs() < 1e-9);
        }
    }

    #[test]
    fn corner_vertex_is_kept_when_step_lands_on_it() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ];
        let out = resample(&pts, 3).unwrap();
        assert!(close(out[1], Point::new(1.0, 0.0)));
    }

    #[test]
    fn output_points_lie_on_the_source() {
        let pts = reference();
        let out = resample(&pts, 160).unwrap();
        for p in &out {
            let d = pts
                .windows(2)
                .map(|w| crate::geometry::distance_to_segment(*p, w[0], w[1]))
                .fold(f64::INFINITY, f64::min);
            assert!(d < 1e-9, "{p} is {d} away from the polyline");
        }
    }

    #[test]
    fn degenerate_paths_repeat_first_point() {
        let single = resample(&[Point::new(0.4, 0.2)], 4).unwrap();
        assert_eq!(single, vec![Point::new(0.4, 0.2); 4]);

        let stationary = resample(&[Point::new(0.1, 0.1); 12], 6).unwrap();
        assert_eq!(stationary, vec![Point::new(0.1, 0.1); 6]);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert_eq!(resample(&[], 10), Err(GradeError::EmptyPolyline));
        assert_eq!(
            resample(&reference(), 1),
            Err(GradeError::InvalidSampleCount(1))
        );
    }
}
