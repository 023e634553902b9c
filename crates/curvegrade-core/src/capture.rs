//! Records pointer drags into strokes.
//!
//! Samples outside the plot rectangle are dropped, and a new sample is only
//! kept once the pointer has moved a minimum distance from the previous one.

use crate::geometry::Point;
use crate::model::Drawing;
use crate::normalize::PlotRect;

/// Minimum raw-space movement between two kept samples.
pub const MIN_SAMPLE_SPACING: f64 = 1.5;

/// Builds a [`Drawing`] from pointer-down / move / up events.
#[derive(Debug, Clone)]
pub struct StrokeRecorder {
    plot: PlotRect,
    strokes: Vec<Vec<Point>>,
    drawing: bool,
}

impl StrokeRecorder {
    pub fn new(plot: PlotRect) -> Self {
        Self {
            plot,
            strokes: Vec::new(),
            drawing: false,
        }
    }

    /// Pointer down. Starts a stroke if `p` is inside the plot.
    pub fn begin(&mut self, p: Point) -> bool {
        if !self.plot.contains(p) {
            return false;
        }
        self.drawing = true;
        self.strokes.push(vec![p]);
        true
    }

    /// Pointer move. Returns whether the sample was kept.
    pub fn extend(&mut self, p: Point) -> bool {
        if !self.drawing || !self.plot.contains(p) {
            return false;
        }
        let Some(stroke) = self.strokes.last_mut() else {
            return false;
        };
        match stroke.last() {
            Some(&prev) if prev.distance(p) <= MIN_SAMPLE_SPACING => false,
            _ => {
                stroke.push(p);
                true
            }
        }
    }

    /// Pointer up or cancel.
    pub fn end(&mut self) {
        self.drawing = false;
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Remove the most recent stroke.
    pub fn undo(&mut self) -> Option<Vec<Point>> {
        self.drawing = false;
        self.strokes.pop()
    }

    /// Remove every stroke.
    pub fn reset(&mut self) {
        self.drawing = false;
        self.strokes.clear();
    }

    pub fn strokes(&self) -> &[Vec<Point>] {
        &self.strokes
    }

    pub fn drawing(&self) -> Drawing {
        Drawing::new(self.strokes.clone())
    }

    pub fn into_drawing(self) -> Drawing {
        Drawing::new(self.strokes)
    }
}
