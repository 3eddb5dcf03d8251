//! The fill sink: a grid of cells painted by a brush.

use std::collections::BTreeMap;

use crate::types::{Brush, MaterialTag, Paint};

/// A rectangular grid of optionally painted cells.
///
/// Cells map to brush coordinates through an origin, so a canvas can show
/// any window of an unbounded texture.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    origin: (i64, i64),
    /// Row-major: cells[y * width + x].
    cells: Vec<Option<Paint>>,
}

impl Canvas {
    /// Create an unpainted canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            origin: (0, 0),
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Place the top-left cell at brush coordinates `(x, y)`.
    pub fn with_origin(mut self, x: i64, y: i64) -> Self {
        self.origin = (x, y);
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn origin(&self) -> (i64, i64) {
        self.origin
    }

    /// Evaluate `brush` once per cell.
    ///
    /// Cells the brush does not contribute to keep their previous paint.
    /// Returns the number of cells painted.
    pub fn fill(&mut self, brush: &Brush) -> usize {
        let (ox, oy) = self.origin;
        let width = self.width as usize;
        let mut painted = 0;

        for (i, cell) in self.cells.iter_mut().enumerate() {
            let x = ox + (i % width) as i64;
            let y = oy + (i / width) as i64;
            if let Some(paint) = brush.evaluate(x, y) {
                *cell = Some(paint);
                painted += 1;
            }
        }

        painted
    }

    /// Paint at a local cell, or `None` when unset or out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Paint> {
        self.index(x, y).and_then(|i| self.cells[i])
    }

    /// Overwrite a local cell. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u32, y: u32, paint: Paint) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = Some(paint);
        }
    }

    /// Iterate rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Paint>]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Number of painted cells.
    pub fn painted(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Painted cell count per material tag.
    pub fn tag_histogram(&self) -> BTreeMap<MaterialTag, usize> {
        let mut histogram = BTreeMap::new();
        for paint in self.cells.iter().flatten() {
            *histogram.entry(paint.tag).or_insert(0) += 1;
        }
        histogram
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }
}
