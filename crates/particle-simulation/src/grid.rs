//! Uniform-grid broad phase
//!
//! Bins bodies into square cells at least as wide as the longest interaction
//! distance, so any pair that can interact lies in the same or adjacent cells.
//! Candidate pairs are emitted in lexicographic `(i, j)` order, the same order
//! the all-pairs scan visits them.

use crate::params::Arena;
use particle_physics::Body;

#[derive(Debug, Default)]
pub struct UniformGrid {
    cell_size: f32,
    cols: usize,
    rows: usize,
    cells: Vec<Vec<u32>>,
    pairs: Vec<(u32, u32)>,
}

impl UniformGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Rebuild the bins for the current positions and return every candidate
    /// pair `(i, j)`, `i < j`, sorted.
    ///
    /// `reach` is the largest center distance at which a pair can interact.
    pub fn candidate_pairs(&mut self, bodies: &[Body], arena: Arena, reach: f32) -> &[(u32, u32)] {
        self.rebuild(bodies, arena, reach);
        self.collect_pairs();
        &self.pairs
    }

    fn rebuild(&mut self, bodies: &[Body], arena: Arena, reach: f32) {
        debug_assert!(reach > 0.0);
        self.cell_size = reach;
        self.cols = ((arena.width / reach).ceil() as usize).max(1);
        self.rows = ((arena.height / reach).ceil() as usize).max(1);

        let cell_count = self.cols * self.rows;
        self.cells.resize_with(cell_count, Vec::new);
        self.cells.truncate(cell_count);
        for cell in &mut self.cells {
            cell.clear();
        }

        for (index, body) in bodies.iter().enumerate() {
            let cell = self.cell_of(body.position.x, body.position.y);
            self.cells[cell].push(index as u32);
        }
    }

    /// Bodies outside the arena (before clamping) land in the nearest edge
    /// cell. The mapping stays monotone so in-range pairs remain adjacent.
    fn cell_of(&self, x: f32, y: f32) -> usize {
        let cx = ((x / self.cell_size).floor().max(0.0) as usize).min(self.cols - 1);
        let cy = ((y / self.cell_size).floor().max(0.0) as usize).min(self.rows - 1);
        cy * self.cols + cx
    }

    fn collect_pairs(&mut self) {
        self.pairs.clear();

        for cy in 0..self.rows {
            for cx in 0..self.cols {
                let here = &self.cells[cy * self.cols + cx];

                for (k, &a) in here.iter().enumerate() {
                    for &b in &here[k + 1..] {
                        self.pairs.push((a.min(b), a.max(b)));
                    }
                }

                // Half neighbourhood so each cell pair is visited once
                for (dx, dy) in [(1i64, 0i64), (-1, 1), (0, 1), (1, 1)] {
                    let nx = cx as i64 + dx;
                    let ny = cy as i64 + dy;
                    if nx < 0 || ny < 0 || nx >= self.cols as i64 || ny >= self.rows as i64 {
                        continue;
                    }
                    let there = &self.cells[ny as usize * self.cols + nx as usize];
                    for &a in here {
                        for &b in there {
                            self.pairs.push((a.min(b), a.max(b)));
                        }
                    }
                }
            }
        }

        self.pairs.sort_unstable();
    }
}
