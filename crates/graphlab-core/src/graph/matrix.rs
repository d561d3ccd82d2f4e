//! Square matrix that grows one vertex at a time

/// Row-major square matrix indexed by vertex handle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SquareMatrix<V> {
    rows: Vec<Vec<V>>,
}

impl<V: Copy + Default> SquareMatrix<V> {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Append a zero column to every row, then a zero row of the new size.
    pub fn push_vertex(&mut self) {
        let size = self.rows.len() + 1;
        for row in &mut self.rows {
            row.push(V::default());
        }
        self.rows.push(vec![V::default(); size]);
    }

    pub fn dim(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, row: usize, col: usize) -> V {
        self.rows[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: V) {
        self.rows[row][col] = value;
    }

    pub fn rows(&self) -> &[Vec<V>] {
        &self.rows
    }
}
