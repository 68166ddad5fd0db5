//! A symmetric matrix stored as its triangle in a single contiguous buffer.
//! `(i, j)` and `(j, i)` address the same cell; the diagonal is stored.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangularMatrix<T> {
    width: usize,
    data: Vec<T>,
}

impl<T: Copy + Default> TriangularMatrix<T> {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            data: vec![T::default(); width * (width + 1) / 2],
        }
    }
    /// Build from the upper rows: `rows[i][k]` is the value at `(i, i + 1 + k)`.
    /// The diagonal is left at the default value.
    pub fn from_upper_rows(width: usize, rows: Vec<Vec<T>>) -> Self {
        let mut matrix = Self::new(width);
        for (i, row) in rows.into_iter().enumerate() {
            for (k, value) in row.into_iter().enumerate() {
                matrix.set(i, i + 1 + k, value);
            }
        }
        matrix
    }
    #[inline]
    pub fn index(row: usize, col: usize) -> usize {
        let (i, j) = if row > col { (col, row) } else { (row, col) };
        j * (j + 1) / 2 + i
    }
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[Self::index(row, col)]
    }
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let idx = Self::index(row, col);
        self.data[idx] = value;
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}
