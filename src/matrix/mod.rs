//! Dense integer matrices
//!
//! [`Matrix`] is a row-major `Vec<i64>` sized by its own row/column
//! parameters.  Add, subtract and multiply check operand shapes and return
//! [`MatrixError::ShapeMismatch`] before touching any data; transpose is
//! total.  Cells are `i64` so a multiply of session-sized inputs cannot
//! overflow.
//!
//! The session bounds dimensions to 1..=6; the type itself carries no such
//! limit.

use std::fmt;

/// Row-major dense integer matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i64>,
}

/// Errors from shape-checked matrix operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Operand shapes are incompatible for the named operation
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::ShapeMismatch { op, left, right } => {
                write!(
                    f,
                    "Shape mismatch for {}: {}x{} vs {}x{}",
                    op, left.0, left.1, right.0, right.1
                )
            }
        }
    }
}

impl std::error::Error for MatrixError {}

impl Matrix {
    /// All-zero matrix of the given shape
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Build from row slices; every row must have the same length.
    /// Returns `None` on ragged input.
    pub fn from_rows(rows: &[&[i64]]) -> Option<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map(|r| r.len()).unwrap_or(0);
        if rows.iter().any(|r| r.len() != col_count) {
            return None;
        }
        let mut data = Vec::with_capacity(row_count * col_count);
        for row in rows {
            data.extend_from_slice(row);
        }
        Some(Matrix {
            rows: row_count,
            cols: col_count,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.data[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: i64) {
        self.data[row * self.cols + col] = value;
    }

    /// Element-wise sum; shapes must match
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.elementwise("add", other, |a, b| a + b)
    }

    /// Element-wise difference; shapes must match
    pub fn sub(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.elementwise("subtract", other, |a, b| a - b)
    }

    fn elementwise(
        &self,
        op: &'static str,
        other: &Matrix,
        f: impl Fn(i64, i64) -> i64,
    ) -> Result<Matrix, MatrixError> {
        if self.shape() != other.shape() {
            return Err(MatrixError::ShapeMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Standard inner-product multiply; requires `self.cols == other.rows`
    pub fn mul(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols != other.rows {
            return Err(MatrixError::ShapeMismatch {
                op: "multiply",
                left: self.shape(),
                right: other.shape(),
            });
        }
        let mut out = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = 0i64;
                for k in 0..self.cols {
                    acc += self.get(i, k) * other.get(k, j);
                }
                out.set(i, j, acc);
            }
        }
        Ok(out)
    }

    /// `T[j][i] = A[i][j]`
    pub fn transpose(&self) -> Matrix {
        let mut out = Matrix::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.set(j, i, self.get(i, j));
            }
        }
        out
    }
}

impl fmt::Display for Matrix {
    /// Eight-wide right-aligned cells, one row per line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                write!(f, "{:>8}", self.get(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[&[i64]]) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_add_and_sub() {
        let a = m(&[&[1, 2], &[3, 4]]);
        let b = m(&[&[10, 20], &[30, 40]]);
        assert_eq!(a.add(&b).unwrap(), m(&[&[11, 22], &[33, 44]]));
        assert_eq!(b.sub(&a).unwrap(), m(&[&[9, 18], &[27, 36]]));
    }

    #[test]
    fn test_add_shape_mismatch() {
        let a = m(&[&[1, 2, 3]]);
        let b = m(&[&[1, 2]]);
        let err = a.add(&b).unwrap_err();
        assert_eq!(
            err,
            MatrixError::ShapeMismatch {
                op: "add",
                left: (1, 3),
                right: (1, 2),
            }
        );
    }

    #[test]
    fn test_mul_2x3_by_3x2() {
        let a = m(&[&[1, 2, 3], &[4, 5, 6]]);
        let b = m(&[&[7, 8], &[9, 10], &[11, 12]]);
        let r = a.mul(&b).unwrap();
        assert_eq!(r.shape(), (2, 2));
        assert_eq!(r, m(&[&[58, 64], &[139, 154]]));
    }

    #[test]
    fn test_mul_shape_mismatch_rejected() {
        let a = m(&[&[1, 2, 3], &[4, 5, 6]]);
        let b = m(&[&[1, 2], &[3, 4]]);
        assert!(matches!(
            a.mul(&b),
            Err(MatrixError::ShapeMismatch { op: "multiply", .. })
        ));
    }

    #[test]
    fn test_transpose() {
        let a = m(&[&[1, 2, 3], &[4, 5, 6]]);
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t, m(&[&[1, 4], &[2, 5], &[3, 6]]));
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        assert!(Matrix::from_rows(&[&[1, 2], &[3]]).is_none());
    }

    #[test]
    fn test_display_alignment() {
        let a = m(&[&[1, -2], &[30, 4]]);
        let rendered = a.to_string();
        assert_eq!(rendered, "       1      -2\n      30       4\n");
    }
}
