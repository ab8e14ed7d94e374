use glam::Vec3;

use crate::error::KernelError;

/// Row-major `f32` matrix with a runtime shape.
///
/// Sized for the kernel's needs (3x3 rotations, 3x1 column vectors); no
/// attempt is made at blocking or SIMD.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Build from fixed-width rows.
    pub fn from_rows<const N: usize>(rows: &[[f32; N]]) -> Self {
        Self {
            rows: rows.len(),
            cols: N,
            data: rows.iter().flatten().copied().collect(),
        }
    }

    /// Wrap row-major `data`. The length must equal `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self, KernelError> {
        if data.len() != rows * cols {
            return Err(KernelError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// 3x1 column vector.
    pub fn column_vector(v: Vec3) -> Self {
        Self {
            rows: 3,
            cols: 1,
            data: vec![v.x, v.y, v.z],
        }
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

    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Entries of column `col`, top to bottom.
    pub fn column(&self, col: usize) -> Option<Vec<f32>> {
        if col >= self.cols {
            return None;
        }
        Some((0..self.rows).map(|i| self.data[i * self.cols + col]).collect())
    }

    pub fn transpose(&self) -> Self {
        let mut t = Self::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                t.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        t
    }

    /// Matrix product `self * rhs`.
    ///
    /// Fails with [`KernelError::DimensionMismatch`] when
    /// `self.cols() != rhs.rows()`.
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix, KernelError> {
        if self.cols != rhs.rows {
            return Err(KernelError::DimensionMismatch {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: rhs.rows,
                rhs_cols: rhs.cols,
            });
        }

        let mut out = Self::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.data[i * self.cols + k] * rhs.data[k * rhs.cols + j];
                }
                out.data[i * rhs.cols + j] = sum;
            }
        }
        Ok(out)
    }

    /// Read a 3x1 column vector back into a `Vec3`.
    pub fn to_vec3(&self) -> Option<Vec3> {
        if self.shape() == (3, 1) {
            Some(Vec3::new(self.data[0], self.data[1], self.data[2]))
        } else {
            None
        }
    }

    /// Same shape and every entry within `eps`.
    pub fn approx_eq(&self, other: &Matrix, eps: f32) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= eps)
    }
}

/// One line per row, entries separated by `", "`.
pub fn format_matrix(m: &Matrix) -> String {
    let mut out = String::new();
    for i in 0..m.rows {
        let row = &m.data[i * m.cols..(i + 1) * m.cols];
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        out.push_str(&line.join(", "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiply_2x3_by_3x2() {
        let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let b = Matrix::from_rows(&[[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]);
        let c = a.multiply(&b).unwrap();
        let expected = Matrix::from_rows(&[[58.0, 64.0], [139.0, 154.0]]);
        assert_eq!(c, expected);
    }

    #[test]
    fn multiply_rejects_mismatched_inner_dimensions() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 3);
        let err = a.multiply(&b).unwrap_err();
        assert_eq!(
            err,
            KernelError::DimensionMismatch {
                lhs_rows: 2,
                lhs_cols: 3,
                rhs_rows: 2,
                rhs_cols: 3,
            }
        );
    }

    #[test]
    fn identity_is_neutral() {
        let a = Matrix::from_rows(&[[1.0, -2.0, 0.5], [3.0, 0.0, 4.0], [2.0, 2.0, 2.0]]);
        let i = Matrix::identity(3);
        assert_eq!(i.multiply(&a).unwrap(), a);
        assert_eq!(a.multiply(&i).unwrap(), a);
    }

    #[test]
    fn from_vec_checks_length() {
        let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(m.get(1, 0), Some(3.0));
        let err = Matrix::from_vec(2, 2, vec![1.0]).unwrap_err();
        assert_eq!(
            err,
            KernelError::ShapeMismatch {
                rows: 2,
                cols: 2,
                len: 1
            }
        );
    }

    #[test]
    fn column_vector_roundtrip() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let m = Matrix::column_vector(v);
        assert_eq!(m.shape(), (3, 1));
        assert_eq!(m.to_vec3(), Some(v));
        assert_eq!(Matrix::zeros(1, 3).to_vec3(), None);
    }

    #[test]
    fn transpose_swaps_indices() {
        let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.get(2, 1), Some(6.0));
        assert_eq!(t.column(0), Some(vec![1.0, 2.0, 3.0]));
    }

    #[test]
    fn format_one_line_per_row() {
        let m = Matrix::identity(2);
        assert_eq!(format_matrix(&m), "1, 0\n0, 1\n");
    }
}
