use rand::Rng;
use serde::{Serialize, Deserialize};
use std::ops::Mul;

/// Row-major dense matrix. Layer activations are stored as `1 × n` rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Samples every entry from U(-limit, limit).
    pub fn uniform<R: Rng + ?Sized>(rows: usize, cols: usize, limit: f64, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        // Also catches NaN, which gen_range would panic on.
        if !(limit > 0.0) {
            return res;
        }

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen_range(-limit..limit);
            }
        }

        res
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    /// Combines two same-shape matrices entry by entry.
    pub fn zip_map<F>(&self, other: &Matrix, functor: F) -> Matrix
    where
        F: Fn(f64, f64) -> f64,
    {
        assert_eq!(self.rows, other.rows, "row count mismatch");
        assert_eq!(self.cols, other.cols, "column count mismatch");
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().zip(other.data.iter())
                .map(|(a, b)| a.iter().zip(b.iter()).map(|(&x, &y)| functor(x, y)).collect())
                .collect(),
        }
    }

    /// Element-wise (Hadamard) product.
    pub fn hadamard(&self, other: &Matrix) -> Matrix {
        self.zip_map(other, |x, y| x * y)
    }

    /// Adds `other` into `self` without allocating a new matrix.
    pub fn add_assign(&mut self, other: &Matrix) {
        assert_eq!(self.rows, other.rows, "row count mismatch");
        assert_eq!(self.cols, other.cols, "column count mismatch");
        for (row, other_row) in self.data.iter_mut().zip(other.data.iter()) {
            for (x, y) in row.iter_mut().zip(other_row.iter()) {
                *x += y;
            }
        }
    }

    pub fn row_vector(values: Vec<f64>) -> Matrix {
        Matrix {
            rows: 1,
            cols: values.len(),
            data: vec![values],
        }
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data.first().map_or(0, Vec::len),
            data
        }
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.cols != rhs.rows {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res =  Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        res
    }
}
