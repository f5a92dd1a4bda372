use std::ops::{Index, Mul};

use super::{approx_eq, ApproxEq, Tuple};
use crate::error::Error;

/// A 4x4 matrix in row-major order, acting on homogeneous [`Tuple`]s.
///
/// Transforms compose by multiplication. The fluent builders ([`Matrix4::translate`],
/// [`Matrix4::scale`], [`Matrix4::rotate_x`], ...) apply their transform *after* the
/// receiver, so `Matrix4::identity().rotate_x(a).scale(..).translate(..)` equals
/// `translation * scaling * rotation`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix4 {
    rows: [[f64; 4]; 4],
}

impl Matrix4 {
    pub fn new(rows: [[f64; 4]; 4]) -> Self {
        Self { rows }
    }

    #[rustfmt::skip]
    pub fn identity() -> Self {
        Self::new([
            [1., 0., 0., 0.],
            [0., 1., 0., 0.],
            [0., 0., 1., 0.],
            [0., 0., 0., 1.],
        ])
    }

    /// Translation by `(x, y, z)`. Vectors are unaffected since their `w` is zero.
    #[rustfmt::skip]
    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        Self::new([
            [1., 0., 0., x],
            [0., 1., 0., y],
            [0., 0., 1., z],
            [0., 0., 0., 1.],
        ])
    }

    /// Scaling along each axis. A negative factor reflects across that axis.
    #[rustfmt::skip]
    pub fn scaling(x: f64, y: f64, z: f64) -> Self {
        Self::new([
            [x,  0., 0., 0.],
            [0., y,  0., 0.],
            [0., 0., z,  0.],
            [0., 0., 0., 1.],
        ])
    }

    /// Right-handed rotation about the x axis, in radians.
    #[rustfmt::skip]
    pub fn rotation_x(r: f64) -> Self {
        Self::new([
            [1., 0.,      0.,       0.],
            [0., r.cos(), -r.sin(), 0.],
            [0., r.sin(), r.cos(),  0.],
            [0., 0.,      0.,       1.],
        ])
    }

    /// Right-handed rotation about the y axis, in radians.
    #[rustfmt::skip]
    pub fn rotation_y(r: f64) -> Self {
        Self::new([
            [r.cos(),  0., r.sin(), 0.],
            [0.,       1., 0.,      0.],
            [-r.sin(), 0., r.cos(), 0.],
            [0.,       0., 0.,      1.],
        ])
    }

    /// Right-handed rotation about the z axis, in radians.
    #[rustfmt::skip]
    pub fn rotation_z(r: f64) -> Self {
        Self::new([
            [r.cos(), -r.sin(), 0., 0.],
            [r.sin(), r.cos(),  0., 0.],
            [0.,      0.,       1., 0.],
            [0.,      0.,       0., 1.],
        ])
    }

    /// Shear. Each coefficient moves the first named coordinate in proportion to the
    /// second, e.g. `xy` adds `xy * y` to `x`.
    #[rustfmt::skip]
    pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Self {
        Self::new([
            [1., xy, xz, 0.],
            [yx, 1., yz, 0.],
            [zx, zy, 1., 0.],
            [0., 0., 0., 1.],
        ])
    }

    /// The world-to-eye transform for an eye at `from` looking towards `to`.
    #[rustfmt::skip]
    pub fn view_transform(from: Tuple, to: Tuple, up: Tuple) -> Self {
        let forward = (to - from).normalize();
        let left = forward.cross(up.normalize());
        let true_up = left.cross(forward);

        let orientation = Self::new([
            [left.x,     left.y,     left.z,     0.],
            [true_up.x,  true_up.y,  true_up.z,  0.],
            [-forward.x, -forward.y, -forward.z, 0.],
            [0.,         0.,         0.,         1.],
        ]);

        orientation * Self::translation(-from.x, -from.y, -from.z)
    }

    /// Compose so that `self` is applied first and `next` second, i.e. `next * self`.
    pub fn then(self, next: Self) -> Self {
        next * self
    }

    pub fn translate(self, x: f64, y: f64, z: f64) -> Self {
        self.then(Self::translation(x, y, z))
    }

    pub fn scale(self, x: f64, y: f64, z: f64) -> Self {
        self.then(Self::scaling(x, y, z))
    }

    pub fn rotate_x(self, r: f64) -> Self {
        self.then(Self::rotation_x(r))
    }

    pub fn rotate_y(self, r: f64) -> Self {
        self.then(Self::rotation_y(r))
    }

    pub fn rotate_z(self, r: f64) -> Self {
        self.then(Self::rotation_z(r))
    }

    pub fn shear(self, xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Self {
        self.then(Self::shearing(xy, xz, yx, yz, zx, zy))
    }

    pub fn transpose(self) -> Self {
        let mut o = [[0.; 4]; 4];
        for (i, row) in self.rows.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                o[j][i] = *value;
            }
        }
        Self::new(o)
    }

    /// The 3x3 matrix left after removing `row` and `col`.
    fn submatrix(&self, row: usize, col: usize) -> [[f64; 3]; 3] {
        let mut o = [[0.; 3]; 3];
        for (oi, i) in (0..4).filter(|&i| i != row).enumerate() {
            for (oj, j) in (0..4).filter(|&j| j != col).enumerate() {
                o[oi][oj] = self.rows[i][j];
            }
        }
        o
    }

    fn cofactor(&self, row: usize, col: usize) -> f64 {
        let minor = determinant3(&self.submatrix(row, col));
        if (row + col) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    pub fn determinant(&self) -> f64 {
        (0..4).map(|j| self.rows[0][j] * self.cofactor(0, j)).sum()
    }

    /// Invert this matrix by cofactor expansion, failing if it is singular.
    pub fn try_inverse(&self) -> Result<Self, Error> {
        let det = self.determinant();
        if det == 0. {
            return Err(Error::SingularMatrix);
        }

        // transposed cofactor matrix, scaled by 1/det
        let mut o = [[0.; 4]; 4];
        for row in 0..4 {
            for col in 0..4 {
                o[col][row] = self.cofactor(row, col) / det;
            }
        }
        Ok(Self::new(o))
    }

    /// Invert this matrix.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is singular. Every transform attached to geometry or a
    /// pattern must be invertible, so this is a programming error rather than a
    /// recoverable condition.
    pub fn inverse(&self) -> Self {
        match self.try_inverse() {
            Ok(inverse) => inverse,
            Err(e) => panic!("{}: {:?}", e, self),
        }
    }

    pub fn rows(&self) -> [[f64; 4]; 4] {
        self.rows
    }
}

fn determinant3(m: &[[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Index<(usize, usize)> for Matrix4 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.rows[row][col]
    }
}

impl ApproxEq for Matrix4 {
    fn approx_eq(&self, other: &Self) -> bool {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .all(|(a, b)| approx_eq(*a, *b))
    }
}

impl Mul for Matrix4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let a = self.rows;
        let b = rhs.rows;
        let mut o = [[0.; 4]; 4];

        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    o[i][j] += a[i][k] * b[k][j];
                }
            }
        }

        Self::new(o)
    }
}

impl Mul<Tuple> for Matrix4 {
    type Output = Tuple;

    fn mul(self, rhs: Tuple) -> Self::Output {
        let row = |i: usize| {
            let r = self.rows[i];
            r[0] * rhs.x + r[1] * rhs.y + r[2] * rhs.z + r[3] * rhs.w
        };
        Tuple::new(row(0), row(1), row(2), row(3))
    }
}

impl Mul<Tuple> for &Matrix4 {
    type Output = Tuple;

    fn mul(self, rhs: Tuple) -> Self::Output {
        *self * rhs
    }
}
