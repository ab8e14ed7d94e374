use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::KernelError;
use crate::matrix::Matrix;

/// Coordinate axis a rotation is taken about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn label(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }

    fn component(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }
}

impl TryFrom<char> for Axis {
    type Error = KernelError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'x' => Ok(Axis::X),
            'y' => Ok(Axis::Y),
            'z' => Ok(Axis::Z),
            _ => Err(KernelError::InvalidAxis(c)),
        }
    }
}

/// Order in which three per-axis rotations are applied to a vector.
///
/// The first axis is applied first, so `"zxy"` composes to
/// `R_y * (R_x * R_z)`, the camera convention used by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EulerOrder(pub [Axis; 3]);

impl EulerOrder {
    pub const ZXY: EulerOrder = EulerOrder([Axis::Z, Axis::X, Axis::Y]);
    pub const XYZ: EulerOrder = EulerOrder([Axis::X, Axis::Y, Axis::Z]);

    pub fn axes(&self) -> [Axis; 3] {
        self.0
    }
}

impl Default for EulerOrder {
    fn default() -> Self {
        Self::ZXY
    }
}

impl fmt::Display for EulerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for axis in self.0 {
            write!(f, "{}", axis.label())?;
        }
        Ok(())
    }
}

impl FromStr for EulerOrder {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let labels: Vec<char> = s.chars().collect();
        if labels.len() != 3 {
            return Err(KernelError::InvalidOrder(s.to_string()));
        }
        Ok(EulerOrder([
            Axis::try_from(labels[0])?,
            Axis::try_from(labels[1])?,
            Axis::try_from(labels[2])?,
        ]))
    }
}

impl TryFrom<String> for EulerOrder {
    type Error = KernelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<EulerOrder> for String {
    fn from(order: EulerOrder) -> Self {
        order.to_string()
    }
}

/// Right-handed rotation by `angle_degrees` about `axis`.
pub fn axis_rotation(angle_degrees: f32, axis: Axis) -> Matrix {
    let (s, c) = angle_degrees.to_radians().sin_cos();
    let rows = match axis {
        Axis::X => [[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]],
        Axis::Y => [[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]],
        Axis::Z => [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]],
    };
    Matrix::from_rows(&rows)
}

/// [`axis_rotation`] for an axis given by its label (`'x'`, `'y'`, `'z'`).
pub fn axis_rotation_labeled(angle_degrees: f32, axis: char) -> Result<Matrix, KernelError> {
    Ok(axis_rotation(angle_degrees, Axis::try_from(axis)?))
}

/// Compose the rotation for Euler angles (degrees, indexed by axis) applied
/// in `order`.
pub fn euler_to_matrix(euler_degrees: Vec3, order: EulerOrder) -> Result<Matrix, KernelError> {
    let [first, second, third] =
        order.axes().map(|axis| axis_rotation(axis.component(euler_degrees), axis));
    let rotation = third.multiply(&second.multiply(&first)?)?;
    tracing::trace!(%order, ?euler_degrees, "composed euler rotation");
    Ok(rotation)
}

/// Rotate a local direction into world space.
pub fn calculate_direction(rotation: &Matrix, local: Vec3) -> Result<Vec3, KernelError> {
    let rotated = rotation.multiply(&Matrix::column_vector(local))?;
    rotated.to_vec3().ok_or(KernelError::DimensionMismatch {
        lhs_rows: rotation.rows(),
        lhs_cols: rotation.cols(),
        rhs_rows: 3,
        rhs_cols: 1,
    })
}

/// Parameter `t` at which the line `origin + t * direction` meets the plane
/// through `plane_origin` with normal `plane_normal`.
///
/// Returns `None` when the line is parallel to the plane or `t` does not fit
/// in an `f32`. The direction's length is not assumed.
pub fn intersect_line_plane(
    origin: Vec3,
    direction: Vec3,
    plane_origin: Vec3,
    plane_normal: Vec3,
) -> Option<f32> {
    let denom = plane_normal.dot(direction);
    if denom == 0.0 {
        return None;
    }
    let t = plane_normal.dot(plane_origin - origin) / denom;
    t.is_finite().then_some(t)
}
