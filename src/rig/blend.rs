use crate::curve::Weight;
use crate::types::{Mat4, Quat, SrtData, Vec3};
use nalgebra::{Matrix3, Rotation3};

/// Scale/rotate/translate channels recovered from a blended matrix
#[derive(Debug, Clone)]
pub struct Srt {
    pub scale: Vec3,
    pub rotation: Quat,
    pub translation: Vec3,
}

impl Srt {
    pub fn identity() -> Self {
        Self {
            scale: Vec3::new(1.0, 1.0, 1.0),
            rotation: Quat::identity(),
            translation: Vec3::zeros(),
        }
    }

    /// Recompose the channels into an affine matrix (T * R * S)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.translation)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }
}

impl From<&Srt> for SrtData {
    fn from(srt: &Srt) -> Self {
        SrtData {
            scale: srt.scale.into(),
            rotation: srt.rotation.into(),
            translation: srt.translation.into(),
        }
    }
}

/// Blend matrices by their weights: element-wise sum of `weight * matrix`.
///
/// With weights from the curve weight generator this is an affine
/// combination (weights sum to 1), so the result is again an affine
/// transform and can be decomposed back into channels.
pub fn blend_matrices(weights: &[Weight<Mat4>]) -> Mat4 {
    let mut sum = Mat4::zeros();
    for entry in weights {
        sum += entry.item * entry.weight;
    }
    sum
}

/// Decompose an affine matrix into scale, rotation and translation.
///
/// Scale comes from the basis column lengths (x negated when the basis
/// is reflected), rotation from the nearest-rotation fit of the
/// normalized basis. Shear is not recovered.
pub fn decompose_matrix(matrix: &Mat4) -> Srt {
    let translation = Vec3::new(matrix[(0, 3)], matrix[(1, 3)], matrix[(2, 3)]);

    let basis: Matrix3<f64> = matrix.fixed_view::<3, 3>(0, 0).into_owned();
    let mut scale = Vec3::new(
        basis.column(0).norm(),
        basis.column(1).norm(),
        basis.column(2).norm(),
    );
    if basis.determinant() < 0.0 {
        scale.x = -scale.x;
    }

    // Degenerate basis (a scale collapsed to zero): keep the measured
    // scale but fall back to an identity rotation
    if scale.x.abs() < 1e-12 || scale.y.abs() < 1e-12 || scale.z.abs() < 1e-12 {
        return Srt {
            scale,
            rotation: Quat::identity(),
            translation,
        };
    }

    let normalized = Matrix3::from_columns(&[
        basis.column(0) / scale.x,
        basis.column(1) / scale.y,
        basis.column(2) / scale.z,
    ]);
    let rotation = Quat::from_rotation_matrix(&Rotation3::from_matrix(&normalized));

    Srt {
        scale,
        rotation,
        translation,
    }
}
