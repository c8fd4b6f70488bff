//! Rotation conversions
//!
//! Rodrigues axis-angle to rotation matrix, and Euler angle extraction from
//! the [R|t] projection matrix. Angle signs follow the right-handed
//! camera-space convention used by OpenCV's projection-matrix decomposition:
//! yaw-left and pitch-up come out negative. Angles are continuous across the
//! typical operating range of +/-90 degrees.

use ndarray::{s, Array2};

/// Convert a Rodrigues rotation vector to a 3x3 rotation matrix.
///
/// R = I cos(t) + sin(t) [k]_x + (1 - cos(t)) k k^T, with t the vector norm
/// and k the unit axis. A near-zero norm yields the identity.
pub fn rodrigues(rvec: [f64; 3]) -> Array2<f64> {
    let theta = (rvec[0] * rvec[0] + rvec[1] * rvec[1] + rvec[2] * rvec[2]).sqrt();
    if theta < 1e-12 {
        return Array2::eye(3);
    }

    let k = [rvec[0] / theta, rvec[1] / theta, rvec[2] / theta];
    let (sin_t, cos_t) = theta.sin_cos();
    let one_minus_cos = 1.0 - cos_t;

    let mut r = Array2::<f64>::zeros((3, 3));
    for i in 0..3 {
        for j in 0..3 {
            let mut v = one_minus_cos * k[i] * k[j];
            if i == j {
                v += cos_t;
            }
            r[[i, j]] = v;
        }
    }

    // sin(t) [k]_x
    r[[0, 1]] -= sin_t * k[2];
    r[[0, 2]] += sin_t * k[1];
    r[[1, 0]] += sin_t * k[2];
    r[[1, 2]] -= sin_t * k[0];
    r[[2, 0]] -= sin_t * k[1];
    r[[2, 1]] += sin_t * k[0];

    r
}

/// Extract (yaw, pitch, roll) in degrees from a 3x4 [R|t] projection matrix.
///
/// The rotation block is decomposed with the ZYX convention: pitch about x,
/// yaw about y, roll about z. Near the gimbal singularity (cos(yaw) ~ 0) the
/// roll axis degenerates and roll is pinned to zero.
pub fn euler_from_projection(projection: &Array2<f64>) -> (f64, f64, f64) {
    let r = projection.slice(s![.., 0..3]);

    let sy = (r[[0, 0]] * r[[0, 0]] + r[[1, 0]] * r[[1, 0]]).sqrt();

    let (pitch, yaw, roll) = if sy > 1e-6 {
        (
            r[[2, 1]].atan2(r[[2, 2]]),
            (-r[[2, 0]]).atan2(sy),
            r[[1, 0]].atan2(r[[0, 0]]),
        )
    } else {
        (
            (-r[[1, 2]]).atan2(r[[1, 1]]),
            (-r[[2, 0]]).atan2(sy),
            0.0,
        )
    };

    (yaw.to_degrees(), pitch.to_degrees(), roll.to_degrees())
}
