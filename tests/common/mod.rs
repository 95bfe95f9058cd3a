use approx::assert_relative_eq;
use starsky::linalg::{Mat3, Vec3};

pub fn assert_vec_close(actual: &Vec3, expected: &Vec3, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}

pub fn assert_orthogonal(m: &Mat3, epsilon: f64) {
    let prod = m * m.transpose();
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_relative_eq!(prod[(i, j)], expected, epsilon = epsilon);
        }
    }
}
