use super::*;

#[test]
fn identity_get() {
    let m = Matrix3::identity();
    for row in 0..3 {
        for col in 0..3 {
            let expected = if row == col { 1. } else { 0. };
            assert_eq!(m.get(row, col), expected);
        }
    }
}
