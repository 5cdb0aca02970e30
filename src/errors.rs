//! Math errors

/// All the recoverable failures a construction or query can report.
///
/// Precondition violations on the matrix stack (no bound context, popping the
/// seeded identity) are programming errors and panic instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// (SingularMatrix) The determinant is exactly zero, so no inverse exists
    #[error("(SingularMatrix) The matrix determinant is exactly zero")]
    SingularMatrix,
    /// (DegenerateProjection) A projection parameter collapses the view volume
    #[error("(DegenerateProjection) {0}")]
    DegenerateProjection(&'static str),
    /// (DegeneratePlane) The plane normal (a, b, c) has zero length
    #[error("(DegeneratePlane) The plane normal has zero length")]
    DegeneratePlane,
    /// (DivisionByZero) A component-wise divisor contains a zero
    #[error("(DivisionByZero) A divisor component is zero")]
    DivisionByZero,
    /// (InvalidMatrixMode) A numeric matrix mode outside 0x1700..=0x1702
    #[error("(InvalidMatrixMode) {0:#x} is not a matrix mode")]
    InvalidMatrixMode(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_variant() {
        assert_eq!(
            MathError::SingularMatrix.to_string(),
            "(SingularMatrix) The matrix determinant is exactly zero"
        );
        assert_eq!(
            MathError::DegenerateProjection("z_near equals z_far").to_string(),
            "(DegenerateProjection) z_near equals z_far"
        );
        assert_eq!(
            MathError::InvalidMatrixMode(0x1703).to_string(),
            "(InvalidMatrixMode) 0x1703 is not a matrix mode"
        );
    }
}
