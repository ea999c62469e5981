//! Numeric literal formatting for generated source.
//!
//! Values are written in their shortest decimal form (`1`, `0.5`, `-1.5707964`),
//! matching how the target engine would print them. Non-finite values map to
//! the JavaScript globals so the output stays parseable.

use glam::Vec3;

/// Formats one value as a JavaScript numeric literal.
#[must_use]
pub fn js_number(value: f32) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        value.to_string()
    }
}

/// Formats a vector as an argument list: `"x, y, z"`.
#[must_use]
pub fn js_triple(v: Vec3) -> String {
    format!("{}, {}, {}", js_number(v.x), js_number(v.y), js_number(v.z))
}

/// Formats a slice of values as an argument list.
#[must_use]
pub fn js_args(values: &[f32]) -> String {
    values
        .iter()
        .map(|v| js_number(*v))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_values_have_no_fraction() {
        assert_eq!(js_number(1.0), "1");
        assert_eq!(js_number(-2.0), "-2");
        assert_eq!(js_number(0.0), "0");
    }

    #[test]
    fn test_fractions_use_shortest_form() {
        assert_eq!(js_number(0.5), "0.5");
        assert_eq!(js_number(0.1), "0.1");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(js_number(f32::NAN), "NaN");
        assert_eq!(js_number(f32::INFINITY), "Infinity");
        assert_eq!(js_number(f32::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_triple_and_args() {
        assert_eq!(js_triple(Vec3::new(1.0, 2.0, 3.0)), "1, 2, 3");
        assert_eq!(js_args(&[1.0, 32.0, 32.0]), "1, 32, 32");
        assert_eq!(js_args(&[]), "");
    }
}
