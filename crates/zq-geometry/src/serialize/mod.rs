// Modules
mod stream;

// Re-exports
pub use stream::{StreamError, StreamSerialize, StreamVersion};
pub(crate) use stream::{read_f64, read_int, write_f64, write_int};

/// (De)serialize a `f64` rounded to three decimal places.
pub mod f64_dp3 {
    use serde::{Deserialize, Deserializer, Serializer};

    /// Round to three decimal places.
    pub fn round_dp3(value: f64) -> f64 {
        (value * 1000.0).round() / 1000.0
    }

    #[allow(missing_docs)]
    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(round_dp3(*value))
    }

    #[allow(missing_docs)]
    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        f64::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::f64_dp3::round_dp3;
    use approx::assert_relative_eq;

    #[test]
    fn rounding() {
        assert_relative_eq!(round_dp3(1.23456), 1.235);
        assert_relative_eq!(round_dp3(-0.0004), 0.0);
        assert_relative_eq!(round_dp3(20.0), 20.0);
    }
}
