use crate::core::Dimension;
use crate::error::{ChartError, ChartResult};

use super::ChartParameters;

pub(super) fn validate_dimension(dimension: Dimension, field_name: &str) -> ChartResult<()> {
    match dimension {
        Dimension::Pixels(px) => {
            if px == 0 {
                return Err(ChartError::InvalidParameter(format!(
                    "{field_name} in pixels must be > 0"
                )));
            }
        }
        Dimension::Percent(pct) => {
            if !pct.is_finite() || pct <= 0.0 {
                return Err(ChartError::InvalidParameter(format!(
                    "{field_name} percent must be finite and > 0"
                )));
            }
        }
    }
    Ok(())
}

pub(super) fn validate_chart_parameters(parameters: &ChartParameters) -> ChartResult<()> {
    if let Some(width) = parameters.width {
        validate_dimension(width, "width")?;
    }
    if let Some(height) = parameters.height {
        validate_dimension(height, "height")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_dimension;
    use crate::core::Dimension;
    use crate::error::ChartError;

    #[test]
    fn rejects_zero_pixels_and_non_positive_percent() {
        for dimension in [
            Dimension::Pixels(0),
            Dimension::Percent(0.0),
            Dimension::Percent(-5.0),
            Dimension::Percent(f64::INFINITY),
            Dimension::Percent(f64::NAN),
        ] {
            let err = validate_dimension(dimension, "width").expect_err("must reject");
            assert!(matches!(err, ChartError::InvalidParameter(_)));
        }
    }

    #[test]
    fn accepts_regular_sizes() {
        validate_dimension(Dimension::Pixels(480), "height").expect("pixels");
        validate_dimension(Dimension::Percent(100.0), "height").expect("percent");
        validate_dimension(Dimension::Percent(150.0), "width").expect("oversized percent");
    }
}
