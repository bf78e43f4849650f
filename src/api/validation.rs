use crate::core::primitives::in_unit_interval;
use crate::core::ticks::MAX_TICKS_PER_AXIS;
use crate::error::{ChartError, ChartResult};

use super::options::{AxisSideOptions, ChartOptions};

const MAX_TICK_PRECISION: u32 = 12;

fn config_error(message: impl Into<String>) -> ChartError {
    ChartError::Configuration(message.into())
}

fn require_finite(name: &str, value: f64) -> ChartResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(config_error(format!("{name} must be finite")))
    }
}

fn require_non_negative(name: &str, value: f64) -> ChartResult<()> {
    require_finite(name, value)?;
    if value < 0.0 {
        return Err(config_error(format!("{name} must be >= 0")));
    }
    Ok(())
}

fn require_positive(name: &str, value: f64) -> ChartResult<()> {
    require_finite(name, value)?;
    if value <= 0.0 {
        return Err(config_error(format!("{name} must be > 0")));
    }
    Ok(())
}

fn require_unit(name: &str, value: f64) -> ChartResult<()> {
    if !in_unit_interval(value) {
        return Err(config_error(format!("{name} must be in [0, 1]")));
    }
    Ok(())
}

fn validate_axis_side(axis: &str, side: &AxisSideOptions) -> ChartResult<()> {
    if side.tick_count > MAX_TICKS_PER_AXIS {
        return Err(config_error(format!(
            "axis.{axis}.tickCount must be <= {MAX_TICKS_PER_AXIS}"
        )));
    }
    if side.tick_precision > MAX_TICK_PRECISION {
        return Err(config_error(format!(
            "axis.{axis}.tickPrecision must be <= {MAX_TICK_PRECISION}"
        )));
    }
    require_non_negative(&format!("axis.{axis}.interval"), side.interval)?;
    if let Some(rotate) = side.rotate {
        require_finite(&format!("axis.{axis}.rotate"), rotate)?;
    }
    if let Some([min, max]) = side.range {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(config_error(format!(
                "axis.{axis}.range must be finite with min <= max, got [{min}, {max}]"
            )));
        }
    }
    if let Some(ticks) = &side.ticks {
        for tick in ticks {
            require_finite(&format!("axis.{axis}.ticks value"), tick.value())?;
        }
    }
    Ok(())
}

pub(super) fn validate_options(options: &ChartOptions) -> ChartResult<()> {
    let axis = &options.axis;
    require_non_negative("axis.lineWidth", axis.line_width)?;
    require_non_negative("axis.tickSize", axis.tick_size)?;
    require_positive("axis.labelFontSize", axis.label_font_size)?;
    require_positive("axis.tickFontSize", axis.tick_font_size)?;
    validate_axis_side("x", &axis.x)?;
    validate_axis_side("y", &axis.y)?;

    require_non_negative("background.lineWidth", options.background.line_width)?;

    let padding = options.padding;
    for (name, value) in [
        ("padding.left", padding.left),
        ("padding.right", padding.right),
        ("padding.top", padding.top),
        ("padding.bottom", padding.bottom),
    ] {
        require_non_negative(name, value)?;
    }

    let legend = &options.legend;
    require_unit("legend.opacity", legend.opacity)?;
    require_non_negative("legend.borderWidth", legend.border_width)?;
    let position = legend.position;
    for (name, value) in [
        ("legend.position.top", position.top),
        ("legend.position.left", position.left),
        ("legend.position.bottom", position.bottom),
        ("legend.position.right", position.right),
    ] {
        if let Some(value) = value {
            require_finite(name, value)?;
        }
    }

    require_non_negative("stroke.width", options.stroke.width)?;
    require_unit("fillOpacity", options.fill_opacity)?;

    let fill = options.bar_width_fill_fraction;
    if !fill.is_finite() || fill <= 0.0 || fill > 1.0 {
        return Err(config_error(format!(
            "barWidthFillFraction must be in (0, 1], got {fill}"
        )));
    }
    if let Some(radius) = options.pie_radius {
        if !radius.is_finite() || radius <= 0.0 || radius > 0.5 {
            return Err(config_error(format!(
                "pieRadius must be in (0, 0.5], got {radius}"
            )));
        }
    }

    require_positive("titleFontSize", options.title_font_size)?;

    let encoding = options.encoding.to_ascii_lowercase();
    if encoding != "utf-8" && encoding != "utf8" {
        return Err(config_error(format!(
            "unsupported encoding `{}`; only utf-8 is supported",
            options.encoding
        )));
    }
    Ok(())
}
