/// Side length of the display cube the cloud is centered into.
pub const DEFAULT_SCALE: f64 = 10.0;

/// Linear rescaling of one axis into the centered display range.
#[derive(Debug, Clone)]
pub struct AxisScale {
    pub min: f64,
    pub max: f64,
    range: f64,
    scale: f64,
}

impl AxisScale {
    /// Fit the scale to a mapped value sequence. NaN entries are treated
    /// as absent and never poison the domain; a constant (or entirely
    /// absent) axis gets a range of 1 so projection stays finite.
    pub fn fit(values: &[f64], scale: f64) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &value in values {
            if !value.is_finite() {
                continue;
            }
            if value < min {
                min = value;
            }
            if value > max {
                max = value;
            }
        }
        if min == f64::INFINITY {
            min = 0.0;
            max = 0.0;
        }
        let range = if max == min { 1.0 } else { max - min };
        Self { min, max, range, scale }
    }

    /// `((value - min) / range - 0.5) * scale`, centering the cloud at the
    /// origin. NaN lands on the axis center.
    pub fn project(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return 0.0;
        }
        ((value - self.min) / self.range - 0.5) * self.scale
    }
}

/// Point radius shrinks with row count so dense clouds stay readable,
/// floored so sparse clouds stay visible.
pub fn point_size(rows: usize) -> f64 {
    (0.2 / (rows as f64).sqrt()).max(0.05)
}

/// Rotation through the full hue circle in row order. Cosmetic only.
pub fn point_hue(index: usize, rows: usize) -> f64 {
    index as f64 / rows as f64
}
