// File: crates/labchart-core/src/format.rs
// Summary: Value-label formatting for the numbers printed above bars.

/// How a bar's value is printed above it.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueFormat {
    pub decimals: usize,
    /// Appended verbatim, e.g. `"×"` or `" s"`.
    pub suffix: String,
    pub bold: bool,
    /// Font size in points.
    pub size: f32,
}

impl ValueFormat {
    pub fn decimals(decimals: usize) -> Self {
        Self { decimals, ..Self::default() }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Multiplier style: `5.67×`.
    pub fn times(self) -> Self {
        self.with_suffix("×")
    }

    /// Unit style with a separating space: `22.67 s`.
    pub fn unit(self, unit: &str) -> Self {
        self.with_suffix(format!(" {unit}"))
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn format(&self, value: f64) -> String {
        format!("{:.*}{}", self.decimals, value, self.suffix)
    }
}

impl Default for ValueFormat {
    fn default() -> Self {
        Self { decimals: 2, suffix: String::new(), bold: false, size: 9.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_decimals() {
        assert_eq!(ValueFormat::decimals(1).format(265.49), "265.5");
        assert_eq!(ValueFormat::decimals(1).format(1146.17), "1146.2");
        assert_eq!(ValueFormat::decimals(2).format(5.67), "5.67");
    }

    #[test]
    fn suffixes() {
        assert_eq!(ValueFormat::decimals(2).times().format(5.67), "5.67×");
        assert_eq!(ValueFormat::decimals(2).unit("s").format(22.67), "22.67 s");
    }
}
