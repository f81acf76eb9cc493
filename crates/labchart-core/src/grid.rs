// File: crates/labchart-core/src/grid.rs
// Summary: Tick layout helpers for linear and log10 value axes.

/// A tick position on the value axis with its rendered label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// Round `span / target` up to 1, 2, 2.5, 5 or 10 times a power of ten.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = (span / target.max(1) as f64).abs();
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Fewest decimals that print `step` exactly (capped at 6).
pub fn decimals_for_step(step: f64) -> usize {
    for d in 0..6 {
        let scaled = step * 10f64.powi(d as i32);
        if (scaled - scaled.round()).abs() < 1e-6 {
            return d;
        }
    }
    6
}

/// Evenly spaced ticks on multiples of a nice step within `[min, max]`.
pub fn linear_ticks(min: f64, max: f64, target: usize) -> Vec<Tick> {
    let step = nice_step(max - min, target);
    let decimals = decimals_for_step(step);
    let first = (min / step).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    (first..=last)
        .map(|k| {
            let value = k as f64 * step;
            Tick { value, label: format!("{:.*}", decimals, value) }
        })
        .collect()
}

/// One tick per power of ten inside `[min, max]`; both bounds must be positive.
pub fn log10_ticks(min: f64, max: f64) -> Vec<Tick> {
    let lo = (min.log10() - 1e-9).ceil() as i32;
    let hi = (max.log10() + 1e-9).floor() as i32;
    (lo..=hi)
        .map(|e| Tick { value: 10f64.powi(e), label: decade_label(e) })
        .collect()
}

/// `10` followed by the exponent in superscript digits, e.g. `10⁻¹`.
pub fn decade_label(exponent: i32) -> String {
    let mut out = String::from("10");
    out.extend(exponent.to_string().chars().map(superscript));
    out
}

fn superscript(c: char) -> char {
    match c {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        '-' => '⁻',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_steps() {
        assert_eq!(nice_step(10_000.0, 6), 2_000.0);
        assert_eq!(nice_step(6.0, 6), 1.0);
        assert!((nice_step(1.3, 6) - 0.25).abs() < 1e-12);
        assert_eq!(nice_step(0.0, 6), 1.0);
    }

    #[test]
    fn linear_ticks_start_at_zero() {
        let ticks = linear_ticks(0.0, 9_900.0, 6);
        assert_eq!(ticks.first().map(|t| t.value), Some(0.0));
        assert_eq!(ticks.last().map(|t| t.label.as_str()), Some("8000"));
        assert_eq!(ticks.len(), 5);
    }

    #[test]
    fn fractional_tick_labels_keep_precision() {
        let ticks = linear_ticks(0.0, 6.2, 6);
        let labels: Vec<_> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["0", "2", "4", "6"]);

        let ticks = linear_ticks(0.0, 1.3, 6);
        assert_eq!(ticks[1].label, "0.25");
    }

    #[test]
    fn log_ticks_one_per_decade() {
        let ticks = log10_ticks(0.1, 250.0);
        let labels: Vec<_> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["10⁻¹", "10⁰", "10¹", "10²"]);
    }
}
