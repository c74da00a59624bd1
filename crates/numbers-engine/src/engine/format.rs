/// Format a computed number for display.
///
/// Integral values have no fraction (`3`), other values use the shortest
/// decimal that round-trips (`0.30000000000000004`). Magnitudes of 1e21 and
/// above, or below 1e-6, switch to exponent form (`1e+21`, `1.5e-7`).
/// Non-finite results display as `Infinity`, `-Infinity` and `NaN`, which the
/// formula lexer accepts back as literals.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // Also catches -0.
        return "0".to_string();
    }

    let abs = n.abs();
    if !(1e-6..1e21).contains(&abs) {
        return format_exponent(n);
    }
    n.to_string()
}

fn format_exponent(n: f64) -> String {
    let s = format!("{:e}", n);
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => s,
    }
}
