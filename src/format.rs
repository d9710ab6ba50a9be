//! Text shown on and next to the plot.

use crate::params::Params;

/// At most two decimals, trailing zeros dropped: `2.50` → `2.5`, `3.00` → `3`.
pub fn format_number(n: f64) -> String {
    let s = format!("{n:.2}");
    if let Some(whole) = s.strip_suffix(".00") {
        return whole.to_owned();
    }
    match s.find('.') {
        Some(dot) if s.len() == dot + 3 && s.ends_with('0') => s[..s.len() - 1].to_owned(),
        _ => s,
    }
}

/// `y = A·cos(Bx ± |C|) ± |D|`
pub fn formula_caption(p: &Params) -> String {
    format!(
        "y = {}·cos({}x {} {}) {} {}",
        format_number(p.a),
        format_number(p.b),
        sign(p.c),
        format_number(p.c.abs()),
        sign(p.d),
        format_number(p.d.abs()),
    )
}

fn sign(v: f64) -> char {
    if v >= 0.0 {
        '+'
    } else {
        '-'
    }
}

/// Integer tick label.
pub fn tick_label(v: f64) -> String {
    format!("{v}")
}

/// `#rrggbb` plus alpha as a CSS `rgba()` string. Unparseable channels read
/// as zero.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> String {
    let hex = hex.trim_start_matches('#');
    let channel = |i: usize| {
        hex.get(i..i + 2)
            .and_then(|c| u8::from_str_radix(c, 16).ok())
            .unwrap_or(0)
    };
    format!("rgba({},{},{},{})", channel(0), channel(2), channel(4), alpha)
}
