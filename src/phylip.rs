//src/phylip.rs

use std::fmt::Write as FmtWrite;
use std::io::{self, Write};

use crate::distance::DistanceMatrix;

/// Decimal places kept when printing distances.
pub const PRINT_DECIMALS: i32 = 4;

/// Round half to even at `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}

/// Shortest decimal that reads back as `value`; whole numbers keep a `.0`
/// (`0.0`, `-1.0`, `250.0`).
pub fn format_distance(value: f64) -> String {
    let rounded = round_to(value, PRINT_DECIMALS);
    if rounded.is_finite() && rounded.fract() == 0.0 {
        format!("{rounded:.1}")
    } else {
        format!("{rounded}")
    }
}

impl DistanceMatrix {
    /// PHYLIP-style text: genome count, then `label d1 d2 ...` per genome.
    pub fn to_phylip(&self) -> String {
        let mut output = String::new();
        writeln!(output, "{}", self.len()).unwrap();
        for (label, row) in self.labels.iter().zip(&self.rows) {
            output.push_str(label);
            for &d in row {
                output.push(' ');
                output.push_str(&format_distance(d));
            }
            output.push('\n');
        }
        output
    }
}

/// Write the PHYLIP text of `matrix` to `writer`.
pub fn write_phylip<W: Write>(matrix: &DistanceMatrix, writer: &mut W) -> io::Result<()> {
    writer.write_all(matrix.to_phylip().as_bytes())
}
