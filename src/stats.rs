//! Chi-square independence test
//!
//! Pearson's chi-square test on the 2x2 contingency table, with the
//! continuity-correction convention of scipy's `chi2_contingency` and a
//! survival function that stays accurate deep into the tail.
use crate::errors::ChoreographyError;
use crate::table::ContingencyTable;
use serde::{Deserialize, Serialize};
use statrs::function::gamma::gamma_ur;

/// Result of a chi-square independence test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChiSquareResult {
    /// Chi-square statistic.
    pub statistic: f64,
    /// p-value.
    pub p_value: f64,
    /// Degrees of freedom.
    pub dof: usize,
    /// Expected cell frequencies under independence.
    pub expected: [[f64; 2]; 2],
}

/// Calculate the chi-squared contingency statistic for a 2x2 table.
///
/// The table is represented as:
/// [[a, b],
///  [c, d]]
///
/// Formula: (a+b+c+d) * (ad - bc)^2 / ((a+b)(c+d)(a+c)(b+d))
///
/// This is the uncorrected Pearson statistic in closed form; degenerate
/// tables return 0.
pub fn chi2_contingency_2x2(a: f64, b: f64, c: f64, d: f64) -> f64 {
    let n = a + b + c + d;
    if n == 0.0 {
        return 0.0;
    }
    let numerator = n * (a * d - b * c).powi(2);
    let denominator = (a + b) * (c + d) * (a + c) * (b + d);
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Survival function of the chi-square distribution with `dof` degrees of
/// freedom, the upper regularized incomplete gamma Q(dof/2, x/2).
///
/// Evaluated through the incomplete gamma machinery rather than 1 - CDF, so
/// p-values on the order of 1e-38 come out non-zero.
pub fn chi2_sf(statistic: f64, dof: usize) -> f64 {
    if dof == 0 {
        return f64::NAN;
    }
    if statistic <= 0.0 {
        return 1.0;
    }
    gamma_ur(dof as f64 / 2.0, statistic / 2.0)
}

/// Chi-square test of independence on a 2x2 contingency table.
///
/// Expected frequencies come from the table margins. With `correction` set,
/// every observed count is shifted toward its expected value by
/// min(0.5, |O - E|) before the statistic is formed (Yates' continuity
/// correction as scipy applies it, so the shift never crosses the expected
/// value and a near-independent table scores 0). Returns the statistic,
/// p-value, degrees of freedom, and the expected table, mirroring scipy's
/// quadruple.
///
/// A table with an empty row or column margin has a zero expected cell and
/// is rejected as degenerate.
pub fn chi2_contingency(table: &ContingencyTable, correction: bool) -> Result<ChiSquareResult, ChoreographyError> {
    if table.has_zero_margin() {
        return Err(ChoreographyError::DegenerateTable(zero_margin_name(table).to_string()));
    }

    let observed = table.cells();
    let expected = table.expected();

    let mut statistic = 0.0;
    for r in 0..2 {
        for c in 0..2 {
            let mut delta = (observed[r][c] - expected[r][c]).abs();
            if correction {
                // Yates' shift of 0.5 toward expected, capped at |O - E|.
                delta = (delta - 0.5).max(0.0);
            }
            statistic += delta * delta / expected[r][c];
        }
    }

    // (rows - 1) * (cols - 1) for the 2x2 table.
    let dof = 1;
    let p_value = chi2_sf(statistic, dof);

    Ok(ChiSquareResult {
        statistic,
        p_value,
        dof,
        expected,
    })
}

fn zero_margin_name(table: &ContingencyTable) -> &'static str {
    if table.pulse_total() == 0 {
        "pulse row"
    } else if table.no_pulse_total() == 0 {
        "no-pulse row"
    } else if table.collapse_total() == 0 {
        "collapse column"
    } else {
        "no-collapse column"
    }
}
