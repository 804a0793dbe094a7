//! # Solver Dispatch
//!
//! Variable-driven dispatch over a formula's declared solve variants.
//!
//! A [`SolveVariant`] is one way to compute a formula's output symbol from a
//! specific subset of known inputs: it names the symbol it produces, the
//! symbols it requires, optionally symbols that must be *absent* (used to pick
//! a simplified rearrangement), and the unit of the result. [`solve`] scans a
//! formula's variants in declaration order and evaluates the first match.
//!
//! ## Input handling
//!
//! Known values arrive as strings (the wire format of the calculator form).
//! A value that does not parse as a float is treated as absent, not as an
//! error: blank or malformed fields simply do not count towards a variant's
//! requirements. Finding no applicable variant is likewise not an error but
//! the legitimate outcome `Ok(None)`.
//!
//! ## Numeric conventions
//!
//! - All arithmetic is `f64`; no symbolic simplification
//! - Angle-valued symbols are degrees at the interface and converted to
//!   radians immediately around trigonometric calls
//! - Division by zero and out-of-domain `sqrt`/`asin`/`acos` produce
//!   `Infinity`/`NaN`, which pass through uninterpreted; callers must treat
//!   non-finite results as distinct from "unsolvable"

use std::collections::HashMap;
use std::f64::consts::PI;

use serde::Serialize;

use crate::errors::{ApiError, ApiResult};
use crate::formulas;

/// Parsed variable assignment: symbol -> numeric value
pub type VarMap = HashMap<String, f64>;

/// Evaluation function of a solve variant.
///
/// The map is guaranteed to contain every symbol in the variant's `requires`
/// list when the variant is selected by [`solve`].
pub type EvalFn = fn(&VarMap) -> f64;

/// One declared way to compute a formula's output variable.
#[derive(Debug, Clone)]
pub struct SolveVariant {
    /// Symbol this variant produces
    pub produces: &'static str,
    /// Symbols that must be present (parsed successfully)
    pub requires: &'static [&'static str],
    /// Symbols that must be absent or unparseable
    pub excludes: &'static [&'static str],
    /// Unit of the produced value
    pub unit: &'static str,
    /// Pure evaluation over the parsed values
    pub eval: EvalFn,
}

impl SolveVariant {
    pub const fn new(
        produces: &'static str,
        requires: &'static [&'static str],
        unit: &'static str,
        eval: EvalFn,
    ) -> Self {
        Self { produces, requires, excludes: &[], unit, eval }
    }

    pub const fn with_excludes(
        produces: &'static str,
        requires: &'static [&'static str],
        excludes: &'static [&'static str],
        unit: &'static str,
        eval: EvalFn,
    ) -> Self {
        Self { produces, requires, excludes, unit, eval }
    }

    /// Whether this variant applies to the given target and known values.
    pub fn matches(&self, target: &str, known: &VarMap) -> bool {
        self.produces == target
            && self.requires.iter().all(|s| known.contains_key(*s))
            && self.excludes.iter().all(|s| !known.contains_key(*s))
    }
}

/// A successful solve: the computed value and its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolveResult {
    pub value: f64,
    pub unit: &'static str,
}

/// Parse the raw string assignment into numeric values.
///
/// Entries that fail to parse are dropped (treated as absent). This is the
/// documented resolution of the malformed-input question: a present but
/// unparseable value behaves exactly like a blank field.
pub fn parse_known_values(raw: &HashMap<String, String>) -> VarMap {
    raw.iter()
        .filter_map(|(symbol, value)| {
            value.trim().parse::<f64>().ok().map(|n| (symbol.clone(), n))
        })
        .collect()
}

/// Solve a formula for a target symbol given a partial string assignment.
///
/// Returns `Err(NotFound)` for an unknown formula id, `Ok(None)` when no
/// declared variant covers the supplied combination of knowns, and
/// `Ok(Some(..))` with the computed value and unit otherwise. Variants are
/// tried in declaration order; the first match wins.
pub fn solve(
    formula_id: &str,
    target: &str,
    known_values: &HashMap<String, String>,
) -> ApiResult<Option<SolveResult>> {
    let formula = formulas::by_id(formula_id)
        .ok_or_else(|| ApiError::not_found("Formel nicht gefunden"))?;

    let known = parse_known_values(known_values);

    Ok(formula
        .variants
        .iter()
        .find(|variant| variant.matches(target, &known))
        .map(|variant| SolveResult {
            value: (variant.eval)(&known),
            unit: variant.unit,
        }))
}

/// Degrees -> radians, applied immediately before trigonometric calls.
pub(crate) fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Radians -> degrees, applied to angle-valued outputs.
pub(crate) fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_ohms_law_current() {
        let result = solve("ohms-law", "I", &known(&[("U", "230"), ("R", "100")]))
            .unwrap()
            .unwrap();
        assert_eq!(result.value, 2.3);
        assert_eq!(result.unit, "A");
    }

    #[test]
    fn test_kinetic_energy() {
        let result = solve("kinetic-energy", "E_kin", &known(&[("m", "1500"), ("v", "20")]))
            .unwrap()
            .unwrap();
        assert_eq!(result.value, 300_000.0);
        assert_eq!(result.unit, "J");
    }

    #[test]
    fn test_exclusion_picks_simplified_variant() {
        // Without v_0 the zero-initial-velocity rearrangement applies.
        let result = solve(
            "beschleunigte-bewegung",
            "a",
            &known(&[("s", "100"), ("t", "10")]),
        )
        .unwrap()
        .unwrap();
        assert_eq!(result.value, 2.0);
        assert_eq!(result.unit, "m/s²");

        // Supplying v_0 defeats the exclusion and no variant covers the combination.
        let result = solve(
            "beschleunigte-bewegung",
            "a",
            &known(&[("s", "100"), ("t", "10"), ("v_0", "5")]),
        )
        .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_unknown_formula_is_not_found() {
        let err = solve("perpetuum-mobile", "E", &HashMap::new()).unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_no_inputs_is_unsolvable() {
        // Every formula requires at least one input for every target.
        for formula in formulas::all() {
            for variant in &formula.variants {
                let result = solve(formula.id, variant.produces, &HashMap::new()).unwrap();
                assert!(
                    result.is_none(),
                    "{}::{} solved with no inputs",
                    formula.id,
                    variant.produces
                );
            }
        }
    }

    #[test]
    fn test_unparseable_values_are_absent() {
        assert!(solve("ohms-law", "I", &known(&[("U", "abc"), ("R", "100")]))
            .unwrap()
            .is_none());
        assert!(solve("ohms-law", "I", &known(&[("U", ""), ("R", "100")]))
            .unwrap()
            .is_none());

        // A blank exclusion symbol counts as absent, so the simplified
        // variant still applies.
        let result = solve(
            "beschleunigte-bewegung",
            "a",
            &known(&[("s", "100"), ("t", "10"), ("v_0", "")]),
        )
        .unwrap();
        assert_eq!(result.unwrap().value, 2.0);
    }

    #[test]
    fn test_non_finite_results_pass_through() {
        // Division by zero: R = U / I with I = 0
        let result = solve("ohms-law", "R", &known(&[("U", "230"), ("I", "0")]))
            .unwrap()
            .unwrap();
        assert!(result.value.is_infinite());

        // Out-of-domain asin: refraction past the critical angle
        let result = solve(
            "brechungsgesetz",
            "beta",
            &known(&[("n_1", "2"), ("alpha", "80"), ("n_2", "0.5")]),
        )
        .unwrap()
        .unwrap();
        assert!(result.value.is_nan());
    }

    #[test]
    fn test_every_variant_solvable_with_exact_requires() {
        // Supplying exactly a variant's requires set (defaults where declared,
        // else distinct positive values) must produce a finite result with the
        // variant's declared unit.
        for formula in formulas::all() {
            for variant in &formula.variants {
                let mut values = HashMap::new();
                for (i, symbol) in variant.requires.iter().enumerate() {
                    let value = formula
                        .variable(symbol)
                        .and_then(|spec| spec.default_value)
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("{}", i + 2));
                    values.insert(symbol.to_string(), value);
                }

                let result = solve(formula.id, variant.produces, &values)
                    .unwrap()
                    .unwrap_or_else(|| {
                        panic!("{}::{} did not match its own requires", formula.id, variant.produces)
                    });
                assert!(
                    result.value.is_finite(),
                    "{}::{} produced non-finite {}",
                    formula.id,
                    variant.produces,
                    result.value
                );
                assert_eq!(result.unit, variant.unit);
            }
        }
    }

    #[test]
    fn test_inverse_round_trips() {
        let rel = |a: f64, b: f64| ((a - b) / b).abs();

        // v = s/t, then s = v*t must reproduce s
        let v = solve("geschwindigkeit", "v", &known(&[("s", "120"), ("t", "1.5")]))
            .unwrap()
            .unwrap();
        let s = solve(
            "geschwindigkeit",
            "s",
            &known(&[("v", &v.value.to_string()), ("t", "1.5")]),
        )
        .unwrap()
        .unwrap();
        assert!(rel(s.value, 120.0) < 1e-9);

        // E_kin = m v^2 / 2, then v = sqrt(2 E / m) must reproduce v
        let e = solve("kinetic-energy", "E_kin", &known(&[("m", "1500"), ("v", "20")]))
            .unwrap()
            .unwrap();
        let v = solve(
            "kinetic-energy",
            "v",
            &known(&[("E_kin", &e.value.to_string()), ("m", "1500")]),
        )
        .unwrap()
        .unwrap();
        assert!(rel(v.value, 20.0) < 1e-9);

        // Snell's law: beta from alpha, then alpha back from beta
        let beta = solve(
            "brechungsgesetz",
            "beta",
            &known(&[("n_1", "1"), ("alpha", "45"), ("n_2", "1.33")]),
        )
        .unwrap()
        .unwrap();
        let alpha = solve(
            "brechungsgesetz",
            "alpha",
            &known(&[("n_1", "1"), ("beta", &beta.value.to_string()), ("n_2", "1.33")]),
        )
        .unwrap()
        .unwrap();
        assert!(rel(alpha.value, 45.0) < 1e-9);
    }

    #[test]
    fn test_angle_interface_is_degrees() {
        // W = F*s*cos(alpha) with alpha = 60° must use the degree value.
        let result = solve(
            "arbeit-mechanisch",
            "W",
            &known(&[("F", "10"), ("s", "2"), ("alpha", "60")]),
        )
        .unwrap()
        .unwrap();
        assert!((result.value - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_solve_result_serialization() {
        let result = SolveResult { value: 2.3, unit: "A" };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["value"], 2.3);
        assert_eq!(json["unit"], "A");
    }
}
