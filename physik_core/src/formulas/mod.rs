//! # Formula Registry
//!
//! The immutable catalog of physics formulas. Each [`FormulaDefinition`]
//! carries display content (name, LaTeX, explanation, worked examples),
//! its declared variables, and the list of [`SolveVariant`]s the solver
//! dispatches over.
//!
//! The catalog itself lives in [`catalog`] and is hand-authored domain
//! content, not derived data. It is read-only after process initialization;
//! there is no mutation API.
//!
//! ## Example
//!
//! ```rust
//! use physik_core::formulas;
//!
//! let formula = formulas::by_id("ohms-law").unwrap();
//! assert_eq!(formula.name, "Ohmsches Gesetz");
//! assert_eq!(formula.variables.len(), 3);
//! ```

pub mod catalog;

use serde::Serialize;

use crate::solver::SolveVariant;

/// Subject area of a formula or topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mechanics,
    Electricity,
    Optics,
    Thermodynamics,
    Modern,
}

impl Category {
    /// German display name, as shown in the UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Mechanics => "Mechanik",
            Category::Electricity => "Elektrizität",
            Category::Optics => "Optik",
            Category::Thermodynamics => "Thermodynamik",
            Category::Modern => "Moderne Physik",
        }
    }
}

/// Difficulty level. Optional on both formulas and topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Basic,
    Advanced,
}

/// Declaration of a variable used in a formula.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableSpec {
    /// Short algebraic symbol (e.g., "v", "R_ges"), unique within a formula
    pub symbol: &'static str,
    /// German display name
    pub name: &'static str,
    /// Unit string; empty for dimensionless quantities
    pub unit: &'static str,
    /// Prefill value for physical constants (e.g., g = "9.81")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<&'static str>,
}

impl VariableSpec {
    pub const fn new(symbol: &'static str, name: &'static str, unit: &'static str) -> Self {
        Self { symbol, name, unit, default_value: None }
    }

    pub const fn with_default(
        symbol: &'static str,
        name: &'static str,
        unit: &'static str,
        default_value: &'static str,
    ) -> Self {
        Self { symbol, name, unit, default_value: Some(default_value) }
    }
}

/// A worked example: problem and solution text, display-only.
#[derive(Debug, Clone, Serialize)]
pub struct Example {
    pub problem: &'static str,
    pub solution: &'static str,
}

impl Example {
    pub const fn new(problem: &'static str, solution: &'static str) -> Self {
        Self { problem, solution }
    }
}

/// One formula of the catalog.
///
/// The solve variants are internal dispatch data and are not serialized;
/// everything else goes out on the wire with camelCase field names.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormulaDefinition {
    /// Unique slug (e.g., "ohms-law")
    pub id: &'static str,
    /// German display name
    pub name: &'static str,
    /// Rendering string for the frontend; opaque to the solver
    pub latex: &'static str,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    /// Declared variables in display order
    pub variables: Vec<VariableSpec>,
    pub explanation: &'static str,
    pub examples: Vec<Example>,
    #[serde(skip)]
    pub variants: Vec<SolveVariant>,
}

impl FormulaDefinition {
    /// Look up a variable declaration by symbol.
    pub fn variable(&self, symbol: &str) -> Option<&VariableSpec> {
        self.variables.iter().find(|v| v.symbol == symbol)
    }
}

/// All formulas in stable declaration order.
pub fn all() -> &'static [FormulaDefinition] {
    &catalog::FORMULAS
}

/// Look up a formula by its id slug.
pub fn by_id(id: &str) -> Option<&'static FormulaDefinition> {
    catalog::FORMULAS.iter().find(|f| f.id == id)
}

/// Render the catalog as a markdown reference document.
///
/// Used by the `gen-formulas` binary to produce `FORMULAS.md`.
pub fn generate_formulas_markdown() -> String {
    let mut output = String::with_capacity(32_000);

    output.push_str(
        "# Formelsammlung\n\n\
         > **Auto-generated from source code. Do not edit manually.**\n\
         >\n\
         > Regenerate with: `cargo run --bin gen-formulas`\n\n\
         This document lists every formula in the catalog, grouped by subject\n\
         area. Each entry shows its variables and the symbols the solver can\n\
         rearrange for.\n\n---\n\n",
    );

    let categories = [
        Category::Mechanics,
        Category::Electricity,
        Category::Optics,
        Category::Thermodynamics,
        Category::Modern,
    ];

    for category in categories {
        let formulas: Vec<_> = all().iter().filter(|f| f.category == category).collect();
        if formulas.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for formula in formulas {
            output.push_str(&format!("### {}\n\n", formula.name));
            match formula.level {
                Some(Level::Basic) => output.push_str("*Niveau: Grundlagen*\n\n"),
                Some(Level::Advanced) => output.push_str("*Niveau: Fortgeschritten*\n\n"),
                None => {}
            }
            output.push_str(&format!("{}\n\n", formula.explanation));
            output.push_str(&format!("**Formel:** `{}`\n\n", formula.latex));

            output.push_str("**Variablen:**\n\n");
            output.push_str("| Symbol | Bezeichnung | Einheit | Vorgabe |\n");
            output.push_str("|--------|-------------|---------|--------|\n");
            for var in &formula.variables {
                output.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    var.symbol,
                    var.name,
                    if var.unit.is_empty() { "-" } else { var.unit },
                    var.default_value.unwrap_or("-"),
                ));
            }
            output.push('\n');

            let mut targets: Vec<&str> = formula.variants.iter().map(|v| v.produces).collect();
            targets.dedup();
            output.push_str(&format!("**Lösbar nach:** {}\n\n", targets.join(", ")));
        }

        output.push_str("---\n\n");
    }

    output
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_formula_ids_are_unique() {
        let mut seen = HashSet::new();
        for formula in all() {
            assert!(seen.insert(formula.id), "duplicate formula id: {}", formula.id);
        }
    }

    #[test]
    fn test_by_id() {
        assert!(by_id("ohms-law").is_some());
        assert!(by_id("kinetic-energy").is_some());
        assert!(by_id("does-not-exist").is_none());
    }

    #[test]
    fn test_declaration_order_is_stable() {
        let formulas = all();
        assert_eq!(formulas[0].id, "geschwindigkeit");
        assert_eq!(formulas[1].id, "beschleunigte-bewegung");
    }

    #[test]
    fn test_variable_symbols_unique_within_formula() {
        for formula in all() {
            let mut seen = HashSet::new();
            for var in &formula.variables {
                assert!(
                    seen.insert(var.symbol),
                    "duplicate symbol {} in {}",
                    var.symbol,
                    formula.id
                );
            }
        }
    }

    #[test]
    fn test_variants_reference_declared_variables() {
        for formula in all() {
            for variant in &formula.variants {
                assert!(
                    formula.variable(variant.produces).is_some(),
                    "{} produces undeclared {}",
                    formula.id,
                    variant.produces
                );
                for symbol in variant.requires.iter().chain(variant.excludes.iter()) {
                    assert!(
                        formula.variable(symbol).is_some(),
                        "{} references undeclared {}",
                        formula.id,
                        symbol
                    );
                }
            }
        }
    }

    #[test]
    fn test_variant_triples_unique_within_formula() {
        // No two variants of one formula may share (produces, requires, excludes).
        for formula in all() {
            let mut seen = HashSet::new();
            for variant in &formula.variants {
                let triple = (variant.produces, variant.requires, variant.excludes);
                assert!(
                    seen.insert(triple),
                    "duplicate variant triple in {}: {:?}",
                    formula.id,
                    triple
                );
            }
        }
    }

    #[test]
    fn test_serialization_uses_wire_names() {
        let formula = by_id("fallbeschleunigung").unwrap();
        let json = serde_json::to_value(formula).unwrap();

        assert_eq!(json["id"], "fallbeschleunigung");
        assert_eq!(json["category"], "mechanics");
        assert_eq!(json["level"], "basic");
        // defaultValue in camelCase, only where declared
        assert_eq!(json["variables"][1]["defaultValue"], "9.81");
        assert!(json["variables"][0].get("defaultValue").is_none());
        // solve variants stay internal
        assert!(json.get("variants").is_none());
    }

    #[test]
    fn test_level_is_optional() {
        // The later catalog entries carry no level, matching the original data.
        assert!(by_id("ohms-law").unwrap().level.is_none());
        assert_eq!(by_id("geschwindigkeit").unwrap().level, Some(Level::Basic));
        let json = serde_json::to_value(by_id("ohms-law").unwrap()).unwrap();
        assert!(json.get("level").is_none());
    }

    #[test]
    fn test_category_display_names() {
        assert_eq!(Category::Mechanics.display_name(), "Mechanik");
        assert_eq!(Category::Modern.display_name(), "Moderne Physik");
    }

    #[test]
    fn test_markdown_covers_every_formula() {
        let markdown = generate_formulas_markdown();
        assert!(markdown.starts_with("# Formelsammlung"));
        assert!(markdown.contains("## Mechanik"));
        assert!(markdown.contains("## Optik"));
        for formula in all() {
            assert!(markdown.contains(&format!("### {}", formula.name)), "{} missing", formula.id);
        }
        // Duplicate-target variants collapse to one entry
        assert!(markdown.contains("**Lösbar nach:** eta, P_ab, P_zu, E_nutz, E_zu"));
    }
}
