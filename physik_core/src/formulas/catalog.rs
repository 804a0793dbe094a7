//! # Formula Catalog
//!
//! The hand-authored formula data: all definitions with their variables,
//! German explanation text, worked examples, and solve variants.
//!
//! The catalog is grouped by curriculum area (Mechanik, Elektrizität, Optik,
//! Thermodynamik, Moderne Physik) and kept in declaration order - the order
//! is part of the API contract (`formulas::all()` is stable) and also the
//! solver's variant precedence within each formula.
//!
//! Variant ordering matters where exclusions are involved: the simplified
//! rearrangements (e.g. zero initial velocity) only match when their excluded
//! symbols are absent, so they come after the general form of the same target.

use once_cell::sync::Lazy;

use super::{Category, Example, FormulaDefinition, Level, VariableSpec};
use crate::solver::{deg_to_rad, rad_to_deg, SolveVariant};

pub(super) static FORMULAS: Lazy<Vec<FormulaDefinition>> = Lazy::new(|| {
    vec![
        // Grundlagen Mechanik
        geschwindigkeit(),
        beschleunigte_bewegung(),
        fallbeschleunigung(),
        // Grundlagen Elektrizität
        elektrische_leistung(),
        elektrische_arbeit(),
        widerstand_seriell(),
        widerstand_parallel(),
        // Fortgeschrittene Formeln
        coulombsches_gesetz(),
        elektrisches_feld(),
        magnetfeld_gerader_leiter(),
        magnetfeld_spule(),
        // Optik
        reflexionsgesetz(),
        brechungsgesetz(),
        linsengleichung(),
        // Thermodynamik
        waermeenergie(),
        ideales_gasgesetz(),
        // Moderne Physik
        photoeffekt(),
        massenenergie_aequivalenz(),
        // Kraftansatz und weitere Grundlagen Mechanik
        kraftansatz(),
        arbeit_mechanisch(),
        leistung_mechanisch(),
        wirkungsgrad(),
        newton_second_law(),
        ohms_law(),
        kinetic_energy(),
        gravitational_potential_energy(),
        momentum(),
        gravitational_force(),
        lorentz_force(),
    ]
});

// ============================================================================
// Mechanik: Kinematik
// ============================================================================

fn geschwindigkeit() -> FormulaDefinition {
    FormulaDefinition {
        id: "geschwindigkeit",
        name: "Gleichförmige Bewegung",
        latex: r"v = \frac{s}{t}",
        category: Category::Mechanics,
        level: Some(Level::Basic),
        variables: vec![
            VariableSpec::new("v", "Geschwindigkeit", "m/s"),
            VariableSpec::new("s", "Strecke", "m"),
            VariableSpec::new("t", "Zeit", "s"),
        ],
        explanation: "Die Geschwindigkeit bei gleichförmiger Bewegung ergibt sich aus dem \
            Verhältnis von zurückgelegter Strecke zur dafür benötigten Zeit.",
        examples: vec![Example::new(
            "Ein Auto fährt 120 km in 1,5 Stunden. Berechne die durchschnittliche Geschwindigkeit.",
            "v = s/t = 120 km / 1,5 h = 80 km/h = 22,2 m/s",
        )],
        variants: vec![
            SolveVariant::new("v", &["s", "t"], "m/s", |v| v["s"] / v["t"]),
            SolveVariant::new("s", &["v", "t"], "m", |v| v["v"] * v["t"]),
            SolveVariant::new("t", &["s", "v"], "s", |v| v["s"] / v["v"]),
        ],
    }
}

fn beschleunigte_bewegung() -> FormulaDefinition {
    FormulaDefinition {
        id: "beschleunigte-bewegung",
        name: "Gleichmäßig beschleunigte Bewegung",
        latex: r"s = \frac{1}{2} \cdot a \cdot t^2 + v_0 \cdot t",
        category: Category::Mechanics,
        level: Some(Level::Basic),
        variables: vec![
            VariableSpec::new("s", "Strecke", "m"),
            VariableSpec::new("a", "Beschleunigung", "m/s²"),
            VariableSpec::new("t", "Zeit", "s"),
            VariableSpec::new("v_0", "Anfangsgeschwindigkeit", "m/s"),
        ],
        explanation: "Die Strecke bei gleichmäßig beschleunigter Bewegung ergibt sich aus der \
            Beschleunigung, der Zeit und der Anfangsgeschwindigkeit.",
        examples: vec![Example::new(
            "Ein Auto beschleunigt gleichmäßig aus dem Stand mit 2 m/s². Welche Strecke legt es \
             in 10 Sekunden zurück?",
            "s = (1/2)·a·t² + v₀·t = 0,5 · 2 m/s² · (10 s)² + 0 m/s · 10 s = 100 m",
        )],
        variants: vec![
            SolveVariant::new("s", &["a", "t", "v_0"], "m", |v| {
                0.5 * v["a"] * v["t"].powi(2) + v["v_0"] * v["t"]
            }),
            // Vereinfachte Rearrangements für v₀ = 0
            SolveVariant::with_excludes("a", &["s", "t"], &["v_0"], "m/s²", |v| {
                2.0 * v["s"] / v["t"].powi(2)
            }),
            SolveVariant::with_excludes("t", &["s", "a"], &["v_0"], "s", |v| {
                (2.0 * v["s"] / v["a"]).sqrt()
            }),
        ],
    }
}

fn fallbeschleunigung() -> FormulaDefinition {
    FormulaDefinition {
        id: "fallbeschleunigung",
        name: "Freier Fall",
        latex: r"h = \frac{1}{2} \cdot g \cdot t^2",
        category: Category::Mechanics,
        level: Some(Level::Basic),
        variables: vec![
            VariableSpec::new("h", "Fallhöhe", "m"),
            VariableSpec::with_default("g", "Erdbeschleunigung", "m/s²", "9.81"),
            VariableSpec::new("t", "Fallzeit", "s"),
        ],
        explanation: "Der freie Fall ist ein Spezialfall der gleichmäßig beschleunigten Bewegung, \
            bei der die Beschleunigung der Erdbeschleunigung g entspricht.",
        examples: vec![Example::new(
            "Wie tief fällt ein Stein in 3 Sekunden? (g = 9,81 m/s²)",
            "h = (1/2)·g·t² = 0,5 · 9,81 m/s² · (3 s)² = 44,1 m",
        )],
        variants: vec![
            SolveVariant::new("h", &["g", "t"], "m", |v| 0.5 * v["g"] * v["t"].powi(2)),
            SolveVariant::new("g", &["h", "t"], "m/s²", |v| 2.0 * v["h"] / v["t"].powi(2)),
            SolveVariant::new("t", &["h", "g"], "s", |v| (2.0 * v["h"] / v["g"]).sqrt()),
        ],
    }
}

// ============================================================================
// Elektrizität: Grundlagen
// ============================================================================

fn elektrische_leistung() -> FormulaDefinition {
    FormulaDefinition {
        id: "elektrische-leistung",
        name: "Elektrische Leistung",
        latex: r"P = U \cdot I",
        category: Category::Electricity,
        level: Some(Level::Basic),
        variables: vec![
            VariableSpec::new("P", "Elektrische Leistung", "W"),
            VariableSpec::new("U", "Elektrische Spannung", "V"),
            VariableSpec::new("I", "Elektrische Stromstärke", "A"),
        ],
        explanation: "Die elektrische Leistung gibt an, wie viel elektrische Energie pro \
            Zeiteinheit umgesetzt wird. Sie ist das Produkt aus Spannung und Stromstärke.",
        examples: vec![Example::new(
            "Eine Glühbirne wird an 230 V angeschlossen und zieht einen Strom von 0,26 A. Welche \
             Leistung hat sie?",
            "P = U·I = 230 V · 0,26 A = 59,8 W",
        )],
        variants: vec![
            SolveVariant::new("P", &["U", "I"], "W", |v| v["U"] * v["I"]),
            SolveVariant::new("U", &["P", "I"], "V", |v| v["P"] / v["I"]),
            SolveVariant::new("I", &["P", "U"], "A", |v| v["P"] / v["U"]),
        ],
    }
}

fn elektrische_arbeit() -> FormulaDefinition {
    FormulaDefinition {
        id: "elektrische-arbeit",
        name: "Elektrische Arbeit",
        latex: r"W = P \cdot t",
        category: Category::Electricity,
        level: Some(Level::Basic),
        variables: vec![
            VariableSpec::new("W", "Elektrische Arbeit", "J"),
            VariableSpec::new("P", "Elektrische Leistung", "W"),
            VariableSpec::new("t", "Zeit", "s"),
        ],
        explanation: "Die elektrische Arbeit ist die Energie, die in einem bestimmten Zeitraum \
            durch ein elektrisches Gerät umgesetzt wird. Sie ist das Produkt aus Leistung und Zeit.",
        examples: vec![Example::new(
            "Ein Fön mit einer Leistung von 1800 W wird 5 Minuten lang betrieben. Wie viel \
             elektrische Arbeit wird verrichtet?",
            "W = P·t = 1800 W · 300 s = 540.000 J = 540 kJ = 0,15 kWh",
        )],
        variants: vec![
            SolveVariant::new("W", &["P", "t"], "J", |v| v["P"] * v["t"]),
            SolveVariant::new("P", &["W", "t"], "W", |v| v["W"] / v["t"]),
            SolveVariant::new("t", &["W", "P"], "s", |v| v["W"] / v["P"]),
        ],
    }
}

fn widerstand_seriell() -> FormulaDefinition {
    FormulaDefinition {
        id: "elektrischer-widerstand-seriell",
        name: "Widerstände in Reihenschaltung",
        latex: r"R_{ges} = R_1 + R_2 + ... + R_n",
        category: Category::Electricity,
        level: Some(Level::Basic),
        variables: vec![
            VariableSpec::new("R_ges", "Gesamtwiderstand", "Ω"),
            VariableSpec::new("R_1", "Widerstand 1", "Ω"),
            VariableSpec::new("R_2", "Widerstand 2", "Ω"),
        ],
        explanation: "Bei einer Reihenschaltung von Widerständen addieren sich die einzelnen \
            Widerstände zum Gesamtwiderstand.",
        examples: vec![Example::new(
            "In einer Reihenschaltung befinden sich drei Widerstände mit R₁ = 100 Ω, R₂ = 220 Ω \
             und R₃ = 330 Ω. Wie groß ist der Gesamtwiderstand?",
            "R_ges = R₁ + R₂ + R₃ = 100 Ω + 220 Ω + 330 Ω = 650 Ω",
        )],
        variants: vec![SolveVariant::new("R_ges", &["R_1", "R_2"], "Ω", |v| {
            v["R_1"] + v["R_2"]
        })],
    }
}

fn widerstand_parallel() -> FormulaDefinition {
    FormulaDefinition {
        id: "elektrischer-widerstand-parallel",
        name: "Widerstände in Parallelschaltung",
        latex: r"\frac{1}{R_{ges}} = \frac{1}{R_1} + \frac{1}{R_2} + ... + \frac{1}{R_n}",
        category: Category::Electricity,
        level: Some(Level::Basic),
        variables: vec![
            VariableSpec::new("R_ges", "Gesamtwiderstand", "Ω"),
            VariableSpec::new("R_1", "Widerstand 1", "Ω"),
            VariableSpec::new("R_2", "Widerstand 2", "Ω"),
        ],
        explanation: "Bei einer Parallelschaltung von Widerständen addieren sich die Kehrwerte \
            der einzelnen Widerstände zum Kehrwert des Gesamtwiderstands.",
        examples: vec![Example::new(
            "In einer Parallelschaltung befinden sich zwei Widerstände mit R₁ = 100 Ω und \
             R₂ = 50 Ω. Wie groß ist der Gesamtwiderstand?",
            "1/R_ges = 1/R₁ + 1/R₂ = 1/100 Ω + 1/50 Ω = 0,01 Ω⁻¹ + 0,02 Ω⁻¹ = 0,03 Ω⁻¹; \
             R_ges = 1/0,03 Ω⁻¹ = 33,3 Ω",
        )],
        variants: vec![SolveVariant::new("R_ges", &["R_1", "R_2"], "Ω", |v| {
            1.0 / (1.0 / v["R_1"] + 1.0 / v["R_2"])
        })],
    }
}

// ============================================================================
// Elektrizität: Felder (fortgeschritten)
// ============================================================================

fn coulombsches_gesetz() -> FormulaDefinition {
    FormulaDefinition {
        id: "coulombsches-gesetz",
        name: "Coulombsches Gesetz",
        latex: r"F = k \cdot \frac{|q_1 \cdot q_2|}{r^2}",
        category: Category::Electricity,
        level: Some(Level::Advanced),
        variables: vec![
            VariableSpec::new("F", "Coulomb-Kraft", "N"),
            VariableSpec::with_default("k", "Coulomb-Konstante", "N·m²/C²", "8.99e9"),
            VariableSpec::new("q_1", "Ladung 1", "C"),
            VariableSpec::new("q_2", "Ladung 2", "C"),
            VariableSpec::new("r", "Abstand", "m"),
        ],
        explanation: "Das Coulombsche Gesetz beschreibt die elektrostatische Kraft zwischen zwei \
            Punktladungen. Die Kraft ist proportional zum Produkt der Ladungen und umgekehrt \
            proportional zum Quadrat ihres Abstands.",
        examples: vec![Example::new(
            "Zwei Ladungen von q₁ = 2 μC und q₂ = -3 μC befinden sich im Abstand von 10 cm. Wie \
             groß ist die Coulomb-Kraft zwischen ihnen?",
            "F = k·|q₁·q₂|/r² = 8,99·10⁹ N·m²/C² · |2·10⁻⁶ C · (-3·10⁻⁶) C| / (0,1 m)² = 5,39 N",
        )],
        variants: vec![
            SolveVariant::new("F", &["k", "q_1", "q_2", "r"], "N", |v| {
                v["k"] * (v["q_1"] * v["q_2"]).abs() / v["r"].powi(2)
            }),
            SolveVariant::new("r", &["F", "k", "q_1", "q_2"], "m", |v| {
                (v["k"] * (v["q_1"] * v["q_2"]).abs() / v["F"]).sqrt()
            }),
        ],
    }
}

fn elektrisches_feld() -> FormulaDefinition {
    FormulaDefinition {
        id: "elektrisches-feld",
        name: "Elektrische Feldstärke",
        latex: r"E = \frac{F}{q} = k \cdot \frac{Q}{r^2}",
        category: Category::Electricity,
        level: Some(Level::Advanced),
        variables: vec![
            VariableSpec::new("E", "Elektrische Feldstärke", "V/m"),
            VariableSpec::new("F", "Kraft", "N"),
            VariableSpec::new("q", "Probeladung", "C"),
            VariableSpec::with_default("k", "Coulomb-Konstante", "N·m²/C²", "8.99e9"),
            VariableSpec::new("Q", "Quelladung", "C"),
            VariableSpec::new("r", "Abstand", "m"),
        ],
        explanation: "Die elektrische Feldstärke ist ein Vektorfeld, das die Kraftwirkung auf \
            eine Probeladung beschreibt. Sie ist definiert als die Kraft pro Einheitsladung und \
            ist abhängig von der Quelladung und dem Abstand.",
        examples: vec![Example::new(
            "In welchem Abstand von einer Punktladung Q = 5 nC beträgt die elektrische \
             Feldstärke 450 V/m?",
            "E = k·Q/r² → r = √(k·Q/E) = √(8,99·10⁹ N·m²/C² · 5·10⁻⁹ C / 450 V/m) ≈ 10 cm",
        )],
        variants: vec![
            // Beide Definitionen liefern E; die Kraft-Form hat Vorrang
            SolveVariant::new("E", &["F", "q"], "V/m", |v| v["F"] / v["q"]),
            SolveVariant::new("E", &["k", "Q", "r"], "V/m", |v| {
                v["k"] * v["Q"] / v["r"].powi(2)
            }),
            SolveVariant::new("r", &["E", "k", "Q"], "m", |v| {
                (v["k"] * v["Q"] / v["E"]).sqrt()
            }),
        ],
    }
}

fn magnetfeld_gerader_leiter() -> FormulaDefinition {
    FormulaDefinition {
        id: "magnetisches-feld-gerader-leiter",
        name: "Magnetisches Feld eines geraden Leiters",
        latex: r"B = \frac{\mu_0 \cdot I}{2\pi \cdot r}",
        category: Category::Electricity,
        level: Some(Level::Advanced),
        variables: vec![
            VariableSpec::new("B", "Magnetische Flussdichte", "T"),
            VariableSpec::with_default("mu_0", "Magnetische Feldkonstante", "N/A²", "1.257e-6"),
            VariableSpec::new("I", "Stromstärke", "A"),
            VariableSpec::new("r", "Abstand zum Leiter", "m"),
        ],
        explanation: "Das magnetische Feld um einen stromdurchflossenen geraden Leiter ist \
            konzentrisch um den Leiter angeordnet. Die Feldstärke nimmt mit dem Abstand ab.",
        examples: vec![Example::new(
            "Wie groß ist die magnetische Flussdichte in einem Abstand von 5 cm von einem \
             geraden Leiter, durch den ein Strom von 10 A fließt?",
            "B = (μ₀·I)/(2π·r) = (1,257·10⁻⁶ N/A² · 10 A)/(2π · 0,05 m) ≈ 4·10⁻⁵ T = 40 μT",
        )],
        variants: vec![
            SolveVariant::new("B", &["mu_0", "I", "r"], "T", |v| {
                v["mu_0"] * v["I"] / (2.0 * std::f64::consts::PI * v["r"])
            }),
            SolveVariant::new("r", &["B", "mu_0", "I"], "m", |v| {
                v["mu_0"] * v["I"] / (2.0 * std::f64::consts::PI * v["B"])
            }),
            SolveVariant::new("I", &["B", "mu_0", "r"], "A", |v| {
                2.0 * std::f64::consts::PI * v["r"] * v["B"] / v["mu_0"]
            }),
        ],
    }
}

fn magnetfeld_spule() -> FormulaDefinition {
    FormulaDefinition {
        id: "magnetisches-feld-spule",
        name: "Magnetisches Feld einer Spule",
        latex: r"B = \mu_0 \cdot \frac{n \cdot I}{l}",
        category: Category::Electricity,
        level: Some(Level::Advanced),
        variables: vec![
            VariableSpec::new("B", "Magnetische Flussdichte im Inneren", "T"),
            VariableSpec::with_default("mu_0", "Magnetische Feldkonstante", "N/A²", "1.257e-6"),
            VariableSpec::new("n", "Windungszahl", ""),
            VariableSpec::new("I", "Stromstärke", "A"),
            VariableSpec::new("l", "Länge der Spule", "m"),
        ],
        explanation: "Das magnetische Feld im Inneren einer langen Spule (Solenoid) ist nahezu \
            homogen und parallel zur Spulenachse. Die Feldstärke ist proportional zur \
            Windungszahl und zur Stromstärke und umgekehrt proportional zur Länge der Spule.",
        examples: vec![Example::new(
            "Eine Spule mit 200 Windungen und einer Länge von 15 cm wird von einem Strom von \
             2 A durchflossen. Wie groß ist die magnetische Flussdichte im Inneren der Spule?",
            "B = μ₀·(n·I)/l = 1,257·10⁻⁶ N/A² · (200 · 2 A) / 0,15 m ≈ 3,35·10⁻³ T = 3,35 mT",
        )],
        variants: vec![
            SolveVariant::new("B", &["mu_0", "n", "I", "l"], "T", |v| {
                v["mu_0"] * v["n"] * v["I"] / v["l"]
            }),
            SolveVariant::new("I", &["B", "mu_0", "n", "l"], "A", |v| {
                v["B"] * v["l"] / (v["mu_0"] * v["n"])
            }),
            SolveVariant::new("n", &["B", "mu_0", "I", "l"], "", |v| {
                v["B"] * v["l"] / (v["mu_0"] * v["I"])
            }),
        ],
    }
}

// ============================================================================
// Optik
// ============================================================================

fn reflexionsgesetz() -> FormulaDefinition {
    FormulaDefinition {
        id: "reflexionsgesetz",
        name: "Reflexionsgesetz",
        latex: r"\alpha = \beta",
        category: Category::Optics,
        level: Some(Level::Basic),
        variables: vec![
            VariableSpec::new("alpha", "Einfallswinkel", "°"),
            VariableSpec::new("beta", "Reflexionswinkel", "°"),
        ],
        explanation: "Das Reflexionsgesetz besagt, dass der Einfallswinkel gleich dem \
            Reflexionswinkel ist. Die Winkel werden zur Normalen (Lot) gemessen.",
        examples: vec![Example::new(
            "Ein Lichtstrahl trifft unter einem Winkel von 30° zur Normalen auf einen Spiegel. \
             Unter welchem Winkel wird er reflektiert?",
            "Nach dem Reflexionsgesetz gilt: α = β = 30°",
        )],
        variants: vec![
            SolveVariant::new("alpha", &["beta"], "°", |v| v["beta"]),
            SolveVariant::new("beta", &["alpha"], "°", |v| v["alpha"]),
        ],
    }
}

fn brechungsgesetz() -> FormulaDefinition {
    FormulaDefinition {
        id: "brechungsgesetz",
        name: "Brechungsgesetz (Snellius)",
        latex: r"n_1 \cdot \sin(\alpha) = n_2 \cdot \sin(\beta)",
        category: Category::Optics,
        level: Some(Level::Basic),
        variables: vec![
            VariableSpec::new("n_1", "Brechungsindex Medium 1", ""),
            VariableSpec::new("alpha", "Einfallswinkel", "°"),
            VariableSpec::new("n_2", "Brechungsindex Medium 2", ""),
            VariableSpec::new("beta", "Brechungswinkel", "°"),
        ],
        explanation: "Das Brechungsgesetz (Snelliussches Gesetz) beschreibt die \
            Richtungsänderung eines Lichtstrahls beim Übergang zwischen zwei Medien mit \
            unterschiedlichen Brechungsindizes. Die Winkel werden zur Normalen (Lot) gemessen.",
        examples: vec![Example::new(
            "Ein Lichtstrahl trifft aus Luft (n₁ ≈ 1) unter einem Winkel von 45° auf eine \
             Wasseroberfläche (n₂ ≈ 1,33). Unter welchem Winkel wird der Strahl ins Wasser \
             gebrochen?",
            "n₁·sin(α) = n₂·sin(β) → sin(β) = (n₁·sin(α))/n₂ = (1·sin(45°))/1,33 ≈ 0,53; β ≈ 32°",
        )],
        variants: vec![
            SolveVariant::new("beta", &["n_1", "alpha", "n_2"], "°", |v| {
                rad_to_deg((v["n_1"] * deg_to_rad(v["alpha"]).sin() / v["n_2"]).asin())
            }),
            SolveVariant::new("alpha", &["n_1", "beta", "n_2"], "°", |v| {
                rad_to_deg((v["n_2"] * deg_to_rad(v["beta"]).sin() / v["n_1"]).asin())
            }),
            SolveVariant::new("n_2", &["n_1", "alpha", "beta"], "", |v| {
                v["n_1"] * deg_to_rad(v["alpha"]).sin() / deg_to_rad(v["beta"]).sin()
            }),
            SolveVariant::new("n_1", &["beta", "alpha", "n_2"], "", |v| {
                v["n_2"] * deg_to_rad(v["beta"]).sin() / deg_to_rad(v["alpha"]).sin()
            }),
        ],
    }
}

fn linsengleichung() -> FormulaDefinition {
    FormulaDefinition {
        id: "linsengleichung",
        name: "Linsengleichung",
        latex: r"\frac{1}{f} = \frac{1}{g} + \frac{1}{b}",
        category: Category::Optics,
        level: Some(Level::Basic),
        variables: vec![
            VariableSpec::new("f", "Brennweite", "m"),
            VariableSpec::new("g", "Gegenstandsweite", "m"),
            VariableSpec::new("b", "Bildweite", "m"),
        ],
        explanation: "Die Linsengleichung beschreibt den Zusammenhang zwischen Brennweite, \
            Gegenstandsweite und Bildweite bei dünnen Linsen.",
        examples: vec![Example::new(
            "Ein Gegenstand befindet sich 30 cm vor einer Sammellinse mit einer Brennweite von \
             10 cm. In welchem Abstand von der Linse entsteht das Bild?",
            "1/b = 1/f - 1/g = 1/10 cm - 1/30 cm = 0,1 cm⁻¹ - 0,033 cm⁻¹ = 0,067 cm⁻¹; \
             b = 1/0,067 cm⁻¹ = 15 cm",
        )],
        variants: vec![
            SolveVariant::new("f", &["g", "b"], "m", |v| {
                v["g"] * v["b"] / (v["g"] + v["b"])
            }),
            SolveVariant::new("g", &["f", "b"], "m", |v| {
                v["f"] * v["b"] / (v["b"] - v["f"])
            }),
            SolveVariant::new("b", &["f", "g"], "m", |v| {
                v["f"] * v["g"] / (v["g"] - v["f"])
            }),
        ],
    }
}

// ============================================================================
// Thermodynamik
// ============================================================================

fn waermeenergie() -> FormulaDefinition {
    FormulaDefinition {
        id: "waermeenergie",
        name: "Wärmeenergie",
        latex: r"Q = c \cdot m \cdot \Delta T",
        category: Category::Thermodynamics,
        level: Some(Level::Basic),
        variables: vec![
            VariableSpec::new("Q", "Wärmeenergie", "J"),
            VariableSpec::new("c", "Spezifische Wärmekapazität", "J/(kg·K)"),
            VariableSpec::new("m", "Masse", "kg"),
            VariableSpec::new("Delta_T", "Temperaturänderung", "K"),
        ],
        explanation: "Die Wärmeenergie, die einem Körper zugeführt oder entzogen wird, ist \
            proportional zu seiner Masse, seiner spezifischen Wärmekapazität und der \
            Temperaturänderung.",
        examples: vec![Example::new(
            "Wie viel Energie wird benötigt, um 2 kg Wasser (c = 4190 J/(kg·K)) von 20°C auf \
             100°C zu erwärmen?",
            "Q = c·m·ΔT = 4190 J/(kg·K) · 2 kg · 80 K = 670.400 J = 670,4 kJ",
        )],
        variants: vec![
            SolveVariant::new("Q", &["c", "m", "Delta_T"], "J", |v| {
                v["c"] * v["m"] * v["Delta_T"]
            }),
            SolveVariant::new("c", &["Q", "m", "Delta_T"], "J/(kg·K)", |v| {
                v["Q"] / (v["m"] * v["Delta_T"])
            }),
            SolveVariant::new("m", &["Q", "c", "Delta_T"], "kg", |v| {
                v["Q"] / (v["c"] * v["Delta_T"])
            }),
            SolveVariant::new("Delta_T", &["Q", "c", "m"], "K", |v| {
                v["Q"] / (v["c"] * v["m"])
            }),
        ],
    }
}

fn ideales_gasgesetz() -> FormulaDefinition {
    FormulaDefinition {
        id: "ideales-gasgesetz",
        name: "Ideales Gasgesetz",
        latex: r"p \cdot V = n \cdot R \cdot T",
        category: Category::Thermodynamics,
        level: Some(Level::Advanced),
        variables: vec![
            VariableSpec::new("p", "Druck", "Pa"),
            VariableSpec::new("V", "Volumen", "m³"),
            VariableSpec::new("n", "Stoffmenge", "mol"),
            VariableSpec::with_default("R", "Gaskonstante", "J/(mol·K)", "8.314"),
            VariableSpec::new("T", "Absolute Temperatur", "K"),
        ],
        explanation: "Das ideale Gasgesetz beschreibt den Zusammenhang zwischen Druck, Volumen, \
            Stoffmenge und Temperatur eines idealen Gases. Es ist eine Kombination aus dem \
            Boyle-Mariotteschen Gesetz, dem Gay-Lussac-Gesetz und dem Avogadroschen Gesetz.",
        examples: vec![Example::new(
            "Welches Volumen nimmt 1 mol eines idealen Gases bei einem Druck von 10⁵ Pa und \
             einer Temperatur von 293 K ein?",
            "V = (n·R·T)/p = (1 mol · 8,314 J/(mol·K) · 293 K) / 10⁵ Pa ≈ 0,0244 m³ = 24,4 L",
        )],
        variants: vec![
            SolveVariant::new("p", &["V", "n", "R", "T"], "Pa", |v| {
                v["n"] * v["R"] * v["T"] / v["V"]
            }),
            SolveVariant::new("V", &["p", "n", "R", "T"], "m³", |v| {
                v["n"] * v["R"] * v["T"] / v["p"]
            }),
            SolveVariant::new("n", &["p", "V", "R", "T"], "mol", |v| {
                v["p"] * v["V"] / (v["R"] * v["T"])
            }),
            SolveVariant::new("T", &["p", "V", "n", "R"], "K", |v| {
                v["p"] * v["V"] / (v["n"] * v["R"])
            }),
        ],
    }
}

// ============================================================================
// Moderne Physik
// ============================================================================

fn photoeffekt() -> FormulaDefinition {
    FormulaDefinition {
        id: "photoeffekt",
        name: "Photoeffekt",
        latex: r"E_{kin} = h \cdot f - W_A",
        category: Category::Modern,
        level: Some(Level::Advanced),
        variables: vec![
            VariableSpec::new("E_kin", "Kinetische Energie der Elektronen", "eV"),
            VariableSpec::with_default("h", "Plancksches Wirkungsquantum", "eV·s", "4.136e-15"),
            VariableSpec::new("f", "Frequenz des Lichts", "Hz"),
            VariableSpec::new("W_A", "Austrittsarbeit", "eV"),
        ],
        explanation: "Der Photoeffekt beschreibt die Emission von Elektronen aus einem Material, \
            wenn es mit Licht bestrahlt wird. Die kinetische Energie der emittierten Elektronen \
            hängt von der Frequenz des Lichts und der materialspezifischen Austrittsarbeit ab.",
        examples: vec![Example::new(
            "Licht mit einer Frequenz von 1,2·10¹⁵ Hz trifft auf eine Metalloberfläche mit einer \
             Austrittsarbeit von 2,3 eV. Wie groß ist die maximale kinetische Energie der \
             emittierten Elektronen?",
            "E_kin = h·f - W_A = 4,136·10⁻¹⁵ eV·s · 1,2·10¹⁵ Hz - 2,3 eV = 4,96 eV - 2,3 eV = 2,66 eV",
        )],
        variants: vec![
            SolveVariant::new("E_kin", &["h", "f", "W_A"], "eV", |v| {
                v["h"] * v["f"] - v["W_A"]
            }),
            SolveVariant::new("f", &["E_kin", "h", "W_A"], "Hz", |v| {
                (v["E_kin"] + v["W_A"]) / v["h"]
            }),
            SolveVariant::new("W_A", &["E_kin", "h", "f"], "eV", |v| {
                v["h"] * v["f"] - v["E_kin"]
            }),
        ],
    }
}

fn massenenergie_aequivalenz() -> FormulaDefinition {
    FormulaDefinition {
        id: "massenenergie-äquivalenz",
        name: "Masse-Energie-Äquivalenz",
        latex: r"E = m \cdot c^2",
        category: Category::Modern,
        level: Some(Level::Advanced),
        variables: vec![
            VariableSpec::new("E", "Energie", "J"),
            VariableSpec::new("m", "Masse", "kg"),
            VariableSpec::with_default("c", "Lichtgeschwindigkeit", "m/s", "299792458"),
        ],
        explanation: "Die Masse-Energie-Äquivalenz, ausgedrückt durch Einsteins berühmte Formel \
            E = mc², besagt, dass Masse und Energie äquivalent und ineinander umwandelbar sind. \
            Die Energie, die einer bestimmten Masse entspricht, ist das Produkt aus der Masse \
            und dem Quadrat der Lichtgeschwindigkeit.",
        examples: vec![Example::new(
            "Wie viel Energie entspricht einer Masse von 1 kg?",
            "E = m·c² = 1 kg · (3·10⁸ m/s)² = 9·10¹⁶ J = 90 PJ",
        )],
        variants: vec![
            SolveVariant::new("E", &["m", "c"], "J", |v| v["m"] * v["c"].powi(2)),
            SolveVariant::new("m", &["E", "c"], "kg", |v| v["E"] / v["c"].powi(2)),
        ],
    }
}

// ============================================================================
// Mechanik: Kraft, Arbeit, Energie
// ============================================================================

fn kraftansatz() -> FormulaDefinition {
    FormulaDefinition {
        id: "kraftansatz",
        name: "Kraftansatz",
        latex: r"\vec{F} = m \cdot \vec{a}",
        category: Category::Mechanics,
        level: Some(Level::Basic),
        variables: vec![
            VariableSpec::new("F", "Kraftvektor", "N"),
            VariableSpec::new("m", "Masse", "kg"),
            VariableSpec::new("a", "Beschleunigungsvektor", "m/s²"),
        ],
        explanation: "Der Kraftansatz (auch \"Grundgleichung der Mechanik\" genannt) basiert \
            auf Newtons zweitem Gesetz und beschreibt, dass die Summe aller auf einen Körper \
            wirkenden Kräfte gleich dem Produkt aus seiner Masse und seiner Beschleunigung ist. \
            In der Vektorform berücksichtigt die Formel, dass Kraft und Beschleunigung \
            gerichtete Größen sind.",
        examples: vec![Example::new(
            "Auf ein Objekt mit der Masse 2 kg wirkt eine Kraft von 10 N. Welche Beschleunigung \
             erfährt das Objekt?",
            "a = F/m = 10 N / 2 kg = 5 m/s²",
        )],
        variants: vec![
            SolveVariant::new("F", &["m", "a"], "N", |v| v["m"] * v["a"]),
            SolveVariant::new("m", &["F", "a"], "kg", |v| v["F"] / v["a"]),
            SolveVariant::new("a", &["F", "m"], "m/s²", |v| v["F"] / v["m"]),
        ],
    }
}

fn arbeit_mechanisch() -> FormulaDefinition {
    FormulaDefinition {
        id: "arbeit-mechanisch",
        name: "Mechanische Arbeit",
        latex: r"W = F \cdot s \cdot \cos(\alpha)",
        category: Category::Mechanics,
        level: Some(Level::Basic),
        variables: vec![
            VariableSpec::new("W", "Mechanische Arbeit", "J"),
            VariableSpec::new("F", "Kraft", "N"),
            VariableSpec::new("s", "Weg", "m"),
            VariableSpec::with_default("alpha", "Winkel zwischen Kraft und Weg", "°", "0"),
        ],
        explanation: "Die mechanische Arbeit ist das Produkt aus Kraft, Weg und dem Kosinus des \
            Winkels zwischen Kraft- und Wegrichtung. Wenn die Kraft in Wegrichtung wirkt \
            (α = 0°), dann ist die Arbeit maximal.",
        examples: vec![Example::new(
            "Eine Kraft von 200 N wirkt auf einen Körper über einen Weg von 5 m. Die Kraft wirkt \
             in einem Winkel von 30° zur Wegrichtung. Wie groß ist die verrichtete Arbeit?",
            "W = F·s·cos(α) = 200 N · 5 m · cos(30°) = 200 N · 5 m · 0,866 ≈ 866 J",
        )],
        variants: vec![
            SolveVariant::new("W", &["F", "s", "alpha"], "J", |v| {
                v["F"] * v["s"] * deg_to_rad(v["alpha"]).cos()
            }),
            SolveVariant::new("F", &["W", "s", "alpha"], "N", |v| {
                v["W"] / (v["s"] * deg_to_rad(v["alpha"]).cos())
            }),
            SolveVariant::new("s", &["W", "F", "alpha"], "m", |v| {
                v["W"] / (v["F"] * deg_to_rad(v["alpha"]).cos())
            }),
            SolveVariant::new("alpha", &["W", "F", "s"], "°", |v| {
                rad_to_deg((v["W"] / (v["F"] * v["s"])).acos())
            }),
        ],
    }
}

fn leistung_mechanisch() -> FormulaDefinition {
    FormulaDefinition {
        id: "leistung-mechanisch",
        name: "Mechanische Leistung",
        latex: r"P = \frac{W}{t} = F \cdot v",
        category: Category::Mechanics,
        level: Some(Level::Basic),
        variables: vec![
            VariableSpec::new("P", "Leistung", "W"),
            VariableSpec::new("W", "Arbeit", "J"),
            VariableSpec::new("t", "Zeit", "s"),
            VariableSpec::new("F", "Kraft", "N"),
            VariableSpec::new("v", "Geschwindigkeit", "m/s"),
        ],
        explanation: "Die mechanische Leistung ist die pro Zeiteinheit verrichtete Arbeit. Sie \
            kann auch als Produkt aus Kraft und Geschwindigkeit berechnet werden.",
        examples: vec![
            Example::new(
                "Ein Motor verrichtet in 5 Sekunden eine Arbeit von 2500 J. Welche Leistung hat \
                 der Motor?",
                "P = W/t = 2500 J / 5 s = 500 W",
            ),
            Example::new(
                "Ein Auto mit einer Masse von 1200 kg fährt mit konstant 80 km/h. Der \
                 Luftwiderstand beträgt 400 N. Welche Leistung muss der Motor aufbringen, um \
                 diese Geschwindigkeit beizubehalten?",
                "P = F·v = 400 N · (80 km/h / 3,6) = 400 N · 22,22 m/s ≈ 8889 W ≈ 8,89 kW",
            ),
        ],
        variants: vec![
            SolveVariant::new("P", &["W", "t"], "W", |v| v["W"] / v["t"]),
            SolveVariant::new("P", &["F", "v"], "W", |v| v["F"] * v["v"]),
            SolveVariant::new("W", &["P", "t"], "J", |v| v["P"] * v["t"]),
            SolveVariant::new("t", &["W", "P"], "s", |v| v["W"] / v["P"]),
            SolveVariant::new("F", &["P", "v"], "N", |v| v["P"] / v["v"]),
            SolveVariant::new("v", &["P", "F"], "m/s", |v| v["P"] / v["F"]),
        ],
    }
}

fn wirkungsgrad() -> FormulaDefinition {
    FormulaDefinition {
        id: "wirkungsgrad",
        name: "Wirkungsgrad",
        latex: r"\eta = \frac{P_{ab}}{P_{zu}} = \frac{E_{nutz}}{E_{zu}}",
        category: Category::Mechanics,
        level: Some(Level::Basic),
        variables: vec![
            VariableSpec::new("eta", "Wirkungsgrad", ""),
            VariableSpec::new("P_ab", "Abgegebene Leistung", "W"),
            VariableSpec::new("P_zu", "Zugeführte Leistung", "W"),
            VariableSpec::new("E_nutz", "Nutzenergie", "J"),
            VariableSpec::new("E_zu", "Zugeführte Energie", "J"),
        ],
        explanation: "Der Wirkungsgrad ist das Verhältnis von abgegebener zu zugeführter \
            Leistung oder von Nutzenergie zu zugeführter Energie. Er ist dimensionslos und wird \
            oft in Prozent angegeben.",
        examples: vec![Example::new(
            "Ein Elektromotor nimmt 2000 W elektrische Leistung auf und gibt 1700 W mechanische \
             Leistung ab. Wie groß ist sein Wirkungsgrad?",
            "η = Pab/Pzu = 1700 W / 2000 W = 0,85 = 85%",
        )],
        variants: vec![
            SolveVariant::new("eta", &["P_ab", "P_zu"], "", |v| v["P_ab"] / v["P_zu"]),
            SolveVariant::new("eta", &["E_nutz", "E_zu"], "", |v| v["E_nutz"] / v["E_zu"]),
            SolveVariant::new("P_ab", &["eta", "P_zu"], "W", |v| v["eta"] * v["P_zu"]),
            SolveVariant::new("P_zu", &["eta", "P_ab"], "W", |v| v["P_ab"] / v["eta"]),
            SolveVariant::new("E_nutz", &["eta", "E_zu"], "J", |v| v["eta"] * v["E_zu"]),
            SolveVariant::new("E_zu", &["eta", "E_nutz"], "J", |v| v["E_nutz"] / v["eta"]),
        ],
    }
}

fn newton_second_law() -> FormulaDefinition {
    FormulaDefinition {
        id: "newton-second-law",
        name: "Newtonsches Kraftgesetz",
        latex: r"F = m \cdot a",
        category: Category::Mechanics,
        level: None,
        variables: vec![
            VariableSpec::new("F", "Kraft", "N"),
            VariableSpec::new("m", "Masse", "kg"),
            VariableSpec::new("a", "Beschleunigung", "m/s²"),
        ],
        explanation: "Das Newtonsche Kraftgesetz (2. Newtonsches Gesetz) beschreibt den \
            Zusammenhang zwischen der Kraft, die auf einen Körper wirkt, seiner Masse und der \
            resultierenden Beschleunigung. Die Kraft ist proportional zur Beschleunigung und \
            zur Masse des Körpers.",
        examples: vec![Example::new(
            "Eine Kraft von 50 N wirkt auf einen Körper mit einer Masse von 10 kg. Welche \
             Beschleunigung erfährt der Körper?",
            "Nach F = m·a gilt: a = F/m = 50 N / 10 kg = 5 m/s²",
        )],
        variants: vec![
            SolveVariant::new("F", &["m", "a"], "N", |v| v["m"] * v["a"]),
            SolveVariant::new("m", &["F", "a"], "kg", |v| v["F"] / v["a"]),
            SolveVariant::new("a", &["F", "m"], "m/s²", |v| v["F"] / v["m"]),
        ],
    }
}

fn ohms_law() -> FormulaDefinition {
    FormulaDefinition {
        id: "ohms-law",
        name: "Ohmsches Gesetz",
        latex: r"U = R \cdot I",
        category: Category::Electricity,
        level: None,
        variables: vec![
            VariableSpec::new("U", "Elektrische Spannung", "V"),
            VariableSpec::new("R", "Elektrischer Widerstand", "Ω"),
            VariableSpec::new("I", "Elektrische Stromstärke", "A"),
        ],
        explanation: "Das Ohmsche Gesetz beschreibt den Zusammenhang zwischen Spannung, \
            Stromstärke und Widerstand in einem elektrischen Stromkreis. Die Spannung ist gleich \
            dem Produkt aus Stromstärke und Widerstand.",
        examples: vec![Example::new(
            "Welche Stromstärke fließt durch einen Widerstand von 100 Ω, wenn eine Spannung von \
             230 V anliegt?",
            "Nach U = R·I gilt: I = U/R = 230 V / 100 Ω = 2,3 A",
        )],
        variants: vec![
            SolveVariant::new("U", &["R", "I"], "V", |v| v["R"] * v["I"]),
            SolveVariant::new("R", &["U", "I"], "Ω", |v| v["U"] / v["I"]),
            SolveVariant::new("I", &["U", "R"], "A", |v| v["U"] / v["R"]),
        ],
    }
}

fn kinetic_energy() -> FormulaDefinition {
    FormulaDefinition {
        id: "kinetic-energy",
        name: "Kinetische Energie",
        latex: r"E_{kin} = \frac{1}{2} \cdot m \cdot v^2",
        category: Category::Mechanics,
        level: None,
        variables: vec![
            VariableSpec::new("E_kin", "Kinetische Energie", "J"),
            VariableSpec::new("m", "Masse", "kg"),
            VariableSpec::new("v", "Geschwindigkeit", "m/s"),
        ],
        explanation: "Die kinetische Energie ist die Bewegungsenergie eines Körpers. Sie hängt \
            von der Masse des Körpers und vom Quadrat seiner Geschwindigkeit ab.",
        examples: vec![Example::new(
            "Ein Auto mit einer Masse von 1500 kg fährt mit einer Geschwindigkeit von 20 m/s. \
             Wie groß ist seine kinetische Energie?",
            "Nach E_kin = (1/2)·m·v² gilt: E_kin = 0,5 · 1500 kg · (20 m/s)² = \
             0,5 · 1500 kg · 400 m²/s² = 300.000 J = 300 kJ",
        )],
        variants: vec![
            SolveVariant::new("E_kin", &["m", "v"], "J", |v| {
                0.5 * v["m"] * v["v"].powi(2)
            }),
            SolveVariant::new("m", &["E_kin", "v"], "kg", |v| {
                2.0 * v["E_kin"] / v["v"].powi(2)
            }),
            SolveVariant::new("v", &["E_kin", "m"], "m/s", |v| {
                (2.0 * v["E_kin"] / v["m"]).sqrt()
            }),
        ],
    }
}

fn gravitational_potential_energy() -> FormulaDefinition {
    FormulaDefinition {
        id: "gravitational-potential-energy",
        name: "Potentielle Energie im Schwerefeld",
        latex: r"E_{pot} = m \cdot g \cdot h",
        category: Category::Mechanics,
        level: None,
        variables: vec![
            VariableSpec::new("E_pot", "Potentielle Energie", "J"),
            VariableSpec::new("m", "Masse", "kg"),
            VariableSpec::with_default("g", "Erdbeschleunigung", "m/s²", "9.81"),
            VariableSpec::new("h", "Höhe", "m"),
        ],
        explanation: "Die potentielle Energie im Schwerefeld beschreibt die Energie, die ein \
            Körper aufgrund seiner Position im Gravitationsfeld besitzt. Sie hängt von der Masse \
            des Körpers, der Erdbeschleunigung und der Höhe ab.",
        examples: vec![Example::new(
            "Ein Buch mit einer Masse von 0,5 kg liegt auf einem 1,5 m hohen Regal. Wie groß ist \
             seine potentielle Energie? (g = 9,81 m/s²)",
            "Nach E_pot = m·g·h gilt: E_pot = 0,5 kg · 9,81 m/s² · 1,5 m = 7,36 J",
        )],
        variants: vec![
            SolveVariant::new("E_pot", &["m", "g", "h"], "J", |v| {
                v["m"] * v["g"] * v["h"]
            }),
            SolveVariant::new("m", &["E_pot", "g", "h"], "kg", |v| {
                v["E_pot"] / (v["g"] * v["h"])
            }),
            SolveVariant::new("g", &["E_pot", "m", "h"], "m/s²", |v| {
                v["E_pot"] / (v["m"] * v["h"])
            }),
            SolveVariant::new("h", &["E_pot", "m", "g"], "m", |v| {
                v["E_pot"] / (v["m"] * v["g"])
            }),
        ],
    }
}

fn momentum() -> FormulaDefinition {
    FormulaDefinition {
        id: "momentum",
        name: "Impuls",
        latex: r"p = m \cdot v",
        category: Category::Mechanics,
        level: None,
        variables: vec![
            VariableSpec::new("p", "Impuls", "kg·m/s"),
            VariableSpec::new("m", "Masse", "kg"),
            VariableSpec::new("v", "Geschwindigkeit", "m/s"),
        ],
        explanation: "Der Impuls eines Körpers ist das Produkt aus seiner Masse und seiner \
            Geschwindigkeit. Er ist eine vektorielle Größe und hat die gleiche Richtung wie die \
            Geschwindigkeit.",
        examples: vec![Example::new(
            "Ein Fahrzeug mit einer Masse von 1200 kg bewegt sich mit einer Geschwindigkeit von \
             25 m/s. Wie groß ist sein Impuls?",
            "Nach p = m·v gilt: p = 1200 kg · 25 m/s = 30.000 kg·m/s",
        )],
        variants: vec![
            SolveVariant::new("p", &["m", "v"], "kg·m/s", |v| v["m"] * v["v"]),
            SolveVariant::new("m", &["p", "v"], "kg", |v| v["p"] / v["v"]),
            SolveVariant::new("v", &["p", "m"], "m/s", |v| v["p"] / v["m"]),
        ],
    }
}

fn gravitational_force() -> FormulaDefinition {
    FormulaDefinition {
        id: "gravitational-force",
        name: "Gravitationskraft",
        latex: r"F_G = G \cdot \frac{m_1 \cdot m_2}{r^2}",
        category: Category::Mechanics,
        level: None,
        variables: vec![
            VariableSpec::new("F_G", "Gravitationskraft", "N"),
            VariableSpec::with_default("G", "Gravitationskonstante", "m³/(kg·s²)", "6.67430e-11"),
            VariableSpec::new("m_1", "Masse 1", "kg"),
            VariableSpec::new("m_2", "Masse 2", "kg"),
            VariableSpec::new("r", "Abstand", "m"),
        ],
        explanation: "Das Newtonsche Gravitationsgesetz beschreibt die Anziehungskraft zwischen \
            zwei Massen. Die Kraft ist proportional zum Produkt der beiden Massen und umgekehrt \
            proportional zum Quadrat ihres Abstands.",
        examples: vec![Example::new(
            "Berechne die Gravitationskraft zwischen der Erde (5,97·10²⁴ kg) und dem Mond \
             (7,35·10²² kg) bei einem Abstand von 3,84·10⁸ m.",
            "Nach F = G·(m₁·m₂)/r² ergibt sich: F = 6,67·10⁻¹¹ m³/(kg·s²) · \
             (5,97·10²⁴ kg · 7,35·10²² kg) / (3,84·10⁸ m)² ≈ 1,98·10²⁰ N",
        )],
        variants: vec![
            SolveVariant::new("F_G", &["G", "m_1", "m_2", "r"], "N", |v| {
                v["G"] * v["m_1"] * v["m_2"] / v["r"].powi(2)
            }),
            SolveVariant::new("G", &["F_G", "m_1", "m_2", "r"], "m³/(kg·s²)", |v| {
                v["F_G"] * v["r"].powi(2) / (v["m_1"] * v["m_2"])
            }),
            SolveVariant::new("m_1", &["F_G", "G", "m_2", "r"], "kg", |v| {
                v["F_G"] * v["r"].powi(2) / (v["G"] * v["m_2"])
            }),
            SolveVariant::new("m_2", &["F_G", "G", "m_1", "r"], "kg", |v| {
                v["F_G"] * v["r"].powi(2) / (v["G"] * v["m_1"])
            }),
            SolveVariant::new("r", &["F_G", "G", "m_1", "m_2"], "m", |v| {
                (v["G"] * v["m_1"] * v["m_2"] / v["F_G"]).sqrt()
            }),
        ],
    }
}

fn lorentz_force() -> FormulaDefinition {
    FormulaDefinition {
        id: "lorentz-force",
        name: "Lorentzkraft",
        latex: r"F_L = q \cdot v \cdot B",
        category: Category::Electricity,
        level: None,
        variables: vec![
            VariableSpec::new("F_L", "Lorentzkraft", "N"),
            VariableSpec::new("q", "Ladung", "C"),
            VariableSpec::new("v", "Geschwindigkeit", "m/s"),
            VariableSpec::new("B", "Magnetische Flussdichte", "T"),
        ],
        explanation: "Die Lorentzkraft beschreibt die Kraft, die auf eine bewegte elektrische \
            Ladung in einem Magnetfeld wirkt. Sie ist proportional zur Ladung, zur \
            Geschwindigkeit und zur magnetischen Flussdichte.",
        examples: vec![Example::new(
            "Ein Elektron mit der Ladung -1,6·10⁻¹⁹ C bewegt sich mit einer Geschwindigkeit von \
             2·10⁶ m/s senkrecht zu einem Magnetfeld mit der Flussdichte 0,5 T. Wie groß ist die \
             Lorentzkraft?",
            "Nach F = q·v·B ergibt sich: F = 1,6·10⁻¹⁹ C · 2·10⁶ m/s · 0,5 T = 1,6·10⁻¹³ N",
        )],
        variants: vec![
            SolveVariant::new("F_L", &["q", "v", "B"], "N", |v| {
                (v["q"] * v["v"] * v["B"]).abs()
            }),
            SolveVariant::new("q", &["F_L", "v", "B"], "C", |v| {
                v["F_L"] / (v["v"] * v["B"])
            }),
            SolveVariant::new("v", &["F_L", "q", "B"], "m/s", |v| {
                v["F_L"] / (v["q"].abs() * v["B"])
            }),
            SolveVariant::new("B", &["F_L", "q", "v"], "T", |v| {
                v["F_L"] / (v["q"].abs() * v["v"])
            }),
        ],
    }
}

#[cfg(test)]
mod tests {
    use crate::formulas;

    #[test]
    fn test_catalog_size() {
        assert_eq!(formulas::all().len(), 29);
    }

    #[test]
    fn test_every_formula_has_variants_and_examples() {
        for formula in formulas::all() {
            assert!(!formula.variants.is_empty(), "{} has no variants", formula.id);
            assert!(!formula.examples.is_empty(), "{} has no examples", formula.id);
            assert!(!formula.explanation.is_empty(), "{} has no explanation", formula.id);
        }
    }

    #[test]
    fn test_constants_have_defaults() {
        let gas = formulas::by_id("ideales-gasgesetz").unwrap();
        assert_eq!(gas.variable("R").unwrap().default_value, Some("8.314"));

        let grav = formulas::by_id("gravitational-force").unwrap();
        assert_eq!(grav.variable("G").unwrap().default_value, Some("6.67430e-11"));

        let light = formulas::by_id("massenenergie-äquivalenz").unwrap();
        assert_eq!(light.variable("c").unwrap().default_value, Some("299792458"));
    }

    #[test]
    fn test_simplified_variants_declare_exclusions() {
        let formula = formulas::by_id("beschleunigte-bewegung").unwrap();
        let simplified: Vec<_> = formula
            .variants
            .iter()
            .filter(|v| !v.excludes.is_empty())
            .collect();
        assert_eq!(simplified.len(), 2);
        for variant in simplified {
            assert_eq!(variant.excludes, &["v_0"]);
        }
    }
}
