//! # Topic Catalog
//!
//! The hand-authored topic articles. Entries are kept in publication order;
//! the first five follow the curriculum outline (Gravitationsfeld bis
//! Elektrostatik), the rest cover the remaining Grundlagen.
//!
//! Two ids ("elektrische-feld", "magnetische-feld", "ladungen-in-feldern")
//! occur twice, an older and a newer revision of the same article. Both stay
//! listed; id lookup resolves to the first.

use super::TopicArticle;
use crate::formulas::{Category, Level};

pub(super) static TOPICS: &[TopicArticle] = &[
    // 1. Das Gravitationsfeld
    TopicArticle {
        id: "gravitationsfeld",
        name: "Das Gravitationsfeld",
        category: Category::Mechanics,
        level: Some(Level::Advanced),
        short_description: "Das Gravitationsfeld beschreibt die Kraftwirkung zwischen Massen und \
            erklärt Phänomene wie Planetenbewegungen, Gezeiten und die Erdanziehungskraft.",
        introduction: "Das Gravitationsfeld ist ein fundamentales Konzept in der Physik, das die \
            Wechselwirkung zwischen Massen beschreibt. Es wurde maßgeblich von Isaac Newton mit \
            seinem Gravitationsgesetz formuliert und später durch Albert Einsteins Allgemeine \
            Relativitätstheorie erweitert.",
        explanation: r#"
      <h5>Das Newtonsche Gravitationsgesetz</h5>
      <p>Das Newtonsche Gravitationsgesetz beschreibt die Anziehungskraft zwischen zwei Massen. Die Kraft ist proportional zum Produkt der beiden Massen und umgekehrt proportional zum Quadrat ihres Abstands.</p>
      <p>Mathematisch ausgedrückt: F = G · (m₁ · m₂) / r²</p>
      <p>Dabei ist G die Gravitationskonstante mit dem Wert 6,67430 · 10⁻¹¹ m³/(kg·s²).</p>
      <h5>Das Gravitationsfeld</h5>
      <p>Ein Gravitationsfeld ist ein Kraftfeld, das von einer Masse erzeugt wird. Jede Masse im Universum erzeugt ein Gravitationsfeld, das auf andere Massen wirkt. Die Stärke des Gravitationsfeldes (Feldstärke) an einem bestimmten Punkt wird durch die Gravitationsbeschleunigung g beschrieben.</p>
      <p>g = G · M / r²</p>
      <p>Dabei ist M die felderzeugende Masse und r der Abstand zum Massenmittelpunkt.</p>
      <h5>Potentielle Energie im Gravitationsfeld</h5>
      <p>Die potentielle Energie eines Körpers im Gravitationsfeld ist die Energie, die aufgrund seiner Position im Feld gespeichert ist. Sie wird berechnet als:</p>
      <p>E_pot = -G · (m · M) / r</p>
      <h5>Gravitationsfeld der Erde</h5>
      <p>Die Erdbeschleunigung beträgt etwa 9,81 m/s² an der Erdoberfläche. Sie variiert leicht je nach geografischer Breite und Höhe über dem Meeresspiegel. An den Polen ist g größer als am Äquator, und mit zunehmender Höhe nimmt g ab.</p>
    "#,
        examples: r#"
      <div class="example-box">
        <h6>Beispiel 1: Fallbewegung</h6>
        <p>Ein Ball, der aus 20 m Höhe fallen gelassen wird, erreicht nach t = √(2h/g) = √(2·20m/9,81m/s²) ≈ 2,02 s den Boden und hat dann eine Geschwindigkeit von v = g·t = 9,81 m/s² · 2,02 s ≈ 19,8 m/s.</p>
      </div>
      <div class="example-box">
        <h6>Beispiel 2: Planetenbewegung</h6>
        <p>Die Erde umkreist die Sonne auf einer nahezu kreisförmigen Bahn. Die Gravitationskraft der Sonne liefert die notwendige Zentripetalkraft, um die Erde auf ihrer Bahn zu halten.</p>
      </div>
      <div class="example-box">
        <h6>Beispiel 3: Gezeiten</h6>
        <p>Die Gezeiten (Ebbe und Flut) entstehen hauptsächlich durch die unterschiedliche Stärke des Gravitationsfeldes des Mondes an verschiedenen Punkten der Erde.</p>
      </div>
    "#,
        related_formulas: &[
            "gravitational-force",
            "gravitational-potential-energy",
            "newton-second-law",
        ],
        related_topics: &["elektrische-feld", "magnetische-feld", "ladungen-in-feldern"],
    },
    // 2. Das elektrische Feld
    TopicArticle {
        id: "elektrische-feld",
        name: "Das elektrische Feld",
        category: Category::Electricity,
        level: Some(Level::Advanced),
        short_description: "Das elektrische Feld beschreibt die Kraftwirkung zwischen \
            elektrischen Ladungen und erklärt die Wechselwirkung zwischen geladenen Teilchen.",
        introduction: "Das elektrische Feld ist ein fundamentales Konzept der Elektrodynamik, \
            das beschreibt, wie elektrische Ladungen aufeinander wirken. Es wurde maßgeblich von \
            Michael Faraday entwickelt und später durch James Clerk Maxwell mathematisch \
            formalisiert.",
        explanation: r#"
      <h5>Das Coulombsche Gesetz</h5>
      <p>Das Coulombsche Gesetz beschreibt die Kraft zwischen zwei Punktladungen. Die Kraft ist proportional zum Produkt der beiden Ladungen und umgekehrt proportional zum Quadrat ihres Abstands.</p>
      <p>Mathematisch ausgedrückt: F = k · (q₁ · q₂) / r²</p>
      <p>Dabei ist k die Coulomb-Konstante mit dem Wert 8,99 · 10⁹ N·m²/C².</p>
      <h5>Das elektrische Feld</h5>
      <p>Ein elektrisches Feld ist ein Kraftfeld, das von einer elektrischen Ladung erzeugt wird. Jede elektrische Ladung erzeugt ein elektrisches Feld, das auf andere Ladungen wirkt. Die Stärke des elektrischen Feldes (Feldstärke) an einem bestimmten Punkt wird durch den Vektor E beschrieben.</p>
      <p>E = F / q = k · Q / r²</p>
      <p>Dabei ist Q die felderzeugende Ladung und r der Abstand zur Ladung.</p>
      <h5>Elektrisches Potential</h5>
      <p>Das elektrische Potential ist eine skalare Größe, die die potentielle Energie pro Ladungseinheit angibt. Es wird berechnet als:</p>
      <p>φ = k · Q / r</p>
      <p>Die elektrische Feldstärke E ist der negative Gradient des elektrischen Potentials: E = -∇φ</p>
      <h5>Elektrische Feldlinien</h5>
      <p>Elektrische Feldlinien sind eine grafische Darstellung des elektrischen Feldes. Sie verlaufen von positiven zu negativen Ladungen und zeigen in jedem Punkt die Richtung der Kraft an, die auf eine positive Probeladung wirkt.</p>
    "#,
        examples: r#"
      <div class="example-box">
        <h6>Beispiel 1: Punktladung</h6>
        <p>Eine positive Punktladung von Q = 1 nC erzeugt in einem Abstand von 10 cm eine elektrische Feldstärke von E = k·Q/r² = 8,99·10⁹ N·m²/C² · 10⁻⁹ C / (0,1 m)² = 900 N/C.</p>
      </div>
      <div class="example-box">
        <h6>Beispiel 2: Plattenkondensator</h6>
        <p>In einem Plattenkondensator mit einem Plattenabstand von 1 cm und einer Spannung von 100 V beträgt die elektrische Feldstärke E = U/d = 100 V / 0,01 m = 10.000 V/m = 10 kV/m.</p>
      </div>
      <div class="example-box">
        <h6>Beispiel 3: Elektronenablenkung</h6>
        <p>Ein Elektron, das in ein elektrisches Feld eintritt, erfährt eine Kraft F = q·E, die es in Richtung der positiven Elektrode beschleunigt.</p>
      </div>
    "#,
        related_formulas: &["coulombsches-gesetz", "elektrisches-feld", "lorentz-force"],
        related_topics: &[
            "gravitationsfeld",
            "magnetische-feld",
            "ladungen-in-feldern",
            "elektrostatik",
        ],
    },
    // 3. Das magnetische Feld
    TopicArticle {
        id: "magnetische-feld",
        name: "Das magnetische Feld",
        category: Category::Electricity,
        level: Some(Level::Advanced),
        short_description: "Das magnetische Feld beschreibt die Wechselwirkung zwischen \
            Magneten, bewegten Ladungen und stromdurchflossenen Leitern.",
        introduction: "Das magnetische Feld ist ein fundamentales Konzept der Elektrodynamik und \
            beschreibt die Wechselwirkung zwischen Magneten und bewegten elektrischen Ladungen. \
            Es ist eng mit dem elektrischen Feld verbunden und bildet mit diesem das \
            elektromagnetische Feld.",
        explanation: r#"
      <h5>Die magnetische Kraft</h5>
      <p>Ein bewegtes elektrisch geladenes Teilchen, das sich durch ein Magnetfeld bewegt, erfährt die Lorentzkraft. Diese Kraft steht senkrecht sowohl zur Bewegungsrichtung des Teilchens als auch zur Richtung des Magnetfeldes.</p>
      <p>F = q · v × B</p>
      <p>Dabei ist q die Ladung des Teilchens, v seine Geschwindigkeit und B die magnetische Flussdichte.</p>
      <h5>Erzeugung magnetischer Felder</h5>
      <p>Magnetische Felder werden durch bewegte elektrische Ladungen (elektrische Ströme) erzeugt. Ein stromdurchflossener Leiter erzeugt ein zirkulares magnetisches Feld um den Leiter herum.</p>
      <p>Für einen geraden Leiter gilt: B = (μ₀ · I) / (2π · r)</p>
      <p>Dabei ist μ₀ die magnetische Feldkonstante, I die Stromstärke und r der Abstand zum Leiter.</p>
      <h5>Elektromagnetische Induktion</h5>
      <p>Die elektromagnetische Induktion beschreibt die Erzeugung einer elektrischen Spannung in einem geschlossenen Leiterkreis durch ein sich änderndes Magnetfeld. Dieses Prinzip ist die Grundlage für Elektromotoren und Generatoren.</p>
      <p>Die induzierte Spannung ist proportional zur zeitlichen Änderung des magnetischen Flusses: U_ind = -dΦ/dt</p>
      <h5>Magnetische Feldlinien</h5>
      <p>Magnetische Feldlinien sind geschlossene Kurven, die vom magnetischen Nordpol zum Südpol außerhalb des Magneten und vom Südpol zum Nordpol innerhalb des Magneten verlaufen.</p>
    "#,
        examples: r#"
      <div class="example-box">
        <h6>Beispiel 1: Stromleiter</h6>
        <p>Ein gerader Leiter, durch den ein Strom von 10 A fließt, erzeugt in einem Abstand von 5 cm ein Magnetfeld mit der Flussdichte B = (μ₀ · I) / (2π · r) = (1,257 · 10⁻⁶ N/A² · 10 A) / (2π · 0,05 m) ≈ 4 · 10⁻⁵ T = 40 μT.</p>
      </div>
      <div class="example-box">
        <h6>Beispiel 2: Spule</h6>
        <p>Eine Spule mit 200 Windungen und einer Länge von 15 cm erzeugt bei einem Strom von 2 A ein Magnetfeld im Inneren mit der Flussdichte B = μ₀ · (n · I) / l = 1,257 · 10⁻⁶ N/A² · (200 · 2 A) / 0,15 m ≈ 3,35 · 10⁻³ T = 3,35 mT.</p>
      </div>
      <div class="example-box">
        <h6>Beispiel 3: Kreisbewegung im Magnetfeld</h6>
        <p>Ein Elektron, das senkrecht zu einem homogenen Magnetfeld mit der Flussdichte B = 0,1 T eintritt, beschreibt eine Kreisbahn mit dem Radius r = (m · v) / (q · B), wobei m die Masse des Elektrons, v seine Geschwindigkeit und q seine Ladung ist.</p>
      </div>
    "#,
        related_formulas: &[
            "lorentz-force",
            "magnetisches-feld-gerader-leiter",
            "magnetisches-feld-spule",
        ],
        related_topics: &[
            "gravitationsfeld",
            "elektrische-feld",
            "ladungen-in-feldern",
            "elektromagnetismus",
        ],
    },
    // 4. Ladungen in Feldern
    TopicArticle {
        id: "ladungen-in-feldern",
        name: "Ladungen in Feldern",
        category: Category::Electricity,
        level: Some(Level::Advanced),
        short_description: "Die Bewegung elektrischer Ladungen in elektrischen und magnetischen \
            Feldern erklärt zahlreiche technische Anwendungen wie Oszilloskope, \
            Teilchenbeschleuniger und Massenspektrometer.",
        introduction: "Die Bewegung geladener Teilchen in elektrischen und magnetischen Feldern \
            ist ein zentrales Thema der Elektrodynamik mit vielen praktischen Anwendungen. Die \
            Wechselwirkung zwischen Ladungen und Feldern erklärt das Verhalten von Elektronen in \
            Kathodenstrahlröhren, Protonen in Teilchenbeschleunigern und Ionen in \
            Massenspektrometern.",
        explanation: r#"
      <h5>Bewegung im elektrischen Feld</h5>
      <p>Ein geladenes Teilchen im elektrischen Feld erfährt eine Kraft in Richtung des Feldes (für positive Ladungen) oder entgegen der Feldrichtung (für negative Ladungen). Die Kraft ist gegeben durch:</p>
      <p>F = q · E</p>
      <p>Diese Kraft führt zu einer Beschleunigung des Teilchens: a = (q · E) / m</p>
      <p>In einem homogenen elektrischen Feld bewegt sich das Teilchen auf einer Parabel, ähnlich wie ein schräg geworfener Körper im Gravitationsfeld.</p>
      <h5>Bewegung im magnetischen Feld</h5>
      <p>Ein geladenes Teilchen, das sich in einem Magnetfeld bewegt, erfährt die Lorentzkraft, die senkrecht zur Bewegungsrichtung und zur Richtung des Magnetfeldes steht.</p>
      <p>F = q · v × B</p>
      <p>Bei einer Bewegung senkrecht zum Magnetfeld führt dies zu einer Kreisbewegung mit dem Radius: r = (m · v) / (|q| · B)</p>
      <p>Die Frequenz dieser Kreisbewegung (Zyklotronfrequenz) ist: f = (|q| · B) / (2π · m)</p>
      <h5>Bewegung in elektrischen und magnetischen Feldern</h5>
      <p>Wenn ein geladenes Teilchen gleichzeitig elektrischen und magnetischen Feldern ausgesetzt ist, erfährt es die kombinierte Lorentzkraft:</p>
      <p>F = q · (E + v × B)</p>
      <p>Diese Wechselwirkung wird in zahlreichen technischen Anwendungen genutzt, wie z.B. im Wien-Filter zur Geschwindigkeitsselektion von geladenen Teilchen.</p>
    "#,
        examples: r#"
      <div class="example-box">
        <h6>Beispiel 1: Elektronenkanone</h6>
        <p>In einer Elektronenkanone werden Elektronen durch ein elektrisches Feld mit einer Spannung von 5 kV beschleunigt. Die kinetische Energie der Elektronen beträgt dann Ekin = e · U = 1,6 · 10⁻¹⁹ C · 5000 V = 8 · 10⁻¹⁶ J = 5 keV.</p>
      </div>
      <div class="example-box">
        <h6>Beispiel 2: Massenspektrometer</h6>
        <p>In einem Massenspektrometer werden Ionen in einem Magnetfeld auf Kreisbahnen gelenkt. Bei gleicher Geschwindigkeit ist der Radius proportional zur Masse: r ∝ m/q. Dies ermöglicht die Trennung von Ionen nach ihrem Masse-zu-Ladungs-Verhältnis.</p>
      </div>
      <div class="example-box">
        <h6>Beispiel 3: Hall-Effekt</h6>
        <p>Beim Hall-Effekt bewegen sich Ladungsträger in einem stromdurchflossenen Leiter, der sich in einem Magnetfeld befindet. Die Lorentzkraft führt zu einer Ladungstrennung und erzeugt eine Spannung senkrecht zur Stromrichtung und zum Magnetfeld.</p>
      </div>
    "#,
        related_formulas: &["lorentz-force", "elektrisches-feld", "magnetisches-feld-spule"],
        related_topics: &[
            "gravitationsfeld",
            "elektrische-feld",
            "magnetische-feld",
            "elektromagnetismus",
            "teilchenphysik",
        ],
    },
    // 5. Elektrostatik
    TopicArticle {
        id: "elektrostatik",
        name: "Elektrostatik",
        category: Category::Electricity,
        level: Some(Level::Basic),
        short_description: "Die Elektrostatik behandelt ruhende elektrische Ladungen und die von \
            ihnen erzeugten elektrischen Felder und Kräfte.",
        introduction: "Die Elektrostatik ist das Teilgebiet der Physik, das sich mit ruhenden \
            elektrischen Ladungen, elektrischen Feldern und elektrostatischen Kräften \
            beschäftigt. Sie bildet die Grundlage für viele technische Anwendungen wie \
            Kondensatoren, elektrostatische Präzipitoren und Photokopierer.",
        explanation: r#"
      <h5>Elektrische Ladungen</h5>
      <p>Materie besteht aus Atomen, die Elektronen (negativ geladen), Protonen (positiv geladen) und Neutronen (ungeladen) enthalten. Die elektrische Ladung ist quantisiert und tritt in ganzzahligen Vielfachen der Elementarladung e = 1,602 · 10⁻¹⁹ C auf.</p>
      <p>Gleichnamige Ladungen stoßen sich ab, ungleichnamige ziehen sich an. Die Gesamtladung in einem geschlossenen System bleibt erhalten (Ladungserhaltungssatz).</p>
      <h5>Coulombsches Gesetz</h5>
      <p>Das Coulombsche Gesetz beschreibt die Kraft zwischen zwei Punktladungen. Sie ist proportional zum Produkt der Ladungen und umgekehrt proportional zum Quadrat ihres Abstands:</p>
      <p>F = k · (q₁ · q₂) / r²</p>
      <p>mit k = 1/(4πε₀) = 8,99 · 10⁹ N·m²/C²</p>
      <h5>Elektrisches Feld</h5>
      <p>Das elektrische Feld beschreibt die Kraft, die auf eine Probeladung wirkt, dividiert durch den Wert dieser Ladung:</p>
      <p>E = F/q</p>
      <p>Die Einheit des elektrischen Feldes ist V/m oder N/C.</p>
      <h5>Elektrostatisches Potential</h5>
      <p>Das elektrostatische Potential ist die potentielle Energie pro Ladungseinheit und wird in Volt (V) gemessen. Es ist eine skalare Größe und ist definiert als:</p>
      <p>φ = k · q / r</p>
      <p>Die Potentialdifferenz zwischen zwei Punkten wird als elektrische Spannung bezeichnet.</p>
    "#,
        examples: r#"
      <div class="example-box">
        <h6>Beispiel 1: Ladungstrennung</h6>
        <p>Beim Reiben eines Kunststoffstabs mit einem Wolltuch werden negative Ladungen (Elektronen) vom Tuch auf den Stab übertragen. Der Stab wird negativ geladen, das Tuch positiv.</p>
      </div>
      <div class="example-box">
        <h6>Beispiel 2: Kondensator</h6>
        <p>Ein Plattenkondensator mit einer Kapazität von 10 μF wird auf eine Spannung von 12 V aufgeladen. Die gespeicherte Ladung beträgt Q = C · U = 10 · 10⁻⁶ F · 12 V = 1,2 · 10⁻⁴ C.</p>
      </div>
      <div class="example-box">
        <h6>Beispiel 3: Erdung</h6>
        <p>Bei der Erdung wird ein elektrisch geladener Körper mit der Erde verbunden, wodurch überschüssige Ladungen abfließen können. Die Erde dient als nahezu unendlich großer Ladungsreservoir mit einem Potential von 0 V.</p>
      </div>
    "#,
        related_formulas: &["coulombsches-gesetz", "elektrisches-feld"],
        related_topics: &["elektrische-feld", "ladungen-in-feldern", "kondensatoren"],
    },
    // Mechanik Grundlagen
    TopicArticle {
        id: "kinematik",
        name: "Kinematik",
        category: Category::Mechanics,
        level: Some(Level::Basic),
        short_description: "Die Kinematik beschreibt die Bewegung von Körpern ohne \
            Berücksichtigung der Ursachen der Bewegung (Kräfte).",
        introduction: "Die Kinematik ist ein Teilgebiet der Mechanik, das sich mit der \
            Beschreibung der Bewegung von Körpern befasst, ohne die Ursachen der Bewegung zu \
            betrachten. Sie untersucht Konzepte wie Position, Geschwindigkeit und Beschleunigung \
            sowie verschiedene Arten von Bewegungen.",
        explanation: r#"
      <h5>Gleichförmige Bewegung</h5>
      <p>Bei der gleichförmigen (geradlinigen) Bewegung bleibt die Geschwindigkeit konstant. Es gilt:</p>
      <p>v = s / t bzw. s = v · t</p>
      <p>Dabei ist v die Geschwindigkeit, s der zurückgelegte Weg und t die dafür benötigte Zeit.</p>
      <h5>Gleichmäßig beschleunigte Bewegung</h5>
      <p>Bei der gleichmäßig beschleunigten Bewegung ändert sich die Geschwindigkeit gleichmäßig mit der Zeit. Die Beschleunigung ist konstant. Es gelten folgende Gleichungen:</p>
      <p>v(t) = v₀ + a · t</p>
      <p>s(t) = v₀ · t + (1/2) · a · t²</p>
      <p>v² = v₀² + 2 · a · s</p>
      <p>Dabei ist v₀ die Anfangsgeschwindigkeit, a die Beschleunigung, t die Zeit und s der zurückgelegte Weg.</p>
      <h5>Kreisbewegung</h5>
      <p>Bei der Kreisbewegung bewegt sich ein Körper auf einer Kreisbahn. Wichtige Größen sind:</p>
      <p>Bahngeschwindigkeit: v = 2π · r / T</p>
      <p>Winkelgeschwindigkeit: ω = 2π / T</p>
      <p>Zentripetalbeschleunigung: a_z = v² / r = ω² · r</p>
      <p>Dabei ist r der Radius der Kreisbahn, T die Umlaufzeit und ω die Winkelgeschwindigkeit.</p>
      <h5>Wurfbewegung</h5>
      <p>Die Wurfbewegung ist eine Überlagerung einer gleichförmigen Bewegung in horizontaler Richtung und einer gleichmäßig beschleunigten Bewegung in vertikaler Richtung (Fallbewegung).</p>
      <p>Für den horizontalen Wurf gilt: x(t) = v₀ · t und y(t) = (1/2) · g · t²</p>
      <p>Für den schiefen Wurf gilt: x(t) = v₀ · cos(α) · t und y(t) = v₀ · sin(α) · t - (1/2) · g · t²</p>
    "#,
        examples: r#"
      <div class="example-box">
        <h6>Beispiel 1: Gleichförmige Bewegung</h6>
        <p>Ein Auto fährt mit einer konstanten Geschwindigkeit von 90 km/h. In 20 Minuten legt es eine Strecke von s = v · t = 90 km/h · (20/60) h = 30 km zurück.</p>
      </div>
      <div class="example-box">
        <h6>Beispiel 2: Beschleunigte Bewegung</h6>
        <p>Ein Auto beschleunigt gleichmäßig aus dem Stand mit 2 m/s². Nach 10 Sekunden hat es eine Geschwindigkeit von v = v₀ + a · t = 0 + 2 m/s² · 10 s = 20 m/s erreicht und dabei eine Strecke von s = (1/2) · a · t² = 0,5 · 2 m/s² · (10 s)² = 100 m zurückgelegt.</p>
      </div>
      <div class="example-box">
        <h6>Beispiel 3: Horizontaler Wurf</h6>
        <p>Ein Ball wird horizontal mit einer Geschwindigkeit von 5 m/s von einem 20 m hohen Turm geworfen. Die Flugzeit beträgt t = √(2h/g) = √(2 · 20 m / 9,81 m/s²) ≈ 2,02 s. In dieser Zeit legt der Ball horizontal eine Strecke von x = v₀ · t = 5 m/s · 2,02 s ≈ 10,1 m zurück.</p>
      </div>
    "#,
        related_formulas: &["geschwindigkeit", "beschleunigte-bewegung", "fallbeschleunigung"],
        related_topics: &["dynamik", "kreisbewegung", "gravitationsfeld"],
    },
    // Ältere Revision von "Das elektrische Feld"
    TopicArticle {
        id: "elektrische-feld",
        name: "Das elektrische Feld",
        category: Category::Electricity,
        level: Some(Level::Advanced),
        short_description: "Das elektrische Feld beschreibt den Raum um elektrische Ladungen, in \
            dem Kraftwirkungen auf andere Ladungen auftreten.",
        introduction: "Das elektrische Feld ist ein grundlegendes Konzept der Elektrodynamik. Es \
            beschreibt, wie elektrische Ladungen aufeinander wirken und wie sie Kräfte auf \
            andere Ladungen ausüben, selbst wenn kein direkter Kontakt besteht.",
        explanation: r#"
      <h5>Definition des elektrischen Feldes</h5>
      <p>Ein elektrisches Feld ist ein Kraftfeld, das von elektrischen Ladungen erzeugt wird. Es übt Kräfte auf andere elektrische Ladungen aus, die sich in diesem Feld befinden.</p>
      <p>Die elektrische Feldstärke E an einem Punkt ist definiert als die Kraft F, die auf eine positive Probeladung q wirkt, geteilt durch diese Ladung: E = F/q</p>
      <p>Die Einheit der elektrischen Feldstärke ist N/C (Newton pro Coulomb) oder V/m (Volt pro Meter).</p>
      <h5>Coulombsches Gesetz</h5>
      <p>Das Coulombsche Gesetz beschreibt die Kraft zwischen zwei Punktladungen. Es besagt, dass die Kraft proportional zum Produkt der Ladungen und umgekehrt proportional zum Quadrat ihres Abstands ist:</p>
      <p>F = k · (q₁ · q₂) / r²</p>
      <p>Dabei ist k die elektrische Konstante mit k = 1/(4πε₀) = 8,99 · 10⁹ N·m²/C²</p>
      <h5>Elektrische Feldlinien</h5>
      <p>Elektrische Felder werden oft durch Feldlinien visualisiert. Diese Linien zeigen die Richtung der Kraft an, die auf eine positive Probeladung wirken würde. Die Dichte der Feldlinien gibt die Stärke des Feldes an.</p>
      <p>Feldlinien beginnen immer bei positiven Ladungen und enden bei negativen Ladungen. Bei einer positiven Ladung verlaufen sie radial nach außen, bei einer negativen Ladung radial nach innen.</p>
      <h5>Elektrisches Potential</h5>
      <p>Das elektrische Potential V ist die potentielle Energie pro Ladungseinheit. Die Potentialdifferenz zwischen zwei Punkten (elektrische Spannung) gibt an, wie viel Arbeit pro Ladungseinheit verrichtet werden muss, um eine Ladung von einem Punkt zum anderen zu bewegen.</p>
      <p>Die Einheit des elektrischen Potentials ist Volt (V).</p>
    "#,
        examples: r#"
      <div class="example-box">
        <h6>Beispiel 1: Elektrisches Feld einer Punktladung</h6>
        <p>Das elektrische Feld einer Punktladung Q im Abstand r beträgt E = k·Q/r². Für eine Ladung von 1 μC im Abstand von 10 cm beträgt die Feldstärke: E = 8,99·10⁹ N·m²/C² · 10⁻⁶ C / (0,1 m)² = 8,99·10⁵ N/C.</p>
      </div>
      <div class="example-box">
        <h6>Beispiel 2: Homogenes elektrisches Feld</h6>
        <p>Zwischen zwei parallelen, entgegengesetzt geladenen Platten entsteht ein näherungsweise homogenes elektrisches Feld. Die Feldstärke beträgt E = U/d, wobei U die Spannung zwischen den Platten und d ihr Abstand ist.</p>
      </div>
      <div class="example-box">
        <h6>Beispiel 3: Kraft auf eine Ladung im elektrischen Feld</h6>
        <p>Eine Ladung von 2 μC befindet sich in einem elektrischen Feld mit der Stärke 500 V/m. Die Kraft auf die Ladung beträgt F = q·E = 2·10⁻⁶ C · 500 N/C = 10⁻³ N = 1 mN.</p>
      </div>
    "#,
        related_formulas: &["ohms-law", "electric-field-strength"],
        related_topics: &["gravitationsfeld", "magnetische-feld", "elektromagnetische-induktion"],
    },
    // Ältere Revision von "Das magnetische Feld"
    TopicArticle {
        id: "magnetische-feld",
        name: "Das magnetische Feld",
        category: Category::Electricity,
        level: None,
        short_description: "Das magnetische Feld beschreibt die Kraftwirkung zwischen Magneten \
            und bewegten elektrischen Ladungen.",
        introduction: "Das magnetische Feld ist eines der fundamentalen Felder in der Physik. Es \
            wird von bewegten elektrischen Ladungen (elektrischen Strömen) oder \
            Permanentmagneten erzeugt und übt Kräfte auf bewegte Ladungen und andere Magnete aus.",
        explanation: r#"
      <h5>Entstehung magnetischer Felder</h5>
      <p>Magnetische Felder werden durch bewegte elektrische Ladungen (Ströme) oder durch die Ausrichtung der magnetischen Momente von Elementarteilchen (wie in Permanentmagneten) erzeugt.</p>
      <p>Ein elektrischer Strom, der durch einen Leiter fließt, erzeugt ein magnetisches Feld um den Leiter herum. Die Richtung des Feldes kann mit der Rechte-Hand-Regel bestimmt werden.</p>
      <h5>Magnetische Feldstärke und Flussdichte</h5>
      <p>Die magnetische Feldstärke H beschreibt die Stärke eines magnetischen Feldes unabhängig vom Medium, in dem es sich befindet. Sie wird in der Einheit A/m (Ampere pro Meter) gemessen.</p>
      <p>Die magnetische Flussdichte B berücksichtigt zusätzlich die magnetischen Eigenschaften des Mediums. Sie wird in der Einheit Tesla (T) oder Gauß (G) gemessen, wobei 1 T = 10.000 G.</p>
      <p>Die Beziehung zwischen H und B ist: B = μ·H, wobei μ die magnetische Permeabilität des Mediums ist.</p>
      <h5>Magnetische Feldlinien</h5>
      <p>Magnetische Felder werden durch Feldlinien dargestellt. Bei einem Stabmagneten verlaufen sie vom Nordpol zum Südpol außerhalb des Magneten und vom Südpol zum Nordpol innerhalb des Magneten.</p>
      <p>Magnetische Feldlinien sind immer geschlossen und haben keinen Anfang oder Ende, da es keine magnetischen Monopole gibt.</p>
      <h5>Lorentzkraft</h5>
      <p>Die Lorentzkraft beschreibt die Kraft auf eine bewegte elektrische Ladung in einem magnetischen Feld. Sie ist proportional zur Ladung, zur Geschwindigkeit der Ladung und zur Flussdichte des magnetischen Feldes.</p>
      <p>F = q · (v × B), wobei q die Ladung, v die Geschwindigkeit und B die magnetische Flussdichte ist. Das Kreuzprodukt bedeutet, dass die Kraft senkrecht zur Bewegungsrichtung und senkrecht zur Richtung des magnetischen Feldes wirkt.</p>
    "#,
        examples: r#"
      <div class="example-box">
        <h6>Beispiel 1: Magnetfeld eines Leiters</h6>
        <p>Das magnetische Feld eines geraden Leiters mit dem Strom I im Abstand r beträgt B = (μ₀·I)/(2π·r). Für einen Strom von 10 A im Abstand von 5 cm beträgt die Flussdichte: B = (4π·10⁻⁷ T·m/A · 10 A)/(2π·0,05 m) = 4·10⁻⁵ T.</p>
      </div>
      <div class="example-box">
        <h6>Beispiel 2: Kraft auf einen stromdurchflossenen Leiter</h6>
        <p>Auf einen geraden Leiter der Länge l mit dem Strom I in einem homogenen Magnetfeld mit der Flussdichte B wirkt die Kraft F = I·l·B·sin(α), wobei α der Winkel zwischen dem Leiter und dem Magnetfeld ist.</p>
      </div>
      <div class="example-box">
        <h6>Beispiel 3: Bewegte Ladung im Magnetfeld</h6>
        <p>Ein Elektron mit der Geschwindigkeit v = 10⁶ m/s bewegt sich senkrecht zu einem magnetischen Feld mit B = 0,1 T. Die Lorentzkraft beträgt F = q·v·B = 1,6·10⁻¹⁹ C · 10⁶ m/s · 0,1 T = 1,6·10⁻¹⁴ N.</p>
      </div>
    "#,
        related_formulas: &["magnetic-flux-density", "lorentz-force"],
        related_topics: &["elektrische-feld", "elektromagnetische-induktion", "ladungen-in-feldern"],
    },
    // Ältere Revision von "Ladungen in Feldern"
    TopicArticle {
        id: "ladungen-in-feldern",
        name: "Ladungen in Feldern",
        category: Category::Electricity,
        level: None,
        short_description: "Das Verhalten elektrischer Ladungen in elektrischen und magnetischen \
            Feldern und die daraus resultierenden Kraftwirkungen und Bewegungen.",
        introduction: "Die Untersuchung von elektrischen Ladungen in elektrischen und \
            magnetischen Feldern ist ein zentrales Thema der Elektrodynamik. Sie erklärt \
            grundlegende Phänomene und Anwendungen wie Kondensatoren, Elektromotoren und \
            Teilchenbeschleuniger.",
        explanation: r#"
      <h5>Ladungen im elektrischen Feld</h5>
      <p>Eine elektrische Ladung q erfährt im elektrischen Feld E die Kraft F = q·E. Positive Ladungen werden in Richtung des elektrischen Feldes beschleunigt, negative Ladungen in entgegengesetzter Richtung.</p>
      <p>Elektrische Feldenergie: Wird eine Ladung in einem elektrischen Feld bewegt, ändert sich ihre potentielle Energie. Die Arbeit, die dafür aufgewendet werden muss, ist W = q·(V₂ - V₁), wobei V₁ und V₂ die elektrischen Potentiale an den Anfangs- und Endpunkten sind.</p>
      <h5>Ladungen im magnetischen Feld</h5>
      <p>Eine bewegte Ladung q mit der Geschwindigkeit v erfährt im magnetischen Feld B die Lorentzkraft F = q·(v × B). Diese Kraft steht senkrecht zur Bewegungsrichtung und zur Richtung des magnetischen Feldes.</p>
      <p>Bewegung im homogenen Magnetfeld: Eine geladene Teilchen, das sich senkrecht zu einem homogenen Magnetfeld bewegt, wird auf eine Kreisbahn gezwungen. Der Radius dieser Bahn ist r = (m·v)/(|q|·B), wobei m die Masse des Teilchens ist.</p>
      <h5>Ladungen in kombinieren Feldern</h5>
      <p>In der Praxis sind oft elektrische und magnetische Felder gleichzeitig vorhanden. Die Gesamtkraft auf eine Ladung ist dann durch die vollständige Lorentzkraft gegeben: F = q·(E + v × B).</p>
      <p>Ein wichtiges Anwendungsbeispiel ist der Wien-Filter, der geladene Teilchen nach dem Verhältnis von Ladung zu Masse sortiert.</p>
      <h5>Bewegungsgleichungen</h5>
      <p>Die Bewegung geladener Teilchen in elektromagnetischen Feldern wird durch Differentialgleichungen beschrieben, die aus dem zweiten Newtonschen Gesetz und der Lorentzkraft abgeleitet werden: m·a = q·(E + v × B).</p>
      <p>Diese Gleichungen bilden die Grundlage für die Berechnung von Teilchenbahnen in Beschleunigern, Massenspektrometern und anderen Geräten der modernen Physik.</p>
    "#,
        examples: r#"
      <div class="example-box">
        <h6>Beispiel 1: Elektronenstrahl im elektrischen Feld</h6>
        <p>Ein Elektronenstrahl mit der Geschwindigkeit v = 10⁷ m/s tritt in ein homogenes elektrisches Feld mit E = 10⁴ V/m ein, das senkrecht zur Bewegungsrichtung verläuft. Die Elektronen werden nach der Gleichung y = (q·E)/(2·m)·t² abgelenkt, wobei t die Zeit ist.</p>
      </div>
      <div class="example-box">
        <h6>Beispiel 2: Zyklotronbewegung</h6>
        <p>Ein Proton bewegt sich mit v = 5·10⁶ m/s senkrecht zu einem Magnetfeld mit B = 1,5 T. Der Radius der Kreisbahn beträgt r = (m·v)/(q·B) = (1,67·10⁻²⁷ kg · 5·10⁶ m/s)/(1,6·10⁻¹⁹ C · 1,5 T) ≈ 0,035 m = 3,5 cm.</p>
      </div>
      <div class="example-box">
        <h6>Beispiel 3: Halleffekt</h6>
        <p>Fließt ein Strom durch einen Leiter, der sich in einem Magnetfeld befindet, werden die Ladungsträger durch die Lorentzkraft abgelenkt. Dadurch entsteht eine Spannung senkrecht zur Stromrichtung (Hall-Spannung), die zur Messung von Magnetfeldern genutzt werden kann.</p>
      </div>
    "#,
        related_formulas: &["lorentz-force", "electric-field-strength"],
        related_topics: &["elektrische-feld", "magnetische-feld", "elektromagnetische-induktion"],
    },
    // Elektromagnetische Induktion
    TopicArticle {
        id: "elektromagnetische-induktion",
        name: "Elektromagnetische Induktion",
        category: Category::Electricity,
        level: None,
        short_description: "Die elektromagnetische Induktion beschreibt die Erzeugung einer \
            elektrischen Spannung durch ein sich änderndes Magnetfeld.",
        introduction: "Die elektromagnetische Induktion, entdeckt von Michael Faraday im Jahr \
            1831, ist ein fundamentales Prinzip der Elektrodynamik. Sie bildet die Grundlage für \
            Generatoren, Transformatoren und viele andere elektrische Geräte in unserem Alltag.",
        explanation: r#"
      <h5>Faradaysches Induktionsgesetz</h5>
      <p>Das Faradaysche Induktionsgesetz besagt, dass eine elektrische Spannung in einem Leiter induziert wird, wenn sich der magnetische Fluss durch die vom Leiter umschlossene Fläche ändert.</p>
      <p>Die induzierte Spannung ist proportional zur Änderungsrate des magnetischen Flusses: U_ind = -dΦ/dt</p>
      <p>Dabei ist Φ = B·A·cos(α) der magnetische Fluss, mit B als magnetische Flussdichte, A als Fläche und α als Winkel zwischen der Flächennormalen und der Richtung des Magnetfelds.</p>
      <h5>Lenzsche Regel</h5>
      <p>Die Lenzsche Regel ergänzt das Induktionsgesetz und besagt, dass der induzierte Strom immer so gerichtet ist, dass er der Ursache seiner Entstehung entgegenwirkt. Dies erklärt das negative Vorzeichen im Induktionsgesetz.</p>
      <p>Wird beispielsweise ein Magnet in eine Spule hineinbewegt, entsteht ein induzierter Strom, der ein Magnetfeld erzeugt, das dem Hineinbewegen des Magneten entgegenwirkt.</p>
      <h5>Induktionsmethoden</h5>
      <p>Es gibt verschiedene Methoden, um eine Spannung zu induzieren:</p>
      <ul>
        <li>Bewegungsinduktion: Ein Leiter bewegt sich durch ein stationäres Magnetfeld</li>
        <li>Transformatorinduktion: Ein sich zeitlich änderndes Magnetfeld induziert eine Spannung in einem stationären Leiter</li>
        <li>Selbstinduktion: Ein sich ändernder Strom in einer Spule induziert eine Spannung in derselben Spule</li>
      </ul>
      <h5>Anwendungen</h5>
      <p>Die elektromagnetische Induktion hat zahlreiche praktische Anwendungen:</p>
      <ul>
        <li>Generatoren zur Stromerzeugung</li>
        <li>Transformatoren zur Spannungstransformation</li>
        <li>Induktionsherde</li>
        <li>Elektromotoren (als Umkehrung des Generatorprinzips)</li>
        <li>Induktive Sensoren</li>
      </ul>
    "#,
        examples: r#"
      <div class="example-box">
        <h6>Beispiel 1: Generator</h6>
        <p>Eine Spule mit 500 Windungen und einer Fläche von 0,01 m² rotiert mit einer Frequenz von 50 Hz in einem homogenen Magnetfeld mit B = 0,5 T. Die maximale induzierte Spannung beträgt U_max = N·B·A·2π·f = 500 · 0,5 T · 0,01 m² · 2π · 50 Hz ≈ 785 V.</p>
      </div>
      <div class="example-box">
        <h6>Beispiel 2: Transformator</h6>
        <p>Ein Transformator hat eine Primärspule mit 1000 Windungen und eine Sekundärspule mit 100 Windungen. Wird an der Primärseite eine Spannung von 230 V angelegt, beträgt die Sekundärspannung U_sek = U_prim · (N_sek / N_prim) = 230 V · (100 / 1000) = 23 V.</p>
      </div>
      <div class="example-box">
        <h6>Beispiel 3: Induktiver Sensor</h6>
        <p>Induktive Sensoren nutzen das Prinzip der elektromagnetischen Induktion, um die Anwesenheit von metallischen Objekten zu detektieren. Nähert sich ein Metall dem Sensor, ändert sich die Induktivität einer Spule, was als Signal erfasst werden kann.</p>
      </div>
    "#,
        related_formulas: &["faraday-law", "magnetic-flux"],
        related_topics: &["elektrische-feld", "magnetische-feld", "schwingungen"],
    },
    // Schwingungen
    TopicArticle {
        id: "schwingungen",
        name: "Schwingungen",
        category: Category::Mechanics,
        level: None,
        short_description: "Schwingungen sind periodische Bewegungen um eine Gleichgewichtslage, \
            die in vielen Bereichen der Physik eine zentrale Rolle spielen.",
        introduction: "Schwingungen sind allgegenwärtig in der Natur und Technik - von der \
            Bewegung eines Pendels über Schallwellen bis hin zu elektromagnetischen Wellen. Das \
            Verständnis von Schwingungsphänomenen bildet eine Grundlage für viele Bereiche der \
            Physik.",
        explanation: r#"
      <h5>Grundbegriffe der Schwingungslehre</h5>
      <p>Eine Schwingung ist eine zeitlich periodische Bewegung eines Systems um eine Gleichgewichtslage. Wichtige Größen sind:</p>
      <ul>
        <li>Amplitude A: Maximale Auslenkung aus der Ruhelage</li>
        <li>Frequenz f: Anzahl der Schwingungen pro Zeiteinheit (in Hz = 1/s)</li>
        <li>Periode T: Dauer einer vollständigen Schwingung (T = 1/f)</li>
        <li>Kreisfrequenz ω: ω = 2π·f = 2π/T</li>
        <li>Phase φ: Momentane Position im Schwingungszyklus</li>
      </ul>
      <h5>Harmonische Schwingung</h5>
      <p>Die einfachste Form der Schwingung ist die harmonische Schwingung, die durch eine Sinusfunktion beschrieben wird:</p>
      <p>x(t) = A·sin(ω·t + φ₀)</p>
      <p>Bei einer harmonischen Schwingung ist die rücktreibende Kraft proportional zur Auslenkung (Hooksches Gesetz): F = -k·x</p>
      <p>Die Differentialgleichung der harmonischen Schwingung lautet: ẍ + ω²·x = 0, mit ω² = k/m für eine Federschwingung.</p>
      <h5>Gedämpfte Schwingungen</h5>
      <p>In realen Systemen tritt oft eine Dämpfung auf, die die Amplitude mit der Zeit abnehmen lässt. Die Bewegungsgleichung einer gedämpften Schwingung ist:</p>
      <p>ẍ + 2δ·ẋ + ω₀²·x = 0</p>
      <p>Dabei ist δ der Dämpfungskoeffizient und ω₀ die Eigenkreisfrequenz des ungedämpften Systems.</p>
      <h5>Erzwungene Schwingungen und Resonanz</h5>
      <p>Wird ein schwingungsfähiges System durch eine externe periodische Kraft angeregt, spricht man von erzwungenen Schwingungen. Die Differentialgleichung lautet:</p>
      <p>ẍ + 2δ·ẋ + ω₀²·x = F₀/m·cos(ω·t)</p>
      <p>Resonanz tritt auf, wenn die Anregungsfrequenz ω nahe der Eigenfrequenz ω₀ des Systems liegt. In diesem Fall kann die Amplitude sehr groß werden.</p>
      <h5>Gekoppelte Schwingungen</h5>
      <p>Wenn zwei oder mehr schwingungsfähige Systeme miteinander verbunden sind, können sie Energie austauschen und komplexe Schwingungsmuster zeigen. Diese gekoppelten Schwingungen sind wichtig für das Verständnis vieler physikalischer Phänomene, von Molekülschwingungen bis hin zu elektrischen Schaltkreisen.</p>
    "#,
        examples: r#"
      <div class="example-box">
        <h6>Beispiel 1: Federpendel</h6>
        <p>Ein Körper der Masse 0,5 kg ist an einer Feder mit der Federkonstante 20 N/m befestigt. Die Frequenz der harmonischen Schwingung beträgt f = (1/2π)·√(k/m) = (1/2π)·√(20 N/m / 0,5 kg) ≈ 1 Hz.</p>
      </div>
      <div class="example-box">
        <h6>Beispiel 2: Mathematisches Pendel</h6>
        <p>Für kleine Auslenkungen schwingt ein mathematisches Pendel der Länge 1 m harmonisch mit der Frequenz f = (1/2π)·√(g/l) = (1/2π)·√(9,81 m/s² / 1 m) ≈ 0,5 Hz.</p>
      </div>
      <div class="example-box">
        <h6>Beispiel 3: Resonanzkatastrophe</h6>
        <p>Die Tacoma-Narrows-Brücke, die 1940 einstürzte, ist ein berühmtes Beispiel für Resonanz. Windstöße regten die Brücke mit einer Frequenz nahe ihrer Eigenfrequenz an, was zu immer größeren Schwingungsamplituden und schließlich zum Einsturz führte.</p>
      </div>
    "#,
        related_formulas: &["harmonic-oscillation", "pendulum-period"],
        related_topics: &["elektromagnetische-induktion", "wellen", "resonanz"],
    },
    // Newtonsche Gesetze
    TopicArticle {
        id: "newton",
        name: "Newtonsche Gesetze",
        category: Category::Mechanics,
        level: None,
        short_description: "Die drei Newtonschen Gesetze bilden die Grundlage der klassischen \
            Mechanik und beschreiben die Bewegung von Körpern unter dem Einfluss von Kräften.",
        introduction: "Die Newtonschen Gesetze, benannt nach Sir Isaac Newton, bilden das \
            Fundament der klassischen Mechanik. Sie beschreiben, wie Körper auf Kräfte reagieren \
            und miteinander interagieren.",
        explanation: r#"
      <h5>1. Newtonsches Gesetz (Trägheitsgesetz)</h5>
      <p>Ein Körper verharrt im Zustand der Ruhe oder der gleichförmigen Bewegung, solange keine Kraft auf ihn einwirkt, die diesen Zustand ändert.</p>
      <p>Mathematisch ausgedrückt: Wenn die Summe aller Kräfte gleich Null ist (ΣF = 0), dann ist die Beschleunigung auch Null (a = 0).</p>
      <h5>2. Newtonsches Gesetz (Kraftgesetz)</h5>
      <p>Die Änderung der Bewegung ist der Einwirkung der bewegenden Kraft proportional und erfolgt in Richtung derjenigen geraden Linie, in welcher jene Kraft wirkt.</p>
      <p>Mathematisch ausgedrückt: F = m·a, wobei F die Kraft, m die Masse und a die Beschleunigung ist.</p>
      <h5>3. Newtonsches Gesetz (Wechselwirkungsgesetz)</h5>
      <p>Kräfte treten immer paarweise auf. Übt ein Körper A auf einen anderen Körper B eine Kraft aus (Actio), so wirkt eine gleich große, aber entgegengerichtete Kraft von Körper B auf Körper A (Reactio).</p>
      <p>Mathematisch ausgedrückt: F_AB = -F_BA</p>
    "#,
        examples: r#"
      <div class="example-box">
        <h6>Beispiel zum 1. Newtonschen Gesetz:</h6>
        <p>Ein Ball, der auf einer reibungsfreien Oberfläche rollt, würde ohne Einwirkung externer Kräfte für immer mit konstanter Geschwindigkeit weiterrollen.</p>
      </div>
      <div class="example-box">
        <h6>Beispiel zum 2. Newtonschen Gesetz:</h6>
        <p>Wenn eine Kraft von 20 N auf einen Körper mit einer Masse von 4 kg wirkt, erfährt dieser eine Beschleunigung von a = F/m = 20 N / 4 kg = 5 m/s².</p>
      </div>
      <div class="example-box">
        <h6>Beispiel zum 3. Newtonschen Gesetz:</h6>
        <p>Wenn du gegen eine Wand drückst, drückt die Wand mit der gleichen Kraft zurück. Deshalb spürst du einen Widerstand.</p>
      </div>
    "#,
        related_formulas: &["newton-second-law", "momentum"],
        related_topics: &["momentum-conservation", "frictionless-motion"],
    },
    // Ohmsches Gesetz
    TopicArticle {
        id: "ohm",
        name: "Ohmsches Gesetz",
        category: Category::Electricity,
        level: None,
        short_description: "Das Ohmsche Gesetz beschreibt den Zusammenhang zwischen elektrischer \
            Spannung, Stromstärke und Widerstand in einem elektrischen Stromkreis.",
        introduction: "Das Ohmsche Gesetz, benannt nach dem deutschen Physiker Georg Simon Ohm, \
            beschreibt eine der grundlegendsten Beziehungen in der Elektrizitätslehre und ist \
            essentiell für das Verständnis elektrischer Schaltkreise.",
        explanation: r#"
      <p>Das Ohmsche Gesetz besagt, dass die Stromstärke I durch einen elektrischen Leiter direkt proportional zur angelegten Spannung U und umgekehrt proportional zum elektrischen Widerstand R ist.</p>
      <p>Mathematisch wird dies durch die Formel U = R·I ausgedrückt. Diese kann auch umgestellt werden zu:</p>
      <ul>
        <li>I = U/R (Stromstärke)</li>
        <li>R = U/I (Widerstand)</li>
      </ul>
      <p>Der elektrische Widerstand R ist eine Materialeigenschaft und wird in der Einheit Ohm (Ω) gemessen. Er beschreibt, wie stark ein Material dem Fluss elektrischer Ladung entgegenwirkt.</p>
      <p>Das Ohmsche Gesetz gilt allerdings nur für bestimmte Materialien, sogenannte "Ohmsche Leiter" (wie die meisten Metalle bei konstanter Temperatur). Bei anderen Materialien oder unter bestimmten Bedingungen (z.B. bei Halbleitern oder bei sehr hohen Spannungen) kann die Beziehung zwischen Strom und Spannung nichtlinear sein.</p>
    "#,
        examples: r#"
      <div class="example-box">
        <h6>Beispiel 1: Berechnung der Stromstärke</h6>
        <p>An einem Widerstand von 220 Ω liegt eine Spannung von 11 V an. Wie groß ist die Stromstärke?</p>
        <p>Lösung: I = U/R = 11 V / 220 Ω = 0,05 A = 50 mA</p>
      </div>
      <div class="example-box">
        <h6>Beispiel 2: Berechnung des Widerstands</h6>
        <p>Durch einen elektrischen Leiter fließt bei einer Spannung von 230 V ein Strom von 2 A. Wie groß ist der Widerstand des Leiters?</p>
        <p>Lösung: R = U/I = 230 V / 2 A = 115 Ω</p>
      </div>
      <div class="example-box">
        <h6>Beispiel 3: Berechnung der Spannung</h6>
        <p>Ein Stromkreis enthält einen Widerstand von 1000 Ω und es fließt ein Strom von 0,5 A. Welche Spannung liegt an?</p>
        <p>Lösung: U = R·I = 1000 Ω · 0,5 A = 500 V</p>
      </div>
    "#,
        related_formulas: &["ohms-law", "electrical-power"],
        related_topics: &["electrical-circuits", "resistors-in-series-parallel"],
    },
    // Thermodynamische Hauptsätze
    TopicArticle {
        id: "thermo",
        name: "Thermodynamische Hauptsätze",
        category: Category::Thermodynamics,
        level: None,
        short_description: "Die Hauptsätze der Thermodynamik beschreiben die grundlegenden \
            Prinzipien der Wärmelehre und definieren die Begriffe Energie, Entropie und \
            Temperatur.",
        introduction: "Die Thermodynamik ist ein Teilgebiet der Physik, das sich mit Energie, \
            Wärme und ihrer Umwandlung beschäftigt. Die thermodynamischen Hauptsätze sind \
            fundamentale Naturgesetze, die grundlegende Prinzipien der Energieerhaltung und \
            -umwandlung festlegen.",
        explanation: r#"
      <h5>0. Hauptsatz (Thermisches Gleichgewicht)</h5>
      <p>Wenn zwei Systeme jeweils im thermischen Gleichgewicht mit einem dritten System stehen, dann stehen sie auch untereinander im thermischen Gleichgewicht.</p>
      <p>Dieser Satz führt zum Begriff der Temperatur: Zwei Körper haben genau dann die gleiche Temperatur, wenn sie im thermischen Gleichgewicht miteinander stehen.</p>
      <h5>1. Hauptsatz (Energieerhaltung)</h5>
      <p>Energie kann weder erzeugt noch vernichtet werden – sie kann nur von einer Form in eine andere umgewandelt werden.</p>
      <p>Für ein thermodynamisches System bedeutet dies: Die Änderung der inneren Energie ΔU eines Systems ist gleich der Summe aus zugeführter Wärme Q und verrichteter Arbeit W.</p>
      <p>Mathematisch: ΔU = Q + W</p>
      <h5>2. Hauptsatz (Entropie und Irreversibilität)</h5>
      <p>Wärme fließt nicht von selbst von einem kälteren zu einem wärmeren Körper. Die Entropie S eines abgeschlossenen Systems nimmt bei irreversiblen Prozessen zu und bleibt bei reversiblen Prozessen konstant.</p>
      <p>Dies bedeutet auch: Kein Prozess ist möglich, dessen einziges Ergebnis die vollständige Umwandlung von Wärme in Arbeit ist (Unmöglichkeit eines Perpetuum mobile zweiter Art).</p>
      <h5>3. Hauptsatz (Unerreichbarkeit des absoluten Nullpunkts)</h5>
      <p>Der absolute Nullpunkt der Temperatur (0 Kelvin oder -273,15°C) kann durch keinen physikalischen Prozess vollständig erreicht werden.</p>
    "#,
        examples: r#"
      <div class="example-box">
        <h6>Beispiel zum 1. Hauptsatz:</h6>
        <p>Wenn ein Gas in einem Zylinder komprimiert wird, steigt seine Temperatur, weil mechanische Arbeit in innere Energie (Wärme) umgewandelt wird.</p>
      </div>
      <div class="example-box">
        <h6>Beispiel zum 2. Hauptsatz:</h6>
        <p>Ein Eiswürfel in einem Glas Wasser schmilzt und kühlt das Wasser ab, bis ein Temperaturausgleich erreicht ist. Der umgekehrte Prozess - dass sich spontan aus lauwarmen Wasser ein Eiswürfel bildet und das restliche Wasser wärmer wird - ist nach dem 2. Hauptsatz unmöglich.</p>
      </div>
      <div class="example-box">
        <h6>Beispiel zum 3. Hauptsatz:</h6>
        <p>Mit modernen Kühltechniken können Temperaturen bis zu wenigen Mikro- oder sogar Nanokelvin erreicht werden, aber nie exakt 0 Kelvin.</p>
      </div>
    "#,
        related_formulas: &["entropy-change", "heat-transfer"],
        related_topics: &["heat-engines", "entropy", "thermal-energy"],
    },
];
