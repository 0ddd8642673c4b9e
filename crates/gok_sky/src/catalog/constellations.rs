//! Constellation stick figures.

use gok_frames::EquatorialCoords;

/// J2000 catalog position of a star: RA in hours, Dec in degrees.
pub type StarCoordinate = EquatorialCoords;

/// A named stick figure: ordered line segments between catalog stars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstellationCatalogEntry {
    pub name: &'static str,
    pub lines: &'static [(StarCoordinate, StarCoordinate)],
}

const fn star(ra_hours: f64, dec_deg: f64) -> StarCoordinate {
    EquatorialCoords::new(ra_hours, dec_deg)
}

// Ursa Major
const DUBHE: StarCoordinate = star(11.06, 61.75);
const MERAK: StarCoordinate = star(11.03, 56.38);
const PHECDA: StarCoordinate = star(11.89, 53.69);
const MEGREZ: StarCoordinate = star(12.25, 57.03);
const ALIOTH: StarCoordinate = star(12.90, 55.95);
const MIZAR: StarCoordinate = star(13.39, 54.92);
const ALKAID: StarCoordinate = star(13.79, 49.31);

// Ursa Minor
const POLARIS: StarCoordinate = star(2.53, 89.26);
const YILDUN: StarCoordinate = star(17.54, 86.59);
const EPSILON_UMI: StarCoordinate = star(16.77, 82.04);
const ZETA_UMI: StarCoordinate = star(15.73, 77.79);
const KOCHAB: StarCoordinate = star(14.85, 74.16);
const PHERKAD: StarCoordinate = star(15.35, 71.83);
const ETA_UMI: StarCoordinate = star(16.29, 75.76);

// Cassiopeia
const CAPH: StarCoordinate = star(0.15, 59.15);
const SCHEDAR: StarCoordinate = star(0.67, 56.53);
const GAMMA_CAS: StarCoordinate = star(0.93, 60.71);
const RUCHBAH: StarCoordinate = star(1.43, 60.23);
const SEGIN: StarCoordinate = star(1.90, 63.67);

// Orion
const BETELGEUSE: StarCoordinate = star(5.91, 7.40);
const BELLATRIX: StarCoordinate = star(5.41, 6.34);
const ALNITAK: StarCoordinate = star(5.67, -1.94);
const ALNILAM: StarCoordinate = star(5.60, -1.20);
const MINTAKA: StarCoordinate = star(5.53, -0.29);
const RIGEL: StarCoordinate = star(5.24, -8.20);
const SAIPH: StarCoordinate = star(5.79, -9.66);

// Lyra
const VEGA: StarCoordinate = star(18.61, 38.78);
const SULAFAT: StarCoordinate = star(18.83, 32.68);
const SHELIAK: StarCoordinate = star(18.99, 32.55);
const DELTA_LYR: StarCoordinate = star(19.28, 37.60);

// Cygnus
const DENEB: StarCoordinate = star(20.69, 45.28);
const SADR: StarCoordinate = star(20.37, 40.26);
const ALBIREO: StarCoordinate = star(19.51, 27.96);
const DELTA_CYG: StarCoordinate = star(19.75, 45.12);
const GIENAH: StarCoordinate = star(20.77, 33.97);

// Leo
const REGULUS: StarCoordinate = star(10.14, 11.97);
const ETA_LEO: StarCoordinate = star(10.12, 16.76);
const ALGIEBA: StarCoordinate = star(10.33, 19.84);
const ADHAFERA: StarCoordinate = star(10.28, 23.42);
const RASALAS: StarCoordinate = star(9.88, 26.01);
const ALGENUBI: StarCoordinate = star(9.76, 23.77);
const ZOSMA: StarCoordinate = star(11.24, 20.52);
const DENEBOLA: StarCoordinate = star(11.82, 14.57);
const CHERTAN: StarCoordinate = star(11.24, 15.43);

pub const CONSTELLATIONS: [ConstellationCatalogEntry; 7] = [
    ConstellationCatalogEntry {
        name: "Ursa Major (Büyük Ayı)",
        lines: &[
            // Bowl
            (DUBHE, MERAK),
            (MERAK, PHECDA),
            (PHECDA, MEGREZ),
            (MEGREZ, DUBHE),
            // Handle
            (MEGREZ, ALIOTH),
            (ALIOTH, MIZAR),
            (MIZAR, ALKAID),
        ],
    },
    ConstellationCatalogEntry {
        name: "Ursa Minor (Küçük Ayı)",
        lines: &[
            (POLARIS, YILDUN),
            (YILDUN, EPSILON_UMI),
            (EPSILON_UMI, ZETA_UMI),
            (ZETA_UMI, KOCHAB),
            (KOCHAB, PHERKAD),
            (PHERKAD, ETA_UMI),
            (ETA_UMI, ZETA_UMI),
        ],
    },
    ConstellationCatalogEntry {
        name: "Cassiopeia",
        lines: &[
            (CAPH, SCHEDAR),
            (SCHEDAR, GAMMA_CAS),
            (GAMMA_CAS, RUCHBAH),
            (RUCHBAH, SEGIN),
        ],
    },
    ConstellationCatalogEntry {
        name: "Orion (Avcı)",
        lines: &[
            (BETELGEUSE, BELLATRIX),
            (BETELGEUSE, ALNITAK),
            (RIGEL, SAIPH),
            (RIGEL, MINTAKA),
            (BELLATRIX, MINTAKA),
            (SAIPH, ALNITAK),
            // Belt
            (ALNITAK, ALNILAM),
            (ALNILAM, MINTAKA),
        ],
    },
    ConstellationCatalogEntry {
        name: "Lyra (Çalgı)",
        lines: &[
            (VEGA, SULAFAT),
            (SULAFAT, SHELIAK),
            (SHELIAK, DELTA_LYR),
            (DELTA_LYR, VEGA),
        ],
    },
    ConstellationCatalogEntry {
        name: "Cygnus (Kuğu)",
        lines: &[
            (DENEB, SADR),
            (SADR, ALBIREO),
            (SADR, DELTA_CYG),
            (SADR, GIENAH),
        ],
    },
    ConstellationCatalogEntry {
        name: "Leo (Aslan)",
        lines: &[
            // Sickle
            (REGULUS, ETA_LEO),
            (ETA_LEO, ALGIEBA),
            (ALGIEBA, ADHAFERA),
            (ADHAFERA, RASALAS),
            (RASALAS, ALGENUBI),
            // Body
            (ALGIEBA, ZOSMA),
            (ZOSMA, DENEBOLA),
            (DENEBOLA, CHERTAN),
            (CHERTAN, REGULUS),
        ],
    },
];
