//! Catálogo estático de marcas y modelos
//!
//! Este módulo contiene el catálogo de referencia marca → modelos que alimenta
//! los dropdowns del formulario. Los datos vienen del dataset con el que se
//! entrenó el modelo de precios; algunas entradas (Mercedes, BMW, Audi) llevan
//! un espacio inicial y se conservan tal cual, porque el modelo fue entrenado
//! con exactamente esos strings.

use std::collections::BTreeMap;

use lazy_static::lazy_static;

/// Tabla cruda marca → modelos, en el orden del dataset original
const RAW_CATALOG: &[(&str, &[&str])] = &[
    (
        "Ford",
        &[
            "Fiesta",
            "Focus",
            "Kuga",
            "EcoSport",
            "C-MAX",
            "Ka+",
            "Mondeo",
            "B-MAX",
            "S-MAX",
            "Galaxy",
            "Edge",
            "Puma",
            "Mustang",
            "Ka",
            "Tourneo Custom",
            "Grand C-MAX",
            "Tourneo Connect",
            "Grand Tourneo Connect",
        ],
    ),
    (
        "Volkswagen",
        &[
            "Golf",
            "Polo",
            "Tiguan",
            "Passat",
            "T-Roc",
            "Up",
            "Scirocco",
            "Touran",
            "T-Cross",
            "Touareg",
            "Golf SV",
            "Beetle",
            "Sharan",
            "Caddy Maxi Life",
            "Caravelle",
            "CC",
            "Arteon",
            "Caddy Life",
            "Amarok",
            "Tiguan Allspace",
            "Sharan",
            "Jetta",
            "Eos",
        ],
    ),
    (
        "Mercedes",
        &[
            " C Class",
            " A Class",
            " E Class",
            " GLC Class",
            " GLA Class",
            " B Class",
            " CL Class",
            " GLE Class",
            " S Class",
            " SLK",
            " CLA Class",
            " V Class",
            " M Class",
            " CLS Class",
            " GL Class",
            " SL CLASS",
            " GLS Class",
            " GLB Class",
            " X-CLASS",
            " G Class",
            " CLC Class",
            " R Class",
        ],
    ),
    (
        "BMW",
        &[
            " 3 Series",
            " 1 Series",
            " 2 Series",
            " 5 Series",
            " X1",
            " X3",
            " X5",
            " 4 Series",
            " X2",
            " X4",
            " 7 Series",
            " X6",
            " i3",
            " 8 Series",
            " Z4",
            " X7",
            " M4",
            " M5",
            " M3",
            " M2",
            " i8",
            " 6 Series",
        ],
    ),
    (
        "Audi",
        &[
            " A3", " A1", " A4", " Q3", " Q5", " A5", " Q2", " A6", " Q7", " TT", " A7", " A8",
            " Q8", " RS3", " RS4", " RS5", " RS6", " R8", " SQ5", " SQ7", " S3", " S4", " S5",
            " TTS",
        ],
    ),
    (
        "Toyota",
        &[
            "Yaris",
            "Aygo",
            "Auris",
            "C-HR",
            "RAV4",
            "Corolla",
            "Prius",
            "Avensis",
            "Verso",
            "Hilux",
            "GT86",
            "Land Cruiser",
            "Camry",
            "Supra",
            "PROACE VERSO",
            "IQ",
            "Urban Cruiser",
        ],
    ),
    (
        "Vauxhall",
        &[
            "Corsa",
            "Astra",
            "Mokka",
            "Crossland X",
            "Grandland X",
            "Zafira",
            "Insignia",
            "Adam",
            "Viva",
            "Mokka X",
            "Meriva",
            "GTC",
            "Combo Life",
            "Vivaro",
            "Antara",
            "Vectra",
            "Zafira Tourer",
            "Agila",
        ],
    ),
    (
        "Skoda",
        &[
            "Octavia", "Fabia", "Superb", "Yeti", "Kodiaq", "Karoq", "Citigo", "Rapid", "Kamiq",
            "Scala",
        ],
    ),
    (
        "Hyundai",
        &[
            "I10", "I20", "I30", "Tucson", "Santa Fe", "Ioniq", "Kona", "IX35", "I40", "I800",
        ],
    ),
    (
        "Kia",
        &[
            "Sportage", "Picanto", "Rio", "Ceed", "Optima", "Sorento", "Venga", "Soul", "Stonic",
            "Niro", "Carens",
        ],
    ),
];

lazy_static! {
    /// Catálogo indexado por marca, con los modelos ordenados y deduplicados
    static ref CATALOG: BTreeMap<&'static str, Vec<&'static str>> = {
        let mut catalog = BTreeMap::new();
        for (brand, models) in RAW_CATALOG {
            let mut models: Vec<&'static str> = models.to_vec();
            models.sort_unstable();
            models.dedup();
            catalog.insert(*brand, models);
        }
        catalog
    };
}

/// Lista ordenada de marcas disponibles
pub fn brands() -> Vec<&'static str> {
    CATALOG.keys().copied().collect()
}

/// Modelos de una marca, ordenados. `None` si la marca no existe.
pub fn models_for_brand(brand: &str) -> Option<&'static [&'static str]> {
    CATALOG.get(brand).map(|models| models.as_slice())
}

/// Verificar que un modelo pertenece a una marca del catálogo
pub fn brand_has_model(brand: &str, model: &str) -> bool {
    models_for_brand(brand)
        .map(|models| models.iter().any(|m| *m == model))
        .unwrap_or(false)
}
