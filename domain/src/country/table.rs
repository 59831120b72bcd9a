//! Static country fact table

use serde::{Deserialize, Serialize};

/// Facts stored for one country
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryFact {
    /// Lowercased lookup key
    pub key: &'static str,
    pub capital: &'static str,
    pub language: &'static str,
    pub population: &'static str,
}

const COUNTRY_DATA: &[CountryFact] = &[
    CountryFact {
        key: "france",
        capital: "Paris",
        language: "French",
        population: "65 million",
    },
    CountryFact {
        key: "germany",
        capital: "Berlin",
        language: "German",
        population: "83 million",
    },
    CountryFact {
        key: "japan",
        capital: "Tokyo",
        language: "Japanese",
        population: "125 million",
    },
    CountryFact {
        key: "india",
        capital: "New Delhi",
        language: "Hindi, English",
        population: "1.4 billion",
    },
    CountryFact {
        key: "usa",
        capital: "Washington D.C.",
        language: "English",
        population: "330 million",
    },
    CountryFact {
        key: "pakistan",
        capital: "Islamabad",
        language: "Urdu, English",
        population: "240 million",
    },
    CountryFact {
        key: "china",
        capital: "Beijing",
        language: "Mandarin",
        population: "1.4 billion",
    },
];

/// One field of a [`CountryFact`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountryField {
    Capital,
    Language,
    Population,
}

impl CountryField {
    pub const ALL: [CountryField; 3] = [
        CountryField::Capital,
        CountryField::Language,
        CountryField::Population,
    ];

    /// Capitalized name used in the miss sentinel
    pub fn title(&self) -> &'static str {
        match self {
            CountryField::Capital => "Capital",
            CountryField::Language => "Language",
            CountryField::Population => "Population",
        }
    }

    fn read(&self, fact: &CountryFact) -> &'static str {
        match self {
            CountryField::Capital => fact.capital,
            CountryField::Language => fact.language,
            CountryField::Population => fact.population,
        }
    }

    /// The string returned when a country is missing from the table.
    ///
    /// Uses the caller's original casing, e.g. `Capital for Narnia not found.`
    pub fn not_found(&self, country_name: &str) -> String {
        format!("{} for {} not found.", self.title(), country_name)
    }
}

impl std::fmt::Display for CountryField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            CountryField::Capital => "capital",
            CountryField::Language => "language",
            CountryField::Population => "population",
        })
    }
}

/// All three fields for one country, each resolved independently
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryReport {
    pub country: String,
    pub capital: String,
    pub language: String,
    pub population: String,
}

impl CountryReport {
    /// Whether the country exists in the table
    pub fn is_known(&self) -> bool {
        CountryTable::lookup(&self.country).is_some()
    }
}

/// Read-only access to the static fact table.
///
/// Keys are matched after lowercasing the caller's input; no other
/// normalization (trimming, aliasing) is applied.
pub struct CountryTable;

impl CountryTable {
    /// Find the record for a country name (case-insensitive)
    pub fn lookup(country_name: &str) -> Option<&'static CountryFact> {
        let key = country_name.to_lowercase();
        COUNTRY_DATA.iter().find(|fact| fact.key == key)
    }

    /// Resolve a single field, falling back to the miss sentinel
    pub fn field(country_name: &str, field: CountryField) -> String {
        match Self::lookup(country_name) {
            Some(fact) => field.read(fact).to_string(),
            None => field.not_found(country_name),
        }
    }

    pub fn capital(country_name: &str) -> String {
        Self::field(country_name, CountryField::Capital)
    }

    pub fn language(country_name: &str) -> String {
        Self::field(country_name, CountryField::Language)
    }

    pub fn population(country_name: &str) -> String {
        Self::field(country_name, CountryField::Population)
    }

    /// All three fields at once (used by the offline `lookup` command)
    pub fn report(country_name: &str) -> CountryReport {
        CountryReport {
            country: country_name.to_string(),
            capital: Self::capital(country_name),
            language: Self::language(country_name),
            population: Self::population(country_name),
        }
    }

    /// Display names of every country in the table, in table order
    pub fn known_countries() -> Vec<String> {
        COUNTRY_DATA
            .iter()
            .map(|fact| match fact.key {
                "usa" => "USA".to_string(),
                key => {
                    let mut chars = key.chars();
                    match chars.next() {
                        Some(first) => first.to_uppercase().chain(chars).collect(),
                        None => String::new(),
                    }
                }
            })
            .collect()
    }

    pub fn len() -> usize {
        COUNTRY_DATA.len()
    }
}
