//! The three agent flows and their console texts

use handoff_domain::CountryTable;

/// Which agent flow a loop drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    Country,
    Mood,
    Product,
}

impl Flow {
    /// Lines printed once when the loop starts
    pub fn welcome(&self) -> Vec<String> {
        match self {
            Flow::Country => vec![
                "🌎  Welcome to the Country Info Bot!".to_string(),
                format!(
                    "Available countries: {}",
                    CountryTable::known_countries().join(", ")
                ),
            ],
            Flow::Mood => vec!["Welcome to the Mood Analyzer with Handoff!".to_string()],
            Flow::Product => vec!["Smart Store Agent".to_string()],
        }
    }

    /// Input prompt
    pub fn prompt(&self) -> &'static str {
        match self {
            Flow::Country => "Enter a country name (or 'exit' to quit): ",
            Flow::Mood => "How are you feeling today? (Type 'exit' to quit): ",
            Flow::Product => "Need help finding a product? (type 'exit' to quit): ",
        }
    }

    /// Line printed after every answer
    pub fn separator(&self) -> String {
        let width = match self {
            Flow::Country | Flow::Mood => 50,
            Flow::Product => 30,
        };
        "-".repeat(width)
    }
}

impl std::fmt::Display for Flow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Flow::Country => "country",
            Flow::Mood => "mood",
            Flow::Product => "product",
        })
    }
}
