//! Closed registry of lookup functions the country agent may call.
//!
//! The remote model decides if, when and how often to call these. Each entry
//! has a fixed wire name and a single required `country_name` argument, and
//! dispatch is a plain `match`.

use super::table::{CountryField, CountryTable};
use crate::core::error::DomainError;
use crate::tool::entities::ToolCall;

/// Name of the single argument every lookup function takes
pub const COUNTRY_NAME_ARG: &str = "country_name";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupFunction {
    GetCountryCapital,
    GetCountryLanguage,
    GetCountryPopulation,
}

impl LookupFunction {
    pub const ALL: [LookupFunction; 3] = [
        LookupFunction::GetCountryCapital,
        LookupFunction::GetCountryLanguage,
        LookupFunction::GetCountryPopulation,
    ];

    /// Function name as declared to the model
    pub fn name(&self) -> &'static str {
        match self {
            LookupFunction::GetCountryCapital => "get_country_capital",
            LookupFunction::GetCountryLanguage => "get_country_language",
            LookupFunction::GetCountryPopulation => "get_country_population",
        }
    }

    /// Natural-language description the model plans with
    pub fn description(&self) -> &'static str {
        match self {
            LookupFunction::GetCountryCapital => {
                "Provides the capital city of a given country. Returns an error message if the country is not found."
            }
            LookupFunction::GetCountryLanguage => {
                "Provides the official language(s) of a given country. Returns an error message if the country is not found."
            }
            LookupFunction::GetCountryPopulation => {
                "Provides the approximate population of a given country. Returns an error message if the country is not found."
            }
        }
    }

    /// Description of the `country_name` argument
    pub fn argument_description(&self) -> &'static str {
        "The name of the country (e.g., \"France\", \"Japan\")."
    }

    /// The table field this function reads
    pub fn field(&self) -> CountryField {
        match self {
            LookupFunction::GetCountryCapital => CountryField::Capital,
            LookupFunction::GetCountryLanguage => CountryField::Language,
            LookupFunction::GetCountryPopulation => CountryField::Population,
        }
    }

    /// Resolve a function name requested by the model
    pub fn from_name(name: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == name)
            .ok_or_else(|| DomainError::UnknownFunction(name.to_string()))
    }

    /// Resolve a model request to a function and its `country_name` argument
    pub fn resolve_call(call: &ToolCall) -> Result<(Self, &str), DomainError> {
        let function = Self::from_name(&call.tool_name)?;
        let country = call
            .get_string(COUNTRY_NAME_ARG)
            .ok_or_else(|| DomainError::MissingArgument {
                function: call.tool_name.clone(),
                argument: COUNTRY_NAME_ARG.to_string(),
            })?;
        Ok((function, country))
    }

    /// Run the lookup. Pure; misses produce the sentinel string.
    pub fn invoke(&self, country_name: &str) -> String {
        CountryTable::field(country_name, self.field())
    }
}

impl std::fmt::Display for LookupFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_roundtrip() {
        for function in LookupFunction::ALL {
            assert_eq!(LookupFunction::from_name(function.name()).unwrap(), function);
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            LookupFunction::from_name("get_country_currency"),
            Err(DomainError::UnknownFunction("get_country_currency".to_string()))
        );
        // Names are exact, not case-insensitive
        assert!(LookupFunction::from_name("GET_COUNTRY_CAPITAL").is_err());
    }

    #[test]
    fn test_invoke_dispatches_to_field() {
        assert_eq!(LookupFunction::GetCountryCapital.invoke("Germany"), "Berlin");
        assert_eq!(LookupFunction::GetCountryLanguage.invoke("pakistan"), "Urdu, English");
        assert_eq!(LookupFunction::GetCountryPopulation.invoke("CHINA"), "1.4 billion");
    }

    #[test]
    fn test_resolve_call() {
        let call = ToolCall::new("get_country_language").with_arg(COUNTRY_NAME_ARG, "India");
        let (function, country) = LookupFunction::resolve_call(&call).unwrap();
        assert_eq!(function, LookupFunction::GetCountryLanguage);
        assert_eq!(function.invoke(country), "Hindi, English");
    }

    #[test]
    fn test_resolve_call_missing_argument() {
        let call = ToolCall::new("get_country_capital").with_arg("country", "India");
        assert_eq!(
            LookupFunction::resolve_call(&call),
            Err(DomainError::MissingArgument {
                function: "get_country_capital".to_string(),
                argument: "country_name".to_string(),
            })
        );
    }

    #[test]
    fn test_invoke_miss() {
        assert_eq!(
            LookupFunction::GetCountryPopulation.invoke("Mordor"),
            "Population for Mordor not found."
        );
    }
}
