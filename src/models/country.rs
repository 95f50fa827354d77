//! Country data model mirroring the restcountries.com v3.1 JSON shape.

use serde::{Deserialize, Serialize};
use thousands::Separable;

/// The nested `name` object of a country record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CountryName {
    /// Common display name. Serves as both the list label and the
    /// navigation key, percent-encoded on the way into a route.
    pub common: String,
}

/// The nested `flags` object of a country record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Flags {
    /// URL of the PNG rendition of the flag.
    #[serde(default)]
    pub png: String,
}

/// A country as returned by the reference API.
///
/// The source dataset is trusted to keep `cca3` (and in practice the common
/// name) unique within one fetch, so either can serve as a list key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Country {
    /// Country names; `name.common` is the display name
    pub name: CountryName,
    /// Capital cities; usually a single entry, sometimes absent
    #[serde(default)]
    pub capital: Vec<String>,
    /// Geographic region (e.g. "Europe")
    #[serde(default)]
    pub region: String,
    /// Population count
    #[serde(default)]
    pub population: u64,
    /// Flag image URLs
    #[serde(default)]
    pub flags: Flags,
    /// ISO 3166-1 alpha-3 code, used as the stable list key
    #[serde(default)]
    pub cca3: String,
}

impl Country {
    /// First capital city, or "N/A" when the record carries none.
    pub fn capital_display(&self) -> &str {
        self.capital.first().map(String::as_str).unwrap_or("N/A")
    }

    /// Population with thousands separators (e.g. "1,234,567").
    pub fn population_display(&self) -> String {
        self.population.separate_with_commas()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "name": { "common": "Norway", "official": "Kingdom of Norway" },
        "capital": ["Oslo"],
        "region": "Europe",
        "population": 5379475,
        "flags": { "png": "https://flagcdn.com/w320/no.png", "svg": "https://flagcdn.com/no.svg" },
        "cca3": "NOR"
    }"#;

    #[test]
    fn parses_restcountries_record() {
        let country: Country = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(country.name.common, "Norway");
        assert_eq!(country.capital_display(), "Oslo");
        assert_eq!(country.region, "Europe");
        assert_eq!(country.population, 5379475);
        assert_eq!(country.flags.png, "https://flagcdn.com/w320/no.png");
        assert_eq!(country.cca3, "NOR");
    }

    #[test]
    fn missing_capital_displays_na() {
        let country: Country = serde_json::from_str(
            r#"{ "name": { "common": "Antarctica" }, "cca3": "ATA" }"#,
        )
        .unwrap();
        assert_eq!(country.capital_display(), "N/A");
        assert_eq!(country.population, 0);
    }

    #[test]
    fn population_display_uses_separators() {
        let country = Country {
            name: CountryName {
                common: "Testland".to_string(),
            },
            capital: vec![],
            region: String::new(),
            population: 1234567,
            flags: Flags::default(),
            cca3: "TST".to_string(),
        };
        assert_eq!(country.population_display(), "1,234,567");
    }
}
