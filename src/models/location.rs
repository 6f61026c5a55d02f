//! Location area models
//!
//! Shapes of `GET /location-area/` (paginated list) and `GET /location-area/{name}`.

use serde::Deserialize;

/// A `{ name, url }` reference to another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One page of location areas.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas
    #[serde(default)]
    pub count: u32,
    /// URL of the next page, absent on the last page
    pub next: Option<String>,
    /// URL of the previous page, absent on the first page
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// A single location area and the Pokemon that can be met there.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocationArea {
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

impl LocationAreaPage {
    /// Decodes a page from a raw response body.
    pub fn from_slice(data: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(data)
    }
}

impl LocationArea {
    /// Decodes a location area from a raw response body.
    pub fn from_slice(data: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_deserialize() {
        let json = br#"{
            "count": 1089,
            "next": "https://pokeapi.co/api/v2/location-area/?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"},
                {"name": "eterna-city-area", "url": "https://pokeapi.co/api/v2/location-area/2/"}
            ]
        }"#;

        let page = LocationAreaPage::from_slice(json).unwrap();
        assert_eq!(page.count, 1089);
        assert!(page.next.is_some());
        assert!(page.previous.is_none());
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].name, "canalave-city-area");
    }

    #[test]
    fn test_location_area_ignores_unknown_fields() {
        let json = br#"{
            "id": 1,
            "name": "canalave-city-area",
            "game_index": 1,
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "https://pokeapi.co/api/v2/pokemon/72/"}, "version_details": []}
            ]
        }"#;

        let area = LocationArea::from_slice(json).unwrap();
        assert_eq!(area.name, "canalave-city-area");
        assert_eq!(area.pokemon_encounters[0].pokemon.name, "tentacool");
    }

    #[test]
    fn test_location_area_rejects_garbage() {
        assert!(LocationArea::from_slice(b"<html>not json</html>").is_err());
    }
}
