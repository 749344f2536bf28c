//! Document payload fixtures shared by factories and unit tests.

use serde_json::{json, Value};

/// Collection holding topic documents.
pub const TOPICS: &str = "topics";

/// Collection holding mission documents.
pub const MISSIONS: &str = "missions";

/// Collection holding country documents.
pub const COUNTRIES: &str = "countries";

/// Collection holding prayer request documents.
pub const PRAYER_REQUESTS: &str = "prayer-requests";

/// Default theme for topic documents.
pub const DEFAULT_THEME: &str = "Test Theme";

/// Default country for mission documents.
pub const DEFAULT_MISSION_COUNTRY: &str = "Chile";

/// Builds a topic element as stored inside the `elements` array.
pub fn element(id: &str, text: &str, pic: &str) -> Value {
    json!({ "id": id, "text": text, "pic": pic })
}

/// Builds a mission city as stored inside the `cities` array.
pub fn city(order: &str, place: &str, map: &str, photo: &str) -> Value {
    json!({ "order": order, "place": place, "map": map, "photo": photo })
}

/// Builds the stored body of a topic document.
pub fn topic_data(theme: &str, elements: Vec<Value>) -> Value {
    json!({ "theme": theme, "elements": elements })
}

/// Builds the stored body of a mission document.
pub fn mission_data(country: &str, cities: Vec<Value>) -> Value {
    json!({ "country": country, "cities": cities })
}

/// Builds the stored body of a country document with every required field filled in.
///
/// # Default Values
/// - continents: `["South America"]`
/// - flags: `["https://flagcdn.com/<id>.svg"]`
/// - capital: `"Santiago"`
/// - geopoint: `-33.4489, -70.6693`
/// - region: `"Americas"`
pub fn country_data(id: &str, name: &str) -> Value {
    json!({
        "name": name,
        "continents": ["South America"],
        "flags": [format!("https://flagcdn.com/{}.svg", id)],
        "capital": "Santiago",
        "geopoint": { "latitude": -33.4489, "longitude": -70.6693 },
        "geographical_division": "16 regions",
        "region": "Americas",
        "population": 19116201
    })
}

/// Builds the stored body of a prayer request document.
pub fn prayer_request_data(requester: Option<&str>, title: &str, description: &str) -> Value {
    let mut data = json!({ "title": title, "description": description });
    if let Some(requester) = requester {
        data["requester"] = Value::String(requester.to_string());
    }
    data
}
