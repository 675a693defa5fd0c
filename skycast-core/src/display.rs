//! Turns a raw response body into what the viewer shows: the multi-line
//! detail block and the large rounded-temperature label.

use serde_json::Value;

use crate::model::WeatherReading;

/// The two presentation strings derived from one response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherDisplay {
    /// Multi-line summary block, or the raw body when it was not
    /// recognized as a weather payload.
    pub detail_text: String,
    /// Whole-degree readout such as `19°C`; empty whenever no temperature
    /// was extracted.
    pub temp_label: String,
}

impl WeatherDisplay {
    /// Render a response body.
    ///
    /// Total over arbitrary input: anything that does not parse as a JSON
    /// object (transport failure strings, truncated payloads, plain text,
    /// the empty string) passes through verbatim as the detail text, with
    /// an empty temperature label.
    pub fn from_body(body: &str) -> Self {
        match extract_reading(body) {
            Some(reading) => Self::from_reading(&reading),
            None => Self {
                detail_text: body.to_owned(),
                temp_label: String::new(),
            },
        }
    }

    /// Render an already-extracted reading.
    pub fn from_reading(reading: &WeatherReading) -> Self {
        Self {
            detail_text: detail_text(reading),
            temp_label: temp_label(reading),
        }
    }
}

/// Extract a reading from a response body.
///
/// Returns `None` when the body does not start with `{` (after leading
/// whitespace) or does not parse as JSON; such bodies are transport
/// failure messages or payload shapes this extractor does not recognize.
/// Within a parsed object every field is independent: an absent or
/// wrong-typed value leaves that field empty without affecting the rest.
pub fn extract_reading(body: &str) -> Option<WeatherReading> {
    if !body.trim_start().starts_with('{') {
        return None;
    }
    let root: Value = serde_json::from_str(body).ok()?;
    let main = root.get("main");

    Some(WeatherReading {
        city: string_field(root.get("name")),
        country: non_empty(string_field(
            root.get("sys").and_then(|sys| sys.get("country")),
        )),
        temperature_c: number_field(main.and_then(|m| m.get("temp"))),
        feels_like_c: number_field(main.and_then(|m| m.get("feels_like"))),
        condition: string_field(first_condition(&root).and_then(|c| c.get("description"))),
        humidity_pct: number_field(main.and_then(|m| m.get("humidity"))),
        wind_speed_mps: number_field(root.get("wind").and_then(|wind| wind.get("speed"))),
    })
}

/// First entry of the `weather` conditions array, when there is one.
fn first_condition(root: &Value) -> Option<&Value> {
    root.get("weather")?.as_array()?.first()
}

/// String value with every backslash character removed; empty when the
/// value is absent or not a string.
fn string_field(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .map(|s| s.replace('\\', ""))
        .unwrap_or_default()
}

fn number_field(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64)
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

/// Fixed five-line summary. Order and labels are the compatibility
/// contract; absent fields render as empty strings in place, except the
/// country suffix on the city line, which is omitted entirely.
fn detail_text(reading: &WeatherReading) -> String {
    let city_line = match &reading.country {
        Some(country) => format!("City: {}, {country}", reading.city),
        None => format!("City: {}", reading.city),
    };
    [
        city_line,
        format!("Temperature: {} °C", number_text(reading.temperature_c)),
        format!("Weather Condition: {}", reading.condition),
        format!("Humidity: {}%", number_text(reading.humidity_pct)),
        format!("Wind Speed: {} m/s", number_text(reading.wind_speed_mps)),
    ]
    .join("\n")
}

/// `{N}°C` from the rounded temperature, or empty without one. Halfway
/// values round away from zero: `18.5` becomes `19`, `-2.5` becomes `-3`.
fn temp_label(reading: &WeatherReading) -> String {
    match reading.temperature_c {
        Some(t) => format!("{}°C", t.round() as i64),
        None => String::new(),
    }
}

/// Shortest-form rendering of an extracted number; empty when absent.
fn number_text(value: Option<f64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOLDEN: &str = r#"{"name":"London","sys":{"country":"GB"},"main":{"temp":18.5,"feels_like":17.8,"humidity":70},"weather":[{"description":"clear sky"}],"wind":{"speed":3.2}}"#;

    #[test]
    fn non_json_bodies_pass_through_verbatim() {
        for body in [
            "",
            "Failed to fetch weather data. HTTP code: 401",
            "   \n\t  ",
            "city not found",
            "[1,2,3]",
            "\"just a string\"",
        ] {
            let display = WeatherDisplay::from_body(body);
            assert_eq!(display.detail_text, body);
            assert_eq!(display.temp_label, "");
            assert!(extract_reading(body).is_none());
        }
    }

    #[test]
    fn malformed_json_object_passes_through_verbatim() {
        for body in ["{", r#"{"name":"Lon"#, "{not json at all}", "{} trailing"] {
            let display = WeatherDisplay::from_body(body);
            assert_eq!(display.detail_text, body);
            assert_eq!(display.temp_label, "");
        }
    }

    #[test]
    fn golden_payload_renders_every_line() {
        let display = WeatherDisplay::from_body(GOLDEN);
        assert_eq!(
            display.detail_text,
            "City: London, GB\n\
             Temperature: 18.5 °C\n\
             Weather Condition: clear sky\n\
             Humidity: 70%\n\
             Wind Speed: 3.2 m/s"
        );
        assert_eq!(display.temp_label, "19°C");
    }

    #[test]
    fn leading_whitespace_before_object_is_accepted() {
        let display = WeatherDisplay::from_body(&format!("  \n{GOLDEN}"));
        assert_eq!(display.temp_label, "19°C");
    }

    #[test]
    fn golden_payload_extracts_structured_reading() {
        let reading = extract_reading(GOLDEN).expect("object payload must yield a reading");
        assert_eq!(
            reading,
            WeatherReading {
                city: "London".into(),
                country: Some("GB".into()),
                temperature_c: Some(18.5),
                feels_like_c: Some(17.8),
                condition: "clear sky".into(),
                humidity_pct: Some(70.0),
                wind_speed_mps: Some(3.2),
            }
        );
    }

    #[test]
    fn feels_like_is_not_rendered() {
        let display = WeatherDisplay::from_body(GOLDEN);
        assert!(!display.detail_text.contains("17.8"));
        assert!(!display.detail_text.contains("Feels"));
    }

    #[test]
    fn empty_object_keeps_the_five_line_shape() {
        let display = WeatherDisplay::from_body("{}");
        assert_eq!(
            display.detail_text,
            "City: \nTemperature:  °C\nWeather Condition: \nHumidity: %\nWind Speed:  m/s"
        );
        assert_eq!(display.temp_label, "");
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        let display =
            WeatherDisplay::from_body(r#"{"cod":200,"coord":{"lon":-0.13,"lat":51.51}}"#);
        assert!(display.detail_text.starts_with("City: \n"));
        assert_eq!(display.temp_label, "");
    }

    #[test]
    fn wrong_typed_fields_stay_empty_without_blocking_others() {
        let body = r#"{"name":17,"sys":[],"main":{"temp":"warm","humidity":55},"weather":{"description":"x"},"wind":{"speed":null}}"#;
        let reading = extract_reading(body).expect("still a JSON object");
        assert_eq!(reading.city, "");
        assert_eq!(reading.country, None);
        assert_eq!(reading.temperature_c, None);
        assert_eq!(reading.humidity_pct, Some(55.0));
        assert_eq!(reading.wind_speed_mps, None);
        assert_eq!(reading.condition, "");
    }

    #[test]
    fn missing_temperature_clears_the_label() {
        let display = WeatherDisplay::from_body(r#"{"name":"Oslo"}"#);
        assert_eq!(display.temp_label, "");
        assert!(display.detail_text.contains("Temperature:  °C"));
    }

    #[test]
    fn integer_temperature_renders_without_decimals() {
        let display = WeatherDisplay::from_body(r#"{"main":{"temp":18}}"#);
        assert!(display.detail_text.contains("Temperature: 18 °C"));
        assert_eq!(display.temp_label, "18°C");
    }

    #[test]
    fn halfway_temperatures_round_away_from_zero() {
        let cold = WeatherDisplay::from_body(r#"{"main":{"temp":-2.5}}"#);
        assert_eq!(cold.temp_label, "-3°C");
        let mild = WeatherDisplay::from_body(r#"{"main":{"temp":0.5}}"#);
        assert_eq!(mild.temp_label, "1°C");
        let cool = WeatherDisplay::from_body(r#"{"main":{"temp":18.4}}"#);
        assert_eq!(cool.temp_label, "18°C");
    }

    #[test]
    fn backslashes_are_stripped_from_extracted_strings() {
        let reading = extract_reading(r#"{"name":"Sao\\/Paulo"}"#).expect("valid object");
        assert_eq!(reading.city, "Sao/Paulo");

        let reading =
            extract_reading(r#"{"weather":[{"description":"rain \\ hail"}]}"#).expect("valid");
        assert_eq!(reading.condition, "rain  hail");
    }

    #[test]
    fn city_line_has_no_suffix_without_a_country() {
        let missing = WeatherDisplay::from_body(r#"{"name":"London"}"#);
        assert!(missing.detail_text.starts_with("City: London\n"));

        let empty = WeatherDisplay::from_body(r#"{"name":"London","sys":{"country":""}}"#);
        assert!(empty.detail_text.starts_with("City: London\n"));
    }

    #[test]
    fn condition_comes_from_the_first_list_entry() {
        let body = r#"{"weather":[{"description":"light rain"},{"description":"mist"}]}"#;
        let reading = extract_reading(body).expect("valid object");
        assert_eq!(reading.condition, "light rain");
    }

    #[test]
    fn rendering_is_idempotent() {
        for body in [GOLDEN, "", "plain text", "{}", "{broken"] {
            assert_eq!(WeatherDisplay::from_body(body), WeatherDisplay::from_body(body));
        }
    }
}
