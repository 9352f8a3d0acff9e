use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A geographic point supplied by the caller.
///
/// Ranges are not checked: whatever the caller passes is forwarded to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    /// Position accuracy in meters. Carried along but never sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude, accuracy: None }
    }

    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = Some(accuracy);
        self
    }
}

/// The provider's `main` object.
///
/// The four temperatures are required numbers. They are held as JSON numbers
/// so `20` stays `20` and `20.0` stays `20.0`. Any other keys are kept in
/// `extra`, so the object serializes back exactly as it was received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    pub feels_like: Number,
    pub temp: Number,
    pub temp_max: Number,
    pub temp_min: Number,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Normalized current-weather result handed to the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    /// Location name as reported by the provider.
    pub title: String,
    pub data: MainReadings,
    /// Provider's location identifier.
    pub id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn main_readings_pass_unknown_keys_through() {
        let raw = json!({
            "feels_like": 21.5,
            "temp": 20.0,
            "temp_max": 22.0,
            "temp_min": 18.0,
            "pressure": 1012,
            "humidity": 40
        });

        let readings: MainReadings = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(readings.temp.as_f64(), Some(20.0));
        assert_eq!(readings.extra.len(), 2);
        assert_eq!(serde_json::to_value(&readings).unwrap(), raw);
    }

    #[test]
    fn main_readings_keep_integer_temperatures_integral() {
        let raw = json!({ "feels_like": 21, "temp": 20, "temp_max": 22.5, "temp_min": -3 });

        let readings: MainReadings = serde_json::from_value(raw.clone()).unwrap();
        assert!(readings.temp.is_u64());
        assert!(readings.temp_min.is_i64());
        assert_eq!(serde_json::to_string(&readings).unwrap(), raw.to_string());
    }

    #[test]
    fn main_readings_reject_non_numeric_temperatures() {
        let raw = json!({ "feels_like": 1.0, "temp": "20", "temp_max": 3.0, "temp_min": 0.0 });
        assert!(serde_json::from_value::<MainReadings>(raw).is_err());
    }

    #[test]
    fn main_readings_require_all_temperatures() {
        let raw = json!({ "feels_like": 1.0, "temp": 2.0, "temp_max": 3.0 });
        assert!(serde_json::from_value::<MainReadings>(raw).is_err());
    }

    #[test]
    fn coordinates_accuracy_is_optional() {
        let crd: Coordinates =
            serde_json::from_value(json!({ "latitude": 1.5, "longitude": -2.25 })).unwrap();
        assert_eq!(crd, Coordinates::new(1.5, -2.25));

        let with = Coordinates::new(1.5, -2.25).with_accuracy(12.0);
        assert_eq!(with.accuracy, Some(12.0));
    }
}
