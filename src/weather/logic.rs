use serde::Deserialize;
use surfacegen::config::WeatherConfig;
use surfacegen::terrain::TerrainInput;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeatherError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("request timed out")]
    Timeout,
    #[error("weather service returned HTTP {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temperature_2m: f64,
}

pub fn forecast_url(config: &WeatherConfig) -> String {
    format!(
        "{}?latitude={}&longitude={}&current=temperature_2m",
        config.endpoint, config.latitude, config.longitude
    )
}

/// Turn an HTTP status and body into a temperature in Celsius
pub fn parse_forecast(status: u16, body: &str) -> Result<f32, WeatherError> {
    if !(200..300).contains(&status) {
        return Err(WeatherError::Status(status));
    }

    let forecast: ForecastResponse =
        serde_json::from_str(body).map_err(|e| WeatherError::Malformed(e.to_string()))?;
    let celsius = forecast.current.temperature_2m as f32;
    if !celsius.is_finite() {
        return Err(WeatherError::Malformed(format!(
            "temperature {} is not a finite f32",
            forecast.current.temperature_2m
        )));
    }
    Ok(celsius)
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReadingSource {
    /// Nothing fetched yet
    Default,
    Live,
    Fallback(WeatherError),
}

/// Temperature the terrain is shaped by, and where it came from
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainReading {
    pub celsius: f32,
    pub source: ReadingSource,
}

impl TerrainReading {
    pub fn placeholder(default_celsius: f32) -> Self {
        Self {
            celsius: default_celsius,
            source: ReadingSource::Default,
        }
    }

    /// Any failure resolves to the default temperature with its reason kept
    pub fn resolve(result: Result<f32, WeatherError>, default_celsius: f32) -> Self {
        match result {
            Ok(celsius) if celsius.is_finite() => Self {
                celsius,
                source: ReadingSource::Live,
            },
            Ok(celsius) => Self {
                celsius: default_celsius,
                source: ReadingSource::Fallback(WeatherError::Malformed(format!(
                    "temperature {celsius} is not finite"
                ))),
            },
            Err(err) => Self {
                celsius: default_celsius,
                source: ReadingSource::Fallback(err),
            },
        }
    }

    pub fn input(&self) -> TerrainInput {
        TerrainInput::new(self.celsius)
    }

    pub fn failure(&self) -> Option<&WeatherError> {
        match &self.source {
            ReadingSource::Fallback(err) => Some(err),
            _ => None,
        }
    }
}

/// Holds the placeholder until exactly one fetched or fallback reading lands
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureCell {
    reading: TerrainReading,
    committed: bool,
}

impl TemperatureCell {
    pub fn new(default_celsius: f32) -> Self {
        Self {
            reading: TerrainReading::placeholder(default_celsius),
            committed: false,
        }
    }

    pub fn reading(&self) -> &TerrainReading {
        &self.reading
    }

    pub fn is_committed(&self) -> bool {
        self.committed
    }

    /// Store `reading` if nothing was committed before. Returns whether it was stored.
    pub fn commit(&mut self, reading: TerrainReading) -> bool {
        if self.committed {
            return false;
        }
        self.reading = reading;
        self.committed = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use surfacegen::grid::GridLayout;
    use surfacegen::terrain::TerrainShape;

    #[test]
    fn url_targets_london_current_temperature() {
        assert_eq!(
            forecast_url(&WeatherConfig::default()),
            "https://api.open-meteo.com/v1/forecast?latitude=51.5074&longitude=-0.1278&current=temperature_2m"
        );
    }

    #[test]
    fn reads_current_temperature() {
        let body = r#"{"latitude":51.5,"current":{"time":"2024-01-01T12:00","temperature_2m":7.3}}"#;

        assert_eq!(parse_forecast(200, body), Ok(7.3));
    }

    #[rstest]
    #[case(500, r#"{"current":{"temperature_2m":7.3}}"#, WeatherError::Status(500))]
    #[case(404, "not found", WeatherError::Status(404))]
    fn non_success_status_is_an_error(
        #[case] status: u16,
        #[case] body: &str,
        #[case] expected: WeatherError,
    ) {
        assert_eq!(parse_forecast(status, body), Err(expected));
    }

    #[rstest]
    #[case("")]
    #[case("{}")]
    #[case(r#"{"current":{}}"#)]
    #[case(r#"{"current":{"temperature_2m":"warm"}}"#)]
    #[case(r#"{"current":{"temperature_2m":1e300}}"#)]
    fn malformed_bodies_are_rejected(#[case] body: &str) {
        assert!(matches!(parse_forecast(200, body), Err(WeatherError::Malformed(_))));
    }

    #[test]
    fn server_error_falls_back_to_default_field() {
        let layout = GridLayout::square(50, 20.0);
        let shape = TerrainShape::default();

        let reading = TerrainReading::resolve(parse_forecast(500, ""), 20.0);

        assert_eq!(reading.celsius, 20.0);
        assert_eq!(reading.failure(), Some(&WeatherError::Status(500)));
        assert_eq!(
            shape.evaluate(&layout, reading.input()),
            shape.evaluate(&layout, TerrainInput::new(20.0))
        );
    }

    #[test]
    fn non_finite_value_is_replaced() {
        let reading = TerrainReading::resolve(Ok(f32::NAN), 20.0);

        assert_eq!(reading.celsius, 20.0);
        assert!(matches!(reading.source, ReadingSource::Fallback(_)));
    }

    #[test]
    fn cell_commits_exactly_once() {
        let mut cell = TemperatureCell::new(20.0);
        assert_eq!(cell.reading().source, ReadingSource::Default);

        assert!(cell.commit(TerrainReading::resolve(Ok(12.0), 20.0)));
        assert!(!cell.commit(TerrainReading::resolve(Err(WeatherError::Timeout), 20.0)));

        assert!(cell.is_committed());
        assert_eq!(cell.reading().celsius, 12.0);
        assert_eq!(cell.reading().source, ReadingSource::Live);
    }
}
