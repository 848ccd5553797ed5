//! Weather lookup: one GET, awaited directly in the browser and on a
//! private current-thread runtime everywhere else.

use crate::weather::logic::{WeatherError, forecast_url, parse_forecast};
use std::time::Duration;
use surfacegen::config::WeatherConfig;

/// Fetch the current temperature with a single GET.
///
/// Blocks on its own runtime, so call it off the frame loop.
#[cfg(not(target_arch = "wasm32"))]
pub fn fetch_temperature(config: &WeatherConfig) -> Result<f32, WeatherError> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| WeatherError::Transport(format!("failed to create runtime: {e}")))?;

    let timeout = Duration::from_secs(config.timeout_secs);
    rt.block_on(async {
        tokio::time::timeout(timeout, request_temperature(config))
            .await
            .unwrap_or(Err(WeatherError::Timeout))
    })
}

/// Browser variant: the fetch promise only resolves once control returns to
/// the event loop, so this must be awaited rather than blocked on.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_temperature(config: WeatherConfig) -> Result<f32, WeatherError> {
    request_temperature(&config).await
}

async fn request_temperature(config: &WeatherConfig) -> Result<f32, WeatherError> {
    let timeout = Duration::from_secs(config.timeout_secs);
    let url = forecast_url(config);

    let response = reqwest::Client::new()
        .get(&url)
        .timeout(timeout)
        .send()
        .await
        .map_err(transport_error)?;

    let status = response.status().as_u16();
    let body = response.text().await.map_err(transport_error)?;

    parse_forecast(status, &body)
}

fn transport_error(err: reqwest::Error) -> WeatherError {
    if err.is_timeout() {
        WeatherError::Timeout
    } else {
        WeatherError::Transport(err.to_string())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::weather::logic::TerrainReading;
    use std::net::TcpListener;

    #[test]
    fn silent_server_times_out_into_the_default_reading() {
        // accepts the connection in the backlog but never answers
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
        let address = listener.local_addr().expect("listener address");
        let config = WeatherConfig {
            endpoint: format!("http://{address}/v1/forecast"),
            timeout_secs: 1,
            ..WeatherConfig::default()
        };

        let result = fetch_temperature(&config);
        assert_eq!(result, Err(WeatherError::Timeout));

        let reading = TerrainReading::resolve(result, 20.0);
        assert_eq!(reading.celsius, 20.0);
        drop(listener);
    }
}
