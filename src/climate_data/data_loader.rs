use crate::climate_data::api_config::ClimateApiConfig;
use crate::climate_data::error::FetchError;
use crate::climate_data::response_parser::parse_series;
use crate::error::ClimateMirrorError;
use crate::types::location::LatLon;
use crate::types::observation::ObservationSeries;
use log::{info, warn};
use reqwest::{Client, Request};

/// Downloads and parses monthly point data. Holds no cache; see
/// [`crate::ClimateFetcher`] for the memoizing wrapper.
pub struct ClimateDataLoader {
    config: ClimateApiConfig,
    download_client: Client,
}

impl ClimateDataLoader {
    /// # Errors
    ///
    /// [`ClimateMirrorError::Config`] if `config` fails validation and
    /// [`ClimateMirrorError::HttpClient`] if the HTTP client cannot be built.
    pub fn new(config: ClimateApiConfig) -> Result<Self, ClimateMirrorError> {
        config.validate()?;
        let download_client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ClimateMirrorError::HttpClient)?;
        Ok(Self {
            config,
            download_client,
        })
    }

    pub fn config(&self) -> &ClimateApiConfig {
        &self.config
    }

    /// Fetches and parses the series for one point. No retries: the first failure is
    /// returned to the caller.
    pub async fn load(
        &self,
        location: LatLon,
        region: &str,
    ) -> Result<ObservationSeries, FetchError> {
        let endpoint = self.config.monthly_point_endpoint();
        let request = self
            .download_client
            .get(&endpoint)
            .query(&self.config.monthly_point_query(location))
            .build()
            .map_err(|e| FetchError::NetworkRequest(endpoint, e))?;
        let url = request.url().to_string();
        let body = self.download(request, &url).await?;
        parse_series(&body, &url, region, location, &self.config)
    }

    async fn download(&self, request: Request, url: &str) -> Result<Vec<u8>, FetchError> {
        info!("Downloading data from {}", url);

        let response = self
            .download_client
            .execute(request)
            .await
            .map_err(|e| Self::transport_error(url, e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(match e.status() {
                    Some(status) => FetchError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    },
                    None => FetchError::NetworkRequest(url.to_string(), e),
                });
            }
        };

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Self::transport_error(url, e))?;
        info!("Downloaded {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }

    fn transport_error(url: &str, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            warn!("Request to {} timed out", url);
            FetchError::Timeout(url.to_string(), e)
        } else {
            warn!("Request to {} failed: {}", url, e);
            FetchError::NetworkRequest(url.to_string(), e)
        }
    }
}
