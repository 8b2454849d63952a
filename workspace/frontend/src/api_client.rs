use async_trait::async_trait;
use common::{
    BarSeries, Endpoint, PeriodQuery, PieSeries, StatisticsSummary, TransactionPage,
    TransactionQuery,
};
use dashboard::{DashboardApi, FetchError};
use gloo_net::http::Request;
use serde::{de::DeserializeOwned, Serialize};

/// Collaborator API client backed by the browser's fetch.
#[derive(Debug, Clone)]
pub struct HttpDashboardApi {
    base_url: String,
}

impl HttpDashboardApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Common GET request handler
    async fn get<T, Q>(&self, endpoint: Endpoint, query: &Q) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
        Q: Serialize,
    {
        let url = endpoint.url(&self.base_url, query).map_err(|e| FetchError::Network {
            endpoint,
            message: format!("Could not encode query: {}", e),
        })?;
        log::debug!("GET request to: {}", url);

        let response = Request::get(&url).send().await.map_err(|e| {
            log::error!("GET {} - Request failed: {}", endpoint, e);
            FetchError::Network {
                endpoint,
                message: e.to_string(),
            }
        })?;

        if !response.ok() {
            log::error!("GET {} - HTTP error: {}", endpoint, response.status());
            return Err(FetchError::Status {
                endpoint,
                status: response.status(),
            });
        }

        log::trace!("GET {} - Response received, parsing JSON", endpoint);
        let data = response.json::<T>().await.map_err(|e| {
            log::error!("GET {} - Failed to parse response: {}", endpoint, e);
            FetchError::Decode {
                endpoint,
                message: e.to_string(),
            }
        })?;

        log::info!("GET {} - Success", endpoint);
        Ok(data)
    }
}

#[async_trait(?Send)]
impl DashboardApi for HttpDashboardApi {
    async fn fetch_transactions(&self, query: &TransactionQuery) -> Result<TransactionPage, FetchError> {
        let page: TransactionPage = self.get(Endpoint::Transactions, query).await?;
        log::info!("Fetched {} transactions", page.len());
        Ok(page)
    }

    async fn fetch_statistics(&self, period: &PeriodQuery) -> Result<StatisticsSummary, FetchError> {
        self.get(Endpoint::Statistics, period).await
    }

    async fn fetch_bar_chart(&self, period: &PeriodQuery) -> Result<BarSeries, FetchError> {
        self.get(Endpoint::BarChart, period).await
    }

    async fn fetch_pie_chart(&self, period: &PeriodQuery) -> Result<PieSeries, FetchError> {
        self.get(Endpoint::PieChart, period).await
    }
}
