//! Common transport-layer types shared between the host, the dashboard core and the frontend.
//! These structs mirror the collaborator API's request/response payloads
//! so every crate deserializes API responses without duplicating shapes.

mod aggregates;
mod query;
mod settings;
mod transaction;

pub use aggregates::{BarSeries, CategorySlice, PieSeries, PriceBucket, StatisticsSummary};
pub use query::{Endpoint, PeriodQuery, QueryError, TransactionQuery};
pub use settings::{ClientSettings, DEFAULT_API_BASE_URL, DEFAULT_LOG_LEVEL, DEFAULT_PAGE_SIZE};
pub use transaction::{RecordId, TransactionPage, TransactionRecord};
