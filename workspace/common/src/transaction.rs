use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifier of a transaction record.
///
/// The collaborator API is not consistent about identifier types, so both
/// JSON numbers and JSON strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Numeric(id) => write!(f, "{}", id),
            RecordId::Text(id) => f.write_str(id),
        }
    }
}

/// A single product sale as returned by the transactions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    #[serde(alias = "_id")]
    pub id: RecordId,
    pub title: String,
    /// Accepted as JSON number or string
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sold: bool,
    pub date_of_sale: DateTime<Utc>,
}

/// One page of transaction records plus whatever pagination totals the API reported.
///
/// The API either answers with a bare JSON array of records or with an object
/// carrying the records and the totals. Both shapes deserialize into this type;
/// serialization always produces the object shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPage {
    pub transactions: Vec<TransactionRecord>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub total_count: Option<u64>,
    pub total_pages: Option<u32>,
}

impl TransactionPage {
    /// Page holding only records, without any totals.
    pub fn from_records(transactions: Vec<TransactionRecord>) -> Self {
        Self {
            transactions,
            ..Default::default()
        }
    }

    /// Total number of pages, if the API reported enough to know it.
    ///
    /// An explicit `totalPages` wins; otherwise it is derived from
    /// `totalCount` and `perPage`.
    pub fn total_pages(&self) -> Option<u32> {
        if let Some(total_pages) = self.total_pages {
            return Some(total_pages);
        }
        match (self.total_count, self.per_page) {
            (Some(count), Some(per_page)) if per_page > 0 => {
                let pages = count.div_ceil(u64::from(per_page));
                Some(u32::try_from(pages).unwrap_or(u32::MAX))
            }
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl<'de> Deserialize<'de> for TransactionPage {
    // Array or object picks the shape; record errors surface unchanged.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if value.is_array() {
            let transactions =
                Vec::<TransactionRecord>::deserialize(value).map_err(de::Error::custom)?;
            Ok(TransactionPage::from_records(transactions))
        } else {
            let paged = PagedWire::deserialize(value).map_err(de::Error::custom)?;
            Ok(paged.into())
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PagedWire {
    transactions: Vec<TransactionRecord>,
    #[serde(default)]
    page: Option<u32>,
    #[serde(default)]
    per_page: Option<u32>,
    #[serde(default)]
    total_count: Option<u64>,
    #[serde(default)]
    total_pages: Option<u32>,
}

impl From<PagedWire> for TransactionPage {
    fn from(paged: PagedWire) -> Self {
        TransactionPage {
            transactions: paged.transactions,
            page: paged.page,
            per_page: paged.per_page,
            total_count: paged.total_count,
            total_pages: paged.total_pages,
        }
    }
}
