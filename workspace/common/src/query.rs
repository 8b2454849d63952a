use serde::Serialize;

/// Error produced when a query cannot be encoded into a URL query string.
pub type QueryError = serde_urlencoded::ser::Error;

/// Parameters of the paginated transactions request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionQuery {
    pub year: i32,
    pub month: u32,
    pub search: String,
    pub page: u32,
    pub per_page: u32,
}

/// Parameters shared by the three aggregate requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodQuery {
    pub year: i32,
    pub month: u32,
}

/// The four read-only operations of the collaborator API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Transactions,
    Statistics,
    BarChart,
    PieChart,
}

impl Endpoint {
    pub const ALL: [Endpoint; 4] = [
        Endpoint::Transactions,
        Endpoint::Statistics,
        Endpoint::BarChart,
        Endpoint::PieChart,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Transactions => "/transactions",
            Endpoint::Statistics => "/statistics",
            Endpoint::BarChart => "/bar-chart",
            Endpoint::PieChart => "/pie-chart",
        }
    }

    /// Full request URL for this endpoint under `base`, with `query` encoded.
    pub fn url<Q: Serialize>(&self, base: &str, query: &Q) -> Result<String, QueryError> {
        let encoded = serde_urlencoded::to_string(query)?;
        let base = base.trim_end_matches('/');
        if encoded.is_empty() {
            Ok(format!("{}{}", base, self.path()))
        } else {
            Ok(format!("{}{}?{}", base, self.path(), encoded))
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
