/// The result of a successfully executed operation.
#[derive(Debug, Clone)]
pub struct Response {
    pub rows: Rows,
}

/// Row payload of a response.
#[derive(Debug, Clone)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    /// An empty successful response. Table lifecycle statements impact no
    /// rows.
    pub fn empty() -> Self {
        Self::count(0)
    }
}

impl Rows {
    pub fn into_count(self) -> u64 {
        match self {
            Rows::Count(count) => count,
        }
    }
}
