use std::fmt;

use serde::Serialize;

/// One of the three external data sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    Instagram,
    Yelp,
    Foursquare,
}

impl Provider {
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Instagram => "Instagram",
            Provider::Yelp => "Yelp",
            Provider::Foursquare => "Foursquare",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Who a rejected request is blamed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fault {
    /// 4xx: bad key, bad parameters
    Caller,
    /// 5xx: provider outage
    Provider,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceStatus {
    Ok,
    Disabled,
    Unavailable,
    Rejected,
    Malformed,
}

/// How one provider fared for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceReport {
    pub source: Provider,
    pub status: SourceStatus,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault: Option<Fault>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SourceReport {
    pub fn ok(source: Provider, count: usize) -> Self {
        Self {
            source,
            status: SourceStatus::Ok,
            count,
            fault: None,
            message: None,
        }
    }

    pub fn disabled(source: Provider) -> Self {
        Self {
            source,
            status: SourceStatus::Disabled,
            count: 0,
            fault: None,
            message: Some(format!("{} is not configured", source)),
        }
    }

    pub fn failed(
        source: Provider,
        status: SourceStatus,
        fault: Option<Fault>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source,
            status,
            count: 0,
            fault,
            message: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == SourceStatus::Ok
    }
}
