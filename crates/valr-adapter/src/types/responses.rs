/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs and derived lookup maps
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::enums::{OrderType, ServerStatus};

/// Returned when an order is accepted for processing
///
/// POST /orders/limit
/// POST /orders/market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderAccepted {
    pub id: String,
}

/// One row of GET /public/ordertypes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTypesEntry {
    pub currency_pair: String,
    #[serde(default)]
    pub order_types: Vec<OrderType>,
}

/// GET /public/status, either `{"status": "online"}` or a bare string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum StatusResponse {
    Wrapped { status: ServerStatus },
    Bare(ServerStatus),
}

impl From<StatusResponse> for ServerStatus {
    fn from(response: StatusResponse) -> Self {
        match response {
            StatusResponse::Wrapped { status } | StatusResponse::Bare(status) => status,
        }
    }
}

/// Supported order types keyed by currency pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OrderTypeMatrix(HashMap<String, HashSet<OrderType>>);

impl OrderTypeMatrix {
    /// Collapse the per-pair lists into presence sets
    pub fn from_entries(entries: Vec<OrderTypesEntry>) -> Self {
        let mut pairs: HashMap<String, HashSet<OrderType>> = HashMap::with_capacity(entries.len());
        for entry in entries {
            pairs
                .entry(entry.currency_pair)
                .or_default()
                .extend(entry.order_types);
        }
        Self(pairs)
    }

    /// Whether `order_type` can be placed on `pair`
    pub fn supports(&self, pair: &str, order_type: OrderType) -> bool {
        self.0
            .get(pair)
            .is_some_and(|types| types.contains(&order_type))
    }

    pub fn for_pair(&self, pair: &str) -> Option<&HashSet<OrderType>> {
        self.0.get(pair)
    }

    pub fn pairs(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> HashMap<String, HashSet<OrderType>> {
        self.0
    }
}

/// Collapse a list of order types into a presence set
pub fn order_type_set(order_types: Vec<OrderType>) -> HashSet<OrderType> {
    order_types.into_iter().collect()
}
