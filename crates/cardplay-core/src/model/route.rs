use serde::{Deserialize, Serialize};

/// Signal class carried by a routing connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteType {
    Audio,
    Midi,
    Modulation,
}

impl RouteType {
    /// Wire name of this route type
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteType::Audio => "audio",
            RouteType::Midi => "midi",
            RouteType::Modulation => "modulation",
        }
    }
}

impl std::fmt::Display for RouteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// RouteConnection - a typed edge in the project's signal/control graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteConnection {
    /// Unique identifier for this connection
    pub id: String,

    /// Addressable source point (deck output, card port, ...)
    pub source_id: String,

    /// Addressable target point
    pub target_id: String,

    /// Signal class
    #[serde(rename = "type")]
    pub route_type: RouteType,
}

impl RouteConnection {
    pub fn new(
        id: impl Into<String>,
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        route_type: RouteType,
    ) -> Self {
        Self {
            id: id.into(),
            source_id: source_id.into(),
            target_id: target_id.into(),
            route_type,
        }
    }
}
