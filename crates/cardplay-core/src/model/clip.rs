use serde::{Deserialize, Serialize};

/// ClipRecord - a named reference to a region of a stream with playback properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipRecord {
    /// Unique identifier for this clip
    pub id: String,

    /// Human-readable clip name
    pub name: String,

    /// Display color (e.g. `#ff8800`)
    pub color: String,

    /// Id of the stream this clip plays
    pub stream_id: String,

    /// Length in ticks
    pub duration: i64,

    /// Whether playback loops
    #[serde(rename = "loop")]
    pub loop_enabled: bool,
}

impl ClipRecord {
    /// Create a new non-looping clip over the given stream
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        stream_id: impl Into<String>,
        duration: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: String::new(),
            stream_id: stream_id.into(),
            duration,
            loop_enabled: false,
        }
    }

    /// Builder-style color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Builder-style loop flag
    pub fn with_loop(mut self, loop_enabled: bool) -> Self {
        self.loop_enabled = loop_enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clip_wire_names() {
        let clip = ClipRecord::new("c1", "Intro", "s1", 1920)
            .with_color("#ff0000")
            .with_loop(true);
        let value = serde_json::to_value(&clip).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "c1",
                "name": "Intro",
                "color": "#ff0000",
                "streamId": "s1",
                "duration": 1920,
                "loop": true
            })
        );
    }
}
