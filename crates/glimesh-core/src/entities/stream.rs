//! Stream entity - one broadcast on a channel

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Category, Channel};

/// A single stream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    pub id: Option<String>,
    pub title: Option<String>,
    pub count_viewers: Option<i64>,
    pub peak_viewers: Option<i64>,
    pub thumbnail_url: Option<String>,
    pub category: Option<Category>,
    pub channel: Option<Box<Channel>>,
    pub started_at: Option<NaiveDateTime>,
    pub ended_at: Option<NaiveDateTime>,
    pub inserted_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Stream {
    /// A stream without an end time is still running
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.ended_at.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_stream() {
        let json = serde_json::json!({
            "id": "77",
            "countViewers": 12,
            "startedAt": "2021-06-12T23:01:54",
            "endedAt": null
        });

        let stream: Stream = serde_json::from_value(json).unwrap();
        assert!(stream.is_running());
        assert_eq!(stream.count_viewers, Some(12));
    }

    #[test]
    fn test_ended_stream() {
        let json = serde_json::json!({
            "startedAt": "2021-06-12T23:01:54",
            "endedAt": "2021-06-13T01:00:00.123456"
        });

        let stream: Stream = serde_json::from_value(json).unwrap();
        assert!(!stream.is_running());
    }
}
