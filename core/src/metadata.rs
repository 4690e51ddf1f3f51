// core/src/metadata.rs
use chrono::{DateTime, Duration, Utc};

use crate::models::{MetadataEvent, Reading};

/// Akkumulert intern varighet som utløser "10-minute mark".
pub const MILESTONE_SECS: i64 = 600;

/// Genererer tidslinje-events for en session fra de rå segmentseriene:
/// én "Sub-level N Start" per ikke-tomt segment (N teller kun ikke-tomme),
/// pluss maks én "10-minute mark".
///
/// Varigheten summeres som hvert segments eget spenn (siste - første
/// timestamp), ikke kalendertid på tvers av segmenter. Milepælen ankres til
/// første segmentstart + 600 s og legges etter start-eventene.
pub fn generate_metadata(sublevels: &[Vec<Reading>]) -> Vec<MetadataEvent> {
    let mut events = Vec::new();
    let mut first_timestamp: Option<DateTime<Utc>> = None;
    let mut accumulated = Duration::zero();

    for seg in sublevels {
        let (Some(first), Some(last)) = (seg.first(), seg.last()) else {
            continue; // tomt segment: ingen event, nummereringen står stille
        };

        if first_timestamp.is_none() {
            first_timestamp = Some(first.t);
        }

        events.push(MetadataEvent {
            t: first.t,
            label: format!("Sub-level {} Start", events.len() + 1),
        });

        accumulated = accumulated + (last.t - first.t);
    }

    if let Some(start) = first_timestamp {
        if accumulated >= Duration::seconds(MILESTONE_SECS) {
            events.push(MetadataEvent {
                t: start + Duration::seconds(MILESTONE_SECS),
                label: "10-minute mark".to_string(),
            });
        }
    }

    events
}
