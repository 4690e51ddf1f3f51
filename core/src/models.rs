use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Én rå avlesning fra klokka, slik den står i eksport-fila.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub t: DateTime<Utc>,  // watch_timestamp
    pub bpm: Option<f64>,  // slag/min; None = mangler i råfila
}

/// Feilklasse for en reparert rad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorTag {
    /// Original avlesning, gyldig verdi.
    None,
    /// Original avlesning med verdi eksakt 0 – tolkes som manglende måling.
    Zero,
    /// Syntetisk rad satt inn for et hull i samplingen.
    SampleRateGap,
}

impl ErrorTag {
    /// Samme tekst som serde-serialiseringen; driveren skriver denne rett i error-kolonnen.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorTag::None => "NONE",
            ErrorTag::Zero => "ZERO",
            ErrorTag::SampleRateGap => "SAMPLE_RATE_GAP",
        }
    }
}

/// Én rad i en reparert serie. bpm er satt hvis og bare hvis error == None.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepairedReading {
    pub t: DateTime<Utc>,
    pub bpm: Option<f64>,
    pub error: ErrorTag,
}

impl RepairedReading {
    pub fn filler(t: DateTime<Utc>) -> Self {
        Self {
            t,
            bpm: None,
            error: ErrorTag::SampleRateGap,
        }
    }
}

/// Tidslinje-markør for en session ("Sub-level N Start" / "10-minute mark").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataEvent {
    pub t: DateTime<Utc>,
    pub label: String,
}

/// Samlet resultat for én session: reparerte sub-levels, reparert
/// session-serie og metadata-events. Driveren persisterer hver del for seg.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionOutput {
    pub sublevels: Vec<Vec<RepairedReading>>,
    pub combined: Vec<RepairedReading>,
    pub events: Vec<MetadataEvent>,
}

/// Parser et klokke-timestamp. Aksepterer RFC 3339 og eksportformatet
/// "YYYY-MM-DD HH:MM:SS[.fff]" (naivt, tolkes som UTC).
pub fn parse_watch_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }
    Err(format!("unrecognized watch_timestamp: {raw:?}"))
}
