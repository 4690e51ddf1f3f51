// core/src/pipeline.rs
//
// Orkestrerer én session: reparer hvert sub-level for seg, bygg og reparer
// den kombinerte serien, og generer metadata-events. Dette er enheten
// eksterne drivere (katalog-walker, dashboard) kaller per session.

use serde::Deserialize;
use serde_json as json;
use serde_path_to_error as spte;

use crate::aggregate::aggregate_sublevels;
use crate::metadata::generate_metadata;
use crate::models::{parse_watch_timestamp, Reading, SessionOutput};
use crate::repair::repair_series;

/// Kjører hele pipelinen for én session.
///
/// Sub-levels som feiler validering hoppes over med en warn-logg; resten av
/// sessionen fortsetter. Den kombinerte serien bygges av rådataene til
/// segmentene som overlevde, slik at ett ødelagt sub-level ikke forgifter
/// session-visningen. Events genereres fra rå segmenter (pre-repair) –
/// event-timestamps skal referere originale sampletider, ikke fillers.
/// En session uten brukbare segmenter gir tomt resultat, aldri feil.
pub fn run_session(sublevels: &[Vec<Reading>]) -> SessionOutput {
    let mut repaired = Vec::with_capacity(sublevels.len());
    let mut survivors: Vec<Vec<Reading>> = Vec::with_capacity(sublevels.len());

    for (i, seg) in sublevels.iter().enumerate() {
        match repair_series(seg) {
            Ok(rep) => {
                repaired.push(rep);
                survivors.push(seg.clone());
            }
            Err(e) => log::warn!("skipping sub-level {}: {}", i + 1, e),
        }
    }

    if repaired.is_empty() {
        log::warn!("session has no usable sub-levels, emitting empty output");
        return SessionOutput::default();
    }

    let combined = match aggregate_sublevels(&survivors) {
        Ok(raw) => match repair_series(&raw) {
            Ok(rep) => rep,
            Err(e) => {
                log::warn!("combined series repair failed: {e}");
                Vec::new()
            }
        },
        Err(e) => {
            log::warn!("skipping session: {e}");
            Vec::new()
        }
    };

    let events = generate_metadata(sublevels);

    SessionOutput {
        sublevels: repaired,
        combined,
        events,
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// JSON-grensesnitt (brukes av Python-bindingen og av drivere som snakker JSON)
// ──────────────────────────────────────────────────────────────────────────────

/// Tolerant rad-inngang: aksepter feltnavnene fra klokke-eksporten og
/// eldre drivere.
#[derive(Debug, Deserialize)]
struct ReadingIn {
    #[serde(alias = "watch_timestamp", alias = "timestamp")]
    t: String,
    #[serde(default, alias = "value", alias = "hr")]
    bpm: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct SessionIn {
    #[serde(alias = "segments", alias = "sub_levels")]
    sublevels: Vec<Vec<ReadingIn>>,
}

fn to_core_reading(r: ReadingIn) -> Result<Reading, String> {
    Ok(Reading {
        t: parse_watch_timestamp(&r.t)?,
        bpm: r.bpm,
    })
}

fn to_core_series(rows: Vec<ReadingIn>) -> Result<Vec<Reading>, String> {
    rows.into_iter().map(to_core_reading).collect()
}

/// JSON-variant av [`run_session`]: `{"sublevels": [[rad, ...], ...]}` inn,
/// serialisert [`SessionOutput`] ut. Parse-feil rapporteres med JSON-stien
/// til feltet det gjelder.
pub fn run_session_json(payload: &str) -> Result<String, String> {
    let mut de = json::Deserializer::from_str(payload);
    let parsed: SessionIn = spte::deserialize(&mut de)
        .map_err(|e| format!("parse error (SessionIn) at {}: {}", e.path(), e))?;

    let sublevels = parsed
        .sublevels
        .into_iter()
        .map(to_core_series)
        .collect::<Result<Vec<_>, _>>()?;

    let out = run_session(&sublevels);
    json::to_string(&out).map_err(|e| e.to_string())
}

/// JSON-variant av [`repair_series`] for én enkelt serie: `[rad, ...]` inn,
/// reparert serie ut. Validering av serien (tom / manglende bpm) meldes som
/// feilstreng, samme kontrakt som resten av JSON-grensesnittet.
pub fn repair_series_json(payload: &str) -> Result<String, String> {
    let mut de = json::Deserializer::from_str(payload);
    let rows: Vec<ReadingIn> = spte::deserialize(&mut de)
        .map_err(|e| format!("parse error (series) at {}: {}", e.path(), e))?;

    let series = to_core_series(rows)?;
    let repaired = repair_series(&series).map_err(|e| e.to_string())?;
    json::to_string(&repaired).map_err(|e| e.to_string())
}
