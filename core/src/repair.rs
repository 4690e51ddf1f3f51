// core/src/repair.rs
use chrono::Duration;

use crate::errors::InvalidSeriesError;
use crate::models::{ErrorTag, Reading, RepairedReading};

/// Hull større enn dette utløser filler-rader (én per hele manglende sekund).
pub const GAP_THRESHOLD_SECS: i64 = 1;

/// Klassifiser én original avlesning. Verdi eksakt 0 tolkes som manglende
/// måling og raden mister bpm-verdien.
fn classify(r: &Reading) -> RepairedReading {
    match r.bpm {
        Some(v) if v == 0.0 => RepairedReading {
            t: r.t,
            bpm: None,
            error: ErrorTag::Zero,
        },
        bpm => RepairedReading {
            t: r.t,
            bpm,
            error: ErrorTag::None,
        },
    }
}

/// Reparerer én sortert råserie: tagger 0-verdier og syr inn filler-rader
/// for hull i samplingen.
///
/// Forventer at serien er ikke-tom og sortert stigende på timestamp
/// (sortering er kallerens ansvar). Hull ≤ 1 s gir ingen fillers; et hull på
/// `g` sekunder gir `floor(g) - 1` fillers på +1s, +2s, ..  Rest under ett
/// sekund representeres ikke. Null/negative hull (duplikate eller
/// ute-av-rekkefølge timestamps fra klokka) gir heller ingen fillers.
pub fn repair_series(series: &[Reading]) -> Result<Vec<RepairedReading>, InvalidSeriesError> {
    if series.is_empty() {
        return Err(InvalidSeriesError::new("empty series"));
    }
    if let Some(i) = series.iter().position(|r| r.bpm.is_none()) {
        return Err(InvalidSeriesError::new(format!(
            "reading {i} has no bpm value"
        )));
    }

    let mut out = Vec::with_capacity(series.len());

    for pair in series.windows(2) {
        let (cur, next) = (&pair[0], &pair[1]);
        out.push(classify(cur));

        let gap = next.t - cur.t;
        if gap > Duration::seconds(GAP_THRESHOLD_SECS) {
            // num_seconds trunkerer mot null = floor for positive hull
            let whole_secs = gap.num_seconds();
            for k in 1..whole_secs {
                out.push(RepairedReading::filler(cur.t + Duration::seconds(k)));
            }
        }
    }

    // siste avlesning har ingen etterfølger – kun klassifisering
    if let Some(last) = series.last() {
        out.push(classify(last));
    }

    Ok(out)
}
