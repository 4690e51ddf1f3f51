// core/src/aggregate.rs
use crate::errors::EmptySessionError;
use crate::models::Reading;

/// Slår sammen alle sub-levels i en session til én rå serie, sortert
/// stigende på timestamp. Stabil sortering: like timestamps beholder
/// segment-/radrekkefølgen. Ingen de-duplisering – overlappende timestamps
/// på tvers av segmenter (capture-anomali) beholdes som egne rader;
/// repareren tåler null/negative hull uten å sette inn fillers.
pub fn aggregate_sublevels(sublevels: &[Vec<Reading>]) -> Result<Vec<Reading>, EmptySessionError> {
    let mut combined: Vec<Reading> = sublevels.iter().flatten().copied().collect();
    if combined.is_empty() {
        return Err(EmptySessionError);
    }
    // Vec::sort_by_key er stabil
    combined.sort_by_key(|r| r.t);
    Ok(combined)
}
