// core/tests/test_repair.rs
use chrono::{DateTime, Duration, TimeZone, Utc};

use pulsegraph_core::models::{ErrorTag, Reading};
use pulsegraph_core::repair::repair_series;

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 23, 18, 0, 0).unwrap()
}

fn r(offset_ms: i64, bpm: f64) -> Reading {
    Reading {
        t: base() + Duration::milliseconds(offset_ms),
        bpm: Some(bpm),
    }
}

#[test]
fn dense_series_keeps_length_and_tags_none() {
    // 1 Hz uten hull: ingen fillers, alle rader NONE
    let series = vec![r(0, 60.0), r(1000, 61.0), r(2000, 62.0)];

    let out = repair_series(&series).unwrap();

    assert_eq!(out.len(), series.len());
    assert!(out.iter().all(|x| x.error == ErrorTag::None));
    assert_eq!(out[1].bpm, Some(61.0));
}

#[test]
fn gap_up_to_1999ms_gives_no_filler() {
    let series = vec![r(0, 60.0), r(1999, 61.0)];

    let out = repair_series(&series).unwrap();

    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|x| x.error == ErrorTag::None));
}

#[test]
fn gap_of_2500ms_gives_exactly_one_filler_at_plus_1s() {
    let series = vec![r(0, 60.0), r(2500, 61.0)];

    let out = repair_series(&series).unwrap();

    assert_eq!(out.len(), 3);
    assert_eq!(out[1].error, ErrorTag::SampleRateGap);
    assert_eq!(out[1].t, base() + Duration::seconds(1));
    assert_eq!(out[1].bpm, None);
    // resten (0.5 s) representeres ikke
    assert_eq!(out[2].t, base() + Duration::milliseconds(2500));
}

#[test]
fn gap_of_exactly_2s_gives_one_filler() {
    let series = vec![r(0, 60.0), r(2000, 61.0)];

    let out = repair_series(&series).unwrap();

    assert_eq!(out.len(), 3);
    assert_eq!(out[1].error, ErrorTag::SampleRateGap);
    assert_eq!(out[1].t, base() + Duration::seconds(1));
}

#[test]
fn long_gap_fills_one_row_per_whole_second() {
    // hull på 5.5 s => floor(5.5) - 1 = 4 fillers på +1..+4 s
    let series = vec![r(0, 60.0), r(5500, 61.0)];

    let out = repair_series(&series).unwrap();

    assert_eq!(out.len(), 6);
    for (k, row) in out[1..5].iter().enumerate() {
        assert_eq!(row.error, ErrorTag::SampleRateGap, "row {k}");
        assert_eq!(row.t, base() + Duration::seconds(k as i64 + 1));
    }
    // fillers ligger strengt mellom de to originale timestampene
    assert!(out[1].t > out[0].t);
    assert!(out[4].t < out[5].t);
    assert_eq!(out[5].error, ErrorTag::None);
}

#[test]
fn zero_value_is_tagged_and_value_dropped() {
    let series = vec![r(0, 0.0), r(1000, 64.0)];

    let out = repair_series(&series).unwrap();

    assert_eq!(out[0].error, ErrorTag::Zero);
    assert_eq!(out[0].bpm, None);
    assert_eq!(out[1].error, ErrorTag::None);
    assert_eq!(out[1].bpm, Some(64.0));
}

#[test]
fn consecutive_zeros_are_tagged_independently() {
    let series = vec![r(0, 0.0), r(1000, 0.0), r(2000, 0.0)];

    let out = repair_series(&series).unwrap();

    assert_eq!(out.len(), 3);
    assert!(out.iter().all(|x| x.error == ErrorTag::Zero && x.bpm.is_none()));
}

#[test]
fn zero_tag_and_gap_fill_both_apply_to_same_pair() {
    // 0-verdi OG hull etter samme rad
    let series = vec![r(0, 0.0), r(3000, 70.0)];

    let out = repair_series(&series).unwrap();

    let tags: Vec<_> = out.iter().map(|x| x.error).collect();
    assert_eq!(
        tags,
        vec![
            ErrorTag::Zero,
            ErrorTag::SampleRateGap,
            ErrorTag::SampleRateGap,
            ErrorTag::None
        ]
    );
}

#[test]
fn single_reading_is_classified_without_fillers() {
    let out = repair_series(&[r(0, 72.0)]).unwrap();

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].error, ErrorTag::None);
    assert_eq!(out[0].bpm, Some(72.0));
}

#[test]
fn duplicate_and_backwards_timestamps_give_no_fillers() {
    // capture-anomali: null og negativt hull skal tolereres uten fillers
    let series = vec![r(1000, 60.0), r(1000, 61.0), r(500, 62.0)];

    let out = repair_series(&series).unwrap();

    assert_eq!(out.len(), 3);
    assert!(out.iter().all(|x| x.error == ErrorTag::None));
}

#[test]
fn empty_series_is_rejected() {
    let err = repair_series(&[]).unwrap_err();
    assert!(err.reason.contains("empty"));
}

#[test]
fn reading_without_bpm_is_rejected() {
    let series = vec![
        r(0, 60.0),
        Reading {
            t: base() + Duration::seconds(1),
            bpm: None,
        },
    ];

    let err = repair_series(&series).unwrap_err();
    assert!(err.reason.contains("bpm"), "got: {}", err.reason);
}

#[test]
fn output_timestamps_are_non_decreasing() {
    let series = vec![r(0, 60.0), r(4200, 0.0), r(4900, 61.0), r(9000, 62.0)];

    let out = repair_series(&series).unwrap();

    for pair in out.windows(2) {
        assert!(pair[0].t <= pair[1].t);
    }
}
