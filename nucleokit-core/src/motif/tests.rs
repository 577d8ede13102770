use super::*;
use crate::alphabets::dna::reverse_complement;
use crate::error::BioError;
use proptest::prelude::*;

fn unit_profile() -> MotifProfile {
    MotifProfile::new(vec![
        vec![1.0, 0.0],
        vec![0.0, 1.0],
        vec![0.0, 0.0],
        vec![0.0, 0.0],
    ])
    .unwrap()
}

fn mixed_profile() -> MotifProfile {
    MotifProfile::new(vec![
        vec![0.5, -1.0, 2.0, 0.0],
        vec![1.5, 0.25, -0.5, 3.0],
        vec![-2.0, 1.0, 0.0, 0.75],
        vec![0.0, 2.5, 1.0, -1.5],
    ])
    .unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-10
}

// ─── score_window ───────────────────────────────────────────

#[test]
fn score_unit_profile() {
    assert!(approx(score_window(b"AC", &unit_profile()).unwrap(), 2.0));
    assert!(approx(score_window(b"CA", &unit_profile()).unwrap(), 0.0));
}

#[test]
fn score_matches_hand_computed_sum() {
    // 0.5 + 0.25 + 0.0 - 1.5
    assert!(approx(score_window(b"ACGT", &mixed_profile()).unwrap(), -0.75));
}

#[test]
fn score_is_order_sensitive() {
    let p = mixed_profile();
    let forward = score_window(b"ACGT", &p).unwrap();
    let permuted = score_window(b"TGCA", &p).unwrap();
    assert!(approx(permuted, 0.5));
    assert!(!approx(forward, permuted));
}

#[test]
fn score_non_canonical_contributes_zero() {
    assert!(approx(score_window(b"ANGT", &mixed_profile()).unwrap(), -1.0));
    assert!(approx(score_window(b"----", &mixed_profile()).unwrap(), 0.0));
}

#[test]
fn score_is_case_insensitive() {
    let p = mixed_profile();
    assert_eq!(
        score_window(b"acgt", &p).unwrap(),
        score_window(b"ACGT", &p).unwrap()
    );
}

#[test]
fn score_rejects_wrong_width() {
    let err = score_window(b"ACG", &mixed_profile()).unwrap_err();
    assert!(matches!(err, BioError::InvalidArgument { .. }));
}

// ─── scan_sequence ──────────────────────────────────────────

#[test]
fn scan_scores_both_strands() {
    let records = scan_sequence(b"ACGTTG", &mixed_profile());
    assert_eq!(records.len(), 3);

    assert_eq!(records[0].position, 0);
    assert!(approx(records[0].forward, -0.75));
    assert!(approx(records[0].reverse, -0.75));

    assert!(approx(records[1].forward, 2.0));
    assert!(approx(records[1].reverse, -0.25));
    assert!(approx(records[1].best, 2.0));
    assert_eq!(records[1].strand(), Strand::Forward);

    assert!(approx(records[2].forward, 2.25));
    assert!(approx(records[2].reverse, 5.5));
    assert!(approx(records[2].best, 5.5));
    assert_eq!(records[2].strand(), Strand::Reverse);
}

#[test]
fn scan_reverse_uses_reverse_complement() {
    let p = mixed_profile();
    for rec in scan_sequence(b"GATTACAGG", &p) {
        let window = &b"GATTACAGG"[rec.position..rec.position + p.width()];
        let rc = reverse_complement(window);
        assert!(approx(rec.reverse, score_window(&rc, &p).unwrap()));
    }
}

#[test]
fn scan_short_sequence_is_empty() {
    assert!(scan_sequence(b"ACG", &mixed_profile()).is_empty());
    assert!(scan_sequence(b"", &unit_profile()).is_empty());
}

#[test]
fn scan_exact_width_yields_one_record() {
    let records = scan_sequence(b"AC", &unit_profile());
    assert_eq!(records.len(), 1);
    assert!(approx(records[0].forward, 2.0));
    // reverse complement of AC is GT
    assert!(approx(records[0].reverse, 0.0));
}

#[test]
fn best_hit_prefers_highest_then_earliest() {
    let records = scan_sequence(b"ACGTTG", &mixed_profile());
    assert_eq!(best_hit(&records).unwrap().position, 2);

    let tied = scan_sequence(b"ACAC", &unit_profile());
    // AC at 0 and 2 both score 2.0
    assert_eq!(best_hit(&tied).unwrap().position, 0);
    assert!(best_hit(&[]).is_none());
}

// ─── properties ─────────────────────────────────────────────

fn dna_strategy(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T'), Just(b'N')],
        0..max_len,
    )
}

proptest! {
    #[test]
    fn scan_covers_every_offset(seq in dna_strategy(60)) {
        let p = mixed_profile();
        let records = scan_sequence(&seq, &p);
        let expected = (seq.len() + 1).saturating_sub(p.width());
        prop_assert_eq!(records.len(), expected);
        for (i, rec) in records.iter().enumerate() {
            prop_assert_eq!(rec.position, i);
            prop_assert_eq!(rec.best, rec.forward.max(rec.reverse));
        }
    }

    #[test]
    fn scan_forward_matches_score_window(seq in dna_strategy(60)) {
        let p = mixed_profile();
        for rec in scan_sequence(&seq, &p) {
            let window = &seq[rec.position..rec.position + p.width()];
            prop_assert!(approx(rec.forward, score_window(window, &p).unwrap()));
        }
    }
}
