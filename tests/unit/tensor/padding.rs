use super::*;
use crate::schedule::model::ScheduledCond;

fn v(values: &[f32]) -> CondVector {
    CondVector::new(values.to_vec())
}

#[test]
fn pads_with_whole_filler_chunks() {
    let padding = Padding::new(v(&[0.0, -1.0]));
    let out = padding.pad_to(&v(&[5.0, 6.0]), 6).unwrap();
    assert_eq!(out, v(&[5.0, 6.0, 0.0, -1.0, 0.0, -1.0]));
}

#[test]
fn equal_length_is_untouched() {
    let padding = Padding::new(v(&[]));
    assert_eq!(padding.pad_to(&v(&[1.0]), 1).unwrap(), v(&[1.0]));
}

#[test]
fn partial_chunk_is_a_dimension_mismatch() {
    let padding = Padding::new(v(&[0.0, 0.0]));
    let err = padding.pad_to(&v(&[1.0]), 4).unwrap_err();
    assert!(matches!(
        err,
        FusionError::DimensionMismatch {
            expected: 4,
            got: 1,
            chunk: 2,
        }
    ));
}

#[test]
fn longer_than_target_or_empty_filler_fails() {
    let padding = Padding::new(v(&[0.0]));
    assert!(padding.pad_to(&v(&[1.0, 2.0]), 1).is_err());
    assert!(Padding::new(v(&[])).pad_to(&v(&[1.0]), 2).is_err());
}

#[test]
fn reconcile_pads_to_longest_vector() {
    let padding = Padding::new(v(&[9.0]));
    let mut schedules = vec![
        Schedule::constant(v(&[1.0]), 4),
        Schedule::new(vec![
            ScheduledCond {
                end_at_step: 2,
                cond: v(&[2.0, 2.0, 2.0]),
            },
            ScheduledCond {
                end_at_step: 4,
                cond: v(&[3.0, 3.0]),
            },
        ]),
    ];
    reconcile(&mut schedules, &padding).unwrap();
    assert_eq!(schedules[0].cond_at(0), Some(&v(&[1.0, 9.0, 9.0])));
    assert_eq!(schedules[1].cond_at(0), Some(&v(&[2.0, 2.0, 2.0])));
    assert_eq!(schedules[1].cond_at(3), Some(&v(&[3.0, 3.0, 9.0])));
}
