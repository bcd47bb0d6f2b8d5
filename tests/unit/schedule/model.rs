use super::*;

fn v(x: f32) -> CondVector {
    CondVector::new(vec![x])
}

fn schedule(entries: &[(usize, f32)]) -> Schedule {
    Schedule::new(
        entries
            .iter()
            .map(|&(end_at_step, x)| ScheduledCond {
                end_at_step,
                cond: v(x),
            })
            .collect(),
    )
}

#[test]
fn cond_at_uses_exclusive_ends() {
    let s = schedule(&[(3, 1.0), (5, 2.0)]);
    assert_eq!(s.cond_at(0), Some(&v(1.0)));
    assert_eq!(s.cond_at(2), Some(&v(1.0)));
    assert_eq!(s.cond_at(3), Some(&v(2.0)));
    assert_eq!(s.cond_at(4), Some(&v(2.0)));
}

#[test]
fn cond_at_past_end_uses_last_entry() {
    let s = schedule(&[(3, 1.0), (5, 2.0)]);
    assert_eq!(s.cond_at(9), Some(&v(2.0)));
    assert_eq!(Schedule::default().cond_at(0), None);
}

#[test]
fn push_step_widens_equal_runs() {
    let mut s = Schedule::default();
    for (step, x) in [1.0, 1.0, 2.0, 2.0, 2.0, 1.0].into_iter().enumerate() {
        s.push_step(step, v(x));
    }
    assert_eq!(s, schedule(&[(2, 1.0), (5, 2.0), (6, 1.0)]));
    assert_eq!(s.end_step(), 6);
}

#[test]
fn serializes_as_entry_list() {
    let s = Schedule::constant(v(0.5), 4);
    assert_eq!(
        serde_json::to_string(&s).unwrap(),
        r#"[{"end_at_step":4,"cond":[0.5]}]"#
    );
}
