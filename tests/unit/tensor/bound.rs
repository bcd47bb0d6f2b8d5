use super::*;
use crate::schedule::model::ScheduledCond;
use crate::tensor::builder::TensorBuilder;
use crate::tensor::padding::Padding;

fn v(values: &[f32]) -> CondVector {
    CondVector::new(values.to_vec())
}

#[test]
fn binding_follows_encoder_schedule() {
    let binding = Binding::new(Schedule::new(vec![
        ScheduledCond {
            end_at_step: 2,
            cond: v(&[1.0]),
        },
        ScheduledCond {
            end_at_step: 4,
            cond: v(&[2.0]),
        },
    ]))
    .unwrap();
    assert_eq!(binding.cond_at(1), &v(&[1.0]));
    assert_eq!(binding.cond_at(2), &v(&[2.0]));
    assert_eq!(binding.cond_at(7), &v(&[2.0]));
    assert!(Binding::new(Schedule::default()).is_none());
}

#[test]
fn interpolate_walks_the_tree() {
    let expr = crate::parse::parser::parse("[a:b:2]").unwrap();
    let tensor = TensorBuilder::new(&expr, 4)
        .unwrap()
        .build(
            vec![
                Schedule::constant(v(&[1.0]), 4),
                Schedule::constant(v(&[2.0]), 4),
            ],
            &Padding::default(),
            None,
            Geometry::Linear,
        )
        .unwrap();
    assert_eq!(tensor.interpolate(0.25, 1), v(&[1.0]));
    assert_eq!(tensor.interpolate(0.5, 2), v(&[2.0]));
    assert_eq!(tensor.database().len(), 2);
}

#[test]
fn anchor_is_padded_and_used_by_spherical_blends() {
    let expr = crate::parse::parser::parse("{a|b}").unwrap();
    let bindings = vec![
        Schedule::constant(v(&[2.0, 1.0]), 4),
        Schedule::constant(v(&[1.0, 2.0]), 4),
    ];
    let geometry = Geometry::Spherical { scale: 1.0 };
    let anchored = TensorBuilder::new(&expr, 4)
        .unwrap()
        .build(
            bindings.clone(),
            &Padding::new(v(&[1.0])),
            Some(&Schedule::constant(v(&[1.0]), 4)),
            geometry,
        )
        .unwrap();
    let free = TensorBuilder::new(&expr, 4)
        .unwrap()
        .build(bindings, &Padding::new(v(&[1.0])), None, geometry)
        .unwrap();

    let out = anchored.interpolate(0.0, 0);
    let h = 1.0 + std::f32::consts::FRAC_1_SQRT_2;
    assert!(out.as_slice().iter().all(|x| (x - h).abs() < 1e-5), "{out:?}");
    assert_ne!(out, free.interpolate(0.0, 0));
}
