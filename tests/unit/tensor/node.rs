use super::*;

fn v(x: f32) -> CondVector {
    CondVector::new(vec![x])
}

fn leaf(index: usize) -> TensorNode {
    TensorNode::Leaf { index }
}

fn eval(node: &TensorNode, t: f64, step: usize) -> CondVector {
    let query = Query {
        leaf: |i: usize| v(i as f32),
        anchor: None,
        geometry: Geometry::Linear,
    };
    node.eval(&query, t, step)
}

#[test]
fn sequence_boundary_step_goes_to_later_child() {
    let node = TensorNode::Sequence {
        children: vec![leaf(0), leaf(1)],
        starts: vec![0, 3],
    };
    assert_eq!(eval(&node, 0.0, 2), v(0.0));
    assert_eq!(eval(&node, 0.0, 3), v(1.0));
    assert_eq!(eval(&node, 0.0, 9), v(1.0));
}

#[test]
fn sequence_skips_empty_partitions() {
    let node = TensorNode::Sequence {
        children: vec![leaf(0), leaf(1), leaf(2)],
        starts: vec![0, 4, 4],
    };
    assert_eq!(eval(&node, 0.0, 4), v(2.0));
}

#[test]
fn fuse_folds_with_running_weight() {
    let node = TensorNode::Fuse {
        children: vec![leaf(0), leaf(3), leaf(6)],
        weights: vec![1.0, 1.0, 1.0],
    };
    // Equal weights give the arithmetic mean.
    let out = eval(&node, 0.0, 0);
    assert!((out.as_slice()[0] - 3.0).abs() < 1e-6);
}

#[test]
fn fuse_zero_weight_child_is_ignored() {
    let node = TensorNode::Fuse {
        children: vec![leaf(2), leaf(7)],
        weights: vec![1.0, 0.0],
    };
    assert_eq!(eval(&node, 0.5, 1), v(2.0));

    let node = TensorNode::Fuse {
        children: vec![leaf(2), leaf(7)],
        weights: vec![0.0, 1.0],
    };
    assert_eq!(eval(&node, 0.5, 1), v(7.0));
}

#[test]
fn curve_holds_outside_its_stops() {
    let node = TensorNode::Curve {
        children: vec![leaf(0), leaf(10)],
        stops: vec![0.25, 0.75],
        easing: Easing::Linear,
    };
    assert_eq!(eval(&node, 0.0, 0), v(0.0));
    assert_eq!(eval(&node, 0.25, 1), v(0.0));
    assert_eq!(eval(&node, 0.5, 2), v(5.0));
    assert_eq!(eval(&node, 0.75, 3), v(10.0));
}

#[test]
fn curve_picks_enclosing_segment() {
    let node = TensorNode::Curve {
        children: vec![leaf(0), leaf(10), leaf(20)],
        stops: vec![0.0, 0.5, 1.0],
        easing: Easing::Linear,
    };
    assert_eq!(eval(&node, 0.5, 0), v(10.0));
    assert_eq!(eval(&node, 0.75, 0), v(15.0));
}

#[test]
fn curve_easing_reshapes_progress() {
    let node = TensorNode::Curve {
        children: vec![leaf(0), leaf(10)],
        stops: vec![0.0, 1.0],
        easing: Easing::Bezier(vec![0.0, 0.0, 1.0]),
    };
    // Quadratic through (0, 0, 1): progress 0.5 maps to 0.25.
    assert_eq!(eval(&node, 0.5, 0), v(2.5));
}

#[test]
fn indices_follow_source_order() {
    let node = TensorNode::Fuse {
        children: vec![
            leaf(2),
            TensorNode::Sequence {
                children: vec![leaf(0), leaf(1)],
                starts: vec![0, 2],
            },
        ],
        weights: vec![1.0, 1.0],
    };
    assert_eq!(node.indices(), vec![2, 0, 1]);
}
