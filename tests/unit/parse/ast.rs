use super::*;

fn leaf(s: &str) -> Expression {
    Expression::Leaf(s.to_owned())
}

fn edit(children: Vec<Expression>, at: usize) -> Expression {
    Expression::Sequence {
        children,
        boundaries: vec![StepLiteral::Absolute(at)],
    }
}

#[test]
fn leaves_merge() {
    assert_eq!(leaf("a ").concat(leaf("b")), leaf("a b"));
}

#[test]
fn empty_leaf_is_identity() {
    let g = edit(vec![leaf("x"), leaf("y")], 3);
    assert_eq!(leaf("").concat(g.clone()), g);
    assert_eq!(g.clone().concat(leaf("")), g);
}

#[test]
fn text_distributes_into_group() {
    let g = edit(vec![leaf("b"), leaf("c")], 5);
    let e = leaf("a ").concat(g).concat(leaf(" d"));
    assert_eq!(e, edit(vec![leaf("a b d"), leaf("a c d")], 5));
}

#[test]
fn adjacent_groups_nest_left_to_right() {
    let first = edit(vec![leaf("a"), leaf("b")], 2);
    let second = edit(vec![leaf("x"), leaf("y")], 4);
    let e = first.concat(second);
    assert_eq!(
        e,
        edit(
            vec![
                edit(vec![leaf("ax"), leaf("ay")], 4),
                edit(vec![leaf("bx"), leaf("by")], 4),
            ],
            2,
        )
    );
    assert_eq!(e.leaves(), vec!["ax", "ay", "bx", "by"]);
}
