use super::*;

#[test]
fn encodes_known_prompts_and_records_requests() {
    let mut enc = StaticEncoder::new(CondVector::new(vec![0.0]))
        .with_prompt("a", vec![1.0_f32])
        .with_prompt("b", vec![2.0_f32]);
    let out = enc
        .encode(&["b".to_owned(), "a".to_owned()], 3)
        .unwrap();
    assert_eq!(out[0], Schedule::constant(CondVector::new(vec![2.0]), 3));
    assert_eq!(out[1], Schedule::constant(CondVector::new(vec![1.0]), 3));
    assert_eq!(enc.requests(), [vec!["b".to_owned(), "a".to_owned()]]);
}

#[test]
fn unknown_prompt_fails() {
    let mut enc = StaticEncoder::default();
    let err = enc.encode(&["nope".to_owned()], 3).unwrap_err();
    assert!(err.to_string().contains("nope"));
}

#[test]
fn deserializes_lookup_table() {
    let enc: StaticEncoder =
        serde_json::from_str(r#"{"filler":[0.5,0.5],"prompts":{"cat":[1.0,2.0]}}"#).unwrap();
    assert_eq!(enc.padding().chunk_len(), 2);
    assert!(enc.requests().is_empty());
}
