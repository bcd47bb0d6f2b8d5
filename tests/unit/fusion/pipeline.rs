use super::*;
use crate::foundation::core::CondVector;
use crate::fusion::encoder::StaticEncoder;
use crate::fusion::settings::FusionSettings;
use crate::tensor::padding::Padding;

fn v(values: &[f32]) -> CondVector {
    CondVector::new(values.to_vec())
}

fn encoder() -> StaticEncoder {
    StaticEncoder::new(v(&[0.0]))
        .with_prompt("a", v(&[1.0]))
        .with_prompt("b", v(&[3.0]))
        .with_prompt("[a:b:2]", v(&[9.0]))
}

struct Miscounting(Padding);

impl PromptEncoder for Miscounting {
    fn encode(&mut self, _: &[String], _: usize) -> anyhow::Result<Vec<Schedule>> {
        Ok(Vec::new())
    }

    fn padding(&self) -> &Padding {
        &self.0
    }
}

#[test]
fn batch_is_encoded_once_with_distinct_leaves() {
    let mut enc = encoder();
    let ctx = FusionContext::default();
    let out = learned_conditioning(&mut enc, &["[a:b:2]", "{b|a}"], 4, &ctx).unwrap();
    assert_eq!(out.len(), 2);
    assert_eq!(enc.requests(), [vec!["a".to_owned(), "b".to_owned()]]);
    assert_eq!(out[1], Schedule::constant(v(&[2.0]), 4));
}

#[test]
fn disabled_settings_pass_prompts_through() {
    let mut enc = encoder();
    let settings = FusionSettings {
        enabled: false,
        ..FusionSettings::default()
    };
    let out =
        learned_conditioning(&mut enc, &["[a:b:2]"], 4, &FusionContext::new(settings)).unwrap();
    assert_eq!(out, vec![Schedule::constant(v(&[9.0]), 4)]);
}

#[test]
fn zero_steps_and_bad_settings_are_rejected() {
    let mut enc = encoder();
    let ctx = FusionContext::default();
    assert!(matches!(
        learned_conditioning(&mut enc, &["a"], 0, &ctx),
        Err(FusionError::Validation(_))
    ));

    let ctx = FusionContext::new(FusionSettings {
        curve_scale: 3.0,
        ..FusionSettings::default()
    });
    assert!(matches!(
        learned_conditioning(&mut enc, &["a"], 4, &ctx),
        Err(FusionError::Validation(_))
    ));
    assert!(enc.requests().is_empty());
}

#[test]
fn syntax_errors_abort_before_encoding() {
    let mut enc = encoder();
    let err = learned_conditioning(&mut enc, &["a", "[a:b"], 4, &FusionContext::default())
        .unwrap_err();
    assert!(matches!(err, FusionError::Syntax(_)));
    assert!(enc.requests().is_empty());
}

#[test]
fn encoder_failures_surface_as_encoder_errors() {
    let mut enc = encoder();
    let err =
        learned_conditioning(&mut enc, &["c"], 4, &FusionContext::default()).unwrap_err();
    assert!(matches!(err, FusionError::Encoder(_)));

    let mut short = Miscounting(Padding::default());
    let err =
        learned_conditioning(&mut short, &["a"], 4, &FusionContext::default()).unwrap_err();
    assert!(err.to_string().contains("0 schedules for 1 prompts"));
}
