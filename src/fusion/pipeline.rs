use crate::foundation::error::{FusionError, FusionResult};
use crate::fusion::context::FusionContext;
use crate::fusion::encoder::PromptEncoder;
use crate::geometry::Geometry;
use crate::parse::parser::parse;
use crate::schedule::model::Schedule;
use crate::schedule::sampler::sample;
use crate::tensor::builder::TensorBuilder;
use crate::tensor::database::PromptDatabase;

/// Encode a batch of prompts into one compressed schedule each.
///
/// Every distinct leaf text across the batch reaches `encoder` exactly once, in a
/// single call. Any failure aborts the whole batch.
#[tracing::instrument(skip(encoder, prompts, ctx), fields(prompts = prompts.len()))]
pub fn learned_conditioning<E, S>(
    encoder: &mut E,
    prompts: &[S],
    total_steps: usize,
    ctx: &FusionContext,
) -> FusionResult<Vec<Schedule>>
where
    E: PromptEncoder + ?Sized,
    S: AsRef<str>,
{
    if total_steps == 0 {
        return Err(FusionError::validation("total_steps must be > 0"));
    }
    let settings = ctx.settings();
    settings.validate()?;

    if !settings.enabled {
        let raw: Vec<String> = prompts.iter().map(|p| p.as_ref().to_owned()).collect();
        return encode_checked(encoder, &raw, total_steps);
    }

    let builders = prompts
        .iter()
        .map(|p| {
            let expr = parse(p.as_ref())?;
            TensorBuilder::new(&expr, total_steps)
        })
        .collect::<FusionResult<Vec<_>>>()?;

    let mut batch = PromptDatabase::new();
    for builder in &builders {
        for text in builder.database().texts() {
            batch.register(text);
        }
    }
    tracing::debug!(leaves = batch.len(), "encoding distinct prompts");
    let encoded = encode_checked(encoder, batch.texts(), total_steps)?;

    let geometry = settings.geometry();
    let anchor = match geometry {
        Geometry::Spherical { .. } => ctx.anchor(),
        Geometry::Linear => None,
    };
    let padding = encoder.padding();

    builders
        .into_iter()
        .map(|builder| {
            let bindings = builder
                .database()
                .texts()
                .iter()
                .map(|text| {
                    batch
                        .index_of(text)
                        .and_then(|i| encoded.get(i))
                        .cloned()
                        .unwrap_or_default()
                })
                .collect();
            let tensor = builder.build(bindings, padding, anchor, geometry)?;
            Ok(sample(&tensor, total_steps))
        })
        .collect()
}

fn encode_checked<E>(
    encoder: &mut E,
    texts: &[String],
    total_steps: usize,
) -> FusionResult<Vec<Schedule>>
where
    E: PromptEncoder + ?Sized,
{
    let schedules = encoder
        .encode(texts, total_steps)
        .map_err(FusionError::encoder)?;
    if schedules.len() != texts.len() {
        return Err(FusionError::encoder(anyhow::anyhow!(
            "encoder returned {} schedules for {} prompts",
            schedules.len(),
            texts.len()
        )));
    }
    Ok(schedules)
}

#[cfg(test)]
#[path = "../../tests/unit/fusion/pipeline.rs"]
mod tests;
