use crate::error::Result;
use crate::models::{TrackFeatures, Vibe};
use async_trait::async_trait;

/// Ordered rule list, first match wins. Missing numeric fields read as 0.0,
/// so a track with no descriptors falls through every rule.
pub fn classify_rules(features: &TrackFeatures) -> Option<Vibe> {
    let valence = features.valence.unwrap_or(0.0);
    let energy = features.energy.unwrap_or(0.0);
    let danceability = features.danceability.unwrap_or(0.0);
    let tempo = features.tempo.unwrap_or(0.0);

    if valence > 0.7 && energy > 0.7 {
        return Some(Vibe::HypeGym);
    }
    if valence > 0.6 && danceability > 0.6 && energy < 0.6 {
        return Some(Vibe::ChillVibes);
    }
    if valence < 0.3 && energy < 0.5 {
        return Some(Vibe::SadBops);
    }
    if (100.0..=130.0).contains(&tempo) && energy >= 0.5 {
        return Some(Vibe::NightDrive);
    }
    if features
        .genres
        .iter()
        .any(|g| g.to_lowercase().contains("lo-fi"))
    {
        return Some(Vibe::LoFiFocus);
    }
    if valence >= 0.5 && energy < 0.6 {
        return Some(Vibe::RomanticMood);
    }

    None
}

/// Pure, total classification: the rules, or the default fallback.
pub fn classify(features: &TrackFeatures) -> Vibe {
    classify_rules(features).unwrap_or(Vibe::ChillVibes)
}

/// Extension point for refining a classification with an external
/// text-generation service when no rule matched. Returning `Ok(None)`
/// defers to the default fallback.
#[async_trait]
pub trait VibeRefiner: Send + Sync {
    async fn refine(&self, features: &TrackFeatures, prompt: &str) -> Result<Option<Vibe>>;
}

/// The reference refiner: makes no network call and always defers, even
/// when a credential and prompt are both configured.
pub struct NoopRefiner;

#[async_trait]
impl VibeRefiner for NoopRefiner {
    async fn refine(&self, _features: &TrackFeatures, _prompt: &str) -> Result<Option<Vibe>> {
        Ok(None)
    }
}

/// Rule classifier with an injectable refinement strategy. The refiner is
/// consulted only when no rule matched and a prompt was supplied.
pub struct Classifier {
    refiner: Box<dyn VibeRefiner>,
    prompt: Option<String>,
}

impl Classifier {
    pub fn new(refiner: Box<dyn VibeRefiner>, prompt: Option<String>) -> Self {
        Self { refiner, prompt }
    }

    /// Rules only, no refinement hook.
    pub fn rule_based() -> Self {
        Self::new(Box::new(NoopRefiner), None)
    }

    pub async fn assign(&self, features: &TrackFeatures) -> Result<Vibe> {
        if let Some(vibe) = classify_rules(features) {
            return Ok(vibe);
        }
        if let Some(prompt) = &self.prompt {
            if let Some(vibe) = self.refiner.refine(features, prompt).await? {
                return Ok(vibe);
            }
        }
        Ok(Vibe::ChillVibes)
    }
}
