//! Name transformation engine.
//!
//! Resolves the source text of a [`TransformRequest`], applies the matching
//! randomization primitive, clamps the result to [`MAX_NAME_LENGTH`]
//! units and hands the new name to the [`ProfileService`]. Planning
//! is pure and synchronous; the profile update is the only await point.

pub mod request;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::config::{EmptySourcePolicy, EngineConfig, MAX_NAME_LENGTH};
use crate::error::TransformError;
use crate::profile::ProfileService;
use crate::random;
use crate::text::{segment_with, GraphemeSequence, PoolSelection};

pub use request::{Action, TransformRequest};

/// Outcome of one invocation: whether the profile accepted the name, and the
/// name that was attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformResult {
    pub success: bool,
    pub new_name: String,
}

/// Applies transformations with a caller-supplied random source.
pub struct NameEngine<R> {
    rng: R,
    config: EngineConfig,
}

impl NameEngine<StdRng> {
    /// Engine with a fixed seed. Same seed and requests give the same names.
    pub fn seeded(seed: u64, config: EngineConfig) -> Self {
        Self::new(StdRng::seed_from_u64(seed), config)
    }
}

impl<R: Rng> NameEngine<R> {
    pub fn new(rng: R, config: EngineConfig) -> Self {
        Self { rng, config }
    }

    /// Compute the new name without side effects.
    ///
    /// Fails only when the source text is empty and the empty-source policy
    /// is [`EmptySourcePolicy::Reject`].
    pub fn plan(
        &mut self,
        request: &TransformRequest,
        current_name: &str,
    ) -> Result<String, TransformError> {
        let mut seq = match request.action {
            Action::Replace => segment_with(
                request.source_text.as_deref().unwrap_or_default(),
                self.config.segmentation,
            ),
            Action::Shuffle => {
                let source = self.source(request, current_name)?;
                random::shuffle(&mut self.rng, &source)
            }
            Action::Sort => {
                let source = self.source(request, current_name)?;
                random::random_sort(&mut self.rng, &source)
            }
            Action::Random => self.generate(request),
        };
        seq.truncate(MAX_NAME_LENGTH);
        Ok(seq.join())
    }

    /// Plan the new name and push it to `profiles`.
    ///
    /// Never fails: a rejected plan or a failed update both come back as
    /// `success == false`. At most one update call is made and its outcome is
    /// reported unchanged.
    pub async fn transform<P>(
        &mut self,
        request: &TransformRequest,
        account: &str,
        profiles: &P,
    ) -> TransformResult
    where
        P: ProfileService,
    {
        let current_name = if request.action.uses_current_name() {
            profiles.current_name(account).unwrap_or_default()
        } else {
            String::new()
        };

        let new_name = match self.plan(request, &current_name) {
            Ok(name) => name,
            Err(e) => {
                warn!(account, action = ?request.action, error = %e, "name transform rejected");
                return TransformResult {
                    success: false,
                    new_name: String::new(),
                };
            }
        };
        debug!(account, action = ?request.action, name = %new_name, "new name planned");

        let success = profiles.update_display_name(account, &new_name).await;
        if !success {
            warn!(account, name = %new_name, "profile update failed");
        }
        TransformResult { success, new_name }
    }

    /// Source units for Shuffle and Sort, clamped before permuting so the
    /// result is a permutation of the first `MAX_NAME_LENGTH` units.
    fn source(
        &self,
        request: &TransformRequest,
        current_name: &str,
    ) -> Result<GraphemeSequence, TransformError> {
        let text = request.source_text.as_deref().unwrap_or(current_name);
        if text.is_empty() && self.config.empty_source == EmptySourcePolicy::Reject {
            return Err(TransformError::EmptySource);
        }
        let mut seq = segment_with(text, self.config.segmentation);
        seq.truncate(MAX_NAME_LENGTH);
        Ok(seq)
    }

    fn generate(&mut self, request: &TransformRequest) -> GraphemeSequence {
        let length = request
            .length_hint
            .map(|n| n.clamp(1, MAX_NAME_LENGTH as i64) as usize)
            .unwrap_or_else(|| self.config.effective_random_length());

        let selection = request
            .resource_hint
            .as_deref()
            .and_then(PoolSelection::from_hint)
            .unwrap_or_else(|| self.random_selection());

        let alphabet = selection.alphabet();
        let sampled = random::sample(&mut self.rng, &alphabet, length);
        let mut seq = random::shuffle(&mut self.rng, &sampled);
        seq.truncate(length);
        debug!(?selection, length, "generated name");
        seq
    }

    fn random_selection(&mut self) -> PoolSelection {
        let last = PoolSelection::RANDOM_CHOICES.len() as i64 - 1;
        let index = random::uniform_int(&mut self.rng, 0, last) as usize;
        PoolSelection::RANDOM_CHOICES[index]
    }
}
