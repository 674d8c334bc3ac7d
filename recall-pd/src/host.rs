//! Host-side model management.
//!
//! The host holds exactly one engine at a time. Switching models throws the
//! current engine away and builds a fresh one from the registry; nothing is
//! carried across a switch.

use recall_core::{PublicChunk, RecallConfig};
use tracing::{info, warn};

use crate::engine::DeclarativeEngine;
use crate::error::{PdError, Result};
use crate::moves::Move;
use crate::strategy::{ModelSelection, PdModel};
use crate::trace::Trace;

/// Builds a fresh engine for one model selection.
pub type ModelFactory = Box<dyn Fn() -> Box<dyn PdModel>>;

/// The engines a host can switch between.
#[derive(Default)]
pub struct ModelRegistry {
    factories: Vec<(ModelSelection, ModelFactory)>,
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("models", &self.selections())
            .finish()
    }
}

impl ModelRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the declarative-only engine under
    /// [`ModelSelection::StevensSwiftFree`].
    ///
    /// # Errors
    /// Returns [`PdError::Core`] if the configuration is out of range.
    pub fn with_defaults(config: RecallConfig) -> Result<Self> {
        config.validate()?;
        let mut registry = Self::new();
        registry.register(ModelSelection::StevensSwiftFree, move || -> Box<dyn PdModel> {
            Box::new(DeclarativeEngine::from_valid_config(&config))
        });
        Ok(registry)
    }

    /// Register (or replace) the factory for `selection`.
    pub fn register<F>(&mut self, selection: ModelSelection, factory: F)
    where
        F: Fn() -> Box<dyn PdModel> + 'static,
    {
        self.factories.retain(|(s, _)| *s != selection);
        self.factories.push((selection, Box::new(factory)));
    }

    /// Whether `selection` can be built.
    #[must_use]
    pub fn is_registered(&self, selection: ModelSelection) -> bool {
        self.factories.iter().any(|(s, _)| *s == selection)
    }

    /// Registered selections in cycling order.
    #[must_use]
    pub fn selections(&self) -> Vec<ModelSelection> {
        ModelSelection::ALL
            .into_iter()
            .filter(|s| self.is_registered(*s))
            .collect()
    }

    /// Build a fresh engine for `selection`.
    #[must_use]
    pub fn build(&self, selection: ModelSelection) -> Option<Box<dyn PdModel>> {
        self.factories
            .iter()
            .find(|(s, _)| *s == selection)
            .map(|(_, factory)| factory())
    }

    /// The first registered selection after `current`, wrapping around.
    /// May be `current` itself when it is the only one registered.
    #[must_use]
    pub fn next_after(&self, current: ModelSelection) -> Option<ModelSelection> {
        let mut candidate = current;
        for _ in 0..ModelSelection::ALL.len() {
            candidate = candidate.next();
            if self.is_registered(candidate) {
                return Some(candidate);
            }
        }
        None
    }
}

/// Owns the active engine and forwards player intents to it.
pub struct Host {
    registry: ModelRegistry,
    selection: ModelSelection,
    model: Box<dyn PdModel>,
}

impl std::fmt::Debug for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Host")
            .field("selection", &self.selection)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl Host {
    /// Start with `initial`, running it once so it is ready for input.
    ///
    /// # Errors
    /// Returns [`PdError::ModelUnavailable`] if `initial` is not registered.
    pub fn new(registry: ModelRegistry, initial: ModelSelection) -> Result<Self> {
        let mut model = registry
            .build(initial)
            .ok_or(PdError::ModelUnavailable(initial.description()))?;
        start(model.as_mut(), initial);
        info!(model = initial.description(), "host started");
        Ok(Self {
            registry,
            selection: initial,
            model,
        })
    }

    /// The active selection.
    #[must_use]
    pub fn selection(&self) -> ModelSelection {
        self.selection
    }

    /// Replace the engine with a fresh instance of the next registered model.
    pub fn switch_model(&mut self) -> ModelSelection {
        let Some(next) = self.registry.next_after(self.selection) else {
            return self.selection;
        };
        let Some(mut model) = self.registry.build(next) else {
            return self.selection;
        };
        start(model.as_mut(), next);
        info!(from = self.selection.description(), to = next.description(), "switched model");
        self.model = model;
        self.selection = next;
        next
    }

    /// Restart the session of the active engine.
    pub fn reset(&mut self) {
        self.model.reset();
    }

    /// Ask the active engine for a decision.
    ///
    /// # Errors
    /// Propagates the engine's [`PdError::DecisionPending`].
    pub fn run(&mut self) -> Result<Move> {
        self.model.run()
    }

    /// Forward the player's choice if the engine is waiting for one.
    pub fn choose(&mut self, action: &str) {
        if self.model.waiting_for_action() {
            self.model.choose(action);
        }
    }

    /// Whether the engine waits for the player.
    #[must_use]
    pub fn waiting_for_action(&self) -> bool {
        self.model.waiting_for_action()
    }

    /// Outcome text of the last round.
    #[must_use]
    pub fn feedback(&self) -> &str {
        self.model.feedback()
    }

    /// Reasoning trace.
    #[must_use]
    pub fn trace(&self) -> &Trace {
        self.model.trace()
    }

    /// `(agent, opponent)` totals.
    #[must_use]
    pub fn scores(&self) -> (i32, i32) {
        (self.model.agent_score(), self.model.opponent_score())
    }

    /// Declarative memory contents.
    #[must_use]
    pub fn dm_content(&self) -> Vec<PublicChunk> {
        self.model.dm_content()
    }

    /// Model source or description.
    #[must_use]
    pub fn model_text(&self) -> &str {
        self.model.model_text()
    }
}

fn start(model: &mut dyn PdModel, selection: ModelSelection) {
    if let Err(e) = model.run() {
        warn!(model = selection.description(), error = %e, "fresh model refused to run");
    }
}
