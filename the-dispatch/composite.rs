use std::{
  any::Any,
  panic::{
    self,
    AssertUnwindSafe,
  },
  sync::Arc,
};

use serde::{
  Deserialize,
  Serialize,
};

use crate::{
  Capability,
  Handler,
  NopHandler,
  PluginEntry,
  PluginRegistry,
};

/// What happens when a plugin panics inside a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FaultPolicy {
  /// The panic unwinds into the player that dispatched the event.
  #[default]
  Propagate,
  /// The panic is caught and logged, and dispatch continues with the next
  /// plugin.
  Isolate,
}

/// Handler that fans every event out to the capable plugins of a registry.
///
/// Plugins are invoked in registration order with the same context and
/// payload. A canceled context does not stop the fan-out: every capable
/// plugin sees the event, and only the player acts on the cancellation after
/// dispatch returns.
#[derive(Debug)]
pub struct PluginHandler {
  registry:     Arc<PluginRegistry>,
  fault_policy: FaultPolicy,
}

impl PluginHandler {
  pub fn new(registry: impl Into<Arc<PluginRegistry>>) -> Self {
    Self {
      registry:     registry.into(),
      fault_policy: FaultPolicy::default(),
    }
  }

  #[must_use]
  pub fn with_fault_policy(mut self, fault_policy: FaultPolicy) -> Self {
    self.fault_policy = fault_policy;
    self
  }

  pub fn registry(&self) -> &PluginRegistry {
    &self.registry
  }

  pub fn fault_policy(&self) -> FaultPolicy {
    self.fault_policy
  }

  pub(crate) fn invoke(&self, entry: &PluginEntry, capability: Capability, call: impl FnOnce()) {
    match self.fault_policy {
      FaultPolicy::Propagate => call(),
      FaultPolicy::Isolate => {
        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(call)) {
          log::error!(
            "plugin '{}' panicked handling {}: {}",
            entry.name(),
            capability.name(),
            panic_message(payload.as_ref())
          );
        }
      },
    }
  }
}

/// Picks the handler for a set of plugins: [`NopHandler`] when there are
/// none, a [`PluginHandler`] otherwise.
pub fn handler_for(registry: impl Into<Arc<PluginRegistry>>, fault_policy: FaultPolicy) -> Arc<dyn Handler> {
  let registry = registry.into();
  if registry.is_empty() {
    Arc::new(NopHandler)
  } else {
    Arc::new(PluginHandler::new(registry).with_fault_policy(fault_policy))
  }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
  if let Some(message) = payload.downcast_ref::<&'static str>() {
    message
  } else if let Some(message) = payload.downcast_ref::<String>() {
    message
  } else {
    "non-string panic payload"
  }
}
