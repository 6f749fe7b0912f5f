/// Cancellation token shared by every plugin invoked for one event.
///
/// A context is created by the player for a single dispatch and dropped once
/// the player has decided what to do with the event. Once canceled it stays
/// canceled.
#[derive(Debug, Default)]
pub struct EventContext {
  canceled: bool,
}

impl EventContext {
  pub const fn new() -> Self {
    Self { canceled: false }
  }

  /// Marks the event as canceled. Calling this more than once has no further
  /// effect.
  pub fn cancel(&mut self) {
    self.canceled = true;
  }

  pub const fn canceled(&self) -> bool {
    self.canceled
  }
}
