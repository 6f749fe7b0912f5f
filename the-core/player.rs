use crate::math::Vec3;

/// The connected player that raises events, as seen by plugins.
///
/// Plugins only ever receive `&mut dyn Player` for the duration of one
/// handler call. The implementation owns the player's state machine; plugins
/// influence it through cancellation and mutable event slots, or through the
/// few direct operations exposed here.
pub trait Player {
  fn name(&self) -> &str;

  fn position(&self) -> Vec3;

  /// Current `(yaw, pitch)` in degrees.
  fn rotation(&self) -> (f64, f64);

  fn health(&self) -> f64;

  fn food(&self) -> i32;

  /// Sends a chat line to this player only.
  fn send_message(&mut self, message: &str);

  /// Shows the coordinates overlay to the player.
  fn show_coordinates(&mut self);
}
