use std::{
  fmt,
  ops::{
    Add,
    Sub,
  },
};

use serde::{
  Deserialize,
  Serialize,
};

/// A point or offset in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
  pub x: f64,
  pub y: f64,
  pub z: f64,
}

impl Vec3 {
  pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

  #[must_use]
  pub const fn new(x: f64, y: f64, z: f64) -> Self {
    Self { x, y, z }
  }

  #[must_use]
  pub fn length(self) -> f64 {
    (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
  }

  #[must_use]
  pub fn distance(self, other: Self) -> f64 {
    (self - other).length()
  }

  /// Whether every component lies in `[0, 1]`, the range of a relative click
  /// position on a block face.
  #[must_use]
  pub fn in_unit_cube(self) -> bool {
    [self.x, self.y, self.z]
      .iter()
      .all(|c| (0.0..=1.0).contains(c))
  }
}

impl Add for Vec3 {
  type Output = Self;

  fn add(self, rhs: Self) -> Self {
    Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
  }
}

impl Sub for Vec3 {
  type Output = Self;

  fn sub(self, rhs: Self) -> Self {
    Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
  }
}

impl fmt::Display for Vec3 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:.2}, {:.2}, {:.2}", self.x, self.y, self.z)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn distance_is_symmetric() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(4.0, 6.0, 3.0);
    assert_eq!(a.distance(b), 5.0);
    assert_eq!(b.distance(a), 5.0);
  }

  #[test]
  fn unit_cube_bounds_are_inclusive() {
    assert!(Vec3::new(0.0, 1.0, 0.5).in_unit_cube());
    assert!(!Vec3::new(0.0, 1.01, 0.5).in_unit_cube());
    assert!(!Vec3::new(-0.1, 0.0, 0.0).in_unit_cube());
  }

  #[test]
  fn display_uses_two_decimals() {
    assert_eq!(Vec3::new(1.0, 64.5, -3.25).to_string(), "1.00, 64.50, -3.25");
  }
}
