//! Process exit codes reported to CI. These numbers are consumed by scripts
//! outside this crate and must never be renumbered.

pub const OK: i32 = 0;

pub const BUILD_HAS_CHANGES: i32 = 1;
pub const BUILD_HAS_ERRORS: i32 = 2;
pub const BUILD_FAILED: i32 = 3;
pub const BUILD_NO_STORIES: i32 = 4;
pub const BUILD_WAS_LIMITED: i32 = 5;

pub const ACCOUNT_QUOTA_REACHED: i32 = 11;
pub const ACCOUNT_PAYMENT_REQUIRED: i32 = 12;

pub const INVALID_OPTIONS: i32 = 254;
pub const UNKNOWN_ERROR: i32 = 255;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_stable_values() {
    assert_eq!(OK, 0);
    assert_eq!(BUILD_WAS_LIMITED, 5);
    assert_eq!(ACCOUNT_QUOTA_REACHED, 11);
    assert_eq!(ACCOUNT_PAYMENT_REQUIRED, 12);
  }
}
