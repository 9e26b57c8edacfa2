use tasklet_core::task::TaskId;

#[derive(
  Clone, Copy, PartialEq, Eq,
)]
pub enum ThemeMode {
  Day,
  Night
}

impl ThemeMode {
  pub fn as_class(
    self
  ) -> &'static str {
    match self {
      | Self::Day => "theme-day",
      | Self::Night => "theme-night"
    }
  }

  pub fn next(self) -> Self {
    match self {
      | Self::Day => Self::Night,
      | Self::Night => Self::Day
    }
  }

  /// Persisted-record value: the theme record is a boolean flag.
  pub fn storage_flag(
    self
  ) -> &'static str {
    match self {
      | Self::Day => "false",
      | Self::Night => "true"
    }
  }

  pub fn toggle_label(
    self
  ) -> &'static str {
    match self {
      | Self::Day => "Night",
      | Self::Night => "Day"
    }
  }
}

/// The open edit surface: which task it targets, the in-progress text,
/// and an inline validation error that keeps the dialog open.
#[derive(Clone, PartialEq)]
pub struct EditorState {
  pub task_id: TaskId,
  pub draft:   String,
  pub error:   Option<String>
}
