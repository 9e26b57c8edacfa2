use tasklet_core::task::Task;

use super::types::ThemeMode;

const TASKS_STORAGE_KEY: &str =
  "tasklet.tasks";
const THEME_STORAGE_KEY: &str =
  "tasklet.theme";

fn local_storage()
-> Option<web_sys::Storage> {
  web_sys::window().and_then(
    |window| {
      window
        .local_storage()
        .ok()
        .flatten()
    }
  )
}

/// Loads the persisted task record. Absent or unparseable records
/// degrade to an empty collection, never to an error.
pub fn load_tasks() -> Vec<Task> {
  let stored = local_storage()
    .and_then(|storage| {
      storage
        .get_item(TASKS_STORAGE_KEY)
        .ok()
        .flatten()
    });

  if let Some(raw) = stored {
    match serde_json::from_str::<
      Vec<Task>
    >(&raw)
    {
      | Ok(tasks) => return tasks,
      | Err(error) => {
        tracing::error!(
          %error,
          "failed parsing task record \
           from local storage; \
           starting empty"
        );
      }
    }
  }

  Vec::new()
}

/// Full rewrite of the task record; there is no incremental form.
pub fn save_tasks(tasks: &[Task]) {
  if let Some(storage) =
    local_storage()
    && let Ok(json) =
      serde_json::to_string(tasks)
  {
    let _ = storage.set_item(
      TASKS_STORAGE_KEY,
      &json
    );
  }
}

pub fn load_theme_mode() -> ThemeMode {
  let stored = local_storage()
    .and_then(|storage| {
      storage
        .get_item(THEME_STORAGE_KEY)
        .ok()
        .flatten()
    });

  match stored.as_deref() {
    | Some("true") => ThemeMode::Night,
    | _ => ThemeMode::Day
  }
}

pub fn save_theme_mode(
  theme: ThemeMode
) {
  if let Some(storage) =
    local_storage()
  {
    let _ = storage.set_item(
      THEME_STORAGE_KEY,
      theme.storage_flag()
    );
  }
}
