use chrono::Utc;
use gloo::console::log;
use tasklet_core::filter::Filter;
use tasklet_core::snapshot::{
  Snapshot,
  UserProfile
};
use tasklet_core::store::{
  StoreError,
  TaskStore
};
use tasklet_core::task::{
  Task,
  TaskId
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use yew::{
  Callback,
  Html,
  InputEvent,
  MouseEvent,
  TargetCast,
  classes,
  function_component,
  html,
  use_effect_with,
  use_mut_ref,
  use_state
};

use super::storage::{
  load_tasks,
  load_theme_mode,
  save_tasks,
  save_theme_mode
};
use super::types::EditorState;
use crate::components::{
  AddRow,
  EditModal,
  FilterTabs,
  Header,
  StatsBar,
  TaskList,
  Toolbar
};
use crate::config::load_app_config;
use crate::host::HostShell;

#[function_component(App)]
pub fn app() -> Html {
  let config =
    use_state(load_app_config);
  let host =
    use_state(HostShell::attach);
  let store = use_state(|| {
    TaskStore::from_tasks(load_tasks())
  });
  let theme =
    use_state(load_theme_mode);
  let profile =
    use_state(|| None::<UserProfile>);
  let draft = use_state(String::new);
  let editor =
    use_state(|| None::<EditorState>);
  // Live mirror of the task record for the host flush callback; state
  // handles captured at mount would read the first render's snapshot.
  let flush_tasks =
    use_mut_ref(Vec::<Task>::new);

  {
    let config = config.clone();
    let flush_tasks =
      flush_tasks.clone();
    let host = host.clone();
    let profile = profile.clone();
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "frontend mounted and hooks \
         initialized"
      );
      tracing::info!(
        attached = host.is_attached(),
        "attached to host shell"
      );

      host.init_presentation(
        &config.title
      );
      profile.set(host.user_profile());

      let accent = host
        .accent_color()
        .unwrap_or_else(|| {
          config
            .accent_fallback
            .clone()
        });
      apply_accent_color(&accent);

      host.on_viewport_collapsed(
        move || {
          tracing::info!(
            "viewport collapsed; \
             flushing task record"
          );
          save_tasks(
            flush_tasks
              .borrow()
              .as_slice()
          );
        }
      );

      || ()
    });
  }

  {
    let flush_tasks =
      flush_tasks.clone();
    use_effect_with(
      store.tasks().to_vec(),
      move |tasks| {
        save_tasks(tasks);
        *flush_tasks.borrow_mut() =
          tasks.clone();
        tracing::debug!(
          count = tasks.len(),
          "persisted task record"
        );
        || ()
      }
    );
  }

  {
    use_effect_with(
      *theme,
      move |theme| {
        save_theme_mode(*theme);
        tracing::debug!(
          theme = theme.as_class(),
          "persisted theme flag"
        );
        || ()
      }
    );
  }

  let on_draft_input = {
    let draft = draft.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        draft.set(input.value());
      }
    )
  };

  let on_add = {
    let config = config.clone();
    let draft = draft.clone();
    let host = host.clone();
    let store = store.clone();
    Callback::from(move |_: ()| {
      let text = (*draft).clone();
      let mut next = (*store).clone();
      let added = next
        .add_task(&text, Utc::now())
        .map(|task| task.id);

      match added {
        | Ok(_) => {
          draft.set(String::new());
          if config.haptics {
            host.haptic_pulse();
          }
          store.set(next);
        }
        | Err(
          StoreError::EmptyText
        ) => {
          host.notify(
            "Error",
            "Enter some task text \
             first"
          );
        }
      }
    })
  };

  let on_toggle = {
    let store = store.clone();
    Callback::from(
      move |id: TaskId| {
        let mut next =
          (*store).clone();
        if next
          .toggle_task(id)
          .is_some()
        {
          store.set(next);
        }
      }
    )
  };

  let on_delete = {
    let host = host.clone();
    let store = store.clone();
    Callback::from(
      move |id: TaskId| {
        let host = (*host).clone();
        let store = store.clone();
        spawn_local(async move {
          let confirmed = host
            .confirm(
              "Delete task?",
              "The task will be \
               removed for good",
              "Delete"
            )
            .await;
          if !confirmed {
            ui_debug(
              "task.delete",
              "delete cancelled"
            );
            return;
          }

          let mut next =
            (*store).clone();
          if next
            .delete_task(id)
            .is_some()
          {
            store.set(next);
          }
        });
      }
    )
  };

  let on_edit = {
    let editor = editor.clone();
    let store = store.clone();
    Callback::from(
      move |id: TaskId| {
        let mut next =
          (*store).clone();
        let Some(seed) = next
          .begin_edit(id)
          .map(|task| {
            task.text.clone()
          })
        else {
          return;
        };

        editor.set(Some(
          EditorState {
            task_id: id,
            draft:   seed,
            error:   None
          }
        ));
        store.set(next);
      }
    )
  };

  let on_editor_input = {
    let editor = editor.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        if let Some(mut current) =
          (*editor).clone()
        {
          current.draft =
            input.value();
          current.error = None;
          editor.set(Some(current));
        }
      }
    )
  };

  let on_editor_save = {
    let editor = editor.clone();
    let store = store.clone();
    Callback::from(move |_: ()| {
      let Some(current) =
        (*editor).clone()
      else {
        return;
      };

      let mut next = (*store).clone();
      match next
        .commit_edit(&current.draft)
      {
        | Ok(committed) => {
          tracing::debug!(
            task_id = current.task_id,
            applied = committed
              .is_some(),
            "edit surface closed"
          );
          editor.set(None);
          store.set(next);
        }
        | Err(
          StoreError::EmptyText
        ) => {
          editor.set(Some(
            EditorState {
              error: Some(
                "Task text must not \
                 be empty"
                  .to_string()
              ),
              ..current
            }
          ));
        }
      }
    })
  };

  let on_editor_cancel = {
    let editor = editor.clone();
    let store = store.clone();
    Callback::from(move |_: ()| {
      let mut next = (*store).clone();
      next.cancel_edit();
      store.set(next);
      editor.set(None);
    })
  };

  let on_clear_completed = {
    let host = host.clone();
    let store = store.clone();
    Callback::from(
      move |_: MouseEvent| {
        let count =
          store.completed_count();
        if count == 0 {
          host.show_alert(
            "No completed tasks to \
             clear"
          );
          return;
        }

        let host = (*host).clone();
        let store = store.clone();
        spawn_local(async move {
          let confirmed = host
            .confirm(
              "Clear completed?",
              &format!(
                "{count} completed \
                 task(s) will be \
                 removed"
              ),
              "Clear"
            )
            .await;
          if !confirmed {
            return;
          }

          let mut next =
            (*store).clone();
          let removed =
            next.clear_completed();
          store.set(next);
          host.show_alert(&format!(
            "Removed {removed} \
             completed task(s)"
          ));
        });
      }
    )
  };

  let on_export = {
    let host = host.clone();
    let profile = profile.clone();
    let store = store.clone();
    Callback::from(
      move |_: MouseEvent| {
        let snapshot = Snapshot::new(
          store.tasks().to_vec(),
          Utc::now(),
          (*profile).clone()
        );

        match serde_json::to_string(
          &snapshot
        ) {
          | Ok(json) => {
            host
              .send_payload(&json);
            host.show_alert(
              "Tasks saved!"
            );
          }
          | Err(error) => {
            tracing::error!(
              %error,
              "snapshot did not \
               encode"
            );
          }
        }
      }
    )
  };

  let on_filter = {
    let store = store.clone();
    Callback::from(
      move |filter: Filter| {
        let mut next =
          (*store).clone();
        next.set_filter(filter);
        store.set(next);
      }
    )
  };

  let on_toggle_theme = {
    let theme = theme.clone();
    Callback::from(
      move |_: MouseEvent| {
        theme.set((*theme).next());
      }
    )
  };

  let visible = store.visible();
  let counts = store.counts();

  html! {
      <div class={classes!("app", theme.as_class())}>
          <Header
              title={config.title.clone()}
              profile={(*profile).clone()}
              active={counts.active}
              theme={*theme}
              on_toggle_theme={on_toggle_theme}
          />
          <AddRow
              draft={(*draft).clone()}
              on_input={on_draft_input}
              on_submit={on_add}
          />
          <FilterTabs
              active={store.filter()}
              on_select={on_filter}
          />
          <TaskList
              tasks={visible}
              on_toggle={on_toggle}
              on_edit={on_edit}
              on_delete={on_delete}
          />
          <StatsBar counts={counts} />
          <Toolbar
              on_clear_completed={on_clear_completed}
              on_export={on_export}
          />
          {
              if let Some(editor_state) = (*editor).clone() {
                  html! {
                      <EditModal
                          editor={editor_state}
                          on_input={on_editor_input}
                          on_save={on_editor_save}
                          on_cancel={on_editor_cancel}
                      />
                  }
              } else {
                  html! {}
              }
          }
      </div>
  }
}

fn apply_accent_color(color: &str) {
  let Some(root) = web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .and_then(|document| {
      document.document_element()
    })
  else {
    return;
  };

  if let Ok(root) = root
    .dyn_into::<web_sys::HtmlElement>()
  {
    let _ = root
      .style()
      .set_property("--accent", color);
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
