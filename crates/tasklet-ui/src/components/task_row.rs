use tasklet_core::task::{
  Task,
  TaskId
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskRowProps {
  pub task:      Task,
  pub on_toggle: Callback<TaskId>,
  pub on_edit:   Callback<TaskId>,
  pub on_delete: Callback<TaskId>
}

#[function_component(TaskRow)]
pub fn task_row(
  props: &TaskRowProps
) -> Html {
  let id = props.task.id;
  let on_toggle =
    props.on_toggle.clone();
  let on_edit = props.on_edit.clone();
  let on_delete =
    props.on_delete.clone();

  let text_class =
    if props.task.completed {
      "task-text completed"
    } else {
      "task-text"
    };

  html! {
      <li class="task-item">
          <input
              type="checkbox"
              class="task-checkbox"
              checked={props.task.completed}
              onchange={move |_| on_toggle.emit(id)}
          />
          <span class={text_class}>{ &props.task.text }</span>
          <div class="task-actions">
              <button
                  class="task-btn"
                  title="Edit"
                  onclick={move |_| on_edit.emit(id)}
              >
                  { "✎" }
              </button>
              <button
                  class="task-btn danger"
                  title="Delete"
                  onclick={move |_| on_delete.emit(id)}
              >
                  { "✕" }
              </button>
          </div>
      </li>
  }
}
