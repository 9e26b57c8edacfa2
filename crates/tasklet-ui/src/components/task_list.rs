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

use super::TaskRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub tasks:     Vec<Task>,
  pub on_toggle: Callback<TaskId>,
  pub on_edit:   Callback<TaskId>,
  pub on_delete: Callback<TaskId>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  if props.tasks.is_empty() {
    return html! {
        <div class="empty-state">
            { "Nothing here yet. Add your first task!" }
        </div>
    };
  }

  html! {
      <ul class="task-list">
          {
              for props.tasks.iter().cloned().map(|task| html! {
                  <TaskRow
                      task={task}
                      on_toggle={props.on_toggle.clone()}
                      on_edit={props.on_edit.clone()}
                      on_delete={props.on_delete.clone()}
                  />
              })
          }
      </ul>
  }
}
