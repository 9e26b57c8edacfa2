use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ToolbarProps {
  pub on_clear_completed:
    Callback<MouseEvent>,
  pub on_export:
    Callback<MouseEvent>
}

#[function_component(Toolbar)]
pub fn toolbar(
  props: &ToolbarProps
) -> Html {
  html! {
      <div class="toolbar">
          <button class="btn" onclick={props.on_clear_completed.clone()}>
              { "Clear completed" }
          </button>
          <button class="btn primary" onclick={props.on_export.clone()}>
              { "Save to cloud" }
          </button>
      </div>
  }
}
