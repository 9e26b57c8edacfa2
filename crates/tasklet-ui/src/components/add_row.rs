use yew::{
  Callback,
  Html,
  InputEvent,
  KeyboardEvent,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct AddRowProps {
  pub draft:     String,
  pub on_input:
    Callback<InputEvent>,
  pub on_submit: Callback<()>
}

#[function_component(AddRow)]
pub fn add_row(
  props: &AddRowProps
) -> Html {
  let on_click = {
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_submit.emit(());
      }
    )
  };
  let on_keypress = {
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |e: KeyboardEvent| {
        if e.key() == "Enter" {
          on_submit.emit(());
        }
      }
    )
  };

  html! {
      <div class="add-row">
          <input
              class="add-input"
              value={props.draft.clone()}
              placeholder="What needs doing?"
              oninput={props.on_input.clone()}
              onkeypress={on_keypress}
          />
          <button class="btn primary" onclick={on_click}>
              { "Add" }
          </button>
      </div>
  }
}
