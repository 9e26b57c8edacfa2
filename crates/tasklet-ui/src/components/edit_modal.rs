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

use crate::app::types::EditorState;

#[derive(Properties, PartialEq)]
pub struct EditModalProps {
  pub editor:    EditorState,
  pub on_input:
    Callback<InputEvent>,
  pub on_save:   Callback<()>,
  pub on_cancel: Callback<()>
}

#[function_component(EditModal)]
pub fn edit_modal(
  props: &EditModalProps
) -> Html {
  let on_backdrop_click = {
    let on_cancel =
      props.on_cancel.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_cancel.emit(());
      }
    )
  };
  let on_modal_click =
    Callback::from(
      |e: MouseEvent| {
        e.stop_propagation();
      }
    );
  let on_save_click = {
    let on_save =
      props.on_save.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_save.emit(());
      }
    )
  };
  let on_cancel_click = {
    let on_cancel =
      props.on_cancel.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_cancel.emit(());
      }
    )
  };
  let on_keypress = {
    let on_save =
      props.on_save.clone();
    Callback::from(
      move |e: KeyboardEvent| {
        if e.key() == "Enter" {
          on_save.emit(());
        }
      }
    )
  };

  html! {
      <div class="modal-backdrop" onclick={on_backdrop_click}>
          <div class="modal" onclick={on_modal_click}>
              <div class="header">{ "Edit Task" }</div>
              <div class="content">
                  {
                      if let Some(error) = props.editor.error.clone() {
                          html! { <div class="form-error">{ error }</div> }
                      } else {
                          html! {}
                      }
                  }
                  <input
                      class="edit-input"
                      value={props.editor.draft.clone()}
                      autofocus={true}
                      oninput={props.on_input.clone()}
                      onkeypress={on_keypress}
                  />
                  <div class="footer">
                      <button class="btn" onclick={on_cancel_click}>
                          { "Cancel" }
                      </button>
                      <button class="btn primary" onclick={on_save_click}>
                          { "Save" }
                      </button>
                  </div>
              </div>
          </div>
      </div>
  }
}
