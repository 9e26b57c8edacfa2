use tasklet_core::snapshot::UserProfile;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

use crate::app::types::ThemeMode;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
  pub title:           String,
  pub profile:
    Option<UserProfile>,
  pub active:          usize,
  pub theme:           ThemeMode,
  pub on_toggle_theme:
    Callback<MouseEvent>
}

#[function_component(Header)]
pub fn header(
  props: &HeaderProps
) -> Html {
  let heading = props
    .profile
    .as_ref()
    .filter(|profile| {
      !profile
        .display_name()
        .is_empty()
    })
    .map(|profile| {
      format!(
        "{}'s tasks",
        profile.display_name()
      )
    })
    .unwrap_or_else(|| {
      props.title.clone()
    });

  let avatar =
    match props.profile.as_ref() {
      | Some(profile) => {
        match profile
          .photo_url
          .as_deref()
        {
          | Some(url) => html! {
              <span
                  class="avatar photo"
                  style={format!("background-image:url({url});background-size:cover;")}
              ></span>
          },
          | None => html! {
              <span class="avatar">
                  { profile.initial().map(String::from).unwrap_or_else(|| "•".to_string()) }
              </span>
          }
        }
      }
      | None => html! {
          <span class="avatar">{ "•" }</span>
      }
    };

  html! {
      <header class="app-header">
          { avatar }
          <div class="identity">
              <div class="heading">{ heading }</div>
              <div class="counter">{ format!("{} active", props.active) }</div>
          </div>
          <button
              class="btn theme-toggle"
              title="Switch theme"
              onclick={props.on_toggle_theme.clone()}
          >
              { props.theme.toggle_label() }
          </button>
      </header>
  }
}
