use serde::Serialize;
use tasklet_core::snapshot::UserProfile;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
  /// The chat shell's `window.Telegram.WebApp` object.
  pub type WebApp;

  #[wasm_bindgen(method)]
  fn expand(this: &WebApp);

  #[wasm_bindgen(
    method,
    js_name = enableClosingConfirmation
  )]
  fn enable_closing_confirmation(
    this: &WebApp
  );

  #[wasm_bindgen(
    method,
    js_name = showAlert
  )]
  fn show_alert_raw(
    this: &WebApp,
    message: &str
  );

  #[wasm_bindgen(
    method,
    js_name = showPopup
  )]
  fn show_popup(
    this: &WebApp,
    params: &JsValue,
    callback: &JsValue
  );

  #[wasm_bindgen(
    method,
    js_name = sendData
  )]
  fn send_data(
    this: &WebApp,
    data: &str
  );

  #[wasm_bindgen(
    method,
    js_name = onEvent
  )]
  fn on_event(
    this: &WebApp,
    event: &str,
    handler: &JsValue
  );

  #[wasm_bindgen(
    method,
    getter,
    js_name = isExpanded
  )]
  fn is_expanded(this: &WebApp) -> bool;

  #[wasm_bindgen(
    method,
    getter,
    js_name = initDataUnsafe
  )]
  fn init_data_unsafe(
    this: &WebApp
  ) -> JsValue;

  #[wasm_bindgen(
    method,
    getter,
    js_name = themeParams
  )]
  fn theme_params(
    this: &WebApp
  ) -> JsValue;

  #[wasm_bindgen(
    method,
    getter,
    js_name = MainButton
  )]
  fn main_button(
    this: &WebApp
  ) -> JsValue;

  #[wasm_bindgen(
    method,
    getter,
    js_name = HapticFeedback
  )]
  fn haptic_feedback(
    this: &WebApp
  ) -> JsValue;

  pub type MainButton;

  #[wasm_bindgen(
    method,
    js_name = setText
  )]
  fn set_text(
    this: &MainButton,
    text: &str
  );

  #[wasm_bindgen(method)]
  fn show(this: &MainButton);

  pub type HapticFeedback;

  #[wasm_bindgen(
    method,
    js_name = impactOccurred
  )]
  fn impact_occurred(
    this: &HapticFeedback,
    style: &str
  );
}

#[derive(Serialize)]
struct PopupButton {
  id:   &'static str,
  #[serde(rename = "type")]
  kind: &'static str,
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  text: Option<String>
}

#[derive(Serialize)]
struct PopupParams {
  title:   String,
  message: String,
  buttons: Vec<PopupButton>
}

fn shell_object() -> Option<WebApp> {
  let window = web_sys::window()?;
  let telegram = js_sys::Reflect::get(
    &window,
    &JsValue::from_str("Telegram")
  )
  .ok()?;
  if telegram.is_undefined()
    || telegram.is_null()
  {
    return None;
  }

  let webapp = js_sys::Reflect::get(
    &telegram,
    &JsValue::from_str("WebApp")
  )
  .ok()?;
  if webapp.is_undefined()
    || webapp.is_null()
  {
    return None;
  }

  Some(webapp.unchecked_into())
}

fn browser_alert(message: &str) {
  if let Some(window) =
    web_sys::window()
  {
    let _ = window
      .alert_with_message(message);
  }
}

fn browser_confirm(
  message: &str
) -> bool {
  web_sys::window()
    .and_then(|window| {
      window
        .confirm_with_message(message)
        .ok()
    })
    .unwrap_or(false)
}

/// Narrow adapter over the mini-app shell. Store and components never
/// touch host specifics; every capability degrades to a no-op (or a
/// plain browser dialog) when the shell object is absent, so the app
/// still runs in an ordinary tab.
#[derive(Clone)]
pub struct HostShell {
  webapp: Option<WebApp>
}

impl HostShell {
  pub fn attach() -> Self {
    let webapp = shell_object();
    if webapp.is_none() {
      tracing::warn!(
        "chat shell object not found; \
         host capabilities degrade to \
         no-ops"
      );
    }
    Self { webapp }
  }

  pub fn is_attached(&self) -> bool {
    self.webapp.is_some()
  }

  /// Startup presentation requests: full screen, closing confirmation,
  /// and the host-rendered main button carrying the app title.
  pub fn init_presentation(
    &self,
    title: &str
  ) {
    let Some(webapp) =
      self.webapp.as_ref()
    else {
      return;
    };

    webapp.expand();
    webapp.enable_closing_confirmation();

    let button = webapp.main_button();
    if !button.is_undefined()
      && !button.is_null()
    {
      let button: MainButton =
        button.unchecked_into();
      button.set_text(title);
      button.show();
    }
  }

  pub fn user_profile(
    &self
  ) -> Option<UserProfile> {
    let webapp = self.webapp.as_ref()?;
    let init_data =
      webapp.init_data_unsafe();
    let user = js_sys::Reflect::get(
      &init_data,
      &JsValue::from_str("user")
    )
    .ok()?;
    if user.is_undefined()
      || user.is_null()
    {
      return None;
    }

    match serde_wasm_bindgen::from_value(
      user
    ) {
      | Ok(profile) => Some(profile),
      | Err(error) => {
        tracing::warn!(
          %error,
          "host user profile did not \
           parse; skipping \
           personalization"
        );
        None
      }
    }
  }

  pub fn accent_color(
    &self
  ) -> Option<String> {
    let webapp = self.webapp.as_ref()?;
    let params = webapp.theme_params();
    if params.is_undefined()
      || params.is_null()
    {
      return None;
    }

    js_sys::Reflect::get(
      &params,
      &JsValue::from_str("button_color")
    )
    .ok()?
    .as_string()
    .filter(|color| {
      !color.trim().is_empty()
    })
  }

  pub fn show_alert(
    &self,
    message: &str
  ) {
    match self.webapp.as_ref() {
      | Some(webapp) => {
        webapp.show_alert_raw(message);
      }
      | None => browser_alert(message)
    }
  }

  /// Acknowledgement popup with a title and a single OK button.
  pub fn notify(
    &self,
    title: &str,
    message: &str
  ) {
    let Some(webapp) =
      self.webapp.as_ref()
    else {
      browser_alert(&format!(
        "{title}\n\n{message}"
      ));
      return;
    };

    let params = PopupParams {
      title:   title.to_string(),
      message: message.to_string(),
      buttons: vec![PopupButton {
        id:   "ok",
        kind: "ok",
        text: None
      }]
    };

    match serde_wasm_bindgen::to_value(
      &params
    ) {
      | Ok(params) => webapp
        .show_popup(
          &params,
          &JsValue::UNDEFINED
        ),
      | Err(error) => {
        tracing::error!(
          %error,
          "popup params did not encode"
        );
      }
    }
  }

  /// Destructive-style confirmation. The shell's callback is lifted to
  /// a promise so callers can await the user's choice; dismissing the
  /// popup counts as cancel.
  pub async fn confirm(
    &self,
    title: &str,
    message: &str,
    confirm_label: &str
  ) -> bool {
    let Some(webapp) =
      self.webapp.clone()
    else {
      return browser_confirm(&format!(
        "{title}\n\n{message}"
      ));
    };

    let params = PopupParams {
      title:   title.to_string(),
      message: message.to_string(),
      buttons: vec![
        PopupButton {
          id:   "cancel",
          kind: "cancel",
          text: None
        },
        PopupButton {
          id:   "confirm",
          kind: "destructive",
          text: Some(
            confirm_label.to_string()
          )
        },
      ]
    };
    let params =
      match serde_wasm_bindgen::to_value(
        &params
      ) {
        | Ok(params) => params,
        | Err(error) => {
          tracing::error!(
            %error,
            "popup params did not \
             encode"
          );
          return false;
        }
      };

    let promise = js_sys::Promise::new(
      &mut |resolve, _reject| {
        let resolve = resolve.clone();
        let callback =
          Closure::once_into_js(
            move |button_id: JsValue| {
              let confirmed = button_id
                .as_string()
                .is_some_and(|id| {
                  id == "confirm"
                });
              let _ = resolve.call1(
                &JsValue::NULL,
                &JsValue::from_bool(
                  confirmed
                )
              );
            }
          );
        webapp.show_popup(
          &params, &callback
        );
      }
    );

    match JsFuture::from(promise).await
    {
      | Ok(value) => {
        value.as_bool().unwrap_or(false)
      }
      | Err(error) => {
        tracing::error!(
          ?error,
          "confirmation popup failed"
        );
        false
      }
    }
  }

  /// Best-effort short pulse; old shells ship no haptics object.
  pub fn haptic_pulse(&self) {
    let Some(webapp) =
      self.webapp.as_ref()
    else {
      return;
    };

    let haptics =
      webapp.haptic_feedback();
    if haptics.is_undefined()
      || haptics.is_null()
    {
      return;
    }

    let haptics: HapticFeedback =
      haptics.unchecked_into();
    haptics.impact_occurred("light");
  }

  /// One-way outbound payload. No acknowledgement, no retry.
  pub fn send_payload(
    &self,
    payload: &str
  ) {
    match self.webapp.as_ref() {
      | Some(webapp) => {
        webapp.send_data(payload);
        tracing::info!(
          bytes = payload.len(),
          "handed snapshot to the host \
           outbound channel"
        );
      }
      | None => {
        tracing::warn!(
          "no host shell; snapshot \
           export dropped"
        );
      }
    }
  }

  /// Runs `on_collapse` whenever the shell reports a viewport change
  /// that left the app collapsed. The subscription is kept for the app
  /// lifetime.
  pub fn on_viewport_collapsed(
    &self,
    on_collapse: impl Fn() + 'static
  ) {
    let Some(webapp) =
      self.webapp.as_ref()
    else {
      return;
    };

    let probe = webapp.clone();
    let handler = Closure::<
      dyn FnMut(JsValue)
    >::new(move |_event: JsValue| {
      if !probe.is_expanded() {
        on_collapse();
      }
    });
    webapp.on_event(
      "viewportChanged",
      handler.as_ref()
    );
    handler.forget();
  }
}
