use serde::Deserialize;

const APP_CONFIG_TOML: &str =
  include_str!("../assets/tasklet.toml");

#[derive(
  Clone, PartialEq, Deserialize,
)]
pub struct AppConfig {
  #[serde(default)]
  pub version:         u32,
  #[serde(default = "default_title")]
  pub title:           String,
  #[serde(
    default = "default_accent_fallback"
  )]
  pub accent_fallback: String,
  #[serde(default = "default_haptics")]
  pub haptics:         bool
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      version:         1,
      title:           default_title(),
      accent_fallback:
        default_accent_fallback(),
      haptics:         default_haptics()
    }
  }
}

fn default_title() -> String {
  "Tasklet".to_string()
}

fn default_accent_fallback() -> String {
  "#50a8eb".to_string()
}

fn default_haptics() -> bool {
  true
}

pub fn load_app_config() -> AppConfig {
  match toml::from_str::<AppConfig>(
    APP_CONFIG_TOML
  ) {
    | Ok(config) => config,
    | Err(error) => {
      tracing::error!(
        %error,
        "failed parsing embedded app \
         config; using defaults"
      );
      AppConfig::default()
    }
  }
}
