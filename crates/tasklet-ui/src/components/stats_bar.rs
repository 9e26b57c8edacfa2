use tasklet_core::filter::TaskCounts;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct StatsBarProps {
  pub counts: TaskCounts
}

#[function_component(StatsBar)]
pub fn stats_bar(
  props: &StatsBarProps
) -> Html {
  let make_stat =
    |value: usize,
     label: &'static str| {
      html! {
          <div class="stat">
              <div class="stat-value">{ value }</div>
              <div class="stat-label">{ label }</div>
          </div>
      }
    };

  html! {
      <div class="stats-bar">
          { make_stat(props.counts.total, "Total") }
          { make_stat(props.counts.active, "Active") }
          { make_stat(props.counts.completed, "Done") }
      </div>
  }
}
