use tasklet_core::filter::Filter;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FilterTabsProps {
  pub active:    Filter,
  pub on_select: Callback<Filter>
}

#[function_component(FilterTabs)]
pub fn filter_tabs(
  props: &FilterTabsProps
) -> Html {
  let make_tab = |filter: Filter| {
    let active =
      props.active == filter;
    let class = if active {
      "tab active"
    } else {
      "tab"
    };
    let on_select =
      props.on_select.clone();
    html! {
        <button class={class} onclick={move |_| on_select.emit(filter)}>
            { filter.label() }
        </button>
    }
  };

  html! {
      <div class="filter-tabs">
          { for Filter::all().into_iter().map(make_tab) }
      </div>
  }
}
