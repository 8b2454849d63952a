use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum SpinnerSize {
    Small,
    #[default]
    Large,
}

impl SpinnerSize {
    fn class(self) -> &'static str {
        match self {
            SpinnerSize::Small => "loading-sm",
            SpinnerSize::Large => "loading-lg",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub size: SpinnerSize,
    #[prop_or_default]
    pub text: Option<String>,
}

/// Spinner shown while a refresh cycle is in flight.
///
/// `Small` renders inline (navbar), `Large` takes the place of a view.
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    let spinner = html! {
        <span class={classes!("loading", "loading-spinner", props.size.class())} title="Refreshing"></span>
    };

    if props.size == SpinnerSize::Small {
        return spinner;
    }

    html! {
        <div class="flex flex-col justify-center items-center py-12 gap-4">
            { spinner }
            if let Some(text) = &props.text {
                <p class="text-sm text-gray-500">{text}</p>
            }
        </div>
    }
}
