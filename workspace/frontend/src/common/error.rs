use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    /// Older data is still on screen below the banner
    #[prop_or_default]
    pub stale: bool,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Visible failure state, distinct from "no data yet" and from a quiet stale view.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    let hint = if props.stale {
        "Showing the last data that loaded successfully."
    } else {
        "No data could be loaded yet."
    };

    html! {
        <div class="alert alert-error my-4">
            <i class="fas fa-exclamation-circle text-2xl"></i>
            <div class="flex flex-col gap-1">
                <span class="font-semibold">{"Could not refresh the dashboard"}</span>
                <span class="text-sm">{&props.message}</span>
                <span class="text-xs opacity-80">{hint}</span>
            </div>
            {if let Some(on_retry) = &props.on_retry {
                let on_retry = on_retry.clone();
                html! {
                    <button
                        class="btn btn-sm"
                        onclick={Callback::from(move |_| {
                            log::debug!("User clicked retry button");
                            on_retry.emit(());
                        })}
                    >
                        <i class="fas fa-redo"></i>
                        {" Try Again"}
                    </button>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
