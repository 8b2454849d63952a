use yew::prelude::*;
use super::navbar::Navbar;
use super::sidebar::Sidebar;
use crate::components::dashboard::{Controls, Pagination};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: String,
    /// Wrap the page in the shared filter controls and pager
    #[prop_or(true)]
    pub filters: bool,
}

/// Drawer shell around every route.
///
/// Dashboard views share one filter selection, so the controls and pager live
/// here rather than in each view; switching tabs keeps both.
#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="drawer lg:drawer-open">
            <input id="txdash-drawer" type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col min-h-screen bg-base-200 transition-all duration-300">
                <Navbar title={props.title.clone()} />
                <main class="flex-1 p-6 overflow-y-auto">
                    if props.filters {
                        <Controls />
                    }
                    { for props.children.iter() }
                    if props.filters {
                        <Pagination />
                    }
                </main>
            </div>
            <Sidebar />
        </div>
    }
}
