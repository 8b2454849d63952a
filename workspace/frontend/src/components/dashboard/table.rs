use std::rc::Rc;

use dashboard::views::{table_rows, TableRow};
use dashboard::Snapshot;
use yew::prelude::*;

use crate::common::snapshot_view::SnapshotView;

#[derive(Properties, PartialEq)]
pub struct TransactionsTableProps {
    pub rows: Vec<TableRow>,
}

#[function_component(TransactionsTable)]
pub fn transactions_table(props: &TransactionsTableProps) -> Html {
    if props.rows.is_empty() {
        return html! {
            <div class="alert alert-info">
                <i class="fas fa-info-circle"></i>
                <span>{"No transactions found."}</span>
            </div>
        };
    }

    html! {
        <div class="overflow-x-auto bg-base-100 shadow rounded-box">
            <table class="table table-zebra">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Title"}</th>
                        <th>{"Price"}</th>
                        <th>{"Description"}</th>
                        <th>{"Category"}</th>
                        <th>{"Sold"}</th>
                        <th>{"Date of Sale"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.rows.iter().map(|row| html! {
                        <tr class="hover" key={row.id.clone()}>
                            <td>{&row.id}</td>
                            <td class="font-medium">{&row.title}</td>
                            <td class="font-mono text-right">{&row.price}</td>
                            <td class="max-w-md truncate">{&row.description}</td>
                            <td><span class="badge badge-sm badge-ghost">{&row.category}</span></td>
                            <td>{row.sold}</td>
                            <td class="whitespace-nowrap">{&row.date_of_sale}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}

#[function_component(TransactionsView)]
pub fn transactions_view() -> Html {
    log::trace!("Transactions view rendering");
    let render = Callback::from(|snapshot: Rc<Snapshot>| {
        let rows = table_rows(&snapshot.transactions);
        html! { <TransactionsTable rows={rows} /> }
    });

    html! { <SnapshotView render={render} loading_text={Some("Loading transactions...".to_string())} /> }
}
