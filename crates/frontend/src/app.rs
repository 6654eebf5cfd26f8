use crate::app_shell::AppShell;
use crate::domain::artwork::selection::SelectionStore;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the selection store to the whole app via context:
    // the table and the selected panel share it.
    provide_context(SelectionStore::new());

    view! {
        <AppShell />
    }
}
