//! PDF/Excel export buttons for the entity tables.
//!
//! The backend renders the export; this component fetches the bytes with
//! the stored credential and hands them to the browser as a download.

use leptos::prelude::*;

use crate::net::api::{ExportFormat, Resource, export_filename};
use crate::session::SessionContext;

/// Export the current collection as PDF or Excel.
#[component]
pub fn ExportButtons<T>(
    /// Screen-level error line the export reports failures into.
    error: RwSignal<Option<String>>,
    /// Carries the collection type; never passed at use sites.
    #[prop(optional)]
    _marker: std::marker::PhantomData<T>,
) -> impl IntoView
where
    T: Resource,
{
    let monitor = expect_context::<SessionContext>();
    let exporting = RwSignal::new(false);

    let run = move |format: ExportFormat| {
        if exporting.get_untracked() {
            return;
        }
        exporting.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = monitor.with_value(crate::session::SessionMonitor::token);
            match crate::net::api::export::<T>(format, token.as_deref()).await {
                Ok(bytes) => {
                    crate::util::download::save_bytes(&bytes, &export_filename(T::COLLECTION, format), format.mime());
                    error.set(None);
                }
                Err(e) => error.set(Some(format!("Export failed: {e}"))),
            }
            exporting.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (format, monitor);
            exporting.set(false);
        }
    };

    view! {
        <div class="export-buttons">
            <button class="btn" disabled=move || exporting.get() on:click=move |_| run(ExportFormat::Pdf)>
                "Export PDF"
            </button>
            <button class="btn" disabled=move || exporting.get() on:click=move |_| run(ExportFormat::Excel)>
                "Export Excel"
            </button>
        </div>
    }
}
