//! Browser entry point: fetches `data.json`, renders it into the live page
//! and wires the page interactions.
#![cfg(target_arch = "wasm32")]

mod dom;
mod fetch;
mod rig;

pub use dom::WebDom;
pub use fetch::FetchSource;

use folio::interaction::RigSettings;
use folio::{PageRenderer, RenderOptions, RenderOutcome};
use wasm_bindgen::prelude::*;

/// Location of the portfolio document, relative to the page
const DATA_URL: &str = "data.json";

#[wasm_bindgen(start)]
pub fn start() {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(error) = run().await {
            web_sys::console::error_2(&"Error starting portfolio:".into(), &error);
        }
    });
}

async fn run() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let root = document.document_element();
    let settings = RigSettings::from_attributes(|name| {
        root.as_ref().and_then(|root| root.get_attribute(name))
    });

    let renderer = PageRenderer::new(
        FetchSource::new(DATA_URL),
        RenderOptions::for_layout(settings.layout),
    );
    let mut dom = WebDom::new(document.clone());

    match renderer.load(&mut dom).await {
        RenderOutcome::Rendered(report) => {
            for fault in &report.faults {
                web_sys::console::warn_1(&fault.to_string().into());
            }
            for skipped in &report.skipped {
                web_sys::console::warn_1(
                    &format!("section {} skipped: {}", skipped.section, skipped.error).into(),
                );
            }
            rig::start(window, document, settings)
        }
        RenderOutcome::Failed(error) => {
            web_sys::console::error_1(&format!("Error loading portfolio data: {}", error).into());
            Ok(())
        }
    }
}
