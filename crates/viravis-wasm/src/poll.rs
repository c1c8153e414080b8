//! Timer-driven polling of the data endpoint.
//!
//! Each tick asks the client for a ticket and, if one is issued, spawns an
//! independent fetch. Nothing awaits the fetch from the timer, so under the
//! overlapping policy several requests may be outstanding and complete in
//! any order.

use crate::SharedClient;
use gloo_net::http::Request;
use gloo_timers::callback::Interval;
use std::rc::Rc;
use viravis_core::{ClientConfig, Payload, PollError, TickOutcome, decode_body};
use wasm_bindgen_futures::spawn_local;

/// Start polling for the lifetime of the page.
pub fn start(client: SharedClient, config: &ClientConfig) {
    let endpoint: Rc<str> = Rc::from(config.endpoint.as_str());
    log::info!(
        "polling {} every {} ms ({})",
        endpoint,
        config.interval_ms,
        config.policy
    );
    let interval = Interval::new(config.interval_ms, move || tick(&client, &endpoint));
    interval.forget();
}

fn tick(client: &SharedClient, endpoint: &Rc<str>) {
    let Some(ticket) = client.borrow_mut().begin_poll() else {
        return;
    };

    let client = Rc::clone(client);
    let endpoint = Rc::clone(endpoint);
    spawn_local(async move {
        let seq = ticket.seq();
        let result = fetch_payload(&endpoint).await;
        let outcome = client.borrow_mut().complete_poll(ticket, result);
        if let TickOutcome::Rendered { bars } = outcome {
            log::trace!("poll #{seq} rendered {bars} bars");
        }
    });
}

/// GET the endpoint and decode its body. The HTTP status is not inspected.
async fn fetch_payload(url: &str) -> Result<Payload, PollError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| PollError::Network(e.to_string()))?;
    let body = response
        .text()
        .await
        .map_err(|e| PollError::Network(e.to_string()))?;
    decode_body(&body)
}
