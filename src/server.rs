//! Blocking HTTP front end
//!
//! One accept/handle loop per worker thread over a shared `tiny_http`
//! server. Each request gets its own canvas; the only shared state is the
//! read-only font face, so the workers need no synchronization beyond the
//! `Arc`s keeping things alive.

use std::sync::Arc;
use std::thread;

use log::{debug, info, warn};

use crate::error::{Error, Result};
use crate::font::FontFace;
use crate::label::{LabelBuilder, FALLBACK_TEXT};
use crate::{encode_png, ServiceConfig};

/// Map a request path to label text: basename, extension stripped,
/// underscores as spaces. The root path and anything that reduces to an
/// empty string get the fixed fallback label.
pub fn label_from_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let basename = path.rsplit('/').next().unwrap_or("");
    let stem = match basename.rsplit_once('.') {
        Some((stem, _ext)) => stem,
        None => basename,
    };
    let text = stem.replace('_', " ");
    if text.is_empty() {
        FALLBACK_TEXT.to_string()
    } else {
        text
    }
}

/// Run the service until the process exits.
///
/// Binds once, then fans requests out to `num_cpus` worker threads. Render
/// and encode failures are reported per request as 500s and logged; they
/// never take a worker down.
pub fn serve(config: ServiceConfig, face: Arc<FontFace>) -> Result<()> {
    let server = tiny_http::Server::http(&config.listen)
        .map_err(|e| Error::Config(format!("binding {}: {}", config.listen, e)))?;
    let server = Arc::new(server);

    let workers = num_cpus::get().max(1);
    info!(
        "Serving labels on http://{} with {} workers ({} face)",
        config.listen,
        workers,
        if face.is_outline() { "outline" } else { "bitmap" }
    );

    let mut handles = Vec::with_capacity(workers);
    for _ in 0..workers {
        let server = Arc::clone(&server);
        let face = Arc::clone(&face);
        let config = config.clone();
        handles.push(thread::spawn(move || {
            let builder = LabelBuilder::new(face).with_point_size(config.point_size);
            for request in server.incoming_requests() {
                handle_request(request, &builder, &config);
            }
        }));
    }
    for handle in handles {
        if handle.join().is_err() {
            warn!("Worker thread panicked");
        }
    }
    Ok(())
}

fn handle_request(request: tiny_http::Request, builder: &LabelBuilder, config: &ServiceConfig) {
    let text = label_from_path(request.url());
    debug!("{} -> {:?}", request.url(), text);

    match render_label(builder, &text, config) {
        Ok(png) => {
            let mut response = tiny_http::Response::from_data(png);
            if let Ok(header) =
                tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"image/png"[..])
            {
                response = response.with_header(header);
            }
            if let Err(e) = request.respond(response) {
                warn!("Failed to write response: {}", e);
            }
        }
        Err(e) => {
            warn!("Request for {:?} failed: {}", text, e);
            let response = tiny_http::Response::from_string(e.to_string())
                .with_status_code(tiny_http::StatusCode(500));
            if let Err(e) = request.respond(response) {
                warn!("Failed to write error response: {}", e);
            }
        }
    }
}

/// Measured mode when an outline face is loaded, the fixed rectangle
/// otherwise.
fn render_label(builder: &LabelBuilder, text: &str, config: &ServiceConfig) -> Result<Vec<u8>> {
    let style = config.style.to_style();
    let canvas = if builder.face().is_outline() {
        builder.render(text, &style)?
    } else {
        builder.render_fixed(config.fixed_size, text, &style)?
    };
    encode_png(&canvas)
}
