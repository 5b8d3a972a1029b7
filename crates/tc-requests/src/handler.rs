//! Answering stat requests against a finished catalogue.
//!
//! A [`RequestHandler`] is built after ingestion.  It owns the frozen
//! [`TransportRouter`] (when routing settings were supplied) and the
//! rendered map (when render settings were supplied), and answers each
//! [`StatRequest`] with exactly one [`Response`].  Lookups of unknown names
//! and unreachable targets become `"not found"` responses; nothing a query
//! does can fail the batch.

use std::io::Read;

use tracing::{info, trace, warn};

use tc_catalogue::Catalogue;
use tc_render::RenderSettings;
use tc_router::{RouteResult, RoutingSettings, TransportRouter};

use crate::ingest::ingest;
use crate::map::render_map;
use crate::records::{RequestDocument, StatRequest};
use crate::response::Response;
use crate::{RequestError, RequestResult};

// ── RequestHandler ────────────────────────────────────────────────────────────

pub struct RequestHandler<'a> {
    catalogue: &'a Catalogue,
    router:    Option<TransportRouter<'a>>,
    map:       Option<String>,
}

impl<'a> RequestHandler<'a> {
    /// Catalogue queries only; `Route` and `Map` requests answer
    /// "not found" until enabled below.
    pub fn new(catalogue: &'a Catalogue) -> Self {
        Self { catalogue, router: None, map: None }
    }

    /// Build the route graph once so `Route` requests can be answered.
    pub fn with_routing(mut self, settings: RoutingSettings) -> RequestResult<Self> {
        self.router = Some(TransportRouter::new(self.catalogue, settings)?);
        Ok(self)
    }

    /// Render the map once; every `Map` request returns the same SVG.
    pub fn with_map(mut self, settings: RenderSettings) -> RequestResult<Self> {
        self.map = Some(render_map(self.catalogue, settings)?);
        Ok(self)
    }

    /// Answer a single request.
    pub fn answer(&self, request: &StatRequest) -> Response {
        let id = request.id();
        trace!(request_id = id, ?request, "answering");

        match request {
            StatRequest::Bus { name, .. } => match self.catalogue.bus_info(name) {
                Ok(info) => Response::bus(id, &info),
                Err(err) if err.is_not_found() => Response::not_found(id),
                Err(err) => {
                    warn!(request_id = id, bus = %name, %err, "bus statistics unavailable");
                    Response::error(id, err.to_string())
                }
            },
            StatRequest::Stop { name, .. } => match self.catalogue.stop_info(name) {
                Ok(info) => Response::Stop {
                    request_id: id,
                    buses: info.buses.into_iter().map(str::to_owned).collect(),
                },
                Err(_) => Response::not_found(id),
            },
            StatRequest::Route { from, to, .. } => {
                let Some(router) = &self.router else {
                    return Response::not_found(id);
                };
                match router.build_route(from, to) {
                    RouteResult::Found(itinerary) => Response::route(id, itinerary),
                    RouteResult::NotFound => Response::not_found(id),
                }
            }
            StatRequest::Map { .. } => match &self.map {
                Some(svg) => Response::Map { request_id: id, map: svg.clone() },
                None => Response::not_found(id),
            },
        }
    }

    /// Answer every request, in order.
    ///
    /// With the `parallel` feature the answers are computed on Rayon's pool;
    /// the handler is read-only, so no locking is involved.
    pub fn answer_all(&self, requests: &[StatRequest]) -> Vec<Response> {
        #[cfg(not(feature = "parallel"))]
        {
            requests.iter().map(|r| self.answer(r)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            requests.par_iter().map(|r| self.answer(r)).collect()
        }
    }
}

// ── Document processing ───────────────────────────────────────────────────────

/// Ingest a whole document into a fresh catalogue and answer its queries.
pub fn process_document(document: &RequestDocument) -> RequestResult<Vec<Response>> {
    let mut catalogue = Catalogue::new();
    ingest(&mut catalogue, &document.base_requests)?;

    let mut handler = RequestHandler::new(&catalogue);
    match document.routing_settings {
        Some(settings) => handler = handler.with_routing(settings)?,
        None if document.has_route_requests() => return Err(RequestError::MissingRoutingSettings),
        None => {}
    }
    if document.has_map_requests() {
        let settings = document.render_settings.clone().ok_or(RequestError::MissingRenderSettings)?;
        handler = handler.with_map(settings)?;
    }

    let responses = handler.answer_all(&document.stat_requests);
    info!(requests = responses.len(), "stat requests answered");
    Ok(responses)
}

/// Like [`process_document`] but parses the document from any `Read`
/// source first.
pub fn process_reader<R: Read>(reader: R) -> RequestResult<Vec<Response>> {
    let document: RequestDocument = serde_json::from_reader(reader)?;
    process_document(&document)
}
