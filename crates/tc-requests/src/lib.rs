//! `tc-requests` — request documents in, response records out.
//!
//! This crate sits between raw input and the catalogue/router core.  It
//! owns no transit logic: it deserialises records, feeds them to a
//! [`Catalogue`](tc_catalogue::Catalogue) in dependency order, and turns
//! query results (including every kind of absence) into response records.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`records`]  | `RequestDocument`, `BaseRequest`, `StatRequest`          |
//! | [`response`] | `Response`, `ResponseItem`                               |
//! | [`ingest`]   | `ingest` — stops, then distances, then buses             |
//! | [`handler`]  | `RequestHandler`, `process_document`, `process_reader`   |
//! | [`map`]      | `map_scene`, `render_map` — catalogue to SVG             |
//! | [`text`]     | Line-oriented protocol (`Stop X: ...`, `Bus X: A > B`)   |
//! | [`error`]    | `RequestError`, `RequestResult<T>`                       |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Answers stat requests on Rayon's thread pool.          |

pub mod error;
pub mod handler;
pub mod ingest;
pub mod map;
pub mod records;
pub mod response;
pub mod text;


pub use error::{RequestError, RequestResult};
pub use handler::{process_document, process_reader, RequestHandler};
pub use ingest::ingest;
pub use map::{map_scene, render_map};
pub use records::{BaseRequest, BusRecord, RequestDocument, StatRequest, StopRecord};
pub use response::{Response, ResponseItem};
pub use text::run_text;
