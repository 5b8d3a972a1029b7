//! Line-oriented request protocol.
//!
//! # Format
//!
//! A base section and a stat section, each introduced by its line count:
//!
//! ```text
//! 4
//! Stop Tolstopaltsevo: 55.611087, 37.20829, 3900m to Marushkino
//! Stop Marushkino: 55.595884, 37.209755
//! Bus 256: Tolstopaltsevo > Marushkino > Tolstopaltsevo
//! Bus 750: Tolstopaltsevo - Marushkino
//! 2
//! Bus 750
//! Stop Marushkino
//! ```
//!
//! `>` separates a roundtrip route (listed in full); `-` separates a linear
//! route (listed one way).  Stat lines are answered one per line:
//!
//! ```text
//! Bus 750: 3 stops on route, 2 unique stops, 7800 route length, 2.3036 curvature
//! Stop Marushkino: buses 256 750
//! ```
//!
//! The text protocol has no routing settings and therefore no route queries.

use std::collections::BTreeMap;

use tc_catalogue::Catalogue;
use tc_core::format_significant;

use crate::ingest::ingest;
use crate::records::{BaseRequest, BusRecord, StatRequest, StopRecord};
use crate::{RequestError, RequestResult};

/// Parse `input`, ingest its base section, and answer its stat section.
///
/// Returns the answers joined by newlines (with a trailing newline).
pub fn run_text(input: &str) -> RequestResult<String> {
    let mut lines = input.lines().enumerate().map(|(i, l)| (i + 1, l));

    let base_count = read_count(&mut lines)?;
    let mut base = Vec::with_capacity(base_count);
    for _ in 0..base_count {
        let (n, line) = lines.next().ok_or_else(|| RequestError::parse(0, "base section ended early"))?;
        base.push(parse_base_line(n, line)?);
    }

    let mut catalogue = Catalogue::new();
    ingest(&mut catalogue, &base)?;

    let stat_count = read_count(&mut lines)?;
    let mut out = String::new();
    for i in 0..stat_count {
        let (n, line) = lines.next().ok_or_else(|| RequestError::parse(0, "stat section ended early"))?;
        let request = parse_stat_line(n, line, i as i64)?;
        out.push_str(&answer_line(&catalogue, &request));
        out.push('\n');
    }
    Ok(out)
}

// ── Parsing ───────────────────────────────────────────────────────────────────

fn read_count<'a>(lines: &mut impl Iterator<Item = (usize, &'a str)>) -> RequestResult<usize> {
    let (n, line) = lines
        .find(|(_, l)| !l.trim().is_empty())
        .ok_or_else(|| RequestError::parse(0, "missing request count"))?;
    line.trim()
        .parse()
        .map_err(|_| RequestError::parse(n, format!("expected a request count, got {:?}", line.trim())))
}

/// Parse one `Stop …` or `Bus …` line.  `n` is the 1-based line number used
/// in errors.
pub fn parse_base_line(n: usize, line: &str) -> RequestResult<BaseRequest> {
    let (head, description) = line
        .split_once(':')
        .ok_or_else(|| RequestError::parse(n, "expected `<Command> <name>: <description>`"))?;
    let (command, name) = split_command(n, head)?;

    match command {
        "Stop" => parse_stop(n, name, description).map(BaseRequest::Stop),
        "Bus" => Ok(BaseRequest::Bus(parse_bus(name, description))),
        other => Err(RequestError::parse(n, format!("unknown command {other:?}"))),
    }
}

/// Parse one `Bus <name>` or `Stop <name>` query line.
pub fn parse_stat_line(n: usize, line: &str, id: i64) -> RequestResult<StatRequest> {
    let (command, name) = split_command(n, line)?;
    match command {
        "Bus" => Ok(StatRequest::Bus { id, name: name.to_owned() }),
        "Stop" => Ok(StatRequest::Stop { id, name: name.to_owned() }),
        other => Err(RequestError::parse(n, format!("unknown query {other:?}"))),
    }
}

fn split_command(n: usize, head: &str) -> RequestResult<(&str, &str)> {
    let head = head.trim();
    let (command, name) = head
        .split_once(' ')
        .ok_or_else(|| RequestError::parse(n, format!("expected `<Command> <name>`, got {head:?}")))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(RequestError::parse(n, "empty name"));
    }
    Ok((command, name))
}

fn parse_stop(n: usize, name: &str, description: &str) -> RequestResult<StopRecord> {
    let mut parts = description.split(',').map(str::trim);
    let mut coordinate = |what: &str| -> RequestResult<f64> {
        let raw = parts.next().unwrap_or_default();
        raw.parse()
            .map_err(|_| RequestError::parse(n, format!("invalid {what} {raw:?}")))
    };
    let latitude = coordinate("latitude")?;
    let longitude = coordinate("longitude")?;

    let mut road_distances = BTreeMap::new();
    for part in parts.filter(|p| !p.is_empty()) {
        let (meters, to) = part
            .split_once("m to ")
            .ok_or_else(|| RequestError::parse(n, format!("expected `<D>m to <stop>`, got {part:?}")))?;
        let meters: u32 = meters
            .trim()
            .parse()
            .map_err(|_| RequestError::parse(n, format!("invalid distance {meters:?}")))?;
        road_distances.insert(to.trim().to_owned(), meters);
    }

    Ok(StopRecord { name: name.to_owned(), latitude, longitude, road_distances })
}

fn parse_bus(name: &str, description: &str) -> BusRecord {
    let (separator, is_roundtrip) = if description.contains('>') { ('>', true) } else { ('-', false) };
    let stops = description
        .split(separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect();
    BusRecord { name: name.to_owned(), stops, is_roundtrip }
}

// ── Answers ───────────────────────────────────────────────────────────────────

fn answer_line(catalogue: &Catalogue, request: &StatRequest) -> String {
    match request {
        StatRequest::Bus { name, .. } => match catalogue.bus_info(name) {
            Ok(info) => match info.curvature() {
                Some(curvature) => format!(
                    "Bus {name}: {} stops on route, {} unique stops, {} route length, {} curvature",
                    info.stop_count,
                    info.unique_stop_count,
                    info.physical_length,
                    format_significant(curvature, 6),
                ),
                None => format!("Bus {name}: curvature undefined"),
            },
            Err(err) if err.is_not_found() => format!("Bus {name}: not found"),
            Err(err) => format!("Bus {name}: {err}"),
        },
        StatRequest::Stop { name, .. } => match catalogue.stop_info(name) {
            Ok(info) if info.is_served() => {
                let buses: Vec<&str> = info.buses.into_iter().collect();
                format!("Stop {name}: buses {}", buses.join(" "))
            }
            Ok(_) => format!("Stop {name}: no buses"),
            Err(_) => format!("Stop {name}: not found"),
        },
        StatRequest::Route { id, .. } | StatRequest::Map { id } => {
            format!("request {id}: unsupported in text mode")
        }
    }
}
