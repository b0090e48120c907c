//! # Port Scan Normalizer
//!
//! Flattens an nmap XML report into one [`PortRecord`] per `(host, port)` pair.
//!
//! ```xml
//! <nmaprun>
//!   <host>
//!     <address addr="10.0.0.5" addrtype="ipv4"/>
//!     <hostnames><hostname name="www.example.com"/></hostnames>
//!     <ports>
//!       <port protocol="tcp" portid="443">
//!         <state state="open"/>
//!         <service name="https" product="nginx" version="1.25"/>
//!       </port>
//!     </ports>
//!   </host>
//! </nmaprun>
//! ```
//!
//! The report is walked as a stream of events. Only the first `address` of a host is
//! used, only `hostname` entries carrying a `name` count, and any missing
//! `state`/`service` attribute becomes an empty string. A malformed document anywhere
//! yields an error, never a partial list.

use std::sync::Arc;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use reconview_common::error::{IngestError, IngestResult};
use reconview_common::models::port::PortRecord;

use super::ArtifactParser;

#[derive(Debug, Clone, Copy, Default)]
pub struct NmapXml;

impl ArtifactParser for NmapXml {
    type Output = Vec<PortRecord>;

    fn category(&self) -> &'static str {
        "ports"
    }

    fn parse(&self, raw: &str) -> IngestResult<Self::Output> {
        parse_report(raw)
    }
}

#[derive(Default)]
struct HostDraft {
    ip: Option<String>,
    hostnames: Vec<String>,
    hostnames_done: bool,
    ports: Vec<PortDraft>,
}

#[derive(Default)]
struct PortDraft {
    portid: String,
    protocol: String,
    state: Option<String>,
    service: Option<ServiceDraft>,
}

#[derive(Default)]
struct ServiceDraft {
    name: String,
    product: String,
    version: String,
}

impl HostDraft {
    fn flatten(self, out: &mut Vec<PortRecord>) {
        let ip = self.ip.unwrap_or_default();
        let hostnames: Arc<[String]> = Arc::from(self.hostnames);

        for port in self.ports {
            let service = port.service.unwrap_or_default();
            out.push(PortRecord {
                ip: ip.clone(),
                hostnames: Arc::clone(&hostnames),
                portid: port.portid,
                protocol: port.protocol,
                state: port.state.unwrap_or_default(),
                service: service.name,
                product: service.product,
                version: service.version,
            });
        }
    }
}

/// Parses a whole report. See the module docs for the mapping rules.
pub fn parse_report(raw: &str) -> IngestResult<Vec<PortRecord>> {
    let mut reader = Reader::from_str(raw);
    reader.config_mut().trim_text(true);

    let mut records = Vec::new();
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut host: Option<HostDraft> = None;
    let mut port: Option<PortDraft> = None;

    loop {
        let event = reader.read_event().map_err(|e| xml_error(&reader, e))?;
        match event {
            Event::Start(e) => {
                let name = e.local_name().as_ref().to_vec();
                let parent = stack.last().map(Vec::as_slice);
                open_element(&e, &name, parent, &mut host, &mut port)
                    .map_err(|err| xml_error(&reader, err))?;
                stack.push(name);
            }
            Event::Empty(e) => {
                let name = e.local_name().as_ref().to_vec();
                let parent = stack.last().map(Vec::as_slice);
                open_element(&e, &name, parent, &mut host, &mut port)
                    .map_err(|err| xml_error(&reader, err))?;
                close_element(&name, stack.last().map(Vec::as_slice), &mut host, &mut port, &mut records);
            }
            Event::End(e) => {
                let name = e.local_name().as_ref().to_vec();
                stack.pop();
                close_element(&name, stack.last().map(Vec::as_slice), &mut host, &mut port, &mut records);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(IngestError::Xml {
            position: reader.buffer_position() as u64,
            message: format!(
                "unexpected end of document inside <{}>",
                String::from_utf8_lossy(open)
            ),
        });
    }

    Ok(records)
}

fn open_element(
    e: &BytesStart<'_>,
    name: &[u8],
    parent: Option<&[u8]>,
    host: &mut Option<HostDraft>,
    port: &mut Option<PortDraft>,
) -> Result<(), quick_xml::Error> {
    match (name, parent) {
        (b"host", _) => *host = Some(HostDraft::default()),
        (b"address", Some(b"host")) => {
            if let Some(h) = host.as_mut()
                && h.ip.is_none()
            {
                h.ip = Some(attribute(e, b"addr")?.unwrap_or_default());
            }
        }
        (b"hostname", Some(b"hostnames")) => {
            if let Some(h) = host.as_mut()
                && !h.hostnames_done
                && let Some(hostname) = attribute(e, b"name")?
            {
                h.hostnames.push(hostname);
            }
        }
        (b"port", Some(b"ports")) if host.is_some() => {
            *port = Some(PortDraft {
                portid: attribute(e, b"portid")?.unwrap_or_default(),
                protocol: attribute(e, b"protocol")?.unwrap_or_default(),
                ..Default::default()
            });
        }
        (b"state", Some(b"port")) => {
            if let Some(p) = port.as_mut()
                && p.state.is_none()
            {
                p.state = Some(attribute(e, b"state")?.unwrap_or_default());
            }
        }
        (b"service", Some(b"port")) => {
            if let Some(p) = port.as_mut()
                && p.service.is_none()
            {
                p.service = Some(ServiceDraft {
                    name: attribute(e, b"name")?.unwrap_or_default(),
                    product: attribute(e, b"product")?.unwrap_or_default(),
                    version: attribute(e, b"version")?.unwrap_or_default(),
                });
            }
        }
        _ => {}
    }
    Ok(())
}

fn close_element(
    name: &[u8],
    parent: Option<&[u8]>,
    host: &mut Option<HostDraft>,
    port: &mut Option<PortDraft>,
    records: &mut Vec<PortRecord>,
) {
    match (name, parent) {
        (b"host", _) => {
            if let Some(h) = host.take() {
                h.flatten(records);
            }
        }
        (b"hostnames", Some(b"host")) => {
            if let Some(h) = host.as_mut() {
                h.hostnames_done = true;
            }
        }
        (b"port", Some(b"ports")) => {
            if let (Some(h), Some(p)) = (host.as_mut(), port.take()) {
                h.ports.push(p);
            }
        }
        _ => {}
    }
}

fn attribute(e: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>, quick_xml::Error> {
    match e.try_get_attribute(name)? {
        Some(attr) => Ok(Some(attr.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}

fn xml_error(reader: &Reader<&[u8]>, error: quick_xml::Error) -> IngestError {
    IngestError::Xml {
        position: reader.error_position() as u64,
        message: error.to_string(),
    }
}
