use chrono::{DateTime, NaiveDateTime, Utc};
use roxmltree::{Document, Node, ParsingOptions};

use crate::models::ParkingRecord;

/// Separator the parking feed packs into both `title` and `description`,
/// e.g. `"Parkhaus Accu / Otto-Schütz-Weg"` and `"open / 172"`.
pub const FIELD_DELIMITER: &str = " / ";

/// Format of the `dc:date` element on feed items
pub const UPDATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Dublin Core namespace carrying the item update time
pub const DC_NAMESPACE: &str = "http://purl.org/dc/elements/1.1/";

/// Status reported for descriptions that don't follow the `status / spots` shape
pub const UNKNOWN_STATUS: &str = "unknown";

/// Extract the garage name from a `"<name> / <location>"` title
///
/// Titles with any other shape are returned unchanged.
pub fn extract_name(title: &str) -> String {
    let parts: Vec<&str> = title.split(FIELD_DELIMITER).collect();
    if parts.len() == 2 {
        parts[0].trim().to_string()
    } else {
        title.to_string()
    }
}

/// Split a `"<status> / <spots>"` description into status and spot count
///
/// A spot count that isn't a non-negative integer becomes 0 while the status
/// is kept. Any other shape yields `("unknown", 0)`.
pub fn parse_description(description: &str) -> (String, u32) {
    let parts: Vec<&str> = description.split(FIELD_DELIMITER).collect();
    if parts.len() == 2 {
        let status = parts[0].trim().to_string();
        let available_spots = parts[1].trim().parse::<u32>().unwrap_or(0);
        (status, available_spots)
    } else {
        (UNKNOWN_STATUS.to_string(), 0)
    }
}

/// Parse an item update time, falling back to the fetch time
///
/// The format is strict: surrounding whitespace is a mismatch too.
pub fn parse_update_time(raw: &str, fallback: DateTime<Utc>) -> DateTime<Utc> {
    if raw.is_empty() || raw.trim() != raw {
        return fallback;
    }

    NaiveDateTime::parse_from_str(raw, UPDATE_TIME_FORMAT)
        .map(|naive| naive.and_utc())
        .unwrap_or(fallback)
}

/// Normalize every `channel/item` of the feed document into records
///
/// Items keep their document order and all share `fetch_time`. Only a
/// document that isn't XML at all is an error; a missing `channel` yields no
/// records and malformed item fields degrade to their defaults.
pub fn parse_feed(xml: &str, fetch_time: DateTime<Utc>) -> Result<Vec<ParkingRecord>, roxmltree::Error> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, options)?;

    let channel = match child_element(doc.root_element(), None, "channel") {
        Some(channel) => channel,
        None => return Ok(Vec::new()),
    };

    let records = channel
        .children()
        .filter(|node| is_element(*node, None, "item"))
        .map(|item| normalize_item(item, fetch_time))
        .collect();

    Ok(records)
}

fn normalize_item(item: Node<'_, '_>, fetch_time: DateTime<Utc>) -> ParkingRecord {
    let title = child_text(item, None, "title");
    let description = child_text(item, None, "description");
    let dc_date = child_text(item, Some(DC_NAMESPACE), "date");

    let (status, available_spots) = parse_description(description);

    ParkingRecord {
        name: extract_name(title),
        status,
        available_spots,
        update_time: parse_update_time(dc_date, fetch_time),
        fetch_time,
    }
}

#[inline]
fn is_element(node: Node<'_, '_>, namespace: Option<&str>, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name && node.tag_name().namespace() == namespace
}

fn child_element<'a, 'input>(
    node: Node<'a, 'input>,
    namespace: Option<&str>,
    name: &str,
) -> Option<Node<'a, 'input>> {
    node.children().find(|child| is_element(*child, namespace, name))
}

/// Text of the first matching child element; missing element or text is ""
fn child_text<'a>(node: Node<'a, '_>, namespace: Option<&str>, name: &str) -> &'a str {
    child_element(node, namespace, name)
        .and_then(|child| child.text())
        .unwrap_or("")
}
