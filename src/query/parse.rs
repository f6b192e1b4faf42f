//! Query string tokenizer and value parsers.

use alloc::string::String;
use alloc::vec::Vec;

use super::ParseWarning;
use super::request::MemeRequest;
use crate::color::Color;
use crate::fit::FitPolicy;
use crate::speech::Volume;

/// Parse a query string into a request + warnings.
pub(crate) fn parse_query(query: &str) -> (MemeRequest, Vec<ParseWarning>) {
    let mut req = MemeRequest::new();
    let mut warnings = Vec::new();

    for pair in split_query(query) {
        let (raw_key, raw_value) = split_pair(pair);
        let key = percent_decode(raw_key).to_ascii_lowercase();
        let value = percent_decode(raw_value);
        dispatch_key(&key, &value, &mut req, &mut warnings);
    }

    tracing::trace!(warnings = warnings.len(), "query parsed");
    (req, warnings)
}

fn dispatch_key(key: &str, value: &str, req: &mut MemeRequest, warnings: &mut Vec<ParseWarning>) {
    match key {
        // Canvas
        "w" | "width" => match parse_dimension(value) {
            Some(w) => set_or_warn(&mut req.width, w, key, value, warnings),
            None => invalid("width", value, "expected a positive integer", warnings),
        },
        "h" | "height" => match parse_dimension(value) {
            Some(h) => set_or_warn(&mut req.height, h, key, value, warnings),
            None => invalid("height", value, "expected a positive integer", warnings),
        },
        "fit" => match parse_fit_policy(value) {
            Some(p) => set_or_warn(&mut req.fit, p, key, value, warnings),
            None => invalid("fit", value, "expected orientation|contain", warnings),
        },

        // Captions
        "top" => set_or_warn(&mut req.top, String::from(value), key, value, warnings),
        "bottom" => set_or_warn(&mut req.bottom, String::from(value), key, value, warnings),

        // Speech
        "voice" => set_or_warn(&mut req.voice, String::from(value), key, value, warnings),
        "volume" => match parse_volume(value) {
            Some(v) => set_or_warn(&mut req.volume, v, key, value, warnings),
            None => invalid("volume", value, "expected an integer 0-100", warnings),
        },

        // Colors
        "bg" | "bgcolor" => match Color::parse(value) {
            Some(c) => set_or_warn(&mut req.background, c, key, value, warnings),
            None => invalid("bgcolor", value, "expected hex or named color", warnings),
        },
        "fill" => match Color::parse(value) {
            Some(c) => set_or_warn(&mut req.fill, c, key, value, warnings),
            None => invalid("fill", value, "expected hex or named color", warnings),
        },
        "stroke" => match Color::parse(value) {
            Some(c) => set_or_warn(&mut req.stroke, c, key, value, warnings),
            None => invalid("stroke", value, "expected hex or named color", warnings),
        },

        _ => warnings.push(ParseWarning::KeyNotRecognized {
            key: String::from(key),
            value: String::from(value),
        }),
    }
}

fn set_or_warn<T>(
    field: &mut Option<T>,
    parsed: T,
    key: &str,
    value: &str,
    warnings: &mut Vec<ParseWarning>,
) {
    if field.is_some() {
        warnings.push(ParseWarning::DuplicateKey {
            key: String::from(key),
            value: String::from(value),
        });
    }
    *field = Some(parsed);
}

fn invalid(key: &'static str, value: &str, reason: &'static str, warnings: &mut Vec<ParseWarning>) {
    warnings.push(ParseWarning::ValueInvalid {
        key,
        value: String::from(value),
        reason,
    });
}

fn parse_dimension(s: &str) -> Option<u32> {
    s.trim().parse::<u32>().ok().filter(|&v| v > 0)
}

fn parse_volume(s: &str) -> Option<Volume> {
    s.trim()
        .parse::<u32>()
        .ok()
        .filter(|&v| v <= 100)
        .map(Volume::new)
}

fn parse_fit_policy(s: &str) -> Option<FitPolicy> {
    match s.trim().to_ascii_lowercase().as_str() {
        "orientation" | "default" => Some(FitPolicy::ContentOrientation),
        "contain" => Some(FitPolicy::Contain),
        _ => None,
    }
}

fn split_query(query: &str) -> impl Iterator<Item = &str> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter(|s| !s.is_empty())
}

fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or((pair, ""))
}

/// Decode `+` as space and `%XX` escapes. Malformed escapes pass through
/// literally; invalid UTF-8 is replaced.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    match String::from_utf8(out) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
