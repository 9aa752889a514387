//! JSON ingestion.
//!
//! Plain JSON maps onto objects, arrays and scalars with key order kept. A few
//! single-key objects stand for shapes JSON cannot express:
//!
//! | JSON                                      | value                  |
//! |-------------------------------------------|------------------------|
//! | `{"$undefined": true}`                    | `undefined`            |
//! | `{"$bigint": "123"}`                      | `123n`                 |
//! | `{"$symbol": "desc"}`                     | `Symbol(desc)`         |
//! | `{"$date": "2024-01-01T00:00:00Z"}`       | date                   |
//! | `{"$regexp": {"source": "a+", "flags": "g"}}` | `/a+/g`            |
//! | `{"$function": "name"}`                   | `ƒ name()`             |
//! | `{"$map": [[key, value], ...]}`           | `Map`                  |
//! | `{"$set": [value, ...]}`                  | `Set`                  |
//! | `{"$buffer": [0, 255, ...]}`              | `Buffer`               |

use serde_json::{Map, Value as Json};

use super::value::Value;
use crate::error::LoadError;

/// Parse JSON text into a [`Value`].
pub fn from_json_str(text: &str) -> Result<Value, LoadError> {
    let json: Json = serde_json::from_str(text)?;
    from_json(&json)
}

/// Convert parsed JSON into a [`Value`].
pub fn from_json(json: &Json) -> Result<Value, LoadError> {
    Ok(match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => number(n),
        Json::String(s) => Value::String(s.clone()),
        Json::Array(items) => Value::array(items.iter().map(from_json).collect::<Result<Vec<_>, _>>()?),
        Json::Object(map) => match tagged(map)? {
            Some(value) => value,
            None => {
                let entries = map
                    .iter()
                    .map(|(key, value)| Ok((key.as_str(), from_json(value)?)))
                    .collect::<Result<Vec<_>, LoadError>>()?;
                Value::object(entries)
            }
        },
    })
}

fn number(n: &serde_json::Number) -> Value {
    const MAX_SAFE: u64 = (1 << 53) - 1;
    match (n.as_i64(), n.as_u64()) {
        (Some(i), _) if i.unsigned_abs() > MAX_SAFE => Value::BigInt(i128::from(i)),
        (None, Some(u)) => Value::BigInt(i128::from(u)),
        _ => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
    }
}

fn tagged(map: &Map<String, Json>) -> Result<Option<Value>, LoadError> {
    if map.len() != 1 {
        return Ok(None);
    }
    let Some((tag, body)) = map.iter().next() else {
        return Ok(None);
    };
    let value = match tag.as_str() {
        "$undefined" => Value::Undefined,
        "$bigint" => {
            let text = expect_str(body, "bigint digits")?;
            let n = text
                .parse::<i128>()
                .map_err(|_| LoadError::shape("bigint digits", text))?;
            Value::BigInt(n)
        }
        "$symbol" => Value::symbol(expect_str(body, "symbol description")?),
        "$date" => Value::date(expect_str(body, "date text")?),
        "$function" => Value::function(expect_str(body, "function name")?),
        "$regexp" => {
            let source = body
                .get("source")
                .and_then(Json::as_str)
                .ok_or_else(|| LoadError::shape("regexp source", body.to_string()))?;
            let flags = body.get("flags").and_then(Json::as_str).unwrap_or_default();
            Value::regexp(source, flags)
        }
        "$map" => {
            let entries = expect_array(body, "array of [key, value] pairs")?
                .iter()
                .map(|pair| match pair.as_array().map(Vec::as_slice) {
                    Some([key, value]) => Ok((from_json(key)?, from_json(value)?)),
                    _ => Err(LoadError::shape("[key, value] pair", pair.to_string())),
                })
                .collect::<Result<Vec<_>, _>>()?;
            Value::map(entries)
        }
        "$set" => Value::set(
            expect_array(body, "array of set values")?
                .iter()
                .map(from_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        "$buffer" => {
            let bytes = expect_array(body, "array of bytes")?
                .iter()
                .map(|byte| {
                    byte.as_u64()
                        .and_then(|b| u8::try_from(b).ok())
                        .ok_or_else(|| LoadError::shape("byte", byte.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            Value::buffer(bytes)
        }
        _ => return Ok(None),
    };
    Ok(Some(value))
}

fn expect_str<'a>(json: &'a Json, expected: &'static str) -> Result<&'a str, LoadError> {
    json.as_str()
        .ok_or_else(|| LoadError::shape(expected, json.to_string()))
}

fn expect_array<'a>(json: &'a Json, expected: &'static str) -> Result<&'a Vec<Json>, LoadError> {
    json.as_array()
        .ok_or_else(|| LoadError::shape(expected, json.to_string()))
}
