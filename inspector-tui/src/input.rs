//! Reading and parsing the inspected input.

use std::io::{self, Read};
use std::path::Path;

use inspector_lib::{DomNode, LoadError, Value, dom, object};

use crate::settings::Mode;

/// Parsed input, ready for one of the inspectors.
#[derive(Debug)]
pub enum Document {
    Object(Value),
    Dom(DomNode),
    Table(Value),
}

/// Read the whole input; `-` reads stdin.
pub fn read(path: &Path) -> io::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
    }
}

pub fn parse(text: &str, mode: Mode) -> Result<Document, LoadError> {
    Ok(match mode {
        Mode::Object => Document::Object(object::from_json_str(text)?),
        Mode::Dom => Document::Dom(dom::from_json_str(text)?),
        Mode::Table => Document::Table(object::from_json_str(text)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modes() {
        assert!(matches!(
            parse(r#"{"a": 1}"#, Mode::Object),
            Ok(Document::Object(_))
        ));
        assert!(matches!(
            parse(r#"[{"a": 1}]"#, Mode::Table),
            Ok(Document::Table(_))
        ));
        assert!(matches!(
            parse(r#"{"type": "text", "textContent": "hi"}"#, Mode::Dom),
            Ok(Document::Dom(_))
        ));
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(parse("{", Mode::Object), Err(LoadError::Json(_))));
    }
}
