//! Color themes.
//!
//! A [`Theme`] maps the semantic [`Token`]s of rendered labels to terminal
//! styles, plus the few chrome colors the painters need.

use inspector_lib::Token;

use crate::style::{Rgb, Style};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb,
    pub foreground: Rgb,
    /// Cursor row.
    pub selection: Rgb,
    /// Expand arrows and sort glyphs.
    pub arrow: Rgb,
    /// Table header band.
    pub header: Rgb,
    /// Table grid lines.
    pub border: Rgb,
    pub name: Rgb,
    pub null: Rgb,
    /// Strings, regexps and symbols.
    pub string: Rgb,
    /// Numbers and booleans.
    pub number: Rgb,
    pub function_prefix: Rgb,
    pub tag: Rgb,
    pub tag_name: Rgb,
    pub attribute_name: Rgb,
    pub attribute_value: Rgb,
    pub comment: Rgb,
    pub doctype: Rgb,
}

impl Theme {
    pub const fn light() -> Self {
        Self {
            background: Rgb::WHITE,
            foreground: Rgb::BLACK,
            selection: Rgb::hex(0xdadada),
            arrow: Rgb::hex(0x6e6e6e),
            header: Rgb::hex(0xf3f3f3),
            border: Rgb::hex(0xaaaaaa),
            name: Rgb::new(136, 19, 145),
            null: Rgb::new(128, 128, 128),
            string: Rgb::new(196, 26, 22),
            number: Rgb::new(28, 0, 207),
            function_prefix: Rgb::new(13, 34, 170),
            tag: Rgb::new(168, 148, 166),
            tag_name: Rgb::new(136, 18, 128),
            attribute_name: Rgb::new(153, 69, 0),
            attribute_value: Rgb::new(26, 26, 166),
            comment: Rgb::new(35, 110, 37),
            doctype: Rgb::new(192, 192, 192),
        }
    }

    pub const fn dark() -> Self {
        Self {
            background: Rgb::new(36, 36, 36),
            foreground: Rgb::new(213, 213, 213),
            selection: Rgb::new(64, 64, 64),
            arrow: Rgb::new(145, 145, 145),
            header: Rgb::new(44, 44, 44),
            border: Rgb::new(85, 85, 85),
            name: Rgb::new(227, 110, 236),
            null: Rgb::new(127, 127, 127),
            string: Rgb::new(233, 63, 59),
            number: Rgb::new(153, 128, 255),
            function_prefix: Rgb::new(85, 106, 242),
            tag: Rgb::new(93, 176, 215),
            tag_name: Rgb::new(93, 176, 215),
            attribute_name: Rgb::new(155, 187, 220),
            attribute_value: Rgb::new(242, 151, 102),
            comment: Rgb::new(137, 137, 137),
            doctype: Rgb::new(192, 192, 192),
        }
    }

    /// Style of a label span.
    pub fn token(&self, token: Token) -> Style {
        match token {
            Token::Plain | Token::Punctuation => Style::new(self.foreground),
            Token::Preview => Style::new(self.foreground).italic(),
            Token::Name => Style::new(self.name),
            Token::DimmedName => Style::new(self.name).dim(),
            Token::Number | Token::Boolean => Style::new(self.number),
            Token::String | Token::RegExp | Token::Symbol => Style::new(self.string),
            Token::Undefined | Token::Null => Style::new(self.null),
            Token::FunctionPrefix => Style::new(self.function_prefix).italic(),
            Token::FunctionName => Style::new(self.foreground).italic(),
            Token::TagBracket => Style::new(self.tag),
            Token::TagName => Style::new(self.tag_name),
            Token::AttributeName => Style::new(self.attribute_name),
            Token::AttributeValue => Style::new(self.attribute_value),
            Token::Comment => Style::new(self.comment),
            Token::Doctype => Style::new(self.doctype),
            Token::SortIcon => Style::new(self.arrow),
        }
    }

    pub fn text(&self) -> Style {
        Style::new(self.foreground)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
