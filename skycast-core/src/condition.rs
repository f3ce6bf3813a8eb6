//! Weather-code presentation lookup.
//!
//! WMO weather codes partition into the glyphs the widget shows. The mapping
//! is total: anything outside the enumerated ranges gets the rainbow glyph
//! with no animation.

/// Animation class attached to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    Sunny,
    PartlyCloudy,
    Fog,
    Rain,
    Snow,
    Storm,
}

impl Animation {
    pub fn class(&self) -> &'static str {
        match self {
            Animation::Sunny => "sunny",
            Animation::PartlyCloudy => "partly-cloudy",
            Animation::Fog => "fog",
            Animation::Rain => "rain",
            Animation::Snow => "snow",
            Animation::Storm => "storm",
        }
    }
}

/// Emoji plus animation class for one weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub emoji: &'static str,
    pub animation: Option<Animation>,
}

impl Glyph {
    /// Animation class name, empty for the fallback glyph.
    pub fn class(&self) -> &'static str {
        self.animation.map(|a| a.class()).unwrap_or("")
    }
}

/// Map a WMO weather code to its glyph.
///
/// See <https://open-meteo.com/en/docs#weathervariables> for the code table.
pub fn glyph_for(code: i32) -> Glyph {
    let (emoji, animation) = match code {
        0 => ("☀️", Some(Animation::Sunny)),
        1..=3 => ("⛅", Some(Animation::PartlyCloudy)),
        45 | 48 => ("🌫", Some(Animation::Fog)),
        51 | 53 | 55 | 56 | 57 => ("🌦", Some(Animation::Rain)),
        61 | 63 | 65 | 66 | 67 => ("🌧", Some(Animation::Rain)),
        71 | 73 | 75 | 77 => ("❄️", Some(Animation::Snow)),
        80 | 81 | 82 => ("🌧", Some(Animation::Rain)),
        85 | 86 => ("🌨", Some(Animation::Snow)),
        95 | 96 | 99 => ("⛈", Some(Animation::Storm)),
        _ => ("🌈", None),
    };
    Glyph { emoji, animation }
}
