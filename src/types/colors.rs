use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe color enum instead of strings.
///
/// Covers Notion's colour vocabulary. BlockNote uses the plain names for both
/// `textColor` and `backgroundColor`, so the foreground variants double as
/// background colours on the editor side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Default,
    Gray,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    GrayBackground,
    BrownBackground,
    RedBackground,
    OrangeBackground,
    YellowBackground,
    GreenBackground,
    BlueBackground,
    PurpleBackground,
    PinkBackground,
}

impl std::str::FromStr for Color {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Color::Default),
            "gray" => Ok(Color::Gray),
            "brown" => Ok(Color::Brown),
            "red" => Ok(Color::Red),
            "orange" => Ok(Color::Orange),
            "yellow" => Ok(Color::Yellow),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            "purple" => Ok(Color::Purple),
            "pink" => Ok(Color::Pink),
            "gray_background" => Ok(Color::GrayBackground),
            "brown_background" => Ok(Color::BrownBackground),
            "red_background" => Ok(Color::RedBackground),
            "orange_background" => Ok(Color::OrangeBackground),
            "yellow_background" => Ok(Color::YellowBackground),
            "green_background" => Ok(Color::GreenBackground),
            "blue_background" => Ok(Color::BlueBackground),
            "purple_background" => Ok(Color::PurpleBackground),
            "pink_background" => Ok(Color::PinkBackground),
            _ => Err(ValidationError::InvalidColor(s.to_string())),
        }
    }
}

impl Color {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Default => "default",
            Color::Gray => "gray",
            Color::Brown => "brown",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Pink => "pink",
            Color::GrayBackground => "gray_background",
            Color::BrownBackground => "brown_background",
            Color::RedBackground => "red_background",
            Color::OrangeBackground => "orange_background",
            Color::YellowBackground => "yellow_background",
            Color::GreenBackground => "green_background",
            Color::BlueBackground => "blue_background",
            Color::PurpleBackground => "purple_background",
            Color::PinkBackground => "pink_background",
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Color::Default)
    }

    /// The Notion `*_background` variant of a plain colour.
    pub fn as_background(&self) -> Color {
        match self {
            Color::Gray => Color::GrayBackground,
            Color::Brown => Color::BrownBackground,
            Color::Red => Color::RedBackground,
            Color::Orange => Color::OrangeBackground,
            Color::Yellow => Color::YellowBackground,
            Color::Green => Color::GreenBackground,
            Color::Blue => Color::BlueBackground,
            Color::Purple => Color::PurpleBackground,
            Color::Pink => Color::PinkBackground,
            other => *other,
        }
    }

    /// Lenient parse: anything outside the vocabulary becomes `Default`.
    pub fn parse_lenient(s: &str) -> Color {
        s.parse().unwrap_or_else(|_| {
            log::debug!("Unknown color: {}", s);
            Color::Default
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Color::parse_lenient(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_color_parsing() {
        assert_eq!(Color::from_str("red").unwrap(), Color::Red);
        assert_eq!(
            Color::from_str("gray_background").unwrap(),
            Color::GrayBackground
        );
        assert!(Color::from_str("invalid").is_err());
        assert_eq!(Color::parse_lenient("invalid"), Color::Default);
    }

    #[test]
    fn test_background_colors() {
        assert_eq!(Color::Red.as_background(), Color::RedBackground);
        assert_eq!(Color::Default.as_background(), Color::Default);
    }

    #[test]
    fn test_serde_uses_notion_names() {
        let json = serde_json::to_string(&Color::BlueBackground).unwrap();
        assert_eq!(json, "\"blue_background\"");
        let color: Color = serde_json::from_str("\"teal\"").unwrap();
        assert_eq!(color, Color::Default);
    }
}
