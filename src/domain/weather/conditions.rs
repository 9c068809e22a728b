use crate::cli::IconMode;

/// Provider `main` condition groups that get their own label and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Mist,
    Haze,
    Other,
}

impl Condition {
    #[must_use]
    pub fn from_main(main: &str) -> Self {
        match main {
            "Clear" => Self::Clear,
            "Clouds" => Self::Clouds,
            "Rain" => Self::Rain,
            "Drizzle" => Self::Drizzle,
            "Thunderstorm" => Self::Thunderstorm,
            "Snow" => Self::Snow,
            "Mist" => Self::Mist,
            "Haze" => Self::Haze,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Clear => "Clear Sky",
            Self::Clouds => "Cloudy",
            Self::Rain => "Rainy",
            Self::Drizzle => "Drizzle",
            Self::Thunderstorm => "Thunderstorm",
            Self::Snow => "Snowy",
            Self::Mist => "Misty",
            Self::Haze => "Hazy",
            Self::Other => "Weather",
        }
    }

    #[must_use]
    pub fn icon(self, mode: IconMode) -> &'static str {
        let (ascii, emoji) = match self {
            Self::Clear => ("SUN", "☀️"),
            Self::Clouds => ("CLD", "☁️"),
            Self::Rain => ("RAN", "🌧️"),
            Self::Drizzle => ("DRZ", "🌦️"),
            Self::Thunderstorm => ("THN", "⛈️"),
            Self::Snow => ("SNW", "❄️"),
            Self::Mist | Self::Haze => ("FOG", "🌫️"),
            Self::Other => ("---", "🌤️"),
        };
        match mode {
            IconMode::Ascii => ascii,
            IconMode::Emoji => emoji,
        }
    }
}

/// Maps a provider icon code (`01d`, `10n`, ...) to a glyph.
#[must_use]
pub fn icon_for_code(code: &str, mode: IconMode) -> &'static str {
    let (ascii, emoji) = match code {
        "01d" => ("SUN", "☀️"),
        "01n" => ("MON", "🌙"),
        "02d" => ("PCL", "⛅"),
        "02n" | "03d" | "03n" | "04d" | "04n" => ("CLD", "☁️"),
        "09d" | "09n" | "10n" => ("RAN", "🌧️"),
        "10d" => ("SHW", "🌦️"),
        "11d" | "11n" => ("THN", "⛈️"),
        "13d" | "13n" => ("SNW", "❄️"),
        "50d" | "50n" => ("FOG", "🌫️"),
        _ => ("---", "🌡️"),
    };
    match mode {
        IconMode::Ascii => ascii,
        IconMode::Emoji => emoji,
    }
}
