use crate::cli::IconMode;

/// One glyph per value, scaled between the slice's own min and max.
#[allow(clippy::cast_precision_loss, clippy::cast_sign_loss)]
pub(super) fn sparkline(values: &[f32], icons: IconMode) -> String {
    const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    const ASCII_BARS: [char; 8] = ['.', ':', '-', '=', '+', '*', '#', '@'];
    if values.is_empty() {
        return String::new();
    }
    let glyphs = match icons {
        IconMode::Emoji => BARS,
        IconMode::Ascii => ASCII_BARS,
    };
    let min = values.iter().copied().fold(f32::INFINITY, f32::min);
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let span = (max - min).max(0.001);
    values
        .iter()
        .map(|value| {
            let norm = ((value - min) / span).clamp(0.0, 1.0);
            glyphs[(norm * (glyphs.len() - 1) as f32).round() as usize]
        })
        .collect()
}

pub(super) fn warning_prefix(icons: IconMode) -> &'static str {
    match icons {
        IconMode::Emoji => "⚠️ ",
        IconMode::Ascii => "!",
    }
}
