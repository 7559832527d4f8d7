//! QR presentation rendering.

use qrcode::QrCode;
use qrcode::render::svg;

use crate::error::RallyServiceError;

/// Presentation options for a rendered QR image.
#[derive(Debug, Clone)]
pub struct QrOptions {
    /// Minimum output width/height in pixels.
    pub size: u32,
    /// Render the quiet-zone border around the modules.
    pub quiet_zone: bool,
    /// Module color, any SVG color string.
    pub dark: String,
    /// Background color.
    pub light: String,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            size: 300,
            quiet_zone: true,
            dark: "#000000".to_owned(),
            light: "#ffffff".to_owned(),
        }
    }
}

/// Render `data` as an SVG QR image.
///
/// Pure function of the payload string and options; no side effects beyond
/// the returned markup. Fails with `Encoding` when `data` exceeds the QR
/// format's capacity (not expected for short scan payloads).
pub fn render_svg(data: &str, opts: &QrOptions) -> Result<String, RallyServiceError> {
    let code = QrCode::new(data.as_bytes())?;
    let image = code
        .render::<svg::Color>()
        .min_dimensions(opts.size, opts.size)
        .quiet_zone(opts.quiet_zone)
        .dark_color(svg::Color(&opts.dark))
        .light_color(svg::Color(&opts.light))
        .build();
    Ok(image)
}
