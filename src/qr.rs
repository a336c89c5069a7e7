use eframe::egui;
use image::imageops::FilterType;
use qrcode::QrCode;

/// URL encoded in the About badge.
pub const ABOUT_URL: &str = "https://github.com/nickshouse/ferris-gallery";

/// Badge size on screen (width, height).
pub const BADGE_SIZE: (u32, u32) = (157, 104);

const MODULE_SCALE: u32 = 4;
const QUIET_MODULES: u32 = 2;

/// Render the About URL as a QR image at exactly `BADGE_SIZE`.
pub fn badge_image() -> egui::ColorImage {
    // A short constant fits every QR version, so the encode cannot fail.
    let code = QrCode::new(ABOUT_URL.as_bytes()).unwrap();
    let modules = code.to_colors();
    let size = code.width();

    let dim = (size as u32 + QUIET_MODULES * 2) * MODULE_SCALE;
    let square = image::RgbaImage::from_fn(dim, dim, |x, y| {
        let mx = (x / MODULE_SCALE) as i64 - QUIET_MODULES as i64;
        let my = (y / MODULE_SCALE) as i64 - QUIET_MODULES as i64;
        let in_code = (0..size as i64).contains(&mx) && (0..size as i64).contains(&my);
        if in_code && modules[my as usize * size + mx as usize] == qrcode::Color::Dark {
            image::Rgba([0, 0, 0, 255])
        } else {
            image::Rgba([255, 255, 255, 255])
        }
    });

    // Nearest keeps module edges crisp at the squashed badge size.
    let badge = image::imageops::resize(&square, BADGE_SIZE.0, BADGE_SIZE.1, FilterType::Nearest);
    egui::ColorImage::from_rgba_unmultiplied(
        [BADGE_SIZE.0 as usize, BADGE_SIZE.1 as usize],
        badge.as_raw(),
    )
}

/* ───────────────────────── tests ────────────────────────────────── */
