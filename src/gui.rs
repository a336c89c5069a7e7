use std::path::{Path, PathBuf};

use eframe::egui;
use egui::{Color32, FontId, Pos2, Rect, Sense, Stroke, TextureHandle};

use crate::load::{self, DETAIL_SIZE, IMAGE_EXTENSIONS, THUMB_SIZE};
use crate::qr;
use crate::store;

/* ───────────────────────── UI tuneables ─────────────────────────── */

/// Fixed, non-resizable main window.
pub const WINDOW_SIZE: (f32, f32) = (750.0, 560.0);

const GRID_COLS: usize = 3;
const GRID_ORIGIN: Pos2 = Pos2::new(15.0, 64.0);
const CELL_GAP: f32 = 10.0;

const BANNER_TOP: f32 = 8.0;
const BANNER_HEIGHT: f32 = 48.0;

const BUTTON_X: f32 = 250.0;
const BUTTON_W: f32 = 250.0;
const BUTTON_H: f32 = 36.0;
const BUTTON_YS: [f32; 3] = [400.0, 450.0, 500.0];

const ABOUT_POS: Pos2 = Pos2::new(550.0, 400.0);
const ABOUT_H: f32 = 26.0;
const BADGE_POS: Pos2 = Pos2::new(550.0, 430.0);

const BACKGROUND: Color32 = Color32::from_rgb(0x1e, 0x2a, 0x47);
const ACCENT: Color32 = Color32::from_rgb(0xf4, 0xa3, 0x00);
const HOVER_BORDER: Color32 = Color32::from_rgb(0xff, 0x63, 0x47);
const THUMB_BORDER: Color32 = Color32::from_gray(0xc8);

const UV_FULL: Rect = Rect {
    min: Pos2::new(0.0, 0.0),
    max: Pos2::new(1.0, 1.0),
};

/* ───────────────────────── domain types ─────────────────────────── */

/// One rendered grid cell. `index` is the path's position in the gallery
/// and alone decides where the cell sits; a skipped entry leaves a gap
/// instead of shifting its neighbours.
struct Thumb {
    index: usize,
    path: PathBuf,
    tex: TextureHandle,
}

/// One open detail window. The id keeps repeated opens of the same image
/// independent of each other.
struct DetailView {
    id: u64,
    tex: TextureHandle,
    open: bool,
}

/* ───────────────────────── app state ────────────────────────────── */

pub struct GalleryApp {
    /// The gallery: ordered image paths, replaced only wholesale.
    paths: Vec<PathBuf>,
    /// Projection of `paths`, rebuilt from scratch on every replacement.
    thumbs: Vec<Thumb>,
    details: Vec<DetailView>,
    next_detail_id: u64,
    badge: TextureHandle,
    egui_ctx: egui::Context,
}

impl GalleryApp {
    pub fn new(egui_ctx: egui::Context) -> Self {
        let badge = egui_ctx.load_texture("about_qr", qr::badge_image(), Default::default());
        Self {
            paths: Vec::new(),
            thumbs: Vec::new(),
            details: Vec::new(),
            next_detail_id: 0,
            badge,
            egui_ctx,
        }
    }

    /// Replace the gallery wholesale and rebuild every thumbnail.
    pub fn set_gallery(&mut self, paths: Vec<PathBuf>) {
        self.paths = paths;
        self.rebuild_thumbs();
    }

    /// Bring back the saved path list, if any. A missing state file is a
    /// normal first start; anything unreadable degrades to an empty gallery.
    pub fn restore_gallery(&mut self) {
        match store::load() {
            Ok(paths) => {
                log::info!("restored {} image paths", paths.len());
                self.set_gallery(paths);
            }
            Err(store::StoreError::NotFound) => log::debug!("no saved gallery"),
            Err(err) => log::warn!("ignoring saved gallery: {err}"),
        }
    }

    fn save_gallery(&self) {
        match store::save(&self.paths) {
            Ok(()) => log::info!("saved {} image paths", self.paths.len()),
            Err(err) => log::warn!("could not save gallery: {err}"),
        }
    }

    fn pick_images(&mut self) {
        let picked = rfd::FileDialog::new()
            .set_title("Open Images")
            .add_filter("Image Files", &IMAGE_EXTENSIONS)
            .pick_files();
        match picked {
            Some(files) if !files.is_empty() => self.set_gallery(files),
            // cancelled: gallery and grid stay exactly as they were
            _ => {}
        }
    }

    /// Drop every previous cell, then decode each path at thumbnail size.
    /// Entries that fail to decode are skipped with a diagnostic.
    fn rebuild_thumbs(&mut self) {
        self.thumbs.clear();
        for (index, path) in self.paths.iter().enumerate() {
            match load::load_scaled(path, THUMB_SIZE) {
                Ok(img) => {
                    let tex = self
                        .egui_ctx
                        .load_texture(texture_name(path), img, Default::default());
                    self.thumbs.push(Thumb {
                        index,
                        path: path.clone(),
                        tex,
                    });
                }
                Err(err) => log::warn!("skipping {}: {err}", path.display()),
            }
        }
    }

    fn open_detail(&mut self, path: &Path) {
        match load::load_scaled(path, DETAIL_SIZE) {
            Ok(img) => {
                let tex = self
                    .egui_ctx
                    .load_texture(texture_name(path), img, Default::default());
                self.next_detail_id += 1;
                self.details.push(DetailView {
                    id: self.next_detail_id,
                    tex,
                    open: true,
                });
            }
            Err(err) => log::warn!("cannot show {}: {err}", path.display()),
        }
    }
}

/* ─────────────────── eframe integration ─────────────────────────── */

impl eframe::App for GalleryApp {
    fn ui(&mut self, ui: &mut egui::Ui, frame: &mut eframe::Frame) {
        let ctx = ui.ctx().clone();
        #[allow(deprecated)]
        eframe::App::update(self, &ctx, frame);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut clicked: Option<PathBuf> = None;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(BACKGROUND))
            .show(ctx, |ui| {
                draw_banner(ui);
                clicked = self.draw_grid(ui);
                self.draw_controls(ui, ctx);
                self.draw_badge(ui);
            });

        if let Some(path) = clicked {
            self.open_detail(&path);
        }

        self.show_details(ctx);
    }
}

impl GalleryApp {
    fn draw_grid(&self, ui: &mut egui::Ui) -> Option<PathBuf> {
        let mut clicked = None;
        for thumb in &self.thumbs {
            let rect = cell_rect(thumb.index);
            let resp = ui
                .allocate_rect(rect, Sense::click())
                .on_hover_cursor(egui::CursorIcon::PointingHand);

            ui.painter().image(thumb.tex.id(), rect, UV_FULL, Color32::WHITE);
            let stroke = if resp.hovered() {
                Stroke::new(3.0, HOVER_BORDER)
            } else {
                Stroke::new(2.0, THUMB_BORDER)
            };
            ui.painter()
                .rect_stroke(rect, 0.0, stroke, egui::StrokeKind::Outside);

            if resp.clicked() {
                clicked = Some(thumb.path.clone());
            }
        }
        clicked
    }

    fn draw_controls(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        if fixed_button(ui, BUTTON_YS[0], "Load Images").clicked() {
            self.pick_images();
        }
        if fixed_button(ui, BUTTON_YS[1], "Save Images").clicked() {
            self.save_gallery();
        }
        if fixed_button(ui, BUTTON_YS[2], "Exit").clicked() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn draw_badge(&self, ui: &egui::Ui) {
        let about = Rect::from_min_size(
            ABOUT_POS,
            egui::vec2(qr::BADGE_SIZE.0 as f32, ABOUT_H),
        );
        ui.painter().rect_filled(about, 0.0, ACCENT);
        ui.painter()
            .rect_stroke(about, 0.0, Stroke::new(1.0, Color32::BLACK), egui::StrokeKind::Outside);
        ui.painter().text(
            about.center(),
            egui::Align2::CENTER_CENTER,
            "About",
            FontId::proportional(15.0),
            Color32::BLACK,
        );

        let badge = Rect::from_min_size(
            BADGE_POS,
            egui::vec2(qr::BADGE_SIZE.0 as f32, qr::BADGE_SIZE.1 as f32),
        );
        ui.painter().image(self.badge.id(), badge, UV_FULL, Color32::WHITE);
    }

    /// Each open detail view is its own viewport; closing one never touches
    /// the gallery or the other views.
    fn show_details(&mut self, ctx: &egui::Context) {
        for view in &mut self.details {
            let builder = egui::ViewportBuilder::default()
                .with_title("Large Image")
                .with_inner_size([DETAIL_SIZE.0 as f32, DETAIL_SIZE.1 as f32])
                .with_resizable(false);
            ctx.show_viewport_immediate(
                egui::ViewportId::from_hash_of(("detail", view.id)),
                builder,
                |ctx, _class| {
                    egui::CentralPanel::default()
                        .frame(egui::Frame::new().fill(BACKGROUND))
                        .show(ctx, |ui| {
                            let rect = ui.max_rect();
                            ui.painter().image(view.tex.id(), rect, UV_FULL, Color32::WHITE);

                            let close = Rect::from_center_size(
                                Pos2::new(rect.center().x, rect.max.y - 30.0),
                                egui::vec2(110.0, 32.0),
                            );
                            let button = egui::Button::new(
                                egui::RichText::new("Close").size(15.0).color(Color32::BLACK),
                            )
                            .fill(ACCENT);
                            if ui.put(close, button).clicked() {
                                view.open = false;
                            }
                        });
                    if ctx.input(|i| i.viewport().close_requested()) {
                        view.open = false;
                    }
                },
            );
        }
        self.details.retain(|v| v.open);
    }
}

/* ───────────────────────── fixed layout ─────────────────────────── */

/// Row-major cell for a gallery index: 3 columns, zero-based.
fn grid_cell(index: usize) -> (usize, usize) {
    (index / GRID_COLS, index % GRID_COLS)
}

fn cell_rect(index: usize) -> Rect {
    let (row, col) = grid_cell(index);
    let min = Pos2::new(
        GRID_ORIGIN.x + col as f32 * (THUMB_SIZE.0 as f32 + CELL_GAP),
        GRID_ORIGIN.y + row as f32 * (THUMB_SIZE.1 as f32 + CELL_GAP),
    );
    Rect::from_min_size(min, egui::vec2(THUMB_SIZE.0 as f32, THUMB_SIZE.1 as f32))
}

fn draw_banner(ui: &egui::Ui) {
    let rect = Rect::from_min_size(
        Pos2::new(0.0, BANNER_TOP),
        egui::vec2(WINDOW_SIZE.0, BANNER_HEIGHT),
    );
    ui.painter().rect_filled(rect, 0.0, ACCENT);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "Image Gallery",
        FontId::proportional(26.0),
        Color32::BLACK,
    );
}

fn fixed_button(ui: &mut egui::Ui, y: f32, label: &str) -> egui::Response {
    let rect = Rect::from_min_size(Pos2::new(BUTTON_X, y), egui::vec2(BUTTON_W, BUTTON_H));
    let button = egui::Button::new(egui::RichText::new(label).size(15.0).color(Color32::BLACK))
        .fill(ACCENT)
        .stroke(Stroke::new(1.0, Color32::BLACK));
    ui.put(rect, button)
}

fn texture_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/* ───────────────────────── tests ────────────────────────────────── */
