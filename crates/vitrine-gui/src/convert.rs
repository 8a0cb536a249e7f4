use vitrine_core::geometry::{Point, Rect};
use vitrine_core::io::DecodedImage;

const CHECKER_CELL: usize = 16;

/// Convert decoded RGBA pixels to an egui ColorImage.
pub fn decoded_to_color_image(img: &DecodedImage) -> egui::ColorImage {
    let size = [img.width as usize, img.height as usize];
    let pixels = img
        .rgba
        .chunks_exact(4)
        .map(|p| egui::Color32::from_rgba_unmultiplied(p[0], p[1], p[2], p[3]))
        .collect();
    egui::ColorImage {
        size,
        pixels,
        source_size: Default::default(),
    }
}

/// Grey checkerboard shown in place of images that failed to decode.
pub fn placeholder_color_image(side: usize) -> egui::ColorImage {
    let light = egui::Color32::from_gray(70);
    let dark = egui::Color32::from_gray(50);
    let pixels = (0..side * side)
        .map(|i| {
            let (x, y) = (i % side, i / side);
            if (x / CHECKER_CELL + y / CHECKER_CELL) % 2 == 0 {
                light
            } else {
                dark
            }
        })
        .collect();
    egui::ColorImage {
        size: [side, side],
        pixels,
        source_size: Default::default(),
    }
}

pub fn to_point(p: egui::Pos2) -> Point {
    Point::new(p.x, p.y)
}

pub fn to_rect(r: egui::Rect) -> Rect {
    Rect {
        min: to_point(r.min),
        max: to_point(r.max),
    }
}

pub fn to_egui_rect(r: Rect) -> egui::Rect {
    egui::Rect::from_min_max(egui::pos2(r.min.x, r.min.y), egui::pos2(r.max.x, r.max.y))
}
