//! Canvas-drawn textures: the fallback phone's lock screen is painted with
//! Canvas2D and read back as RGBA8 for upload.

use nexus_core::model::{ClockFace, TextureSource};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Pixels {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

pub fn paint(document: &web::Document, source: &TextureSource) -> anyhow::Result<Pixels> {
    match source {
        TextureSource::ClockFace(face) => paint_clock_face(document, face),
    }
}

fn paint_clock_face(document: &web::Document, face: &ClockFace) -> anyhow::Result<Pixels> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("not a canvas"))?;
    canvas.set_width(face.width);
    canvas.set_height(face.height);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("unexpected 2d context type"))?;

    let w = face.width as f64;
    let h = face.height as f64;

    let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
    for stop in &face.gradient {
        _ = gradient.add_color_stop(stop.offset as f32, stop.color);
    }
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, w, h);

    ctx.set_text_align("center");
    ctx.set_fill_style_str(face.time_color);
    ctx.set_font(face.time_font);
    _ = ctx.fill_text(face.time_text, w / 2.0, face.time_baseline_y);
    ctx.set_fill_style_str(face.date_color);
    ctx.set_font(face.date_font);
    _ = ctx.fill_text(face.date_text, w / 2.0, face.date_baseline_y);

    let image = ctx
        .get_image_data(0.0, 0.0, w, h)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(Pixels {
        width: image.width(),
        height: image.height(),
        rgba: image.data().0,
    })
}
