//////////////////////////////////////////////////////////////////////
// one-page PDF preview of exported vertex buffers. this only reads
// the same flat buffers a GPU renderer would upload.

use std::path::Path;

use crate::errors::*;
use crate::export::{VertexBuffers, FLOATS_PER_TRIANGLE, FLOATS_PER_VERTEX};
use crate::geometry::*;
use crate::tile::{ColorClass, Triangle};

//////////////////////////////////////////////////////////////////////
// constants for layout

const INCH: f64 = 72.0;

const PAGE_EDGE: f64 = 8.5 * INCH;

const MARGIN: f64 = 0.5 * INCH;

// acute, obtuse for the main tiling then for the protagonist
const COLORS: [[f64; 3]; 4] = [
    [0.0, 0.0, 1.0],
    [0.0, 1.0, 1.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 0.0]
];

const HOLE_COLOR: [f64; 3] = [1.0, 0.0, 0.0];

//////////////////////////////////////////////////////////////////////

pub struct Preview<'a> {
    pub main: &'a VertexBuffers,
    pub protagonist: Option<&'a VertexBuffers>,
    pub hole: Option<Triangle>,
}

impl<'a> Preview<'a> {

    fn layers(&self) -> Vec<(&'a [f32], Vec3d)> {

        let mut layers = vec![];

        let mut add = |buffers: &'a VertexBuffers, offset: usize| {
            for &color in &[ColorClass::Acute, ColorClass::Obtuse] {
                let rgb = COLORS[offset + color as usize];
                layers.push((buffers.get(color), Vec3d::new(rgb[0], rgb[1], rgb[2])));
            }
        };

        add(self.main, 0);

        if let Some(p) = self.protagonist {
            add(p, 2);
        }

        layers

    }

    // bounding box of every vertex in every layer
    pub fn bounds(&self) -> Rect2d {

        let mut rect = Rect2d::empty();

        for (buffer, _) in self.layers() {
            for v in buffer.chunks(FLOATS_PER_VERTEX) {
                rect.expand(&Point2d::new(v[0] as f64, v[1] as f64));
            }
        }

        if let Some(t) = &self.hole {
            for p in &t.points() {
                rect.expand(p);
            }
        }

        rect

    }

}

//////////////////////////////////////////////////////////////////////

trait CairoVecOps {

    fn setcolor(&self, v: &Vec3d);
    fn drawtri(&self, p0: &Point2d, p1: &Point2d, p2: &Point2d);

}

impl CairoVecOps for cairo::Context {

    fn setcolor(&self, v: &Vec3d) {
        self.set_source_rgb(v[0], v[1], v[2]);
    }

    fn drawtri(&self, p0: &Point2d, p1: &Point2d, p2: &Point2d) {
        self.move_to(p0[0], p0[1]);
        self.line_to(p1[0], p1[1]);
        self.line_to(p2[0], p2[1]);
        self.close_path();
    }

}

fn draw_buffer(ctx: &cairo::Context,
               xform: &Transform2d,
               buffer: &[f32],
               color: &Vec3d,
               line_width: f64) {

    let xform = *xform;

    for tri in buffer.chunks(FLOATS_PER_TRIANGLE) {

        let p = |i: usize| {
            let j = i * FLOATS_PER_VERTEX;
            xform * Point2d::new(tri[j] as f64, tri[j + 1] as f64)
        };

        ctx.drawtri(&p(0), &p(1), &p(2));
        ctx.setcolor(color);
        ctx.fill_preserve();

        ctx.set_source_rgb(0.0, 0.0, 0.0);
        ctx.set_line_width(line_width);
        ctx.stroke();

    }

}

pub fn render_pdf<P: AsRef<Path>>(path: P, preview: &Preview) -> Result<()> {

    let bounds = preview.bounds();

    if bounds.is_empty() {
        bail!("nothing to draw");
    }

    let page_rect = Rect2d::new(Point2d::new(MARGIN, MARGIN),
                                Point2d::new(PAGE_EDGE - MARGIN, PAGE_EDGE - MARGIN));

    let (xform, scl) = get_page_transform(&bounds, &page_rect);

    let surface = cairo::PdfSurface::new(PAGE_EDGE, PAGE_EDGE, path.as_ref())?;

    let ctx = cairo::Context::new(&surface);

    ctx.set_line_join(cairo::LineJoin::Round);

    // hairlines get thinner as the tiling gets denser
    let line_width = (0.002 * scl).min(0.5);

    for (buffer, color) in preview.layers() {
        draw_buffer(&ctx, &xform, buffer, &color, line_width);
    }

    if let Some(t) = &preview.hole {

        let (p0, p1, p2) = (xform * t.a, xform * t.b, xform * t.c);

        ctx.drawtri(&p0, &p1, &p2);
        ctx.set_source_rgb(HOLE_COLOR[0], HOLE_COLOR[1], HOLE_COLOR[2]);
        ctx.set_line_width(4.0 * line_width);
        ctx.stroke();

    }

    ctx.show_page();

    surface.finish();

    Ok(())

}
