//////////////////////////////////////////////////////////////////////
// flatten a generation into one vertex buffer per colour class,
// the layout a renderer uploads directly (x, y, 0 per vertex)

use std::io::Write;

use crate::errors::*;
use crate::subdivider::ColorCounts;
use crate::tile::{ColorClass, Triangle};

pub const FLOATS_PER_VERTEX: usize = 3;
pub const FLOATS_PER_TRIANGLE: usize = 3 * FLOATS_PER_VERTEX;

#[derive(Debug, PartialEq, Clone, Default)]
pub struct ExportOptions {
    // index into the ordered triangle list to leave out, opening a
    // hole for the protagonist to land in
    pub omit: Option<usize>,
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct VertexBuffers {
    pub acute: Vec<f32>,
    pub obtuse: Vec<f32>,
}

impl VertexBuffers {

    // every triangle, bucketed by class in input order
    pub fn from_triangles(tris: &[Triangle]) -> Self {

        let mut buffers = VertexBuffers::with_counts(ColorCounts::of(tris));

        for t in tris {
            buffers.push(t);
        }

        buffers

    }

    fn with_counts(counts: ColorCounts) -> Self {
        VertexBuffers {
            acute: Vec::with_capacity(FLOATS_PER_TRIANGLE * counts.acute),
            obtuse: Vec::with_capacity(FLOATS_PER_TRIANGLE * counts.obtuse),
        }
    }

    pub fn push(&mut self, t: &Triangle) {

        let dst = match t.color {
            ColorClass::Acute => &mut self.acute,
            ColorClass::Obtuse => &mut self.obtuse
        };

        for p in &t.points() {
            dst.push(p.x as f32);
            dst.push(p.y as f32);
            dst.push(0.0);
        }

    }

    pub fn get(&self, color: ColorClass) -> &[f32] {
        match color {
            ColorClass::Acute => &self.acute,
            ColorClass::Obtuse => &self.obtuse
        }
    }

    pub fn counts(&self) -> ColorCounts {
        ColorCounts::new(self.acute.len() / FLOATS_PER_TRIANGLE,
                         self.obtuse.len() / FLOATS_PER_TRIANGLE)
    }

}

//////////////////////////////////////////////////////////////////////

#[derive(Debug, PartialEq, Clone)]
pub struct Export {
    pub buffers: VertexBuffers,
    pub omitted: Option<Triangle>,
}

pub fn export(tris: &[Triangle], opts: &ExportOptions) -> Result<Export> {

    let omit = match opts.omit {
        Some(k) if k >= tris.len() => {
            bail!(ErrorKind::InvalidArgument(
                format!("omit index {:} out of range for {:} triangles",
                        k, tris.len())));
        }
        other => other
    };

    let mut buffers = VertexBuffers::with_counts(ColorCounts::of(tris));
    let mut omitted = None;

    for (i, t) in tris.iter().enumerate() {

        if Some(i) == omit {
            warn!("omitting triangle {:} ({:?}): a=({:}, {:}) b=({:}, {:}) c=({:}, {:})",
                  i, t.color, t.a.x, t.a.y, t.b.x, t.b.y, t.c.x, t.c.y);
            omitted = Some(*t);
            continue;
        }

        buffers.push(t);

    }

    Ok(Export { buffers: buffers, omitted: omitted })

}

//////////////////////////////////////////////////////////////////////
// dump a buffer one vertex per line as "x, y, z"

pub fn write_vertices<W: Write>(w: &mut W, buffer: &[f32]) -> Result<()> {

    if buffer.len() % FLOATS_PER_VERTEX != 0 {
        bail!(ErrorKind::InvalidArgument(
            format!("buffer length {:} is not a multiple of {:}",
                    buffer.len(), FLOATS_PER_VERTEX)));
    }

    for v in buffer.chunks(FLOATS_PER_VERTEX) {
        writeln!(w, "{:.6}, {:.6}, {:.1}", v[0], v[1], v[2])?;
    }

    Ok(())

}
