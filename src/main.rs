// bunch of standard library stuff
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[macro_use]
extern crate error_chain;

#[macro_use]
extern crate log;

use rtile_rs::errors::*;
use rtile_rs::export::{export, write_vertices, VertexBuffers};
use rtile_rs::preview::{render_pdf, Preview};
use rtile_rs::scene::SceneSpec;
use rtile_rs::ColorClass;

//////////////////////////////////////////////////////////////////////
// write one bucket as "x, y, z" lines

fn write_bucket(filename: &str, buffer: &[f32]) -> Result<()> {

    let f = File::create(filename).chain_err(|| format!("creating {:}", filename))?;
    let mut w = BufWriter::new(f);

    write_vertices(&mut w, buffer).chain_err(|| format!("writing {:}", filename))?;
    w.flush()?;

    println!("wrote {:}", filename);

    Ok(())

}

fn write_buffers(prefix: &str, buffers: &VertexBuffers) -> Result<()> {

    for &(color, suffix) in &[(ColorClass::Acute, "acute"),
                              (ColorClass::Obtuse, "obtuse")] {

        let filename = format!("{:}_{:}.txt", prefix, suffix);

        write_bucket(&filename, buffers.get(color))?;

    }

    Ok(())

}

//////////////////////////////////////////////////////////////////////

fn run() -> Result<()> {

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: {:?} SCENEFILE", args[0]);
        std::process::exit(1);
    }

    let filename = Path::new(&args[1]);

    let basename = match filename.file_stem() {
        None => "output",
        Some(os_str) => os_str.to_str().unwrap_or("output")
    };

    let ss = SceneSpec::parse_file(filename)?;

    debug!("scene: {:?}", ss);

    let seed = ss.seed_config().build()?;
    let subdivider = ss.subdivider()?;

    let generation = subdivider.run_seed(seed)?;

    let exported = export(&generation.main, &ss.export_options())?;

    let counts = exported.buffers.counts();

    println!("depth {:}: {:} acute, {:} obtuse",
             generation.depth, counts.acute, counts.obtuse);

    write_buffers(basename, &exported.buffers)?;

    let protagonist = if generation.protagonist.is_empty() {
        None
    } else {
        let buffers = VertexBuffers::from_triangles(&generation.protagonist);
        write_buffers(&format!("{:}_protagonist", basename), &buffers)?;
        Some(buffers)
    };

    let pdffile = basename.to_owned() + ".pdf";

    render_pdf(&pdffile, &Preview {
        main: &exported.buffers,
        protagonist: protagonist.as_ref(),
        hole: exported.omitted,
    })?;

    println!("");
    println!("wrote {:}", pdffile);

    Ok(())

}

quick_main!(run);
