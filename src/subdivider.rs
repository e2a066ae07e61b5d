//////////////////////////////////////////////////////////////////////
// drive the subdivision rule over whole generations of triangles
//
// each round builds a fresh Vec from the previous one and drops the
// old one. vertices are never snapped or re-derived between rounds,
// so floating point error compounds with depth; at the depths used
// for display (10 rounds or fewer) it stays far below anything
// visible, but deep runs should not expect shared vertices of
// distant generations to agree bit for bit.

use crate::errors::*;
use crate::seed::Seed;
use crate::tile::{ColorClass, Triangle};

//////////////////////////////////////////////////////////////////////
// per-class triangle counts

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct ColorCounts {
    pub acute: usize,
    pub obtuse: usize,
}

impl ColorCounts {

    pub fn new(acute: usize, obtuse: usize) -> Self {
        ColorCounts { acute: acute, obtuse: obtuse }
    }

    // count the classes present in a list of triangles
    pub fn of(tris: &[Triangle]) -> Self {

        let acute = tris.iter().filter(|t| t.color == ColorClass::Acute).count();

        ColorCounts::new(acute, tris.len() - acute)

    }

    pub fn total(&self) -> usize {
        self.acute + self.obtuse
    }

    pub fn get(&self, color: ColorClass) -> usize {
        match color {
            ColorClass::Acute => self.acute,
            ColorClass::Obtuse => self.obtuse
        }
    }

    // acute -> acute + obtuse, obtuse -> acute + 2 obtuse
    pub fn next(&self) -> Self {
        ColorCounts::new(self.acute + self.obtuse,
                         self.acute + 2 * self.obtuse)
    }

    pub fn after_rounds(&self, rounds: usize) -> Self {
        (0..rounds).fold(*self, |c, _| c.next())
    }

}

//////////////////////////////////////////////////////////////////////

// depths arrive signed from config and the command line
pub fn checked_depth(depth: i64) -> Result<usize> {

    if depth < 0 {
        bail!(ErrorKind::InvalidArgument(
            format!("subdivision depth must be non-negative, got {:}", depth)));
    }

    Ok(depth as usize)

}

// one round: children of tris[0], then children of tris[1], ...
pub fn subdivide(tris: &[Triangle]) -> Vec<Triangle> {

    let mut out = Vec::with_capacity(ColorCounts::of(tris).next().total());

    for t in tris {
        t.subdivide_into(&mut out);
    }

    out

}

//////////////////////////////////////////////////////////////////////
// result of running the subdivider on a seed

#[derive(Debug, PartialEq, Clone)]
pub struct Generation {
    pub depth: usize,
    pub main: Vec<Triangle>,
    pub protagonist: Vec<Triangle>,
}

impl Generation {

    pub fn counts(&self) -> ColorCounts {
        ColorCounts::of(&self.main)
    }

    pub fn protagonist_counts(&self) -> ColorCounts {
        ColorCounts::of(&self.protagonist)
    }

}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct TileSubdivider {
    depth: usize,
    validate: bool,
}

impl TileSubdivider {

    pub fn new(depth: usize) -> Self {
        TileSubdivider { depth: depth, validate: false }
    }

    pub fn from_signed(depth: i64) -> Result<Self> {
        Ok(Self::new(checked_depth(depth)?))
    }

    // check every seed triangle for degeneracy before subdividing
    pub fn validating(self, validate: bool) -> Self {
        TileSubdivider { validate: validate, ..self }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    fn check_seed(&self, tris: &[Triangle]) -> Result<()> {

        if self.validate {
            for (i, t) in tris.iter().enumerate() {
                if let Err(e) = t.validate() {
                    warn!("rejecting seed triangle {:}", i);
                    return Err(e);
                }
            }
        }

        Ok(())

    }

    // apply the rule depth times to a list of triangles
    pub fn run(&self, seed: Vec<Triangle>) -> Result<Vec<Triangle>> {

        self.check_seed(&seed)?;

        let mut tris = seed;

        for round in 0..self.depth {

            tris = subdivide(&tris);

            let counts = ColorCounts::of(&tris);

            debug!("round {:} of {:}: {:} acute, {:} obtuse",
                   round + 1, self.depth, counts.acute, counts.obtuse);

        }

        Ok(tris)

    }

    // subdivide the main list and the protagonist in lockstep
    pub fn run_seed(&self, seed: Seed) -> Result<Generation> {

        self.check_seed(&seed.main)?;
        self.check_seed(&seed.protagonist)?;

        let mut main = seed.main;
        let mut protagonist = seed.protagonist;

        for round in 0..self.depth {

            main = subdivide(&main);
            protagonist = subdivide(&protagonist);

            let counts = ColorCounts::of(&main);

            debug!("round {:} of {:}: {:} acute, {:} obtuse ({:} protagonist)",
                   round + 1, self.depth, counts.acute, counts.obtuse,
                   protagonist.len());

        }

        let generation = Generation {
            depth: self.depth,
            main: main,
            protagonist: protagonist
        };

        let counts = generation.counts();

        info!("depth {:}: {:} acute, {:} obtuse ({:} protagonist triangles)",
              self.depth, counts.acute, counts.obtuse,
              generation.protagonist.len());

        Ok(generation)

    }

}
