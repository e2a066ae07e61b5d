//////////////////////////////////////////////////////////////////////
// seed triangles: a fan of acute triangles around a common apex

use crate::errors::*;
use crate::geometry::*;
use crate::tile::Triangle;

// a full turn holds this many 36 degree wedges
pub const MAX_SEED_COUNT: usize = 10;

// parameters for the seed fan
#[derive(Debug, PartialEq, Clone)]
pub struct SeedConfig {
    pub count: usize,               // number of wedges, 1..=10
    pub radius: f64,                // distance from apex to the other vertices
    pub rotation: f64,              // radians added to every wedge angle
    pub translation: Vec2d,         // offset applied to every vertex
    pub protagonist: Option<usize>, // wedge tracked apart from the rest
}

// seed triangles split into the main tiling and the protagonist
#[derive(Debug, PartialEq, Clone)]
pub struct Seed {
    pub main: Vec<Triangle>,
    pub protagonist: Vec<Triangle>,
}

impl Default for SeedConfig {
    fn default() -> Self { Self::decagon() }
}

impl SeedConfig {

    // ten wedges of unit radius around the origin
    pub fn decagon() -> SeedConfig {
        SeedConfig {
            count: MAX_SEED_COUNT,
            radius: 1.0,
            rotation: 0.0,
            translation: Vec2d::zeros(),
            protagonist: None,
        }
    }

    // just wedge 0 of the decagon
    pub fn wedge() -> SeedConfig {
        SeedConfig {
            count: 1,
            ..Self::decagon()
        }
    }

    pub fn check(&self) -> Result<()> {

        if self.count == 0 || self.count > MAX_SEED_COUNT {
            bail!(ErrorKind::InvalidArgument(
                format!("seed count must be in 1..={:}, got {:}",
                        MAX_SEED_COUNT, self.count)));
        }

        if !(self.radius.is_finite() && self.radius > 0.0) {
            bail!(ErrorKind::InvalidArgument(
                format!("seed radius must be positive, got {:}", self.radius)));
        }

        if !self.rotation.is_finite() ||
            !self.translation.iter().all(|v| v.is_finite()) {
            bail!(ErrorKind::InvalidArgument(
                "seed rotation and translation must be finite".to_string()));
        }

        if let Some(j) = self.protagonist {
            if j >= self.count {
                bail!(ErrorKind::InvalidArgument(
                    format!("protagonist index {:} out of range for {:} seed triangles",
                            j, self.count)));
            }
        }

        Ok(())

    }

    // wedge j spans angles (2j - 1) pi/10 .. (2j + 1) pi/10; the
    // non-apex vertices are swapped on even j so neighbouring wedges
    // mirror each other across their shared edge

    fn wedge_at(&self, j: usize) -> Triangle {

        let apex = Point2d::origin() + self.translation;

        let k = j as f64;

        let theta0 = (2.0 * k - 1.0) * PI / 10.0 + self.rotation;
        let theta1 = (2.0 * k + 1.0) * PI / 10.0 + self.rotation;

        let mut b = polar(self.radius, theta0) + self.translation;
        let mut c = polar(self.radius, theta1) + self.translation;

        if j % 2 == 0 {
            std::mem::swap(&mut b, &mut c);
        }

        Triangle::acute(apex, b, c)

    }

    // all seed triangles in wedge order
    pub fn triangles(&self) -> Result<Vec<Triangle>> {

        self.check()?;

        Ok((0..self.count).map(|j| self.wedge_at(j)).collect())

    }

    // seed triangles with the protagonist (if any) pulled out
    pub fn build(&self) -> Result<Seed> {

        let mut main = self.triangles()?;
        let mut protagonist = Vec::new();

        if let Some(j) = self.protagonist {
            protagonist.push(main.remove(j));
        }

        Ok(Seed { main: main, protagonist: protagonist })

    }

}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::tile::ColorClass;

    #[test]
    fn decagon_matches_fan_formula() {

        let tris = SeedConfig::decagon().triangles().unwrap();

        assert_eq!(tris.len(), 10);

        for (j, t) in tris.iter().enumerate() {

            assert_eq!(t.color, ColorClass::Acute);
            assert_eq!(t.a, Point2d::origin());

            let lo = polar(1.0, (2.0 * j as f64 - 1.0) * PI / 10.0);
            let hi = polar(1.0, (2.0 * j as f64 + 1.0) * PI / 10.0);

            if j % 2 == 0 {
                assert_eq!((t.b, t.c), (hi, lo));
            } else {
                assert_eq!((t.b, t.c), (lo, hi));
            }

        }

    }

    #[test]
    fn neighbours_alternate_orientation() {

        let tris = SeedConfig::decagon().triangles().unwrap();

        for pair in tris.windows(2) {
            let s0 = pair[0].signed_area().signum();
            let s1 = pair[1].signed_area().signum();
            assert_eq!(s0, -s1);
        }

    }

    #[test]
    fn seeds_are_robinson_and_tile_the_disc_fan() {

        let tris = SeedConfig::decagon().triangles().unwrap();

        let expected = 0.5 * (PI / 5.0).sin();

        for t in &tris {
            assert!(t.validate().is_ok());
            assert!((t.side_ratio() - PHI).abs() < 1e-12);
            assert!((t.area() - expected).abs() < 1e-12);
        }

    }

    #[test]
    fn radius_rotation_translation_apply() {

        let cfg = SeedConfig {
            radius: 0.75,
            rotation: PI / 2.0,
            translation: Vec2d::new(-0.25, 0.0),
            ..SeedConfig::decagon()
        };

        let tris = cfg.triangles().unwrap();

        for t in &tris {
            assert_eq!(t.a, Point2d::new(-0.25, 0.0));
            assert!(((t.b - t.a).norm() - 0.75).abs() < 1e-12);
            assert!(((t.c - t.a).norm() - 0.75).abs() < 1e-12);
        }

        // wedge 0 now straddles the +y axis
        let mid = tris[0].b + 0.5 * (tris[0].c - tris[0].b);
        assert!((mid.x + 0.25).abs() < 1e-12);
        assert!(mid.y > 0.0);

    }

    #[test]
    fn protagonist_is_split_off() {

        let cfg = SeedConfig { protagonist: Some(0), ..SeedConfig::decagon() };

        let all = cfg.triangles().unwrap();
        let seed = cfg.build().unwrap();

        assert_eq!(seed.protagonist, vec![all[0]]);
        assert_eq!(seed.main.as_slice(), &all[1..]);

    }

    #[test]
    fn wedge_is_first_decagon_triangle() {

        let w = SeedConfig::wedge().triangles().unwrap();
        let d = SeedConfig::decagon().triangles().unwrap();

        assert_eq!(w, vec![d[0]]);

    }

    #[test]
    fn bad_configs_are_rejected() {

        let bad = vec![
            SeedConfig { count: 0, ..SeedConfig::decagon() },
            SeedConfig { count: 11, ..SeedConfig::decagon() },
            SeedConfig { radius: 0.0, ..SeedConfig::decagon() },
            SeedConfig { radius: f64::NAN, ..SeedConfig::decagon() },
            SeedConfig { protagonist: Some(3), ..SeedConfig::wedge() },
        ];

        for cfg in &bad {
            match cfg.triangles() {
                Err(Error(ErrorKind::InvalidArgument(_), _)) => {},
                other => panic!("expected InvalidArgument for {:?}, got {:?}", cfg, other)
            }
        }

    }

}
