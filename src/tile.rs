//////////////////////////////////////////////////////////////////////
// Robinson triangles and the rule that splits each one into
// smaller Robinson triangles

use crate::errors::*;
use crate::geometry::*;

// colour classes double as the render bucket index
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy, Hash)]
pub enum ColorClass {
    Acute = 0,
    Obtuse = 1
}

impl ColorClass {

    // number of children one subdivision round produces
    pub fn num_children(self) -> usize {
        match self {
            ColorClass::Acute => 2,
            ColorClass::Obtuse => 3
        }
    }

    // interior angle at vertex a
    pub fn apex_angle(self) -> f64 {
        match self {
            ColorClass::Acute => ACUTE_APEX,
            ColorClass::Obtuse => OBTUSE_APEX
        }
    }

}

//////////////////////////////////////////////////////////////////////
// one half-tile. vertex a is always the apex; the order of b and c
// carries the orientation that keeps neighbouring splits consistent.

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Triangle {

    pub color: ColorClass,
    pub a: Point2d,
    pub b: Point2d,
    pub c: Point2d

}

impl Triangle {

    pub fn new(color: ColorClass, a: Point2d, b: Point2d, c: Point2d) -> Self {
        Triangle { color: color, a: a, b: b, c: c }
    }

    pub fn acute(a: Point2d, b: Point2d, c: Point2d) -> Self {
        Self::new(ColorClass::Acute, a, b, c)
    }

    pub fn obtuse(a: Point2d, b: Point2d, c: Point2d) -> Self {
        Self::new(ColorClass::Obtuse, a, b, c)
    }

    pub fn points(&self) -> [Point2d; 3] {
        [self.a, self.b, self.c]
    }

    //////////////////////////////////////////////////

    // append the children of this triangle to out, in the fixed
    // order the buffer layout relies on

    pub fn subdivide_into(&self, out: &mut Vec<Triangle>) {

        let (a, b, c) = (self.a, self.b, self.c);

        match self.color {

            ColorClass::Acute => {

                let p = a + (b - a) / PHI;

                out.push(Triangle::acute(c, p, b));
                out.push(Triangle::obtuse(p, c, a));

            }

            ColorClass::Obtuse => {

                let q = b + (a - b) / PHI;
                let r = b + (c - b) / PHI;

                out.push(Triangle::obtuse(r, c, a));
                out.push(Triangle::obtuse(q, r, b));
                out.push(Triangle::acute(r, q, a));

            }

        }

    }

    pub fn children(&self) -> Vec<Triangle> {

        let mut out = Vec::with_capacity(self.color.num_children());
        self.subdivide_into(&mut out);

        out

    }

    //////////////////////////////////////////////////
    // measurements

    pub fn signed_area(&self) -> f64 {
        tri_signed_area(&self.a, &self.b, &self.c)
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    // side lengths |ab|, |bc|, |ca|
    pub fn side_lengths(&self) -> [f64; 3] {
        [(self.b - self.a).norm(),
         (self.c - self.b).norm(),
         (self.a - self.c).norm()]
    }

    // angle at the apex vertex a
    pub fn apex_angle(&self) -> f64 {
        (self.b - self.a).angle(&(self.c - self.a))
    }

    // longest side over shortest side; PHI for a Robinson triangle
    pub fn side_ratio(&self) -> f64 {

        let s = self.side_lengths();

        let longest = s[0].max(s[1]).max(s[2]);
        let shortest = s[0].min(s[1]).min(s[2]);

        longest / shortest

    }

    // fails with DegenerateGeometry for non-finite or zero-area input
    pub fn validate(&self) -> Result<()> {

        let finite = self.points().iter().all(|p| p.x.is_finite() && p.y.is_finite());

        if !finite {
            bail!(ErrorKind::DegenerateGeometry(
                format!("non-finite vertex in {:?}", self)));
        }

        let s = self.side_lengths();
        let scale = s[0].max(s[1]).max(s[2]);

        if scale == 0.0 || self.area() <= 1e-12 * scale * scale {
            bail!(ErrorKind::DegenerateGeometry(
                format!("zero-area triangle {:?}", self)));
        }

        Ok(())

    }

}

#[cfg(test)]
mod tests {

    use super::*;

    fn unit_acute() -> Triangle {
        Triangle::acute(Point2d::origin(),
                        polar(1.0, -PI / 10.0),
                        polar(1.0, PI / 10.0))
    }

    fn unit_obtuse() -> Triangle {
        // apex at origin, legs of length 1 at +-54 degrees
        Triangle::obtuse(Point2d::origin(),
                         polar(1.0, -0.3 * PI),
                         polar(1.0, 0.3 * PI))
    }

    #[test]
    fn acute_split_order_and_colors() {

        let t = unit_acute();
        let kids = t.children();

        assert_eq!(kids.len(), 2);
        assert_eq!(kids[0].color, ColorClass::Acute);
        assert_eq!(kids[1].color, ColorClass::Obtuse);

        let p = t.a + (t.b - t.a) / PHI;

        assert_eq!(kids[0].points(), [t.c, p, t.b]);
        assert_eq!(kids[1].points(), [p, t.c, t.a]);

    }

    #[test]
    fn obtuse_split_order_and_colors() {

        let t = unit_obtuse();
        let kids = t.children();

        let colors: Vec<ColorClass> = kids.iter().map(|k| k.color).collect();
        assert_eq!(colors, vec![ColorClass::Obtuse, ColorClass::Obtuse, ColorClass::Acute]);

        let q = t.b + (t.a - t.b) / PHI;
        let r = t.b + (t.c - t.b) / PHI;

        assert_eq!(kids[0].points(), [r, t.c, t.a]);
        assert_eq!(kids[1].points(), [q, r, t.b]);
        assert_eq!(kids[2].points(), [r, q, t.a]);

    }

    #[test]
    fn children_keep_robinson_shape() {

        for t in &[unit_acute(), unit_obtuse()] {

            assert!((t.apex_angle() - t.color.apex_angle()).abs() < 1e-9);

            for k in t.children() {
                assert!((k.side_ratio() - PHI).abs() < 1e-9);
                assert!((k.apex_angle() - k.color.apex_angle()).abs() < 1e-9);
            }

        }

    }

    #[test]
    fn children_cover_parent_area() {

        for t in &[unit_acute(), unit_obtuse()] {
            let total: f64 = t.children().iter().map(|k| k.area()).sum();
            assert!((total - t.area()).abs() < 1e-12);
        }

    }

    #[test]
    fn validate_rejects_degenerate() {

        assert!(unit_acute().validate().is_ok());

        let p = Point2d::new(1.0, 1.0);
        let flat = Triangle::acute(p, p, Point2d::new(2.0, 2.0));

        match flat.validate() {
            Err(Error(ErrorKind::DegenerateGeometry(_), _)) => {},
            other => panic!("expected DegenerateGeometry, got {:?}", other)
        }

        let nan = Triangle::acute(Point2d::new(f64::NAN, 0.0), p, Point2d::origin());
        assert!(nan.validate().is_err());

    }

}
