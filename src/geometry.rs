//////////////////////////////////////////////////////////////////////
// golden ratio constants and the small amount of 2D geometry the
// tiling and its preview need

pub const PHI: f64 = 1.618033988749895;
pub const INVPHI: f64 = 0.618033988749895;
pub const PI: f64 = std::f64::consts::PI;
pub const DEG: f64 = PI / 180.0;

// apex angle of an acute Robinson triangle (36 degrees)
pub const ACUTE_APEX: f64 = PI / 5.0;

// apex angle of an obtuse Robinson triangle (108 degrees)
pub const OBTUSE_APEX: f64 = 3.0 * PI / 5.0;

//////////////////////////////////////////////////////////////////////
// pull in some types from nalgebra

pub type Vec2d = nalgebra::Vector2<f64>;
pub type Vec3d = nalgebra::Vector3<f64>;
pub type Point2d = nalgebra::geometry::Point2<f64>;
pub type Translation2d = nalgebra::Translation2<f64>;
pub type Transform2d = nalgebra::Transform2<f64>;
pub type Matrix3d = nalgebra::Matrix3<f64>;

//////////////////////////////////////////////////////////////////////
// point at distance r from the origin at angle theta

pub fn polar(r: f64, theta: f64) -> Point2d {
    Point2d::new(r * theta.cos(), r * theta.sin())
}

// z component of (b - a) x (c - a); positive for counterclockwise
pub fn cross2(a: &Point2d, b: &Point2d, c: &Point2d) -> f64 {

    let u = b - a;
    let v = c - a;

    u.x * v.y - u.y * v.x

}

pub fn tri_signed_area(a: &Point2d, b: &Point2d, c: &Point2d) -> f64 {
    0.5 * cross2(a, b, c)
}

//////////////////////////////////////////////////////////////////////
// Rect2d type has lower-left p0 and upper-right p1

#[derive(Debug, Clone, PartialEq)]
pub struct Rect2d {

    pub p0: Point2d,
    pub p1: Point2d

}

impl Rect2d {

    // empty rectangle has p0 > p1
    pub fn empty() -> Self {

        let p0 = Point2d::new(f64::MAX, f64::MAX);
        let p1 = -p0;

        Rect2d { p0: p0, p1: p1 }

    }

    // new rect from points
    pub fn new(p0: Point2d, p1: Point2d) -> Self {
        Rect2d { p0: p0, p1: p1 }
    }

    pub fn is_empty(&self) -> bool {
        self.p0.x > self.p1.x || self.p0.y > self.p1.y
    }

    // expand this rect to include the given point
    pub fn expand(&mut self, p: &Point2d) {
        self.p0 = self.p0.inf(p);
        self.p1 = self.p1.sup(p);
    }

    // dimensions of this rect
    pub fn dims(&self) -> Vec2d {
        self.p1 - self.p0
    }

    // center of this rect
    pub fn center(&self) -> Point2d {
        self.p0 + 0.5*(self.p1 - self.p0)
    }

}

//////////////////////////////////////////////////////////////////////
//
// make a Transform2d that will translate and scale the given
// contents_rect (input) to the given page_rect (output).
//
// always includes vertical flip because graphics coordinate system
// is left-handed (y increases going down)

pub fn get_page_transform(contents_rect: &Rect2d,
                          page_rect: &Rect2d) -> (Transform2d, f64) {

    let cdims = contents_rect.dims();
    let pdims = page_rect.dims();

    let scl = (pdims.component_div(&cdims)).min();

    let vmid = contents_rect.center();
    let pmid = page_rect.center();

    let translate_page = Translation2d::new(pmid[0], pmid[1]);

    let scale = Transform2d::from_matrix_unchecked(
        Matrix3d::new(
            scl, 0.0, 0.0,
            0.0, -scl, 0.0,
            0.0, 0.0, 1.0
        )
    );

    let translate_points = Translation2d::new(-vmid[0], -vmid[1]);

    let transform = translate_page * scale * translate_points;

    (transform, scl)

}
