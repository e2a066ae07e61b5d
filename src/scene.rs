//////////////////////////////////////////////////////////////////////
// scene files: one keyword per line, '#' comments, e.g.
//
//   source decagon depth 7
//   radius 0.75
//   translate -0.25 0
//   protagonist 0
//   omit 9

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use phf::phf_map;

use crate::errors::*;
use crate::export::ExportOptions;
use crate::geometry::*;
use crate::seed::SeedConfig;
use crate::subdivider::TileSubdivider;

// 0-input function generating a seed configuration
pub type SeedFunc = fn() -> SeedConfig;

// define a lookup table matching strings to seed presets
pub const VALID_SOURCES: phf::Map<&'static str, SeedFunc> = phf_map! {
    "decagon" => SeedConfig::decagon,
    "wedge" => SeedConfig::wedge,
};

static YES_NO: phf::Map<&'static str, bool> = phf_map! {
    "yes" => true,
    "no" => false,
    "true" => true,
    "false" => false,
};

//////////////////////////////////////////////////////////////////////
// macro for pulling typed values out of a token list

macro_rules! parse_tokens {

    // finalizer - no more input to match, just error if remaining
    // input or return collected outputs
    ($it:ident { } -> { $($tuple:ident,)* } ) => (
        match $it.next() {
            Some(value) => Err(format!("found extra token(s) starting with \"{:}\"", value)),
            None => Ok(($($tuple),*))
        }
    );

    // string literal
    ($it:ident { $str:literal, $($ts:tt)* } -> { $($tuple:ident,)* } ) => (
        match $it.next() {
            None => Err(format!("missing token \"{:}\"", $str) ),
            Some(value) => if value == &$str {
                parse_tokens!( $it { $($ts)* } -> { $($tuple,)* } )
            } else {
                Err(format!("unmatched string literal: expected \"{:}\" but got \"{:}\"", $str, value))
            }
        }
    );

    // string map
    ($it:ident { $name:ident from $map:expr, $($ts:tt)* } -> { $($tuple:ident,)* } ) => (
        match $it.next() {
            None => Err(format!("missing token for {:}", stringify!($name)) ),
            Some(&value) => {
                if let Some(&k) = $map.get(value) {
                    let $name = (value.to_string(), k);
                    parse_tokens!( $it { $($ts)* } -> { $($tuple,)* $name, } )
                } else {
                    let mut extended: Vec<&str> = Vec::new();
                    extended.extend($map.keys());
                    extended.sort();
                    Err(format!("unexpected value \"{:}\" for {:}, expected one of: {{\"{:}\"}}",
                                value, stringify!($name), extended.join("\", \"") ))
                }
            }
        }
    );

    // name, type pair
    ($it:ident { $name:ident : $type:ident, $($ts:tt)* } -> { $($tuple:ident,)* } ) => (
        match $it.next() {
            None => Err(format!("missing token for {:}", stringify!($name)) ),
            Some(value) => if let Ok($name) = value.parse::<$type>() {
                parse_tokens!( $it { $($ts)* } -> { $($tuple,)* $name, } )
            } else {
                Err(format!("error parsing {:} as type {:}",
                            value, stringify!($type)))
            }
        }
    );

    // Entry point
    ($a:expr, { $($ts:tt)+ }) => (
        {
            let mut it = $a.iter();
            parse_tokens!( it { $($ts)* , } -> { } )
        }
    );

}

//////////////////////////////////////////////////////////////////////
// each field may be set by exactly one line of the file

macro_rules! copy_field {

    ($dst:ident, $src:ident, $field:ident) => (
        if $src.$field.is_some() {
            if $dst.$field.is_some() {
                bail!("{:} is already set", stringify!($field));
            }
            $dst.$field = $src.$field;
        }
    )

}

macro_rules! ensure_field {

    ($qs:ident, $fvec:ident, $field:ident) => (
        if $qs.$field.is_none() {
            $fvec.push(stringify!($field));
        }
    )

}

//////////////////////////////////////////////////////////////////////
// an overall scene specification

#[derive(Debug, Default)]
pub struct SceneSpec {
    pub source: Option<(String, SeedFunc)>, // seed preset
    pub depth: Option<i64>,                 // subdivision depth for source
    pub seed_count: Option<usize>,          // override preset wedge count
    pub radius: Option<f64>,                // override preset radius
    pub rotation: Option<f64>,              // radians
    pub translation: Option<Vec2d>,         // offset of the fan apex
    pub protagonist: Option<usize>,         // seed wedge tracked apart
    pub omit: Option<usize>,                // final triangle left out of export
    pub validate: Option<bool>,             // check seeds for degeneracy
}

impl SceneSpec {

    pub fn new() -> SceneSpec {
        Default::default()
    }

    pub fn update(&mut self, other: SceneSpec) -> Result<()> {

        copy_field!(self, other, source);
        copy_field!(self, other, depth);
        copy_field!(self, other, seed_count);
        copy_field!(self, other, radius);
        copy_field!(self, other, rotation);
        copy_field!(self, other, translation);
        copy_field!(self, other, protagonist);
        copy_field!(self, other, omit);
        copy_field!(self, other, validate);

        Ok(())

    }

    fn parse_keyword(keyword: &str, rest: &[&str]) -> Result<SceneSpec> {

        let mut update = SceneSpec::new();

        match keyword {

            "source" => {

                let (source, depth) = parse_tokens!(rest, {
                    source from VALID_SOURCES,
                    "depth",
                    depth : i64
                })?;

                update.source = Some(source);
                update.depth = Some(depth);

            },

            "seed_count" => {

                let count = parse_tokens!(rest, { count: usize })?;

                update.seed_count = Some(count);

            },

            "radius" => {

                let radius = parse_tokens!(rest, { radius: f64 })?;

                update.radius = Some(radius);

            },

            "rotation_rad" | "rotation_deg" => {

                let mut angle = parse_tokens!(rest, { angle: f64 })?;

                if keyword.ends_with("deg") {
                    angle *= DEG;
                }

                update.rotation = Some(angle);

            },

            "translate" => {

                let (x, y) = parse_tokens!(rest, { x: f64, y: f64 })?;

                update.translation = Some(Vec2d::new(x, y));

            },

            "protagonist" => {

                let index = parse_tokens!(rest, { index: usize })?;

                update.protagonist = Some(index);

            },

            "omit" => {

                let index = parse_tokens!(rest, { index: usize })?;

                update.omit = Some(index);

            },

            "validate" => {

                let (_, flag) = parse_tokens!(rest, { flag from YES_NO })?;

                update.validate = Some(flag);

            },

            _ => {
                bail!("unrecognized keyword");
            }

        };

        Ok(update)

    }

    pub fn update_from(&mut self, line: &str) -> Result<()> {

        let mut trimmed = line.trim();

        if let Some(pos) = trimmed.find('#') {
            trimmed = &trimmed[0..pos];
        }

        if trimmed.trim().is_empty() {
            return Ok(());
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();

        let keyword = tokens[0];
        let rest = &tokens[1..];

        let update = Self::parse_keyword(keyword, rest).chain_err(
            || format!("while parsing keyword {:}", keyword))?;

        self.update(update)

    }

    pub fn parse(filename: &str, istr: &mut impl BufRead) -> Result<SceneSpec> {

        let mut ss = SceneSpec::new();
        let mut lineno = 0;

        loop {

            let mut line = String::new();

            lineno += 1;

            let len = istr.read_line(&mut line).chain_err(|| format!("{:}:{:}: read error", filename, lineno))?;

            if len == 0 {
                break;
            }

            ss.update_from(line.as_str()).chain_err(|| format!("{:}:{:}: parse error", filename, lineno))?;

        }

        let mut unset_fields = Vec::new();

        ensure_field!(ss, unset_fields, source);
        ensure_field!(ss, unset_fields, depth);

        if !unset_fields.is_empty() {
            bail!("{:}: the following field(s) were unset: {:}",
                  filename, unset_fields.as_slice().join(", "));
        }

        Ok(ss)

    }

    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<SceneSpec> {

        let path = path.as_ref();
        let filename = path.to_string_lossy();

        let f = File::open(path).chain_err(|| format!("opening {:}", filename))?;
        let mut reader = BufReader::new(f);

        Self::parse(&filename, &mut reader)

    }

    //////////////////////////////////////////////////
    // turn the parsed fields into the pieces the pipeline runs on

    pub fn seed_config(&self) -> SeedConfig {

        let mut cfg = match &self.source {
            Some((_, func)) => func(),
            None => SeedConfig::default()
        };

        if let Some(count) = self.seed_count {
            cfg.count = count;
        }

        if let Some(radius) = self.radius {
            cfg.radius = radius;
        }

        if let Some(rotation) = self.rotation {
            cfg.rotation = rotation;
        }

        if let Some(translation) = self.translation {
            cfg.translation = translation;
        }

        cfg.protagonist = self.protagonist;

        cfg

    }

    pub fn subdivider(&self) -> Result<TileSubdivider> {

        let depth = self.depth.unwrap_or(0);

        Ok(TileSubdivider::from_signed(depth)?
           .validating(self.validate.unwrap_or(false)))

    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions { omit: self.omit }
    }

}

#[cfg(test)]
mod tests {

    use super::*;

    fn parse_str(text: &str) -> Result<SceneSpec> {
        SceneSpec::parse("test.scene", &mut text.as_bytes())
    }

    // full message including the chained causes
    fn chain_text(e: &Error) -> String {
        e.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(": ")
    }

    #[test]
    fn parses_full_scene() {

        let ss = parse_str("
            # every keyword at once
            source decagon depth 4
            radius 0.75   # smaller fan
            translate -0.25 0.0
            rotation_deg 90
            protagonist 0
            omit 76
            validate yes
        ").unwrap();

        assert_eq!(ss.depth, Some(4));
        assert_eq!(ss.omit, Some(76));

        let cfg = ss.seed_config();

        assert_eq!(cfg.count, 10);
        assert_eq!(cfg.radius, 0.75);
        assert_eq!(cfg.translation, Vec2d::new(-0.25, 0.0));
        assert!((cfg.rotation - PI / 2.0).abs() < 1e-12);
        assert_eq!(cfg.protagonist, Some(0));

        let sub = ss.subdivider().unwrap();
        assert_eq!(sub.depth(), 4);

        assert_eq!(ss.export_options(), ExportOptions { omit: Some(76) });

    }

    #[test]
    fn wedge_source_uses_preset() {

        let ss = parse_str("source wedge depth 0\n").unwrap();

        assert_eq!(ss.seed_config(), SeedConfig::wedge());
        assert_eq!(ss.subdivider().unwrap().depth(), 0);

    }

    #[test]
    fn missing_source_is_reported() {

        let e = parse_str("radius 2.0\n").unwrap_err();

        assert!(chain_text(&e).contains("source, depth"));

    }

    #[test]
    fn duplicate_keyword_is_rejected() {

        let e = parse_str("source decagon depth 2\nrotation_rad 0.1\nrotation_deg 5\n").unwrap_err();

        let text = chain_text(&e);
        assert!(text.contains("test.scene:3"));
        assert!(text.contains("rotation is already set"));

    }

    #[test]
    fn bad_tokens_are_rejected() {

        let cases = [
            "source hexagon depth 2",
            "source decagon deep 2",
            "source decagon depth two",
            "radius",
            "radius 1.0 2.0",
            "validate maybe",
            "sparkle 3",
        ];

        for case in cases.iter() {
            assert!(parse_str(case).is_err(), "accepted: {:}", case);
        }

    }

    #[test]
    fn unknown_source_lists_choices() {

        let e = parse_str("source hexagon depth 2").unwrap_err();

        assert!(chain_text(&e).contains("\"decagon\", \"wedge\""));

    }

    #[test]
    fn negative_depth_is_invalid_argument() {

        let ss = parse_str("source decagon depth -3").unwrap();

        match ss.subdivider() {
            Err(Error(ErrorKind::InvalidArgument(_), _)) => {},
            other => panic!("expected InvalidArgument, got {:?}", other)
        }

    }

}
