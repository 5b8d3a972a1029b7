//! Minimal SVG document model: circles, polylines, and text.
//!
//! Shapes are built by value with chained setters and collected into a
//! [`Document`], whose `Display` impl writes the complete file:
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8" ?>
//! <svg xmlns="http://www.w3.org/2000/svg" version="1.1">
//!   <circle cx="20" cy="20" r="5" fill="white"/>
//! </svg>
//! ```
//!
//! Numbers print with six significant digits via
//! [`format_significant`](tc_core::format_significant).

use std::fmt;

use tc_core::format_significant;

/// Writes an `f64` the way every SVG attribute expects it.
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_significant(self.0, 6))
    }
}

// ── Attribute values ──────────────────────────────────────────────────────────

/// A paint value: a named colour, `rgb(...)`, `rgba(...)`, or `none`.
///
/// In settings documents a colour is a string, a `[r, g, b]` array, or an
/// `[r, g, b, opacity]` array.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(untagged))]
pub enum Color {
    #[default]
    None,
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::Named(name.to_owned())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::None => f.write_str("none"),
            Color::Named(name) => f.write_str(name),
            Color::Rgb(r, g, b) => write!(f, "rgb({r},{g},{b})"),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({r},{g},{b},{})", Num(*a)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Arcs,
    Bevel,
    Miter,
    MiterClip,
    Round,
}

impl fmt::Display for LineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineJoin::Arcs => "arcs",
            LineJoin::Bevel => "bevel",
            LineJoin::Miter => "miter",
            LineJoin::MiterClip => "miter-clip",
            LineJoin::Round => "round",
        })
    }
}

// ── Paint properties ──────────────────────────────────────────────────────────

/// Fill and stroke attributes shared by every shape.  Unset attributes are
/// omitted from the output.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathProps {
    pub fill:         Option<Color>,
    pub stroke:       Option<Color>,
    pub stroke_width: Option<f64>,
    pub line_cap:     Option<LineCap>,
    pub line_join:    Option<LineJoin>,
}

impl fmt::Display for PathProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(fill) = &self.fill {
            write!(f, " fill=\"{fill}\"")?;
        }
        if let Some(stroke) = &self.stroke {
            write!(f, " stroke=\"{stroke}\"")?;
        }
        if let Some(width) = self.stroke_width {
            write!(f, " stroke-width=\"{}\"", Num(width))?;
        }
        if let Some(cap) = self.line_cap {
            write!(f, " stroke-linecap=\"{cap}\"")?;
        }
        if let Some(join) = self.line_join {
            write!(f, " stroke-linejoin=\"{join}\"")?;
        }
        Ok(())
    }
}

/// Chained paint setters for any shape carrying [`PathProps`].
pub trait Styled: Sized {
    fn props_mut(&mut self) -> &mut PathProps;

    fn fill(mut self, color: impl Into<Color>) -> Self {
        self.props_mut().fill = Some(color.into());
        self
    }

    fn stroke(mut self, color: impl Into<Color>) -> Self {
        self.props_mut().stroke = Some(color.into());
        self
    }

    fn stroke_width(mut self, width: f64) -> Self {
        self.props_mut().stroke_width = Some(width);
        self
    }

    fn line_cap(mut self, cap: LineCap) -> Self {
        self.props_mut().line_cap = Some(cap);
        self
    }

    fn line_join(mut self, join: LineJoin) -> Self {
        self.props_mut().line_join = Some(join);
        self
    }
}

// ── Shapes ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub props:  PathProps,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius, props: PathProps::default() }
    }
}

impl Styled for Circle {
    fn props_mut(&mut self) -> &mut PathProps {
        &mut self.props
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{}/>",
            Num(self.center.x),
            Num(self.center.y),
            Num(self.radius),
            self.props
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub props:  PathProps,
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points, props: PathProps::default() }
    }
}

impl Styled for Polyline {
    fn props_mut(&mut self) -> &mut PathProps {
        &mut self.props
    }
}

impl fmt::Display for Polyline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<polyline points=\"")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{},{}", Num(p.x), Num(p.y))?;
        }
        write!(f, "\"{}/>", self.props)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub position:    Point,
    pub offset:      Point,
    pub font_size:   u32,
    pub font_family: Option<String>,
    pub font_weight: Option<String>,
    pub data:        String,
    pub props:       PathProps,
}

impl Text {
    pub fn new(position: Point, data: impl Into<String>) -> Self {
        Self {
            position,
            offset: Point::default(),
            font_size: 1,
            font_family: None,
            font_weight: None,
            data: data.into(),
            props: PathProps::default(),
        }
    }

    pub fn offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    pub fn font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn font_weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = Some(weight.into());
        self
    }
}

impl Styled for Text {
    fn props_mut(&mut self) -> &mut PathProps {
        &mut self.props
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<text{} x=\"{}\" y=\"{}\" dx=\"{}\" dy=\"{}\" font-size=\"{}\"",
            self.props,
            Num(self.position.x),
            Num(self.position.y),
            Num(self.offset.x),
            Num(self.offset.y),
            self.font_size
        )?;
        if let Some(family) = &self.font_family {
            write!(f, " font-family=\"{family}\"")?;
        }
        if let Some(weight) = &self.font_weight {
            write!(f, " font-weight=\"{weight}\"")?;
        }
        f.write_str(">")?;
        for c in self.data.chars() {
            match c {
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&apos;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '&' => f.write_str("&amp;")?,
                c => write!(f, "{c}")?,
            }
        }
        f.write_str("</text>")
    }
}

// ── Document ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Circle(Circle),
    Polyline(Polyline),
    Text(Text),
}

impl From<Circle> for Element {
    fn from(c: Circle) -> Self {
        Element::Circle(c)
    }
}

impl From<Polyline> for Element {
    fn from(p: Polyline) -> Self {
        Element::Polyline(p)
    }
}

impl From<Text> for Element {
    fn from(t: Text) -> Self {
        Element::Text(t)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Circle(c) => fmt::Display::fmt(c, f),
            Element::Polyline(p) => fmt::Display::fmt(p, f),
            Element::Text(t) => fmt::Display::fmt(t, f),
        }
    }
}

/// Shapes in paint order: later elements draw over earlier ones.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"<?xml version="1.0" encoding="UTF-8" ?>"#)?;
        writeln!(f, r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1">"#)?;
        for element in &self.elements {
            writeln!(f, "  {element}")?;
        }
        f.write_str("</svg>")
    }
}
