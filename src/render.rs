//! CPU raster surfaces built on `vello_cpu`.

pub(crate) mod gradient;
pub(crate) mod surface;

use crate::foundation::core::{Point, Rect};

pub(crate) fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

pub(crate) fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}
