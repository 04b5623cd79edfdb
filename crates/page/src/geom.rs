//! Host-supplied geometry. The engine does no layout of its own; whoever
//! embeds it seeds document-space rectangles for the elements the scripts
//! measure, the way a browser would answer getBoundingClientRect.

use dom::Id;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub height: f32,
    pub scroll_top: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { height: 800.0, scroll_top: 0.0 }
    }
}

impl Viewport {
    /// Viewport-relative top edge, as the scripts' scroll math sees it.
    pub fn client_top(&self, rect: Rectangle) -> f32 {
        rect.y - self.scroll_top
    }

    pub fn client_bottom(&self, rect: Rectangle) -> f32 {
        rect.bottom() - self.scroll_top
    }
}

#[derive(Debug, Default)]
pub struct GeometryMap {
    rects: HashMap<Id, Rectangle>,
}

impl GeometryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, id: Id, rect: Rectangle) {
        self.rects.insert(id, rect);
    }

    pub fn rect(&self, id: Id) -> Option<Rectangle> {
        self.rects.get(&id).copied()
    }

    pub fn height(&self, id: Id) -> Option<f32> {
        self.rect(id).map(|r| r.height)
    }
}
