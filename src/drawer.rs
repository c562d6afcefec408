//! Drawer presentation
//!
//! A drawer hosts one canvas panel. Its layout is a pure function of
//! `{open, mode, side, width}`; [`CanvasDrawer`] derives those props from
//! canvas state so the drawer cannot disagree with it.

use crate::canvas::{CanvasReader, CanvasState, Panel};
use futures::{future, Stream, StreamExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerMode {
    /// Laid out in normal flow beside the content
    Inline,
    /// Fixed layer over the content
    Overlay,
}

impl DrawerMode {
    /// Overlay on viewports narrower than `breakpoint`
    pub fn for_viewport(viewport_width: u32, breakpoint: u32) -> Self {
        if viewport_width < breakpoint {
            Self::Overlay
        } else {
            Self::Inline
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawerProps {
    pub open: bool,
    pub mode: DrawerMode,
    pub side: DrawerSide,
    /// Width when open, in pixels
    pub width: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Flow,
    Fixed { side: DrawerSide },
}

/// Resolved drawer layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawerLayout {
    pub open: bool,
    /// Zero when closed; the element stays mounted
    pub width: u32,
    pub position: Position,
}

pub fn layout(props: &DrawerProps) -> DrawerLayout {
    DrawerLayout {
        open: props.open,
        width: if props.open { props.width } else { 0 },
        position: match props.mode {
            DrawerMode::Inline => Position::Flow,
            DrawerMode::Overlay => Position::Fixed { side: props.side },
        },
    }
}

/// A drawer hosting one canvas panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasDrawer {
    pub hosts: Panel,
    pub mode: DrawerMode,
    pub side: DrawerSide,
    pub width: u32,
}

impl CanvasDrawer {
    pub fn props_for(&self, state: &CanvasState) -> DrawerProps {
        DrawerProps {
            open: self.hosts != Panel::None && state.panel() == self.hosts,
            mode: self.mode,
            side: self.side,
            width: self.width,
        }
    }

    pub fn layout_for(&self, state: &CanvasState) -> DrawerLayout {
        layout(&self.props_for(state))
    }

    /// Layouts for every canvas change that affects this drawer, starting
    /// with the current one. Changes that leave the layout untouched (tab
    /// switches, other panels' targets) emit nothing.
    pub fn layouts(self, reader: CanvasReader) -> impl Stream<Item = DrawerLayout> {
        let mut last: Option<DrawerLayout> = None;
        reader.into_stream().filter_map(move |state| {
            let next = self.layout_for(&state);
            let emit = last != Some(next);
            last = Some(next);
            future::ready(emit.then_some(next))
        })
    }
}
