use crate::coords::Rect;
use crate::paint::Color;

use super::requests::PixelTicket;
use super::DrawRequest;

/// Draw requests recorded for one frame, in submission order.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - `clear()` and `drain()` keep the allocation for the next frame
///
/// The painter consumes requests strictly in the order they were pushed; later
/// requests composite over earlier ones.
#[derive(Debug, Default)]
pub struct DrawQueue {
    requests: Vec<DrawRequest>,
    next_ticket: u32,
}

impl DrawQueue {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops recorded requests. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.requests.clear();
        self.next_ticket = 0;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Returns requests in submission order.
    #[inline]
    pub fn requests(&self) -> &[DrawRequest] {
        &self.requests
    }

    #[inline]
    pub fn push(&mut self, request: DrawRequest) {
        self.requests.push(request);
    }

    /// Removes and yields every request in submission order.
    #[inline]
    pub fn drain(&mut self) -> impl Iterator<Item = DrawRequest> + '_ {
        self.next_ticket = 0;
        self.requests.drain(..)
    }

    #[inline]
    pub fn push_clip_rect(&mut self, rect: Rect) {
        self.push(DrawRequest::SetClipRect(rect));
    }

    #[inline]
    pub fn push_clear_clip_rect(&mut self) {
        self.push(DrawRequest::ClearClipRect);
    }

    #[inline]
    pub fn push_clear(&mut self, color: Color) {
        self.push(DrawRequest::Clear(color));
    }

    pub(super) fn next_ticket(&mut self) -> PixelTicket {
        let ticket = PixelTicket(self.next_ticket);
        self.next_ticket = self.next_ticket.wrapping_add(1);
        ticket
    }
}

/// Colors read back while flushing a queue, keyed by the ticket issued at push time.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Readback {
    colors: Vec<(PixelTicket, Color)>,
}

impl Readback {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn insert(&mut self, ticket: PixelTicket, color: Color) {
        self.colors.push((ticket, color));
    }

    #[inline]
    pub fn get(&self, ticket: PixelTicket) -> Option<Color> {
        self.colors.iter().find(|(t, _)| *t == ticket).map(|(_, c)| *c)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
