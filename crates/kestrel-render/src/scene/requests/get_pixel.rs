use crate::coords::Vec2;
use crate::scene::{DrawQueue, DrawRequest};

/// Handle for a pixel read queued in a [`DrawQueue`]; redeem it against the
/// [`Readback`](crate::scene::Readback) returned by `Painter::flush`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PixelTicket(pub(crate) u32);

/// Pixel read-back payload. `pos` is in logical canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct GetPixelRequest {
    pub pos: Vec2,
    pub ticket: PixelTicket,
}

impl GetPixelRequest {
    /// Request for immediate use with `Painter::get_pixel`, outside any queue.
    #[inline]
    pub fn at(pos: Vec2) -> Self {
        Self { pos, ticket: PixelTicket(u32::MAX) }
    }
}

impl DrawQueue {
    /// Records a pixel read of whatever earlier requests left at `pos`.
    #[inline]
    pub fn push_get_pixel(&mut self, pos: Vec2) -> PixelTicket {
        let ticket = self.next_ticket();
        self.push(DrawRequest::GetPixel(GetPixelRequest { pos, ticket }));
        ticket
    }
}
