/// User-visible message emitted by the menu layer, e.g. when a guarded menu
/// refuses to open. Carries a stable key so hosts can localize, plus a
/// rendered fallback text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    key: String,
    text: String,
    color: (u8, u8, u8),
}

impl Notice {
    pub fn key(&self) -> &str {
        self.key.as_ref()
    }

    pub fn text(&self) -> &str {
        self.text.as_ref()
    }

    pub fn color(&self) -> (u8, u8, u8) {
        self.color
    }

    pub fn color_fixed32(&self) -> u32 {
        color_to_fixed32(self.color)
    }

    pub fn new(key: impl ToString, text: impl ToString) -> Self {
        Self {
            key: key.to_string(),
            text: text.to_string(),
            color: NOTICE_INFO_COLOR,
        }
    }

    pub fn with_color(mut self, color: (u8, u8, u8)) -> Self {
        self.color = color;
        self
    }

    /// A notice for a refused action, e.g. a failed precondition.
    pub fn error(key: impl ToString, text: impl ToString) -> Self {
        Self::new(key, text).with_color(NOTICE_ERROR_COLOR)
    }

    pub fn warning(key: impl ToString, text: impl ToString) -> Self {
        Self::new(key, text).with_color(NOTICE_WARNING_COLOR)
    }
}

pub const NOTICE_INFO_COLOR: (u8, u8, u8) = (0, 255, 255);
pub const NOTICE_WARNING_COLOR: (u8, u8, u8) = (255, 255, 0);
pub const NOTICE_ERROR_COLOR: (u8, u8, u8) = (255, 0, 0);

pub fn color_to_fixed32(color: (u8, u8, u8)) -> u32 {
    ((color.0 as u32) << 16) | ((color.1 as u32) << 8) | (color.2 as u32)
}
pub fn color_from_fixed32(mut color: u32) -> (u8, u8, u8) {
    color &= 0x00ffffff;
    ((color >> 16) as u8, (color >> 8) as u8, color as u8)
}
