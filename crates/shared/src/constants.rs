/// How long the pointer has to rest on a trigger before its tooltip opens.
pub const DEFAULT_DELAY_MS: u32 = 300;
/// Gap between the trigger and the tooltip, in pixels.
pub const DEFAULT_OFFSET_PX: u32 = 4;
