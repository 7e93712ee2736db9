pub mod popover;
pub mod tooltip;

pub use popover::{HoverBox, Popover, PopoverOptions};
pub use tooltip::{HoverTooltip, TriggerOptions};
