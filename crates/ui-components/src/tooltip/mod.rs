use gloo::timers::callback::Timeout;
use shared::constants::DEFAULT_DELAY_MS;
use yew::{html::Scope, prelude::*};

use crate::popover::{HoverBox, Popover, PopoverOptions};

pub mod hover;
use hover::{HoverIntent, Scheduler};

/// How the trigger region decides when to open the tooltip.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TriggerOptions {
    /// Hover delay in milliseconds, `DEFAULT_DELAY_MS` if unset.
    pub delay: Option<u32>,
    /// Forces the tooltip closed.
    pub disabled: bool,
    /// Ignored. The open state is always derived from the hover and
    /// `disabled`.
    pub open: Option<bool>,
}

impl TriggerOptions {
    pub fn delay(mut self, delay_ms: u32) -> Self {
        self.delay = Some(delay_ms);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay.unwrap_or(DEFAULT_DELAY_MS)
    }
}

#[derive(Properties, PartialEq)]
pub struct HoverTooltipProps {
    /// The trigger.
    #[prop_or_default]
    pub children: Children,
    /// Tooltip body.
    pub content: Html,
    #[prop_or_default]
    pub trigger: TriggerOptions,
    #[prop_or_default]
    pub popover: PopoverOptions,
}

#[derive(Clone, Debug)]
pub enum Msg {
    PointerEnter,
    PointerLeave,
    DelayElapsed(u64),
}

/// Runs hover delays on browser timers, reporting back through the
/// component's message queue.
pub struct TimeoutScheduler {
    link: Scope<HoverTooltip>,
}

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, generation: u64) -> Timeout {
        let link = self.link.clone();
        Timeout::new(delay_ms, move || {
            link.send_message(Msg::DelayElapsed(generation))
        })
    }
}

/// Wraps its children so that resting the pointer on them for the trigger
/// delay shows `content` in a popover. Leaving hides it right away.
pub struct HoverTooltip {
    intent: HoverIntent<TimeoutScheduler>,
    anchor: NodeRef,
}

fn warn_open_override(trigger: &TriggerOptions) {
    if let Some(open) = trigger.open {
        log::debug!(
            "ignoring explicit tooltip open={}, open state follows hover and disabled",
            open
        );
    }
}

impl Component for HoverTooltip {
    type Message = Msg;
    type Properties = HoverTooltipProps;

    fn create(ctx: &Context<Self>) -> Self {
        let trigger = &ctx.props().trigger;
        warn_open_override(trigger);

        let scheduler = TimeoutScheduler {
            link: ctx.link().clone(),
        };

        Self {
            intent: HoverIntent::new(scheduler, trigger.delay_ms(), trigger.disabled),
            anchor: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::PointerEnter => self.intent.pointer_enter(),
            Msg::PointerLeave => self.intent.pointer_leave(),
            Msg::DelayElapsed(generation) => self.intent.delay_elapsed(generation),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let trigger = &ctx.props().trigger;
        if trigger.open != old_props.trigger.open {
            warn_open_override(trigger);
        }

        if trigger.disabled != old_props.trigger.disabled {
            log::debug!("tooltip trigger disabled: {}", trigger.disabled);
        }

        self.intent.reconfigure(trigger.delay_ms(), trigger.disabled);
        // Children or content may have changed too
        true
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if self.intent.cancel() {
            log::debug!("dropped pending tooltip activation on unmount");
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();

        let onmouseenter = link.callback(|_: MouseEvent| Msg::PointerEnter);
        let onmouseleave = link.callback(|_: MouseEvent| Msg::PointerLeave);

        html! {
            <HoverBox
                node_ref={self.anchor.clone()}
                {onmouseenter}
                {onmouseleave}
                describedby={props.popover.id.clone()}
            >
                {props.children.clone()}
                <Popover
                    open={self.intent.is_open()}
                    anchor={self.anchor.clone()}
                    options={props.popover.clone()}
                >
                    {props.content.clone()}
                </Popover>
            </HoverBox>
        }
    }
}

#[cfg(test)]
mod test {
    use super::TriggerOptions;

    #[test]
    fn test_trigger_defaults() {
        let opts = TriggerOptions::default();
        assert_eq!(opts.delay_ms(), 300);
        assert!(!opts.disabled);

        let opts = TriggerOptions::default().delay(50).disabled(true);
        assert_eq!(opts.delay_ms(), 50);
        assert!(opts.disabled);
    }
}
