use shared::config::Placement;
use shared::constants::DEFAULT_OFFSET_PX;
use yew::prelude::*;

/// Options forwarded untouched from a tooltip to its popover.
#[derive(Clone, Debug, PartialEq)]
pub struct PopoverOptions {
    pub placement: Placement,
    /// Gap in pixels between the anchor and the popover.
    pub offset: u32,
    pub id: Option<AttrValue>,
    pub classes: Classes,
    /// Extra inline style, appended after the computed offset.
    pub style: Option<AttrValue>,
}

impl Default for PopoverOptions {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            offset: DEFAULT_OFFSET_PX,
            id: None,
            classes: Classes::new(),
            style: None,
        }
    }
}

impl PopoverOptions {
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn id(mut self, id: impl Into<AttrValue>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Classes placing the popover on `placement`'s side of the nearest
/// positioned ancestor.
pub fn placement_classes(placement: Placement) -> Classes {
    match placement {
        Placement::Top => classes!("bottom-full", "left-1/2", "-translate-x-1/2"),
        Placement::Bottom => classes!("top-full", "left-1/2", "-translate-x-1/2"),
        Placement::Left => classes!("right-full", "top-1/2", "-translate-y-1/2"),
        Placement::Right => classes!("left-full", "top-1/2", "-translate-y-1/2"),
    }
}

/// Inline style pushing the popover `offset` pixels away from its anchor.
pub fn offset_style(placement: Placement, offset: u32, extra: Option<&str>) -> String {
    // Margin goes on the side facing the anchor
    let side = match placement {
        Placement::Top => "bottom",
        Placement::Bottom => "top",
        Placement::Left => "right",
        Placement::Right => "left",
    };

    match extra {
        Some(extra) if !extra.is_empty() => format!("margin-{side}: {offset}px; {extra}"),
        _ => format!("margin-{side}: {offset}px;"),
    }
}

/// Whether the popover has something to attach to. Without an anchor the
/// popover positions against its nearest positioned ancestor.
pub fn anchor_ready(anchor: Option<&NodeRef>) -> bool {
    anchor.map_or(true, |anchor| anchor.get().is_some())
}

#[derive(Properties, PartialEq)]
pub struct PopoverProps {
    pub open: bool,
    /// Element the popover is attached to. Nothing is rendered until it is
    /// mounted.
    #[prop_or_default]
    pub anchor: Option<NodeRef>,
    #[prop_or_default]
    pub options: PopoverOptions,
    #[prop_or_default]
    pub children: Children,
}

/// Floating content anchored to the enclosing [`HoverBox`]. Renders nothing
/// while closed.
#[function_component(Popover)]
pub fn popover(props: &PopoverProps) -> Html {
    if !props.open || !anchor_ready(props.anchor.as_ref()) {
        return html! {};
    }

    let options = &props.options;
    let styles = classes!(
        options.classes.clone(),
        placement_classes(options.placement),
        "absolute",
        "z-50",
        "py-1",
        "px-2",
        "rounded",
        "bg-neutral-900",
        "text-neutral-400",
        "text-sm",
        "text-center",
        "whitespace-nowrap",
        "pointer-events-none",
    );

    let style = offset_style(options.placement, options.offset, options.style.as_deref());

    html! {
        <div
            role="tooltip"
            id={options.id.clone()}
            class={styles}
            data-placement={options.placement.to_string()}
            {style}
        >
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HoverBoxProps {
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub onmouseenter: Callback<MouseEvent>,
    #[prop_or_default]
    pub onmouseleave: Callback<MouseEvent>,
    /// Id of the element describing this box, usually its tooltip.
    #[prop_or_default]
    pub describedby: Option<AttrValue>,
    #[prop_or_default]
    pub classes: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Layout box forwarding pointer enter/leave. It is the positioning context
/// for any [`Popover`] rendered inside it.
#[function_component(HoverBox)]
pub fn hover_box(props: &HoverBoxProps) -> Html {
    let styles = classes!(props.classes.clone(), "relative", "inline-flex");

    html! {
        <div
            ref={props.node_ref.clone()}
            class={styles}
            onmouseenter={props.onmouseenter.clone()}
            onmouseleave={props.onmouseleave.clone()}
            aria-describedby={props.describedby.clone()}
        >
            {props.children.clone()}
        </div>
    }
}
