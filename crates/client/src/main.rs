use shared::config::{Placement, TooltipSettings};
use ui_components::{HoverTooltip, PopoverOptions, TriggerOptions};
use yew::prelude::*;

const SETTINGS: &str = include_str!("../settings.ron");

const PLACEMENTS: [Placement; 4] = [
    Placement::Top,
    Placement::Right,
    Placement::Bottom,
    Placement::Left,
];

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("starting tooltip demo");
    yew::Renderer::<App>::new().render();
}

#[derive(Properties, PartialEq)]
struct ChipProps {
    label: AttrValue,
}

#[function_component(Chip)]
fn chip(props: &ChipProps) -> Html {
    html! {
        <span class="px-3 py-2 rounded-md border border-neutral-600 text-sm cursor-default">
            {props.label.clone()}
        </span>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let settings = use_state(|| TooltipSettings::load_or_default(SETTINGS));
    let disabled = use_state_eq(|| false);

    let toggle_disabled = {
        let disabled = disabled.clone();
        Callback::from(move |_: MouseEvent| disabled.set(!*disabled))
    };

    let defaults = PopoverOptions::default()
        .placement(settings.placement)
        .offset(settings.offset);

    let trigger = TriggerOptions::default().delay(settings.delay_ms);

    let placements = PLACEMENTS
        .iter()
        .map(|placement| {
            let label = placement.to_string();
            html! {
                <HoverTooltip
                    content={html! { {format!("Opens on the {label}")} }}
                    trigger={trigger.clone()}
                    popover={defaults.clone().placement(*placement)}
                >
                    <Chip label={label.clone()} />
                </HoverTooltip>
            }
        })
        .collect::<Html>();

    html! {
        <div class="flex flex-col gap-12 p-16">
            <section class="flex flex-row gap-8">
                <HoverTooltip
                    content={html! { "Shown after the configured delay" }}
                    trigger={trigger.clone()}
                    popover={defaults.clone().id("default-tip")}
                >
                    <Chip label="Default" />
                </HoverTooltip>
                <HoverTooltip
                    content={html! { "Shown almost immediately" }}
                    trigger={trigger.clone().delay(50)}
                    popover={defaults.clone()}
                >
                    <Chip label="Fast" />
                </HoverTooltip>
                <HoverTooltip
                    content={html! { "Disable me with the button" }}
                    trigger={trigger.clone().disabled(*disabled)}
                    popover={defaults.clone()}
                >
                    <Chip label={if *disabled { "Disabled" } else { "Enabled" }} />
                </HoverTooltip>
                <button
                    class="px-3 py-2 rounded-md bg-neutral-600 hover:bg-neutral-700 text-sm"
                    onclick={toggle_disabled}
                >
                    {"Toggle"}
                </button>
            </section>
            <section class="flex flex-row gap-16 p-8">
                {placements}
            </section>
        </div>
    }
}
