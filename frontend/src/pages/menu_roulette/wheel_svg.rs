use shared::wheel_geometry::{wheel_segments, Point};
use shared::wheel_layout::WheelDimensions;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WheelSvgProps {
    pub items: Vec<String>,
    pub emoji: String,
    pub rotation: f64,
    pub dimensions: WheelDimensions,
}

#[function_component(WheelSvg)]
pub fn wheel_svg(props: &WheelSvgProps) -> Html {
    let dims = props.dimensions;
    let size = dims.size;
    let half = dims.radius();
    let center = Point { x: half, y: half };

    let segments = use_memo((props.items.len(), size), move |(count, _)| {
        wheel_segments(*count, center, half)
    });

    let pointer_style = format!(
        "top: {}px; width: 0; height: 0; border-left: {w}px solid transparent; border-right: {w}px solid transparent; \
         border-top: {}px solid #1f2937; filter: drop-shadow(0 3px 6px rgba(0,0,0,0.2));",
        dims.pointer_top(),
        dims.pointer_height,
        w = dims.pointer_half_width,
    );
    let ring_style = format!(
        "width: {o}px; height: {o}px; padding: {}px; background: linear-gradient(145deg, #1f2937, #111827); \
         box-shadow: 0 12px 40px rgba(0,0,0,0.15), 0 4px 12px rgba(0,0,0,0.1);",
        dims.border_width,
        o = dims.outer_size(),
    );
    let wheel_style = format!(
        "width: {s}px; height: {s}px; transform: rotate({}deg);",
        props.rotation,
        s = size,
    );
    let hub_style = format!(
        "width: {d}px; height: {d}px; font-size: {}px; box-shadow: 0 2px 12px rgba(0,0,0,0.12), 0 0 0 3px rgba(255,255,255,0.5);",
        dims.hub_font_size,
        d = dims.hub_diameter,
    );

    html! {
        <div class="relative mb-6 md:mb-10">
            <div class="absolute left-1/2 -translate-x-1/2 z-20" style={pointer_style} />

            <div class="rounded-full relative" style={ring_style}>
                <div class="rounded-full relative overflow-hidden" style={wheel_style}>
                    <svg
                        class="absolute inset-0"
                        width={size.to_string()}
                        height={size.to_string()}
                        viewBox={format!("0 0 {} {}", size, size)}
                    >
                        { for segments.iter().map(|segment| html! {
                            <path
                                key={segment.index}
                                d={segment.path.clone()}
                                fill={segment.color}
                                stroke="rgba(255,255,255,0.4)"
                                stroke-width="1"
                            />
                        }) }
                    </svg>

                    { for segments.iter().zip(props.items.iter()).map(|(segment, item)| {
                        let label_style = format!(
                            "left: {}px; top: {}px; transform: translate(-50%, -50%) rotate({}deg);",
                            segment.label.x,
                            segment.label.y,
                            segment.label_rotation,
                        );
                        html! {
                            <div key={segment.index} class="absolute pointer-events-none" style={label_style}>
                                <span
                                    class="font-bold text-white whitespace-nowrap"
                                    style={format!("font-size: {}px; text-shadow: 0 1px 4px rgba(0,0,0,0.4);", dims.label_font_size)}
                                >
                                    { item.clone() }
                                </span>
                            </div>
                        }
                    }) }

                    <div
                        class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 bg-white rounded-full z-10 flex items-center justify-center"
                        style={hub_style}
                    >
                        { props.emoji.clone() }
                    </div>
                </div>
            </div>
        </div>
    }
}
