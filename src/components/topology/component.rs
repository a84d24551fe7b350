use leptos::prelude::*;
use web_sys::{MouseEvent, WheelEvent};

use super::scene::{MARKER_RADIUS, Scene, SceneLine, SceneMarker};
use super::tooltip::TooltipState;
use super::types::TopologySnapshot;
use super::viewport::ViewportController;

/// Interactive grid diagram: edges as lines, nodes as colored markers with
/// labels, a shared hover tooltip, drag-to-pan and wheel zoom.
///
/// Each snapshot with node data replaces the scene and resets the view to the
/// full logical extent. A snapshot without nodes leaves the current scene up.
#[component]
pub fn TopologyDiagram(#[prop(into)] data: Signal<TopologySnapshot>) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let svg_ref = NodeRef::<leptos::svg::Svg>::new();
	let viewport = RwSignal::new(ViewportController::new());
	let tooltip = RwSignal::new(TooltipState::default());

	let scene = Memo::new(move |prev: Option<&Option<Scene>>| {
		data.with(|snap| Scene::build(snap.nodes.as_ref(), &snap.edges))
			.or_else(|| prev.cloned().flatten())
	});

	Effect::new(move |_| {
		if data.with(|snap| snap.nodes.is_none()) {
			return;
		}
		viewport.update(ViewportController::reset);
		if tooltip.with_untracked(TooltipState::is_visible) {
			tooltip.set(TooltipState::Hidden);
		}
	});

	// Pointer position relative to the surface, plus the surface's rendered size.
	let surface_point = move |ev: &MouseEvent| {
		let svg = svg_ref.get()?;
		let rect = svg.get_bounding_client_rect();
		Some((
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
			rect.width(),
			rect.height(),
		))
	};

	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y, _, _)) = surface_point(&ev) else {
			return;
		};
		viewport.update(|vp| vp.pointer_down(x, y));
	};

	let on_mousemove = move |ev: MouseEvent| {
		if !viewport.with_untracked(ViewportController::is_panning) {
			return;
		}
		let Some((x, y, w, h)) = surface_point(&ev) else {
			return;
		};
		viewport.update(|vp| {
			vp.pointer_move(x, y, w, h);
		});
	};

	let on_mouseup = move |_: MouseEvent| {
		viewport.update(ViewportController::pointer_up);
	};

	let on_mouseleave = move |_: MouseEvent| {
		viewport.update(ViewportController::pointer_leave);
	};

	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		viewport.update(|vp| {
			vp.wheel(ev.delta_y());
		});
	};

	let draw_line = |line: &SceneLine| {
		view! {
			<line
				class="grid-edge"
				x1=line.x1.to_string()
				y1=line.y1.to_string()
				x2=line.x2.to_string()
				y2=line.y2.to_string()
				stroke="#888"
				stroke-width=line.stroke_width().to_string()
			/>
		}
	};

	let draw_marker = move |marker: &SceneMarker| {
		let (label_x, label_y) = marker.label_pos();
		let hovered = marker.clone();
		let on_marker_move = move |ev: MouseEvent| {
			let Some(container) = container_ref.get() else {
				return;
			};
			let rect = container.get_bounding_client_rect();
			let (px, py) = (
				ev.client_x() as f64 - rect.left(),
				ev.client_y() as f64 - rect.top(),
			);
			tooltip.update(|t| t.show(&hovered, px, py));
		};
		let on_marker_leave = move |_: MouseEvent| {
			if tooltip.with_untracked(TooltipState::is_visible) {
				tooltip.update(TooltipState::hide);
			}
		};

		view! {
			<g class="grid-node">
				<circle
					class="grid-marker"
					cx=marker.x.to_string()
					cy=marker.y.to_string()
					r=MARKER_RADIUS.to_string()
					fill=marker.color
					on:mousemove=on_marker_move
					on:mouseleave=on_marker_leave
				/>
				<text
					class="grid-label"
					x=label_x.to_string()
					y=label_y.to_string()
					font-size="12"
				>
					{marker.id.clone()}
				</text>
			</g>
		}
	};

	view! {
		<div
			node_ref=container_ref
			class="topology-diagram"
			style="position: relative; width: 100%; height: 100%; overflow: hidden;"
		>
			<svg
				node_ref=svg_ref
				class="topology-surface"
				width="100%"
				height="100%"
				viewBox=move || viewport.with(|vp| vp.view.to_attr())
				style=move || format!("display: block; cursor: {};", viewport.with(ViewportController::cursor))
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
			>
				<g class="grid-edges">
					{move || {
						scene.with(|s| {
							s.as_ref().map(|s| s.lines.iter().map(draw_line).collect_view())
						})
					}}
				</g>
				<g class="grid-nodes">
					{move || {
						scene.with(|s| {
							s.as_ref().map(|s| s.markers.iter().map(draw_marker).collect_view())
						})
					}}
				</g>
			</svg>
			<div class="topology-tooltip" style=move || tooltip.with(TooltipState::style)>
				{move || tooltip.with(|t| t.content().map(|c| c.lines().join("\n")))}
			</div>
		</div>
	}
}
