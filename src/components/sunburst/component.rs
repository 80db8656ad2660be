use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::render;
use super::state::SunburstState;
use super::theme::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use super::tree::{center_labels, legend};
use super::types::ChartNode;

#[component]
pub fn OccupancySunburst(
	root: ChartNode,
	#[prop(default = DEFAULT_WIDTH)] width: f64,
	#[prop(default = DEFAULT_HEIGHT)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<SunburstState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let frame: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let (state_init, animate_init, frame_init) = (state.clone(), animate.clone(), frame.clone());
	let building_count = root.children().len();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();
		let ratio = window.device_pixel_ratio().max(1.0);

		canvas.set_width((width * ratio) as u32);
		canvas.set_height((height * ratio) as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		let _ = ctx.scale(ratio, ratio);
		*state_init.borrow_mut() = Some(SunburstState::new(
			root.clone(),
			center_labels(building_count),
			width,
			height,
		));
		info!("Sunburst ready: {} buildings", building_count);

		let (state_anim, animate_inner, frame_inner) =
			(state_init.clone(), animate_init.clone(), frame_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				render::render(s, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let next = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
				frame_inner.set(next.ok());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			frame_init.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		}
	});

	// The frame closure holds an Rc to itself; drop it with the component
	let teardown = SendWrapper::new((state.clone(), animate.clone(), frame));
	on_cleanup(move || {
		let (state, animate, frame) = teardown.take();
		if let Some(id) = frame.take() {
			let _ = web_sys::window().unwrap().cancel_animation_frame(id);
		}
		release(&state, &animate);
		debug!("Sunburst torn down");
	});

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.pointer_moved(x, y);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.pointer_left();
		}
	};

	view! {
		<section class="occupancy-sunburst">
			<canvas
				node_ref=canvas_ref
				class="rv-inline"
				on:mousemove=on_mousemove
				on:mouseleave=on_mouseleave
				style=format!("display: inline-block; width: {width}px; height: {height}px;")
			/>
			<Legend />
		</section>
	}
}

/// Drop the frame callback and chart state, releasing the callback's Rc to itself.
fn release<C>(state: &RefCell<Option<SunburstState>>, animate: &RefCell<Option<C>>) {
	animate.borrow_mut().take();
	state.borrow_mut().take();
}

/// Static color legend shown beside the chart.
#[component]
pub fn Legend() -> impl IntoView {
	view! {
		<ul class="rv-inline legend">
			{legend()
				.iter()
				.map(|item| {
					view! {
						<li>
							<span
								class="legend-swatch"
								style=format!(
									"display: inline-block; width: 10px; height: 10px; margin-right: 4px; background: {};",
									item.color,
								)
							/>
							{item.title}
						</li>
					}
				})
				.collect_view()}
		</ul>
	}
}
