use leptos::prelude::*;
use leptos_meta::Title;
use log::warn;

use crate::components::sunburst::{OccupancySunburst, SAMPLE_BUILDINGS, build, parse_buildings};

/// Occupancy dashboard: rooms occupied vs. free, grouped by building.
#[component]
pub fn Dashboard() -> impl IntoView {
	// Stands in for the buildings endpoint until a fetch layer is wired up
	let payload = Signal::derive(move || SAMPLE_BUILDINGS.to_string());

	let chart = move || {
		let root = parse_buildings(&payload.get()).and_then(|buildings| build(&buildings));
		if let Err(err) = &root {
			warn!("Cannot build occupancy chart: {err}");
		}
		root.map(|root| view! { <OccupancySunburst root=root /> })
	};

	view! {
		<Title text="Dashboard" />
		<article>
			<h1>"Dashboard"</h1>
			<ErrorBoundary fallback=|errors| {
				view! {
					<h3>"Occupancy data is unavailable"</h3>

					<p>"Errors: "</p>
					<ul>
						{move || {
							errors
								.get()
								.into_iter()
								.map(|(_, e)| view! { <li>{e.to_string()}</li> })
								.collect_view()
						}}
					</ul>
				}
			}>{chart}</ErrorBoundary>
		</article>
	}
}
