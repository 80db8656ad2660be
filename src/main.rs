//! Trunk entry point for the occupancy dashboard.

use leptos::prelude::*;
use occupancy_sunburst::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App);
}
