//! netcanvas: interactive canvas views of network datasets.
//!
//! This crate renders four coordinated WASM canvas views over three JSON
//! datasets: a force-directed network, a dendrogram, a radial tree, and an
//! adjacency matrix with selectable, animated row orders. Each view loads
//! its dataset independently; a failed load leaves only that view showing
//! a placeholder.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen_futures::spawn_local;

pub mod components;
pub mod data;
pub mod error;

pub use components::force_graph::ForceGraphCanvas;
pub use components::matrix::{build, AdjacencyMatrix, MatrixCanvas, OrderKey};
pub use components::theme::Theme;
pub use components::tree::{TreeCanvas, TreeMode};
pub use data::graph::Graph;
pub use data::tree::TreeNode;
pub use error::{InvalidGraphError, LoadError, ViewError};

use data::loader::fetch_json;

/// Dataset locations, by convention one file per view family.
pub const NETWORK_FILE: &str = "data/net1.json";
pub const TREE_FILE: &str = "data/tree1.json";
pub const ADJACENCY_FILE: &str = "data/sample.json";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("netcanvas: logging initialized");
}

/// Per-view load state: pending, loaded, or failed.
type ViewResult<T> = Option<Result<T, ViewError>>;

/// Main application component: one section per dataset.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Network Visualization" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<main>
			<h1>"Network Visualization"</h1>
			<NetworkSection />
			<TreeSection />
			<MatrixSection />
		</main>
	}
}

/// Shown in place of a view whose dataset failed to load or validate.
#[component]
fn ViewPlaceholder(error: ViewError) -> impl IntoView {
	view! {
		<div class="view-placeholder">
			<p>{error.to_string()}</p>
		</div>
	}
}

/// Force-directed network view over the network dataset.
#[component]
fn NetworkSection() -> impl IntoView {
	let loaded: RwSignal<ViewResult<Graph>> = RwSignal::new(None);

	spawn_local(async move {
		let result = match fetch_json::<Graph>(NETWORK_FILE).await {
			Ok(graph) => match graph.validate() {
				Ok(()) => {
					info!(
						"netcanvas: loaded {} with {} nodes, {} links",
						NETWORK_FILE,
						graph.nodes.len(),
						graph.links.len()
					);
					Ok(graph)
				}
				Err(err) => Err(ViewError::from(err)),
			},
			Err(err) => Err(ViewError::from(err)),
		};
		if let Err(ref err) = result {
			warn!("netcanvas: network view unavailable: {err}");
		}
		loaded.set(Some(result));
	});

	view! {
		<section class="view-section network-section">
			<h2>"Force-directed network"</h2>
			{move || match loaded.get() {
				None => view! { <p class="view-loading">"Loading…"</p> }.into_any(),
				Some(Err(error)) => view! { <ViewPlaceholder error /> }.into_any(),
				Some(Ok(graph)) => {
					let data = Signal::derive(move || graph.clone());
					view! { <ForceGraphCanvas data width=Some(800.0) height=Some(800.0) /> }
						.into_any()
				}
			}}
		</section>
	}
}

/// Dendrogram and radial views, fed by one load of the tree dataset.
#[component]
fn TreeSection() -> impl IntoView {
	let loaded: RwSignal<ViewResult<TreeNode>> = RwSignal::new(None);

	spawn_local(async move {
		let result = fetch_json::<TreeNode>(TREE_FILE).await.map_err(ViewError::from);
		match &result {
			Ok(tree) => info!(
				"netcanvas: loaded {} with {} nodes ({} leaves)",
				TREE_FILE,
				tree.node_count(),
				tree.leaf_count()
			),
			Err(err) => warn!("netcanvas: tree views unavailable: {err}"),
		}
		loaded.set(Some(result));
	});

	view! {
		<section class="view-section tree-section">
			<h2>"Hierarchy"</h2>
			{move || match loaded.get() {
				None => view! { <p class="view-loading">"Loading…"</p> }.into_any(),
				Some(Err(error)) => view! { <ViewPlaceholder error /> }.into_any(),
				Some(Ok(tree)) => view! {
					<TreeCanvas data=tree.clone() mode=TreeMode::Dendrogram />
					<TreeCanvas data=tree mode=TreeMode::Radial />
				}
				.into_any(),
			}}
		</section>
	}
}

/// Adjacency matrix view; the matrix is built once in the load
/// continuation, so a rejected graph never reaches the canvas.
#[component]
fn MatrixSection() -> impl IntoView {
	let loaded: RwSignal<ViewResult<AdjacencyMatrix>> = RwSignal::new(None);

	spawn_local(async move {
		let result = match fetch_json::<Graph>(ADJACENCY_FILE).await {
			Ok(graph) => match build(&graph) {
				Ok(matrix) => {
					info!(
						"netcanvas: loaded {} with {} nodes ({} occupied cells)",
						ADJACENCY_FILE,
						matrix.n(),
						matrix.occupied_cells().count()
					);
					Ok(matrix)
				}
				Err(err) => Err(ViewError::from(err)),
			},
			Err(err) => Err(ViewError::from(err)),
		};
		if let Err(ref err) = result {
			warn!("netcanvas: matrix view unavailable: {err}");
		}
		loaded.set(Some(result));
	});

	view! {
		<section class="view-section matrix-section">
			<h2>"Adjacency matrix"</h2>
			{move || match loaded.get() {
				None => view! { <p class="view-loading">"Loading…"</p> }.into_any(),
				Some(Err(error)) => view! { <ViewPlaceholder error /> }.into_any(),
				Some(Ok(matrix)) => view! { <MatrixCanvas matrix /> }.into_any(),
			}}
		</section>
	}
}
