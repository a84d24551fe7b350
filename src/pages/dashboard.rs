use leptos::ev::{Event, MouseEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, warn};

use crate::api::{self, Solver};
use crate::components::topology::{TopologyDiagram, TopologySnapshot};
use crate::config::DashboardConfig;

/// State of the execution output panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RunStatus {
	#[default]
	Idle,
	Running,
	Done(Vec<String>),
	Failed(String),
}

impl RunStatus {
	pub fn lines(&self) -> Vec<String> {
		match self {
			RunStatus::Idle => Vec::new(),
			RunStatus::Running => vec!["Running solver...".to_owned()],
			RunStatus::Done(actions) => actions.iter().map(|a| format!("• {a}")).collect(),
			RunStatus::Failed(message) => vec![format!("Error: {message}")],
		}
	}
}

/// Solver controls, the action list, and the grid diagram.
#[component]
pub fn Dashboard() -> impl IntoView {
	let config = use_context::<DashboardConfig>().unwrap_or_default();
	let topology = RwSignal::new(TopologySnapshot::default());
	let status = RwSignal::new(RunStatus::Idle);

	let select_config = config.clone();
	let on_solver_change = move |ev: Event| {
		let name = event_target_value(&ev);
		let Some(solver) = Solver::from_name(&name) else {
			warn!("unknown solver {name:?}");
			return;
		};
		let config = select_config.clone();
		spawn_local(async move {
			if let Err(err) = api::set_solver(&config, solver).await {
				error!("failed to select solver {}: {err}", solver.as_str());
			}
		});
	};

	let on_execute = move |_: MouseEvent| {
		let config = config.clone();
		status.set(RunStatus::Running);
		spawn_local(async move {
			match api::run_solver(&config).await {
				Ok(run) => {
					status.set(RunStatus::Done(run.actions));
					topology.set(run.topology);
				}
				// The previous diagram stays up.
				Err(err) => status.set(RunStatus::Failed(err.to_string())),
			}
		});
	};

	view! {
		<section class="command-center">
			<div class="solver-controls">
				<label for="solverSelector">"Solver"</label>
				<select id="solverSelector" on:change=on_solver_change>
					{Solver::ALL
						.into_iter()
						.map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
						.collect_view()}
				</select>
				<button id="executeBtn" on:click=on_execute>
					"Execute Solver"
				</button>
			</div>
			<div id="execOutput" class="exec-output">
				{move || {
					status
						.with(RunStatus::lines)
						.into_iter()
						.map(|line| view! { <div>{line}</div> })
						.collect_view()
				}}
			</div>
			<div id="gridMap" class="grid-map" style="height: 700px;">
				<TopologyDiagram data=topology />
			</div>
		</section>
	}
}
