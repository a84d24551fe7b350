//! Client for the dispatch solver backend.

use gloo_net::http::Request;
use log::{error, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::topology::{EdgeRecord, NodeMap, TopologySnapshot};
use crate::config::DashboardConfig;

/// Failure talking to the solver backend.
#[derive(Debug, Error)]
pub enum ApiError {
	/// Network failure or a body that could not be decoded.
	#[error("request failed: {0}")]
	Transport(#[from] gloo_net::Error),
	/// Non-2xx status without a readable solver response.
	#[error("server responded with status {0}")]
	Status(u16),
	/// The solver ran and reported an error.
	#[error("{0}")]
	Solver(String),
}

/// Solver back ends the server can dispatch to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Solver {
	/// Local classical solver.
	Gurobi,
	/// Quantum hybrid constrained quadratic model.
	Cqm,
	/// Quantum annealing nonlinear sampler.
	Nlq,
}

impl Solver {
	/// Selector order.
	pub const ALL: [Solver; 3] = [Solver::Gurobi, Solver::Cqm, Solver::Nlq];

	/// Name the backend expects.
	pub fn as_str(self) -> &'static str {
		match self {
			Solver::Gurobi => "FullModel-Gurobi",
			Solver::Cqm => "FullModel-CQM",
			Solver::Nlq => "FullModel-NLQ",
		}
	}

	/// Human readable label.
	pub fn label(self) -> &'static str {
		match self {
			Solver::Gurobi => "Gurobi (local)",
			Solver::Cqm => "CQM (quantum hybrid)",
			Solver::Nlq => "Nonlinear sampler (quantum)",
		}
	}

	/// Parses a backend solver name.
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|s| s.as_str() == name)
	}
}

#[derive(Serialize)]
struct SetSolverRequest<'a> {
	solver: &'a str,
}

/// Body of a `/run-solver` response.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RunSolverResponse {
	/// Whether the solver produced a plan.
	#[serde(default)]
	pub ok: bool,
	/// Failure message when `ok` is false.
	#[serde(default)]
	pub error: Option<String>,
	/// Human readable dispatch actions.
	#[serde(default)]
	pub actions: Vec<String>,
	/// Node positions keyed by id.
	#[serde(default)]
	pub nodes: Option<NodeMap>,
	/// Edges to draw, when the solver picks them itself.
	#[serde(default)]
	pub primary_edges: Option<Vec<EdgeRecord>>,
	/// Flows above the solver's reporting threshold.
	#[serde(default)]
	pub flows: Vec<EdgeRecord>,
}

/// Successful solver run.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverRun {
	/// Human readable dispatch actions.
	pub actions: Vec<String>,
	/// What the diagram should show.
	pub topology: TopologySnapshot,
}

impl RunSolverResponse {
	/// Splits the response into a run or the solver's error message.
	pub fn into_result(self) -> Result<SolverRun, ApiError> {
		if !self.ok {
			return Err(ApiError::Solver(
				self.error.unwrap_or_else(|| "solver failed".to_owned()),
			));
		}
		Ok(SolverRun {
			actions: self.actions,
			topology: TopologySnapshot {
				nodes: self.nodes,
				edges: self.primary_edges.unwrap_or(self.flows),
			},
		})
	}
}

/// Tells the backend which solver to use for subsequent runs.
pub async fn set_solver(config: &DashboardConfig, solver: Solver) -> Result<(), ApiError> {
	info!("selecting solver {}", solver.as_str());
	let response = Request::post(&config.endpoint("set-solver"))
		.json(&SetSolverRequest {
			solver: solver.as_str(),
		})?
		.send()
		.await?;
	if !response.ok() {
		return Err(ApiError::Status(response.status()));
	}
	Ok(())
}

/// Runs the selected solver and returns its plan.
pub async fn run_solver(config: &DashboardConfig) -> Result<SolverRun, ApiError> {
	info!("running solver");
	let response = Request::post(&config.endpoint("run-solver")).send().await?;
	let status = response.status();
	// Solver failures come back as `{ok: false, error}`, sometimes with a 5xx.
	let result = match response.json::<RunSolverResponse>().await {
		Ok(body) => body.into_result(),
		Err(_) if !response.ok() => Err(ApiError::Status(status)),
		Err(err) => Err(err.into()),
	};
	result.inspect_err(|err| error!("solver run failed: {err}"))
}
