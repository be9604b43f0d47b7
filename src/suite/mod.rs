//! Benchmark case catalogue.
//!
//! # Data Flow
//! ```text
//! BenchConfig + RouterBuilder registry
//!     → Suite::new (one Simple case + one Route case per scale, per router)
//!     → Suite::filter (name pattern)
//!     → BenchCase::prepare (fixture + dispatcher, untimed)
//!     → PreparedCase::run (timed harness loop)
//!     → CaseReport
//! ```
//!
//! # Design Decisions
//! - Case names are `<Router>Simple` and `<Router>Route<request count>`
//! - Setup is always separate from the timed run
//! - Cases are built lazily so filtering never constructs unused routers

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::adapters::{builder_by_name, AdapterError, RouterBuilder};
use crate::config::{BenchConfig, FixtureConfig};
use crate::fixture::{request_count, Fixture, FixtureError};
use crate::harness::{Dispatcher, Harness, HarnessError, ResponseCheck, RunReport};

/// Errors from preparing or running a case.
#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("unknown router {0:?}")]
    UnknownRouter(String),

    #[error("fixture: {0}")]
    Fixture(#[from] FixtureError),

    #[error("router: {0}")]
    Adapter(#[from] AdapterError),

    #[error("{case}: {source}")]
    Run {
        case: String,
        #[source]
        source: HarnessError,
    },
}

/// What a case dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseKind {
    /// Single route, single request: `GET /action`.
    Simple,
    /// Full namespace x resource table with `scale` resources per namespace.
    Routes { scale: usize },
}

/// One named benchmark, not yet built.
#[derive(Clone)]
pub struct BenchCase {
    name: String,
    kind: CaseKind,
    router: Arc<dyn RouterBuilder>,
    fixture: FixtureConfig,
}

impl fmt::Debug for BenchCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BenchCase")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("router", &self.router.name())
            .finish()
    }
}

impl BenchCase {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> CaseKind {
        self.kind
    }

    pub fn router_name(&self) -> &'static str {
        self.router.name()
    }

    /// Build the fixture and dispatcher. Not timed.
    pub fn prepare(&self) -> Result<PreparedCase, SuiteError> {
        let (fixture, dispatcher) = match self.kind {
            CaseKind::Simple => (Fixture::simple(), self.router.simple()?),
            CaseKind::Routes { scale } => {
                let fixture = Fixture::with_member_id(
                    &self.fixture.namespaces,
                    scale,
                    &self.fixture.member_id,
                )?;
                let dispatcher = self.router.build(fixture.namespaces(), fixture.resources())?;
                (fixture, dispatcher)
            }
        };

        tracing::info!(case = %self.name, requests = fixture.len(), "Case prepared");
        Ok(PreparedCase {
            name: self.name.clone(),
            fixture,
            dispatcher,
        })
    }
}

/// A case with its fixture and dispatcher built, ready to time.
pub struct PreparedCase {
    name: String,
    fixture: Fixture,
    dispatcher: Box<dyn Dispatcher>,
}

impl PreparedCase {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fixture(&self) -> &Fixture {
        &self.fixture
    }

    /// Harness over this case's dispatcher and requests.
    pub fn harness(&mut self, check: ResponseCheck) -> Harness<'_, dyn Dispatcher> {
        Harness::new(self.dispatcher.as_mut(), self.fixture.requests(), check)
    }

    /// Time `iterations` dispatches.
    pub fn run(&mut self, iterations: u64, check: ResponseCheck) -> Result<CaseReport, SuiteError> {
        let name = self.name.clone();
        let requests = self.fixture.len();
        let run = self
            .harness(check)
            .run(iterations)
            .map_err(|source| SuiteError::Run {
                case: name.clone(),
                source,
            })?;
        Ok(CaseReport::new(name, requests, run))
    }
}

/// Result of one timed case.
#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    pub name: String,
    pub requests: usize,
    #[serde(flatten)]
    pub run: RunReport,
    pub ns_per_op: f64,
}

impl CaseReport {
    pub fn new(name: String, requests: usize, run: RunReport) -> Self {
        let ns_per_op = run.ns_per_op();
        Self {
            name,
            requests,
            run,
            ns_per_op,
        }
    }
}

impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Benchmark{:<28}\t{:>10}\t{:>12.1} ns/op",
            self.name, self.run.iterations, self.ns_per_op
        )
    }
}

/// The ordered set of cases for a session.
#[derive(Debug, Clone)]
pub struct Suite {
    cases: Vec<BenchCase>,
}

impl Suite {
    /// Cases for every builder named in `config.suite.routers` (all if empty).
    pub fn from_config(config: &BenchConfig) -> Result<Self, SuiteError> {
        let builders = if config.suite.routers.is_empty() {
            crate::adapters::builders()
        } else {
            config
                .suite
                .routers
                .iter()
                .map(|name| {
                    builder_by_name(name).ok_or_else(|| SuiteError::UnknownRouter(name.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?
        };
        Ok(Self::new(builders, config))
    }

    /// Cases for `builders`: `Simple` first, then one `Route` case per scale.
    pub fn new(builders: Vec<Box<dyn RouterBuilder>>, config: &BenchConfig) -> Self {
        let namespaces = config.fixture.namespaces.len();
        let mut cases = Vec::with_capacity(builders.len() * (config.suite.scales.len() + 1));

        for builder in builders {
            let router: Arc<dyn RouterBuilder> = Arc::from(builder);
            cases.push(BenchCase {
                name: format!("{}Simple", router.name()),
                kind: CaseKind::Simple,
                router: router.clone(),
                fixture: config.fixture.clone(),
            });
            for &scale in &config.suite.scales {
                cases.push(BenchCase {
                    name: format!("{}Route{}", router.name(), request_count(namespaces, scale)),
                    kind: CaseKind::Routes { scale },
                    router: router.clone(),
                    fixture: config.fixture.clone(),
                });
            }
        }

        Self { cases }
    }

    pub fn cases(&self) -> &[BenchCase] {
        &self.cases
    }

    /// Cases whose name contains `pattern`. An empty pattern selects all;
    /// a leading `Benchmark` prefix is ignored.
    pub fn filter<'a>(&'a self, pattern: &'a str) -> impl Iterator<Item = &'a BenchCase> + 'a {
        let pattern = pattern.strip_prefix("Benchmark").unwrap_or(pattern);
        self.cases.iter().filter(move |case| case.name.contains(pattern))
    }
}
