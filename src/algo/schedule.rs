//! Schedule activities with precedence constraints using the [critical path
//! method].
//!
//! Vertices of a directed acyclic graph are activities and an edge `(u, v)`
//! means that `u` must finish before `v` can start. Given the duration of each
//! activity, the scheduler computes the earliest and latest start and end
//! times of every activity, the minimal duration of the whole project and the
//! critical activities, i.e., those that cannot be delayed without delaying
//! the project.
//!
//! The computation works on a copy of the graph extended with two virtual
//! activities with zero duration: [`Activity::Start`] preceding every
//! activity without prerequisites and [`Activity::End`] following every
//! activity that nothing depends on. The copy is available as
//! [`Schedule::network`].
//!
//! [critical path method]: https://en.wikipedia.org/wiki/Critical_path_method
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//!
//! use grafo::{algo::Schedule, DiGraph};
//!
//! let mut graph = DiGraph::new();
//! graph
//!     .extend_with_edges([
//!         ("design", "backend", ()),
//!         ("design", "frontend", ()),
//!         ("backend", "release", ()),
//!         ("frontend", "release", ()),
//!     ])
//!     .unwrap();
//!
//! let durations = HashMap::from([
//!     ("design", 3),
//!     ("backend", 5),
//!     ("frontend", 2),
//!     ("release", 1),
//! ]);
//!
//! let schedule = Schedule::on(&graph).run(&durations).unwrap();
//!
//! assert_eq!(schedule.total_duration(), &9);
//! assert_eq!(
//!     schedule.critical_activities().collect::<Vec<_>>(),
//!     vec![&"design", &"backend", &"release"]
//! );
//! assert_eq!(schedule.times(&"frontend").unwrap().slack(), 3);
//! ```

use std::{collections::HashMap, hash::BuildHasher, hash::Hash};

use indexmap::IndexMap;
use thiserror::Error;

use crate::{
    common::FxIndexMap,
    core::{marker::Directed, weight::Weight, EdgeSet, GraphBase, Label, Neighbors, VertexSet},
    graph::DiGraph,
};

mod builder;
mod critical_path;

pub use builder::ScheduleBuilder;

/// Vertex of the network the schedule is computed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Activity<V> {
    /// Virtual activity preceding every other activity.
    Start,
    /// An activity of the input graph.
    Task(V),
    /// Virtual activity following every other activity.
    End,
}

impl<V> Activity<V> {
    pub fn task(&self) -> Option<&V> {
        match self {
            Activity::Task(task) => Some(task),
            _ => None,
        }
    }

    pub fn is_virtual(&self) -> bool {
        !matches!(self, Activity::Task(_))
    }
}

/// Timing of a single activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityTimes<W> {
    pub duration: W,
    pub earliest_start: W,
    pub earliest_end: W,
    pub latest_start: W,
    pub latest_end: W,
}

impl<W: Weight> ActivityTimes<W> {
    /// How much the activity can be delayed without delaying the project.
    pub fn slack(&self) -> W {
        self.latest_start.clone() - self.earliest_start.clone()
    }

    pub fn is_critical(&self) -> bool {
        self.earliest_start == self.latest_start
    }
}

/// Source of activity durations.
pub trait Durations<V, W> {
    fn duration(&self, activity: &V) -> Option<W>;
}

impl<V, W, S> Durations<V, W> for HashMap<V, W, S>
where
    V: Hash + Eq,
    W: Clone,
    S: BuildHasher,
{
    fn duration(&self, activity: &V) -> Option<W> {
        self.get(activity).cloned()
    }
}

impl<V, W, S> Durations<V, W> for IndexMap<V, W, S>
where
    V: Hash + Eq,
    W: Clone,
    S: BuildHasher,
{
    fn duration(&self, activity: &V) -> Option<W> {
        self.get(activity).cloned()
    }
}

impl<V, W, D> Durations<V, W> for &D
where
    D: Durations<V, W> + ?Sized,
{
    fn duration(&self, activity: &V) -> Option<W> {
        (**self).duration(activity)
    }
}

/// Durations given by a function.
///
/// Returned by [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

/// Creates a duration source from a function.
pub fn from_fn<V, W, F>(f: F) -> FromFn<F>
where
    F: Fn(&V) -> Option<W>,
{
    FromFn(f)
}

impl<V, W, F> Durations<V, W> for FromFn<F>
where
    F: Fn(&V) -> Option<W>,
{
    fn duration(&self, activity: &V) -> Option<W> {
        (self.0)(activity)
    }
}

/// Result of the critical path method.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct Schedule<V, W> {
    // In topological order, starting with `Activity::Start` and ending with
    // `Activity::End`.
    times: FxIndexMap<Activity<V>, ActivityTimes<W>>,
    network: DiGraph<Activity<V>, ()>,
}

impl<V, W> Schedule<V, W>
where
    V: Label,
    W: Weight,
{
    /// Minimal time needed to finish all activities.
    pub fn total_duration(&self) -> &W {
        &self.times[&Activity::End].earliest_end
    }

    /// Times of an activity of the input graph.
    pub fn times(&self, activity: &V) -> Option<&ActivityTimes<W>> {
        self.times.get(&Activity::Task(activity.clone()))
    }

    /// Times of all activities including the virtual ones, in topological
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&Activity<V>, &ActivityTimes<W>)> + '_ {
        self.times.iter()
    }

    /// Activities of the input graph with zero slack, in topological order.
    pub fn critical_activities(&self) -> impl Iterator<Item = &V> + '_ {
        self.times
            .iter()
            .filter(|(_, times)| times.is_critical())
            .filter_map(|(activity, _)| activity.task())
    }

    /// The input graph extended with the virtual start and end activities.
    pub fn network(&self) -> &DiGraph<Activity<V>, ()> {
        &self.network
    }
}

/// The error encountered during a [`Schedule`] run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error<V> {
    /// The precedence graph contains a cycle, hence it has no topological
    /// order.
    #[error("graph is not a DAG, vertex {vertex:?} lies on a cycle")]
    NotADag { vertex: V },

    /// No duration was given for the activity.
    #[error("missing duration of activity {activity:?}")]
    MissingDuration { activity: V },
}

/// Computes the schedule of activities given by `graph` with `durations`.
///
/// Same as `Schedule::on(graph).run(durations)`.
pub fn schedule_activities<G, D, W>(
    durations: D,
    graph: &G,
) -> Result<Schedule<G::Vertex, W>, Error<G::Vertex>>
where
    G: GraphBase<EdgeType = Directed> + VertexSet + EdgeSet + Neighbors,
    D: Durations<G::Vertex, W>,
    W: Weight,
{
    Schedule::on(graph).run(durations)
}
