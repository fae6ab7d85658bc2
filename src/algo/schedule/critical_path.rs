use std::iter;

use tracing::{debug, trace};

use crate::{
    algo::toposort::{self, TopoSort},
    common::FxIndexMap,
    core::{
        marker::{Directed, Direction},
        weight::Weight,
        EdgeSet, GraphBase, Neighbors, VertexSet,
    },
    graph::DiGraph,
};

use super::{Activity, ActivityTimes, Durations, Error, Schedule};

pub fn critical_path<G, D, W>(
    graph: &G,
    durations: D,
) -> Result<Schedule<G::Vertex, W>, Error<G::Vertex>>
where
    G: GraphBase<EdgeType = Directed> + VertexSet + EdgeSet + Neighbors,
    D: Durations<G::Vertex, W>,
    W: Weight,
{
    let order = TopoSort::on(graph)
        .run()
        .into_vec()
        .map_err(|toposort::Error::Cycle { vertex }| {
            debug!(?vertex, "activities cannot be ordered");
            Error::NotADag { vertex }
        })?;

    let network = network(graph);

    // Start, the input in topological order and end form a topological order
    // of the network.
    let activities = iter::once(Activity::Start)
        .chain(order.into_iter().map(Activity::Task))
        .chain(iter::once(Activity::End));

    let mut times: FxIndexMap<Activity<G::Vertex>, ActivityTimes<W>> =
        FxIndexMap::with_capacity_and_hasher(network.vertex_count(), Default::default());

    for activity in activities {
        let duration = match &activity {
            Activity::Task(task) => {
                durations
                    .duration(task)
                    .ok_or_else(|| Error::MissingDuration {
                        activity: task.clone(),
                    })?
            }
            _ => W::zero(),
        };

        let earliest_start = match activity {
            Activity::Start => W::zero(),
            _ => network
                .predecessors(&activity)
                .expect("activity is in the network")
                .map(|p| times[p].earliest_end.clone())
                .reduce(|a: W, b| if b > a { b } else { a })
                .expect("every activity but start has a predecessor"),
        };

        let earliest_end = earliest_start.clone() + duration.clone();

        times.insert(
            activity,
            ActivityTimes {
                duration,
                earliest_start: earliest_start.clone(),
                earliest_end: earliest_end.clone(),
                latest_start: earliest_start,
                latest_end: earliest_end,
            },
        );
    }

    for i in (0..times.len()).rev() {
        let (activity, current) = times.get_index(i).expect("index in bounds");

        let latest_end = match activity {
            Activity::End => current.earliest_end.clone(),
            _ => network
                .successors(activity)
                .expect("activity is in the network")
                .map(|s| times[s].latest_start.clone())
                .reduce(|a: W, b| if b < a { b } else { a })
                .expect("every activity but end has a successor"),
        };

        let (activity, current) = times.get_index_mut(i).expect("index in bounds");
        current.latest_start = latest_end.clone() - current.duration.clone();
        current.latest_end = latest_end;

        trace!(
            ?activity,
            critical = current.is_critical(),
            "activity scheduled"
        );
    }

    debug!(
        activities = times.len() - 2,
        critical = times
            .iter()
            .filter(|(activity, t)| !activity.is_virtual() && t.is_critical())
            .count(),
        "schedule computed"
    );

    Ok(Schedule { times, network })
}

// Copy of the graph with the virtual start and end activities.
fn network<G>(graph: &G) -> DiGraph<Activity<G::Vertex>, ()>
where
    G: VertexSet + EdgeSet + Neighbors,
{
    let mut network = DiGraph::with_capacity(
        graph.vertex_count() + 2,
        graph.edge_count() + graph.vertex_count() + 1,
    );

    let vertices = iter::once(Activity::Start)
        .chain(graph.vertices().cloned().map(Activity::Task))
        .chain(iter::once(Activity::End));

    for vertex in vertices {
        network
            .add_vertex(vertex)
            .expect("graph vertices are unique");
    }

    let mut connect = |from, to| {
        network
            .add_edge(from, to, ())
            .expect("graph edges are unique");
    };

    for edge in graph.edges() {
        connect(
            Activity::Task(edge.origin.clone()),
            Activity::Task(edge.destination.clone()),
        );
    }

    for vertex in graph.vertices() {
        if graph.degree_directed(vertex, Direction::Incoming) == 0 {
            connect(Activity::Start, Activity::Task(vertex.clone()));
        }
    }

    for vertex in graph.vertices() {
        if graph.degree_directed(vertex, Direction::Outgoing) == 0 {
            connect(Activity::Task(vertex.clone()), Activity::End);
        }
    }

    if graph.vertex_count() == 0 {
        connect(Activity::Start, Activity::End);
    }

    network
}
