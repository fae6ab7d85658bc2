//! Plain text formats for loading and storing graphs.
//!
//! Three line-oriented formats are supported, tokens are separated by
//! whitespace and blank lines are ignored everywhere:
//!
//! * **Counted** ([`read_counted`]): a header `<vertex count> <edge count>`
//!   followed by exactly that many `<origin> <destination> <weight>` lines.
//!   The vertices are `0..vertex count`.
//! * **Edge list** ([`read_edge_list`], [`write_edge_list`]): every line is
//!   `<origin> [<destination> [<weight>]]`. Vertices are created on demand, a
//!   line with a single token declares a (possibly isolated) vertex.
//! * **Activities** ([`read_activities`]): every line is
//!   `<activity> <duration> [<prerequisite>,<prerequisite>,...]`, suitable
//!   for [scheduling](crate::algo::schedule).
//!
//! # Examples
//!
//! ```
//! use grafo::{format, DiGraph};
//!
//! let input = "0 1 5\n1 2 7\n3\n";
//! let graph: DiGraph<u32, i32> = format::read_edge_list(input.as_bytes()).unwrap();
//!
//! assert_eq!(graph.vertex_count(), 4);
//! assert_eq!(graph.cost(&1, &2), Ok(&7));
//!
//! let mut output = Vec::new();
//! format::write_edge_list(&graph, &mut output).unwrap();
//! assert_eq!(String::from_utf8(output).unwrap(), input);
//! ```

use std::{
    fmt::Display,
    io::{self, BufRead, Write},
    str::FromStr,
};

use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    common::FxIndexMap,
    core::{error::GraphError, weight::Weight, Label},
    graph::DiGraph,
};

/// The error encountered while reading a graph.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read input")]
    Io(#[from] io::Error),

    /// The line does not have the expected shape. Lines are numbered from 1.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl Error {
    fn parse(line: usize, message: impl Display) -> Self {
        Error::Parse {
            line,
            message: message.to_string(),
        }
    }

    fn graph<V: Label>(line: usize, error: GraphError<V>) -> Self {
        Self::parse(line, error)
    }
}

fn parse_token<T>(token: &str, line: usize, what: &str) -> Result<T, Error>
where
    T: FromStr,
    T::Err: Display,
{
    token
        .parse()
        .map_err(|error| Error::parse(line, format_args!("invalid {what} {token:?}: {error}")))
}

// Non-blank lines with their 1-based numbers.
fn lines<R: BufRead>(reader: R) -> impl Iterator<Item = Result<(usize, String), Error>> {
    reader
        .lines()
        .enumerate()
        .map(|(i, line)| line.map(|line| (i + 1, line)).map_err(Error::from))
        .filter(|line| !matches!(line, Ok((_, line)) if line.trim().is_empty()))
}

/// Reads a graph in the counted format.
pub fn read_counted<W, R>(reader: R) -> Result<DiGraph<u32, W>, Error>
where
    W: FromStr,
    W::Err: Display,
    R: BufRead,
{
    let mut lines = lines(reader);

    let (header_line, header) = lines
        .next()
        .transpose()?
        .ok_or_else(|| Error::parse(1, "missing header"))?;

    let mut tokens = header.split_whitespace();
    let (Some(vertex_count), Some(edge_count), None) = (tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(Error::parse(
            header_line,
            "header must be `<vertex count> <edge count>`",
        ));
    };

    let vertex_count: u32 = parse_token(vertex_count, header_line, "vertex count")?;
    let edge_count: usize = parse_token(edge_count, header_line, "edge count")?;

    let mut graph = DiGraph::with_capacity(vertex_count as usize, edge_count);

    for vertex in 0..vertex_count {
        graph
            .add_vertex(vertex)
            .map_err(|error| Error::graph(header_line, error))?;
    }

    let mut last_line = header_line;

    for _ in 0..edge_count {
        let (line, content) = lines.next().transpose()?.ok_or_else(|| {
            Error::parse(
                last_line,
                format_args!("expected {edge_count} edges, found {}", graph.edge_count()),
            )
        })?;

        let mut tokens = content.split_whitespace();
        let (Some(origin), Some(destination), Some(weight), None) =
            (tokens.next(), tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(Error::parse(
                line,
                "edge must be `<origin> <destination> <weight>`",
            ));
        };

        let origin = parse_token(origin, line, "origin")?;
        let destination = parse_token(destination, line, "destination")?;
        let weight = parse_token(weight, line, "weight")?;

        graph
            .add_edge(origin, destination, weight)
            .map_err(|error| Error::graph(line, error))?;

        last_line = line;
    }

    if let Some((line, _)) = lines.next().transpose()? {
        return Err(Error::parse(line, "unexpected content after the edges"));
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "counted graph loaded"
    );

    Ok(graph)
}

/// Reads a graph in the edge list format.
///
/// An edge without weight gets `W::default()`. Repeated edges are skipped,
/// the first occurrence determines the weight.
pub fn read_edge_list<V, W, R>(reader: R) -> Result<DiGraph<V, W>, Error>
where
    V: Label + FromStr,
    V::Err: Display,
    W: FromStr + Default,
    W::Err: Display,
    R: BufRead,
{
    let mut graph = DiGraph::new();

    for line in lines(reader) {
        let (line, content) = line?;
        let mut tokens = content.split_whitespace();

        let origin: V = match tokens.next() {
            Some(token) => parse_token(token, line, "vertex")?,
            None => continue,
        };

        if !graph.contains_vertex(&origin) {
            graph
                .add_vertex(origin.clone())
                .map_err(|error| Error::graph(line, error))?;
        }

        let Some(destination) = tokens.next() else {
            continue;
        };

        let destination: V = parse_token(destination, line, "vertex")?;

        let weight = match tokens.next() {
            Some(token) => parse_token(token, line, "weight")?,
            None => W::default(),
        };

        if tokens.next().is_some() {
            return Err(Error::parse(line, "too many tokens"));
        }

        if !graph.contains_vertex(&destination) {
            graph
                .add_vertex(destination.clone())
                .map_err(|error| Error::graph(line, error))?;
        }

        if graph.contains_edge(&origin, &destination) {
            trace!(line, ?origin, ?destination, "repeated edge skipped");
            continue;
        }

        graph
            .add_edge(origin, destination, weight)
            .map_err(|error| Error::graph(line, error))?;
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "edge list loaded"
    );

    Ok(graph)
}

/// Writes the graph in the edge list format.
///
/// Edges come first in their enumeration order, followed by the vertices
/// without any incident edge. Other vertices are implied by the edges.
pub fn write_edge_list<V, W, Wr>(graph: &DiGraph<V, W>, mut writer: Wr) -> io::Result<()>
where
    V: Label + Display,
    W: Display,
    Wr: Write,
{
    for edge in graph.edges() {
        writeln!(
            writer,
            "{} {} {}",
            edge.origin, edge.destination, edge.weight
        )?;
    }

    for vertex in graph.isolated_vertices() {
        writeln!(writer, "{vertex}")?;
    }

    writer.flush()
}

/// Reads activities with their durations and prerequisites.
///
/// Activity names are trimmed and lower-cased. Returns the precedence graph,
/// with a zero weight edge from every prerequisite to the activity, and the
/// durations in the order the activities were declared.
///
/// A prerequisite may be declared later in the input than the activity that
/// depends on it, but it must be declared. A repeated declaration of an
/// activity is ignored.
pub fn read_activities<W, R>(reader: R) -> Result<(DiGraph<String, W>, FxIndexMap<String, W>), Error>
where
    W: Weight + FromStr,
    W::Err: Display,
    R: BufRead,
{
    let mut graph = DiGraph::new();
    let mut durations = FxIndexMap::default();
    let mut prerequisites = Vec::new();

    for line in lines(reader) {
        let (line, content) = line?;
        let mut tokens = content.split_whitespace();

        let (Some(activity), Some(duration)) = (tokens.next(), tokens.next()) else {
            return Err(Error::parse(
                line,
                "activity must be `<name> <duration> [<prerequisites>]`",
            ));
        };

        let activity = activity.trim().to_lowercase();
        let duration: W = parse_token(duration, line, "duration")?;
        let required = tokens.next().map(str::to_owned);

        if tokens.next().is_some() {
            return Err(Error::parse(line, "too many tokens"));
        }

        if durations.contains_key(&activity) {
            trace!(line, %activity, "repeated activity ignored");
            continue;
        }

        graph
            .add_vertex(activity.clone())
            .map_err(|error| Error::graph(line, error))?;
        durations.insert(activity.clone(), duration);

        if let Some(required) = required {
            prerequisites.push((line, activity, required));
        }
    }

    for (line, activity, required) in prerequisites {
        for prerequisite in required.split(',') {
            let prerequisite = prerequisite.trim().to_lowercase();

            if prerequisite.is_empty() {
                continue;
            }

            if !graph.contains_vertex(&prerequisite) {
                return Err(Error::parse(
                    line,
                    format_args!("unknown prerequisite {prerequisite:?} of {activity:?}"),
                ));
            }

            if graph.contains_edge(&prerequisite, &activity) {
                continue;
            }

            graph
                .add_edge(prerequisite, activity.clone(), W::zero())
                .map_err(|error| Error::graph(line, error))?;
        }
    }

    debug!(
        activities = graph.vertex_count(),
        dependencies = graph.edge_count(),
        "activities loaded"
    );

    Ok((graph, durations))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use assert_matches::assert_matches;

    use crate::{
        algo::schedule::schedule_activities,
        infra::testing::check_consistency,
    };

    use super::*;

    #[test]
    fn counted() {
        let input = "4 3\n0 1 5\n1 2 -2\n\n2 0 1\n";
        let graph: DiGraph<u32, i32> = read_counted(Cursor::new(input)).unwrap();

        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.cost(&1, &2), Ok(&-2));
        assert_eq!(graph.isolated_vertices().collect::<Vec<_>>(), vec![&3]);
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn counted_missing_edges() {
        let input = "3 3\n0 1 5\n1 2 1\n";

        assert_matches!(
            read_counted::<i32, _>(Cursor::new(input)),
            Err(Error::Parse { line: 3, .. })
        );
    }

    #[test]
    fn counted_vertex_out_of_range() {
        let input = "2 1\n0 2 5\n";

        assert_matches!(
            read_counted::<i32, _>(Cursor::new(input)),
            Err(Error::Parse { line: 2, .. })
        );
    }

    #[test]
    fn counted_invalid_header() {
        assert_matches!(
            read_counted::<i32, _>(Cursor::new("3\n")),
            Err(Error::Parse { line: 1, .. })
        );
        assert_matches!(
            read_counted::<i32, _>(Cursor::new("")),
            Err(Error::Parse { line: 1, .. })
        );
    }

    #[test]
    fn edge_list() {
        let input = "a b 3\nb c\na b 10\n\nd\nc a 1\n";
        let graph: DiGraph<String, u32> = read_edge_list(Cursor::new(input)).unwrap();

        assert_eq!(
            graph.vertices().map(String::as_str).collect::<Vec<_>>(),
            vec!["a", "b", "c", "d"]
        );
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.cost(&"a".into(), &"b".into()), Ok(&3));
        assert_eq!(graph.cost(&"b".into(), &"c".into()), Ok(&0));
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn edge_list_invalid_weight() {
        let input = "0 1 1\n1 2 heavy\n";
        let result = read_edge_list::<u32, i32, _>(Cursor::new(input));

        let Err(Error::Parse { line, message }) = result else {
            panic!("expected parse error");
        };

        assert_eq!(line, 2);
        assert!(message.contains("heavy"), "{message}");
    }

    #[test]
    fn edge_list_written() {
        let mut graph = DiGraph::new();
        graph
            .extend_with_edges([(2, 0, 4), (0, 1, 6)])
            .unwrap();
        graph.add_vertex(7).unwrap();
        graph.add_vertex(8).unwrap();
        graph.add_edge(8, 8, 1).unwrap();

        let mut output = Vec::new();
        write_edge_list(&graph, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "2 0 4\n0 1 6\n8 8 1\n7\n"
        );
    }

    #[test]
    fn edge_list_reread() {
        let mut graph = DiGraph::<u32, i32>::new();
        graph
            .extend_with_edges([(0, 1, 1), (1, 2, 2), (0, 2, 5)])
            .unwrap();
        graph.add_vertex(3).unwrap();

        let mut output = Vec::new();
        write_edge_list(&graph, &mut output).unwrap();
        let reread: DiGraph<u32, i32> = read_edge_list(output.as_slice()).unwrap();

        assert_eq!(
            reread.vertices().collect::<Vec<_>>(),
            graph.vertices().collect::<Vec<_>>()
        );
        assert_eq!(
            reread.edges().map(|e| e.cloned()).collect::<Vec<_>>(),
            graph.edges().map(|e| e.cloned()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn activities() {
        let input = "Design 3\n  backend 5 design\nfrontend 2 DESIGN\nrelease 1 Backend,frontend\n";
        let (graph, durations) = read_activities::<u32, _>(Cursor::new(input)).unwrap();

        assert_eq!(
            durations.iter().map(|(a, d)| (a.as_str(), *d)).collect::<Vec<_>>(),
            vec![("design", 3), ("backend", 5), ("frontend", 2), ("release", 1)]
        );
        assert!(graph.contains_edge(&"design".into(), &"frontend".into()));
        assert_eq!(graph.in_degree(&"release".into()), Ok(2));
        assert_eq!(graph.cost(&"backend".into(), &"release".into()), Ok(&0));

        let schedule = schedule_activities(&durations, &graph).unwrap();
        assert_eq!(schedule.total_duration(), &9);
    }

    #[test]
    fn activities_forward_prerequisite() {
        let input = "b 2 a\na 1\n";
        let (graph, _) = read_activities::<u32, _>(Cursor::new(input)).unwrap();

        assert!(graph.contains_edge(&"a".into(), &"b".into()));
    }

    #[test]
    fn activities_unknown_prerequisite() {
        let input = "a 1\nb 2 a,c\n";

        assert_matches!(
            read_activities::<u32, _>(Cursor::new(input)),
            Err(Error::Parse { line: 2, .. })
        );
    }

    #[test]
    fn activities_missing_duration() {
        assert_matches!(
            read_activities::<u32, _>(Cursor::new("a\n")),
            Err(Error::Parse { line: 1, .. })
        );
    }
}
